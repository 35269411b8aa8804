use crate::action::{Action, Key};
use quatcam_camera::OrientedCamera;
use std::collections::BTreeSet;

/// Input gathered between two frames.
///
/// The window layer feeds events in as they arrive; once per frame
/// [`InputState::apply`] turns them into camera updates. Pointer and scroll
/// events are queued individually, movement keys are sampled as held state.
#[derive(Debug, Clone)]
pub struct InputState {
    held: BTreeSet<Key>,
    pending: Vec<Action>,
    look_enabled: bool,
    constrain_pitch: bool,
    exit_requested: bool,
}

impl Default for InputState {
    fn default() -> Self {
        Self {
            held: BTreeSet::new(),
            pending: Vec::new(),
            look_enabled: true,
            constrain_pitch: true,
            exit_requested: false,
        }
    }
}

impl InputState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a key transition.
    pub fn key(&mut self, key: Key, pressed: bool) {
        if pressed {
            self.held.insert(key);
            if key == Key::Exit {
                self.exit_requested = true;
            }
        } else {
            self.held.remove(&key);
        }
    }

    /// Queue a pointer displacement. Dropped while look is disabled.
    pub fn pointer_moved(&mut self, dx: f32, dy: f32) {
        if !self.look_enabled {
            return;
        }
        if dx == 0.0 && dy == 0.0 {
            return;
        }
        self.pending.push(Action::Look { dx, dy });
    }

    /// Queue a scroll amount.
    pub fn scrolled(&mut self, amount: f32) {
        if amount != 0.0 {
            self.pending.push(Action::Zoom(amount));
        }
    }

    pub fn set_look_enabled(&mut self, enabled: bool) {
        self.look_enabled = enabled;
    }

    pub fn look_enabled(&self) -> bool {
        self.look_enabled
    }

    /// Allow or forbid looking past ±89°. On by default.
    pub fn set_constrain_pitch(&mut self, constrain: bool) {
        self.constrain_pitch = constrain;
    }

    pub fn exit_requested(&self) -> bool {
        self.exit_requested
    }

    pub fn is_held(&self, key: Key) -> bool {
        self.held.contains(&key)
    }

    /// Events queued since the last frame, in arrival order.
    pub fn pending(&self) -> &[Action] {
        &self.pending
    }

    /// Forget held keys, e.g. when the window loses focus.
    pub fn release_all(&mut self) {
        self.held.clear();
    }

    /// This frame's actions: queued pointer and scroll events in arrival
    /// order, followed by one movement per held direction key.
    pub fn drain_actions(&mut self) -> Vec<Action> {
        let mut actions = std::mem::take(&mut self.pending);
        actions.extend(
            self.held
                .iter()
                .filter_map(|key| key.move_direction())
                .map(Action::Move),
        );
        actions
    }

    /// Apply everything gathered since the last frame to `camera`.
    ///
    /// Call once per frame before reading the view or projection matrix.
    /// Returns the number of actions applied.
    pub fn apply(&mut self, camera: &mut OrientedCamera, dt: f32) -> usize {
        let actions = self.drain_actions();
        for action in &actions {
            action.apply(camera, dt, self.constrain_pitch);
        }
        if !actions.is_empty() {
            tracing::trace!(count = actions.len(), dt, "applied input actions");
        }
        actions.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::Vec3;
    use quatcam_camera::{CameraSettings, MoveDirection};

    fn camera_at_origin() -> OrientedCamera {
        OrientedCamera::from_settings(&CameraSettings {
            position: Vec3::ZERO,
            ..CameraSettings::default()
        })
        .unwrap()
    }

    #[test]
    fn held_keys_produce_one_move_each() {
        let mut input = InputState::new();
        input.key(Key::Forward, true);
        input.key(Key::Right, true);
        let actions = input.drain_actions();
        assert_eq!(
            actions,
            vec![
                Action::Move(MoveDirection::Forward),
                Action::Move(MoveDirection::Right),
            ]
        );

        // Still held next frame.
        assert_eq!(input.drain_actions().len(), 2);

        input.key(Key::Forward, false);
        assert_eq!(
            input.drain_actions(),
            vec![Action::Move(MoveDirection::Right)]
        );
    }

    #[test]
    fn pointer_events_keep_arrival_order() {
        let mut input = InputState::new();
        input.pointer_moved(1.0, 2.0);
        input.scrolled(3.0);
        input.pointer_moved(-4.0, 5.0);
        assert_eq!(
            input.pending(),
            &[
                Action::Look { dx: 1.0, dy: 2.0 },
                Action::Zoom(3.0),
                Action::Look { dx: -4.0, dy: 5.0 },
            ]
        );
        assert_eq!(input.drain_actions().len(), 3);
        assert!(input.pending().is_empty());
    }

    #[test]
    fn zero_events_are_not_queued() {
        let mut input = InputState::new();
        input.pointer_moved(0.0, 0.0);
        input.scrolled(0.0);
        assert!(input.pending().is_empty());
    }

    #[test]
    fn disabled_look_drops_pointer_events() {
        let mut input = InputState::new();
        input.set_look_enabled(false);
        input.pointer_moved(10.0, 10.0);
        assert!(input.pending().is_empty());
        input.set_look_enabled(true);
        input.pointer_moved(10.0, 10.0);
        assert_eq!(input.pending().len(), 1);
    }

    #[test]
    fn exit_key_requests_exit() {
        let mut input = InputState::new();
        assert!(!input.exit_requested());
        input.key(Key::Exit, true);
        assert!(input.exit_requested());
        assert!(input.drain_actions().is_empty());
    }

    #[test]
    fn apply_moves_camera_forward() {
        let mut camera = camera_at_origin();
        let mut input = InputState::new();
        input.key(Key::Forward, true);
        let applied = input.apply(&mut camera, 1.0);
        assert_eq!(applied, 1);
        assert!(camera.position().abs_diff_eq(Vec3::new(0.0, 0.0, -2.5), 1e-5));
    }

    #[test]
    fn apply_looks_before_moving() {
        let mut camera = camera_at_origin();
        let mut input = InputState::new();
        input.key(Key::Forward, true);
        // 900 * 0.1 = 90 degrees right, then one second forward.
        input.pointer_moved(900.0, 0.0);
        input.apply(&mut camera, 1.0);
        assert!(camera.position().abs_diff_eq(Vec3::new(2.5, 0.0, 0.0), 1e-3));
    }

    #[test]
    fn apply_zoom() {
        let mut camera = OrientedCamera::default();
        let mut input = InputState::new();
        input.scrolled(100.0);
        input.apply(&mut camera, 0.016);
        assert_eq!(camera.field_of_view(), 1.0);
    }

    #[test]
    fn pitch_constraint_can_be_disabled() {
        let mut camera = camera_at_origin();
        let mut input = InputState::new();
        input.set_constrain_pitch(false);
        input.pointer_moved(0.0, -1200.0);
        input.apply(&mut camera, 0.0);
        assert!(camera.up().y < 0.0);
    }

    #[test]
    fn release_all_clears_held_keys() {
        let mut input = InputState::new();
        input.key(Key::Left, true);
        input.key(Key::Backward, true);
        assert!(input.is_held(Key::Left));
        input.release_all();
        assert!(!input.is_held(Key::Left));
        assert!(input.drain_actions().is_empty());
    }
}
