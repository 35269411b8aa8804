use quatcam_camera::{MoveDirection, OrientedCamera};

/// Keys the demo reacts to, independent of any window system.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Key {
    Forward,
    Backward,
    Left,
    Right,
    Exit,
}

impl Key {
    /// Movement direction driven by this key, if any.
    pub fn move_direction(self) -> Option<MoveDirection> {
        match self {
            Key::Forward => Some(MoveDirection::Forward),
            Key::Backward => Some(MoveDirection::Backward),
            Key::Left => Some(MoveDirection::Left),
            Key::Right => Some(MoveDirection::Right),
            Key::Exit => None,
        }
    }
}

/// A camera update produced from raw input.
///
/// The camera consumes actions, never window-system events.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Action {
    /// Raw pointer displacement since the previous pointer event.
    Look { dx: f32, dy: f32 },
    /// Scroll amount; positive narrows the field of view.
    Zoom(f32),
    /// One frame of movement along a held direction.
    Move(MoveDirection),
}

impl Action {
    /// Apply this action to `camera`. `dt` only matters for movement.
    pub fn apply(self, camera: &mut OrientedCamera, dt: f32, constrain_pitch: bool) {
        match self {
            Action::Look { dx, dy } => camera.apply_look_delta(dx, dy, constrain_pitch),
            Action::Zoom(amount) => camera.apply_zoom_delta(amount),
            Action::Move(direction) => camera.apply_move_delta(direction, dt),
        }
    }
}
