use glam::{Mat4, Quat, Vec3};

/// World positions of the demo cubes.
pub const CUBE_POSITIONS: [Vec3; 10] = [
    Vec3::new(0.0, 0.0, 0.0),
    Vec3::new(2.0, 5.0, -15.0),
    Vec3::new(-1.5, -2.2, -2.5),
    Vec3::new(-3.8, -2.0, -12.3),
    Vec3::new(2.4, -0.4, -3.5),
    Vec3::new(-1.7, 3.0, -7.5),
    Vec3::new(1.3, -2.0, -2.5),
    Vec3::new(1.5, 2.0, -2.5),
    Vec3::new(1.5, 0.2, -1.5),
    Vec3::new(-1.3, 1.0, -1.5),
];

/// Degrees of extra tilt per cube index.
const TILT_STEP_DEGREES: f32 = 20.0;

/// Static set of unit cubes, each tilted a little more than the previous one.
#[derive(Debug, Clone)]
pub struct CubeScene {
    positions: Vec<Vec3>,
    tilt_axis: Vec3,
}

impl Default for CubeScene {
    fn default() -> Self {
        Self::new(CUBE_POSITIONS.to_vec())
    }
}

impl CubeScene {
    pub fn new(positions: Vec<Vec3>) -> Self {
        Self {
            positions,
            tilt_axis: Vec3::new(1.0, 0.3, 0.5).normalize(),
        }
    }

    pub fn len(&self) -> usize {
        self.positions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }

    /// Model matrix of cube `index`: translate, then tilt by 20° per index.
    pub fn model_matrix(&self, index: usize) -> Option<Mat4> {
        let position = *self.positions.get(index)?;
        let angle = (TILT_STEP_DEGREES * index as f32).to_radians();
        Some(
            Mat4::from_translation(position)
                * Mat4::from_quat(Quat::from_axis_angle(self.tilt_axis, angle)),
        )
    }

    pub fn model_matrices(&self) -> impl Iterator<Item = Mat4> + '_ {
        (0..self.positions.len()).filter_map(|i| self.model_matrix(i))
    }
}
