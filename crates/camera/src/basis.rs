use glam::{Mat3, Quat, Vec3};

/// World vertical axis. Yaw always turns about this axis.
pub const WORLD_UP: Vec3 = Vec3::Y;

/// Orthonormal camera frame expressed in world space.
///
/// The canonical frame looks down local −Z with +Y up and +X right, so an
/// identity orientation yields `front = −Z`, `up = +Y`, `right = +X`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Basis {
    pub right: Vec3,
    pub up: Vec3,
    pub front: Vec3,
}

impl Basis {
    /// Rotate the canonical frame by `orientation`.
    pub fn from_orientation(orientation: Quat) -> Self {
        Self {
            right: orientation * Vec3::X,
            up: orientation * Vec3::Y,
            front: orientation * Vec3::NEG_Z,
        }
    }

    /// Rebuild the unit quaternion whose local axes are exactly this frame.
    pub fn to_orientation(&self) -> Quat {
        look_rotation(self.front, self.up)
    }
}

/// Unit quaternion that maps the canonical frame onto a camera looking along
/// `direction`, with `up` as the vertical hint.
///
/// The frame is re-orthogonalized before conversion: `right = direction × up`,
/// `up = right × direction`. A zero `direction` yields the identity. An `up`
/// parallel to `direction` falls back to another hint axis.
pub fn look_rotation(direction: Vec3, up: Vec3) -> Quat {
    let Some(front) = direction.try_normalize() else {
        return Quat::IDENTITY;
    };

    let right = front
        .cross(up)
        .try_normalize()
        .or_else(|| front.cross(fallback_hint(front)).try_normalize())
        .unwrap_or(Vec3::X);
    let up = right.cross(front).normalize_or(WORLD_UP);

    Quat::from_mat3(&Mat3::from_cols(right, up, -front)).normalize()
}

/// Pick a hint axis that is far from parallel to `front`.
fn fallback_hint(front: Vec3) -> Vec3 {
    if front.z.abs() < 0.9 {
        Vec3::Z
    } else {
        Vec3::X
    }
}
