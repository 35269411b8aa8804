use crate::scene::CubeScene;
use glam::{Mat4, Vec3};
use quatcam_camera::OrientedCamera;

/// Per-frame camera output consumed by renderers.
#[derive(Debug, Clone, Copy)]
pub struct RenderView {
    pub view: Mat4,
    pub projection: Mat4,
    /// Camera position in world space.
    pub eye: Vec3,
    /// Field of view in degrees.
    pub fov_degrees: f32,
}

impl RenderView {
    /// Read the camera's matrices for a viewport with the given aspect ratio.
    pub fn from_camera(camera: &OrientedCamera, aspect_ratio: f32) -> Self {
        Self {
            view: camera.view_matrix(),
            projection: camera.projection_matrix(aspect_ratio),
            eye: camera.position(),
            fov_degrees: camera.field_of_view(),
        }
    }

    /// Aspect ratio of a `width` x `height` viewport, safe for zero sizes.
    pub fn aspect_ratio(width: u32, height: u32) -> f32 {
        width.max(1) as f32 / height.max(1) as f32
    }

    pub fn view_projection(&self) -> Mat4 {
        self.projection * self.view
    }
}

impl Default for RenderView {
    fn default() -> Self {
        Self::from_camera(&OrientedCamera::default(), 800.0 / 600.0)
    }
}

/// Renderer-agnostic interface. All renderers implement this trait.
///
/// The renderer reads the scene and a view, then produces output. It never
/// mutates either.
pub trait Renderer {
    /// The output type produced by this renderer.
    type Output;

    /// Render one frame of the scene from the given view.
    fn render(&self, scene: &CubeScene, view: &RenderView) -> Self::Output;
}

/// Produces a human-readable description of a frame.
///
/// Useful for CLI output, logging, and testing the render interface.
#[derive(Debug, Default)]
pub struct DebugTextRenderer;

impl DebugTextRenderer {
    pub fn new() -> Self {
        Self
    }
}

impl Renderer for DebugTextRenderer {
    type Output = String;

    fn render(&self, scene: &CubeScene, view: &RenderView) -> String {
        let mut out = String::new();
        out.push_str(&format!("=== Frame ({} cubes) ===\n", scene.len()));
        out.push_str(&format!(
            "Camera: eye=({:.2}, {:.2}, {:.2}) fov={:.1}\n",
            view.eye.x, view.eye.y, view.eye.z, view.fov_degrees
        ));

        let view_projection = view.view_projection();
        for (i, model) in scene.model_matrices().enumerate() {
            let center = model.transform_point3(Vec3::ZERO);
            let clip = view_projection * center.extend(1.0);
            let visible = clip.w > 0.0
                && clip.x.abs() <= clip.w
                && clip.y.abs() <= clip.w
                && (0.0..=clip.w).contains(&clip.z);
            out.push_str(&format!(
                "  [{i}] pos=({:.2}, {:.2}, {:.2}) {}\n",
                center.x,
                center.y,
                center.z,
                if visible { "visible" } else { "culled" }
            ));
        }

        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use quatcam_camera::CameraSettings;

    #[test]
    fn view_reads_camera_matrices() {
        let camera = OrientedCamera::default();
        let view = RenderView::from_camera(&camera, 2.0);
        assert_eq!(view.view, camera.view_matrix());
        assert_eq!(view.projection, camera.projection_matrix(2.0));
        assert_eq!(view.eye, Vec3::new(0.0, 0.0, 3.0));
        assert_eq!(view.fov_degrees, 45.0);
    }

    #[test]
    fn aspect_ratio_handles_zero_height() {
        assert_eq!(RenderView::aspect_ratio(800, 600), 800.0 / 600.0);
        assert_eq!(RenderView::aspect_ratio(800, 0), 800.0);
    }

    #[test]
    fn debug_renderer_lists_cubes() {
        let renderer = DebugTextRenderer::new();
        let output = renderer.render(&CubeScene::default(), &RenderView::default());
        assert!(output.contains("10 cubes"));
        assert!(output.contains("fov=45.0"));
        // The origin cube sits straight ahead of the default camera.
        assert!(output.contains("[0] pos=(0.00, 0.00, 0.00) visible"));
    }

    #[test]
    fn debug_renderer_culls_cubes_behind_camera() {
        let camera = OrientedCamera::from_settings(&CameraSettings {
            position: Vec3::new(0.0, 0.0, -20.0),
            ..CameraSettings::default()
        })
        .unwrap();
        let view = RenderView::from_camera(&camera, 1.0);
        let output = DebugTextRenderer::new().render(&CubeScene::default(), &view);
        assert!(output.contains("[0] pos=(0.00, 0.00, 0.00) culled"));
    }

    #[test]
    fn debug_renderer_empty_scene() {
        let output = DebugTextRenderer::new().render(&CubeScene::new(Vec::new()), &RenderView::default());
        assert!(output.contains("0 cubes"));
        assert!(!output.contains("pos="));
    }
}
