use clap::{Parser, Subcommand};
use quatcam_camera::{CameraSettings, OrientedCamera};
use quatcam_input::{InputState, Key};
use quatcam_render::{CubeScene, DebugTextRenderer, RenderView, Renderer};
use tracing_subscriber::EnvFilter;

/// Step used when replaying held movement keys.
const SIMULATION_STEP_SECONDS: f32 = 1.0 / 60.0;
/// Longest forward hold a script may replay.
const MAX_FORWARD_SECONDS: f32 = 3600.0;

#[derive(Parser)]
#[command(name = "quatcam-cli", about = "Headless tool for the quaternion camera")]
struct Cli {
    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print crate versions and default camera settings
    Info,
    /// Replay scripted input on a default camera and print the result
    Simulate {
        /// Horizontal pointer displacement per look event
        #[arg(long, default_value = "0", allow_hyphen_values = true)]
        look_dx: f32,
        /// Vertical pointer displacement per look event (positive looks down)
        #[arg(long, default_value = "0", allow_hyphen_values = true)]
        look_dy: f32,
        /// Number of look events
        #[arg(long, default_value = "1")]
        events: u32,
        /// Scroll amount applied once (positive zooms in)
        #[arg(long, default_value = "0", allow_hyphen_values = true)]
        zoom: f32,
        /// Seconds of holding the forward key after looking
        #[arg(long, default_value = "0")]
        forward_seconds: f32,
        /// Print a JSON snapshot instead of the frame description
        #[arg(long)]
        json: bool,
    },
}

/// Scripted input for one simulation run.
#[derive(Debug, Clone, Copy, PartialEq)]
struct Script {
    look_dx: f32,
    look_dy: f32,
    events: u32,
    zoom: f32,
    forward_seconds: f32,
}

impl Script {
    /// Feed the script through an [`InputState`] the way the desktop frame
    /// loop would: one frame of queued pointer and scroll events, then
    /// fixed steps with the forward key held.
    fn run(&self, camera: &mut OrientedCamera) -> usize {
        let mut input = InputState::new();
        for _ in 0..self.events {
            input.pointer_moved(self.look_dx, self.look_dy);
        }
        input.scrolled(self.zoom);
        let mut applied = input.apply(camera, 0.0);

        if self.forward_seconds.is_finite() && self.forward_seconds > 0.0 {
            let seconds = if self.forward_seconds > MAX_FORWARD_SECONDS {
                tracing::warn!(
                    requested = self.forward_seconds,
                    limit = MAX_FORWARD_SECONDS,
                    "forward time capped"
                );
                MAX_FORWARD_SECONDS
            } else {
                self.forward_seconds
            };

            // Counted in whole steps; subtracting from a large float can
            // stop making progress.
            let steps = (seconds / SIMULATION_STEP_SECONDS).ceil() as u64;
            input.key(Key::Forward, true);
            for step in 0..steps {
                let elapsed = step as f32 * SIMULATION_STEP_SECONDS;
                let dt = (seconds - elapsed).min(SIMULATION_STEP_SECONDS);
                applied += input.apply(camera, dt);
            }
            input.key(Key::Forward, false);
        }

        tracing::debug!(applied, "simulation finished");
        applied
    }
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let filter = if cli.verbose { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(filter))
        .init();

    match cli.command {
        Commands::Info => {
            println!("quatcam-cli v{}", env!("CARGO_PKG_VERSION"));
            println!("camera: {}", quatcam_camera::crate_info());
            println!("input: {}", quatcam_input::crate_info());
            println!("render: {}", quatcam_render::crate_info());
            println!("assets: {}", quatcam_assets::crate_info());
            println!();
            println!("Default camera settings:");
            print!("{}", serde_json::to_string_pretty(&CameraSettings::default())?);
            println!();
        }
        Commands::Simulate {
            look_dx,
            look_dy,
            events,
            zoom,
            forward_seconds,
            json,
        } => {
            let script = Script {
                look_dx,
                look_dy,
                events,
                zoom,
                forward_seconds,
            };
            let mut camera = OrientedCamera::default();
            script.run(&mut camera);

            if json {
                println!("{}", serde_json::to_string_pretty(&camera.snapshot())?);
            } else {
                let view = RenderView::from_camera(&camera, RenderView::aspect_ratio(800, 600));
                let renderer = DebugTextRenderer::new();
                print!("{}", renderer.render(&CubeScene::default(), &view));
                println!(
                    "Pitch: {:.2}°  Heading: {:.2}°",
                    camera.pitch_degrees(),
                    camera.heading_degrees()
                );
            }
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::Vec3;

    fn script() -> Script {
        Script {
            look_dx: 0.0,
            look_dy: 0.0,
            events: 1,
            zoom: 0.0,
            forward_seconds: 0.0,
        }
    }

    #[test]
    fn empty_script_leaves_camera_alone() {
        let mut camera = OrientedCamera::default();
        assert_eq!(script().run(&mut camera), 0);
        assert_eq!(camera, OrientedCamera::default());
    }

    #[test]
    fn large_upward_look_clamps() {
        let mut camera = OrientedCamera::default();
        Script {
            look_dy: -5000.0,
            ..script()
        }
        .run(&mut camera);
        assert!((camera.pitch_degrees() - 89.0).abs() < 1e-2);
    }

    #[test]
    fn forward_seconds_move_camera() {
        let mut camera = OrientedCamera::default();
        Script {
            forward_seconds: 1.0,
            ..script()
        }
        .run(&mut camera);
        assert!(camera.position().abs_diff_eq(Vec3::new(0.0, 0.0, 0.5), 1e-3));
    }

    #[test]
    fn huge_forward_time_finishes() {
        let mut camera = OrientedCamera::default();
        let applied = Script {
            forward_seconds: 1.0e6,
            ..script()
        }
        .run(&mut camera);
        // Capped to an hour at 2.5 units per second from z = 3, about -8997.
        let z = camera.position().z;
        assert!(z < -8000.0 && z > -10000.0, "z = {z}");
        assert!(applied <= 216_001);
    }

    #[test]
    fn zoom_is_applied_once() {
        let mut camera = OrientedCamera::default();
        Script {
            zoom: 5.0,
            events: 10,
            ..script()
        }
        .run(&mut camera);
        assert_eq!(camera.field_of_view(), 40.0);
    }

    #[test]
    fn cli_parses_negative_deltas() {
        let cli = Cli::parse_from([
            "quatcam-cli",
            "simulate",
            "--look-dx",
            "-12.5",
            "--events",
            "3",
            "--json",
        ]);
        match cli.command {
            Commands::Simulate {
                look_dx,
                events,
                json,
                ..
            } => {
                assert_eq!(look_dx, -12.5);
                assert_eq!(events, 3);
                assert!(json);
            }
            Commands::Info => panic!("expected simulate"),
        }
    }
}
