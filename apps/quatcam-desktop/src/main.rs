mod config;

use anyhow::{Context, Result, anyhow};
use clap::Parser;
use config::AppConfig;
use egui::Context as EguiContext;
use quatcam_assets::TextureSet;
use quatcam_camera::OrientedCamera;
use quatcam_input::{InputState, Key};
use quatcam_render::{CubeScene, RenderView};
use quatcam_render_wgpu::WgpuRenderer;
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Instant;
use tracing_subscriber::EnvFilter;
use winit::application::ApplicationHandler;
use winit::dpi::PhysicalSize;
use winit::event::{DeviceEvent, ElementState, KeyEvent, MouseScrollDelta, WindowEvent};
use winit::event_loop::{ActiveEventLoop, ControlFlow, EventLoop};
use winit::keyboard::{KeyCode, PhysicalKey};
use winit::window::{CursorGrabMode, Window, WindowId};

/// Pixels of touchpad scroll that count as one wheel notch.
const PIXELS_PER_LINE: f32 = 20.0;

/// Longest frame step fed to movement, in seconds.
const MAX_FRAME_SECONDS: f32 = 0.1;

#[derive(Parser)]
#[command(name = "quatcam-desktop", about = "Quaternion camera demo")]
struct Cli {
    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,

    /// YAML configuration file
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Primary cube texture (PNG or JPEG)
    #[arg(long)]
    texture_a: Option<PathBuf>,

    /// Secondary cube texture, blended over the primary
    #[arg(long)]
    texture_b: Option<PathBuf>,

    /// Window width in pixels
    #[arg(long)]
    width: Option<u32>,

    /// Window height in pixels
    #[arg(long)]
    height: Option<u32>,

    /// Start with the cursor free (Tab captures it)
    #[arg(long)]
    no_grab: bool,
}

impl Cli {
    /// Configuration file contents with command-line overrides applied.
    fn resolve_config(&self) -> Result<AppConfig> {
        let mut config = match &self.config {
            Some(path) => AppConfig::load(path)?,
            None => AppConfig::default(),
        };
        if let Some(path) = &self.texture_a {
            config.textures.primary = Some(path.clone());
        }
        if let Some(path) = &self.texture_b {
            config.textures.secondary = Some(path.clone());
        }
        if let Some(width) = self.width {
            config.window.width = width;
        }
        if let Some(height) = self.height {
            config.window.height = height;
        }
        config.validate()?;
        Ok(config)
    }
}

fn map_key(code: KeyCode) -> Option<Key> {
    match code {
        KeyCode::KeyW => Some(Key::Forward),
        KeyCode::KeyS => Some(Key::Backward),
        KeyCode::KeyA => Some(Key::Left),
        KeyCode::KeyD => Some(Key::Right),
        KeyCode::Escape => Some(Key::Exit),
        _ => None,
    }
}

/// Wheel notches in a scroll event; positive scrolls up and zooms in.
fn scroll_amount(delta: MouseScrollDelta) -> f32 {
    match delta {
        MouseScrollDelta::LineDelta(_, y) => y,
        MouseScrollDelta::PixelDelta(position) => position.y as f32 / PIXELS_PER_LINE,
    }
}

/// Application state.
struct AppState {
    camera: OrientedCamera,
    input: InputState,
    scene: CubeScene,
    show_hud: bool,
    last_frame: Instant,
}

impl AppState {
    fn new(camera: OrientedCamera) -> Self {
        // Looking follows cursor capture, which starts released.
        let mut input = InputState::new();
        input.set_look_enabled(false);
        Self {
            camera,
            input,
            scene: CubeScene::default(),
            show_hud: true,
            last_frame: Instant::now(),
        }
    }

    /// Apply the input gathered since the previous frame.
    fn update(&mut self) {
        let now = Instant::now();
        let dt = (now - self.last_frame)
            .as_secs_f32()
            .min(MAX_FRAME_SECONDS);
        self.last_frame = now;
        self.input.apply(&mut self.camera, dt);
    }

    fn draw_hud(&self, ctx: &EguiContext) {
        if !self.show_hud {
            return;
        }

        let position = self.camera.position();
        egui::Window::new("Camera")
            .anchor(egui::Align2::LEFT_TOP, [8.0, 8.0])
            .resizable(false)
            .collapsible(false)
            .show(ctx, |ui| {
                ui.label(format!(
                    "Position: ({:.2}, {:.2}, {:.2})",
                    position.x, position.y, position.z
                ));
                ui.label(format!("FOV: {:.1}°", self.camera.field_of_view()));
                ui.label(format!("Pitch: {:.1}°", self.camera.pitch_degrees()));
                ui.label(format!("Heading: {:.1}°", self.camera.heading_degrees()));
                ui.label(format!(
                    "|q|: {:.6}",
                    self.camera.orientation().length()
                ));
                ui.separator();
                ui.small(if self.input.look_enabled() {
                    "Mouse: look | WASD: move | Wheel: zoom"
                } else {
                    "Cursor free: press Tab to look around"
                });
                ui.small("Tab: capture | F1: HUD | Esc: quit");
            });
    }
}

/// Everything that exists only once a window is open.
struct Gpu {
    window: Arc<Window>,
    surface: wgpu::Surface<'static>,
    device: wgpu::Device,
    queue: wgpu::Queue,
    config: wgpu::SurfaceConfiguration,
    renderer: WgpuRenderer,
    egui_winit: egui_winit::State,
    egui_renderer: egui_wgpu::Renderer,
}

impl Gpu {
    fn new(
        event_loop: &ActiveEventLoop,
        egui_ctx: &EguiContext,
        app_config: &AppConfig,
        textures: &TextureSet,
    ) -> Result<Self> {
        let attrs = Window::default_attributes()
            .with_title(app_config.window.title.clone())
            .with_inner_size(PhysicalSize::new(
                app_config.window.width,
                app_config.window.height,
            ));
        let window = Arc::new(event_loop.create_window(attrs).context("create window")?);

        let instance = wgpu::Instance::new(&wgpu::InstanceDescriptor {
            backends: wgpu::Backends::all(),
            ..Default::default()
        });

        let surface = instance
            .create_surface(window.clone())
            .context("create surface")?;

        let adapter = pollster::block_on(instance.request_adapter(&wgpu::RequestAdapterOptions {
            power_preference: wgpu::PowerPreference::HighPerformance,
            compatible_surface: Some(&surface),
            force_fallback_adapter: false,
        }))
        .ok_or_else(|| anyhow!("no compatible GPU adapter"))?;

        let (device, queue) = pollster::block_on(adapter.request_device(
            &wgpu::DeviceDescriptor {
                label: Some("quatcam_device"),
                required_features: wgpu::Features::empty(),
                required_limits: wgpu::Limits::default(),
                memory_hints: Default::default(),
            },
            None,
        ))
        .context("create device")?;

        let size = window.inner_size();
        let surface_caps = surface.get_capabilities(&adapter);
        let surface_format = surface_caps
            .formats
            .iter()
            .find(|f| f.is_srgb())
            .or_else(|| surface_caps.formats.first())
            .copied()
            .ok_or_else(|| anyhow!("surface reports no formats"))?;
        let alpha_mode = surface_caps
            .alpha_modes
            .first()
            .copied()
            .unwrap_or(wgpu::CompositeAlphaMode::Auto);

        let config = wgpu::SurfaceConfiguration {
            usage: wgpu::TextureUsages::RENDER_ATTACHMENT,
            format: surface_format,
            width: size.width.max(1),
            height: size.height.max(1),
            present_mode: wgpu::PresentMode::AutoVsync,
            alpha_mode,
            view_formats: vec![],
            desired_maximum_frame_latency: 2,
        };
        surface.configure(&device, &config);

        let mut renderer = WgpuRenderer::new(
            &device,
            &queue,
            surface_format,
            config.width,
            config.height,
            textures,
        );
        renderer.set_mix_factor(app_config.mix_factor);

        let egui_winit = egui_winit::State::new(
            egui_ctx.clone(),
            egui::ViewportId::ROOT,
            &window,
            Some(window.scale_factor() as f32),
            None,
            None,
        );
        let egui_renderer = egui_wgpu::Renderer::new(&device, surface_format, None, 1, false);

        tracing::info!(
            "GPU initialized with {} backend",
            adapter.get_info().backend.to_str()
        );

        Ok(Self {
            window,
            surface,
            device,
            queue,
            config,
            renderer,
            egui_winit,
            egui_renderer,
        })
    }

    fn resize(&mut self, size: PhysicalSize<u32>) {
        self.config.width = size.width.max(1);
        self.config.height = size.height.max(1);
        self.surface.configure(&self.device, &self.config);
        self.renderer
            .resize(&self.device, self.config.width, self.config.height);
    }

    fn aspect_ratio(&self) -> f32 {
        RenderView::aspect_ratio(self.config.width, self.config.height)
    }

    /// Lock the cursor to the window, or release it.
    fn set_cursor_captured(&self, captured: bool) -> bool {
        if !captured {
            if let Err(e) = self.window.set_cursor_grab(CursorGrabMode::None) {
                tracing::warn!("failed to release cursor: {e}");
            }
            self.window.set_cursor_visible(true);
            return false;
        }

        let grabbed = self
            .window
            .set_cursor_grab(CursorGrabMode::Locked)
            .or_else(|_| self.window.set_cursor_grab(CursorGrabMode::Confined));
        match grabbed {
            Ok(()) => {
                self.window.set_cursor_visible(false);
                true
            }
            Err(e) => {
                tracing::warn!("cursor capture unavailable: {e}");
                false
            }
        }
    }

    fn draw_egui(&mut self, egui_ctx: &EguiContext, state: &AppState, target: &wgpu::TextureView) {
        let raw_input = self.egui_winit.take_egui_input(&self.window);
        let full_output = egui_ctx.run(raw_input, |ctx| {
            state.draw_hud(ctx);
        });

        self.egui_winit
            .handle_platform_output(&self.window, full_output.platform_output);

        let paint_jobs = egui_ctx.tessellate(full_output.shapes, full_output.pixels_per_point);

        let screen_descriptor = egui_wgpu::ScreenDescriptor {
            size_in_pixels: [self.config.width, self.config.height],
            pixels_per_point: full_output.pixels_per_point,
        };

        for (id, image_delta) in &full_output.textures_delta.set {
            self.egui_renderer
                .update_texture(&self.device, &self.queue, *id, image_delta);
        }
        let mut encoder = self
            .device
            .create_command_encoder(&wgpu::CommandEncoderDescriptor {
                label: Some("egui_encoder"),
            });
        self.egui_renderer.update_buffers(
            &self.device,
            &self.queue,
            &mut encoder,
            &paint_jobs,
            &screen_descriptor,
        );
        {
            let mut pass = encoder
                .begin_render_pass(&wgpu::RenderPassDescriptor {
                    label: Some("egui_pass"),
                    color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                        view: target,
                        resolve_target: None,
                        ops: wgpu::Operations {
                            load: wgpu::LoadOp::Load,
                            store: wgpu::StoreOp::Store,
                        },
                    })],
                    depth_stencil_attachment: None,
                    ..Default::default()
                })
                .forget_lifetime();
            self.egui_renderer
                .render(&mut pass, &paint_jobs, &screen_descriptor);
        }
        self.queue.submit(std::iter::once(encoder.finish()));
        for id in &full_output.textures_delta.free {
            self.egui_renderer.free_texture(id);
        }
    }
}

struct GpuApp {
    state: AppState,
    config: AppConfig,
    textures: TextureSet,
    start_captured: bool,
    gpu: Option<Gpu>,
    egui_ctx: EguiContext,
}

impl GpuApp {
    fn new(
        config: AppConfig,
        camera: OrientedCamera,
        textures: TextureSet,
        start_captured: bool,
    ) -> Self {
        Self {
            state: AppState::new(camera),
            config,
            textures,
            start_captured,
            gpu: None,
            egui_ctx: EguiContext::default(),
        }
    }

    fn set_cursor_captured(&mut self, captured: bool) {
        let Some(gpu) = &self.gpu else {
            return;
        };
        let captured = gpu.set_cursor_captured(captured);
        self.state.input.set_look_enabled(captured);
        tracing::debug!(captured, "cursor capture changed");
    }

    fn handle_key(&mut self, event_loop: &ActiveEventLoop, code: KeyCode, pressed: bool) {
        if let Some(key) = map_key(code) {
            self.state.input.key(key, pressed);
            if self.state.input.exit_requested() {
                tracing::info!("exit requested");
                event_loop.exit();
            }
            return;
        }

        if !pressed {
            return;
        }
        match code {
            KeyCode::Tab => self.set_cursor_captured(!self.state.input.look_enabled()),
            KeyCode::F1 => self.state.show_hud = !self.state.show_hud,
            _ => {}
        }
    }

    fn redraw(&mut self) {
        self.state.update();

        let Some(gpu) = self.gpu.as_mut() else {
            return;
        };

        let output = match gpu.surface.get_current_texture() {
            Ok(t) => t,
            Err(wgpu::SurfaceError::Lost | wgpu::SurfaceError::Outdated) => {
                gpu.surface.configure(&gpu.device, &gpu.config);
                return;
            }
            Err(e) => {
                tracing::error!("surface error: {e}");
                return;
            }
        };

        let view = output
            .texture
            .create_view(&wgpu::TextureViewDescriptor::default());

        let render_view = RenderView::from_camera(&self.state.camera, gpu.aspect_ratio());
        gpu.renderer
            .render(&gpu.device, &gpu.queue, &view, &self.state.scene, &render_view);
        gpu.draw_egui(&self.egui_ctx, &self.state, &view);

        output.present();
        gpu.window.request_redraw();
    }
}

impl ApplicationHandler for GpuApp {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.gpu.is_some() {
            return;
        }

        match Gpu::new(event_loop, &self.egui_ctx, &self.config, &self.textures) {
            Ok(gpu) => self.gpu = Some(gpu),
            Err(e) => {
                tracing::error!("failed to initialize graphics: {e:#}");
                event_loop.exit();
                return;
            }
        }

        self.set_cursor_captured(self.start_captured);
        self.state.last_frame = Instant::now();
    }

    fn window_event(
        &mut self,
        event_loop: &ActiveEventLoop,
        _window_id: WindowId,
        event: WindowEvent,
    ) {
        if let Some(gpu) = &mut self.gpu {
            let response = gpu.egui_winit.on_window_event(&gpu.window, &event);
            if response.consumed {
                return;
            }
        }

        match event {
            WindowEvent::CloseRequested => {
                event_loop.exit();
            }
            WindowEvent::Resized(new_size) => {
                if let Some(gpu) = &mut self.gpu {
                    gpu.resize(new_size);
                }
            }
            WindowEvent::Focused(false) => {
                self.state.input.release_all();
            }
            WindowEvent::KeyboardInput {
                event:
                    KeyEvent {
                        physical_key: PhysicalKey::Code(code),
                        state: key_state,
                        repeat: false,
                        ..
                    },
                ..
            } => {
                self.handle_key(event_loop, code, key_state == ElementState::Pressed);
            }
            WindowEvent::MouseWheel { delta, .. } => {
                self.state.input.scrolled(scroll_amount(delta));
            }
            WindowEvent::RedrawRequested => {
                self.redraw();
            }
            _ => {}
        }
    }

    fn device_event(
        &mut self,
        _event_loop: &ActiveEventLoop,
        _device_id: winit::event::DeviceId,
        event: DeviceEvent,
    ) {
        if let DeviceEvent::MouseMotion { delta } = event {
            self.state
                .input
                .pointer_moved(delta.0 as f32, delta.1 as f32);
        }
    }

    fn about_to_wait(&mut self, _event_loop: &ActiveEventLoop) {
        if let Some(gpu) = &self.gpu {
            gpu.window.request_redraw();
        }
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let filter = if cli.verbose { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(filter))
        .init();

    tracing::info!("quatcam-desktop starting");

    let config = cli.resolve_config()?;
    let camera = OrientedCamera::from_settings(&config.camera)?;
    let textures = TextureSet::load(
        config.textures.primary.as_deref(),
        config.textures.secondary.as_deref(),
    );

    let event_loop = EventLoop::new()?;
    event_loop.set_control_flow(ControlFlow::Poll);

    let mut app = GpuApp::new(config, camera, textures, !cli.no_grab);
    event_loop.run_app(&mut app)?;

    Ok(())
}
