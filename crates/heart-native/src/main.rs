use anyhow::Context;
use heart_core::gpu;
use heart_core::{AnimationClock, Compositor, HeartConfig, HeartUniforms, Viewport};
use instant::Instant;
use winit::{event::*, event_loop::EventLoop, window::WindowBuilder};

mod software;
use software::SoftwareFrame;

/// How the heart gets its pixels.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum RenderMode {
    /// `heart.wgsl` evaluates every fragment.
    Shader,
    /// `heart_core::raster` on the rayon pool, then a texture blit.
    Cpu,
}

impl RenderMode {
    fn from_args(mut args: impl Iterator<Item = String>) -> anyhow::Result<Self> {
        let mut mode = RenderMode::Shader;
        for arg in args.by_ref() {
            match arg.as_str() {
                "--cpu" => mode = RenderMode::Cpu,
                "--gpu" => mode = RenderMode::Shader,
                other => anyhow::bail!("unknown argument `{}` (expected --cpu or --gpu)", other),
            }
        }
        Ok(mode)
    }
}

struct ShaderFrame {
    pipeline: wgpu::RenderPipeline,
    uniform_buffer: wgpu::Buffer,
    bind_group: wgpu::BindGroup,
}

enum Painter {
    Shader(ShaderFrame),
    Cpu(SoftwareFrame),
}

struct GpuState<'w> {
    window: &'w winit::window::Window,
    surface: wgpu::Surface<'w>,
    device: wgpu::Device,
    queue: wgpu::Queue,
    config: wgpu::SurfaceConfiguration,
    painter: Painter,
    heart: HeartConfig,
    clock: AnimationClock,
    width: u32,
    height: u32,
}

fn create_shader_frame(device: &wgpu::Device, format: wgpu::TextureFormat) -> ShaderFrame {
    let shader = device.create_shader_module(wgpu::ShaderModuleDescriptor {
        label: Some("heart_shader"),
        source: wgpu::ShaderSource::Wgsl(heart_core::HEART_WGSL.into()),
    });
    let uniform_buffer = device.create_buffer(&wgpu::BufferDescriptor {
        label: Some("heart_uniforms"),
        size: std::mem::size_of::<HeartUniforms>() as u64,
        usage: wgpu::BufferUsages::UNIFORM | wgpu::BufferUsages::COPY_DST,
        mapped_at_creation: false,
    });
    let bind_group_layout = gpu::uniform_layout(device, "heart_bgl");
    let bind_group = device.create_bind_group(&wgpu::BindGroupDescriptor {
        label: Some("heart_bg"),
        layout: &bind_group_layout,
        entries: &[wgpu::BindGroupEntry {
            binding: 0,
            resource: uniform_buffer.as_entire_binding(),
        }],
    });
    let pipeline_layout = device.create_pipeline_layout(&wgpu::PipelineLayoutDescriptor {
        label: Some("heart_pl"),
        bind_group_layouts: &[&bind_group_layout],
        push_constant_ranges: &[],
    });
    let pipeline = gpu::fullscreen_pipeline(
        device,
        &pipeline_layout,
        &shader,
        "fs_heart",
        format,
        "heart_pipeline",
    );
    ShaderFrame {
        pipeline,
        uniform_buffer,
        bind_group,
    }
}

impl<'w> GpuState<'w> {
    async fn new(
        window: &'w winit::window::Window,
        compositor: Compositor,
        mode: RenderMode,
    ) -> anyhow::Result<Self> {
        let size = window.inner_size();
        let width = size.width.max(1);
        let height = size.height.max(1);
        let instance = wgpu::Instance::default();
        let surface = instance
            .create_surface(window)
            .context("create surface")?;
        let adapter = instance
            .request_adapter(&wgpu::RequestAdapterOptions {
                power_preference: wgpu::PowerPreference::HighPerformance,
                compatible_surface: Some(&surface),
                force_fallback_adapter: false,
            })
            .await
            .ok_or_else(|| anyhow::anyhow!("No GPU adapter"))?;
        log::info!("[gpu] adapter: {}", adapter.get_info().name);
        let (device, queue) = adapter
            .request_device(
                &wgpu::DeviceDescriptor {
                    required_features: wgpu::Features::empty(),
                    required_limits: wgpu::Limits::default(),
                    memory_hints: wgpu::MemoryHints::Performance,
                    label: None,
                },
                None,
            )
            .await
            .context("request device")?;

        let surface_caps = surface.get_capabilities(&adapter);
        let format = gpu::pick_surface_format(&surface_caps.formats)
            .ok_or_else(|| anyhow::anyhow!("surface reports no formats"))?;
        if format.is_srgb() {
            log::warn!("[gpu] only sRGB swapchain available ({:?})", format);
        }
        let config = wgpu::SurfaceConfiguration {
            usage: wgpu::TextureUsages::RENDER_ATTACHMENT,
            format,
            width,
            height,
            present_mode: wgpu::PresentMode::Fifo,
            alpha_mode: surface_caps.alpha_modes[0],
            desired_maximum_frame_latency: 2,
            view_formats: vec![],
        };
        surface.configure(&device, &config);
        log::info!("[gpu] {}x{} format={:?} mode={:?}", width, height, format, mode);

        let heart = compositor.config().clone();
        let clock = AnimationClock::for_config(&heart);
        let painter = match mode {
            RenderMode::Shader => Painter::Shader(create_shader_frame(&device, format)),
            RenderMode::Cpu => Painter::Cpu(SoftwareFrame::new(
                &device, format, compositor, width, height,
            )),
        };

        Ok(Self {
            window,
            surface,
            device,
            queue,
            config,
            painter,
            heart,
            clock,
            width,
            height,
        })
    }

    fn resize(&mut self, new_size: winit::dpi::PhysicalSize<u32>) {
        if new_size.width == 0 || new_size.height == 0 {
            return;
        }
        log::debug!("[gpu] resize {}x{}", new_size.width, new_size.height);
        self.width = new_size.width;
        self.height = new_size.height;
        self.config.width = new_size.width;
        self.config.height = new_size.height;
        self.surface.configure(&self.device, &self.config);
        if let Painter::Cpu(cpu) = &mut self.painter {
            cpu.resize(&self.device, self.width, self.height);
        }
    }

    fn render(&mut self) -> Result<(), wgpu::SurfaceError> {
        // time is written once here, before any pixel of this frame is evaluated
        self.clock.tick(Instant::now());
        let params = self
            .clock
            .frame_params(Viewport::new(self.width, self.height));

        match &mut self.painter {
            Painter::Shader(s) => {
                let uniforms = HeartUniforms::new(&self.heart, &params);
                self.queue
                    .write_buffer(&s.uniform_buffer, 0, uniforms.as_bytes());
            }
            Painter::Cpu(cpu) => {
                if let Err(e) = cpu.update(&self.queue, params.time) {
                    log::error!("cpu raster error: {}", e);
                }
            }
        }

        let frame = self.surface.get_current_texture()?;
        let view = frame
            .texture
            .create_view(&wgpu::TextureViewDescriptor::default());
        let mut encoder = self
            .device
            .create_command_encoder(&wgpu::CommandEncoderDescriptor {
                label: Some("encoder"),
            });
        {
            let mut rpass = encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
                label: Some("rpass"),
                color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                    view: &view,
                    resolve_target: None,
                    ops: wgpu::Operations {
                        load: wgpu::LoadOp::Clear(wgpu::Color::BLACK),
                        store: wgpu::StoreOp::Store,
                    },
                })],
                depth_stencil_attachment: None,
                timestamp_writes: None,
                occlusion_query_set: None,
            });
            match &self.painter {
                Painter::Shader(s) => {
                    rpass.set_pipeline(&s.pipeline);
                    rpass.set_bind_group(0, &s.bind_group, &[]);
                    rpass.draw(0..3, 0..1);
                }
                Painter::Cpu(cpu) => cpu.draw(&mut rpass),
            }
        }
        self.queue.submit(Some(encoder.finish()));
        frame.present();
        Ok(())
    }
}

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let mode = RenderMode::from_args(std::env::args().skip(1))?;
    let compositor = Compositor::new(HeartConfig::default()).context("invalid heart config")?;
    log::info!(
        "[heart] instances={} phases={:?}",
        compositor.config().instance_count(),
        compositor.config().phase_offsets.as_slice()
    );

    let event_loop = EventLoop::new().context("create event loop")?;
    let window = WindowBuilder::new()
        .with_title("Neon Heart (native)")
        .build(&event_loop)?;

    let mut state = pollster::block_on(GpuState::new(&window, compositor, mode))?;

    event_loop.run(move |event, elwt| match event {
        Event::WindowEvent {
            event: WindowEvent::Resized(size),
            ..
        } => state.resize(size),
        Event::WindowEvent {
            event: WindowEvent::CloseRequested,
            ..
        } => elwt.exit(),
        Event::AboutToWait => match state.render() {
            Ok(_) => state.window.request_redraw(),
            Err(wgpu::SurfaceError::Lost | wgpu::SurfaceError::Outdated) => {
                state.resize(state.window.inner_size())
            }
            Err(wgpu::SurfaceError::OutOfMemory) => {
                log::error!("surface out of memory, exiting");
                elwt.exit()
            }
            Err(e) => log::warn!("frame skipped: {:?}", e),
        },
        _ => {}
    })?;
    Ok(())
}
