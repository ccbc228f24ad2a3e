//! CPU path: the heart is rasterized by `heart_core::raster` at a reduced
//! resolution, uploaded to a texture and stretched over the window.

use heart_core::{gpu, raster, Compositor, FrameParams, HeartError, Viewport};

/// Window pixels per CPU-rendered pixel along each axis.
pub const CPU_DOWNSCALE: u32 = 2;

pub struct SoftwareFrame {
    compositor: Compositor,
    pipeline: wgpu::RenderPipeline,
    bgl: wgpu::BindGroupLayout,
    sampler: wgpu::Sampler,
    texture: wgpu::Texture,
    bind_group: wgpu::BindGroup,
    viewport: Viewport,
    window: Viewport,
    pixels: Vec<u8>,
}

/// Size the CPU frame for a window of `width x height`.
pub fn reduced_viewport(width: u32, height: u32) -> Viewport {
    Viewport::new(
        (width / CPU_DOWNSCALE).max(1),
        (height / CPU_DOWNSCALE).max(1),
    )
}

/// Frame rasterized at reduced size with the heart sized for the window.
pub fn cpu_frame_params(window: Viewport, time: f32) -> FrameParams {
    FrameParams::reduced(reduced_viewport(window.width, window.height), window, time)
}

impl SoftwareFrame {
    pub fn new(
        device: &wgpu::Device,
        format: wgpu::TextureFormat,
        compositor: Compositor,
        width: u32,
        height: u32,
    ) -> Self {
        let shader = device.create_shader_module(wgpu::ShaderModuleDescriptor {
            label: Some("blit_shader"),
            source: wgpu::ShaderSource::Wgsl(heart_core::BLIT_WGSL.into()),
        });
        let bgl = device.create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
            label: Some("blit_bgl"),
            entries: &[
                wgpu::BindGroupLayoutEntry {
                    binding: 0,
                    visibility: wgpu::ShaderStages::FRAGMENT,
                    ty: wgpu::BindingType::Texture {
                        multisampled: false,
                        view_dimension: wgpu::TextureViewDimension::D2,
                        sample_type: wgpu::TextureSampleType::Float { filterable: true },
                    },
                    count: None,
                },
                wgpu::BindGroupLayoutEntry {
                    binding: 1,
                    visibility: wgpu::ShaderStages::FRAGMENT,
                    ty: wgpu::BindingType::Sampler(wgpu::SamplerBindingType::Filtering),
                    count: None,
                },
            ],
        });
        let pl = device.create_pipeline_layout(&wgpu::PipelineLayoutDescriptor {
            label: Some("blit_pl"),
            bind_group_layouts: &[&bgl],
            push_constant_ranges: &[],
        });
        let pipeline =
            gpu::fullscreen_pipeline(device, &pl, &shader, "fs_blit", format, "blit_pipeline");
        let sampler = device.create_sampler(&wgpu::SamplerDescriptor {
            label: Some("blit_sampler"),
            address_mode_u: wgpu::AddressMode::ClampToEdge,
            address_mode_v: wgpu::AddressMode::ClampToEdge,
            address_mode_w: wgpu::AddressMode::ClampToEdge,
            mag_filter: wgpu::FilterMode::Linear,
            min_filter: wgpu::FilterMode::Linear,
            ..Default::default()
        });
        let window = Viewport::new(width, height);
        let viewport = reduced_viewport(width, height);
        let (texture, bind_group) = create_frame_texture(device, &bgl, &sampler, viewport);
        let pixels = vec![0u8; pixel_len(viewport)];
        Self {
            compositor,
            pipeline,
            bgl,
            sampler,
            texture,
            bind_group,
            viewport,
            window,
            pixels,
        }
    }

    pub fn resize(&mut self, device: &wgpu::Device, width: u32, height: u32) {
        self.window = Viewport::new(width, height);
        let viewport = reduced_viewport(width, height);
        if viewport == self.viewport {
            return;
        }
        let (texture, bind_group) =
            create_frame_texture(device, &self.bgl, &self.sampler, viewport);
        self.texture = texture;
        self.bind_group = bind_group;
        self.viewport = viewport;
        self.pixels.resize(pixel_len(viewport), 0);
    }

    /// Rasterize the frame at `time` and upload it.
    pub fn update(&mut self, queue: &wgpu::Queue, time: f32) -> Result<(), HeartError> {
        let frame = cpu_frame_params(self.window, time);
        raster::render_rgba8(&self.compositor, &frame, &mut self.pixels)?;
        queue.write_texture(
            wgpu::TexelCopyTextureInfo {
                texture: &self.texture,
                mip_level: 0,
                origin: wgpu::Origin3d::ZERO,
                aspect: wgpu::TextureAspect::All,
            },
            &self.pixels,
            wgpu::TexelCopyBufferLayout {
                offset: 0,
                bytes_per_row: Some(self.viewport.width * raster::BYTES_PER_PIXEL as u32),
                rows_per_image: Some(self.viewport.height),
            },
            texture_extent(self.viewport),
        );
        Ok(())
    }

    pub fn draw(&self, rpass: &mut wgpu::RenderPass<'_>) {
        rpass.set_pipeline(&self.pipeline);
        rpass.set_bind_group(0, &self.bind_group, &[]);
        rpass.draw(0..3, 0..1);
    }
}

fn pixel_len(viewport: Viewport) -> usize {
    viewport.width as usize * viewport.height as usize * raster::BYTES_PER_PIXEL
}

fn texture_extent(viewport: Viewport) -> wgpu::Extent3d {
    wgpu::Extent3d {
        width: viewport.width,
        height: viewport.height,
        depth_or_array_layers: 1,
    }
}

fn create_frame_texture(
    device: &wgpu::Device,
    bgl: &wgpu::BindGroupLayout,
    sampler: &wgpu::Sampler,
    viewport: Viewport,
) -> (wgpu::Texture, wgpu::BindGroup) {
    // values are already gamma-encoded, so the texture must not be sRGB
    let texture = device.create_texture(&wgpu::TextureDescriptor {
        label: Some("cpu_frame"),
        size: texture_extent(viewport),
        mip_level_count: 1,
        sample_count: 1,
        dimension: wgpu::TextureDimension::D2,
        format: wgpu::TextureFormat::Rgba8Unorm,
        usage: wgpu::TextureUsages::TEXTURE_BINDING | wgpu::TextureUsages::COPY_DST,
        view_formats: &[],
    });
    let view = texture.create_view(&wgpu::TextureViewDescriptor::default());
    let bind_group = device.create_bind_group(&wgpu::BindGroupDescriptor {
        label: Some("blit_bg"),
        layout: bgl,
        entries: &[
            wgpu::BindGroupEntry {
                binding: 0,
                resource: wgpu::BindingResource::TextureView(&view),
            },
            wgpu::BindGroupEntry {
                binding: 1,
                resource: wgpu::BindingResource::Sampler(sampler),
            },
        ],
    });
    (texture, bind_group)
}
