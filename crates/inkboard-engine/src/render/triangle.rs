use bytemuck::{Pod, Zeroable};
use wgpu::util::DeviceExt;

use crate::render::shader::{self, ShaderError};
use crate::render::{RenderCtx, RenderTarget};

pub(crate) const SHADER: &str = include_str!("shaders/triangle.wgsl");

/// Per-vertex position (NDC, z = 0) and color.
#[repr(C)]
#[derive(Debug, Copy, Clone, Pod, Zeroable)]
struct TriangleVertex {
    position: [f32; 3],
    color: [f32; 3],
}

impl TriangleVertex {
    const ATTRS: [wgpu::VertexAttribute; 2] = wgpu::vertex_attr_array![
        0 => Float32x3, // position
        1 => Float32x3  // color
    ];

    fn layout() -> wgpu::VertexBufferLayout<'static> {
        wgpu::VertexBufferLayout {
            array_stride: std::mem::size_of::<TriangleVertex>() as u64,
            step_mode: wgpu::VertexStepMode::Vertex,
            attributes: &Self::ATTRS,
        }
    }
}

const VERTICES: [TriangleVertex; 3] = [
    TriangleVertex { position: [-0.5, -0.5, 0.0], color: [1.0, 0.0, 0.0] },
    TriangleVertex { position: [0.5, -0.5, 0.0], color: [0.0, 1.0, 0.0] },
    TriangleVertex { position: [0.0, 0.5, 0.0], color: [0.0, 0.0, 1.0] },
];

#[repr(C)]
#[derive(Debug, Copy, Clone, PartialEq, Pod, Zeroable)]
struct MotionUniform {
    x_offset: f32,
    time: f32,
    _pad: [f32; 2],
}

impl MotionUniform {
    /// Horizontal swing of ±0.5 NDC, one period every 2π seconds.
    fn at(time: f32) -> Self {
        Self {
            x_offset: 0.5 * time.sin(),
            time,
            _pad: [0.0; 2],
        }
    }
}

/// Renders a single RGB triangle animated by elapsed time.
pub struct TriangleRenderer {
    pipeline: wgpu::RenderPipeline,
    bind_group: wgpu::BindGroup,
    motion_ubo: wgpu::Buffer,
    vbo: wgpu::Buffer,
}

impl TriangleRenderer {
    pub fn new(device: &wgpu::Device, surface_format: wgpu::TextureFormat) -> Result<Self, ShaderError> {
        let module = shader::create_render_shader(device, "inkboard triangle shader", SHADER)?;

        let bind_group_layout = device.create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
            label: Some("inkboard triangle bgl"),
            entries: &[wgpu::BindGroupLayoutEntry {
                binding: 0,
                visibility: wgpu::ShaderStages::VERTEX | wgpu::ShaderStages::FRAGMENT,
                ty: wgpu::BindingType::Buffer {
                    ty: wgpu::BufferBindingType::Uniform,
                    has_dynamic_offset: false,
                    min_binding_size: wgpu::BufferSize::new(
                        std::mem::size_of::<MotionUniform>() as u64,
                    ),
                },
                count: None,
            }],
        });

        let pipeline_layout = device.create_pipeline_layout(&wgpu::PipelineLayoutDescriptor {
            label: Some("inkboard triangle pipeline layout"),
            bind_group_layouts: &[&bind_group_layout],
            immediate_size: 0,
        });

        let pipeline = device.create_render_pipeline(&wgpu::RenderPipelineDescriptor {
            label: Some("inkboard triangle pipeline"),
            layout: Some(&pipeline_layout),
            vertex: wgpu::VertexState {
                module: &module,
                entry_point: Some(shader::VERTEX_ENTRY),
                compilation_options: Default::default(),
                buffers: &[TriangleVertex::layout()],
            },
            fragment: Some(wgpu::FragmentState {
                module: &module,
                entry_point: Some(shader::FRAGMENT_ENTRY),
                compilation_options: Default::default(),
                targets: &[Some(wgpu::ColorTargetState {
                    format: surface_format,
                    blend: Some(wgpu::BlendState::REPLACE),
                    write_mask: wgpu::ColorWrites::ALL,
                })],
            }),
            primitive: wgpu::PrimitiveState::default(),
            depth_stencil: None,
            multisample: wgpu::MultisampleState::default(),
            multiview_mask: None,
            cache: None,
        });

        let motion_ubo = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some("inkboard triangle motion ubo"),
            contents: bytemuck::bytes_of(&MotionUniform::at(0.0)),
            usage: wgpu::BufferUsages::UNIFORM | wgpu::BufferUsages::COPY_DST,
        });

        let bind_group = device.create_bind_group(&wgpu::BindGroupDescriptor {
            label: Some("inkboard triangle bind group"),
            layout: &bind_group_layout,
            entries: &[wgpu::BindGroupEntry {
                binding: 0,
                resource: motion_ubo.as_entire_binding(),
            }],
        });

        let vbo = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some("inkboard triangle vbo"),
            contents: bytemuck::cast_slice(&VERTICES),
            usage: wgpu::BufferUsages::VERTEX,
        });

        Ok(Self {
            pipeline,
            bind_group,
            motion_ubo,
            vbo,
        })
    }

    /// Draws the triangle as it appears `time` seconds into the animation.
    pub fn render(&mut self, ctx: &RenderCtx<'_>, target: &mut RenderTarget<'_>, time: f32) {
        ctx.queue
            .write_buffer(&self.motion_ubo, 0, bytemuck::bytes_of(&MotionUniform::at(time)));

        let mut rpass = target.begin_load_pass("inkboard triangle pass");
        rpass.set_pipeline(&self.pipeline);
        rpass.set_bind_group(0, &self.bind_group, &[]);
        rpass.set_vertex_buffer(0, self.vbo.slice(..));
        rpass.draw(0..VERTICES.len() as u32, 0..1);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn motion_starts_centered() {
        let m = MotionUniform::at(0.0);
        assert_eq!(m.x_offset, 0.0);
    }

    #[test]
    fn motion_swings_half_unit() {
        let m = MotionUniform::at(std::f32::consts::FRAC_PI_2);
        assert!((m.x_offset - 0.5).abs() < 1e-6);
        let m = MotionUniform::at(3.0 * std::f32::consts::FRAC_PI_2);
        assert!((m.x_offset + 0.5).abs() < 1e-6);
    }

    #[test]
    fn uniform_is_16_bytes() {
        assert_eq!(std::mem::size_of::<MotionUniform>(), 16);
    }
}
