use bytemuck::{Pod, Zeroable};
use wgpu::util::DeviceExt;

use crate::coords::Vec2;
use crate::render::common::{
    grown_capacity, premul_alpha_blend, single_uniform_layout, uniform_binding, QuadVertex,
    QUAD_INDICES, QUAD_VERTICES,
};
use crate::render::{RenderCtx, RenderTarget};
use crate::scene::{BoxCmd, DrawCmd, DrawList};

/// Draws a [`DrawList`] in logical pixels on top of whatever is already in
/// the target.
///
/// Every command becomes one instance of a unit quad; the fragment shader
/// evaluates a rounded-box distance field for the edge, corner radius and
/// border.
#[derive(Default)]
pub struct OverlayRenderer {
    pipeline_format: Option<wgpu::TextureFormat>,
    pipeline: Option<wgpu::RenderPipeline>,

    bind_group_layout: Option<wgpu::BindGroupLayout>,
    bind_group: Option<wgpu::BindGroup>,
    viewport_ubo: Option<wgpu::Buffer>,

    quad_vbo: Option<wgpu::Buffer>,
    quad_ibo: Option<wgpu::Buffer>,

    instance_vbo: Option<wgpu::Buffer>,
    instance_capacity: usize,
}

impl OverlayRenderer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn render(&mut self, ctx: &RenderCtx<'_>, target: &mut RenderTarget<'_>, list: &DrawList) {
        let instances = build_instances(list);
        if instances.is_empty() {
            return;
        }

        self.ensure_pipeline(ctx);
        self.ensure_static_buffers(ctx);
        self.ensure_bindings(ctx);
        self.write_viewport_uniform(ctx);
        self.ensure_instance_capacity(ctx, instances.len());

        let Some(instance_vbo) = self.instance_vbo.as_ref() else { return; };
        ctx.queue.write_buffer(instance_vbo, 0, bytemuck::cast_slice(&instances));

        let Some(pipeline)   = self.pipeline.as_ref()   else { return; };
        let Some(bind_group) = self.bind_group.as_ref() else { return; };
        let Some(quad_vbo)   = self.quad_vbo.as_ref()   else { return; };
        let Some(quad_ibo)   = self.quad_ibo.as_ref()   else { return; };

        let mut rpass = target.begin_load_pass("stellate overlay pass");
        rpass.set_pipeline(pipeline);
        rpass.set_bind_group(0, bind_group, &[]);
        rpass.set_vertex_buffer(0, quad_vbo.slice(..));
        rpass.set_vertex_buffer(1, instance_vbo.slice(..));
        rpass.set_index_buffer(quad_ibo.slice(..), wgpu::IndexFormat::Uint16);
        rpass.draw_indexed(0..QUAD_INDICES.len() as u32, 0, 0..instances.len() as u32);
    }

    // ── private helpers ────────────────────────────────────────────────────

    fn ensure_pipeline(&mut self, ctx: &RenderCtx<'_>) {
        if self.pipeline_format == Some(ctx.surface_format) && self.pipeline.is_some() {
            return;
        }

        let shader = ctx.device.create_shader_module(wgpu::ShaderModuleDescriptor {
            label: Some("stellate overlay shader"),
            source: wgpu::ShaderSource::Wgsl(include_str!("shaders/overlay.wgsl").into()),
        });

        let bind_group_layout = single_uniform_layout::<ViewportUniform>(
            ctx.device,
            "stellate overlay bgl",
            wgpu::ShaderStages::VERTEX,
        );

        let pipeline_layout =
            ctx.device.create_pipeline_layout(&wgpu::PipelineLayoutDescriptor {
                label: Some("stellate overlay pipeline layout"),
                bind_group_layouts: &[&bind_group_layout],
                immediate_size: 0,
            });

        let pipeline = ctx.device.create_render_pipeline(&wgpu::RenderPipelineDescriptor {
            label: Some("stellate overlay pipeline"),
            layout: Some(&pipeline_layout),
            vertex: wgpu::VertexState {
                module: &shader,
                entry_point: Some("vs_main"),
                compilation_options: Default::default(),
                buffers: &[QuadVertex::layout(), BoxInstance::layout()],
            },
            fragment: Some(wgpu::FragmentState {
                module: &shader,
                entry_point: Some("fs_main"),
                compilation_options: Default::default(),
                targets: &[Some(wgpu::ColorTargetState {
                    format: ctx.surface_format,
                    blend: Some(premul_alpha_blend()),
                    write_mask: wgpu::ColorWrites::ALL,
                })],
            }),
            primitive: wgpu::PrimitiveState {
                topology: wgpu::PrimitiveTopology::TriangleList,
                strip_index_format: None,
                front_face: wgpu::FrontFace::Ccw,
                cull_mode: None,
                polygon_mode: wgpu::PolygonMode::Fill,
                unclipped_depth: false,
                conservative: false,
            },
            depth_stencil: None,
            multisample: wgpu::MultisampleState::default(),
            multiview_mask: None,
            cache: None,
        });

        self.pipeline_format = Some(ctx.surface_format);
        self.pipeline = Some(pipeline);
        self.bind_group_layout = Some(bind_group_layout);
        self.bind_group = None;
        self.viewport_ubo = None;
    }

    fn ensure_bindings(&mut self, ctx: &RenderCtx<'_>) {
        if self.bind_group.is_some() && self.viewport_ubo.is_some() {
            return;
        }
        let Some(bgl) = self.bind_group_layout.as_ref() else { return; };
        let (ubo, bind_group) =
            uniform_binding::<ViewportUniform>(ctx.device, bgl, "stellate overlay viewport ubo");
        self.viewport_ubo = Some(ubo);
        self.bind_group = Some(bind_group);
    }

    fn ensure_static_buffers(&mut self, ctx: &RenderCtx<'_>) {
        if self.quad_vbo.is_some() && self.quad_ibo.is_some() {
            return;
        }
        self.quad_vbo = Some(ctx.device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some("stellate overlay quad vbo"),
            contents: bytemuck::cast_slice(&QUAD_VERTICES),
            usage: wgpu::BufferUsages::VERTEX,
        }));
        self.quad_ibo = Some(ctx.device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some("stellate overlay quad ibo"),
            contents: bytemuck::cast_slice(&QUAD_INDICES),
            usage: wgpu::BufferUsages::INDEX,
        }));
    }

    fn write_viewport_uniform(&mut self, ctx: &RenderCtx<'_>) {
        let Some(ubo) = self.viewport_ubo.as_ref() else { return; };
        let uniform = ViewportUniform {
            viewport: [ctx.viewport.width.max(1.0), ctx.viewport.height.max(1.0)],
            _pad: [0.0; 2],
        };
        ctx.queue.write_buffer(ubo, 0, bytemuck::bytes_of(&uniform));
    }

    fn ensure_instance_capacity(&mut self, ctx: &RenderCtx<'_>, required: usize) {
        if required <= self.instance_capacity && self.instance_vbo.is_some() {
            return;
        }
        let new_cap = grown_capacity(required, 64);
        self.instance_vbo = Some(ctx.device.create_buffer(&wgpu::BufferDescriptor {
            label: Some("stellate overlay instance vbo"),
            size: (new_cap * std::mem::size_of::<BoxInstance>()) as u64,
            usage: wgpu::BufferUsages::VERTEX | wgpu::BufferUsages::COPY_DST,
            mapped_at_creation: false,
        }));
        self.instance_capacity = new_cap;
    }
}

fn build_instances(list: &DrawList) -> Vec<BoxInstance> {
    list.items()
        .iter()
        .filter_map(|cmd| match cmd {
            DrawCmd::Box(b) => BoxInstance::from_cmd(b),
        })
        .collect()
}

// ── GPU types ─────────────────────────────────────────────────────────────

#[repr(C)]
#[derive(Debug, Copy, Clone, Pod, Zeroable)]
struct ViewportUniform {
    viewport: [f32; 2],
    _pad: [f32; 2],
}

/// Instance data layout (64 bytes):
///
///  offset  0  rect     [f32; 4]  loc 1  (x, y, w, h)
///  offset 16  params   [f32; 4]  loc 2  (.x = radius, .y = border width)
///  offset 32  fill     [f32; 4]  loc 3
///  offset 48  border   [f32; 4]  loc 4
#[repr(C)]
#[derive(Debug, Copy, Clone, PartialEq, Pod, Zeroable)]
struct BoxInstance {
    rect: [f32; 4],
    params: [f32; 4],
    fill: [f32; 4],
    border: [f32; 4],
}

impl BoxInstance {
    const ATTRS: [wgpu::VertexAttribute; 4] = wgpu::vertex_attr_array![
        1 => Float32x4, // rect
        2 => Float32x4, // params
        3 => Float32x4, // fill
        4 => Float32x4  // border
    ];

    fn layout() -> wgpu::VertexBufferLayout<'static> {
        wgpu::VertexBufferLayout {
            array_stride: std::mem::size_of::<BoxInstance>() as u64,
            step_mode: wgpu::VertexStepMode::Instance,
            attributes: &Self::ATTRS,
        }
    }

    fn from_cmd(cmd: &BoxCmd) -> Option<Self> {
        let r = cmd.rect;
        if r.is_empty() {
            return None;
        }
        let max_radius = 0.5 * r.size.min_side();
        let (border_width, border_color) = match cmd.border {
            Some(b) => (b.width.clamp(0.0, max_radius), b.color.to_array()),
            None => (0.0, [0.0; 4]),
        };
        Some(Self {
            rect: Vec2::pack_rect(r.origin, r.size),
            params: [cmd.corner_radius.clamp(0.0, max_radius), border_width, 0.0, 0.0],
            fill: cmd.fill.to_array(),
            border: border_color,
        })
    }
}
