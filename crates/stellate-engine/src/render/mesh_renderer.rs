use bytemuck::{Pod, Zeroable};
use glam::Mat4;
use wgpu::util::DeviceExt;

use crate::paint::Color;
use crate::render::common::{premul_alpha_blend, single_uniform_layout, uniform_binding};
use crate::render::{MeshObject, RenderCtx, RenderTarget};

/// Draws one [`MeshObject`] in world space.
///
/// Filled objects use a triangle list with back-face culling; wireframe
/// objects use a line list over the object's edge indices. GPU buffers track
/// the object's revisions: a topology change reallocates them, a position
/// change rewrites the vertex buffer in place.
///
/// A renderer is bound to one object; feeding it several objects forces a
/// reupload whenever their revisions differ.
#[derive(Default)]
pub struct MeshRenderer {
    pipeline_format: Option<wgpu::TextureFormat>,
    fill_pipeline: Option<wgpu::RenderPipeline>,
    line_pipeline: Option<wgpu::RenderPipeline>,

    bind_group_layout: Option<wgpu::BindGroupLayout>,
    bind_group: Option<wgpu::BindGroup>,
    mesh_ubo: Option<wgpu::Buffer>,

    vertex_vbo: Option<wgpu::Buffer>,
    fill_ibo: Option<wgpu::Buffer>,
    edge_ibo: Option<wgpu::Buffer>,
    uploaded: Option<Revisions>,
}

impl MeshRenderer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn render(
        &mut self,
        ctx: &RenderCtx<'_>,
        target: &mut RenderTarget<'_>,
        object: &MeshObject,
        view_proj: Mat4,
    ) {
        if object.is_empty() {
            return;
        }

        self.ensure_pipelines(ctx);
        self.ensure_bindings(ctx);
        self.sync_buffers(ctx, object);

        let material = object.material();
        let uniform = MeshUniform {
            mvp: (view_proj * object.transform().matrix()).to_cols_array_2d(),
            color: Color::from(material.color).to_array(),
        };
        let Some(ubo) = self.mesh_ubo.as_ref() else { return; };
        ctx.queue.write_buffer(ubo, 0, bytemuck::bytes_of(&uniform));

        let (pipeline, ibo, count) = if material.wireframe {
            (self.line_pipeline.as_ref(), self.edge_ibo.as_ref(), object.edge_indices().len())
        } else {
            (self.fill_pipeline.as_ref(), self.fill_ibo.as_ref(), object.indices().len())
        };
        let Some(pipeline)   = pipeline                  else { return; };
        let Some(ibo)        = ibo                       else { return; };
        let Some(bind_group) = self.bind_group.as_ref()  else { return; };
        let Some(vbo)        = self.vertex_vbo.as_ref()  else { return; };

        let mut rpass = target.begin_load_pass("stellate mesh pass");
        rpass.set_pipeline(pipeline);
        rpass.set_bind_group(0, bind_group, &[]);
        rpass.set_vertex_buffer(0, vbo.slice(..));
        rpass.set_index_buffer(ibo.slice(..), wgpu::IndexFormat::Uint32);
        rpass.draw_indexed(0..count as u32, 0, 0..1);
    }

    // ── private helpers ────────────────────────────────────────────────────

    fn ensure_pipelines(&mut self, ctx: &RenderCtx<'_>) {
        if self.pipeline_format == Some(ctx.surface_format)
            && self.fill_pipeline.is_some()
            && self.line_pipeline.is_some()
        {
            return;
        }

        let shader = ctx.device.create_shader_module(wgpu::ShaderModuleDescriptor {
            label: Some("stellate mesh shader"),
            source: wgpu::ShaderSource::Wgsl(include_str!("shaders/mesh.wgsl").into()),
        });

        let bind_group_layout = single_uniform_layout::<MeshUniform>(
            ctx.device,
            "stellate mesh bgl",
            wgpu::ShaderStages::VERTEX | wgpu::ShaderStages::FRAGMENT,
        );

        let pipeline_layout =
            ctx.device.create_pipeline_layout(&wgpu::PipelineLayoutDescriptor {
                label: Some("stellate mesh pipeline layout"),
                bind_group_layouts: &[&bind_group_layout],
                immediate_size: 0,
            });

        let build = |label: &'static str, topology, cull_mode| {
            ctx.device.create_render_pipeline(&wgpu::RenderPipelineDescriptor {
                label: Some(label),
                layout: Some(&pipeline_layout),
                vertex: wgpu::VertexState {
                    module: &shader,
                    entry_point: Some("vs_main"),
                    compilation_options: Default::default(),
                    buffers: &[position_layout()],
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
                    topology,
                    strip_index_format: None,
                    front_face: wgpu::FrontFace::Ccw,
                    cull_mode,
                    polygon_mode: wgpu::PolygonMode::Fill,
                    unclipped_depth: false,
                    conservative: false,
                },
                depth_stencil: None,
                multisample: wgpu::MultisampleState::default(),
                multiview_mask: None,
                cache: None,
            })
        };

        let fill = build(
            "stellate mesh fill pipeline",
            wgpu::PrimitiveTopology::TriangleList,
            Some(wgpu::Face::Back),
        );
        let line = build("stellate mesh line pipeline", wgpu::PrimitiveTopology::LineList, None);

        log::debug!("MeshRenderer: pipelines built for {:?}", ctx.surface_format);

        self.pipeline_format = Some(ctx.surface_format);
        self.fill_pipeline = Some(fill);
        self.line_pipeline = Some(line);
        self.bind_group_layout = Some(bind_group_layout);
        self.bind_group = None;
        self.mesh_ubo = None;
    }

    fn ensure_bindings(&mut self, ctx: &RenderCtx<'_>) {
        if self.bind_group.is_some() && self.mesh_ubo.is_some() {
            return;
        }
        let Some(bgl) = self.bind_group_layout.as_ref() else { return; };
        let (ubo, bind_group) = uniform_binding::<MeshUniform>(ctx.device, bgl, "stellate mesh ubo");
        self.mesh_ubo = Some(ubo);
        self.bind_group = Some(bind_group);
    }

    fn sync_buffers(&mut self, ctx: &RenderCtx<'_>, object: &MeshObject) {
        let current = Revisions {
            topology: object.topology_revision(),
            positions: object.position_revision(),
        };
        match plan_upload(self.uploaded, current) {
            Upload::Nothing => {}
            Upload::Positions => {
                if let Some(vbo) = self.vertex_vbo.as_ref() {
                    ctx.queue.write_buffer(vbo, 0, bytemuck::cast_slice(object.positions()));
                }
            }
            Upload::Everything => {
                log::debug!(
                    "MeshRenderer: reallocating for {} vertices, {} indices",
                    object.positions().len(),
                    object.indices().len()
                );
                self.vertex_vbo = Some(ctx.device.create_buffer_init(
                    &wgpu::util::BufferInitDescriptor {
                        label: Some("stellate mesh vbo"),
                        contents: bytemuck::cast_slice(object.positions()),
                        usage: wgpu::BufferUsages::VERTEX | wgpu::BufferUsages::COPY_DST,
                    },
                ));
                self.fill_ibo = Some(ctx.device.create_buffer_init(
                    &wgpu::util::BufferInitDescriptor {
                        label: Some("stellate mesh fill ibo"),
                        contents: bytemuck::cast_slice(object.indices()),
                        usage: wgpu::BufferUsages::INDEX,
                    },
                ));
                self.edge_ibo = Some(ctx.device.create_buffer_init(
                    &wgpu::util::BufferInitDescriptor {
                        label: Some("stellate mesh edge ibo"),
                        contents: bytemuck::cast_slice(object.edge_indices()),
                        usage: wgpu::BufferUsages::INDEX,
                    },
                ));
            }
        }
        self.uploaded = Some(current);
    }
}

// ── upload planning ───────────────────────────────────────────────────────

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
struct Revisions {
    topology: u64,
    positions: u64,
}

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
enum Upload {
    Nothing,
    Positions,
    Everything,
}

fn plan_upload(uploaded: Option<Revisions>, current: Revisions) -> Upload {
    match uploaded {
        None => Upload::Everything,
        Some(prev) if prev.topology != current.topology => Upload::Everything,
        Some(prev) if prev.positions != current.positions => Upload::Positions,
        Some(_) => Upload::Nothing,
    }
}

// ── GPU types ─────────────────────────────────────────────────────────────

/// 80 bytes: column-major MVP followed by linear premultiplied color.
#[repr(C)]
#[derive(Debug, Copy, Clone, Pod, Zeroable)]
struct MeshUniform {
    mvp: [[f32; 4]; 4],
    color: [f32; 4],
}

const POSITION_ATTRS: [wgpu::VertexAttribute; 1] = wgpu::vertex_attr_array![0 => Float32x3];

fn position_layout() -> wgpu::VertexBufferLayout<'static> {
    wgpu::VertexBufferLayout {
        array_stride: std::mem::size_of::<[f32; 3]>() as u64,
        step_mode: wgpu::VertexStepMode::Vertex,
        attributes: &POSITION_ATTRS,
    }
}
