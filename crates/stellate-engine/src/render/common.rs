//! GPU helpers shared by the renderers.

use bytemuck::{Pod, Zeroable};

/// Premultiplied-alpha "over" blending.
pub(super) fn premul_alpha_blend() -> wgpu::BlendState {
    let component = wgpu::BlendComponent {
        src_factor: wgpu::BlendFactor::One,
        dst_factor: wgpu::BlendFactor::OneMinusSrcAlpha,
        operation: wgpu::BlendOperation::Add,
    };
    wgpu::BlendState { color: component, alpha: component }
}

/// Binding size for a uniform of type `T`.
pub(super) fn uniform_binding_size<T>() -> Option<std::num::NonZeroU64> {
    std::num::NonZeroU64::new(std::mem::size_of::<T>() as u64)
}

/// Bind group layout with one uniform buffer at binding 0.
pub(super) fn single_uniform_layout<T>(
    device: &wgpu::Device,
    label: &'static str,
    visibility: wgpu::ShaderStages,
) -> wgpu::BindGroupLayout {
    device.create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
        label: Some(label),
        entries: &[wgpu::BindGroupLayoutEntry {
            binding: 0,
            visibility,
            ty: wgpu::BindingType::Buffer {
                ty: wgpu::BufferBindingType::Uniform,
                has_dynamic_offset: false,
                min_binding_size: uniform_binding_size::<T>(),
            },
            count: None,
        }],
    })
}

/// Uniform buffer of `T` plus a bind group exposing it at binding 0.
pub(super) fn uniform_binding<T>(
    device: &wgpu::Device,
    layout: &wgpu::BindGroupLayout,
    label: &'static str,
) -> (wgpu::Buffer, wgpu::BindGroup) {
    let buffer = device.create_buffer(&wgpu::BufferDescriptor {
        label: Some(label),
        size: std::mem::size_of::<T>() as u64,
        usage: wgpu::BufferUsages::UNIFORM | wgpu::BufferUsages::COPY_DST,
        mapped_at_creation: false,
    });
    let bind_group = device.create_bind_group(&wgpu::BindGroupDescriptor {
        label: Some(label),
        layout,
        entries: &[wgpu::BindGroupEntry {
            binding: 0,
            resource: buffer.as_entire_binding(),
        }],
    });
    (buffer, bind_group)
}

/// Unit quad corner, `0..1` on both axes.
#[repr(C)]
#[derive(Debug, Copy, Clone, Pod, Zeroable)]
pub(super) struct QuadVertex {
    pub pos: [f32; 2],
}

impl QuadVertex {
    const ATTRS: [wgpu::VertexAttribute; 1] = wgpu::vertex_attr_array![0 => Float32x2];

    pub(super) fn layout() -> wgpu::VertexBufferLayout<'static> {
        wgpu::VertexBufferLayout {
            array_stride: std::mem::size_of::<QuadVertex>() as u64,
            step_mode: wgpu::VertexStepMode::Vertex,
            attributes: &Self::ATTRS,
        }
    }
}

pub(super) const QUAD_VERTICES: [QuadVertex; 4] = [
    QuadVertex { pos: [0.0, 0.0] },
    QuadVertex { pos: [1.0, 0.0] },
    QuadVertex { pos: [1.0, 1.0] },
    QuadVertex { pos: [0.0, 1.0] },
];

pub(super) const QUAD_INDICES: [u16; 6] = [0, 1, 2, 0, 2, 3];

/// Capacity to allocate for `required` elements: next power of two, at
/// least `floor`.
pub(super) fn grown_capacity(required: usize, floor: usize) -> usize {
    required.next_power_of_two().max(floor)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn capacity_grows_in_powers_of_two() {
        assert_eq!(grown_capacity(1, 64), 64);
        assert_eq!(grown_capacity(65, 64), 128);
        assert_eq!(grown_capacity(128, 64), 128);
    }

    #[test]
    fn quad_indices_cover_two_triangles() {
        assert_eq!(QUAD_INDICES.len(), 6);
        assert!(QUAD_INDICES.iter().all(|&i| (i as usize) < QUAD_VERTICES.len()));
    }
}
