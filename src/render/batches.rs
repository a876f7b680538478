use crate::core::{mesh_for, InstanceGroup, ShapeKind};
use glam::Mat4;
use wgpu::util::DeviceExt;

/// GPU buffers for one instanced shape: its mesh plus the per-instance matrices.
pub(crate) struct ShapeBatch {
    pub(crate) kind: ShapeKind,
    vertex_buffer: wgpu::Buffer,
    index_buffer: wgpu::Buffer,
    index_count: u32,
    instance_buffer: wgpu::Buffer,
    instance_count: u32,
}

const MAT4_SIZE: u64 = std::mem::size_of::<Mat4>() as u64;

impl ShapeBatch {
    pub(crate) fn new(device: &wgpu::Device, group: &InstanceGroup) -> Self {
        let mesh = mesh_for(group.kind);
        let label = group.kind.label();
        let vertex_buffer = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some(&format!("{label}_vb")),
            contents: bytemuck::cast_slice(&mesh.vertices),
            usage: wgpu::BufferUsages::VERTEX,
        });
        let index_buffer = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some(&format!("{label}_ib")),
            contents: bytemuck::cast_slice(&mesh.indices),
            usage: wgpu::BufferUsages::INDEX,
        });
        let instance_buffer = device.create_buffer(&wgpu::BufferDescriptor {
            label: Some(&format!("{label}_instances")),
            size: (group.len().max(1) as u64) * MAT4_SIZE,
            usage: wgpu::BufferUsages::VERTEX | wgpu::BufferUsages::COPY_DST,
            mapped_at_creation: false,
        });
        Self {
            kind: group.kind,
            vertex_buffer,
            index_buffer,
            index_count: mesh.index_count(),
            instance_buffer,
            instance_count: group.len() as u32,
        }
    }

    /// Re-upload whatever part of the group's matrices changed.
    pub(crate) fn sync(&self, queue: &wgpu::Queue, group: &mut InstanceGroup) {
        if let Some(range) = group.take_dirty() {
            let offset = range.start as u64 * MAT4_SIZE;
            queue.write_buffer(
                &self.instance_buffer,
                offset,
                bytemuck::cast_slice(&group.matrices()[range]),
            );
        }
    }

    pub(crate) fn draw(&self, rpass: &mut wgpu::RenderPass<'_>) {
        if self.instance_count == 0 {
            return;
        }
        rpass.set_vertex_buffer(0, self.vertex_buffer.slice(..));
        rpass.set_vertex_buffer(1, self.instance_buffer.slice(..));
        rpass.set_index_buffer(self.index_buffer.slice(..), wgpu::IndexFormat::Uint32);
        rpass.draw_indexed(0..self.index_count, 0, 0..self.instance_count);
    }
}
