use std::rc::Rc;

use coarse_prof::profile;
use log::info;
use nalgebra as na;

use glium::texture::Texture2d;
use glium::uniform;

use crate::geometry::{self, Placement, Vertex};
use crate::texture::{self, TextureSource};
use crate::{shader, CreationError};

/// A single textured quad with an immutable geometry, its own shader
/// program and a (possibly shared) texture.
///
/// All GPU objects are created at construction and released when the quad
/// is dropped. Drawing is a single indexed draw call per frame, driven by
/// the caller's redraw loop with an externally supplied MVP matrix.
pub struct TexturedQuad {
    vertex_buffer: glium::VertexBuffer<Vertex>,
    index_buffer: glium::IndexBuffer<u16>,
    program: glium::Program,
    texture: Rc<Texture2d>,
}

impl TexturedQuad {
    pub fn create<F: glium::backend::Facade>(
        facade: &F,
        source: TextureSource,
        placement: Placement,
    ) -> Result<Self, CreationError> {
        info!("Creating textured quad with placement {:?}", placement);

        let vertex_buffer = glium::VertexBuffer::new(facade, &geometry::quad_vertices(placement))?;
        let index_buffer = glium::IndexBuffer::new(
            facade,
            glium::index::PrimitiveType::TrianglesList,
            &geometry::QUAD_INDICES,
        )?;

        let program = shader::create_program(facade)?;
        let texture = source.into_texture(facade)?;

        Ok(TexturedQuad {
            vertex_buffer,
            index_buffer,
            program,
            texture,
        })
    }

    /// Draws the quad into `target`, transformed by `mvp`.
    ///
    /// Issues one indexed draw of the six `u16` indices, with the quad's
    /// texture bound to a single texture unit. Attribute state is managed
    /// by glium and left consistent after the call.
    pub fn draw<S: glium::Surface>(
        &self,
        mvp: &na::Matrix4<f32>,
        target: &mut S,
    ) -> Result<(), glium::DrawError> {
        profile!("draw_quad");

        let mat_mvp: [[f32; 4]; 4] = (*mvp).into();

        target.draw(
            &self.vertex_buffer,
            &self.index_buffer,
            &self.program,
            &uniform! {
                mat_mvp: mat_mvp,
                quad_texture: texture::sampler(&self.texture),
            },
            &Default::default(),
        )
    }

    /// The quad's texture, for sharing with further instances.
    pub fn texture(&self) -> Rc<Texture2d> {
        self.texture.clone()
    }
}

/// Creates a row of `num_frames` quads sharing one texture, placed at
/// `Indexed { 0, .. }` through `Indexed { num_frames - 1, .. }`.
pub fn filmstrip<F: glium::backend::Facade>(
    facade: &F,
    texture: Rc<Texture2d>,
    num_frames: u32,
) -> Result<Vec<TexturedQuad>, CreationError> {
    (0..num_frames)
        .map(|index| {
            TexturedQuad::create(
                facade,
                TextureSource::Shared(texture.clone()),
                Placement::Indexed { index, num_frames },
            )
        })
        .collect()
}
