//! Texquad is a Glium-based renderer for textured 2D quads.
//!
//! A [`TexturedQuad`] owns a fixed shader program and static vertex/index
//! buffers, and draws one textured quad per `draw` call using a caller
//! supplied model-view-projection matrix. Quads either upload their own
//! texture from a decoded image or share an already-uploaded one, and are
//! placed either centered at the origin or filmstrip-style along the
//! x-axis (see [`Placement`]).
//!
//! The hosting window, the redraw loop and image decoding stay with the
//! caller; see the programs in `demos/`.

pub mod error;
pub mod geometry;
pub mod quad;
pub mod shader;
pub mod texture;

pub use error::CreationError;
pub use geometry::{quad_vertices, Placement, Vertex, QUAD_INDICES};
pub use quad::{filmstrip, TexturedQuad};
pub use texture::{load_texture, TextureSource};
