use glium::implement_vertex;

#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Vertex {
    pub position: [f32; 3],
    pub tex_coord: [f32; 2],
}

implement_vertex!(Vertex, position, tex_coord);

/// Two counter-clockwise triangles covering the quad. Never changes,
/// independently of placement.
pub const QUAD_INDICES: [u16; 6] = [0, 1, 2, 0, 2, 3];

/// Horizontal placement policy for a quad.
///
/// `Centered` is a unit square centered at the origin. `Indexed` lays the
/// quad out filmstrip-style: with `num_frames` quads in total, quad `index`
/// is centered at `index - num_frames / 2` (integer division) and is 0.5
/// wide, producing a row of non-overlapping quads.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Placement {
    Centered,
    Indexed { index: u32, num_frames: u32 },
}

impl Placement {
    pub fn center_x(self) -> f32 {
        match self {
            Placement::Centered => 0.0,
            Placement::Indexed { index, num_frames } => {
                (index as i32 - num_frames as i32 / 2) as f32
            }
        }
    }

    pub fn half_width(self) -> f32 {
        match self {
            Placement::Centered => 0.5,
            Placement::Indexed { .. } => 0.25,
        }
    }
}

/// Builds the four quad vertices for the given placement, in the order
/// top-left, top-right, bottom-right, bottom-left. Tex coord (0, 0) is on
/// the top-left vertex and (1, 1) on the bottom-right vertex.
///
/// Each call returns a fresh array; geometry is owned per quad instance.
pub fn quad_vertices(placement: Placement) -> [Vertex; 4] {
    let left = placement.center_x() - placement.half_width();
    let right = placement.center_x() + placement.half_width();

    [
        Vertex {
            position: [left, 0.5, 0.0],
            tex_coord: [0.0, 0.0],
        },
        Vertex {
            position: [right, 0.5, 0.0],
            tex_coord: [1.0, 0.0],
        },
        Vertex {
            position: [right, -0.5, 0.0],
            tex_coord: [1.0, 1.0],
        },
        Vertex {
            position: [left, -0.5, 0.0],
            tex_coord: [0.0, 1.0],
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn centered_quad_is_a_unit_square_at_the_origin() {
        let vertices = quad_vertices(Placement::Centered);

        assert_eq!(vertices[0].position, [-0.5, 0.5, 0.0]);
        assert_eq!(vertices[1].position, [0.5, 0.5, 0.0]);
        assert_eq!(vertices[2].position, [0.5, -0.5, 0.0]);
        assert_eq!(vertices[3].position, [-0.5, -0.5, 0.0]);
    }

    #[test]
    fn indexed_quad_center_and_width() {
        // (4, 4) is an index equal to the frame count; the formula applies
        // without range validation.
        for &(index, num_frames) in &[(0, 1), (2, 5), (4, 4)] {
            let placement = Placement::Indexed { index, num_frames };
            let vertices = quad_vertices(placement);

            let center = (index as i32 - num_frames as i32 / 2) as f32;
            let left = vertices[0].position[0];
            let right = vertices[1].position[0];

            assert_eq!(placement.center_x(), center);
            assert_eq!(left, center - 0.25);
            assert_eq!(right, center + 0.25);
            assert_eq!(right - left, 0.5);
        }
    }

    #[test]
    fn indexed_quad_rows_do_not_overlap() {
        let num_frames = 5;
        for index in 1..num_frames {
            let previous = Placement::Indexed {
                index: index - 1,
                num_frames,
            };
            let current = Placement::Indexed { index, num_frames };

            assert!(
                previous.center_x() + previous.half_width()
                    < current.center_x() - current.half_width()
            );
        }
    }

    #[test]
    fn index_order_is_two_triangles() {
        assert_eq!(QUAD_INDICES, [0, 1, 2, 0, 2, 3]);
    }

    #[test]
    fn tex_coords_map_image_corners() {
        for &placement in &[
            Placement::Centered,
            Placement::Indexed {
                index: 2,
                num_frames: 5,
            },
        ] {
            let vertices = quad_vertices(placement);

            // (0, 0) on the top-left vertex, (1, 1) on the bottom-right.
            assert_eq!(vertices[0].tex_coord, [0.0, 0.0]);
            assert_eq!(vertices[1].tex_coord, [1.0, 0.0]);
            assert_eq!(vertices[2].tex_coord, [1.0, 1.0]);
            assert_eq!(vertices[3].tex_coord, [0.0, 1.0]);
        }
    }

    #[test]
    fn quads_lie_in_the_xy_plane() {
        for &placement in &[
            Placement::Centered,
            Placement::Indexed {
                index: 4,
                num_frames: 4,
            },
        ] {
            for vertex in &quad_vertices(placement) {
                assert_eq!(vertex.position[2], 0.0);
            }
        }
    }
}
