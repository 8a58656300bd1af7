use log::info;

use crate::CreationError;

/// The quad's vertex/fragment pair is fixed: transform the local position by
/// the caller's MVP matrix and sample one texture at the interpolated
/// coordinate. No lighting, no blending logic, no discard.
///
/// The `in` variable names are the binding contract with
/// `geometry::Vertex`'s field names.
pub const VERTEX_SRC: &str = "
    #version 140

    uniform mat4 mat_mvp;

    in vec3 position;
    in vec2 tex_coord;

    out vec2 v_tex_coord;

    void main() {
        gl_Position = mat_mvp * vec4(position, 1.0);

        v_tex_coord = tex_coord;
    }
";

pub const FRAGMENT_SRC: &str = "
    #version 140

    uniform sampler2D quad_texture;

    in vec2 v_tex_coord;

    out vec4 f_color;

    void main() {
        f_color = texture(quad_texture, v_tex_coord);
    }
";

/// Compiles and links the quad program. Compile and link status are checked
/// by glium; a failure carries the compiler's diagnostic log in the returned
/// `ProgramCreationError`.
pub fn create_program<F: glium::backend::Facade>(
    facade: &F,
) -> Result<glium::Program, CreationError> {
    info!("Creating textured quad program");

    // We use the long form of `glium::Program` construction here, since
    // glium by default sets `outputs_srgb` to false, which causes it to
    // enable `GL_FRAMEBUFFER_SRGB` later on when rendering, making
    // already-corrected texture colors turn out too light.
    let program = glium::Program::new(
        facade,
        glium::program::ProgramCreationInput::SourceCode {
            vertex_shader: VERTEX_SRC,
            fragment_shader: FRAGMENT_SRC,
            geometry_shader: None,
            tessellation_control_shader: None,
            tessellation_evaluation_shader: None,
            transform_feedback_varyings: None,
            outputs_srgb: true,
            uses_point_size: false,
        },
    )?;

    Ok(program)
}
