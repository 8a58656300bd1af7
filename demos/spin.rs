use std::time::Instant;

use floating_duration::TimeAsFloat;
use glium::{glutin, Surface};
use nalgebra as na;

use texquad::{Placement, TextureSource, TexturedQuad};

const WINDOW_SIZE: (u32, u32) = (1024, 768);

fn main() {
    simple_logger::init_with_level(log::Level::Info).unwrap();

    // Initialize glium
    let event_loop = glutin::event_loop::EventLoop::new();
    let window_builder = glutin::window::WindowBuilder::new()
        .with_inner_size(glutin::dpi::LogicalSize::new(
            WINDOW_SIZE.0 as f64,
            WINDOW_SIZE.1 as f64,
        ))
        .with_title("Texquad example: Spin");
    let context_builder = glutin::ContextBuilder::new();
    let display = glium::Display::new(window_builder, context_builder, &event_loop).unwrap();

    let quad = TexturedQuad::create(
        &display,
        TextureSource::Image(checkerboard(256, 32)),
        Placement::Centered,
    )
    .unwrap();

    let start_time = Instant::now();
    event_loop.run(move |event, _, control_flow| {
        *control_flow = glutin::event_loop::ControlFlow::Poll;

        match event {
            glutin::event::Event::WindowEvent {
                event: glutin::event::WindowEvent::CloseRequested,
                ..
            } => {
                *control_flow = glutin::event_loop::ControlFlow::Exit;
            }
            glutin::event::Event::MainEventsCleared => {
                let angle = start_time.elapsed().as_fractional_secs() as f32;

                let mut target = display.draw();
                target.clear_color(0.1, 0.1, 0.1, 1.0);

                let mvp = view_projection(target.get_dimensions())
                    * na::Matrix4::from_euler_angles(0.0, 0.0, angle);
                quad.draw(&mvp, &mut target).unwrap();

                target.finish().unwrap();
            }
            _ => (),
        }
    });
}

fn view_projection((width, height): (u32, u32)) -> na::Matrix4<f32> {
    let projection = na::Perspective3::new(
        width as f32 / height as f32,
        60.0f32.to_radians(),
        0.1,
        100.0,
    )
    .to_homogeneous();
    let view = na::Matrix4::look_at_rh(
        &na::Point3::new(0.0, 0.0, 2.0),
        &na::Point3::new(0.0, 0.0, 0.0),
        &na::Vector3::new(0.0, 1.0, 0.0),
    );

    projection * view
}

fn checkerboard(size: u32, cell: u32) -> image::RgbaImage {
    image::RgbaImage::from_fn(size, size, |x, y| {
        if (x / cell + y / cell) % 2 == 0 {
            image::Rgba([230, 230, 230, 255])
        } else {
            image::Rgba([40, 90, 160, 255])
        }
    })
}
