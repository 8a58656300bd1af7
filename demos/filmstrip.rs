use std::rc::Rc;
use std::time::Instant;

use coarse_prof::profile;
use floating_duration::TimeAsFloat;
use glium::{glutin, Surface};
use nalgebra as na;

const WINDOW_SIZE: (u32, u32) = (1280, 720);
const NUM_FRAMES: u32 = 5;

fn main() {
    simple_logger::init_with_level(log::Level::Info).unwrap();

    // Initialize glium
    let event_loop = glutin::event_loop::EventLoop::new();
    let window_builder = glutin::window::WindowBuilder::new()
        .with_inner_size(glutin::dpi::LogicalSize::new(
            WINDOW_SIZE.0 as f64,
            WINDOW_SIZE.1 as f64,
        ))
        .with_title("Texquad example: Filmstrip");
    let context_builder = glutin::ContextBuilder::new();
    let display = glium::Display::new(window_builder, context_builder, &event_loop).unwrap();

    // One texture, shared by every quad in the strip.
    let texture = Rc::new(texquad::load_texture(&display, gradient(256)).unwrap());
    let quads = texquad::filmstrip(&display, texture, NUM_FRAMES).unwrap();

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
            glutin::event::Event::WindowEvent {
                event: glutin::event::WindowEvent::KeyboardInput { input, .. },
                ..
            } => {
                if input.state == glutin::event::ElementState::Pressed
                    && input.virtual_keycode == Some(glutin::event::VirtualKeyCode::P)
                {
                    coarse_prof::write(&mut std::io::stdout()).unwrap();
                    coarse_prof::reset();
                }
            }
            glutin::event::Event::MainEventsCleared => {
                profile!("frame");

                let time = start_time.elapsed().as_fractional_secs() as f32;

                let mut target = display.draw();
                target.clear_color(0.1, 0.1, 0.1, 1.0);

                let view_projection = view_projection(target.get_dimensions());

                for (index, quad) in quads.iter().enumerate() {
                    let bob = (time * 2.0 + index as f32).sin() * 0.2;
                    let model =
                        na::Matrix4::new_translation(&na::Vector3::new(0.0, bob, 0.0));

                    quad.draw(&(view_projection * model), &mut target).unwrap();
                }

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
        // The strip of NUM_FRAMES quads is centered around x = 0; pull the
        // eye back far enough to see all of it.
        &na::Point3::new(0.0, 0.0, 4.5),
        &na::Point3::new(0.0, 0.0, 0.0),
        &na::Vector3::new(0.0, 1.0, 0.0),
    );

    projection * view
}

fn gradient(size: u32) -> image::RgbaImage {
    image::RgbaImage::from_fn(size, size, |x, y| {
        let r = (x * 255 / size) as u8;
        let g = (y * 255 / size) as u8;
        image::Rgba([r, g, 128, 255])
    })
}
