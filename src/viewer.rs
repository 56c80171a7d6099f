//! SDL2 window: shows the frame, arrow keys turn the camera.

use std::error::Error;

use sdl2::{event::Event, keyboard::Keycode, pixels::Color as SdlColor};

use crate::{camera::ROTATION_STEP, render, Camera, FrameBuffer, Light, Scene};

const MARKER_RADIUS: i64 = 3;
const BASE_MARKER: SdlColor = SdlColor::RGBA(255, 255, 230, 255);
const SECOND_MARKER: SdlColor = SdlColor::RGBA(200, 220, 255, 255);

pub fn run(scene: Scene, mut camera: Camera, mut frame: FrameBuffer) -> Result<(), Box<dyn Error>> {
    let (width, height) = (frame.width(), frame.height());
    let sdl2_context = sdl2::init()?;
    let mut canvas = sdl2_context
        .video()?
        .window("cornell", width as u32, height as u32)
        .position_centered()
        .build()?
        .into_canvas()
        .build()?;
    let texture_creator = canvas.texture_creator();
    let mut texture = texture_creator.create_texture_streaming(
        sdl2::pixels::PixelFormatEnum::RGBA32,
        width as u32,
        height as u32,
    )?;
    let mut events = sdl2_context.event_pump()?;
    let mut dirty = true;

    'main: loop {
        for event in events.poll_iter() {
            match event {
                Event::Quit { .. }
                | Event::KeyDown {
                    keycode: Some(Keycode::Escape),
                    ..
                } => break 'main,
                Event::KeyDown {
                    keycode: Some(key), ..
                } => {
                    dirty |= steer(&mut camera, key);
                }
                _ => continue,
            }
        }

        if dirty {
            render(&scene, &camera, &mut frame, |percent| {
                log::debug!("rendering {}%", percent)
            });
            for (light, color) in markers(&scene) {
                mark_light(&mut frame, &camera, light, color);
            }
            texture.update(None, frame.pixel_data(), width * 4)?;
            canvas.copy(&texture, None, None)?;
            canvas.present();
            dirty = false;
        }

        std::thread::sleep(std::time::Duration::from_millis(16));
    }
    Ok(())
}

/// Applies an arrow key to the camera. Returns whether the view changed.
fn steer(camera: &mut Camera, key: Keycode) -> bool {
    match key {
        Keycode::Left => camera.turn(-ROTATION_STEP),
        Keycode::Right => camera.turn(ROTATION_STEP),
        Keycode::Up => camera.tilt(-ROTATION_STEP),
        Keycode::Down => camera.tilt(ROTATION_STEP),
        _ => return false,
    }
    log::debug!("yaw {:.2} pitch {:.2}", camera.yaw, camera.pitch);
    true
}

/// Enabled lights, each with its own marker color.
fn markers(scene: &Scene) -> impl Iterator<Item = (&Light, SdlColor)> {
    [
        (scene.base_light(), BASE_MARKER),
        (scene.second_light(), SECOND_MARKER),
    ]
    .into_iter()
    .filter(|(light, _)| light.enabled)
}

fn mark_light(frame: &mut FrameBuffer, camera: &Camera, light: &Light, marker: SdlColor) {
    let Some((sx, sy)) = camera.project(light.position, frame.width(), frame.height()) else {
        return;
    };
    let (cx, cy) = (sx as i64, sy as i64);
    for y in cy - MARKER_RADIUS..=cy + MARKER_RADIUS {
        for x in cx - MARKER_RADIUS..=cx + MARKER_RADIUS {
            if (0..frame.width() as i64).contains(&x) && (0..frame.height() as i64).contains(&y) {
                frame.set_pixel(x as usize, y as usize, marker);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::LightPreset;

    #[test]
    fn second_light_gets_its_own_marker() {
        let mut scene = Scene::cornell_box();
        let colors: Vec<_> = markers(&scene).map(|(_, c)| c).collect();
        assert_eq!(colors, vec![BASE_MARKER]);

        scene.set_second_light(true, LightPreset::LeftWall);
        let colors: Vec<_> = markers(&scene).map(|(_, c)| c).collect();
        assert_eq!(colors, vec![BASE_MARKER, SECOND_MARKER]);
        assert_ne!(BASE_MARKER, SECOND_MARKER);
    }

    #[test]
    fn marker_is_drawn_in_the_light_color() {
        let camera = Camera::default();
        let mut frame = FrameBuffer::new(64, 48);
        let light = Light {
            position: camera.position + camera.basis().forward * 2.0,
            ..Light::second()
        };
        mark_light(&mut frame, &camera, &light, SECOND_MARKER);
        let (sx, sy) = camera.project(light.position, 64, 48).unwrap();
        assert_eq!(frame.pixel(sx as usize, sy as usize), [200, 220, 255, 255]);
    }
}
