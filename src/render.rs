use std::time::Instant;

use crate::{error::Error, error::Result, shade::cast_ray, Camera, FrameBuffer, Scene};

pub const MAX_DEPTH: u32 = 3;
pub const PROGRESS_ROWS: usize = 16;

/// Traces every pixel of `frame`, rows top to bottom.
///
/// `progress` receives the completed percentage after each batch of
/// [`PROGRESS_ROWS`] rows and once more at 100.
pub fn render(scene: &Scene, camera: &Camera, frame: &mut FrameBuffer, mut progress: impl FnMut(u32)) {
    let (width, height) = (frame.width(), frame.height());
    let basis = camera.basis();
    let start = Instant::now();

    for y in 0..height {
        for x in 0..width {
            let ray = camera.cast(&basis, x, y, width, height);
            frame.set_pixel(x, y, cast_ray(scene, &ray, MAX_DEPTH));
        }
        let done = y + 1;
        if done % PROGRESS_ROWS == 0 && done < height {
            let percent = (done as f64 / height as f64 * 100.0).round() as u32;
            log::debug!("rendered {}/{} rows", done, height);
            progress(percent);
        }
    }

    progress(100);
    log::info!("rendered {}x{} in {:?}", width, height, start.elapsed());
}

/// A fresh frame of the given size.
///
/// Rejects empty frames and sizes whose RGBA buffer or PNG header would overflow.
pub fn frame(width: usize, height: usize) -> Result<FrameBuffer> {
    let fits = width
        .checked_mul(height)
        .and_then(|pixels| pixels.checked_mul(4))
        .is_some()
        && u32::try_from(width).is_ok()
        && u32::try_from(height).is_ok();
    if width == 0 || height == 0 || !fits {
        return Err(Error::InvalidResolution { width, height });
    }
    Ok(FrameBuffer::new(width, height))
}
