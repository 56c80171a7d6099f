use nalgebra::Vector3;

use crate::{
    vector::{normalize, WORLD_UP},
    Ray,
};

pub const ROTATION_STEP: f64 = 0.07;
pub const PITCH_LIMIT: f64 = 1.2;
/// Points projected further out than this, in normalized viewport units, are dropped.
const PROJECTION_MARGIN: f64 = 1.2;
const PROJECTION_NEAR: f64 = 0.01;

/// Fixed-position camera that only turns.
///
/// Yaw 0 looks down -z; positive pitch looks up.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Camera {
    pub position: Vector3<f64>,
    pub yaw: f64,
    pub pitch: f64,
    /// Vertical field of view, radians.
    pub fov: f64,
}

/// Orthonormal view frame derived from yaw and pitch.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Basis {
    pub forward: Vector3<f64>,
    pub right: Vector3<f64>,
    pub up: Vector3<f64>,
}

impl Default for Camera {
    fn default() -> Self {
        Self {
            position: Vector3::new(0.0, 1.0, 0.9),
            yaw: 0.0,
            pitch: -0.2,
            fov: 70f64.to_radians(),
        }
    }
}

impl Camera {
    pub fn turn(&mut self, delta: f64) {
        self.yaw += delta;
    }

    pub fn tilt(&mut self, delta: f64) {
        self.set_pitch(self.pitch + delta);
    }

    pub fn set_pitch(&mut self, pitch: f64) {
        self.pitch = pitch.clamp(-PITCH_LIMIT, PITCH_LIMIT);
    }

    pub fn basis(&self) -> Basis {
        let (sin_yaw, cos_yaw) = self.yaw.sin_cos();
        let (sin_pitch, cos_pitch) = self.pitch.sin_cos();
        let forward = normalize(Vector3::new(
            sin_yaw * cos_pitch,
            sin_pitch,
            -cos_yaw * cos_pitch,
        ));
        let right = normalize(forward.cross(&WORLD_UP));
        let up = normalize(right.cross(&forward));
        Basis { forward, right, up }
    }

    /// Primary ray through the center of pixel (`x`, `y`) of a `width`×`height` frame.
    pub fn cast(&self, basis: &Basis, x: usize, y: usize, width: usize, height: usize) -> Ray {
        let (w, h) = (width as f64, height as f64);
        let scale = (self.fov / 2.0).tan();
        let aspect = w / h;
        let u = (2.0 * (x as f64 + 0.5) / w - 1.0) * aspect * scale;
        let v = (1.0 - 2.0 * (y as f64 + 0.5) / h) * scale;
        Ray {
            origin: self.position,
            direction: normalize(basis.forward + basis.right * u + basis.up * v),
        }
    }

    /// Screen position of a world point, for overlays.
    ///
    /// `None` when the point is behind the camera or well outside the frame.
    pub fn project(&self, point: Vector3<f64>, width: usize, height: usize) -> Option<(f64, f64)> {
        let (w, h) = (width as f64, height as f64);
        let half_height = (self.fov / 2.0).tan();
        let half_width = w / h * half_height;
        let basis = self.basis();

        let rel = point - self.position;
        let vz = rel.dot(&basis.forward);
        if vz <= PROJECTION_NEAR {
            return None;
        }

        let nx = rel.dot(&basis.right) / (vz * half_width);
        let ny = rel.dot(&basis.up) / (vz * half_height);
        let visible = -PROJECTION_MARGIN..=PROJECTION_MARGIN;
        if !visible.contains(&nx) || !visible.contains(&ny) {
            return None;
        }

        Some(((nx + 1.0) * 0.5 * w, (1.0 - ny) * 0.5 * h))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn level() -> Camera {
        Camera {
            position: Vector3::zeros(),
            yaw: 0.0,
            pitch: 0.0,
            fov: std::f64::consts::FRAC_PI_2,
        }
    }

    #[test]
    fn level_basis_looks_down_negative_z() {
        let basis = level().basis();
        assert!((basis.forward - Vector3::new(0.0, 0.0, -1.0)).norm() < 1e-12);
        assert!((basis.right - Vector3::new(1.0, 0.0, 0.0)).norm() < 1e-12);
        assert!((basis.up - Vector3::new(0.0, 1.0, 0.0)).norm() < 1e-12);
    }

    #[test]
    fn center_pixel_looks_forward() {
        let camera = level();
        let ray = camera.cast(&camera.basis(), 1, 1, 3, 3);
        assert!((ray.direction - Vector3::new(0.0, 0.0, -1.0)).norm() < 1e-12);
    }

    #[test]
    fn corner_pixels_span_the_field_of_view() {
        let camera = level();
        let basis = camera.basis();
        let top_left = camera.cast(&basis, 0, 0, 2, 2).direction;
        assert!(top_left.x < 0.0 && top_left.y > 0.0);
        // 90° fov, 2x2 frame: pixel centers sit at ±0.5 on the image plane
        let expected = normalize(Vector3::new(-0.5, 0.5, -1.0));
        assert!((top_left - expected).norm() < 1e-12);
    }

    #[test]
    fn tilt_is_clamped() {
        let mut camera = level();
        for _ in 0..100 {
            camera.tilt(ROTATION_STEP);
        }
        assert_eq!(camera.pitch, PITCH_LIMIT);
        for _ in 0..100 {
            camera.tilt(-ROTATION_STEP);
        }
        assert_eq!(camera.pitch, -PITCH_LIMIT);
    }

    #[test]
    fn project_point_ahead_lands_in_center() {
        let (sx, sy) = level()
            .project(Vector3::new(0.0, 0.0, -3.0), 200, 100)
            .unwrap();
        assert!((sx - 100.0).abs() < 1e-9);
        assert!((sy - 50.0).abs() < 1e-9);
    }

    #[test]
    fn project_rejects_points_behind_and_far_off_axis() {
        let camera = level();
        assert!(camera.project(Vector3::new(0.0, 0.0, 3.0), 100, 100).is_none());
        assert!(camera.project(Vector3::new(5.0, 0.0, -1.0), 100, 100).is_none());
    }

    #[test]
    fn project_inverts_cast() {
        let camera = Camera::default();
        let ray = camera.cast(&camera.basis(), 30, 20, 64, 48);
        let (sx, sy) = camera.project(ray.at(2.0), 64, 48).unwrap();
        assert!((sx - 30.5).abs() < 1e-9);
        assert!((sy - 20.5).abs() < 1e-9);
    }
}
