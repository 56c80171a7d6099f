use nalgebra::Vector3;

/// Linear RGB, unbounded until it is quantized into a frame.
pub type Color = Vector3<f64>;

pub const WORLD_UP: Vector3<f64> = Vector3::new(0.0, 1.0, 0.0);

/// Scales `v` to unit length. A zero vector comes back unchanged.
pub fn normalize(v: Vector3<f64>) -> Vector3<f64> {
    let length = v.norm();
    if length == 0.0 {
        v
    } else {
        v / length
    }
}

/// Mirrors `v` about the unit normal `n`.
pub fn reflect(v: Vector3<f64>, n: Vector3<f64>) -> Vector3<f64> {
    v - n * (2.0 * v.dot(&n))
}

/// Snell refraction of the unit direction `v` through a surface with unit normal `n`.
///
/// Returns `None` on total internal reflection.
pub fn refract(v: Vector3<f64>, n: Vector3<f64>, ior_from: f64, ior_to: f64) -> Option<Vector3<f64>> {
    let r = ior_from / ior_to;
    let cos_i = -n.dot(&v);
    let sin_t2 = r * r * (1.0 - cos_i * cos_i);
    if sin_t2 > 1.0 {
        return None;
    }
    let cos_t = (1.0 - sin_t2).sqrt();
    Some(v * r + n * (r * cos_i - cos_t))
}
