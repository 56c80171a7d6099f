use crate::{
    hit::{Intersect, Intersection, MIN_T},
    Ray,
};
use nalgebra::Vector3;

const FACE_EPSILON: f64 = 1e-3;

/// Axis-aligned box, `min` strictly below `max` on every axis.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Cuboid {
    pub min: Vector3<f64>,
    pub max: Vector3<f64>,
}

impl Cuboid {
    /// Outward normal of the first face (-x, +x, -y, +y, -z, +z) that `point` lies on.
    ///
    /// Edges and corners resolve to the earliest face in that order. A point on
    /// no face gets a zero normal.
    fn face_normal(&self, point: Vector3<f64>) -> Vector3<f64> {
        for axis in 0..3 {
            let mut normal = Vector3::zeros();
            if (point[axis] - self.min[axis]).abs() < FACE_EPSILON {
                normal[axis] = -1.0;
                return normal;
            }
            if (point[axis] - self.max[axis]).abs() < FACE_EPSILON {
                normal[axis] = 1.0;
                return normal;
            }
        }
        Vector3::zeros()
    }
}

impl Intersect for Cuboid {
    fn intersect(&self, ray: &Ray) -> Option<Intersection> {
        let inv = ray.direction.map(|d| 1.0 / d);
        let near = (self.min - ray.origin).component_mul(&inv);
        let far = (self.max - ray.origin).component_mul(&inv);

        let tmin = (0..3)
            .map(|axis| near[axis].min(far[axis]))
            .fold(f64::NEG_INFINITY, f64::max);
        let tmax = (0..3)
            .map(|axis| near[axis].max(far[axis]))
            .fold(f64::INFINITY, f64::min);

        if tmax < MIN_T || tmin > tmax {
            return None;
        }

        let t = if tmin < MIN_T { tmax } else { tmin };
        let point = ray.at(t);

        Some(Intersection {
            t,
            point,
            normal: self.face_normal(point),
        })
    }
}
