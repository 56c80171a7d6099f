use crate::{
    hit::{Intersect, Intersection, MIN_T},
    Ray,
};
use nalgebra::Vector3;

const PARALLEL_EPSILON: f64 = 1e-4;
const BOUNDS_EPSILON: f64 = 1e-4;

/// Axis-aligned region outside of which a plane does not register hits.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RoomBounds {
    pub min: Vector3<f64>,
    pub max: Vector3<f64>,
}

impl RoomBounds {
    /// The room every wall of the default scene is clipped to.
    pub const ROOM: Self = Self {
        min: Vector3::new(-1.0, 0.0, -1.0),
        max: Vector3::new(1.0, 2.0, 1.0),
    };

    pub fn contains(&self, p: Vector3<f64>) -> bool {
        (0..3).all(|axis| {
            p[axis] >= self.min[axis] - BOUNDS_EPSILON && p[axis] <= self.max[axis] + BOUNDS_EPSILON
        })
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Plane {
    pub point: Vector3<f64>,
    pub normal: Vector3<f64>,
    pub bounds: RoomBounds,
}

impl Plane {
    pub fn new(point: Vector3<f64>, normal: Vector3<f64>) -> Self {
        Self {
            point,
            normal,
            bounds: RoomBounds::ROOM,
        }
    }

    pub fn with_bounds(self, bounds: RoomBounds) -> Self {
        Self { bounds, ..self }
    }
}

impl Intersect for Plane {
    fn intersect(&self, ray: &Ray) -> Option<Intersection> {
        let denom = ray.direction.dot(&self.normal);

        if denom.abs() < PARALLEL_EPSILON {
            return None;
        }

        let t = (self.point - ray.origin).dot(&self.normal) / denom;

        if t < MIN_T {
            return None;
        }

        let point = ray.at(t);

        if !self.bounds.contains(point) {
            return None;
        }

        Some(Intersection {
            t,
            point,
            normal: self.normal,
        })
    }
}
