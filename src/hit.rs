use crate::{surface::Surface, Ray};
use nalgebra::Vector3;

/// Hits closer than this are treated as the ray re-striking its own origin.
pub const MIN_T: f64 = 0.001;

pub trait Intersect {
    fn intersect(&self, ray: &Ray) -> Option<Intersection>;
}

/// Geometry of a single ray/primitive hit.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Intersection {
    pub t: f64,
    pub point: Vector3<f64>,
    pub normal: Vector3<f64>,
}

/// An intersection together with the surface it struck.
#[derive(Clone, Copy, Debug)]
pub struct Hit<'a> {
    pub t: f64,
    pub point: Vector3<f64>,
    pub normal: Vector3<f64>,
    pub surface: &'a Surface,
}

impl<'a> Hit<'a> {
    pub(crate) fn new(intersection: Intersection, surface: &'a Surface) -> Self {
        Self {
            t: intersection.t,
            point: intersection.point,
            normal: intersection.normal,
            surface,
        }
    }
}
