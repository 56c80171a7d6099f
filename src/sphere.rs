use crate::{
    hit::{Intersect, Intersection, MIN_T},
    vector::normalize,
    Ray,
};
use nalgebra::Vector3;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Sphere {
    pub center: Vector3<f64>,
    pub radius: f64,
}

impl Intersect for Sphere {
    /// Expects a unit-length ray direction.
    fn intersect(&self, ray: &Ray) -> Option<Intersection> {
        let l = self.center - ray.origin;
        let tca = l.dot(&ray.direction);
        let d2 = l.dot(&l) - tca * tca;
        let r2 = self.radius * self.radius;

        if d2 > r2 {
            return None;
        }

        let thc = (r2 - d2).sqrt();
        let (t0, t1) = (tca - thc, tca + thc);

        // origin inside the sphere: only the far root is ahead
        let t = if t0 >= MIN_T { t0 } else { t1 };

        if t < MIN_T {
            return None;
        }

        let point = ray.at(t);
        Some(Intersection {
            t,
            point,
            normal: normalize(point - self.center),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn unit() -> Sphere {
        Sphere {
            center: Vector3::zeros(),
            radius: 1.0,
        }
    }

    #[test]
    fn hit_from_outside() {
        let ray = Ray::new(Vector3::new(0.0, 0.0, -5.0), Vector3::new(0.0, 0.0, 1.0));
        let hit = unit().intersect(&ray).unwrap();
        assert!((hit.t - 4.0).abs() < 1e-12);
        assert!((hit.point - Vector3::new(0.0, 0.0, -1.0)).norm() < 1e-12);
        assert!((hit.normal - Vector3::new(0.0, 0.0, -1.0)).norm() < 1e-12);
    }

    #[test]
    fn hit_from_inside_uses_far_root() {
        let ray = Ray::new(Vector3::zeros(), Vector3::new(0.0, 1.0, 0.0));
        let hit = unit().intersect(&ray).unwrap();
        assert!((hit.t - 1.0).abs() < 1e-12);
        assert!((hit.normal - Vector3::new(0.0, 1.0, 0.0)).norm() < 1e-12);
    }

    #[test]
    fn miss() {
        let ray = Ray::new(Vector3::new(0.0, 2.0, -5.0), Vector3::new(0.0, 0.0, 1.0));
        assert!(unit().intersect(&ray).is_none());
    }

    #[test]
    fn sphere_behind_ray_is_rejected() {
        let ray = Ray::new(Vector3::new(0.0, 0.0, 5.0), Vector3::new(0.0, 0.0, 1.0));
        assert!(unit().intersect(&ray).is_none());
    }
}
