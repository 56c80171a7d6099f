use crate::{
    cuboid::Cuboid,
    error::{Error, Result},
    hit::{Hit, Intersect},
    light::{Light, LightPreset},
    plane::Plane,
    sphere::Sphere,
    surface::{Material, Shape, Surface},
    Color, Ray,
};
use nalgebra::Vector3;

/// Walls and objects of the room plus its two lights.
///
/// Geometry is fixed once built; only materials and the second light
/// change, through the setters below.
#[derive(Clone, Debug)]
pub struct Scene {
    walls: Vec<Surface>,
    objects: Vec<Surface>,
    base_light: Light,
    second_light: Light,
}

impl Scene {
    pub fn new(walls: Vec<Surface>, objects: Vec<Surface>) -> Self {
        Self {
            walls,
            objects,
            base_light: Light::base(),
            second_light: Light::second(),
        }
    }

    /// The default room: six walls, two boxes and two spheres.
    pub fn cornell_box() -> Self {
        let grey = Color::new(0.8, 0.8, 0.8);
        let wall = |name: &str, point: [f64; 3], normal: [f64; 3], color: Color| {
            Surface::wall(
                name,
                Plane::new(Vector3::from(point), Vector3::from(normal)),
                Material::diffuse(color),
            )
        };
        let walls = vec![
            wall("wall-left", [-1.0, 0.0, 0.0], [1.0, 0.0, 0.0], Color::new(0.75, 0.15, 0.15)),
            wall("wall-right", [1.0, 0.0, 0.0], [-1.0, 0.0, 0.0], Color::new(0.15, 0.25, 0.85)),
            wall("wall-back", [0.0, 0.0, -1.0], [0.0, 0.0, 1.0], grey),
            wall("wall-front", [0.0, 0.0, 1.0], [0.0, 0.0, -1.0], grey),
            wall("wall-floor", [0.0, 0.0, 0.0], [0.0, 1.0, 0.0], grey),
            wall("wall-ceil", [0.0, 2.0, 0.0], [0.0, -1.0, 0.0], grey),
        ];

        let objects = vec![
            Surface::object(
                "cube1",
                Shape::Cuboid(Cuboid {
                    min: Vector3::new(-0.7, 0.0, -0.05),
                    max: Vector3::new(-0.25, 0.6, 0.45),
                }),
                Material::diffuse(Color::new(0.9, 0.85, 0.2)).with_refractive_index(1.5),
            ),
            Surface::object(
                "cube2",
                Shape::Cuboid(Cuboid {
                    min: Vector3::new(0.15, 0.0, -0.85),
                    max: Vector3::new(0.65, 1.0, -0.35),
                }),
                Material::diffuse(Color::new(0.9, 0.6, 0.7)).with_refractive_index(1.5),
            ),
            Surface::object(
                "sphere1",
                Shape::Sphere(Sphere {
                    center: Vector3::new(-0.32, 0.3, -0.6),
                    radius: 0.28,
                }),
                Material::diffuse(Color::new(0.6, 0.9, 0.6)).with_refractive_index(1.3),
            ),
            Surface::object(
                "sphere2",
                Shape::Sphere(Sphere {
                    center: Vector3::new(0.4, 0.5, 0.1),
                    radius: 0.2,
                }),
                Material::diffuse(Color::new(0.9, 0.6, 0.9)).with_refractive_index(1.4),
            ),
        ];

        Self::new(walls, objects)
    }

    pub fn walls(&self) -> &[Surface] {
        &self.walls
    }

    pub fn objects(&self) -> &[Surface] {
        &self.objects
    }

    /// Walls first, then objects, in construction order.
    pub fn surfaces(&self) -> impl Iterator<Item = &Surface> {
        self.walls.iter().chain(self.objects.iter())
    }

    /// Nearest hit along `ray` over every surface.
    ///
    /// On equal `t` the earlier surface wins.
    pub fn trace_closest(&self, ray: &Ray) -> Option<Hit<'_>> {
        let mut closest: Option<Hit<'_>> = None;
        for surface in self.surfaces() {
            if let Some(intersection) = surface.intersect(ray) {
                if closest.map_or(true, |c| intersection.t < c.t) {
                    closest = Some(Hit::new(intersection, surface));
                }
            }
        }
        closest
    }

    pub fn surface(&self, name: &str) -> Result<&Surface> {
        self.surfaces()
            .find(|s| s.name() == name)
            .ok_or_else(|| Error::UnknownSurface(name.to_owned()))
    }

    pub fn surface_mut(&mut self, name: &str) -> Result<&mut Surface> {
        self.walls
            .iter_mut()
            .chain(self.objects.iter_mut())
            .find(|s| s.name() == name)
            .ok_or_else(|| Error::UnknownSurface(name.to_owned()))
    }

    pub fn set_mirror(&mut self, name: &str, on: bool) -> Result<()> {
        self.surface_mut(name)?.set_mirror(on);
        Ok(())
    }

    pub fn set_transparency(&mut self, name: &str, transparency: f64) -> Result<()> {
        self.surface_mut(name)?.set_transparency(transparency);
        Ok(())
    }

    pub fn set_color(&mut self, name: &str, color: Color) -> Result<()> {
        self.surface_mut(name)?.set_color(color);
        Ok(())
    }

    /// Lights that contribute to shading. The base light is always first.
    pub fn lights(&self) -> impl Iterator<Item = &Light> {
        std::iter::once(&self.base_light).chain(Some(&self.second_light).filter(|l| l.enabled))
    }

    pub fn base_light(&self) -> &Light {
        &self.base_light
    }

    pub fn second_light(&self) -> &Light {
        &self.second_light
    }

    pub fn set_second_light(&mut self, enabled: bool, preset: LightPreset) {
        self.second_light.enabled = enabled;
        self.second_light.position = preset.position();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cornell_box_layout() {
        let scene = Scene::cornell_box();
        assert_eq!(scene.walls().len(), 6);
        assert_eq!(scene.objects().len(), 4);
        assert_eq!(scene.lights().count(), 1);
    }

    #[test]
    fn second_light_toggles() {
        let mut scene = Scene::cornell_box();
        scene.set_second_light(true, LightPreset::CeilingLeftCorner);
        let lights: Vec<_> = scene.lights().collect();
        assert_eq!(lights.len(), 2);
        assert_eq!(lights[1].position, Vector3::new(-0.9, 1.9, -0.9));
        scene.set_second_light(false, LightPreset::LeftWall);
        assert_eq!(scene.lights().count(), 1);
    }

    #[test]
    fn closest_hit_prefers_object_in_front_of_wall() {
        let scene = Scene::cornell_box();
        // straight down through sphere2 onto the floor
        let ray = Ray::new(Vector3::new(0.4, 1.5, 0.1), Vector3::new(0.0, -1.0, 0.0));
        let hit = scene.trace_closest(&ray).unwrap();
        assert_eq!(hit.surface.name(), "sphere2");
        assert!((hit.t - 0.8).abs() < 1e-9);
    }

    #[test]
    fn ray_leaving_the_room_misses() {
        let scene = Scene::cornell_box();
        let ray = Ray::new(Vector3::new(0.0, 5.0, 0.0), Vector3::new(0.0, 1.0, 0.0));
        assert!(scene.trace_closest(&ray).is_none());
    }

    #[test]
    fn unknown_surface_is_an_error() {
        let mut scene = Scene::cornell_box();
        assert!(matches!(
            scene.set_mirror("wall-sideways", true),
            Err(Error::UnknownSurface(name)) if name == "wall-sideways"
        ));
    }

    #[test]
    fn setters_reach_surfaces() {
        let mut scene = Scene::cornell_box();
        scene.set_transparency("sphere1", 2.0).unwrap();
        scene.set_mirror("wall-back", true).unwrap();
        scene.set_color("cube1", Color::new(0.1, 0.2, 0.3)).unwrap();
        assert_eq!(scene.surface("sphere1").unwrap().material().transparency, 1.0);
        assert_eq!(scene.surface("wall-back").unwrap().material().mirror_strength, 1.0);
        assert_eq!(
            scene.surface("cube1").unwrap().material().color,
            Color::new(0.1, 0.2, 0.3)
        );
    }
}
