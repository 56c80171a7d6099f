use crate::{
    cuboid::Cuboid,
    hit::{Intersect, Intersection},
    plane::Plane,
    sphere::Sphere,
    Color, Ray,
};

/// Palette a wall switches to while it is mirrored.
pub const MIRROR_WALL_COLOR: Color = Color::new(0.95, 0.95, 0.95);

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Material {
    pub color: Color,
    /// 0 or 1 in practice; stored as a weight for blending.
    pub mirror_strength: f64,
    pub transparency: f64,
    /// Carried for completeness, shading passes transmitted rays straight through.
    pub refractive_index: f64,
}

impl Material {
    pub fn diffuse(color: Color) -> Self {
        Self {
            color,
            mirror_strength: 0.0,
            transparency: 0.0,
            refractive_index: 1.0,
        }
    }

    pub fn with_refractive_index(self, refractive_index: f64) -> Self {
        Self {
            refractive_index,
            ..self
        }
    }

    pub fn opacity(&self) -> f64 {
        1.0 - self.transparency
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Shape {
    Plane(Plane),
    Sphere(Sphere),
    Cuboid(Cuboid),
}

impl Intersect for Shape {
    fn intersect(&self, ray: &Ray) -> Option<Intersection> {
        match self {
            Shape::Plane(plane) => plane.intersect(ray),
            Shape::Sphere(sphere) => sphere.intersect(ray),
            Shape::Cuboid(cuboid) => cuboid.intersect(ray),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SurfaceKind {
    Wall,
    Object,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Surface {
    name: String,
    kind: SurfaceKind,
    pub shape: Shape,
    material: Material,
    palette: Color,
}

impl Surface {
    pub fn wall(name: impl Into<String>, plane: Plane, material: Material) -> Self {
        Self::new(name.into(), SurfaceKind::Wall, Shape::Plane(plane), material)
    }

    pub fn object(name: impl Into<String>, shape: Shape, material: Material) -> Self {
        Self::new(name.into(), SurfaceKind::Object, shape, material)
    }

    fn new(name: String, kind: SurfaceKind, shape: Shape, material: Material) -> Self {
        let material = Material {
            mirror_strength: clamp_unit(material.mirror_strength),
            transparency: clamp_unit(material.transparency),
            ..material
        };
        Self {
            name,
            kind,
            shape,
            palette: material.color,
            material,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn kind(&self) -> SurfaceKind {
        self.kind
    }

    pub fn material(&self) -> &Material {
        &self.material
    }

    /// Walls also swap between their own palette and [`MIRROR_WALL_COLOR`].
    pub fn set_mirror(&mut self, on: bool) {
        self.material.mirror_strength = if on { 1.0 } else { 0.0 };
        if self.kind == SurfaceKind::Wall {
            self.material.color = if on { MIRROR_WALL_COLOR } else { self.palette };
        }
    }

    pub fn set_transparency(&mut self, transparency: f64) {
        let clamped = clamp_unit(transparency);
        if clamped != transparency {
            log::warn!(
                "transparency {} for {} clamped to {}",
                transparency,
                self.name,
                clamped
            );
        }
        self.material.transparency = clamped;
    }

    pub fn set_color(&mut self, color: Color) {
        self.material.color = color;
    }
}

impl Intersect for Surface {
    fn intersect(&self, ray: &Ray) -> Option<Intersection> {
        self.shape.intersect(ray)
    }
}

fn clamp_unit(x: f64) -> f64 {
    if x.is_nan() {
        0.0
    } else {
        x.clamp(0.0, 1.0)
    }
}
