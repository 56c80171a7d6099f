//! Direct lighting with hard shadows, plus recursive mirror and
//! transparency blending.

use crate::{
    hit::Hit,
    light::Light,
    vector::reflect,
    Color, Ray, Scene,
};
use nalgebra::Vector3;

pub const BACKGROUND: Color = Color::new(0.02, 0.02, 0.03);

const SURFACE_OFFSET: f64 = 0.001;
const PASS_THROUGH_OFFSET: f64 = 0.002;
/// Occluders this close to the light do not cast a shadow.
const SHADOW_MARGIN: f64 = 0.01;
const ATTENUATION: f64 = 0.15;
const SPECULAR_EXPONENT: i32 = 40;
const SPECULAR_STRENGTH: f64 = 0.4;
const AMBIENT: f64 = 0.03;
const BLEND_THRESHOLD: f64 = 0.001;

/// Color seen along `ray`, bouncing at most `depth` more times.
pub fn cast_ray(scene: &Scene, ray: &Ray, depth: u32) -> Color {
    match scene.trace_closest(ray) {
        Some(hit) => shade(scene, &hit, ray.direction, depth),
        None => BACKGROUND,
    }
}

pub fn shade(scene: &Scene, hit: &Hit<'_>, direction: Vector3<f64>, depth: u32) -> Color {
    let material = hit.surface.material();
    let opacity = material.opacity();

    let mut color = scene
        .lights()
        .map(|light| direct_light(scene, hit, direction, light, opacity))
        .sum::<Color>();
    color += material.color * (AMBIENT * opacity);

    if depth == 0 {
        return color;
    }

    let mirror = material.mirror_strength;
    if mirror > BLEND_THRESHOLD {
        let bounce = Ray::new(hit.point + hit.normal * SURFACE_OFFSET, reflect(direction, hit.normal));
        color = color.lerp(&cast_ray(scene, &bounce, depth - 1), mirror);
    }

    let transparency = material.transparency;
    if transparency > BLEND_THRESHOLD {
        let behind = Ray::new(hit.point + direction * PASS_THROUGH_OFFSET, direction);
        color = color.lerp(&cast_ray(scene, &behind, depth - 1), transparency);
    }

    color
}

/// Diffuse and specular contribution of one light, zero when shadowed.
fn direct_light(
    scene: &Scene,
    hit: &Hit<'_>,
    direction: Vector3<f64>,
    light: &Light,
    opacity: f64,
) -> Color {
    let to_light = light.position - hit.point;
    let distance = to_light.norm();
    let l = to_light / distance;

    let shadow = Ray::new(hit.point + hit.normal * SURFACE_OFFSET, l);
    if let Some(blocker) = scene.trace_closest(&shadow) {
        if blocker.t < distance - SHADOW_MARGIN {
            return Color::zeros();
        }
    }

    let lambert = hit.normal.dot(&l).max(0.0);
    let attenuation = 1.0 / (1.0 + ATTENUATION * distance * distance);
    let diffuse = hit
        .surface
        .material()
        .color
        .component_mul(&light.color)
        * (lambert * attenuation * opacity);

    let view = -direction;
    let highlight = view.dot(&reflect(-l, hit.normal)).max(0.0).powi(SPECULAR_EXPONENT);
    let specular = light.color * (SPECULAR_STRENGTH * opacity * highlight);

    diffuse + specular
}
