//! Whitted-style ray tracer for a small box room.
//!
//! One ray per pixel, hard shadows, Phong highlights, and recursive mirror
//! and straight-through transparency blending.

pub mod camera;
pub mod cuboid;
pub mod error;
pub mod frame;
pub mod hit;
pub mod light;
pub mod plane;
pub mod ray;
pub mod render;
pub mod scene;
pub mod shade;
pub mod sphere;
pub mod surface;
pub mod vector;
#[cfg(feature = "viewer")]
pub mod viewer;

pub use camera::Camera;
pub use error::{Error, Result};
pub use frame::FrameBuffer;
pub use hit::{Hit, Intersect};
pub use light::{Light, LightPreset};
pub use ray::Ray;
pub use render::{render, MAX_DEPTH};
pub use scene::Scene;
pub use shade::cast_ray;
pub use surface::{Material, Shape, Surface};
pub use vector::Color;
