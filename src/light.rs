use crate::Color;
use nalgebra::Vector3;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Light {
    pub position: Vector3<f64>,
    pub color: Color,
    pub enabled: bool,
}

impl Light {
    /// Ceiling light, always on.
    pub fn base() -> Self {
        Self {
            position: Vector3::new(0.0, 1.95, 0.0),
            color: Color::new(1.0, 1.0, 1.0),
            enabled: true,
        }
    }

    /// Optional fill light, off until toggled.
    pub fn second() -> Self {
        Self {
            position: Vector3::new(0.6, 1.0, -0.8),
            color: Color::new(0.9, 0.9, 1.0),
            enabled: false,
        }
    }
}

/// Positions the second light can be placed at.
#[derive(Clone, Copy, Debug, PartialEq, Eq, clap::ValueEnum)]
pub enum LightPreset {
    LeftWall,
    RightWall,
    CeilingLeftCorner,
    CeilingRightCorner,
}

impl LightPreset {
    pub fn position(self) -> Vector3<f64> {
        match self {
            LightPreset::LeftWall => Vector3::new(-0.95, 1.0, -0.2),
            LightPreset::RightWall => Vector3::new(0.95, 1.0, -0.2),
            LightPreset::CeilingLeftCorner => Vector3::new(-0.9, 1.9, -0.9),
            LightPreset::CeilingRightCorner => Vector3::new(0.9, 1.9, -0.9),
        }
    }
}
