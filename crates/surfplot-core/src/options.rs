//! Rendering options handed to the renderer with every cell.

use glam::Vec3;
use serde::{Deserialize, Serialize};

/// Options that affect how cells are drawn, not where they go.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RenderOptions {
    /// Background color (linear RGB, 0..=1).
    pub background: Vec3,

    /// Gray level of the bare surface (0 = black, 1 = white).
    pub brightness: f32,

    /// Whether the renderer should draw without opening a window.
    pub off_screen: bool,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            background: Vec3::new(1.0, 1.0, 1.0),
            brightness: 0.5,
            off_screen: true,
        }
    }
}

impl RenderOptions {
    /// Background color as 8-bit RGBA, fully opaque.
    pub fn background_rgba8(&self) -> [u8; 4] {
        let c = (self.background.clamp(Vec3::ZERO, Vec3::ONE) * 255.0).round();
        [c.x as u8, c.y as u8, c.z as u8, 255]
    }

    /// Surface gray level as 8-bit RGBA, fully opaque.
    pub fn surface_rgba8(&self) -> [u8; 4] {
        let g = (self.brightness.clamp(0.0, 1.0) * 255.0).round() as u8;
        [g, g, g, 255]
    }
}
