//! Visual styling carried through from the document

use serde::{Deserialize, Serialize};
use std::fmt;

/// RGBA colour. Channels default to 255, alpha to 1.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: f64,
}

impl Color {
    pub fn new(r: u8, g: u8, b: u8, a: f64) -> Self {
        Color { r, g, b, a }
    }
}

impl Default for Color {
    fn default() -> Self {
        Color {
            r: 255,
            g: 255,
            b: 255,
            a: 1.0,
        }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "rgba({},{},{},{})", self.r, self.g, self.b, self.a)
    }
}

/// Node position. Missing coordinates default to 0.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Position {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

pub const DEFAULT_SIZE: f64 = 1.0;
pub const DEFAULT_NODE_SHAPE: &str = "disc";
pub const DEFAULT_EDGE_SHAPE: &str = "solid";

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_color_display() {
        assert_eq!(Color::default().to_string(), "rgba(255,255,255,1)");
        assert_eq!(Color::new(10, 20, 30, 0.5).to_string(), "rgba(10,20,30,0.5)");
    }
}
