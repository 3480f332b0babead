//! Polar to pixel conversion for a fixed viewport
//!
//! The viewport center is the polar origin. Angles are degrees, measured from
//! the +x axis toward +y in pixel space (screen y grows downward, so positive
//! angles turn clockwise on screen).

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::polar_to_cartesian;

/// Maps polar coordinates onto a `width` x `height` pixel viewport
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CoordinateConverter {
    pub width: u32,
    pub height: u32,
}

impl CoordinateConverter {
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    /// Pixel position of the polar origin
    #[inline]
    pub fn center(&self) -> Vec2 {
        Vec2::new(self.width as f32 / 2.0, self.height as f32 / 2.0)
    }

    /// Polar (radius, degrees) to center-relative cartesian
    #[inline]
    pub fn polar_to_cartesian(&self, radius: f32, degrees: f32) -> Vec2 {
        polar_to_cartesian(radius, degrees)
    }

    /// Center-relative cartesian to absolute pixel coordinates
    #[inline]
    pub fn cartesian_to_pixel(&self, point: Vec2) -> Vec2 {
        self.center() + point
    }

    /// Polar (radius, degrees) to absolute pixel coordinates
    pub fn polar_to_pixel(&self, radius: f32, degrees: f32) -> Vec2 {
        self.cartesian_to_pixel(self.polar_to_cartesian(radius, degrees))
    }

    /// Length of the shorter viewport side
    pub fn smaller_dimension(&self) -> u32 {
        self.width.min(self.height)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn close(a: Vec2, b: Vec2) -> bool {
        (a - b).length() < 1e-3
    }

    #[test]
    fn test_zero_angle_is_due_right_of_center() {
        let conv = CoordinateConverter::new(800, 600);
        let p = conv.polar_to_pixel(150.0, 0.0);
        assert!(close(p, Vec2::new(550.0, 300.0)));
        assert!(((p - conv.center()).length() - 150.0).abs() < 1e-3);
    }

    #[test]
    fn test_quarter_turns() {
        let conv = CoordinateConverter::new(800, 600);
        assert!(close(conv.polar_to_pixel(100.0, 90.0), Vec2::new(400.0, 400.0)));
        assert!(close(conv.polar_to_pixel(100.0, 180.0), Vec2::new(300.0, 300.0)));
        assert!(close(conv.polar_to_pixel(100.0, 270.0), Vec2::new(400.0, 200.0)));
    }

    #[test]
    fn test_zero_radius_is_center() {
        let conv = CoordinateConverter::new(640, 480);
        assert!(close(conv.polar_to_pixel(0.0, 123.0), Vec2::new(320.0, 240.0)));
    }

    #[test]
    fn test_deterministic() {
        let conv = CoordinateConverter::new(800, 600);
        assert_eq!(conv.polar_to_pixel(250.0, 37.0), conv.polar_to_pixel(250.0, 37.0));
    }

    #[test]
    fn test_smaller_dimension() {
        assert_eq!(CoordinateConverter::new(800, 600).smaller_dimension(), 600);
        assert_eq!(CoordinateConverter::new(300, 900).smaller_dimension(), 300);
    }
}
