//! On-screen buttons
//!
//! Buttons are plain descriptors: a rectangle, a label and the command a
//! click triggers. The input layer hit-tests them; the renderer draws them.

use glam::Vec2;

use crate::sim::Command;

/// Width of every button
pub const BUTTON_WIDTH: f32 = 186.0;
/// Height of every button
pub const BUTTON_HEIGHT: f32 = 36.0;
/// Gap between the button column and the right viewport edge
pub const BUTTON_RIGHT_MARGIN: f32 = 20.0;
/// Vertical distance between button tops
pub const BUTTON_PITCH: f32 = 42.0;
pub const BUTTON_TOP: f32 = 6.0;

/// Axis-aligned rectangle in pixels
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rect {
    pub min: Vec2,
    pub size: Vec2,
}

impl Rect {
    pub fn new(x: f32, y: f32, w: f32, h: f32) -> Self {
        Self {
            min: Vec2::new(x, y),
            size: Vec2::new(w, h),
        }
    }

    pub fn max(&self) -> Vec2 {
        self.min + self.size
    }

    /// Edges count as inside
    pub fn contains(&self, point: Vec2) -> bool {
        let max = self.max();
        point.x >= self.min.x && point.x <= max.x && point.y >= self.min.y && point.y <= max.y
    }
}

/// A clickable button
#[derive(Debug, Clone, PartialEq)]
pub struct Button {
    pub rect: Rect,
    pub label: &'static str,
    pub action: Command,
}

/// NEW / NEXT / QUIT stacked in the top-right corner
pub fn button_layout(viewport_width: u32) -> Vec<Button> {
    let x = viewport_width as f32 - BUTTON_WIDTH - BUTTON_RIGHT_MARGIN;
    [
        ("NEW", Command::NewGame),
        ("NEXT", Command::NextLevel),
        ("QUIT", Command::Quit),
    ]
    .into_iter()
    .enumerate()
    .map(|(i, (label, action))| Button {
        rect: Rect::new(
            x,
            BUTTON_TOP + i as f32 * BUTTON_PITCH,
            BUTTON_WIDTH,
            BUTTON_HEIGHT,
        ),
        label,
        action,
    })
    .collect()
}

/// First button under `point`
pub fn hit_test(buttons: &[Button], point: Vec2) -> Option<&Button> {
    buttons.iter().find(|b| b.rect.contains(point))
}
