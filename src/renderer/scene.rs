//! Per-frame draw list
//!
//! The scene is described as backend-neutral commands. A `Surface` consumes
//! them; `VertexSurface` tessellates them into one vertex buffer and keeps the
//! text runs for whatever font renderer sits on top.

use glam::Vec2;

use super::shapes;
use super::vertex::{Vertex, color, colors};
use crate::consts::{DOT_RADIUS, ORBIT_LINE_WIDTH, TEXT_SIZE};
use crate::sim::{Command, GamePhase, GameState};
use crate::ui::{Button, Rect};

/// Where the score caption and value are drawn
pub const SCORE_LABEL_POS: Vec2 = Vec2::new(10.0, 10.0);
pub const SCORE_VALUE_POS: Vec2 = Vec2::new(50.0, 50.0);
/// Label inset inside a button
const BUTTON_TEXT_INSET: Vec2 = Vec2::new(8.0, 6.0);

/// One primitive for the drawing surface
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCommand {
    Clear([f32; 4]),
    Circle {
        center: Vec2,
        radius: f32,
        color: [f32; 4],
    },
    Ring {
        center: Vec2,
        radius: f32,
        width: f32,
        color: [f32; 4],
    },
    Rect {
        rect: Rect,
        color: [f32; 4],
    },
    Text {
        pos: Vec2,
        text: String,
        size: f32,
        color: [f32; 4],
    },
}

/// Anything that can draw the scene
pub trait Surface {
    fn draw(&mut self, command: &DrawCommand);

    fn draw_all(&mut self, commands: &[DrawCommand]) {
        for command in commands {
            self.draw(command);
        }
    }
}

/// Build the draw list for one frame
///
/// Order: background, score, buttons, orbit guides, then characters so dots
/// sit on top of their rings.
pub fn build_scene(state: &GameState, buttons: &[Button], hovered: Option<Command>) -> Vec<DrawCommand> {
    let conv = &state.converter;
    let mut commands = vec![DrawCommand::Clear(colors::BACKGROUND)];

    commands.push(text(SCORE_LABEL_POS, "SCORE", colors::TEXT));
    commands.push(text(
        SCORE_VALUE_POS,
        &state.points_collected().to_string(),
        colors::TEXT,
    ));

    for button in buttons {
        let is_hovered = hovered == Some(button.action);
        let (fill, label) = if is_hovered {
            (colors::BUTTON_HOVER, colors::BUTTON_HOVER_TEXT)
        } else {
            (colors::BUTTON, colors::TEXT)
        };
        commands.push(DrawCommand::Rect {
            rect: button.rect,
            color: fill,
        });
        commands.push(text(button.rect.min + BUTTON_TEXT_INSET, button.label, label));
    }

    for &radius in state.orbits.radii() {
        commands.push(DrawCommand::Ring {
            center: conv.center(),
            radius: radius as f32,
            width: ORBIT_LINE_WIDTH,
            color: colors::ORBIT,
        });
    }

    for data in state.draw_data() {
        let Some(radius) = state.orbits.radius(data.orbit_index) else {
            log::warn!("Skipping character on unknown orbit {}", data.orbit_index);
            continue;
        };
        commands.push(DrawCommand::Circle {
            center: conv.polar_to_pixel(radius as f32, f32::from(data.angle)),
            radius: DOT_RADIUS,
            color: color(data.color),
        });
    }

    if state.phase == GamePhase::GameOver {
        let pos = conv.center() - Vec2::new(TEXT_SIZE * 2.5, TEXT_SIZE / 2.0);
        commands.push(text(pos, "GAME OVER", colors::TEXT));
    }

    commands
}

fn text(pos: Vec2, text: &str, color: [f32; 4]) -> DrawCommand {
    DrawCommand::Text {
        pos,
        text: text.to_string(),
        size: TEXT_SIZE,
        color,
    }
}

/// A text run waiting for a font renderer
#[derive(Debug, Clone, PartialEq)]
pub struct TextRun {
    pub pos: Vec2,
    pub text: String,
    pub size: f32,
    pub color: [f32; 4],
}

/// Tessellates commands into a triangle list
#[derive(Debug, Default)]
pub struct VertexSurface {
    pub clear_color: [f32; 4],
    pub vertices: Vec<Vertex>,
    pub texts: Vec<TextRun>,
    /// Longest allowed edge (pixels) when tessellating curves
    pub max_edge: f32,
}

impl VertexSurface {
    pub fn new(max_edge: f32) -> Self {
        Self {
            max_edge,
            ..Default::default()
        }
    }

    /// Drop last frame's geometry
    pub fn reset(&mut self) {
        self.vertices.clear();
        self.texts.clear();
    }
}

impl Surface for VertexSurface {
    fn draw(&mut self, command: &DrawCommand) {
        match command {
            DrawCommand::Clear(c) => {
                self.reset();
                self.clear_color = *c;
            }
            DrawCommand::Circle {
                center,
                radius,
                color,
            } => {
                let segments = shapes::segments_for_radius(*radius, self.max_edge);
                self.vertices
                    .extend(shapes::circle(*center, *radius, *color, segments));
            }
            DrawCommand::Ring {
                center,
                radius,
                width,
                color,
            } => {
                let segments = shapes::segments_for_radius(*radius, self.max_edge);
                self.vertices
                    .extend(shapes::ring(*center, *radius, *width, *color, segments));
            }
            DrawCommand::Rect { rect, color } => {
                self.vertices.extend(shapes::rect(rect, *color));
            }
            DrawCommand::Text {
                pos,
                text,
                size,
                color,
            } => self.texts.push(TextRun {
                pos: *pos,
                text: text.clone(),
                size: *size,
                color: *color,
            }),
        }
    }
}
