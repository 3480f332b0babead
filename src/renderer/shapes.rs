//! Shape tessellation for 2D primitives
//!
//! Every shape becomes a triangle list in pixel space.

use glam::Vec2;

use super::vertex::Vertex;
use crate::polar_to_cartesian;
use crate::ui::Rect;

fn segment_angle(i: u32, segments: u32) -> f32 {
    i as f32 / segments as f32 * 360.0
}

/// Generate vertices for a filled circle
pub fn circle(center: Vec2, radius: f32, color: [f32; 4], segments: u32) -> Vec<Vertex> {
    let segments = segments.max(3);
    let mut vertices = Vec::with_capacity((segments * 3) as usize);

    for i in 0..segments {
        let a = center + polar_to_cartesian(radius, segment_angle(i, segments));
        let b = center + polar_to_cartesian(radius, segment_angle(i + 1, segments));

        // Fan triangle from the center
        vertices.push(Vertex::new(center.x, center.y, color));
        vertices.push(Vertex::new(a.x, a.y, color));
        vertices.push(Vertex::new(b.x, b.y, color));
    }

    vertices
}

/// Generate vertices for a ring of `width` centered on `radius`
pub fn ring(center: Vec2, radius: f32, width: f32, color: [f32; 4], segments: u32) -> Vec<Vertex> {
    let segments = segments.max(3);
    let inner_r = (radius - width / 2.0).max(0.0);
    let outer_r = radius + width / 2.0;
    let mut vertices = Vec::with_capacity((segments * 6) as usize);

    for i in 0..segments {
        let t1 = segment_angle(i, segments);
        let t2 = segment_angle(i + 1, segments);

        let inner1 = center + polar_to_cartesian(inner_r, t1);
        let outer1 = center + polar_to_cartesian(outer_r, t1);
        let inner2 = center + polar_to_cartesian(inner_r, t2);
        let outer2 = center + polar_to_cartesian(outer_r, t2);

        // Two triangles per segment
        vertices.push(Vertex::new(inner1.x, inner1.y, color));
        vertices.push(Vertex::new(outer1.x, outer1.y, color));
        vertices.push(Vertex::new(inner2.x, inner2.y, color));

        vertices.push(Vertex::new(inner2.x, inner2.y, color));
        vertices.push(Vertex::new(outer1.x, outer1.y, color));
        vertices.push(Vertex::new(outer2.x, outer2.y, color));
    }

    vertices
}

/// Generate vertices for a filled rectangle
pub fn rect(rect: &Rect, color: [f32; 4]) -> Vec<Vertex> {
    let min = rect.min;
    let max = rect.max();
    vec![
        Vertex::new(min.x, min.y, color),
        Vertex::new(max.x, min.y, color),
        Vertex::new(min.x, max.y, color),
        Vertex::new(min.x, max.y, color),
        Vertex::new(max.x, min.y, color),
        Vertex::new(max.x, max.y, color),
    ]
}

/// Segment count that keeps edges roughly `max_edge` pixels long
pub fn segments_for_radius(radius: f32, max_edge: f32) -> u32 {
    let circumference = std::f32::consts::TAU * radius;
    ((circumference / max_edge.max(1.0)).ceil() as u32).clamp(12, 360)
}
