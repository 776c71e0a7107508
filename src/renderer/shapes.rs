//! Shape generation for 2D primitives
//!
//! Everything is emitted as a triangle list in field coordinates (y down).

use glam::Vec2;
use std::f32::consts::PI;

use super::vertex::Vertex;

fn push_quad(out: &mut Vec<Vertex>, a: Vec2, b: Vec2, c: Vec2, d: Vec2, color: [f32; 4]) {
    out.push(Vertex::new(a.x, a.y, color));
    out.push(Vertex::new(b.x, b.y, color));
    out.push(Vertex::new(c.x, c.y, color));

    out.push(Vertex::new(c.x, c.y, color));
    out.push(Vertex::new(d.x, d.y, color));
    out.push(Vertex::new(a.x, a.y, color));
}

/// Axis-aligned filled rectangle
pub fn rect(out: &mut Vec<Vertex>, pos: Vec2, size: Vec2, color: [f32; 4]) {
    push_quad(
        out,
        pos,
        pos + Vec2::new(size.x, 0.0),
        pos + size,
        pos + Vec2::new(0.0, size.y),
        color,
    );
}

/// Rectangle with a vertical color ramp from `top` to `bottom`
pub fn gradient_rect(out: &mut Vec<Vertex>, pos: Vec2, size: Vec2, top: [f32; 4], bottom: [f32; 4]) {
    let (x0, y0) = (pos.x, pos.y);
    let (x1, y1) = (pos.x + size.x, pos.y + size.y);
    out.extend_from_slice(&[
        Vertex::new(x0, y0, top),
        Vertex::new(x1, y0, top),
        Vertex::new(x1, y1, bottom),
        Vertex::new(x1, y1, bottom),
        Vertex::new(x0, y1, bottom),
        Vertex::new(x0, y0, top),
    ]);
}

/// Convex polygon, fanned from its vertex centroid
pub fn polygon(out: &mut Vec<Vertex>, points: &[Vec2], color: [f32; 4]) {
    if points.len() < 3 {
        return;
    }
    let center = points.iter().copied().sum::<Vec2>() / points.len() as f32;
    for (i, p1) in points.iter().enumerate() {
        let p2 = points[(i + 1) % points.len()];
        out.push(Vertex::new(center.x, center.y, color));
        out.push(Vertex::new(p1.x, p1.y, color));
        out.push(Vertex::new(p2.x, p2.y, color));
    }
}

/// Filled axis-aligned ellipse
pub fn ellipse(out: &mut Vec<Vertex>, center: Vec2, radii: Vec2, color: [f32; 4], segments: u32) {
    let segments = segments.max(3);
    for i in 0..segments {
        let theta1 = (i as f32 / segments as f32) * 2.0 * PI;
        let theta2 = ((i + 1) as f32 / segments as f32) * 2.0 * PI;

        // Triangle from center to edge
        out.push(Vertex::new(center.x, center.y, color));
        out.push(Vertex::new(
            center.x + radii.x * theta1.cos(),
            center.y + radii.y * theta1.sin(),
            color,
        ));
        out.push(Vertex::new(
            center.x + radii.x * theta2.cos(),
            center.y + radii.y * theta2.sin(),
            color,
        ));
    }
}

pub fn circle(out: &mut Vec<Vertex>, center: Vec2, radius: f32, color: [f32; 4], segments: u32) {
    ellipse(out, center, Vec2::splat(radius), color, segments);
}

/// Straight stroke of the given width
pub fn line(out: &mut Vec<Vertex>, from: Vec2, to: Vec2, width: f32, color: [f32; 4]) {
    let dir = (to - from).normalize_or_zero();
    if dir == Vec2::ZERO {
        return;
    }
    // Perpendicular for width
    let perp = Vec2::new(-dir.y, dir.x) * (width * 0.5);
    push_quad(out, from + perp, to + perp, to - perp, from - perp, color);
}

/// Rectangle with rounded corners of radius `r`
pub fn rounded_rect(out: &mut Vec<Vertex>, pos: Vec2, size: Vec2, r: f32, color: [f32; 4], segments: u32) {
    let r = r.min(size.x * 0.5).min(size.y * 0.5).max(0.0);
    rect(out, pos + Vec2::new(r, 0.0), Vec2::new(size.x - 2.0 * r, size.y), color);
    rect(out, pos + Vec2::new(0.0, r), Vec2::new(r, size.y - 2.0 * r), color);
    rect(
        out,
        pos + Vec2::new(size.x - r, r),
        Vec2::new(r, size.y - 2.0 * r),
        color,
    );
    let corner_segments = (segments / 4).max(2);
    for (corner, start) in [
        (pos + Vec2::new(r, r), PI),
        (pos + Vec2::new(size.x - r, r), 1.5 * PI),
        (pos + Vec2::new(size.x - r, size.y - r), 0.0),
        (pos + Vec2::new(r, size.y - r), 0.5 * PI),
    ] {
        for i in 0..corner_segments {
            let t1 = start + (i as f32 / corner_segments as f32) * 0.5 * PI;
            let t2 = start + ((i + 1) as f32 / corner_segments as f32) * 0.5 * PI;
            out.push(Vertex::new(corner.x, corner.y, color));
            out.push(Vertex::new(corner.x + r * t1.cos(), corner.y + r * t1.sin(), color));
            out.push(Vertex::new(corner.x + r * t2.cos(), corner.y + r * t2.sin(), color));
        }
    }
}

/// One wave crest: a cubic hump of `width` x `height` starting at `(x, y)`,
/// filled down to `y + depth`
pub fn wave_crest(
    out: &mut Vec<Vertex>,
    x: f32,
    y: f32,
    width: f32,
    height: f32,
    depth: f32,
    color: [f32; 4],
    segments: u32,
) {
    let segments = segments.max(2);
    let crest = |t: f32| {
        // Bezier with control points at 1/4 and 3/4 of the width, `height` up
        let mt = 1.0 - t;
        let bx = 3.0 * mt * mt * t * (width * 0.25) + 3.0 * mt * t * t * (width * 0.75) + t * t * t * width;
        let by = -3.0 * mt * t * height;
        Vec2::new(x + bx, y + by)
    };
    let floor = y + depth;
    for i in 0..segments {
        let a = crest(i as f32 / segments as f32);
        let b = crest((i + 1) as f32 / segments as f32);
        push_quad(out, a, b, Vec2::new(b.x, floor), Vec2::new(a.x, floor), color);
    }
}
