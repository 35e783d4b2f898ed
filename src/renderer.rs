//! Rasterisation of the drawing tools onto a [`Surface`].
//!
//! Everything in here is a pure function of its arguments: rendering the same
//! shape onto two identical surfaces produces identical pixels.

use crate::geometry::{distance_to_segment, Point};
use crate::stroke::StrokeStyle;
use crate::surface::{Color, Surface};
use crate::tools::ToolMode;

/// Draw the shape for `mode` spanning `anchor` to `endpoint`.
///
/// A zero-length gesture draws nothing, whatever the mode.
pub fn render(
    surface: &mut Surface,
    mode: ToolMode,
    anchor: Point,
    endpoint: Point,
    style: &StrokeStyle,
    background: Color,
) {
    if anchor == endpoint {
        log::trace!("Skipping zero-extent {} at {:?}", mode, anchor);
        return;
    }

    match mode {
        ToolMode::Rectangle => {
            draw_rect(surface, anchor, endpoint, style.color, style.width, style.filled);
        }
        ToolMode::Ellipse => {
            let radius = anchor.distance(endpoint).round() as u32;
            draw_circle(surface, anchor, radius, style.color, style.width, style.filled);
        }
        ToolMode::Line => draw_line(surface, anchor, endpoint, style.color, style.width),
        ToolMode::Eraser => draw_line(surface, anchor, endpoint, background, style.width),
    }
}

/// Clip the inclusive span `lo..=hi` to `0..len`
fn clip_span(lo: i32, hi: i32, len: u32) -> Option<(i32, i32)> {
    let lo = lo.max(0);
    let hi = hi.min(len as i32 - 1);
    (lo <= hi).then_some((lo, hi))
}

/// Call `plot` for every in-bounds pixel of the inclusive box
fn for_each_in_box(
    surface: &mut Surface,
    (x0, y0): (i32, i32),
    (x1, y1): (i32, i32),
    mut plot: impl FnMut(&mut Surface, i32, i32),
) {
    let (width, height) = surface.dimensions();
    let (Some((x0, x1)), Some((y0, y1))) = (clip_span(x0, x1, width), clip_span(y0, y1, height))
    else {
        return;
    };
    for y in y0..=y1 {
        for x in x0..=x1 {
            plot(surface, x, y);
        }
    }
}

/// Straight segment drawn as a capsule of diameter `width`
pub fn draw_line(surface: &mut Surface, a: Point, b: Point, color: Color, width: u32) {
    let half = width.max(1) as f32 / 2.0;
    let pad = half.ceil() as i32;

    for_each_in_box(
        surface,
        (a.x.min(b.x) - pad, a.y.min(b.y) - pad),
        (a.x.max(b.x) + pad, a.y.max(b.y) + pad),
        |surface, x, y| {
            if distance_to_segment((x as f32, y as f32), a, b) <= half {
                surface.put_pixel(x, y, color);
            }
        },
    );
}

/// Axis-aligned box with corners `a` and `b`.
///
/// Outlines are a band of half-width `width / 2` centred on the box edge.
pub fn draw_rect(surface: &mut Surface, a: Point, b: Point, color: Color, width: u32, filled: bool) {
    let (x0, x1) = (a.x.min(b.x), a.x.max(b.x));
    let (y0, y1) = (a.y.min(b.y), a.y.max(b.y));

    if filled {
        for_each_in_box(surface, (x0, y0), (x1, y1), |surface, x, y| {
            surface.put_pixel(x, y, color);
        });
        return;
    }

    let r = (width.max(1) / 2) as i32;
    let in_hole = |x: i32, y: i32| x0 + r < x && x < x1 - r && y0 + r < y && y < y1 - r;

    for_each_in_box(surface, (x0 - r, y0 - r), (x1 + r, y1 + r), |surface, x, y| {
        if !in_hole(x, y) {
            surface.put_pixel(x, y, color);
        }
    });
}

/// Circle around `center`; outlines are the ring `|d - radius| <= width / 2`
pub fn draw_circle(
    surface: &mut Surface,
    center: Point,
    radius: u32,
    color: Color,
    width: u32,
    filled: bool,
) {
    let r = radius as f32;
    let half = width.max(1) as f32 / 2.0;
    let pad = if filled {
        radius as i32
    } else {
        radius as i32 + half.ceil() as i32
    };

    for_each_in_box(
        surface,
        (center.x - pad, center.y - pad),
        (center.x + pad, center.y + pad),
        |surface, x, y| {
            let dx = (x - center.x) as f32;
            let dy = (y - center.y) as f32;
            let inside = if filled {
                dx * dx + dy * dy <= r * r
            } else {
                ((dx * dx + dy * dy).sqrt() - r).abs() <= half
            };
            if inside {
                surface.put_pixel(x, y, color);
            }
        },
    );
}
