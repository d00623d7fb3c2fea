// src/draw/path_draw.rs
// Draws the route in progress: committed segments, step markers and the
// hover preview.

use nannou::prelude::*;

use crate::draw::{hex_to_rgba, DrawParams};
use crate::services::{EditorState, Phase};
use crate::views::GridView;

pub fn draw_path(draw: &Draw, state: &EditorState, view: &GridView, params: &DrawParams) {
    let base = state
        .color
        .as_deref()
        .and_then(|hex| hex_to_rgba(hex, 1.0))
        .unwrap_or(params.fallback_color);

    // committed segments
    for pair in state.points.windows(2) {
        let a = view.cell_center(pair[0].row, pair[0].col);
        let b = view.cell_center(pair[1].row, pair[1].col);
        draw_segment_rect(draw, view, a, b, with_alpha(base, params.route_alpha), None);
    }

    // step markers; the path endpoints sit on board dots and stay bare
    let count = state.points.len() as u32;
    for point in &state.points {
        if point.order == 1 {
            continue;
        }
        if state.phase == Phase::Finished && point.order == count {
            continue;
        }
        let center = view.cell_center(point.row, point.col);
        draw.ellipse()
            .x_y(center.x, center.y)
            .w_h(view.cell_size * 0.4, view.cell_size * 0.4)
            .color(base);
    }

    // hover preview from the last point
    if let (Some(&(row, col)), Some(last)) = (state.preview.as_ref(), state.points.last()) {
        let a = view.cell_center(last.row, last.col);
        let b = view.cell_center(row, col);
        let border = with_alpha(base, (params.preview_alpha * 2.5).min(1.0));
        draw_segment_rect(
            draw,
            view,
            a,
            b,
            with_alpha(base, params.preview_alpha),
            Some(border),
        );
    }
}

fn with_alpha(color: Rgba, alpha: f32) -> Rgba {
    rgba(color.color.red, color.color.green, color.color.blue, alpha)
}

/// A segment is a thin axis-aligned bar connecting two cell centers,
/// 30% of a cell thick.
fn draw_segment_rect(
    draw: &Draw,
    view: &GridView,
    a: Point2,
    b: Point2,
    fill: Rgba,
    border: Option<Rgba>,
) {
    let thickness = view.cell_size * 0.3;
    let (center, w, h) = if (a.y - b.y).abs() < f32::EPSILON {
        // horizontal
        (pt2((a.x + b.x) / 2.0, a.y), (a.x - b.x).abs(), thickness)
    } else {
        // vertical
        (pt2(a.x, (a.y + b.y) / 2.0), thickness, (a.y - b.y).abs())
    };

    let rect = draw.rect().x_y(center.x, center.y).w_h(w, h).color(fill);
    if let Some(border) = border {
        rect.stroke(border).stroke_weight(2.0);
    }
}
