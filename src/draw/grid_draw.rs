// src/draw/grid_draw.rs
// Draws the board: cell tiles plus the fixed colored dots.

use nannou::prelude::*;

use crate::draw::{hex_to_rgba, DrawParams};
use crate::models::Board;
use crate::views::GridView;

pub fn draw_board(draw: &Draw, board: &Board, view: &GridView, params: &DrawParams) {
    for row in 0..board.rows {
        for col in 0..board.cols {
            let center = view.cell_center(row, col);
            draw.rect()
                .x_y(center.x, center.y)
                .w_h(view.cell_size, view.cell_size)
                .color(params.cell_color);
        }
    }

    // board dots on top of their tiles, 60% of the cell across
    for dot in &board.dots {
        let center = view.cell_center(dot.row, dot.col);
        let color = hex_to_rgba(&dot.color, 1.0).unwrap_or(params.fallback_color);
        draw.ellipse()
            .x_y(center.x, center.y)
            .w_h(view.cell_size * 0.6, view.cell_size * 0.6)
            .color(color);
    }
}
