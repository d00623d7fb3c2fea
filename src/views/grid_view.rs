// src/views/grid_view.rs
//
// Maps board cells to window coordinates and back. The grid is centered
// in the window; rows count downward from the top like the stored board
// data, while nannou's y axis points up.

use nannou::prelude::*;

#[derive(Debug, Clone)]
pub struct GridView {
    pub rows: u32,
    pub cols: u32,
    pub cell_size: f32,
    pub gap: f32,
}

impl GridView {
    /// Sizes cells so the whole board fits the window, with a floor so
    /// tiny windows stay clickable.
    pub fn fit(rows: u32, cols: u32, win: Rect, gap: f32) -> Self {
        let rows_f = rows.max(1) as f32;
        let cols_f = cols.max(1) as f32;
        let size = (win.h() / rows_f).min(win.w() / cols_f).floor();
        let cell_size = (0.9 * size).max(16.0);
        Self {
            rows,
            cols,
            cell_size,
            gap,
        }
    }

    fn pitch(&self) -> f32 {
        self.cell_size + self.gap
    }

    pub fn grid_width(&self) -> f32 {
        self.cols as f32 * self.cell_size + (self.cols.saturating_sub(1)) as f32 * self.gap
    }

    pub fn grid_height(&self) -> f32 {
        self.rows as f32 * self.cell_size + (self.rows.saturating_sub(1)) as f32 * self.gap
    }

    /// Center of a cell in window coordinates.
    pub fn cell_center(&self, row: u32, col: u32) -> Point2 {
        let left = -self.grid_width() / 2.0;
        let top = self.grid_height() / 2.0;
        pt2(
            left + col as f32 * self.pitch() + self.cell_size / 2.0,
            top - row as f32 * self.pitch() - self.cell_size / 2.0,
        )
    }

    /// The cell under a window-space point, if any. Points in the gaps
    /// between cells miss.
    pub fn hit_test(&self, p: Point2) -> Option<(u32, u32)> {
        let left = -self.grid_width() / 2.0;
        let top = self.grid_height() / 2.0;
        let dx = p.x - left;
        let dy = top - p.y;
        if dx < 0.0 || dy < 0.0 {
            return None;
        }

        let col = (dx / self.pitch()).floor();
        let row = (dy / self.pitch()).floor();
        if col >= self.cols as f32 || row >= self.rows as f32 {
            return None;
        }
        // reject the gap to the right of / below the cell body
        if dx - col * self.pitch() > self.cell_size || dy - row * self.pitch() > self.cell_size {
            return None;
        }
        Some((row as u32, col as u32))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn view_5x5() -> GridView {
        GridView {
            rows: 5,
            cols: 5,
            cell_size: 40.0,
            gap: 6.0,
        }
    }

    #[test]
    fn test_cell_center_round_trips_through_hit_test() {
        let view = view_5x5();
        for row in 0..5 {
            for col in 0..5 {
                let center = view.cell_center(row, col);
                assert_eq!(view.hit_test(center), Some((row, col)));
            }
        }
    }

    #[test]
    fn test_row_zero_is_at_the_top() {
        let view = view_5x5();
        assert!(view.cell_center(0, 0).y > view.cell_center(4, 0).y);
        assert!(view.cell_center(0, 0).x < view.cell_center(0, 4).x);
    }

    #[test]
    fn test_hit_test_misses_outside_the_grid() {
        let view = view_5x5();
        assert_eq!(view.hit_test(pt2(-2000.0, 0.0)), None);
        assert_eq!(view.hit_test(pt2(0.0, 2000.0)), None);
        let w = view.grid_width();
        assert_eq!(view.hit_test(pt2(w / 2.0 + 10.0, 0.0)), None);
    }

    #[test]
    fn test_hit_test_misses_the_gap() {
        let view = view_5x5();
        let a = view.cell_center(0, 0);
        // halfway between two cell bodies sits in the gap
        let gap_x = a.x + view.cell_size / 2.0 + view.gap / 2.0;
        assert_eq!(view.hit_test(pt2(gap_x, a.y)), None);
    }

    #[test]
    fn test_fit_keeps_a_minimum_cell_size() {
        let tiny = Rect::from_w_h(50.0, 50.0);
        let view = GridView::fit(10, 10, tiny, 6.0);
        assert!(view.cell_size >= 16.0);
    }

    #[test]
    fn test_fit_uses_the_limiting_axis() {
        let wide = Rect::from_w_h(1000.0, 200.0);
        let view = GridView::fit(5, 5, wide, 6.0);
        // height is the constraint: 200 / 5 = 40, shrunk by 10%
        assert_eq!(view.cell_size, 36.0);
    }
}
