// src/utilities/segment_geometry.rs
//
// a collection of functions to understand axis-aligned route segments.
// Cells are (row, col) pairs on the board grid.

/// Returns the cells strictly between `a` and `b` along their shared axis,
/// in increasing order. Callers only pass axis-aligned pairs; a pair that
/// shares neither axis yields an empty list.
pub fn segment_cells(a: (u32, u32), b: (u32, u32)) -> Vec<(u32, u32)> {
    let mut cells = Vec::new();
    if a.0 == b.0 {
        let (min, max) = (a.1.min(b.1), a.1.max(b.1));
        for c in (min + 1)..max {
            cells.push((a.0, c));
        }
    } else if a.1 == b.1 {
        let (min, max) = (a.0.min(b.0), a.0.max(b.0));
        for r in (min + 1)..max {
            cells.push((r, a.1));
        }
    }
    cells
}

/// True iff segment a-b and segment c-d are perpendicular and their
/// axis-aligned extents overlap at a shared cell.
///
/// Parallel segments never cross here, even when collinear and
/// overlapping. All route segments live on grid lines, so the
/// perpendicular check is the whole geometry.
pub fn segments_cross(a: (u32, u32), b: (u32, u32), c: (u32, u32), d: (u32, u32)) -> bool {
    if a.0 == b.0 && c.1 == d.1 {
        // a-b horizontal, c-d vertical
        let (min_ac, max_ac) = (a.1.min(b.1), a.1.max(b.1));
        let (min_cr, max_cr) = (c.0.min(d.0), c.0.max(d.0));
        return c.1 >= min_ac && c.1 <= max_ac && a.0 >= min_cr && a.0 <= max_cr;
    }
    if a.1 == b.1 && c.0 == d.0 {
        // a-b vertical, c-d horizontal
        let (min_ar, max_ar) = (a.0.min(b.0), a.0.max(b.0));
        let (min_cc, max_cc) = (c.1.min(d.1), c.1.max(d.1));
        return c.0 >= min_ar && c.0 <= max_ar && a.1 >= min_cc && a.1 <= max_cc;
    }
    false
}

/// True iff continuing from the committed segment a->b to candidate `c`
/// would move back toward or past `a` along the segment's own axis.
///
/// A degenerate previous segment (neither purely horizontal nor purely
/// vertical, or zero length) rejects conservatively.
pub fn segment_weakly_reverses(a: (u32, u32), b: (u32, u32), c: (u32, u32)) -> bool {
    if a.0 == b.0 {
        if a.1 > b.1 {
            return c.1 > b.1;
        }
        if a.1 < b.1 {
            return c.1 < b.1;
        }
    }

    if a.1 == b.1 {
        if a.0 > b.0 {
            return c.0 > b.0;
        }
        if a.0 < b.0 {
            return c.0 < b.0;
        }
    }

    true
}
