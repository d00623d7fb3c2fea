// src/draw/mod.rs
// The board and route drawing module

pub mod grid_draw;
pub mod path_draw;

use nannou::prelude::*;

#[derive(Debug, Clone)]
pub struct DrawParams {
    pub cell_color: Rgba,
    pub route_alpha: f32,
    pub preview_alpha: f32,
    pub fallback_color: Rgba,
}

impl Default for DrawParams {
    fn default() -> Self {
        Self {
            cell_color: rgba(0.14, 0.17, 0.2, 1.0),
            route_alpha: 0.5,
            preview_alpha: 0.3,
            fallback_color: rgba(0.984, 0.749, 0.141, 1.0),
        }
    }
}

/// Parses a `#rgb` / `#rrggbb` color string as used by the board palette.
pub fn hex_to_rgba(hex: &str, alpha: f32) -> Option<Rgba> {
    let hex = hex.trim_start_matches('#');
    let expanded: String = if hex.len() == 3 {
        hex.chars().flat_map(|c| [c, c]).collect()
    } else {
        hex.to_string()
    };
    if expanded.len() != 6 {
        return None;
    }
    let num = u32::from_str_radix(&expanded, 16).ok()?;
    let r = ((num >> 16) & 255) as f32 / 255.0;
    let g = ((num >> 8) & 255) as f32 / 255.0;
    let b = (num & 255) as f32 / 255.0;
    Some(rgba(r, g, b, alpha))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hex_to_rgba_full_form() {
        let c = hex_to_rgba("#ff0080", 0.5).unwrap();
        assert!((c.color.red - 1.0).abs() < 1e-6);
        assert!((c.color.green - 0.0).abs() < 1e-6);
        assert!((c.color.blue - 128.0 / 255.0).abs() < 1e-6);
        assert!((c.alpha - 0.5).abs() < 1e-6);
    }

    #[test]
    fn test_hex_to_rgba_short_form() {
        let c = hex_to_rgba("#f00", 1.0).unwrap();
        assert!((c.color.red - 1.0).abs() < 1e-6);
        assert!((c.color.green - 0.0).abs() < 1e-6);
    }

    #[test]
    fn test_hex_to_rgba_rejects_garbage() {
        assert!(hex_to_rgba("#12", 1.0).is_none());
        assert!(hex_to_rgba("not-a-color", 1.0).is_none());
    }
}
