// src/views/toast.rs
//
// A simple module to manage the notification toast shown in the lower
// left corner of the window.

use nannou::prelude::*;

const TOAST_SECONDS: f32 = 3.5;

pub struct ToastManager {
    message: String,
    color: Rgba,
    hide_at: f32,
}

impl Default for ToastManager {
    fn default() -> Self {
        Self::new()
    }
}

impl ToastManager {
    pub fn new() -> Self {
        Self {
            message: String::new(),
            color: rgba(0.0, 0.0, 0.0, 1.0),
            hide_at: 0.0,
        }
    }

    pub fn show(&mut self, message: &str, color: Rgba, current_time: f32) {
        self.message = message.to_string();
        self.color = color;
        self.hide_at = current_time + TOAST_SECONDS;
    }

    pub fn is_visible(&self, current_time: f32) -> bool {
        current_time < self.hide_at && !self.message.is_empty()
    }

    pub fn draw(&self, draw: &Draw, win: Rect, current_time: f32) {
        if !self.is_visible(current_time) {
            return;
        }
        let w = 360.0_f32.min(win.w() - 20.0);
        let h = 36.0;
        let x = win.left() + w / 2.0 + 10.0;
        let y = win.bottom() + h / 2.0 + 10.0;

        draw.rect().x_y(x, y).w_h(w, h).color(self.color);
        draw.text(&self.message)
            .x_y(x, y)
            .w_h(w - 12.0, h)
            .font_size(14)
            .color(WHITE);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_toast_visibility_window() {
        let mut toast = ToastManager::new();
        assert!(!toast.is_visible(0.0));

        toast.show("saved", rgba(0.2, 0.7, 0.3, 1.0), 10.0);
        assert!(toast.is_visible(10.1));
        assert!(toast.is_visible(13.0));
        assert!(!toast.is_visible(13.6));
    }

    #[test]
    fn test_new_message_restarts_the_timer() {
        let mut toast = ToastManager::new();
        toast.show("first", rgba(0.2, 0.7, 0.3, 1.0), 0.0);
        toast.show("second", rgba(0.9, 0.3, 0.2, 1.0), 3.0);
        assert!(toast.is_visible(6.0));
    }
}
