// src/views/mod.rs

pub mod grid_view;
pub mod toast;

pub use grid_view::GridView;
pub use toast::ToastManager;
