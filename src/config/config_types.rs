// src/config/config_types.rs
//
// Config types for the app

use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct WindowConfig {
    pub width: u32,
    pub height: u32,
}

/// Visual styling. Colors are hex strings so the file matches the board
/// palette format.
#[derive(Debug, Deserialize)]
pub struct StyleConfig {
    pub background: String,
    pub cell: String,
    pub cell_gap: f32,
    pub route_alpha: f32,
    pub preview_alpha: f32,
    pub fallback_color: String,
}

#[derive(Debug, Deserialize)]
pub struct PathConfig {
    pub board_file: String,
    pub store_directory: String,
}

#[derive(Debug, Deserialize)]
pub struct RouteConfig {
    pub default_name: String,
}

#[derive(Debug, Deserialize)]
pub struct OscConfig {
    pub tx_port: u16,
    pub rx_port: u16,
}
