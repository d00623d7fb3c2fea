pub mod board_model;
pub mod route_model;

pub use board_model::{Board, Dot};
pub use route_model::{PathPoint, RoutePointWire, RouteRecord};
