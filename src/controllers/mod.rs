pub mod osc;

pub use osc::{RouteAnnouncer, RouteEvent, RouteListener};
