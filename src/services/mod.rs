pub mod path_editor;
pub mod route_store;
pub mod segment_rules;

pub use path_editor::{Applied, EditorAction, EditorState, Phase};
pub use route_store::{LoadError, RouteStore, SaveError};
pub use segment_rules::is_segment_valid;
