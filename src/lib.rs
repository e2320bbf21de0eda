pub mod app;
pub mod errors;
pub mod grid;
pub mod handlers;
pub mod models;
pub mod stats;
pub mod storage;
pub mod tags;
pub mod ui;
pub mod state;

pub use app::router;
pub use state::AppState;
pub use storage::{load_data, load_tag_config, resolve_data_path, resolve_tags_path};
