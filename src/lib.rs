pub mod app;
pub mod counter;
pub mod errors;
pub mod handlers;
pub mod models;
pub mod state;
pub mod storage;
pub mod ui;

pub use app::router;
pub use counter::CounterStore;
pub use state::AppState;
pub use storage::{load_store, resolve_data_path};
