pub mod app;
pub mod errors;
pub mod handlers;
pub mod models;
pub mod seed;
pub mod stats;
pub mod store;
pub mod ui;
pub mod state;

pub use app::router;
pub use seed::initial_store;
pub use state::AppState;
pub use store::HabitGoalStore;
