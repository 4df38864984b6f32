use crate::store::HabitGoalStore;
use std::sync::Arc;
use tokio::sync::Mutex;

#[derive(Clone)]
pub struct AppState {
    pub store: Arc<Mutex<HabitGoalStore>>,
}

impl AppState {
    pub fn new(store: HabitGoalStore) -> Self {
        Self {
            store: Arc::new(Mutex::new(store)),
        }
    }
}
