use crate::counter::CounterStore;
use crate::storage::MemoryStore;
use std::{path::PathBuf, sync::Arc};
use tokio::sync::Mutex;

#[derive(Clone)]
pub struct AppState {
    pub data_path: PathBuf,
    pub counter: Arc<Mutex<CounterStore<MemoryStore>>>,
}

impl AppState {
    pub fn new(data_path: PathBuf, counter: CounterStore<MemoryStore>) -> Self {
        Self {
            data_path,
            counter: Arc::new(Mutex::new(counter)),
        }
    }
}
