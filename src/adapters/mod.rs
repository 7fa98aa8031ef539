// Adapters layer: concrete implementations of the domain ports.

pub mod storage;

pub use storage::{load_all, save_all, JsonFileStore};
