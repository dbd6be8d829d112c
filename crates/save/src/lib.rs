mod atomic_write;
pub mod file_header;
pub mod record_codec;
mod save_error;
mod save_plugin;
pub mod store;

pub use atomic_write::atomic_write;
pub use save_error::SaveError;
pub use save_plugin::{ClearSavedDataEvent, LoadSavedDataEvent, SavePlugin, SaveStore};
pub use store::{FileStore, KeyValueStore, MemoryStore};
