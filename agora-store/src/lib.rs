mod seed;

mod storage;
pub use storage::{FileStorage, MemoryStorage, Storage, StorageError};

mod store;
pub use store::{EventStore, STORAGE_KEY};

pub mod api {
    pub use agora_api::*;
}
