pub mod file_store;
pub mod memory_store;
pub mod migration;

pub use file_store::FileProfileStore;
pub use memory_store::InMemoryProfileStore;
pub use migration::{MigrationError, MigrationV0ToV1, ProfileMigrator};
