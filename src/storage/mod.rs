// storage/mod.rs
// Persistence of completed analyses

pub mod migrations;
pub mod models;
pub mod pool;
pub mod repository;

// Re-export commonly used items
pub use migrations::run_migrations;
pub use models::{OpenGraphTags, StoredAnalysis, TwitterTags};
pub use pool::init_db_pool_with_path;
pub use repository::{AnalysisRepository, InMemoryAnalysisRepository, SqliteAnalysisRepository};
