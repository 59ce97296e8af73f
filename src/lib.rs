// Library exports for testing and reuse

pub mod classify;
pub mod cli;
pub mod config;
pub mod dataset;
pub mod error;
pub mod io;
pub mod tiling;

// Re-export commonly used types
pub use classify::TileClass;
pub use config::TilingConfig;
pub use dataset::{generate_dataset, DatasetSummary};
pub use error::{ErrorKind, Result, TileDatasetError};
pub use io::{load_label, load_original};
