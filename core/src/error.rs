//! Error types for table loading.
//!
//! Only the data-table layer produces errors. Client memory reads never
//! fail: missing players, targets, or recast records all degrade to
//! zeroed defaults because the consumer re-polls every frame.

use std::path::PathBuf;

use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
    #[error("failed to read table file {}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse table file {}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("table file {name} not found in {}", dir.display())]
    MissingTable { name: &'static str, dir: PathBuf },
}
