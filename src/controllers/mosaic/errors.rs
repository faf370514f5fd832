use std::io;

use thiserror::Error;

use crate::core::actions::partition_tiles::partition_tiles::PartitionError;
use crate::core::config::ConfigError;

#[derive(Debug, Error)]
pub enum MosaicError {
    #[error("invalid configuration: {0}")]
    Config(#[from] ConfigError),
    #[error("cannot partition screen: {0}")]
    Partition(#[from] PartitionError),
    #[error("failed to spawn tile worker {worker_index}: {source}")]
    Spawn {
        worker_index: usize,
        #[source]
        source: io::Error,
    },
}
