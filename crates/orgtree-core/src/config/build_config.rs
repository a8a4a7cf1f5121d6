//! Build configuration.

use serde::{Deserialize, Serialize};

use crate::constants::{DEFAULT_PARALLEL_THRESHOLD, DEFAULT_THREADS};

/// Configuration for the batch build.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
#[serde(default)]
pub struct BuildConfig {
    /// Compute closures on the rayon pool. Default: true.
    pub parallel: Option<bool>,
    /// Worker threads for the closure pool (0 = rayon default). Default: 0.
    pub threads: Option<usize>,
    /// Minimum node count before the parallel path is taken. Default: 1024.
    pub parallel_threshold: Option<usize>,
    /// Persist the set of every known canonical id next to the index. Default: true.
    pub track_known_ids: Option<bool>,
}

impl BuildConfig {
    pub fn effective_parallel(&self) -> bool {
        self.parallel.unwrap_or(true)
    }

    pub fn effective_threads(&self) -> usize {
        self.threads.unwrap_or(DEFAULT_THREADS)
    }

    pub fn effective_parallel_threshold(&self) -> usize {
        self.parallel_threshold.unwrap_or(DEFAULT_PARALLEL_THRESHOLD)
    }

    pub fn effective_track_known_ids(&self) -> bool {
        self.track_known_ids.unwrap_or(true)
    }

    /// Whether a graph with `node_count` nodes should use the parallel path.
    pub fn use_parallel_for(&self, node_count: usize) -> bool {
        self.effective_parallel() && node_count >= self.effective_parallel_threshold()
    }
}
