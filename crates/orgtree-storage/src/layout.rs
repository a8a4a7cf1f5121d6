//! Artifact paths under the output directory.

use std::path::{Path, PathBuf};

use orgtree_core::constants::{FUNDERS_FILE, HIERARCHY_FILE, KNOWN_IDS_FILE, RELATIONSHIPS_FILE};

/// Where each persisted artifact lives.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutputLayout {
    dir: PathBuf,
}

impl OutputLayout {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Funder alias → canonical id map.
    pub fn funders(&self) -> PathBuf {
        self.dir.join(FUNDERS_FILE)
    }

    /// Sparse closure index.
    pub fn hierarchy(&self) -> PathBuf {
        self.dir.join(HIERARCHY_FILE)
    }

    /// Raw parent/child adjacency.
    pub fn relationships(&self) -> PathBuf {
        self.dir.join(RELATIONSHIPS_FILE)
    }

    /// Every known canonical id. Optional.
    pub fn known_ids(&self) -> PathBuf {
        self.dir.join(KNOWN_IDS_FILE)
    }
}
