//! Shared constants for the orgtree engine.

/// orgtree version string.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Prefix that marks an input as an already-canonical registry id.
pub const DEFAULT_CANONICAL_PREFIX: &str = "https://ror.org/";

/// External-identifier type whose ids are registered as funder aliases.
pub const FUNDREF_TYPE: &str = "fundref";

/// Relationship type naming a parent organization.
pub const RELATIONSHIP_PARENT: &str = "parent";

/// Relationship type naming a child organization.
pub const RELATIONSHIP_CHILD: &str = "child";

/// Default output directory for persisted artifacts.
pub const DEFAULT_OUTPUT_DIR: &str = "data";

/// Minimum node count before closures are computed on the rayon pool.
pub const DEFAULT_PARALLEL_THRESHOLD: usize = 1024;

/// Default number of threads (0 = rayon default).
pub const DEFAULT_THREADS: usize = 0;

// ---- Artifact names ----

/// Alias → canonical id map.
pub const FUNDERS_FILE: &str = "funders.json";

/// Sparse id → closure index.
pub const HIERARCHY_FILE: &str = "hierarchy.json";

/// Parent/child adjacency.
pub const RELATIONSHIPS_FILE: &str = "relationships.json";

/// Every canonical id seen during the build.
pub const KNOWN_IDS_FILE: &str = "known_ids.json";

/// Project-level config file name.
pub const PROJECT_CONFIG_FILE: &str = "orgtree.toml";

/// Environment variable holding the log filter.
pub const LOG_ENV_VAR: &str = "ORGTREE_LOG";
