//! irm-core: traversal operations for integrity-keyed JSON resources
//!
//! This crate focuses on a small, well-factored surface:
//! - Runtime value classification (`NodeKind`) shared by all traversals
//! - Collector: extract every integrity-keyed object into a flat table
//! - Patcher: shallow-merge table entries back over matching objects
//! - Pruner: drop matching objects, collapsing their slot entirely
//! - JSON file load/save helpers for CLI use
//!
pub mod collect;
pub mod io;
pub mod node;
pub mod patch;
pub mod prune;

pub use collect::{collect_resource_map, collect_resource_map_into};
pub use io::{load_json_file, load_resource_map_file, write_json_file};
pub use node::{INTEGRITY_KEY, NodeKind, ResourceMap, classify};
pub use patch::patch_resources;
pub use prune::prune_resources;
