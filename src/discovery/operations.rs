//! Discovery operations - filesystem reads
//!
//! Each function touches the disk once or a handful of times and absorbs
//! per-file failures, logging what it skipped.

pub mod registry;
pub mod resolve;
pub mod scan;
pub mod validate;

pub use registry::read_library_folders;
pub use resolve::default_steam_root;
pub use scan::{read_manifest, scan_library};
pub use validate::validate_manifest;
