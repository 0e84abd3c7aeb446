//! Pure functions for discovery
//!
//! No filesystem access here; everything takes text or paths and returns values.

pub mod kv;
pub mod manifest;
pub mod registry;
pub mod validation;

pub use manifest::{is_manifest_file_name, parse_manifest};
pub use registry::parse_library_folders;
pub use validation::{Verdict, expected_install_path, judge, merge_app_ids, merge_games};
