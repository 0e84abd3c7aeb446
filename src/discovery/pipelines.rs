//! Discovery pipelines - orchestration
//!
//! Resolve root → read registry → scan each library → validate → merge.

mod discover;
mod locate;

pub use discover::{
    discover_games_in, discover_installed_apps, discover_installed_games, library_roots,
    scan_libraries,
};
pub use locate::find_game_path;
