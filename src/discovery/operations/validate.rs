// Install directory check against the filesystem

use crate::discovery::pure::{Verdict, judge};
use crate::discovery::types::{AppManifest, LibraryRoot};
use tracing::debug;

/// Check a manifest's declared install directory under `library`
pub fn validate_manifest(library: &LibraryRoot, manifest: &AppManifest) -> Verdict {
    let verdict = judge(library, manifest, |path| path.is_dir());

    match &verdict {
        Verdict::Installed(path) => {
            debug!("Installed: {} @ {}", manifest.app_id, path.display())
        }
        Verdict::Unverified => debug!("Installed (no installdir field): {}", manifest.app_id),
        Verdict::Stale(path) => debug!(
            "Skipped (folder missing): {} -> {}",
            manifest.app_id,
            path.display()
        ),
    }

    verdict
}
