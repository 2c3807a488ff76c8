use std::path::Path;
use tracing::{info, warn};

/// Open the finished report with the system's default handler.
///
/// Failing to launch a viewer never fails the scan; hosts without a desktop
/// handler just get a warning. Returns whether a viewer was launched.
pub fn open_report(path: &Path) -> bool {
    match opener::open(path) {
        Ok(()) => {
            info!("Opened {}", path.display());
            true
        }
        Err(e) => {
            warn!("Could not open {}: {}", path.display(), e);
            false
        }
    }
}
