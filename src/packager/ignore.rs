//! Ignore-list filtering for packaging

use crate::assembly::AssemblyManifest;
use crate::domain::PlatformConfig;
use crate::site::Repository;

/// Remove ignored features from `config`
///
/// Each id is resolved through the repository first; ids that do not
/// resolve, or that were never collected, are skipped silently. Returns the
/// number of features actually removed.
pub fn remove_ignored<R, S>(
    manifest: &mut AssemblyManifest,
    repository: &R,
    config: &PlatformConfig,
    ignored: &[S],
) -> usize
where
    R: Repository + ?Sized,
    S: AsRef<str>,
{
    let mut removed = 0;

    for id in ignored {
        let id = id.as_ref();
        match repository.feature(id, None) {
            Ok(feature) => {
                if manifest.remove_feature(config, &feature.versioned_id()) {
                    log::debug!("Ignoring feature {} for {}", feature.versioned_id(), config);
                    removed += 1;
                }
            }
            Err(err) => log::debug!("Ignored feature {id} does not resolve: {err}"),
        }
    }

    removed
}
