//! Result illustrations loaded from disk at startup.

use tracing::warn;

use crate::render::AssetKind;

/// The two result illustrations, held in memory for the process lifetime.
///
/// A missing file downgrades the result card to text-only instead of
/// failing the command.
#[derive(Debug, Clone, Default)]
pub struct Assets {
    banned: Option<Vec<u8>>,
    clean: Option<Vec<u8>>,
}

impl Assets {
    /// Load both illustrations from `dir`, tolerating missing files.
    pub fn load(dir: &str) -> Self {
        Self {
            banned: read_asset(dir, AssetKind::Banned),
            clean: read_asset(dir, AssetKind::Clean),
        }
    }

    /// Raw bytes of the illustration, if it was found at startup.
    pub fn bytes(&self, kind: AssetKind) -> Option<&[u8]> {
        match kind {
            AssetKind::Banned => self.banned.as_deref(),
            AssetKind::Clean => self.clean.as_deref(),
        }
    }
}

fn read_asset(dir: &str, kind: AssetKind) -> Option<Vec<u8>> {
    let path = std::path::Path::new(dir).join(kind.filename());
    match std::fs::read(&path) {
        Ok(bytes) => Some(bytes),
        Err(e) => {
            warn!("could not load {}: {e}", path.display());
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_load_both_illustrations() {
        let tmp = tempfile::tempdir().unwrap();
        std::fs::write(tmp.path().join("banned.gif"), b"GIF89a-banned").unwrap();
        std::fs::write(tmp.path().join("notbanned.gif"), b"GIF89a-clean").unwrap();

        let assets = Assets::load(tmp.path().to_str().unwrap());
        assert_eq!(assets.bytes(AssetKind::Banned), Some(&b"GIF89a-banned"[..]));
        assert_eq!(assets.bytes(AssetKind::Clean), Some(&b"GIF89a-clean"[..]));
    }

    #[test]
    fn test_missing_file_is_tolerated() {
        let tmp = tempfile::tempdir().unwrap();
        std::fs::write(tmp.path().join("banned.gif"), b"GIF89a").unwrap();

        let assets = Assets::load(tmp.path().to_str().unwrap());
        assert!(assets.bytes(AssetKind::Banned).is_some());
        assert!(assets.bytes(AssetKind::Clean).is_none());
    }

    #[test]
    fn test_missing_directory_yields_no_assets() {
        let assets = Assets::load("/nonexistent/banwatch-assets");
        assert!(assets.bytes(AssetKind::Banned).is_none());
        assert!(assets.bytes(AssetKind::Clean).is_none());
    }
}
