use std::fs;
use std::path::{Path, PathBuf};
use anyhow::{bail, Context, Result};

pub const COVER_FOLDER: &str = "covers";

/// Flat directory of cover images, keyed by the uploaded file's name.
/// Same name overwrites silently; that matches how the store behaved
/// before and keeps re-imports cheap.
pub struct CoverStore {
    dir: PathBuf,
}

impl CoverStore {
    pub fn new(dir: PathBuf) -> Result<Self> {
        fs::create_dir_all(&dir)
            .with_context(|| format!("creating cover directory {}", dir.display()))?;
        Ok(CoverStore { dir })
    }

    /// Copy a picked image into the cover directory and return the
    /// stored path.
    pub fn store(&self, source: &Path) -> Result<PathBuf> {
        let Some(name) = source.file_name() else {
            bail!("cover source {} has no file name", source.display());
        };
        let dest = self.dir.join(name);
        fs::copy(source, &dest)
            .with_context(|| format!("copying cover {} into store", source.display()))?;
        Ok(dest)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn stores_under_original_file_name() {
        let tmp = TempDir::new().expect("temp dir");
        let src = tmp.path().join("dune.png");
        fs::write(&src, b"png bytes").unwrap();

        let store = CoverStore::new(tmp.path().join(COVER_FOLDER)).unwrap();
        let dest = store.store(&src).unwrap();
        assert_eq!(dest, tmp.path().join(COVER_FOLDER).join("dune.png"));
        assert_eq!(fs::read(&dest).unwrap(), b"png bytes");
    }

    #[test]
    fn collision_overwrites() {
        let tmp = TempDir::new().expect("temp dir");
        let store = CoverStore::new(tmp.path().join(COVER_FOLDER)).unwrap();

        let src = tmp.path().join("cover.jpg");
        fs::write(&src, b"first").unwrap();
        let dest = store.store(&src).unwrap();
        fs::write(&src, b"second").unwrap();
        let dest2 = store.store(&src).unwrap();

        assert_eq!(dest, dest2);
        assert_eq!(fs::read(&dest).unwrap(), b"second");
    }

    #[test]
    fn missing_source_is_an_error() {
        let tmp = TempDir::new().expect("temp dir");
        let store = CoverStore::new(tmp.path().join(COVER_FOLDER)).unwrap();
        assert!(store.store(&tmp.path().join("absent.png")).is_err());
    }
}
