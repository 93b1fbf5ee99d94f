//! # Resource Loader

use std::path::PathBuf;

use crate::{BCError, BCResult};

/// A trait for resolving `url_or_filename` references to local files.
pub trait ResourceLoader {
    /// Resolve a resource to a readable local path.
    ///
    /// ## Returns
    /// * `Ok(path)` - a local file.
    /// * `Err(BCError::ResourceNotFound)` - if the resource cannot be found.
    /// * `Err(e)` - on any other error.
    fn resolve_path(
        &mut self,
        url_or_filename: &str,
    ) -> BCResult<PathBuf>;
}

/// A [`ResourceLoader`] which only resolves existing local files.
///
/// Useful when network access is not wanted (or not compiled in).
#[derive(Debug, Default, Clone, Copy)]
pub struct LocalResourceLoader;

impl ResourceLoader for LocalResourceLoader {
    fn resolve_path(
        &mut self,
        url_or_filename: &str,
    ) -> BCResult<PathBuf> {
        let path = PathBuf::from(url_or_filename);
        if path.is_file() {
            Ok(path)
        } else {
            Err(BCError::ResourceNotFound(url_or_filename.to_string()))
        }
    }
}

#[cfg(feature = "download")]
impl ResourceLoader for crate::disk_cache::BytechipperDiskCache {
    fn resolve_path(
        &mut self,
        url_or_filename: &str,
    ) -> BCResult<PathBuf> {
        self.cached_path(url_or_filename)
            .map_err(|e| BCError::External(format!("{e:#}")))
    }
}

#[cfg(test)]
mod tests {
    use std::fs;

    use tempdir::TempDir;

    use super::*;

    #[test]
    fn test_local_loader() {
        let dir = TempDir::new("bc_resources").unwrap();
        let merges = dir.path().join("merges.txt");
        fs::write(&merges, "#version: 0.2\n").unwrap();

        let mut loader = LocalResourceLoader;
        assert_eq!(loader.resolve_path(merges.to_str().unwrap()).unwrap(), merges);

        // Directories are not files.
        assert!(matches!(
            loader.resolve_path(dir.path().to_str().unwrap()),
            Err(BCError::ResourceNotFound(_))
        ));
        assert!(matches!(
            loader.resolve_path("https://example.com/merges.txt"),
            Err(BCError::ResourceNotFound(_))
        ));
    }

    #[cfg(feature = "download")]
    #[test]
    fn test_disk_cache_loader() {
        use crate::disk_cache::{BytechipperDiskCache, BytechipperDiskCacheOptions};

        let dir = TempDir::new("bc_resources").unwrap();
        let vocab = dir.path().join("vocab.json");
        fs::write(&vocab, "{}").unwrap();

        let mut cache = BytechipperDiskCache::new(
            BytechipperDiskCacheOptions::default()
                .with_cache_dir(Some(dir.path().join("cache")))
                .with_offline(true),
        )
        .unwrap();

        assert_eq!(cache.resolve_path(vocab.to_str().unwrap()).unwrap(), vocab);

        let err = cache
            .resolve_path(dir.path().join("nope.json").to_str().unwrap())
            .unwrap_err();
        assert!(matches!(err, BCError::External(_)));
        assert!(err.to_string().contains("file not found"));
    }
}
