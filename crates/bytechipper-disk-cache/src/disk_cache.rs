//! # Bytechipper Disk Cache

use std::{
    fs,
    path::{Path, PathBuf},
};

use anyhow::Context;
use downloader::{Download, Downloader};

use crate::{BYTECHIPPER_CACHE_CONFIG, PathSource, path_utils};

/// Options for [`BytechipperDiskCache`].
#[derive(Clone, Default, Debug)]
pub struct BytechipperDiskCacheOptions {
    /// Optional path to the cache directory.
    pub cache_dir: Option<PathBuf>,

    /// When set, missing remote files are errors rather than downloads.
    pub offline: bool,

    /// Optional [`Downloader`] builder.
    pub downloader: Option<fn() -> Downloader>,
}

impl BytechipperDiskCacheOptions {
    /// Set the cache directory.
    pub fn with_cache_dir<P: AsRef<Path>>(
        mut self,
        cache_dir: Option<P>,
    ) -> Self {
        self.cache_dir = cache_dir.map(|p| p.as_ref().to_path_buf());
        self
    }

    /// Disable downloads; only previously cached files resolve.
    pub fn with_offline(
        mut self,
        offline: bool,
    ) -> Self {
        self.offline = offline;
        self
    }

    /// Set the downloader builder.
    pub fn with_downloader(
        mut self,
        downloader: Option<fn() -> Downloader>,
    ) -> Self {
        self.downloader = downloader;
        self
    }
}

/// Disk cache for downloaded files.
///
/// Leverages [`Downloader`] for downloading files,
/// and [`PathResolver`](`crate::path_resolver::PathResolver`) for resolving
/// a cache path appropriate for a user/system combo, and any
/// environment overrides.
pub struct BytechipperDiskCache {
    cache_dir: PathBuf,
    offline: bool,

    /// Connection pool for downloading files.
    downloader: Downloader,
}

impl BytechipperDiskCache {
    /// Construct a new [`BytechipperDiskCache`].
    pub fn new(options: BytechipperDiskCacheOptions) -> anyhow::Result<Self> {
        let cache_dir = BYTECHIPPER_CACHE_CONFIG
            .resolve_cache_dir(options.cache_dir)
            .context("failed to resolve cache directory")?;

        let downloader = match options.downloader {
            Some(builder) => builder(),
            None => Downloader::builder().build()?,
        };

        log::debug!("disk cache: cache_dir={}", cache_dir.display());

        Ok(Self {
            cache_dir,
            offline: options.offline,
            downloader,
        })
    }

    /// Get the cache directory.
    pub fn cache_dir(&self) -> &Path {
        &self.cache_dir
    }

    /// Is downloading disabled?
    pub fn offline(&self) -> bool {
        self.offline
    }

    /// Get the cache path for the given key.
    ///
    /// * Does not check that the path exists.
    /// * Does not initialize the containing directories.
    ///
    /// # Arguments
    /// * `context` - prefix dirs, inserted between `self.cache_dir` and `file`.
    /// * `file` - the final file name.
    pub fn cache_path<C, F>(
        &self,
        context: &[C],
        file: F,
    ) -> PathBuf
    where
        C: AsRef<Path>,
        F: AsRef<Path>,
    {
        path_utils::extend_path(&self.cache_dir, context, file)
    }

    /// Resolve a `url_or_filename` reference to a local file.
    ///
    /// * `http`/`https` URLs are downloaded once, then served from the cache.
    /// * Local paths are returned as-is, if they exist.
    ///
    /// # Errors
    /// * The local file does not exist.
    /// * The reference has an unsupported scheme.
    /// * The download is needed, but the cache is offline or the download fails.
    pub fn cached_path(
        &mut self,
        url_or_filename: &str,
    ) -> anyhow::Result<PathBuf> {
        match PathSource::parse(url_or_filename)? {
            PathSource::Local(path) => {
                if !path.exists() {
                    anyhow::bail!("file not found: {}", path.display());
                }
                Ok(path)
            }
            PathSource::Remote {
                url,
                context,
                file_name,
            } => {
                let path = self.cache_path(&context, &file_name);
                self.fetch_into(&url, path)
            }
        }
    }

    fn fetch_into(
        &mut self,
        url: &str,
        path: PathBuf,
    ) -> anyhow::Result<PathBuf> {
        if path.exists() {
            log::debug!("cache hit: {}", path.display());
            return Ok(path);
        }

        if self.offline {
            anyhow::bail!(
                "cached file not found (offline): {}; from {url}",
                path.display(),
            );
        }

        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)
                .with_context(|| format!("failed to create {}", parent.display()))?;
        }

        // Downloads land in a sibling `.part` file; only complete files
        // are moved to `path`.
        let part = part_path(&path);
        if part.exists() {
            fs::remove_file(&part)
                .with_context(|| format!("failed to remove stale {}", part.display()))?;
        }

        log::info!("downloading {url} -> {}", path.display());
        if let Err(err) = self.download(url, &part) {
            if part.exists()
                && let Err(rm_err) = fs::remove_file(&part)
            {
                log::warn!("failed to remove {}: {rm_err}", part.display());
            }
            return Err(err);
        }

        fs::rename(&part, &path).with_context(|| {
            format!("failed to move {} to {}", part.display(), path.display())
        })?;

        Ok(path)
    }

    fn download(
        &mut self,
        url: &str,
        target: &Path,
    ) -> anyhow::Result<()> {
        let mut dl = Download::new(url);
        dl.file_name = target.to_path_buf();

        for summary in self.downloader.download(&[dl])? {
            summary.map_err(|e| anyhow::anyhow!("download failed: {e}"))?;
        }
        Ok(())
    }
}

/// The in-progress download path for `path`; `<name>.part`.
fn part_path(path: &Path) -> PathBuf {
    let mut name = path.file_name().unwrap_or_default().to_os_string();
    name.push(".part");
    path.with_file_name(name)
}
