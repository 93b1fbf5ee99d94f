//! # bytechipper-disk-cache
//!
//! Resolves `url_or_filename` references to local files,
//! downloading and caching remote files on first use.
#![warn(missing_docs)]

use crate::path_resolver::PathResolver;

pub mod cached_path;
pub mod disk_cache;
pub mod path_resolver;
pub mod path_utils;

pub use cached_path::PathSource;
pub use disk_cache::{BytechipperDiskCache, BytechipperDiskCacheOptions};

/// Environment variable key to override the default cache directory.
pub const BYTECHIPPER_CACHE_DIR: &str = "BYTECHIPPER_CACHE_DIR";

/// Default [`PathResolver`] for bytechipper.
pub const BYTECHIPPER_CACHE_CONFIG: PathResolver = PathResolver {
    qualifier: "io.crates.bytechipper",
    organization: "",
    application: "bytechipper",
    cache_env_vars: &[BYTECHIPPER_CACHE_DIR],
};
