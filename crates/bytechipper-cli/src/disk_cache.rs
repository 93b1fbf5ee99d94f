use bytechipper::disk_cache::{BytechipperDiskCache, BytechipperDiskCacheOptions};

/// Disk cache argument group.
#[derive(clap::Args, Debug)]
pub struct DiskCacheArgs {
    /// Cache directory.
    #[arg(long, default_value = None)]
    cache_dir: Option<String>,

    /// Never download; only previously cached files are used.
    #[arg(long)]
    offline: bool,
}

impl DiskCacheArgs {
    /// Initialize the disk cache.
    pub fn init_disk_cache(&self) -> Result<BytechipperDiskCache, Box<dyn std::error::Error>> {
        let options = BytechipperDiskCacheOptions::default()
            .with_cache_dir(self.cache_dir.as_ref())
            .with_offline(self.offline);

        Ok(BytechipperDiskCache::new(options)?)
    }
}
