use std::{
    fs,
    path::{Path, PathBuf},
};

use anyhow::Result;
use file_rotate::{
    compression::Compression,
    suffix::{AppendTimestamp, FileLimit},
    {ContentLimit, FileRotate},
};
use simplelog::{ConfigBuilder, LevelFilter, WriteLogger};

pub fn log_file_path(cache_dir: &str) -> PathBuf {
    Path::new(cache_dir).join("logs/main.log")
}

// Installs the global logger. Can only succeed once per process.
pub fn init(cache_dir: &str) -> Result<()> {
    let path = log_file_path(cache_dir);
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let log = FileRotate::new(
        path,
        AppendTimestamp::default(FileLimit::MaxFiles(3)),
        ContentLimit::Lines(1000),
        Compression::None,
        #[cfg(unix)]
        None,
    );
    let config = ConfigBuilder::new().set_time_format_rfc3339().build();
    let write_logger = WriteLogger::new(LevelFilter::Info, config, log);
    log::set_boxed_logger(write_logger)?;
    log::set_max_level(LevelFilter::Info);
    info!("logger initialized, cache_dir={cache_dir}");
    Ok(())
}
