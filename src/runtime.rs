// src/runtime.rs
use crate::errors::{BannerError, Result};
use chrono::{DateTime, Local};

/// Placeholder shown when a metadata field cannot be read.
pub const UNKNOWN: &str = "Unknown";

/// Format used for the startup timestamp.
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Snapshot of the runtime shown in the banner's system info section.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RuntimeInfo {
    pub interpreter_version: String,
    pub platform: String,
    pub startup_time: String,
}

/// Where runtime metadata is read from.
pub trait MetadataSource {
    /// Version of the Rust toolchain the crate was built with.
    fn interpreter_version(&self) -> Result<String>;

    /// Target operating system identifier, e.g. `linux`.
    fn platform(&self) -> Result<String>;

    fn now(&self) -> DateTime<Local> {
        Local::now()
    }
}

/// Reads metadata from the running process and its build environment.
#[derive(Debug, Default, Clone, Copy)]
pub struct HostMetadata;

impl MetadataSource for HostMetadata {
    fn interpreter_version(&self) -> Result<String> {
        option_env!("COEXIST_RUSTC_VERSION")
            .filter(|v| !v.is_empty())
            .map(str::to_string)
            .ok_or_else(|| {
                BannerError::Metadata("rustc version not recorded at build time".to_string())
            })
    }

    fn platform(&self) -> Result<String> {
        match std::env::consts::OS {
            "" => Err(BannerError::Metadata("unknown target OS".to_string())),
            os => Ok(os.to_string()),
        }
    }
}

/// Collects runtime metadata from the host, never failing.
pub fn collect_runtime_info() -> RuntimeInfo {
    collect_runtime_info_from(&HostMetadata)
}

/// Collects runtime metadata from `source`.
///
/// Each field that fails to resolve is replaced by [`UNKNOWN`] on its own;
/// the timestamp is always taken.
pub fn collect_runtime_info_from<S: MetadataSource + ?Sized>(source: &S) -> RuntimeInfo {
    RuntimeInfo {
        interpreter_version: source
            .interpreter_version()
            .unwrap_or_else(|_| UNKNOWN.to_string()),
        platform: source.platform().unwrap_or_else(|_| UNKNOWN.to_string()),
        startup_time: source.now().format(TIMESTAMP_FORMAT).to_string(),
    }
}
