//! Host information for the `sysinfo` command
//!
//! Values are collected once and rendered as a fixed, labeled report.

use serde::{Deserialize, Serialize};
use std::fmt;
use sysinfo::System;
use tracing::{debug, instrument, warn};

const BYTES_PER_GB: f64 = 1e9;

/// Snapshot of the host the command runs on
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SystemReport {
    /// Host name, `None` if the OS refused to report it
    pub hostname: Option<String>,
    /// Kernel family, e.g. `Linux` or `Darwin`
    pub os_type: String,
    /// Target OS name, e.g. `linux`
    pub platform: String,
    /// CPU architecture, e.g. `x86_64`
    pub arch: String,
    /// Logical CPUs available to the process
    pub cpus: usize,
    /// Total physical memory in bytes
    pub total_memory: Option<u64>,
    /// Memory available for new allocations in bytes
    pub free_memory: Option<u64>,
    /// Seconds since boot
    pub uptime_secs: Option<u64>,
}

impl SystemReport {
    /// Gather a report for the current host
    #[instrument]
    pub fn collect() -> Self {
        let hostname = match hostname::get() {
            Ok(name) => Some(name.to_string_lossy().into_owned()),
            Err(e) => {
                warn!("Unable to read hostname: {}", e);
                None
            }
        };

        let cpus = std::thread::available_parallelism()
            .map(|n| n.get())
            .unwrap_or(1);

        let (total_memory, free_memory, uptime_secs) = if sysinfo::IS_SUPPORTED_SYSTEM {
            let mut sys = System::new();
            sys.refresh_memory();
            (
                Some(sys.total_memory()),
                Some(sys.available_memory()),
                Some(System::uptime()),
            )
        } else {
            warn!("Memory and uptime are not supported on this platform");
            (None, None, None)
        };
        debug!(?total_memory, ?free_memory, ?uptime_secs, cpus, "Collected host metrics");

        Self {
            hostname,
            os_type: os_type(std::env::consts::OS),
            platform: std::env::consts::OS.to_string(),
            arch: std::env::consts::ARCH.to_string(),
            cpus,
            total_memory,
            free_memory,
            uptime_secs,
        }
    }
}

impl fmt::Display for SystemReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "🖥️  System Information:")?;
        writeln!(
            f,
            "- Hostname      : {}",
            self.hostname.as_deref().unwrap_or("unknown")
        )?;
        writeln!(f, "- OS Type       : {}", self.os_type)?;
        writeln!(f, "- Platform      : {}", self.platform)?;
        writeln!(f, "- Architecture  : {}", self.arch)?;
        writeln!(f, "- CPUs          : {} cores", self.cpus)?;
        writeln!(f, "- Total Memory  : {}", gigabytes(self.total_memory))?;
        writeln!(f, "- Free Memory   : {}", gigabytes(self.free_memory))?;
        writeln!(f, "- Uptime        : {}", minutes(self.uptime_secs))
    }
}

fn gigabytes(bytes: Option<u64>) -> String {
    match bytes {
        Some(bytes) => format!("{:.2} GB", bytes as f64 / BYTES_PER_GB),
        None => "unavailable".to_string(),
    }
}

fn minutes(secs: Option<u64>) -> String {
    match secs {
        Some(secs) => format!("{:.2} minutes", secs as f64 / 60.0),
        None => "unavailable".to_string(),
    }
}

/// Kernel family name for a Rust target OS
fn os_type(os: &str) -> String {
    match os {
        "linux" | "android" => "Linux".to_string(),
        "macos" | "ios" => "Darwin".to_string(),
        "windows" => "Windows_NT".to_string(),
        "freebsd" => "FreeBSD".to_string(),
        "openbsd" => "OpenBSD".to_string(),
        "netbsd" => "NetBSD".to_string(),
        other => {
            let mut chars = other.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars).collect(),
                None => String::new(),
            }
        }
    }
}
