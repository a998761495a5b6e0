//! System report collection.

use std::time::Duration;

use serde::{Deserialize, Serialize};
use sysinfo::System;
use thiserror::Error;

use crate::system::procfs::parse_physical_cores;

const CPUINFO: &str = "/proc/cpuinfo";

/// Snapshot of host CPU and memory figures.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SystemInfo {
    pub cpu_model: String,
    /// Busy percentage over the sampling window.
    pub cpu_usage: f64,
    pub cpu_cores: usize,
    /// Used memory percentage.
    pub ram_usage: f64,
    /// Total memory in GiB.
    pub total_memory: f64,
}

#[derive(Debug, Error)]
pub enum SystemInfoError {
    #[error("{0} figures unavailable on this host")]
    Unavailable(&'static str),
}

/// Memory totals in bytes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MemorySnapshot {
    pub total_bytes: u64,
    pub available_bytes: u64,
}

impl MemorySnapshot {
    pub fn used_percent(&self) -> f64 {
        if self.total_bytes == 0 {
            return 0.0;
        }
        let used = self.total_bytes.saturating_sub(self.available_bytes);
        used as f64 / self.total_bytes as f64 * 100.0
    }

    pub fn total_gib(&self) -> f64 {
        self.total_bytes as f64 / (1024.0 * 1024.0 * 1024.0)
    }
}

/// Where host figures come from.
pub trait HostProbe: Send {
    fn cpu_model(&mut self) -> Option<String>;

    /// Physical cores, when the host exposes its topology.
    fn physical_cores(&mut self) -> Option<usize>;

    fn logical_cores(&mut self) -> usize;

    /// Take a CPU reading; usage is measured between consecutive refreshes.
    fn refresh_cpu(&mut self);

    /// Global busy percentage as of the last refresh.
    fn cpu_usage(&self) -> f64;

    fn memory(&mut self) -> Option<MemorySnapshot>;
}

/// Cross-platform probe backed by `sysinfo`.
pub struct SysinfoProbe {
    system: System,
}

impl SysinfoProbe {
    pub fn new() -> Self {
        let mut system = System::new();
        system.refresh_cpu_all();
        Self { system }
    }
}

impl Default for SysinfoProbe {
    fn default() -> Self {
        Self::new()
    }
}

impl HostProbe for SysinfoProbe {
    fn cpu_model(&mut self) -> Option<String> {
        self.system
            .cpus()
            .first()
            .map(|cpu| cpu.brand().trim().to_string())
            .filter(|brand| !brand.is_empty())
    }

    fn physical_cores(&mut self) -> Option<usize> {
        // Only Linux has /proc; elsewhere this falls through to logical cores.
        std::fs::read_to_string(CPUINFO)
            .ok()
            .and_then(|cpuinfo| parse_physical_cores(&cpuinfo))
    }

    fn logical_cores(&mut self) -> usize {
        match self.system.cpus().len() {
            0 => std::thread::available_parallelism()
                .map(|n| n.get())
                .unwrap_or(1),
            n => n,
        }
    }

    fn refresh_cpu(&mut self) {
        self.system.refresh_cpu_usage();
    }

    fn cpu_usage(&self) -> f64 {
        f64::from(self.system.global_cpu_usage())
    }

    fn memory(&mut self) -> Option<MemorySnapshot> {
        self.system.refresh_memory();
        let total_bytes = self.system.total_memory();
        (total_bytes > 0).then(|| MemorySnapshot {
            total_bytes,
            available_bytes: self.system.available_memory(),
        })
    }
}

/// Collect a system report from the host, sampling CPU usage over `sample`.
pub async fn collect(sample: Duration) -> Result<SystemInfo, SystemInfoError> {
    let mut probe = SysinfoProbe::new();
    collect_with(&mut probe, sample.max(sysinfo::MINIMUM_CPU_UPDATE_INTERVAL)).await
}

/// Collect a system report from `probe`.
pub async fn collect_with<P: HostProbe>(
    probe: &mut P,
    sample: Duration,
) -> Result<SystemInfo, SystemInfoError> {
    let cpu_model = probe
        .cpu_model()
        .unwrap_or_else(|| std::env::consts::ARCH.to_string());
    let cpu_cores = match probe.physical_cores() {
        Some(cores) => cores,
        None => probe.logical_cores(),
    };

    probe.refresh_cpu();
    tokio::time::sleep(sample).await;
    probe.refresh_cpu();
    let cpu_usage = probe.cpu_usage().clamp(0.0, 100.0);

    let mem = probe.memory().ok_or(SystemInfoError::Unavailable("memory"))?;

    let info = SystemInfo {
        cpu_model,
        cpu_usage: round1(cpu_usage),
        cpu_cores,
        ram_usage: round1(mem.used_percent()),
        total_memory: round1(mem.total_gib()),
    };
    tracing::debug!(
        cpu_usage = info.cpu_usage,
        ram_usage = info.ram_usage,
        "System report collected"
    );
    Ok(info)
}

fn round1(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

#[cfg(test)]
mod tests {
    use super::*;

    /// A host without procfs or a CPU brand string.
    struct BareHost {
        refreshes: usize,
        memory: Option<MemorySnapshot>,
    }

    impl HostProbe for BareHost {
        fn cpu_model(&mut self) -> Option<String> {
            None
        }

        fn physical_cores(&mut self) -> Option<usize> {
            None
        }

        fn logical_cores(&mut self) -> usize {
            8
        }

        fn refresh_cpu(&mut self) {
            self.refreshes += 1;
        }

        fn cpu_usage(&self) -> f64 {
            if self.refreshes >= 2 { 37.26 } else { 0.0 }
        }

        fn memory(&mut self) -> Option<MemorySnapshot> {
            self.memory
        }
    }

    #[test]
    fn test_round1() {
        assert_eq!(round1(12.345), 12.3);
        assert_eq!(round1(99.96), 100.0);
        assert_eq!(round1(0.0), 0.0);
    }

    #[test]
    fn test_memory_snapshot() {
        let mem = MemorySnapshot {
            total_bytes: 16 * 1024 * 1024 * 1024,
            available_bytes: 4 * 1024 * 1024 * 1024,
        };
        assert!((mem.used_percent() - 75.0).abs() < 1e-9);
        assert!((mem.total_gib() - 16.0).abs() < 1e-9);

        let empty = MemorySnapshot { total_bytes: 0, available_bytes: 0 };
        assert_eq!(empty.used_percent(), 0.0);
    }

    #[tokio::test]
    async fn test_collect_without_procfs() {
        let mut host = BareHost {
            refreshes: 0,
            memory: Some(MemorySnapshot {
                total_bytes: 8 * 1024 * 1024 * 1024,
                available_bytes: 6 * 1024 * 1024 * 1024,
            }),
        };
        let info = collect_with(&mut host, Duration::from_millis(1)).await.unwrap();
        assert_eq!(info.cpu_model, std::env::consts::ARCH);
        assert_eq!(info.cpu_cores, 8);
        assert_eq!(info.cpu_usage, 37.3);
        assert_eq!(info.ram_usage, 25.0);
        assert_eq!(info.total_memory, 8.0);
        assert_eq!(host.refreshes, 2);
    }

    #[tokio::test]
    async fn test_collect_reports_missing_memory() {
        let mut host = BareHost { refreshes: 0, memory: None };
        let err = collect_with(&mut host, Duration::from_millis(1)).await.unwrap_err();
        assert_eq!(err.to_string(), "memory figures unavailable on this host");
    }

    #[test]
    fn test_serialized_field_names() {
        let info = SystemInfo {
            cpu_model: "test cpu".into(),
            cpu_usage: 12.5,
            cpu_cores: 4,
            ram_usage: 40.0,
            total_memory: 15.6,
        };
        let json = serde_json::to_value(&info).unwrap();
        assert_eq!(json["cpu_model"], "test cpu");
        assert_eq!(json["cpu_cores"], 4);
        assert_eq!(json["total_memory"], 15.6);
    }

    #[tokio::test]
    async fn test_collect_on_host() {
        let info = collect(Duration::from_millis(20)).await.unwrap();
        assert!(!info.cpu_model.is_empty());
        assert!(info.cpu_cores >= 1);
        assert!((0.0..=100.0).contains(&info.cpu_usage));
        assert!((0.0..=100.0).contains(&info.ram_usage));
        assert!(info.total_memory > 0.0);
    }
}
