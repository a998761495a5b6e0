//! Host system report served at `/info`.
//!
//! # Data Flow
//! ```text
//! HostProbe (sysinfo by default)
//!     → cpu model, core count
//!     → cpu usage over the sampling window (two refreshes)
//!     → memory totals
//!     → SystemInfo (JSON)
//! ```
//!
//! # Design Decisions
//! - Collection goes through `HostProbe` so hosts without procfs are covered
//! - Physical cores come from /proc/cpuinfo when present, else logical cores
//! - The sampling wait is an async sleep, never a blocking one
//! - Figures are rounded to one decimal place

pub mod info;
pub mod procfs;

pub use info::{collect, collect_with, HostProbe, MemorySnapshot, SysinfoProbe, SystemInfo, SystemInfoError};
