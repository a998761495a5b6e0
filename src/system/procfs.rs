//! Linux `/proc/cpuinfo` topology, for the physical core count.

use std::collections::HashSet;

/// Physical core count: distinct (`physical id`, `core id`) pairs.
///
/// Returns `None` when the file carries no topology (some VMs and ARM boards).
pub fn parse_physical_cores(cpuinfo: &str) -> Option<usize> {
    let mut cores = HashSet::new();
    for block in cpuinfo.split("\n\n") {
        let mut physical = None;
        let mut core = None;
        for (key, value) in block.lines().filter_map(|line| line.split_once(':')) {
            match key.trim() {
                "physical id" => physical = Some(value.trim()),
                "core id" => core = Some(value.trim()),
                _ => {}
            }
        }
        if let (Some(physical), Some(core)) = (physical, core) {
            cores.insert((physical, core));
        }
    }
    (!cores.is_empty()).then_some(cores.len())
}
