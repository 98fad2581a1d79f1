//! Resident-memory footprint of the shared entity trie.
//!
//! Samples RSS before and after the one-time `charref::load()`, loads again
//! to show the second call is free, and logs the trie's own accounting.

use std::time::Instant;

#[global_allocator]
static GLOBAL: mimalloc::MiMalloc = mimalloc::MiMalloc;

/// Resident set size in bytes, from `VmRSS` in `/proc/self/status`.
fn resident_bytes() -> Option<u64> {
    let status = std::fs::read_to_string("/proc/self/status").ok()?;
    parse_vm_rss(&status)
}

/// `VmRSS:` is reported in kB regardless of the kernel's page size.
fn parse_vm_rss(status: &str) -> Option<u64> {
    let line = status.lines().find_map(|line| line.strip_prefix("VmRSS:"))?;
    let mut fields = line.split_whitespace();
    let value = fields.next()?.parse::<u64>().ok()?;
    match fields.next() {
        Some("kB") => value.checked_mul(1024),
        _ => None,
    }
}

fn format_rss(rss: Option<u64>) -> String {
    rss.map_or_else(|| "unavailable".to_string(), |bytes| format!("{bytes} B"))
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    if charref::is_loaded() {
        log::warn!("trie was built before the first sample; rss delta will read zero");
    }
    let before = resident_bytes();
    let started = Instant::now();
    let trie = charref::load();
    let build_time = started.elapsed();
    let after_first = resident_bytes();

    let started = Instant::now();
    let again = charref::load();
    let reload_time = started.elapsed();
    let after_second = resident_bytes();
    if !std::ptr::eq(trie, again) {
        log::warn!("second load() returned a different trie instance");
    }

    let stats = trie.stats();
    log::info!(
        "rss before={} after_load={} after_reload={}",
        format_rss(before),
        format_rss(after_first),
        format_rss(after_second)
    );
    if let (Some(before), Some(after)) = (before, after_first) {
        log::info!("rss delta from load: {} B", after.saturating_sub(before));
    }
    log::info!(
        "trie: names={} legacy={} nodes={} max_depth={} heap_bytes={}",
        stats.terminals,
        stats.legacy_terminals,
        stats.nodes,
        stats.max_depth,
        stats.heap_bytes
    );
    log::info!("build took {build_time:?}; second load took {reload_time:?}");
}

#[cfg(test)]
mod tests {
    use super::parse_vm_rss;

    #[test]
    fn vm_rss_is_read_in_kilobytes() {
        let status = "Name:\tentitrie\nVmPeak:\t   12000 kB\nVmRSS:\t    5432 kB\nThreads:\t1\n";
        assert_eq!(parse_vm_rss(status), Some(5432 * 1024));
    }

    #[test]
    fn missing_or_malformed_vm_rss_is_unavailable() {
        assert_eq!(parse_vm_rss("Name:\tentitrie\n"), None);
        assert_eq!(parse_vm_rss("VmRSS:\t  abc kB\n"), None);
        assert_eq!(parse_vm_rss("VmRSS:\t  12 pages\n"), None);
    }
}
