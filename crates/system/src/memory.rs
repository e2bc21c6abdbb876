use avgbuf_core::Sample;

/// RAM in use as a whole percent of `total`; 0 when `total` is unknown.
pub fn used_percent(used: u64, total: u64) -> Sample {
    if total == 0 {
        return 0;
    }
    (used as f64 * 100.0 / total as f64).round().clamp(0.0, 100.0) as Sample
}

/// Format a byte count as a human-readable string (e.g. `"7.3 GiB"`).
pub fn format_bytes(bytes: u64) -> String {
    const GIB: u64 = 1 << 30;
    const MIB: u64 = 1 << 20;
    const KIB: u64 = 1 << 10;

    if bytes >= GIB {
        format!("{:.1} GiB", bytes as f64 / GIB as f64)
    } else if bytes >= MIB {
        format!("{:.1} MiB", bytes as f64 / MIB as f64)
    } else if bytes >= KIB {
        format!("{:.1} KiB", bytes as f64 / KIB as f64)
    } else {
        format!("{bytes} B")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn used_percent_of_total() {
        assert_eq!(used_percent(3 << 30, 4 << 30), 75);
    }

    #[test]
    fn used_percent_unknown_total() {
        assert_eq!(used_percent(1024, 0), 0);
    }

    #[test]
    fn format_bytes_gib() {
        assert_eq!(format_bytes(8 * 1024 * 1024 * 1024), "8.0 GiB");
    }

    #[test]
    fn format_bytes_zero() {
        assert_eq!(format_bytes(0), "0 B");
    }
}
