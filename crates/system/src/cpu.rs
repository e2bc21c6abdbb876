use avgbuf_core::Sample;

/// Mean of per-core usage readings, rounded to a whole percent.
///
/// An empty slice (no CPUs reported yet) reads as 0.
pub fn usage_percent(per_core: &[f32]) -> Sample {
    if per_core.is_empty() {
        return 0;
    }
    let mean = per_core.iter().sum::<f32>() / per_core.len() as f32;
    mean.round().clamp(0.0, 100.0) as Sample
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn averages_cores() {
        assert_eq!(usage_percent(&[10.0, 30.0]), 20);
    }

    #[test]
    fn rounds_to_nearest() {
        assert_eq!(usage_percent(&[12.4, 12.8]), 13);
    }

    #[test]
    fn no_cores_reads_zero() {
        assert_eq!(usage_percent(&[]), 0);
    }

    #[test]
    fn clamps_overshoot() {
        assert_eq!(usage_percent(&[100.4, 100.6]), 100);
    }
}
