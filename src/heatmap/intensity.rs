/// Visual weight of a day cell relative to the month's peak count.
#[derive(Clone, Copy, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub(crate) enum Intensity {
    Zero,
    Low,
    Medium,
    High,
}

impl Intensity {
    /// Buckets a count by its ratio to the month's maximum: above 0.7 is
    /// High, above 0.4 is Medium, anything else populated is Low.
    ///
    /// Comparisons are strict, so a ratio landing exactly on a threshold
    /// falls to the lower tier.  Cross-multiplying instead of dividing
    /// keeps that tie-break exact.
    pub(crate) fn for_count(count: u64, max_count: u64) -> Intensity {
        if count == 0 {
            return Intensity::Zero;
        }
        let scaled = u128::from(count) * 10;
        let max = u128::from(max_count.max(1));
        if scaled > max * 7 {
            Intensity::High
        } else if scaled > max * 4 {
            Intensity::Medium
        } else {
            Intensity::Low
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zero_count_is_always_zero_tier() {
        assert_eq!(Intensity::for_count(0, 10), Intensity::Zero);
        assert_eq!(Intensity::for_count(0, 0), Intensity::Zero);
        assert_eq!(Intensity::for_count(0, u64::MAX), Intensity::Zero);
    }

    #[test]
    fn test_peak_count_is_high() {
        assert_eq!(Intensity::for_count(10, 10), Intensity::High);
        assert_eq!(Intensity::for_count(1, 1), Intensity::High);
        assert_eq!(Intensity::for_count(u64::MAX, u64::MAX), Intensity::High);
    }

    #[test]
    fn test_partition() {
        assert_eq!(Intensity::for_count(8, 10), Intensity::High);
        assert_eq!(Intensity::for_count(5, 10), Intensity::Medium);
        assert_eq!(Intensity::for_count(3, 10), Intensity::Low);
        assert_eq!(Intensity::for_count(1, 10), Intensity::Low);
    }

    #[test]
    fn test_exact_boundaries_fall_to_lower_tier() {
        // ratio == 0.7 is Medium, not High
        assert_eq!(Intensity::for_count(7, 10), Intensity::Medium);
        assert_eq!(Intensity::for_count(70, 100), Intensity::Medium);
        // ratio == 0.4 is Low, not Medium
        assert_eq!(Intensity::for_count(4, 10), Intensity::Low);
        assert_eq!(Intensity::for_count(40, 100), Intensity::Low);
    }

    #[test]
    fn test_just_past_boundaries() {
        assert_eq!(Intensity::for_count(71, 100), Intensity::High);
        assert_eq!(Intensity::for_count(41, 100), Intensity::Medium);
    }
}
