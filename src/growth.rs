/// Strategy for choosing a new capacity once a write no longer fits.
///
/// The factor is not observable beyond `capacity()`; every policy
/// guarantees `length < capacity` after a successful grow.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum GrowthPolicy {
    /// Grow to exactly `capacity + additional`.
    #[default]
    Exact,
    /// Grow to at least `capacity + additional`, and at least twice the
    /// current capacity, for amortized appends.
    Doubling,
}

impl GrowthPolicy {
    /// Capacity to grow to so that `length + additional` bytes fit with a
    /// terminator, or `None` if the current capacity already suffices.
    ///
    /// Arithmetic saturates; an impossible capacity is left for the
    /// allocator to reject.
    #[must_use]
    pub fn next_capacity(self, length: usize, capacity: usize, additional: usize) -> Option<usize> {
        let needed = length.saturating_add(additional);
        if needed < capacity {
            return None;
        }
        let grown = match self {
            GrowthPolicy::Exact => capacity.saturating_add(additional),
            GrowthPolicy::Doubling => capacity
                .saturating_mul(2)
                .max(capacity.saturating_add(additional)),
        };
        Some(grown)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn no_growth_while_terminator_fits() {
        assert_eq!(GrowthPolicy::Exact.next_capacity(3, 256, 252), None);
        assert_eq!(GrowthPolicy::Doubling.next_capacity(0, 1, 0), None);
    }

    #[test]
    fn exact_adds_requested_bytes() {
        assert_eq!(GrowthPolicy::Exact.next_capacity(3, 256, 253), Some(509));
        assert_eq!(GrowthPolicy::Exact.next_capacity(0, 1, 1), Some(2));
    }

    #[test]
    fn doubling_at_least_doubles() {
        assert_eq!(GrowthPolicy::Doubling.next_capacity(15, 16, 1), Some(32));
        assert_eq!(GrowthPolicy::Doubling.next_capacity(255, 256, 1), Some(512));
        assert_eq!(GrowthPolicy::Doubling.next_capacity(10, 16, 100), Some(116));
    }
}
