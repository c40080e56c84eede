use crate::error::{Result, StrBufError};

/// Order in which the positions of a [`Slice`] are read or written.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Direction {
    /// From the low index up to the high index
    #[default]
    Forward,
    /// From the high index down to the low index
    Backward,
}

/// An inclusive run of positions `low..=high` plus the direction it is traversed in.
///
/// A slice is a plain value: it is never stored inside a `StrBuf`, and a slice
/// returned by a search is only meaningful until the next mutation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Slice {
    low: usize,
    high: usize,
    direction: Direction,
}

impl Slice {
    /// Creates a slice from a `(start, end)` pair.
    ///
    /// `start > end` yields a backward slice over `end..=start`.
    #[must_use]
    pub fn new(start: usize, end: usize) -> Self {
        if start > end {
            Self::backward(end, start)
        } else {
            Self::forward(start, end)
        }
    }

    /// Forward slice over `min(a, b)..=max(a, b)`.
    #[must_use]
    pub fn forward(a: usize, b: usize) -> Self {
        Self {
            low: a.min(b),
            high: a.max(b),
            direction: Direction::Forward,
        }
    }

    /// Backward slice over `min(a, b)..=max(a, b)`.
    #[must_use]
    pub fn backward(a: usize, b: usize) -> Self {
        Self {
            low: a.min(b),
            high: a.max(b),
            direction: Direction::Backward,
        }
    }

    /// Slice addressing exactly one position.
    #[must_use]
    pub fn single(position: usize) -> Self {
        Self::forward(position, position)
    }

    #[must_use]
    pub fn low(&self) -> usize {
        self.low
    }

    #[must_use]
    pub fn high(&self) -> usize {
        self.high
    }

    /// Position the traversal starts at.
    #[must_use]
    pub fn start(&self) -> usize {
        match self.direction {
            Direction::Forward => self.low,
            Direction::Backward => self.high,
        }
    }

    /// Position the traversal ends at.
    #[must_use]
    pub fn end(&self) -> usize {
        match self.direction {
            Direction::Forward => self.high,
            Direction::Backward => self.low,
        }
    }

    /// Number of positions addressed. Never zero.
    #[must_use]
    #[allow(clippy::len_without_is_empty)]
    pub fn len(&self) -> usize {
        self.high - self.low + 1
    }

    #[must_use]
    pub fn direction(&self) -> Direction {
        self.direction
    }

    #[must_use]
    pub fn is_backward(&self) -> bool {
        self.direction == Direction::Backward
    }

    /// Same positions, opposite direction.
    #[must_use]
    pub fn reversed(&self) -> Self {
        let direction = match self.direction {
            Direction::Forward => Direction::Backward,
            Direction::Backward => Direction::Forward,
        };
        Self { direction, ..*self }
    }
}

/// Fails with `BadIndex` unless both endpoints address existing positions.
pub(crate) fn validate_element_range(slice: &Slice, length: usize) -> Result<()> {
    // `high` first: it is the larger endpoint.
    for index in [slice.high, slice.low] {
        if index >= length {
            return Err(StrBufError::BadIndex { index, length });
        }
    }
    Ok(())
}

/// Fails with `BadIndex` if `position` is past the append position.
pub(crate) fn validate_insert_position(position: usize, length: usize) -> Result<()> {
    if position > length {
        return Err(StrBufError::BadIndex {
            index: position,
            length,
        });
    }
    Ok(())
}

/// Output slots needed to read `count` bytes plus the terminator.
pub(crate) fn required_output_capacity(count: usize) -> usize {
    count + 1
}

/// Fails with `BadSize` if `provided` slots cannot hold `count` bytes plus the terminator.
pub(crate) fn validate_output_capacity(count: usize, provided: usize) -> Result<()> {
    let required = required_output_capacity(count);
    if provided < required {
        return Err(StrBufError::BadSize { required, provided });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_infers_direction_from_order() {
        let forward = Slice::new(1, 4);
        assert_eq!(forward.direction(), Direction::Forward);
        assert_eq!((forward.low(), forward.high(), forward.len()), (1, 4, 4));

        let backward = Slice::new(4, 1);
        assert!(backward.is_backward());
        assert_eq!((backward.low(), backward.high(), backward.len()), (1, 4, 4));
        assert_eq!((backward.start(), backward.end()), (4, 1));
    }

    #[test]
    fn single_position_is_forward() {
        let s = Slice::new(3, 3);
        assert_eq!(s, Slice::single(3));
        assert_eq!(s.len(), 1);
        assert!(Slice::backward(3, 3).is_backward());
    }

    #[test]
    fn reversed_keeps_positions() {
        let s = Slice::forward(2, 5).reversed();
        assert!(s.is_backward());
        assert_eq!((s.low(), s.high()), (2, 5));
        assert_eq!(s.reversed(), Slice::forward(2, 5));
    }

    #[test]
    fn element_range_validation() {
        assert!(validate_element_range(&Slice::new(0, 2), 3).is_ok());
        assert_eq!(
            validate_element_range(&Slice::new(0, 3), 3),
            Err(StrBufError::BadIndex {
                index: 3,
                length: 3
            })
        );
        assert_eq!(
            validate_element_range(&Slice::single(0), 0),
            Err(StrBufError::BadIndex {
                index: 0,
                length: 0
            })
        );
    }

    #[test]
    fn insert_position_allows_append() {
        assert!(validate_insert_position(3, 3).is_ok());
        assert!(validate_insert_position(4, 3).is_err());
    }

    #[test]
    fn output_capacity_includes_terminator() {
        assert_eq!(required_output_capacity(3), 4);
        assert!(validate_output_capacity(3, 4).is_ok());
        assert_eq!(
            validate_output_capacity(3, 3),
            Err(StrBufError::BadSize {
                required: 4,
                provided: 3
            })
        );
    }
}
