use core::iter::FusedIterator;

use crate::slice::Slice;

/// Iterator over the non-overlapping occurrences of a pattern in a `StrBuf`
///
/// Yields forward slices in ascending order. After a match at `low..=high`
/// the scan resumes at `high + 1`.
///
/// This iterator implements `Clone`.
#[derive(Clone, Debug)]
pub struct Matches<'a> {
    haystack: &'a [u8],
    pattern: &'a [u8],
    position: usize,
}

impl<'a> Matches<'a> {
    /// `pattern` must be non-empty.
    pub(crate) fn new(haystack: &'a [u8], pattern: &'a [u8]) -> Self {
        debug_assert!(!pattern.is_empty());
        Self {
            haystack,
            pattern,
            position: 0,
        }
    }
}

impl Iterator for Matches<'_> {
    type Item = Slice;

    fn next(&mut self) -> Option<Self::Item> {
        let rest = self.haystack.get(self.position..)?;
        let Some(offset) = rest
            .windows(self.pattern.len())
            .position(|window| window == self.pattern)
        else {
            self.position = self.haystack.len() + 1;
            return None;
        };

        let low = self.position + offset;
        self.position = low + self.pattern.len();
        Some(Slice::forward(low, self.position - 1))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.haystack.len().saturating_sub(self.position);
        (0, Some(remaining / self.pattern.len()))
    }
}

impl FusedIterator for Matches<'_> {}
