use crate::buffer::StrBuf;
use crate::error::{Result, StrBufError};
use crate::iter::Matches;
use crate::slice::Slice;

impl StrBuf {
    /// Lazily scans for `pattern`, left to right, without overlap.
    ///
    /// # Errors
    ///
    /// Returns `StrBufError::EmptyPattern` if `pattern` is empty.
    pub fn matches<'a>(&'a self, pattern: &'a [u8]) -> Result<Matches<'a>> {
        if pattern.is_empty() {
            return Err(StrBufError::EmptyPattern);
        }
        Ok(Matches::new(self.as_bytes(), pattern))
    }

    /// Writes every non-overlapping occurrence of `pattern` into `out`, in
    /// ascending order, and returns how many were found.
    ///
    /// # Errors
    ///
    /// Returns `StrBufError::EmptyPattern` if `pattern` is empty, or
    /// `StrBufError::BadSize` if there are more matches than `out` can hold.
    /// `required` then carries the full match count; the contents of `out`
    /// are unspecified.
    pub fn find_substring(&self, pattern: &[u8], out: &mut [Slice]) -> Result<usize> {
        let mut found = 0;
        for m in self.matches(pattern)? {
            if let Some(slot) = out.get_mut(found) {
                *slot = m;
            }
            found += 1;
        }

        if found > out.len() {
            return Err(StrBufError::BadSize {
                required: found,
                provided: out.len(),
            });
        }
        Ok(found)
    }

    /// Single-byte case of [`StrBuf::find_substring`].
    ///
    /// # Errors
    ///
    /// Returns `StrBufError::BadSize` if there are more matches than `out` can hold.
    pub fn find_char(&self, c: u8, out: &mut [Slice]) -> Result<usize> {
        self.find_substring(core::slice::from_ref(&c), out)
    }

    /// Number of non-overlapping occurrences of `pattern`.
    ///
    /// # Errors
    ///
    /// Returns `StrBufError::EmptyPattern` if `pattern` is empty.
    pub fn count_matches(&self, pattern: &[u8]) -> Result<usize> {
        Ok(self.matches(pattern)?.count())
    }
}
