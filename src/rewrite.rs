use alloc::vec::Vec;

use log::debug;

use crate::buffer::StrBuf;
use crate::error::{Result, StrBufError};
use crate::slice::Slice;

impl StrBuf {
    /// Removes `pattern` until no occurrence is left, including occurrences
    /// formed at the junctions of earlier removals.
    ///
    /// Returns the total number of removals.
    ///
    /// # Errors
    ///
    /// Returns `StrBufError::EmptyPattern` if `pattern` is empty, or
    /// `StrBufError::NoProgress` if `max_rewrite_passes` is exceeded.
    /// Removals from completed passes are kept.
    pub fn remove_all(&mut self, pattern: &[u8]) -> Result<usize> {
        self.rewrite_all(pattern, None)
    }

    /// Replaces `pattern` with `replacement` until no occurrence of `pattern`
    /// is left.
    ///
    /// Returns the total number of replacements.
    ///
    /// A `replacement` containing `pattern` can never converge; that case is
    /// rejected before anything is changed.
    ///
    /// # Errors
    ///
    /// - `StrBufError::EmptyPattern` if `pattern` is empty
    /// - `StrBufError::NoProgress { passes: 0 }` if `pattern` occurs and
    ///   `replacement` contains it
    /// - `StrBufError::NoProgress` if `max_rewrite_passes` is exceeded
    /// - `StrBufError::NoMemory` if the storage cannot be grown
    ///
    /// Replacements applied before the error are kept.
    pub fn replace_all(&mut self, pattern: &[u8], replacement: &[u8]) -> Result<usize> {
        if self.matches(pattern)?.next().is_some() && contains(replacement, pattern) {
            debug!(
                "refusing rewrite: replacement \"{}\" regenerates pattern \"{}\"",
                replacement.escape_ascii(),
                pattern.escape_ascii()
            );
            return Err(StrBufError::NoProgress { passes: 0 });
        }
        self.rewrite_all(pattern, Some(replacement))
    }

    fn rewrite_all(&mut self, pattern: &[u8], replacement: Option<&[u8]>) -> Result<usize> {
        let new_len = replacement.map_or(0, <[u8]>::len);
        let mut found: Vec<Slice> = Vec::new();
        let mut passes = 0;
        let mut edits = 0;

        loop {
            found.clear();
            found.extend(self.matches(pattern)?);
            if found.is_empty() {
                return Ok(edits);
            }

            if let Some(max) = self.config().max_rewrite_passes {
                if passes >= max {
                    debug!("giving up rewrite after {passes} passes, {} matches left", found.len());
                    return Err(StrBufError::NoProgress { passes });
                }
            }
            passes += 1;

            for (applied, m) in found.iter().enumerate() {
                let target = rebase(m, pattern.len(), new_len, applied);
                match replacement {
                    Some(cs) => self.replace_range(cs, target)?,
                    None => self.remove_range(target)?,
                }
                edits += 1;
            }

            debug!(
                "rewrite pass {passes}: {} edits, length now {}",
                found.len(),
                self.len()
            );
        }
    }
}

/// Moves a match found before this pass's edits to where it sits after
/// `applied` earlier edits, each of which changed the length by
/// `new_len - old_len`.
///
/// Matches never overlap, so match `applied` starts at or past
/// `applied * old_len` and the shrinking case cannot underflow.
fn rebase(m: &Slice, old_len: usize, new_len: usize, applied: usize) -> Slice {
    if new_len >= old_len {
        let offset = (new_len - old_len) * applied;
        Slice::forward(m.low() + offset, m.high() + offset)
    } else {
        let offset = (old_len - new_len) * applied;
        Slice::forward(m.low() - offset, m.high() - offset)
    }
}

fn contains(haystack: &[u8], needle: &[u8]) -> bool {
    haystack.windows(needle.len()).any(|window| window == needle)
}
