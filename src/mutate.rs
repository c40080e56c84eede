use crate::buffer::{StrBuf, TERMINATOR};
use crate::error::Result;
use crate::slice::{
    validate_element_range, validate_insert_position, validate_output_capacity, Direction, Slice,
};

impl StrBuf {
    /// Returns the byte at `position`.
    ///
    /// # Errors
    ///
    /// Returns `StrBufError::BadIndex` if `position >= len()`.
    pub fn get_char(&self, position: usize) -> Result<u8> {
        validate_element_range(&Slice::single(position), self.length)?;
        Ok(self.chars[position])
    }

    /// Overwrites the byte at `position`. Length and capacity are unchanged.
    ///
    /// # Errors
    ///
    /// Returns `StrBufError::BadIndex` if `position >= len()`.
    pub fn replace_char(&mut self, c: u8, position: usize) -> Result<()> {
        validate_element_range(&Slice::single(position), self.length)?;
        self.chars[position] = c;
        Ok(())
    }

    /// Inserts `c` before the byte at `position`; `position == len()` appends.
    ///
    /// # Errors
    ///
    /// Returns `StrBufError::BadIndex` if `position > len()`, or
    /// `StrBufError::NoMemory` if the storage cannot be grown.
    pub fn insert_char(&mut self, c: u8, position: usize) -> Result<()> {
        self.insert_chars(core::slice::from_ref(&c), position, Direction::Forward)
    }

    /// Removes the byte at `position`, closing the gap.
    ///
    /// # Errors
    ///
    /// Returns `StrBufError::BadIndex` if `position >= len()`.
    pub fn remove_char(&mut self, position: usize) -> Result<()> {
        self.remove_range(Slice::single(position))
    }

    /// Copies the bytes addressed by `slice` into `out`, in the slice's
    /// direction, followed by a terminator.
    ///
    /// Returns the number of bytes copied, terminator excluded.
    ///
    /// # Errors
    ///
    /// Returns `StrBufError::BadIndex` if an endpoint is `>= len()`, or
    /// `StrBufError::BadSize` if `out` is shorter than `slice.len() + 1`.
    pub fn get_range(&self, slice: Slice, out: &mut [u8]) -> Result<usize> {
        validate_element_range(&slice, self.length)?;
        let count = slice.len();
        validate_output_capacity(count, out.len())?;

        let source = &self.chars[slice.low()..=slice.high()];
        match slice.direction() {
            Direction::Forward => out[..count].copy_from_slice(source),
            Direction::Backward => {
                for (dst, src) in out[..count].iter_mut().zip(source.iter().rev()) {
                    *dst = *src;
                }
            }
        }
        out[count] = TERMINATOR;
        Ok(count)
    }

    /// Inserts `cs` before the byte at `position`. With `Direction::Backward`
    /// the bytes land in reverse order. `cs` itself is not modified.
    ///
    /// # Errors
    ///
    /// Returns `StrBufError::BadIndex` if `position > len()`, or
    /// `StrBufError::NoMemory` if the storage cannot be grown. Nothing is
    /// changed on error.
    pub fn insert_chars(&mut self, cs: &[u8], position: usize, direction: Direction) -> Result<()> {
        validate_insert_position(position, self.length)?;
        self.ensure_capacity(cs.len())?;
        self.splice_in(cs, position, direction);
        Ok(())
    }

    /// Removes the bytes addressed by `slice`. Direction is irrelevant here.
    ///
    /// # Errors
    ///
    /// Returns `StrBufError::BadIndex` if an endpoint is `>= len()`.
    pub fn remove_range(&mut self, slice: Slice) -> Result<()> {
        validate_element_range(&slice, self.length)?;
        self.splice_out(slice.low(), slice.len());
        Ok(())
    }

    /// Replaces the bytes addressed by `slice` with `cs`, which may be of any
    /// length. A backward slice receives `cs` in reverse order.
    ///
    /// Validation and growth happen before anything moves, so on error the
    /// content is untouched.
    ///
    /// # Errors
    ///
    /// Returns `StrBufError::BadIndex` if an endpoint is `>= len()`, or
    /// `StrBufError::NoMemory` if the storage cannot be grown.
    pub fn replace_range(&mut self, cs: &[u8], slice: Slice) -> Result<()> {
        validate_element_range(&slice, self.length)?;
        self.ensure_capacity(cs.len().saturating_sub(slice.len()))?;

        self.splice_out(slice.low(), slice.len());
        self.splice_in(cs, slice.low(), slice.direction());
        Ok(())
    }

    /// Opens a gap of `cs.len()` bytes at `position` and fills it.
    ///
    /// Caller has validated `position` and reserved room for `cs`.
    fn splice_in(&mut self, cs: &[u8], position: usize, direction: Direction) {
        let n = cs.len();
        self.chars.copy_within(position..self.length, position + n);

        let gap = &mut self.chars[position..position + n];
        match direction {
            Direction::Forward => gap.copy_from_slice(cs),
            Direction::Backward => {
                for (dst, src) in gap.iter_mut().zip(cs.iter().rev()) {
                    *dst = *src;
                }
            }
        }

        self.length += n;
        self.chars[self.length] = TERMINATOR;
    }

    /// Closes the `count`-byte run starting at `low` and blanks the vacated tail.
    ///
    /// Caller has validated `low..low + count` against the length.
    fn splice_out(&mut self, low: usize, count: usize) {
        self.chars.copy_within(low + count..self.length, low);
        self.chars[self.length - count..self.length].fill(TERMINATOR);
        self.length -= count;
    }
}
