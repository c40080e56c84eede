use alloc::vec::Vec;
use core::fmt;

use log::trace;

use crate::config::StrBufConfig;
use crate::error::{Result, StrBufError};
use crate::slice::validate_output_capacity;

/// Sentinel stored right after the last active byte.
pub(crate) const TERMINATOR: u8 = 0;

/// A growable, null-terminated byte string.
///
/// `chars` is always exactly `capacity` bytes long and every byte at or past
/// `length` holds the terminator, so `length < capacity` after every call.
pub struct StrBuf {
    pub(crate) chars: Vec<u8>,
    pub(crate) length: usize,
    config: StrBufConfig,
}

impl StrBuf {
    /// Creates an empty string with the default capacity (256).
    ///
    /// # Errors
    ///
    /// Returns `StrBufError::NoMemory` if the storage cannot be allocated.
    pub fn new() -> Result<Self> {
        Self::with_config(StrBufConfig::default())
    }

    /// Creates an empty string with `capacity` bytes of storage, terminator included.
    ///
    /// # Errors
    ///
    /// Returns `StrBufError::InvalidConfiguration` if `capacity` is 0, or
    /// `StrBufError::NoMemory` if the storage cannot be allocated.
    pub fn with_capacity(capacity: usize) -> Result<Self> {
        Self::with_config(StrBufConfig::default().with_initial_capacity(capacity))
    }

    /// Creates an empty string from explicit settings.
    ///
    /// # Errors
    ///
    /// Returns `StrBufError::InvalidConfiguration` if the config fails
    /// [`StrBufConfig::validate`], or `StrBufError::NoMemory` if the storage
    /// cannot be allocated.
    pub fn with_config(config: StrBufConfig) -> Result<Self> {
        config.validate()?;

        let mut chars = Vec::new();
        chars
            .try_reserve_exact(config.initial_capacity)
            .map_err(|_| StrBufError::NoMemory {
                requested: config.initial_capacity,
            })?;
        chars.resize(config.initial_capacity, TERMINATOR);

        Ok(Self {
            chars,
            length: 0,
            config,
        })
    }

    /// Number of active bytes, terminator excluded.
    #[must_use]
    pub fn len(&self) -> usize {
        self.length
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.length == 0
    }

    /// Allocated storage in bytes, terminator included. Always greater than `len()`.
    #[must_use]
    pub fn capacity(&self) -> usize {
        self.chars.len()
    }

    #[must_use]
    pub fn config(&self) -> &StrBufConfig {
        &self.config
    }

    /// The active bytes, without the terminator.
    #[must_use]
    pub fn as_bytes(&self) -> &[u8] {
        &self.chars[..self.length]
    }

    /// Grows the storage so that `additional` more bytes fit along with the terminator.
    ///
    /// On failure the content and capacity are left exactly as they were.
    ///
    /// # Errors
    ///
    /// Returns `StrBufError::NoMemory` if the storage cannot be grown.
    pub fn ensure_capacity(&mut self, additional: usize) -> Result<()> {
        let Some(new_capacity) =
            self.config
                .growth
                .next_capacity(self.length, self.capacity(), additional)
        else {
            return Ok(());
        };

        self.chars
            .try_reserve_exact(new_capacity - self.chars.len())
            .map_err(|_| StrBufError::NoMemory {
                requested: new_capacity,
            })?;
        trace!(
            "growing storage from {} to {} bytes for {} more",
            self.chars.len(),
            new_capacity,
            additional
        );
        self.chars.resize(new_capacity, TERMINATOR);
        Ok(())
    }

    /// Replaces the whole content with `bytes`.
    ///
    /// # Errors
    ///
    /// Returns `StrBufError::NoMemory` if the storage cannot be grown; the
    /// previous content is kept in that case.
    pub fn set(&mut self, bytes: &[u8]) -> Result<()> {
        self.ensure_capacity(bytes.len().saturating_sub(self.length))?;

        let old_length = self.length;
        self.chars[..bytes.len()].copy_from_slice(bytes);
        if old_length > bytes.len() {
            self.chars[bytes.len()..old_length].fill(TERMINATOR);
        }
        self.length = bytes.len();
        self.chars[self.length] = TERMINATOR;
        Ok(())
    }

    /// Copies the content and a terminator into `out`.
    ///
    /// Returns the number of bytes copied, terminator excluded.
    ///
    /// # Errors
    ///
    /// Returns `StrBufError::BadSize` if `out` is shorter than `len() + 1`.
    pub fn get(&self, out: &mut [u8]) -> Result<usize> {
        validate_output_capacity(self.length, out.len())?;

        out[..self.length].copy_from_slice(self.as_bytes());
        out[self.length] = TERMINATOR;
        Ok(self.length)
    }

    /// Drops the content, keeping the capacity.
    pub fn clear(&mut self) {
        self.chars[..self.length].fill(TERMINATOR);
        self.length = 0;
    }
}

impl AsRef<[u8]> for StrBuf {
    fn as_ref(&self) -> &[u8] {
        self.as_bytes()
    }
}

impl fmt::Debug for StrBuf {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "StrBuf {{ length: {:?}, capacity: {:?}, chars: \"{}\" }}",
            self.length,
            self.capacity(),
            self.as_bytes().escape_ascii()
        )
    }
}
