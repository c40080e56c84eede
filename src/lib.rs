#![no_std]

//! `StrBuf`: a growable, null-terminated byte string with explicit error reporting.
//!
//! `StrBuf` owns a contiguous store of bytes, keeps a terminator right after
//! the active content, and grows only when a write needs the room. Every
//! operation reports failure through [`StrBufError`]; nothing is truncated and
//! no allocation failure is silent.
//!
//! Characters are plain bytes. There is no Unicode awareness.
//!
//! # Positions and Slices
//!
//! Single-byte operations take a position in `0..len()`; inserts also accept
//! `len()`, meaning append. Range operations take a [`Slice`]: an inclusive
//! run of positions plus a [`Direction`]. A backward slice addresses the same
//! bytes as a forward one, but reads and writes them in mirrored order.
//!
//! ```
//! # use strbuf::{Direction, Slice, StrBuf};
//! let mut s = StrBuf::new().unwrap();
//! s.set(b"buf").unwrap();
//!
//! let mut out = [0u8; 4];
//! s.get_range(Slice::new(2, 0), &mut out).unwrap();
//! assert_eq!(&out, b"fub\0");
//!
//! s.replace_char(b'd', 2).unwrap();
//! s.insert_char(b'r', 1).unwrap();
//! assert_eq!(s.as_bytes(), b"brud");
//!
//! s.remove_char(1).unwrap();
//! s.insert_chars(b"ria", 0, Direction::Backward).unwrap();
//! assert_eq!(s.as_bytes(), b"airbud");
//! ```
//!
//! # Caller-provided Output
//!
//! Query operations write into storage the caller owns and fail with
//! `BadSize` when it is too small, instead of allocating:
//!
//! ```
//! # use strbuf::{Slice, StrBuf, StrBufError};
//! let mut s = StrBuf::new().unwrap();
//! s.set(b"bufferbuffer").unwrap();
//!
//! let mut matches = [Slice::single(0); 2];
//! assert_eq!(s.find_substring(b"ff", &mut matches).unwrap(), 2);
//! assert_eq!(matches, [Slice::new(2, 3), Slice::new(8, 9)]);
//!
//! let mut too_small = [Slice::single(0); 1];
//! assert_eq!(
//!     s.find_substring(b"ff", &mut too_small),
//!     Err(StrBufError::BadSize { required: 2, provided: 1 })
//! );
//! ```
//!
//! [`StrBuf::matches`] yields the same matches lazily when no fixed output is wanted.
//!
//! # Batch Rewrites
//!
//! `remove_all` and `replace_all` repeat scan-and-edit passes until the
//! pattern no longer occurs, so occurrences formed at the seams of earlier
//! edits are handled too:
//!
//! ```
//! # use strbuf::StrBuf;
//! let mut s = StrBuf::new().unwrap();
//! s.set(b"foobarrrrabbarr").unwrap();
//! s.replace_all(b"barr", b"baz").unwrap();
//! assert_eq!(s.as_bytes(), b"foobazrrabbaz");
//!
//! s.set(b"bufferbuffer").unwrap();
//! s.remove_all(b"ff").unwrap();
//! assert_eq!(s.as_bytes(), b"buerbuer");
//! ```
//!
//! A replacement that contains its own pattern can never converge and is
//! rejected with `NoProgress` before anything changes.
//!
//! ## `no_std` Compatibility
//!
//! The crate needs only `core` and `alloc`. Enable the optional `std` feature
//! to get `std::error::Error` through `thiserror`:
//! ```toml
//! [dependencies]
//! strbuf = { version = "0.1", features = ["std"] }
//! ```
//!
//! Diagnostics go through the `log` facade; install any logger to see them.

extern crate alloc;

mod buffer;
mod config;
mod error;
mod growth;
mod iter;
mod mutate;
mod rewrite;
mod scan;
mod slice;

// Re-export public types and traits
pub use crate::buffer::StrBuf;
pub use crate::config::{StrBufConfig, DEFAULT_CAPACITY};
pub use crate::error::{Result, StrBufError};
pub use crate::growth::GrowthPolicy;
pub use crate::iter::Matches;
pub use crate::slice::{Direction, Slice};
