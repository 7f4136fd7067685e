//! # LZ77 Compression
//!
//! `lz77` is a small, safe, pure-Rust LZ77 sliding-window codec. Repeated byte
//! runs are replaced by back-references into a bounded history window; bytes
//! with no long enough earlier occurrence are emitted as literals.
//!
//! The compressed stream has no header. It is a flat sequence of fixed-width
//! tokens, each introduced by a tag byte:
//!
//! ```text
//! literal   := 0x00 <byte>
//! reference := 0x01 <offset: u16 BE> <length: u16 BE>
//! ```
//!
//! ## Example
//!
//! ```rust
//! use lz77::{compress, configure, decompress};
//!
//! let compressed = compress(b"abcabcabc", &configure()).expect("compression failed");
//! // Three literals followed by one reference {offset: 3, length: 6}.
//! assert_eq!(
//!     compressed,
//!     [0x00, b'a', 0x00, b'b', 0x00, b'c', 0x01, 0x00, 0x03, 0x00, 0x06]
//! );
//!
//! let restored = decompress(&compressed).expect("decompression failed");
//! assert_eq!(restored, b"abcabcabc");
//! ```

#![no_std]
#![forbid(unsafe_code)]

extern crate alloc;

pub mod buffer;
pub mod compress;
pub mod config;
pub mod decompress;
pub mod error;
pub mod matcher;
pub mod token;

pub use buffer::ByteBuffer;
pub use compress::compress;
pub use config::{Config, configure};
pub use decompress::decompress;
pub use error::{Corruption, Error};
pub use matcher::{Match, find_match};
pub use token::{Token, Tokens};
