use crate::error::Error;

/// Default maximum look-back distance.
pub const DEFAULT_WINDOW_SIZE: usize = 4096;

/// Default shortest run worth encoding as a reference.
pub const DEFAULT_MIN_MATCH: usize = 3;

/// Default longest run a single reference can carry.
pub const DEFAULT_MAX_MATCH: usize = 258;

/// Largest value the 16-bit offset and length fields can hold.
pub const MAX_FIELD_VALUE: usize = u16::MAX as usize;

/// Compression parameters.
///
/// Only the compressor needs a `Config`; the token stream carries everything
/// the decompressor needs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Config {
    pub window_size: usize,
    pub min_match: usize,
    pub max_match: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self::new()
    }
}

impl Config {
    #[must_use]
    pub const fn new() -> Self {
        Self {
            window_size: DEFAULT_WINDOW_SIZE,
            min_match: DEFAULT_MIN_MATCH,
            max_match: DEFAULT_MAX_MATCH,
        }
    }

    #[must_use]
    pub const fn with_window_size(self, window_size: usize) -> Self {
        Self {
            window_size,
            ..self
        }
    }

    #[must_use]
    pub const fn with_min_match(self, min_match: usize) -> Self {
        Self { min_match, ..self }
    }

    #[must_use]
    pub const fn with_max_match(self, max_match: usize) -> Self {
        Self { max_match, ..self }
    }

    /// Checks that every reference this configuration can produce fits the
    /// token format.
    ///
    /// # Errors
    /// Returns [`Error::InvalidArgument`] if `min_match` is zero, if
    /// `min_match > max_match`, or if `window_size` or `max_match` exceed
    /// the 16-bit token fields.
    pub const fn validate(&self) -> Result<(), Error> {
        if self.min_match == 0 {
            return Err(Error::InvalidArgument("min_match must be at least 1"));
        }
        if self.min_match > self.max_match {
            return Err(Error::InvalidArgument("min_match exceeds max_match"));
        }
        if self.max_match > MAX_FIELD_VALUE {
            return Err(Error::InvalidArgument("max_match exceeds 65535"));
        }
        if self.window_size > MAX_FIELD_VALUE {
            return Err(Error::InvalidArgument("window_size exceeds 65535"));
        }
        Ok(())
    }
}

/// Returns the default configuration (window 4096, matches 3..=258).
#[must_use]
pub const fn configure() -> Config {
    Config::new()
}
