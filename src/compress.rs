use alloc::vec::Vec;

use crate::buffer::ByteBuffer;
use crate::config::Config;
use crate::error::Error;
use crate::matcher::find_match;
use crate::token::Token;

type Result<T> = core::result::Result<T, Error>;

/// Compresses `input` into a flat token stream.
///
/// Walks the input left to right. At each position the longest match in the
/// window becomes a reference; otherwise the byte is emitted as a literal.
/// Matching is greedy: a match is never deferred in favour of a longer one
/// starting at the next byte.
///
/// # Errors
/// * [`Error::InvalidArgument`] if `config` fails [`Config::validate`].
/// * [`Error::OutOfMemory`] if the output cannot grow. No partial output is
///   returned.
pub fn compress(input: &[u8], config: &Config) -> Result<Vec<u8>> {
    config.validate()?;

    if input.is_empty() {
        return Ok(Vec::new());
    }

    let mut output = ByteBuffer::new()?;
    let mut pos = 0;

    while pos < input.len() {
        let token = match find_match(input, pos, config) {
            Some(m) => {
                pos += m.length;
                // `validate` bounds both fields by u16::MAX.
                Token::Reference {
                    offset: field(m.offset)?,
                    length: field(m.length)?,
                }
            }
            None => {
                pos += 1;
                Token::Literal(input[pos - 1])
            }
        };
        token.encode(&mut output)?;
    }

    Ok(output.into_vec())
}

#[inline]
fn field(value: usize) -> Result<u16> {
    u16::try_from(value).map_err(|_| Error::InvalidArgument("reference field exceeds 16 bits"))
}
