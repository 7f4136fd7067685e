use alloc::vec::Vec;

use crate::buffer::ByteBuffer;
use crate::error::{Corruption, Error};
use crate::token::{Token, Tokens};

type Result<T> = core::result::Result<T, Error>;

/// Reconstructs the original bytes from a token stream.
///
/// The stream is self-describing, so no configuration is needed. Decoding is
/// all-or-nothing: on any error the bytes produced so far are dropped.
///
/// # Errors
/// * [`Error::InvalidData`] for an unknown tag, a truncated token, or a
///   reference whose offset is zero or reaches before the start of the output.
/// * [`Error::OutOfMemory`] if the output cannot grow.
pub fn decompress(input: &[u8]) -> Result<Vec<u8>> {
    if input.is_empty() {
        return Ok(Vec::new());
    }

    let mut output = ByteBuffer::new()?;

    for token in Tokens::new(input) {
        match token? {
            Token::Literal(byte) => output.push(byte)?,
            Token::Reference { offset, length } => {
                apply_reference(&mut output, usize::from(offset), usize::from(length))?;
            }
        }
    }

    Ok(output.into_vec())
}

/// Copies `length` bytes starting `offset` bytes back from the end of `output`.
///
/// The copy goes one byte at a time so that a source range overlapping the
/// destination (`offset < length`) repeats the bytes just written.
fn apply_reference(output: &mut ByteBuffer, offset: usize, length: usize) -> Result<()> {
    let available = output.len();
    if offset == 0 || offset > available {
        return Err(Corruption::ReferenceOutOfRange { offset, available }.into());
    }

    let start = available - offset;
    for i in 0..length {
        let byte = output[start + i];
        output.push(byte)?;
    }

    Ok(())
}
