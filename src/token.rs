use crate::buffer::ByteBuffer;
use crate::error::{Corruption, Error};

type Result<T> = core::result::Result<T, Error>;

// --- Constants ---

/// Tag byte introducing a literal.
pub const TAG_LITERAL: u8 = 0x00;

/// Tag byte introducing a back-reference.
pub const TAG_REFERENCE: u8 = 0x01;

/// Encoded size of a literal: tag + byte.
pub const LITERAL_LEN: usize = 2;

/// Encoded size of a reference: tag + u16 offset + u16 length.
pub const REFERENCE_LEN: usize = 5;

/// One unit of the compressed stream.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Token {
    Literal(u8),
    Reference { offset: u16, length: u16 },
}

impl Token {
    /// Number of bytes this token occupies once encoded.
    #[must_use]
    pub const fn encoded_len(&self) -> usize {
        match self {
            Self::Literal(_) => LITERAL_LEN,
            Self::Reference { .. } => REFERENCE_LEN,
        }
    }

    /// Writes the token to `output`.
    ///
    /// # Errors
    /// Returns [`Error::OutOfMemory`] if the buffer cannot grow.
    pub fn encode(&self, output: &mut ByteBuffer) -> Result<()> {
        match *self {
            Self::Literal(byte) => {
                output.push(TAG_LITERAL)?;
                output.push(byte)
            }
            Self::Reference { offset, length } => {
                let [off_hi, off_lo] = offset.to_be_bytes();
                let [len_hi, len_lo] = length.to_be_bytes();
                output.append(&[TAG_REFERENCE, off_hi, off_lo, len_hi, len_lo])
            }
        }
    }

    /// Reads one token from the front of `input`.
    ///
    /// Returns the token and the number of bytes it occupied.
    ///
    /// # Errors
    /// Returns [`Error::InvalidData`] on an unknown tag or a payload cut short
    /// by the end of `input`.
    pub fn decode(input: &[u8]) -> Result<(Self, usize)> {
        let Some((&tag, payload)) = input.split_first() else {
            // Callers never decode from an empty slice; treat it as a cut literal.
            return Err(Corruption::TruncatedLiteral.into());
        };

        match tag {
            TAG_LITERAL => match payload.first() {
                Some(&byte) => Ok((Self::Literal(byte), LITERAL_LEN)),
                None => Err(Corruption::TruncatedLiteral.into()),
            },
            TAG_REFERENCE => match payload {
                [off_hi, off_lo, len_hi, len_lo, ..] => Ok((
                    Self::Reference {
                        offset: u16::from_be_bytes([*off_hi, *off_lo]),
                        length: u16::from_be_bytes([*len_hi, *len_lo]),
                    },
                    REFERENCE_LEN,
                )),
                _ => Err(Corruption::TruncatedReference.into()),
            },
            other => Err(Corruption::UnknownTag(other).into()),
        }
    }
}

/// Iterator over the tokens of an encoded stream.
///
/// Yields `Err` at most once; the stream is abandoned after the first
/// malformed token.
#[derive(Debug, Clone)]
pub struct Tokens<'a> {
    input: &'a [u8],
    failed: bool,
}

impl<'a> Tokens<'a> {
    #[must_use]
    pub const fn new(input: &'a [u8]) -> Self {
        Self {
            input,
            failed: false,
        }
    }

    /// The bytes not yet consumed.
    #[must_use]
    pub const fn remaining(&self) -> &'a [u8] {
        self.input
    }
}

impl Iterator for Tokens<'_> {
    type Item = Result<Token>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.failed || self.input.is_empty() {
            return None;
        }

        match Token::decode(self.input) {
            Ok((token, used)) => {
                self.input = &self.input[used..];
                Some(Ok(token))
            }
            Err(e) => {
                self.failed = true;
                Some(Err(e))
            }
        }
    }
}

impl core::iter::FusedIterator for Tokens<'_> {}

#[cfg(test)]
mod tests {
    use alloc::vec::Vec;

    use super::*;

    fn encode_all(tokens: &[Token]) -> Vec<u8> {
        let mut buf = ByteBuffer::new().unwrap();
        for token in tokens {
            token.encode(&mut buf).unwrap();
        }
        buf.into_vec()
    }

    #[test]
    fn literal_layout() {
        assert_eq!(encode_all(&[Token::Literal(b'x')]), [0x00, b'x']);
    }

    #[test]
    fn reference_layout_is_big_endian() {
        let bytes = encode_all(&[Token::Reference {
            offset: 0x0102,
            length: 0x0304,
        }]);
        assert_eq!(bytes, [0x01, 0x01, 0x02, 0x03, 0x04]);
    }

    #[test]
    fn decode_reports_consumed_length() {
        let (token, used) = Token::decode(&[0x01, 0x00, 0x03, 0x00, 0x06, 0xFF]).unwrap();
        assert_eq!(token, Token::Reference { offset: 3, length: 6 });
        assert_eq!(used, token.encoded_len());

        let (token, used) = Token::decode(&[0x00, b'q']).unwrap();
        assert_eq!(token, Token::Literal(b'q'));
        assert_eq!(used, 2);
    }

    #[test]
    fn decode_rejects_bad_tags_and_truncation() {
        assert_eq!(
            Token::decode(&[0x02, 0x00]),
            Err(Error::InvalidData(Corruption::UnknownTag(0x02)))
        );
        assert_eq!(
            Token::decode(&[0x00]),
            Err(Error::InvalidData(Corruption::TruncatedLiteral))
        );
        assert_eq!(
            Token::decode(&[0x01, 0x00, 0x01, 0x00]),
            Err(Error::InvalidData(Corruption::TruncatedReference))
        );
    }

    #[test]
    fn iterator_stops_after_error() {
        let mut stream = encode_all(&[Token::Literal(b'a'), Token::Literal(b'b')]);
        stream.push(0x7F);
        stream.extend_from_slice(&[0x00, b'c']);

        let mut tokens = Tokens::new(&stream);
        assert_eq!(tokens.next(), Some(Ok(Token::Literal(b'a'))));
        assert_eq!(tokens.next(), Some(Ok(Token::Literal(b'b'))));
        assert_eq!(
            tokens.next(),
            Some(Err(Error::InvalidData(Corruption::UnknownTag(0x7F))))
        );
        assert_eq!(tokens.next(), None);
    }

    #[test]
    fn iterator_tracks_remaining_input() {
        let stream = [0x00, b'a', 0x01, 0x00, 0x01, 0x00, 0x04];
        let mut tokens = Tokens::new(&stream);
        tokens.next();
        assert_eq!(tokens.remaining(), &stream[2..]);
        tokens.next();
        assert!(tokens.remaining().is_empty());
        assert_eq!(tokens.next(), None);
    }
}
