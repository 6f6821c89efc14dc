//! Conversions between `'0'`/`'1'` strings and bit vectors.

use crate::error::{Error, Result};

fn to_bits(s: &str) -> Result<Vec<u8>> {
    s.bytes()
        .map(|b| match b {
            b'0' => Ok(0),
            b'1' => Ok(1),
            _ => Err(Error::NonBinaryInput {
                input: s.to_string(),
            }),
        })
        .collect()
}

/// Validates a register seed and returns its bits, first character first.
pub fn parse_seed(seed: &str) -> Result<Vec<u8>> {
    if seed.is_empty() {
        return Err(Error::EmptySeed);
    }
    to_bits(seed)
}

pub fn bits_to_string<I: IntoIterator<Item = u8>>(bits: I) -> String {
    bits.into_iter()
        .map(|b| if b & 1 == 1 { '1' } else { '0' })
        .collect()
}

/// XORs a message with a keystream of the same length.
///
/// Applying the same keystream twice gives the message back.
pub fn xor_bits(message: &str, keystream: &str) -> Result<String> {
    let message_bits = to_bits(message)?;
    let key_bits = to_bits(keystream)?;
    if message_bits.len() != key_bits.len() {
        return Err(Error::LengthMismatch {
            message: message_bits.len(),
            keystream: key_bits.len(),
        });
    }
    Ok(bits_to_string(
        message_bits.iter().zip(&key_bits).map(|(m, k)| m ^ k),
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;

    #[test]
    fn seed_is_read_in_order() {
        assert_eq!(parse_seed("1101").unwrap(), vec![1, 1, 0, 1]);
        assert_eq!(parse_seed("0").unwrap(), vec![0]);
    }

    #[test]
    fn seed_validation() {
        assert_eq!(parse_seed("").unwrap_err(), Error::EmptySeed);
        assert_eq!(
            parse_seed("102").unwrap_err(),
            Error::NonBinaryInput {
                input: "102".to_string()
            }
        );
        assert_eq!(parse_seed("1 0").unwrap_err().kind(), ErrorKind::Validation);
    }

    #[test]
    fn render_masks_to_low_bit() {
        assert_eq!(bits_to_string(vec![1, 0, 0, 1]), "1001");
        assert_eq!(bits_to_string(Vec::<u8>::new()), "");
    }

    #[test]
    fn xor_is_symmetric() {
        let message = "1100101011110000";
        let keystream = "0111111000100000";
        let ct = xor_bits(message, keystream).unwrap();
        assert_eq!(ct, "1011010011010000");
        assert_eq!(xor_bits(&ct, keystream).unwrap(), message);
        assert_eq!(xor_bits("", "").unwrap(), "");
    }

    #[test]
    fn xor_rejects_mismatched_input() {
        assert_eq!(
            xor_bits("101", "10").unwrap_err(),
            Error::LengthMismatch {
                message: 3,
                keystream: 2
            }
        );
        assert_eq!(xor_bits("12", "10").unwrap_err().kind(), ErrorKind::Validation);
    }
}
