//! STAD tagged-byte RLE.
//!
//! The header names an `id` byte. Every other byte is a literal. After an
//! `id` byte the next byte selects the action:
//! - `0x00`: end of stream
//! - `id`: one literal `id` byte
//! - `pack`: a `(count, value)` run follows
//! - anything else: invalid stream

use super::DecodeError;

/// Control bytes from a STAD header.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StadControls {
    pub id: u8,
    pub pack: u8,
    pub special: u8,
}

/// Decode a STAD stream from `offset`, requiring exactly `expected` bytes.
///
/// An end marker stops decoding immediately; the length check still
/// applies afterwards.
pub fn decode_stad(
    data: &[u8],
    offset: usize,
    controls: StadControls,
    expected: usize,
) -> Result<Vec<u8>, DecodeError> {
    let mut out = Vec::with_capacity(expected);
    let mut pos = offset;

    while out.len() < expected && pos < data.len() {
        let byte = data[pos];
        pos += 1;

        if byte != controls.id {
            out.push(byte);
            continue;
        }

        let control = *data.get(pos).ok_or(DecodeError::TruncatedRun { offset: pos })?;
        pos += 1;

        if control == 0 {
            break;
        } else if control == controls.id {
            out.push(controls.id);
        } else if control == controls.pack {
            let operands = data
                .get(pos..pos + 2)
                .ok_or(DecodeError::TruncatedRun { offset: pos })?;
            let (count, value) = (operands[0] as usize, operands[1]);
            if out.len() + count > expected {
                return Err(DecodeError::Overflow {
                    offset: pos,
                    produced: out.len(),
                    count,
                    expected,
                });
            }
            out.resize(out.len() + count, value);
            pos += 2;
        } else {
            return Err(DecodeError::UnknownControl {
                offset: pos - 1,
                control,
            });
        }
    }

    if out.len() != expected {
        return Err(DecodeError::LengthMismatch {
            produced: out.len(),
            expected,
        });
    }
    Ok(out)
}
