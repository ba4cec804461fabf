//! PackBits scanline decoding as used by DEGAS Elite.
//!
//! Control byte `n`:
//! - `0..=127`: copy the next `n + 1` bytes literally
//! - `128..=255`: repeat the next byte `257 - n` times

use super::DecodeError;

/// Decode one scanline of exactly `expected` bytes starting at `offset`.
///
/// Returns the scanline and the number of input bytes consumed.
pub fn decode_scanline(
    data: &[u8],
    offset: usize,
    expected: usize,
) -> Result<(Vec<u8>, usize), DecodeError> {
    let mut out = Vec::with_capacity(expected);
    let mut pos = offset;

    while out.len() < expected && pos < data.len() {
        let control = data[pos];
        pos += 1;

        if control < 128 {
            let count = control as usize + 1;
            let literal = data
                .get(pos..pos + count)
                .ok_or(DecodeError::TruncatedLiteral {
                    offset: pos,
                    needed: count,
                })?;
            check_room(pos, out.len(), count, expected)?;
            out.extend_from_slice(literal);
            pos += count;
        } else {
            let count = 257 - control as usize;
            let value = *data.get(pos).ok_or(DecodeError::TruncatedRun { offset: pos })?;
            check_room(pos, out.len(), count, expected)?;
            out.resize(out.len() + count, value);
            pos += 1;
        }
    }

    if out.len() != expected {
        return Err(DecodeError::LengthMismatch {
            produced: out.len(),
            expected,
        });
    }
    Ok((out, pos - offset))
}

/// Decode `lines` consecutive scanlines of `line_len` bytes each.
///
/// Any failing scanline fails the whole image.
pub fn decode_scanlines(
    data: &[u8],
    offset: usize,
    lines: usize,
    line_len: usize,
) -> Result<Vec<u8>, DecodeError> {
    let mut out = Vec::with_capacity(lines * line_len);
    let mut pos = offset;

    for _ in 0..lines {
        if pos >= data.len() {
            return Err(DecodeError::InputExhausted { offset: pos });
        }
        let (line, consumed) = decode_scanline(data, pos, line_len)?;
        out.extend_from_slice(&line);
        pos += consumed;
    }

    Ok(out)
}

fn check_room(
    offset: usize,
    produced: usize,
    count: usize,
    expected: usize,
) -> Result<(), DecodeError> {
    if produced + count > expected {
        return Err(DecodeError::Overflow {
            offset,
            produced,
            count,
            expected,
        });
    }
    Ok(())
}
