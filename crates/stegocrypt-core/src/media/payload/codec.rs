use byteorder::{BigEndian, ReadBytesExt, WriteBytesExt};
use std::io::{Cursor, Read};

use stegocrypt_seal::EncryptedPayload;

use crate::error::StegoError;
use crate::result::Result;

/// width of every length prefix in the frame
pub const LENGTH_PREFIX_LEN: usize = 4;

/// bytes the frame adds on top of the four fields: one total length and four field lengths
pub const FRAME_OVERHEAD: usize = 5 * LENGTH_PREFIX_LEN;

/// Serializes the four payload fields into a self describing frame:
///
/// `[total len][len][wrapped key][len][nonce][len][tag][len][ciphertext]`
///
/// where all lengths are 32 bit big endian and `total len` counts every byte after itself.
pub fn serialize(payload: &EncryptedPayload) -> Result<Vec<u8>> {
    let fields = [
        &payload.wrapped_key,
        &payload.nonce,
        &payload.tag,
        &payload.ciphertext,
    ];
    let body_len: usize = fields
        .iter()
        .map(|field| LENGTH_PREFIX_LEN + field.len())
        .sum();

    let mut buffer = Vec::with_capacity(LENGTH_PREFIX_LEN + body_len);
    buffer
        .write_u32::<BigEndian>(length_prefix(body_len)?)
        .map_err(frame_io)?;
    for field in fields {
        buffer
            .write_u32::<BigEndian>(length_prefix(field.len())?)
            .map_err(frame_io)?;
        buffer.extend_from_slice(field);
    }

    Ok(buffer)
}

/// Parses a frame produced by [`serialize`], every byte of `frame` has to be accounted for.
pub fn deserialize(frame: &[u8]) -> Result<EncryptedPayload> {
    let mut cursor = Cursor::new(frame);
    let total = read_length(&mut cursor, "total length")?;
    let following = remaining(&cursor);
    if total != following {
        return Err(StegoError::MalformedFrame(format!(
            "total length declares {total} bytes but {following} bytes follow"
        )));
    }

    let payload = EncryptedPayload {
        wrapped_key: read_field(&mut cursor, "wrapped key")?,
        nonce: read_field(&mut cursor, "nonce")?,
        tag: read_field(&mut cursor, "tag")?,
        ciphertext: read_field(&mut cursor, "ciphertext")?,
    };

    let trailing = remaining(&cursor);
    if trailing != 0 {
        return Err(StegoError::MalformedFrame(format!(
            "{trailing} trailing bytes after the ciphertext"
        )));
    }

    Ok(payload)
}

fn length_prefix(len: usize) -> Result<u32> {
    u32::try_from(len).map_err(|_| {
        StegoError::MalformedFrame(format!("{len} bytes do not fit into a 32 bit length prefix"))
    })
}

fn frame_io(e: std::io::Error) -> StegoError {
    StegoError::MalformedFrame(e.to_string())
}

fn remaining(cursor: &Cursor<&[u8]>) -> usize {
    cursor.get_ref().len() - cursor.position() as usize
}

fn read_length(cursor: &mut Cursor<&[u8]>, what: &str) -> Result<usize> {
    cursor
        .read_u32::<BigEndian>()
        .map(|len| len as usize)
        .map_err(|_| StegoError::MalformedFrame(format!("missing {what} prefix")))
}

fn read_field(cursor: &mut Cursor<&[u8]>, what: &str) -> Result<Vec<u8>> {
    let len = read_length(cursor, what)?;
    let available = remaining(cursor);
    if len > available {
        return Err(StegoError::MalformedFrame(format!(
            "{what} declares {len} bytes but only {available} bytes are left"
        )));
    }

    let mut field = vec![0; len];
    cursor.read_exact(&mut field).map_err(frame_io)?;

    Ok(field)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn payload() -> EncryptedPayload {
        EncryptedPayload {
            wrapped_key: vec![0xAA; 256],
            nonce: vec![0x00; 12],
            tag: vec![0xff; 16],
            ciphertext: b"HELLO\0STEGO\0CRYPT\0".to_vec(),
        }
    }

    #[test]
    fn should_write_the_documented_layout() {
        let frame = serialize(&EncryptedPayload {
            wrapped_key: vec![1, 2],
            nonce: vec![3],
            tag: vec![],
            ciphertext: vec![4, 5, 6],
        })
        .unwrap();

        assert_eq!(
            frame,
            vec![
                0, 0, 0, 22, // total
                0, 0, 0, 2, 1, 2, // wrapped key
                0, 0, 0, 1, 3, // nonce
                0, 0, 0, 0, // tag
                0, 0, 0, 3, 4, 5, 6, // ciphertext
            ]
        );
    }

    #[test]
    fn should_round_trip_fields_containing_zero_bytes() {
        let p = payload();
        let frame = serialize(&p).unwrap();

        assert_eq!(frame.len(), FRAME_OVERHEAD + 256 + 12 + 16 + 18);
        assert_eq!(deserialize(&frame).unwrap(), p);
    }

    #[test]
    fn should_round_trip_empty_fields() {
        let p = EncryptedPayload {
            wrapped_key: vec![],
            nonce: vec![],
            tag: vec![],
            ciphertext: vec![],
        };
        let frame = serialize(&p).unwrap();

        assert_eq!(frame.len(), FRAME_OVERHEAD);
        assert_eq!(deserialize(&frame).unwrap(), p);
    }

    #[test]
    fn should_reject_a_field_longer_than_the_buffer() {
        let mut frame = serialize(&payload()).unwrap();
        // bump the wrapped key length beyond the frame
        frame[4..8].copy_from_slice(&10_000u32.to_be_bytes());

        assert!(matches!(
            deserialize(&frame),
            Err(StegoError::MalformedFrame(_))
        ));
    }

    #[test]
    fn should_reject_trailing_bytes() {
        let mut frame = serialize(&payload()).unwrap();
        frame.push(0);

        assert!(matches!(
            deserialize(&frame),
            Err(StegoError::MalformedFrame(_))
        ));
    }

    #[test]
    fn should_reject_bytes_left_inside_the_declared_total() {
        let mut frame = serialize(&payload()).unwrap();
        frame.push(0);
        let total = (frame.len() - LENGTH_PREFIX_LEN) as u32;
        frame[0..4].copy_from_slice(&total.to_be_bytes());

        assert!(matches!(
            deserialize(&frame),
            Err(StegoError::MalformedFrame(_))
        ));
    }

    #[test]
    fn should_reject_truncated_frames() {
        let frame = serialize(&payload()).unwrap();

        for len in [0, 3, 4, 7, frame.len() - 1] {
            assert!(
                matches!(
                    deserialize(&frame[..len]),
                    Err(StegoError::MalformedFrame(_))
                ),
                "a frame cut at {len} bytes was accepted"
            );
        }
    }
}
