//! Conversion between bytes and the bit sequence that is spread over a carrier.
//!
//! Bits are ordered most significant first within every byte. A framed bitstream
//! starts with a 32 bit big endian header holding the bit length of the segment that
//! follows, so an extractor never needs to know the payload size up front.

use bitstream_io::{BigEndian, BitRead, BitReader, BitWrite, BitWriter};

use crate::error::StegoError;
use crate::result::Result;

/// size of the length header in front of every framed bitstream
pub const HEADER_BITS: usize = 32;

/// expands every byte into 8 bits, msb first
pub fn pack(bytes: &[u8]) -> Vec<bool> {
    let mut reader = BitReader::endian(bytes, BigEndian);

    (0..bytes.len() * 8)
        .map_while(|_| reader.read_bit().ok())
        .collect()
}

/// collects `expected_bytes` bytes from the front of `bits`
pub fn unpack(bits: &[bool], expected_bytes: usize) -> Result<Vec<u8>> {
    let needed = expected_bytes * 8;
    if bits.len() < needed {
        return Err(StegoError::TruncatedBitstream {
            needed,
            available: bits.len(),
        });
    }

    let mut writer = BitWriter::endian(Vec::with_capacity(expected_bytes), BigEndian);
    for bit in &bits[..needed] {
        writer
            .write_bit(*bit)
            .map_err(|e| StegoError::MalformedFrame(e.to_string()))?;
    }

    Ok(writer.into_writer())
}

/// packs `bytes` behind a 32 bit header that declares their bit length
pub fn frame(bytes: &[u8]) -> Result<Vec<bool>> {
    let payload_bits = bytes.len() * 8;
    let header = u32::try_from(payload_bits).map_err(|_| {
        StegoError::MalformedFrame(format!(
            "{payload_bits} payload bits do not fit into the {HEADER_BITS} bit header"
        ))
    })?;

    let mut bits = Vec::with_capacity(HEADER_BITS + payload_bits);
    bits.extend(pack(&header.to_be_bytes()));
    bits.extend(pack(bytes));

    Ok(bits)
}

/// reads the declared payload bit length from the first 32 bits
pub fn decode_header(bits: &[bool]) -> Result<usize> {
    if bits.len() < HEADER_BITS {
        return Err(StegoError::TruncatedBitstream {
            needed: HEADER_BITS,
            available: bits.len(),
        });
    }

    Ok(bits[..HEADER_BITS]
        .iter()
        .fold(0usize, |len, bit| (len << 1) | usize::from(*bit)))
}
