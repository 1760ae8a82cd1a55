//! One generic LSB algorithm for every carrier.
//!
//! Embedding writes a framed bitstream (32 bit length header plus payload) into the
//! least significant bit of the carrier units, extraction reads the header first and
//! then exactly as many bits as it declares.

use log::{debug, info};
use stegocrypt_seal::{EncryptedPayload, NONCE_LEN, TAG_LEN};

use crate::bitstream::{self, HEADER_BITS};
use crate::error::StegoError;
use crate::media::payload::{self, FRAME_OVERHEAD};
use crate::media::Carrier;
use crate::result::Result;
use crate::universal_decoder::{Decoder, OneBitUnveil};
use crate::universal_encoder::{Encoder, OneBitHide};

/// Writes `bits` one per unit in scan order. Nothing is touched when they do not fit.
pub fn embed<C: Carrier + ?Sized>(carrier: &mut C, bits: &[bool]) -> Result<()> {
    let capacity = carrier.capacity_bits();
    debug!("embedding {} bits into a carrier of {capacity} bits", bits.len());
    if bits.len() > capacity {
        return Err(StegoError::CapacityExceeded {
            needed: bits.len(),
            capacity,
        });
    }

    let written = Encoder::new(carrier.units_mut(), OneBitHide).write_bits(bits);
    debug_assert_eq!(written, bits.len());
    info!("embedded {written} bits");

    Ok(())
}

/// Reads the header and returns the payload bits it announces, without the header.
pub fn extract_bits<C: Carrier + ?Sized>(carrier: &C) -> Result<Vec<bool>> {
    let capacity = carrier.capacity_bits();
    let mut bits = Decoder::new(carrier.units(), OneBitUnveil);

    let header: Vec<bool> = bits.by_ref().take(HEADER_BITS).collect();
    let declared = bitstream::decode_header(&header)?;
    let needed = HEADER_BITS.saturating_add(declared);
    debug!("header declares {declared} payload bits, carrier offers {capacity} bits");
    if needed > capacity {
        return Err(StegoError::TruncatedBitstream {
            needed,
            available: capacity,
        });
    }

    Ok(bits.take(declared).collect())
}

/// Reads the serialized payload frame, the declared bit length has to cover whole bytes.
pub fn extract_frame<C: Carrier + ?Sized>(carrier: &C) -> Result<Vec<u8>> {
    let bits = extract_bits(carrier)?;
    if bits.len() % 8 != 0 {
        return Err(StegoError::MalformedFrame(format!(
            "declared length of {} bits is not a whole number of bytes",
            bits.len()
        )));
    }

    let frame = bitstream::unpack(&bits, bits.len() / 8)?;
    info!("extracted a frame of {} bytes", frame.len());

    Ok(frame)
}

/// Serializes and frames `payload`, then embeds it.
pub fn hide<C: Carrier + ?Sized>(carrier: &mut C, payload: &EncryptedPayload) -> Result<()> {
    let frame = payload::serialize(payload)?;
    let bits = bitstream::frame(&frame)?;

    embed(carrier, &bits)
}

/// Inverse of [`hide`].
pub fn extract<C: Carrier + ?Sized>(carrier: &C) -> Result<EncryptedPayload> {
    payload::deserialize(&extract_frame(carrier)?)
}

/// Largest plaintext in bytes that fits into `capacity_bits` once it is sealed for a key
/// whose wrapped symmetric key has `wrapped_key_len` bytes. `None` if not even an empty
/// plaintext fits.
pub fn max_plaintext_len(capacity_bits: usize, wrapped_key_len: usize) -> Option<usize> {
    let frame_bytes = capacity_bits.checked_sub(HEADER_BITS)? / 8;

    frame_bytes.checked_sub(FRAME_OVERHEAD + wrapped_key_len + NONCE_LEN + TAG_LEN)
}
