use std::path::PathBuf;
use thiserror::Error;

pub use stegocrypt_seal::SealError;

#[derive(Error, Debug)]
pub enum StegoError {
    /// Represents any failure of the hybrid cipher: key mismatch, integrity or encryption errors
    #[error(transparent)]
    Cipher(#[from] SealError),

    /// Represents a payload that does not fit into the carrier, raised before any unit is touched
    #[error("Capacity Error: {needed} bits are required but the carrier only offers {capacity} bits")]
    CapacityExceeded { needed: usize, capacity: usize },

    /// Represents a structural violation of the payload frame
    #[error("Malformed payload frame: {0}")]
    MalformedFrame(String),

    /// Represents a carrier or bit sequence that ends before the declared payload does
    #[error("Truncated bitstream: {needed} bits declared but only {available} bits present")]
    TruncatedBitstream { needed: usize, available: usize },

    /// Represents every failure reading or writing the carrier media
    #[error(transparent)]
    CarrierIo(#[from] CarrierIoError),

    /// Represents a comparison between two media that do not have the same shape
    #[error("Media do not match: {0}")]
    MediaMismatch(String),

    #[error("No carrier media set")]
    CarrierNotSet,

    #[error("No target file set")]
    TargetNotSet,

    #[error("API Error: Missing payload")]
    MissingPayload,

    #[error("API Error: Missing key")]
    MissingKey,
}

#[derive(Error, Debug)]
pub enum CarrierIoError {
    /// Represents an unsupported carrier media. For example, an mp4 or a text file
    #[error("Media format is not supported: {0}")]
    UnsupportedMedia(PathBuf),

    /// Represents an invalid carrier audio media. For example, a broken or float WAV file
    #[error("Audio media is invalid: {0}")]
    InvalidAudioMedia(String),

    /// Represents an invalid carrier image media. For example, a broken PNG file
    #[error("Image media is invalid: {0}")]
    InvalidImageMedia(String),

    /// Represents an invalid carrier video media. For example, an APNG with partial frames
    #[error("Video media is invalid: {0}")]
    InvalidVideoMedia(String),

    /// Represents a failure to read from input.
    #[error("Read error")]
    ReadError { source: std::io::Error },

    /// Represents a failure to write target file.
    #[error("Write error")]
    WriteError { source: std::io::Error },

    /// Represents a failure when encoding an audio file.
    #[error("Audio encoding error")]
    AudioEncodingError,

    /// Represents a failure when encoding an image file.
    #[error("Image encoding error")]
    ImageEncodingError,

    /// Represents a failure when encoding a video file.
    #[error("Video encoding error")]
    VideoEncodingError,
}
