pub mod lsb_codec;
mod wav_iter;

pub use lsb_codec::WavAudio;
