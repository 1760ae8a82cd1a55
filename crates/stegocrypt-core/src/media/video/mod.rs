mod apng;
pub mod lsb_codec;

pub use lsb_codec::{FrameDelay, Video};
