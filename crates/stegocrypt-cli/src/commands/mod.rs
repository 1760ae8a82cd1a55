pub mod capacity;
pub mod compare;
pub mod hide;
pub mod keygen;
pub mod unveil;
pub mod unveil_raw;
