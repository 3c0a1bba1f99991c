pub mod common;
pub mod normalize;
pub mod patterns;
pub mod reconstruct;
pub mod redundancy;
pub mod sax;
