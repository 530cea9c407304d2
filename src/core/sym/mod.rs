pub mod classes;
pub mod cursor;
pub mod decode;
pub mod format;
pub mod symbols;

pub use decode::decode;

/// Addresses in WebTV symbol files are always 32 bit
pub type Address = u32;
