pub mod key;
pub mod meter;
pub mod source;
