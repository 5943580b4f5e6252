#![deny(missing_docs)]
#![doc = env!("CARGO_PKG_DESCRIPTION")]

/// Error types for the image module.
pub mod error;

/// raster image representation.
pub mod image;

pub use crate::error::ImageError;
pub use crate::image::{Image, ImageSize};
