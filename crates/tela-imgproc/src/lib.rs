#![deny(missing_docs)]
#![doc = env!("CARGO_PKG_DESCRIPTION")]

/// image scaling styles and the resamplers they resolve to.
pub mod interpolation;

/// utility functions for resizing images.
pub mod resize;
