//! Scaling styles used when an image is drawn at a size other than its own.
//!
//! A [`ScaleStyle`] is the policy a drawing context stores. At draw time the style is
//! resolved into a [`Resampler`], which names the algorithm of the
//! [fast_image_resize](https://crates.io/crates/fast_image_resize) crate doing the work.
//!
//! # Styles
//!
//! - **BiLinear**: tent kernel, slow, high quality. The default.
//! - **ApproxBiLinear**: fixed-size bilinear kernel, fast, medium quality.
//! - **NearestNeighbor**: very fast, blocky when upscaling.
//! - **CatmullRom**: cubic kernel (B=0, C=0.5), very slow, very high quality.

mod resampler;
mod style;

pub use resampler::{ApproxBiLinear, BiLinear, CatmullRom, NearestNeighbor, Resampler};
pub use style::{resolve_raw, ScaleStyle};
