#![deny(missing_docs)]
#![doc = env!("CARGO_PKG_DESCRIPTION")]

/// porter-duff compositing of premultiplied RGBA images.
pub mod composite;

/// the drawing context and its scaling style.
pub mod context;

pub use crate::context::Context;
pub use tela_imgproc::interpolation::{Resampler, ScaleStyle};
