use fast_image_resize::{FilterType, ResizeAlg};

/// A resampling algorithm provided by the resize backend.
///
/// Implementors are stateless strategy objects; the drawing context only ever holds them
/// as `&'static dyn Resampler`.
pub trait Resampler: Send + Sync + std::fmt::Debug {
    /// Stable name of the algorithm.
    fn name(&self) -> &'static str;

    /// The backend algorithm used to resample pixels.
    fn resize_alg(&self) -> ResizeAlg;
}

impl<'a> PartialEq for dyn Resampler + 'a {
    fn eq(&self, other: &Self) -> bool {
        self.name() == other.name()
    }
}

/// Tent kernel convolution over every covered source pixel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BiLinear;

/// Bilinear interpolation with a fixed-size kernel.
///
/// Cost depends on the destination size only, which makes downscaling large images cheap.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ApproxBiLinear;

/// Nearest neighbor sampling.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NearestNeighbor;

/// Catmull-Rom cubic convolution, the BC-spline with B=0 and C=0.5.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CatmullRom;

impl Resampler for BiLinear {
    fn name(&self) -> &'static str {
        "BiLinear"
    }

    fn resize_alg(&self) -> ResizeAlg {
        ResizeAlg::Convolution(FilterType::Bilinear)
    }
}

impl Resampler for ApproxBiLinear {
    fn name(&self) -> &'static str {
        "ApproxBiLinear"
    }

    fn resize_alg(&self) -> ResizeAlg {
        ResizeAlg::Interpolation(FilterType::Bilinear)
    }
}

impl Resampler for NearestNeighbor {
    fn name(&self) -> &'static str {
        "NearestNeighbor"
    }

    fn resize_alg(&self) -> ResizeAlg {
        ResizeAlg::Nearest
    }
}

impl Resampler for CatmullRom {
    fn name(&self) -> &'static str {
        "CatmullRom"
    }

    fn resize_alg(&self) -> ResizeAlg {
        ResizeAlg::Convolution(FilterType::CatmullRom)
    }
}
