use super::resampler::{ApproxBiLinear, BiLinear, CatmullRom, NearestNeighbor, Resampler};

/// Determines the way image pixels are interpolated when an image is drawn scaled.
///
/// The set of styles is closed. Raw integers enter through [`ScaleStyle::from_raw`],
/// which folds every value outside `0..=3` into [`ScaleStyle::BiLinear`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[repr(i32)]
pub enum ScaleStyle {
    /// Tent kernel. Slow, but usually gives high quality results.
    #[default]
    BiLinear = 0,

    /// Mixture of the nearest neighbor and bilinear interpolators. Fast, medium quality.
    ///
    /// Upscaling is bilinear; downscaling blends the 4 nearest source pixels, so the time
    /// taken does not depend on the number of source pixels.
    ApproxBiLinear = 1,

    /// Nearest neighbor. Very fast, very low quality; upscaled images look blocky.
    NearestNeighbor = 2,

    /// Catmull-Rom kernel. Very slow, but usually gives very high quality results.
    ///
    /// An instance of the cubic BC-spline with B=0 and C=0.5.
    CatmullRom = 3,
}

impl ScaleStyle {
    /// All the styles, in order.
    pub const ALL: [ScaleStyle; 4] = [
        ScaleStyle::BiLinear,
        ScaleStyle::ApproxBiLinear,
        ScaleStyle::NearestNeighbor,
        ScaleStyle::CatmullRom,
    ];

    /// Convert a raw style value.
    ///
    /// Unknown values, negative ones included, fall back to [`ScaleStyle::BiLinear`].
    ///
    /// # Examples
    ///
    /// ```
    /// use tela_imgproc::interpolation::ScaleStyle;
    ///
    /// assert_eq!(ScaleStyle::from_raw(3), ScaleStyle::CatmullRom);
    /// assert_eq!(ScaleStyle::from_raw(99), ScaleStyle::BiLinear);
    /// assert_eq!(ScaleStyle::from_raw(-1), ScaleStyle::BiLinear);
    /// ```
    pub const fn from_raw(raw: i32) -> Self {
        match raw {
            1 => ScaleStyle::ApproxBiLinear,
            2 => ScaleStyle::NearestNeighbor,
            3 => ScaleStyle::CatmullRom,
            _ => ScaleStyle::BiLinear,
        }
    }

    /// The raw value of the style.
    pub const fn as_raw(self) -> i32 {
        self as i32
    }

    /// Stable name of the style, shared with the resampler it resolves to.
    pub const fn name(self) -> &'static str {
        match self {
            ScaleStyle::BiLinear => "BiLinear",
            ScaleStyle::ApproxBiLinear => "ApproxBiLinear",
            ScaleStyle::NearestNeighbor => "NearestNeighbor",
            ScaleStyle::CatmullRom => "CatmullRom",
        }
    }

    /// Look up a style by its name, ignoring ASCII case.
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|style| style.name().eq_ignore_ascii_case(name))
    }

    /// Resolve the style into the resampler that implements it.
    ///
    /// # Examples
    ///
    /// ```
    /// use tela_imgproc::interpolation::ScaleStyle;
    ///
    /// let resampler = ScaleStyle::NearestNeighbor.resampler();
    /// assert_eq!(resampler.name(), "NearestNeighbor");
    /// ```
    pub fn resampler(self) -> &'static dyn Resampler {
        match self {
            ScaleStyle::BiLinear => &BiLinear,
            ScaleStyle::ApproxBiLinear => &ApproxBiLinear,
            ScaleStyle::NearestNeighbor => &NearestNeighbor,
            ScaleStyle::CatmullRom => &CatmullRom,
        }
    }
}

impl From<i32> for ScaleStyle {
    fn from(raw: i32) -> Self {
        ScaleStyle::from_raw(raw)
    }
}

impl From<ScaleStyle> for i32 {
    fn from(style: ScaleStyle) -> Self {
        style.as_raw()
    }
}

impl std::fmt::Display for ScaleStyle {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Resolve a raw style value into a resampler, defaulting to bilinear.
pub fn resolve_raw(raw: i32) -> &'static dyn Resampler {
    ScaleStyle::from_raw(raw).resampler()
}
