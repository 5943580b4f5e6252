use tela_image::{Image, ImageError, ImageSize};
use tela_imgproc::interpolation::{Resampler, ScaleStyle};
use tela_imgproc::resize::resize_fast;

use crate::composite::{composite_over, visible_window};

/// A drawing context over a premultiplied RGBA surface.
///
/// The context keeps the [`ScaleStyle`] used whenever an image is drawn at a size other
/// than its own. The style starts as [`ScaleStyle::BiLinear`] and changes only through
/// the setters.
///
/// # Examples
///
/// ```
/// use tela_draw::{Context, ScaleStyle};
///
/// let mut ctx = Context::new(64, 64).unwrap();
/// assert_eq!(ctx.scale_style(), ScaleStyle::BiLinear);
///
/// ctx.set_scale_nearest_neighbor();
/// assert_eq!(ctx.resampler().name(), "NearestNeighbor");
/// ```
#[derive(Clone, Debug)]
pub struct Context {
    image: Image<u8, 4>,
    scale_style: ScaleStyle,
}

impl Context {
    /// Create a context with a fully transparent surface of the given size.
    ///
    /// # Errors
    ///
    /// If the surface cannot be allocated with the given size, an error is returned.
    pub fn new(width: usize, height: usize) -> Result<Self, ImageError> {
        let image = Image::from_size_val(ImageSize { width, height }, 0)?;
        Ok(Self::from_image(image))
    }

    /// Create a context drawing on an existing premultiplied RGBA image.
    pub fn from_image(image: Image<u8, 4>) -> Self {
        log::debug!("creating drawing context of {}", image.size());
        Self {
            image,
            scale_style: ScaleStyle::default(),
        }
    }

    /// Width of the surface in pixels.
    pub fn width(&self) -> usize {
        self.image.width()
    }

    /// Height of the surface in pixels.
    pub fn height(&self) -> usize {
        self.image.height()
    }

    /// The surface drawn on.
    pub fn image(&self) -> &Image<u8, 4> {
        &self.image
    }

    /// The surface drawn on, mutably.
    pub fn image_mut(&mut self) -> &mut Image<u8, 4> {
        &mut self.image
    }

    /// Consume the context and return its surface.
    pub fn into_image(self) -> Image<u8, 4> {
        self.image
    }

    /// The current scaling style.
    pub fn scale_style(&self) -> ScaleStyle {
        self.scale_style
    }

    /// The resampler the current scaling style resolves to.
    pub fn resampler(&self) -> &'static dyn Resampler {
        self.scale_style.resampler()
    }

    /// Set the scaling style used when drawing images at a different size.
    ///
    /// Raw integer styles are accepted too; unknown values are stored as
    /// [`ScaleStyle::BiLinear`].
    pub fn set_scale_style(&mut self, style: impl Into<ScaleStyle>) {
        let style = style.into();
        log::trace!("scale style {} -> {}", self.scale_style, style);
        self.scale_style = style;
    }

    /// Use the bilinear style.
    pub fn set_scale_bilinear(&mut self) {
        self.set_scale_style(ScaleStyle::BiLinear);
    }

    /// Use the approximate bilinear style.
    pub fn set_scale_approx_bilinear(&mut self) {
        self.set_scale_style(ScaleStyle::ApproxBiLinear);
    }

    /// Use the nearest neighbor style.
    pub fn set_scale_nearest_neighbor(&mut self) {
        self.set_scale_style(ScaleStyle::NearestNeighbor);
    }

    /// Use the Catmull-Rom style.
    pub fn set_scale_catmull_rom(&mut self) {
        self.set_scale_style(ScaleStyle::CatmullRom);
    }

    /// Draw an image at its native size with its top-left corner at `(x, y)`.
    pub fn draw_image(&mut self, src: &Image<u8, 4>, x: i64, y: i64) {
        composite_over(&mut self.image, src, x, y);
    }

    /// Draw an image scaled to `width` x `height` with its top-left corner at `(x, y)`.
    ///
    /// The image is resampled with the current scaling style, then composited over the
    /// surface. Nothing is drawn when the target size is empty or lies fully outside the
    /// surface. A target that is only partly visible is still resampled at full size.
    ///
    /// # Arguments
    ///
    /// * `src` - The premultiplied RGBA image to draw.
    /// * `x` - The x-coordinate of the top-left corner on the surface.
    /// * `y` - The y-coordinate of the top-left corner on the surface.
    /// * `width` - The width of the drawn image.
    /// * `height` - The height of the drawn image.
    ///
    /// # Errors
    ///
    /// If the scaled image cannot be allocated or resampled, an error is returned.
    pub fn draw_image_scaled(
        &mut self,
        src: &Image<u8, 4>,
        x: i64,
        y: i64,
        width: usize,
        height: usize,
    ) -> Result<(), ImageError> {
        let new_size = ImageSize { width, height };
        if new_size.is_empty() || src.size().is_empty() {
            return Ok(());
        }

        if new_size == src.size() {
            self.draw_image(src, x, y);
            return Ok(());
        }

        // fully offscreen, skip resampling altogether
        if visible_window(self.image.size(), new_size, x, y).is_none() {
            return Ok(());
        }

        let resampler = self.resampler();
        log::trace!(
            "drawing {} scaled to {} with {}",
            src.size(),
            new_size,
            resampler.name()
        );

        let mut scaled = Image::from_size_val(new_size, 0)?;
        resize_fast(src, &mut scaled, resampler)?;
        composite_over(&mut self.image, &scaled, x, y);

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::Context;
    use tela_image::{Image, ImageError, ImageSize};
    use tela_imgproc::interpolation::ScaleStyle;

    #[test]
    fn context_smoke() -> Result<(), ImageError> {
        let ctx = Context::new(4, 3)?;
        assert_eq!(ctx.width(), 4);
        assert_eq!(ctx.height(), 3);
        assert!(ctx.image().as_slice().iter().all(|&v| v == 0));
        assert_eq!(ctx.scale_style(), ScaleStyle::BiLinear);
        Ok(())
    }

    #[test]
    fn setters_store_style() -> Result<(), ImageError> {
        let mut ctx = Context::new(1, 1)?;

        ctx.set_scale_approx_bilinear();
        assert_eq!(ctx.scale_style(), ScaleStyle::ApproxBiLinear);

        ctx.set_scale_style(3);
        assert_eq!(ctx.scale_style(), ScaleStyle::CatmullRom);

        ctx.set_scale_style(42);
        assert_eq!(ctx.scale_style(), ScaleStyle::BiLinear);
        Ok(())
    }

    #[test]
    fn draw_image_scaled_nearest() -> Result<(), ImageError> {
        let mut ctx = Context::new(4, 4)?;
        ctx.set_scale_nearest_neighbor();

        #[rustfmt::skip]
        let src = Image::<u8, 4>::new(ImageSize { width: 2, height: 1 }, vec![
            255, 0, 0, 255,  0, 0, 255, 255,
        ])?;

        ctx.draw_image_scaled(&src, 0, 1, 4, 2)?;

        let image = ctx.into_image();
        for y in 0..4 {
            for x in 0..4 {
                let expected: &[u8] = match (x, y) {
                    (_, 0) | (_, 3) => &[0, 0, 0, 0],
                    (0 | 1, _) => &[255, 0, 0, 255],
                    _ => &[0, 0, 255, 255],
                };
                assert_eq!(image.pixel(x, y), Some(expected), "pixel ({x}, {y})");
            }
        }
        Ok(())
    }

    #[test]
    fn draw_image_scaled_empty_target() -> Result<(), ImageError> {
        let mut ctx = Context::new(2, 2)?;
        let src = Image::<u8, 4>::from_size_pixel([1usize, 1].into(), [1, 2, 3, 255])?;

        ctx.draw_image_scaled(&src, 0, 0, 0, 2)?;
        ctx.draw_image_scaled(&src, 0, 0, 2, 0)?;

        assert!(ctx.image().as_slice().iter().all(|&v| v == 0));
        Ok(())
    }

    #[test]
    fn draw_image_extreme_offsets() -> Result<(), ImageError> {
        let mut ctx = Context::new(4, 4)?;
        let src = Image::<u8, 4>::from_size_pixel([2usize, 2].into(), [9, 9, 9, 255])?;

        ctx.draw_image(&src, i64::MAX, 0);
        ctx.draw_image(&src, 0, i64::MIN);
        ctx.draw_image_scaled(&src, i64::MAX, i64::MAX, 8, 8)?;
        ctx.draw_image_scaled(&src, i64::MIN, 0, 8, 8)?;

        assert!(ctx.image().as_slice().iter().all(|&v| v == 0));
        Ok(())
    }

    #[test]
    fn draw_image_scaled_offscreen_huge_target() -> Result<(), ImageError> {
        let mut ctx = Context::new(4, 4)?;
        let src = Image::<u8, 4>::from_size_pixel([2usize, 2].into(), [9, 9, 9, 255])?;

        // nothing visible, so no allocation is attempted
        ctx.draw_image_scaled(&src, 4, 0, usize::MAX / 2, 3)?;
        assert!(ctx.image().as_slice().iter().all(|&v| v == 0));
        Ok(())
    }

    #[test]
    fn draw_image_scaled_overflowing_target() -> Result<(), ImageError> {
        let mut ctx = Context::new(4, 4)?;
        let src = Image::<u8, 4>::from_size_pixel([2usize, 2].into(), [9, 9, 9, 255])?;

        let res = ctx.draw_image_scaled(&src, 0, 0, usize::MAX / 2, 3);
        assert_eq!(res, Err(ImageError::SizeOverflow(usize::MAX / 2, 3, 4)));
        assert!(ctx.image().as_slice().iter().all(|&v| v == 0));
        Ok(())
    }

    #[test]
    fn draw_image_scaled_native_size() -> Result<(), ImageError> {
        let mut ctx = Context::new(2, 2)?;
        ctx.set_scale_catmull_rom();
        let src = Image::<u8, 4>::from_size_pixel([1usize, 1].into(), [1, 2, 3, 255])?;

        ctx.draw_image_scaled(&src, 1, 1, 1, 1)?;

        assert_eq!(ctx.image().pixel(1, 1), Some(&[1u8, 2, 3, 255][..]));
        assert_eq!(ctx.image().pixel(0, 0), Some(&[0u8, 0, 0, 0][..]));
        Ok(())
    }
}
