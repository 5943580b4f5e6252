use crate::interpolation::{Resampler, ScaleStyle};
use fast_image_resize as fr;
use tela_image::{Image, ImageError};

/// Map a channel count to the matching 8-bit pixel layout of the resize backend.
fn pixel_type<const C: usize>() -> Result<fr::PixelType, ImageError> {
    match C {
        1 => Ok(fr::PixelType::U8),
        2 => Ok(fr::PixelType::U8x2),
        3 => Ok(fr::PixelType::U8x3),
        4 => Ok(fr::PixelType::U8x4),
        _ => Err(ImageError::UnsupportedChannels(C)),
    }
}

fn dim_u32(value: usize) -> Result<u32, ImageError> {
    u32::try_from(value).map_err(|_| ImageError::DimensionOverflow(value))
}

/// Resize an image using the [fast_image_resize](https://crates.io/crates/fast_image_resize) crate.
///
/// The source is resampled to the size of `dst` with the algorithm named by `resampler`.
/// Pixels are taken as they are: images with an alpha channel are expected to be
/// premultiplied already.
///
/// # Arguments
///
/// * `src` - The input image container with 1 to 4 channels.
/// * `dst` - The output image container, already allocated at the target size.
/// * `resampler` - The resampling algorithm to use.
///
/// # Example
///
/// ```
/// use tela_image::{Image, ImageSize};
/// use tela_imgproc::interpolation::ScaleStyle;
/// use tela_imgproc::resize::resize_fast;
///
/// let image = Image::<_, 3>::new(
///    ImageSize {
///       width: 4,
///      height: 5,
/// },
/// vec![0u8; 4 * 5 * 3],
/// )
/// .unwrap();
///
/// let new_size = ImageSize {
///   width: 2,
///   height: 3,
/// };
///
/// let mut image_resized = Image::<_, 3>::from_size_val(new_size, 0).unwrap();
///
/// resize_fast(
///   &image,
///   &mut image_resized,
///   ScaleStyle::NearestNeighbor.resampler(),
/// )
/// .unwrap();
///
/// assert_eq!(image_resized.num_channels(), 3);
/// assert_eq!(image_resized.size().width, 2);
/// assert_eq!(image_resized.size().height, 3);
/// ```
///
/// # Errors
///
/// The function returns an error if the channel count is not supported or the backend
/// fails to resize the image.
pub fn resize_fast<const C: usize>(
    src: &Image<u8, C>,
    dst: &mut Image<u8, C>,
    resampler: &dyn Resampler,
) -> Result<(), ImageError> {
    let pixel_type = pixel_type::<C>()?;

    // nothing to sample from or nothing to write to
    if src.size().is_empty() || dst.size().is_empty() {
        return Ok(());
    }

    let src_image = fr::images::ImageRef::new(
        dim_u32(src.width())?,
        dim_u32(src.height())?,
        src.as_slice(),
        pixel_type,
    )
    .map_err(|e| ImageError::Resize(e.to_string()))?;

    let (dst_width, dst_height) = (dim_u32(dst.width())?, dim_u32(dst.height())?);
    let mut dst_image =
        fr::images::Image::from_slice_u8(dst_width, dst_height, dst.as_slice_mut(), pixel_type)
            .map_err(|e| ImageError::Resize(e.to_string()))?;

    // premultiplied input, so the backend must not touch the alpha channel
    let options = fr::ResizeOptions::new()
        .resize_alg(resampler.resize_alg())
        .use_alpha(false);

    let mut resizer = fr::Resizer::new();
    resizer
        .resize(&src_image, &mut dst_image, Some(&options))
        .map_err(|e| ImageError::Resize(e.to_string()))?;

    Ok(())
}

/// Resize an image with the resampler a [`ScaleStyle`] resolves to.
///
/// # Errors
///
/// Same as [`resize_fast`].
pub fn resize_with_style<const C: usize>(
    src: &Image<u8, C>,
    dst: &mut Image<u8, C>,
    style: ScaleStyle,
) -> Result<(), ImageError> {
    resize_fast(src, dst, style.resampler())
}

#[cfg(test)]
mod tests {
    use crate::interpolation::ScaleStyle;
    use tela_image::{Image, ImageError, ImageSize};

    #[test]
    fn resize_smoke_ch3() -> Result<(), ImageError> {
        let image = Image::<_, 3>::new(
            ImageSize {
                width: 4,
                height: 5,
            },
            vec![0u8; 4 * 5 * 3],
        )?;

        let new_size = ImageSize {
            width: 2,
            height: 3,
        };

        let mut image_resized = Image::<_, 3>::from_size_val(new_size, 0)?;

        super::resize_with_style(&image, &mut image_resized, ScaleStyle::BiLinear)?;

        assert_eq!(image_resized.num_channels(), 3);
        assert_eq!(image_resized.size().width, 2);
        assert_eq!(image_resized.size().height, 3);
        Ok(())
    }

    #[test]
    fn resize_constant_image_all_styles() -> Result<(), ImageError> {
        let image = Image::<u8, 4>::from_size_pixel([8usize, 6].into(), [40, 80, 120, 255])?;

        for style in ScaleStyle::ALL {
            for new_size in [[3usize, 2], [17, 13]] {
                let mut resized = Image::<u8, 4>::from_size_val(new_size.into(), 0)?;
                super::resize_with_style(&image, &mut resized, style)?;
                for (a, b) in resized
                    .as_slice()
                    .iter()
                    .zip([40u8, 80, 120, 255].iter().cycle())
                {
                    assert!(a.abs_diff(*b) <= 1, "style {style}: {a} != {b}");
                }
            }
        }
        Ok(())
    }

    #[test]
    fn resize_nearest_upscale_duplicates() -> Result<(), ImageError> {
        let image = Image::<u8, 1>::new([2usize, 2].into(), vec![10, 20, 30, 40])?;
        let mut resized = Image::<u8, 1>::from_size_val([4usize, 4].into(), 0)?;

        super::resize_with_style(&image, &mut resized, ScaleStyle::NearestNeighbor)?;

        #[rustfmt::skip]
        let expected = vec![
            10, 10, 20, 20,
            10, 10, 20, 20,
            30, 30, 40, 40,
            30, 30, 40, 40,
        ];
        assert_eq!(resized.as_slice(), expected.as_slice());
        Ok(())
    }

    #[test]
    fn resize_unsupported_channels() -> Result<(), ImageError> {
        let image = Image::<u8, 5>::from_size_val([2usize, 2].into(), 0)?;
        let mut resized = Image::<u8, 5>::from_size_val([4usize, 4].into(), 0)?;

        let res = super::resize_with_style(&image, &mut resized, ScaleStyle::BiLinear);
        assert_eq!(res, Err(ImageError::UnsupportedChannels(5)));
        Ok(())
    }

    #[test]
    fn resize_empty_is_noop() -> Result<(), ImageError> {
        let image = Image::<u8, 1>::new([0usize, 0].into(), vec![])?;
        let mut resized = Image::<u8, 1>::from_size_val([2usize, 2].into(), 7)?;

        super::resize_with_style(&image, &mut resized, ScaleStyle::CatmullRom)?;

        assert_eq!(resized.as_slice(), &[7, 7, 7, 7]);
        Ok(())
    }
}
