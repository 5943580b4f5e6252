use rayon::{
    iter::{IndexedParallelIterator, ParallelIterator},
    slice::ParallelSliceMut,
};
use tela_image::{Image, ImageSize};

/// Blend one premultiplied pixel over another.
#[inline]
fn blend_over(dst: &mut [u8], src: &[u8]) {
    let inv_alpha = 255 - src[3] as u32;
    if inv_alpha == 0 {
        dst.copy_from_slice(src);
        return;
    }
    for (d, s) in dst.iter_mut().zip(src) {
        let scaled = (*d as u32 * inv_alpha + 127) / 255;
        *d = s.saturating_add(scaled as u8);
    }
}

fn to_i64(value: usize) -> i64 {
    i64::try_from(value).unwrap_or(i64::MAX)
}

/// Window `[x0, x1) x [y0, y1)` of `dst` covered by an image of `size` placed at `(x, y)`.
///
/// Returns `None` when nothing of the image lands on the destination.
pub(crate) fn visible_window(
    dst: ImageSize,
    size: ImageSize,
    x: i64,
    y: i64,
) -> Option<(i64, i64, i64, i64)> {
    let x0 = x.max(0);
    let y0 = y.max(0);
    let x1 = x.saturating_add(to_i64(size.width)).min(to_i64(dst.width));
    let y1 = y.saturating_add(to_i64(size.height)).min(to_i64(dst.height));

    if x0 >= x1 || y0 >= y1 {
        return None;
    }
    Some((x0, y0, x1, y1))
}

/// Composite `src` over `dst` with its top-left corner at `(x, y)`.
///
/// Both images hold premultiplied RGBA. The source is clipped to the destination, so
/// offsets may be negative or push the source partly or fully outside.
///
/// # Arguments
///
/// * `dst` - The image to draw on.
/// * `src` - The image to draw.
/// * `x` - The x-coordinate of the top-left corner of `src` in `dst`.
/// * `y` - The y-coordinate of the top-left corner of `src` in `dst`.
///
/// # Examples
///
/// ```
/// use tela_image::{Image, ImageSize};
/// use tela_draw::composite::composite_over;
///
/// let mut dst = Image::<u8, 4>::from_size_pixel(ImageSize { width: 2, height: 1 }, [0, 0, 255, 255]).unwrap();
/// let src = Image::<u8, 4>::from_size_pixel(ImageSize { width: 1, height: 1 }, [255, 0, 0, 255]).unwrap();
///
/// composite_over(&mut dst, &src, 1, 0);
///
/// assert_eq!(dst.as_slice(), &[0, 0, 255, 255, 255, 0, 0, 255]);
/// ```
pub fn composite_over(dst: &mut Image<u8, 4>, src: &Image<u8, 4>, x: i64, y: i64) {
    let Some((x0, y0, x1, y1)) = visible_window(dst.size(), src.size(), x, y) else {
        return;
    };

    let span = ((x1 - x0) * 4) as usize;
    let dst_cols = dst.cols();
    let src_cols = src.cols();
    let src_col_offset = ((x0 - x) * 4) as usize;

    dst.as_slice_mut()
        .par_chunks_exact_mut(dst_cols * 4)
        .enumerate()
        .skip(y0 as usize)
        .take((y1 - y0) as usize)
        .for_each(|(row, dst_row)| {
            let src_row = (row as i64 - y) as usize;
            let offset = src_row * src_cols * 4 + src_col_offset;
            let src_span = &src.as_slice()[offset..offset + span];
            let dst_start = x0 as usize * 4;
            let dst_span = &mut dst_row[dst_start..dst_start + span];

            dst_span
                .chunks_exact_mut(4)
                .zip(src_span.chunks_exact(4))
                .for_each(|(d, s)| blend_over(d, s));
        });
}
