use binmorph_image::{ImageError, ImageSize, ImageView};
use binmorph_tensor::Tensor;

use crate::padding::Padding2D;

/// Crop an array to a specified region.
///
/// Channel axes are carried over unchanged.
///
/// # Arguments
///
/// * `src` - The source array to crop.
/// * `x` - The x-coordinate of the top-left corner of the region to crop.
/// * `y` - The y-coordinate of the top-left corner of the region to crop.
/// * `size` - The size of the region to crop.
///
/// # Errors
///
/// Returns [`ImageError::InvalidImageSize`] if the region does not fit inside `src`.
///
/// # Examples
///
/// ```rust
/// use binmorph_image::ImageSize;
/// use binmorph_imgproc::crop::crop_image;
/// use binmorph_tensor::Tensor2;
///
/// let image = Tensor2::<u8>::from_shape_vec([4, 4], vec![
///     0u8, 1, 2, 3,
///     4u8, 5, 6, 7,
///     8u8, 9, 10, 11,
///     12u8, 13, 14, 15
/// ]).unwrap();
///
/// let cropped = crop_image(&image, 1, 1, ImageSize { width: 2, height: 2 }).unwrap();
///
/// assert_eq!(cropped.as_slice(), &[5u8, 6, 9, 10]);
/// ```
pub fn crop_image<T, const N: usize>(
    src: &Tensor<T, N>,
    x: usize,
    y: usize,
    size: ImageSize,
) -> Result<Tensor<T, N>, ImageError>
where
    T: Clone,
{
    let view = ImageView::new(src);
    view.require_spatial()?;

    if x + size.width > view.width() || y + size.height > view.height() {
        return Err(ImageError::InvalidImageSize(
            x + size.width,
            y + size.height,
            view.width(),
            view.height(),
        ));
    }

    let pixel_len = view.channel_stride();
    let src_stride = view.width() * pixel_len;
    let dst_stride = size.width * pixel_len;

    let mut data = Vec::with_capacity(size.height * dst_stride);
    for row in y..y + size.height {
        // get the slice at the top left corner
        let offset = row * src_stride + x * pixel_len;
        data.extend_from_slice(&src.as_slice()[offset..offset + dst_stride]);
    }

    let mut shape = src.shape;
    shape[0] = size.height;
    shape[1] = size.width;

    Ok(Tensor::from_shape_vec(shape, data)?)
}

/// Trim a border from every side of an array.
///
/// Removes `top`/`bottom` rows and `left`/`right` columns as given by
/// `border`. A zero amount leaves that side untouched, so an all-zero border
/// returns a copy of the full array.
///
/// # Errors
///
/// Returns [`ImageError::InvalidCrop`] if the border is larger than the array.
///
/// # Examples
///
/// ```rust
/// use binmorph_imgproc::{crop::crop_border, padding::Padding2D};
/// use binmorph_tensor::Tensor2;
///
/// let image = Tensor2::<u8>::from_shape_fn([3, 4], |[r, c]| (r * 4 + c) as u8);
///
/// let inner = crop_border(&image, Padding2D::symmetric(1, 1)).unwrap();
/// assert_eq!(inner.shape, [1, 2]);
/// assert_eq!(inner.as_slice(), &[5, 6]);
///
/// let same = crop_border(&image, Padding2D::default()).unwrap();
/// assert_eq!(same, image);
/// ```
pub fn crop_border<T, const N: usize>(
    src: &Tensor<T, N>,
    border: Padding2D,
) -> Result<Tensor<T, N>, ImageError>
where
    T: Clone,
{
    let view = ImageView::new(src);
    view.require_spatial()?;

    let trim_width = border.left + border.right;
    let trim_height = border.top + border.bottom;
    if trim_width > view.width() || trim_height > view.height() {
        return Err(ImageError::InvalidCrop {
            trim_width,
            trim_height,
            width: view.width(),
            height: view.height(),
        });
    }

    let size = ImageSize {
        width: view.width() - trim_width,
        height: view.height() - trim_height,
    };

    crop_image(src, border.left, border.top, size)
}

#[cfg(test)]
mod tests {
    use super::*;
    use binmorph_tensor::{Tensor2, Tensor3};

    #[test]
    fn test_crop() -> Result<(), ImageError> {
        #[rustfmt::skip]
        let image = Tensor3::<u8>::from_shape_vec(
            [3, 2, 3],
            vec![
                0u8, 1, 2, 3, 4, 5,
                6u8, 7, 8, 9, 10, 11,
                12u8, 13, 14, 15, 16, 17,
            ],
        )?;

        let cropped = crop_image(
            &image,
            1,
            1,
            ImageSize {
                width: 1,
                height: 2,
            },
        )?;

        assert_eq!(cropped.shape, [2, 1, 3]);
        assert_eq!(cropped.as_slice(), &[9, 10, 11, 15, 16, 17]);

        Ok(())
    }

    #[test]
    fn test_crop_out_of_bounds() -> Result<(), ImageError> {
        let image = Tensor2::<u8>::zeros([2, 2]);
        let res = crop_image(
            &image,
            1,
            0,
            ImageSize {
                width: 2,
                height: 2,
            },
        );
        assert_eq!(res, Err(ImageError::InvalidImageSize(3, 2, 2, 2)));
        Ok(())
    }

    #[test]
    fn test_crop_border_zero_is_noop() -> Result<(), ImageError> {
        let image = Tensor2::<u8>::from_shape_fn([3, 3], |[r, c]| (r * 3 + c) as u8);
        let cropped = crop_border(&image, Padding2D::default())?;
        assert_eq!(cropped, image);
        Ok(())
    }

    #[test]
    fn test_crop_border_one_side() -> Result<(), ImageError> {
        let image = Tensor2::<u8>::from_shape_fn([3, 3], |[r, c]| (r * 3 + c) as u8);
        let border = Padding2D {
            top: 0,
            bottom: 1,
            left: 0,
            right: 2,
        };
        let cropped = crop_border(&image, border)?;
        assert_eq!(cropped.shape, [2, 1]);
        assert_eq!(cropped.as_slice(), &[0, 3]);
        Ok(())
    }

    #[test]
    fn test_crop_border_too_large() {
        let image = Tensor2::<u8>::zeros([2, 4]);
        let res = crop_border(&image, Padding2D::symmetric(1, 2));
        assert_eq!(
            res,
            Err(ImageError::InvalidCrop {
                trim_width: 2,
                trim_height: 4,
                width: 4,
                height: 2,
            })
        );
    }
}
