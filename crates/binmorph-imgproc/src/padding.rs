use binmorph_image::{ImageError, ImageSize, ImageView};
use binmorph_tensor::Tensor;

/// Represents 2D padding with top, bottom, left, and right values (in pixels).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Padding2D {
    /// Amount of padding to add on the top side.
    pub top: usize,
    /// Amount of padding to add on the bottom side.
    pub bottom: usize,
    /// Amount of padding to add on the left side.
    pub left: usize,
    /// Amount of padding to add on the right side.
    pub right: usize,
}

impl Padding2D {
    /// Padding with `pad_width` columns on the left and right and `pad_height`
    /// rows on the top and bottom.
    pub fn symmetric(pad_width: usize, pad_height: usize) -> Self {
        Self {
            top: pad_height,
            bottom: pad_height,
            left: pad_width,
            right: pad_width,
        }
    }

    /// Validates that a new image size correctly matches the expected dimensions
    /// after applying this padding to an existing image.
    ///
    /// # Example
    /// ```rust
    /// use binmorph_image::ImageSize;
    /// use binmorph_imgproc::padding::Padding2D;
    ///
    /// let padding = Padding2D { top: 1, bottom: 1, left: 2, right: 2 };
    /// let old_size = ImageSize { width: 4, height: 4 };
    /// let new_size = ImageSize { width: 8, height: 6 };
    ///
    /// assert!(padding.validate_size(old_size, new_size));
    /// ```
    pub fn validate_size(&self, old_size: ImageSize, new_size: ImageSize) -> bool {
        new_size.width == old_size.width + self.left + self.right
            && new_size.height == old_size.height + self.top + self.bottom
    }
}

/// Creates a new array with spatial padding applied, centering the original
/// samples and filling the border with `constant_value`.
///
/// Only the height (first) and width (second) axes are padded; any trailing
/// channel axes keep their size. The source is left untouched.
///
/// # Arguments
///
/// * `src` - The source array to pad.
/// * `padding` - The amount of padding (in pixels) for all four sides.
/// * `constant_value` - The sample value written to every border cell.
///
/// # Errors
///
/// Returns [`ImageError::NotSpatial`] if `src` has fewer than two axes.
///
/// # Example
///
/// ```rust
/// use binmorph_imgproc::padding::{spatial_padding, Padding2D};
/// use binmorph_tensor::Tensor3;
///
/// // 2x2 RGB image filled with 1s
/// let src = Tensor3::<u8>::from_shape_val([2, 2, 3], 1);
///
/// let dst = spatial_padding(&src, Padding2D::symmetric(1, 1), 9).unwrap();
///
/// assert_eq!(dst.shape, [4, 4, 3]);
/// assert_eq!(dst.get([0, 0, 0]), Some(&9));
/// assert_eq!(dst.get([1, 1, 2]), Some(&1));
/// ```
pub fn spatial_padding<T, const N: usize>(
    src: &Tensor<T, N>,
    padding: Padding2D,
    constant_value: T,
) -> Result<Tensor<T, N>, ImageError>
where
    T: Clone,
{
    let view = ImageView::new(src);
    view.require_spatial()?;

    let old_width = view.width();
    let old_height = view.height();
    let pixel_len = view.channel_stride();

    let mut shape = src.shape;
    shape[0] = old_height + padding.top + padding.bottom;
    shape[1] = old_width + padding.left + padding.right;
    let mut dst = Tensor::from_shape_val(shape, constant_value);

    let new_stride = shape[1] * pixel_len;
    let old_stride = old_width * pixel_len;
    if old_stride == 0 {
        return Ok(dst);
    }

    // copy old image data as center of new image data
    let new_data = dst.as_slice_mut();
    for (y, src_row) in src.as_slice().chunks_exact(old_stride).enumerate() {
        let start = (padding.top + y) * new_stride + padding.left * pixel_len;
        new_data[start..start + old_stride].clone_from_slice(src_row);
    }

    Ok(dst)
}

/// Surrounds an array with a border of zero-valued samples.
///
/// The result has `pad_height` extra rows on the top and bottom and
/// `pad_width` extra columns on the left and right. Zero padding amounts
/// produce a plain copy.
///
/// # Example
///
/// ```rust
/// use binmorph_imgproc::padding::add_zero_padding;
/// use binmorph_tensor::Tensor2;
///
/// let src = Tensor2::<u8>::from_shape_val([1, 1], 7);
/// let dst = add_zero_padding(&src, 1, 0).unwrap();
///
/// assert_eq!(dst.shape, [1, 3]);
/// assert_eq!(dst.as_slice(), &[0, 7, 0]);
/// ```
pub fn add_zero_padding<T, const N: usize>(
    src: &Tensor<T, N>,
    pad_width: usize,
    pad_height: usize,
) -> Result<Tensor<T, N>, ImageError>
where
    T: Clone + num_traits::Zero,
{
    spatial_padding(src, Padding2D::symmetric(pad_width, pad_height), T::zero())
}

#[cfg(test)]
mod tests {
    use super::*;
    use binmorph_tensor::{Tensor1, Tensor2, Tensor3};

    fn make_src_2x2_rgb() -> Result<Tensor3<u8>, ImageError> {
        Ok(Tensor3::from_shape_vec(
            [2, 2, 3],
            vec![1, 1, 1, 2, 2, 2, 3, 3, 3, 4, 4, 4],
        )?)
    }

    const PAD_1: Padding2D = Padding2D {
        top: 1,
        bottom: 1,
        left: 1,
        right: 1,
    };

    #[test]
    fn test_spatial_padding_constant() -> Result<(), ImageError> {
        let src = make_src_2x2_rgb()?;
        let dst = spatial_padding(&src, PAD_1, 9)?;
        assert_eq!(dst.shape, [4, 4, 3]);

        let d = dst.as_slice();

        // corners
        assert_eq!(&d[0..3], &[9, 9, 9]);
        assert_eq!(&d[45..48], &[9, 9, 9]);

        // top edge
        assert_eq!(&d[3..6], &[9, 9, 9]);

        // actual image
        assert_eq!(&d[15..18], &[1, 1, 1]);
        assert_eq!(&d[30..33], &[4, 4, 4]);

        Ok(())
    }

    #[test]
    fn test_spatial_padding_asymmetric() -> Result<(), ImageError> {
        let src = Tensor2::<u8>::from_shape_vec([2, 2], vec![1, 2, 3, 4])?;
        let padding = Padding2D {
            top: 1,
            bottom: 0,
            left: 2,
            right: 0,
        };
        let dst = spatial_padding(&src, padding, 0)?;

        assert!(padding.validate_size(
            ImageView::new(&src).size(),
            ImageView::new(&dst).size()
        ));

        #[rustfmt::skip]
        let expected = [
            0u8, 0, 0, 0,
            0, 0, 1, 2,
            0, 0, 3, 4,
        ];
        assert_eq!(dst.as_slice(), &expected);

        Ok(())
    }

    #[test]
    fn test_add_zero_padding() -> Result<(), ImageError> {
        let src = Tensor2::<f32>::from_shape_val([2, 3], 5.0);
        let dst = add_zero_padding(&src, 1, 2)?;

        assert_eq!(dst.shape, [6, 5]);
        let on = dst.as_slice().iter().filter(|&&v| v == 5.0).count();
        assert_eq!(on, 6);
        assert_eq!(dst.get([2, 1]), Some(&5.0));
        assert_eq!(dst.get([1, 1]), Some(&0.0));
        assert_eq!(dst.get([2, 4]), Some(&0.0));

        // the source is left untouched
        assert_eq!(src.as_slice(), &[5.0; 6]);

        Ok(())
    }

    #[test]
    fn test_add_zero_padding_noop() -> Result<(), ImageError> {
        let src = make_src_2x2_rgb()?;
        let dst = add_zero_padding(&src, 0, 0)?;
        assert_eq!(dst, src);
        Ok(())
    }

    #[test]
    fn test_padding_rejects_1d() -> Result<(), ImageError> {
        let src = Tensor1::<u8>::from_shape_vec([3], vec![1, 2, 3])?;
        assert_eq!(
            add_zero_padding(&src, 1, 1),
            Err(ImageError::NotSpatial(1))
        );
        Ok(())
    }

    #[test]
    fn test_validate_size_mismatch() {
        let old_size = ImageSize {
            width: 2,
            height: 2,
        };
        let new_size = ImageSize {
            width: 3,
            height: 4,
        };
        assert!(!PAD_1.validate_size(old_size, new_size));
    }
}
