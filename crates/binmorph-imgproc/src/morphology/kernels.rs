use binmorph_tensor::Tensor2;

/// Shapes of morphological kernels.
///
/// Defines the geometry of the structuring element. All kernels are centered
/// at their geometric center.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KernelShape {
    /// A rectangular box structuring element.
    ///
    /// All pixels within the box are included in the morphological operation.
    Box {
        /// `size` - The side length of the square kernel (size x size).
        size: usize,
    },

    /// A cross (plus) shaped structuring element.
    ///
    /// Only pixels along the horizontal and vertical center lines are included.
    Cross {
        /// `size` - The side length of the square cross kernel (size x size).
        size: usize,
    },

    /// An ellipse (or circle) shaped structuring element.
    ///
    /// Pixels inside the elliptical boundary are included, defined by the
    /// equation: (x^2 / rx^2) + (y^2 / ry^2) <= 1.
    Ellipse {
        /// `width` - The width of the ellipse.
        width: usize,
        /// `height` - The height of the ellipse.
        height: usize,
    },
}

/// Create a structuring element from a shape.
///
/// The result is a `height x width` array of 0s and 1s, where 1 marks the
/// offsets taking part in the reduction.
///
/// # Example
///
/// ```rust
/// use binmorph_imgproc::morphology::{kernel_from_shape, KernelShape};
///
/// let kernel = kernel_from_shape(KernelShape::Cross { size: 3 });
/// assert_eq!(kernel.shape, [3, 3]);
/// assert_eq!(kernel.as_slice(), &[0, 1, 0, 1, 1, 1, 0, 1, 0]);
/// ```
pub fn kernel_from_shape(shape: KernelShape) -> Tensor2<u8> {
    match shape {
        KernelShape::Box { size } => Tensor2::from_shape_val([size, size], 1),
        KernelShape::Cross { size } => {
            let mid = size / 2;
            Tensor2::from_shape_fn([size, size], |[r, c]| u8::from(r == mid || c == mid))
        }
        KernelShape::Ellipse { width, height } => {
            let cx = (width as f32 - 1.0) / 2.0;
            let cy = (height as f32 - 1.0) / 2.0;
            let rx = width as f32 / 2.0;
            let ry = height as f32 / 2.0;
            Tensor2::from_shape_fn([height, width], |[r, c]| {
                let x = c as f32 - cx;
                let y = r as f32 - cy;
                u8::from((x * x) / (rx * rx) + (y * y) / (ry * ry) <= 1.0)
            })
        }
    }
}
