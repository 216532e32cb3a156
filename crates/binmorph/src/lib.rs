#![doc = include_str!(concat!("../", env!("CARGO_PKG_README")))]

#[doc(inline)]
pub use binmorph_tensor as tensor;

#[doc(inline)]
pub use binmorph_image as image;

#[doc(inline)]
pub use binmorph_imgproc as imgproc;
