#![doc = env!("CARGO_PKG_DESCRIPTION")]

#[doc(inline)]
pub use tela_image as image;

#[doc(inline)]
pub use tela_imgproc as imgproc;

#[doc(inline)]
pub use tela_draw as draw;
