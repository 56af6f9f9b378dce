//! Image containers used by the line search and its preprocessing.
//!
//! The search core only ever borrows an [`ImageU8`] view; owned buffers live
//! in the preprocessing stage ([`ImageF32`]) or the I/O helpers
//! ([`io::GrayImageU8`]).
pub mod f32;
pub mod io;
pub mod traits;
pub mod u8;

pub use self::f32::ImageF32;
pub use self::traits::{ImageView, ImageViewMut};
pub use self::u8::ImageU8;
