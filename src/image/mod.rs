//! In-memory grayscale grids and the file codec.
//!
//! - [`GrayImage`]: owned 8-bit grid with a PGM `max_value`, the type every
//!   operation consumes and produces.
//! - [`ImageF32`]: owned float grid used for intermediate precision inside
//!   the Canny pipeline.
//! - [`io`]: PGM `P2`/`P5` codec plus PNG/JPEG interop.
pub mod f32;
pub mod io;
pub mod rows;
pub mod traits;
pub mod u8;

pub use self::f32::ImageF32;
pub use self::traits::{ImageView, ImageViewMut, Rows};
pub use self::u8::GrayImage;
