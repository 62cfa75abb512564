pub mod io;
pub mod mask;
pub mod rgb;
pub mod traits;

pub use self::mask::BinaryMask;
pub use self::rgb::RgbImage;
pub use self::traits::{ImageView, ImageViewMut};
