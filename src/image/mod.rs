pub mod buffer;
pub mod io;
pub mod rgb;

pub use self::buffer::PixelBuffer;
pub use self::io::{Codec, EncodeFormat, ImageCodec};
pub use self::rgb::{Channel, Rgb};
