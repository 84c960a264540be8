//! Whole-image transforms producing new buffers.
//!
//! All transforms are pure: inputs are borrowed, outputs freshly allocated
//! (except `scale` by 0, which hands back the source). Output pixels depend
//! only on source pixels, so rows are filled independently; with the
//! `parallel` feature each row is a rayon task. Any pixel error aborts the
//! whole transform.

mod greyscale;
mod region;
mod resample;

pub use greyscale::greyscale;
pub use region::{composite, crop};
pub use resample::{scale, scaled_dimensions};

use crate::error::Result;
use crate::image::{PixelBuffer, Rgb};

/// Apply `f(y, row)` to every row of `out`, stopping at the first error.
fn try_for_each_row<F>(out: &mut PixelBuffer, f: F) -> Result<()>
where
    F: Fn(usize, &mut [Rgb]) -> Result<()> + Send + Sync,
{
    let width = out.width();
    #[cfg(feature = "parallel")]
    {
        use rayon::prelude::*;
        out.pixels_mut()
            .par_chunks_mut(width)
            .enumerate()
            .try_for_each(|(y, row)| f(y, row))
    }
    #[cfg(not(feature = "parallel"))]
    {
        out.pixels_mut()
            .chunks_mut(width)
            .enumerate()
            .try_for_each(|(y, row)| f(y, row))
    }
}

fn for_each_row<F>(out: &mut PixelBuffer, f: F)
where
    F: Fn(usize, &mut [Rgb]) + Send + Sync,
{
    let width = out.width();
    #[cfg(feature = "parallel")]
    {
        use rayon::prelude::*;
        out.pixels_mut()
            .par_chunks_mut(width)
            .enumerate()
            .for_each(|(y, row)| f(y, row));
    }
    #[cfg(not(feature = "parallel"))]
    {
        out.pixels_mut()
            .chunks_mut(width)
            .enumerate()
            .for_each(|(y, row)| f(y, row));
    }
}
