use crate::error::{CanvasError, Result};
use serde::{Deserialize, Serialize};

/// One of the three additive colour channels.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Channel {
    Red,
    Green,
    Blue,
}

impl Channel {
    pub const ALL: [Channel; 3] = [Channel::Red, Channel::Green, Channel::Blue];
}

/// Plain 8-bit RGB triple. Storage as `u8` keeps every channel in `[0, 255]`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const BLACK: Rgb = Rgb::new(0, 0, 0);
    pub const WHITE: Rgb = Rgb::new(255, 255, 255);

    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Build a colour from unchecked integers, rejecting anything outside `[0, 255]`.
    pub fn try_from_ints(r: i64, g: i64, b: i64) -> Result<Self> {
        Ok(Self {
            r: checked_channel(r)?,
            g: checked_channel(g)?,
            b: checked_channel(b)?,
        })
    }

    #[inline]
    pub fn channel(&self, channel: Channel) -> u8 {
        match channel {
            Channel::Red => self.r,
            Channel::Green => self.g,
            Channel::Blue => self.b,
        }
    }

    #[inline]
    pub fn with_channel(mut self, channel: Channel, value: u8) -> Self {
        match channel {
            Channel::Red => self.r = value,
            Channel::Green => self.g = value,
            Channel::Blue => self.b = value,
        }
        self
    }

    /// Unweighted channel mean, truncated toward zero.
    #[inline]
    pub fn mean(&self) -> u8 {
        // max sum is 765, so the quotient always fits in a u8
        ((self.r as u16 + self.g as u16 + self.b as u16) / 3) as u8
    }
}

pub(crate) fn checked_channel(value: i64) -> Result<u8> {
    u8::try_from(value).map_err(|_| CanvasError::InvalidChannelValue { value })
}
