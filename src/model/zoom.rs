//! Zoom percentage newtype with a smart constructor.

use std::fmt;
use thiserror::Error;

/// Zoom level as a percentage of native resolution, always within 1..=100.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ZoomPercent(u8);

/// Rejected zoom value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("Zoom must be between 1 and 100 percent, got {0}")]
pub struct InvalidZoom(pub u32);

impl ZoomPercent {
    /// Smallest zoom, 1%.
    pub const MIN: ZoomPercent = ZoomPercent(1);
    /// Native resolution, 100%.
    pub const MAX: ZoomPercent = ZoomPercent(100);

    /// Smart constructor: validates 1..=100.
    pub fn new(percent: u32) -> Result<Self, InvalidZoom> {
        match u8::try_from(percent) {
            Ok(p) if (Self::MIN.0..=Self::MAX.0).contains(&p) => Ok(Self(p)),
            _ => Err(InvalidZoom(percent)),
        }
    }

    /// Clamp any integer into 1..=100.
    pub fn clamped(percent: i64) -> Self {
        // clamp keeps the value inside u8 range
        Self(percent.clamp(i64::from(Self::MIN.0), i64::from(Self::MAX.0)) as u8)
    }

    /// The percentage as a plain integer.
    pub fn get(self) -> u32 {
        u32::from(self.0)
    }

    /// One percent more, or `None` at 100%.
    pub fn increment(self) -> Option<Self> {
        (self < Self::MAX).then(|| Self(self.0 + 1))
    }

    /// One percent less, or `None` at 1%.
    pub fn decrement(self) -> Option<Self> {
        (self > Self::MIN).then(|| Self(self.0 - 1))
    }
}

impl Default for ZoomPercent {
    fn default() -> Self {
        Self::MAX
    }
}

impl fmt::Display for ZoomPercent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}%", self.0)
    }
}
