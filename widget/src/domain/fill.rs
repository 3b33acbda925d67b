//! Colour step function mapping mark counts to polygon fills.
//!
//! Zero must stay visually indistinguishable from "no data yet": the fill is
//! fully transparent, not a lightest band. The band colours form a monotone
//! intensity ramp.

/// Fill colour for counts in `[1, 3)`.
pub const BAND_LOW: &str = "#fff7bc";
/// Fill colour for counts in `[3, 6)`.
pub const BAND_MID: &str = "#fee391";
/// Fill colour for counts in `[6, 10)`.
pub const BAND_HIGH: &str = "#fec44f";
/// Fill colour for counts of 10 and above.
pub const BAND_TOP: &str = "#fe9929";

/// Opacity applied to every non-transparent band.
pub const MARKED_OPACITY: f32 = 0.6;

/// Visual fill state applied to an area polygon.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Fill {
    color: Option<&'static str>,
    opacity: f32,
}

impl Fill {
    /// Fully transparent fill used for unmarked areas.
    pub const TRANSPARENT: Self = Self {
        color: None,
        opacity: 0.0,
    };

    /// Fill for a backend-reported mark count.
    #[must_use]
    pub fn for_count(count: u32) -> Self {
        let color = match count {
            0 => return Self::TRANSPARENT,
            1..=2 => BAND_LOW,
            3..=5 => BAND_MID,
            6..=9 => BAND_HIGH,
            _ => BAND_TOP,
        };
        Self {
            color: Some(color),
            opacity: MARKED_OPACITY,
        }
    }

    /// Band colour, `None` when transparent.
    #[must_use]
    pub fn color(&self) -> Option<&'static str> {
        self.color
    }

    /// Fill opacity; `0.0` exactly when transparent.
    #[must_use]
    pub fn opacity(&self) -> f32 {
        self.opacity
    }

    /// Whether the fill renders nothing at all.
    #[must_use]
    pub fn is_transparent(&self) -> bool {
        self.color.is_none()
    }
}
