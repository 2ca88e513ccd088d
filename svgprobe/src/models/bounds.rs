// src/models/bounds.rs
use serde::Serialize;

/// Both axes of the declared viewBox span 1024 units.
const VIEWBOX_EXTENT: f64 = 1024.0;

/// Spread of the flat coordinate sequence, before any x/y split.
#[derive(Debug, Serialize)]
pub struct CoordStats {
    pub count: usize,
    pub min: f64,
    pub max: f64,
}

impl CoordStats {
    /// Returns `None` for an empty sequence.
    #[must_use]
    pub fn from_coords(coords: &[f64]) -> Option<Self> {
        let (min, max) = min_max(coords.iter().copied())?;
        Some(Self {
            count: coords.len(),
            min,
            max,
        })
    }

    #[inline]
    #[must_use]
    pub fn range(&self) -> f64 {
        self.max - self.min
    }
}

/// Axis bounds split by index parity: even positions are x, odd are y.
///
/// An odd-length sequence leaves the x partition one element longer than
/// the y partition; pairing is by position, never validated.
#[derive(Debug, Serialize)]
pub struct CoordBounds {
    pub min_x: f64,
    pub max_x: f64,
    pub min_y: f64,
    pub max_y: f64,
}

impl CoordBounds {
    /// Returns `None` unless both partitions are non-empty, i.e. unless at
    /// least one x/y pair exists.
    #[must_use]
    pub fn from_coords(coords: &[f64]) -> Option<Self> {
        let (min_x, max_x) = min_max(coords.iter().copied().step_by(2))?;
        let (min_y, max_y) = min_max(coords.iter().copied().skip(1).step_by(2))?;
        Some(Self {
            min_x,
            max_x,
            min_y,
            max_y,
        })
    }

    #[inline]
    #[must_use]
    pub fn x_range(&self) -> f64 {
        self.max_x - self.min_x
    }

    #[inline]
    #[must_use]
    pub fn y_range(&self) -> f64 {
        self.max_y - self.min_y
    }
}

/// Bounds after the group transform `translate(0,1024) scale(0.1,-0.1)`.
///
/// The constants mirror the potrace header of the bundled icon; the
/// translate/scale strings extracted from the source are reported verbatim
/// and never parsed back into these numbers.
#[derive(Debug, Serialize)]
pub struct TransformedBounds {
    pub min_x: f64,
    pub max_x: f64,
    pub min_y: f64,
    pub max_y: f64,
}

const SCALE_FACTOR: f64 = 0.1;
const TRANSLATE_Y: f64 = 1024.0;

impl TransformedBounds {
    /// Applies the fixed affine map: a pure scale on x, translate then a
    /// negative scale (vertical flip) on y. With the flip, min maps above
    /// max and the y range comes out negative; that is preserved as-is.
    #[must_use]
    pub fn from_raw(raw: &CoordBounds) -> Self {
        Self {
            min_x: raw.min_x * SCALE_FACTOR,
            max_x: raw.max_x * SCALE_FACTOR,
            min_y: -(raw.min_y + TRANSLATE_Y) * SCALE_FACTOR,
            max_y: -(raw.max_y + TRANSLATE_Y) * SCALE_FACTOR,
        }
    }

    #[inline]
    #[must_use]
    pub fn x_range(&self) -> f64 {
        self.max_x - self.min_x
    }

    #[inline]
    #[must_use]
    pub fn y_range(&self) -> f64 {
        self.max_y - self.min_y
    }

    /// Share of the viewBox width the transformed x extent covers, as a
    /// percentage.
    #[must_use]
    pub fn x_usage(&self) -> f64 {
        self.x_range() / VIEWBOX_EXTENT * 100.0
    }

    /// Share of the viewBox height the transformed y extent covers, as a
    /// percentage.
    #[must_use]
    pub fn y_usage(&self) -> f64 {
        self.y_range() / VIEWBOX_EXTENT * 100.0
    }
}

fn min_max(values: impl Iterator<Item = f64>) -> Option<(f64, f64)> {
    values.fold(None, |acc, v| match acc {
        None => Some((v, v)),
        Some((min, max)) => Some((min.min(v), max.max(v))),
    })
}
