use serde::{Deserialize, Serialize};

/// Axis dimension a tick position or mark coordinate is measured along.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Dimension {
    /// `x` / `cx`, read from the first `translate` argument.
    Horizontal,
    /// `y` / `cy`, read from the second `translate` argument.
    Vertical,
}

impl Dimension {
    /// Attribute carrying a rectangle's anchor along this dimension.
    #[must_use]
    pub fn rect_anchor_attribute(self) -> &'static str {
        match self {
            Self::Horizontal => "x",
            Self::Vertical => "y",
        }
    }

    /// Attribute carrying a rectangle's extent along this dimension.
    #[must_use]
    pub fn rect_extent_attribute(self) -> &'static str {
        match self {
            Self::Horizontal => "width",
            Self::Vertical => "height",
        }
    }

    /// Attribute carrying a circle's center along this dimension.
    #[must_use]
    pub fn circle_center_attribute(self) -> &'static str {
        match self {
            Self::Horizontal => "cx",
            Self::Vertical => "cy",
        }
    }
}

/// Encoding used to turn a label or data attribute into a comparable number.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ValueKind {
    /// Base-10 integer such as a year.
    Integer,
    /// `MM:SS` clock string, decoded to fractional minutes.
    ClockMinutes,
    /// Calendar month name, decoded to a 0-based month index.
    MonthName,
    /// Integer with `,` grouping separators (`1,250`).
    ThousandsFormattedInteger,
}

/// Point on a mark compared against the axis.
///
/// Circles only expose a center, so `TopLeft` on a circle resolves to the
/// same coordinate as `Center`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ReferencePoint {
    Center,
    TopLeft,
}

/// Direction of decoded tick values in DOM order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TickOrder {
    Ascending,
    Descending,
}

impl TickOrder {
    /// Derives the order from the first two decoded values.
    ///
    /// Equal or missing values are treated as ascending.
    #[must_use]
    pub fn from_values(values: &[f64]) -> Self {
        match values {
            [first, second, ..] if second < first => Self::Descending,
            _ => Self::Ascending,
        }
    }

    #[must_use]
    pub fn is_ascending(self) -> bool {
        self == Self::Ascending
    }
}

/// What to do with a mark that cannot be placed against the axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum UnplaceablePolicy {
    /// Exclude the mark from the verdict.
    #[default]
    Skip,
    /// Count the mark as misaligned.
    Fail,
}

/// One rendered axis graduation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Tick {
    pub pixel_position: f64,
    /// `None` when the label could not be decoded for the axis value kind.
    pub decoded_value: Option<f64>,
    pub raw_label: String,
}

impl Tick {
    #[must_use]
    pub fn new(
        pixel_position: f64,
        decoded_value: Option<f64>,
        raw_label: impl Into<String>,
    ) -> Self {
        Self {
            pixel_position,
            decoded_value,
            raw_label: raw_label.into(),
        }
    }
}

/// Ticks of one axis, in DOM order, with the metadata used to decode them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Axis {
    pub dimension: Dimension,
    pub value_kind: ValueKind,
    pub ticks: Vec<Tick>,
}

impl Axis {
    #[must_use]
    pub fn new(dimension: Dimension, value_kind: ValueKind, ticks: Vec<Tick>) -> Self {
        Self {
            dimension,
            value_kind,
            ticks,
        }
    }

    /// Ticks whose label decoded, as `(decoded_value, pixel_position)` pairs.
    #[must_use]
    pub fn usable_ticks(&self) -> Vec<(f64, f64)> {
        usable_ticks(&self.ticks)
    }

    #[must_use]
    pub fn tick_order(&self) -> TickOrder {
        let values: Vec<f64> = self.usable_ticks().iter().map(|(value, _)| *value).collect();
        TickOrder::from_values(&values)
    }
}

/// `(decoded_value, pixel_position)` pairs of the ticks whose label decoded,
/// in DOM order.
#[must_use]
pub fn usable_ticks(ticks: &[Tick]) -> Vec<(f64, f64)> {
    ticks
        .iter()
        .filter_map(|tick| {
            tick.decoded_value
                .filter(|value| value.is_finite())
                .map(|value| (value, tick.pixel_position))
        })
        .collect()
}
