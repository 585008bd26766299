use serde::{Deserialize, Serialize};

use crate::core::{Dimension, ReferencePoint, UnplaceablePolicy, ValueKind};
use crate::error::{AlignError, AlignResult};

pub const DEFAULT_TOLERANCE_PX: f64 = 1.0;
pub const MAX_TOLERANCE_PX: f64 = 64.0;

/// Per-call settings for one axis / mark-collection check.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AlignmentConfig {
    pub dimension: Dimension,
    pub value_kind: ValueKind,
    pub reference_point: ReferencePoint,
    /// Data attributes tried in order on each mark; the first present wins.
    pub value_attributes: Vec<String>,
    /// Symmetric slack applied to both ends of a bracket's pixel span.
    pub tolerance_px: f64,
    pub on_unbracketed: UnplaceablePolicy,
    pub on_undecodable: UnplaceablePolicy,
}

impl Default for AlignmentConfig {
    fn default() -> Self {
        Self {
            dimension: Dimension::Horizontal,
            value_kind: ValueKind::Integer,
            reference_point: ReferencePoint::Center,
            value_attributes: vec!["data-xvalue".to_owned()],
            tolerance_px: DEFAULT_TOLERANCE_PX,
            on_unbracketed: UnplaceablePolicy::Skip,
            on_undecodable: UnplaceablePolicy::Skip,
        }
    }
}

impl AlignmentConfig {
    #[must_use]
    pub fn new(dimension: Dimension, value_kind: ValueKind) -> Self {
        Self {
            dimension,
            value_kind,
            ..Self::default()
        }
    }

    /// Bars positioned by their left edge against a year axis.
    #[must_use]
    pub fn bar_chart_x() -> Self {
        Self::new(Dimension::Horizontal, ValueKind::Integer)
            .with_reference_point(ReferencePoint::TopLeft)
            .with_value_attribute("data-date")
    }

    /// Dots centered on a year axis.
    #[must_use]
    pub fn scatterplot_x() -> Self {
        Self::new(Dimension::Horizontal, ValueKind::Integer).with_value_attribute("data-xvalue")
    }

    /// Dots centered on a `MM:SS` time axis.
    #[must_use]
    pub fn scatterplot_y() -> Self {
        Self::new(Dimension::Vertical, ValueKind::ClockMinutes).with_value_attribute("data-yvalue")
    }

    /// Heat map cells anchored at their left edge against a year axis.
    #[must_use]
    pub fn heat_map_x() -> Self {
        Self::new(Dimension::Horizontal, ValueKind::Integer)
            .with_reference_point(ReferencePoint::TopLeft)
            .with_value_attribute("data-year")
    }

    /// Heat map cells centered on a month-name axis.
    #[must_use]
    pub fn heat_map_y() -> Self {
        Self::new(Dimension::Vertical, ValueKind::MonthName).with_value_attribute("data-month")
    }

    #[must_use]
    pub fn with_reference_point(mut self, reference_point: ReferencePoint) -> Self {
        self.reference_point = reference_point;
        self
    }

    /// Replaces the attribute list with a single attribute.
    #[must_use]
    pub fn with_value_attribute(mut self, attribute: impl Into<String>) -> Self {
        self.value_attributes = vec![attribute.into()];
        self
    }

    /// Adds a fallback attribute consulted when earlier ones are absent.
    #[must_use]
    pub fn with_fallback_attribute(mut self, attribute: impl Into<String>) -> Self {
        self.value_attributes.push(attribute.into());
        self
    }

    #[must_use]
    pub fn with_tolerance_px(mut self, tolerance_px: f64) -> Self {
        self.tolerance_px = tolerance_px;
        self
    }

    #[must_use]
    pub fn with_on_unbracketed(mut self, policy: UnplaceablePolicy) -> Self {
        self.on_unbracketed = policy;
        self
    }

    #[must_use]
    pub fn with_on_undecodable(mut self, policy: UnplaceablePolicy) -> Self {
        self.on_undecodable = policy;
        self
    }

    pub fn validate(self) -> AlignResult<Self> {
        if !self.tolerance_px.is_finite()
            || self.tolerance_px < 0.0
            || self.tolerance_px > MAX_TOLERANCE_PX
        {
            return Err(AlignError::InvalidConfig(format!(
                "tolerance_px must be finite and within 0..={MAX_TOLERANCE_PX}"
            )));
        }

        if self.value_attributes.is_empty() {
            return Err(AlignError::InvalidConfig(
                "at least one value attribute is required".to_owned(),
            ));
        }

        if let Some(name) = self
            .value_attributes
            .iter()
            .find(|name| name.trim().is_empty() || name.contains(char::is_whitespace))
        {
            return Err(AlignError::InvalidConfig(format!(
                "value attribute `{name}` is not a valid attribute name"
            )));
        }

        Ok(self)
    }
}
