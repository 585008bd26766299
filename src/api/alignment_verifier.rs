//! Checks that every mark sits inside the pixel span of the ticks that
//! bracket its value.

use serde::{Deserialize, Serialize};
use tracing::{debug, trace, warn};

use crate::core::{
    ExtendedTickSequence, Tick, UnplaceablePolicy, decode_mark_value, usable_ticks,
};
use crate::dom::{DomElement, select_all, select_first};
use crate::error::{AlignError, AlignResult};

use super::{AlignmentConfig, extract_ticks, locate};

// Absorbs float noise when a mark sits exactly on `span ± tolerance`.
const SPAN_EPSILON: f64 = 1e-9;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MisalignmentReason {
    /// The mark lies outside its bracket's pixel span plus tolerance.
    OutsideSpan,
    /// The value falls outside the extended tick range (policy `Fail`).
    Unbracketed,
    /// The value attribute is absent or does not decode (policy `Fail`).
    Undecodable,
}

/// One mark that counted against the verdict.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Misalignment {
    pub mark_index: usize,
    pub reason: MisalignmentReason,
    pub raw_value: Option<String>,
    pub value: Option<f64>,
    pub pixel: Option<f64>,
    /// Allowed `(min, max)` pixel span before tolerance.
    pub span: Option<(f64, f64)>,
}

/// Outcome of verifying one mark collection against one axis.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AlignmentReport {
    pub aligned: bool,
    pub tick_count: usize,
    pub usable_tick_count: usize,
    pub mark_count: usize,
    pub checked: usize,
    pub skipped_unbracketed: usize,
    pub skipped_undecodable: usize,
    pub tolerance_px: f64,
    pub misalignments: Vec<Misalignment>,
}

impl AlignmentReport {
    fn empty(tick_count: usize, usable_tick_count: usize, tolerance_px: f64) -> Self {
        Self {
            aligned: false,
            tick_count,
            usable_tick_count,
            mark_count: 0,
            checked: 0,
            skipped_unbracketed: 0,
            skipped_undecodable: 0,
            tolerance_px,
            misalignments: Vec::new(),
        }
    }

    /// Number of marks counted against the verdict.
    #[must_use]
    pub fn misaligned(&self) -> usize {
        self.misalignments.len()
    }

    /// Marks existed but none could be compared with the axis.
    ///
    /// Such a pass proves nothing about the page; callers should treat it as
    /// a failure of the page under test.
    #[must_use]
    pub fn is_vacuous(&self) -> bool {
        self.mark_count > 0 && self.checked == 0
    }

    /// Human-readable explanation of a failed or vacuous verdict.
    #[must_use]
    pub fn failure_message(&self, axis_name: &str) -> Option<String> {
        if self.mark_count == 0 {
            return Some(format!("{axis_name}: no data marks were found"));
        }
        if self.is_vacuous() && self.misalignments.is_empty() {
            return Some(format!(
                "{axis_name}: none of the {} marks could be placed against {} usable ticks",
                self.mark_count, self.usable_tick_count
            ));
        }
        let first = self.misalignments.first()?;
        let detail = match (first.reason, first.pixel, first.span) {
            (MisalignmentReason::OutsideSpan, Some(pixel), Some((min, max))) => format!(
                "mark #{} with value {} is at {pixel}px, expected between {min}px and {max}px (±{}px)",
                first.mark_index,
                first.raw_value.as_deref().unwrap_or("?"),
                self.tolerance_px
            ),
            (MisalignmentReason::Unbracketed, ..) => format!(
                "mark #{} with value {} lies outside the axis range",
                first.mark_index,
                first.raw_value.as_deref().unwrap_or("?")
            ),
            _ => format!(
                "mark #{} has no decodable value ({})",
                first.mark_index,
                first.raw_value.as_deref().unwrap_or("missing")
            ),
        };
        Some(format!(
            "{axis_name}: {} of {} marks misaligned; {detail}",
            self.misaligned(),
            self.mark_count
        ))
    }
}

/// Verifier bound to one validated [`AlignmentConfig`].
#[derive(Debug, Clone, PartialEq)]
pub struct AlignmentVerifier {
    config: AlignmentConfig,
}

impl AlignmentVerifier {
    pub fn new(config: AlignmentConfig) -> AlignResult<Self> {
        Ok(Self {
            config: config.validate()?,
        })
    }

    #[must_use]
    pub fn config(&self) -> &AlignmentConfig {
        &self.config
    }

    /// Verifies `marks` against ticks already extracted from an axis.
    ///
    /// An empty mark collection is a failed verdict. Shape geometry is read
    /// only for marks that bracket, and missing geometry aborts the call.
    pub fn verify_ticks<'a, E, I>(&self, ticks: &[Tick], marks: I) -> AlignResult<AlignmentReport>
    where
        E: DomElement + 'a,
        I: IntoIterator<Item = &'a E>,
    {
        let config = &self.config;
        let usable = usable_ticks(ticks);
        if usable.len() < ticks.len() {
            warn!(
                dropped = ticks.len() - usable.len(),
                "ignoring ticks with undecodable labels"
            );
        }
        let sequence = ExtendedTickSequence::from_ticks(&usable);
        if sequence.is_none() {
            warn!(
                usable_tick_count = usable.len(),
                "fewer than two usable ticks; no mark can be bracketed"
            );
        }

        let mut report = AlignmentReport::empty(ticks.len(), usable.len(), config.tolerance_px);
        for (mark_index, mark) in marks.into_iter().enumerate() {
            report.mark_count += 1;
            self.verify_mark(mark_index, mark, sequence.as_ref(), &mut report)?;
        }

        report.aligned = report.mark_count > 0 && report.misalignments.is_empty();
        debug!(
            tick_count = report.tick_count,
            mark_count = report.mark_count,
            checked = report.checked,
            skipped_unbracketed = report.skipped_unbracketed,
            skipped_undecodable = report.skipped_undecodable,
            misaligned = report.misaligned(),
            aligned = report.aligned,
            "verified mark alignment"
        );
        Ok(report)
    }

    /// Extracts ticks from `axis_element`, then verifies `marks`.
    pub fn verify<'a, E, I>(&self, axis_element: &E, marks: I) -> AlignResult<AlignmentReport>
    where
        E: DomElement + 'a,
        I: IntoIterator<Item = &'a E>,
    {
        let ticks = extract_ticks(axis_element, self.config.dimension, self.config.value_kind)?;
        self.verify_ticks(&ticks, marks)
    }

    /// Resolves the axis and marks inside `root` by selector, then verifies.
    pub fn verify_in<E: DomElement>(
        &self,
        root: &E,
        axis_selector: &str,
        mark_selector: &str,
    ) -> AlignResult<AlignmentReport> {
        let axis = select_first(root, axis_selector)?
            .ok_or_else(|| AlignError::MissingElement(axis_selector.to_owned()))?;
        let marks = select_all(root, mark_selector)?;
        self.verify(axis, marks)
    }

    /// All-or-nothing verdict over pre-extracted ticks.
    pub fn all_aligned<'a, E, I>(&self, ticks: &[Tick], marks: I) -> AlignResult<bool>
    where
        E: DomElement + 'a,
        I: IntoIterator<Item = &'a E>,
    {
        Ok(self.verify_ticks(ticks, marks)?.aligned)
    }

    /// Number of marks counted against the verdict, for diagnostic reporting.
    pub fn count_misaligned<'a, E, I>(&self, axis_element: &E, marks: I) -> AlignResult<usize>
    where
        E: DomElement + 'a,
        I: IntoIterator<Item = &'a E>,
    {
        Ok(self.verify(axis_element, marks)?.misaligned())
    }

    fn verify_mark<E: DomElement>(
        &self,
        mark_index: usize,
        mark: &E,
        sequence: Option<&ExtendedTickSequence>,
        report: &mut AlignmentReport,
    ) -> AlignResult<()> {
        let config = &self.config;
        let raw_value = config
            .value_attributes
            .iter()
            .find_map(|name| mark.attribute(name))
            .map(str::to_owned);

        let Some(value) = raw_value
            .as_deref()
            .and_then(|raw| decode_mark_value(raw, config.value_kind))
        else {
            trace!(mark_index, raw_value = ?raw_value, "mark value does not decode");
            match config.on_undecodable {
                UnplaceablePolicy::Skip => report.skipped_undecodable += 1,
                UnplaceablePolicy::Fail => report.misalignments.push(Misalignment {
                    mark_index,
                    reason: MisalignmentReason::Undecodable,
                    raw_value,
                    value: None,
                    pixel: None,
                    span: None,
                }),
            }
            return Ok(());
        };

        let Some((sequence, bracket)) =
            sequence.and_then(|sequence| sequence.bracket(value).map(|b| (sequence, b)))
        else {
            trace!(mark_index, value, "mark value is outside the extended tick range");
            match config.on_unbracketed {
                UnplaceablePolicy::Skip => report.skipped_unbracketed += 1,
                UnplaceablePolicy::Fail => report.misalignments.push(Misalignment {
                    mark_index,
                    reason: MisalignmentReason::Unbracketed,
                    raw_value,
                    value: Some(value),
                    pixel: None,
                    span: None,
                }),
            }
            return Ok(());
        };

        let pixel = locate(mark, config.dimension, config.reference_point)?;
        let (min, max) = sequence.pixel_span(bracket);
        let tolerance = config.tolerance_px + SPAN_EPSILON;
        report.checked += 1;

        if pixel < min - tolerance || pixel > max + tolerance {
            trace!(mark_index, value, pixel, min, max, "mark is misaligned");
            report.misalignments.push(Misalignment {
                mark_index,
                reason: MisalignmentReason::OutsideSpan,
                raw_value,
                value: Some(value),
                pixel: Some(pixel),
                span: Some((min, max)),
            });
        }
        Ok(())
    }
}
