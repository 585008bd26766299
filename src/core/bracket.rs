//! Bracket search over an axis tick sequence.
//!
//! The usable ticks of an axis are extended with one synthetic tick beyond
//! each end, extrapolated from the spacing of the first two real ticks, so
//! marks between the last real tick and the chart edge can still be placed.

use serde::{Deserialize, Serialize};

use crate::core::types::TickOrder;

/// Pair of adjacent indices into an [`ExtendedTickSequence`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Bracket {
    pub lo: usize,
    pub hi: usize,
}

/// Tick values and pixel positions with the two synthetic boundary ticks.
///
/// Built per verification call and never shared.
#[derive(Debug, Clone, PartialEq)]
pub struct ExtendedTickSequence {
    values: Vec<f64>,
    positions: Vec<f64>,
    order: TickOrder,
}

impl ExtendedTickSequence {
    /// Extends `(decoded_value, pixel_position)` pairs given in DOM order.
    ///
    /// Returns `None` with fewer than two ticks, where no increment can be
    /// observed and every value is unbracketed.
    #[must_use]
    pub fn from_ticks(ticks: &[(f64, f64)]) -> Option<Self> {
        let &[(first_value, first_px), (second_value, second_px), ..] = ticks else {
            return None;
        };
        let (last_value, last_px) = ticks[ticks.len() - 1];

        let value_step = second_value - first_value;
        let pixel_step = second_px - first_px;

        let mut values = Vec::with_capacity(ticks.len() + 2);
        let mut positions = Vec::with_capacity(ticks.len() + 2);
        values.push(first_value - value_step);
        positions.push(first_px - pixel_step);
        for (value, px) in ticks {
            values.push(*value);
            positions.push(*px);
        }
        values.push(last_value + value_step);
        positions.push(last_px + pixel_step);

        let order = TickOrder::from_values(&values[1..]);
        Some(Self {
            values,
            positions,
            order,
        })
    }

    #[must_use]
    pub fn values(&self) -> &[f64] {
        &self.values
    }

    #[must_use]
    pub fn positions(&self) -> &[f64] {
        &self.positions
    }

    #[must_use]
    pub fn order(&self) -> TickOrder {
        self.order
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.values.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Brackets `value` using the order derived from the first two real ticks.
    #[must_use]
    pub fn bracket(&self, value: f64) -> Option<Bracket> {
        bracket(value, &self.values, self.order.is_ascending())
    }

    /// Pixel span `(min, max)` covered by a bracket, regardless of axis direction.
    #[must_use]
    pub fn pixel_span(&self, bracket: Bracket) -> (f64, f64) {
        let lo = self.positions[bracket.lo];
        let hi = self.positions[bracket.hi];
        (lo.min(hi), lo.max(hi))
    }
}

/// Finds the two adjacent indices of `ordered_values` whose range holds `value`.
///
/// Binary search over `[lo, hi)`, discarding the upper half when the midpoint
/// lies past `value` in the sequence direction (`>` ascending, `<`
/// descending). A midpoint equal to `value` collapses both bounds to
/// `mid + 1`, so a value sitting exactly on a tick resolves to the bracket
/// `(mid, mid + 1)`, the bracket *starting* at that tick. This is deliberate:
/// keep the bound collapse even though "the bracket ending at the tick" reads
/// as the natural assignment. The verdict does not depend on it, since the
/// tick's own pixel position lies on both neighbouring spans.
///
/// An insertion point at either end of the sequence, or a non-finite value,
/// yields `None`.
#[must_use]
pub fn bracket(value: f64, ordered_values: &[f64], ascending: bool) -> Option<Bracket> {
    if !value.is_finite() {
        return None;
    }

    let mut lo = 0;
    let mut hi = ordered_values.len();
    while lo < hi {
        let mid = lo + (hi - lo) / 2;
        let candidate = ordered_values[mid];
        if candidate == value {
            lo = mid + 1;
            hi = mid + 1;
        } else if (ascending && candidate > value) || (!ascending && candidate < value) {
            hi = mid;
        } else {
            lo = mid + 1;
        }
    }

    if lo == 0 || lo >= ordered_values.len() {
        return None;
    }
    Some(Bracket { lo: lo - 1, hi: lo })
}
