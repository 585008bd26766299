use tracing::{debug, warn};

use crate::core::{Axis, Dimension, Tick, ValueKind, decode_label};
use crate::dom::{DomElement, parse_translation};
use crate::error::{AlignError, AlignResult};

/// Class carried by each tick group of a D3 axis.
pub const TICK_CLASS: &str = "tick";

/// Reads the tick groups of `axis_element` in DOM order.
///
/// The order is kept as rendered, never re-sorted by value or position.
/// A tick without a usable translation is a hard error; a label that does
/// not decode leaves `decoded_value` empty.
pub fn extract_ticks<E: DomElement>(
    axis_element: &E,
    dimension: Dimension,
    value_kind: ValueKind,
) -> AlignResult<Vec<Tick>> {
    let mut ticks = Vec::new();
    for (index, tick) in axis_element
        .child_elements()
        .into_iter()
        .filter(|child| child.has_class(TICK_CLASS))
        .enumerate()
    {
        let pixel_position = tick_position(tick, index, dimension)?;
        let raw_label = tick_label(tick);
        let decoded_value = decode_label(&raw_label, value_kind);
        if decoded_value.is_none() {
            warn!(index, label = %raw_label, ?value_kind, "tick label does not decode");
        }
        ticks.push(Tick::new(pixel_position, decoded_value, raw_label));
    }

    debug!(
        tick_count = ticks.len(),
        ?dimension,
        ?value_kind,
        "extracted axis ticks"
    );
    Ok(ticks)
}

/// Extracts ticks and wraps them with their axis metadata.
pub fn extract_axis<E: DomElement>(
    axis_element: &E,
    dimension: Dimension,
    value_kind: ValueKind,
) -> AlignResult<Axis> {
    let ticks = extract_ticks(axis_element, dimension, value_kind)?;
    Ok(Axis::new(dimension, value_kind, ticks))
}

fn tick_position<E: DomElement>(tick: &E, index: usize, dimension: Dimension) -> AlignResult<f64> {
    let transform = tick
        .attribute("transform")
        .ok_or_else(|| AlignError::MissingTickGeometry {
            index,
            reason: "no transform attribute".to_owned(),
        })?;
    let (x, y) = parse_translation(transform).ok_or_else(|| AlignError::MissingTickGeometry {
        index,
        reason: format!("transform `{transform}` has no translation"),
    })?;

    Ok(match dimension {
        Dimension::Horizontal => x,
        Dimension::Vertical => y,
    })
}

fn tick_label<E: DomElement>(tick: &E) -> String {
    tick.descendants()
        .into_iter()
        .find(|node| node.is_tag("text"))
        .map_or_else(|| tick.text_content(), |node| node.text_content())
        .trim()
        .to_owned()
}

#[cfg(test)]
mod tests {
    use super::tick_label;
    use crate::dom::ElementSnapshot;

    #[test]
    fn label_prefers_nested_text_element() {
        let tick = ElementSnapshot::new("g")
            .with_class("tick")
            .with_child(ElementSnapshot::new("title").with_text("ignored "))
            .with_child(ElementSnapshot::new("text").with_text(" 1994 "));
        assert_eq!(tick_label(&tick), "1994");
    }

    #[test]
    fn label_falls_back_to_tick_text() {
        let tick = ElementSnapshot::new("g").with_class("tick").with_text("March");
        assert_eq!(tick_label(&tick), "March");
    }
}
