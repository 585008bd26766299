use crate::core::{Dimension, MarkShape, ReferencePoint};
use crate::dom::DomElement;
use crate::error::{AlignError, AlignResult};

/// Pixel coordinate of a mark's reference point along `dimension`.
///
/// Reads only the attributes the answer depends on: a circle's `cx`/`cy`
/// (for either reference point), a rectangle's `x`/`y`, plus `width`/`height`
/// when the center is requested.
pub fn locate<E: DomElement>(
    mark: &E,
    dimension: Dimension,
    reference: ReferencePoint,
) -> AlignResult<f64> {
    if mark.is_tag("circle") {
        return numeric_attribute(mark, dimension.circle_center_attribute());
    }
    if !mark.is_tag("rect") {
        return Err(AlignError::UnsupportedMark {
            tag: mark.tag_name().to_owned(),
        });
    }

    let anchor = numeric_attribute(mark, dimension.rect_anchor_attribute())?;
    match reference {
        ReferencePoint::TopLeft => Ok(anchor),
        ReferencePoint::Center => {
            let extent = numeric_attribute(mark, dimension.rect_extent_attribute())?;
            Ok(anchor + extent / 2.0)
        }
    }
}

/// Reads the complete geometry of a circle or rectangle mark.
pub fn mark_shape<E: DomElement>(mark: &E) -> AlignResult<MarkShape> {
    if mark.is_tag("circle") {
        return Ok(MarkShape::Circle {
            cx: numeric_attribute(mark, "cx")?,
            cy: numeric_attribute(mark, "cy")?,
            r: numeric_attribute(mark, "r")?,
        });
    }
    if mark.is_tag("rect") {
        return Ok(MarkShape::Rect {
            x: numeric_attribute(mark, "x")?,
            y: numeric_attribute(mark, "y")?,
            width: numeric_attribute(mark, "width")?,
            height: numeric_attribute(mark, "height")?,
        });
    }
    Err(AlignError::UnsupportedMark {
        tag: mark.tag_name().to_owned(),
    })
}

fn numeric_attribute<E: DomElement>(mark: &E, attribute: &str) -> AlignResult<f64> {
    mark.attribute(attribute)
        .and_then(|raw| raw.trim().parse::<f64>().ok())
        .filter(|value| value.is_finite())
        .ok_or_else(|| AlignError::MissingShapeGeometry {
            tag: mark.tag_name().to_owned(),
            attribute: attribute.to_owned(),
        })
}

#[cfg(test)]
mod tests {
    use super::{locate, mark_shape};
    use crate::core::{Dimension, MarkShape, ReferencePoint};
    use crate::dom::ElementSnapshot;

    #[test]
    fn circle_top_left_request_reads_center() {
        let circle = ElementSnapshot::circle(12.0, 30.0, 6.0);
        let center = locate(&circle, Dimension::Vertical, ReferencePoint::Center).expect("cy");
        let top_left = locate(&circle, Dimension::Vertical, ReferencePoint::TopLeft).expect("cy");
        assert_eq!(center, 30.0);
        assert_eq!(top_left, 30.0);
    }

    #[test]
    fn top_left_does_not_require_extent() {
        let rect = ElementSnapshot::new("rect").with_attr("x", 7).with_attr("y", 9);
        assert_eq!(
            locate(&rect, Dimension::Horizontal, ReferencePoint::TopLeft).expect("x"),
            7.0
        );
        assert!(locate(&rect, Dimension::Horizontal, ReferencePoint::Center).is_err());
    }

    #[test]
    fn shape_reads_all_rect_attributes() {
        let rect = ElementSnapshot::rect(2.0, 4.0, 5.0, 33.0);
        assert_eq!(
            mark_shape(&rect).expect("rect"),
            MarkShape::Rect {
                x: 2.0,
                y: 4.0,
                width: 5.0,
                height: 33.0
            }
        );
    }
}
