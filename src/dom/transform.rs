//! SVG `transform` attribute parsing, limited to the translation component.

/// Returns the accumulated `(tx, ty)` translation of a `transform` attribute.
///
/// Understands `translate(tx[, ty])` (a missing `ty` means `0`) and the
/// translation part of `matrix(a b c d e f)`. Other functions such as
/// `rotate` or `scale` are ignored. Returns `None` when no translating
/// function is present or its arguments are not numeric.
#[must_use]
pub fn parse_translation(transform: &str) -> Option<(f64, f64)> {
    let mut translation: Option<(f64, f64)> = None;
    let mut rest = transform.trim();

    while !rest.is_empty() {
        let open = rest.find('(')?;
        let close = open + rest[open..].find(')')?;
        let name = rest[..open].trim().trim_start_matches(',').trim();
        let args = parse_arguments(&rest[open + 1..close])?;

        let step = match (name, args.as_slice()) {
            ("translate", [tx]) => Some((*tx, 0.0)),
            ("translate", [tx, ty]) => Some((*tx, *ty)),
            ("matrix", [_, _, _, _, e, f]) => Some((*e, *f)),
            ("translate" | "matrix", _) => return None,
            _ => None,
        };
        if let Some((dx, dy)) = step {
            let (x, y) = translation.unwrap_or((0.0, 0.0));
            translation = Some((x + dx, y + dy));
        }

        rest = rest[close + 1..].trim_start();
    }

    translation
}

fn parse_arguments(raw: &str) -> Option<Vec<f64>> {
    raw.split(|c: char| c == ',' || c.is_whitespace())
        .filter(|token| !token.is_empty())
        .map(|token| token.parse::<f64>().ok().filter(|value| value.is_finite()))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::parse_translation;

    #[test]
    fn comma_and_space_separated_arguments() {
        assert_eq!(parse_translation("translate(37.5,0)"), Some((37.5, 0.0)));
        assert_eq!(parse_translation("translate(0 87.5)"), Some((0.0, 87.5)));
        assert_eq!(parse_translation("translate( 12 , -4 )"), Some((12.0, -4.0)));
    }

    #[test]
    fn single_argument_translate_has_zero_y() {
        assert_eq!(parse_translation("translate(42)"), Some((42.0, 0.0)));
    }

    #[test]
    fn non_translating_functions_are_ignored() {
        assert_eq!(
            parse_translation("translate(10,20) rotate(-45)"),
            Some((10.0, 20.0))
        );
        assert_eq!(parse_translation("rotate(-45)"), None);
    }

    #[test]
    fn matrix_translation_is_used() {
        assert_eq!(parse_translation("matrix(1 0 0 1 5 6)"), Some((5.0, 6.0)));
    }

    #[test]
    fn malformed_transform_is_rejected() {
        assert_eq!(parse_translation("translate(abc,0)"), None);
        assert_eq!(parse_translation("translate(1,2"), None);
        assert_eq!(parse_translation(""), None);
    }
}
