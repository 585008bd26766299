use chart_align::api::{AlignmentConfig, AlignmentVerifier};
use chart_align::dom::ElementSnapshot;
use proptest::prelude::*;

fn tick_pairs(
    first_year: i64,
    step: i64,
    tick_count: usize,
    first_px: f64,
    px_step: f64,
) -> Vec<(i64, f64)> {
    (0..tick_count)
        .map(|index| {
            (
                first_year + step * index as i64,
                first_px + index as f64 * px_step,
            )
        })
        .collect()
}

fn axis_from_pairs(pairs: &[(i64, f64)]) -> ElementSnapshot {
    ElementSnapshot::new("g").with_id("x-axis").with_children(
        pairs
            .iter()
            .map(|(year, px)| ElementSnapshot::tick(format!("translate({px},0)"), year.to_string())),
    )
}

fn dot(cx: f64, year: i64) -> ElementSnapshot {
    ElementSnapshot::circle(cx, 0.0, 4.0).with_attr("data-xvalue", year)
}

fn verifier(tolerance_px: f64) -> AlignmentVerifier {
    AlignmentVerifier::new(AlignmentConfig::scatterplot_x().with_tolerance_px(tolerance_px))
        .expect("valid config")
}

proptest! {
    #[test]
    fn verification_is_idempotent(
        first_year in 1800i64..2000,
        step in prop::sample::select(vec![2i64, 4, 10]),
        tick_count in 2usize..12,
        first_px in 0.0f64..100.0,
        px_step in 5.0f64..60.0,
        jitters in prop::collection::vec(-40.0f64..40.0, 1..16)
    ) {
        let pairs = tick_pairs(first_year, step, tick_count, first_px, px_step);
        let axis = axis_from_pairs(&pairs);
        let marks: Vec<ElementSnapshot> = jitters
            .iter()
            .enumerate()
            .map(|(index, jitter)| {
                let k = index % (tick_count - 1);
                let year = first_year + step * k as i64 + step / 2;
                let px = first_px + (k as f64 + 0.5) * px_step + jitter;
                dot(px, year)
            })
            .collect();

        let verifier = verifier(1.0);
        let first = verifier.verify(&axis, &marks).expect("first");
        let second = verifier.verify(&axis, &marks).expect("second");
        prop_assert_eq!(first, second);
    }

    #[test]
    fn reversed_tick_order_yields_same_verdict(
        first_year in 1800i64..2000,
        step in prop::sample::select(vec![2i64, 4, 10]),
        tick_count in 2usize..12,
        first_px in 0.0f64..100.0,
        px_step in 5.0f64..60.0,
        offsets in prop::collection::vec((-2i64..14, -30.0f64..30.0), 1..16)
    ) {
        let pairs = tick_pairs(first_year, step, tick_count, first_px, px_step);
        let mut reversed = pairs.clone();
        reversed.reverse();

        let marks: Vec<ElementSnapshot> = offsets
            .iter()
            .map(|(k, jitter)| {
                let year = first_year + step * k + step / 2;
                let px = first_px + (*k as f64 + 0.5) * px_step + jitter;
                dot(px, year)
            })
            .collect();

        let verifier = verifier(1.0);
        let ascending = verifier.verify(&axis_from_pairs(&pairs), &marks).expect("ascending");
        let descending = verifier.verify(&axis_from_pairs(&reversed), &marks).expect("descending");

        prop_assert_eq!(ascending.aligned, descending.aligned);
        prop_assert_eq!(ascending.checked, descending.checked);
        prop_assert_eq!(ascending.skipped_unbracketed, descending.skipped_unbracketed);
        prop_assert_eq!(ascending.misaligned(), descending.misaligned());
    }

    #[test]
    fn tolerance_boundary_passes_and_one_pixel_beyond_fails(
        first_year in 1800i64..2000,
        step in prop::sample::select(vec![2i64, 4, 10]),
        tick_count in 2usize..12,
        first_px in 0.0f64..100.0,
        px_step in 5.0f64..60.0,
        tolerance in 0.0f64..5.0,
        bracket_seed in 0usize..64,
        upper_edge in any::<bool>()
    ) {
        let pairs = tick_pairs(first_year, step, tick_count, first_px, px_step);
        let axis = axis_from_pairs(&pairs);
        let k = bracket_seed % (tick_count - 1);
        let year = first_year + step * k as i64 + step / 2;
        let (edge, outward) = if upper_edge {
            (pairs[k + 1].1, 1.0)
        } else {
            (pairs[k].1, -1.0)
        };

        let verifier = verifier(tolerance);
        let at_boundary = dot(edge + outward * tolerance, year);
        let beyond = dot(edge + outward * (tolerance + 1.0), year);

        prop_assert!(verifier.verify(&axis, [&at_boundary]).expect("boundary").aligned);
        prop_assert!(!verifier.verify(&axis, [&beyond]).expect("beyond").aligned);
    }
}
