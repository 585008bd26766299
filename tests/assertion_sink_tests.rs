use chart_align::api::{
    AlignmentConfig, AlignmentVerifier, RecordingSink, assert_alignment, assert_predicate,
};
use chart_align::dom::ElementSnapshot;

fn axis() -> ElementSnapshot {
    ElementSnapshot::new("g")
        .with_child(ElementSnapshot::tick("translate(37.5,0)", "1994"))
        .with_child(ElementSnapshot::tick("translate(87.5,0)", "1996"))
}

fn dot(cx: f64) -> ElementSnapshot {
    ElementSnapshot::circle(cx, 0.0, 3.0).with_attr("data-xvalue", "1995")
}

#[test]
fn aligned_report_records_a_pass() {
    let verifier = AlignmentVerifier::new(AlignmentConfig::scatterplot_x()).expect("config");
    let report = verifier.verify(&axis(), [&dot(62.5)]).expect("verify");

    let mut sink = RecordingSink::default();
    assert!(assert_alignment(&mut sink, "x-axis", &report));
    assert!(sink.all_passed());
    assert_eq!(sink.outcomes[0].name, "x-axis alignment");
}

#[test]
fn misaligned_report_names_axis_and_expected_span() {
    let verifier = AlignmentVerifier::new(AlignmentConfig::scatterplot_x()).expect("config");
    let report = verifier.verify(&axis(), [&dot(62.5), &dot(0.0)]).expect("verify");

    let mut sink = RecordingSink::default();
    assert!(!assert_alignment(&mut sink, "x-axis", &report));
    let failure = sink.failures().next().expect("one failure");
    assert!(failure.message.starts_with("x-axis: 1 of 2 marks misaligned"));
    assert!(failure.message.contains("at 0px, expected between 37.5px and 87.5px"));
}

#[test]
fn vacuous_report_fails_the_assertion() {
    let verifier = AlignmentVerifier::new(AlignmentConfig::scatterplot_x()).expect("config");
    let single_tick = ElementSnapshot::new("g").with_child(ElementSnapshot::tick("translate(1,0)", "1994"));
    let report = verifier.verify(&single_tick, [&dot(1.0)]).expect("verify");
    assert!(report.aligned);

    let mut sink = RecordingSink::default();
    assert!(!assert_alignment(&mut sink, "x-axis", &report));
    assert!(sink.outcomes[0].message.contains("could be placed"));
}

#[test]
fn predicates_are_recorded_with_their_failure_message() {
    let mut sink = RecordingSink::default();
    assert!(assert_predicate(&mut sink, "title exists", true, "missing #title"));
    assert!(!assert_predicate(&mut sink, "legend exists", false, "missing #legend"));
    assert!(!sink.all_passed());
    let messages: Vec<&str> = sink.outcomes.iter().map(|o| o.message.as_str()).collect();
    assert_eq!(messages, vec!["ok", "missing #legend"]);
}
