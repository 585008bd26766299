mod alignment_config;
mod alignment_verifier;
mod assertions;
mod json_contract;
mod mark_locator;
mod presence;
mod tick_extractor;

pub use alignment_config::{AlignmentConfig, DEFAULT_TOLERANCE_PX, MAX_TOLERANCE_PX};
pub use alignment_verifier::{
    AlignmentReport, AlignmentVerifier, Misalignment, MisalignmentReason,
};
pub use assertions::{
    AssertionOutcome, AssertionSink, RecordingSink, assert_alignment, assert_predicate,
};
pub use json_contract::{
    ALIGNMENT_REPORT_JSON_SCHEMA_V1, AlignmentReportJsonContractV1, DOM_SNAPSHOT_JSON_SCHEMA_V1,
    DomSnapshotJsonContractV1,
};
pub use mark_locator::{locate, mark_shape};
pub use presence::{
    CssRule, StyleSheetSnapshot, attribute_equals, attribute_present, count_matching,
    element_exists, has_class, has_media_query, has_tag, media_query_matches, style_property,
    style_rule_has_property, text_matches,
};
pub use tick_extractor::{TICK_CLASS, extract_axis, extract_ticks};
