//! chart-align: verifies that rendered chart marks line up with their axes.
//!
//! Given a settled snapshot of an SVG axis (tick groups with translations and
//! labels) and the data marks drawn against it (circles or rectangles carrying
//! `data-*` value attributes), the verifier decides whether every mark sits
//! within the pixel span of the two ticks bracketing its value.
//!
//! `core` holds the DOM-free algorithms, `dom` the structural contract with
//! the page, and `api` the orchestration used by project checks.

pub mod api;
pub mod core;
pub mod dom;
pub mod error;
pub mod telemetry;

pub use api::{AlignmentConfig, AlignmentReport, AlignmentVerifier};
pub use dom::{DomElement, ElementSnapshot};
pub use error::{AlignError, AlignResult};
