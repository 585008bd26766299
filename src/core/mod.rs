pub mod bracket;
pub mod shape;
pub mod types;
pub mod value_decoder;

pub use bracket::{Bracket, ExtendedTickSequence, bracket};
pub use shape::MarkShape;
pub use types::{
    Axis, Dimension, ReferencePoint, Tick, TickOrder, UnplaceablePolicy, ValueKind, usable_ticks,
};
pub use value_decoder::{
    MONTH_NAMES, decode_label, decode_mark_value, month_index, parse_calendar,
    parse_clock_minutes, parse_integer,
};
