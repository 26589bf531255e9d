pub mod interval;

pub use interval::{start_of_day, Interval, TimeBound, TimeKind, TimePoint};
