//! A worked example of a solution module, registered for `day1`.

pub mod day_1;
