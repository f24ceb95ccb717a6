//! Wave-shaping stages and the control mapping that drives them.
//!
//! Everything here is a pure function of its arguments; state lives in the
//! oscillators.

mod comparator;
mod mapper;
mod rectifier;

pub use comparator::{ComparatorMode, compare, effective_threshold};
pub use mapper::{
    DEFAULT_SPLIT_A, DEFAULT_SPLIT_B, Region, SPLIT_B_LIMIT, ShapeParams, SplitPoints,
    map_parameters,
};
pub use rectifier::rectify;
