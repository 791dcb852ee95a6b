//! Request validation and presentation helpers shared by handlers.

mod distance;
mod relative_time;
mod validation;
pub use distance::sort_by_distance;
pub use relative_time::format_relative;
pub use validation::{FieldRule, RequestValidator};
