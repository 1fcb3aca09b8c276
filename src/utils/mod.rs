//! Various unsorted geometrical and logical operators.

pub use self::center::{center, center_of};

mod center;
