pub mod sum;

pub use sum::{sum_from_op, sum_op};
