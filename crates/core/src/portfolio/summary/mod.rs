pub mod summary_calculator;
pub mod summary_model;

pub use summary_calculator::*;
pub use summary_model::*;
