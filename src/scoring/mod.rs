pub mod category;
pub use category::*;

pub mod evaluator;
pub use evaluator::*;

pub mod report;
pub use report::*;
