//! Query executor module.

mod cross_product;
mod filter;
mod project;
mod relation;
mod runner;

pub use cross_product::CrossProduct;
pub use filter::FilterExecutor;
pub use project::ProjectExecutor;
pub use relation::Relation;
pub use runner::Evaluator;
