//! Query planner module.

mod query_plan;

pub use query_plan::QueryPlan;
