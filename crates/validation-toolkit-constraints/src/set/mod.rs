// Ordered constraint collections with fail-fast and accumulate evaluation.

mod constraint_set;

#[cfg(test)]
mod tests;

pub use constraint_set::ConstraintSet;
pub(crate) use constraint_set::evaluate_each;
