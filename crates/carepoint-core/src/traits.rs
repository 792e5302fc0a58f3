//! The catalog seam between the scoring pipeline and its knowledge base.

use std::sync::Arc;

use carepoint_contracts::condition::ConditionDefinition;

/// A read-only source of condition definitions.
///
/// Implementations are built once at startup and must never change their
/// contents afterwards: the pipeline relies on declaration order for
/// tie-breaking and on the definitions having passed
/// [`validate_definitions`](crate::validate::validate_definitions).
pub trait ConditionCatalog: Send + Sync {
    /// Every definition, in declaration order.
    fn conditions(&self) -> &[ConditionDefinition];
}

impl ConditionCatalog for Vec<ConditionDefinition> {
    fn conditions(&self) -> &[ConditionDefinition] {
        self
    }
}

impl<C: ConditionCatalog + ?Sized> ConditionCatalog for Arc<C> {
    fn conditions(&self) -> &[ConditionDefinition] {
        (**self).conditions()
    }
}
