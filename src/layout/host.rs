//! The seam between the DSL and whatever owns views and solves relations

use super::relation::Relation;
use super::types::ViewId;

/// A host owns the view tree and the active relations.
///
/// The DSL only reads the tree (to find a view's container) and hands every
/// relation it builds to [`activate`](LayoutHost::activate). Solving,
/// conflict detection and scheduling layout passes are the host's business.
pub trait LayoutHost {
    /// The enclosing view, or `None` for a view that is not attached to a tree
    fn container_of(&self, view: ViewId) -> Option<ViewId>;

    /// Human-readable name used in diagnostics
    fn view_name(&self, view: ViewId) -> &str;

    /// Register a relation as active
    fn activate(&mut self, relation: Relation);
}
