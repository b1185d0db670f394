//! Relative positioning over a constraint solver
//!
//! [`Pin`] is the fluent front end. It turns calls such as
//! `pin.top(8.0, None).width(120.0)` into [`Relation`]s and activates them on a
//! [`LayoutHost`]. [`Scene`] is the host shipped with the crate: it owns a view
//! tree and solves the active relations with kasuari on every layout pass.

pub mod anchor;
pub mod config;
pub mod error;
pub mod host;
pub mod pin;
pub mod relation;
pub mod scene;
pub mod side;
pub mod solver;
pub mod types;

pub use anchor::{
    horizontal_anchor, vertical_anchor, AnchorSource, Dimension, DimensionAnchor, XAnchor,
    XAttribute, YAnchor, YAttribute,
};
pub use config::LayoutConfig;
pub use error::LayoutError;
pub use host::LayoutHost;
pub use pin::Pin;
pub use relation::Relation;
pub use scene::{Frames, Scene};
pub use side::{EdgeInsets, Side, SideDirection};
pub use solver::SolverError;
pub use types::{Point, Rect, ViewId};
