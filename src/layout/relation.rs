//! Relations between anchors

use super::anchor::{AnchorSource, DimensionAnchor, XAnchor, YAnchor};
use super::host::LayoutHost;
use super::types::ViewId;

/// A linear relation registered with a host
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Relation {
    /// item = target + constant
    EqualX {
        item: XAnchor,
        target: XAnchor,
        constant: f64,
    },

    /// item = target + constant
    EqualY {
        item: YAnchor,
        target: YAnchor,
        constant: f64,
    },

    /// item = target + constant
    EqualDimension {
        item: DimensionAnchor,
        target: DimensionAnchor,
        constant: f64,
    },

    /// item = value
    FixedDimension { item: DimensionAnchor, value: f64 },

    /// item = multiplier * target
    Proportional {
        item: DimensionAnchor,
        target: DimensionAnchor,
        multiplier: f64,
    },
}

impl XAnchor {
    pub fn equal_to(self, target: XAnchor, constant: f64) -> Relation {
        Relation::EqualX {
            item: self,
            target,
            constant,
        }
    }
}

impl YAnchor {
    pub fn equal_to(self, target: YAnchor, constant: f64) -> Relation {
        Relation::EqualY {
            item: self,
            target,
            constant,
        }
    }
}

impl DimensionAnchor {
    pub fn equal_to(self, target: DimensionAnchor, constant: f64) -> Relation {
        Relation::EqualDimension {
            item: self,
            target,
            constant,
        }
    }

    pub fn equal_to_constant(self, value: f64) -> Relation {
        Relation::FixedDimension { item: self, value }
    }

    /// This dimension as `coefficient` times `to`
    pub fn aspect_fit(self, to: DimensionAnchor, coefficient: f64) -> Relation {
        Relation::Proportional {
            item: self,
            target: to,
            multiplier: coefficient,
        }
    }
}

impl Relation {
    /// The view whose anchor sits on the left-hand side
    pub fn view(&self) -> ViewId {
        match self {
            Relation::EqualX { item, .. } => item.view,
            Relation::EqualY { item, .. } => item.view,
            Relation::EqualDimension { item, .. }
            | Relation::FixedDimension { item, .. }
            | Relation::Proportional { item, .. } => item.view,
        }
    }

    /// The view on the right-hand side, if the relation has one
    pub fn target_view(&self) -> Option<ViewId> {
        match self {
            Relation::EqualX { target, .. } => Some(target.view),
            Relation::EqualY { target, .. } => Some(target.view),
            Relation::EqualDimension { target, .. } | Relation::Proportional { target, .. } => {
                Some(target.view)
            }
            Relation::FixedDimension { .. } => None,
        }
    }

    /// Render the relation with view names, e.g. `card.top = root.safe.top + 8`
    pub fn describe<H: LayoutHost + ?Sized>(&self, host: &H) -> String {
        match self {
            Relation::EqualX {
                item,
                target,
                constant,
            } => format!(
                "{} = {}{}",
                label(host, item.view, item.source, item.attribute.name()),
                label(host, target.view, target.source, target.attribute.name()),
                offset_suffix(*constant)
            ),
            Relation::EqualY {
                item,
                target,
                constant,
            } => format!(
                "{} = {}{}",
                label(host, item.view, item.source, item.attribute.name()),
                label(host, target.view, target.source, target.attribute.name()),
                offset_suffix(*constant)
            ),
            Relation::EqualDimension {
                item,
                target,
                constant,
            } => format!(
                "{} = {}{}",
                dimension_label(host, item),
                dimension_label(host, target),
                offset_suffix(*constant)
            ),
            Relation::FixedDimension { item, value } => {
                format!("{} = {}", dimension_label(host, item), value)
            }
            Relation::Proportional {
                item,
                target,
                multiplier,
            } => format!(
                "{} = {} * {}",
                dimension_label(host, item),
                multiplier,
                dimension_label(host, target)
            ),
        }
    }
}

fn label<H: LayoutHost + ?Sized>(
    host: &H,
    view: ViewId,
    source: AnchorSource,
    attribute: &str,
) -> String {
    match source {
        AnchorSource::Bounds => format!("{}.{}", host.view_name(view), attribute),
        AnchorSource::SafeArea => format!("{}.safe.{}", host.view_name(view), attribute),
    }
}

fn dimension_label<H: LayoutHost + ?Sized>(host: &H, anchor: &DimensionAnchor) -> String {
    format!("{}.{}", host.view_name(anchor.view), anchor.dimension.name())
}

fn offset_suffix(constant: f64) -> String {
    if constant > 0.0 {
        format!(" + {}", constant)
    } else if constant < 0.0 {
        format!(" - {}", -constant)
    } else {
        String::new()
    }
}
