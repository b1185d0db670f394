//! Typed anchors
//!
//! An anchor names one geometric attribute of a view: an edge, a center or a
//! dimension. Horizontal, vertical and dimension anchors are distinct types, so
//! a relation can only ever join two anchors on the same axis.

use super::side::SideDirection;
use super::types::ViewId;

/// Where edge anchors are read from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum AnchorSource {
    /// The view's raw bounds
    #[default]
    Bounds,
    /// The view's bounds inset by its safe-area insets
    SafeArea,
}

/// Horizontal anchor attributes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum XAttribute {
    Leading,
    Trailing,
    CenterX,
}

/// Vertical anchor attributes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum YAttribute {
    Top,
    Bottom,
    CenterY,
}

/// Size attributes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Dimension {
    Width,
    Height,
}

impl XAttribute {
    pub fn name(self) -> &'static str {
        match self {
            Self::Leading => "leading",
            Self::Trailing => "trailing",
            Self::CenterX => "center_x",
        }
    }
}

impl YAttribute {
    pub fn name(self) -> &'static str {
        match self {
            Self::Top => "top",
            Self::Bottom => "bottom",
            Self::CenterY => "center_y",
        }
    }
}

impl Dimension {
    pub fn name(self) -> &'static str {
        match self {
            Self::Width => "width",
            Self::Height => "height",
        }
    }
}

/// A horizontal position on a view
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct XAnchor {
    pub view: ViewId,
    pub attribute: XAttribute,
    pub source: AnchorSource,
}

/// A vertical position on a view
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct YAnchor {
    pub view: ViewId,
    pub attribute: YAttribute,
    pub source: AnchorSource,
}

/// A size of a view. Sizes never read the safe area.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct DimensionAnchor {
    pub view: ViewId,
    pub dimension: Dimension,
}

impl XAnchor {
    pub fn new(view: ViewId, attribute: XAttribute, source: AnchorSource) -> Self {
        Self {
            view,
            attribute,
            source,
        }
    }

    pub fn leading(view: ViewId, source: AnchorSource) -> Self {
        Self::new(view, XAttribute::Leading, source)
    }

    pub fn trailing(view: ViewId, source: AnchorSource) -> Self {
        Self::new(view, XAttribute::Trailing, source)
    }

    pub fn center_x(view: ViewId, source: AnchorSource) -> Self {
        Self::new(view, XAttribute::CenterX, source)
    }
}

impl YAnchor {
    pub fn new(view: ViewId, attribute: YAttribute, source: AnchorSource) -> Self {
        Self {
            view,
            attribute,
            source,
        }
    }

    pub fn top(view: ViewId, source: AnchorSource) -> Self {
        Self::new(view, YAttribute::Top, source)
    }

    pub fn bottom(view: ViewId, source: AnchorSource) -> Self {
        Self::new(view, YAttribute::Bottom, source)
    }

    pub fn center_y(view: ViewId, source: AnchorSource) -> Self {
        Self::new(view, YAttribute::CenterY, source)
    }
}

impl DimensionAnchor {
    pub fn new(view: ViewId, dimension: Dimension) -> Self {
        Self { view, dimension }
    }

    pub fn width(view: ViewId) -> Self {
        Self::new(view, Dimension::Width)
    }

    pub fn height(view: ViewId) -> Self {
        Self::new(view, Dimension::Height)
    }
}

/// The horizontal edge anchor for `left` or `right`.
///
/// # Panics
///
/// Panics when given `top` or `bottom`. Callers only ever pass horizontal
/// sides here; a vertical side means the calling code is wrong.
pub fn horizontal_anchor(view: ViewId, direction: SideDirection, source: AnchorSource) -> XAnchor {
    match direction {
        SideDirection::Left => XAnchor::leading(view, source),
        SideDirection::Right => XAnchor::trailing(view, source),
        SideDirection::Top | SideDirection::Bottom => {
            panic!("side '{}' has no horizontal anchor", direction.name())
        }
    }
}

/// The vertical edge anchor for `top` or `bottom`.
///
/// # Panics
///
/// Panics when given `left` or `right`.
pub fn vertical_anchor(view: ViewId, direction: SideDirection, source: AnchorSource) -> YAnchor {
    match direction {
        SideDirection::Top => YAnchor::top(view, source),
        SideDirection::Bottom => YAnchor::bottom(view, source),
        SideDirection::Left | SideDirection::Right => {
            panic!("side '{}' has no vertical anchor", direction.name())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_horizontal_anchor_mapping() {
        let view = ViewId(3);
        assert_eq!(
            horizontal_anchor(view, SideDirection::Left, AnchorSource::Bounds),
            XAnchor::leading(view, AnchorSource::Bounds)
        );
        assert_eq!(
            horizontal_anchor(view, SideDirection::Right, AnchorSource::SafeArea),
            XAnchor::trailing(view, AnchorSource::SafeArea)
        );
    }

    #[test]
    fn test_vertical_anchor_mapping() {
        let view = ViewId(1);
        assert_eq!(
            vertical_anchor(view, SideDirection::Top, AnchorSource::Bounds),
            YAnchor::top(view, AnchorSource::Bounds)
        );
        assert_eq!(
            vertical_anchor(view, SideDirection::Bottom, AnchorSource::Bounds),
            YAnchor::bottom(view, AnchorSource::Bounds)
        );
    }

    #[test]
    #[should_panic(expected = "no horizontal anchor")]
    fn test_horizontal_anchor_rejects_vertical_side() {
        horizontal_anchor(ViewId(0), SideDirection::Top, AnchorSource::Bounds);
    }

    #[test]
    #[should_panic(expected = "no vertical anchor")]
    fn test_vertical_anchor_rejects_horizontal_side() {
        vertical_anchor(ViewId(0), SideDirection::Right, AnchorSource::Bounds);
    }
}
