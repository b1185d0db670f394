//! TOML scene files
//!
//! A scene file declares the root canvas, a list of views and a list of rules.
//! Each rule names a view and a sequence of operations that map one-to-one
//! onto [`Pin`] methods:
//!
//! ```toml
//! [canvas]
//! width = 390.0
//! height = 844.0
//! safe_area = { top = 47.0, bottom = 34.0 }
//!
//! [[view]]
//! name = "card"
//!
//! [[view]]
//! name = "title"
//! parent = "card"
//!
//! [[rule]]
//! view = "card"
//! safe_area = true
//! ops = [{ op = "pin_edges", insets = { top = 8.0, left = 16.0, bottom = 8.0, right = 16.0 } }]
//!
//! [[rule]]
//! view = "title"
//! ops = [
//!     { op = "top", inset = 12.0 },
//!     { op = "center_x" },
//!     { op = "height", value = 24.0 },
//!     { op = "width_to", offset = -32.0 },
//! ]
//! ```

use std::path::Path;

use serde::Deserialize;

use crate::error::DocumentError;
use crate::layout::{
    Dimension, DimensionAnchor, EdgeInsets, LayoutConfig, LayoutError, LayoutHost, Pin, Scene,
    Side, SideDirection, ViewId,
};

/// A parsed scene file
#[derive(Debug, Clone, Deserialize)]
pub struct Document {
    #[serde(default)]
    pub canvas: LayoutConfig,
    #[serde(default, rename = "view")]
    pub views: Vec<ViewDecl>,
    #[serde(default, rename = "rule")]
    pub rules: Vec<Rule>,
}

/// A view declaration; views without a parent live in the root view
#[derive(Debug, Clone, Deserialize)]
pub struct ViewDecl {
    pub name: String,
    pub parent: Option<String>,
    pub safe_area: Option<EdgeInsets>,
}

/// Operations applied, in order, to one view
#[derive(Debug, Clone, Deserialize)]
pub struct Rule {
    pub view: String,
    /// Resolve edge anchors against safe areas for every operation of the rule
    #[serde(default)]
    pub safe_area: bool,
    pub ops: Vec<Op>,
}

/// One entry of a side-to-side mapping
#[derive(Debug, Clone, Copy, Deserialize)]
pub struct MappingPair {
    pub from: Side,
    pub to: SideDirection,
}

/// A positioning operation. Target names default to the container.
#[derive(Debug, Clone, Deserialize)]
#[serde(tag = "op", rename_all = "snake_case")]
pub enum Op {
    PinEdges {
        #[serde(default)]
        insets: EdgeInsets,
        to: Option<String>,
    },
    PinAll {
        #[serde(default)]
        inset: f64,
    },
    PinExcluding {
        side: SideDirection,
        #[serde(default)]
        insets: EdgeInsets,
        to: Option<String>,
    },
    PinSides {
        sides: Vec<Side>,
        to: Option<String>,
    },
    PinDirections {
        directions: Vec<SideDirection>,
        #[serde(default)]
        inset: f64,
        to: Option<String>,
    },
    PinMapping {
        pairs: Vec<MappingPair>,
        to: Option<String>,
    },
    Top {
        #[serde(default)]
        inset: f64,
        to: Option<String>,
    },
    Left {
        #[serde(default)]
        inset: f64,
        to: Option<String>,
    },
    Right {
        #[serde(default)]
        inset: f64,
        to: Option<String>,
    },
    Bottom {
        #[serde(default)]
        inset: f64,
        to: Option<String>,
    },
    TopTo {
        side: Side,
        of: Option<String>,
    },
    LeftTo {
        side: Side,
        of: Option<String>,
    },
    RightTo {
        side: Side,
        of: Option<String>,
    },
    BottomTo {
        side: Side,
        of: Option<String>,
    },
    Width {
        value: f64,
    },
    Height {
        value: f64,
    },
    WidthTo {
        #[serde(default)]
        offset: f64,
        to: Option<String>,
    },
    HeightTo {
        #[serde(default)]
        offset: f64,
        to: Option<String>,
    },
    CenterX {
        #[serde(default)]
        offset: f64,
        to: Option<String>,
    },
    CenterY {
        #[serde(default)]
        offset: f64,
        to: Option<String>,
    },
    Center {
        #[serde(default)]
        x: f64,
        #[serde(default)]
        y: f64,
        to: Option<String>,
    },
    AspectRatio {
        coefficient: f64,
    },
    /// `dimension` = coefficient * `to_dimension` of `of` (this view when absent)
    AspectFit {
        dimension: Dimension,
        to_dimension: Dimension,
        of: Option<String>,
        coefficient: f64,
    },
}

impl Op {
    /// Name of the other view this operation refers to, if any
    pub fn target(&self) -> Option<&str> {
        match self {
            Op::PinEdges { to, .. }
            | Op::PinExcluding { to, .. }
            | Op::PinSides { to, .. }
            | Op::PinDirections { to, .. }
            | Op::PinMapping { to, .. }
            | Op::Top { to, .. }
            | Op::Left { to, .. }
            | Op::Right { to, .. }
            | Op::Bottom { to, .. }
            | Op::WidthTo { to, .. }
            | Op::HeightTo { to, .. }
            | Op::CenterX { to, .. }
            | Op::CenterY { to, .. }
            | Op::Center { to, .. } => to.as_deref(),
            Op::TopTo { of, .. }
            | Op::LeftTo { of, .. }
            | Op::RightTo { of, .. }
            | Op::BottomTo { of, .. }
            | Op::AspectFit { of, .. } => of.as_deref(),
            Op::PinAll { .. } | Op::Width { .. } | Op::Height { .. } | Op::AspectRatio { .. } => {
                None
            }
        }
    }

    /// Whether the operation falls back to the container when no target is named
    pub fn needs_container(&self) -> bool {
        !matches!(
            self,
            Op::Width { .. } | Op::Height { .. } | Op::AspectRatio { .. } | Op::AspectFit { .. }
        )
    }

    /// Reject operations that would join anchors on different axes
    pub fn validate(&self) -> Result<(), String> {
        match self {
            Op::TopTo { side, .. } | Op::BottomTo { side, .. } if side.direction().is_horizontal() => {
                Err(format!(
                    "a vertical edge cannot follow the '{}' side",
                    side.direction().name()
                ))
            }
            Op::LeftTo { side, .. } | Op::RightTo { side, .. } if side.direction().is_vertical() => {
                Err(format!(
                    "a horizontal edge cannot follow the '{}' side",
                    side.direction().name()
                ))
            }
            Op::PinMapping { pairs, .. } => {
                for pair in pairs {
                    if pair.from.direction().is_horizontal() != pair.to.is_horizontal() {
                        return Err(format!(
                            "cannot map '{}' onto '{}'",
                            pair.from.direction().name(),
                            pair.to.name()
                        ));
                    }
                }
                Ok(())
            }
            _ => Ok(()),
        }
    }

    /// Apply the operation through `pin`; `target` is the resolved [`target`](Self::target)
    pub fn apply<H: LayoutHost + ?Sized>(&self, pin: &mut Pin<'_, H>, target: Option<ViewId>) {
        match self {
            Op::PinEdges { insets, .. } => {
                pin.pin_edges(*insets, target);
            }
            Op::PinAll { inset } => {
                pin.pin_all(*inset);
            }
            Op::PinExcluding { side, insets, .. } => {
                pin.pin_excluding(*side, *insets, target);
            }
            Op::PinSides { sides, .. } => {
                pin.pin_sides(sides, target);
            }
            Op::PinDirections {
                directions, inset, ..
            } => {
                pin.pin_directions(directions, *inset, target);
            }
            Op::PinMapping { pairs, .. } => {
                let pairs: Vec<(Side, SideDirection)> =
                    pairs.iter().map(|pair| (pair.from, pair.to)).collect();
                pin.pin_mapping(&pairs, target);
            }
            Op::Top { inset, .. } => {
                pin.top(*inset, target);
            }
            Op::Left { inset, .. } => {
                pin.left(*inset, target);
            }
            Op::Right { inset, .. } => {
                pin.right(*inset, target);
            }
            Op::Bottom { inset, .. } => {
                pin.bottom(*inset, target);
            }
            Op::TopTo { side, .. } => {
                pin.top_to(*side, target);
            }
            Op::LeftTo { side, .. } => {
                pin.left_to(*side, target);
            }
            Op::RightTo { side, .. } => {
                pin.right_to(*side, target);
            }
            Op::BottomTo { side, .. } => {
                pin.bottom_to(*side, target);
            }
            Op::Width { value } => {
                pin.width(*value);
            }
            Op::Height { value } => {
                pin.height(*value);
            }
            Op::WidthTo { offset, .. } => {
                pin.width_to(*offset, target);
            }
            Op::HeightTo { offset, .. } => {
                pin.height_to(*offset, target);
            }
            Op::CenterX { offset, .. } => {
                pin.center_x(*offset, target);
            }
            Op::CenterY { offset, .. } => {
                pin.center_y(*offset, target);
            }
            Op::Center { x, y, .. } => {
                pin.center_with_insets(*x, *y, target);
            }
            Op::AspectRatio { coefficient } => {
                pin.aspect_ratio(*coefficient);
            }
            Op::AspectFit {
                dimension,
                to_dimension,
                coefficient,
                ..
            } => {
                let other = DimensionAnchor::new(target.unwrap_or(pin.id()), *to_dimension);
                pin.aspect_fit(*dimension, other, *coefficient);
            }
        }
    }
}

impl Document {
    /// Parse a scene from TOML source
    pub fn from_str(source: &str) -> Result<Self, DocumentError> {
        Ok(toml::from_str(source)?)
    }

    /// Load a scene from a TOML file
    pub fn from_file(path: &Path) -> Result<Self, DocumentError> {
        let content = std::fs::read_to_string(path)?;
        Self::from_str(&content)
    }

    /// Create the views and activate every rule
    pub fn build(&self) -> Result<Scene, LayoutError> {
        let mut scene = Scene::new(self.canvas.clone());

        for decl in &self.views {
            let parent = match &decl.parent {
                Some(name) => scene.view(name)?,
                None => scene.root(),
            };
            let id = scene.add_view(&decl.name, parent)?;
            if let Some(insets) = decl.safe_area {
                scene.set_safe_area(id, insets);
            }
        }

        for rule in &self.rules {
            apply_rule(&mut scene, rule)?;
        }

        tracing::debug!(
            views = self.views.len(),
            relations = scene.relations().len(),
            "scene built"
        );
        Ok(scene)
    }
}

fn apply_rule(scene: &mut Scene, rule: &Rule) -> Result<(), LayoutError> {
    let view = scene.view(&rule.view)?;

    for op in &rule.ops {
        op.validate()
            .map_err(|reason| LayoutError::invalid_rule(&rule.view, reason))?;

        let target = op.target().map(|name| scene.view(name)).transpose()?;
        if target.is_none() && op.needs_container() && scene.parent(view).is_none() {
            return Err(LayoutError::no_container(&rule.view));
        }

        let mut pin = scene.pin(view);
        if rule.safe_area {
            pin.safe_area(|scoped| op.apply(scoped, target));
        } else {
            op.apply(&mut pin, target);
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::layout::{AnchorSource, Relation};

    #[test]
    fn test_parse_ops() {
        let doc = Document::from_str(
            r#"
[[view]]
name = "label"

[[rule]]
view = "label"
ops = [
    { op = "pin_mapping", pairs = [{ from = { top = 7.0 }, to = "bottom" }] },
    { op = "left_to", side = { right = 15.0 } },
    { op = "width", value = 20.0 },
    { op = "aspect_fit", dimension = "height", to_dimension = "width", coefficient = 0.5 },
]
"#,
        )
        .unwrap();

        let ops = &doc.rules[0].ops;
        assert_eq!(ops.len(), 4);
        assert!(matches!(&ops[0], Op::PinMapping { pairs, to: None } if pairs.len() == 1));
        assert!(matches!(ops[1], Op::LeftTo { side: Side::Right(inset), of: None } if inset == 15.0));
        assert!(matches!(ops[2], Op::Width { value } if value == 20.0));
        assert!(matches!(
            ops[3],
            Op::AspectFit {
                dimension: Dimension::Height,
                to_dimension: Dimension::Width,
                ..
            }
        ));
    }

    #[test]
    fn test_build_applies_rules_in_safe_area() {
        let doc = Document::from_str(
            r#"
[canvas]
safe_area = { top = 47.0 }

[[view]]
name = "card"

[[rule]]
view = "card"
safe_area = true
ops = [{ op = "top" }]
"#,
        )
        .unwrap();

        let scene = doc.build().unwrap();
        let card = scene.view("card").unwrap();
        assert_eq!(scene.relations().len(), 1);
        assert!(matches!(
            scene.relations()[0],
            Relation::EqualY { item, target, .. }
                if item.view == card
                    && item.source == AnchorSource::SafeArea
                    && target.view == scene.root()
        ));
    }

    #[test]
    fn test_unknown_parent() {
        let doc = Document::from_str("[[view]]\nname = \"a\"\nparent = \"ghost\"").unwrap();
        let err = doc.build().unwrap_err();
        assert!(matches!(err, LayoutError::UnknownView { name, .. } if name == "ghost"));
    }

    #[test]
    fn test_cross_axis_rule_rejected() {
        let doc = Document::from_str(
            r#"
[[view]]
name = "a"

[[rule]]
view = "a"
ops = [{ op = "top_to", side = { left = 0.0 } }]
"#,
        )
        .unwrap();

        let err = doc.build().unwrap_err();
        assert!(matches!(err, LayoutError::InvalidRule { .. }));
        assert!(err.to_string().contains("'left'"));
    }

    #[test]
    fn test_rule_on_root_needs_target() {
        let doc = Document::from_str(
            r#"
[[rule]]
view = "root"
ops = [{ op = "center_x" }]
"#,
        )
        .unwrap();

        let err = doc.build().unwrap_err();
        assert!(matches!(err, LayoutError::NoContainer { view } if view == "root"));
    }

    #[test]
    fn test_parse_error_carries_span() {
        let err = Document::from_str("[canvas\nwidth = 1.0").unwrap_err();
        assert!(matches!(err, DocumentError::Parse { span: Some(_), .. }));
    }
}
