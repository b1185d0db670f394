//! Constraint solver integration for layout passes
//!
//! This module provides a wrapper around the kasuari Cassowary constraint solver,
//! translating anchor relations into the solver's format and extracting frames.

use std::collections::HashMap;

use kasuari::{
    Expression, Solver as KasuariSolver, Strength, Variable as KasuariVariable,
    WeightedRelation::*,
};
use thiserror::Error;

use super::anchor::{
    AnchorSource, Dimension, DimensionAnchor, XAnchor, XAttribute, YAnchor, YAttribute,
};
use super::relation::Relation;
use super::side::EdgeInsets;
use super::types::{Rect, ViewId};

/// Base properties of a view; every anchor is an expression over these
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LayoutProperty {
    X,
    Y,
    Width,
    Height,
}

/// A variable in the constraint system
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct LayoutVariable {
    pub view: ViewId,
    pub property: LayoutProperty,
}

impl LayoutVariable {
    pub fn new(view: ViewId, property: LayoutProperty) -> Self {
        Self { view, property }
    }
}

/// Errors from the constraint solver
#[derive(Debug, Error)]
pub enum SolverError {
    #[error("unsatisfiable relation '{relation}': {reason}")]
    Unsatisfiable { relation: String, reason: String },

    #[error("internal solver error: {0}")]
    Internal(String),
}

/// Wrapper around kasuari solver
pub struct ConstraintSolver {
    solver: KasuariSolver,
    /// Maps our variables to kasuari variables
    variables: HashMap<LayoutVariable, KasuariVariable>,
    /// Safe-area insets per view; views without an entry have none
    safe_areas: HashMap<ViewId, EdgeInsets>,
}

impl ConstraintSolver {
    pub fn new() -> Self {
        Self {
            solver: KasuariSolver::new(),
            variables: HashMap::new(),
            safe_areas: HashMap::new(),
        }
    }

    /// Record the safe-area insets that `SafeArea` anchors on `view` read
    pub fn set_safe_area(&mut self, view: ViewId, insets: EdgeInsets) {
        self.safe_areas.insert(view, insets);
    }

    fn safe_area(&self, view: ViewId, source: AnchorSource) -> EdgeInsets {
        match source {
            AnchorSource::Bounds => EdgeInsets::ZERO,
            AnchorSource::SafeArea => self.safe_areas.get(&view).copied().unwrap_or_default(),
        }
    }

    /// Get or create a kasuari variable for a base property
    fn var(&mut self, view: ViewId, property: LayoutProperty) -> KasuariVariable {
        *self
            .variables
            .entry(LayoutVariable::new(view, property))
            .or_insert_with(KasuariVariable::new)
    }

    fn x_expression(&mut self, anchor: &XAnchor) -> Expression {
        let insets = self.safe_area(anchor.view, anchor.source);
        let x = self.var(anchor.view, LayoutProperty::X);
        let width = self.var(anchor.view, LayoutProperty::Width);
        match anchor.attribute {
            XAttribute::Leading => Expression::from(x) + insets.left,
            // trailing = x + width - inset
            XAttribute::Trailing => x + width - insets.right,
            // center_x = x + width / 2, shifted to the middle of the safe area
            XAttribute::CenterX => x + width * 0.5 + (insets.left - insets.right) * 0.5,
        }
    }

    fn y_expression(&mut self, anchor: &YAnchor) -> Expression {
        let insets = self.safe_area(anchor.view, anchor.source);
        let y = self.var(anchor.view, LayoutProperty::Y);
        let height = self.var(anchor.view, LayoutProperty::Height);
        match anchor.attribute {
            YAttribute::Top => Expression::from(y) + insets.top,
            YAttribute::Bottom => y + height - insets.bottom,
            YAttribute::CenterY => y + height * 0.5 + (insets.top - insets.bottom) * 0.5,
        }
    }

    fn dimension_expression(&mut self, anchor: &DimensionAnchor) -> Expression {
        let property = match anchor.dimension {
            Dimension::Width => LayoutProperty::Width,
            Dimension::Height => LayoutProperty::Height,
        };
        self.var(anchor.view, property).into()
    }
}

impl Default for ConstraintSolver {
    fn default() -> Self {
        Self::new()
    }
}

impl ConstraintSolver {
    /// Convert a kasuari error to a SolverError with context
    fn convert_kasuari_error(e: kasuari::AddConstraintError, description: &str) -> SolverError {
        match e {
            kasuari::AddConstraintError::UnsatisfiableConstraint => SolverError::Unsatisfiable {
                relation: description.to_string(),
                reason: "conflicts with previously activated relations".to_string(),
            },
            kasuari::AddConstraintError::DuplicateConstraint => {
                SolverError::Internal(format!("duplicate relation: {}", description))
            }
            kasuari::AddConstraintError::InternalSolverError(msg) => {
                SolverError::Internal(format!("{} while adding {}", msg, description))
            }
        }
    }

    /// Pin a view's frame to fixed values
    pub fn fix_frame(&mut self, view: ViewId, frame: Rect) -> Result<(), SolverError> {
        let fixed = [
            (LayoutProperty::X, frame.x),
            (LayoutProperty::Y, frame.y),
            (LayoutProperty::Width, frame.width),
            (LayoutProperty::Height, frame.height),
        ];
        for (property, value) in fixed {
            let var = self.var(view, property);
            let description = format!("{}.{:?} = {}", view, property, value);
            self.solver
                .add_constraint(var | EQ(Strength::REQUIRED) | value)
                .map_err(|e| Self::convert_kasuari_error(e, &description))?;
        }
        Ok(())
    }

    /// Add a relation as a required constraint; `description` names it in errors
    pub fn add_relation(&mut self, relation: &Relation, description: &str) -> Result<(), SolverError> {
        let constraint = match relation {
            Relation::EqualX {
                item,
                target,
                constant,
            } => {
                let item = self.x_expression(item);
                let target = self.x_expression(target);
                item | EQ(Strength::REQUIRED) | target + *constant
            }
            Relation::EqualY {
                item,
                target,
                constant,
            } => {
                let item = self.y_expression(item);
                let target = self.y_expression(target);
                item | EQ(Strength::REQUIRED) | target + *constant
            }
            Relation::EqualDimension {
                item,
                target,
                constant,
            } => {
                let item = self.dimension_expression(item);
                let target = self.dimension_expression(target);
                item | EQ(Strength::REQUIRED) | target + *constant
            }
            Relation::FixedDimension { item, value } => {
                let item = self.dimension_expression(item);
                item | EQ(Strength::REQUIRED) | *value
            }
            Relation::Proportional {
                item,
                target,
                multiplier,
            } => {
                let item = self.dimension_expression(item);
                let target = self.dimension_expression(target);
                item | EQ(Strength::REQUIRED) | *multiplier * target
            }
        };
        self.solver
            .add_constraint(constraint)
            .map_err(|e| Self::convert_kasuari_error(e, description))
    }
}

/// Solution from the constraint solver
pub struct Solution {
    pub values: HashMap<LayoutVariable, f64>,
}

impl Solution {
    /// Value of a variable; variables the solver never moved are zero
    pub fn get(&self, view: ViewId, property: LayoutProperty) -> f64 {
        self.values
            .get(&LayoutVariable::new(view, property))
            .copied()
            .unwrap_or(0.0)
    }

    pub fn frame(&self, view: ViewId) -> Rect {
        Rect::new(
            self.get(view, LayoutProperty::X),
            self.get(view, LayoutProperty::Y),
            self.get(view, LayoutProperty::Width),
            self.get(view, LayoutProperty::Height),
        )
    }
}

impl ConstraintSolver {
    /// Solve the constraint system
    pub fn solve(&mut self) -> Solution {
        let by_kasuari: HashMap<KasuariVariable, LayoutVariable> = self
            .variables
            .iter()
            .map(|(ours, theirs)| (*theirs, *ours))
            .collect();

        let mut values = HashMap::new();
        for (kvar, value) in self.solver.fetch_changes() {
            if let Some(ours) = by_kasuari.get(kvar) {
                values.insert(*ours, *value);
            }
        }

        Solution { values }
    }
}
