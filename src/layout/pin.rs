//! Fluent relation-construction API
//!
//! A [`Pin`] is bound to a host, a source view and an [`AnchorSource`]. Each
//! method resolves the target view, picks the anchors on both sides, builds
//! one relation per constrained attribute and activates it on the host.
//!
//! ```rust
//! use anchor_pin::layout::{EdgeInsets, LayoutConfig, Scene, Side};
//!
//! let mut scene = Scene::new(LayoutConfig::default().with_canvas(400.0, 800.0));
//! let card = scene.add_view("card", scene.root()).unwrap();
//! let title = scene.add_view("title", card).unwrap();
//! let body = scene.add_view("body", card).unwrap();
//!
//! scene.pin(card).pin_edges(EdgeInsets::uniform(16.0), None);
//! scene.pin(title).top(8.0, None).left(8.0, None).height(24.0).width(120.0);
//! scene
//!     .pin(body)
//!     .top_to(Side::Bottom(4.0), Some(title))
//!     .left(8.0, None)
//!     .right(8.0, None)
//!     .bottom(8.0, None);
//!
//! let frames = scene.solve().unwrap();
//! assert_eq!(frames.frame(body).unwrap().y, 16.0 + 8.0 + 24.0 + 4.0);
//! ```
//!
//! Insets always move inward from the named edge: they are added for `top`
//! and `left` and subtracted for `right` and `bottom`, whatever the entry point.

use super::anchor::{
    horizontal_anchor, vertical_anchor, AnchorSource, Dimension, DimensionAnchor, XAnchor,
    YAnchor,
};
use super::host::LayoutHost;
use super::relation::Relation;
use super::side::{EdgeInsets, Side, SideDirection};
use super::types::ViewId;

/// Builder that positions one view relative to others
pub struct Pin<'h, H: LayoutHost + ?Sized> {
    host: &'h mut H,
    view: ViewId,
    source: AnchorSource,
}

impl<'h, H: LayoutHost + ?Sized> Pin<'h, H> {
    /// Start configuring `view` with raw-bounds anchors
    pub fn new(host: &'h mut H, view: ViewId) -> Self {
        Self {
            host,
            view,
            source: AnchorSource::Bounds,
        }
    }

    /// The view being configured
    pub fn id(&self) -> ViewId {
        self.view
    }

    /// Whether edge anchors currently read raw bounds or the safe area
    pub fn anchor_source(&self) -> AnchorSource {
        self.source
    }

    /// A builder for another view on the same host, in the same mode
    pub fn view(&mut self, other: ViewId) -> Pin<'_, H> {
        Pin {
            host: &mut *self.host,
            view: other,
            source: self.source,
        }
    }

    /// Run `block` with every edge anchor resolved against safe areas.
    ///
    /// The mode lives on the builder handed to `block`, not on `self`, so it
    /// ends with the block however the block exits.
    pub fn safe_area(&mut self, block: impl FnOnce(&mut Pin<'_, H>)) -> &mut Self {
        let mut scoped = Pin {
            host: &mut *self.host,
            view: self.view,
            source: AnchorSource::SafeArea,
        };
        block(&mut scoped);
        self
    }

    /// Fallible form of [`safe_area`](Self::safe_area); the block's error is
    /// returned unchanged
    pub fn try_safe_area<E>(
        &mut self,
        block: impl FnOnce(&mut Pin<'_, H>) -> Result<(), E>,
    ) -> Result<&mut Self, E> {
        let mut scoped = Pin {
            host: &mut *self.host,
            view: self.view,
            source: AnchorSource::SafeArea,
        };
        block(&mut scoped)?;
        Ok(self)
    }

    // ------------------------------------------------------------------
    // Anchors of the configured view
    // ------------------------------------------------------------------

    pub fn top_anchor(&self) -> YAnchor {
        YAnchor::top(self.view, self.source)
    }

    pub fn bottom_anchor(&self) -> YAnchor {
        YAnchor::bottom(self.view, self.source)
    }

    pub fn leading_anchor(&self) -> XAnchor {
        XAnchor::leading(self.view, self.source)
    }

    pub fn trailing_anchor(&self) -> XAnchor {
        XAnchor::trailing(self.view, self.source)
    }

    pub fn center_x_anchor(&self) -> XAnchor {
        XAnchor::center_x(self.view, self.source)
    }

    pub fn center_y_anchor(&self) -> YAnchor {
        YAnchor::center_y(self.view, self.source)
    }

    pub fn width_anchor(&self) -> DimensionAnchor {
        DimensionAnchor::width(self.view)
    }

    pub fn height_anchor(&self) -> DimensionAnchor {
        DimensionAnchor::height(self.view)
    }

    // ------------------------------------------------------------------
    // Pin
    // ------------------------------------------------------------------

    /// Pin all four edges to `to` (the container when `None`)
    ///
    /// # Panics
    ///
    /// Panics when `to` is `None` and the view has no container.
    pub fn pin_edges(&mut self, insets: EdgeInsets, to: Option<ViewId>) -> &mut Self {
        self.pin_sides(
            &[
                Side::Top(insets.top),
                Side::Right(insets.right),
                Side::Left(insets.left),
                Side::Bottom(insets.bottom),
            ],
            to,
        )
    }

    /// Pin all four edges to the container with the same inset
    pub fn pin_all(&mut self, inset: f64) -> &mut Self {
        self.pin_edges(EdgeInsets::uniform(inset), None)
    }

    /// Pin every edge except `excluded`, which this call leaves unconstrained
    pub fn pin_excluding(
        &mut self,
        excluded: SideDirection,
        insets: EdgeInsets,
        to: Option<ViewId>,
    ) -> &mut Self {
        let sides: Vec<Side> = SideDirection::ALL
            .into_iter()
            .filter(|direction| *direction != excluded)
            .map(|direction| insets.side(direction))
            .collect();
        self.pin_sides(&sides, to)
    }

    /// Pin one edge to the same edge of `to`
    pub fn pin_direction(
        &mut self,
        direction: SideDirection,
        inset: f64,
        to: Option<ViewId>,
    ) -> &mut Self {
        self.pin_sides(&[direction.with_offset(inset)], to)
    }

    /// Pin several edges to the same edges of `to`, all with `inset`
    pub fn pin_directions(
        &mut self,
        directions: &[SideDirection],
        inset: f64,
        to: Option<ViewId>,
    ) -> &mut Self {
        let sides: Vec<Side> = directions
            .iter()
            .map(|direction| direction.with_offset(inset))
            .collect();
        self.pin_sides(&sides, to)
    }

    /// Pin each listed edge to the same edge of `to` with its own inset
    pub fn pin_sides(&mut self, sides: &[Side], to: Option<ViewId>) -> &mut Self {
        let target = self.target(to);
        for side in sides {
            self.bind(*side, target, side.direction());
        }
        self
    }

    /// Pin a single edge
    pub fn pin_side(&mut self, side: Side, to: Option<ViewId>) -> &mut Self {
        self.pin_sides(&[side], to)
    }

    /// Bind edges of this view to possibly different edges of `to`.
    ///
    /// Each pair is `(this view's side with inset, side of the target)`. The
    /// inset's sign follows the side of this view. When a side of this view
    /// appears more than once, the last pair wins.
    ///
    /// ```rust
    /// use anchor_pin::layout::{LayoutConfig, Scene, Side, SideDirection};
    ///
    /// let mut scene = Scene::new(LayoutConfig::default());
    /// let header = scene.add_view("header", scene.root()).unwrap();
    /// let label = scene.add_view("label", scene.root()).unwrap();
    ///
    /// // label.top = header.bottom + 7, label.left = header.left + 15,
    /// // label.right = header.right - 4
    /// scene.pin(label).pin_mapping(
    ///     &[
    ///         (Side::Top(7.0), SideDirection::Bottom),
    ///         (Side::Left(15.0), SideDirection::Left),
    ///         (Side::Right(4.0), SideDirection::Right),
    ///     ],
    ///     Some(header),
    /// );
    /// assert_eq!(scene.relations_of(label).count(), 3);
    /// ```
    ///
    /// # Panics
    ///
    /// Panics when a pair joins sides on different axes, e.g. `left` to `top`.
    pub fn pin_mapping(&mut self, pairs: &[(Side, SideDirection)], to: Option<ViewId>) -> &mut Self {
        let target = self.target(to);
        let mut resolved: Vec<(Side, SideDirection)> = Vec::with_capacity(pairs.len());
        for (side, direction) in pairs {
            if let Some(slot) = resolved
                .iter_mut()
                .find(|(existing, _)| existing.direction() == side.direction())
            {
                tracing::warn!(
                    view = self.host.view_name(self.view),
                    side = side.direction().name(),
                    "side mapped more than once; keeping the last mapping"
                );
                *slot = (*side, *direction);
            } else {
                resolved.push((*side, *direction));
            }
        }
        for (side, direction) in resolved {
            self.bind(side, target, direction);
        }
        self
    }

    // ------------------------------------------------------------------
    // Single edges
    // ------------------------------------------------------------------

    pub fn top(&mut self, inset: f64, to: Option<ViewId>) -> &mut Self {
        self.pin_side(Side::Top(inset), to)
    }

    pub fn left(&mut self, inset: f64, to: Option<ViewId>) -> &mut Self {
        self.pin_side(Side::Left(inset), to)
    }

    pub fn right(&mut self, inset: f64, to: Option<ViewId>) -> &mut Self {
        self.pin_side(Side::Right(inset), to)
    }

    pub fn bottom(&mut self, inset: f64, to: Option<ViewId>) -> &mut Self {
        self.pin_side(Side::Bottom(inset), to)
    }

    /// Bind this view's top to the vertical edge of `of` named by `side`,
    /// offset by `side`'s inset
    pub fn top_to(&mut self, side: Side, of: Option<ViewId>) -> &mut Self {
        self.align(SideDirection::Top, side, of)
    }

    /// Bind this view's left edge to the horizontal edge of `of` named by `side`
    pub fn left_to(&mut self, side: Side, of: Option<ViewId>) -> &mut Self {
        self.align(SideDirection::Left, side, of)
    }

    /// Bind this view's right edge to the horizontal edge of `of` named by
    /// `side`; the inset is subtracted
    pub fn right_to(&mut self, side: Side, of: Option<ViewId>) -> &mut Self {
        self.align(SideDirection::Right, side, of)
    }

    /// Bind this view's bottom to the vertical edge of `of` named by `side`;
    /// the inset is subtracted
    pub fn bottom_to(&mut self, side: Side, of: Option<ViewId>) -> &mut Self {
        self.align(SideDirection::Bottom, side, of)
    }

    // ------------------------------------------------------------------
    // Sizes
    // ------------------------------------------------------------------

    /// Fixed width
    pub fn width(&mut self, value: f64) -> &mut Self {
        let relation = self.width_anchor().equal_to_constant(value);
        self.activate(relation)
    }

    /// Fixed height
    pub fn height(&mut self, value: f64) -> &mut Self {
        let relation = self.height_anchor().equal_to_constant(value);
        self.activate(relation)
    }

    /// Width of `to` plus `offset`
    pub fn width_to(&mut self, offset: f64, to: Option<ViewId>) -> &mut Self {
        let target = self.target(to);
        let relation = self
            .width_anchor()
            .equal_to(DimensionAnchor::width(target), offset);
        self.activate(relation)
    }

    /// Height of `to` plus `offset`
    pub fn height_to(&mut self, offset: f64, to: Option<ViewId>) -> &mut Self {
        let target = self.target(to);
        let relation = self
            .height_anchor()
            .equal_to(DimensionAnchor::height(target), offset);
        self.activate(relation)
    }

    /// width = coefficient * height, on this view
    pub fn aspect_ratio(&mut self, coefficient: f64) -> &mut Self {
        let relation = self
            .width_anchor()
            .aspect_fit(self.height_anchor(), coefficient);
        self.activate(relation)
    }

    /// This view's `dimension` = coefficient * `to`
    pub fn aspect_fit(
        &mut self,
        dimension: Dimension,
        to: DimensionAnchor,
        coefficient: f64,
    ) -> &mut Self {
        let relation = DimensionAnchor::new(self.view, dimension).aspect_fit(to, coefficient);
        self.activate(relation)
    }

    // ------------------------------------------------------------------
    // Centering
    // ------------------------------------------------------------------

    pub fn center_x(&mut self, offset: f64, to: Option<ViewId>) -> &mut Self {
        let target = self.target(to);
        let relation = self
            .center_x_anchor()
            .equal_to(XAnchor::center_x(target, self.source), offset);
        self.activate(relation)
    }

    pub fn center_y(&mut self, offset: f64, to: Option<ViewId>) -> &mut Self {
        let target = self.target(to);
        let relation = self
            .center_y_anchor()
            .equal_to(YAnchor::center_y(target, self.source), offset);
        self.activate(relation)
    }

    /// Center on both axes with separate offsets
    pub fn center_with_insets(&mut self, x: f64, y: f64, to: Option<ViewId>) -> &mut Self {
        let target = self.target(to);
        self.center_y(y, Some(target)).center_x(x, Some(target))
    }

    // ------------------------------------------------------------------
    // Internals
    // ------------------------------------------------------------------

    /// Explicit target, else the container.
    ///
    /// # Panics
    ///
    /// Panics when there is neither.
    fn target(&self, to: Option<ViewId>) -> ViewId {
        if let Some(view) = to {
            return view;
        }
        match self.host.container_of(self.view) {
            Some(container) => container,
            None => panic!(
                "view '{}' has no container and no target view was given",
                self.host.view_name(self.view)
            ),
        }
    }

    /// this.side = target.direction +/- inset, sign keyed on this view's side
    fn bind(&mut self, side: Side, target: ViewId, direction: SideDirection) {
        let (from, inset) = side.decompose();
        let constant = from.signed(inset);
        let relation = if from.is_horizontal() {
            horizontal_anchor(self.view, from, self.source)
                .equal_to(horizontal_anchor(target, direction, self.source), constant)
        } else {
            vertical_anchor(self.view, from, self.source)
                .equal_to(vertical_anchor(target, direction, self.source), constant)
        };
        self.activate(relation);
    }

    fn align(&mut self, edge: SideDirection, side: Side, of: Option<ViewId>) -> &mut Self {
        let target = self.target(of);
        let (direction, inset) = side.decompose();
        self.bind(edge.with_offset(inset), target, direction);
        self
    }

    fn activate(&mut self, relation: Relation) -> &mut Self {
        tracing::debug!(relation = %relation.describe(&*self.host), "activating relation");
        self.host.activate(relation);
        self
    }
}
