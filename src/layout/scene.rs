//! Reference host: a small view tree solved with kasuari
//!
//! A [`Scene`] owns named views, their parent links and safe-area insets, and
//! the list of active relations. Every call to [`Scene::solve`] is a fresh
//! layout pass over everything that is currently active.

use std::fmt;

use super::config::LayoutConfig;
use super::error::LayoutError;
use super::host::LayoutHost;
use super::pin::Pin;
use super::relation::Relation;
use super::side::EdgeInsets;
use super::solver::ConstraintSolver;
use super::types::{Rect, ViewId};

#[derive(Debug, Clone)]
struct ViewNode {
    name: String,
    parent: Option<ViewId>,
    children: Vec<ViewId>,
    safe_area: EdgeInsets,
}

/// A view tree plus its active relations
#[derive(Debug, Clone)]
pub struct Scene {
    config: LayoutConfig,
    views: Vec<ViewNode>,
    relations: Vec<Relation>,
}

impl Scene {
    /// Create a scene holding only the root view described by `config`
    pub fn new(config: LayoutConfig) -> Self {
        let root = ViewNode {
            name: config.root_name.clone(),
            parent: None,
            children: Vec::new(),
            safe_area: config.safe_area,
        };
        Self {
            config,
            views: vec![root],
            relations: Vec::new(),
        }
    }

    pub fn config(&self) -> &LayoutConfig {
        &self.config
    }

    pub fn root(&self) -> ViewId {
        ViewId(0)
    }

    /// Add a view inside `parent`
    pub fn add_view(&mut self, name: impl Into<String>, parent: ViewId) -> Result<ViewId, LayoutError> {
        let id = self.insert(name.into(), Some(parent))?;
        self.views[parent.0].children.push(id);
        Ok(id)
    }

    /// Add a view that is not attached to the tree
    pub fn add_detached_view(&mut self, name: impl Into<String>) -> Result<ViewId, LayoutError> {
        self.insert(name.into(), None)
    }

    fn insert(&mut self, name: String, parent: Option<ViewId>) -> Result<ViewId, LayoutError> {
        if self.views.iter().any(|view| view.name == name) {
            return Err(LayoutError::duplicate(name));
        }
        self.views.push(ViewNode {
            name,
            parent,
            children: Vec::new(),
            safe_area: EdgeInsets::ZERO,
        });
        Ok(ViewId(self.views.len() - 1))
    }

    pub fn set_safe_area(&mut self, view: ViewId, insets: EdgeInsets) {
        self.views[view.0].safe_area = insets;
    }

    pub fn safe_area(&self, view: ViewId) -> EdgeInsets {
        self.views[view.0].safe_area
    }

    /// Look a view up by name
    pub fn view(&self, name: &str) -> Result<ViewId, LayoutError> {
        self.views
            .iter()
            .position(|view| view.name == name)
            .map(ViewId)
            .ok_or_else(|| {
                let suggestions = find_similar(self.views.iter().map(|v| v.name.as_str()), name, 2);
                LayoutError::unknown(name, suggestions)
            })
    }

    pub fn name(&self, view: ViewId) -> &str {
        &self.views[view.0].name
    }

    pub fn parent(&self, view: ViewId) -> Option<ViewId> {
        self.views[view.0].parent
    }

    pub fn children(&self, view: ViewId) -> &[ViewId] {
        &self.views[view.0].children
    }

    /// All views in creation order, root first
    pub fn views(&self) -> impl Iterator<Item = ViewId> {
        (0..self.views.len()).map(ViewId)
    }

    pub fn relations(&self) -> &[Relation] {
        &self.relations
    }

    /// Active relations that position `view`
    pub fn relations_of(&self, view: ViewId) -> impl Iterator<Item = &Relation> {
        self.relations.iter().filter(move |r| r.view() == view)
    }

    /// Drop every relation that positions `view`; returns how many were removed
    pub fn deactivate_relations_of(&mut self, view: ViewId) -> usize {
        let before = self.relations.len();
        self.relations.retain(|r| r.view() != view);
        before - self.relations.len()
    }

    /// Start positioning `view`
    pub fn pin(&mut self, view: ViewId) -> Pin<'_, Self> {
        Pin::new(self, view)
    }

    /// Position `view` with safe-area anchors for the duration of `block`
    pub fn safe_area_scope(&mut self, view: ViewId, block: impl FnOnce(&mut Pin<'_, Self>)) {
        self.pin(view).safe_area(block);
    }

    /// Run one layout pass over the active relations
    #[tracing::instrument(skip(self), fields(views = self.views.len(), relations = self.relations.len()))]
    pub fn solve(&self) -> Result<Frames, LayoutError> {
        let mut solver = ConstraintSolver::new();
        for (index, view) in self.views.iter().enumerate() {
            if !view.safe_area.is_zero() {
                solver.set_safe_area(ViewId(index), view.safe_area);
            }
        }

        let canvas = Rect::new(0.0, 0.0, self.config.width, self.config.height);
        solver.fix_frame(self.root(), canvas)?;

        for relation in &self.relations {
            solver.add_relation(relation, &relation.describe(self))?;
        }

        let solution = solver.solve();
        let frames = self
            .views()
            .map(|id| (self.name(id).to_string(), solution.frame(id)))
            .collect();
        tracing::debug!("layout pass complete");
        Ok(Frames { frames })
    }
}

impl Default for Scene {
    fn default() -> Self {
        Self::new(LayoutConfig::default())
    }
}

impl LayoutHost for Scene {
    fn container_of(&self, view: ViewId) -> Option<ViewId> {
        self.parent(view)
    }

    fn view_name(&self, view: ViewId) -> &str {
        self.name(view)
    }

    fn activate(&mut self, relation: Relation) {
        self.relations.push(relation);
    }
}

/// Frames resolved by one layout pass, indexed by view
#[derive(Debug, Clone, PartialEq)]
pub struct Frames {
    frames: Vec<(String, Rect)>,
}

impl Frames {
    pub fn frame(&self, view: ViewId) -> Option<Rect> {
        self.frames.get(view.0).map(|(_, rect)| *rect)
    }

    /// Frame of the view called `name`
    pub fn get(&self, name: &str) -> Option<Rect> {
        self.frames
            .iter()
            .find(|(view, _)| view == name)
            .map(|(_, rect)| *rect)
    }

    /// Names and frames in view order
    pub fn iter(&self) -> impl Iterator<Item = (&str, Rect)> {
        self.frames.iter().map(|(name, rect)| (name.as_str(), *rect))
    }

    pub fn len(&self) -> usize {
        self.frames.len()
    }

    pub fn is_empty(&self) -> bool {
        self.frames.is_empty()
    }
}

impl fmt::Display for Frames {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (name, rect) in &self.frames {
            writeln!(f, "{} {}", name, rect)?;
        }
        Ok(())
    }
}

/// Compute Levenshtein edit distance between two strings
fn levenshtein_distance(a: &str, b: &str) -> usize {
    let a_chars: Vec<char> = a.chars().collect();
    let b_chars: Vec<char> = b.chars().collect();
    let m = a_chars.len();
    let n = b_chars.len();

    if m == 0 {
        return n;
    }
    if n == 0 {
        return m;
    }

    let mut previous: Vec<usize> = (0..=n).collect();
    let mut current = vec![0usize; n + 1];

    for i in 1..=m {
        current[0] = i;
        for j in 1..=n {
            let cost = usize::from(a_chars[i - 1] != b_chars[j - 1]);
            current[j] = (previous[j] + 1)
                .min(current[j - 1] + 1)
                .min(previous[j - 1] + cost);
        }
        std::mem::swap(&mut previous, &mut current);
    }

    previous[n]
}

/// Find similar names within a maximum edit distance
fn find_similar<'a>(
    names: impl Iterator<Item = &'a str>,
    target: &str,
    max_distance: usize,
) -> Vec<String> {
    let mut candidates: Vec<(&str, usize)> = names
        .filter_map(|name| {
            let dist = levenshtein_distance(name, target);
            (dist <= max_distance && dist > 0).then_some((name, dist))
        })
        .collect();

    candidates.sort_by_key(|(_, d)| *d);
    candidates
        .into_iter()
        .map(|(name, _)| name.to_string())
        .take(3)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_root_view() {
        let scene = Scene::new(LayoutConfig::default().with_root_name("window"));
        assert_eq!(scene.name(scene.root()), "window");
        assert_eq!(scene.parent(scene.root()), None);
    }

    #[test]
    fn test_add_view_links_parent() {
        let mut scene = Scene::default();
        let card = scene.add_view("card", scene.root()).unwrap();
        assert_eq!(scene.parent(card), Some(scene.root()));
        assert_eq!(scene.children(scene.root()), &[card]);
        assert_eq!(scene.view("card").unwrap(), card);
    }

    #[test]
    fn test_duplicate_view_rejected() {
        let mut scene = Scene::default();
        scene.add_view("card", scene.root()).unwrap();
        let err = scene.add_detached_view("card").unwrap_err();
        assert!(matches!(err, LayoutError::DuplicateView { .. }));
    }

    #[test]
    fn test_unknown_view_suggests() {
        let mut scene = Scene::default();
        scene.add_view("header", scene.root()).unwrap();
        let err = scene.view("hedaer").unwrap_err();
        assert_eq!(err.suggestions(), Some(&["header".to_string()][..]));
    }

    #[test]
    fn test_deactivate_relations_of() {
        let mut scene = Scene::default();
        let card = scene.add_view("card", scene.root()).unwrap();
        let other = scene.add_view("other", scene.root()).unwrap();
        scene.pin(card).pin_all(0.0);
        scene.pin(other).width(10.0);

        assert_eq!(scene.deactivate_relations_of(card), 4);
        assert_eq!(scene.relations().len(), 1);
        assert_eq!(scene.relations_of(other).count(), 1);
    }

    #[test]
    fn test_frames_display() {
        let mut scene = Scene::new(LayoutConfig::default().with_canvas(100.0, 50.0));
        let card = scene.add_view("card", scene.root()).unwrap();
        scene.pin(card).pin_all(10.0);

        let frames = scene.solve().unwrap();
        insta::assert_snapshot!(frames.to_string().trim_end(), @r"
        root x=0.0 y=0.0 w=100.0 h=50.0
        card x=10.0 y=10.0 w=80.0 h=30.0
        ");
    }

    #[test]
    fn test_levenshtein() {
        assert_eq!(levenshtein_distance("hello", "hello"), 0);
        assert_eq!(levenshtein_distance("server", "servr"), 1);
        assert_eq!(levenshtein_distance("cat", "dog"), 3);
        assert_eq!(levenshtein_distance("", "abc"), 3);
    }
}
