//! anchor-pin - relative positioning over a constraint solver
//!
//! Position a view against its container or any other view in one line
//! instead of building and activating each linear relation by hand.
//!
//! # Example
//!
//! ```rust
//! use anchor_pin::layout::{EdgeInsets, LayoutConfig, Scene};
//!
//! let config = LayoutConfig::default()
//!     .with_canvas(400.0, 800.0)
//!     .with_safe_area(EdgeInsets::new(40.0, 0.0, 20.0, 0.0));
//! let mut scene = Scene::new(config);
//! let content = scene.add_view("content", scene.root()).unwrap();
//!
//! scene.pin(content).safe_area(|pin| {
//!     pin.pin_all(0.0);
//! });
//!
//! let frames = scene.solve().unwrap();
//! let frame = frames.frame(content).unwrap();
//! assert_eq!((frame.y, frame.height), (40.0, 740.0));
//! ```

pub mod document;
pub mod error;
pub mod layout;

pub use document::Document;
pub use error::DocumentError;
pub use layout::{Frames, LayoutConfig, LayoutError, Pin, Scene};

use thiserror::Error;

/// Errors that can occur while solving a scene file
#[derive(Debug, Error)]
pub enum SceneError {
    /// Error while reading or parsing the file
    #[error(transparent)]
    Document(#[from] DocumentError),

    /// Error while building or solving the scene
    #[error("layout error: {0}")]
    Layout(#[from] LayoutError),
}

/// Parse a TOML scene, activate its rules and run one layout pass
///
/// # Example
///
/// ```rust
/// use anchor_pin::solve_document;
///
/// let (scene, frames) = solve_document(r#"
///     [canvas]
///     width = 200.0
///     height = 100.0
///
///     [[view]]
///     name = "badge"
///
///     [[rule]]
///     view = "badge"
///     ops = [
///         { op = "width", value = 40.0 },
///         { op = "aspect_ratio", coefficient = 2.0 },
///         { op = "center", x = 0.0, y = 0.0 },
///     ]
/// "#).unwrap();
///
/// let badge = frames.get("badge").unwrap();
/// assert_eq!(badge.height, 20.0);
/// assert_eq!(scene.relations().len(), 4);
/// ```
pub fn solve_document(source: &str) -> Result<(Scene, Frames), SceneError> {
    let document = Document::from_str(source)?;
    let scene = document.build()?;
    let frames = scene.solve()?;
    Ok((scene, frames))
}
