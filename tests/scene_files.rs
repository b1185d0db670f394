//! End-to-end tests for TOML scene files.

use anchor_pin::{layout::LayoutError, solve_document, Document, DocumentError, SceneError};
use pretty_assertions::assert_eq;

const PROFILE_CARD: &str = include_str!("fixtures/profile_card.toml");

#[test]
fn profile_card_frames() {
    let (_, frames) = solve_document(PROFILE_CARD).unwrap();

    insta::assert_snapshot!(frames.to_string().trim_end(), @r"
    root x=0.0 y=0.0 w=390.0 h=844.0
    card x=16.0 y=55.0 w=358.0 h=200.0
    avatar x=32.0 y=71.0 w=64.0 h=64.0
    name x=108.0 y=71.0 w=250.0 h=24.0
    bio x=32.0 y=147.0 w=326.0 h=92.0
    ");
}

#[test]
fn profile_card_relations() {
    let (scene, _) = solve_document(PROFILE_CARD).unwrap();
    let card = scene.view("card").unwrap();
    let bio = scene.view("bio").unwrap();

    let describe = |view| {
        scene
            .relations_of(view)
            .map(|relation| relation.describe(&scene))
            .collect::<Vec<_>>()
    };

    assert_eq!(
        describe(card),
        vec![
            "card.safe.top = root.safe.top + 8",
            "card.safe.leading = root.safe.leading + 16",
            "card.safe.trailing = root.safe.trailing - 16",
            "card.height = 200",
        ]
    );
    assert_eq!(
        describe(bio),
        vec![
            "bio.top = avatar.bottom + 12",
            "bio.leading = avatar.leading",
            "bio.trailing = card.trailing - 16",
            "bio.bottom = card.bottom - 16",
        ]
    );
}

#[test]
fn document_from_file() {
    let path = std::path::Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
        .join("profile_card.toml");
    let document = Document::from_file(&path).unwrap();
    assert_eq!(document.views.len(), 4);
    assert_eq!(document.rules.len(), 4);
    assert!(document.rules[0].safe_area);
}

#[test]
fn missing_file_is_an_io_error() {
    let err = Document::from_file(std::path::Path::new("does/not/exist.toml")).unwrap_err();
    assert!(matches!(err, DocumentError::Io(_)));
}

#[test]
fn unknown_target_suggests_names() {
    let source = r#"
[[view]]
name = "avatar"

[[view]]
name = "label"

[[rule]]
view = "label"
ops = [{ op = "top_to", side = { bottom = 4.0 }, of = "avatr" }]
"#;

    match solve_document(source) {
        Err(SceneError::Layout(err @ LayoutError::UnknownView { .. })) => {
            assert_eq!(err.suggestions(), Some(&["avatar".to_string()][..]));
        }
        other => panic!("expected unknown view error, got {other:?}"),
    }
}

#[test]
fn conflicting_rules_fail_to_solve() {
    let source = r#"
[[view]]
name = "box"

[[rule]]
view = "box"
ops = [{ op = "width", value = 10.0 }, { op = "width_to", offset = 0.0 }]
"#;

    let err = solve_document(source).unwrap_err();
    assert!(matches!(err, SceneError::Layout(LayoutError::SolverError(_))));
    assert!(err.to_string().contains("box.width = root.width"), "{err}");
}

#[test]
fn parse_errors_render_with_source_context() {
    let source = "[[view]\nname = \"card\"\n";
    let err = Document::from_str(source).unwrap_err();
    let report = err.format(source, "broken.toml");
    assert!(report.contains("broken.toml"), "{report}");
}

#[test]
fn unknown_op_is_rejected() {
    let source = r#"
[[view]]
name = "box"

[[rule]]
view = "box"
ops = [{ op = "stretch" }]
"#;
    let err = Document::from_str(source).unwrap_err();
    assert!(matches!(err, DocumentError::Parse { .. }));
}
