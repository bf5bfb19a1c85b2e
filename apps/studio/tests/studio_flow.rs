//! End-to-end flow over the public surface: seed a session, edit, switch
//! templates, and write every projection to disk the way the binary does.

use std::sync::Arc;

use studio::analytics::NullSink;
use studio::editor::{add_skill, update_personal, PersonalPatch};
use studio::models::seed::seed_document;
use studio::render::{render_page, TemplateId, Theme};
use studio::store::AppState;

#[test]
fn test_edit_then_render_every_template_to_disk() {
    let mut state = AppState::new(seed_document(), Arc::new(NullSink));
    state.apply(|doc| {
        update_personal(
            doc,
            PersonalPatch {
                role: Some("Principal Product Designer".to_string()),
                ..Default::default()
            },
        )
    });
    state.apply(|doc| add_skill(doc, doc.skills[0].id, "Accessibility"));

    let dir = tempfile::tempdir().expect("temp dir");
    for id in TemplateId::ALL {
        let page = render_page(&state.document, id, Theme::Light, 1.0);
        let path = dir.path().join(format!("{id}.html"));
        std::fs::write(&path, &page.html).expect("write page");

        let written = std::fs::read_to_string(&path).expect("read back");
        assert!(written.contains("Principal Product Designer"), "{id} carries the edit");
        assert!(written.contains("Angelo Libero"));
        assert_eq!(written, page.html);
    }
}

#[test]
fn test_theme_and_zoom_flow_into_the_page() {
    let mut state = AppState::new(seed_document(), Arc::new(NullSink));
    state.toggle_theme(); // Dark is the default
    state.set_zoom(1.2);
    let page = state.render();
    assert!(page.html.contains("theme-light"));
    assert!(page.html.contains("scale(1.2)"));
}
