#![allow(missing_docs)]

mod helpers;

use std::rc::Rc;

use helpers::count_errors;
use serde_json::json;
use stencil::prelude::*;
use stencil::MemoryDocument;

fn registry() -> TemplateRegistry {
    let mut registry = TemplateRegistry::new();
    registry.register("banner", |_: &TemplateRegistry, data: &RenderData| -> Html {
        let text = stencil_utils::text_or(data, "text", "Hello");
        Element::new("p").class("banner").text(text).into()
    });
    registry
}

#[test]
fn render_unknown_template_returns_empty_and_logs_once() {
    let registry = registry();

    let (html, errors) = count_errors(|| registry.render("doesNotExist", &json!({})));

    assert_eq!(html.as_str(), "");
    assert_eq!(errors, 1);
}

#[test]
fn render_known_template_logs_nothing() {
    let registry = registry();

    let (html, errors) = count_errors(|| registry.render("banner", &json!({})));

    assert_eq!(html.as_str(), r#"<p class="banner">Hello</p>"#);
    assert_eq!(errors, 0);
}

#[test]
fn insert_into_missing_container_does_not_mutate() {
    let registry = registry();
    let document = MemoryDocument::new().with_container("app");

    let ((), errors) = count_errors(|| registry.insert(&document, "banner", "missingId", &json!({})));

    assert_eq!(errors, 1);
    assert_eq!(document.mutation_count(), 0);
    assert_eq!(document.inner_html("app").as_deref(), Some(""));
}

#[test]
fn insert_missing_container_and_template_logs_once() {
    let registry = registry();
    let document = MemoryDocument::new();

    let ((), errors) = count_errors(|| registry.insert(&document, "nope", "missingId", &json!({})));

    assert_eq!(errors, 1);
    assert_eq!(document.mutation_count(), 0);
}

#[test]
fn insert_replaces_container_content() {
    let registry = registry();
    let document = MemoryDocument::new().with_container("app");

    registry.insert(&document, "banner", "app", &json!({ "text": "First" }));
    registry.insert(&document, "banner", "app", &json!({ "text": "Second" }));

    assert_eq!(
        document.inner_html("app").as_deref(),
        Some(r#"<p class="banner">Second</p>"#)
    );
    assert_eq!(document.mutation_count(), 2);
}

#[test]
fn insert_unknown_template_clears_container_and_logs_once() {
    let registry = registry();
    let document = MemoryDocument::new().with_container("app");
    registry.insert(&document, "banner", "app", &json!({}));

    let ((), errors) = count_errors(|| registry.insert(&document, "nope", "app", &json!({})));

    assert_eq!(errors, 1);
    assert_eq!(document.inner_html("app").as_deref(), Some(""));
}

#[test]
fn deferred_load_inserts_after_ready() {
    let registry = Rc::new(registry());
    let document = Rc::new(MemoryDocument::loading().with_container("app"));

    let outcome = load_template(&registry, &document, "banner", "app", json!({ "text": "Ready" }));

    assert_eq!(outcome, LoadOutcome::Deferred);
    assert_eq!(document.mutation_count(), 0);

    document.finish_loading();

    assert_eq!(
        document.inner_html("app").as_deref(),
        Some(r#"<p class="banner">Ready</p>"#)
    );
}
