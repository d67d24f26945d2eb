#![allow(missing_docs)]

mod helpers;

use helpers::count_errors;
use serde_json::json;
use stencil::{Html, RenderData, TemplateRegistry, View};
use stencil_components::{
    BUTTON_GROUP, ButtonGroup, DropdownItem, NAV_BUTTON, NavButton, TITLE_SECTION, TitleSection,
    builtin_registry, ids,
};

#[test]
fn every_builtin_renders_empty_data_with_defaults() {
    let registry = builtin_registry();

    let (renders, errors) = count_errors(|| {
        [TITLE_SECTION, NAV_BUTTON, BUTTON_GROUP]
            .map(|name| (name, registry.render(name, &json!({}))))
    });

    assert_eq!(errors, 0);
    for (name, html) in &renders {
        assert!(!html.is_empty(), "{name} rendered nothing");
    }
    assert!(renders[0].1.as_str().contains("Welcome"));
    assert!(renders[1].1.as_str().contains("Button"));
    assert!(renders[2].1.as_str().contains("button-group--left"));
}

#[test]
fn unknown_template_renders_empty_and_logs_once() {
    let registry = builtin_registry();

    let (html, errors) = count_errors(|| registry.render("doesNotExist", &json!({})));

    assert_eq!(html.as_str(), "");
    assert_eq!(errors, 1);
}

#[test]
fn title_section_defaults_show_search_without_dropdown() {
    let html = builtin_registry().render(TITLE_SECTION, &json!({}));

    assert!(html.as_str().contains(r#"<h1 class="page-title">Welcome</h1>"#));
    assert!(html.as_str().contains(r#"placeholder="Search...""#));
    assert!(html.as_str().contains(&format!(r#"id="{}""#, ids::SEARCH_INPUT_ID)));
    assert!(!html.as_str().contains(ids::DROPDOWN_MENU_ID));
}

#[test]
fn title_section_search_disabled_only_by_false() {
    let registry = builtin_registry();

    let hidden = registry.render(TITLE_SECTION, &json!({ "showSearch": false }));
    let shown = registry.render(TITLE_SECTION, &json!({ "showSearch": 0 }));

    assert!(!hidden.as_str().contains("search-container"));
    assert!(shown.as_str().contains("search-container"));
}

#[test]
fn title_section_dropdown_lists_items_in_order() {
    let data = json!({
        "title": "Docs",
        "dropdownItems": [
            { "text": "Home", "href": "/", "icon": "🏠" },
            { "text": "About", "href": "/about", "target": "_blank" },
            {},
        ],
    });

    let html = builtin_registry().render(TITLE_SECTION, &data);
    let html = html.as_str();

    let home = html.find(">Home<").unwrap();
    let about = html.find(">About<").unwrap();
    let fallback = html.find(">Item<").unwrap();

    assert!(home < about && about < fallback);
    assert!(html.contains(r#"<div class="dropdown-menu" id="dropdownMenu">"#));
    assert!(html.contains(r#"<a href="/about" class="dropdown-item" target="_blank">"#));
    assert!(html.contains(r#"<span class="dropdown-item-icon">🏠</span>"#));
    assert_eq!(html.matches("class=\"dropdown-item\"").count(), 3);
}

#[test]
fn title_section_dropdown_can_be_disabled() {
    let data = json!({
        "showDropdown": false,
        "dropdownItems": [{ "text": "Home" }],
    });

    let html = builtin_registry().render(TITLE_SECTION, &data);

    assert!(!html.as_str().contains(ids::DROPDOWN_CLASS));
}

#[test]
fn malformed_fields_fall_back_to_defaults() {
    let data = json!({
        "title": ["not", "text"],
        "dropdownItems": "not a list",
        "searchPlaceholder": null,
    });

    assert_eq!(
        builtin_registry().render(TITLE_SECTION, &data),
        TitleSection::default().render()
    );
}

#[test]
fn button_group_renders_buttons_in_input_order() {
    let registry = builtin_registry();

    let html = registry.render(
        BUTTON_GROUP,
        &json!({ "buttons": [{ "text": "A" }, { "text": "B" }] }),
    );

    let a = registry.render(NAV_BUTTON, &json!({ "text": "A" }));
    let b = registry.render(NAV_BUTTON, &json!({ "text": "B" }));

    assert_eq!(
        html.as_str(),
        format!(
            r#"<div class="button-group button-group--left button-group--normal">{a}{b}</div>"#
        )
    );
}

#[test]
fn button_group_honours_overridden_nav_button() {
    let mut registry = builtin_registry();
    registry.register(NAV_BUTTON, |_: &TemplateRegistry, data: &RenderData| {
        Html::new(format!("[{}]", data["text"].as_str().unwrap_or("?")))
    });

    let html = registry.render(
        BUTTON_GROUP,
        &json!({ "buttons": [{ "text": "A" }, { "text": "B" }], "alignment": "right" }),
    );

    assert_eq!(
        html.as_str(),
        r#"<div class="button-group button-group--right button-group--normal">[A][B]</div>"#
    );
}

#[test]
fn typed_views_match_registry_output() {
    let registry = builtin_registry();

    let section = TitleSection {
        dropdown_items: vec![DropdownItem::new("Home", "/").with_icon("🏠")],
        ..TitleSection::new("Docs")
    };
    let group = ButtonGroup::new([NavButton::new("A", "/a"), NavButton::new("B", "/b")]);

    for (view, name, data) in [
        (section.render(), TITLE_SECTION, serde_json::to_value(&section).unwrap()),
        (group.render(), BUTTON_GROUP, serde_json::to_value(&group).unwrap()),
    ] {
        assert_eq!(view, registry.render(name, &data));
    }
}
