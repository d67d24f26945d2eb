#![allow(missing_docs)]

use serde_json::Value;

/// Escape text content for placement between tags.
pub fn escape_text(input: &str) -> String {
    let mut out = String::with_capacity(input.len());

    for c in input.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            _ => out.push(c),
        }
    }

    out
}

/// Escape a value for placement inside a double-quoted attribute.
pub fn escape_attr(input: &str) -> String {
    let mut out = String::with_capacity(input.len());

    for c in input.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }

    out
}

/// Read a text field the way page scripts read `data.field || fallback`.
///
/// Absent, `null`, `false`, `0` and empty strings count as missing. Numbers and
/// `true` are stringified. Objects and arrays are not text and count as missing.
pub fn text_field(data: &Value, key: &str) -> Option<String> {
    match data.get(key)? {
        Value::String(s) if !s.is_empty() => Some(s.clone()),
        Value::Number(n) if n.as_f64().is_some_and(|f| f != 0.0) => Some(n.to_string()),
        Value::Bool(true) => Some("true".to_owned()),
        _ => None,
    }
}

/// Text field with a fallback for missing values.
pub fn text_or(data: &Value, key: &str, fallback: &str) -> String {
    text_field(data, key).unwrap_or_else(|| fallback.to_owned())
}

/// Read a switch that is on unless explicitly set to `false`.
pub fn flag_field(data: &Value, key: &str) -> bool {
    !matches!(data.get(key), Some(Value::Bool(false)))
}

/// Read a list field; anything that is not an array yields an empty slice.
pub fn list_field<'a>(data: &'a Value, key: &str) -> &'a [Value] {
    match data.get(key) {
        Some(Value::Array(items)) => items.as_slice(),
        _ => &[],
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn escapes_markup_characters() {
        assert_eq!(escape_text("<b>Tom & Jerry</b>"), "&lt;b&gt;Tom &amp; Jerry&lt;/b&gt;");
        assert_eq!(
            escape_attr(r#"say "hi" & 'bye'"#),
            "say &quot;hi&quot; &amp; &#39;bye&#39;"
        );
        assert_eq!(escape_text("plain ☰ text"), "plain ☰ text");
    }

    #[test]
    fn text_field_follows_script_truthiness() {
        let data = json!({
            "title": "Docs",
            "empty": "",
            "nothing": null,
            "zero": 0,
            "count": 3,
            "off": false,
            "on": true,
            "nested": { "a": 1 },
        });

        assert_eq!(text_field(&data, "title").as_deref(), Some("Docs"));
        assert_eq!(text_field(&data, "empty"), None);
        assert_eq!(text_field(&data, "nothing"), None);
        assert_eq!(text_field(&data, "zero"), None);
        assert_eq!(text_field(&data, "count").as_deref(), Some("3"));
        assert_eq!(text_field(&data, "off"), None);
        assert_eq!(text_field(&data, "on").as_deref(), Some("true"));
        assert_eq!(text_field(&data, "nested"), None);
        assert_eq!(text_field(&data, "missing"), None);
        assert_eq!(text_or(&data, "missing", "Welcome"), "Welcome");
    }

    #[test]
    fn flag_field_is_only_disabled_by_false() {
        let data = json!({ "a": false, "b": true, "c": 0, "d": null });

        assert!(!flag_field(&data, "a"));
        assert!(flag_field(&data, "b"));
        assert!(flag_field(&data, "c"));
        assert!(flag_field(&data, "d"));
        assert!(flag_field(&data, "missing"));
        assert!(flag_field(&json!("not an object"), "a"));
    }

    #[test]
    fn list_field_ignores_non_arrays() {
        let data = json!({ "items": [1, 2], "text": "nope" });

        assert_eq!(list_field(&data, "items").len(), 2);
        assert!(list_field(&data, "text").is_empty());
        assert!(list_field(&data, "missing").is_empty());
    }
}
