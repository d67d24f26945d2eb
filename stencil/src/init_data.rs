//! Page data handed from the server to the client through `window.INIT_DATA`

use serde::Serialize;

/// Global the server-side script assigns.
pub const INIT_DATA_GLOBAL: &str = "INIT_DATA";

/// Build the `<script>` element that sets `window.INIT_DATA` to `data`.
///
/// Every `</` in the serialized JSON is written as `<\/` so the payload cannot
/// close the script element early.
pub fn init_data_script<T: Serialize>(data: &T) -> Result<String, serde_json::Error> {
    let json = serde_json::to_string(data)?.replace("</", "<\\/");

    Ok(format!(
        r#"<script id="stencil-init-data">window.{INIT_DATA_GLOBAL} = {json};</script>"#
    ))
}

/// Raw `window.INIT_DATA`, or `None` when the page did not set it.
#[cfg(target_arch = "wasm32")]
pub fn raw_init_data() -> Option<wasm_bindgen::JsValue> {
    let value = js_sys::Reflect::get(&js_sys::global(), &INIT_DATA_GLOBAL.into()).ok()?;

    (!value.is_undefined() && !value.is_null()).then_some(value)
}

/// Page data deserialized into `T`.
///
/// Data that is present but does not fit `T` is logged at warn level and
/// reported as `None`, so callers fall back to their own defaults.
#[cfg(target_arch = "wasm32")]
pub fn read_init_data<T: serde::de::DeserializeOwned>() -> Option<T> {
    let json = crate::web::js_to_json(&raw_init_data()?)?;

    match serde_json::from_value(json) {
        Ok(data) => Some(data),
        Err(err) => {
            tracing::warn!(%err, "INIT_DATA does not match the expected shape");
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn script_embeds_json() {
        let script = init_data_script(&json!({ "title": "Docs" })).unwrap();

        assert_eq!(
            script,
            r#"<script id="stencil-init-data">window.INIT_DATA = {"title":"Docs"};</script>"#
        );
    }

    #[test]
    fn script_cannot_be_closed_by_data() {
        let script = init_data_script(&json!({ "title": "</script><b>" })).unwrap();

        assert!(!script.contains("</script><b>"));
        assert!(script.contains(r#"<\/script><b>"#));
        assert!(script.ends_with("</script>"));
    }
}
