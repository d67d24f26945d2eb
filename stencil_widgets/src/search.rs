use std::fmt;
use std::rc::Rc;

use crate::WidgetConfig;

/// Callback receiving a trimmed, non-empty query.
pub type SearchAction = Rc<dyn Fn(&str)>;

/// Trim a raw input value; `None` when nothing is left.
pub fn normalize_query(raw: &str) -> Option<&str> {
    let query = raw.trim();
    (!query.is_empty()).then_some(query)
}

/// Stateless search submit behavior
#[derive(Clone)]
pub struct SearchBox {
    activation_key: String,
    action: SearchAction,
}

impl fmt::Debug for SearchBox {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SearchBox")
            .field("activation_key", &self.activation_key)
            .field("action", &"<SearchAction>")
            .finish()
    }
}

impl Default for SearchBox {
    fn default() -> Self {
        Self::new(&WidgetConfig::default())
    }
}

impl SearchBox {
    /// Search box whose action only logs the query.
    pub fn new(config: &WidgetConfig) -> Self {
        Self::with_action(config, |query: &str| {
            tracing::info!("Searching for: {query}");
        })
    }

    pub fn with_action<F>(config: &WidgetConfig, action: F) -> Self
    where
        F: Fn(&str) + 'static,
    {
        SearchBox {
            activation_key: config.activation_key.clone(),
            action: Rc::new(action),
        }
    }

    /// Submit the raw input value.
    ///
    /// Returns the query that was searched for, or `None` when the trimmed
    /// value is empty and nothing happened.
    pub fn submit(&self, raw: &str) -> Option<String> {
        let query = normalize_query(raw)?;
        (self.action)(query);
        Some(query.to_owned())
    }

    /// Submit on the activation key; other keys are ignored.
    pub fn handle_key(&self, key: &str, raw: &str) -> Option<String> {
        if key != self.activation_key {
            return None;
        }

        self.submit(raw)
    }
}
