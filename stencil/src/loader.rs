use std::rc::Rc;

use crate::document::Document;
use crate::registry::{RenderData, TemplateRegistry};

/// What [`load_template`] did with the request
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadOutcome {
    Inserted,
    /// Queued until the document finishes loading.
    Deferred,
}

/// Insert a template once the document is ready.
///
/// While the document is still loading the insert is queued on
/// [`Document::when_ready`]; otherwise it happens immediately.
pub fn load_template<D>(
    registry: &Rc<TemplateRegistry>,
    document: &Rc<D>,
    name: &str,
    container_id: &str,
    data: RenderData,
) -> LoadOutcome
where
    D: Document + 'static,
{
    if !document.ready_state().is_loading() {
        registry.insert(document.as_ref(), name, container_id, &data);
        return LoadOutcome::Inserted;
    }

    tracing::debug!(template = %name, container = %container_id, "deferring insert until ready");

    let registry = registry.clone();
    let target = document.clone();
    let name = name.to_owned();
    let container_id = container_id.to_owned();

    document.when_ready(Box::new(move || {
        registry.insert(target.as_ref(), &name, &container_id, &data);
    }));

    LoadOutcome::Deferred
}
