//! Logging setup.
//!
//! Everything in the workspace logs through `tracing`. [`init`] installs the
//! subscriber for the current target: a `fmt` layer filtered by `RUST_LOG` on
//! native targets, and a [`ConsoleLayer`] writing to the browser console on
//! wasm32.

use std::fmt::{self, Write as _};

use tracing::field::{Field, Visit};
use tracing::{Event, Level, Subscriber};
use tracing_subscriber::Layer;
use tracing_subscriber::layer::Context;
#[cfg(target_arch = "wasm32")]
use tracing_subscriber::layer::SubscriberExt;
#[cfg(target_arch = "wasm32")]
use tracing_subscriber::util::SubscriberInitExt;

/// Destination for formatted log lines.
pub trait ConsoleSink {
    fn write(&self, level: Level, line: &str);
}

/// `tracing` layer that formats each event on one line and hands it to a sink.
#[derive(Debug, Clone)]
pub struct ConsoleLayer<S> {
    sink: S,
}

impl<S> ConsoleLayer<S> {
    pub fn new(sink: S) -> Self {
        ConsoleLayer { sink }
    }
}

impl<S, C> Layer<C> for ConsoleLayer<S>
where
    S: ConsoleSink + 'static,
    C: Subscriber,
{
    fn on_event(&self, event: &Event<'_>, _ctx: Context<'_, C>) {
        self.sink
            .write(*event.metadata().level(), &format_event(event));
    }
}

/// Format an event as `"{target}: {message} key=value..."`.
pub fn format_event(event: &Event<'_>) -> String {
    let mut visitor = LineVisitor::default();
    event.record(&mut visitor);

    format!(
        "{}: {}{}",
        event.metadata().target(),
        visitor.message,
        visitor.fields
    )
}

#[derive(Default)]
struct LineVisitor {
    message: String,
    fields: String,
}

impl Visit for LineVisitor {
    fn record_str(&mut self, field: &Field, value: &str) {
        if field.name() == "message" {
            self.message.push_str(value);
        } else {
            let _ = write!(self.fields, " {}={value}", field.name());
        }
    }

    fn record_debug(&mut self, field: &Field, value: &dyn fmt::Debug) {
        if field.name() == "message" {
            let _ = write!(self.message, "{value:?}");
        } else {
            let _ = write!(self.fields, " {}={value:?}", field.name());
        }
    }
}

/// Sink writing to the browser console method matching the event level.
#[cfg(target_arch = "wasm32")]
#[derive(Debug, Clone, Copy, Default)]
pub struct BrowserConsole;

#[cfg(target_arch = "wasm32")]
impl ConsoleSink for BrowserConsole {
    fn write(&self, level: Level, line: &str) {
        let line = wasm_bindgen::JsValue::from_str(line);

        match level {
            Level::ERROR => web_sys::console::error_1(&line),
            Level::WARN => web_sys::console::warn_1(&line),
            Level::INFO => web_sys::console::info_1(&line),
            Level::DEBUG => web_sys::console::log_1(&line),
            Level::TRACE => web_sys::console::debug_1(&line),
        }
    }
}

/// Install the global subscriber. Calling it again is harmless.
pub fn init() {
    #[cfg(target_arch = "wasm32")]
    let result = tracing_subscriber::registry()
        .with(tracing_subscriber::filter::LevelFilter::INFO)
        .with(ConsoleLayer::new(BrowserConsole))
        .try_init();

    #[cfg(not(target_arch = "wasm32"))]
    let result = {
        use tracing_subscriber::EnvFilter;
        use tracing_subscriber::layer::SubscriberExt;
        use tracing_subscriber::util::SubscriberInitExt;

        let env_filter =
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

        tracing_subscriber::registry()
            .with(env_filter)
            .with(tracing_subscriber::fmt::layer())
            .try_init()
    };

    if result.is_err() {
        tracing::debug!("logging already initialized");
    }
}
