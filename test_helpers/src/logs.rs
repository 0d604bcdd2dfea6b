//! Capture `tracing` events emitted while a closure runs.
//!
//! The capturing subscriber is installed as the thread-local default for the
//! duration of the closure only, so parallel tests do not observe each
//! other's diagnostics.
//!
//! # Examples
//!
//! ```
//! use marketplace_config_test_helpers::logs;
//!
//! let (value, captured) = logs::capture(|| {
//!     tracing::warn!(property = "group", "unsupported value");
//!     7
//! });
//! assert_eq!(value, 7);
//! assert!(captured.any_field_contains("property", "group"));
//! ```

use std::collections::BTreeMap;
use std::fmt;
use std::sync::Arc;

use parking_lot::Mutex;
use tracing::field::{Field, Visit};
use tracing::{Event, Level, Subscriber};
use tracing_subscriber::layer::{Context, Layer, SubscriberExt};
use tracing_subscriber::registry::Registry;

/// One recorded event.
#[derive(Clone, Debug)]
pub struct CapturedEvent {
    /// Event level.
    pub level: Level,
    /// Rendered `message` field.
    pub message: String,
    /// Every other field, rendered with its `Display` or `Debug` output.
    pub fields: BTreeMap<String, String>,
}

/// Events recorded by [`capture`].
#[derive(Clone, Debug, Default)]
pub struct CapturedLogs(Vec<CapturedEvent>);

impl CapturedLogs {
    /// Iterate over the recorded events in emission order.
    pub fn iter(&self) -> impl Iterator<Item = &CapturedEvent> {
        self.0.iter()
    }

    /// Number of recorded events.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether nothing was recorded.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Events recorded at `level`.
    #[must_use]
    pub fn at_level(&self, level: Level) -> Vec<&CapturedEvent> {
        self.0.iter().filter(|event| event.level == level).collect()
    }

    /// Whether any event has a field `name` whose rendered value contains
    /// `needle`.
    #[must_use]
    pub fn any_field_contains(&self, name: &str, needle: &str) -> bool {
        self.0.iter().any(|event| {
            event
                .fields
                .get(name)
                .is_some_and(|value| value.contains(needle))
        })
    }

    /// Whether any event message contains `needle`.
    #[must_use]
    pub fn any_message_contains(&self, needle: &str) -> bool {
        self.0.iter().any(|event| event.message.contains(needle))
    }
}

#[derive(Clone, Default)]
struct CaptureLayer {
    events: Arc<Mutex<Vec<CapturedEvent>>>,
}

impl<S: Subscriber> Layer<S> for CaptureLayer {
    fn on_event(&self, event: &Event<'_>, _ctx: Context<'_, S>) {
        let mut visitor = FieldVisitor::default();
        event.record(&mut visitor);
        self.events.lock().push(CapturedEvent {
            level: *event.metadata().level(),
            message: visitor.message,
            fields: visitor.fields,
        });
    }
}

#[derive(Default)]
struct FieldVisitor {
    message: String,
    fields: BTreeMap<String, String>,
}

impl Visit for FieldVisitor {
    fn record_str(&mut self, field: &Field, value: &str) {
        self.store(field, value.to_owned());
    }

    fn record_debug(&mut self, field: &Field, value: &dyn fmt::Debug) {
        self.store(field, format!("{value:?}"));
    }
}

impl FieldVisitor {
    fn store(&mut self, field: &Field, rendered: String) {
        if field.name() == "message" {
            self.message = rendered;
        } else {
            self.fields.insert(field.name().to_owned(), rendered);
        }
    }
}

/// Run `f` with a capturing subscriber and return its output alongside the
/// recorded events.
pub fn capture<R>(f: impl FnOnce() -> R) -> (R, CapturedLogs) {
    let layer = CaptureLayer::default();
    let events = Arc::clone(&layer.events);
    let subscriber = Registry::default().with(layer);
    let output = tracing::subscriber::with_default(subscriber, f);
    let recorded = std::mem::take(&mut *events.lock());
    (output, CapturedLogs(recorded))
}
