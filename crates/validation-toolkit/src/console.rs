//! Console output for validation events.
//!
//! Provides a `tracing` layer that prints the toolkit's structured events
//! on one line each.
//!
//! ## Log Levels
//!
//! - **INFO**: Validator lifecycle (creation)
//! - **DEBUG**: Finished validations and rejected gates or guards
//! - **TRACE**: Individual constraint evaluations

use std::fmt::Write as _;
use std::io::{self, Write};
use std::sync::OnceLock;

use tracing::field::{Field, Visit};
use tracing::{Event, Level, Subscriber};
use tracing_subscriber::layer::{Context, SubscriberExt};
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{EnvFilter, Layer};

static INIT: OnceLock<()> = OnceLock::new();

const DEFAULT_DIRECTIVES: &str = "validation_toolkit=info,validation_toolkit_constraints=info";

/// Initializes console output.
///
/// Safe to call multiple times - only the first call has effect. `RUST_LOG`
/// overrides the default directives when set.
pub fn init() {
    INIT.get_or_init(|| {
        let filter = EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new(DEFAULT_DIRECTIVES));

        let _ = tracing_subscriber::registry()
            .with(filter)
            .with(ValidationConsoleLayer)
            .try_init();
    });
}

/// A tracing layer that formats validation events.
pub struct ValidationConsoleLayer;

impl<S: Subscriber> Layer<S> for ValidationConsoleLayer {
    fn on_event(&self, event: &Event<'_>, _ctx: Context<'_, S>) {
        let metadata = event.metadata();
        if !metadata.target().starts_with("validation_toolkit") {
            return;
        }

        let mut visitor = EventVisitor::default();
        event.record(&mut visitor);

        let output = format_event(&visitor, *metadata.level());
        if !output.is_empty() {
            let _ = writeln!(io::stdout(), "{}", output);
        }
    }
}

#[derive(Default)]
struct EventVisitor {
    event: Option<String>,
    fields: Vec<(&'static str, String)>,
}

impl Visit for EventVisitor {
    fn record_str(&mut self, field: &Field, value: &str) {
        if field.name() == "event" {
            self.event = Some(value.to_string());
        } else {
            self.fields.push((field.name(), value.to_string()));
        }
    }

    fn record_debug(&mut self, field: &Field, value: &dyn std::fmt::Debug) {
        let value = format!("{:?}", value);
        if field.name() == "event" {
            self.event = Some(value.trim_matches('"').to_string());
        } else {
            self.fields.push((field.name(), value));
        }
    }
}

fn format_event(visitor: &EventVisitor, level: Level) -> String {
    let Some(event) = visitor.event.as_deref() else {
        return String::new();
    };

    let mut line = format!("{:>5} {}", level, event);
    for (name, value) in &visitor.fields {
        let _ = write!(line, " {}={}", name, value);
    }
    line
}
