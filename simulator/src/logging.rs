use tracing::{Event, Subscriber};
use tracing_subscriber::prelude::*;
use tracing_subscriber::{layer::Context, EnvFilter, Layer, Registry};

const DEFAULT_FILTER: &str = "warn,simulator=info,shared=warn";

#[derive(Default)]
struct MessageVisitor(String);

impl tracing::field::Visit for MessageVisitor {
    fn record_debug(&mut self, field: &tracing::field::Field, value: &dyn std::fmt::Debug) {
        if field.name() == "message" {
            self.0.push_str(&format!("{:?}", value));
        }
    }

    fn record_str(&mut self, field: &tracing::field::Field, value: &str) {
        if field.name() == "message" {
            self.0.push_str(value);
        }
    }
}

/// One line per event on stderr, so stdout carries only the report.
struct ReportLayer;

impl<S: Subscriber> Layer<S> for ReportLayer {
    fn on_event(&self, event: &Event<'_>, _ctx: Context<'_, S>) {
        let metadata = event.metadata();

        let mut visitor = MessageVisitor::default();
        event.record(&mut visitor);
        if visitor.0.is_empty() {
            return;
        }

        let timestamp = chrono::Local::now().format("%Y-%m-%d %H:%M:%S%.3f");
        match *metadata.level() {
            tracing::Level::ERROR => eprintln!("[{}] ❌ Error: {} - {}", timestamp, metadata.target(), visitor.0),
            tracing::Level::WARN => eprintln!("[{}] ⚠️ Warning: {} - {}", timestamp, metadata.target(), visitor.0),
            tracing::Level::INFO => eprintln!("[{}] ℹ️ {} - {}", timestamp, metadata.target(), visitor.0),
            _ => eprintln!("[{}] 🔄 {} - {}", timestamp, metadata.target(), visitor.0),
        }
    }
}

/// Installs the subscriber. `log` records from the engine are bridged in.
pub fn setup() -> Result<(), Box<dyn std::error::Error>> {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));

    Registry::default().with(env_filter).with(ReportLayer).try_init()?;
    Ok(())
}
