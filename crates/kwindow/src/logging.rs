//! Tracing subscriber layer that writes formatted log lines to stderr.
//!
//! Lines look like `14:02:11 DEBUG scan complete {symbols=10, k=2}`. The
//! layer drops anything more verbose than its configured level. For tests,
//! [`StderrLayer::buffered`] captures lines into a [`LogBuffer`] instead.

use std::io::Write;
use std::sync::{Arc, Mutex};

use chrono::Local;
use tracing::subscriber::Interest;
use tracing::{Level, Metadata, Subscriber};
use tracing_subscriber::layer::{Context, Layer, SubscriberExt};
use tracing_subscriber::registry::LookupSpan;
use tracing_subscriber::util::SubscriberInitExt;

/// Shared buffer of captured log lines.
#[derive(Clone, Default)]
pub struct LogBuffer(Arc<Mutex<Vec<String>>>);

impl LogBuffer {
    /// Drain all captured lines.
    pub fn drain(&self) -> Vec<String> {
        let mut buf = self.0.lock().unwrap_or_else(|e| e.into_inner());
        std::mem::take(&mut *buf)
    }
}

enum Sink {
    Stderr,
    Buffer(LogBuffer),
}

/// A [`tracing_subscriber::Layer`] that formats events as single lines.
pub struct StderrLayer {
    max_level: Level,
    sink: Sink,
}

impl StderrLayer {
    pub fn new(max_level: Level) -> Self {
        Self {
            max_level,
            sink: Sink::Stderr,
        }
    }

    /// A layer that captures into a [`LogBuffer`] rather than stderr.
    pub fn buffered(max_level: Level) -> (Self, LogBuffer) {
        let buffer = LogBuffer::default();
        (
            Self {
                max_level,
                sink: Sink::Buffer(buffer.clone()),
            },
            buffer,
        )
    }
}

impl<S: Subscriber + for<'a> LookupSpan<'a>> Layer<S> for StderrLayer {
    // Scoped subscribers with different levels may coexist, so interest
    // cannot be cached per callsite.
    fn register_callsite(&self, _metadata: &'static Metadata<'static>) -> Interest {
        Interest::sometimes()
    }

    fn enabled(&self, metadata: &Metadata<'_>, _ctx: Context<'_, S>) -> bool {
        *metadata.level() <= self.max_level
    }

    fn on_event(&self, event: &tracing::Event<'_>, _ctx: Context<'_, S>) {
        if *event.metadata().level() > self.max_level {
            return;
        }

        let mut visitor = MessageVisitor::default();
        event.record(&mut visitor);

        let line = format!(
            "{} {} {}",
            Local::now().format("%H:%M:%S"),
            level_label(*event.metadata().level()),
            visitor.render()
        );

        match &self.sink {
            Sink::Stderr => {
                // Nowhere to report a failed stderr write.
                let _ = writeln!(std::io::stderr().lock(), "{line}");
            }
            Sink::Buffer(buffer) => {
                if let Ok(mut buf) = buffer.0.lock() {
                    buf.push(line);
                }
            }
        }
    }
}

/// Fixed-width level label.
pub fn level_label(level: Level) -> &'static str {
    match level {
        Level::TRACE => "TRACE",
        Level::DEBUG => "DEBUG",
        Level::INFO => "INFO ",
        Level::WARN => "WARN ",
        Level::ERROR => "ERROR",
    }
}

/// Map `-v` count and `--quiet` to a max level. `None` means no logging.
pub fn level_for(verbose: u8, quiet: bool) -> Option<Level> {
    if quiet {
        return None;
    }
    Some(match verbose {
        0 => Level::WARN,
        1 => Level::INFO,
        2 => Level::DEBUG,
        _ => Level::TRACE,
    })
}

/// Install the stderr layer as the global subscriber.
pub fn init(max_level: Option<Level>) {
    if let Some(level) = max_level {
        tracing_subscriber::registry()
            .with(StderrLayer::new(level))
            .init();
    }
}

/// Visitor that extracts the message and extra fields from a tracing event.
#[derive(Default)]
struct MessageVisitor {
    message: String,
    fields: Vec<(String, String)>,
}

impl MessageVisitor {
    fn render(self) -> String {
        if self.fields.is_empty() {
            return self.message;
        }
        let extras: Vec<String> = self
            .fields
            .iter()
            .map(|(k, v)| format!("{k}={v}"))
            .collect();
        if self.message.is_empty() {
            extras.join(" ")
        } else {
            format!("{} {{{}}}", self.message, extras.join(", "))
        }
    }
}

impl tracing::field::Visit for MessageVisitor {
    fn record_debug(&mut self, field: &tracing::field::Field, value: &dyn std::fmt::Debug) {
        if field.name() == "message" {
            self.message = format!("{value:?}");
        } else {
            self.fields
                .push((field.name().to_string(), format!("{value:?}")));
        }
    }

    fn record_str(&mut self, field: &tracing::field::Field, value: &str) {
        if field.name() == "message" {
            self.message = value.to_string();
        } else {
            self.fields
                .push((field.name().to_string(), value.to_string()));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn capture(max_level: Level, f: impl FnOnce()) -> Vec<String> {
        let (layer, buffer) = StderrLayer::buffered(max_level);
        let subscriber = tracing_subscriber::registry().with(layer);
        tracing::subscriber::with_default(subscriber, f);
        buffer.drain()
    }

    #[test]
    fn formats_message_and_fields() {
        let lines = capture(Level::INFO, || {
            tracing::info!(k = 2, source = "stdin", "scanning");
        });
        assert_eq!(lines.len(), 1);
        assert!(lines[0].ends_with("INFO  scanning {k=2, source=stdin}"));
    }

    #[test]
    fn drops_events_above_max_level() {
        let lines = capture(Level::WARN, || {
            tracing::debug!("hidden");
            tracing::info!("hidden");
            tracing::warn!("shown");
        });
        assert_eq!(lines.len(), 1);
        assert!(lines[0].contains("WARN  shown"));
    }

    #[test]
    fn fields_without_message() {
        let lines = capture(Level::TRACE, || {
            tracing::trace!(end = 3, start = 1);
        });
        assert!(lines[0].ends_with("TRACE end=3 start=1"));
    }

    #[test]
    fn scanner_logs_at_debug() {
        let lines = capture(Level::DEBUG, || {
            crate::longest_window_str("aaabaabaaa", 2);
        });
        assert!(lines.iter().any(|l| l.contains("scan complete") && l.contains("length=9")));
    }

    #[test]
    fn verbosity_mapping() {
        assert_eq!(level_for(0, false), Some(Level::WARN));
        assert_eq!(level_for(1, false), Some(Level::INFO));
        assert_eq!(level_for(2, false), Some(Level::DEBUG));
        assert_eq!(level_for(7, false), Some(Level::TRACE));
        assert_eq!(level_for(3, true), None);
    }

    #[test]
    fn level_labels_are_fixed_width() {
        for level in [Level::TRACE, Level::DEBUG, Level::INFO, Level::WARN, Level::ERROR] {
            assert_eq!(level_label(level).len(), 5);
        }
    }
}
