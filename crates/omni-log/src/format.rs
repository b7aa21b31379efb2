//! Pipe-separated log line format.

use std::fmt;

use tracing::{Event, Level, Subscriber};
use tracing_subscriber::fmt::format::Writer;
use tracing_subscriber::fmt::{FmtContext, FormatEvent, FormatFields};
use tracing_subscriber::registry::LookupSpan;

/// Default timestamp layout, local time with second precision.
const DEFAULT_TIMESTAMP: &str = "%Y-%m-%d %H:%M:%S";

/// Width the level name is padded to.
const LEVEL_WIDTH: usize = 8;

/// Formats events as `timestamp | LEVEL    | target | message fields`.
///
/// When the writer supports ANSI escapes, the level name is colored.
///
/// # Examples
///
/// ```
/// use omni_log::LogFormat;
///
/// let subscriber = tracing_subscriber::fmt()
///     .event_format(LogFormat::default())
///     .finish();
/// tracing::subscriber::with_default(subscriber, || {
///     tracing::info!("ready");
/// });
/// ```
#[derive(Debug, Clone)]
pub struct LogFormat {
    /// `chrono` strftime layout for the timestamp column.
    timestamp: String,
}

impl Default for LogFormat {
    fn default() -> Self {
        Self {
            timestamp: DEFAULT_TIMESTAMP.to_owned(),
        }
    }
}

impl LogFormat {
    /// Creates a format with a custom `chrono` timestamp layout.
    #[must_use]
    pub fn with_timestamp(timestamp: impl Into<String>) -> Self {
        Self {
            timestamp: timestamp.into(),
        }
    }
}

/// ANSI color prefix for a level.
fn level_color(level: Level) -> &'static str {
    if level == Level::ERROR {
        "\x1b[31m"
    } else if level == Level::WARN {
        "\x1b[33m"
    } else if level == Level::INFO {
        "\x1b[32m"
    } else if level == Level::DEBUG {
        "\x1b[34m"
    } else {
        "\x1b[35m"
    }
}

impl<S, N> FormatEvent<S, N> for LogFormat
where
    S: Subscriber + for<'a> LookupSpan<'a>,
    N: for<'a> FormatFields<'a> + 'static,
{
    fn format_event(
        &self,
        ctx: &FmtContext<'_, S, N>,
        mut writer: Writer<'_>,
        event: &Event<'_>,
    ) -> fmt::Result {
        let metadata = event.metadata();
        let level = *metadata.level();
        let padded = format!("{:<LEVEL_WIDTH$}", level.to_string());

        write!(writer, "{} | ", chrono::Local::now().format(&self.timestamp))?;
        if writer.has_ansi_escapes() {
            write!(writer, "{}{padded}\x1b[0m", level_color(level))?;
        } else {
            writer.write_str(&padded)?;
        }
        write!(writer, " | {} | ", metadata.target())?;

        ctx.field_format().format_fields(writer.by_ref(), event)?;
        writeln!(writer)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io;
    use std::sync::{Arc, Mutex};

    #[derive(Clone, Default)]
    struct Buffer(Arc<Mutex<Vec<u8>>>);

    impl io::Write for Buffer {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            self.0.lock().unwrap().extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    fn render(format: LogFormat, ansi: bool, emit: impl FnOnce()) -> String {
        let buffer = Buffer::default();
        let writer = buffer.clone();
        let subscriber = tracing_subscriber::fmt()
            .with_ansi(ansi)
            .event_format(format)
            .with_writer(move || writer.clone())
            .with_max_level(Level::TRACE)
            .finish();

        tracing::subscriber::with_default(subscriber, emit);
        let bytes = buffer.0.lock().unwrap().clone();
        String::from_utf8(bytes).unwrap()
    }

    #[test]
    fn test_line_shape() {
        let output = render(LogFormat::default(), false, || {
            tracing::info!(target: "omni::test", count = 3, "Found files");
        });

        let line = output.lines().next().unwrap();
        let columns: Vec<&str> = line.splitn(4, " | ").collect();
        assert_eq!(columns.len(), 4);
        assert!(chrono::NaiveDateTime::parse_from_str(columns[0], DEFAULT_TIMESTAMP).is_ok());
        assert_eq!(columns[1], "INFO    ");
        assert_eq!(columns[2], "omni::test");
        assert_eq!(columns[3], "Found files count=3");
    }

    #[test]
    fn test_level_padding() {
        let output = render(LogFormat::default(), false, || {
            tracing::error!(target: "t", "boom");
            tracing::debug!(target: "t", "detail");
        });

        assert!(output.contains(" | ERROR    | t | boom"));
        assert!(output.contains(" | DEBUG    | t | detail"));
    }

    #[test]
    fn test_custom_timestamp() {
        let output = render(LogFormat::with_timestamp("%Y"), false, || {
            tracing::warn!(target: "t", "hello");
        });

        let year = output.split(" | ").next().unwrap();
        assert_eq!(year.len(), 4);
        assert!(year.chars().all(|c| c.is_ascii_digit()));
    }

    #[test]
    fn test_ansi_colors_level() {
        let output = render(LogFormat::default(), true, || {
            tracing::warn!(target: "t", "careful");
        });

        assert!(output.contains("\x1b[33mWARN    \x1b[0m"));
    }
}
