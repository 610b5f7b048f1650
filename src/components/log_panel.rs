//! Log Panel Component
//!
//! Collapsible view of the rolling logger's recent lines.

use leptos::prelude::*;

use rolling_logger::LogBuffer;

/// Renders nothing when no logger was installed
#[component]
pub fn LogPanel() -> impl IntoView {
    use_context::<LogBuffer>().map(|buffer| {
        let buffer = StoredValue::new(buffer);
        let (lines, set_lines) = signal(buffer.with_value(snapshot_lines));
        let (status, set_status) = signal(buffer.with_value(status_text));

        let refresh = move || {
            set_lines.set(buffer.with_value(snapshot_lines));
            set_status.set(buffer.with_value(status_text));
        };

        view! {
            <details class="log-panel">
                <summary>"Recent logs"</summary>
                <div class="log-actions">
                    <span class="log-status">{move || status.get()}</span>
                    <button type="button" class="btn-small" on:click=move |_| refresh()>
                        "Refresh"
                    </button>
                    <button
                        type="button"
                        class="btn-small"
                        on:click=move |_| {
                            buffer.with_value(LogBuffer::clear);
                            refresh();
                        }
                    >
                        "Clear"
                    </button>
                </div>
                <pre class="log-lines">{move || lines.get().join("\n")}</pre>
            </details>
        }
    })
}

fn snapshot_lines(buffer: &LogBuffer) -> Vec<String> {
    buffer.recent().iter().map(|record| record.format_line()).collect()
}

fn status_text(buffer: &LogBuffer) -> String {
    if buffer.is_empty() {
        "No log lines yet".to_string()
    } else {
        format!("{} of {} lines", buffer.len(), buffer.capacity())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rolling_logger::LogRecord;
    use tracing::Level;

    fn record(message: &str) -> LogRecord {
        LogRecord {
            timestamp: Default::default(),
            level: Level::INFO,
            target: "goal_core::store".to_string(),
            message: message.to_string(),
        }
    }

    #[test]
    fn test_status_text() {
        let buffer = LogBuffer::new(3);
        assert_eq!(status_text(&buffer), "No log lines yet");

        buffer.push(record("created goal"));
        assert_eq!(status_text(&buffer), "1 of 3 lines");
    }

    #[test]
    fn test_snapshot_lines_oldest_first() {
        let buffer = LogBuffer::new(2);
        for message in ["loaded goals", "created goal", "deleted goal"] {
            buffer.push(record(message));
        }

        let lines = snapshot_lines(&buffer);
        assert_eq!(lines.len(), 2);
        assert!(lines[0].ends_with("goal_core::store: created goal"));
        assert!(lines[1].ends_with("goal_core::store: deleted goal"));
    }
}
