//! JSONL file writer for consultation events.
//!
//! Each [`ConsultationEvent`] is serialized as a single JSON line with a
//! `type` field and `timestamp`, appended to the file via a buffered
//! writer.

use consilium_application::ports::consultation_logger::{ConsultationEvent, ConsultationLogger};
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};
use std::sync::Mutex;
use tracing::warn;

/// JSONL consultation logger that writes one JSON object per line.
///
/// Thread-safe via `Mutex<BufWriter<File>>`. Flushes on `Drop`.
pub struct JsonlConsultationLogger {
    writer: Mutex<BufWriter<File>>,
    path: PathBuf,
}

impl JsonlConsultationLogger {
    /// Create a new logger writing to the given path.
    ///
    /// Creates the file (and parent directories) if they don't exist.
    /// Returns `None` if the file cannot be created.
    pub fn new(path: impl AsRef<Path>) -> Option<Self> {
        let path = path.as_ref();

        if let Some(parent) = path.parent()
            && let Err(e) = std::fs::create_dir_all(parent)
        {
            warn!(
                "Could not create consultation log directory {}: {}",
                parent.display(),
                e
            );
            return None;
        }

        let file = match File::create(path) {
            Ok(f) => f,
            Err(e) => {
                warn!(
                    "Could not create consultation log file {}: {}",
                    path.display(),
                    e
                );
                return None;
            }
        };

        Some(Self {
            writer: Mutex::new(BufWriter::new(file)),
            path: path.to_path_buf(),
        })
    }

    /// Get the path to the log file.
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl ConsultationLogger for JsonlConsultationLogger {
    fn log(&self, event: ConsultationEvent) {
        let timestamp = chrono::Utc::now().to_rfc3339_opts(chrono::SecondsFormat::Millis, true);

        // Build the record: merge payload with type + timestamp
        let record = if let serde_json::Value::Object(mut map) = event.payload {
            map.insert(
                "type".to_string(),
                serde_json::Value::String(event.event_type.to_string()),
            );
            map.insert(
                "timestamp".to_string(),
                serde_json::Value::String(timestamp),
            );
            serde_json::Value::Object(map)
        } else {
            serde_json::json!({
                "type": event.event_type,
                "timestamp": timestamp,
                "data": event.payload,
            })
        };

        let Ok(line) = serde_json::to_string(&record) else {
            return;
        };

        if let Ok(mut writer) = self.writer.lock() {
            let _ = writeln!(writer, "{}", line);
            // JSONL is append-only; flush keeps the transcript usable
            // if the process dies mid-consultation
            let _ = writer.flush();
        }
    }
}

impl Drop for JsonlConsultationLogger {
    fn drop(&mut self) {
        if let Ok(mut writer) = self.writer.lock() {
            let _ = writer.flush();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_writes_one_line_per_event() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("consultations.jsonl");

        let logger = JsonlConsultationLogger::new(&path).unwrap();
        logger.log(ConsultationEvent::new(
            "consultation_started",
            json!({"question_chars": 27}),
        ));
        logger.log(ConsultationEvent::new(
            "specialist_outcome",
            json!({"specialist": "bladder", "outcome": {"status": "timed_out"}}),
        ));
        drop(logger);

        let contents = std::fs::read_to_string(&path).unwrap();
        let lines: Vec<&str> = contents.lines().collect();
        assert_eq!(lines.len(), 2);

        let first: serde_json::Value = serde_json::from_str(lines[0]).unwrap();
        assert_eq!(first["type"], "consultation_started");
        assert_eq!(first["question_chars"], 27);
        assert!(first["timestamp"].is_string());

        let second: serde_json::Value = serde_json::from_str(lines[1]).unwrap();
        assert_eq!(second["specialist"], "bladder");
    }

    #[test]
    fn test_creates_parent_directories() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("log.jsonl");

        let logger = JsonlConsultationLogger::new(&path);
        assert!(logger.is_some());
        assert!(path.exists());
    }
}
