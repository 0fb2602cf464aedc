// Todo API wire types.
// Defines structs for the JSON payloads exchanged with the REST API.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A single task record.
///
/// `created_at` is epoch seconds as a float, matching the server's Redis
/// serialization.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Todo {
    pub id: u64,
    pub title: String,
    pub done: bool,
    pub created_at: f64,
}

impl Todo {
    /// Creation time as a UTC datetime. `None` if the epoch value is out of
    /// range for chrono.
    pub fn created_at_utc(&self) -> Option<DateTime<Utc>> {
        epoch_to_utc(self.created_at)
    }
}

/// Convert epoch seconds (float) to a UTC datetime.
pub fn epoch_to_utc(secs: f64) -> Option<DateTime<Utc>> {
    let whole = secs.trunc() as i64;
    let nanos = (secs.fract() * 1_000_000_000.0) as u32;
    DateTime::from_timestamp(whole, nanos)
}

/// Request body for creating a todo.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewTodo {
    pub title: String,
}

/// Request body for flipping a todo's done flag.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct DonePatch {
    pub done: bool,
}

/// Aggregate counters computed server-side for the data snapshot.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Stats {
    pub total: u64,
    pub completed: u64,
    pub pending: u64,
    pub completion_rate: f64,
}

/// A todo as it appears inside a data snapshot, with the extra per-item
/// serialization timestamp (epoch seconds).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SnapshotItem {
    pub id: u64,
    pub title: String,
    pub done: bool,
    pub created_at: f64,
    pub timestamp: f64,
}

impl SnapshotItem {
    /// Serialization time as a UTC datetime.
    pub fn timestamp_utc(&self) -> Option<DateTime<Utc>> {
        epoch_to_utc(self.timestamp)
    }
}

/// Server-computed aggregate view combining todos with statistics and
/// cache-timing metadata. Entirely derived server-side; the client only
/// displays it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DataSnapshot {
    pub todos: Vec<SnapshotItem>,
    pub stats: Stats,
    pub generated_at: DateTime<Utc>,
    pub from_cache: bool,
    /// Server-measured load duration in milliseconds.
    pub load_time: f64,
}

/// Response from the health endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Health {
    pub ok: bool,
    #[serde(default)]
    pub redis: bool,
    #[serde(default)]
    pub error: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn todo_deserializes_epoch_float() {
        let json = r#"{"id":7,"title":"Buy milk","done":false,"created_at":1754300000.25}"#;
        let todo: Todo = serde_json::from_str(json).unwrap();
        assert_eq!(todo.id, 7);
        assert_eq!(todo.title, "Buy milk");
        assert!(!todo.done);

        let created = todo.created_at_utc().unwrap();
        assert_eq!(created.timestamp(), 1754300000);
    }

    #[test]
    fn snapshot_deserializes_full_payload() {
        let json = r#"{
            "todos": [
                {"id":1,"title":"a","done":true,"created_at":1754300000.0,"timestamp":1754300100.0},
                {"id":2,"title":"b","done":false,"created_at":1754300050.0,"timestamp":1754300100.0}
            ],
            "stats": {"total":2,"completed":1,"pending":1,"completion_rate":50.0},
            "generated_at": "2026-08-04T10:15:00Z",
            "from_cache": true,
            "load_time": 12.5
        }"#;
        let snapshot: DataSnapshot = serde_json::from_str(json).unwrap();
        assert_eq!(snapshot.todos.len(), 2);
        assert_eq!(snapshot.stats.total, 2);
        assert_eq!(
            snapshot.stats.total,
            snapshot.stats.completed + snapshot.stats.pending
        );
        assert!(snapshot.from_cache);
        assert_eq!(snapshot.load_time, 12.5);
        assert_eq!(snapshot.generated_at.timestamp(), 1785838500);
    }

    #[test]
    fn health_error_payload() {
        let json = r#"{"ok":false,"error":"connection refused"}"#;
        let health: Health = serde_json::from_str(json).unwrap();
        assert!(!health.ok);
        assert!(!health.redis);
        assert_eq!(health.error.as_deref(), Some("connection refused"));
    }
}
