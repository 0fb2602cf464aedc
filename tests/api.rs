// Integration tests for the API client against an in-process stub server.
// The stub implements the REST contract the real backend exposes: todo CRUD,
// the cached data snapshot (first read from the primary store, later reads
// from cache until invalidated), and the health probe.

use std::sync::Arc;
use std::time::{SystemTime, UNIX_EPOCH};

use axum::{
    Json, Router,
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::get,
};
use chrono::Utc;
use serde::Deserialize;
use tokio::sync::RwLock;

use tuido::api::{ApiClient, DataSnapshot, SnapshotItem, Stats, Todo};
use tuido::error::TuidoError;

#[derive(Default)]
struct StubState {
    todos: Vec<Todo>,
    next_id: u64,
    cached: bool,
}

type Stub = Arc<RwLock<StubState>>;

#[derive(Deserialize)]
struct CreateBody {
    title: Option<String>,
}

#[derive(Deserialize)]
struct PatchBody {
    done: bool,
}

fn epoch_now() -> f64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap()
        .as_secs_f64()
}

fn router() -> Router {
    let state: Stub = Arc::new(RwLock::new(StubState::default()));
    Router::new()
        .route("/api/todos", get(list_todos).post(create_todo))
        .route("/api/todos/{id}", axum::routing::patch(patch_todo).delete(delete_todo))
        .route("/api/data", get(get_data).delete(clear_data))
        .route("/api/health", get(health))
        .with_state(state)
}

async fn list_todos(State(state): State<Stub>) -> Json<Vec<Todo>> {
    Json(state.read().await.todos.clone())
}

async fn create_todo(State(state): State<Stub>, Json(body): Json<CreateBody>) -> Response {
    let title = body.title.as_deref().map(str::trim).unwrap_or_default();
    if title.is_empty() {
        return (
            StatusCode::BAD_REQUEST,
            Json(serde_json::json!({"detail": "title (string) is required."})),
        )
            .into_response();
    }

    let mut state = state.write().await;
    state.next_id += 1;
    let todo = Todo {
        id: state.next_id,
        title: title.to_string(),
        done: false,
        created_at: epoch_now(),
    };
    state.todos.push(todo.clone());
    (StatusCode::CREATED, Json(todo)).into_response()
}

async fn patch_todo(
    State(state): State<Stub>,
    Path(id): Path<u64>,
    Json(body): Json<PatchBody>,
) -> Result<Json<Todo>, StatusCode> {
    let mut state = state.write().await;
    let todo = state
        .todos
        .iter_mut()
        .find(|t| t.id == id)
        .ok_or(StatusCode::NOT_FOUND)?;
    todo.done = body.done;
    Ok(Json(todo.clone()))
}

async fn delete_todo(State(state): State<Stub>, Path(id): Path<u64>) -> StatusCode {
    let mut state = state.write().await;
    let before = state.todos.len();
    state.todos.retain(|t| t.id != id);
    if state.todos.len() < before {
        StatusCode::NO_CONTENT
    } else {
        StatusCode::NOT_FOUND
    }
}

async fn get_data(State(state): State<Stub>) -> Json<DataSnapshot> {
    let mut state = state.write().await;
    let from_cache = state.cached;
    state.cached = true;

    let now = epoch_now();
    let items: Vec<SnapshotItem> = state
        .todos
        .iter()
        .map(|t| SnapshotItem {
            id: t.id,
            title: t.title.clone(),
            done: t.done,
            created_at: t.created_at,
            timestamp: now,
        })
        .collect();

    let total = items.len() as u64;
    let completed = items.iter().filter(|t| t.done).count() as u64;
    let completion_rate = if total > 0 {
        completed as f64 / total as f64 * 100.0
    } else {
        0.0
    };

    Json(DataSnapshot {
        todos: items,
        stats: Stats {
            total,
            completed,
            pending: total - completed,
            completion_rate,
        },
        generated_at: Utc::now(),
        from_cache,
        load_time: if from_cache { 1.2 } else { 8.7 },
    })
}

async fn clear_data(State(state): State<Stub>) -> StatusCode {
    state.write().await.cached = false;
    StatusCode::NO_CONTENT
}

async fn health() -> Json<serde_json::Value> {
    Json(serde_json::json!({"ok": true, "redis": true}))
}

/// Start the stub on a random port and return a client pointed at it.
async fn client() -> ApiClient {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, router()).await.unwrap();
    });
    ApiClient::new(&format!("http://{addr}")).unwrap()
}

#[tokio::test]
async fn todo_crud_lifecycle() {
    let client = client().await;

    let todos = client.list_todos().await.unwrap();
    assert!(todos.is_empty(), "expected empty list");

    let created = client.create_todo("Integration test").await.unwrap();
    assert_eq!(created.title, "Integration test");
    assert!(!created.done);
    assert!(created.created_at > 0.0);

    let todos = client.list_todos().await.unwrap();
    assert_eq!(todos.len(), 1);
    assert_eq!(todos[0], created);

    let updated = client.toggle_todo(created.id, true).await.unwrap();
    assert_eq!(updated.id, created.id);
    assert!(updated.done);

    let reverted = client.toggle_todo(created.id, false).await.unwrap();
    assert!(!reverted.done);

    client.delete_todo(created.id).await.unwrap();
    let todos = client.list_todos().await.unwrap();
    assert!(todos.is_empty(), "expected empty list after delete");

    let err = client.delete_todo(created.id).await.unwrap_err();
    assert!(matches!(err, TuidoError::NotFound(_)));
}

#[tokio::test]
async fn create_rejected_with_server_detail() {
    let client = client().await;

    let err = client.create_todo("   ").await.unwrap_err();
    match err {
        TuidoError::Rejected(detail) => assert!(detail.contains("title")),
        other => panic!("expected Rejected, got {other:?}"),
    }
}

#[tokio::test]
async fn missing_todo_maps_to_not_found() {
    let client = client().await;

    let err = client.toggle_todo(999, true).await.unwrap_err();
    assert!(matches!(err, TuidoError::NotFound(_)));
}

#[tokio::test]
async fn snapshot_reflects_store_and_cache() {
    let client = client().await;

    let a = client.create_todo("first").await.unwrap();
    client.create_todo("second").await.unwrap();
    client.create_todo("third").await.unwrap();
    client.toggle_todo(a.id, true).await.unwrap();

    // First read comes from the primary store.
    let (snapshot, round_trip) = client.fetch_data().await.unwrap();
    assert!(!snapshot.from_cache);
    assert_eq!(snapshot.todos.len(), 3);
    assert_eq!(snapshot.stats.total, 3);
    assert_eq!(snapshot.stats.completed, 1);
    assert_eq!(snapshot.stats.pending, 2);
    assert_eq!(
        snapshot.stats.total,
        snapshot.stats.completed + snapshot.stats.pending
    );
    assert!((snapshot.stats.completion_rate - 100.0 / 3.0).abs() < 0.01);
    assert!(round_trip.as_nanos() > 0);

    // Second read is served from cache.
    let (snapshot, _) = client.fetch_data().await.unwrap();
    assert!(snapshot.from_cache);

    // Invalidation sends the next read back to the store.
    client.clear_cache().await.unwrap();
    let (snapshot, _) = client.fetch_data().await.unwrap();
    assert!(!snapshot.from_cache);
}

#[tokio::test]
async fn health_reports_redis() {
    let client = client().await;

    let health = client.health().await.unwrap();
    assert!(health.ok);
    assert!(health.redis);
    assert!(health.error.is_none());
}
