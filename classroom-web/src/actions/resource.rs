//! CRUD actions shared by every [`Resource`] collection.

use crate::api::{ApiClient, ApiError};
use crate::models::{Resource, ResourceState};
use classroom_shared::models::unwrap_data;
use serde_json::Value;
use yewdux::Dispatch;

fn item_path<T: Resource>(id: &str) -> String {
    format!("{}/{id}", T::ENDPOINT)
}

/// Loads the whole collection, replacing the cached list.
pub async fn fetch_all<T: Resource>(
    client: &ApiClient,
    store: &Dispatch<ResourceState<T>>,
) -> Result<usize, ApiError> {
    store.reduce_mut(|state| state.fetch_started());
    let result = async {
        let body: Value = client.get(T::ENDPOINT).await?;
        decode_list::<T>(unwrap_data(body))
    }
    .await;
    match result {
        Ok(items) => {
            let count = items.len();
            store.reduce_mut(|state| state.fetch_succeeded(items));
            log::debug!("loaded {count} {}", T::PLURAL);
            Ok(count)
        }
        Err(err) => {
            let message = err.message_or(&format!("Failed to load {}", T::PLURAL));
            log::error!("failed to load {}: {message}", T::PLURAL);
            store.reduce_mut(|state| state.fetch_failed(message));
            Err(err)
        }
    }
}

/// Creates `item` and prepends what the backend returned.
pub async fn create<T: Resource>(
    client: &ApiClient,
    store: &Dispatch<ResourceState<T>>,
    item: &T,
) -> Result<T, ApiError> {
    let result = async {
        let body: Value = client.post(T::ENDPOINT, item).await?;
        Ok::<T, ApiError>(serde_json::from_value(first_of(unwrap_data(body)))?)
    }
    .await;
    match result {
        Ok(created) => {
            store.reduce_mut(|state| state.created(created.clone()));
            Ok(created)
        }
        Err(err) => Err(mutation_failed(store, err, "Create", T::SINGULAR)),
    }
}

/// Sends `item` to `{endpoint}/{id}` and swaps the returned record in place.
pub async fn update<T: Resource>(
    client: &ApiClient,
    store: &Dispatch<ResourceState<T>>,
    id: &str,
    item: &T,
) -> Result<T, ApiError> {
    let result = async {
        let payload = with_id(serde_json::to_value(item)?, id);
        let body: Value = client.put(&item_path::<T>(id), &payload).await?;
        Ok::<T, ApiError>(serde_json::from_value(unwrap_data(body))?)
    }
    .await;
    match result {
        Ok(updated) => {
            store.reduce_mut(|state| state.updated(updated.clone()));
            Ok(updated)
        }
        Err(err) => Err(mutation_failed(store, err, "Update", T::SINGULAR)),
    }
}

/// Deletes `id` and drops it from the list. Returns the identifier that was
/// removed, which is the backend's `_id` when it echoes one.
pub async fn delete<T: Resource>(
    client: &ApiClient,
    store: &Dispatch<ResourceState<T>>,
    id: &str,
) -> Result<String, ApiError> {
    match client.delete::<Value>(&item_path::<T>(id)).await {
        Ok(body) => {
            let removed = deleted_id(&unwrap_data(body)).unwrap_or_else(|| id.to_string());
            store.reduce_mut(|state| state.deleted(&removed));
            Ok(removed)
        }
        Err(err) => Err(mutation_failed(store, err, "Delete", T::SINGULAR)),
    }
}

fn mutation_failed<T: Resource>(
    store: &Dispatch<ResourceState<T>>,
    err: ApiError,
    verb: &str,
    singular: &str,
) -> ApiError {
    let message = err.message_or(&format!("{verb} {singular} failed"));
    log::error!("{verb} {singular} failed: {message}");
    store.reduce_mut(|state| state.mutation_failed(message));
    err
}

fn decode_list<T: Resource>(body: Value) -> Result<Vec<T>, ApiError> {
    match body {
        Value::Null => Ok(Vec::new()),
        other => Ok(serde_json::from_value(other)?),
    }
}

/// Some endpoints answer a create with a one-element array.
fn first_of(body: Value) -> Value {
    match body {
        Value::Array(items) => items.into_iter().next().unwrap_or(Value::Null),
        other => other,
    }
}

fn with_id(mut payload: Value, id: &str) -> Value {
    if let Value::Object(map) = &mut payload {
        map.insert("id".to_string(), Value::String(id.to_string()));
    }
    payload
}

fn deleted_id(body: &Value) -> Option<String> {
    body.get("_id").and_then(Value::as_str).map(str::to_string)
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod tests {
    use super::*;
    use crate::models::{Announcements, LoadStatus, Quizzes};
    use crate::test_support::{FakeBackend, unreachable_client};
    use crate::token::MemoryTokenStore;
    use axum::extract::Path;
    use axum::http::StatusCode;
    use axum::routing::{get, post, put};
    use axum::{Json, Router};
    use classroom_shared::models::{Announcement, Quiz};
    use serde_json::json;
    use yewdux::Context;

    fn quiz(id: &str, name: &str) -> Quiz {
        Quiz {
            id: Some(id.to_string()),
            name: Some(name.to_string()),
            ..Quiz::default()
        }
    }

    fn names(state: &Quizzes) -> Vec<String> {
        state
            .list
            .iter()
            .map(|quiz| quiz.name.clone().unwrap_or_default())
            .collect()
    }

    fn quiz_routes() -> Router {
        Router::new()
            .route(
                "/quizzes",
                get(|| async {
                    Json(json!({
                        "success": true,
                        "data": [
                            { "_id": "q1", "name": "Sets", "questions": [] },
                            { "_id": "q2", "name": "Graphs" }
                        ]
                    }))
                })
                .post(|Json(body): Json<Value>| async move {
                    Json(json!([{ "_id": "q9", "name": body["name"] }]))
                }),
            )
            .route(
                "/quizzes/{id}",
                put(|Path(id): Path<String>, Json(body): Json<Value>| async move {
                    Json(json!({ "data": { "_id": id, "name": body["name"], "echoedId": body["id"] } }))
                })
                .delete(|Path(id): Path<String>| async move {
                    if id == "locked" {
                        (StatusCode::FORBIDDEN, Json(json!({ "message": "Quiz is locked" })))
                    } else {
                        (StatusCode::OK, Json(json!({ "_id": id })))
                    }
                }),
            )
    }

    #[tokio::test]
    async fn test_fetch_unwraps_envelope_in_server_order() {
        let backend = FakeBackend::start(quiz_routes()).await;
        let client = backend.client(&MemoryTokenStore::new());
        let store: Dispatch<Quizzes> = Dispatch::new(&Context::new());

        let count = fetch_all(&client, &store).await.unwrap();

        let state = store.get();
        assert_eq!(count, 2);
        assert_eq!(names(&state), ["Sets", "Graphs"]);
        assert_eq!(state.status, LoadStatus::Succeeded);
    }

    #[tokio::test]
    async fn test_fetch_accepts_bare_array() {
        let routes = Router::new().route(
            "/announcements",
            get(|| async { Json(json!([{ "_id": "a1", "title": "Welcome", "description": "Hi" }])) }),
        );
        let backend = FakeBackend::start(routes).await;
        let client = backend.client(&MemoryTokenStore::new());
        let store: Dispatch<Announcements> = Dispatch::new(&Context::new());

        fetch_all(&client, &store).await.unwrap();

        assert_eq!(store.get().list[0].title, "Welcome");
    }

    #[tokio::test]
    async fn test_fetch_failure_keeps_previous_list() {
        let routes = Router::new().route(
            "/quizzes",
            get(|| async { StatusCode::INTERNAL_SERVER_ERROR }),
        );
        let backend = FakeBackend::start(routes).await;
        let client = backend.client(&MemoryTokenStore::new());
        let store: Dispatch<Quizzes> = Dispatch::new(&Context::new());
        store.reduce_mut(|state| state.fetch_succeeded(vec![quiz("q1", "Cached")]));

        let err = fetch_all(&client, &store).await.unwrap_err();

        assert_eq!(err.status(), Some(500));
        let state = store.get();
        assert_eq!(state.status, LoadStatus::Failed);
        assert_eq!(state.error.as_deref(), Some("Internal Server Error"));
        assert_eq!(names(&state), ["Cached"]);
    }

    #[tokio::test]
    async fn test_fetch_transport_failure_uses_message() {
        let client = unreachable_client(&MemoryTokenStore::new());
        let store: Dispatch<Quizzes> = Dispatch::new(&Context::new());

        fetch_all(&client, &store).await.unwrap_err();

        let state = store.get();
        assert_eq!(state.status, LoadStatus::Failed);
        assert!(state.error.as_deref().is_some_and(|message| !message.is_empty()));
    }

    #[tokio::test]
    async fn test_create_takes_first_array_element_and_prepends() {
        let backend = FakeBackend::start(quiz_routes()).await;
        let client = backend.client(&MemoryTokenStore::new());
        let store: Dispatch<Quizzes> = Dispatch::new(&Context::new());
        store.reduce_mut(|state| state.fetch_succeeded(vec![quiz("q1", "Sets")]));

        let created = create(&client, &store, &Quiz {
            name: Some("Logic".to_string()),
            ..Quiz::default()
        })
        .await
        .unwrap();

        assert_eq!(created.id.as_deref(), Some("q9"));
        assert_eq!(names(&store.get()), ["Logic", "Sets"]);
    }

    #[tokio::test]
    async fn test_update_sends_id_and_replaces_in_place() {
        let backend = FakeBackend::start(quiz_routes()).await;
        let client = backend.client(&MemoryTokenStore::new());
        let store: Dispatch<Quizzes> = Dispatch::new(&Context::new());
        store.reduce_mut(|state| {
            state.fetch_succeeded(vec![quiz("q0", "First"), quiz("q1", "Old"), quiz("q2", "Last")]);
        });

        let updated = update(&client, &store, "q1", &quiz("q1", "New")).await.unwrap();

        assert_eq!(updated.extra.get("echoedId"), Some(&json!("q1")));
        assert_eq!(names(&store.get()), ["First", "New", "Last"]);
    }

    #[tokio::test]
    async fn test_delete_removes_returned_id() {
        let backend = FakeBackend::start(quiz_routes()).await;
        let client = backend.client(&MemoryTokenStore::new());
        let store: Dispatch<Quizzes> = Dispatch::new(&Context::new());
        store.reduce_mut(|state| state.fetch_succeeded(vec![quiz("q1", "Sets"), quiz("q2", "Graphs")]));

        let removed = delete(&client, &store, "q1").await.unwrap();

        assert_eq!(removed, "q1");
        assert_eq!(names(&store.get()), ["Graphs"]);
    }

    #[tokio::test]
    async fn test_delete_falls_back_to_requested_id() {
        let routes = Router::new().route(
            "/announcements/{id}",
            axum::routing::delete(|| async { Json(json!({ "success": true })) }),
        );
        let backend = FakeBackend::start(routes).await;
        let client = backend.client(&MemoryTokenStore::new());
        let store: Dispatch<Announcements> = Dispatch::new(&Context::new());
        store.reduce_mut(|state| {
            state.fetch_succeeded(vec![Announcement {
                id: Some("a1".to_string()),
                ..Announcement::default()
            }]);
        });

        let removed = delete(&client, &store, "a1").await.unwrap();

        assert_eq!(removed, "a1");
        assert!(store.get().list.is_empty());
    }

    #[tokio::test]
    async fn test_mutation_failure_records_error_and_keeps_list() {
        let backend = FakeBackend::start(quiz_routes()).await;
        let client = backend.client(&MemoryTokenStore::new());
        let store: Dispatch<Quizzes> = Dispatch::new(&Context::new());
        store.reduce_mut(|state| state.fetch_succeeded(vec![quiz("locked", "Final")]));

        let err = delete(&client, &store, "locked").await.unwrap_err();

        assert_eq!(err.status(), Some(403));
        let state = store.get();
        assert_eq!(state.error.as_deref(), Some("Quiz is locked"));
        assert_eq!(state.status, LoadStatus::Succeeded);
        assert_eq!(names(&state), ["Final"]);
    }

    #[tokio::test]
    async fn test_mutation_fallback_message() {
        let routes = Router::new().route(
            "/announcements",
            post(|| async { StatusCode::BAD_REQUEST }),
        );
        let backend = FakeBackend::start(routes).await;
        let client = backend.client(&MemoryTokenStore::new());
        let store: Dispatch<Announcements> = Dispatch::new(&Context::new());

        create(&client, &store, &Announcement::default()).await.unwrap_err();

        assert_eq!(store.get().error.as_deref(), Some("Bad Request"));
    }

    #[test]
    fn test_first_of_and_with_id() {
        assert_eq!(first_of(json!([{ "a": 1 }, { "a": 2 }])), json!({ "a": 1 }));
        assert_eq!(first_of(json!([])), Value::Null);
        assert_eq!(first_of(json!({ "a": 1 })), json!({ "a": 1 }));
        assert_eq!(with_id(json!({ "name": "x" }), "q1"), json!({ "name": "x", "id": "q1" }));
        assert_eq!(deleted_id(&json!({ "_id": "q1" })).as_deref(), Some("q1"));
        assert_eq!(deleted_id(&json!("ok")), None);
    }
}
