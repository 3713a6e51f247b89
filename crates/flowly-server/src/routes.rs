use std::sync::Arc;

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::routing::{delete, get, post};
use axum::{Json, Router};
use flowly_core::{
    ChartTypeFilter, CoreError, Dashboard, FilterState, Intent, VisualizationItem,
    VisualizationResult,
};
use flowly_core::agents::conversation::ChatMessage;
use serde::{Deserialize, Serialize};

use crate::error::ApiError;
use crate::session::{self, LoginRequest, RegisterRequest, User};
use crate::state::AppState;

type Shared = State<Arc<AppState>>;

pub fn router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/query", post(query))
        .route("/history", get(history))
        .route("/visualizations", get(list_visualizations).post(add_visualization))
        .route("/visualizations/favorites", get(favorites))
        .route("/visualizations/recent", get(recent))
        .route("/visualizations/{id}", delete(remove_visualization))
        .route("/visualizations/{id}/save", post(toggle_saved))
        .route("/tags", get(tags))
        .route("/dashboards", get(dashboards))
        .route("/templates", get(templates))
        .route("/session", get(current_user).delete(logout))
        .route("/session/login", post(login))
        .route("/session/register", post(register))
        .with_state(state)
}

#[derive(Debug, Deserialize)]
struct QueryRequest {
    query: String,
}

#[derive(Debug, Serialize)]
struct QueryResponse {
    intent: Intent,
    visualization: Option<VisualizationResult>,
    message: String,
}

async fn query(State(state): Shared, Json(req): Json<QueryRequest>) -> Result<Json<QueryResponse>, ApiError> {
    if req.query.trim().is_empty() {
        return Err(CoreError::EmptyQuery.into());
    }

    if !state.query_latency.is_zero() {
        tokio::time::sleep(state.query_latency).await;
    }

    let mut ws = state.workspace.lock().await;
    let outcome = ws
        .conversation
        .ask(&req.query, state.classifier.as_ref(), &state.answers)?;
    tracing::info!(intent = ?outcome.intent(), "answered query");

    Ok(Json(QueryResponse {
        intent: outcome.intent(),
        message: outcome.message().to_string(),
        visualization: outcome.into_visualization(),
    }))
}

async fn history(State(state): Shared) -> Json<Vec<ChatMessage>> {
    let ws = state.workspace.lock().await;
    Json(ws.conversation.messages().to_vec())
}

/// Multi-select values arrive comma separated.
#[derive(Debug, Default, Deserialize)]
struct FilterParams {
    search: Option<String>,
    tags: Option<String>,
    dashboards: Option<String>,
    chart_type: Option<String>,
}

impl TryFrom<FilterParams> for FilterState {
    type Error = CoreError;

    fn try_from(p: FilterParams) -> Result<Self, Self::Error> {
        let chart_type_filter = match p.chart_type.as_deref() {
            None | Some("") => ChartTypeFilter::All,
            Some(raw) => raw.parse()?,
        };

        Ok(FilterState {
            search_term: p.search.unwrap_or_default(),
            selected_tags: split_list(p.tags.as_deref()),
            selected_dashboards: split_list(p.dashboards.as_deref()),
            chart_type_filter,
        })
    }
}

fn split_list(raw: Option<&str>) -> indexmap::IndexSet<String> {
    raw.unwrap_or_default()
        .split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(String::from)
        .collect()
}

async fn list_visualizations(
    State(state): Shared,
    Query(params): Query<FilterParams>,
) -> Result<Json<Vec<VisualizationItem>>, ApiError> {
    let filters = FilterState::try_from(params)?;
    let ws = state.workspace.lock().await;
    let items = ws.library.filter(&filters);
    tracing::debug!(matched = items.len(), total = ws.library.len(), "filtered visualizations");
    Ok(Json(items))
}

async fn add_visualization(
    State(state): Shared,
    Json(result): Json<VisualizationResult>,
) -> Result<(StatusCode, Json<VisualizationItem>), ApiError> {
    let item = VisualizationItem::from(result);
    let mut ws = state.workspace.lock().await;
    ws.library.add(item.clone())?;
    Ok((StatusCode::CREATED, Json(item)))
}

async fn favorites(State(state): Shared) -> Json<Vec<VisualizationItem>> {
    let ws = state.workspace.lock().await;
    Json(ws.library.favorites())
}

async fn recent(State(state): Shared) -> Json<Vec<VisualizationItem>> {
    let ws = state.workspace.lock().await;
    Json(ws.library.recent(state.recent_limit))
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct SavedResponse {
    id: String,
    is_saved: bool,
}

async fn toggle_saved(State(state): Shared, Path(id): Path<String>) -> Result<Json<SavedResponse>, ApiError> {
    let mut ws = state.workspace.lock().await;
    let is_saved = ws
        .library
        .toggle_saved(&id)
        .ok_or_else(|| ApiError::NotFound(id.clone()))?;
    Ok(Json(SavedResponse { id, is_saved }))
}

/// Unknown ids succeed too; deleting is idempotent.
async fn remove_visualization(State(state): Shared, Path(id): Path<String>) -> StatusCode {
    let mut ws = state.workspace.lock().await;
    if let Some(item) = ws.library.remove(&id) {
        tracing::info!("removed visualization {} ({})", item.id, item.title);
    }
    StatusCode::NO_CONTENT
}

async fn tags(State(state): Shared) -> Json<Vec<String>> {
    let ws = state.workspace.lock().await;
    Json(ws.library.all_tags())
}

async fn dashboards(State(state): Shared) -> Json<Vec<Dashboard>> {
    Json(state.dashboards.clone())
}

async fn templates(State(state): Shared) -> Json<Vec<VisualizationItem>> {
    Json(state.templates.clone())
}

async fn current_user(State(state): Shared) -> Result<Json<User>, ApiError> {
    let ws = state.workspace.lock().await;
    ws.session.get().map(Json).ok_or(ApiError::Unauthorized)
}

async fn login(State(state): Shared, Json(req): Json<LoginRequest>) -> Json<User> {
    let user = session::login(req);
    let mut ws = state.workspace.lock().await;
    ws.session.set(user.clone());
    Json(user)
}

async fn register(State(state): Shared, Json(req): Json<RegisterRequest>) -> Result<Json<User>, ApiError> {
    let user = session::register(req)?;
    let mut ws = state.workspace.lock().await;
    ws.session.set(user.clone());
    Ok(Json(user))
}

async fn logout(State(state): Shared) -> StatusCode {
    let mut ws = state.workspace.lock().await;
    ws.session.clear();
    StatusCode::NO_CONTENT
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use axum::body::{to_bytes, Body};
    use axum::http::{Method, Request};
    use serde_json::{json, Value};
    use tower::ServiceExt;

    use super::*;
    use crate::config::ServerConfig;

    fn app() -> Router {
        let config = ServerConfig {
            query_latency: Duration::ZERO,
            ..ServerConfig::default()
        };
        router(Arc::new(AppState::from_config(&config).unwrap()))
    }

    async fn send(app: &Router, method: Method, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
        let req = Request::builder().method(method).uri(uri);
        let req = match body {
            Some(b) => req
                .header("content-type", "application/json")
                .body(Body::from(b.to_string()))
                .unwrap(),
            None => req.body(Body::empty()).unwrap(),
        };

        let res = app.clone().oneshot(req).await.unwrap();
        let status = res.status();
        let bytes = to_bytes(res.into_body(), usize::MAX).await.unwrap();
        let value = if bytes.is_empty() {
            Value::Null
        } else {
            serde_json::from_slice(&bytes).unwrap()
        };
        (status, value)
    }

    fn ids(v: &Value) -> Vec<&str> {
        v.as_array()
            .unwrap()
            .iter()
            .map(|i| i["id"].as_str().unwrap())
            .collect()
    }

    #[tokio::test]
    async fn query_returns_visualization_and_records_history() {
        let app = app();
        let (status, body) = send(&app, Method::POST, "/query", Some(json!({ "query": "各产品销售占比" }))).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["intent"], "product_distribution");
        assert_eq!(body["visualization"]["chartType"], "pie");
        assert_eq!(body["visualization"]["series"].as_array().unwrap().len(), 5);

        let (_, history) = send(&app, Method::GET, "/history", None).await;
        let roles: Vec<&str> = history
            .as_array()
            .unwrap()
            .iter()
            .map(|m| m["role"].as_str().unwrap())
            .collect();
        assert_eq!(roles, ["user", "assistant"]);
    }

    #[tokio::test]
    async fn unrecognized_query_returns_fallback() {
        let app = app();
        let (status, body) = send(&app, Method::POST, "/query", Some(json!({ "query": "今天天气怎么样" }))).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["intent"], "unrecognized");
        assert!(body["visualization"].is_null());
        assert_eq!(body["message"], flowly_core::FALLBACK_MESSAGE);
    }

    #[tokio::test]
    async fn blank_query_is_bad_request() {
        let app = app();
        let (status, body) = send(&app, Method::POST, "/query", Some(json!({ "query": "   " }))).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"], "query must not be empty");

        let (_, history) = send(&app, Method::GET, "/history", None).await;
        assert!(history.as_array().unwrap().is_empty());
    }

    #[tokio::test]
    async fn list_applies_filters() {
        let app = app();
        let (status, body) = send(&app, Method::GET, "/visualizations?chart_type=pie", None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(ids(&body), ["2", "5"]);

        let uri = "/visualizations?tags=%E9%94%80%E5%94%AE,%E8%BD%AC%E5%8C%96";
        let (_, body) = send(&app, Method::GET, uri, None).await;
        assert_eq!(ids(&body), ["1", "2", "4"]);

        let (status, _) = send(&app, Method::GET, "/visualizations?chart_type=donut", None).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn toggle_and_delete() {
        let app = app();
        let (status, body) = send(&app, Method::POST, "/visualizations/3/save", None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["isSaved"], true);

        let (_, favs) = send(&app, Method::GET, "/visualizations/favorites", None).await;
        assert_eq!(ids(&favs), ["1", "2", "3", "4"]);

        let (status, _) = send(&app, Method::POST, "/visualizations/missing/save", None).await;
        assert_eq!(status, StatusCode::NOT_FOUND);

        let (status, _) = send(&app, Method::DELETE, "/visualizations/1", None).await;
        assert_eq!(status, StatusCode::NO_CONTENT);
        let (status, _) = send(&app, Method::DELETE, "/visualizations/1", None).await;
        assert_eq!(status, StatusCode::NO_CONTENT);

        let (_, recent) = send(&app, Method::GET, "/visualizations/recent", None).await;
        assert_eq!(ids(&recent), ["2", "3"]);
    }

    #[tokio::test]
    async fn query_result_can_be_saved_once() {
        let app = app();
        let (_, body) = send(&app, Method::POST, "/query", Some(json!({ "query": "转化漏斗" }))).await;
        let vis = body["visualization"].clone();

        let (status, _) = send(&app, Method::POST, "/visualizations", Some(vis.clone())).await;
        assert_eq!(status, StatusCode::CREATED);
        let (status, _) = send(&app, Method::POST, "/visualizations", Some(vis)).await;
        assert_eq!(status, StatusCode::CONFLICT);
    }

    #[tokio::test]
    async fn session_lifecycle() {
        let app = app();
        let (status, _) = send(&app, Method::GET, "/session", None).await;
        assert_eq!(status, StatusCode::UNAUTHORIZED);

        let register = json!({
            "name": "韩梅梅",
            "email": "han@example.com",
            "password": "x",
            "confirmPassword": "y",
        });
        let (status, _) = send(&app, Method::POST, "/session/register", Some(register)).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);

        let (status, user) = send(
            &app,
            Method::POST,
            "/session/login",
            Some(json!({ "email": "han@example.com", "password": "x" })),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(user["name"], "测试用户");

        let (_, current) = send(&app, Method::GET, "/session", None).await;
        assert_eq!(current["email"], "han@example.com");

        let (status, _) = send(&app, Method::DELETE, "/session", None).await;
        assert_eq!(status, StatusCode::NO_CONTENT);
        let (status, _) = send(&app, Method::GET, "/session", None).await;
        assert_eq!(status, StatusCode::UNAUTHORIZED);
    }
}
