use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::{
        sse::{Event, KeepAlive, Sse},
        IntoResponse,
    },
    routing::{get, post, put},
    Json, Router,
};
use serde::Serialize;
use std::{
    collections::HashMap,
    net::SocketAddr,
    sync::{
        atomic::{AtomicUsize, Ordering},
        Arc,
    },
    time::Duration,
};
use tokio::sync::{broadcast, Mutex};
use tokio_stream::{wrappers::BroadcastStream, StreamExt};
use tower_http::services::{ServeDir, ServeFile};

use crate::api::{
    ApiAnalyzeRequest, ApiAnalyzeResponse, ApiDraftRequest, ApiDraftResponse, ApiSuggestRequest,
    ApiSuggestResponse,
};
use crate::config::AppConfig;
use crate::llm::LlmClient;
use postcraft::analysis::suggest_keywords;
use postcraft::history::{now_ms, HistoryStore, PostDraft, PostRecord};
use postcraft::suggest::{detect_hashtags, suggest_emojis, trending_hashtags, Category};
use postcraft::analyze_post;

#[derive(Clone)]
struct AppState {
    llm_client: Option<LlmClient>,
    history: Arc<HistoryStore>,
    channels: Arc<Mutex<HashMap<String, broadcast::Sender<StreamEvent>>>>,
}

#[derive(Clone, Serialize)]
struct StreamEvent {
    event: String,
    message: String,
    timestamp_ms: u128,
}

#[derive(serde::Deserialize)]
struct StreamQuery {
    request_id: String,
}

#[derive(serde::Deserialize)]
struct TrendingQuery {
    category: Option<String>,
}

#[derive(serde::Deserialize)]
struct UpdateContentRequest {
    content: String,
}

static REQUEST_COUNTER: AtomicUsize = AtomicUsize::new(0);

pub async fn serve(args: crate::ServeArgs, config: AppConfig) -> Result<(), String> {
    let history = HistoryStore::load(config.history.path.clone(), config.history.limit).await?;
    let llm_client = LlmClient::from_env(&config.generator, None);
    if llm_client.is_none() {
        tracing::warn!("OPENROUTER_API_KEY not set, draft generation disabled");
    }

    let state = AppState {
        llm_client,
        history: Arc::new(history),
        channels: Arc::new(Mutex::new(HashMap::new())),
    };

    let web_root = args.web_root;
    let index_path = format!("{}/index.html", web_root.trim_end_matches('/'));
    let static_service = ServeDir::new(web_root).not_found_service(ServeFile::new(index_path));

    let app = Router::new()
        .route("/api/health", get(health))
        .route("/api/analyze", post(analyze_handler))
        .route("/api/suggest", post(suggest_handler))
        .route("/api/hashtags/trending", get(trending_handler))
        .route("/api/draft", post(draft_handler))
        .route("/api/draft/stream", get(stream_handler))
        .route("/api/history", get(history_list_handler).post(history_save_handler))
        .route(
            "/api/history/:id",
            put(history_update_handler).delete(history_delete_handler),
        )
        .nest_service("/", static_service)
        .with_state(state);

    let addr: SocketAddr = format!("{}:{}", args.host, args.port)
        .parse()
        .map_err(|err| format!("invalid bind address: {}", err))?;

    tracing::info!(%addr, "postcraft server listening");
    axum::serve(
        tokio::net::TcpListener::bind(addr)
            .await
            .map_err(|err| format!("failed to bind server: {}", err))?,
        app,
    )
    .await
    .map_err(|err| format!("server error: {}", err))?;

    Ok(())
}

async fn health() -> impl IntoResponse {
    StatusCode::OK
}

async fn analyze_handler(
    Json(request): Json<ApiAnalyzeRequest>,
) -> Result<Json<ApiAnalyzeResponse>, (StatusCode, String)> {
    let (text, industry) = request
        .into_parts()
        .map_err(|err| (StatusCode::BAD_REQUEST, err))?;
    let report = analyze_post(&text);
    let keywords = suggest_keywords(&text, industry);
    Ok(Json(ApiAnalyzeResponse {
        report,
        industry,
        keywords,
    }))
}

async fn suggest_handler(
    Json(request): Json<ApiSuggestRequest>,
) -> Json<ApiSuggestResponse> {
    let text = request.text.unwrap_or_default();
    Json(ApiSuggestResponse {
        hashtags: detect_hashtags(&text),
        emojis: suggest_emojis(&text),
    })
}

async fn trending_handler(
    Query(query): Query<TrendingQuery>,
) -> Result<Json<Vec<&'static str>>, (StatusCode, String)> {
    let category = match query.category.as_deref() {
        Some(value) => Category::from_str(value)
            .ok_or_else(|| (StatusCode::BAD_REQUEST, format!("unknown category: {}", value)))?,
        None => Category::General,
    };
    Ok(Json(trending_hashtags(category).to_vec()))
}

async fn draft_handler(
    State(state): State<AppState>,
    Json(request): Json<ApiDraftRequest>,
) -> Result<Json<ApiDraftResponse>, (StatusCode, String)> {
    let request_id = request
        .request_id
        .clone()
        .unwrap_or_else(generate_request_id);
    let (draft, model_override) = request
        .into_draft()
        .map_err(|err| (StatusCode::BAD_REQUEST, err))?;

    let not_configured = || {
        (
            StatusCode::SERVICE_UNAVAILABLE,
            "draft generation not configured: set OPENROUTER_API_KEY".to_string(),
        )
    };
    let client = match model_override {
        // A per-request model override needs a client with its own model chain.
        Some(model) => {
            let (config, _) =
                AppConfig::load(None).map_err(|err| (StatusCode::INTERNAL_SERVER_ERROR, err))?;
            LlmClient::from_env(&config.generator, Some(model)).ok_or_else(not_configured)?
        }
        None => state.llm_client.clone().ok_or_else(not_configured)?,
    };

    let channel = get_or_create_channel(&state, &request_id).await;
    send_event(&channel, "start", "Building draft prompt");
    send_event(&channel, "calling", "Calling draft model");

    let outcome = match client.draft_post(&draft).await {
        Ok(outcome) => {
            send_event(&channel, "received", "Received draft");
            outcome
        }
        Err(err) => {
            send_event(&channel, "error", "Draft generation failed");
            schedule_cleanup(state.channels.clone(), request_id);
            return Err((StatusCode::BAD_GATEWAY, err));
        }
    };

    let report = analyze_post(&outcome.text);
    send_event(&channel, "done", "Draft scored");
    schedule_cleanup(state.channels.clone(), request_id.clone());

    Ok(Json(ApiDraftResponse {
        request_id,
        text: outcome.text,
        trace: outcome.trace,
        report,
    }))
}

async fn stream_handler(
    State(state): State<AppState>,
    Query(query): Query<StreamQuery>,
) -> Result<Sse<impl tokio_stream::Stream<Item = Result<Event, std::convert::Infallible>>>, StatusCode>
{
    let sender = get_or_create_channel(&state, &query.request_id).await;
    let receiver = sender.subscribe();
    let stream = BroadcastStream::new(receiver).filter_map(|event| match event {
        Ok(event) => {
            let data = serde_json::to_string(&event).unwrap_or_default();
            Some(Ok(Event::default().data(data)))
        }
        Err(_) => None,
    });

    send_event(&sender, "connected", "Streaming draft status");
    Ok(Sse::new(stream).keep_alive(KeepAlive::new().interval(Duration::from_secs(8))))
}

async fn history_list_handler(State(state): State<AppState>) -> Json<Vec<PostRecord>> {
    Json(state.history.list().await)
}

async fn history_save_handler(
    State(state): State<AppState>,
    Json(draft): Json<PostDraft>,
) -> Result<Json<PostRecord>, (StatusCode, String)> {
    if draft.content.trim().is_empty() {
        return Err((StatusCode::BAD_REQUEST, "content is required".to_string()));
    }
    let record = state
        .history
        .save(draft)
        .await
        .map_err(|err| (StatusCode::INTERNAL_SERVER_ERROR, err))?;
    Ok(Json(record))
}

async fn history_update_handler(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(request): Json<UpdateContentRequest>,
) -> Result<StatusCode, (StatusCode, String)> {
    let updated = state
        .history
        .update_content(&id, request.content)
        .await
        .map_err(|err| (StatusCode::INTERNAL_SERVER_ERROR, err))?;
    if updated {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err((StatusCode::NOT_FOUND, format!("no record with id {}", id)))
    }
}

async fn history_delete_handler(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<StatusCode, (StatusCode, String)> {
    let removed = state
        .history
        .delete(&id)
        .await
        .map_err(|err| (StatusCode::INTERNAL_SERVER_ERROR, err))?;
    if removed {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err((StatusCode::NOT_FOUND, format!("no record with id {}", id)))
    }
}

async fn get_or_create_channel(
    state: &AppState,
    request_id: &str,
) -> broadcast::Sender<StreamEvent> {
    let mut guard = state.channels.lock().await;
    if let Some(sender) = guard.get(request_id) {
        return sender.clone();
    }
    let (sender, _) = broadcast::channel(32);
    guard.insert(request_id.to_string(), sender.clone());
    sender
}

fn send_event(sender: &broadcast::Sender<StreamEvent>, event: &str, message: &str) {
    let _ = sender.send(StreamEvent {
        event: event.to_string(),
        message: message.to_string(),
        timestamp_ms: now_ms(),
    });
}

fn schedule_cleanup(
    channels: Arc<Mutex<HashMap<String, broadcast::Sender<StreamEvent>>>>,
    request_id: String,
) {
    tokio::spawn(async move {
        tokio::time::sleep(Duration::from_secs(10)).await;
        let mut guard = channels.lock().await;
        guard.remove(&request_id);
    });
}

fn generate_request_id() -> String {
    let counter = REQUEST_COUNTER.fetch_add(1, Ordering::Relaxed);
    format!("req-{}-{}", now_ms(), counter)
}
