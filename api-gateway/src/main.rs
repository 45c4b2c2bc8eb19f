//! SmartInsure API Gateway
//!
//! REST surface for the SmartInsure demo portal:
//! - Home: hero copy and feature cards
//! - Premium: stateless premium quote for a risk profile form
//! - Sessions: one portal per visitor (tabs, instant quote, risk assessment
//!   wizard, claims, coaching, toasts)
//! - Policies: the mock policy dashboard

use axum::{
    extract::{Path, State},
    http::{Method, StatusCode},
    response::{IntoResponse, Json, Response},
    routing::{get, post, put},
    Router,
};
use serde::{Deserialize, Serialize};
use smartinsure_common::{
    PremiumQuote, PricingError, RiskProfile, RiskProfileForm, SessionError, SmartInsureError,
    Toast,
};
use smartinsure_portal::{
    catalogue, session::CoachingView, PortalConfig, PortalSession, SessionStore, SessionView, Tab,
};
use smartinsure_pricing::{session_rng, CoverageOptions, PremiumCalculator};
use std::sync::Arc;
use tower_http::{
    compression::CompressionLayer,
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};
use tracing::{info, warn};
use uuid::Uuid;

// ============ STATE ============

#[derive(Clone)]
struct AppState {
    store: Arc<SessionStore>,
}

// ============ ERRORS ============

struct ApiError(SmartInsureError);

impl From<SmartInsureError> for ApiError {
    fn from(err: SmartInsureError) -> Self {
        Self(err)
    }
}

impl ApiError {
    fn status(&self) -> StatusCode {
        match &self.0 {
            SmartInsureError::Validation(_) => StatusCode::UNPROCESSABLE_ENTITY,
            SmartInsureError::Pricing(PricingError::EmptyDescription) => {
                StatusCode::UNPROCESSABLE_ENTITY
            }
            SmartInsureError::Session(SessionError::NotFound(_))
            | SmartInsureError::Session(SessionError::UnknownAction(_)) => StatusCode::NOT_FOUND,
            SmartInsureError::Session(_) => StatusCode::CONFLICT,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        if status.is_server_error() {
            warn!(error = %self.0, "Request failed");
        }
        (
            status,
            Json(serde_json::json!({ "error": self.0.to_string() })),
        )
            .into_response()
    }
}

type ApiResult<T> = Result<T, ApiError>;

// ============ REQUEST / RESPONSE TYPES ============

#[derive(Debug, Deserialize)]
struct SelectTabRequest {
    tab: Tab,
}

#[derive(Debug, Deserialize)]
struct DescriptionRequest {
    description: String,
}

#[derive(Debug, Default, Deserialize)]
struct AiQuoteRequest {
    #[serde(default)]
    description: Option<String>,
}

#[derive(Debug, Deserialize)]
struct FieldRequest {
    field: String,
    value: String,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct PremiumResponse {
    monthly_premium: u32,
    quote: PremiumQuote,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct ClaimSubmitted {
    claim_id: String,
    session: SessionView,
}

// ============ HANDLERS ============

async fn health_check() -> Json<serde_json::Value> {
    Json(serde_json::json!({
        "status": "healthy",
        "version": env!("CARGO_PKG_VERSION"),
    }))
}

async fn get_home() -> Json<catalogue::HomeContent> {
    Json(catalogue::home())
}

async fn get_policies() -> Json<smartinsure_portal::state::DashboardView> {
    Json(smartinsure_portal::state::DashboardView::build())
}

async fn calculate_premium(
    State(state): State<AppState>,
    Json(form): Json<RiskProfileForm>,
) -> ApiResult<Json<PremiumResponse>> {
    let profile = RiskProfile::from_form(&form).map_err(SmartInsureError::from)?;
    let mut rng = session_rng(state.store.config().rng_seed);
    let quote = PremiumCalculator::new().quote(&profile, &mut rng)?;

    info!(premium = quote.monthly_premium, "Calculated premium");
    Ok(Json(PremiumResponse {
        monthly_premium: quote.monthly_premium,
        quote,
    }))
}

async fn create_session(State(state): State<AppState>) -> (StatusCode, Json<SessionView>) {
    let (_, session) = state.store.create();
    let view = session.lock().view();
    (StatusCode::CREATED, Json(view))
}

async fn get_session(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> ApiResult<Json<SessionView>> {
    mutate(&state, id, |_| Ok(()))
}

async fn delete_session(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> ApiResult<StatusCode> {
    state.store.remove(&id)?;
    Ok(StatusCode::NO_CONTENT)
}

/// Apply `f` to a session and return its updated view
fn mutate(
    state: &AppState,
    id: Uuid,
    f: impl FnOnce(&mut PortalSession) -> smartinsure_common::Result<()>,
) -> ApiResult<Json<SessionView>> {
    let view = state.store.with_session(&id, |session| {
        f(session)?;
        Ok(session.view())
    })?;
    Ok(Json(view))
}

async fn select_tab(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(req): Json<SelectTabRequest>,
) -> ApiResult<Json<SessionView>> {
    mutate(&state, id, |s| s.select_tab(req.tab))
}

async fn get_quote(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> ApiResult<Json<SessionView>> {
    mutate(&state, id, |s| s.get_quote())
}

async fn set_description(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(req): Json<DescriptionRequest>,
) -> ApiResult<Json<SessionView>> {
    mutate(&state, id, |s| s.set_description(req.description))
}

async fn set_coverage(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(coverage): Json<CoverageOptions>,
) -> ApiResult<Json<SessionView>> {
    mutate(&state, id, |s| s.set_coverage(coverage))
}

async fn run_ai_quote(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    body: Option<Json<AiQuoteRequest>>,
) -> ApiResult<Json<SessionView>> {
    let Json(req) = body.unwrap_or_default();
    if let Some(description) = req.description {
        state
            .store
            .with_session(&id, |s| s.set_description(description))?;
    }

    // Run on its own task so a dropped connection cannot strand the session
    // in the processing state
    let store = state.store.clone();
    let base_premium = tokio::spawn(async move { store.run_ai_quote(&id).await })
        .await
        .map_err(|e| SmartInsureError::Internal(e.to_string()))??;

    if base_premium.is_none() {
        info!(session = %id, "AI quote ended without a result");
    }
    mutate(&state, id, |_| Ok(()))
}

async fn cancel_ai_quote(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> ApiResult<Json<SessionView>> {
    mutate(&state, id, |s| s.cancel_ai_quote().map(|_| ()))
}

async fn assessment_field(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(req): Json<FieldRequest>,
) -> ApiResult<Json<SessionView>> {
    mutate(&state, id, |s| s.assessment_set_field(&req.field, req.value))
}

async fn assessment_next(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> ApiResult<Json<SessionView>> {
    mutate(&state, id, |s| s.assessment_next())
}

async fn assessment_previous(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> ApiResult<Json<SessionView>> {
    mutate(&state, id, |s| s.assessment_previous())
}

async fn assessment_reset(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> ApiResult<Json<SessionView>> {
    mutate(&state, id, |s| s.assessment_reset())
}

async fn open_claim_form(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> ApiResult<Json<SessionView>> {
    mutate(&state, id, |s| s.open_claim_form())
}

async fn close_claim_form(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> ApiResult<Json<SessionView>> {
    mutate(&state, id, |s| s.close_claim_form())
}

async fn claim_field(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(req): Json<FieldRequest>,
) -> ApiResult<Json<SessionView>> {
    mutate(&state, id, |s| s.set_claim_field(&req.field, req.value))
}

async fn submit_claim(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> ApiResult<(StatusCode, Json<ClaimSubmitted>)> {
    let submitted = state.store.with_session(&id, |s| {
        let claim_id = s.submit_claim()?;
        Ok(ClaimSubmitted {
            claim_id,
            session: s.view(),
        })
    })?;
    Ok((StatusCode::CREATED, Json(submitted)))
}

async fn get_coaching(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> ApiResult<Json<CoachingView>> {
    let view = state.store.with_session(&id, |s| Ok(s.coaching()))?;
    Ok(Json(view))
}

async fn complete_coaching(
    State(state): State<AppState>,
    Path((id, action_id)): Path<(Uuid, u32)>,
) -> ApiResult<Json<CoachingView>> {
    let view = state.store.with_session(&id, |s| {
        s.complete_coaching(action_id)?;
        Ok(s.coaching())
    })?;
    Ok(Json(view))
}

async fn drain_toasts(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> ApiResult<Json<Vec<Toast>>> {
    let toasts = state.store.with_session(&id, |s| Ok(s.drain_toasts()))?;
    Ok(Json(toasts))
}

// ============ ROUTER ============

fn app(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::GET, Method::POST, Method::PUT, Method::DELETE, Method::OPTIONS])
        .allow_headers(Any);

    Router::new()
        // Static content
        .route("/health", get(health_check))
        .route("/home", get(get_home))
        .route("/policies", get(get_policies))
        .route("/premium", post(calculate_premium))
        // Sessions
        .route("/sessions", post(create_session))
        .route("/sessions/:id", get(get_session).delete(delete_session))
        .route("/sessions/:id/tab", post(select_tab))
        .route("/sessions/:id/get-quote", post(get_quote))
        // Instant quote
        .route("/sessions/:id/instant-quote/description", put(set_description))
        .route("/sessions/:id/instant-quote/coverage", put(set_coverage))
        .route("/sessions/:id/instant-quote/ai", post(run_ai_quote))
        .route("/sessions/:id/instant-quote/cancel", post(cancel_ai_quote))
        // Risk assessment
        .route("/sessions/:id/assessment/field", put(assessment_field))
        .route("/sessions/:id/assessment/next", post(assessment_next))
        .route("/sessions/:id/assessment/previous", post(assessment_previous))
        .route("/sessions/:id/assessment/reset", post(assessment_reset))
        // Claims
        .route("/sessions/:id/claims", post(submit_claim))
        .route("/sessions/:id/claims/form", put(claim_field))
        .route("/sessions/:id/claims/form/open", post(open_claim_form))
        .route("/sessions/:id/claims/form/close", post(close_claim_form))
        // Coaching
        .route("/sessions/:id/coaching", get(get_coaching))
        .route(
            "/sessions/:id/coaching/:action_id/complete",
            post(complete_coaching),
        )
        .route("/sessions/:id/toasts", get(drain_toasts))
        // Middleware
        .layer(TraceLayer::new_for_http())
        .layer(CompressionLayer::new())
        .layer(cors)
        .with_state(state)
}

// ============ MAIN ============

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("api_gateway=info".parse()?)
                .add_directive("smartinsure_portal=info".parse()?),
        )
        .json()
        .init();

    let config = PortalConfig::load()?;
    let addr = config.bind_addr();

    let state = AppState {
        store: Arc::new(SessionStore::new(config)),
    };

    info!("SmartInsure API Gateway starting on {}", addr);
    info!("Endpoints: /health, /home, /premium, /policies, /sessions");

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(listener, app(state)).await?;

    Ok(())
}
