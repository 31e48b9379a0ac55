//! HTTP API for Ecdotica
//!
//! Endpoints:
//! - GET  /                                  - Service banner
//! - GET  /health                            - Health check
//! - POST /api/v1/text/analyze               - Raw quality report
//! - POST /api/v1/text/plagiarism-check      - (not implemented)
//! - POST /api/v1/manuscripts/submit         - Submit with preliminary analysis
//! - POST /api/v1/manuscripts/analyze        - Detailed analysis
//! - GET  /api/v1/manuscripts/quick-eval     - Quick evaluation (?text=)
//! - POST /api/v1/manuscripts/upload         - Multipart file upload
//! - POST /api/v1/manuscripts/decision       - Register editorial decision
//! - POST /api/v1/manuscripts/:id/publish    - (not implemented)
//! - POST /api/v1/review/suggest             - (not implemented)
//! - POST /api/v1/review/consistency-check   - (not implemented)
//! - POST /api/v1/blockchain/register        - (not implemented)
//! - GET  /api/v1/blockchain/verify/:hash    - (not implemented)

use std::sync::Arc;
use axum::{
    async_trait,
    extract::{
        multipart::{MultipartError, MultipartRejection},
        rejection::{JsonRejection, QueryRejection},
        DefaultBodyLimit, FromRequest, FromRequestParts, Multipart, Path, Query, Request, State,
    },
    http::{request::Parts, HeaderValue, Method, StatusCode},
    response::{IntoResponse, Json, Response},
    routing::{get, post},
    Router,
};
use chrono::Utc;
use serde::de::DeserializeOwned;
use tower_http::{
    cors::{AllowMethods, AllowOrigin, Any, CorsLayer},
    trace::TraceLayer,
};

use crate::config::{AppConfig, CorsConfig, LimitsConfig};
use crate::core::{
    policy, BlockchainRegistry, ExtractorRegistry, Publisher, ReviewAssistant,
    TextQualityAnalyzer, UnconfiguredBlockchain, UnconfiguredPublisher,
    UnconfiguredReviewAssistant,
};
use crate::error::{EcdoticaError, Result};
use crate::types::{
    BlockchainRegisterRequest, BlockchainRegisterResponse, DecisionRequest, DecisionResponse,
    Decision, EditorialIssues, ErrorResponse, HealthResponse, Inconsistency,
    ManuscriptAnalysisRequest, ManuscriptAnalysisResponse, ManuscriptSubmission, PublishRequest,
    PublishedPost, QualityReport, QuickEvalQuery, QuickEvalResponse, ReviewRequest,
    ReviewResponse, RootResponse, SimilarityReport, SubmissionResponse, TextAnalysisRequest,
    UploadResponse, Verification,
};

/// Multipart framing allowance on top of the file size limit
const MULTIPART_OVERHEAD_BYTES: usize = 64 * 1024;

/// Advertised on `/` and logged at startup
pub const ENDPOINTS: &[&str] = &[
    "GET  /health",
    "POST /api/v1/text/analyze",
    "POST /api/v1/text/plagiarism-check",
    "POST /api/v1/manuscripts/submit",
    "POST /api/v1/manuscripts/analyze",
    "GET  /api/v1/manuscripts/quick-eval",
    "POST /api/v1/manuscripts/upload",
    "POST /api/v1/manuscripts/decision",
    "POST /api/v1/manuscripts/:id/publish",
    "POST /api/v1/review/suggest",
    "POST /api/v1/review/consistency-check",
    "POST /api/v1/blockchain/register",
    "GET  /api/v1/blockchain/verify/:hash",
];

/// App state, shared read-only by every handler
pub struct AppState {
    pub analyzer: TextQualityAnalyzer,
    pub limits: LimitsConfig,
    pub extractors: ExtractorRegistry,
    pub blockchain: Arc<dyn BlockchainRegistry>,
    pub reviewer: Arc<dyn ReviewAssistant>,
    pub publisher: Arc<dyn Publisher>,
}

impl AppState {
    /// State with built-in extractors and unconfigured integrations
    pub fn from_config(config: &AppConfig) -> Self {
        Self {
            analyzer: TextQualityAnalyzer::with_config(config.analyzer),
            limits: config.limits.clone(),
            extractors: ExtractorRegistry::with_defaults(config.limits.max_upload_bytes),
            blockchain: Arc::new(UnconfiguredBlockchain),
            reviewer: Arc::new(UnconfiguredReviewAssistant),
            publisher: Arc::new(UnconfiguredPublisher),
        }
    }
}

/// Create the API router from config
pub fn create_router(config: &AppConfig) -> Router {
    create_router_with_state(AppState::from_config(config), &config.cors)
}

/// Create the API router around prepared state (custom integrations, tests)
///
/// Bodies over the limit are rejected by the extractors, so oversize requests
/// get the same JSON error body as every other failure.
pub fn create_router_with_state(state: AppState, cors: &CorsConfig) -> Router {
    let body_limit = state.extractors.max_bytes() + MULTIPART_OVERHEAD_BYTES;
    let state = Arc::new(state);

    Router::new()
        .route("/", get(root))
        .route("/health", get(health))
        .route("/api/v1/text/analyze", post(analyze_text))
        .route("/api/v1/text/plagiarism-check", post(plagiarism_check))
        .route("/api/v1/manuscripts/submit", post(submit_manuscript))
        .route("/api/v1/manuscripts/analyze", post(analyze_manuscript))
        .route("/api/v1/manuscripts/quick-eval", get(quick_eval))
        .route("/api/v1/manuscripts/upload", post(upload_manuscript))
        .route("/api/v1/manuscripts/decision", post(register_decision))
        .route("/api/v1/manuscripts/:id/publish", post(publish_manuscript))
        .route("/api/v1/review/suggest", post(review_suggest))
        .route("/api/v1/review/consistency-check", post(consistency_check))
        .route("/api/v1/blockchain/register", post(blockchain_register))
        .route("/api/v1/blockchain/verify/:hash", get(blockchain_verify))
        .layer(DefaultBodyLimit::max(body_limit))
        .layer(cors_layer(cors))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Build the CORS layer once from config
fn cors_layer(cors: &CorsConfig) -> CorsLayer {
    let origins = if cors.allows_any_origin() {
        tracing::warn!("CORS allows all origins; set cors.allowed_origins for production");
        AllowOrigin::any()
    } else {
        let origins: Vec<HeaderValue> = cors
            .allowed_origins
            .iter()
            .filter_map(|o| match o.parse::<HeaderValue>() {
                Ok(value) => Some(value),
                Err(_) => {
                    tracing::warn!("Ignoring invalid CORS origin '{}'", o);
                    None
                }
            })
            .collect();
        tracing::info!("CORS configured with {} allowed origin(s)", origins.len());
        AllowOrigin::list(origins)
    };

    let methods = if cors.allows_any_method() {
        AllowMethods::any()
    } else {
        let methods: Vec<Method> = cors
            .allowed_methods
            .iter()
            .filter_map(|m| match m.trim().to_ascii_uppercase().parse::<Method>() {
                Ok(method) => Some(method),
                Err(_) => {
                    tracing::warn!("Ignoring invalid CORS method '{}'", m);
                    None
                }
            })
            .collect();
        AllowMethods::list(methods)
    };

    CorsLayer::new()
        .allow_origin(origins)
        .allow_methods(methods)
        .allow_headers(Any)
}

fn status_for(err: &EcdoticaError) -> StatusCode {
    match err {
        EcdoticaError::Validation(_) => StatusCode::BAD_REQUEST,
        EcdoticaError::UnsupportedFormat(_) => StatusCode::UNSUPPORTED_MEDIA_TYPE,
        EcdoticaError::PayloadTooLarge(_) => StatusCode::PAYLOAD_TOO_LARGE,
        EcdoticaError::Extraction { .. } => StatusCode::UNPROCESSABLE_ENTITY,
        EcdoticaError::NotImplemented { .. } => StatusCode::NOT_IMPLEMENTED,
        EcdoticaError::Config(_) | EcdoticaError::Io(_) | EcdoticaError::Serialization(_) => {
            StatusCode::INTERNAL_SERVER_ERROR
        }
    }
}

impl IntoResponse for EcdoticaError {
    fn into_response(self) -> Response {
        let status = status_for(&self);
        if status.is_server_error() && status != StatusCode::NOT_IMPLEMENTED {
            tracing::error!(error = %self, "request failed");
        } else {
            tracing::debug!(error = %self, status = status.as_u16(), "request rejected");
        }

        let body = ErrorResponse {
            error_type: self.kind().to_string(),
            message: self.to_string(),
            status_code: status.as_u16(),
        };
        (status, Json(body)).into_response()
    }
}

/// Body-limit hits keep their 413; anything else the extractor rejects is bad input
fn rejected(status: StatusCode, message: String) -> EcdoticaError {
    if status == StatusCode::PAYLOAD_TOO_LARGE {
        EcdoticaError::payload_too_large(message)
    } else {
        EcdoticaError::validation(message)
    }
}

impl From<JsonRejection> for EcdoticaError {
    fn from(rejection: JsonRejection) -> Self {
        rejected(rejection.status(), rejection.body_text())
    }
}

impl From<QueryRejection> for EcdoticaError {
    fn from(rejection: QueryRejection) -> Self {
        rejected(rejection.status(), rejection.body_text())
    }
}

impl From<MultipartRejection> for EcdoticaError {
    fn from(rejection: MultipartRejection) -> Self {
        rejected(rejection.status(), rejection.body_text())
    }
}

impl From<MultipartError> for EcdoticaError {
    fn from(err: MultipartError) -> Self {
        rejected(err.status(), err.body_text())
    }
}

/// `Json` body extractor that rejects with `EcdoticaError`
pub struct ApiJson<T>(pub T);

#[async_trait]
impl<T, S> FromRequest<S> for ApiJson<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = EcdoticaError;

    async fn from_request(req: Request, state: &S) -> Result<Self> {
        let Json(value) = Json::<T>::from_request(req, state).await?;
        Ok(Self(value))
    }
}

/// `Query` extractor that rejects with `EcdoticaError`
pub struct ApiQuery<T>(pub T);

#[async_trait]
impl<T, S> FromRequestParts<S> for ApiQuery<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = EcdoticaError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self> {
        let Query(value) = Query::<T>::from_request_parts(parts, state).await?;
        Ok(Self(value))
    }
}

/// Service banner
async fn root() -> Json<RootResponse> {
    Json(RootResponse {
        api: "Ecdotica Editorial API".to_string(),
        version: crate::VERSION.to_string(),
        status: "operational".to_string(),
        endpoints: ENDPOINTS.to_vec(),
    })
}

/// Health check endpoint
async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy".to_string(),
        version: crate::VERSION.to_string(),
        timestamp: Utc::now(),
    })
}

/// Raw quality report; no length policy
async fn analyze_text(
    State(state): State<Arc<AppState>>,
    ApiJson(req): ApiJson<TextAnalysisRequest>,
) -> Result<Json<QualityReport>> {
    if !req.options.is_empty() {
        tracing::debug!(options = req.options.len(), "ignoring analysis options");
    }
    Ok(Json(state.analyzer.analyze(&req.text)))
}

/// Receive a manuscript and attach a preliminary analysis
async fn submit_manuscript(
    State(state): State<Arc<AppState>>,
    ApiJson(req): ApiJson<ManuscriptSubmission>,
) -> Result<Json<SubmissionResponse>> {
    policy::validate_submission(&req)?;

    let submitted_at = Utc::now();
    let manuscript_id = policy::manuscript_id(&req.title, submitted_at);
    let analysis = state.analyzer.analyze(&req.content);
    let auto_decision = policy::triage(&analysis);

    tracing::info!(
        manuscript_id = %manuscript_id,
        quality_score = analysis.quality_score,
        ?auto_decision,
        "manuscript received"
    );

    Ok(Json(SubmissionResponse {
        message: format!("Manuscript '{}' received. ID: {}", req.title, manuscript_id),
        manuscript_id,
        status: "received".to_string(),
        submission_date: submitted_at,
        author: req.author,
        title: req.title,
        genre: req.genre,
        document_hash: policy::document_hash(&req.content),
        preliminary_analysis: analysis,
        auto_decision,
    }))
}

/// Detailed analysis with categorized issues and recommendations
async fn analyze_manuscript(
    State(state): State<Arc<AppState>>,
    ApiJson(req): ApiJson<ManuscriptAnalysisRequest>,
) -> Result<Json<ManuscriptAnalysisResponse>> {
    policy::require_min_chars(&req.content, state.limits.min_analyze_chars)?;

    let inspection = state.analyzer.inspect(&req.content);
    let report = inspection.report;
    let editorial_issues = EditorialIssues {
        total_issues: inspection.findings.len(),
        issues: inspection.findings.iter().map(|i| i.detail()).collect(),
    };

    Ok(Json(ManuscriptAnalysisResponse {
        analysis_type: req.analysis_type,
        manuscript_id: req.manuscript_id,
        analyzed_at: Utc::now(),
        recommendations: policy::recommendations(&report),
        publication_ready: policy::publication_ready(&report),
        quality_analysis: report,
        editorial_issues,
        style_statistics: inspection.style,
    }))
}

/// Short evaluation for web forms
async fn quick_eval(
    State(state): State<Arc<AppState>>,
    ApiQuery(query): ApiQuery<QuickEvalQuery>,
) -> Result<Json<QuickEvalResponse>> {
    policy::require_min_chars(&query.text, state.limits.min_quick_eval_chars)?;

    let report = state.analyzer.analyze(&query.text);
    let evaluation = policy::evaluate(report.quality_score);

    Ok(Json(QuickEvalResponse {
        words: report.word_count,
        quality_score: report.quality_score,
        reading_time: report.estimated_reading_time_minutes,
        label: evaluation.to_string(),
        evaluation,
    }))
}

/// Multipart upload: `file` field → extract → analyze → route
async fn upload_manuscript(
    State(state): State<Arc<AppState>>,
    multipart: std::result::Result<Multipart, MultipartRejection>,
) -> Result<Json<UploadResponse>> {
    let mut multipart = multipart?;
    let mut upload = None;

    while let Some(field) = multipart.next_field().await? {
        if field.name() != Some("file") {
            continue;
        }
        let file_name = field
            .file_name()
            .map(|s| s.to_string())
            .ok_or_else(|| EcdoticaError::validation("Uploaded file has no file name"))?;
        let data = field.bytes().await?;
        upload = Some((file_name, data));
    }

    let (file_name, data) =
        upload.ok_or_else(|| EcdoticaError::validation("No file provided"))?;
    let (format, text) = state.extractors.extract(&file_name, &data)?;

    let inspection = state.analyzer.inspect(&text);
    let analysis = inspection.report;
    let (editorial_status, recommendation) = policy::route(&analysis);

    tracing::info!(
        file_name = %file_name,
        quality_score = analysis.quality_score,
        %editorial_status,
        "upload analyzed"
    );

    Ok(Json(UploadResponse {
        file_name,
        format: format.name().to_string(),
        analyzed_at: Utc::now(),
        analysis,
        style_statistics: inspection.style,
        editorial_status,
        recommendation: recommendation.to_string(),
    }))
}

/// Register an editor's decision (not persisted)
async fn register_decision(
    ApiJson(req): ApiJson<DecisionRequest>,
) -> Result<Json<DecisionResponse>> {
    let decision: Decision = req.decision.parse()?;

    tracing::info!(manuscript_id = %req.manuscript_id, ?decision, editor = %req.editor_name, "decision registered");

    Ok(Json(DecisionResponse {
        manuscript_id: req.manuscript_id,
        decision,
        decided_at: Utc::now(),
        editor: req.editor_name,
        feedback: req.feedback,
        status: "registered".to_string(),
        next_steps: decision.next_steps().to_string(),
    }))
}

async fn publish_manuscript(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
    ApiJson(req): ApiJson<PublishRequest>,
) -> Result<Json<PublishedPost>> {
    let post = state.publisher.publish(&id, &req.title, &req.content).await?;
    Ok(Json(post))
}

async fn plagiarism_check(
    State(state): State<Arc<AppState>>,
    ApiJson(req): ApiJson<TextAnalysisRequest>,
) -> Result<Json<SimilarityReport>> {
    let report = state.reviewer.plagiarism_check(&req.text).await?;
    Ok(Json(report))
}

async fn review_suggest(
    State(state): State<Arc<AppState>>,
    ApiJson(req): ApiJson<ReviewRequest>,
) -> Result<Json<ReviewResponse>> {
    let suggestions = state
        .reviewer
        .suggest(&req.text, req.context.as_deref())
        .await?;
    Ok(Json(ReviewResponse {
        status: "success".to_string(),
        suggestions,
    }))
}

async fn consistency_check(
    State(state): State<Arc<AppState>>,
    ApiJson(req): ApiJson<ReviewRequest>,
) -> Result<Json<Vec<Inconsistency>>> {
    let inconsistencies = state.reviewer.consistency_check(&req.text).await?;
    Ok(Json(inconsistencies))
}

async fn blockchain_register(
    State(state): State<Arc<AppState>>,
    ApiJson(req): ApiJson<BlockchainRegisterRequest>,
) -> Result<Json<BlockchainRegisterResponse>> {
    let receipt = state
        .blockchain
        .register(&req.document_hash, &req.metadata)
        .await?;
    Ok(Json(BlockchainRegisterResponse {
        status: "success".to_string(),
        receipt,
    }))
}

async fn blockchain_verify(
    State(state): State<Arc<AppState>>,
    Path(hash): Path<String>,
) -> Result<Json<Verification>> {
    let verification = state.blockchain.verify(&hash).await?;
    Ok(Json(verification))
}

/// Run the API server
pub async fn run_server(config: AppConfig) -> Result<()> {
    let addr = config.server.addr.clone();
    let router = create_router(&config);
    let listener = tokio::net::TcpListener::bind(&addr).await?;

    tracing::info!("Ecdotica API v{} running on http://{}", crate::VERSION, addr);
    for endpoint in ENDPOINTS {
        tracing::info!("  {}", endpoint);
    }

    axum::serve(listener, router).await?;
    Ok(())
}
