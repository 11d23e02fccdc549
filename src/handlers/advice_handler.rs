use actix_web::{post, web, HttpRequest, HttpResponse};
use chrono::Utc;

use crate::{
    app_state::AppState,
    errors::AppError,
    middleware::get_request_id,
    models::dto::{
        request::{
            AlertsRequestDto, BankingLiteracyRequestDto, CareerPathfinderRequestDto,
            DigitalServicesRequestDto, DoubtSolverRequestDto, FarmingAdvisoryRequestDto,
            IntoAdviceRequest, LearningPlanRequestDto, LegalAdviceRequestDto,
            PlanningToolsRequestDto, QuizRequestDto, SchemesRequestDto, SosLogRequestDto,
        },
        response::{AdvicePayload, SuccessEnvelope},
    },
};

/// Validate, run the pipeline, wrap the result. Any failure becomes an `AppError` response.
async fn respond<T: IntoAdviceRequest>(
    state: &AppState,
    req: &HttpRequest,
    body: T,
) -> Result<HttpResponse, AppError> {
    let request = body.into_advice_request()?;
    let endpoint = request.endpoint();
    let request_id = get_request_id(req).unwrap_or_default();
    log::info!("{} request received [{}]", endpoint, request_id);

    let payload = state.advice_service.generate(request).await?;
    log::info!(
        "{} answered with field {} [{}]",
        endpoint,
        endpoint.result_field(),
        request_id
    );
    Ok(HttpResponse::Ok().json(SuccessEnvelope::new(payload)))
}

#[post("/api/learning-planner/generate")]
pub async fn generate_learning_plan(
    state: web::Data<AppState>,
    req: HttpRequest,
    body: web::Json<LearningPlanRequestDto>,
) -> Result<HttpResponse, AppError> {
    respond(&state, &req, body.into_inner()).await
}

#[post("/api/quiz/generate")]
pub async fn generate_quiz(
    state: web::Data<AppState>,
    req: HttpRequest,
    body: web::Json<QuizRequestDto>,
) -> Result<HttpResponse, AppError> {
    respond(&state, &req, body.into_inner()).await
}

#[post("/api/farming/advisory")]
pub async fn farming_advisory(
    state: web::Data<AppState>,
    req: HttpRequest,
    body: web::Json<FarmingAdvisoryRequestDto>,
) -> Result<HttpResponse, AppError> {
    respond(&state, &req, body.into_inner()).await
}

#[post("/api/safety/legal-advice")]
pub async fn legal_advice(
    state: web::Data<AppState>,
    req: HttpRequest,
    body: web::Json<LegalAdviceRequestDto>,
) -> Result<HttpResponse, AppError> {
    respond(&state, &req, body.into_inner()).await
}

#[post("/api/safety/schemes")]
pub async fn government_schemes(
    state: web::Data<AppState>,
    req: HttpRequest,
    body: web::Json<SchemesRequestDto>,
) -> Result<HttpResponse, AppError> {
    respond(&state, &req, body.into_inner()).await
}

/// Plain strings are logged bare; coordinates and other shapes as compact JSON.
fn sos_location(location: &serde_json::Value) -> String {
    match location {
        serde_json::Value::String(place) => place.clone(),
        serde_json::Value::Null => "unknown".to_string(),
        other => other.to_string(),
    }
}

/// Logs the activation only. Nothing is stored and the provider is never called.
#[post("/api/safety/sos-log")]
pub async fn log_sos(req: HttpRequest, body: Option<web::Json<SosLogRequestDto>>) -> HttpResponse {
    let location = body
        .and_then(|b| b.into_inner().location)
        .map(|l| sos_location(&l))
        .unwrap_or_else(|| "unknown".to_string());

    log::warn!(
        "SOS activated at {} location={} [{}]",
        Utc::now().to_rfc3339(),
        location,
        get_request_id(&req).unwrap_or_default()
    );

    HttpResponse::Ok().json(SuccessEnvelope::new(AdvicePayload::Message(
        "SOS logged successfully".to_string(),
    )))
}

#[post("/api/safety/alerts")]
pub async fn disaster_alerts(
    state: web::Data<AppState>,
    req: HttpRequest,
    body: web::Json<AlertsRequestDto>,
) -> Result<HttpResponse, AppError> {
    respond(&state, &req, body.into_inner()).await
}

#[post("/api/finance/banking-literacy")]
pub async fn banking_literacy(
    state: web::Data<AppState>,
    req: HttpRequest,
    body: web::Json<BankingLiteracyRequestDto>,
) -> Result<HttpResponse, AppError> {
    respond(&state, &req, body.into_inner()).await
}

#[post("/api/finance/planning-tools")]
pub async fn planning_tools(
    state: web::Data<AppState>,
    req: HttpRequest,
    body: web::Json<PlanningToolsRequestDto>,
) -> Result<HttpResponse, AppError> {
    respond(&state, &req, body.into_inner()).await
}

#[post("/api/finance/digital-services")]
pub async fn digital_services(
    state: web::Data<AppState>,
    req: HttpRequest,
    body: web::Json<DigitalServicesRequestDto>,
) -> Result<HttpResponse, AppError> {
    respond(&state, &req, body.into_inner()).await
}

#[post("/api/career/pathfinder")]
pub async fn career_pathfinder(
    state: web::Data<AppState>,
    req: HttpRequest,
    body: web::Json<CareerPathfinderRequestDto>,
) -> Result<HttpResponse, AppError> {
    respond(&state, &req, body.into_inner()).await
}

#[post("/api/education/doubt-solver")]
pub async fn doubt_solver(
    state: web::Data<AppState>,
    req: HttpRequest,
    body: web::Json<DoubtSolverRequestDto>,
) -> Result<HttpResponse, AppError> {
    respond(&state, &req, body.into_inner()).await
}
