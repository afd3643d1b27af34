use super::{page, AppState};
use crate::{
    error::ArtError,
    models::{GenerateRequest, GenerationResponse, RefineRequest},
    prompt::{build_prompt, refine_prompt},
};
use actix_web::{http::header::ContentType, web, HttpResponse};
use serde_json::json;
use uuid::Uuid;

pub async fn index(state: web::Data<AppState>) -> HttpResponse {
    HttpResponse::Ok()
        .content_type(ContentType::html())
        .body(page::render_index(&state.catalog))
}

pub async fn script() -> HttpResponse {
    HttpResponse::Ok()
        .content_type("application/javascript; charset=utf-8")
        .body(page::SCRIPT_JS)
}

pub async fn styles(state: web::Data<AppState>) -> HttpResponse {
    HttpResponse::Ok().json(state.catalog.to_map())
}

pub async fn health() -> HttpResponse {
    HttpResponse::Ok().json(json!({ "status": "ok" }))
}

pub async fn generate(
    state: web::Data<AppState>,
    body: web::Json<GenerateRequest>,
) -> Result<HttpResponse, ArtError> {
    let request_id = Uuid::new_v4();
    let request = body.into_inner();

    let prompt = build_prompt(
        &state.catalog,
        &request.company_name,
        request.style.as_deref(),
        request.custom_prompt.as_deref(),
    )
    .map_err(|e| {
        log::warn!("[req:{}] generate rejected: {}", request_id, e);
        e
    })?;

    log::info!(
        "[req:{}] generating logo for {:?} (style: {})",
        request_id,
        request.company_name.trim(),
        request.style.as_deref().unwrap_or("none")
    );

    let image = state.generator.generate(&prompt, None).await.map_err(|e| {
        log::error!("[req:{}] generation failed: {}", request_id, e);
        e
    })?;

    log::info!("[req:{}] done, seed {}", request_id, image.seed);
    Ok(HttpResponse::Ok().json(GenerationResponse::from(image)))
}

pub async fn refine(
    state: web::Data<AppState>,
    body: web::Json<RefineRequest>,
) -> Result<HttpResponse, ArtError> {
    let request_id = Uuid::new_v4();
    let request = body.into_inner();

    let prompt = refine_prompt(&request.original_prompt, &request.refinement).map_err(|e| {
        log::warn!("[req:{}] refine rejected: {}", request_id, e);
        e
    })?;

    match request.seed {
        Some(seed) => log::info!("[req:{}] refining with seed {}", request_id, seed),
        None => log::info!("[req:{}] refining without a prior seed", request_id),
    }

    let image = state
        .generator
        .generate(&prompt, request.seed)
        .await
        .map_err(|e| {
            log::error!("[req:{}] refinement failed: {}", request_id, e);
            e
        })?;

    log::info!("[req:{}] done, seed {}", request_id, image.seed);
    Ok(HttpResponse::Ok().json(GenerationResponse::from(image)))
}
