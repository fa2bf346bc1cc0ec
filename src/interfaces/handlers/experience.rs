use actix_web::{web, HttpResponse};
use uuid::Uuid;

use crate::{
    entities::experience::ExperienceInput,
    errors::AppError,
    use_cases::extractors::{AdminClaims, AuthClaims, BearerToken, CandidateClaims},
    AppState,
};

/// GET /experience. Admin role required.
pub async fn list_experiences(
    _claims: AdminClaims,
    state: web::Data<AppState>,
) -> Result<HttpResponse, AppError> {
    let experiences = state.experience_handler.get_all().await?;
    Ok(HttpResponse::Ok().json(experiences))
}

/// GET /experience/{id}. Any authenticated caller.
pub async fn get_experience(
    _claims: AuthClaims,
    state: web::Data<AppState>,
    id: web::Path<Uuid>,
) -> Result<HttpResponse, AppError> {
    let experience = state.experience_handler.get_by_id(id.into_inner()).await?;
    Ok(HttpResponse::Ok().json(experience))
}

/// GET /experience/detailed/{id}. Any authenticated caller; the bearer
/// header is forwarded to the company and job-category collaborators.
pub async fn get_detailed_experience(
    _claims: AuthClaims,
    token: BearerToken,
    state: web::Data<AppState>,
    id: web::Path<Uuid>,
) -> Result<HttpResponse, AppError> {
    let detailed = state
        .experience_handler
        .get_detailed_by_id(id.into_inner(), token.value())
        .await?;
    Ok(HttpResponse::Ok().json(detailed))
}

/// POST /experience. Candidate role required.
pub async fn create_experience(
    _claims: CandidateClaims,
    state: web::Data<AppState>,
    input: web::Json<ExperienceInput>,
) -> Result<HttpResponse, AppError> {
    let created = state.experience_handler.create(input.into_inner()).await?;
    Ok(HttpResponse::Created().json(created))
}

/// PUT /experience. Candidate role required; the input's id selects the target.
pub async fn update_experience(
    _claims: CandidateClaims,
    state: web::Data<AppState>,
    input: web::Json<ExperienceInput>,
) -> Result<HttpResponse, AppError> {
    let updated = state.experience_handler.update(input.into_inner()).await?;
    Ok(HttpResponse::Ok().json(updated))
}

/// DELETE /experience/{id}. Candidate role required; responds with a boolean body.
pub async fn delete_experience(
    _claims: CandidateClaims,
    state: web::Data<AppState>,
    id: web::Path<Uuid>,
) -> Result<HttpResponse, AppError> {
    state.experience_handler.delete(id.into_inner()).await?;
    Ok(HttpResponse::Ok().json(true))
}
