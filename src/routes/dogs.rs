use actix_web::{web, HttpResponse, Responder};
use uuid::Uuid;
use validator::Validate;

use crate::error::AppError;
use crate::models::{DogRequest, DogResponse, HealthResponse, PaginationQuery, ReactionRequest};
use crate::routes::extractor::AuthenticatedUser;
use crate::routes::AppState;

/// Configure dog profile and reaction routes
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.route("/health", web::get().to(health_check)).service(
        web::scope("/dog")
            .route("", web::get().to(list_dogs))
            .route("", web::post().to(create_dog))
            .route("/reaction", web::post().to(add_reaction))
            .route("/{id}", web::get().to(get_dog))
            .route("/{id}", web::put().to(update_dog))
            .route("/{id}", web::delete().to(delete_dog))
            .route("/{id}/matches", web::get().to(get_matches)),
    );
}

fn to_responses(dogs: Vec<crate::models::Dog>) -> Vec<DogResponse> {
    dogs.into_iter().map(DogResponse::from).collect()
}

/// Health check endpoint
async fn health_check(state: web::Data<AppState>) -> impl Responder {
    let status = match state.dogs.health_check().await {
        Ok(()) => "healthy",
        Err(e) => {
            tracing::warn!("Store health check failed: {}", e);
            "degraded"
        }
    };

    HttpResponse::Ok().json(HealthResponse {
        status: status.to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        timestamp: chrono::Utc::now(),
    })
}

/// GET /api/v1/dog?page=1&per-page=10
async fn list_dogs(
    state: web::Data<AppState>,
    user: AuthenticatedUser,
    query: web::Query<PaginationQuery>,
) -> Result<HttpResponse, AppError> {
    query.validate()?;

    let dogs = state.dogs.list(user.id(), query.into_inner().into()).await?;

    Ok(HttpResponse::Ok().json(to_responses(dogs)))
}

/// GET /api/v1/dog/{id}
async fn get_dog(
    state: web::Data<AppState>,
    _user: AuthenticatedUser,
    path: web::Path<Uuid>,
) -> Result<HttpResponse, AppError> {
    let dog = state.dogs.get(path.into_inner()).await?;

    Ok(HttpResponse::Ok().json(DogResponse::from(dog)))
}

/// POST /api/v1/dog
async fn create_dog(
    state: web::Data<AppState>,
    user: AuthenticatedUser,
    req: web::Json<DogRequest>,
) -> Result<HttpResponse, AppError> {
    req.validate()?;

    let dog = state.dogs.create(user.id(), req.into_inner().into()).await?;

    Ok(HttpResponse::Created().json(DogResponse::from(dog)))
}

/// PUT /api/v1/dog/{id}
async fn update_dog(
    state: web::Data<AppState>,
    user: AuthenticatedUser,
    path: web::Path<Uuid>,
    req: web::Json<DogRequest>,
) -> Result<HttpResponse, AppError> {
    req.validate()?;

    let dog = state
        .dogs
        .update(path.into_inner(), user.id(), req.into_inner().into())
        .await?;

    Ok(HttpResponse::Ok().json(DogResponse::from(dog)))
}

/// DELETE /api/v1/dog/{id}
async fn delete_dog(
    state: web::Data<AppState>,
    user: AuthenticatedUser,
    path: web::Path<Uuid>,
) -> Result<HttpResponse, AppError> {
    state.dogs.delete(path.into_inner(), user.id()).await?;

    Ok(HttpResponse::NoContent().finish())
}

/// GET /api/v1/dog/{id}/matches?page=1&per-page=10
async fn get_matches(
    state: web::Data<AppState>,
    user: AuthenticatedUser,
    path: web::Path<Uuid>,
    query: web::Query<PaginationQuery>,
) -> Result<HttpResponse, AppError> {
    query.validate()?;

    let dogs = state
        .dogs
        .matches(user.id(), path.into_inner(), query.into_inner().into())
        .await?;

    Ok(HttpResponse::Ok().json(to_responses(dogs)))
}

/// POST /api/v1/dog/reaction
///
/// Request body:
/// ```json
/// {
///   "liker": "uuid",
///   "liked": "uuid",
///   "action": "like"
/// }
/// ```
async fn add_reaction(
    state: web::Data<AppState>,
    user: AuthenticatedUser,
    req: web::Json<ReactionRequest>,
) -> Result<HttpResponse, AppError> {
    state
        .dogs
        .engine()
        .add_reaction(user.id(), req.into_inner().into())
        .await?;

    Ok(HttpResponse::NoContent().finish())
}
