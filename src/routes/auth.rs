use actix_web::{web, HttpResponse};
use validator::Validate;

use crate::error::AppError;
use crate::models::{SignInRequest, SignInResponse, SignUpRequest, UserResponse};
use crate::routes::AppState;

/// Configure registration and sign-in routes
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/auth")
            .route("/sign-up", web::post().to(sign_up))
            .route("/sign-in", web::post().to(sign_in)),
    );
}

/// POST /api/v1/auth/sign-up
async fn sign_up(
    state: web::Data<AppState>,
    req: web::Json<SignUpRequest>,
) -> Result<HttpResponse, AppError> {
    req.validate()?;

    let user = state.auth.sign_up(req.into_inner().into()).await?;

    Ok(HttpResponse::Created().json(UserResponse::from(user)))
}

/// POST /api/v1/auth/sign-in
async fn sign_in(
    state: web::Data<AppState>,
    req: web::Json<SignInRequest>,
) -> Result<HttpResponse, AppError> {
    req.validate()?;

    let token = state.auth.sign_in(req.into_inner().into()).await?;

    Ok(HttpResponse::Ok().json(SignInResponse { token }))
}
