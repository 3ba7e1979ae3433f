use std::sync::Arc;

use axum::{
    body::Body,
    extract::{Request, State},
    http::{StatusCode, header::AUTHORIZATION},
    middleware::Next,
    response::Response,
};
use jsonwebtoken::{Algorithm, DecodingKey, Validation, decode, decode_header};
use uuid::Uuid;

use crate::{
    config::app_config::CONFIG,
    models::{
        app_state::AppState,
        auth::{Claims, Jwks, UserId},
        error::ServerError,
    },
};

/// Verifies the bearer token and attaches the authenticated [`UserId`] as a
/// request extension. Every data route sits behind this middleware; requests
/// without a valid token never reach a handler.
pub async fn auth_mw(
    State(state): State<Arc<AppState>>,
    mut req: Request<Body>,
    next: Next,
) -> Result<Response, ServerError> {
    let token_header = req
        .headers()
        .get(AUTHORIZATION)
        .and_then(|h| h.to_str().ok());

    let Some(token_header) = token_header else {
        tracing::warn!("Unauthorized request - no authentication header provided");
        return Err(ServerError::AccessDenied);
    };

    let Some(token) = token_header.strip_prefix("Bearer ") else {
        return Err(ServerError::Api(
            StatusCode::UNAUTHORIZED,
            "Missing auth token".into(),
        ));
    };

    let claims = verify_jwt(token, state.get_jwks())?;

    let user_id = Uuid::parse_str(&claims.sub)
        .map_err(|_| ServerError::JwtVerification("Subject is not a valid user id".into()))?;

    req.extensions_mut().insert(UserId(user_id));

    Ok(next.run(req).await)
}

fn verify_jwt(token: &str, jwks: &Jwks) -> Result<Claims, ServerError> {
    let header =
        decode_header(token).map_err(|e| ServerError::JwtVerification(e.to_string()))?;

    let Some(kid) = header.kid else {
        return Err(ServerError::JwtVerification(
            "Token header has no key id".into(),
        ));
    };

    let Some(jwk) = jwks.find(&kid) else {
        return Err(ServerError::JwtVerification(format!(
            "No matching JWK for kid {}",
            kid
        )));
    };

    let key = DecodingKey::from_rsa_components(&jwk.n, &jwk.e)
        .map_err(|e| ServerError::JwtVerification(e.to_string()))?;

    let mut validation = Validation::new(Algorithm::RS256);
    validation.set_audience(&[&CONFIG.auth.audience]);
    validation.set_issuer(&[&CONFIG.auth.issuer]);

    let token_data = decode::<Claims>(token, &key, &validation)
        .map_err(|e| ServerError::JwtVerification(e.to_string()))?;

    Ok(token_data.claims)
}
