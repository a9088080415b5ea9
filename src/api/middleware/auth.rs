//! Bearer token authentication middleware.

use axum::{
    extract::{FromRequestParts, Request, State},
    middleware::Next,
    response::Response,
};
use axum_auth::AuthBearer;
use serde_json::json;

use crate::domain::entities::Role;
use crate::domain::session::AuthContext;
use crate::{error::AppError, state::AppState};

/// Authenticates requests using the session token from the Authorization header.
///
/// # Header Format
///
/// ```text
/// Authorization: Bearer <token>
/// ```
///
/// # Authentication Flow
///
/// 1. Extract token from `Authorization` header
/// 2. Look up the session under the token's HMAC digest
/// 3. Insert the [`AuthContext`] into request extensions
/// 4. Continue to next middleware/handler
///
/// # Errors
///
/// Returns `401 Unauthorized` if:
/// - Authorization header is missing
/// - Token format is invalid
/// - No session exists for the token (never issued, logged out, or restarted)
///
/// # Example
///
/// ```rust,ignore
/// let protected = Router::new()
///     .route("/api/home", get(home_handler))
///     .route_layer(middleware::from_fn_with_state(state.clone(), auth::layer));
/// ```
pub async fn layer(
    State(st): State<AppState>,
    req: Request,
    next: Next,
) -> Result<Response, AppError> {
    let (mut parts, body) = req.into_parts();

    let AuthBearer(token) = AuthBearer::from_request_parts(&mut parts, &())
        .await
        .map_err(|_| {
            AppError::unauthorized(
                "Unauthorized",
                json!({"reason": "Authorization header is missing or invalid"}),
            )
        })?;

    let ctx = st.auth_service.authenticate(&token).await?;
    tracing::debug!(account = %ctx.account_id(), "Authenticated request");

    let mut req = Request::from_parts(parts, body);
    req.extensions_mut().insert(ctx);

    Ok(next.run(req).await)
}

/// Returns the managed shelter id, or 403 for anyone but a shelter admin.
pub fn require_shelter_admin(ctx: &AuthContext) -> Result<&str, AppError> {
    match (ctx.role(), ctx.session.shelter_id.as_deref()) {
        (Role::ShelterAdmin, Some(shelter_id)) => Ok(shelter_id),
        _ => Err(AppError::forbidden(
            "Shelter admin access required",
            json!({"role": ctx.role()}),
        )),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entities::RegionMap;
    use crate::domain::favorites::FavoriteSet;
    use crate::domain::region_picker::{Location, RegionPicker};
    use crate::domain::session::Session;
    use chrono::Utc;
    use std::sync::Arc;

    fn ctx(role: Role, shelter_id: Option<&str>) -> AuthContext {
        let regions = Arc::new(RegionMap::from_iter([(
            "서울".to_string(),
            vec!["강남구".to_string()],
        )]));
        let location = Location {
            province: "서울".to_string(),
            district: "강남구".to_string(),
        };

        AuthContext {
            token_hash: "hash".to_string(),
            session: Session {
                account_id: "u".to_string(),
                account_name: "테스트".to_string(),
                role,
                shelter_id: shelter_id.map(str::to_string),
                favorites: FavoriteSet::default(),
                picker: RegionPicker::new(regions, location).unwrap(),
                profile: None,
                created_at: Utc::now(),
            },
        }
    }

    #[test]
    fn test_shelter_admin_passes() {
        let ctx = ctx(Role::ShelterAdmin, Some("1"));
        assert_eq!(require_shelter_admin(&ctx).unwrap(), "1");
    }

    #[test]
    fn test_volunteer_forbidden() {
        let ctx = ctx(Role::Volunteer, None);
        let err = require_shelter_admin(&ctx).unwrap_err();
        assert!(matches!(err, AppError::Forbidden { .. }));
    }

    #[test]
    fn test_admin_without_shelter_forbidden() {
        let ctx = ctx(Role::ShelterAdmin, None);
        assert!(require_shelter_admin(&ctx).is_err());
    }
}
