//! API route configuration.
//!
//! Sign-in endpoints are public; everything else requires a session token via
//! [`crate::api::middleware::auth`].

use crate::api::handlers::{
    animal_detail_handler, apply_slot_handler, approve_application_handler,
    cancel_application_handler, dashboard_handler, district_list_handler, home_handler,
    location_handler, login_handler, logout_handler, my_page_handler, onboarding_handler,
    open_picker_handler, province_list_handler, reject_application_handler,
    select_district_handler, select_province_handler, shelter_animals_handler,
    shelter_detail_handler, shelter_list_handler, shelter_schedule_handler, slot_detail_handler,
    social_login_handler, toggle_favorite_handler,
};
use crate::state::AppState;
use axum::{
    Router,
    routing::{get, post, put},
};

/// Sign-in routes, reachable without a session.
///
/// # Endpoints
///
/// - `POST /auth/login`              - Email/password sign-in
/// - `POST /auth/social/{provider}`  - Social sign-in (`google`, `kakao`)
pub fn public_routes() -> Router<AppState> {
    Router::new()
        .route("/auth/login", post(login_handler))
        .route("/auth/social/{provider}", post(social_login_handler))
}

/// Routes that require a session token.
///
/// # Endpoints
///
/// - `POST /auth/logout`                        - Drop the session
/// - `GET  /home`                               - Nearby shelters and popular animals
/// - `GET  /shelters`                           - Search and filter shelters
/// - `GET  /shelters/{id}`                      - Shelter detail
/// - `GET  /shelters/{id}/schedule`             - Slots grouped by date
/// - `GET  /shelters/{id}/animals`              - Every animal of a shelter
/// - `POST /shelters/{id}/favorite`             - Toggle favorite
/// - `GET  /animals/{id}`                       - Animal detail
/// - `GET  /slots/{id}`                         - Slot detail
/// - `POST /slots/{id}/apply`                   - Sign up for a slot
/// - `GET  /regions`                            - Provinces
/// - `GET  /regions/{province}`                 - Districts of a province
/// - `GET  /location`                           - Current location and picker
/// - `POST /location/open`                      - Reopen the picker
/// - `PUT  /location/province`                  - Highlight a province
/// - `PUT  /location/district`                  - Choose a district
/// - `POST /onboarding`                         - Submit onboarding form
/// - `GET  /my`                                 - My page tabs
/// - `POST /my/applications/{id}/cancel`        - Cancel own application
/// - `GET  /admin`                              - Shelter admin dashboard
/// - `POST /admin/applications/{id}/approve`    - Approve an application
/// - `POST /admin/applications/{id}/reject`     - Reject an application
pub fn protected_routes() -> Router<AppState> {
    Router::new()
        .route("/auth/logout", post(logout_handler))
        .route("/home", get(home_handler))
        .route("/shelters", get(shelter_list_handler))
        .route("/shelters/{id}", get(shelter_detail_handler))
        .route("/shelters/{id}/schedule", get(shelter_schedule_handler))
        .route("/shelters/{id}/animals", get(shelter_animals_handler))
        .route("/shelters/{id}/favorite", post(toggle_favorite_handler))
        .route("/animals/{id}", get(animal_detail_handler))
        .route("/slots/{id}", get(slot_detail_handler))
        .route("/slots/{id}/apply", post(apply_slot_handler))
        .route("/regions", get(province_list_handler))
        .route("/regions/{province}", get(district_list_handler))
        .route("/location", get(location_handler))
        .route("/location/open", post(open_picker_handler))
        .route("/location/province", put(select_province_handler))
        .route("/location/district", put(select_district_handler))
        .route("/onboarding", post(onboarding_handler))
        .route("/my", get(my_page_handler))
        .route(
            "/my/applications/{id}/cancel",
            post(cancel_application_handler),
        )
        .route("/admin", get(dashboard_handler))
        .route(
            "/admin/applications/{id}/approve",
            post(approve_application_handler),
        )
        .route(
            "/admin/applications/{id}/reject",
            post(reject_application_handler),
        )
}
