//! HTTP request handlers for API endpoints.
//!
//! Each handler module corresponds to a logical grouping of endpoints.

pub mod admin;
pub mod animals;
pub mod auth;
pub mod health;
pub mod home;
pub mod my;
pub mod onboarding;
pub mod regions;
pub mod shelters;
pub mod slots;

pub use admin::{approve_application_handler, dashboard_handler, reject_application_handler};
pub use animals::animal_detail_handler;
pub use auth::{login_handler, logout_handler, social_login_handler};
pub use health::health_handler;
pub use home::home_handler;
pub use my::{cancel_application_handler, my_page_handler};
pub use onboarding::onboarding_handler;
pub use regions::{
    district_list_handler, location_handler, open_picker_handler, province_list_handler,
    select_district_handler, select_province_handler,
};
pub use shelters::{
    shelter_animals_handler, shelter_detail_handler, shelter_list_handler,
    shelter_schedule_handler, toggle_favorite_handler,
};
pub use slots::{apply_slot_handler, slot_detail_handler};
