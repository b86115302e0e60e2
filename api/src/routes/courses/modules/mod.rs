//! Module authoring routes nested under `/courses/{course_id}/modules`.
//!
//! All mutating routes are gated by `require_course_manager`; the listing is
//! public, matching the course detail page.

use axum::{
    Router,
    middleware::from_fn_with_state,
    routing::{delete, get, post, put},
};
use util::state::AppState;

use crate::auth::guards::require_course_manager;
use delete::delete_module;
use get::get_modules;
use lessons::lesson_routes;
use post::create_module;
use put::edit_module;

pub mod common;
pub mod delete;
pub mod get;
pub mod lessons;
pub mod post;
pub mod put;

/// Builds the `/courses/{course_id}/modules` route group.
///
/// Routes:
/// - `GET    /` → ordered module list (public)
/// - `POST   /` → add a module (course manager)
/// - `PUT    /{module_id}` → edit a module (course manager)
/// - `DELETE /{module_id}` → delete a module and its lessons (course manager)
///
/// - Nested lesson routes under `/{module_id}/lessons`
pub fn module_routes(app_state: AppState) -> Router<AppState> {
    Router::new()
        .route("/", get(get_modules))
        .route(
            "/",
            post(create_module).route_layer(from_fn_with_state(
                app_state.clone(),
                require_course_manager,
            )),
        )
        .route(
            "/{module_id}",
            put(edit_module).route_layer(from_fn_with_state(
                app_state.clone(),
                require_course_manager,
            )),
        )
        .route(
            "/{module_id}",
            delete(delete_module).route_layer(from_fn_with_state(
                app_state.clone(),
                require_course_manager,
            )),
        )
        .nest("/{module_id}/lessons", lesson_routes(app_state))
}
