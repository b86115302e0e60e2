//! # Course Routes Module
//!
//! Defines and wires up routes for the `/api/courses` endpoint group.
//!
//! ## Structure
//! - `get.rs` — public catalog reads (course list, detail, lesson view, issued certificate)
//! - `post.rs` — course creation, enrollment, certificate issuance
//! - `put.rs` — course edits and enrollment progress updates
//! - `delete.rs` — course deletion
//! - `modules/` — nested module + lesson authoring under a course
//! - `quizzes/` — quiz authoring and listing under a course
//!
//! ## Usage
//! Call `course_routes()` to get a configured `Router` for `/courses` to be
//! mounted in the main app.

use axum::{
    Router,
    middleware::{from_fn, from_fn_with_state},
    routing::{delete, get, post, put},
};
use util::state::AppState;

use crate::auth::guards::{allow_instructor, require_course_manager};
use delete::delete_course;
use get::{get_certificate, get_course, get_courses, get_lesson};
use modules::module_routes;
use post::{create_course, enroll, generate_certificate};
use put::{edit_course, update_progress};
use quizzes::course_quiz_routes;

pub mod common;
pub mod delete;
pub mod get;
pub mod modules;
pub mod post;
pub mod put;
pub mod quizzes;

/// Builds the `/courses` route group.
///
/// Routes:
/// - `GET    /courses`                                → list courses (public)
/// - `GET    /courses/{course_id}`                    → course detail (public)
/// - `GET    /courses/{course_id}/lessons/{lesson_id}`→ lesson view (public)
/// - `POST   /courses`                                → create course (instructor/admin)
/// - `PUT    /courses/{course_id}`                    → edit course (course manager)
/// - `DELETE /courses/{course_id}`                    → delete course (course manager)
/// - `POST   /courses/{course_id}/enroll`             → enroll the caller (authenticated)
/// - `PUT    /courses/{course_id}/progress`           → set the caller's progress (authenticated)
/// - `POST   /courses/{course_id}/certificate`        → issue certificate (authenticated)
/// - `GET    /courses/{course_id}/certificate`        → fetch issued certificate (authenticated)
///
/// - Nested module/lesson authoring under `/courses/{course_id}/modules`
/// - Nested quiz authoring under `/courses/{course_id}/quizzes`
pub fn course_routes(app_state: AppState) -> Router<AppState> {
    Router::new()
        .route("/", get(get_courses))
        .route("/{course_id}", get(get_course))
        .route("/{course_id}/lessons/{lesson_id}", get(get_lesson))
        .route("/", post(create_course).route_layer(from_fn(allow_instructor)))
        .route(
            "/{course_id}",
            put(edit_course).route_layer(from_fn_with_state(
                app_state.clone(),
                require_course_manager,
            )),
        )
        .route(
            "/{course_id}",
            delete(delete_course).route_layer(from_fn_with_state(
                app_state.clone(),
                require_course_manager,
            )),
        )
        .route("/{course_id}/enroll", post(enroll))
        .route("/{course_id}/progress", put(update_progress))
        .route("/{course_id}/certificate", post(generate_certificate))
        .route("/{course_id}/certificate", get(get_certificate))
        .nest("/{course_id}/modules", module_routes(app_state.clone()))
        .nest("/{course_id}/quizzes", course_quiz_routes(app_state))
}
