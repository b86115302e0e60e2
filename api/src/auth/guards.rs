use crate::auth::claims::AuthUser;
use crate::response::ApiResponse;
use axum::{
    Json,
    body::Body,
    extract::{FromRequestParts, Path, State},
    http::{Request, StatusCode},
    middleware::Next,
    response::Response,
};
use db::models::course;
use db::models::quiz::Model as QuizModel;
use db::models::user::Role;
use once_cell::sync::Lazy;
use serde::Deserialize;
use std::collections::HashSet;
use util::{config, state::AppState};

// --- Superuser ---

pub static SUPERUSER_IDS: Lazy<HashSet<i64>> =
    Lazy::new(|| config::super_user_ids().into_iter().collect());

pub fn is_superuser(user_id: i64) -> bool {
    SUPERUSER_IDS.contains(&user_id)
}

// --- Capability predicates ---

/// The single content-management capability check: course owner, admin, or
/// superuser. Every content-mutation route goes through this predicate.
pub fn can_manage_course(user: &AuthUser, course: &course::Model) -> bool {
    let claims = &user.0;
    claims.sub == course.instructor_id || claims.role == Role::Admin || is_superuser(claims.sub)
}

/// Whether the user may author content at all (create new courses).
pub fn can_author_courses(user: &AuthUser) -> bool {
    matches!(user.0.role, Role::Instructor | Role::Admin) || is_superuser(user.0.sub)
}

// --- Role Based Access Guards ---

#[derive(serde::Serialize, Default)]
pub struct Empty;

/// Helper to extract, validate user from request extensions and insert them back into the request
async fn extract_and_insert_authuser(
    req: Request<Body>,
) -> Result<(Request<Body>, AuthUser), (StatusCode, Json<ApiResponse<Empty>>)> {
    let (mut parts, body) = req.into_parts();
    let user = AuthUser::from_request_parts(&mut parts, &())
        .await
        .map_err(|_| {
            (
                StatusCode::UNAUTHORIZED,
                Json(ApiResponse::error("Authentication required")),
            )
        })?;

    let mut req = Request::from_parts(parts, body);
    req.extensions_mut().insert(user.clone());
    Ok((req, user))
}

/// Basic guard to ensure the request is authenticated.
pub async fn allow_authenticated(
    req: Request<Body>,
    next: Next,
) -> Result<Response, (StatusCode, Json<ApiResponse<Empty>>)> {
    let (req, _user) = extract_and_insert_authuser(req).await?;

    Ok(next.run(req).await)
}

/// Admin-only guard (admin role or superuser).
pub async fn allow_admin(
    req: Request<Body>,
    next: Next,
) -> Result<Response, (StatusCode, Json<ApiResponse<Empty>>)> {
    let (req, user) = extract_and_insert_authuser(req).await?;

    if user.0.role != Role::Admin && !is_superuser(user.0.sub) {
        return Err((
            StatusCode::FORBIDDEN,
            Json(ApiResponse::error("Admin access required")),
        ));
    }

    Ok(next.run(req).await)
}

/// Guard for course-authoring routes: instructors, admins and superusers.
pub async fn allow_instructor(
    req: Request<Body>,
    next: Next,
) -> Result<Response, (StatusCode, Json<ApiResponse<Empty>>)> {
    let (req, user) = extract_and_insert_authuser(req).await?;

    if !can_author_courses(&user) {
        return Err((
            StatusCode::FORBIDDEN,
            Json(ApiResponse::error("Instructor access required")),
        ));
    }

    Ok(next.run(req).await)
}

#[derive(Deserialize)]
pub(crate) struct CoursePath {
    course_id: i64,
}

#[derive(Deserialize)]
pub(crate) struct QuizPath {
    quiz_id: i64,
}

/// Guard for routes mutating a course's content tree (the course itself,
/// modules, lessons, quizzes). Resolves `{course_id}` from the path and
/// applies `can_manage_course`. A failed check is an explicit `403`, not a
/// redirect.
pub async fn require_course_manager(
    State(app_state): State<AppState>,
    Path(CoursePath { course_id }): Path<CoursePath>,
    req: Request<Body>,
    next: Next,
) -> Result<Response, (StatusCode, Json<ApiResponse<Empty>>)> {
    let (req, user) = extract_and_insert_authuser(req).await?;

    let course = course::Model::get_by_id(app_state.db(), course_id)
        .await
        .map_err(|e| {
            tracing::warn!(error = %e, course_id, "DB error while resolving course for guard");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ApiResponse::error("Failed to look up course")),
            )
        })?
        .ok_or((
            StatusCode::NOT_FOUND,
            Json(ApiResponse::error("Course not found")),
        ))?;

    if !can_manage_course(&user, &course) {
        return Err((
            StatusCode::FORBIDDEN,
            Json(ApiResponse::error(
                "You do not have permission to manage this course",
            )),
        ));
    }

    Ok(next.run(req).await)
}

/// Same capability check, resolved through `{quiz_id}` and its owning course.
pub async fn require_quiz_manager(
    State(app_state): State<AppState>,
    Path(QuizPath { quiz_id }): Path<QuizPath>,
    req: Request<Body>,
    next: Next,
) -> Result<Response, (StatusCode, Json<ApiResponse<Empty>>)> {
    let (req, user) = extract_and_insert_authuser(req).await?;
    let db = app_state.db();

    let lookup = async {
        let Some(quiz) = QuizModel::get_by_id(db, quiz_id).await? else {
            return Ok(None);
        };
        course::Model::get_by_id(db, quiz.course_id).await
    };

    let course = lookup
        .await
        .map_err(|e: sea_orm::DbErr| {
            tracing::warn!(error = %e, quiz_id, "DB error while resolving quiz for guard");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ApiResponse::error("Failed to look up quiz")),
            )
        })?
        .ok_or((
            StatusCode::NOT_FOUND,
            Json(ApiResponse::error("Quiz not found")),
        ))?;

    if !can_manage_course(&user, &course) {
        return Err((
            StatusCode::FORBIDDEN,
            Json(ApiResponse::error(
                "You do not have permission to manage this quiz",
            )),
        ));
    }

    Ok(next.run(req).await)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::auth::claims::Claims;
    use chrono::Utc;

    // The superuser set reads the global config on first access, so every
    // test that touches the capability predicates needs the required
    // variables in place.
    fn init_test_env() {
        unsafe {
            std::env::set_var("DATABASE_PATH", "data/test.db");
            std::env::set_var("JWT_SECRET", "guard-test-secret");
        }
        config::AppConfig::reset();
    }

    fn user_with(sub: i64, role: Role) -> AuthUser {
        AuthUser(Claims {
            sub,
            role,
            exp: 9999999999,
        })
    }

    fn course_owned_by(instructor_id: i64) -> course::Model {
        course::Model {
            id: 1,
            title: "Course".into(),
            description: "".into(),
            price: 0.0,
            instructor_id,
            created_at: Utc::now(),
            updated_at: Utc::now(),
        }
    }

    #[test]
    #[serial_test::serial]
    fn owner_can_manage_own_course() {
        init_test_env();
        let course = course_owned_by(7);
        assert!(can_manage_course(&user_with(7, Role::Instructor), &course));
    }

    #[test]
    #[serial_test::serial]
    fn admin_can_manage_any_course() {
        init_test_env();
        let course = course_owned_by(7);
        assert!(can_manage_course(&user_with(99, Role::Admin), &course));
    }

    #[test]
    #[serial_test::serial]
    fn other_users_cannot_manage() {
        init_test_env();
        let course = course_owned_by(7);
        assert!(!can_manage_course(&user_with(8, Role::Instructor), &course));
        assert!(!can_manage_course(&user_with(8, Role::Student), &course));
    }

    #[test]
    #[serial_test::serial]
    fn students_cannot_author_courses() {
        init_test_env();
        assert!(!can_author_courses(&user_with(3, Role::Student)));
        assert!(can_author_courses(&user_with(3, Role::Instructor)));
        assert!(can_author_courses(&user_with(3, Role::Admin)));
    }

    #[tokio::test]
    #[serial_test::serial]
    async fn non_manager_edit_is_forbidden_and_leaves_course_unchanged() {
        use crate::routes::courses::put::edit_course;
        use axum::Router;
        use db::models::user::Model as UserModel;
        use db::test_utils::setup_test_db;
        use tower::ServiceExt;

        init_test_env();

        let state = AppState::new(setup_test_db().await);
        let owner = UserModel::create(
            state.db(),
            "owner",
            "owner@example.com",
            "password1",
            Role::Instructor,
        )
        .await
        .unwrap();
        let intruder = UserModel::create(
            state.db(),
            "intruder",
            "intruder@example.com",
            "password2",
            Role::Instructor,
        )
        .await
        .unwrap();
        let course = course::Model::create(state.db(), owner.id, "Original title", "", 0.0)
            .await
            .unwrap();

        let app = Router::new()
            .route(
                "/courses/{course_id}",
                axum::routing::put(edit_course).route_layer(
                    axum::middleware::from_fn_with_state(state.clone(), require_course_manager),
                ),
            )
            .with_state(state.clone());

        let (token, _) = crate::auth::generate_jwt(intruder.id, intruder.role);
        let request = Request::builder()
            .method("PUT")
            .uri(format!("/courses/{}", course.id))
            .header("Authorization", format!("Bearer {token}"))
            .header("content-type", "application/json")
            .body(Body::from(
                r#"{"title":"Hijacked title","description":"","price":0.0}"#,
            ))
            .unwrap();

        let response = app.oneshot(request).await.unwrap();
        assert_eq!(response.status(), StatusCode::FORBIDDEN);

        let unchanged = course::Model::get_by_id(state.db(), course.id)
            .await
            .unwrap()
            .unwrap();
        assert_eq!(unchanged.title, "Original title");
    }
}
