//! Route definitions for the HR portal HTTP API.
//!
//! REST routes live under `/api`; the listener upgrade lives at `/ws`.
//! Every protected route passes `protect` first and then the role check of
//! the group it was declared in.

use axum::{
    Router,
    extract::DefaultBodyLimit,
    middleware as axum_middleware,
    routing::{get, post, put},
};
use tower_http::catch_panic::CatchPanicLayer;
use tower_http::compression::CompressionLayer;
use tower_http::trace::TraceLayer;

use hrportal_entity::principal::Role;

use crate::error;
use crate::handlers;
use crate::middleware;
use crate::middleware::rbac::{ADMIN, ANY_ROLE, EMPLOYEE, MANAGEMENT};
use crate::state::AppState;

/// Build the complete Axum router with all routes and middleware.
pub fn build_router(state: AppState) -> Router {
    let protected = Router::new()
        .merge(auth_routes())
        .merge(leave_routes())
        .merge(employee_routes())
        .merge(department_routes())
        .merge(project_routes())
        .merge(payslip_routes())
        .merge(dashboard_routes())
        .route_layer(axum_middleware::from_fn_with_state(
            state.clone(),
            middleware::auth::protect,
        ));

    with_middleware(
        Router::new()
            .merge(public_routes())
            .merge(protected)
            .fallback(handlers::not_found),
        state,
    )
}

/// Wraps `routes` in the shared layer stack and binds the state.
/// Panics are caught innermost.
pub fn with_middleware(routes: Router<AppState>, state: AppState) -> Router {
    let cors = middleware::cors::build_cors_layer(&state.config.server.cors);
    let body_limit = state.config.server.body_limit_bytes;

    routes
        .layer(CatchPanicLayer::custom(error::handle_panic))
        .layer(axum_middleware::from_fn_with_state(
            state.clone(),
            error::reveal_internal_details,
        ))
        .layer(DefaultBodyLimit::max(body_limit))
        .layer(CompressionLayer::new())
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .layer(axum_middleware::from_fn(middleware::logging::request_logging))
        .with_state(state)
}

/// Applies a role check to every route declared so far in `routes`.
fn guarded(roles: &'static [Role], routes: Router<AppState>) -> Router<AppState> {
    routes.route_layer(axum_middleware::from_fn_with_state(
        roles,
        middleware::rbac::require_roles,
    ))
}

/// Routes reachable without a token.
fn public_routes() -> Router<AppState> {
    Router::new()
        .route("/health", get(handlers::health::health))
        .route("/ws", get(handlers::ws::ws_handler))
        .route("/api/auth/register", post(handlers::auth::register))
        .route("/api/auth/login", post(handlers::auth::login))
        .route("/api/auth/logout", post(handlers::auth::logout))
        .route("/api/auth/health", get(handlers::health::auth_health))
}

/// Profile and credential endpoints.
fn auth_routes() -> Router<AppState> {
    let admin = Router::new().route(
        "/api/auth/register-admin",
        post(handlers::auth::register_admin),
    );

    let any = Router::new()
        .route("/api/auth/profile", get(handlers::auth::profile))
        .route(
            "/api/auth/change-password",
            put(handlers::auth::change_password),
        );

    guarded(ADMIN, admin).merge(guarded(ANY_ROLE, any))
}

/// Leave requests and decisions.
fn leave_routes() -> Router<AppState> {
    let employee = Router::new()
        .route("/api/leaves/request", post(handlers::leave::request_leave))
        .route("/api/leaves/my-leaves", get(handlers::leave::my_leaves));

    let management = Router::new()
        .route("/api/leaves", get(handlers::leave::list_leaves))
        .route(
            "/api/leaves/{id}/status",
            put(handlers::leave::decide_leave),
        );

    guarded(EMPLOYEE, employee).merge(guarded(MANAGEMENT, management))
}

/// Employee management and self-service.
fn employee_routes() -> Router<AppState> {
    let employee = Router::new()
        .route(
            "/api/employees/my-profile",
            get(handlers::employee::my_profile).put(handlers::employee::update_my_profile),
        )
        .route(
            "/api/employees/my-profile/change-password",
            put(handlers::auth::change_password),
        );

    let management = Router::new()
        .route(
            "/api/employees",
            get(handlers::employee::list_employees).post(handlers::employee::create_employee),
        )
        .route(
            "/api/employees/{id}",
            get(handlers::employee::get_employee)
                .put(handlers::employee::update_employee)
                .delete(handlers::employee::delete_employee),
        );

    guarded(EMPLOYEE, employee).merge(guarded(MANAGEMENT, management))
}

/// Departments: readable by everyone, managed by management.
fn department_routes() -> Router<AppState> {
    let any = Router::new()
        .route(
            "/api/departments",
            get(handlers::department::list_departments),
        )
        .route(
            "/api/departments/{id}",
            get(handlers::department::get_department),
        );

    let management = Router::new()
        .route(
            "/api/departments",
            post(handlers::department::create_department),
        )
        .route(
            "/api/departments/{id}",
            put(handlers::department::update_department)
                .delete(handlers::department::delete_department),
        );

    guarded(ANY_ROLE, any).merge(guarded(MANAGEMENT, management))
}

/// Project tracking.
fn project_routes() -> Router<AppState> {
    let management = Router::new()
        .route(
            "/api/projects",
            get(handlers::project::list_projects).post(handlers::project::create_project),
        )
        .route(
            "/api/projects/{id}",
            get(handlers::project::get_project)
                .put(handlers::project::update_project)
                .delete(handlers::project::delete_project),
        );

    guarded(MANAGEMENT, management)
}

/// Payslips. A single payslip is readable by any role; the service limits
/// employees to their own.
fn payslip_routes() -> Router<AppState> {
    let employee = Router::new().route(
        "/api/payslips/my-payslips",
        get(handlers::payslip::my_payslips),
    );

    let any = Router::new().route("/api/payslips/{id}", get(handlers::payslip::get_payslip));

    let management = Router::new()
        .route(
            "/api/payslips/generate",
            post(handlers::payslip::generate_payslip),
        )
        .route("/api/payslips", get(handlers::payslip::list_payslips))
        .route(
            "/api/payslips/{id}",
            put(handlers::payslip::update_payslip).delete(handlers::payslip::delete_payslip),
        );

    guarded(EMPLOYEE, employee)
        .merge(guarded(ANY_ROLE, any))
        .merge(guarded(MANAGEMENT, management))
}

/// Dashboard aggregates.
fn dashboard_routes() -> Router<AppState> {
    let management = Router::new()
        .route(
            "/api/dashboard/employees-overview",
            get(handlers::dashboard::employees_overview),
        )
        .route(
            "/api/dashboard/employee-distribution-by-department",
            get(handlers::dashboard::distribution_by_department),
        )
        .route(
            "/api/dashboard/leave-status-breakdown",
            get(handlers::dashboard::leave_status_breakdown),
        );

    guarded(MANAGEMENT, management)
}
