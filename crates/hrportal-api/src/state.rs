//! Application state shared across all handlers and middleware.

use std::sync::Arc;

use hrportal_auth::{AuthGate, JwtDecoder, JwtEncoder, PasswordHasher, PasswordValidator};
use hrportal_core::config::AppConfig;
use hrportal_core::error::AppError;
use hrportal_database::Stores;
use hrportal_realtime::{Broadcaster, NotificationBus};
use hrportal_service::{
    AuthService, DashboardService, DepartmentService, EmployeeService, LeaveService,
    PayslipService, ProjectService,
};

/// Application state containing all shared dependencies.
///
/// Passed to every Axum handler via `State<AppState>`.
/// All fields are `Arc`-wrapped for cheap cloning across tasks.
#[derive(Clone)]
pub struct AppState {
    // ── Configuration ────────────────────────────────────────
    /// Application configuration
    pub config: Arc<AppConfig>,

    // ── Auth ─────────────────────────────────────────────────
    /// Token verification and role checks
    pub gate: Arc<AuthGate>,

    // ── Realtime ─────────────────────────────────────────────
    /// Listener registry and broadcast fan-out
    pub bus: Arc<NotificationBus>,

    // ── Services ─────────────────────────────────────────────
    /// Registration, login and credentials
    pub auth_service: Arc<AuthService>,
    /// Leave requests and decisions
    pub leave_service: Arc<LeaveService>,
    /// Employee records
    pub employee_service: Arc<EmployeeService>,
    /// Departments
    pub department_service: Arc<DepartmentService>,
    /// Projects
    pub project_service: Arc<ProjectService>,
    /// Payslips
    pub payslip_service: Arc<PayslipService>,
    /// Dashboard aggregates
    pub dashboard_service: Arc<DashboardService>,
}

impl AppState {
    /// Wires the auth system and every service over the given stores.
    pub fn new(
        config: AppConfig,
        stores: Stores,
        bus: Arc<NotificationBus>,
    ) -> Result<Self, AppError> {
        let hasher = Arc::new(PasswordHasher::new(&config.auth)?);
        let validator = Arc::new(PasswordValidator::new(&config.auth));
        let encoder = Arc::new(JwtEncoder::new(&config.auth)?);
        let decoder = Arc::new(JwtDecoder::new(&config.auth));

        let gate = Arc::new(AuthGate::new(
            decoder,
            stores.accounts.clone(),
            stores.staff.clone(),
        ));

        let broadcaster: Arc<dyn Broadcaster> = bus.clone();

        Ok(Self {
            auth_service: Arc::new(AuthService::new(
                &stores,
                Arc::clone(&hasher),
                Arc::clone(&validator),
                encoder,
            )),
            leave_service: Arc::new(LeaveService::new(&stores, broadcaster)),
            employee_service: Arc::new(EmployeeService::new(&stores, hasher, validator)),
            department_service: Arc::new(DepartmentService::new(&stores)),
            project_service: Arc::new(ProjectService::new(&stores)),
            payslip_service: Arc::new(PayslipService::new(&stores)),
            dashboard_service: Arc::new(DashboardService::new(&stores)),
            config: Arc::new(config),
            gate,
            bus,
        })
    }
}
