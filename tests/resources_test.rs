//! Integration tests for the management resources behind the auth gate.

mod helpers;

use axum::http::StatusCode;
use serde_json::json;

use helpers::{PASSWORD, TestApp};

#[tokio::test]
async fn test_departments_are_readable_by_all_and_managed_by_management() {
    let app = TestApp::new().await;
    let (hr, _) = app.register_staff("Alice", "Njoroge", "HR").await;
    let (employee, _) = app.register_staff("Ben", "Odhiambo", "Employee").await;

    let created = app
        .request(
            "POST",
            "/api/departments",
            Some(json!({ "name": "Finance", "description": "Money" })),
            Some(&hr),
        )
        .await;
    assert_eq!(created.status, StatusCode::CREATED);
    let department_id = created.body["id"].as_str().unwrap().to_string();

    let duplicate = app
        .request(
            "POST",
            "/api/departments",
            Some(json!({ "name": "Finance" })),
            Some(&hr),
        )
        .await;
    assert_eq!(duplicate.status, StatusCode::CONFLICT);

    let listed = app
        .request("GET", "/api/departments", None, Some(&employee))
        .await;
    assert_eq!(listed.status, StatusCode::OK);
    assert_eq!(listed.body.as_array().unwrap().len(), 1);

    let forbidden = app
        .request(
            "DELETE",
            &format!("/api/departments/{department_id}"),
            None,
            Some(&employee),
        )
        .await;
    assert_eq!(forbidden.status, StatusCode::FORBIDDEN);

    let deleted = app
        .request(
            "DELETE",
            &format!("/api/departments/{department_id}"),
            None,
            Some(&hr),
        )
        .await;
    assert_eq!(deleted.status, StatusCode::OK);
}

#[tokio::test]
async fn test_malformed_id_is_a_validation_error() {
    let app = TestApp::new().await;
    let admin = app.admin_token().await;

    let response = app
        .request("GET", "/api/departments/not-a-uuid", None, Some(&admin))
        .await;

    assert_eq!(response.status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_employee_management_and_self_service() {
    let app = TestApp::new().await;
    let admin = app.admin_token().await;

    let created = app
        .request(
            "POST",
            "/api/employees",
            Some(json!({
                "employeeId": "EMP-001",
                "firstName": "Cynthia",
                "lastName": "Auma",
                "email": "cynthia@hrportal.test",
                "password": PASSWORD,
                "position": "Engineer",
            })),
            Some(&admin),
        )
        .await;
    assert_eq!(created.status, StatusCode::CREATED);
    assert_eq!(created.body["employeeId"], "EMP-001");
    assert!(created.body.get("passwordHash").is_none());

    let listed = app.request("GET", "/api/employees", None, Some(&admin)).await;
    assert_eq!(listed.body.as_array().unwrap().len(), 1);

    let token = app.login("cynthia@hrportal.test", PASSWORD).await;

    let forbidden = app.request("GET", "/api/employees", None, Some(&token)).await;
    assert_eq!(forbidden.status, StatusCode::FORBIDDEN);

    let updated = app
        .request(
            "PUT",
            "/api/employees/my-profile",
            Some(json!({ "firstName": "Cindy" })),
            Some(&token),
        )
        .await;
    assert_eq!(updated.status, StatusCode::OK);
    assert_eq!(updated.body["firstName"], "Cindy");
    assert_eq!(updated.body["position"], "Engineer");

    let empty = app
        .request("PUT", "/api/employees/my-profile", Some(json!({})), Some(&token))
        .await;
    assert_eq!(empty.status, StatusCode::BAD_REQUEST);

    let profile = app
        .request("GET", "/api/employees/my-profile", None, Some(&token))
        .await;
    assert_eq!(profile.body["firstName"], "Cindy");
}

#[tokio::test]
async fn test_accounts_have_no_staff_profile() {
    let app = TestApp::new().await;
    let admin = app.admin_token().await;

    let response = app
        .request("GET", "/api/employees/my-profile", None, Some(&admin))
        .await;

    assert_eq!(response.status, StatusCode::FORBIDDEN);
}

#[tokio::test]
async fn test_project_lifecycle() {
    let app = TestApp::new().await;
    let (manager, manager_id) = app.register_staff("David", "Mwangi", "Manager").await;

    let created = app
        .request(
            "POST",
            "/api/projects",
            Some(json!({
                "name": "Payroll migration",
                "startDate": "2025-03-01",
                "endDate": "2025-06-30",
                "employeeId": manager_id,
            })),
            Some(&manager),
        )
        .await;
    assert_eq!(created.status, StatusCode::CREATED);
    assert_eq!(created.body["status"], "Planning");
    let project_id = created.body["id"].as_str().unwrap().to_string();

    let fetched = app
        .request(
            "GET",
            &format!("/api/projects/{project_id}"),
            None,
            Some(&manager),
        )
        .await;
    assert_eq!(fetched.body["employee"]["firstName"], "David");

    let updated = app
        .request(
            "PUT",
            &format!("/api/projects/{project_id}"),
            Some(json!({ "name": "Payroll migration", "status": "In Progress" })),
            Some(&manager),
        )
        .await;
    assert_eq!(updated.status, StatusCode::OK);
    assert_eq!(updated.body["status"], "In Progress");

    let bad_status = app
        .request(
            "PUT",
            &format!("/api/projects/{project_id}"),
            Some(json!({ "name": "Payroll migration", "status": "Paused" })),
            Some(&manager),
        )
        .await;
    assert_eq!(bad_status.status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_payslip_generation_and_access() {
    let app = TestApp::new().await;
    let (hr, _) = app.register_staff("Eve", "Karanja", "HR").await;
    let (owner, owner_id) = app.register_staff("Frank", "Kimani", "Employee").await;
    let (other, _) = app.register_staff("Grace", "Wafula", "Employee").await;

    let generated = app
        .request(
            "POST",
            "/api/payslips/generate",
            Some(json!({
                "employeeId": owner_id,
                "payPeriodStartDate": "2025-01-01",
                "payPeriodEndDate": "2025-01-31",
                "grossPay": 100000.0,
                "otherDeductions": 500.0,
            })),
            Some(&hr),
        )
        .await;
    assert_eq!(generated.status, StatusCode::CREATED);
    assert_eq!(generated.body["paye"].as_f64(), Some(8800.0));
    assert_eq!(generated.body["nssf"].as_f64(), Some(10000.0));
    assert_eq!(generated.body["deductions"].as_f64(), Some(19300.0));
    assert_eq!(generated.body["netPay"].as_f64(), Some(80700.0));
    assert!(
        generated.body["payslipId"]
            .as_str()
            .unwrap()
            .starts_with("PS-")
    );
    let payslip_id = generated.body["id"].as_str().unwrap().to_string();

    let own = app
        .request(
            "GET",
            &format!("/api/payslips/{payslip_id}"),
            None,
            Some(&owner),
        )
        .await;
    assert_eq!(own.status, StatusCode::OK);

    let foreign = app
        .request(
            "GET",
            &format!("/api/payslips/{payslip_id}"),
            None,
            Some(&other),
        )
        .await;
    assert_eq!(foreign.status, StatusCode::FORBIDDEN);

    let mine = app
        .request("GET", "/api/payslips/my-payslips", None, Some(&owner))
        .await;
    assert_eq!(mine.body.as_array().unwrap().len(), 1);

    let updated = app
        .request(
            "PUT",
            &format!("/api/payslips/{payslip_id}"),
            Some(json!({ "grossPay": 50000.0 })),
            Some(&hr),
        )
        .await;
    assert_eq!(updated.status, StatusCode::OK);
    assert_eq!(updated.body["netPay"].as_f64(), Some(40100.0));
}

#[tokio::test]
async fn test_payslip_for_unknown_employee_is_not_found() {
    let app = TestApp::new().await;
    let admin = app.admin_token().await;

    let response = app
        .request(
            "POST",
            "/api/payslips/generate",
            Some(json!({
                "employeeId": uuid::Uuid::new_v4(),
                "payPeriodStartDate": "2025-01-01",
                "payPeriodEndDate": "2025-01-31",
                "grossPay": 1000.0,
            })),
            Some(&admin),
        )
        .await;

    assert_eq!(response.status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_payslip_generation_reads_deductions_key() {
    let app = TestApp::new().await;
    let (hr, _) = app.register_staff("Joy", "Chebet", "HR").await;
    let (_, owner_id) = app.register_staff("Kevin", "Mutua", "Employee").await;

    let generated = app
        .request(
            "POST",
            "/api/payslips/generate",
            Some(json!({
                "employeeId": owner_id,
                "payPeriodStartDate": "2025-02-01",
                "payPeriodEndDate": "2025-02-28",
                "grossPay": 100000.0,
                "deductions": 500.0,
            })),
            Some(&hr),
        )
        .await;

    assert_eq!(generated.status, StatusCode::CREATED);
    assert_eq!(generated.body["otherDeductions"].as_f64(), Some(500.0));
    assert_eq!(generated.body["netPay"].as_f64(), Some(80700.0));
}

#[tokio::test]
async fn test_dashboard_is_management_only() {
    let app = TestApp::new().await;
    let (manager, _) = app.register_staff("Hassan", "Ali", "Manager").await;
    let (employee, _) = app.register_staff("Irene", "Moraa", "Employee").await;

    let overview = app
        .request(
            "GET",
            "/api/dashboard/employees-overview",
            None,
            Some(&manager),
        )
        .await;
    assert_eq!(overview.status, StatusCode::OK);
    assert_eq!(overview.body["activeEmployees"].as_i64(), Some(2));

    for path in [
        "/api/dashboard/employee-distribution-by-department",
        "/api/dashboard/leave-status-breakdown",
    ] {
        let ok = app.request("GET", path, None, Some(&manager)).await;
        assert_eq!(ok.status, StatusCode::OK);

        let denied = app.request("GET", path, None, Some(&employee)).await;
        assert_eq!(denied.status, StatusCode::FORBIDDEN);
    }
}
