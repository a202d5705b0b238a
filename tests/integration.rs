//! Integration tests for the employee pay API.
//!
//! This suite drives the router end to end:
//! - Regular and Contractual pay calculation
//! - Calculation failures (unknown employee, unknown type, bad input)
//! - Employee create, read, update and soft-delete
//! - Extending the registry with a new employee type

use std::sync::Arc;

use axum::{
    Router,
    body::Body,
    http::{Request, StatusCode, header},
};
use serde_json::{Value, json};
use tower::ServiceExt;

use employee_pay::api::{AppState, create_router};
use employee_pay::calculation::{
    CompensationRule, ContractualRule, EmployeeTypeRegistry, InputField, RegularRule,
};
use employee_pay::config::ConfigLoader;
use employee_pay::models::{Employee, NewEmployee};
use employee_pay::store::InMemoryEmployeeStore;

// =============================================================================
// Test Helpers
// =============================================================================

fn create_test_state() -> AppState {
    let config = ConfigLoader::load("./config/app.yaml").expect("Failed to load config");
    AppState::from_config(config.config()).expect("Failed to build state")
}

fn create_router_for_test() -> Router {
    create_router(create_test_state())
}

fn seeded_employee(id: i32, employee_type_id: i32) -> Employee {
    Employee::from_new(
        id,
        NewEmployee {
            full_name: format!("Seeded {}", id),
            birthdate: chrono::NaiveDate::from_ymd_opt(1990, 1, 15).unwrap(),
            tin: format!("{:09}", id),
            employee_type_id,
        },
    )
}

/// Router over a store holding exactly `employees`, with the default rules.
fn router_with_employees(employees: Vec<Employee>) -> Router {
    let store = InMemoryEmployeeStore::with_employees(employees).unwrap();
    create_router(AppState::new(
        EmployeeTypeRegistry::with_defaults().unwrap(),
        Arc::new(store),
    ))
}

async fn send(router: Router, method: &str, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
    let (status, _, json) = send_with_headers(router, method, uri, body).await;
    (status, json)
}

async fn send_with_headers(
    router: Router,
    method: &str,
    uri: &str,
    body: Option<Value>,
) -> (StatusCode, axum::http::HeaderMap, Value) {
    let mut builder = Request::builder().method(method).uri(uri);
    let body = match body {
        Some(json) => {
            builder = builder.header("Content-Type", "application/json");
            Body::from(json.to_string())
        }
        None => Body::empty(),
    };

    let response = router.oneshot(builder.body(body).unwrap()).await.unwrap();

    let status = response.status();
    let headers = response.headers().clone();
    let body_bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let json: Value = if body_bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&body_bytes).unwrap()
    };

    (status, headers, json)
}

async fn post_calculate(router: Router, id: i32, body: Value) -> (StatusCode, Value) {
    send(
        router,
        "POST",
        &format!("/api/employees/{}/calculate", id),
        Some(body),
    )
    .await
}

fn employee_body(name: &str, type_id: i32) -> Value {
    json!({
        "fullName": name,
        "birthdate": "1995-08-21",
        "tin": "330219874",
        "typeId": type_id
    })
}

// =============================================================================
// Pay Calculation
// =============================================================================

#[tokio::test]
async fn test_regular_no_absences_pays_full_salary() {
    let (status, body) =
        post_calculate(create_router_for_test(), 1, json!({ "absentDays": 0 })).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["pay"].as_f64().unwrap(), 20000.0);
    assert_eq!(body["typeTag"], 1);
    assert_eq!(body["employeeId"], 1);
    assert_eq!(body["auditStep"]["ruleId"], "regular");
}

#[tokio::test]
async fn test_regular_full_month_absent() {
    let (status, body) =
        post_calculate(create_router_for_test(), 1, json!({ "absentDays": 22 })).await;

    assert_eq!(status, StatusCode::OK);
    // 800/day x 22 = 17600 deducted
    assert_eq!(body["pay"].as_f64().unwrap(), 2400.0);
}

#[tokio::test]
async fn test_regular_excessive_absences_return_negative_pay() {
    let (status, body) =
        post_calculate(create_router_for_test(), 1, json!({ "absentDays": 30 })).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["pay"].as_f64().unwrap(), -4000.0);
}

#[tokio::test]
async fn test_contractual_ten_days() {
    let (status, body) =
        post_calculate(create_router_for_test(), 2, json!({ "workedDays": 10 })).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["pay"].as_f64().unwrap(), 5000.0);
    assert_eq!(body["typeTag"], 2);
    assert_eq!(body["auditStep"]["input"]["workedDays"].as_f64().unwrap(), 10.0);
}

#[tokio::test]
async fn test_irrelevant_field_is_ignored() {
    let (status, body) = post_calculate(
        create_router_for_test(),
        2,
        json!({ "workedDays": 3, "absentDays": -50 }),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["pay"].as_f64().unwrap(), 1500.0);
}

// =============================================================================
// Calculation Failures
// =============================================================================

#[tokio::test]
async fn test_unknown_employee_returns_404() {
    let (status, body) =
        post_calculate(create_router_for_test(), 99, json!({ "absentDays": 0 })).await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["code"], "EMPLOYEE_NOT_FOUND");
}

#[tokio::test]
async fn test_unknown_employee_returns_404_even_with_invalid_input() {
    let (status, body) =
        post_calculate(create_router_for_test(), 99, json!({ "absentDays": -1 })).await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["code"], "EMPLOYEE_NOT_FOUND");
}

#[tokio::test]
async fn test_unregistered_type_returns_type_not_found() {
    let router = router_with_employees(vec![seeded_employee(1, 999)]);
    let (status, body) = post_calculate(router, 1, json!({ "absentDays": 0 })).await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["code"], "EMPLOYEE_TYPE_NOT_FOUND");
    assert_eq!(body["message"], "Employee Type not found");
    assert!(body.get("pay").is_none());
}

#[tokio::test]
async fn test_negative_absent_days_returns_400() {
    let (status, body) =
        post_calculate(create_router_for_test(), 1, json!({ "absentDays": -1 })).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["code"], "INVALID_INPUT");
    assert_eq!(body["details"], "absentDays");
    assert!(body.get("pay").is_none());
}

#[tokio::test]
async fn test_negative_worked_days_returns_400() {
    let (status, body) =
        post_calculate(create_router_for_test(), 2, json!({ "workedDays": -0.5 })).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["code"], "INVALID_INPUT");
    assert_eq!(body["details"], "workedDays");
}

#[tokio::test]
async fn test_missing_required_field_returns_400() {
    let (status, body) = post_calculate(create_router_for_test(), 1, json!({})).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["code"], "INVALID_INPUT");
    assert!(body["message"].as_str().unwrap().contains("absentDays"));
}

#[tokio::test]
async fn test_non_numeric_input_names_field() {
    let (status, body) =
        post_calculate(create_router_for_test(), 1, json!({ "absentDays": "two" })).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["code"], "INVALID_INPUT");
    assert_eq!(body["details"], "absentDays");
    assert!(body["message"].as_str().unwrap().contains("must be a number"));
}

#[tokio::test]
async fn test_non_numeric_irrelevant_field_is_ignored() {
    let (status, body) = post_calculate(
        create_router_for_test(),
        2,
        json!({ "workedDays": 10, "absentDays": "n/a" }),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["pay"].as_f64().unwrap(), 5000.0);
}

#[tokio::test]
async fn test_unknown_employee_returns_404_even_with_non_numeric_input() {
    let (status, body) =
        post_calculate(create_router_for_test(), 99, json!({ "absentDays": "two" })).await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["code"], "EMPLOYEE_NOT_FOUND");
}

#[tokio::test]
async fn test_overflowing_pay_returns_400_without_amount() {
    let (status, body) =
        post_calculate(create_router_for_test(), 2, json!({ "workedDays": 1e306 })).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["code"], "INVALID_INPUT");
    assert_eq!(body["details"], "workedDays");
    assert!(body.get("pay").is_none());
}

#[tokio::test]
async fn test_deleted_employee_cannot_be_calculated() {
    let router = create_router_for_test();
    let (status, _) = send(router.clone(), "DELETE", "/api/employees/1", None).await;
    assert_eq!(status, StatusCode::OK);

    let (status, body) = post_calculate(router, 1, json!({ "absentDays": 0 })).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["code"], "EMPLOYEE_NOT_FOUND");
}

// =============================================================================
// Employee Records
// =============================================================================

#[tokio::test]
async fn test_list_returns_seeded_employees_in_id_order() {
    let (status, body) = send(create_router_for_test(), "GET", "/api/employees", None).await;

    assert_eq!(status, StatusCode::OK);
    let ids: Vec<i64> = body
        .as_array()
        .unwrap()
        .iter()
        .map(|e| e["id"].as_i64().unwrap())
        .collect();
    assert_eq!(ids, vec![1, 2, 3]);
}

#[tokio::test]
async fn test_get_by_id_returns_dto() {
    let (status, body) = send(create_router_for_test(), "GET", "/api/employees/1", None).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["fullName"], "Jane Doe");
    assert_eq!(body["birthdate"], "1993-03-25");
    assert_eq!(body["typeId"], 1);
}

#[tokio::test]
async fn test_get_unknown_returns_404() {
    let (status, body) = send(create_router_for_test(), "GET", "/api/employees/42", None).await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["code"], "EMPLOYEE_NOT_FOUND");
}

#[tokio::test]
async fn test_create_returns_201_with_location() {
    let router = create_router_for_test();
    let (status, headers, body) = send_with_headers(
        router.clone(),
        "POST",
        "/api/employees",
        Some(employee_body("Ana Cruz", 2)),
    )
    .await;

    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body, json!(4));
    assert_eq!(headers[header::LOCATION], "/api/employees/4");

    let (status, fetched) = send(router, "GET", "/api/employees/4", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(fetched["fullName"], "Ana Cruz");
}

#[tokio::test]
async fn test_created_employee_can_be_calculated() {
    let router = create_router_for_test();
    let (_, body) = send(
        router.clone(),
        "POST",
        "/api/employees",
        Some(employee_body("Ana Cruz", 2)),
    )
    .await;
    let id = body.as_i64().unwrap() as i32;

    let (status, result) = post_calculate(router, id, json!({ "workedDays": 4 })).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(result["pay"].as_f64().unwrap(), 2000.0);
}

#[tokio::test]
async fn test_create_with_blank_name_returns_400() {
    let (status, body) = send(
        create_router_for_test(),
        "POST",
        "/api/employees",
        Some(employee_body("  ", 1)),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["code"], "INVALID_EMPLOYEE");
    assert_eq!(body["details"], "fullName");
}

#[tokio::test]
async fn test_create_missing_field_returns_validation_error() {
    let (status, body) = send(
        create_router_for_test(),
        "POST",
        "/api/employees",
        Some(json!({ "fullName": "Ana Cruz", "birthdate": "1995-08-21", "tin": "1" })),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["code"], "VALIDATION_ERROR");
    assert!(body["message"].as_str().unwrap().contains("typeId"));
}

#[tokio::test]
async fn test_update_changes_type_and_calculation() {
    let router = create_router_for_test();
    let (status, body) = send(
        router.clone(),
        "PUT",
        "/api/employees/1",
        Some(employee_body("Jane Doe", 2)),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["typeId"], 2);

    let (status, result) = post_calculate(router, 1, json!({ "workedDays": 2 })).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(result["pay"].as_f64().unwrap(), 1000.0);
    assert_eq!(result["typeTag"], 2);
}

#[tokio::test]
async fn test_update_unknown_returns_404() {
    let (status, body) = send(
        create_router_for_test(),
        "PUT",
        "/api/employees/77",
        Some(employee_body("Nobody", 1)),
    )
    .await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["code"], "EMPLOYEE_NOT_FOUND");
}

#[tokio::test]
async fn test_delete_hides_employee_and_echoes_id() {
    let router = create_router_for_test();
    let (status, body) = send(router.clone(), "DELETE", "/api/employees/2", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!(2));

    let (status, _) = send(router.clone(), "GET", "/api/employees/2", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let (_, list) = send(router.clone(), "GET", "/api/employees", None).await;
    assert!(list.as_array().unwrap().iter().all(|e| e["id"] != 2));

    let (status, _) = send(router, "DELETE", "/api/employees/2", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

// =============================================================================
// Registry Extension
// =============================================================================

/// Part-time staff paid a reduced day rate.
#[derive(Debug)]
struct PartTimeRule;

impl CompensationRule for PartTimeRule {
    fn rule_id(&self) -> &'static str {
        "part_time"
    }

    fn rule_name(&self) -> &'static str {
        "Part-time day rate"
    }

    fn required_input(&self) -> InputField {
        InputField::WorkedDays
    }

    fn compute(&self, worked_days: f64) -> f64 {
        250.0 * worked_days
    }

    fn reasoning(&self, worked_days: f64, pay: f64) -> String {
        format!("{} worked days x $250 = ${}", worked_days, pay)
    }
}

#[tokio::test]
async fn test_new_type_is_served_once_registered() {
    let registry = EmployeeTypeRegistry::builder()
        .register(1, RegularRule)
        .and_then(|b| b.register(2, ContractualRule))
        .and_then(|b| b.register(3, PartTimeRule))
        .unwrap()
        .build();
    let store = InMemoryEmployeeStore::with_employees(vec![seeded_employee(5, 3)]).unwrap();
    let router = create_router(AppState::new(registry, Arc::new(store)));

    let (status, body) = post_calculate(router, 5, json!({ "workedDays": 4 })).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["pay"].as_f64().unwrap(), 1000.0);
    assert_eq!(body["typeTag"], 3);
    assert_eq!(body["auditStep"]["ruleId"], "part_time");
}

#[tokio::test]
async fn test_concurrent_calculations_agree() {
    let router = create_router_for_test();
    let mut handles = Vec::new();
    for _ in 0..16 {
        let router = router.clone();
        handles.push(tokio::spawn(async move {
            post_calculate(router, 1, json!({ "absentDays": 3 })).await
        }));
    }

    for handle in handles {
        let (status, body) = handle.await.unwrap();
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["pay"].as_f64().unwrap(), 17600.0);
    }
}
