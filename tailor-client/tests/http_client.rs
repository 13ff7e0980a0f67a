// tailor-client/tests/http_client.rs
// Integration tests against a mocked back office

use rust_decimal::Decimal;
use serde_json::json;
use shared::models::{CustomerCreate, JobOrderCreate, JobOrderStatus};
use shared::order::PaymentMethod;
use tailor_client::{ClientConfig, ClientError, HttpClient};
use wiremock::matchers::{body_partial_json, header, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn client_for(server: &MockServer) -> HttpClient {
    ClientConfig::new(format!("{}/api", server.uri()))
        .with_token("test-token")
        .build_http_client()
        .unwrap()
}

fn empty_order() -> JobOrderCreate {
    JobOrderCreate {
        customer_id: Some(7),
        customer_data: None,
        status: JobOrderStatus::Pending,
        delivery_date: None,
        total_amount: Decimal::new(100, 0),
        advance_amount: Decimal::new(30, 0),
        balance_amount: Decimal::new(70, 0),
        payment_method: PaymentMethod::Cash,
        cash_amount: Decimal::new(100, 0),
        card_amount: Decimal::ZERO,
        remarks: String::new(),
        job_order_items: Vec::new(),
        job_order_measurements: Vec::new(),
    }
}

#[tokio::test]
async fn test_search_customers_sends_query_and_token() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/crm/customers/search/"))
        .and(query_param("q", "omar"))
        .and(header("authorization", "Bearer test-token"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            {"id": 7, "customer_id": "102", "name": "Omar", "phone": "0912", "balance": "15.50", "points": 3, "is_active": true}
        ])))
        .expect(1)
        .mount(&server)
        .await;

    let customers = client_for(&server).search_customers("omar").await.unwrap();
    assert_eq!(customers.len(), 1);
    assert_eq!(customers[0].name, "Omar");
    assert_eq!(customers[0].balance, Decimal::new(1550, 2));
}

#[tokio::test]
async fn test_search_materials() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/materials/materials/search/"))
        .and(query_param("q", "wool"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            {"id": 3, "name": "Wool grey", "price": "120.00", "thool": "58.00", "kethet": "21.00",
             "thool_kum": "23.00", "ardh_f_kum": "9.00", "jamba": "11.00", "ragab": "15.00", "is_active": true}
        ])))
        .mount(&server)
        .await;

    let materials = client_for(&server).search_materials("wool").await.unwrap();
    assert_eq!(materials[0].id, 3);
    assert_eq!(materials[0].price, Decimal::new(12000, 2));
    assert_eq!(materials[0].measurements().thool, Decimal::new(58, 0));
}

#[tokio::test]
async fn test_create_customer() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/crm/customers/"))
        .and(body_partial_json(json!({"name": "Sara", "points": 0, "is_active": true})))
        .respond_with(ResponseTemplate::new(201).set_body_json(json!(
            {"id": 15, "customer_id": "C-15", "name": "Sara", "phone": "0999", "balance": "0.00"}
        )))
        .mount(&server)
        .await;

    let data = CustomerCreate::new("", "Sara", "0999", Decimal::ZERO);
    let customer = client_for(&server).create_customer(&data).await.unwrap();
    assert_eq!(customer.id, 15);
    assert_eq!(customer.customer_id, "C-15");
}

#[tokio::test]
async fn test_create_job_order() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/job-orders/job-orders/"))
        .and(body_partial_json(json!({
            "customer_id": 7,
            "status": "pending",
            "payment_method": "cash",
            "total_amount": "100",
            "balance_amount": "70"
        })))
        .respond_with(ResponseTemplate::new(201).set_body_json(json!(
            {"id": 41, "job_order_number": "JO-0041", "status": "pending", "total_amount": "100.00"}
        )))
        .mount(&server)
        .await;

    let order = client_for(&server).create_job_order(&empty_order()).await.unwrap();
    assert_eq!(order.id, 41);
    assert_eq!(order.job_order_number, "JO-0041");
}

#[tokio::test]
async fn test_validation_error_message_extracted() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/job-orders/job-orders/"))
        .respond_with(
            ResponseTemplate::new(400).set_body_json(json!({"error": "Customer is inactive"})),
        )
        .mount(&server)
        .await;

    let err = client_for(&server)
        .create_job_order(&empty_order())
        .await
        .unwrap_err();
    match err {
        ClientError::Validation(msg) => assert_eq!(msg, "Customer is inactive"),
        other => panic!("expected validation error, got {:?}", other),
    }
}

#[tokio::test]
async fn test_status_mapping() {
    let server = MockServer::start().await;
    Mock::given(path("/api/crm/customers/search/"))
        .respond_with(ResponseTemplate::new(401))
        .mount(&server)
        .await;
    Mock::given(path("/api/materials/materials/search/"))
        .respond_with(ResponseTemplate::new(500).set_body_string("boom"))
        .mount(&server)
        .await;

    let client = client_for(&server);
    assert!(matches!(
        client.search_customers("x").await,
        Err(ClientError::Unauthorized)
    ));
    match client.search_materials("x").await {
        Err(ClientError::Internal(msg)) => assert_eq!(msg, "boom"),
        other => panic!("expected internal error, got {:?}", other),
    }
}

#[tokio::test]
async fn test_malformed_body_is_serialization_error() {
    let server = MockServer::start().await;
    Mock::given(path("/api/crm/customers/search/"))
        .respond_with(ResponseTemplate::new(200).set_body_string("not json"))
        .mount(&server)
        .await;

    let result = client_for(&server).search_customers("x").await;
    assert!(matches!(result, Err(ClientError::Serialization(_))));
}
