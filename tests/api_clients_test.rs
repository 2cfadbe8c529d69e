/// HTTP-level tests for the API client wrappers against a mock server
use billing_desk::prelude::*;
use serde_json::{json, Value};
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

async fn gateway_for(server: &MockServer) -> ApiGateway {
    ApiGateway::new(&server.uri()).unwrap()
}

async fn request_count(server: &MockServer) -> usize {
    server.received_requests().await.unwrap().len()
}

fn full_bill_body() -> Value {
    json!({
        "id": 1,
        "customerId": 2,
        "date": "2024-03-15",
        "total": 6400.0,
        "status": "PAID",
        "customer": {"id": 2, "name": "Imane", "email": "imane@example.com"},
        "productItems": [
            {
                "id": 11,
                "productId": "b3f1c2",
                "productName": "Computer",
                "quantity": 2,
                "price": 3200.0,
                "total": 6400.0
            }
        ]
    })
}

#[tokio::test]
async fn test_get_bill_hits_full_bill_path_and_passes_body_through() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/bills/fullBill/1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(full_bill_body()))
        .expect(1)
        .mount(&server)
        .await;

    let service = BillingService::new(gateway_for(&server).await);
    let bill = service.get_bill(BillId::new(1)).await.unwrap();

    assert_eq!(bill.id, BillId::new(1));
    assert_eq!(bill.items().len(), 1);
    assert_eq!(serde_json::to_value(&bill).unwrap(), full_bill_body());
}

#[tokio::test]
async fn test_get_bills_by_customer_hits_by_customer_path() {
    let server = MockServer::start().await;
    let body = json!([
        {"id": 1, "customerId": 42, "total": 10.5},
        {"id": 2, "customerId": 42, "total": 20.25, "note": "second"}
    ]);
    Mock::given(method("GET"))
        .and(path("/api/bills/byCustomer/42"))
        .respond_with(ResponseTemplate::new(200).set_body_json(body.clone()))
        .expect(1)
        .mount(&server)
        .await;

    let service = BillingService::new(gateway_for(&server).await);
    let bills = service
        .get_bills_by_customer(CustomerId::new(42))
        .await
        .unwrap();

    assert_eq!(bills.len(), 2);
    assert_eq!(serde_json::to_value(&bills).unwrap(), body);
}

#[tokio::test]
async fn test_nulls_and_integer_amounts_pass_through_unchanged() {
    let server = MockServer::start().await;
    let body = r#"[{"id":7,"customerId":42,"total":100,"customer":null,"productItems":[{"productId":"p","productName":null,"quantity":1,"price":100,"total":100}]}]"#;
    Mock::given(method("GET"))
        .and(path("/api/bills/byCustomer/42"))
        .respond_with(ResponseTemplate::new(200).set_body_raw(body, "application/json"))
        .expect(1)
        .mount(&server)
        .await;

    let service = BillingService::new(gateway_for(&server).await);
    let bills = service
        .get_bills_by_customer(CustomerId::new(42))
        .await
        .unwrap();

    let expected: Value = serde_json::from_str(body).unwrap();
    assert_eq!(serde_json::to_value(&bills).unwrap(), expected);
    assert!(bills[0].customer.is_null());
    assert!(bills[0].items()[0].product_name.is_null());
}

#[tokio::test]
async fn test_get_customers_hits_fixed_path() {
    let server = MockServer::start().await;
    let body = json!([
        {"id": 1, "name": "Alice", "email": "alice@example.com"},
        {"id": 2, "name": "Bob", "email": "bob@example.com"}
    ]);
    Mock::given(method("GET"))
        .and(path("/api/customers"))
        .respond_with(ResponseTemplate::new(200).set_body_json(body.clone()))
        .expect(2)
        .mount(&server)
        .await;

    let service = CustomerService::new(gateway_for(&server).await);
    let first = service.get_customers().await.unwrap();
    let second = service.get_customers().await.unwrap();

    assert_eq!(first, second);
    assert_eq!(first[0].name.as_deref(), Some("Alice"));
    assert_eq!(serde_json::to_value(&first).unwrap(), body);
}

#[tokio::test]
async fn test_get_products_hits_fixed_path() {
    let server = MockServer::start().await;
    let body = json!([{"id": "p-1", "name": "Printer", "price": 1299.0, "quantity": 30}]);
    Mock::given(method("GET"))
        .and(path("/api/products"))
        .respond_with(ResponseTemplate::new(200).set_body_json(body.clone()))
        .expect(1)
        .mount(&server)
        .await;

    let service = InventoryService::new(gateway_for(&server).await);
    let products = service.get_products().await.unwrap();

    assert_eq!(serde_json::to_value(&products).unwrap(), body);
}

#[tokio::test]
async fn test_get_customer_by_id() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/customers/3"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(json!({"id": 3, "name": "Carol"})),
        )
        .expect(1)
        .mount(&server)
        .await;

    let service = CustomerService::new(gateway_for(&server).await);
    let customer = service.get_customer(CustomerId::new(3)).await.unwrap();

    assert_eq!(customer, Customer::new(3u64).with_name("Carol"));
}

#[tokio::test]
async fn test_get_product_by_id_is_encoded() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/products/a%20b"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"id": "a b"})))
        .expect(1)
        .mount(&server)
        .await;

    let service = InventoryService::new(gateway_for(&server).await);
    let product = service.get_product("a b").await.unwrap();

    assert_eq!(product.id.as_deref(), Some("a b"));
}

#[tokio::test]
async fn test_get_product_rejects_traversal_without_request() {
    let server = MockServer::start().await;
    let service = InventoryService::new(gateway_for(&server).await);

    for id in ["../customers", "a/b", "", "..", "a\\b"] {
        let err = service.get_product(id).await.unwrap_err();
        assert_eq!(err.kind(), FailureKind::InvalidParameter, "id {:?}", id);
    }
    assert_eq!(request_count(&server).await, 0);
}

#[tokio::test]
async fn test_calls_are_lazy_until_awaited() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/customers"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
        .mount(&server)
        .await;

    let service = CustomerService::new(gateway_for(&server).await);

    // Creating and dropping the future issues nothing
    drop(service.get_customers());
    let pending = service.get_customers();
    tokio::task::yield_now().await;
    assert_eq!(request_count(&server).await, 0);

    let customers = pending.await.unwrap();
    assert!(customers.is_empty());
    assert_eq!(request_count(&server).await, 1);
}

#[tokio::test]
async fn test_non_success_status_is_transport_failure() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/products"))
        .respond_with(ResponseTemplate::new(500))
        .expect(1)
        .mount(&server)
        .await;

    let service = InventoryService::new(gateway_for(&server).await);
    let err = service.get_products().await.unwrap_err();

    assert!(matches!(err, ApiError::Status { .. }));
    assert_eq!(err.kind(), FailureKind::Transport);
}

#[tokio::test]
async fn test_malformed_body_is_decode_failure() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/customers"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html>oops</html>"))
        .mount(&server)
        .await;

    let service = CustomerService::new(gateway_for(&server).await);
    let err = service.get_customers().await.unwrap_err();

    assert!(matches!(err, ApiError::Decode { .. }));
    assert_eq!(err.kind(), FailureKind::Decode);
}

#[tokio::test]
async fn test_wrong_shape_is_decode_failure() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/bills/byCustomer/1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"id": 1})))
        .mount(&server)
        .await;

    let service = BillingService::new(gateway_for(&server).await);
    let err = service
        .get_bills_by_customer(CustomerId::new(1))
        .await
        .unwrap_err();

    assert_eq!(err.kind(), FailureKind::Decode);
}

#[tokio::test]
async fn test_unreachable_host_is_transport_failure() {
    let gateway = ApiGateway::new("http://127.0.0.1:1").unwrap();
    let service = CustomerService::new(gateway);

    let err = service.get_customers().await.unwrap_err();

    assert!(matches!(err, ApiError::Transport { .. }));
    assert_eq!(err.kind(), FailureKind::Transport);
}
