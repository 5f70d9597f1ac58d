use mockito::{Matcher, Server, ServerGuard};
use parcel_gateway::{
    CollectionWindow, Credential, GatewayError, GatewaySettings, HttpTransport, PrintOptions,
    VendorGateway,
};
use pretty_assertions::assert_eq;
use serde_json::json;

const PATH: &str = "/ecomService/v28/Json/";

fn gateway_for(server: &ServerGuard) -> VendorGateway<HttpTransport> {
    let mut settings = GatewaySettings::default();
    settings.vendor.base_url = format!("{}{}", server.url(), PATH);
    VendorGateway::from_settings(&settings).unwrap()
}

/// Matches one multipart text field carrying `value`.
fn field(name: &str, value: &str) -> Matcher {
    Matcher::Regex(format!(r#"(?s)name="{}".{{0,120}}{}"#, name, value))
}

#[tokio::test]
async fn test_place_lookup_posts_multipart_envelope() {
    let mut server = Server::new_async().await;
    let body = json!({"places": [{"id": 2159, "name": "Johannesburg"}]});
    let mock = server
        .mock("POST", PATH)
        .match_header(
            "content-type",
            Matcher::Regex("^multipart/form-data; boundary=".to_string()),
        )
        .match_body(Matcher::AllOf(vec![
            field("method", "getPlacesByName"),
            field("class", "quote"),
            field("params", r#"\{"name":"Johan"\}"#),
            field("token_id", "tok-abc"),
        ]))
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(body.to_string())
        .expect(1)
        .create_async()
        .await;

    let credential = Credential::new("tok-abc").unwrap();
    let response = gateway_for(&server)
        .lookup_place_by_name("Johan", &credential)
        .await
        .unwrap();

    assert_eq!(response.body(), &body);
    mock.assert_async().await;
}

#[tokio::test]
async fn test_collection_http_500_is_transport_failure() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("POST", PATH)
        .match_body(Matcher::AllOf(vec![
            field("method", "quoteToCollection"),
            field("class", "collection"),
        ]))
        .with_status(500)
        .with_body("Internal Server Error")
        .create_async()
        .await;

    let credential = Credential::new("tok-abc").unwrap();
    let err = gateway_for(&server)
        .convert_quote_to_collection(
            "QTE02382646",
            &CollectionWindow::default(),
            &PrintOptions::default(),
            &credential,
        )
        .await
        .unwrap_err();

    assert_eq!(err.status(), Some(500));
    assert!(matches!(err, GatewayError::TransportFailure { .. }));
    mock.assert_async().await;
}

#[tokio::test]
async fn test_request_quote_returns_quote_number() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("POST", PATH)
        .match_body(field("method", "requestQuote"))
        .with_status(200)
        .with_body(r#"{"quoteno":"QTE02382646","rates":[]}"#)
        .create_async()
        .await;

    let credential = Credential::new("tok-abc").unwrap();
    let response = gateway_for(&server)
        .request_quote(&Default::default(), &[], &credential)
        .await
        .unwrap();

    assert_eq!(response.quote_no(), Some("QTE02382646"));
    mock.assert_async().await;
}

#[tokio::test]
async fn test_vendor_error_field_is_surfaced() {
    let mut server = Server::new_async().await;
    let payload = json!({"error": "Service not available", "errorcode": 3});
    server
        .mock("POST", PATH)
        .with_status(200)
        .with_body(payload.to_string())
        .create_async()
        .await;

    let credential = Credential::new("tok-abc").unwrap();
    let err = gateway_for(&server)
        .update_service("QTE02382646", "OVN", "Test Shipment", &credential)
        .await
        .unwrap_err();

    match err {
        GatewayError::VendorError { payload: got } => assert_eq!(got, payload),
        other => panic!("expected vendor error, got {:?}", other),
    }
}

#[tokio::test]
async fn test_validate_credential_over_http() {
    let mut server = Server::new_async().await;
    server
        .mock("POST", PATH)
        .match_body(Matcher::AllOf(vec![
            field("method", "getDefItems"),
            field("params", r"\{\}"),
            field("token_id", "good-token"),
        ]))
        .with_status(200)
        .with_body(r#"{"items":[]}"#)
        .create_async()
        .await;
    server
        .mock("POST", PATH)
        .match_body(field("token_id", "bad-token"))
        .with_status(200)
        .with_body(r#"{"error":"Invalid token"}"#)
        .create_async()
        .await;

    let gateway = gateway_for(&server);
    assert!(gateway.validate_credential("good-token").await);
    assert!(!gateway.validate_credential("bad-token").await);
}

#[tokio::test]
async fn test_unparseable_body_is_transport_failure() {
    let mut server = Server::new_async().await;
    server
        .mock("POST", PATH)
        .with_status(200)
        .with_body("<html>maintenance</html>")
        .create_async()
        .await;

    let credential = Credential::new("tok-abc").unwrap();
    let err = gateway_for(&server)
        .lookup_place_by_postcode("7700", &credential)
        .await
        .unwrap_err();
    assert!(matches!(err, GatewayError::TransportFailure { status: Some(200), .. }));
}

#[tokio::test]
async fn test_unreachable_endpoint() {
    let mut settings = GatewaySettings::default();
    settings.vendor.base_url = "http://127.0.0.1:1/Json/".to_string();
    settings.http.connect_timeout_secs = Some(2);
    let gateway = VendorGateway::from_settings(&settings).unwrap();

    let credential = Credential::new("tok-abc").unwrap();
    let err = gateway
        .lookup_place_by_name("Johan", &credential)
        .await
        .unwrap_err();
    assert!(matches!(err, GatewayError::TransportFailure { status: None, .. }));
    assert!(!gateway.validate_credential("tok-abc").await);
}
