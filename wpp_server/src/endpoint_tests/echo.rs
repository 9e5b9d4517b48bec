use actix_web::{body::MessageBody, http::StatusCode, test, test::TestRequest, web, App};
use gsp_tools::GspApiError;
use log::*;
use serde_json::json;

use super::mocks::MockGsp;
use crate::{errors::ServerError, routes::EchoRoute};

#[actix_web::test]
async fn echo_wraps_the_body_and_relays_the_decrypted_response() {
    let _ = env_logger::try_init().ok();
    let mut api = MockGsp::new();
    api.expect_echo()
        .withf(|request| {
            request.client_message == r#"{"value":"hello"}"#
                && request.request_header.request_id.len() == 36
                && request.request_header.protocol_version.major == 1
        })
        .returning(|_| Ok(r#"{"clientMessage":"{\"value\":\"hello\"}","serverMessage":"pong"}"#.to_string()));

    let app = App::new().app_data(web::Data::new(api)).service(EchoRoute::<MockGsp>::new());
    let app = test::init_service(app).await;
    let req = TestRequest::post().uri("/echo").set_json(json!({"value": "hello"})).to_request();
    let (_, res) = test::call_service(&app, req).await.into_parts();
    let status = res.status();
    let body = String::from_utf8_lossy(&res.into_body().try_into_bytes().unwrap()).into_owned();
    info!("Response body: {body}");
    assert!(status.is_success());
    assert_eq!(body, r#"{"clientMessage":"{\"value\":\"hello\"}","serverMessage":"pong"}"#);
}

#[actix_web::test]
async fn upstream_rejection_surfaces_as_500_with_the_error() {
    let _ = env_logger::try_init().ok();
    let mut api = MockGsp::new();
    api.expect_echo()
        .returning(|_| Err(GspApiError::QueryError { status: 404, message: "PIAID not found".to_string() }));

    let app = App::new().app_data(web::Data::new(api)).service(EchoRoute::<MockGsp>::new());
    let app = test::init_service(app).await;
    let req = TestRequest::post().uri("/echo").set_json(json!({"value": "hello"})).to_request();
    let (_, res) = test::call_service(&app, req).await.into_parts();
    let status = res.status();
    let body = String::from_utf8_lossy(&res.into_body().try_into_bytes().unwrap()).into_owned();
    assert_eq!(status.as_u16(), StatusCode::INTERNAL_SERVER_ERROR.as_u16());
    assert!(body.contains("Query failed. Error 404. PIAID not found"), "was: {body}");
}

#[actix_web::test]
async fn malformed_json_is_a_client_error() {
    let _ = env_logger::try_init().ok();
    // No expectations: the body never makes it past the extractor
    let api = MockGsp::new();
    let app = App::new()
        .app_data(web::Data::new(api))
        .app_data(web::JsonConfig::default().error_handler(|err, _req| {
            ServerError::InvalidRequestBody(err.to_string()).into()
        }))
        .service(EchoRoute::<MockGsp>::new());
    let app = test::init_service(app).await;
    let req = TestRequest::post()
        .uri("/echo")
        .insert_header(("Content-Type", "application/json"))
        .set_payload("{not json")
        .to_request();
    let (_, res) = test::call_service(&app, req).await.into_parts();
    let status = res.status();
    let body = String::from_utf8_lossy(&res.into_body().try_into_bytes().unwrap()).into_owned();
    assert_eq!(status.as_u16(), StatusCode::BAD_REQUEST.as_u16());
    assert!(body.contains("Could not read request body"), "was: {body}");
}
