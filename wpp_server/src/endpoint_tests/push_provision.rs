use actix_web::{body::MessageBody, http::StatusCode, test, test::TestRequest, web, App};
use log::*;
use serde_json::json;

use super::{helpers::sample_templates, mocks::MockGsp};
use crate::{routes::PushProvisionRoute, templates::TemplateStore};

fn session_payload() -> serde_json::Value {
    json!({
        "serverSessionId": "8c41f7aa",
        "clientSessionId": "1d9e03bc",
        "tokenSetting": 1,
        "cardSetting": 1,
        "publicDeviceId": "device-7",
        "publicWalletId": "wallet-7"
    })
}

#[actix_web::test]
async fn session_payload_becomes_a_push_provisioning_notification() {
    let _ = env_logger::try_init().ok();
    let (_dir, store) = sample_templates();
    let mut api = MockGsp::new();
    api.expect_push_provisioning_notification()
        .withf(|notification| {
            let material = notification["paymentInstrumentMaterial"].as_array().unwrap();
            notification["pushContext"]["serverSessionId"] == "8c41f7aa"
                && notification["pushContext"]["clientSessionId"] == "1d9e03bc"
                && notification["requestHeader"]["requestId"].as_str().unwrap().len() == 36
                && material.len() == 2
                && material[0]["tokenizableOpaqueAccountCredential"]["publicWalletId"] == "wallet-7"
                && material[1]["paymentCard"]["accountNumber"] == "4111111111111111"
                && notification["paymentAccount"]["paymentCard"]["accountNumber"] == "4111111111111111"
        })
        .returning(|_| Ok(r#"{"responseHeader":{"responseId":"ab12"}}"#.to_string()));

    let app = App::new()
        .app_data(web::Data::new(api))
        .app_data(web::Data::new(store))
        .service(PushProvisionRoute::<MockGsp>::new());
    let app = test::init_service(app).await;
    let req = TestRequest::post().uri("/pushProvision").set_json(session_payload()).to_request();
    let (_, res) = test::call_service(&app, req).await.into_parts();
    let status = res.status();
    let body = String::from_utf8_lossy(&res.into_body().try_into_bytes().unwrap()).into_owned();
    info!("Response body: {body}");
    assert!(status.is_success());
    assert_eq!(body, r#"{"responseHeader":{"responseId":"ab12"}}"#);
}

#[actix_web::test]
async fn disabled_settings_send_no_instrument_material() {
    let _ = env_logger::try_init().ok();
    let (_dir, store) = sample_templates();
    let mut api = MockGsp::new();
    api.expect_push_provisioning_notification()
        .withf(|notification| {
            notification["paymentInstrumentMaterial"].as_array().unwrap().is_empty()
                && notification["paymentAccount"]["paymentCard"]["accountNumber"] == "4111111111111111"
        })
        .returning(|_| Ok("{}".to_string()));

    let app = App::new()
        .app_data(web::Data::new(api))
        .app_data(web::Data::new(store))
        .service(PushProvisionRoute::<MockGsp>::new());
    let app = test::init_service(app).await;
    let payload = json!({
        "serverSessionId": "8c41f7aa",
        "clientSessionId": "1d9e03bc",
        "tokenSetting": 0,
        "cardSetting": 0
    });
    let req = TestRequest::post().uri("/pushProvision").set_json(payload).to_request();
    let (_, res) = test::call_service(&app, req).await.into_parts();
    assert!(res.status().is_success());
}

#[actix_web::test]
async fn missing_templates_fail_before_anything_is_relayed() {
    let _ = env_logger::try_init().ok();
    let empty_dir = tempfile::tempdir().unwrap();
    let store = TemplateStore::new(empty_dir.path());
    // No expectations: the relay must never be reached
    let api = MockGsp::new();

    let app = App::new()
        .app_data(web::Data::new(api))
        .app_data(web::Data::new(store))
        .service(PushProvisionRoute::<MockGsp>::new());
    let app = test::init_service(app).await;
    let req = TestRequest::post().uri("/pushProvision").set_json(session_payload()).to_request();
    let (_, res) = test::call_service(&app, req).await.into_parts();
    let status = res.status();
    let body = String::from_utf8_lossy(&res.into_body().try_into_bytes().unwrap()).into_owned();
    assert_eq!(status.as_u16(), StatusCode::INTERNAL_SERVER_ERROR.as_u16());
    assert!(body.contains("Could not load request template"), "was: {body}");
}
