#[macro_use]
mod common;

use actix_web::{
    cookie::Cookie,
    http::{header::LOCATION, StatusCode},
    test,
};
use cognito_portfolio::{constants::CONTACT_SUCCESS_MESSAGE, utils::flash::FLASH_COOKIE};
use common::{RecordingMailer, TestApp, OWNER_EMAIL};
use serde_json::Value;

fn contact_form(name: &str, email: &str, message: &str) -> test::TestRequest {
    test::TestRequest::post()
        .uri("/contact")
        .set_form([("name", name), ("email", email), ("message", message)])
}

#[actix_rt::test]
async fn valid_submission_redirects_stores_and_mails() {
    let app = TestApp::new();
    let service = init_app!(app);

    let resp = test::call_service(&service, contact_form("Jo", "jo@x.io", "Hello").to_request()).await;

    assert_eq!(resp.status(), StatusCode::SEE_OTHER);
    assert_eq!(resp.headers().get(LOCATION).unwrap(), "/contact");

    let contacts = app.repos.contact_repo.list(None).await.unwrap();
    assert_eq!(contacts.len(), 1);
    assert_eq!(contacts[0].email, "jo@x.io");

    let sent = app.mailer.sent.lock();
    assert_eq!(sent.len(), 1);
    assert_eq!(sent[0].subject, "New message from Jo");
    assert_eq!(sent[0].to, OWNER_EMAIL);
}

#[actix_rt::test]
async fn flash_is_shown_once_after_redirect() {
    let app = TestApp::new();
    let service = init_app!(app);

    let resp = test::call_service(&service, contact_form("Jo", "jo@x.io", "Hello").to_request()).await;
    let flash = resp
        .response()
        .cookies()
        .find(|c| c.name() == FLASH_COOKIE)
        .expect("flash cookie")
        .into_owned();

    let resp = test::call_service(
        &service,
        test::TestRequest::get().uri("/contact").cookie(flash).to_request(),
    )
    .await;
    assert_eq!(resp.status(), StatusCode::OK);

    let cleared = resp
        .response()
        .cookies()
        .find(|c| c.name() == FLASH_COOKIE)
        .expect("removal cookie")
        .into_owned();
    assert_eq!(cleared.value(), "");

    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["context"]["flash"], CONTACT_SUCCESS_MESSAGE);

    let resp = test::call_service(&service, test::TestRequest::get().uri("/contact").to_request()).await;
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["context"]["flash"], Value::Null);
}

#[actix_rt::test]
async fn forged_flash_is_ignored_and_cleared() {
    let app = TestApp::new();
    let service = init_app!(app);

    let resp = test::call_service(
        &service,
        test::TestRequest::get()
            .uri("/contact")
            .cookie(Cookie::new(FLASH_COOKIE, "forged"))
            .to_request(),
    )
    .await;
    assert_eq!(resp.status(), StatusCode::OK);

    let cleared = resp
        .response()
        .cookies()
        .find(|c| c.name() == FLASH_COOKIE)
        .expect("removal cookie")
        .into_owned();
    assert_eq!(cleared.value(), "");

    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["context"]["flash"], Value::Null);
}

#[actix_rt::test]
async fn invalid_submission_rerenders_with_errors() {
    let app = TestApp::new();
    let service = init_app!(app);

    let resp = test::call_service(&service, contact_form("", "nope", "Hi").to_request()).await;

    assert_eq!(resp.status(), StatusCode::OK);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["page"], "contact");
    assert_eq!(body["context"]["form"]["email"], "nope");
    assert_eq!(body["context"]["form"]["message"], "Hi");
    assert_eq!(body["context"]["errors"]["name"][0], "This field is required.");
    assert_eq!(body["context"]["errors"]["email"][0], "Invalid email address.");
    assert!(body["context"]["errors"].get("message").is_none());

    assert!(app.repos.contact_repo.list(None).await.unwrap().is_empty());
    assert!(app.mailer.sent.lock().is_empty());
}

#[actix_rt::test]
async fn missing_fields_are_reported_not_rejected() {
    let app = TestApp::new();
    let service = init_app!(app);

    let req = test::TestRequest::post()
        .uri("/contact")
        .set_form([("name", "Jo")])
        .to_request();
    let resp = test::call_service(&service, req).await;

    assert_eq!(resp.status(), StatusCode::OK);
    let body: Value = test::read_body_json(resp).await;
    assert!(body["context"]["errors"]["email"].is_array());
    assert!(body["context"]["errors"]["message"].is_array());
}

#[actix_rt::test]
async fn mail_failure_still_acknowledges_submission() {
    let app = TestApp::with_mailer(RecordingMailer {
        fail: true,
        ..Default::default()
    });
    let service = init_app!(app);

    let resp = test::call_service(&service, contact_form("Jo", "jo@x.io", "Hello").to_request()).await;

    assert_eq!(resp.status(), StatusCode::SEE_OTHER);
    assert_eq!(app.repos.contact_repo.list(None).await.unwrap().len(), 1);
    assert_eq!(app.mailer.sent.lock().len(), 1);
}
