mod test_utils;

use portfolio_contact::client::{ContactFormClient, FormState};
use test_utils::*;

fn fill_valid_fields(client: &mut ContactFormClient) {
    client.fields.name = "Ada Lovelace".to_string();
    client.fields.email = "ada@example.com".to_string();
    client.fields.budget = Some("$1k-$5k".to_string());
    client.fields.message = "I would like to discuss a project with you.".to_string();
}

#[actix_rt::test]
async fn successful_submission_clears_fields() {
    let app = TestApp::spawn().await;
    let mut client = ContactFormClient::new(format!("{}/api/contact", app.address));
    fill_valid_fields(&mut client);

    let state = client.submit().await.unwrap().clone();

    assert_eq!(state, FormState::Success);
    assert!(client.fields.name.is_empty());
    assert!(client.fields.message.is_empty());
    assert_eq!(app.sent_notifications().len(), 1);
}

#[actix_rt::test]
async fn local_validation_blocks_the_network_request() {
    let app = TestApp::spawn().await;
    let mut client = ContactFormClient::new(format!("{}/api/contact", app.address));
    fill_valid_fields(&mut client);
    client.fields.message = "too short".to_string();

    let errors = client.submit().await.unwrap_err();

    assert!(errors.iter().any(|e| e.field == "message"));
    assert_eq!(*client.state(), FormState::Idle);
    // Nothing reached the server, so no rate-limit budget was spent.
    assert!(app.sent_notifications().is_empty());
}

#[actix_rt::test]
async fn rate_limited_response_maps_to_generic_error_state() {
    let app = TestApp::spawn_with_limit(1).await;
    let mut client = ContactFormClient::new(format!("{}/api/contact", app.address));

    fill_valid_fields(&mut client);
    assert_eq!(*client.submit().await.unwrap(), FormState::Success);

    fill_valid_fields(&mut client);
    let state = client.submit().await.unwrap().clone();
    assert!(matches!(state, FormState::Error(_)));
    assert_eq!(app.sent_notifications().len(), 1);
}

#[actix_rt::test]
async fn form_is_reusable_after_an_error() {
    let app = TestApp::spawn_with_limit(2).await;
    let mut client = ContactFormClient::new(format!("{}/api/contact", app.address));

    // First attempt fails locally, second succeeds.
    fill_valid_fields(&mut client);
    client.fields.email = "broken".to_string();
    assert!(client.submit().await.is_err());

    client.fields.email = "ada@example.com".to_string();
    assert_eq!(*client.submit().await.unwrap(), FormState::Success);
}
