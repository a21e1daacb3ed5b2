//! Integration tests for the endpoint methods against a local mock server.

use httpmock::prelude::*;
use hunter_client::{
    Client, Config, DomainSearchQuery, EmailFinderQuery, EmailType, Error, ErrorKind, LeadsQuery,
};
use serde_json::json;
use std::time::Duration;

const KEY: &str = "test-key";

fn client_for(server: &MockServer) -> Client {
    Client::builder()
        .api_key(KEY)
        .base_url(server.base_url())
        .build()
        .unwrap()
}

#[tokio::test]
async fn verification_passes_status_through() {
    let server = MockServer::start_async().await;
    let mock = server
        .mock_async(|when, then| {
            when.method(GET)
                .path("/email-verifier")
                .query_param("email", "test@example.com")
                .query_param("api_key", KEY);
            then.status(200)
                .json_body(json!({"status": "valid", "score": 90}));
        })
        .await;

    let result = client_for(&server)
        .verification_email("test@example.com")
        .await
        .unwrap();

    mock.assert_async().await;
    assert_eq!(result.status.as_deref(), Some("valid"));
    assert_eq!(result.score, Some(90));
}

#[tokio::test]
async fn verification_unwraps_data_envelope() {
    let server = MockServer::start_async().await;
    server
        .mock_async(|when, then| {
            when.method(GET).path("/email-verifier");
            then.status(200).json_body(json!({
                "data": {
                    "status": "accept_all",
                    "result": "risky",
                    "score": 68,
                    "email": "patrick@stripe.com",
                    "smtp_check": true,
                    "sources": [{"domain": "stripe.com", "uri": "http://stripe.com"}]
                },
                "meta": {"params": {"email": "patrick@stripe.com"}}
            }));
        })
        .await;

    let result = client_for(&server)
        .verification_email("patrick@stripe.com")
        .await
        .unwrap();

    assert_eq!(result.status.as_deref(), Some("accept_all"));
    assert_eq!(result.result.as_deref(), Some("risky"));
    assert_eq!(result.smtp_check, Some(true));
    assert_eq!(result.sources.len(), 1);
}

#[tokio::test]
async fn account_info_uses_configured_key() {
    let server = MockServer::start_async().await;
    let mock = server
        .mock_async(|when, then| {
            when.method(GET).path("/account").query_param("api_key", KEY);
            then.status(200).json_body(json!({
                "data": {
                    "email": "ada@example.com",
                    "plan_name": "Starter",
                    "plan_level": 1,
                    "requests": {
                        "searches": {"used": 12, "available": 500},
                        "credits": {"used": 0.5, "available": 50.0}
                    }
                }
            }));
        })
        .await;

    let account = client_for(&server).get_info_about_account().await.unwrap();

    mock.assert_async().await;
    assert_eq!(account.plan_name.as_deref(), Some("Starter"));
    assert_eq!(account.requests["searches"].used, 12.0);
    assert_eq!(account.requests["credits"].used, 0.5);
}

#[tokio::test]
async fn account_info_key_override() {
    let server = MockServer::start_async().await;
    let mock = server
        .mock_async(|when, then| {
            when.method(GET)
                .path("/account")
                .query_param("api_key", "other-key");
            then.status(200).json_body(json!({"data": {"plan_name": "Free"}}));
        })
        .await;

    let account = client_for(&server)
        .get_info_about_account_with_key("other-key")
        .await
        .unwrap();

    mock.assert_async().await;
    assert_eq!(account.plan_name.as_deref(), Some("Free"));
}

#[tokio::test]
async fn domain_search_sends_filters() {
    let server = MockServer::start_async().await;
    let mock = server
        .mock_async(|when, then| {
            when.method(GET)
                .path("/domain-search")
                .query_param("domain", "intercom.io")
                .query_param("company", "Intercom")
                .query_param("limit", "1")
                .query_param("type", "personal")
                .query_param("api_key", KEY);
            then.status(200).json_body(json!({
                "data": {
                    "domain": "intercom.io",
                    "pattern": "{first}",
                    "organization": "Intercom",
                    "emails": [{"value": "ciaran@intercom.io", "type": "personal", "confidence": 92}]
                }
            }));
        })
        .await;

    let query = DomainSearchQuery::domain("intercom.io")
        .company("Intercom")
        .limit(1)
        .email_type(EmailType::Personal);
    let result = client_for(&server).search_domain(&query).await.unwrap();

    mock.assert_async().await;
    assert_eq!(result.pattern.as_deref(), Some("{first}"));
    assert_eq!(result.emails[0].value, "ciaran@intercom.io");
    assert_eq!(result.emails[0].confidence, Some(92));
}

#[tokio::test]
async fn email_finder_sends_names() {
    let server = MockServer::start_async().await;
    let mock = server
        .mock_async(|when, then| {
            when.method(GET)
                .path("/email-finder")
                .query_param("domain", "reddit.com")
                .query_param("first_name", "Alexis")
                .query_param("last_name", "Ohanian")
                .query_param("api_key", KEY);
            then.status(200).json_body(json!({
                "data": {"email": "alexis@reddit.com", "score": 97, "domain": "reddit.com"}
            }));
        })
        .await;

    let query = EmailFinderQuery::new("reddit.com", "Alexis", "Ohanian");
    let found = client_for(&server).email_finder(&query).await.unwrap();

    mock.assert_async().await;
    assert_eq!(found.email.as_deref(), Some("alexis@reddit.com"));
    assert_eq!(found.score, Some(97));
}

#[tokio::test]
async fn leads_are_kept_as_maps() {
    let server = MockServer::start_async().await;
    let mock = server
        .mock_async(|when, then| {
            when.method(GET)
                .path("/leads")
                .query_param("limit", "2")
                .query_param("api_key", KEY);
            then.status(200).json_body(json!({
                "data": {"leads": [
                    {"id": 1, "email": "a@example.com", "custom_attributes": {"tier": "gold"}},
                    {"id": 2, "email": "b@example.com"}
                ]},
                "meta": {"count": 2, "total": 40}
            }));
        })
        .await;

    let query = LeadsQuery {
        limit: Some(2),
        offset: None,
    };
    let list = client_for(&server).get_list_of_lead(&query).await.unwrap();

    mock.assert_async().await;
    assert_eq!(list.leads.len(), 2);
    assert_eq!(list.leads[0]["custom_attributes"]["tier"], "gold");
}

#[tokio::test]
async fn non_success_is_request_error_for_every_operation() {
    let server = MockServer::start_async().await;
    server
        .mock_async(|when, then| {
            when.method(GET);
            then.status(500).body("not json at all");
        })
        .await;
    let client = client_for(&server);

    let errors = vec![
        client.verification_email("a@b.c").await.unwrap_err(),
        client.get_info_about_account().await.unwrap_err(),
        client
            .search_domain(&DomainSearchQuery::domain("b.c"))
            .await
            .unwrap_err(),
        client
            .email_finder(&EmailFinderQuery::new("b.c", "A", "B"))
            .await
            .unwrap_err(),
        client
            .get_list_of_lead(&LeadsQuery::default())
            .await
            .unwrap_err(),
    ];

    for err in errors {
        assert_eq!(err.kind(), ErrorKind::Request, "{err}");
        assert_eq!(err.status().map(|s| s.as_u16()), Some(500));
    }
}

#[tokio::test]
async fn unauthorized_carries_api_message() {
    let server = MockServer::start_async().await;
    server
        .mock_async(|when, then| {
            when.method(GET).path("/account");
            then.status(401).json_body(json!({
                "errors": [{
                    "id": "authentication_failed",
                    "code": 401,
                    "details": "No user found for the API key supplied"
                }]
            }));
        })
        .await;

    let err = client_for(&server)
        .get_info_about_account()
        .await
        .unwrap_err();

    assert!(err.is_authentication());
    assert_eq!(err.operation(), Some("get_info_about_account"));
    assert!(err.to_string().contains("No user found"));
}

#[tokio::test]
async fn malformed_body_is_parse_error() {
    let server = MockServer::start_async().await;
    server
        .mock_async(|when, then| {
            when.method(GET).path("/email-verifier");
            then.status(200).body("<html>maintenance</html>");
        })
        .await;

    let err = client_for(&server)
        .verification_email("a@b.c")
        .await
        .unwrap_err();

    assert_eq!(err.kind(), ErrorKind::Parse);
    assert_eq!(err.operation(), Some("verification_email"));
}

#[tokio::test]
async fn wrong_shape_is_parse_error() {
    let server = MockServer::start_async().await;
    server
        .mock_async(|when, then| {
            when.method(GET).path("/leads");
            then.status(200).json_body(json!({"data": {"leads": "none"}}));
        })
        .await;

    let err = client_for(&server)
        .get_list_of_lead(&LeadsQuery::default())
        .await
        .unwrap_err();

    assert_eq!(err.kind(), ErrorKind::Parse);
}

#[tokio::test]
async fn slow_response_times_out() {
    let server = MockServer::start_async().await;
    server
        .mock_async(|when, then| {
            when.method(GET).path("/account");
            then.status(200)
                .delay(Duration::from_secs(3))
                .json_body(json!({"data": {}}));
        })
        .await;

    let client = Client::builder()
        .api_key(KEY)
        .base_url(server.base_url())
        .timeout(Duration::from_millis(200))
        .build()
        .unwrap();
    let err = client.get_info_about_account().await.unwrap_err();

    assert_eq!(err.kind(), ErrorKind::Request);
    assert!(err.is_timeout());
}

#[tokio::test]
async fn transport_errors_do_not_reveal_key() {
    let server = MockServer::start_async().await;
    server
        .mock_async(|when, then| {
            when.method(GET).path("/account");
            then.status(200)
                .delay(Duration::from_secs(2))
                .json_body(json!({"data": {}}));
        })
        .await;

    let client = Client::builder()
        .api_key("SUPERSECRETKEY")
        .base_url(server.base_url())
        .timeout(Duration::from_millis(100))
        .build()
        .unwrap();
    let err = client.get_info_about_account().await.unwrap_err();

    assert!(err.is_timeout());
    assert!(!err.to_string().contains("SUPERSECRETKEY"), "{err}");
    assert!(!format!("{err:?}").contains("SUPERSECRETKEY"), "{err:?}");
}

#[tokio::test]
async fn missing_key_sends_nothing() {
    let server = MockServer::start_async().await;
    let mock = server
        .mock_async(|when, then| {
            when.method(GET);
            then.status(200).json_body(json!({}));
        })
        .await;

    let err = Client::builder()
        .base_url(server.base_url())
        .build()
        .unwrap_err();

    assert!(matches!(err, Error::MissingApiKey));
    assert_eq!(mock.hits_async().await, 0);
}

#[tokio::test]
async fn from_config_targets_configured_base() {
    let server = MockServer::start_async().await;
    let mock = server
        .mock_async(|when, then| {
            when.method(GET).path("/v2/account");
            then.status(200).json_body(json!({"data": {"plan_name": "Free"}}));
        })
        .await;

    let mut config = Config::new(KEY);
    config.base_url = server.url("/v2");
    let client = Client::from_config(&config).unwrap();
    client.get_info_about_account().await.unwrap();

    mock.assert_async().await;
}
