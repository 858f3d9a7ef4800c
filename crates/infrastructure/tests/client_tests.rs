//! End-to-end tests of the API client over real HTTP.

#![allow(clippy::unwrap_used)]

use std::sync::Arc;
use std::time::Duration;

use foodapp_application::ports::KeyValueStorage;
use foodapp_application::{
    AccountApi, ApiClient, ApiError, AuthApi, DictApi, GoodsApi, TokenStore,
};
use foodapp_domain::{Location, PageQuery};
use foodapp_domain::acl::AccountCreate;
use foodapp_domain::catalog::{DictKind, DictListQuery, GoodsListQuery};
use foodapp_infrastructure::{MemoryStorage, ReqwestTransport, SessionNavigator, SystemClock};
use pretty_assertions::assert_eq;
use serde_json::json;
use wiremock::matchers::{body_json, header, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

struct Fixture {
    storage: Arc<MemoryStorage>,
    navigator: Arc<SessionNavigator>,
    tokens: TokenStore,
    client: ApiClient,
}

fn fixture(base_url: &str, timeout: Duration) -> Fixture {
    let storage = Arc::new(MemoryStorage::new());
    let navigator = Arc::new(SessionNavigator::at(
        Location::parse("/dict/units?page=2").unwrap(),
    ));
    let tokens = TokenStore::new(storage.clone(), Arc::new(SystemClock::new()));
    let client = ApiClient::builder()
        .transport(Arc::new(ReqwestTransport::new(base_url).unwrap()))
        .token_store(tokens.clone())
        .navigator(navigator.clone())
        .timeout(timeout)
        .build()
        .unwrap();

    Fixture {
        storage,
        navigator,
        tokens,
        client,
    }
}

#[tokio::test]
async fn test_login_then_authorized_list() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/api/v1/auth/login"))
        .and(header("content-type", "application/json"))
        .and(body_json(json!({"username": "admin", "password": "secret"})))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "token": "tok-1",
            "token_type": "Bearer",
            "expires_in": 3600
        })))
        .mount(&server)
        .await;

    Mock::given(method("POST"))
        .and(path("/api/v1/dict/list_unit"))
        .and(query_param("keyword", "斤"))
        .and(query_param("page", "1"))
        .and(header("authorization", "Bearer tok-1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "total": 1,
            "items": [{"ID": "u-1", "Name": "斤", "Code": "U01", "Sort": 1}]
        })))
        .mount(&server)
        .await;

    let fx = fixture(&server.uri(), Duration::from_secs(5));
    AuthApi::new(fx.client.clone())
        .login("admin", "secret")
        .await
        .unwrap();
    assert_eq!(fx.tokens.get_token().await.as_deref(), Some("tok-1"));

    let page = DictApi::new(fx.client.clone())
        .list(
            DictKind::Unit,
            &DictListQuery {
                keyword: Some("斤".to_string()),
                paging: PageQuery {
                    page: Some(1),
                    page_size: None,
                },
            },
        )
        .await
        .unwrap();

    assert_eq!(page.total, 1);
    assert_eq!(page.items[0].name, "斤");
}

#[tokio::test]
async fn test_anonymous_request_has_no_authorization() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/api/v1/goods/list_goods"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"total": 0, "items": null})))
        .mount(&server)
        .await;

    let fx = fixture(&server.uri(), Duration::from_secs(5));
    let page = GoodsApi::new(fx.client.clone())
        .list(&GoodsListQuery {
            org_id: "o-1".to_string(),
            ..GoodsListQuery::default()
        })
        .await
        .unwrap();
    assert!(page.is_empty());

    let requests = server.received_requests().await.unwrap();
    assert_eq!(requests.len(), 1);
    assert!(!requests[0].headers.contains_key("authorization"));
}

#[tokio::test]
async fn test_backend_error_envelope_becomes_message() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/api/v1/accounts/create"))
        .respond_with(ResponseTemplate::new(409).set_body_json(json!({
            "error": "创建失败",
            "details": "用户名已存在"
        })))
        .mount(&server)
        .await;

    let fx = fixture(&server.uri(), Duration::from_secs(5));
    let err = AccountApi::new(fx.client.clone())
        .create(&AccountCreate {
            username: "admin".to_string(),
            password: "secret".to_string(),
            org_id: "o-1".to_string(),
            role: None,
            description: None,
        })
        .await
        .unwrap_err();

    assert_eq!(err.status(), Some(409));
    assert_eq!(err.message(), "创建失败：用户名已存在");
}

#[tokio::test]
async fn test_error_envelope_inside_success_is_rejected() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/api/v1/dict/delete_spec"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"error": "规格被商品引用"})))
        .mount(&server)
        .await;

    let fx = fixture(&server.uri(), Duration::from_secs(5));
    let err = DictApi::new(fx.client.clone())
        .delete(DictKind::Spec, "s-1")
        .await
        .unwrap_err();

    assert_eq!(err.message(), "规格被商品引用");
}

#[tokio::test]
async fn test_empty_success_body_is_an_ack() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/api/v1/dict/delete_mealTime"))
        .and(body_json(json!({"ID": "m-1"})))
        .respond_with(ResponseTemplate::new(204))
        .mount(&server)
        .await;

    let fx = fixture(&server.uri(), Duration::from_secs(5));
    let ack = DictApi::new(fx.client.clone())
        .delete(DictKind::MealTime, "m-1")
        .await
        .unwrap();
    assert!(ack.is_null());
}

#[tokio::test]
async fn test_unauthorized_clears_session_and_redirects_to_login() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/api/v1/dict/list_unit"))
        .respond_with(ResponseTemplate::new(401).set_body_json(json!({"error": "未登录"})))
        .mount(&server)
        .await;

    let fx = fixture(&server.uri(), Duration::from_secs(5));
    fx.tokens.set_auth("stale", 3600).await.unwrap();

    let err = DictApi::new(fx.client.clone())
        .list(DictKind::Unit, &DictListQuery::default())
        .await
        .unwrap_err();

    assert!(err.is_unauthorized());
    assert_eq!(fx.storage.get("auth_token").await.unwrap(), None);
    assert_eq!(fx.storage.get("auth_exp_at").await.unwrap(), None);
    assert_eq!(
        fx.navigator.take_redirect().as_deref(),
        Some("/login?redirect=%2Fdict%2Funits%3Fpage%3D2")
    );
}

#[tokio::test]
async fn test_slow_backend_times_out() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/api/v1/dict/list_spec"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!({"total": 0, "items": []}))
                .set_delay(Duration::from_secs(2)),
        )
        .mount(&server)
        .await;

    let fx = fixture(&server.uri(), Duration::from_millis(100));
    let err = DictApi::new(fx.client.clone())
        .list(DictKind::Spec, &DictListQuery::default())
        .await
        .unwrap_err();

    assert!(matches!(err, ApiError::Timeout { timeout_ms: 100 }));
    assert_eq!(err.message(), "timeout of 100ms exceeded");
}

#[tokio::test]
async fn test_unreachable_backend_is_a_network_error() {
    let fx = fixture("http://127.0.0.1:9", Duration::from_secs(2));
    let err = DictApi::new(fx.client.clone())
        .list(DictKind::Unit, &DictListQuery::default())
        .await
        .unwrap_err();

    assert!(matches!(err, ApiError::Network(_)));
    assert_eq!(err.message(), "网络异常，请检查连接");
    assert_eq!(err.status(), None);
}
