//! Command execution.
//!
//! Every resource command first passes the route guard for its admin page,
//! the way a page load would. A 401 from the backend clears the session and
//! is reported as a login prompt, except during login itself where it means
//! the credentials were rejected.

use foodapp_application::auth::current_claims;
use foodapp_application::ports::Navigator;
use foodapp_application::{
    AccountApi, ApiError, AuthApi, CategoryApi, DictApi, GoodsApi, InquiryApi, InquiryItemApi,
    MarketApi, MarketInquiryApi, Navigation, OrganApi, SupplierApi, SupplierSettlementApi,
};
use foodapp_domain::acl::{PasswordChange, PasswordUpdate};
use foodapp_domain::route::ROUTES;
use foodapp_domain::{HOME_PATH, JwtClaims, LOGIN_PATH, Location, deleted_label, role_label};
use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::{Value, json};
use tracing::info;

use crate::cli::{AccountAction, Command, CrudAction, OrganAction};
use crate::context::AppContext;
use crate::error::AppError;
use crate::resource::{CrudResource, Dictionary};

/// Runs `command` and prints its result as JSON on stdout.
pub async fn execute(command: Command, ctx: &AppContext) -> Result<(), AppError> {
    let on_login = matches!(command, Command::Login { .. });
    if on_login {
        ctx.navigator.visit(Location::new(LOGIN_PATH));
    } else if let Some(page) = command.page() {
        enter(ctx, page).await?;
    }

    match dispatch(command, ctx).await {
        Err(AppError::Api(e)) if on_login => {
            ctx.notifier.notify_login_error(&e);
            Err(AppError::Api(e))
        }
        Err(AppError::Api(e)) => Err(report(ctx, e)),
        other => other,
    }
}

async fn enter(ctx: &AppContext, page: &str) -> Result<(), AppError> {
    let to = Location::new(page);
    let from = ctx.navigator.current_location();
    match ctx.guard.before_each(&to, &from).await {
        Navigation::Proceed => {
            ctx.navigator.visit(to);
            Ok(())
        }
        Navigation::Redirect(target) => Err(AppError::LoginRequired(target)),
    }
}

fn report(ctx: &AppContext, error: ApiError) -> AppError {
    let redirect = error
        .is_unauthorized()
        .then(|| ctx.navigator.take_redirect())
        .flatten();
    if let Some(target) = redirect {
        return AppError::LoginRequired(target);
    }
    ctx.notifier.notify_error(&error);
    AppError::Api(error)
}

async fn dispatch(command: Command, ctx: &AppContext) -> Result<(), AppError> {
    let client = ctx.client.clone();
    match command {
        Command::Login { username, password } => {
            let session = AuthApi::new(client).login(&username, &password).await?;
            ctx.notifier.notify_success("登录成功");
            print_json(&json!({
                "username": username,
                "token_type": session.token_type,
                "expires_in": session.expires_in,
            }))
        }
        Command::Logout => {
            AuthApi::new(client).logout().await?;
            ctx.notifier.notify_success("已退出登录");
            Ok(())
        }
        Command::Whoami => whoami(ctx).await,
        Command::Routes => routes(),
        Command::Dict { kind, action } => {
            let dictionary = Dictionary {
                api: DictApi::new(client),
                kind,
            };
            crud(&dictionary, action, ctx).await
        }
        Command::Account(action) => account(AccountApi::new(client), action, ctx).await,
        Command::Organ(OrganAction::Crud(action)) => crud(&OrganApi::new(client), action, ctx).await,
        Command::Organ(OrganAction::HardDelete { id }) => {
            OrganApi::new(client).hard_remove(&id).await?;
            ctx.notifier.notify_success("已彻底删除");
            Ok(())
        }
        Command::Category(action) => crud(&CategoryApi::new(client), action, ctx).await,
        Command::Goods(action) => crud(&GoodsApi::new(client), action, ctx).await,
        Command::Supplier(action) => crud(&SupplierApi::new(client), action, ctx).await,
        Command::Settlement(action) => {
            crud(&SupplierSettlementApi::new(client), action, ctx).await
        }
        Command::Market(action) => crud(&MarketApi::new(client), action, ctx).await,
        Command::Inquiry(action) => crud(&InquiryApi::new(client), action, ctx).await,
        Command::InquiryItem(action) => crud(&InquiryItemApi::new(client), action, ctx).await,
        Command::MarketInquiry(action) => {
            crud(&MarketInquiryApi::new(client), action, ctx).await
        }
    }
}

async fn crud<R: CrudResource>(
    resource: &R,
    action: CrudAction,
    ctx: &AppContext,
) -> Result<(), AppError> {
    match action {
        CrudAction::List { query } => {
            let query: R::Query = match query {
                Some(raw) => read_json(&raw)?,
                None => R::Query::default(),
            };
            print_json(&resource.list(&query).await?)
        }
        CrudAction::Get { id } => print_json(&resource.get(&id).await?),
        CrudAction::Create(arg) => {
            let created = resource.create(&read_json(&arg.data)?).await?;
            ctx.notifier.notify_success("创建成功");
            print_json(&created)
        }
        CrudAction::Update(arg) => {
            resource.update(&read_json(&arg.data)?).await?;
            ctx.notifier.notify_success("保存成功");
            Ok(())
        }
        CrudAction::Delete { id } => {
            resource.delete(&id).await?;
            ctx.notifier.notify_success("删除成功");
            Ok(())
        }
    }
}

async fn account(api: AccountApi, action: AccountAction, ctx: &AppContext) -> Result<(), AppError> {
    match action {
        AccountAction::Crud(action) => crud(&api, action, ctx).await,
        AccountAction::GetByUsername { username } => {
            print_json(&api.get_by_username(&username).await?)
        }
        AccountAction::SetPassword(arg) => {
            let update: PasswordUpdate = read_json(&arg.data)?;
            api.update_password(&update).await?;
            ctx.notifier.notify_success("密码已重置");
            Ok(())
        }
        AccountAction::ChangePassword(arg) => {
            let change: PasswordChange = read_json(&arg.data)?;
            api.change_password(&change).await?;
            ctx.notifier.notify_success("密码已修改");
            Ok(())
        }
        AccountAction::HardDelete { id } => {
            api.hard_remove(&id).await?;
            ctx.notifier.notify_success("已彻底删除");
            Ok(())
        }
    }
}

async fn whoami(ctx: &AppContext) -> Result<(), AppError> {
    let Some(claims) = current_claims(&ctx.tokens).await else {
        let login = Location::login_with_redirect(HOME_PATH).full_path();
        return Err(AppError::LoginRequired(login));
    };
    let expires_at = ctx.tokens.expires_at_millis().await;
    print_json(&session_view(&claims, expires_at))
}

fn session_view(claims: &JwtClaims, expires_at: Option<i64>) -> Value {
    json!({
        "id": &claims.sub,
        "username": &claims.usr,
        "role": claims.role,
        "role_label": role_label(claims.role),
        "organ_id": &claims.organ_id,
        "deleted": claims.is_deleted(),
        "status": deleted_label(i32::from(claims.is_deleted())),
        "expires_at": expires_at,
    })
}

fn routes() -> Result<(), AppError> {
    let pages: Vec<_> = ROUTES
        .iter()
        .map(|route| {
            json!({
                "path": route.path,
                "redirect": route.redirect,
                "section": route.meta.map(|meta| meta.section),
                "title": route.meta.map(|meta| meta.title),
                "requires_auth": route.meta.is_some_and(|meta| meta.requires_auth),
            })
        })
        .collect();
    print_json(&pages)
}

/// Parses `raw` as JSON, or the file it names when it starts with `@`.
fn read_json<T: DeserializeOwned>(raw: &str) -> Result<T, AppError> {
    let text = match raw.strip_prefix('@') {
        Some(path) => std::fs::read_to_string(path)
            .map_err(|e| AppError::Input(format!("cannot read {path}: {e}")))?,
        None => raw.to_string(),
    };
    serde_json::from_str(&text).map_err(|e| AppError::Input(e.to_string()))
}

fn print_json<T: Serialize + ?Sized>(value: &T) -> Result<(), AppError> {
    println!("{}", serde_json::to_string_pretty(value)?);
    info!("Command completed");
    Ok(())
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::panic)]
mod tests {
    use std::sync::Arc;

    use super::*;
    use crate::console::ConsoleSink;
    use foodapp_application::ports::NotificationSink;
    use foodapp_domain::catalog::{DictCreate, DictKind};
    use foodapp_infrastructure::{ClientConfig, MemoryStorage};
    use pretty_assertions::assert_eq;
    use wiremock::matchers::{method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    #[derive(Default)]
    struct Shown(parking_lot::Mutex<Vec<String>>);

    impl NotificationSink for Shown {
        fn error(&self, message: &str) {
            self.0.lock().push(message.to_string());
        }

        fn success(&self, _message: &str) {}
    }

    fn context_at(base_url: &str, sink: Arc<dyn NotificationSink>) -> AppContext {
        let config = ClientConfig {
            base_url: base_url.to_string(),
            timeout_ms: 2_000,
            ..ClientConfig::default()
        };
        AppContext::new(&config, Arc::new(MemoryStorage::new()), sink).unwrap()
    }

    fn context() -> AppContext {
        context_at("http://127.0.0.1:9", Arc::new(ConsoleSink))
    }

    fn login(password: &str) -> Command {
        Command::Login {
            username: "admin".to_string(),
            password: password.to_string(),
        }
    }

    fn list(kind: DictKind) -> Command {
        Command::Dict {
            kind,
            action: CrudAction::List { query: None },
        }
    }

    #[tokio::test]
    async fn test_anonymous_command_is_sent_to_login() {
        let ctx = context();
        let err = execute(list(DictKind::Spec), &ctx).await.unwrap_err();

        match err {
            AppError::LoginRequired(target) => {
                assert_eq!(target, "/login?redirect=%2Fdict%2Fspecs");
            }
            other => panic!("unexpected error: {other:?}"),
        }
        assert_eq!(ctx.navigator.current_location().path(), "/");
    }

    #[tokio::test]
    async fn test_signed_in_command_reaches_transport() {
        let ctx = context();
        ctx.tokens.set_auth("tok", 3600).await.unwrap();

        let err = execute(list(DictKind::Unit), &ctx).await.unwrap_err();

        assert!(matches!(err, AppError::Api(ApiError::Network(_))));
        assert_eq!(ctx.navigator.current_location().path(), "/dict/units");
    }

    #[tokio::test]
    async fn test_rejected_login_shows_backend_message() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/api/v1/auth/login"))
            .respond_with(ResponseTemplate::new(401).set_body_json(serde_json::json!({
                "error": "登录失败",
                "details": "用户名或密码错误",
            })))
            .mount(&server)
            .await;
        let shown = Arc::new(Shown::default());
        let ctx = context_at(&server.uri(), shown.clone());

        let err = execute(login("wrong"), &ctx).await.unwrap_err();

        match err {
            AppError::Api(ApiError::Unauthorized { message }) => {
                assert_eq!(message, "登录失败：用户名或密码错误");
            }
            other => panic!("unexpected error: {other:?}"),
        }
        assert_eq!(ctx.navigator.take_redirect(), None);
        assert_eq!(ctx.navigator.current_location().path(), "/login");
        assert_eq!(*shown.0.lock(), vec!["登录失败：用户名或密码错误"]);
        assert!(!ctx.tokens.is_authenticated().await);
    }

    #[tokio::test]
    async fn test_expired_session_still_redirects_to_login() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/api/v1/dict/list_unit"))
            .respond_with(
                ResponseTemplate::new(401).set_body_json(serde_json::json!({"error": "非法token"})),
            )
            .mount(&server)
            .await;
        let shown = Arc::new(Shown::default());
        let ctx = context_at(&server.uri(), shown.clone());
        ctx.tokens.set_auth("tok", 3600).await.unwrap();

        let err = execute(list(DictKind::Unit), &ctx).await.unwrap_err();

        assert!(matches!(err, AppError::LoginRequired(ref t) if t.starts_with("/login?redirect=")));
        assert!(shown.0.lock().is_empty());
    }

    #[test]
    fn test_session_view_labels_role_and_status() {
        let claims = JwtClaims {
            sub: "u-1".to_string(),
            usr: "admin".to_string(),
            role: 1,
            del: None,
            organ_id: Some("o-1".to_string()),
            iat: 1_704_067_200,
            exp: 1_704_070_800,
            iss: "foodapp".to_string(),
        };

        let view = session_view(&claims, Some(1_704_070_740_000));

        assert_eq!(view["username"], "admin");
        assert_eq!(view["role_label"], role_label(1));
        assert_eq!(view["deleted"], false);
        assert_eq!(view["status"], "正常");

        let deleted = JwtClaims {
            del: Some(true),
            ..claims
        };
        assert_eq!(session_view(&deleted, None)["status"], "已删除");
    }

    #[tokio::test]
    async fn test_whoami_without_session() {
        let ctx = context();
        let err = execute(Command::Whoami, &ctx).await.unwrap_err();
        assert!(matches!(err, AppError::LoginRequired(ref t) if t == "/login?redirect=%2F"));
    }

    #[tokio::test]
    async fn test_logout_without_session_succeeds() {
        let ctx = context();
        execute(Command::Logout, &ctx).await.unwrap();
        assert!(!ctx.tokens.is_authenticated().await);
    }

    #[test]
    fn test_read_json_inline_and_file() {
        let inline: DictCreate = read_json(r#"{"Name":"斤","Sort":1}"#).unwrap();
        assert_eq!(inline.name, "斤");
        assert_eq!(inline.sort, Some(1));

        let dir = tempfile::TempDir::new().unwrap();
        let path = dir.path().join("unit.json");
        std::fs::write(&path, r#"{"Name":"箱"}"#).unwrap();
        let from_file: DictCreate = read_json(&format!("@{}", path.display())).unwrap();
        assert_eq!(from_file.name, "箱");
    }

    #[test]
    fn test_read_json_errors_are_input_errors() {
        let err = read_json::<DictCreate>("{not json").unwrap_err();
        assert!(matches!(err, AppError::Input(_)));

        let err = read_json::<DictCreate>("@/nonexistent/unit.json").unwrap_err();
        assert!(err.to_string().contains("cannot read"));
    }
}
