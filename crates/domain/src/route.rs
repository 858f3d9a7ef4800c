//! Navigation targets and the admin route table.

use std::fmt;

use crate::error::{DomainError, DomainResult};

/// Path of the login page.
pub const LOGIN_PATH: &str = "/login";
/// Landing path.
pub const HOME_PATH: &str = "/";
/// Query key holding the destination to return to after login.
pub const REDIRECT_QUERY_KEY: &str = "redirect";

/// A navigation target: path, query pairs and an optional fragment.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Location {
    path: String,
    query: Vec<(String, String)>,
    hash: String,
}

impl Location {
    /// Creates a location for a bare path.
    #[must_use]
    pub fn new(path: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            query: Vec::new(),
            hash: String::new(),
        }
    }

    /// The login page, remembering `target` as the place to return to.
    #[must_use]
    pub fn login_with_redirect(target: &str) -> Self {
        Self::new(LOGIN_PATH).with_query(REDIRECT_QUERY_KEY, target)
    }

    /// Parses `"/path?key=value#hash"`. Query values are percent-decoded.
    ///
    /// # Errors
    ///
    /// Returns [`DomainError::InvalidLocation`] if the path does not start
    /// with `/`.
    pub fn parse(raw: &str) -> DomainResult<Self> {
        let (rest, hash) = match raw.split_once('#') {
            Some((rest, hash)) => (rest, format!("#{hash}")),
            None => (raw, String::new()),
        };
        let (path, query) = rest.split_once('?').unwrap_or((rest, ""));

        if !path.starts_with('/') {
            return Err(DomainError::InvalidLocation(raw.to_string()));
        }

        let query = query
            .split('&')
            .filter(|pair| !pair.is_empty())
            .map(|pair| {
                let (key, value) = pair.split_once('=').unwrap_or((pair, ""));
                (decode_component(key), decode_component(value))
            })
            .collect();

        Ok(Self {
            path: path.to_string(),
            query,
            hash,
        })
    }

    /// Appends a query pair.
    #[must_use]
    pub fn with_query(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.query.push((key.into(), value.into()));
        self
    }

    /// The path component.
    #[must_use]
    pub fn path(&self) -> &str {
        &self.path
    }

    /// First value for `key`, if present.
    #[must_use]
    pub fn query(&self, key: &str) -> Option<&str> {
        self.query
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    /// Returns true if this is exactly the login page.
    #[must_use]
    pub fn is_login(&self) -> bool {
        self.path == LOGIN_PATH
    }

    /// Path, encoded query and fragment.
    #[must_use]
    pub fn full_path(&self) -> String {
        let mut out = self.path.clone();
        for (i, (key, value)) in self.query.iter().enumerate() {
            out.push(if i == 0 { '?' } else { '&' });
            out.push_str(&urlencoding::encode(key));
            out.push('=');
            out.push_str(&urlencoding::encode(value));
        }
        out.push_str(&self.hash);
        out
    }
}

impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.full_path())
    }
}

fn decode_component(raw: &str) -> String {
    let spaced = raw.replace('+', " ");
    urlencoding::decode(&spaced).map_or_else(|_| spaced.clone(), std::borrow::Cow::into_owned)
}

/// Display metadata of an authenticated page.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RouteMeta {
    /// Navigation requires a token.
    pub requires_auth: bool,
    /// Menu section.
    pub section: &'static str,
    /// Page title.
    pub title: &'static str,
}

/// One entry of the route table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Route {
    /// Exact path.
    pub path: &'static str,
    /// Static redirect target, if this path only forwards.
    pub redirect: Option<&'static str>,
    /// Page metadata; `None` for the login page and redirects.
    pub meta: Option<RouteMeta>,
}

const fn page(path: &'static str, section: &'static str, title: &'static str) -> Route {
    Route {
        path,
        redirect: None,
        meta: Some(RouteMeta {
            requires_auth: true,
            section,
            title,
        }),
    }
}

/// Every page of the admin front-end.
pub const ROUTES: &[Route] = &[
    Route {
        path: LOGIN_PATH,
        redirect: None,
        meta: None,
    },
    Route {
        path: HOME_PATH,
        redirect: Some("/dict/units"),
        meta: None,
    },
    page("/dict/units", "字典数据管理", "商品单位"),
    page("/dict/specs", "字典数据管理", "商品规格"),
    page("/dict/mealtimes", "字典数据管理", "菜单餐次"),
    page("/acl/accounts", "权限管理", "账户管理"),
    page("/acl/organizations", "权限管理", "中队管理"),
    page("/catalog/categories", "商品管理", "商品品类"),
    page("/catalog/goods", "商品管理", "商品信息"),
    page("/suppliers", "供应商管理", "供应商"),
    page("/markets", "询价管理", "市场"),
    page("/price/inquiries", "询价管理", "询价单"),
    page("/price/settlements", "询价管理", "供应商结算"),
];

/// Looks up the route registered for `path`.
#[must_use]
pub fn find_route(path: &str) -> Option<&'static Route> {
    ROUTES.iter().find(|route| route.path == path)
}

/// Follows a static redirect, if `path` has one.
#[must_use]
pub fn resolve(path: &str) -> &str {
    find_route(path)
        .and_then(|route| route.redirect)
        .unwrap_or(path)
}
