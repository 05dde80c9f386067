use crate::config::FrontendConfig;
use crate::error::ApiError;
use crate::language;
use once_cell::unsync::OnceCell;
use reqwest::header::ACCEPT_LANGUAGE;
use reqwest::{Client, Method, RequestBuilder, Response, Url};
use serde::de::DeserializeOwned;
use shared::models::{
    AuthResponse, CreateUserRequest, Credentials, GenericMessage, Page, PasswordResetRequest,
    PasswordUpdate, User,
};
use std::borrow::Cow;

thread_local! {
    static SHARED_CLIENT: OnceCell<PorticoClient> = OnceCell::new();
}

/// REST endpoints consumed by the client, relative to the API base.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Endpoint<'a> {
    SignUp,
    Login,
    Logout,
    Activate(&'a str),
    PasswordReset,
    SetPassword(&'a str),
    Users,
    User(u64),
}

impl<'a> Endpoint<'a> {
    pub(crate) fn method(self) -> Method {
        match self {
            Self::SignUp | Self::Login | Self::Logout | Self::PasswordReset => Method::POST,
            Self::Activate(_) | Self::SetPassword(_) => Method::PATCH,
            Self::Users | Self::User(_) => Method::GET,
        }
    }

    /// Path segments below the API base. Tokens stay single segments.
    pub(crate) fn segments(self) -> Vec<Cow<'a, str>> {
        match self {
            Self::SignUp | Self::Users => vec!["users".into()],
            Self::Login => vec!["auth".into()],
            Self::Logout => vec!["logout".into()],
            Self::Activate(token) => vec!["users".into(), token.into(), "active".into()],
            Self::PasswordReset => vec!["users".into(), "password-reset".into()],
            Self::SetPassword(token) => vec!["users".into(), token.into(), "password".into()],
            Self::User(id) => vec!["users".into(), id.to_string().into()],
        }
    }

    fn token(self) -> Option<&'a str> {
        match self {
            Self::Activate(token) | Self::SetPassword(token) => Some(token),
            _ => None,
        }
    }
}

/// Lightweight API client for the Portico REST server.
#[derive(Clone, Debug)]
pub struct PorticoClient {
    base_url: String,
    client: Client,
}

impl PorticoClient {
    /// Create a new API client with the provided absolute base URL.
    pub fn new(base_url: &str) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            client: Client::new(),
        }
    }

    /// The client shared by every component, rooted at the configured API base.
    pub fn shared() -> Self {
        SHARED_CLIENT.with(|cell| {
            cell.get_or_init(|| {
                let origin = web_sys::window().and_then(|window| window.location().origin().ok());
                Self::new(&FrontendConfig::new().resolve_api_base(origin.as_deref()))
            })
            .clone()
        })
    }

    /// Resolve `endpoint` under the base URL.
    ///
    /// Segments are appended through [`Url::path_segments_mut`], which
    /// escapes `/`, `?` and `#` inside a token. Tokens that the URL parser
    /// would drop or collapse (empty, `.`, `..`) are refused.
    pub(crate) fn endpoint_url(&self, endpoint: Endpoint<'_>) -> Result<Url, ApiError> {
        if let Some(token) = endpoint.token()
            && matches!(token, "" | "." | "..")
        {
            return Err(ApiError::InvalidUrl(format!("unusable token {token:?}")));
        }
        let mut url =
            Url::parse(&self.base_url).map_err(|err| ApiError::InvalidUrl(err.to_string()))?;
        url.path_segments_mut()
            .map_err(|()| ApiError::InvalidUrl(format!("{} cannot be a base", self.base_url)))?
            .pop_if_empty()
            .extend(endpoint.segments());
        Ok(url)
    }

    /// Start a request; every call goes through here so each one carries the
    /// active locale in `Accept-Language`.
    pub(crate) fn request(&self, endpoint: Endpoint<'_>) -> Result<RequestBuilder, ApiError> {
        let url = self.endpoint_url(endpoint)?;
        Ok(self
            .client
            .request(endpoint.method(), url)
            .header(ACCEPT_LANGUAGE, language::active_locale()))
    }

    async fn check(response: Response) -> Result<Response, ApiError> {
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }
        let body = response.text().await.unwrap_or_default();
        let error = ApiError::from_response(status, &body);
        log::warn!("{} responded {status}: {error}", response_path(&body));
        Err(error)
    }

    async fn fetch<T: DeserializeOwned>(request: RequestBuilder) -> Result<T, ApiError> {
        let response = Self::check(request.send().await?).await?;
        let body = response.text().await?;
        Ok(serde_json::from_str(&body)?)
    }

    /// Register a new account.
    pub async fn sign_up(&self, payload: &CreateUserRequest) -> Result<GenericMessage, ApiError> {
        Self::fetch(self.request(Endpoint::SignUp)?.json(payload)).await
    }

    /// Authenticate with email/password credentials.
    pub async fn login(&self, payload: &Credentials) -> Result<AuthResponse, ApiError> {
        Self::fetch(self.request(Endpoint::Login)?.json(payload)).await
    }

    /// Terminate the current session on the server.
    pub async fn logout(&self) -> Result<(), ApiError> {
        Self::check(self.request(Endpoint::Logout)?.send().await?).await?;
        Ok(())
    }

    /// Activate the account identified by the emailed token.
    pub async fn activate(&self, token: &str) -> Result<GenericMessage, ApiError> {
        Self::fetch(self.request(Endpoint::Activate(token))?).await
    }

    /// Ask the server to email a password reset link.
    pub async fn request_password_reset(
        &self,
        payload: &PasswordResetRequest,
    ) -> Result<GenericMessage, ApiError> {
        Self::fetch(self.request(Endpoint::PasswordReset)?.json(payload)).await
    }

    /// Set a new password using a reset token.
    pub async fn set_password(
        &self,
        token: &str,
        payload: &PasswordUpdate,
    ) -> Result<GenericMessage, ApiError> {
        Self::fetch(self.request(Endpoint::SetPassword(token))?.json(payload)).await
    }

    /// Fetch one page of the user directory.
    pub async fn list_users(&self, page: u32, size: u32) -> Result<Page<User>, ApiError> {
        Self::fetch(
            self.request(Endpoint::Users)?
                .query(&[("page", page), ("size", size)]),
        )
        .await
    }

    /// Fetch a single user profile.
    pub async fn get_user(&self, id: u64) -> Result<User, ApiError> {
        Self::fetch(self.request(Endpoint::User(id))?).await
    }
}

fn response_path(body: &str) -> String {
    serde_json::from_str::<shared::models::ApiErrorBody>(body)
        .ok()
        .and_then(|parsed| parsed.path)
        .unwrap_or_else(|| "request".to_string())
}
