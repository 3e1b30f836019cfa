//! Authentication calls against the mediaconvert API

mod types;

use async_trait::async_trait;
use log::info;

use crate::error::{Error, Result};
use crate::fetch::HttpClient;
use crate::forms::{Form, LoginForm, SignupForm, SubmitHandler};
use crate::routes::Route;
use crate::session::SessionContext;

pub use types::*;

/// Client for login, signup and the current user
#[derive(Debug, Clone)]
pub struct Auth {
    /// JSON client with the bearer interceptor
    http: HttpClient,

    /// Where a successful login stores its token
    session: SessionContext,
}

impl Auth {
    /// Create a new Auth client
    pub fn new(http: HttpClient, session: SessionContext) -> Self {
        Self { http, session }
    }

    /// The session tokens are written to
    pub fn session(&self) -> &SessionContext {
        &self.session
    }

    /// Validate `form` and log in. An issued token is stored in the session.
    pub async fn login(&self, form: &LoginForm) -> Result<AuthResponse> {
        form.validate().map_err(Error::Validation)?;
        self.send_login(form).await
    }

    /// Validate `form` and create an account. An issued token is stored in
    /// the session.
    pub async fn signup(&self, form: &SignupForm) -> Result<AuthResponse> {
        form.validate().map_err(Error::Validation)?;
        self.send_signup(form).await
    }

    /// Fetch the user the stored token belongs to
    pub async fn current_user(&self) -> Result<User> {
        self.http.get("/auth/me")?.execute::<User>().await
    }

    /// Forget the token; the caller should navigate to the returned route
    pub fn logout(&self) -> Result<Route> {
        self.session.clear()?;
        info!("Logged out");
        Ok(Route::Login)
    }

    async fn send_login(&self, form: &LoginForm) -> Result<AuthResponse> {
        let body = LoginRequest {
            email: &form.email,
            password: &form.password,
        };

        let response = self
            .http
            .post("/auth/login")?
            .json(&body)?
            .execute::<AuthResponse>()
            .await?;

        self.store_token(&response)?;
        info!("Logged in as {}", form.email);
        Ok(response)
    }

    async fn send_signup(&self, form: &SignupForm) -> Result<AuthResponse> {
        let body = SignupRequest {
            name: &form.name,
            email: &form.email,
            password: &form.password,
        };

        let response = self
            .http
            .post("/auth/signup")?
            .json(&body)?
            .execute::<AuthResponse>()
            .await?;

        self.store_token(&response)?;
        info!("Signed up {}", form.email);
        Ok(response)
    }

    fn store_token(&self, response: &AuthResponse) -> Result<()> {
        match response.token.as_deref() {
            Some(token) if !token.is_empty() => self.session.set_token(token),
            _ => Ok(()),
        }
    }
}

#[async_trait]
impl SubmitHandler<LoginForm> for Auth {
    type Output = AuthResponse;

    async fn submit(&self, form: &LoginForm) -> Result<AuthResponse> {
        self.send_login(form).await
    }
}

#[async_trait]
impl SubmitHandler<SignupForm> for Auth {
    type Output = AuthResponse;

    async fn submit(&self, form: &SignupForm) -> Result<AuthResponse> {
        self.send_signup(form).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ClientOptions;
    use crate::forms::submit;
    use serde_json::json;
    use wiremock::matchers::{body_json, header, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn auth_for(server: &MockServer) -> Auth {
        let options = ClientOptions::default().with_base_url(&server.uri());
        let session = SessionContext::in_memory();
        let http = HttpClient::json(&options, session.clone()).unwrap();
        Auth::new(http, session)
    }

    #[tokio::test]
    async fn login_stores_token() {
        let mock_server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/auth/login"))
            .and(body_json(json!({
                "email": "user@example.com",
                "password": "password123"
            })))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "token": "issued-token",
                "user": { "id": "1", "email": "user@example.com", "name": "User" }
            })))
            .expect(1)
            .mount(&mock_server)
            .await;

        let auth = auth_for(&mock_server);
        let response = auth
            .login(&LoginForm::new("user@example.com", "password123"))
            .await
            .unwrap();

        assert_eq!(response.user.unwrap().name, "User");
        assert_eq!(auth.session().token().unwrap(), Some("issued-token".to_string()));
    }

    #[tokio::test]
    async fn invalid_login_sends_nothing() {
        let mock_server = MockServer::start().await;

        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(200))
            .expect(0)
            .mount(&mock_server)
            .await;

        let auth = auth_for(&mock_server);
        let err = auth.login(&LoginForm::new("bad", "short")).await.unwrap_err();
        assert!(err.is_validation());
    }

    #[tokio::test]
    async fn signup_omits_repeat_password() {
        let mock_server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/auth/signup"))
            .and(body_json(json!({
                "name": "Ann",
                "email": "ann@example.com",
                "password": "longenough1"
            })))
            .respond_with(ResponseTemplate::new(201).set_body_json(json!({})))
            .expect(1)
            .mount(&mock_server)
            .await;

        let auth = auth_for(&mock_server);
        let form = SignupForm::new("Ann", "ann@example.com", "longenough1", "longenough1");
        let response = submit(&form, &auth).await.unwrap();

        assert_eq!(response, AuthResponse::default());
        assert_eq!(auth.session().token().unwrap(), None);
    }

    #[tokio::test]
    async fn current_user_uses_stored_token() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/auth/me"))
            .and(header("Authorization", "Bearer abc"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "id": "7", "email": "me@example.com", "name": "Me"
            })))
            .mount(&mock_server)
            .await;

        let auth = auth_for(&mock_server);
        auth.session().set_token("abc").unwrap();

        let user = auth.current_user().await.unwrap();
        assert_eq!(user.id, "7");
    }

    #[tokio::test]
    async fn rejected_login_surfaces_status() {
        let mock_server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/auth/login"))
            .respond_with(ResponseTemplate::new(401).set_body_string("bad credentials"))
            .mount(&mock_server)
            .await;

        let auth = auth_for(&mock_server);
        let err = auth
            .login(&LoginForm::new("user@example.com", "password123"))
            .await
            .unwrap_err();

        match err {
            Error::Api { status, message } => {
                assert_eq!(status, 401);
                assert_eq!(message, "bad credentials");
            }
            other => panic!("unexpected error: {other}"),
        }
        assert_eq!(auth.session().token().unwrap(), None);
    }

    #[test]
    fn logout_clears_token() {
        let session = SessionContext::in_memory();
        session.set_token("abc").unwrap();
        let http = HttpClient::json(&ClientOptions::default(), session.clone()).unwrap();
        let auth = Auth::new(http, session);

        assert_eq!(auth.logout().unwrap(), Route::Login);
        assert_eq!(auth.session().token().unwrap(), None);
    }
}
