//! HTTP pipeline for the business-management backend.
//!
//! Every outbound request goes through `get`/`post` here. The current
//! bearer token is read from the session immediately before
//! transmission - never cached on a request - and any 401 response
//! forces a sign-out before the original error is re-signalled to the
//! caller. Timeouts are reported as their own error, distinct from an
//! authorization rejection.

use std::time::Duration;

use reqwest::{Client, RequestBuilder};
use serde::{de::DeserializeOwned, Serialize};
use tracing::{debug, warn};

use crate::auth::SessionHandle;
use crate::config::Config;
use crate::models::{
    AiRequest, AiResponse, DashboardOverview, EmailRequest, EmailResponse, InsightRequest,
    InsightResponse, LoginRequest, LoginResponse, MarketingRequest, MarketingResponse, NewOrder,
    Order, Product, Profile, RegisterRequest, Snapshot,
};

use super::ApiError;

/// Role assigned to self-registered accounts.
const DEFAULT_ROLE: &str = "OWNER";

/// API client for the backend.
/// Clone is cheap - reqwest::Client uses Arc internally for connection
/// pooling, and the session handle is a shared reference.
#[derive(Debug, Clone)]
pub struct ApiClient {
    client: Client,
    base_url: String,
    session: SessionHandle,
}

impl ApiClient {
    /// Create a new API client bound to a session.
    pub fn new(config: &Config, session: SessionHandle) -> Result<Self, ApiError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.request_timeout_secs))
            .build()
            .map_err(ApiError::Network)?;

        Ok(Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            session,
        })
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// Attach the bearer credential, read from the session at call
    /// time. A missing token degrades to an unauthenticated request.
    fn apply_auth(&self, builder: RequestBuilder) -> RequestBuilder {
        match self.session.bearer_token() {
            Some(token) => builder.bearer_auth(token),
            None => builder,
        }
    }

    /// Check if a response is successful, returning an error with the
    /// body's message if not. A 401 additionally drops the session; the
    /// error itself passes through to the caller unchanged.
    async fn check_response(
        &self,
        response: reqwest::Response,
    ) -> Result<reqwest::Response, ApiError> {
        if response.status().is_success() {
            return Ok(response);
        }

        let status = response.status();
        let body = response.text().await.unwrap_or_default();
        let error = ApiError::from_status(status, &body);

        if error.is_unauthorized() {
            warn!(status = status.as_u16(), "credential rejected, dropping session");
            self.session.force_sign_out().await;
        }

        Err(error)
    }

    /// GET `path` and decode the JSON response.
    pub async fn get<T: DeserializeOwned>(&self, path: &str) -> Result<T, ApiError> {
        let url = self.url(path);
        debug!(url = %url, "GET");

        let response = self
            .apply_auth(self.client.get(&url))
            .send()
            .await
            .map_err(ApiError::from_reqwest)?;
        let response = self.check_response(response).await?;

        response
            .json()
            .await
            .map_err(|e| ApiError::InvalidResponse(e.to_string()))
    }

    /// POST a JSON `body` to `path` and decode the JSON response.
    pub async fn post<T: DeserializeOwned, B: Serialize + ?Sized>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T, ApiError> {
        let url = self.url(path);
        debug!(url = %url, "POST");

        let response = self
            .apply_auth(self.client.post(&url))
            .json(body)
            .send()
            .await
            .map_err(ApiError::from_reqwest)?;
        let response = self.check_response(response).await?;

        response
            .json()
            .await
            .map_err(|e| ApiError::InvalidResponse(e.to_string()))
    }

    /// POST a JSON `body` to `path`, discarding any response payload.
    async fn post_no_content<B: Serialize + ?Sized>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<(), ApiError> {
        let url = self.url(path);
        debug!(url = %url, "POST");

        let response = self
            .apply_auth(self.client.post(&url))
            .json(body)
            .send()
            .await
            .map_err(ApiError::from_reqwest)?;
        self.check_response(response).await?;
        Ok(())
    }

    // ========================================================================
    // Auth endpoints
    // ========================================================================

    pub async fn login(&self, email: &str, password: &str) -> Result<LoginResponse, ApiError> {
        let request = LoginRequest {
            email: email.to_string(),
            password: password.to_string(),
        };
        self.post("/auth/login", &request).await
    }

    pub async fn register(
        &self,
        name: &str,
        email: &str,
        password: &str,
    ) -> Result<(), ApiError> {
        let request = RegisterRequest {
            name: name.to_string(),
            email: email.to_string(),
            password: password.to_string(),
            role: DEFAULT_ROLE.to_string(),
        };
        self.post_no_content("/auth/register", &request).await
    }

    pub async fn profile(&self) -> Result<Profile, ApiError> {
        self.get("/api/profile").await
    }

    // ========================================================================
    // Business endpoints
    // ========================================================================

    pub async fn dashboard_overview(&self) -> Result<DashboardOverview, ApiError> {
        self.get("/api/v1/dashboard/overview").await
    }

    pub async fn products(&self) -> Result<Vec<Product>, ApiError> {
        self.get("/api/v1/item").await
    }

    pub async fn orders(&self) -> Result<Vec<Order>, ApiError> {
        self.get("/api/v1/order").await
    }

    pub async fn create_order(&self, order: &NewOrder) -> Result<Order, ApiError> {
        self.post("/api/v1/order", order).await
    }

    /// Fetch everything the home screens show in one concurrent pass,
    /// for pull-to-refresh.
    pub async fn refresh_all(&self) -> Result<Snapshot, ApiError> {
        let (overview, products, orders) = futures::future::try_join3(
            self.dashboard_overview(),
            self.products(),
            self.orders(),
        )
        .await?;

        Ok(Snapshot {
            overview,
            products,
            orders,
        })
    }

    // ========================================================================
    // AI assistant endpoints
    // ========================================================================

    pub async fn generate_insights(&self, question: &str) -> Result<InsightResponse, ApiError> {
        let request = InsightRequest {
            question: question.to_string(),
        };
        self.post("/api/v1/ai/insights", &request).await
    }

    pub async fn generate_email(
        &self,
        kind: &str,
        context: &str,
    ) -> Result<EmailResponse, ApiError> {
        let request = EmailRequest {
            kind: kind.to_string(),
            context: context.to_string(),
        };
        self.post("/api/v1/ai/email", &request).await
    }

    pub async fn generate_marketing_post(
        &self,
        product_info: &str,
        promotion: &str,
    ) -> Result<MarketingResponse, ApiError> {
        let request = MarketingRequest {
            product_info: product_info.to_string(),
            promotion: promotion.to_string(),
        };
        self.post("/api/v1/ai/marketing", &request).await
    }

    pub async fn ai_request(&self, kind: &str, prompt: &str) -> Result<AiResponse, ApiError> {
        let request = AiRequest {
            kind: kind.to_string(),
            prompt: prompt.to_string(),
            context: serde_json::json!({}),
        };
        self.post("/api/v1/ai/request", &request).await
    }
}
