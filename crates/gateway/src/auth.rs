// crates/gateway/src/auth.rs
//! Authentication endpoints

use crate::client::Client;
use crate::dto::{AuthRequest, AuthResponse};
use crate::error::GatewayResult;
use async_trait::async_trait;

/// Registration and login endpoints
#[async_trait]
pub trait AuthApi: Send + Sync {
    /// Creates an account; `None` for a success response with no body
    async fn register(&self, request: &AuthRequest) -> GatewayResult<Option<AuthResponse>>;

    /// Authenticates an existing account
    async fn login(&self, request: &AuthRequest) -> GatewayResult<Option<AuthResponse>>;
}

/// HTTP implementation of [`AuthApi`]
#[derive(Debug, Clone)]
pub struct HttpAuthApi {
    client: Client,
}

impl HttpAuthApi {
    pub fn new(client: Client) -> Self {
        Self { client }
    }
}

#[async_trait]
impl AuthApi for HttpAuthApi {
    async fn register(&self, request: &AuthRequest) -> GatewayResult<Option<AuthResponse>> {
        self.client
            .send(self.client.post("api/users/register").json(request))
            .await
    }

    async fn login(&self, request: &AuthRequest) -> GatewayResult<Option<AuthResponse>> {
        self.client
            .send(self.client.post("api/users/login").json(request))
            .await
    }
}
