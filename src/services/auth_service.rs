use crate::error::ApiError;
use crate::models::{ApiMessage, AuthResponse, LoginRequest, RegisterRequest};

use super::{ApiClient, AuthGateway};

/// Adaptador HTTP de `/auth`
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AuthService {
    client: ApiClient,
}

impl AuthService {
    pub fn new(client: ApiClient) -> Self {
        Self { client }
    }
}

impl AuthGateway for AuthService {
    async fn authenticate(&self, request: &LoginRequest) -> Result<AuthResponse, ApiError> {
        log::info!("🔐 Autenticando: {}", request.email);
        let response: AuthResponse = self.client.post("/auth/login", request).await?;
        if response.success {
            log::info!("✅ Login aceptado para {}", request.email);
        } else {
            log::warn!("⚠️ Login rechazado: {:?}", response.message);
        }
        Ok(response)
    }

    async fn register(&self, request: &RegisterRequest) -> Result<ApiMessage, ApiError> {
        log::info!("📝 Registrando {} como {}", request.email, request.rol);
        self.client.post("/auth/register", request).await
    }

    async fn register_conserje(&self, request: &RegisterRequest) -> Result<ApiMessage, ApiError> {
        log::info!("📝 Registrando conserje {}", request.email);
        self.client.post("/auth/register/conserje", request).await
    }
}
