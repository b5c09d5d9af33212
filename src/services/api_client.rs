// ============================================================================
// API CLIENT - SOLO COMUNICACIÓN HTTP (Stateless)
// ============================================================================
// NO tiene lógica de negocio: envía JSON y devuelve el cuerpo interpretado.
// El backend responde `{ success, message, ... }` también con 4xx, así que
// el cuerpo se lee siempre, sin mirar primero el status.
// ============================================================================

use gloo_net::http::{Request, RequestBuilder, Response};
use serde::{de::DeserializeOwned, Serialize};

use crate::config::CONFIG;
use crate::error::ApiError;
use crate::models::Envelope;

/// Cliente HTTP con una URL base
#[derive(Debug, Clone, PartialEq)]
pub struct ApiClient {
    base_url: String,
}

impl Default for ApiClient {
    fn default() -> Self {
        Self::new(CONFIG.backend_url())
    }
}

impl ApiClient {
    pub fn new(base_url: &str) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    /// Une la base con una ruta relativa (`/auth/login`, `listar`, ...)
    pub fn url(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }

    /// Cliente para un sub-recurso (`/usuario`)
    pub fn scoped(&self, segment: &str) -> Self {
        Self::new(&self.url(segment))
    }

    pub async fn get<T: DeserializeOwned>(&self, path: &str) -> Result<T, ApiError> {
        let url = self.url(path);
        let response = Request::get(&url)
            .send()
            .await
            .map_err(|e| ApiError::Connection(format!("Network error: {}", e)))?;
        read_body(response).await
    }

    pub async fn post<B: Serialize, T: DeserializeOwned>(&self, path: &str, body: &B) -> Result<T, ApiError> {
        send_json(Request::post(&self.url(path)), body).await
    }

    pub async fn put<B: Serialize, T: DeserializeOwned>(&self, path: &str, body: &B) -> Result<T, ApiError> {
        send_json(Request::put(&self.url(path)), body).await
    }

    pub async fn delete<T: DeserializeOwned>(&self, path: &str) -> Result<T, ApiError> {
        let url = self.url(path);
        let response = Request::delete(&url)
            .send()
            .await
            .map_err(|e| ApiError::Connection(format!("Network error: {}", e)))?;
        read_body(response).await
    }
}

async fn send_json<B: Serialize, T: DeserializeOwned>(builder: RequestBuilder, body: &B) -> Result<T, ApiError> {
    let response = builder
        .json(body)
        .map_err(|e| ApiError::Connection(format!("Serialization error: {}", e)))?
        .send()
        .await
        .map_err(|e| ApiError::Connection(format!("Network error: {}", e)))?;
    read_body(response).await
}

async fn read_body<T: DeserializeOwned>(response: Response) -> Result<T, ApiError> {
    let status = response.status();
    let text = response
        .text()
        .await
        .map_err(|e| ApiError::Connection(format!("Read error: {}", e)))?;
    parse_body(status, &text)
}

/// Interpreta el cuerpo; un cuerpo no-JSON cuenta como error de conexión
pub fn parse_body<T: DeserializeOwned>(status: u16, text: &str) -> Result<T, ApiError> {
    serde_json::from_str(text).map_err(|e| {
        if (200..300).contains(&status) {
            ApiError::Connection(format!("Parse error: {}", e))
        } else {
            let snippet: String = text.chars().take(120).collect();
            ApiError::Connection(format!("HTTP {}: {}", status, snippet))
        }
    })
}

/// `{ success: false, message }` pasa a `ApiError::Server`
pub fn into_result<E: Envelope>(envelope: E, fallback: &str) -> Result<E, ApiError> {
    if envelope.success() {
        Ok(envelope)
    } else {
        let message = envelope
            .message()
            .filter(|m| !m.trim().is_empty())
            .unwrap_or(fallback);
        Err(ApiError::Server(message.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::ApiMessage;

    #[test]
    fn urls_are_joined_without_double_slashes() {
        let client = ApiClient::new("http://localhost:5000/");
        assert_eq!(client.url("/auth/login"), "http://localhost:5000/auth/login");
        let usuarios = client.scoped("usuario");
        assert_eq!(usuarios, ApiClient::new("http://localhost:5000/usuario"));
        assert_eq!(usuarios.url("listar"), "http://localhost:5000/usuario/listar");
        assert_eq!(usuarios.url("7/eliminar"), "http://localhost:5000/usuario/7/eliminar");
    }

    #[test]
    fn error_status_with_json_body_is_still_parsed() {
        let body = r#"{"success": false, "message": "El correo ya existe"}"#;
        let parsed: ApiMessage = parse_body(400, body).unwrap();
        assert_eq!(
            into_result(parsed, "x"),
            Err(ApiError::Server("El correo ya existe".to_string()))
        );
    }

    #[test]
    fn non_json_bodies_are_connection_errors() {
        let html = "<html><body>502 Bad Gateway</body></html>";
        match parse_body::<ApiMessage>(502, html) {
            Err(ApiError::Connection(detail)) => assert!(detail.starts_with("HTTP 502")),
            other => panic!("se esperaba error de conexión: {:?}", other),
        }
        assert!(matches!(parse_body::<ApiMessage>(200, "ok"), Err(ApiError::Connection(_))));
    }

    #[test]
    fn failure_without_message_uses_fallback() {
        let blank = ApiMessage { success: false, message: Some("  ".to_string()) };
        assert_eq!(into_result(blank, "Error del servidor"), Err(ApiError::Server("Error del servidor".to_string())));
        let ok = ApiMessage { success: true, message: None };
        assert!(into_result(ok, "Error del servidor").is_ok());
    }
}
