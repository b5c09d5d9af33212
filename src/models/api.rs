use serde::{Deserialize, Serialize};

/// Respuestas del backend con forma `{ success, message, ... }`
pub trait Envelope {
    fn success(&self) -> bool;
    fn message(&self) -> Option<&str>;
}

/// Respuesta mínima: solo `success` y `message`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ApiMessage {
    pub success: bool,
    #[serde(default)]
    pub message: Option<String>,
}

impl Envelope for ApiMessage {
    fn success(&self) -> bool {
        self.success
    }

    fn message(&self) -> Option<&str> {
        self.message.as_deref()
    }
}
