pub mod use_auth;
pub mod use_usuarios;

pub use use_auth::{use_auth, AuthMode, RegisterData, UseAuthHandle};
pub use use_usuarios::{use_usuarios, Editor, UseUsuariosHandle};

/// Línea de estado bajo un formulario
#[derive(Debug, Clone, PartialEq)]
pub struct StatusMessage {
    pub text: String,
    pub is_error: bool,
}

impl StatusMessage {
    pub fn ok(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            is_error: false,
        }
    }

    pub fn error(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            is_error: true,
        }
    }

    pub fn css_class(&self) -> &'static str {
        if self.is_error {
            "status-message error"
        } else {
            "status-message success"
        }
    }
}
