// ============================================================================
// ERRORES - conexión vs. mensaje del servidor vs. validación local
// ============================================================================

use thiserror::Error;

use crate::utils::i18n::{translate, Language};

/// Fallo de validación de un formulario antes de tocar la red
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Faltan credenciales")]
    MissingCredentials,
    #[error("Email inválido")]
    InvalidEmail,
    #[error("Contraseña muy corta")]
    PasswordTooShort,
    #[error("Las contraseñas no coinciden")]
    PasswordMismatch,
    #[error("El nombre es obligatorio")]
    MissingName,
}

impl ValidationError {
    pub fn i18n_key(&self) -> &'static str {
        match self {
            ValidationError::MissingCredentials => "err_missing_credentials",
            ValidationError::InvalidEmail => "err_invalid_email",
            ValidationError::PasswordTooShort => "err_password_short",
            ValidationError::PasswordMismatch => "err_password_mismatch",
            ValidationError::MissingName => "err_missing_name",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ApiError {
    /// Red caída o respuesta que no se pudo interpretar
    #[error("Error de conexión al servidor: {0}")]
    Connection(String),
    /// El backend respondió `{ success: false, message }`
    #[error("{0}")]
    Server(String),
    #[error(transparent)]
    Validation(#[from] ValidationError),
}

impl ApiError {
    /// Texto que se muestra al usuario
    pub fn localized(&self, language: Language) -> String {
        match self {
            ApiError::Connection(_) => translate(language, "err_connection"),
            ApiError::Server(message) => message.clone(),
            ApiError::Validation(err) => translate(language, err.i18n_key()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn connection_errors_hide_the_technical_detail() {
        let err = ApiError::Connection("TypeError: Failed to fetch".to_string());
        assert_eq!(err.localized(Language::Spanish), "Error de conexión al servidor");
        assert_eq!(err.localized(Language::English), "Could not connect to the server");
    }

    #[test]
    fn server_messages_are_shown_verbatim() {
        let err = ApiError::Server("El correo ya existe".to_string());
        assert_eq!(err.localized(Language::English), "El correo ya existe");
    }

    #[test]
    fn validation_errors_are_localized() {
        let err: ApiError = ValidationError::PasswordMismatch.into();
        assert_eq!(err.localized(Language::Spanish), "Las contraseñas no coinciden");
        assert_eq!(err.localized(Language::English), "Passwords do not match");
    }
}
