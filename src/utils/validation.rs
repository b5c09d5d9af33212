// ============================================================================
// VALIDACIÓN DE FORMULARIOS
// ============================================================================

use crate::error::ValidationError;
use crate::utils::constants::MIN_PASSWORD_LEN;

pub fn is_valid_email(email: &str) -> bool {
    email.contains('@')
}

fn check_password(password: &str) -> Result<(), ValidationError> {
    if password.chars().count() < MIN_PASSWORD_LEN {
        return Err(ValidationError::PasswordTooShort);
    }
    Ok(())
}

/// Credenciales de login: email con '@', ambas presentes, contraseña ≥ 6.
/// Un email vacío cuenta como inválido antes que como faltante.
pub fn validate_login(email: &str, password: &str) -> Result<(), ValidationError> {
    if !is_valid_email(email) {
        return Err(ValidationError::InvalidEmail);
    }
    if password.is_empty() {
        return Err(ValidationError::MissingCredentials);
    }
    check_password(password)
}

/// Registro: nombre, credenciales válidas y confirmación idéntica
pub fn validate_registration(
    nombre: &str,
    email: &str,
    password: &str,
    confirm_password: &str,
) -> Result<(), ValidationError> {
    if nombre.trim().is_empty() {
        return Err(ValidationError::MissingName);
    }
    validate_login(email, password)?;
    if password != confirm_password {
        return Err(ValidationError::PasswordMismatch);
    }
    Ok(())
}

/// Edición de usuario existente (la contraseña no viaja)
pub fn validate_profile(nombre: &str, email: &str) -> Result<(), ValidationError> {
    if nombre.trim().is_empty() {
        return Err(ValidationError::MissingName);
    }
    if !is_valid_email(email) {
        return Err(ValidationError::InvalidEmail);
    }
    Ok(())
}
