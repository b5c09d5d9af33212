// ============================================================================
// MÓDULO DE INTERNACIONALIZACIÓN
// ============================================================================

use std::collections::HashMap;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Language {
    #[default]
    Spanish,
    English,
}

impl Language {
    pub fn as_str(&self) -> &'static str {
        match self {
            Language::Spanish => "ES",
            Language::English => "EN",
        }
    }

    /// Códigos desconocidos caen a español
    pub fn from_code(code: &str) -> Self {
        match code.trim().to_uppercase().as_str() {
            "EN" => Language::English,
            _ => Language::Spanish,
        }
    }
}

/// Diccionario de traducciones para un idioma
pub fn get_translations(language: Language) -> HashMap<&'static str, &'static str> {
    let entries: &[(&'static str, &'static str)] = match language {
        Language::Spanish => &[
            // Login / registro
            ("app_title", "EcoAula UCT"),
            ("app_subtitle", "Monitoreo de calidad del aire en salas"),
            ("role_admin", "Administrador"),
            ("role_conserje", "Conserje"),
            ("role_unknown", "Sin rol"),
            ("role_admin_hint", "Gestiona usuarios y revisa el estado de todas las salas"),
            ("role_conserje_hint", "Revisa las salas asignadas y su calidad del aire"),
            ("email", "Correo Electrónico"),
            ("email_placeholder", "usuario@ejemplo.com"),
            ("password", "Contraseña"),
            ("confirm_password", "Confirmar contraseña"),
            ("full_name", "Nombre completo"),
            ("full_name_placeholder", "Ej: María González"),
            ("login_button", "Iniciar Sesión"),
            ("register_button", "Registrarse"),
            ("register_link", "¿No tienes cuenta? Regístrate"),
            ("register_title", "Crear cuenta"),
            ("back_to_login", "← Volver"),
            ("loading", "Cargando..."),
            // Errores
            ("err_connection", "Error de conexión al servidor"),
            ("err_missing_credentials", "Faltan credenciales"),
            ("err_invalid_email", "Email inválido"),
            ("err_password_short", "Contraseña muy corta"),
            ("err_password_mismatch", "Las contraseñas no coinciden"),
            ("err_missing_name", "El nombre es obligatorio"),
            ("operation_ok", "Operación realizada"),
            // Principal
            ("welcome", "Bienvenido a la página principal"),
            ("logged_in", "Has iniciado sesión correctamente."),
            ("logout", "Cerrar Sesión"),
            ("tab_dashboard", "Calidad del aire"),
            ("tab_users", "Usuarios"),
            ("settings", "Configuración"),
            ("language", "Idioma"),
            ("spanish", "Español"),
            ("english", "English"),
            // Dashboard
            ("dashboard_title", "Monitoreo de salas"),
            ("avg_aqi", "AQI promedio"),
            ("worst_room", "Sala más crítica"),
            ("rooms", "Salas"),
            ("last_update", "Última actualización"),
            ("temperature", "Temperatura"),
            ("humidity", "Humedad"),
            ("quality", "Calidad"),
            ("legend", "Escala AQI"),
            ("aqi_good", "Buena"),
            ("aqi_moderate", "Moderada"),
            ("aqi_sensitive", "Dañina para grupos sensibles"),
            ("aqi_unhealthy", "Dañina"),
            ("aqi_very_unhealthy", "Muy dañina"),
            ("aqi_hazardous", "Peligrosa"),
            // Usuarios
            ("users_title", "Gestión de usuarios"),
            ("new_user", "Nuevo usuario"),
            ("edit_user", "Editar usuario"),
            ("col_id", "ID"),
            ("col_name", "Nombre"),
            ("col_email", "Correo"),
            ("col_role", "Rol"),
            ("col_actions", "Acciones"),
            ("edit", "Editar"),
            ("delete", "Eliminar"),
            ("save", "Guardar"),
            ("cancel", "Cancelar"),
            ("refresh", "Actualizar"),
            ("confirm_delete", "¿Eliminar este usuario?"),
            ("no_users", "No hay usuarios registrados"),
        ],
        Language::English => &[
            ("app_title", "EcoAula UCT"),
            ("app_subtitle", "Classroom air-quality monitoring"),
            ("role_admin", "Administrator"),
            ("role_conserje", "Concierge"),
            ("role_unknown", "No role"),
            ("role_admin_hint", "Manage users and review every room"),
            ("role_conserje_hint", "Review assigned rooms and their air quality"),
            ("email", "Email"),
            ("email_placeholder", "user@example.com"),
            ("password", "Password"),
            ("confirm_password", "Confirm password"),
            ("full_name", "Full name"),
            ("full_name_placeholder", "e.g. Maria Gonzalez"),
            ("login_button", "Sign in"),
            ("register_button", "Sign up"),
            ("register_link", "No account yet? Sign up"),
            ("register_title", "Create account"),
            ("back_to_login", "← Back"),
            ("loading", "Loading..."),
            ("err_connection", "Could not connect to the server"),
            ("err_missing_credentials", "Missing credentials"),
            ("err_invalid_email", "Invalid email"),
            ("err_password_short", "Password too short"),
            ("err_password_mismatch", "Passwords do not match"),
            ("err_missing_name", "Name is required"),
            ("operation_ok", "Done"),
            ("welcome", "Welcome to the main page"),
            ("logged_in", "You are signed in."),
            ("logout", "Sign out"),
            ("tab_dashboard", "Air quality"),
            ("tab_users", "Users"),
            ("settings", "Settings"),
            ("language", "Language"),
            ("spanish", "Español"),
            ("english", "English"),
            ("dashboard_title", "Room monitoring"),
            ("avg_aqi", "Average AQI"),
            ("worst_room", "Most critical room"),
            ("rooms", "Rooms"),
            ("last_update", "Last update"),
            ("temperature", "Temperature"),
            ("humidity", "Humidity"),
            ("quality", "Quality"),
            ("legend", "AQI scale"),
            ("aqi_good", "Good"),
            ("aqi_moderate", "Moderate"),
            ("aqi_sensitive", "Unhealthy for sensitive groups"),
            ("aqi_unhealthy", "Unhealthy"),
            ("aqi_very_unhealthy", "Very unhealthy"),
            ("aqi_hazardous", "Hazardous"),
            ("users_title", "User management"),
            ("new_user", "New user"),
            ("edit_user", "Edit user"),
            ("col_id", "ID"),
            ("col_name", "Name"),
            ("col_email", "Email"),
            ("col_role", "Role"),
            ("col_actions", "Actions"),
            ("edit", "Edit"),
            ("delete", "Delete"),
            ("save", "Save"),
            ("cancel", "Cancel"),
            ("refresh", "Refresh"),
            ("confirm_delete", "Delete this user?"),
            ("no_users", "No users registered"),
        ],
    };

    entries.iter().copied().collect()
}

/// Traducción de una clave; si no existe se devuelve la propia clave
pub fn translate(language: Language, key: &str) -> String {
    get_translations(language)
        .get(key)
        .map(|text| text.to_string())
        .unwrap_or_else(|| key.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unknown_codes_fall_back_to_spanish() {
        assert_eq!(Language::from_code("en"), Language::English);
        assert_eq!(Language::from_code("FR"), Language::Spanish);
        assert_eq!(Language::from_code(""), Language::Spanish);
    }

    #[test]
    fn missing_key_returns_the_key() {
        assert_eq!(translate(Language::Spanish, "no_existe"), "no_existe");
        assert_eq!(translate(Language::Spanish, "err_connection"), "Error de conexión al servidor");
    }

    #[test]
    fn both_languages_cover_the_same_keys() {
        let es = get_translations(Language::Spanish);
        let en = get_translations(Language::English);
        let mut missing: Vec<_> = es.keys().filter(|k| !en.contains_key(*k)).collect();
        missing.extend(en.keys().filter(|k| !es.contains_key(*k)));
        assert!(missing.is_empty(), "claves sin traducir: {:?}", missing);
    }
}
