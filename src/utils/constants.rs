/// URL por defecto del backend Flask en desarrollo
pub const DEFAULT_BACKEND_URL: &str = "http://localhost:5000";
pub const DEFAULT_PRODUCTION_URL: &str = "https://api.ecoaula.uct.cl";

// Claves de localStorage
pub const STORAGE_KEY_USER: &str = "user";
pub const STORAGE_KEY_LANGUAGE: &str = "ecoaula_language";

/// Largo mínimo de contraseña aceptado por los formularios
pub const MIN_PASSWORD_LEN: usize = 6;

/// Tiempo que se muestra un mensaje de estado antes de ocultarse
pub const MESSAGE_TIMEOUT_MS: u32 = 4_000;
