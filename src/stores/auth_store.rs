// ============================================================================
// AUTH STORE - sesión persistida en localStorage (clave `user`)
// ============================================================================

use crate::models::SessionUser;
use crate::utils::{load_from_storage, remove_from_storage, save_to_storage, STORAGE_KEY_USER};

pub struct AuthStore;

impl AuthStore {
    pub fn load() -> Option<SessionUser> {
        let user = load_from_storage::<SessionUser>(STORAGE_KEY_USER);
        if let Some(ref user) = user {
            log::info!("✅ Sesión restaurada: {} ({})", user.email, user.rol);
        }
        user
    }

    pub fn save(user: &SessionUser) {
        if let Err(e) = save_to_storage(STORAGE_KEY_USER, user) {
            log::error!("❌ {}", e);
        }
    }

    pub fn clear() {
        remove_from_storage(STORAGE_KEY_USER);
        log::info!("👋 Sesión eliminada");
    }
}
