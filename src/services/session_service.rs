// ============================================================================
// SESSION SERVICE - Capability de lectura de la sesión persistida
// ============================================================================
// El guard no toca localStorage directamente: recibe la sesión a través de
// un SessionProvider inyectado, así se testea sin navegador.
// ============================================================================

use crate::models::Session;
use crate::utils::constants::{STORAGE_KEY_ROLE, STORAGE_KEY_TOKEN};
use crate::utils::storage::{load_string, remove_key, save_string};

/// Fuente de la sesión actual
pub trait SessionProvider {
    fn load_session(&self) -> Session;
}

/// Implementación de producción sobre localStorage. Cualquier fallo de
/// lectura degrada a una sesión vacía (inválida), nunca a un error.
#[derive(Clone, Default)]
pub struct LocalStorageSessionProvider;

impl LocalStorageSessionProvider {
    pub fn new() -> Self {
        Self
    }
}

impl SessionProvider for LocalStorageSessionProvider {
    fn load_session(&self) -> Session {
        Session::new(load_string(STORAGE_KEY_TOKEN), load_string(STORAGE_KEY_ROLE))
    }
}

/// Guardar la sesión tras un login exitoso (el login en sí es externo)
pub fn save_session(token: &str, role: &str) -> Result<(), String> {
    save_string(STORAGE_KEY_TOKEN, token)?;
    save_string(STORAGE_KEY_ROLE, role)?;
    log::info!("✅ Sesión guardada (rol: {})", role);
    Ok(())
}

/// Limpiar la sesión (logout)
pub fn clear_session() {
    log::info!("👋 Limpiando sesión");
    let _ = remove_key(STORAGE_KEY_TOKEN);
    let _ = remove_key(STORAGE_KEY_ROLE);
}


#[cfg(test)]
mod tests {
    use super::test_support::FixedSessionProvider;
    use super::*;

    #[test]
    fn test_provider_fijo() {
        let provider =
            FixedSessionProvider(Session::new(Some("tok".to_string()), Some("admin".to_string())));
        assert!(provider.load_session().is_valid());
    }

    #[test]
    fn test_save_y_clear_degradan_sin_storage() {
        // Fuera del navegador guardar falla de forma blanda y limpiar
        // no hace nada; en el navegador el export wasm persiste el par
        // token/rol que luego lee el provider
        assert!(save_session("tok", "admin").is_err());
        clear_session();
        assert!(!LocalStorageSessionProvider::new().load_session().is_valid());
    }

    #[test]
    fn test_storage_ausente_da_sesion_vacia() {
        // Fuera del navegador el storage no existe: sesión vacía, sin error
        let session = LocalStorageSessionProvider::new().load_session();
        assert_eq!(session, Session::default());
        assert!(!session.is_valid());
    }
}
