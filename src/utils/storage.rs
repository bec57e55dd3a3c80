// Helpers de localStorage. Los fallos de lectura degradan a None:
// el guard los trata como "sin sesión", nunca como error.

use web_sys::Storage;

pub fn get_local_storage() -> Option<Storage> {
    // localStorage solo existe dentro del navegador; fuera de wasm
    // (tests nativos) degradamos a None
    #[cfg(target_arch = "wasm32")]
    {
        web_sys::window()?.local_storage().ok()?
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        None
    }
}

/// Leer un string plano del storage (None si falta o si el storage falla)
pub fn load_string(key: &str) -> Option<String> {
    let storage = get_local_storage()?;
    storage.get_item(key).ok()?
}

/// Guardar un string plano en el storage
pub fn save_string(key: &str, value: &str) -> Result<(), String> {
    let storage = get_local_storage().ok_or("No se pudo acceder a localStorage")?;
    storage
        .set_item(key, value)
        .map_err(|_| "Error guardando en localStorage".to_string())?;
    Ok(())
}

pub fn remove_key(key: &str) -> Result<(), String> {
    let storage = get_local_storage().ok_or("No se pudo acceder a localStorage")?;
    storage
        .remove_item(key)
        .map_err(|_| "Error eliminando de localStorage".to_string())?;
    Ok(())
}
