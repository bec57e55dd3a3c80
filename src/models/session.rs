// ============================================================================
// SESSION MODEL - Token + rol persistidos en el navegador
// ============================================================================
// La sesión la escribe el flujo de login (externo) y la leemos en cada
// navegación. Cualquier rol distinto de "admin"/"viewer" se trata como
// sesión inválida.
// ============================================================================

use serde::{Deserialize, Serialize};

/// Rol de la sesión
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Role {
    Admin,
    Viewer,
}

impl Role {
    /// Parsear el valor tal cual se guarda en localStorage
    pub fn from_str(value: &str) -> Option<Role> {
        match value {
            "admin" => Some(Role::Admin),
            "viewer" => Some(Role::Viewer),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Admin => "admin",
            Role::Viewer => "viewer",
        }
    }
}

/// Sesión cliente: par (token, rol) tal cual viene del storage.
/// El rol se guarda crudo; el parseo decide la validez.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Session {
    pub token: Option<String>,
    pub role: Option<String>,
}

impl Session {
    pub fn new(token: Option<String>, role: Option<String>) -> Self {
        Self { token, role }
    }

    /// Rol parseado (None si el valor guardado no es un rol conocido)
    pub fn role(&self) -> Option<Role> {
        self.role.as_deref().and_then(Role::from_str)
    }

    /// Una sesión es válida si hay token Y el rol es admin o viewer
    pub fn is_valid(&self) -> bool {
        self.token.is_some() && self.role().is_some()
    }
}
