// ============================================================================
// ROUTES - Tabla declarativa de rutas con sus roles permitidos
// ============================================================================
// Estática, definida al arranque, nunca mutada. allowed_roles vacío significa
// "cualquier sesión válida".
// ============================================================================

use crate::models::Role;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RouteDescriptor {
    pub path: &'static str,
    pub is_public: bool,
    pub allowed_roles: &'static [Role],
}

const ADMIN: &[Role] = &[Role::Admin];
const LECTURE: &[Role] = &[Role::Admin, Role::Viewer];

/// Tabla de rutas de la aplicación
pub const ROUTES: &[RouteDescriptor] = &[
    // Login (pública, con alias)
    RouteDescriptor {
        path: "/login",
        is_public: true,
        allowed_roles: &[],
    },
    RouteDescriptor {
        path: "/connexion",
        is_public: true,
        allowed_roles: &[],
    },
    // Accueil / menú (solo admin)
    RouteDescriptor {
        path: "/",
        is_public: false,
        allowed_roles: ADMIN,
    },
    RouteDescriptor {
        path: "/accueil",
        is_public: false,
        allowed_roles: ADMIN,
    },
    // Gestión de productos y movimientos (solo admin)
    RouteDescriptor {
        path: "/enregistrer-medicament",
        is_public: false,
        allowed_roles: ADMIN,
    },
    RouteDescriptor {
        path: "/editer-medicament",
        is_public: false,
        allowed_roles: ADMIN,
    },
    RouteDescriptor {
        path: "/enregistrer-mouvement",
        is_public: false,
        allowed_roles: ADMIN,
    },
    RouteDescriptor {
        path: "/historique",
        is_public: false,
        allowed_roles: ADMIN,
    },
    // Dashboard (roles de lectura)
    RouteDescriptor {
        path: "/synthese",
        is_public: false,
        allowed_roles: LECTURE,
    },
];

/// Buscar el descriptor de una ruta por path exacto
pub fn find_route(path: &str) -> Option<&'static RouteDescriptor> {
    ROUTES.iter().find(|r| r.path == path)
}
