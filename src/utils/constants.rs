// Claves de localStorage (strings planos, sin versionado de esquema)

/// Token de acceso escrito por el flujo de login
pub const STORAGE_KEY_TOKEN: &str = "pharmacie_access_token";

/// Rol de la sesión ("admin" | "viewer")
pub const STORAGE_KEY_ROLE: &str = "pharmacie_role";

/// Pestaña activa del dashboard ("synthese" | "liste" | "mvts")
pub const STORAGE_KEY_ACTIVE_TAB: &str = "dashboard_active_tab";

/// Ruta de login a la que redirige el guard cuando no hay sesión válida
pub const LOGIN_PATH: &str = "/login";
