// ============================================================================
// SESSION GUARD - Predicado puro de autorización de navegación
// ============================================================================
// Función pura de (Session, RouteDescriptor): sin red, sin efectos. La ruta
// solicitada se descarta en el redirect (no hay "volver a" tras el login).
// ============================================================================

use crate::models::{Role, Session};
use crate::router::routes::{find_route, RouteDescriptor};
use crate::utils::constants::LOGIN_PATH;

/// Resultado de evaluar una navegación
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavDecision {
    /// Dejar pasar la navegación al path solicitado
    Allow,
    /// Redirigir a otro path (login o landing del rol)
    Redirect(&'static str),
}

/// Página de aterrizaje por rol: el viewer solo ve el dashboard,
/// el admin entra por el menú
pub fn landing_path(role: Role) -> &'static str {
    match role {
        Role::Admin => "/accueil",
        Role::Viewer => "/synthese",
    }
}

/// Evaluar una navegación hacia `route` con la sesión dada
pub fn resolve(session: &Session, route: &RouteDescriptor) -> NavDecision {
    let role = match (session.token.as_ref(), session.role()) {
        (Some(_), Some(role)) => role,
        // Sesión inválida: solo las rutas públicas pasan
        _ => {
            return if route.is_public {
                NavDecision::Allow
            } else {
                NavDecision::Redirect(LOGIN_PATH)
            };
        }
    };

    // Sesión válida sobre una pública (revisita el login ya autenticado):
    // a su landing
    if route.is_public {
        return NavDecision::Redirect(landing_path(role));
    }

    // Ruta restringida a roles que no incluyen el de la sesión: a su landing
    if !route.allowed_roles.is_empty() && !route.allowed_roles.contains(&role) {
        return NavDecision::Redirect(landing_path(role));
    }

    NavDecision::Allow
}

/// Resolver un path solicitado al path que finalmente se renderiza.
/// Un path sin descriptor se trata como restringido: login si la sesión es
/// inválida, landing del rol si es válida.
pub fn resolve_target(session: &Session, path: &str) -> String {
    match find_route(path) {
        Some(route) => match resolve(session, route) {
            NavDecision::Allow => path.to_string(),
            NavDecision::Redirect(cible) => cible.to_string(),
        },
        None => match session.role() {
            Some(role) if session.token.is_some() => landing_path(role).to_string(),
            _ => LOGIN_PATH.to_string(),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::router::routes::ROUTES;

    fn session(token: Option<&str>, role: Option<&str>) -> Session {
        Session::new(token.map(String::from), role.map(String::from))
    }

    #[test]
    fn test_rol_invalido_redirige_a_login_en_toda_ruta_privada() {
        let s = session(Some("tok"), Some("superuser"));
        for route in ROUTES.iter().filter(|r| !r.is_public) {
            assert_eq!(
                resolve(&s, route),
                NavDecision::Redirect(LOGIN_PATH),
                "ruta {}",
                route.path
            );
        }
    }

    #[test]
    fn test_sin_sesion_puede_ver_login() {
        let s = Session::default();
        let login = find_route("/login").unwrap();
        assert_eq!(resolve(&s, login), NavDecision::Allow);
    }

    #[test]
    fn test_sin_sesion_accueil_redirige_a_login() {
        let s = Session::default();
        assert_eq!(resolve_target(&s, "/accueil"), "/login");
    }

    #[test]
    fn test_viewer_en_ruta_admin_va_a_synthese() {
        let s = session(Some("tok"), Some("viewer"));
        for path in ["/accueil", "/historique", "/enregistrer-medicament"] {
            let route = find_route(path).unwrap();
            assert_eq!(resolve(&s, route), NavDecision::Redirect("/synthese"));
        }
    }

    #[test]
    fn test_admin_revisita_login_va_a_accueil() {
        let s = session(Some("tok"), Some("admin"));
        let login = find_route("/login").unwrap();
        assert_eq!(resolve(&s, login), NavDecision::Redirect("/accueil"));
    }

    #[test]
    fn test_viewer_revisita_login_va_a_synthese() {
        let s = session(Some("tok"), Some("viewer"));
        let login = find_route("/connexion").unwrap();
        assert_eq!(resolve(&s, login), NavDecision::Redirect("/synthese"));
    }

    #[test]
    fn test_viewer_puede_ver_synthese() {
        let s = session(Some("tok"), Some("viewer"));
        let route = find_route("/synthese").unwrap();
        assert_eq!(resolve(&s, route), NavDecision::Allow);
    }

    #[test]
    fn test_admin_puede_ver_todo_lo_privado() {
        let s = session(Some("tok"), Some("admin"));
        for route in ROUTES.iter().filter(|r| !r.is_public) {
            assert_eq!(resolve(&s, route), NavDecision::Allow, "ruta {}", route.path);
        }
    }

    #[test]
    fn test_path_desconocido() {
        assert_eq!(resolve_target(&Session::default(), "/nimporte"), "/login");
        let s = session(Some("tok"), Some("viewer"));
        assert_eq!(resolve_target(&s, "/nimporte"), "/synthese");
    }

    #[test]
    fn test_token_sin_rol_es_invalido() {
        let s = session(Some("tok"), None);
        assert_eq!(resolve_target(&s, "/synthese"), "/login");
    }
}
