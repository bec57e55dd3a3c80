// ============================================================================
// ROUTER MODULE - Tabla de rutas + guard de sesión
// ============================================================================

pub mod guard;
pub mod routes;

pub use guard::{landing_path, resolve, resolve_target, NavDecision};
pub use routes::{find_route, RouteDescriptor, ROUTES};
