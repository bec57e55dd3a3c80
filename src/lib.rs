// ============================================================================
// PHARMACIE STOCK PWA - FRONTEND MVVM (RUST PURO)
// ============================================================================
// Núcleo cliente de la gestión de stock de farmacia:
// - Router guard: navegación condicionada por la sesión (token + rol)
// - Dashboard: refresh del bundle "synthese" dirigido por el filtro
// - Services: SOLO comunicación API
// - State: State Management con Rc<RefCell>
// La capa de render consume los exports wasm y el snapshot JSON del estado.
// ============================================================================

pub mod app;
pub mod config;
pub mod models;
pub mod router;
pub mod services;
pub mod state;
pub mod utils;
pub mod viewmodels;

use std::cell::RefCell;

use wasm_bindgen::prelude::*;
use wasm_logger::Config;

use crate::app::App;
use crate::models::Tab;

// Variable estática global para mantener la instancia de App
thread_local! {
    static APP: RefCell<Option<App>> = RefCell::new(None);
}

#[wasm_bindgen(start)]
pub fn main() -> Result<(), JsValue> {
    // Panic hook para mejor debugging en consola
    console_error_panic_hook::set_once();

    if config::CONFIG.is_logging_enabled() {
        wasm_logger::init(Config::default());
    }
    log::info!("🚀 Pharmacie Stock PWA - núcleo guard + dashboard");

    let app = App::new();
    APP.with(|app_cell| {
        *app_cell.borrow_mut() = Some(app);
    });

    // Primer refresh del dashboard (pestaña persistida + clases + bundle)
    wasm_bindgen_futures::spawn_local(async {
        let dashboard = APP.with(|app_cell| {
            app_cell.borrow().as_ref().map(|app| app.dashboard.clone())
        });
        if let Some(dashboard) = dashboard {
            if let Err(e) = dashboard.init().await {
                log::error!("❌ Error inicializando dashboard: {}", e);
            }
        }
    });

    Ok(())
}

/// Resolver una navegación: devuelve el path a renderizar (el mismo, el
/// login o la landing del rol). Lo llama el router de la capa de render
/// antes de montar cualquier página.
#[wasm_bindgen]
pub fn resolve_route(path: &str) -> String {
    APP.with(|app_cell| match app_cell.borrow().as_ref() {
        Some(app) => app.resolve_route(path),
        None => {
            log::warn!("⚠️ App no está inicializada");
            crate::utils::constants::LOGIN_PATH.to_string()
        }
    })
}

/// Cambiar el filtro del dashboard (dispara el refresh si hace falta)
#[wasm_bindgen]
pub fn set_dashboard_filter(annee: i32, mois: u32, classe: String) {
    with_dashboard(move |dashboard| async move {
        dashboard.set_filter(annee, mois, classe).await
    });
}

/// Cambiar la pestaña activa ("synthese" | "liste" | "mvts");
/// valores desconocidos se ignoran
#[wasm_bindgen]
pub fn set_dashboard_tab(tab: String) {
    let Some(tab) = Tab::from_str(&tab) else {
        log::warn!("⚠️ Pestaña desconocida ignorada: {}", tab);
        return;
    };
    with_dashboard(move |dashboard| async move { dashboard.set_active_tab(tab).await });
}

/// Restaurar el filtro por defecto (período calculado + clase "ALL")
#[wasm_bindgen]
pub fn reset_dashboard() {
    with_dashboard(|dashboard| async move { dashboard.reset().await });
}

/// Snapshot JSON del estado observable del dashboard (catálogos de período
/// incluidos) para la capa de render
#[wasm_bindgen]
pub fn dashboard_snapshot() -> String {
    APP.with(|app_cell| match app_cell.borrow().as_ref() {
        Some(app) => app.dashboard_snapshot(),
        None => "{}".to_string(),
    })
}

/// Guardar la sesión tras un login exitoso (lo llama el flujo de login JS)
#[wasm_bindgen]
pub fn store_session(token: String, role: String) {
    if let Err(e) = services::save_session(&token, &role) {
        log::error!("❌ Error guardando sesión: {}", e);
    }
}

/// Limpiar la sesión persistida (logout)
#[wasm_bindgen]
pub fn clear_session() {
    services::clear_session();
}

/// Ejecutar una operación async del dashboard sin bloquear; los errores de
/// red se loguean (el render decide qué mostrar con un bundle incompleto)
fn with_dashboard<F, Fut>(operation: F)
where
    F: FnOnce(viewmodels::DashboardViewModel) -> Fut + 'static,
    Fut: std::future::Future<Output = Result<(), String>> + 'static,
{
    let dashboard = APP.with(|app_cell| {
        app_cell.borrow().as_ref().map(|app| app.dashboard.clone())
    });

    match dashboard {
        Some(dashboard) => {
            wasm_bindgen_futures::spawn_local(async move {
                if let Err(e) = operation(dashboard).await {
                    log::error!("❌ Error en operación del dashboard: {}", e);
                }
            });
        }
        None => log::warn!("⚠️ App no está inicializada"),
    }
}
