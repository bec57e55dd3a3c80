// ============================================================================
// APP - Wiring de guard + dashboard
// ============================================================================
// La capa de render (externa) pide aquí la resolución de cada navegación y
// observa el estado del dashboard. App no renderiza nada.
// ============================================================================

use chrono::Datelike;

use crate::config::CONFIG;
use crate::models::dashboard::{fenetre_annees, mois_labels};
use crate::models::Filtre;
use crate::router::guard;
use crate::services::{ApiClient, LocalStorageSessionProvider, SessionProvider};
use crate::viewmodels::DashboardViewModel;

pub struct App {
    session_provider: LocalStorageSessionProvider,
    pub dashboard: DashboardViewModel,
}

impl App {
    pub fn new() -> Self {
        // Período por defecto: hoy menos period_offset_months (los datos del
        // mes corriente pueden no estar consolidados todavía)
        let now = chrono::Local::now();
        let filtre_defaut = Filtre::par_defaut(
            now.year(),
            now.month(),
            CONFIG.period_offset_months,
        );

        Self {
            session_provider: LocalStorageSessionProvider::new(),
            dashboard: DashboardViewModel::new(ApiClient::new(), filtre_defaut),
        }
    }

    /// Inicialización async del dashboard (pestaña persistida + primer fetch)
    pub async fn init(&self) -> Result<(), String> {
        self.dashboard.init().await
    }

    /// Evaluar una navegación: devuelve el path que finalmente se renderiza.
    /// La sesión se relee del storage en cada navegación.
    pub fn resolve_route(&self, path: &str) -> String {
        let session = self.session_provider.load_session();
        let cible = guard::resolve_target(&session, path);
        if cible != path {
            log::info!("🔀 Navegación {} redirigida a {}", path, cible);
        }
        cible
    }

    /// Snapshot JSON del estado observable del dashboard, catálogos de
    /// período incluidos (meses y ventana de años para los selectores)
    pub fn dashboard_snapshot(&self) -> String {
        let state = &self.dashboard.state;
        let months: Vec<_> = mois_labels()
            .iter()
            .map(|(valeur, label)| serde_json::json!({ "value": valeur, "label": label }))
            .collect();

        serde_json::json!({
            "filtre": state.get_filtre(),
            "active_tab": state.get_active_tab().as_str(),
            "classes": state.get_classes(),
            "months": months,
            "years": fenetre_annees(self.dashboard.filtre_defaut().annee),
            "kpis": state.get_kpis(),
            "etat_stock_share": state.get_etat_stock_share(),
            "movement_hist": state.get_movement_hist(),
            "monthly_table": state.get_monthly_table(),
            "monthly_table_loading": state.get_monthly_table_loading(),
            "synthese_loaded": state.get_synthese_loaded(),
        })
        .to_string()
    }
}

impl Default for App {
    fn default() -> Self {
        Self::new()
    }
}
