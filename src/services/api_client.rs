// ============================================================================
// API CLIENT - SOLO COMUNICACIÓN HTTP (Stateless)
// ============================================================================
// NO tiene lógica de negocio, solo hace requests GET contra /api/dashboard.
// El token bearer se lee de la sesión persistida; sin token no se manda el
// header (el servidor rechaza, no hay enforcement cliente).
// ============================================================================

use gloo_net::http::{Request, RequestBuilder};

use crate::config::CONFIG;
use crate::models::{
    ClassesResponse, EtatStockShareResponse, Filtre, KpisResponse, MovementHistResponse,
    TableauMensuelResponse,
};
use crate::services::session_service::{LocalStorageSessionProvider, SessionProvider};

/// Cliente API - SOLO comunicación HTTP (stateless)
#[derive(Clone)]
pub struct ApiClient {
    base_url: String,
}

impl ApiClient {
    pub fn new() -> Self {
        Self {
            base_url: CONFIG.backend_url().to_string(),
        }
    }

    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
        }
    }

    /// GET con header Authorization si hay token guardado
    fn get(&self, url: &str) -> RequestBuilder {
        let builder = Request::get(url);
        match LocalStorageSessionProvider::new().load_session().token {
            Some(token) => builder.header("Authorization", &format!("Bearer {}", token)),
            None => builder,
        }
    }

    fn url_filtre(&self, endpoint: &str, filtre: &Filtre) -> String {
        format!(
            "{}/api/dashboard/{}?annee={}&mois={}&classe={}",
            self.base_url, endpoint, filtre.annee, filtre.mois, filtre.classe
        )
    }

    /// Clases terapéuticas disponibles para el selector
    pub async fn get_classes(&self) -> Result<ClassesResponse, String> {
        let url = format!("{}/api/dashboard/classes", self.base_url);
        let response = self
            .get(&url)
            .send()
            .await
            .map_err(|e| format!("Network error: {}", e))?;
        if !response.ok() {
            return Err(format!(
                "HTTP {}: {}",
                response.status(),
                response.status_text()
            ));
        }
        response
            .json::<ClassesResponse>()
            .await
            .map_err(|e| format!("Parse error: {}", e))
    }

    /// KPIs del período (nb_produits, taux_disponibilite, benefice_net)
    pub async fn get_kpis(&self, filtre: &Filtre) -> Result<KpisResponse, String> {
        let url = self.url_filtre("kpis", filtre);
        let response = self
            .get(&url)
            .send()
            .await
            .map_err(|e| format!("Network error: {}", e))?;
        if !response.ok() {
            return Err(format!(
                "HTTP {}: {}",
                response.status(),
                response.status_text()
            ));
        }
        response
            .json::<KpisResponse>()
            .await
            .map_err(|e| format!("Parse error: {}", e))
    }

    /// Reparto de estados de stock (donut)
    pub async fn get_etat_stock_share(
        &self,
        filtre: &Filtre,
    ) -> Result<EtatStockShareResponse, String> {
        let url = self.url_filtre("etat_stock_share", filtre);
        let response = self
            .get(&url)
            .send()
            .await
            .map_err(|e| format!("Network error: {}", e))?;
        if !response.ok() {
            return Err(format!(
                "HTTP {}: {}",
                response.status(),
                response.status_text()
            ));
        }
        response
            .json::<EtatStockShareResponse>()
            .await
            .map_err(|e| format!("Parse error: {}", e))
    }

    /// Histograma de movimientos de stock
    pub async fn get_movement_hist(&self, filtre: &Filtre) -> Result<MovementHistResponse, String> {
        let url = self.url_filtre("movement_hist", filtre);
        let response = self
            .get(&url)
            .send()
            .await
            .map_err(|e| format!("Network error: {}", e))?;
        if !response.ok() {
            return Err(format!(
                "HTTP {}: {}",
                response.status(),
                response.status_text()
            ));
        }
        response
            .json::<MovementHistResponse>()
            .await
            .map_err(|e| format!("Parse error: {}", e))
    }

    /// Tableau mensual (filas opacas para la grilla)
    pub async fn get_tableau_mensuel(
        &self,
        filtre: &Filtre,
    ) -> Result<TableauMensuelResponse, String> {
        let url = self.url_filtre("tableau_mensuel", filtre);
        let response = self
            .get(&url)
            .send()
            .await
            .map_err(|e| format!("Network error: {}", e))?;
        if !response.ok() {
            return Err(format!(
                "HTTP {}: {}",
                response.status(),
                response.status_text()
            ));
        }
        response
            .json::<TableauMensuelResponse>()
            .await
            .map_err(|e| format!("Parse error: {}", e))
    }
}

impl Default for ApiClient {
    fn default() -> Self {
        Self::new()
    }
}
