// ============================================================================
// DASHBOARD VIEWMODEL - Orquestación del refresh del bundle "synthese"
// ============================================================================
// Mantiene cuatro vistas derivadas + KPIs sincronizados con el filtro
// (annee, mois, classe) y la pestaña activa:
// - Refresh perezoso: solo se fetchea cuando la pestaña activa es Synthese.
// - Memoización: volver a Synthese con el bundle ya cargado no re-fetchea;
//   cambiar el filtro invalida el flag y fuerza el re-fetch.
// - Los cuatro fetches son futures independientes (join); cada uno escribe
//   solo su slot, así que un render a mitad de refresh puede ver un bundle
//   parcialmente actualizado. Ventana asumida, no es un bug.
// - Un fetch en vuelo no se cancela al cambiar el filtro: una respuesta
//   tardía puede mostrar transitoriamente datos del filtro anterior.
// ============================================================================

use crate::models::{
    Filtre, KpiSummary, KpisResponse, Tab, TableauMensuelResponse,
};
use crate::services::ApiClient;
use crate::state::DashboardState;
use crate::utils::constants::STORAGE_KEY_ACTIVE_TAB;
use crate::utils::format::{fmt_cfa, fmt_percent};
use crate::utils::storage::{load_string, save_string};

/// ViewModel del dashboard - estado + lógica de refresh
#[derive(Clone)]
pub struct DashboardViewModel {
    api_client: ApiClient,
    pub state: DashboardState,
    filtre_defaut: Filtre,
}

impl DashboardViewModel {
    /// `filtre_defaut` es el período por defecto ya calculado (fecha actual
    /// retrocedida según la configuración) con clase "ALL"
    pub fn new(api_client: ApiClient, filtre_defaut: Filtre) -> Self {
        Self {
            api_client,
            state: DashboardState::new(filtre_defaut.clone()),
            filtre_defaut,
        }
    }

    /// Filtro por defecto calculado al arranque (base de la ventana de años
    /// del selector y del reset)
    pub fn filtre_defaut(&self) -> &Filtre {
        &self.filtre_defaut
    }

    /// Inicialización al montar: restaurar la pestaña persistida, cargar las
    /// clases del selector y disparar el primer refresh
    pub async fn init(&self) -> Result<(), String> {
        let tab = Tab::from_storage_value(load_string(STORAGE_KEY_ACTIVE_TAB));
        self.state.set_active_tab(tab);
        log::info!("📊 Dashboard inicializado (pestaña: {})", tab.as_str());

        // Las clases no forman parte del bundle: si fallan, el refresh
        // igual se intenta
        if let Err(e) = self.fetch_classes().await {
            log::error!("❌ Error cargando clases: {}", e);
        }

        self.fetch_synthese_bundle().await
    }

    /// Cambiar el filtro (annee, mois, classe). Un mes fuera de [1,12] se
    /// rechaza sin tocar el estado. Un triple idéntico con el bundle ya
    /// cargado es un no-op; cualquier cambio invalida el flag y re-fetchea
    /// aunque la pestaña ya estuviera cargada.
    pub async fn set_filter(&self, annee: i32, mois: u32, classe: String) -> Result<(), String> {
        if !(1..=12).contains(&mois) {
            return Err(format!("Mois fuera de rango: {}", mois));
        }

        let nouveau = Filtre::new(annee, mois, classe);
        if nouveau == self.state.get_filtre() && self.state.get_synthese_loaded() {
            log::debug!("Filtro sin cambios, bundle ya cargado");
            return Ok(());
        }

        self.state.set_filtre(nouveau);
        self.state.set_synthese_loaded(false);
        self.fetch_synthese_bundle().await
    }

    /// Cambiar la pestaña activa. Se persiste siempre; solo dispara un
    /// refresh si es Synthese y el bundle no está cargado para el filtro
    /// actual (el toggle puro de pestañas no genera fetches).
    pub async fn set_active_tab(&self, tab: Tab) -> Result<(), String> {
        self.state.set_active_tab(tab);
        if let Err(e) = save_string(STORAGE_KEY_ACTIVE_TAB, tab.as_str()) {
            log::error!("❌ Error guardando pestaña activa: {}", e);
        }

        if tab == Tab::Synthese && !self.state.get_synthese_loaded() {
            return self.fetch_synthese_bundle().await;
        }
        Ok(())
    }

    /// Restaurar el filtro por defecto (período calculado + clase "ALL")
    pub async fn reset(&self) -> Result<(), String> {
        let defaut = self.filtre_defaut.clone();
        log::info!("🔄 Reset del filtro a {}/{}", defaut.mois, defaut.annee);
        self.set_filter(defaut.annee, defaut.mois, defaut.classe).await
    }

    /// Cargar las clases terapéuticas del selector
    pub async fn fetch_classes(&self) -> Result<(), String> {
        let response = self.api_client.get_classes().await?;
        log::info!("✅ Clases cargadas: {}", response.classes.len());
        self.state.set_classes(response.classes);
        Ok(())
    }

    /// Refresh del bundle "synthese": cuatro fetches independientes (KPIs,
    /// donut de estados, histograma, tableau mensual) contra el filtro
    /// actual. El flag loaded solo se setea si los cuatro terminaron bien;
    /// si alguno falla queda limpio y el próximo trigger reintenta.
    pub async fn fetch_synthese_bundle(&self) -> Result<(), String> {
        if self.state.get_active_tab() != Tab::Synthese {
            return Ok(());
        }

        let filtre = self.state.get_filtre();
        log::info!(
            "📊 Refresh synthese: {}/{} classe={}",
            filtre.mois,
            filtre.annee,
            filtre.classe
        );

        self.state.set_monthly_table_loading(true);
        let (kpis, etat, hist, table) = futures::join!(
            self.api_client.get_kpis(&filtre),
            self.api_client.get_etat_stock_share(&filtre),
            self.api_client.get_movement_hist(&filtre),
            self.api_client.get_tableau_mensuel(&filtre),
        );

        // Cada resultado se aplica a su slot; el del tableau libera el flag
        // de loading pase lo que pase
        let r_kpis = Self::appliquer_kpis(&self.state, kpis);
        let r_etat = etat.map(|r| self.state.set_etat_stock_share(r.items));
        let r_hist = hist.map(|r| self.state.set_movement_hist(r.items));
        let r_table = Self::appliquer_tableau_mensuel(&self.state, table);

        match (r_kpis, r_etat, r_hist, r_table) {
            (Ok(()), Ok(()), Ok(()), Ok(())) => {
                self.state.set_synthese_loaded(true);
                log::info!("✅ Bundle synthese cargado");
                Ok(())
            }
            (a, b, c, d) => {
                let erreur = [a.err(), b.err(), c.err(), d.err()]
                    .into_iter()
                    .flatten()
                    .next()
                    .unwrap_or_else(|| "Error desconocido".to_string());
                log::error!("❌ Error en refresh synthese: {}", erreur);
                Err(erreur)
            }
        }
    }

    /// Formatear y aplicar los KPIs crudos del backend
    fn appliquer_kpis(state: &DashboardState, resultat: Result<KpisResponse, String>) -> Result<(), String> {
        let response = resultat?;
        state.set_kpis(KpiSummary {
            nb_produits: response.nb_produits.unwrap_or(0),
            tx_dispo: fmt_percent(response.taux_disponibilite.unwrap_or(0.0)),
            solde_net: fmt_cfa(response.benefice_net.unwrap_or(0.0)),
        });
        Ok(())
    }

    /// Aplicar el resultado del tableau mensual. El flag de loading se
    /// libera en todos los caminos de salida, incluido el de error.
    fn appliquer_tableau_mensuel(
        state: &DashboardState,
        resultat: Result<TableauMensuelResponse, String>,
    ) -> Result<(), String> {
        state.set_monthly_table_loading(false);
        let response = resultat?;
        state.set_monthly_table(response.data);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use futures::executor::block_on;
    use serde_json::json;

    // Un ApiClient apuntando a ningún lado: los tests solo ejercitan caminos
    // que no llegan a la red (en nativo un fetch real entraría en pánico,
    // lo que de paso delata cualquier fetch inesperado).
    fn vm() -> DashboardViewModel {
        DashboardViewModel::new(
            ApiClient::with_base_url("http://localhost:0"),
            Filtre::new(2024, 3, "ALL"),
        )
    }

    #[test]
    fn test_set_filter_identico_con_bundle_cargado_es_noop() {
        let vm = vm();
        vm.state.set_synthese_loaded(true);

        let resultat = block_on(vm.set_filter(2024, 3, "ALL".to_string()));
        assert!(resultat.is_ok());
        assert!(vm.state.get_synthese_loaded());
        assert_eq!(vm.state.get_filtre(), Filtre::new(2024, 3, "ALL"));
    }

    #[test]
    fn test_cambio_de_filtro_invalida_el_flag() {
        let vm = vm();
        vm.state.set_synthese_loaded(true);
        // Con otra pestaña activa el refresh es perezoso: no hay red
        vm.state.set_active_tab(Tab::Liste);

        let resultat = block_on(vm.set_filter(2024, 4, "ALL".to_string()));
        assert!(resultat.is_ok());
        assert!(!vm.state.get_synthese_loaded());
        assert_eq!(vm.state.get_filtre(), Filtre::new(2024, 4, "ALL"));
    }

    #[test]
    fn test_mois_fuera_de_rango_se_rechaza_sin_tocar_el_estado() {
        let vm = vm();
        vm.state.set_synthese_loaded(true);

        for mois in [0, 13, 99] {
            let resultat = block_on(vm.set_filter(2024, mois, "ALL".to_string()));
            assert!(resultat.is_err(), "mois={}", mois);
        }
        // Ni el triple ni el flag cambiaron, y nada llegó a la red
        assert_eq!(vm.state.get_filtre(), Filtre::new(2024, 3, "ALL"));
        assert!(vm.state.get_synthese_loaded());
    }

    #[test]
    fn test_cambio_de_classe_tambien_invalida() {
        let vm = vm();
        vm.state.set_synthese_loaded(true);
        vm.state.set_active_tab(Tab::Mvts);

        block_on(vm.set_filter(2024, 3, "ANTIBIO".to_string())).unwrap();
        assert!(!vm.state.get_synthese_loaded());
    }

    #[test]
    fn test_toggle_de_pestana_cargada_no_fetchea() {
        let vm = vm();
        vm.state.set_synthese_loaded(true);
        vm.state.set_active_tab(Tab::Liste);

        // Volver a synthese con loaded=true: cero fetches (un fetch real
        // haría fallar el test en nativo)
        let resultat = block_on(vm.set_active_tab(Tab::Synthese));
        assert!(resultat.is_ok());
        assert_eq!(vm.state.get_active_tab(), Tab::Synthese);
    }

    #[test]
    fn test_pestanas_no_synthese_nunca_fetchean() {
        let vm = vm();
        assert!(block_on(vm.set_active_tab(Tab::Liste)).is_ok());
        assert!(block_on(vm.set_active_tab(Tab::Mvts)).is_ok());
    }

    #[test]
    fn test_bundle_perezoso_fuera_de_synthese() {
        let vm = vm();
        vm.state.set_active_tab(Tab::Mvts);
        assert!(block_on(vm.fetch_synthese_bundle()).is_ok());
        assert!(!vm.state.get_synthese_loaded());
    }

    #[test]
    fn test_kpis_formateados() {
        let vm = vm();
        let response = KpisResponse {
            nb_produits: Some(120),
            taux_disponibilite: Some(87.0),
            benefice_net: Some(450000.0),
        };

        DashboardViewModel::appliquer_kpis(&vm.state, Ok(response)).unwrap();
        let kpis = vm.state.get_kpis();
        assert_eq!(kpis.nb_produits, 120);
        assert_eq!(kpis.tx_dispo, "87 %");
        assert_eq!(kpis.solde_net, "450 000 F CFA");
    }

    #[test]
    fn test_kpis_campos_ausentes_caen_a_cero() {
        let vm = vm();
        DashboardViewModel::appliquer_kpis(&vm.state, Ok(KpisResponse::default())).unwrap();
        assert_eq!(vm.state.get_kpis(), KpiSummary::default());
    }

    #[test]
    fn test_loading_se_libera_en_exito() {
        let vm = vm();
        vm.state.set_monthly_table_loading(true);

        let response = TableauMensuelResponse {
            data: vec![json!({"produit": "Amoxicilline", "stock": 12})],
        };
        DashboardViewModel::appliquer_tableau_mensuel(&vm.state, Ok(response)).unwrap();

        assert!(!vm.state.get_monthly_table_loading());
        assert_eq!(vm.state.get_monthly_table().len(), 1);
    }

    #[test]
    fn test_loading_se_libera_en_error() {
        let vm = vm();
        vm.state.set_monthly_table_loading(true);
        vm.state.set_monthly_table(vec![json!({"produit": "ancien"})]);

        let resultat = DashboardViewModel::appliquer_tableau_mensuel(
            &vm.state,
            Err("HTTP 500: Internal Server Error".to_string()),
        );

        assert!(resultat.is_err());
        assert!(!vm.state.get_monthly_table_loading());
        // El slot conserva el último valor: nunca se mergea ni se limpia
        assert_eq!(vm.state.get_monthly_table().len(), 1);
    }

    #[test]
    fn test_filtre_defaut_expuesto_en_estado_inicial() {
        let vm = vm();
        assert_eq!(vm.state.get_filtre(), Filtre::new(2024, 3, "ALL"));
    }
}
