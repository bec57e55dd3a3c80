// ============================================================================
// DASHBOARD MODELS - Estructuras compartidas con el backend + filtro/tabs
// ============================================================================

use serde::{Deserialize, Serialize};

/// Pestañas del dashboard. El valor activo se persiste en localStorage;
/// cualquier valor guardado fuera del enum se descarta y vuelve a Synthese.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Tab {
    Synthese,
    Liste,
    Mvts,
}

impl Tab {
    pub fn from_str(value: &str) -> Option<Tab> {
        match value {
            "synthese" => Some(Tab::Synthese),
            "liste" => Some(Tab::Liste),
            "mvts" => Some(Tab::Mvts),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Tab::Synthese => "synthese",
            Tab::Liste => "liste",
            Tab::Mvts => "mvts",
        }
    }

    /// Resolver el valor guardado en storage (o su ausencia) a una pestaña
    pub fn from_storage_value(value: Option<String>) -> Tab {
        value
            .as_deref()
            .and_then(Tab::from_str)
            .unwrap_or(Tab::Synthese)
    }
}

impl Default for Tab {
    fn default() -> Self {
        Tab::Synthese
    }
}

/// Triple de filtro del dashboard: (año, mes, clase terapéutica).
/// classe es "ALL" o un código de clase conocido.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Filtre {
    pub annee: i32,
    pub mois: u32,
    pub classe: String,
}

impl Filtre {
    pub fn new(annee: i32, mois: u32, classe: impl Into<String>) -> Self {
        Self {
            annee,
            mois,
            classe: classe.into(),
        }
    }

    /// Filtro por defecto: la fecha actual retrocedida `recul` meses
    /// (los datos del mes corriente pueden no estar consolidados todavía)
    /// y clase "ALL".
    pub fn par_defaut(annee_now: i32, mois_now: u32, recul: u32) -> Self {
        let (annee, mois) = recule_mois(annee_now, mois_now, recul);
        Self::new(annee, mois, "ALL")
    }
}

/// Retroceder `recul` meses manejando el cambio de año
pub fn recule_mois(annee: i32, mois: u32, recul: u32) -> (i32, u32) {
    let total = annee as i64 * 12 + (mois as i64 - 1) - recul as i64;
    (total.div_euclid(12) as i32, (total.rem_euclid(12) + 1) as u32)
}

/// Meses del selector de período (etiquetas francesas, como la UI)
pub fn mois_labels() -> &'static [(u32, &'static str); 12] {
    &[
        (1, "Janvier"),
        (2, "Février"),
        (3, "Mars"),
        (4, "Avril"),
        (5, "Mai"),
        (6, "Juin"),
        (7, "Juillet"),
        (8, "Août"),
        (9, "Septembre"),
        (10, "Octobre"),
        (11, "Novembre"),
        (12, "Décembre"),
    ]
}

/// Ventana de 11 años centrada en el año por defecto (-5 ..= +5)
pub fn fenetre_annees(annee_defaut: i32) -> Vec<i32> {
    (annee_defaut - 5..=annee_defaut + 5).collect()
}

/// Resumen KPI ya formateado: es el contrato observable de la vista
/// (la capa de render lo muestra tal cual).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct KpiSummary {
    pub nb_produits: i64,
    pub tx_dispo: String,
    pub solde_net: String,
}

impl Default for KpiSummary {
    fn default() -> Self {
        Self {
            nb_produits: 0,
            tx_dispo: "0 %".to_string(),
            solde_net: "0 F CFA".to_string(),
        }
    }
}

// ----------------------------------------------------------------------------
// Respuestas del backend (GET /api/dashboard/...)
// ----------------------------------------------------------------------------

#[derive(Debug, Clone, Default, Deserialize)]
pub struct ClassesResponse {
    #[serde(default)]
    pub classes: Vec<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct KpisResponse {
    #[serde(default)]
    pub nb_produits: Option<i64>,
    #[serde(default)]
    pub taux_disponibilite: Option<f64>,
    #[serde(default)]
    pub benefice_net: Option<f64>,
}

/// Punto del donut de estados de stock
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EtatStockItem {
    pub name: String,
    pub value: f64,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct EtatStockShareResponse {
    #[serde(default)]
    pub items: Vec<EtatStockItem>,
}

/// Barra del histograma de movimientos
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MovementHistItem {
    pub mouvement: String,
    #[serde(rename = "type")]
    pub type_mouvement: String,
    pub value: f64,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct MovementHistResponse {
    #[serde(default)]
    pub items: Vec<MovementHistItem>,
}

/// Filas del tableau mensual: el esquema de columnas lo decide el backend,
/// las pasamos opacas a la grilla.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct TableauMensuelResponse {
    #[serde(default)]
    pub data: Vec<serde_json::Value>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tab_invalido_vuelve_a_synthese() {
        assert_eq!(Tab::from_storage_value(Some("invalide".to_string())), Tab::Synthese);
        assert_eq!(Tab::from_storage_value(None), Tab::Synthese);
    }

    #[test]
    fn test_tab_valido_se_conserva() {
        assert_eq!(Tab::from_storage_value(Some("mvts".to_string())), Tab::Mvts);
        assert_eq!(Tab::from_storage_value(Some("liste".to_string())), Tab::Liste);
    }

    #[test]
    fn test_recule_mois_mismo_anio() {
        assert_eq!(recule_mois(2024, 5, 2), (2024, 3));
        assert_eq!(recule_mois(2024, 5, 1), (2024, 4));
    }

    #[test]
    fn test_recule_mois_cambio_de_anio() {
        // En enero, retroceder 2 meses cae en noviembre del año anterior
        assert_eq!(recule_mois(2026, 1, 2), (2025, 11));
        assert_eq!(recule_mois(2026, 2, 2), (2025, 12));
        assert_eq!(recule_mois(2026, 1, 13), (2024, 12));
    }

    #[test]
    fn test_filtre_par_defaut() {
        let filtre = Filtre::par_defaut(2024, 3, 2);
        assert_eq!(filtre, Filtre::new(2024, 1, "ALL"));
    }

    #[test]
    fn test_fenetre_annees() {
        let annees = fenetre_annees(2024);
        assert_eq!(annees.len(), 11);
        assert_eq!(annees.first(), Some(&2019));
        assert_eq!(annees.last(), Some(&2029));
    }

    #[test]
    fn test_parse_movement_hist() {
        let json = r#"{"items":[{"mouvement":"ENTREE","type":"ACHAT","value":12.0}]}"#;
        let resp: MovementHistResponse = serde_json::from_str(json).unwrap();
        assert_eq!(resp.items[0].type_mouvement, "ACHAT");
    }
}
