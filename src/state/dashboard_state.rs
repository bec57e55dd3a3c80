// ============================================================================
// DASHBOARD STATE - Estado observable del dashboard
// ============================================================================
// Cada slot lo escribe exactamente un fetch: no hace falta más sincronización
// que RefCell. El bundle se reemplaza por slot, nunca se mergea.
// ============================================================================

use std::cell::RefCell;
use std::rc::Rc;

use crate::models::{EtatStockItem, Filtre, KpiSummary, MovementHistItem, Tab};

/// Estado del dashboard, compartido entre viewmodel y capa de render
#[derive(Clone)]
pub struct DashboardState {
    pub filtre: Rc<RefCell<Filtre>>,
    pub active_tab: Rc<RefCell<Tab>>,
    pub classes: Rc<RefCell<Vec<String>>>,

    // Bundle "synthese": cuatro slots independientes
    pub kpis: Rc<RefCell<KpiSummary>>,
    pub etat_stock_share: Rc<RefCell<Vec<EtatStockItem>>>,
    pub movement_hist: Rc<RefCell<Vec<MovementHistItem>>>,
    pub monthly_table: Rc<RefCell<Vec<serde_json::Value>>>,

    pub monthly_table_loading: Rc<RefCell<bool>>,
    pub synthese_loaded: Rc<RefCell<bool>>,
}

impl DashboardState {
    pub fn new(filtre: Filtre) -> Self {
        Self {
            filtre: Rc::new(RefCell::new(filtre)),
            active_tab: Rc::new(RefCell::new(Tab::Synthese)),
            classes: Rc::new(RefCell::new(Vec::new())),
            kpis: Rc::new(RefCell::new(KpiSummary::default())),
            etat_stock_share: Rc::new(RefCell::new(Vec::new())),
            movement_hist: Rc::new(RefCell::new(Vec::new())),
            monthly_table: Rc::new(RefCell::new(Vec::new())),
            monthly_table_loading: Rc::new(RefCell::new(false)),
            synthese_loaded: Rc::new(RefCell::new(false)),
        }
    }

    pub fn get_filtre(&self) -> Filtre {
        self.filtre.borrow().clone()
    }

    pub fn set_filtre(&self, filtre: Filtre) {
        *self.filtre.borrow_mut() = filtre;
    }

    pub fn get_active_tab(&self) -> Tab {
        *self.active_tab.borrow()
    }

    pub fn set_active_tab(&self, tab: Tab) {
        *self.active_tab.borrow_mut() = tab;
    }

    pub fn get_classes(&self) -> Vec<String> {
        self.classes.borrow().clone()
    }

    pub fn set_classes(&self, classes: Vec<String>) {
        *self.classes.borrow_mut() = classes;
    }

    pub fn get_kpis(&self) -> KpiSummary {
        self.kpis.borrow().clone()
    }

    pub fn set_kpis(&self, kpis: KpiSummary) {
        *self.kpis.borrow_mut() = kpis;
    }

    pub fn get_etat_stock_share(&self) -> Vec<EtatStockItem> {
        self.etat_stock_share.borrow().clone()
    }

    pub fn set_etat_stock_share(&self, items: Vec<EtatStockItem>) {
        *self.etat_stock_share.borrow_mut() = items;
    }

    pub fn get_movement_hist(&self) -> Vec<MovementHistItem> {
        self.movement_hist.borrow().clone()
    }

    pub fn set_movement_hist(&self, items: Vec<MovementHistItem>) {
        *self.movement_hist.borrow_mut() = items;
    }

    pub fn get_monthly_table(&self) -> Vec<serde_json::Value> {
        self.monthly_table.borrow().clone()
    }

    pub fn set_monthly_table(&self, rows: Vec<serde_json::Value>) {
        *self.monthly_table.borrow_mut() = rows;
    }

    pub fn get_monthly_table_loading(&self) -> bool {
        *self.monthly_table_loading.borrow()
    }

    pub fn set_monthly_table_loading(&self, loading: bool) {
        *self.monthly_table_loading.borrow_mut() = loading;
    }

    pub fn get_synthese_loaded(&self) -> bool {
        *self.synthese_loaded.borrow()
    }

    pub fn set_synthese_loaded(&self, loaded: bool) {
        *self.synthese_loaded.borrow_mut() = loaded;
    }
}
