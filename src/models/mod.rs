pub mod dashboard;
pub mod session;

pub use dashboard::{
    ClassesResponse, EtatStockItem, EtatStockShareResponse, Filtre, KpiSummary, KpisResponse,
    MovementHistItem, MovementHistResponse, Tab, TableauMensuelResponse,
};
pub use session::{Role, Session};
