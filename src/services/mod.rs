pub mod api_client;
pub mod session_service;

pub use api_client::ApiClient;
pub use session_service::{clear_session, save_session, LocalStorageSessionProvider, SessionProvider};
