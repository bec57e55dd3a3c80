use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    pub backend_url: String,
    pub enable_logging: bool,
    /// Meses a retroceder para el período por defecto del dashboard.
    /// Los datos del mes corriente pueden no estar consolidados en el
    /// backend; retroceder evita pedir un período vacío.
    pub period_offset_months: u32,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            backend_url: "http://localhost:3000".to_string(),
            enable_logging: true,
            period_offset_months: 2,
        }
    }
}

impl AppConfig {
    /// Carga la configuración desde variables de entorno en tiempo de
    /// compilación (inyectadas por build.rs desde .env)
    pub fn from_env() -> Self {
        Self {
            backend_url: option_env!("BACKEND_URL")
                .unwrap_or("http://localhost:3000")
                .to_string(),
            enable_logging: option_env!("ENABLE_LOGGING")
                .unwrap_or("true")
                .parse()
                .unwrap_or(true),
            period_offset_months: option_env!("PERIOD_OFFSET_MONTHS")
                .unwrap_or("2")
                .parse()
                .unwrap_or(2),
        }
    }

    pub fn backend_url(&self) -> &str {
        &self.backend_url
    }

    pub fn is_logging_enabled(&self) -> bool {
        self.enable_logging
    }
}

// Configuración global estática
lazy_static::lazy_static! {
    pub static ref CONFIG: AppConfig = AppConfig::from_env();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_por_defecto() {
        let config = AppConfig::default();
        assert_eq!(config.period_offset_months, 2);
        assert!(config.is_logging_enabled());
    }
}
