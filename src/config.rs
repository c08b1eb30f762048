/// Parámetros de la página, fijados en tiempo de compilación
#[derive(Debug, Clone, PartialEq)]
pub struct UiConfig {
    pub currency_symbol: String,
    pub alert_dismiss_ms: u32,
    pub card_stagger_ms: u32,
    pub pickup_lead_minutes: i64,
    pub low_stock_threshold: i32,
    pub toast_z_index: u32,
    pub enable_logging: bool,
    pub log_level: String,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            currency_symbol: "£".to_string(),
            alert_dismiss_ms: 5000,
            card_stagger_ms: 100,
            pickup_lead_minutes: 60,
            low_stock_threshold: 10,
            toast_z_index: 9999,
            enable_logging: true,
            log_level: "info".to_string(),
        }
    }
}

impl UiConfig {
    /// Carga la configuración desde variables de entorno en tiempo de compilación
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            currency_symbol: option_env!("CURRENCY_SYMBOL")
                .map(|s| s.to_string())
                .unwrap_or(defaults.currency_symbol),
            alert_dismiss_ms: option_env!("ALERT_DISMISS_MS")
                .and_then(|v| v.parse().ok())
                .unwrap_or(defaults.alert_dismiss_ms),
            card_stagger_ms: option_env!("CARD_STAGGER_MS")
                .and_then(|v| v.parse().ok())
                .unwrap_or(defaults.card_stagger_ms),
            pickup_lead_minutes: option_env!("PICKUP_LEAD_MINUTES")
                .and_then(|v| v.parse().ok())
                .unwrap_or(defaults.pickup_lead_minutes),
            low_stock_threshold: option_env!("LOW_STOCK_THRESHOLD")
                .and_then(|v| v.parse().ok())
                .unwrap_or(defaults.low_stock_threshold),
            toast_z_index: option_env!("TOAST_Z_INDEX")
                .and_then(|v| v.parse().ok())
                .unwrap_or(defaults.toast_z_index),
            enable_logging: option_env!("ENABLE_LOGGING")
                .and_then(|v| v.parse().ok())
                .unwrap_or(defaults.enable_logging),
            log_level: option_env!("LOG_LEVEL")
                .map(|s| s.to_string())
                .unwrap_or(defaults.log_level),
        }
    }

    /// Nivel efectivo para wasm_logger
    pub fn log_level(&self) -> log::Level {
        if !self.enable_logging {
            return log::Level::Warn;
        }
        match self.log_level.to_ascii_lowercase().as_str() {
            "error" => log::Level::Error,
            "warn" => log::Level::Warn,
            "debug" => log::Level::Debug,
            "trace" => log::Level::Trace,
            _ => log::Level::Info,
        }
    }

    /// Margen mínimo entre ahora y la hora de recogida
    pub fn pickup_lead(&self) -> chrono::Duration {
        chrono::Duration::minutes(self.pickup_lead_minutes)
    }
}

// Configuración global estática
lazy_static::lazy_static! {
    pub static ref CONFIG: UiConfig = UiConfig::from_env();
}
