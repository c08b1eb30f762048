use std::fmt;
use std::str::FromStr;

/// Categorías contextuales de Bootstrap para el fondo del toast
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ToastKind {
    Primary,
    Secondary,
    Success,
    Danger,
    Warning,
    #[default]
    Info,
    Light,
    Dark,
}

impl ToastKind {
    pub fn as_str(self) -> &'static str {
        match self {
            ToastKind::Primary => "primary",
            ToastKind::Secondary => "secondary",
            ToastKind::Success => "success",
            ToastKind::Danger => "danger",
            ToastKind::Warning => "warning",
            ToastKind::Info => "info",
            ToastKind::Light => "light",
            ToastKind::Dark => "dark",
        }
    }

    /// Como `from_str`, pero una palabra desconocida cae en `Info`
    pub fn parse_lenient(keyword: &str) -> Self {
        keyword.parse().unwrap_or_else(|_| {
            log::warn!("⚠️ [TOAST] Tipo desconocido '{}', usando info", keyword);
            ToastKind::Info
        })
    }

    /// Clases del elemento toast
    pub fn class_name(self) -> String {
        format!(
            "toast align-items-center text-white bg-{} border-0",
            self.as_str()
        )
    }
}

impl FromStr for ToastKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "primary" => Ok(ToastKind::Primary),
            "secondary" => Ok(ToastKind::Secondary),
            "success" => Ok(ToastKind::Success),
            "danger" => Ok(ToastKind::Danger),
            "warning" => Ok(ToastKind::Warning),
            "info" => Ok(ToastKind::Info),
            "light" => Ok(ToastKind::Light),
            "dark" => Ok(ToastKind::Dark),
            other => Err(format!("unknown toast type: {}", other)),
        }
    }
}

impl fmt::Display for ToastKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
