// ============================================================================
// STOCK - Severidad del badge de stock de un plato
// ============================================================================

/// Severidad visual del stock. Se recalcula siempre desde el valor actual,
/// así que un plato repuesto vuelve a `Success`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StockSeverity {
    Danger,
    Warning,
    Success,
}

impl StockSeverity {
    pub const ALL: [StockSeverity; 3] = [
        StockSeverity::Danger,
        StockSeverity::Warning,
        StockSeverity::Success,
    ];

    pub fn from_stock_with_threshold(stock: i32, low_threshold: i32) -> Self {
        if stock <= 0 {
            StockSeverity::Danger
        } else if stock < low_threshold {
            StockSeverity::Warning
        } else {
            StockSeverity::Success
        }
    }

    /// Clase de Bootstrap del badge
    pub fn class(self) -> &'static str {
        match self {
            StockSeverity::Danger => "bg-danger",
            StockSeverity::Warning => "bg-warning",
            StockSeverity::Success => "bg-success",
        }
    }
}
