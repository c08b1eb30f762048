// ============================================================================
// MODELS - Valores puros, sin DOM
// ============================================================================

pub mod filter;
pub mod reservation;
pub mod stock;
pub mod toast;

pub use reservation::ReservationInput;
pub use stock::StockSeverity;
pub use toast::ToastKind;
