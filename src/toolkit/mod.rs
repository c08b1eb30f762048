// ============================================================================
// TOOLKIT - Colaboradores externos inyectados en la página
// ============================================================================

pub mod traits;
pub mod bootstrap_ffi;
pub mod browser;

pub use traits::*;
pub use browser::*;
