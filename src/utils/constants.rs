// ============================================================================
// CONSTANTES - Selectores y clases que comparte el markup de la cantina
// ============================================================================

/// Elementos que reciben tooltip de Bootstrap
pub const TOOLTIP_SELECTOR: &str = "[data-bs-toggle=\"tooltip\"]";

/// Banners de alerta
pub const ALERT_SELECTOR: &str = ".alert";

/// Alertas que nunca se cierran solas
pub const ALERT_PERMANENT_CLASS: &str = "alert-permanent";

/// Inputs de hora de recogida
pub const PICKUP_INPUT_SELECTOR: &str = "input[type=\"datetime-local\"]";

pub const CARD_SELECTOR: &str = ".card";
pub const CARD_FADE_IN_CLASS: &str = "fade-in";

/// Atributo que identifica el plato al que pertenece un bloque de stock
pub const MEAL_ID_ATTRIBUTE: &str = "data-meal-id";
pub const MEAL_SELECTOR: &str = "[data-meal-id]";
pub const STOCK_BADGE_SELECTOR: &str = ".stock-badge";

// Toasts
pub const TOAST_CONTAINER_ID: &str = "toast-container";
pub const TOAST_CONTAINER_CLASS: &str = "toast-container position-fixed top-0 end-0 p-3";
pub const TOAST_HIDDEN_EVENT: &str = "hidden.bs.toast";

// Loading
pub const SPINNER_CLASS: &str = "spinner";
pub const DEFAULT_LOADING_TEXT: &str = "Loading...";

// Formulario de reserva
pub const PICKUP_TIME_FIELD: &str = "pickup_time";
pub const QUANTITY_FIELD: &str = "quantity";

pub const DEFAULT_DELETE_MESSAGE: &str = "Are you sure you want to delete this?";

/// Ventana de impresión del token
pub const PRINT_WINDOW_FEATURES: &str = "width=400,height=300";
