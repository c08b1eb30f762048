pub mod loading;
pub mod print_token;
pub mod toast;

pub use loading::{render_idle, render_loading};
pub use print_token::render_token_document;
pub use toast::{ensure_toast_container, render_toast};
