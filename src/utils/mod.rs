// Utils compartidos

pub mod constants;
pub mod format;
pub mod html;
pub mod input;

pub use constants::*;
pub use format::*;
pub use html::*;
pub use input::*;
