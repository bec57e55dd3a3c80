// Utils compartidos

pub mod constants;
pub mod format;
pub mod storage;

pub use constants::*;
pub use format::{fmt_cfa, fmt_percent};
pub use storage::{load_string, remove_key, save_string};
