mod plugin_handler;
mod plugin_info;

pub mod process;

pub use plugin_handler::*;
pub use plugin_info::*;
