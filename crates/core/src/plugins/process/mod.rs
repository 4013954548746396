mod config_state;
mod message_processor;
mod parent_process_checker;
mod shared_types;

pub use config_state::*;
pub use message_processor::*;
pub use parent_process_checker::*;
pub use shared_types::*;
