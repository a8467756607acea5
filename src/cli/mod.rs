mod commands;
mod handlers;

pub use commands::{AddArgs, Cli, Commands, EditArgs, FieldArgs};
pub use handlers::{
    handle_add, handle_delete, handle_edit, handle_get, handle_init, handle_list,
    handle_options, handle_search, handle_stats, handle_toggle,
};
