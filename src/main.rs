use clap::Parser;
use therapy_catalog::cli::{
    handle_add, handle_delete, handle_edit, handle_get, handle_init, handle_list, handle_options,
    handle_search, handle_stats, handle_toggle, Cli, Commands,
};
use tracing_subscriber::EnvFilter;

/// Logs go to stderr so command output stays machine-readable.
fn init_tracing(log_level: &str) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(log_level));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}

fn main() {
    let cli = Cli::parse();
    init_tracing(&cli.log_level);

    let role = cli.role;
    let result = match cli.command {
        Commands::Init => handle_init(),
        Commands::List {
            search,
            status,
            json,
        } => handle_list(role, search, status, json),
        Commands::Search { query, json } => handle_search(role, query, json),
        Commands::Get { id, json } => handle_get(role, id, json),
        Commands::Add(args) => handle_add(role, args),
        Commands::Edit(args) => handle_edit(role, args),
        Commands::Delete { id, force } => handle_delete(role, id, force),
        Commands::Toggle { id, json } => handle_toggle(role, id, json),
        Commands::Stats { json } => handle_stats(role, json),
        Commands::Options => handle_options(),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
