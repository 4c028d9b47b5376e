use clap::Parser;
use tracing_subscriber::EnvFilter;

mod commands;
mod handlers;
mod output;

fn main() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let cli = commands::Cli::parse();
    if let Err(err) = handlers::handle_command(cli) {
        output::print_error(&err.to_string());
        std::process::exit(1);
    }
}
