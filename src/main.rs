// src/main.rs
//
// Calculatrice BBP : point d’entrée CLI
// -------------------------------------
// - Traces (tracing) sur stderr, filtrées par RUST_LOG
// - stdout ne porte que les résultats

use clap::Parser;
use tracing_subscriber::EnvFilter;

mod app;

use app::Options;

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("calculatrice_bbp=info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let options = Options::parse();
    app::executer(&options)
}
