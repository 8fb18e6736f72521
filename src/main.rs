use clap::Parser;
use rule_drills::utils::logger;
use rule_drills::{app, Cli, ConsoleWriter};

fn main() {
    let cli = Cli::parse();

    if cli.log_json {
        logger::init_json_logger(cli.verbose);
    } else {
        logger::init_cli_logger(cli.verbose);
    }
    tracing::debug!("CLI args: {:?}", cli);

    if let Err(e) = app::run(&cli, &mut ConsoleWriter::new()) {
        tracing::error!("❌ {} (suggestion: {})", e, e.recovery_suggestion());
        eprintln!("❌ {}", e.user_friendly_message());
        eprintln!("💡 {}", e.recovery_suggestion());
        std::process::exit(e.exit_code());
    }
}
