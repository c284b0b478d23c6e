use clap::error::ErrorKind;
use clap::{CommandFactory, Parser};
use reqstat_core::cli::{ReportArgs, run_report};
use reqstat_core::logging::{default_log_format, init_logging};

#[derive(Parser, Debug)]
#[command(
    name = "reqstat",
    version,
    about = "reqstat: per-endpoint response time report from JSON log files"
)]
struct Cli {
    #[command(flatten)]
    args: ReportArgs,
}

fn parse_cli() -> Cli {
    match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) if matches!(e.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) => e.exit(),
        Err(e) => {
            eprintln!("Invalid parameters");
            eprintln!("{e}");
            eprintln!("{}", Cli::command().render_help());
            std::process::exit(1);
        }
    }
}

fn main() {
    let cli = parse_cli();

    init_logging(cli.args.log_format.unwrap_or_else(default_log_format));

    if let Err(e) = run_report(cli.args) {
        eprintln!("error: {e:#}");
        std::process::exit(1);
    }
}
