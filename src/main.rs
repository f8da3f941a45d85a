mod checks;
mod commands;
mod core;
mod ui;
mod utils;

use crate::core::error::{PreflightError, print_error};
use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Verify a project is ready to deploy: env file, TLS material, Docker artifacts, security headers
#[derive(Parser)]
#[command(name = "deploy-preflight")]
#[command(version, about, long_about = None)]
#[command(styles = get_styles())]
struct Cli {
  #[command(subcommand)]
  command: Option<Commands>,

  /// Project directory to inspect or initialize (default: current directory)
  #[arg(long, global = true)]
  dir: Option<PathBuf>,

  /// Checklist configuration file (default: preflight.toml in the project directory, if present)
  #[arg(long)]
  config: Option<PathBuf>,

  /// List the registered checks in run order and exit
  #[arg(long, conflicts_with_all = ["dir", "config"])]
  list_checks: bool,
}

#[derive(Subcommand)]
enum Commands {
  /// Write the built-in checklist tables to preflight.toml
  Init {
    /// Overwrite an existing preflight.toml
    #[arg(long)]
    force: bool,
  },
}

fn get_styles() -> clap::builder::Styles {
  clap::builder::Styles::styled()
    .usage(
      anstyle::Style::new()
        .bold()
        .underline()
        .fg_color(Some(anstyle::Color::Ansi(anstyle::AnsiColor::Yellow))),
    )
    .header(
      anstyle::Style::new()
        .bold()
        .underline()
        .fg_color(Some(anstyle::Color::Ansi(anstyle::AnsiColor::Yellow))),
    )
    .literal(anstyle::Style::new().fg_color(Some(anstyle::Color::Ansi(anstyle::AnsiColor::Green))))
    .invalid(
      anstyle::Style::new()
        .bold()
        .fg_color(Some(anstyle::Color::Ansi(anstyle::AnsiColor::Red))),
    )
    .error(
      anstyle::Style::new()
        .bold()
        .fg_color(Some(anstyle::Color::Ansi(anstyle::AnsiColor::Red))),
    )
    .valid(
      anstyle::Style::new()
        .bold()
        .underline()
        .fg_color(Some(anstyle::Color::Ansi(anstyle::AnsiColor::Green))),
    )
    .placeholder(anstyle::Style::new().fg_color(Some(anstyle::Color::Ansi(anstyle::AnsiColor::White))))
}

fn main() {
  let cli = Cli::parse();

  let outcome = match cli.command {
    Some(Commands::Init { .. }) if cli.config.is_some() || cli.list_checks => Err(PreflightError::with_help(
      "init cannot be combined with --config or --list-checks",
      "init always writes preflight.toml into the project directory; pass --dir to choose it",
    )),
    Some(Commands::Init { force }) => commands::run_init(cli.dir, force),
    None if cli.list_checks => commands::run_list_checks(),
    None => commands::run_preflight(cli.dir, cli.config),
  };

  match outcome {
    Ok(code) => std::process::exit(code.as_i32()),
    Err(err) => {
      print_error(&err);
      std::process::exit(err.exit_code().as_i32());
    }
  }
}
