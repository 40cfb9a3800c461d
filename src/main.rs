//! hmscalc CLI - hours:minutes:seconds calculator
//!
//! Usage: hmscalc <COMMAND>
//!
//! Commands:
//!   add      Add two times
//!   sub      Subtract the second time from the first
//!   sum      Sum any number of times
//!   convert  Convert a time to other units
//!   compare  Compare two times
//!   explain  Explain the time format and commands

use anyhow::Result;
use clap::Parser;
use hmscalc::{Config, ConvertUnit};

mod cli;
mod commands;
mod ui;

use cli::{Cli, Commands};
use ui::context::UiContext;

fn main() {
    let cli = Cli::parse();

    let (config, warnings) = match Config::discover(cli.config.as_deref()) {
        Ok(loaded) => loaded,
        Err(err) => {
            ui::error::print_error(&anyhow::Error::new(err), cli.json);
            std::process::exit(1);
        }
    };

    let ctx = UiContext::new(cli.json, cli.verbose, &config);
    if !ctx.json {
        ui::output::print_config_warnings(&warnings);
    }
    ctx.debug(2, format_args!("config: {config:?}"));

    if let Err(err) = dispatch(cli.command, &ctx, config.convert.unit) {
        ui::error::print_error(&err, ctx.json);
        std::process::exit(1);
    }
}

fn dispatch(command: Commands, ui: &UiContext, default_unit: ConvertUnit) -> Result<()> {
    match command {
        Commands::Add { left, right } => commands::calc::cmd_add(&left, &right, ui),
        Commands::Sub { left, right } => commands::calc::cmd_sub(&left, &right, ui),
        Commands::Sum { times, from_json } => commands::calc::cmd_sum(&times, from_json, ui),
        Commands::Convert { time, unit } => {
            commands::convert::cmd_convert(&time, unit.unwrap_or(default_unit), ui)
        }
        Commands::Compare { left, right } => commands::calc::cmd_compare(&left, &right, ui),
        Commands::Explain { brief } => commands::explain::cmd_explain(brief, ui),
    }
}
