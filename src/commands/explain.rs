use anyhow::Result;

use crate::ui::context::UiContext;

pub fn cmd_explain(brief: bool, ui: &UiContext) -> Result<()> {
    if ui.json {
        crate::ui::json::emit(serde_json::json!({
            "event": "result",
            "command": "explain",
            "data": {
                "name": "hmscalc",
                "version": env!("CARGO_PKG_VERSION"),
                "purpose": "Hours:minutes:seconds calculator",
                "format": "[-]H:MM[:SS]",
                "commands": {
                    "hmscalc add A B": "Print A + B",
                    "hmscalc sub A B": "Print A - B",
                    "hmscalc sum [T...]": "Print the total (stdin if no times given)",
                    "hmscalc sum --from-json": "Print the total of a JSON array of time strings on stdin",
                    "hmscalc convert T [--unit U]": "Print T in seconds, minutes, hours, tuple, map or all",
                    "hmscalc compare A B": "Print <, = or >"
                },
                "config": {
                    "output.json": "Emit NDJSON by default (HMSCALC_JSON)",
                    "output.precision": "Decimal places for minutes/hours (HMSCALC_PRECISION)",
                    "convert.unit": "Default unit for convert (HMSCALC_UNIT)"
                }
            }
        }))?;
        return Ok(());
    }

    println!("hmscalc v{}", env!("CARGO_PKG_VERSION"));
    println!("Hours:minutes:seconds calculator.\n");

    if brief {
        println!("FORMAT: [-]H:MM[:SS]");
        println!("COMMANDS: add, sub, sum, convert, compare");
        return Ok(());
    }

    println!("TIME FORMAT:");
    println!("  [-]H:MM[:SS]     e.g. 1:30, 12:05:09, -0:45");
    println!("  Hours have no upper bound. Minutes and seconds take one or two digits");
    println!("  and are not range checked: 1:99:99 is 2:40:39.");
    println!("  Output is always H:MM:SS with a leading '-' for negative times.\n");

    println!("COMMANDS:");
    println!("  hmscalc add A B                Print A + B");
    println!("  hmscalc sub A B                Print A - B");
    println!("  hmscalc sum [T...]             Print the total (one time per line on stdin if none given)");
    println!("  hmscalc sum --from-json        Print the total of a JSON array of times on stdin");
    println!("  hmscalc convert T [--unit U]   seconds | minutes | hours | tuple | map | all");
    println!("  hmscalc compare A B            Print <, = or >\n");

    println!("CONFIG (./hmscalc.toml or ~/.config/hmscalc/config.toml):");
    println!("  [output]");
    println!("  json = false        # HMSCALC_JSON");
    println!("  precision = 4       # HMSCALC_PRECISION");
    println!("  [convert]");
    println!("  unit = \"all\"        # HMSCALC_UNIT");

    Ok(())
}
