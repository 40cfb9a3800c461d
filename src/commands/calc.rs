//! `add`, `sub`, `sum` and `compare`

use std::cmp::Ordering;
use std::io::{BufRead, Read};

use anyhow::{Context, Result};
use hmscalc::HmsTime;

use crate::ui::context::UiContext;

pub fn cmd_add(left: &str, right: &str, ui: &UiContext) -> Result<()> {
    let (left, right) = (HmsTime::parse(left)?, HmsTime::parse(right)?);
    ui.debug(
        1,
        format_args!("{left} ({}s) + {right} ({}s)", left.to_seconds(), right.to_seconds()),
    );
    print_time("add", left.checked_add(right)?, ui)
}

pub fn cmd_sub(left: &str, right: &str, ui: &UiContext) -> Result<()> {
    let (left, right) = (HmsTime::parse(left)?, HmsTime::parse(right)?);
    ui.debug(
        1,
        format_args!("{left} ({}s) - {right} ({}s)", left.to_seconds(), right.to_seconds()),
    );
    print_time("sub", left.checked_sub(right)?, ui)
}

pub fn cmd_sum(times: &[String], from_json: bool, ui: &UiContext) -> Result<()> {
    if from_json {
        let total = sum_json(std::io::stdin().lock(), ui)?;
        return print_time("sum", total, ui);
    }

    let inputs = if times.is_empty() {
        ui.debug(1, "no times given, reading stdin");
        read_lines(std::io::stdin().lock())?
    } else {
        times.to_vec()
    };

    let total = sum_inputs(&inputs, ui)?;
    print_time("sum", total, ui)
}

pub fn cmd_compare(left: &str, right: &str, ui: &UiContext) -> Result<()> {
    let (left, right) = (HmsTime::parse(left)?, HmsTime::parse(right)?);
    let ordering = left.cmp(&right);

    if ui.json {
        crate::ui::json::emit(serde_json::json!({
            "event": "result",
            "command": "compare",
            "left": left,
            "right": right,
            "ordering": ordering_name(ordering),
            "symbol": ordering_symbol(ordering),
        }))?;
    } else {
        println!("{}", ordering_symbol(ordering));
    }

    Ok(())
}

/// Non-blank lines, trimmed
pub(crate) fn read_lines(reader: impl BufRead) -> Result<Vec<String>> {
    let mut lines = Vec::new();
    for line in reader.lines() {
        let line = line?;
        let line = line.trim();
        if !line.is_empty() {
            lines.push(line.to_string());
        }
    }
    Ok(lines)
}

/// Sum a JSON array of time strings read from `reader`
pub(crate) fn sum_json(reader: impl Read, ui: &UiContext) -> Result<HmsTime> {
    let value: serde_json::Value =
        serde_json::from_reader(reader).context("stdin is not valid JSON")?;
    ui.debug(1, format_args!("summing JSON {}", hmscalc::value::type_name(&value)));
    Ok(HmsTime::sum_value(&value)?)
}

pub(crate) fn sum_inputs(inputs: &[String], ui: &UiContext) -> Result<HmsTime> {
    let times = inputs
        .iter()
        .map(|s| HmsTime::parse(s))
        .collect::<Result<Vec<_>, _>>()?;

    for (i, time) in times.iter().enumerate() {
        ui.debug(2, format_args!("term {}: {time}", i + 1));
    }
    ui.debug(1, format_args!("summing {} time(s)", times.len()));

    Ok(HmsTime::checked_sum(&times)?)
}

fn print_time(command: &str, time: HmsTime, ui: &UiContext) -> Result<()> {
    if ui.json {
        crate::ui::json::emit(serde_json::json!({
            "event": "result",
            "command": command,
            "value": time,
            "seconds": time.to_seconds(),
        }))?;
    } else {
        println!("{time}");
    }
    Ok(())
}

fn ordering_name(ordering: Ordering) -> &'static str {
    match ordering {
        Ordering::Less => "less",
        Ordering::Equal => "equal",
        Ordering::Greater => "greater",
    }
}

fn ordering_symbol(ordering: Ordering) -> &'static str {
    match ordering {
        Ordering::Less => "<",
        Ordering::Equal => "=",
        Ordering::Greater => ">",
    }
}
