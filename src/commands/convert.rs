//! `convert`: print a time in other units

use anyhow::Result;
use hmscalc::{ConvertUnit, HmsTime};

use crate::ui::context::UiContext;

pub fn cmd_convert(time: &str, unit: ConvertUnit, ui: &UiContext) -> Result<()> {
    let time = HmsTime::parse(time)?;
    ui.debug(1, format_args!("converting {time} to {unit}"));

    if ui.json {
        crate::ui::json::emit(convert_json(time, unit))?;
    } else {
        println!("{}", render_text(time, unit, ui.precision));
    }

    Ok(())
}

/// Text rendering; `All` lists every unit, one per line.
pub(crate) fn render_text(time: HmsTime, unit: ConvertUnit, precision: usize) -> String {
    match unit {
        ConvertUnit::Seconds => time.to_seconds().to_string(),
        ConvertUnit::Minutes => format!("{:.precision$}", time.to_minutes()),
        ConvertUnit::Hours => format!("{:.precision$}", time.to_hours()),
        ConvertUnit::Tuple => format!("{:?}", time.to_tuple()),
        ConvertUnit::Map => {
            let c = time.to_components();
            format!("hh={} mm={} ss={}", c.hh, c.mm, c.ss)
        }
        ConvertUnit::All => [
            ("time", time.to_string()),
            ("seconds", render_text(time, ConvertUnit::Seconds, precision)),
            ("minutes", render_text(time, ConvertUnit::Minutes, precision)),
            ("hours", render_text(time, ConvertUnit::Hours, precision)),
            ("tuple", render_text(time, ConvertUnit::Tuple, precision)),
            ("map", render_text(time, ConvertUnit::Map, precision)),
        ]
        .iter()
        .map(|(label, value)| format!("{:<8} {}", format!("{label}:"), value))
        .collect::<Vec<_>>()
        .join("\n"),
    }
}

pub(crate) fn convert_json(time: HmsTime, unit: ConvertUnit) -> serde_json::Value {
    let mut event = serde_json::json!({
        "event": "result",
        "command": "convert",
        "value": time,
        "unit": unit,
    });

    let wants = |u: ConvertUnit| unit == u || unit == ConvertUnit::All;
    if wants(ConvertUnit::Seconds) {
        event["seconds"] = time.to_seconds().into();
    }
    if wants(ConvertUnit::Minutes) {
        event["minutes"] = time.to_minutes().into();
    }
    if wants(ConvertUnit::Hours) {
        event["hours"] = time.to_hours().into();
    }
    if wants(ConvertUnit::Tuple) {
        let (hh, mm, ss) = time.to_tuple();
        event["tuple"] = serde_json::json!([hh, mm, ss]);
    }
    if wants(ConvertUnit::Map) {
        event["map"] = serde_json::json!(time.to_components());
    }

    event
}
