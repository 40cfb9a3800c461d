use hmscalc::HmsError;

fn hint(err: &HmsError) -> Option<&'static str> {
    match err {
        HmsError::InvalidTimeFormat { .. } => {
            Some("Times are written [-]H:MM[:SS], e.g. 1:30, 12:05:09 or -0:45.")
        }
        HmsError::NotHmsTime { .. } => {
            Some("Quote each time as a string, e.g. [\"1:30\", \"0:45\"].")
        }
        HmsError::NotIterable { .. } => {
            Some("'sum --from-json' expects a JSON array of time strings.")
        }
        HmsError::Overflow { .. } => {
            Some("Results must stay within about 2.5 quadrillion hours either side of zero.")
        }
        HmsError::NotTimeString { .. } => None,
        HmsError::InvalidConfig { .. } => Some("Run 'hmscalc explain' to see the config keys."),
        HmsError::ConfigRead(_) => None,
    }
}

pub fn format_error(err: &anyhow::Error) -> String {
    let Some(hms) = err.downcast_ref::<HmsError>() else {
        return format!("[ERROR] {:#}\n", err);
    };

    match hint(hms) {
        Some(hint) => format!("[ERROR] {:#}\n  {}\n", err, hint),
        None => format!("[ERROR] {:#}\n", err),
    }
}

pub fn print_error(err: &anyhow::Error, json: bool) {
    if json {
        let output = serde_json::json!({
            "event": "error",
            "message": format!("{:#}", err),
            "kind": err.downcast_ref::<HmsError>().map(error_kind),
        });
        let _ = crate::ui::json::emit(output);
        return;
    }

    eprint!("{}", format_error(err));
}

/// Stable machine-readable name for an error variant
pub fn error_kind(err: &HmsError) -> &'static str {
    match err {
        HmsError::NotTimeString { .. } => "not_time_string",
        HmsError::InvalidTimeFormat { .. } => "invalid_time_format",
        HmsError::NotIterable { .. } => "not_iterable",
        HmsError::NotHmsTime { .. } => "not_hms_time",
        HmsError::Overflow { .. } => "overflow",
        HmsError::ConfigRead(_) => "config_read",
        HmsError::InvalidConfig { .. } => "invalid_config",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn format_error_adds_grammar_hint() {
        let err = anyhow::Error::new(HmsError::InvalidTimeFormat {
            input: "1h".to_string(),
        });
        let text = format_error(&err);
        assert!(text.starts_with("[ERROR] invalid time format: '1h'\n"));
        assert!(text.contains("[-]H:MM[:SS]"));
    }

    #[test]
    fn format_error_plain_for_foreign_errors() {
        let err = anyhow::anyhow!("boom");
        assert_eq!(format_error(&err), "[ERROR] boom\n");
    }

    #[test]
    fn error_kind_names() {
        let err = HmsError::NotHmsTime {
            index: 0,
            type_name: "null".to_string(),
        };
        assert_eq!(error_kind(&err), "not_hms_time");

        let err = HmsError::Overflow {
            expression: "a + b".to_string(),
        };
        assert_eq!(error_kind(&err), "overflow");
    }

    #[test]
    fn format_error_adds_overflow_hint() {
        let err = anyhow::Error::new(HmsError::Overflow {
            expression: "a + b".to_string(),
        });
        let text = format_error(&err);
        assert!(text.starts_with("[ERROR] time arithmetic overflowed: a + b\n"));
        assert!(text.contains("quadrillion hours"), "got {text}");
    }
}
