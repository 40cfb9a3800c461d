use hmscalc::config::ConfigWarning;

pub fn print_config_warnings(warnings: &[ConfigWarning]) {
    for w in warnings {
        eprint!("{}", format_config_warning(w));
    }
}

fn format_config_warning(warning: &ConfigWarning) -> String {
    match warning {
        ConfigWarning::UnknownKey {
            key,
            file,
            line,
            suggestion,
        } => {
            let location = match line {
                Some(line) => format!("{}:{}", file.display(), line),
                None => file.display().to_string(),
            };
            let mut text = format!("⚠ Unknown config key '{}' in {}\n", key, location);
            if let Some(suggestion) = suggestion {
                text.push_str(&format!("   Did you mean '{}'?\n\n", suggestion));
            }
            text
        }
        ConfigWarning::Skipped { file, reason } => {
            format!("⚠ Ignoring config file {}: {}\n", file.display(), reason.trim_end())
        }
    }
}
