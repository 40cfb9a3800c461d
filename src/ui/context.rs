use hmscalc::config::Config;

/// Output settings resolved from CLI flags and config
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UiContext {
    pub json: bool,
    pub verbose: u8,
    pub precision: usize,
}

impl UiContext {
    /// `--json` forces JSON; otherwise the config decides.
    pub fn new(cli_json: bool, verbose: u8, config: &Config) -> Self {
        Self {
            json: cli_json || config.output.json,
            verbose,
            precision: config.output.precision,
        }
    }

    /// Print a diagnostic to stderr when running with at least `level` `-v` flags.
    pub fn debug(&self, level: u8, message: impl std::fmt::Display) {
        if self.verbose >= level && !self.json {
            eprintln!("[debug] {message}");
        }
    }
}
