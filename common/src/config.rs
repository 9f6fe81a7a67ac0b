pub struct Config {
    /// Quiet level. Anything above zero hides headers and clamp notes.
    pub quiet: u8,

    /// Verbosity requested with `-v`, mapped to a log level by the CLI.
    pub verbose: u8,

    /// Emit machine-readable JSON instead of plain lines.
    pub json: bool,
}

impl Config {
    /// Default tracing directive for the requested verbosity.
    ///
    /// Only used when `RUST_LOG` is not set.
    pub fn log_directive(&self) -> &'static str {
        match self.verbose {
            0 => "info",
            1 => "debug",
            _ => "trace",
        }
    }

    /// Quiet level used for headers. JSON output never gets headers.
    pub fn header_q_level(&self) -> u8 {
        if self.json { self.quiet.max(1) } else { self.quiet }
    }
}
