//! Console status reporter

use colored::Colorize;
use fixcore_application::Reporter;
use fixcore_domain::{StatusEvent, StatusKind};

const LOGO: &str = r#"
  _____ _       ____
 |  ___(_)_  __/ ___|___  _ __ ___
 | |_  | \ \/ / |   / _ \| '__/ _ \
 |  _| | |>  <| |__| (_) | | |  __/
 |_|   |_/_/\_\\____\___/|_|  \___|
"#;

/// Writes status events to the terminal
///
/// Errors go to stderr, everything else to stdout.
pub struct ConsoleReporter {
    quiet: bool,
}

impl ConsoleReporter {
    pub fn new() -> Self {
        Self { quiet: false }
    }

    /// Drop informational events
    pub fn quiet(mut self, quiet: bool) -> Self {
        self.quiet = quiet;
        self
    }

    /// Render one event as a single (possibly multi-line) string
    pub fn format(event: &StatusEvent) -> String {
        let marker = match event.kind {
            StatusKind::Info => "->".cyan().bold(),
            StatusKind::Success => "v".green().bold(),
            StatusKind::Warning => "!".yellow().bold(),
            StatusKind::Error => "x".red().bold(),
        };
        format!("{} {}", marker, event.message)
    }

    fn shows(&self, kind: StatusKind) -> bool {
        !(self.quiet && kind == StatusKind::Info)
    }
}

impl Default for ConsoleReporter {
    fn default() -> Self {
        Self::new()
    }
}

impl Reporter for ConsoleReporter {
    fn report(&self, event: &StatusEvent) {
        if !self.shows(event.kind) {
            return;
        }

        let line = Self::format(event);
        match event.kind {
            StatusKind::Error => eprintln!("{}", line),
            _ => println!("{}", line),
        }
    }
}

/// Startup banner with the package version
pub fn banner(version: &str) -> String {
    format!(
        "{}\n{}\n",
        LOGO.green().bold(),
        format!("Pipeline to fix pangenome based alignments (version {version})").bold()
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn plain() {
        colored::control::set_override(false);
    }

    #[test]
    fn test_format_markers() {
        plain();
        assert_eq!(
            ConsoleReporter::format(&StatusEvent::info("Checking input arguments...")),
            "-> Checking input arguments..."
        );
        assert_eq!(
            ConsoleReporter::format(&StatusEvent::success("snakemake 8.20.5 found")),
            "v snakemake 8.20.5 found"
        );
        assert_eq!(
            ConsoleReporter::format(&StatusEvent::warning("falling back to conda")),
            "! falling back to conda"
        );
        assert_eq!(
            ConsoleReporter::format(&StatusEvent::error("mamba or conda not found")),
            "x mamba or conda not found"
        );
    }

    #[test]
    fn test_quiet_drops_info_only() {
        let reporter = ConsoleReporter::new().quiet(true);
        assert!(!reporter.shows(StatusKind::Info));
        assert!(reporter.shows(StatusKind::Success));
        assert!(reporter.shows(StatusKind::Warning));
        assert!(reporter.shows(StatusKind::Error));
        assert!(ConsoleReporter::default().shows(StatusKind::Info));
    }

    #[test]
    fn test_banner_names_version() {
        plain();
        let text = banner("1.0.0");
        assert!(text.contains("Pipeline to fix pangenome based alignments (version 1.0.0)"));
    }
}
