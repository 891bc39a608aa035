//! Invocation command value object

use super::config_key::ConfigKey;
use serde::Serialize;
use std::path::{Path, PathBuf};

/// An external engine call: program, argument vector and working directory
///
/// Executed once as an argument vector, never through a shell.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct InvocationCommand {
    program: String,
    args: Vec<String>,
    working_dir: PathBuf,
}

impl InvocationCommand {
    pub fn new(program: impl Into<String>, args: Vec<String>, working_dir: impl Into<PathBuf>) -> Self {
        Self {
            program: program.into(),
            args,
            working_dir: working_dir.into(),
        }
    }

    pub fn program(&self) -> &str {
        &self.program
    }

    pub fn args(&self) -> &[String] {
        &self.args
    }

    pub fn working_dir(&self) -> &Path {
        &self.working_dir
    }

    /// Value of a `KEY=value` pair in the config block, if present
    pub fn config_value(&self, key: ConfigKey) -> Option<&str> {
        let prefix = format!("{}=", key.as_str());
        self.args.iter().find_map(|arg| arg.strip_prefix(&prefix))
    }

    pub fn has_config_key(&self, key: ConfigKey) -> bool {
        self.config_value(key).is_some()
    }

    /// Human-readable shell rendering: `cd <dir> && <program> <args..>`
    ///
    /// For display only; tokens are quoted so the line can be copied into a shell.
    pub fn display_line(&self) -> String {
        let mut line = format!(
            "cd {} && {}",
            shell_quote(&self.working_dir.display().to_string()),
            shell_quote(&self.program)
        );
        for arg in &self.args {
            line.push(' ');
            line.push_str(&shell_quote(arg));
        }
        line
    }
}

impl std::fmt::Display for InvocationCommand {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display_line())
    }
}

fn shell_quote(token: &str) -> String {
    let plain = !token.is_empty()
        && token
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || "_-./=:,+@%".contains(c));
    if plain {
        token.to_string()
    } else {
        format!("'{}'", token.replace('\'', r"'\''"))
    }
}
