//! Pangenome tool value object

use crate::core::error::ConfigurationError;
use serde::{Deserialize, Serialize};

/// Pangenome analysis tool whose output defines the core genes
///
/// A closed set: the composite `CORE` configuration value is built
/// from this enum, never from a free string.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PangenomeTool {
    /// No pangenome analysis (gene alignments are supplied directly)
    #[default]
    None,
    Roary,
    Panaroo,
    Panacota,
}

impl PangenomeTool {
    pub const ALL: [PangenomeTool; 4] = [
        PangenomeTool::None,
        PangenomeTool::Roary,
        PangenomeTool::Panaroo,
        PangenomeTool::Panacota,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            PangenomeTool::None => "none",
            PangenomeTool::Roary => "roary",
            PangenomeTool::Panaroo => "panaroo",
            PangenomeTool::Panacota => "panacota",
        }
    }

    /// Whether a tool was actually chosen
    pub fn is_selected(&self) -> bool {
        !matches!(self, PangenomeTool::None)
    }
}

impl std::fmt::Display for PangenomeTool {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for PangenomeTool {
    type Err = ConfigurationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        PangenomeTool::ALL
            .into_iter()
            .find(|tool| tool.as_str() == s)
            .ok_or_else(|| ConfigurationError::UnknownPangenomeTool(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_none() {
        assert_eq!(PangenomeTool::default(), PangenomeTool::None);
        assert!(!PangenomeTool::default().is_selected());
    }

    #[test]
    fn test_parse_all_names() {
        for tool in PangenomeTool::ALL {
            assert_eq!(tool.as_str().parse::<PangenomeTool>().unwrap(), tool);
        }
    }

    #[test]
    fn test_parse_rejects_unknown() {
        let err = "prokka".parse::<PangenomeTool>().unwrap_err();
        assert_eq!(
            err,
            ConfigurationError::UnknownPangenomeTool("prokka".to_string())
        );
        assert!("Roary".parse::<PangenomeTool>().is_err());
    }

    #[test]
    fn test_serialize_lowercase() {
        let json = serde_json::to_string(&PangenomeTool::Panacota).unwrap();
        assert_eq!(json, "\"panacota\"");
    }
}
