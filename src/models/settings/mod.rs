// Settings module
// Report texts and catalog seed data loaded from the configuration file

use serde::{Deserialize, Serialize};

use crate::models::catalog::ReferenceCatalogs;

/// Texts printed on the report and used in export file names.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ReportSettings {
    /// First line of the title block
    pub organization: String,
    /// Second line of the title block
    pub report_name: String,
    /// Suffix of the export file names (`Escala_RLM_<variant>`)
    pub variant: String,
    /// Heading of the closing notice block
    pub closing_heading: String,
    /// Reminder lines under the closing heading; empty hides the block
    pub closing_notices: Vec<String>,
}

impl Default for ReportSettings {
    fn default() -> Self {
        Self {
            organization: "CONGREGAÇÃO CRISTÃ NO BRASIL".to_string(),
            report_name: "REUNIÃO LOCAL MINISTERIAL - RLM - JACIARA/MT".to_string(),
            variant: "Jaciara".to_string(),
            closing_heading: "ASSUNTOS DIVERSOS".to_string(),
            closing_notices: vec![
                "*COLETA DO COFRINHO TODO PRIMEIRO FINAL DE SEMANA DE CADA MÊS".to_string(),
                "*COLETA DE INTENÇÃO ATÉ TODO DIA 10 DE CADA MÊS".to_string(),
            ],
        }
    }
}

impl ReportSettings {
    /// Settings without the closing notice block.
    pub fn minimal() -> Self {
        Self {
            closing_notices: Vec::new(),
            ..Self::default()
        }
    }

    pub fn validate(&self) -> Result<(), String> {
        if self.organization.trim().is_empty() {
            return Err("Organization name cannot be empty".to_string());
        }
        let variant = self.variant.trim();
        if variant.is_empty() {
            return Err("Report variant cannot be empty".to_string());
        }
        if variant.contains(['/', '\\']) {
            return Err("Report variant cannot contain path separators".to_string());
        }
        Ok(())
    }
}

/// Whole configuration file.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub report: ReportSettings,
    pub catalogs: ReferenceCatalogs,
}
