use serde::Deserialize;

pub const DEFAULT_FLAG_THRESHOLD: f64 = 70.0;

const DEFAULT_ALLOWED_EXTENSIONS: &[&str] = &[
    "txt", "py", "js", "java", "cpp", "c", "cs", "php", "html", "css", "sql", "ipynb",
];

#[derive(Debug, Clone, Deserialize)]
pub struct DetectConfig {
    pub input: Option<InputConfig>,
    pub report: Option<ReportConfig>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct InputConfig {
    #[serde(default)]
    pub allowed_extensions: Vec<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ReportConfig {
    pub flag_threshold: Option<f64>,
}

impl DetectConfig {
    pub fn default_allowed_extensions() -> Vec<String> {
        DEFAULT_ALLOWED_EXTENSIONS
            .iter()
            .map(|ext| ext.to_string())
            .collect()
    }

    /// Extension allow-list, lowercased. An empty configured list falls back
    /// to the defaults rather than rejecting everything.
    pub fn allowed_extensions(&self) -> Vec<String> {
        self.input
            .as_ref()
            .filter(|input| !input.allowed_extensions.is_empty())
            .map(|input| {
                input
                    .allowed_extensions
                    .iter()
                    .map(|ext| ext.to_lowercase())
                    .collect()
            })
            .unwrap_or_else(Self::default_allowed_extensions)
    }

    pub fn flag_threshold(&self) -> f64 {
        self.report
            .as_ref()
            .and_then(|report| report.flag_threshold)
            .unwrap_or(DEFAULT_FLAG_THRESHOLD)
    }
}

/// Allow-list to use for an optionally loaded config.
pub fn allowed_extensions(config: Option<&DetectConfig>) -> Vec<String> {
    config
        .map(DetectConfig::allowed_extensions)
        .unwrap_or_else(DetectConfig::default_allowed_extensions)
}

/// Flag threshold to use for an optionally loaded config.
pub fn flag_threshold(config: Option<&DetectConfig>) -> f64 {
    config
        .map(DetectConfig::flag_threshold)
        .unwrap_or(DEFAULT_FLAG_THRESHOLD)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_apply_when_sections_are_absent() {
        let config: DetectConfig = toml::from_str("").expect("empty config should parse");
        assert_eq!(config.flag_threshold(), DEFAULT_FLAG_THRESHOLD);
        assert!(config.allowed_extensions().contains(&"ipynb".to_string()));
    }

    #[test]
    fn configured_extensions_are_lowercased() {
        let config: DetectConfig = toml::from_str(
            r#"
[input]
allowed_extensions = ["PY", "Rs"]
"#,
        )
        .expect("config should parse");
        assert_eq!(config.allowed_extensions(), vec!["py", "rs"]);
    }

    #[test]
    fn empty_extension_list_falls_back_to_defaults() {
        let config: DetectConfig = toml::from_str(
            r#"
[input]
allowed_extensions = []
"#,
        )
        .expect("config should parse");
        assert!(config.allowed_extensions().contains(&"py".to_string()));
    }

    #[test]
    fn flag_threshold_is_read_from_report_section() {
        let config: DetectConfig = toml::from_str(
            r#"
[report]
flag_threshold = 55.5
"#,
        )
        .expect("config should parse");
        assert_eq!(config.flag_threshold(), 55.5);
    }
}
