use std::path::Path;
use std::path::PathBuf;

/// Runtime knobs of a report run.
///
/// Every field defaults to the matching crate constant, so a JSON file only
/// needs the fields it changes:
///
/// ```json
/// { "dir": "out", "freq_digits": 4 }
/// ```
#[derive(Debug, Clone, PartialEq)]
#[derive(serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct Config {
    /// Directory the report is written to.
    pub dir: PathBuf,
    pub prefix: String,
    pub ext: String,
    pub delimiter: char,
    /// Extension of sibling trees in multi-file mode.
    pub tree_ext: String,
    pub title: String,
    pub stat_digits: usize,
    pub freq_digits: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            dir: PathBuf::from(crate::REPORT_DIR),
            prefix: crate::REPORT_PREFIX.to_string(),
            ext: crate::REPORT_EXT.to_string(),
            delimiter: crate::DELIMITER,
            tree_ext: crate::TREE_EXT.to_string(),
            title: crate::TITLE.to_string(),
            stat_digits: crate::STAT_DIGITS,
            freq_digits: crate::FREQ_DIGITS,
        }
    }
}

impl Config {
    pub fn load(path: &Path) -> anyhow::Result<Self> {
        let text = std::fs::read_to_string(path)
            .map_err(|e| anyhow::anyhow!("read config {}: {}", path.display(), e))?;
        let config = serde_json::from_str(&text)
            .map_err(|e| anyhow::anyhow!("parse config {}: {}", path.display(), e))?;
        log::debug!("loaded config from {}", path.display());
        Ok(config)
    }
}
