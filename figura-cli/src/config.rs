use figura::report::ReportConfig;
use figura::text::WordsConfig;
use serde::{Deserialize, Serialize};

/// Configuration shared by the `shapes` and `words` binaries.
/// Every field is optional in the config file and falls back to its default.
#[derive(Debug, Serialize, Deserialize, Clone, Default, PartialEq)]
#[serde(default)]
pub struct FiguraConfig {
    /// Formatting of the shape reports
    pub report: ReportConfig,
    /// Replacement and merge settings of the word processor
    pub words: WordsConfig,
}
