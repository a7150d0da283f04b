//! Return contract to the host renderer

use serde::{Deserialize, Serialize};

/// Fragment handed back to the host renderer for splicing into the page.
///
/// Both flags are set on every fragment this extension produces, success
/// and error alike: the markup is final HTML and must skip any further
/// wiki-markup passes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ParserOutput {
    /// Final HTML fragment
    pub markup: String,
    /// Skip further wiki-markup processing of `markup`
    pub no_parse: bool,
    /// Treat `markup` as raw HTML
    pub is_html: bool,
}

impl ParserOutput {
    /// Wrap a finished HTML fragment.
    pub fn html(markup: impl Into<String>) -> Self {
        Self {
            markup: markup.into(),
            no_parse: true,
            is_html: true,
        }
    }
}
