use serde::Serialize;

use crate::Record;

/// Exercise diagram. `markup` is a self-contained SVG document; its caption is
/// rendered inside the markup and repeated in `caption` as plain text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct IllustrationAsset {
    pub id: &'static str,
    pub caption: &'static str,
    pub markup: &'static str,
}

impl Record for IllustrationAsset {
    fn id(&self) -> &str {
        self.id
    }
}
