use serde::{Deserialize, Serialize};

/// External catalog object a tree node stands for
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BrowserObject {
    pub name: String,
    pub path: String,
    pub can_browse: bool,
}

impl BrowserObject {
    pub fn new(name: impl Into<String>, path: impl Into<String>, can_browse: bool) -> Self {
        Self {
            name: name.into(),
            path: path.into(),
            can_browse,
        }
    }
}
