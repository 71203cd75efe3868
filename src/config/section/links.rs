//! `[links]` configuration for the external-link pass.

use serde::{Deserialize, Serialize};

use crate::config::{ConfigDiagnostics, FieldPath};
use crate::pipeline::LinkPosition;

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LinksConfig {
    /// Mark off-site anchors.
    pub external: bool,
    pub target: String,
    pub rel: String,
    /// Where the pass runs relative to the link-content wrap.
    pub position: LinkPosition,
}

impl Default for LinksConfig {
    fn default() -> Self {
        Self {
            external: true,
            target: "_blank".into(),
            rel: "noopener noreferrer".into(),
            position: LinkPosition::default(),
        }
    }
}

impl LinksConfig {
    pub const REL: FieldPath = FieldPath::new("links.rel");

    pub fn validate(&self, diag: &mut ConfigDiagnostics) {
        if self.external
            && self.target == "_blank"
            && !self.rel.split_whitespace().any(|r| r == "noopener")
        {
            diag.warn(Self::REL, "target=\"_blank\" without `noopener`");
        }
    }
}
