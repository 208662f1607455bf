//! Script oracle implementation for the runtime.

use game_content::GuideSpec;
use game_core::ScriptOracle;

/// Runtime implementation of ScriptOracle backed by guide content.
#[derive(Debug)]
pub struct ScriptOracleImpl {
    lines: Vec<String>,
    warning: String,
}

impl ScriptOracleImpl {
    pub fn new(lines: Vec<String>, warning: String) -> Self {
        Self { lines, warning }
    }

    pub fn from_guide(guide: &GuideSpec) -> Self {
        Self::new(guide.lines.clone(), guide.warning.clone())
    }
}

impl ScriptOracle for ScriptOracleImpl {
    fn lines(&self) -> &[String] {
        &self.lines
    }

    fn warning(&self) -> &str {
        &self.warning
    }
}
