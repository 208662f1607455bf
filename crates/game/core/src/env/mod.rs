//! Traits describing read-only host data.
//!
//! Oracles expose tunable parameters, level geometry, and the dialogue
//! script. The [`Env`] aggregate bundles them so the engine can access
//! everything it needs without hard coupling to concrete implementations.
mod config;
mod error;
mod layout;
mod script;

pub use config::ConfigOracle;
pub use error::OracleError;
pub use layout::LayoutOracle;
pub use script::ScriptOracle;

/// Aggregates read-only oracles required by the event transitions.
#[derive(Clone, Copy, Debug)]
pub struct Env<'a, C, L, S>
where
    C: ConfigOracle + ?Sized,
    L: LayoutOracle + ?Sized,
    S: ScriptOracle + ?Sized,
{
    config: Option<&'a C>,
    layout: Option<&'a L>,
    script: Option<&'a S>,
}

pub type SessionEnv<'a> = Env<'a, dyn ConfigOracle + 'a, dyn LayoutOracle + 'a, dyn ScriptOracle + 'a>;

impl<'a, C, L, S> Env<'a, C, L, S>
where
    C: ConfigOracle + ?Sized,
    L: LayoutOracle + ?Sized,
    S: ScriptOracle + ?Sized,
{
    pub fn new(config: Option<&'a C>, layout: Option<&'a L>, script: Option<&'a S>) -> Self {
        Self {
            config,
            layout,
            script,
        }
    }

    pub fn with_all(config: &'a C, layout: &'a L, script: &'a S) -> Self {
        Self::new(Some(config), Some(layout), Some(script))
    }

    pub fn empty() -> Self {
        Self {
            config: None,
            layout: None,
            script: None,
        }
    }

    /// Returns the ConfigOracle, or an error if not available.
    pub fn config(&self) -> Result<&'a C, OracleError> {
        self.config.ok_or(OracleError::ConfigNotAvailable)
    }

    /// Returns the LayoutOracle, or an error if not available.
    pub fn layout(&self) -> Result<&'a L, OracleError> {
        self.layout.ok_or(OracleError::LayoutNotAvailable)
    }

    /// Returns the ScriptOracle, or an error if not available.
    pub fn script(&self) -> Result<&'a S, OracleError> {
        self.script.ok_or(OracleError::ScriptNotAvailable)
    }
}

impl<'a, C, L, S> Env<'a, C, L, S>
where
    C: ConfigOracle + 'a,
    L: LayoutOracle + 'a,
    S: ScriptOracle + 'a,
{
    /// Converts this environment into a trait-object based [`SessionEnv`]
    /// (consumes self).
    pub fn into_session_env(self) -> SessionEnv<'a> {
        let config: Option<&'a dyn ConfigOracle> = self.config.map(|config| config as _);
        let layout: Option<&'a dyn LayoutOracle> = self.layout.map(|layout| layout as _);
        let script: Option<&'a dyn ScriptOracle> = self.script.map(|script| script as _);
        Env::new(config, layout, script)
    }

    /// Converts this environment into a trait-object based [`SessionEnv`]
    /// (borrows self).
    ///
    /// Use this when the same environment backs multiple dispatches.
    pub fn as_session_env(&self) -> SessionEnv<'a> {
        let config: Option<&'a dyn ConfigOracle> = self.config.map(|config| config as _);
        let layout: Option<&'a dyn LayoutOracle> = self.layout.map(|layout| layout as _);
        let script: Option<&'a dyn ScriptOracle> = self.script.map(|script| script as _);
        Env::new(config, layout, script)
    }
}
