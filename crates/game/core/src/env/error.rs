/// Errors produced when a required oracle is missing from the environment.
#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
pub enum OracleError {
    #[error("config oracle not available")]
    ConfigNotAvailable,

    #[error("layout oracle not available")]
    LayoutNotAvailable,

    #[error("script oracle not available")]
    ScriptNotAvailable,
}
