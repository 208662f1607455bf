/// Oracle providing the guide NPC's dialogue script.
pub trait ScriptOracle: Send + Sync {
    /// Scripted lines shown in order, advanced by confirm input.
    fn lines(&self) -> &[String];

    /// Fixed warning shown once the scripted sequence has completed.
    fn warning(&self) -> &str;
}
