//! Common traits for TFE resources

/// Resource returned by a create call
pub trait TfeResource {
    /// Server-assigned ID (`ws-...`, `var-...`)
    fn id(&self) -> &str;

    /// Name the resource was created with
    fn name(&self) -> &str;

    /// `'name' (id)`, used in log lines
    fn label(&self) -> String {
        format!("'{}' ({})", self.name(), self.id())
    }
}
