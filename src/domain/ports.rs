use crate::domain::model::SecretEntry;
use crate::utils::error::Result;

/// Destination for demo output lines.
pub trait Sink: Send + Sync {
    fn emit(&self, line: &str) -> Result<()>;
}

pub trait ConfigProvider: Send + Sync {
    /// Demos to run, in order. Empty means the full default set.
    fn demo_names(&self) -> &[String];
    fn secret_keys(&self) -> Vec<i64>;
    fn secret_entries(&self) -> Vec<SecretEntry>;
}

pub trait Demo: Send + Sync {
    fn name(&self) -> &'static str;
    fn describe(&self) -> &'static str;
    fn run(&self, sink: &dyn Sink) -> Result<()>;
}
