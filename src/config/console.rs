use crate::domain::ports::Sink;
use crate::utils::error::Result;

/// Writes demo output straight to stdout, one line per emit.
#[derive(Debug, Clone, Default)]
pub struct ConsoleSink;

impl Sink for ConsoleSink {
    fn emit(&self, line: &str) -> Result<()> {
        println!("{}", line);
        Ok(())
    }
}
