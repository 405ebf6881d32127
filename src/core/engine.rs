use crate::domain::model::RunReport;
use crate::domain::ports::{Demo, Sink};
use crate::utils::error::Result;

pub struct DemoEngine<S: Sink> {
    sink: S,
    demos: Vec<Box<dyn Demo>>,
}

impl<S: Sink> DemoEngine<S> {
    pub fn new(sink: S, demos: Vec<Box<dyn Demo>>) -> Self {
        Self { sink, demos }
    }

    pub fn run(&self) -> Result<RunReport> {
        let mut executed = Vec::new();

        for demo in &self.demos {
            tracing::info!("Running demo: {}", demo.name());
            tracing::debug!("{}", demo.describe());

            demo.run(&self.sink)?;
            executed.push(demo.name().to_string());
        }

        tracing::info!("Completed {} demos", executed.len());
        Ok(RunReport { executed })
    }
}
