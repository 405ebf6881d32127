pub mod engine;
pub mod registry;

pub use crate::domain::model::{RunReport, SecretEntry};
pub use crate::domain::ports::{ConfigProvider, Demo, Sink};
pub use crate::utils::error::Result;
