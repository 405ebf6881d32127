pub mod app;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

pub use config::console::ConsoleSink;
pub use config::suite_config::SuiteConfig;
pub use config::CliConfig;
pub use core::engine::DemoEngine;
pub use domain::model::{
    MySecret, NameTag, Payload, Person, RunReport, SecretEntry, SecretReply,
};
pub use domain::ports::{ConfigProvider, Demo, Sink};
pub use utils::error::{DemoError, Result};
