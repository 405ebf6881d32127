use crate::domain::model::Payload;
use crate::domain::ports::{Demo, Sink};
use crate::utils::error::{DemoError, Result};

/// The embedded status document. Only `success` and `id` drive behavior.
pub const SECRET_ID_RESPONSE: &str = r#"{
    "success": true,
    "message": "One secret identifier issued",
    "code": 200,
    "id": "89e8f9a1-fedb-440e-a596-e4277283fbcf"
}"#;

pub struct PayloadDemo {
    body: String,
}

impl PayloadDemo {
    pub fn new() -> Self {
        Self::with_body(SECRET_ID_RESPONSE)
    }

    pub fn with_body(body: &str) -> Self {
        Self {
            body: body.to_string(),
        }
    }
}

impl Default for PayloadDemo {
    fn default() -> Self {
        Self::new()
    }
}

impl Demo for PayloadDemo {
    fn name(&self) -> &'static str {
        "payload"
    }

    fn describe(&self) -> &'static str {
        "Deserialize the status document into its declared shape"
    }

    fn run(&self, sink: &dyn Sink) -> Result<()> {
        let payload: Payload = serde_json::from_str(&self.body)?;

        tracing::debug!(
            "Payload parsed: code={} message={:?}",
            payload.code,
            payload.message
        );

        if payload.success {
            sink.emit(&payload.id)?;
            Ok(())
        } else {
            Err(DemoError::PayloadRejected)
        }
    }
}
