use crate::application::dto::ViewSnapshot;
use crate::ports::outbound::ViewRenderer;
use crate::shared::error::DeskError;
use crate::shared::Result;

/// JsonRenderer adapter - the snapshot as pretty-printed JSON
///
/// Loaded data is emitted exactly as decoded: explicit nulls stay null and
/// integer amounts stay integers, so scripts can consume the API response
/// alongside the view's status.
#[derive(Default)]
pub struct JsonRenderer;

impl JsonRenderer {
    pub fn new() -> Self {
        Self
    }
}

impl ViewRenderer for JsonRenderer {
    fn render(&self, snapshot: &ViewSnapshot) -> Result<String> {
        let mut output =
            serde_json::to_string_pretty(snapshot).map_err(|e| DeskError::RenderError {
                details: e.to_string(),
            })?;
        output.push('\n');
        Ok(output)
    }
}
