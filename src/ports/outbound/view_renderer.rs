use crate::application::dto::ViewSnapshot;
use crate::shared::Result;

/// ViewRenderer port for turning a view snapshot into displayable text
///
/// This port abstracts the rendering surface (JSON, Markdown, ...).
pub trait ViewRenderer {
    /// Renders the snapshot
    ///
    /// # Errors
    /// Returns an error if serialization fails
    fn render(&self, snapshot: &ViewSnapshot) -> Result<String>;
}
