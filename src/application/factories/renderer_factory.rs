use crate::adapters::outbound::renderers::{JsonRenderer, MarkdownRenderer};
use crate::application::dto::OutputFormat;
use crate::ports::outbound::ViewRenderer;

/// Factory for creating view renderers
///
/// Selects the rendering adapter for an output format. It lives in the
/// application layer because it wires infrastructure to an application-level
/// choice.
pub struct RendererFactory;

impl RendererFactory {
    /// Creates a renderer for the specified output format
    ///
    /// # Examples
    /// ```
    /// use billing_desk::application::dto::OutputFormat;
    /// use billing_desk::application::factories::RendererFactory;
    ///
    /// let renderer = RendererFactory::create(OutputFormat::Json);
    /// ```
    pub fn create(format: OutputFormat) -> Box<dyn ViewRenderer> {
        match format {
            OutputFormat::Json => Box::new(JsonRenderer::new()),
            OutputFormat::Markdown => Box::new(MarkdownRenderer::new()),
        }
    }
}
