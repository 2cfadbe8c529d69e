/// Rendering adapters - turn a view snapshot into text
mod json_renderer;
mod markdown_renderer;

pub use json_renderer::JsonRenderer;
pub use markdown_renderer::MarkdownRenderer;
