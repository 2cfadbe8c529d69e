/// Data Transfer Objects for application layer
///
/// DTOs carry view state from the application layer to the rendering
/// adapters, keeping the views themselves free of presentation concerns.
mod output_format;
mod view_snapshot;

pub use output_format::OutputFormat;
pub use view_snapshot::{ViewContent, ViewSnapshot};
