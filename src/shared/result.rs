/// Type alias for Result with anyhow::Error as the error type.
/// Library-level failures are typed (see `shared::error`) and converted
/// into anyhow at the application and CLI boundary.
pub type Result<T> = std::result::Result<T, anyhow::Error>;
