/// Ports module defining interfaces for hexagonal architecture
///
/// Only outbound ports (driven ports - infrastructure interfaces) exist:
/// the views and the shell are driven directly by the CLI.
pub mod outbound;
