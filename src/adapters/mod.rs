/// Adapters layer - Infrastructure implementations
///
/// This layer contains concrete implementations of the ports,
/// providing the actual integration with HTTP APIs, the console and files.
pub mod outbound;
