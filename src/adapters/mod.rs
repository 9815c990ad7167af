/// Adapters layer - Infrastructure implementations
///
/// This layer contains concrete implementations of the ports,
/// providing the actual integration with the initializer service,
/// the filesystem and the terminal.
pub mod outbound;
