/// Marker trait for state containers.
///
/// `Default` is the state at process start; `Clone + PartialEq` let callers
/// snapshot and compare states around a dispatch.
pub trait UiState: Clone + PartialEq + Default + Send + 'static {}
