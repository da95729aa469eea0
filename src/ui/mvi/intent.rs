/// Marker trait for intents.
///
/// Intents are produced on the UI thread (pending steps) or by background
/// gateway tasks (settled steps) and are sent across threads, hence `Send`.
pub trait Intent: Send + 'static {}
