/// Marker trait for controller state.
///
/// Cloneable and comparable so a view can be rebuilt from it at any time
/// and tests can assert on whole states. `Default` is the freshly mounted
/// state.
pub trait UiState: Clone + PartialEq + Default + Send + 'static {}
