/// Marker trait for intents.
///
/// An intent is one user interaction (toggle a group, open or dismiss the
/// overlay) expressed as data. Reducers turn intents into new states.
pub trait Intent: Send + 'static {}
