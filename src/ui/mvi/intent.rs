/// Marker for values that describe a requested state change.
///
/// An intent is produced by a key press, a screen event or a timer and is
/// consumed exactly once by a [`Reducer`](super::Reducer).
pub trait Intent: std::fmt::Debug + 'static {}
