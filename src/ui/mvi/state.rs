/// Marker for snapshot types a [`Reducer`](super::Reducer) operates on.
///
/// `Default` is the initial state. The reducer bumps [`revision`] whenever
/// an intent actually changes something, which is how the store decides
/// whether observers need to hear about it.
///
/// [`revision`]: UiState::revision
pub trait UiState: Clone + PartialEq + Default + 'static {
    fn revision(&self) -> u64;
}
