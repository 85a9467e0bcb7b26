use super::reducer::Reducer;
use super::state::UiState;

type Observer<S> = Box<dyn FnMut(&S)>;

/// Handle returned by [`Store::subscribe`]; pass it to
/// [`Store::unsubscribe`] to stop receiving notifications.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Subscription(u64);

/// Single-writer container for a reducer's state.
///
/// Every [`dispatch`](Store::dispatch) runs to completion before the next one
/// starts, and observers always see the fully reduced state.
pub struct Store<R: Reducer> {
    state: R::State,
    observers: Vec<(Subscription, Observer<R::State>)>,
    next_subscription: u64,
}

impl<R: Reducer> Default for Store<R> {
    fn default() -> Self {
        Self::new(R::State::default())
    }
}

impl<R: Reducer> Store<R> {
    pub fn new(initial: R::State) -> Self {
        Self {
            state: initial,
            observers: Vec::new(),
            next_subscription: 0,
        }
    }

    pub fn state(&self) -> &R::State {
        &self.state
    }

    /// Reduce `intent` into the current state.
    ///
    /// Returns `true` when the state changed; observers are only notified
    /// in that case.
    pub fn dispatch(&mut self, intent: R::Intent) -> bool {
        let before = self.state.revision();
        self.state = R::reduce(std::mem::take(&mut self.state), intent);
        let changed = self.state.revision() != before;
        if changed {
            for (_, observer) in &mut self.observers {
                observer(&self.state);
            }
        }
        changed
    }

    pub fn subscribe<F>(&mut self, observer: F) -> Subscription
    where
        F: FnMut(&R::State) + 'static,
    {
        let subscription = Subscription(self.next_subscription);
        self.next_subscription += 1;
        self.observers.push((subscription, Box::new(observer)));
        subscription
    }

    pub fn unsubscribe(&mut self, subscription: Subscription) {
        self.observers.retain(|(id, _)| *id != subscription);
    }
}
