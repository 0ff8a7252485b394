use std::cell::Cell;
use std::rc::Rc;

/// Liveness check for async results: only the round a mounted screen activated may apply.
#[derive(Clone, Debug, Default)]
pub struct RoundGuard(Rc<Cell<Option<u64>>>);

impl RoundGuard {
    pub fn activate(&self, round: u64) {
        self.0.set(Some(round));
    }

    /// Called on unmount; late results for any round are dropped afterwards.
    pub fn retire(&self) {
        self.0.set(None);
    }

    pub fn is_live(&self, round: u64) -> bool {
        self.0.get() == Some(round)
    }

    /// Awaits `fetch`, then hands the result to `deliver` only if `round` is
    /// still live. Returns whether it was delivered.
    pub async fn deliver<R>(
        &self,
        round: u64,
        fetch: impl Future<Output = R>,
        deliver: impl FnOnce(R),
    ) -> bool {
        let result = fetch.await;
        if !self.is_live(round) {
            return false;
        }
        deliver(result);
        true
    }
}
