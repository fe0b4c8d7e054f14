use std::sync::{Arc, Mutex, PoisonError, RwLock};

use crossbeam_channel::{Receiver, Sender, unbounded};

use crate::context::LightState;

/// Latest published light state. Each publish replaces the whole state, so a snapshot is
/// always one complete tick's output.
#[derive(Default)]
pub struct LightStateSlot {
    current: RwLock<Option<Arc<LightState>>>,
    subscribers: Mutex<Vec<Sender<Arc<LightState>>>>,
}

impl LightStateSlot {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn publish(&self, state: LightState) {
        let state = Arc::new(state);
        *self.current.write().unwrap_or_else(PoisonError::into_inner) = Some(state.clone());
        let mut subs = self
            .subscribers
            .lock()
            .unwrap_or_else(PoisonError::into_inner);
        subs.retain(|tx| tx.send(state.clone()).is_ok());
    }

    pub fn snapshot(&self) -> Option<Arc<LightState>> {
        self.current
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// Receives every state published after this call.
    pub fn subscribe(&self) -> Receiver<Arc<LightState>> {
        let (tx, rx) = unbounded();
        self.subscribers
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(tx);
        rx
    }
}
