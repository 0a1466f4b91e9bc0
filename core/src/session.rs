use chrono::{DateTime, Utc};

use crate::*;

/// Runs the reducer against a history store, saving the history every time it changes.
#[derive(Debug)]
pub struct Session<S, T> {
    state: GameState,
    store: S,
    targets: T,
}

impl<S: HistoryStore, T: TargetSource> Session<S, T> {
    pub fn open(config: GameConfig, store: S, mut targets: T) -> Self {
        let history = load_or_empty(&store);
        let state = GameState::new(config, history, &mut targets);
        Self {
            state,
            store,
            targets,
        }
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn dispatch(&mut self, action: Action, now: DateTime<Utc>) -> ShotOutcome {
        log::debug!("dispatch: {:?}", action);

        let mut next = self.state.clone();
        let outcome = next.apply(action, now, &mut self.targets);

        let history_changed = next.history() != self.state.history();
        self.state = next;

        if history_changed {
            self.persist_history();
        }

        outcome
    }

    fn persist_history(&mut self) {
        let history = self.state.history();
        match self.store.save(history) {
            Ok(()) => log::debug!("saved {} history records", history.len()),
            Err(err) => log::error!("could not save history: {}", err),
        }
    }
}
