//! Storage seam for game state.
//!
//! The guess log and the layout generated at game creation are the only
//! durable state. `GameStore` is the boundary to the real datastore;
//! [`MemoryStore`] backs tests and the CLI.

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use crate::common::{GameError, GameId};
use crate::guess::Guess;
use crate::layout::Layout;

#[async_trait::async_trait]
pub trait GameStore: Send + Sync {
    /// Record a new game with its generated layout. Fails if the id exists.
    async fn insert_game(&self, id: GameId, layout: &Layout) -> Result<(), GameError>;

    /// Load the persisted layout for `id`, or `None` for an unknown game.
    async fn load_layout(&self, id: GameId) -> Result<Option<Layout>, GameError>;

    /// Append one guess to the log.
    async fn append_guess(&self, guess: Guess) -> Result<(), GameError>;

    /// The guess log for `id` in submission order. Empty for unknown games.
    async fn guesses(&self, id: GameId) -> Result<Vec<Guess>, GameError>;

    /// All guesses across games, in submission order.
    async fn all_guesses(&self) -> Result<Vec<Guess>, GameError>;

    /// Known game ids in creation order.
    async fn game_ids(&self) -> Result<Vec<GameId>, GameError>;
}

#[derive(Default)]
struct Inner {
    order: Vec<GameId>,
    layouts: HashMap<GameId, Layout>,
    log: Vec<Guess>,
}

/// In-memory store: a single append-only guess log plus a layout per game,
/// mirroring the guesses table and layout column of the real datastore.
#[derive(Clone, Default)]
pub struct MemoryStore {
    inner: Arc<Mutex<Inner>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> Result<std::sync::MutexGuard<'_, Inner>, GameError> {
        self.inner
            .lock()
            .map_err(|_| GameError::Storage(anyhow::anyhow!("memory store lock poisoned")))
    }
}

#[async_trait::async_trait]
impl GameStore for MemoryStore {
    async fn insert_game(&self, id: GameId, layout: &Layout) -> Result<(), GameError> {
        let mut inner = self.lock()?;
        if inner.layouts.contains_key(&id) {
            return Err(GameError::Storage(anyhow::anyhow!(
                "game {id} already exists"
            )));
        }
        inner.order.push(id);
        inner.layouts.insert(id, layout.clone());
        Ok(())
    }

    async fn load_layout(&self, id: GameId) -> Result<Option<Layout>, GameError> {
        Ok(self.lock()?.layouts.get(&id).cloned())
    }

    async fn append_guess(&self, guess: Guess) -> Result<(), GameError> {
        self.lock()?.log.push(guess);
        Ok(())
    }

    async fn guesses(&self, id: GameId) -> Result<Vec<Guess>, GameError> {
        Ok(self
            .lock()?
            .log
            .iter()
            .filter(|g| g.game_id == id)
            .cloned()
            .collect())
    }

    async fn all_guesses(&self) -> Result<Vec<Guess>, GameError> {
        Ok(self.lock()?.log.clone())
    }

    async fn game_ids(&self) -> Result<Vec<GameId>, GameError> {
        Ok(self.lock()?.order.clone())
    }
}
