//! Game lifecycle service: creation, guess submission, reconstruction,
//! history and leaderboard, on top of a [`GameStore`].
//!
//! Each operation is a single pass over a log snapshot; the only
//! suspension points are store round trips.

use std::collections::HashMap;
use std::sync::Mutex;

use log::info;
use rand::rngs::SmallRng;
use rand::SeedableRng;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::cellset::CellSet;
use crate::common::{GameError, GameId, GuessOutcome};
use crate::config::default_fleet;
use crate::fleet::FleetManifest;
use crate::guess::{Guess, GuessSubmission};
use crate::layout::Layout;
use crate::replay::{reconstruct, Reconstruction};
use crate::store::GameStore;

/// Outcome of a submitted guess plus a fresh reconstruction snapshot.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GuessReport {
    pub game_id: GameId,
    pub outcome: GuessOutcome,
    pub state: Reconstruction,
}

/// One entry of the game history listing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GameSummary {
    pub game_id: GameId,
    pub guesses: usize,
    pub hits: usize,
    pub game_over: bool,
}

/// One leaderboard row: total hits for a player across all games.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlayerScore {
    pub player_name: String,
    pub score: usize,
}

pub struct GameService<S: GameStore> {
    store: S,
    fleet: FleetManifest,
    rng: Mutex<SmallRng>,
}

impl<S: GameStore> GameService<S> {
    /// Service over `store` with the default fleet and an OS-seeded RNG.
    pub fn new(store: S) -> Self {
        Self {
            store,
            fleet: default_fleet(),
            rng: Mutex::new(SmallRng::from_os_rng()),
        }
    }

    /// Fix the RNG seed for reproducible layouts.
    pub fn with_seed(store: S, seed: u64) -> Self {
        Self {
            store,
            fleet: default_fleet(),
            rng: Mutex::new(SmallRng::seed_from_u64(seed)),
        }
    }

    /// Replace the fleet used for newly created games.
    pub fn with_fleet(mut self, fleet: FleetManifest) -> Self {
        self.fleet = fleet;
        self
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    /// Create a game: generate a layout and persist it under a fresh id.
    /// All later reconstructions load this layout, never regenerate it.
    pub async fn create_game(&self) -> Result<GameId, GameError> {
        let id = Uuid::new_v4();
        self.create_game_with_id(id).await?;
        Ok(id)
    }

    async fn create_game_with_id(&self, id: GameId) -> Result<Layout, GameError> {
        let layout = {
            let mut rng = self
                .rng
                .lock()
                .map_err(|_| GameError::Storage(anyhow::anyhow!("service rng lock poisoned")))?;
            Layout::generate(&self.fleet, &mut *rng)?
        };
        self.store.insert_game(id, &layout).await?;
        info!("created game {id} with {} ships", layout.ships().len());
        Ok(layout)
    }

    /// Resolve and persist one guess.
    ///
    /// The coordinate is bounds-checked, a game is created lazily on the
    /// first guess for an unknown id, and a repeated coordinate for the
    /// same game is rejected without touching state. The hit flag comes
    /// from the persisted layout, not the client.
    pub async fn submit_guess(&self, submission: GuessSubmission) -> Result<GuessReport, GameError> {
        let coord = submission.validate()?;
        let game_id = submission.game_id;

        let layout = match self.store.load_layout(game_id).await? {
            Some(layout) => layout,
            None => self.create_game_with_id(game_id).await?,
        };

        let mut log = self.store.guesses(game_id).await?;
        if log.iter().any(|g| g.x == submission.x && g.y == submission.y) {
            return Err(GameError::DuplicateGuess {
                x: submission.x,
                y: submission.y,
            });
        }

        let is_hit = layout.is_hit(coord);
        let guess = Guess {
            game_id,
            player_name: submission.player_name,
            x: submission.x,
            y: submission.y,
            is_hit,
        };
        self.store.append_guess(guess.clone()).await?;
        log.push(guess);

        let state = reconstruct(&layout, &log);
        let outcome = if is_hit {
            let hits: CellSet = log.iter().filter(|g| g.is_hit).map(|g| g.coord()).collect();
            match layout.ship_at(coord) {
                Some(ship) if ship.is_sunk(&hits) => GuessOutcome::Sunk {
                    ship: ship.name().to_owned(),
                },
                _ => GuessOutcome::Hit,
            }
        } else {
            GuessOutcome::Miss
        };
        info!("game {game_id}: guess {coord} -> {outcome:?}");

        Ok(GuessReport {
            game_id,
            outcome,
            state,
        })
    }

    /// Reconstruct the current state of a game from its persisted layout
    /// and guess log.
    pub async fn game_state(&self, game_id: GameId) -> Result<Reconstruction, GameError> {
        let layout = self
            .store
            .load_layout(game_id)
            .await?
            .ok_or(GameError::GameNotFound(game_id))?;
        let log = self.store.guesses(game_id).await?;
        Ok(reconstruct(&layout, &log))
    }

    /// All known games in creation order with guess/hit counts.
    pub async fn history(&self) -> Result<Vec<GameSummary>, GameError> {
        let mut summaries = Vec::new();
        for game_id in self.store.game_ids().await? {
            let state = self.game_state(game_id).await?;
            let log = self.store.guesses(game_id).await?;
            summaries.push(GameSummary {
                game_id,
                guesses: log.len(),
                hits: log.iter().filter(|g| g.is_hit).count(),
                game_over: state.game_over,
            });
        }
        Ok(summaries)
    }

    /// Leaderboard: hits per player across all games, highest first, ties
    /// broken by name.
    pub async fn scores(&self) -> Result<Vec<PlayerScore>, GameError> {
        let mut totals: HashMap<String, usize> = HashMap::new();
        for guess in self.store.all_guesses().await? {
            if guess.is_hit {
                *totals.entry(guess.player_name).or_default() += 1;
            }
        }
        let mut scores: Vec<PlayerScore> = totals
            .into_iter()
            .map(|(player_name, score)| PlayerScore { player_name, score })
            .collect();
        scores.sort_by(|a, b| {
            b.score
                .cmp(&a.score)
                .then_with(|| a.player_name.cmp(&b.player_name))
        });
        Ok(scores)
    }
}
