use armada::{
    FleetManifest, GameError, GameService, GameStore, GuessOutcome, GuessSubmission, MemoryStore,
    ShipClass, GRID_SIZE,
};
use uuid::Uuid;

fn submission(game_id: Uuid, player: &str, x: u8, y: u8) -> GuessSubmission {
    GuessSubmission {
        game_id,
        player_name: player.to_owned(),
        x,
        y,
    }
}

#[tokio::test]
async fn full_sweep_hits_seventeen_cells_and_ends_game() {
    let service = GameService::with_seed(MemoryStore::new(), 42);
    let game_id = service.create_game().await.unwrap();

    let mut hits = 0;
    let mut sunk = 0;
    let mut game_over = false;
    for y in 0..GRID_SIZE {
        for x in 0..GRID_SIZE {
            let report = service
                .submit_guess(submission(game_id, "alice", x, y))
                .await
                .unwrap();
            match report.outcome {
                GuessOutcome::Hit => hits += 1,
                GuessOutcome::Sunk { .. } => {
                    hits += 1;
                    sunk += 1;
                }
                GuessOutcome::Miss => {}
            }
            game_over = report.state.game_over;
        }
    }

    // the persisted layout is the source of truth: exactly the fleet's
    // cells hit, one sunk report per ship, fleet exhausted at the end
    assert_eq!(hits, 17);
    assert_eq!(sunk, 5);
    assert!(game_over);
}

#[tokio::test]
async fn reconstruction_is_stable_across_reads() {
    let service = GameService::with_seed(MemoryStore::new(), 7);
    let game_id = service.create_game().await.unwrap();

    for (x, y) in [(0, 0), (3, 4), (9, 9), (5, 5), (2, 7)] {
        service
            .submit_guess(submission(game_id, "bob", x, y))
            .await
            .unwrap();
    }

    let first = service.game_state(game_id).await.unwrap();
    let second = service.game_state(game_id).await.unwrap();
    assert_eq!(first, second);
}

#[tokio::test]
async fn duplicate_coordinate_rejected_without_side_effects() {
    let service = GameService::with_seed(MemoryStore::new(), 1);
    let game_id = service.create_game().await.unwrap();

    service
        .submit_guess(submission(game_id, "alice", 3, 3))
        .await
        .unwrap();
    let before = service.store().guesses(game_id).await.unwrap();

    let err = service
        .submit_guess(submission(game_id, "bob", 3, 3))
        .await
        .unwrap_err();
    assert!(matches!(err, GameError::DuplicateGuess { x: 3, y: 3 }));

    let after = service.store().guesses(game_id).await.unwrap();
    assert_eq!(before, after);
}

#[tokio::test]
async fn out_of_bounds_submission_rejected() {
    let service = GameService::with_seed(MemoryStore::new(), 1);
    let game_id = service.create_game().await.unwrap();
    let err = service
        .submit_guess(submission(game_id, "alice", 10, 0))
        .await
        .unwrap_err();
    assert!(matches!(err, GameError::OutOfBounds { x: 10, y: 0 }));
    assert!(service.store().guesses(game_id).await.unwrap().is_empty());
}

#[tokio::test]
async fn first_guess_creates_unknown_game() {
    let service = GameService::with_seed(MemoryStore::new(), 5);
    let game_id = Uuid::new_v4();

    service
        .submit_guess(submission(game_id, "carol", 4, 4))
        .await
        .unwrap();

    // layout was persisted, so the game is now readable and listed
    assert!(service.game_state(game_id).await.is_ok());
    let history = service.history().await.unwrap();
    assert_eq!(history.len(), 1);
    assert_eq!(history[0].game_id, game_id);
    assert_eq!(history[0].guesses, 1);
}

#[tokio::test]
async fn unknown_game_state_is_an_error() {
    let service = GameService::with_seed(MemoryStore::new(), 5);
    let missing = Uuid::new_v4();
    let err = service.game_state(missing).await.unwrap_err();
    assert!(matches!(err, GameError::GameNotFound(id) if id == missing));
}

#[tokio::test]
async fn history_lists_games_in_creation_order() {
    let service = GameService::with_seed(MemoryStore::new(), 11);
    let first = service.create_game().await.unwrap();
    let second = service.create_game().await.unwrap();

    service
        .submit_guess(submission(second, "dave", 0, 0))
        .await
        .unwrap();

    let history = service.history().await.unwrap();
    assert_eq!(
        history.iter().map(|h| h.game_id).collect::<Vec<_>>(),
        vec![first, second]
    );
    assert_eq!(history[0].guesses, 0);
    assert_eq!(history[1].guesses, 1);
}

#[tokio::test]
async fn leaderboard_counts_hits_per_player_sorted() {
    // single-destroyer fleet so hits are easy to force
    let fleet = FleetManifest::new(vec![ShipClass::new("Destroyer", 2)]).unwrap();
    let service = GameService::with_seed(MemoryStore::new(), 3).with_fleet(fleet);
    let game_id = service.create_game().await.unwrap();

    let mut hits_by_player = vec![0usize; 2];
    let players = ["alice", "bob"];
    let mut turn = 0;
    'sweep: for y in 0..GRID_SIZE {
        for x in 0..GRID_SIZE {
            let player = players[turn % 2];
            let report = service
                .submit_guess(submission(game_id, player, x, y))
                .await
                .unwrap();
            if !matches!(report.outcome, GuessOutcome::Miss) {
                hits_by_player[turn % 2] += 1;
            }
            turn += 1;
            if report.state.game_over {
                break 'sweep;
            }
        }
    }

    let scores = service.scores().await.unwrap();
    let total: usize = scores.iter().map(|s| s.score).sum();
    assert_eq!(total, 2, "a destroyer has exactly two cells");
    assert!(scores.windows(2).all(|w| w[0].score >= w[1].score));
    for score in &scores {
        let idx = players.iter().position(|p| *p == score.player_name).unwrap();
        assert_eq!(score.score, hits_by_player[idx]);
    }
}
