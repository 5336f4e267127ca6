//! Tests for the lock-guarded shared game handle.

use std::sync::{Arc, Barrier};
use std::thread;
use tictactoe_rules::{Cell, GameController, Mark, MoveError, Outcome, SharedGame};

#[test]
fn test_racing_moves_on_one_cell() {
    for _ in 0..50 {
        let game = SharedGame::new();
        let barrier = Arc::new(Barrier::new(8));

        let handles: Vec<_> = (0..8)
            .map(|_| {
                let game = game.clone();
                let barrier = Arc::clone(&barrier);
                thread::spawn(move || {
                    barrier.wait();
                    game.apply_move(4)
                })
            })
            .collect();

        let results: Vec<_> = handles
            .into_iter()
            .map(|h| h.join().expect("thread finished"))
            .collect();

        assert_eq!(results.iter().filter(|r| r.is_ok()).count(), 1);
        assert!(results
            .iter()
            .filter_map(|r| r.as_ref().err())
            .all(|e| matches!(e, MoveError::CellOccupied(_))));

        let view = game.view();
        assert_eq!(view.cells().iter().filter(|c| !c.is_empty()).count(), 1);
        assert_eq!(*view.to_move(), Mark::O);
    }
}

#[test]
fn test_subscribers_see_accepted_moves_and_resets() {
    let game = SharedGame::new();
    let updates = game.subscribe();

    game.apply_move(0).expect("legal move");
    assert!(game.apply_move(0).is_err());
    game.apply_move(3).expect("legal move");
    game.reset();

    let views: Vec<_> = updates.try_iter().collect();
    assert_eq!(views.len(), 3);
    assert_eq!(views[0].cells()[0], Cell::Marked(Mark::X));
    assert_eq!(views[1].cells()[3], Cell::Marked(Mark::O));
    assert!(views[2].cells().iter().all(|c| c.is_empty()));
    assert_eq!(*views[2].outcome(), Outcome::InProgress);
}

#[test]
fn test_dropped_subscriber_is_pruned() {
    let game = SharedGame::new();
    let kept = game.subscribe();
    drop(game.subscribe());

    game.apply_move(4).expect("legal move");
    game.apply_move(0).expect("legal move");

    assert_eq!(kept.try_iter().count(), 2);
}

#[test]
fn test_wraps_existing_controller() {
    let mut controller = GameController::new();
    for index in [0, 3, 1, 4, 2] {
        controller.apply_move(index).expect("legal move");
    }
    let game = SharedGame::from_controller(controller);

    assert_eq!(game.current_outcome(), Outcome::Win(Mark::X));
    assert!(matches!(
        game.apply_move(8),
        Err(MoveError::GameAlreadyOver(_))
    ));
}
