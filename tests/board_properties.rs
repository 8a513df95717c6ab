use std::time::Duration;

use ninuki::search::Searcher;
use ninuki::{Board, MoveRecord, Pos, Stone};
use proptest::prelude::*;
use rand::RngCore;
use rand_xoshiro::rand_core::SeedableRng;
use rand_xoshiro::Xoshiro256PlusPlus;

/// Play up to `plies` random legal moves, returning each record with its target.
fn random_game(board: &mut Board, seed: u64, plies: usize) -> Vec<(Pos, MoveRecord)> {
    let mut rng = Xoshiro256PlusPlus::seed_from_u64(seed);
    let mut played = Vec::new();
    for _ in 0..plies {
        let empty: Vec<Pos> = (0..board.size() * board.size())
            .map(|idx| Pos::from_index(idx, board.size()))
            .filter(|&p| board.is_empty(p))
            .collect();
        if empty.is_empty() || board.has_won(Stone::Black) || board.has_won(Stone::White) {
            break;
        }
        let pos = empty[(rng.next_u32() as usize) % empty.len()];
        // Forbidden targets are skipped, not retried
        if let Ok(record) = board.apply_move(i32::from(pos.row), i32::from(pos.col)) {
            played.push((pos, record));
        }
    }
    played
}

proptest! {
    #![proptest_config(ProptestConfig { cases: 48, .. ProptestConfig::default() })]

    #[test]
    fn prop_hash_matches_full_recompute(
        size in prop::sample::select(vec![5usize, 7, 9]),
        seed in any::<u64>(),
        plies in 1usize..40,
    ) {
        let mut board = Board::new(size);
        random_game(&mut board, seed, plies);
        prop_assert_eq!(board.hash(), board.zobrist().hash(&board));
    }

    #[test]
    fn prop_undo_restores_every_prefix(
        size in prop::sample::select(vec![5usize, 7, 9]),
        seed in any::<u64>(),
        plies in 1usize..40,
    ) {
        let mut board = Board::new(size);
        let mut snapshots = Vec::new();
        let mut rng = Xoshiro256PlusPlus::seed_from_u64(seed);
        let mut played = Vec::new();

        for _ in 0..plies {
            let empty: Vec<Pos> = (0..size * size)
                .map(|idx| Pos::from_index(idx, size))
                .filter(|&p| board.is_empty(p))
                .collect();
            if empty.is_empty() {
                break;
            }
            let pos = empty[(rng.next_u32() as usize) % empty.len()];
            let before = board.clone();
            let record = board.place(i32::from(pos.row), i32::from(pos.col));
            prop_assert!(record.executed());
            snapshots.push(before);
            played.push((pos, record));
        }

        while let Some((pos, record)) = played.pop() {
            board.undo(i32::from(pos.row), i32::from(pos.col), &record);
            let expected = snapshots.pop().unwrap();
            prop_assert_eq!(&board, &expected);
            prop_assert_eq!(board.hash(), expected.hash());
        }
        prop_assert_eq!(board, Board::new(size));
    }

    #[test]
    fn prop_captures_match_removed_stones(
        seed in any::<u64>(),
        plies in 1usize..60,
    ) {
        let mut board = Board::new(7);
        let played = random_game(&mut board, seed, plies);
        let removed: usize = played.iter().map(|(_, r)| r.captured().len()).sum();
        let captured = usize::from(board.captures(Stone::Black)) + usize::from(board.captures(Stone::White));
        prop_assert_eq!(removed, captured);
        prop_assert_eq!(board.stone_count() + removed, played.len());
    }
}

proptest! {
    #![proptest_config(ProptestConfig { cases: 8, .. ProptestConfig::default() })]

    #[test]
    fn prop_search_leaves_board_untouched(
        seed in any::<u64>(),
        plies in 1usize..12,
    ) {
        let mut board = Board::new(9);
        random_game(&mut board, seed, plies);
        prop_assume!(!board.has_won(Stone::Black) && !board.has_won(Stone::White));

        let before = board.clone();
        let mut searcher = Searcher::new(12);
        let result = searcher.search(&mut board, 2, Duration::from_millis(200));
        prop_assert_eq!(&board, &before);
        if let Some(pos) = result.best_move {
            prop_assert!(board.is_empty(pos));
        }
    }
}
