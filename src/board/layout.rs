//! Deterministic board generation.
//!
//! Tile types come from an index-modulo pattern, checked in order:
//!
//! | index             | type         |
//! |-------------------|--------------|
//! | `0`               | `start`      |
//! | `size - 1`        | `finish`     |
//! | `i % 11 == 0`     | `wild`       |
//! | `i % 7 == 0`      | `punishment` |
//! | `i % 5 == 0`      | `reward`     |
//! | `i % 3 == 0`      | `action`     |
//! | otherwise         | `normal`     |
//!
//! Action tiles are linked to action-deck cards in deck order, wrapping.

use super::tile::{BoardTile, TileType};
use super::Board;
use crate::cards::Deck;

/// Default board length.
pub const DEFAULT_BOARD_SIZE: usize = 42;

/// Bonus spaces for landing on a reward tile.
pub const REWARD_TILE_BONUS: i64 = 2;

/// Tile type for `index` on a board of `size` tiles.
#[must_use]
pub fn tile_type_at(index: usize, size: usize) -> TileType {
    if index == 0 {
        TileType::Start
    } else if index + 1 == size {
        TileType::Finish
    } else if index % 11 == 0 {
        TileType::Wild
    } else if index % 7 == 0 {
        TileType::Punishment
    } else if index % 5 == 0 {
        TileType::Reward
    } else if index % 3 == 0 {
        TileType::Action
    } else {
        TileType::Normal
    }
}

/// Build a board of `size` tiles, linking action tiles to `deck`.
#[must_use]
pub fn generate(size: usize, deck: &Deck) -> Board {
    let mut action_tiles = 0usize;

    let tiles = (0..size)
        .map(|index| {
            let tile_type = tile_type_at(index, size);
            let tile = BoardTile::new(index as u32, tile_type, index);

            match tile_type {
                TileType::Action => {
                    let linked = (!deck.is_empty())
                        .then(|| deck[action_tiles % deck.len()].id.clone());
                    action_tiles += 1;
                    match linked {
                        Some(card_id) => tile.with_card(card_id),
                        None => tile,
                    }
                }
                TileType::Reward => tile.with_effect("Move forward 2 spaces"),
                TileType::Punishment => tile.with_effect("Draw a punishment card"),
                TileType::Wild => tile.with_effect("Draw any card"),
                _ => tile,
            }
        })
        .collect();

    Board::from_tiles(tiles)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::default_action_deck;

    #[test]
    fn test_default_board_endpoints() {
        let board = generate(DEFAULT_BOARD_SIZE, &default_action_deck());

        assert_eq!(board.len(), 42);
        assert_eq!(board.tiles()[0].tile_type, TileType::Start);
        assert_eq!(board.tiles()[41].tile_type, TileType::Finish);
    }

    #[test]
    fn test_positions_match_indices() {
        let board = generate(30, &default_action_deck());

        for (index, tile) in board.tiles().iter().enumerate() {
            assert_eq!(tile.position, index);
            assert_eq!(tile.id as usize, index);
        }
    }

    #[test]
    fn test_pattern() {
        assert_eq!(tile_type_at(3, 42), TileType::Action);
        assert_eq!(tile_type_at(5, 42), TileType::Reward);
        assert_eq!(tile_type_at(7, 42), TileType::Punishment);
        assert_eq!(tile_type_at(11, 42), TileType::Wild);
        assert_eq!(tile_type_at(33, 42), TileType::Wild);
        assert_eq!(tile_type_at(35, 42), TileType::Punishment);
        assert_eq!(tile_type_at(4, 42), TileType::Normal);
    }

    #[test]
    fn test_action_tiles_link_cards_in_deck_order() {
        let deck = default_action_deck();
        let board = generate(DEFAULT_BOARD_SIZE, &deck);

        let linked: Vec<_> = board
            .tiles()
            .iter()
            .filter(|t| t.tile_type == TileType::Action)
            .map(|t| t.action_card_id.clone().unwrap())
            .collect();

        assert_eq!(board.tiles()[3].action_card_id.as_deref(), Some(deck[0].id.as_str()));
        assert_eq!(linked[1], deck[1].id);
        assert!(linked.iter().all(|id| deck.iter().any(|c| &c.id == id)));
    }

    #[test]
    fn test_empty_deck_leaves_action_tiles_unlinked() {
        let board = generate(20, &Deck::new());
        assert!(board.tiles()[3].action_card_id.is_none());
    }

    #[test]
    fn test_generation_is_deterministic() {
        let deck = default_action_deck();
        assert_eq!(generate(42, &deck), generate(42, &deck));
    }
}
