use serde::Serialize;

use crate::goban::Goban;
use crate::stone::{Intersection, Stone};

/// Classify every empty point by the colors its empty region touches.
///
/// Returns a flat array (same layout as `stones`) where stones keep their own
/// color and each empty point takes the owner of its region:
/// - only Black borders the region: `Black`
/// - only White borders the region: `White`
/// - both or neither: `Empty` (dame)
pub fn estimate_territory(goban: &Goban, stones: &[Intersection]) -> Vec<Intersection> {
    let size = goban.area();
    assert_eq!(stones.len(), size, "snapshot does not match the board");

    let mut ownership = stones.to_vec();
    let mut visited = vec![false; size];

    for start in 0..size {
        if visited[start] || !stones[start].is_empty() {
            continue;
        }

        // Flood-fill this empty region
        let mut region = Vec::new();
        let mut border_colors: u8 = 0; // bit 0 = Black seen, bit 1 = White seen
        let mut stack = vec![start];
        visited[start] = true;

        while let Some(i) = stack.pop() {
            region.push(i);
            for &n in goban.neighbor_indices(i) {
                match stones[n] {
                    Intersection::Black => border_colors |= 1,
                    Intersection::White => border_colors |= 2,
                    Intersection::Empty if !visited[n] => {
                        visited[n] = true;
                        stack.push(n);
                    }
                    Intersection::Empty => {}
                }
            }
        }

        let owner = match border_colors {
            1 => Intersection::Black,
            2 => Intersection::White,
            _ => Intersection::Empty,
        };

        for &i in &region {
            ownership[i] = owner;
        }
    }

    ownership
}

/// Stones on the board plus empty points owned, for one color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct Tally {
    pub stones: u32,
    pub territory: u32,
}

impl Tally {
    pub fn total(&self) -> u32 {
        self.stones + self.territory
    }
}

/// Final area count. `score` is Black's total minus White's total.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Score {
    pub score: i32,
    pub ownership: Vec<Intersection>,
    pub black: Tally,
    pub white: Tally,
}

impl Score {
    pub fn winner(&self) -> Option<Stone> {
        match self.score.signum() {
            1 => Some(Stone::Black),
            -1 => Some(Stone::White),
            _ => None,
        }
    }

    pub fn is_jigo(&self) -> bool {
        self.score == 0
    }

    pub fn result(&self) -> String {
        format_result(self.score)
    }
}

/// Count stones and territory for both colors. No komi is applied.
pub fn score(goban: &Goban, stones: &[Intersection]) -> Score {
    let ownership = estimate_territory(goban, stones);
    let mut black = Tally::default();
    let mut white = Tally::default();

    for (stone, owner) in stones.iter().zip(&ownership) {
        let tally = match owner {
            Intersection::Black => &mut black,
            Intersection::White => &mut white,
            Intersection::Empty => continue,
        };
        if stone.is_empty() {
            tally.territory += 1;
        } else {
            tally.stones += 1;
        }
    }

    let score = black.total() as i32 - white.total() as i32;
    tracing::info!(
        score,
        black_stones = black.stones,
        black_territory = black.territory,
        white_stones = white.stones,
        white_territory = white.territory,
        "scored position"
    );

    Score {
        score,
        ownership,
        black,
        white,
    }
}

/// Format the game result from a signed score.
///
/// Returns "B+{n}", "W+{n}", or "Jigo".
pub fn format_result(score: i32) -> String {
    if score > 0 {
        format!("B+{score}")
    } else if score < 0 {
        format!("W+{}", -score)
    } else {
        "Jigo".to_string()
    }
}
