use std::fmt;

use serde::{Deserialize, Serialize};

use crate::Point;
use crate::config::GameConfig;
use crate::error::GoError;
use crate::goban::Goban;
use crate::group::{Group, GroupArena, GroupId};
use crate::ko::Ko;
use crate::stone::{Intersection, Stone};
use crate::territory::{self, Score};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Stage {
    BlackToPlay,
    WhiteToPlay,
    Done,
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Stage::BlackToPlay => write!(f, "black_to_play"),
            Stage::WhiteToPlay => write!(f, "white_to_play"),
            Stage::Done => write!(f, "done"),
        }
    }
}

/// Captures indexed by the capturing color.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Captures {
    pub black: u32,
    pub white: u32,
}

impl Captures {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, stone: Stone) -> u32 {
        match stone {
            Stone::Black => self.black,
            Stone::White => self.white,
        }
    }

    fn add(&mut self, stone: Stone, count: u32) {
        match stone {
            Stone::Black => self.black += count,
            Stone::White => self.white += count,
        }
    }
}

/// What a successful placement did to the board.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Placement {
    pub point: Point,
    pub stone: Stone,
    pub captured: Vec<Point>,
    pub ko: Option<Ko>,
}

/// Everything a front end needs to redraw the board.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameView {
    pub size: u8,
    pub stones: Vec<Intersection>,
    pub game_over: bool,
    pub turn: Stone,
}

/// A validated move that has not touched the board yet.
struct Plan {
    candidate: Group,
    merged: Vec<GroupId>,
    captured: Vec<GroupId>,
}

/// One game of Go: board, groups, turn, ko and pass bookkeeping.
#[derive(Debug, Clone)]
pub struct Engine {
    config: GameConfig,
    goban: Goban,
    groups: GroupArena,
    turn: Stone,
    ko: Option<Ko>,
    passed: bool,
    game_over: bool,
    captures: Captures,
}

impl Engine {
    /// Start a game on a `size`×`size` board. Panics if the size is unsupported.
    pub fn new(size: u8) -> Self {
        Self::with_config(GameConfig { size })
    }

    pub fn with_config(config: GameConfig) -> Self {
        if let Err(e) = config.validate() {
            panic!("{e}");
        }
        Engine {
            config,
            goban: Goban::with_size(config.size),
            groups: GroupArena::new(),
            turn: Stone::Black,
            ko: None,
            passed: false,
            game_over: false,
            captures: Captures::new(),
        }
    }

    /// Throw away the current game and start over with the same settings.
    pub fn reset(&mut self) {
        *self = Self::with_config(self.config);
        tracing::debug!(size = self.config.size, "game reset");
    }

    // -- Accessors --

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    pub fn size(&self) -> u8 {
        self.config.size
    }

    pub fn goban(&self) -> &Goban {
        &self.goban
    }

    pub fn groups(&self) -> &GroupArena {
        &self.groups
    }

    pub fn current_turn(&self) -> Stone {
        self.turn
    }

    pub fn ko(&self) -> Option<&Ko> {
        self.ko.as_ref()
    }

    pub fn captured(&self) -> &Captures {
        &self.captures
    }

    pub fn is_game_over(&self) -> bool {
        self.game_over
    }

    pub fn stage(&self) -> Stage {
        if self.game_over {
            Stage::Done
        } else {
            match self.turn {
                Stone::Black => Stage::BlackToPlay,
                Stone::White => Stage::WhiteToPlay,
            }
        }
    }

    pub fn stone_at(&self, point: Point) -> Option<Stone> {
        if !self.goban.on_board(point) {
            return None;
        }
        self.goban.get(point).map(|id| self.groups.get(id).color())
    }

    /// The group occupying `point`, if any.
    pub fn group_at(&self, point: Point) -> Option<&Group> {
        if !self.goban.on_board(point) {
            return None;
        }
        self.goban.get(point).map(|id| self.groups.get(id))
    }

    /// Row-major colors of every point.
    pub fn snapshot(&self) -> Vec<Intersection> {
        (0..self.goban.area())
            .map(|i| {
                let id = self.goban.get_idx(i);
                Intersection::from(id.map(|id| self.groups.get(id).color()))
            })
            .collect()
    }

    pub fn view(&self) -> GameView {
        GameView {
            size: self.size(),
            stones: self.snapshot(),
            game_over: self.game_over,
            turn: self.turn,
        }
    }

    // -- Game actions --

    /// Play at `(x, y)` for the side to move. Returns whether the move was
    /// legal; an illegal move leaves the game untouched.
    ///
    /// Panics if the point is off the board.
    pub fn place_stone(&mut self, x: u8, y: u8) -> bool {
        assert!(
            self.goban.on_board((x, y)),
            "point {:?} is off a {}x{} board",
            (x, y),
            self.size(),
            self.size()
        );
        self.try_play((x, y)).is_ok()
    }

    /// Like [`Engine::place_stone`] but reports why a move was rejected.
    pub fn try_play(&mut self, point: Point) -> Result<Placement, GoError> {
        let stone = self.turn;
        let plan = match self.validate(point, stone) {
            Ok(plan) => plan,
            Err(e) => {
                tracing::debug!(?point, %stone, reason = %e, "move rejected");
                return Err(e);
            }
        };

        let placement = self.commit(point, stone, plan);
        self.turn = stone.opp();
        self.passed = false;
        Ok(placement)
    }

    /// Whether the side to move could play at `point` right now.
    pub fn is_legal(&self, point: Point) -> bool {
        self.validate(point, self.turn).is_ok()
    }

    /// Returns false only if the game was already over.
    pub fn pass_turn(&mut self) -> bool {
        if self.game_over {
            return false;
        }

        if self.passed {
            self.game_over = true;
            tracing::debug!(stone = %self.turn, "second consecutive pass, game over");
            return true;
        }

        tracing::debug!(stone = %self.turn, "pass");
        self.turn = self.turn.opp();
        self.passed = true;
        self.ko = None;
        true
    }

    /// Area score of the current position.
    pub fn score(&self) -> Score {
        territory::score(&self.goban, &self.snapshot())
    }

    // -- Move validation and execution --

    /// Work out what playing `stone` at `point` would do, without mutating anything.
    fn validate(&self, point: Point, stone: Stone) -> Result<Plan, GoError> {
        if !self.goban.on_board(point) {
            return Err(GoError::NotOnBoard);
        }
        if self.game_over {
            return Err(GoError::GameOver);
        }
        if self.goban.get(point).is_some() {
            return Err(GoError::Overwrite);
        }
        if self.ko.as_ref().is_some_and(|ko| ko.pos == point) {
            return Err(GoError::KoViolation);
        }

        let mut candidate = Group::singleton(point, stone);
        let mut merged = Vec::new();
        let mut captured = Vec::new();

        for n in self.goban.neighbors_of(point) {
            candidate.add_border(n);

            let Some(id) = self.goban.get(n) else {
                continue;
            };
            let other = self.groups.get(id);

            if other.color() == stone {
                // Merging again through a second neighbor is harmless and
                // drops that neighbor from the border.
                candidate = Group::merge(&candidate, other);
                if !merged.contains(&id) {
                    merged.push(id);
                }
            } else if other.liberties(&self.goban) == 1 && !captured.contains(&id) {
                captured.push(id);
            }
        }

        if captured.is_empty() && candidate.liberties(&self.goban) == 0 {
            return Err(GoError::Suicide);
        }

        Ok(Plan {
            candidate,
            merged,
            captured,
        })
    }

    fn commit(&mut self, point: Point, stone: Stone, plan: Plan) -> Placement {
        let Plan {
            candidate,
            merged,
            captured,
        } = plan;

        for id in merged {
            self.groups.retire(id);
        }

        let mut captured_points = Vec::new();
        let single_stone_capture = captured.len() == 1;
        for id in captured {
            let dead = self.groups.retire(id);
            for &p in dead.stones() {
                self.goban.set(p, None);
            }
            self.captures.add(stone, dead.size() as u32);
            captured_points.extend(dead.stones().iter().copied());
        }

        let lone_stone = candidate.size() == 1;
        let stones: Vec<Point> = candidate.stones().iter().copied().collect();
        let id = self.groups.insert(candidate);
        for p in stones {
            self.goban.set(p, Some(id));
        }

        self.ko = if single_stone_capture && captured_points.len() == 1 && lone_stone {
            Some(Ko {
                pos: captured_points[0],
                illegal: stone.opp(),
            })
        } else {
            None
        };

        if !captured_points.is_empty() {
            tracing::debug!(
                ?point,
                %stone,
                count = captured_points.len(),
                "captured stones"
            );
        }
        if let Some(ko) = &self.ko {
            tracing::debug!(pos = ?ko.pos, illegal = %ko.illegal, "ko");
        }

        Placement {
            point,
            stone,
            captured: captured_points,
            ko: self.ko.clone(),
        }
    }
}
