use serde::{Deserialize, Serialize};
use std::fmt;

/// One face of a six-sided die, ordered by pip count.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
pub enum DieFace {
    #[default]
    One,
    Two,
    Three,
    Four,
    Five,
    Six,
}

impl DieFace {
    pub const ALL: [DieFace; 6] = [
        DieFace::One,
        DieFace::Two,
        DieFace::Three,
        DieFace::Four,
        DieFace::Five,
        DieFace::Six,
    ];

    /// Pip count used for scoring.
    pub fn value(self) -> u32 {
        match self {
            DieFace::One => 1,
            DieFace::Two => 2,
            DieFace::Three => 3,
            DieFace::Four => 4,
            DieFace::Five => 5,
            DieFace::Six => 6,
        }
    }

    pub fn word(self) -> &'static str {
        match self {
            DieFace::One => "One",
            DieFace::Two => "Two",
            DieFace::Three => "Three",
            DieFace::Four => "Four",
            DieFace::Five => "Five",
            DieFace::Six => "Six",
        }
    }

    pub fn from_value(value: u8) -> Option<Self> {
        match value {
            1..=6 => Some(Self::ALL[usize::from(value) - 1]),
            _ => None,
        }
    }
}

impl fmt::Display for DieFace {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // pad() keeps width/alignment flags working for the column layout
        f.pad(self.word())
    }
}

/// Fixed dimensions and bonus rule of a game.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameShape {
    pub players: usize,
    pub rounds: usize,
    pub bonus_points: u32,
}

impl GameShape {
    pub const STANDARD: GameShape = GameShape {
        players: 4,
        rounds: 6,
        bonus_points: 5,
    };

    pub fn team_of(&self, player: usize) -> Team {
        if player % 2 == 0 {
            Team::A
        } else {
            Team::B
        }
    }

    pub fn members(&self, team: Team) -> Vec<usize> {
        (0..self.players).filter(|&p| self.team_of(p) == team).collect()
    }
}

impl Default for GameShape {
    fn default() -> Self {
        Self::STANDARD
    }
}

/// Players × rounds table of rolls. Every cell starts as `DieFace::One`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResultGrid {
    players: usize,
    rounds: usize,
    cells: Vec<DieFace>,
}

impl ResultGrid {
    pub fn new(shape: &GameShape) -> Self {
        Self {
            players: shape.players,
            rounds: shape.rounds,
            cells: vec![DieFace::One; shape.players * shape.rounds],
        }
    }

    pub fn players(&self) -> usize {
        self.players
    }

    pub fn rounds(&self) -> usize {
        self.rounds
    }

    pub fn get(&self, player: usize, round: usize) -> DieFace {
        self.cells[self.index(player, round)]
    }

    pub fn set(&mut self, player: usize, round: usize, face: DieFace) {
        let idx = self.index(player, round);
        self.cells[idx] = face;
    }

    pub fn player_rolls(&self, player: usize) -> &[DieFace] {
        let start = self.index(player, 0);
        &self.cells[start..start + self.rounds]
    }

    pub fn round_rolls(&self, round: usize) -> impl Iterator<Item = DieFace> + '_ {
        (0..self.players).map(move |p| self.get(p, round))
    }

    fn index(&self, player: usize, round: usize) -> usize {
        assert!(
            player < self.players && round < self.rounds,
            "cell ({player}, {round}) outside {}x{} grid",
            self.players,
            self.rounds
        );
        player * self.rounds + round
    }
}

/// Per-round bonus recipient, `None` when no player strictly led.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BonusWinners(Vec<Option<usize>>);

impl BonusWinners {
    pub fn new(winners: Vec<Option<usize>>) -> Self {
        Self(winners)
    }

    pub fn winner(&self, round: usize) -> Option<usize> {
        self.0.get(round).copied().flatten()
    }

    pub fn iter(&self) -> impl Iterator<Item = Option<usize>> + '_ {
        self.0.iter().copied()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PlayerScore {
    pub player: usize,
    pub base: u32,
    pub bonus: u32,
    pub total: u32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Team {
    A,
    B,
}

impl fmt::Display for Team {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Team::A => f.write_str("Team A"),
            Team::B => f.write_str("Team B"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TeamTotal {
    pub team: Team,
    pub members: Vec<usize>,
    pub total: u32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Verdict {
    TeamAWins,
    TeamBWins,
    Tie,
}

impl Verdict {
    pub fn decide(team_a: u32, team_b: u32) -> Self {
        match team_a.cmp(&team_b) {
            std::cmp::Ordering::Greater => Verdict::TeamAWins,
            std::cmp::Ordering::Less => Verdict::TeamBWins,
            std::cmp::Ordering::Equal => Verdict::Tie,
        }
    }

    pub fn message(self) -> &'static str {
        match self {
            Verdict::TeamAWins => "Team A wins.",
            Verdict::TeamBWins => "Team B wins.",
            Verdict::Tie => "It's a tie!",
        }
    }
}

/// An opened roll data file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RollSource {
    pub name: String,
    pub content: String,
}

impl RollSource {
    pub fn from_bytes(name: impl Into<String>, data: &[u8]) -> Self {
        Self {
            name: name.into(),
            content: String::from_utf8_lossy(data).into_owned(),
        }
    }
}

/// Everything the report writers need about one scored game.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameOutcome {
    pub source_name: String,
    pub grid: ResultGrid,
    pub bonus: BonusWinners,
    pub scores: Vec<PlayerScore>,
    pub team_a: TeamTotal,
    pub team_b: TeamTotal,
    pub verdict: Verdict,
}
