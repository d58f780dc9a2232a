use std::fmt;
use std::str::FromStr;

use serde::{Serialize, Deserialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Position {
    pub x: usize,
    pub y: usize,
}

impl Position {
    pub fn new(x: usize, y: usize) -> Self {
        Self { x, y }
    }
}

/// The two sides of the game. A cell with no owner uses `None`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Player {
    Human,
    Opponent,
}

impl Player {
    /// The player who moves after `self`.
    pub fn other(self) -> Self {
        match self {
            Player::Human => Player::Opponent,
            Player::Opponent => Player::Human,
        }
    }
}

impl fmt::Display for Player {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Player::Human => write!(f, "Human"),
            Player::Opponent => write!(f, "AI"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Cell {
    pub owner: Option<Player>,
    pub level: u32,
    pub resource: bool,
}

impl Cell {
    pub fn is_owned_by(&self, player: Player) -> bool {
        self.owner == Some(player)
    }

    pub fn is_empty(&self) -> bool {
        self.owner.is_none()
    }
}

/// Deserialized from its label, so unknown command names fail with `ParseActionError`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String")]
pub enum Action {
    Expand,
    Develop,
    Deal,
}

impl Action {
    pub const ALL: [Action; 3] = [Action::Expand, Action::Develop, Action::Deal];

    pub fn label(self) -> &'static str {
        match self {
            Action::Expand => "Expand",
            Action::Develop => "Develop",
            Action::Deal => "Deal",
        }
    }
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Returned when a command label names no known action.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseActionError(pub String);

impl fmt::Display for ParseActionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown action '{}'", self.0)
    }
}

impl std::error::Error for ParseActionError {}

impl TryFrom<String> for Action {
    type Error = ParseActionError;

    fn try_from(label: String) -> Result<Self, Self::Error> {
        label.parse()
    }
}

impl FromStr for Action {
    type Err = ParseActionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Action::ALL
            .into_iter()
            .find(|action| action.label() == s)
            .ok_or_else(|| ParseActionError(s.to_string()))
    }
}

/// Whose turn it is, as seen by the turn controller.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    HumanTurn,
    OpponentTurn,
}

/// What the host must do after a turn transition.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TurnSignal {
    /// The opponent is to move; the host schedules `choose_and_act`.
    OpponentMoveRequested,
    /// Control is back with the human.
    AwaitHuman,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_action_labels_parse_back() {
        for action in Action::ALL {
            assert_eq!(action.to_string().parse::<Action>(), Ok(action));
        }
    }

    #[test]
    fn test_unknown_action_label_is_rejected() {
        let err = "Attack".parse::<Action>().unwrap_err();
        assert_eq!(err, ParseActionError("Attack".to_string()));
        assert_eq!(err.to_string(), "unknown action 'Attack'");
    }

    #[test]
    fn test_other_player_alternates() {
        assert_eq!(Player::Human.other(), Player::Opponent);
        assert_eq!(Player::Opponent.other(), Player::Human);
    }

    #[test]
    fn test_default_cell_is_unowned() {
        let cell = Cell::default();
        assert!(cell.is_empty());
        assert_eq!(cell.level, 0);
        assert!(!cell.resource);
    }
}
