use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// How the position behaves at the ends of the deck
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NavigationPolicy {
    /// Moving past either end wraps around (single-card swipe view)
    #[default]
    Wrap,
    /// Moving past either end stays on the boundary card (scrolling list view)
    Clamp,
}

impl FromStr for NavigationPolicy {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "wrap" => Ok(NavigationPolicy::Wrap),
            "clamp" => Ok(NavigationPolicy::Clamp),
            other => Err(Error::UnknownPolicy(other.to_string())),
        }
    }
}

/// Sign of a requested move
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(into = "i8", try_from = "i8")]
pub enum Direction {
    Backward,
    Stay,
    Forward,
}

impl Direction {
    pub const fn signum(self) -> i8 {
        match self {
            Direction::Backward => -1,
            Direction::Stay => 0,
            Direction::Forward => 1,
        }
    }
}

impl From<Direction> for i8 {
    fn from(direction: Direction) -> Self {
        direction.signum()
    }
}

impl TryFrom<i8> for Direction {
    type Error = Error;

    fn try_from(value: i8) -> Result<Self> {
        match value {
            -1 => Ok(Direction::Backward),
            0 => Ok(Direction::Stay),
            1 => Ok(Direction::Forward),
            other => Err(Error::InvalidDirection(other)),
        }
    }
}

/// The four user commands
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Command {
    Back,
    Dislike,
    Skip,
    Like,
}

impl Command {
    /// Direction each command requests. Back and Skip both request a zero
    /// move; see [`wrap_step`] for what that means under `Wrap`.
    pub const fn direction(self) -> Direction {
        match self {
            Command::Back => Direction::Stay,
            Command::Dislike => Direction::Backward,
            Command::Skip => Direction::Stay,
            Command::Like => Direction::Forward,
        }
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            Command::Back => "back",
            Command::Dislike => "dislike",
            Command::Skip => "skip",
            Command::Like => "like",
        }
    }
}

impl FromStr for Command {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "back" => Ok(Command::Back),
            "dislike" => Ok(Command::Dislike),
            "skip" => Ok(Command::Skip),
            "like" => Ok(Command::Like),
            other => Err(Error::UnknownCommand(other.to_string())),
        }
    }
}

/// Step actually taken under `Wrap` for a requested direction.
///
/// A zero request still advances one card forward, so Skip (and Back) move
/// on instead of doing nothing. Kept as its own rule until it is decided
/// whether Skip should always move forward.
pub const fn wrap_step(direction: Direction) -> i64 {
    match direction {
        Direction::Stay => 1,
        other => other.signum() as i64,
    }
}

/// Mutable, session-scoped navigation state
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NavigationState {
    pub position: usize,
    pub last_command: Option<Command>,
    /// Sign of the last requested move (not the step actually taken)
    pub last_direction: i8,
}

/// Owns the navigation state for a deck of fixed length
#[derive(Debug, Clone)]
pub struct NavigationController {
    len: usize,
    policy: NavigationPolicy,
    state: NavigationState,
}

impl NavigationController {
    /// Create a controller positioned on the first card
    pub fn new(len: usize, policy: NavigationPolicy) -> Self {
        Self {
            len,
            policy,
            state: NavigationState::default(),
        }
    }

    pub fn state(&self) -> &NavigationState {
        &self.state
    }

    pub fn position(&self) -> usize {
        self.state.position
    }

    pub fn policy(&self) -> NavigationPolicy {
        self.policy
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Move according to `direction` and record `command` as the last action.
    /// Returns the new position.
    pub fn advance(&mut self, direction: Direction, command: Command) -> Result<usize> {
        if self.len == 0 {
            return Err(Error::EmptyCollection);
        }

        let n = self.len as i64;
        let current = self.state.position as i64;
        let next = match self.policy {
            NavigationPolicy::Wrap => (current + wrap_step(direction) + n).rem_euclid(n),
            NavigationPolicy::Clamp => (current + i64::from(direction.signum())).clamp(0, n - 1),
        };

        tracing::debug!(
            command = command.as_str(),
            direction = direction.signum(),
            policy = ?self.policy,
            from = current,
            to = next,
            "advanced bill position"
        );

        self.state.position = next as usize;
        self.state.last_command = Some(command);
        self.state.last_direction = direction.signum();
        Ok(self.state.position)
    }

    /// Apply a command using its own direction
    pub fn apply(&mut self, command: Command) -> Result<usize> {
        self.advance(command.direction(), command)
    }
}

/// Card exit animation requested by a command
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ExitMotion {
    SwipeRight,
    SwipeLeft,
    DropDown,
    LiftUp,
}

/// Border accent shown while a card leaves
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Accent {
    Affirm,
    Oppose,
    Neutral,
}

/// One-shot effect request emitted alongside each updated view model.
/// Presenters may animate with it or ignore it; it never feeds back into
/// the position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Transition {
    pub command: Command,
    pub direction: Direction,
    pub from: usize,
    pub to: usize,
    pub exit: ExitMotion,
    /// Horizontal offset the incoming card starts from, in percent of width
    pub enter_offset: i32,
    pub accent: Accent,
}

impl Transition {
    pub fn new(command: Command, direction: Direction, from: usize, to: usize) -> Self {
        let exit = match command {
            Command::Like => ExitMotion::SwipeRight,
            Command::Dislike => ExitMotion::SwipeLeft,
            Command::Skip => ExitMotion::DropDown,
            Command::Back => ExitMotion::LiftUp,
        };
        let accent = match command {
            Command::Like => Accent::Affirm,
            Command::Dislike => Accent::Oppose,
            Command::Skip | Command::Back => Accent::Neutral,
        };

        Self {
            command,
            direction,
            from,
            to,
            exit,
            enter_offset: i32::from(direction.signum()) * 100,
            accent,
        }
    }
}
