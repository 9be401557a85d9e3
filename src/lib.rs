//! Navigation and derived-state engine for swiping through legislative bills.
//!
//! A session holds a fixed deck of bills. Four commands (back, dislike, skip,
//! like) move a position through the deck under a wrap or clamp policy, and
//! every move yields a fresh view model: the current bill, its advisory
//! category, daily progress, and a transition for the presenter to animate.

pub mod classifier;
pub mod config;
pub mod deck;
pub mod engine;
pub mod error;
pub mod logging;
pub mod navigation;
pub mod progress;
pub mod types;

pub use classifier::{classify, Category};
pub use config::{Config, ConfigBuilder, Quota, DEFAULT_DAILY_QUOTA};
pub use deck::{BillDeck, ClassifiedBill};
pub use engine::{BillCardEngine, Card, Update, ViewModel};
pub use error::{Error, Result};
pub use navigation::{
    wrap_step, Accent, Command, Direction, ExitMotion, NavigationController, NavigationPolicy,
    NavigationState, Transition,
};
pub use progress::{compute_percent, Progress};
pub use types::{Bill, BillFile, BillStats};

/// Re-export commonly used types for convenience
pub mod prelude {
    pub use crate::classifier::{classify, Category};
    pub use crate::config::{Config, ConfigBuilder, Quota};
    pub use crate::deck::BillDeck;
    pub use crate::engine::{BillCardEngine, ViewModel};
    pub use crate::error::{Error, Result};
    pub use crate::navigation::{Command, NavigationPolicy};
    pub use crate::types::Bill;
}
