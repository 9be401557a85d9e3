//! Composes the deck, navigation, classification and progress into the
//! view model a presenter renders.

use crate::classifier::Category;
use crate::config::Config;
use crate::deck::BillDeck;
use crate::error::{Error, Result};
use crate::navigation::{Command, NavigationController, NavigationState, Transition};
use crate::progress::Progress;
use crate::types::Bill;
use serde::Serialize;

/// Everything needed to render the current card
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ViewModel<'a> {
    pub position: usize,
    pub bill: &'a Bill,
    pub category: Category,
    pub advisory_message: Option<&'static str>,
    /// Pulse the call-to-action; true exactly when the category is urgent
    pub emphasis: bool,
    pub progress: Progress,
    pub last_command: Option<Command>,
    pub last_direction: i8,
}

/// Result of a successful command: the new view plus the transition to play
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Update<'a> {
    pub view: ViewModel<'a>,
    pub transition: Transition,
}

/// One entry of the scrollable all-cards presentation
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Card<'a> {
    pub index: usize,
    pub bill: &'a Bill,
    pub category: Category,
    pub advisory_message: Option<&'static str>,
    pub emphasis: bool,
    /// The card the list should scroll to
    pub current: bool,
}

/// Session engine for one deck of bills
#[derive(Debug, Clone)]
pub struct BillCardEngine {
    deck: BillDeck,
    controller: NavigationController,
    quota: u32,
}

impl BillCardEngine {
    /// Create an engine positioned on the first bill.
    ///
    /// An empty deck is accepted; every view or command on it then reports
    /// `EmptyCollection` so the presenter can render an empty state.
    pub fn new(deck: BillDeck, config: &Config) -> Result<Self> {
        config.validate()?;
        let quota = config.quota.resolve(deck.len());
        let controller = NavigationController::new(deck.len(), config.policy);

        tracing::debug!(
            bills = deck.len(),
            quota,
            policy = ?config.policy,
            "created bill card engine"
        );

        Ok(Self {
            deck,
            controller,
            quota,
        })
    }

    pub fn deck(&self) -> &BillDeck {
        &self.deck
    }

    pub fn state(&self) -> &NavigationState {
        self.controller.state()
    }

    pub fn quota(&self) -> u32 {
        self.quota
    }

    /// View model for the current position
    pub fn view(&self) -> Result<ViewModel<'_>> {
        if self.deck.is_empty() {
            return Err(Error::EmptyCollection);
        }

        let state = self.controller.state();
        let card = self.deck.get(state.position)?;
        let category = card.category;

        Ok(ViewModel {
            position: state.position,
            bill: &card.bill,
            category,
            advisory_message: category.advisory(),
            emphasis: category.needs_emphasis(),
            progress: Progress::new(state.position, self.quota)?,
            last_command: state.last_command,
            last_direction: state.last_direction,
        })
    }

    /// Apply a command and return the refreshed view with its transition
    pub fn dispatch(&mut self, command: Command) -> Result<Update<'_>> {
        let from = self.controller.position();
        let to = self.controller.apply(command)?;
        let transition = Transition::new(command, command.direction(), from, to);

        Ok(Update {
            view: self.view()?,
            transition,
        })
    }

    /// Apply commands in order, collecting each transition.
    /// Stops at the first failure.
    pub fn dispatch_all<I>(&mut self, commands: I) -> Result<Vec<Transition>>
    where
        I: IntoIterator<Item = Command>,
    {
        commands
            .into_iter()
            .map(|command| self.dispatch(command).map(|update| update.transition))
            .collect()
    }

    /// Every bill as a card, for presenters that show a scrolling list
    pub fn cards(&self) -> impl Iterator<Item = Card<'_>> {
        let position = self.controller.position();
        self.deck.iter().enumerate().map(move |(index, card)| Card {
            index,
            bill: &card.bill,
            category: card.category,
            advisory_message: card.category.advisory(),
            emphasis: card.category.needs_emphasis(),
            current: index == position,
        })
    }
}
