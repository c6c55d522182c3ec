//! Listing screen view model.
//!
//! One `ListingViewModel` backs one listing screen for its lifetime: it
//! tracks the catalog fetch issued on activation, the user's query and
//! the filtered records the screen should render. All screen state
//! lives in a single sum type, so a screen can never be loading and
//! failed at the same time.

use crate::catalog::{FetchError, ShowRecord};
use crate::filter;

/// Which listing screen a view model is backing.
///
/// The two screens intentionally differ in how they treat an empty
/// query: the home listing shows the whole catalog, the search screen
/// shows nothing until something has been typed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScreenKind {
    /// The home listing with its full catalog grid
    Home,
    /// The dedicated search screen
    Search,
}

/// The lifecycle of a listing screen.
#[derive(Debug, Clone, PartialEq)]
pub enum ListingState {
    /// The catalog fetch is still in flight
    Loading,
    /// The catalog arrived; `shows` holds the full fetched sequence
    Ready {
        /// Every record the fetch returned, in source order
        shows: Vec<ShowRecord>,
    },
    /// The fetch failed; the screen displays the message until torn down
    Failed {
        /// Human-readable description of what went wrong
        message: String,
    },
}

/// Handle for the catalog fetch of one screen activation.
///
/// The ticket is handed out when the view model enters `Loading` and
/// must be returned together with the fetch result. Tearing the screen
/// down invalidates the ticket, so a result that arrives late resolves
/// to a discard instead of a state change.
#[derive(Debug)]
pub struct FetchTicket {
    generation: u64,
}

/// Outcome of handing a fetch result back to the view model.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FetchResolution {
    /// The result was applied and the screen state advanced
    Applied,
    /// The ticket was stale; the result was dropped without any effect
    Discarded,
}

/// State holder for one listing screen instance.
///
/// The record sequence is owned exclusively by the view model. It is
/// never mutated in place, only replaced wholesale when the fetch
/// resolves, and dropped with the view model when the screen goes away.
pub struct ListingViewModel {
    screen: ScreenKind,
    state: ListingState,
    query: String,
    visible: Vec<ShowRecord>,
    generation: u64,
}

impl ListingViewModel {
    /// Creates the view model for a freshly activated screen.
    ///
    /// The screen starts out loading. The returned ticket belongs to
    /// the one catalog fetch the caller is expected to start right
    /// away; there is no way to request another fetch later.
    pub fn new(screen: ScreenKind) -> (Self, FetchTicket) {
        let model = Self {
            screen,
            state: ListingState::Loading,
            query: String::new(),
            visible: Vec::new(),
            generation: 0,
        };
        let ticket = FetchTicket { generation: 0 };
        (model, ticket)
    }

    /// Current screen state.
    pub fn state(&self) -> &ListingState {
        &self.state
    }

    /// The query as last set through `set_query`.
    pub fn query(&self) -> &str {
        &self.query
    }

    /// The records the screen should render, already filtered.
    ///
    /// Empty unless the state is `Ready`.
    pub fn visible_shows(&self) -> &[ShowRecord] {
        &self.visible
    }

    /// Hands the result of the catalog fetch back to the view model.
    ///
    /// A current ticket advances `Loading` to `Ready` on success or to
    /// `Failed` on error; both transitions are terminal for this screen
    /// instance. A ticket invalidated by `detach` leaves the view model
    /// untouched and reports `Discarded`: a screen that was torn down
    /// while its fetch was pending must not receive a state update.
    pub fn resolve_fetch(
        &mut self,
        ticket: FetchTicket,
        result: Result<Vec<ShowRecord>, FetchError>,
    ) -> FetchResolution {
        if ticket.generation != self.generation {
            return FetchResolution::Discarded;
        }

        match result {
            Ok(shows) => {
                self.state = ListingState::Ready { shows };
                self.recompute_visible();
            }
            Err(error) => {
                self.state = ListingState::Failed {
                    message: error.to_string(),
                };
            }
        }
        FetchResolution::Applied
    }

    /// Marks the screen as torn down.
    ///
    /// Any outstanding fetch ticket becomes stale.
    pub fn detach(&mut self) {
        self.generation += 1;
    }

    /// Updates the query and recomputes the visible records.
    ///
    /// The recomputation is synchronous and idempotent: setting the
    /// same query again yields the same visible sequence. Outside of
    /// `Ready` the query is only stored and applied once the catalog
    /// arrives.
    pub fn set_query(&mut self, query: &str) {
        self.query = query.to_string();
        self.recompute_visible();
    }

    fn recompute_visible(&mut self) {
        let ListingState::Ready { shows } = &self.state else {
            self.visible = Vec::new();
            return;
        };
        self.visible = match self.screen {
            ScreenKind::Home => filter::filter_catalog(shows, &self.query),
            ScreenKind::Search => filter::filter_search(shows, &self.query),
        };
    }
}
