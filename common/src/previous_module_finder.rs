//! Search-as-you-type lookup for modules the student already took.
//!
//! Each non-empty [`PreviousModuleFinder::search`] call hands out a ticket and
//! invalidates all earlier ones. The caller waits out the debounce window and
//! only sends the request if its ticket is still current.

use serde::{Deserialize, Serialize};

use crate::module::ModuleRef;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchTicket {
    pub generation: u64,
    pub query: String,
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct PreviousModuleFinder {
    query: String,
    candidates: Vec<ModuleRef>,
    generation: u64,
}

impl PreviousModuleFinder {
    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn candidates(&self) -> &[ModuleRef] {
        &self.candidates
    }

    /// Records the new query text. An empty query clears the candidates at
    /// once and returns no ticket.
    pub fn search(&mut self, text: &str) -> Option<SearchTicket> {
        self.generation += 1;
        self.query = text.to_string();
        if text.trim().is_empty() {
            self.candidates.clear();
            return None;
        }
        Some(SearchTicket { generation: self.generation, query: text.trim().to_string() })
    }

    pub fn is_current(&self, ticket: &SearchTicket) -> bool {
        ticket.generation == self.generation
    }

    /// Stores the candidates for `ticket` unless newer input superseded it.
    /// A failed lookup keeps the previous candidates.
    pub fn complete_search(&mut self, ticket: &SearchTicket, result: Result<Vec<ModuleRef>, String>) -> bool {
        if !self.is_current(ticket) {
            return false;
        }
        if let Ok(candidates) = result {
            self.candidates = candidates;
        }
        true
    }

    /// Adds `candidate` to `chosen` unless it is already there, then resets
    /// the search box.
    pub fn select(&mut self, candidate: ModuleRef, chosen: &mut Vec<ModuleRef>) {
        if !chosen.iter().any(|m| m.id == candidate.id) {
            chosen.push(candidate);
        }
        self.generation += 1;
        self.query.clear();
        self.candidates.clear();
    }

    pub fn remove(&self, index: usize, chosen: &mut Vec<ModuleRef>) {
        if index < chosen.len() {
            chosen.remove(index);
        }
    }
}
