//! Disablement of controllable events.
//!
//! A supervisor disables a controllable event in every state that has no
//! outgoing transition for it. The controller must hold the event back while
//! any supervisor is in such a state, so the per-supervisor results are
//! merged by event into one set of supervisor state variables.

use std::collections::{BTreeMap, BTreeSet, HashMap, HashSet};

use desladder_automata::{Automaton, State};
use log::debug;

use crate::signal::Signal;

/// Controllable event name to the supervisor state variables that disable it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Disablement {
    by_event: BTreeMap<String, BTreeSet<String>>,
}

impl Disablement {
    /// The supervisor state variables that disable the event. Empty when no
    /// supervisor restricts it.
    pub fn states_disabling(&self, event: &str) -> impl Iterator<Item = &str> {
        self.by_event
            .get(event)
            .into_iter()
            .flat_map(|states| states.iter().map(String::as_str))
    }

    /// Every controllable event known to some supervisor.
    pub fn events(&self) -> impl Iterator<Item = &str> {
        self.by_event.keys().map(String::as_str)
    }

    /// Merges two maps, joining the state sets of shared events.
    pub fn union(mut self, other: Disablement) -> Disablement {
        for (event, states) in other.by_event {
            self.by_event.entry(event).or_default().extend(states);
        }
        self
    }

    pub fn len(&self) -> usize {
        self.by_event.len()
    }

    pub fn is_empty(&self) -> bool {
        self.by_event.is_empty()
    }
}

/// Computes the states of one supervisor that disable each of its
/// controllable events.
///
/// Every controllable event of the alphabet has an entry, possibly empty. A
/// state without outgoing transitions disables all of them.
pub fn supervisor_disablement(index: usize, supervisor: &Automaton) -> Disablement {
    let mut enabled: HashMap<&State, HashSet<&str>> = HashMap::new();
    for transition in supervisor.transitions() {
        let events = enabled.entry(&transition.origin).or_default();
        if transition.trigger.is_controllable() {
            events.insert(transition.trigger.name());
        }
    }

    let mut by_event: BTreeMap<String, BTreeSet<String>> = supervisor
        .controllable_events()
        .map(|event| (event.name().to_string(), BTreeSet::new()))
        .collect();

    for state in supervisor.states() {
        let enabled_here = enabled.get(state);
        for event in supervisor.controllable_events() {
            let is_enabled = enabled_here.is_some_and(|events| events.contains(event.name()));
            if !is_enabled {
                if let Some(states) = by_event.get_mut(event.name()) {
                    states.insert(Signal::SupervisorState { index, state }.variable());
                }
            }
        }
    }

    Disablement { by_event }
}

/// Computes the disablement of every controllable event across all
/// supervisors.
pub fn compile_disablement(supervisors: &[Automaton]) -> Disablement {
    let disablement = supervisors
        .iter()
        .enumerate()
        .map(|(index, supervisor)| supervisor_disablement(index, supervisor))
        .fold(Disablement::default(), Disablement::union);

    debug!(
        "Disablement covers {} controllable events over {} supervisors",
        disablement.len(),
        supervisors.len()
    );

    disablement
}
