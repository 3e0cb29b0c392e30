//! States, events, transitions and automata.
//!
//! These are the objects handed over by the supervisory synthesis step. The
//! generator never inspects the inner structure of a state name: product
//! states built by composition are just text.

use std::fmt;

/// Whether reaching a state completes a task. Carried through from the source
/// model; code generation does not depend on it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub enum Marking {
    Marked,
    #[default]
    Unmarked,
}

/// A named automaton state.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct State {
    name: String,
    marking: Marking,
}

impl State {
    pub fn new(name: impl Into<String>, marking: Marking) -> Self {
        State {
            name: name.into(),
            marking,
        }
    }

    pub fn marked(name: impl Into<String>) -> Self {
        State::new(name, Marking::Marked)
    }

    pub fn unmarked(name: impl Into<String>) -> Self {
        State::new(name, Marking::Unmarked)
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn marking(&self) -> Marking {
        self.marking
    }

    pub fn is_marked(&self) -> bool {
        self.marking == Marking::Marked
    }
}

impl fmt::Display for State {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)
    }
}

/// Whether the controller may prevent an event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Controllability {
    /// Commanded by the controller; a supervisor may disable it.
    Controllable,
    /// Sensed from the process; it can only be observed.
    Uncontrollable,
}

/// An event label.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Event {
    name: String,
    controllability: Controllability,
}

impl Event {
    pub fn new(name: impl Into<String>, controllability: Controllability) -> Self {
        Event {
            name: name.into(),
            controllability,
        }
    }

    pub fn controllable(name: impl Into<String>) -> Self {
        Event::new(name, Controllability::Controllable)
    }

    pub fn uncontrollable(name: impl Into<String>) -> Self {
        Event::new(name, Controllability::Uncontrollable)
    }

    /// The event alias. Also the name of the raw event flag in the ladder.
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn controllability(&self) -> Controllability {
        self.controllability
    }

    pub fn is_controllable(&self) -> bool {
        self.controllability == Controllability::Controllable
    }
}

impl fmt::Display for Event {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)
    }
}

/// An edge `origin --trigger--> destination`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Transition {
    pub origin: State,
    pub trigger: Event,
    pub destination: State,
}

impl Transition {
    pub fn new(origin: State, trigger: Event, destination: State) -> Self {
        Transition {
            origin,
            trigger,
            destination,
        }
    }

    /// True when the transition does not change the state.
    pub fn is_self_loop(&self) -> bool {
        self.origin == self.destination
    }
}

impl From<(State, Event, State)> for Transition {
    fn from((origin, trigger, destination): (State, Event, State)) -> Self {
        Transition::new(origin, trigger, destination)
    }
}

impl fmt::Display for Transition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} --{}--> {}", self.origin, self.trigger, self.destination)
    }
}

/// A deterministic finite automaton.
///
/// Whether the automaton is a plant or a supervisor depends only on the list
/// it is placed in when building a [`ControlSystem`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Automaton {
    name: String,
    initial: State,
    states: Vec<State>,
    events: Vec<Event>,
    transitions: Vec<Transition>,
}

impl Automaton {
    /// Creates an automaton from its transition relation.
    ///
    /// The state set is the initial state followed by every transition
    /// endpoint, and the alphabet is every triggering event, both in order of
    /// first appearance.
    pub fn new<T>(name: impl Into<String>, initial: State, transitions: T) -> Self
    where
        T: IntoIterator,
        T::Item: Into<Transition>,
    {
        let transitions: Vec<Transition> = transitions.into_iter().map(Into::into).collect();

        let mut states = vec![initial.clone()];
        let mut events = Vec::new();
        for transition in &transitions {
            push_unique(&mut states, &transition.origin);
            push_unique(&mut states, &transition.destination);
            push_unique(&mut events, &transition.trigger);
        }

        Automaton {
            name: name.into(),
            initial,
            states,
            events,
            transitions,
        }
    }

    /// Adds states that no transition mentions.
    pub fn with_states(mut self, states: impl IntoIterator<Item = State>) -> Self {
        for state in states {
            push_unique(&mut self.states, &state);
        }
        self
    }

    /// Adds events to the alphabet that label no transition.
    ///
    /// A controllable event in the alphabet of a supervisor but on none of its
    /// edges is disabled in every state of that supervisor.
    pub fn with_events(mut self, events: impl IntoIterator<Item = Event>) -> Self {
        for event in events {
            push_unique(&mut self.events, &event);
        }
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn initial_state(&self) -> &State {
        &self.initial
    }

    pub fn states(&self) -> &[State] {
        &self.states
    }

    pub fn events(&self) -> &[Event] {
        &self.events
    }

    pub fn transitions(&self) -> &[Transition] {
        &self.transitions
    }

    /// The controllable part of the alphabet.
    pub fn controllable_events(&self) -> impl Iterator<Item = &Event> {
        self.events.iter().filter(|e| e.is_controllable())
    }
}

impl fmt::Display for Automaton {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)
    }
}

/// The input to code generation: supervisors, the plants they control, and
/// the global event list.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ControlSystem {
    pub supervisors: Vec<Automaton>,
    pub plants: Vec<Automaton>,
    pub events: Vec<Event>,
}

impl ControlSystem {
    pub fn new(supervisors: Vec<Automaton>, plants: Vec<Automaton>, events: Vec<Event>) -> Self {
        ControlSystem {
            supervisors,
            plants,
            events,
        }
    }
}

fn push_unique<T: Clone + PartialEq>(items: &mut Vec<T>, item: &T) {
    if !items.contains(item) {
        items.push(item.clone());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn motor() -> Automaton {
        let off = State::marked("off");
        let on = State::unmarked("on");
        let start = Event::uncontrollable("start");
        let stop = Event::uncontrollable("stop");
        Automaton::new(
            "M",
            off.clone(),
            [
                (off.clone(), start, on.clone()),
                (on, stop, off),
            ],
        )
    }

    #[test]
    fn new_when_transitions_then_infers_states_in_order() {
        let motor = motor();

        let names: Vec<&str> = motor.states().iter().map(State::name).collect();
        assert_eq!(names, vec!["off", "on"]);
    }

    #[test]
    fn new_when_transitions_then_infers_alphabet_in_order() {
        let motor = motor();

        let names: Vec<&str> = motor.events().iter().map(Event::name).collect();
        assert_eq!(names, vec!["start", "stop"]);
    }

    #[test]
    fn new_when_no_transitions_then_state_set_is_initial_state() {
        let idle = State::marked("idle");
        let automaton = Automaton::new("A", idle.clone(), Vec::<Transition>::new());

        assert_eq!(automaton.states(), &[idle]);
        assert!(automaton.events().is_empty());
    }

    #[test]
    fn with_events_when_event_already_in_alphabet_then_not_duplicated() {
        let motor = motor().with_events([
            Event::uncontrollable("start"),
            Event::controllable("reset"),
        ]);

        let names: Vec<&str> = motor.events().iter().map(Event::name).collect();
        assert_eq!(names, vec!["start", "stop", "reset"]);
        assert_eq!(motor.controllable_events().count(), 1);
    }

    #[test]
    fn with_states_when_isolated_state_then_appended() {
        let motor = motor().with_states([State::unmarked("fault")]);

        assert_eq!(motor.states().len(), 3);
        assert_eq!(motor.states()[2].name(), "fault");
    }

    #[test]
    fn is_self_loop_when_same_endpoints_then_true() {
        let s = State::marked("s");
        let transition = Transition::new(s.clone(), Event::controllable("a"), s);

        assert!(transition.is_self_loop());
    }

    #[test]
    fn display_when_transition_then_shows_edge() {
        let transition = Transition::new(
            State::marked("s1"),
            Event::controllable("a"),
            State::unmarked("s2"),
        );

        assert_eq!(transition.to_string(), "s1 --a--> s2");
    }
}
