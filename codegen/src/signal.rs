//! Boolean variable naming.
//!
//! Every contact and coil in the generated ladder reads or drives one of the
//! signals below. The variable names are part of the contract with the
//! controller project: I/O mapping done in the IDE refers to them, so the
//! format must not change.

use std::fmt;

use desladder_automata::{Event, State};

/// Separator that synthesis places between component states of a product
/// state, for example `s1|s2`.
pub const PRODUCT_SEPARATOR: char = '|';

/// Replacement for [`PRODUCT_SEPARATOR`] in variable names.
pub const STATE_DELIMITER: char = '_';

/// Name of the cold-start input.
pub const START: &str = "START";

/// A boolean variable of the generated program.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Signal<'a> {
    /// `s{index:00}_{state}`: the supervisor at `index` is in `state`.
    SupervisorState { index: usize, state: &'a State },
    /// `{plant}_{state}`: the plant named `plant` is in `state`.
    PlantState { plant: &'a str, state: &'a State },
    /// `{event}`: the raw event flag.
    Event(&'a Event),
    /// `p_{event}`: the controller commands a controllable event.
    Petition(&'a Event),
    /// `d_{event}`: some supervisor currently disables the event.
    Disablement(&'a Event),
    /// `START`: first scan after power up.
    Start,
}

impl Signal<'_> {
    /// The variable name declared in the program and used by contacts and
    /// coils.
    pub fn variable(&self) -> String {
        match self {
            Signal::SupervisorState { index, state } => {
                format!("s{index:02}_{}", sanitize(state.name()))
            }
            Signal::PlantState { plant, state } => format!("{plant}_{}", sanitize(state.name())),
            Signal::Event(event) => event.name().to_string(),
            Signal::Petition(event) => format!("p_{}", event.name()),
            Signal::Disablement(event) => format!("d_{}", event.name()),
            Signal::Start => START.to_string(),
        }
    }
}

impl fmt::Display for Signal<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.variable())
    }
}

/// Makes a state name usable inside a variable name.
///
/// Only the product separator is rewritten; the rest of the name is kept
/// as is.
pub fn sanitize(state_name: &str) -> String {
    state_name.replace(PRODUCT_SEPARATOR, &STATE_DELIMITER.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(0, "s1", "s00_s1")]
    #[case(7, "idle", "s07_idle")]
    #[case(12, "s1|s2", "s12_s1_s2")]
    #[case(103, "a|b|c", "s103_a_b_c")]
    fn variable_when_supervisor_state_then_indexed_name(
        #[case] index: usize,
        #[case] state: &str,
        #[case] expected: &str,
    ) {
        let state = State::marked(state);

        let signal = Signal::SupervisorState {
            index,
            state: &state,
        };

        assert_eq!(signal.variable(), expected);
    }

    #[test]
    fn variable_when_plant_state_then_prefixed_with_plant_name() {
        let state = State::unmarked("s2|s3");

        let signal = Signal::PlantState {
            plant: "EP",
            state: &state,
        };

        assert_eq!(signal.variable(), "EP_s2_s3");
    }

    #[test]
    fn variable_when_event_signals_then_prefixed_by_kind() {
        let event = Event::controllable("ep");

        assert_eq!(Signal::Event(&event).variable(), "ep");
        assert_eq!(Signal::Petition(&event).variable(), "p_ep");
        assert_eq!(Signal::Disablement(&event).variable(), "d_ep");
    }

    #[test]
    fn variable_when_start_then_start() {
        assert_eq!(Signal::Start.to_string(), "START");
    }

    #[test]
    fn sanitize_when_plain_name_then_unchanged() {
        assert_eq!(sanitize("s1_on"), "s1_on");
    }
}
