//! Shared test helpers for codegen integration tests.

use desladder_automata::{Automaton, Event, State, Transition};
use desladder_codegen::{Element, LadderProgram, LocalId, Section, Storage};

/// Plant `M`: `off --start--> on --stop--> off`, both events uncontrollable.
#[allow(dead_code)]
pub fn motor() -> Automaton {
    let off = State::marked("off");
    let on = State::unmarked("on");
    Automaton::new(
        "M",
        off.clone(),
        [
            Transition::new(off.clone(), Event::uncontrollable("start"), on.clone()),
            Transition::new(on, Event::uncontrollable("stop"), off),
        ],
    )
}

/// Builds an automaton from `(origin, event, destination)` triples.
#[allow(dead_code)]
pub fn automaton(name: &str, initial: &str, transitions: &[(&str, Event, &str)]) -> Automaton {
    Automaton::new(
        name,
        State::unmarked(initial),
        transitions.iter().map(|(origin, event, destination)| {
            Transition::new(
                State::unmarked(*origin),
                event.clone(),
                State::unmarked(*destination),
            )
        }),
    )
}

/// The elements between the label of the section and the next label.
#[allow(dead_code)]
pub fn section(program: &LadderProgram, wanted: Section) -> &[Element] {
    let elements = program.elements();
    let start = elements
        .iter()
        .position(|e| matches!(e, Element::Label { section, .. } if *section == wanted))
        .expect("section label")
        + 1;
    let end = elements[start..]
        .iter()
        .position(|e| matches!(e, Element::Label { .. } | Element::RightRail { .. }))
        .map(|offset| start + offset)
        .expect("section end");
    &elements[start..end]
}

/// The coils of the elements, as `(variable, storage, inputs)`.
#[allow(dead_code)]
pub fn coils(elements: &[Element]) -> Vec<(&str, Storage, &[LocalId])> {
    elements
        .iter()
        .filter_map(|e| match e {
            Element::Coil {
                variable,
                storage,
                inputs,
                ..
            } => Some((variable.as_str(), *storage, inputs.as_slice())),
            _ => None,
        })
        .collect()
}

/// The coils of the elements with the given storage.
#[allow(dead_code)]
pub fn coils_with(elements: &[Element], storage: Storage) -> Vec<&str> {
    coils(elements)
        .into_iter()
        .filter(|(_, s, _)| *s == storage)
        .map(|(variable, _, _)| variable)
        .collect()
}

/// The variables of the contacts of the elements, in emission order.
#[allow(dead_code)]
pub fn contacts(elements: &[Element]) -> Vec<&str> {
    elements
        .iter()
        .filter(|e| matches!(e, Element::Contact { .. }))
        .filter_map(Element::variable)
        .collect()
}

/// The variable read or written by the element with the identity.
#[allow(dead_code)]
pub fn variable_of(program: &LadderProgram, id: LocalId) -> &str {
    program
        .element(id)
        .and_then(Element::variable)
        .expect("contact or coil")
}
