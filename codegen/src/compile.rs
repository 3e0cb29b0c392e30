//! Compiles supervisors and plants into a ladder program.
//!
//! The body is laid out in four sections, scanned top to bottom:
//!
//! - **supervisors**: one rung per pair of distinct states joined by at least
//!   one event. The rung SETs the destination state bit and RESETs the origin
//!   state bit when the origin bit and any of the events are TRUE.
//! - **disablement**: one rung per controllable event driving `d_{event}`
//!   from the supervisor state bits that disable it. These coils are not
//!   latched; they are recomputed every scan.
//! - **plants**: one rung per plant transition. Controllable transitions fire
//!   while `d_{event}` is FALSE and raise `p_{event}` and the event flag;
//!   uncontrollable transitions fire on the sensed event flag. Every rung ends
//!   with a jump to `procedures`, so at most one plant transition fires in a
//!   scan and a state bit set by one rung cannot trigger a later rung of the
//!   same plant in the same scan.
//! - **procedures**: on `START`, SETs the initial state bit of every
//!   supervisor and plant.
//!
//! Self-loops change no state bit and produce no rung.

use std::cmp::Ordering;

use desladder_automata::{Automaton, ControlSystem, Event, State, Transition};
use log::debug;

use crate::disablement::{compile_disablement, Disablement};
use crate::emit::Emitter;
use crate::ladder::{LadderProgram, LocalId, Section, Storage};
use crate::signal::Signal;

/// Compiles the control system into a ladder program.
///
/// Generation cannot fail: the automata are assumed to be well formed.
pub fn compile(system: &ControlSystem) -> LadderProgram {
    let disablement = compile_disablement(&system.supervisors);
    let events = controllable_events(system);

    let mut emitter = Emitter::new();
    compile_supervisors(&mut emitter, &system.supervisors);
    compile_disablement_rungs(&mut emitter, &events, &disablement);
    compile_plants(&mut emitter, &system.plants);
    compile_procedures(&mut emitter, system);

    let program = emitter.finish();
    debug!(
        "Generated {} ladder elements and {} variables",
        program.elements().len(),
        program.variables().len()
    );
    program
}

/// Transitions of one automaton that share origin and destination.
struct TransitionGroup<'a> {
    origin: &'a State,
    destination: &'a State,
    events: Vec<&'a Event>,
}

/// Groups the transitions that change state by (origin, destination), in
/// order of first appearance. Events are listed once per group.
fn group_transitions(automaton: &Automaton) -> Vec<TransitionGroup<'_>> {
    let mut groups: Vec<TransitionGroup<'_>> = Vec::new();
    for transition in automaton.transitions().iter().filter(|t| !t.is_self_loop()) {
        let existing = groups.iter_mut().find(|g| {
            *g.origin == transition.origin && *g.destination == transition.destination
        });
        match existing {
            Some(group) => {
                if !group.events.contains(&&transition.trigger) {
                    group.events.push(&transition.trigger);
                }
            }
            None => groups.push(TransitionGroup {
                origin: &transition.origin,
                destination: &transition.destination,
                events: vec![&transition.trigger],
            }),
        }
    }
    groups
}

fn compile_supervisors(emitter: &mut Emitter, supervisors: &[Automaton]) {
    emitter.emit_label(Section::Supervisors);
    let start = emitter.len();

    for (index, supervisor) in supervisors.iter().enumerate() {
        for group in group_transitions(supervisor) {
            emitter.emit_rung_header();

            let state = emitter.emit_contact(
                Signal::SupervisorState {
                    index,
                    state: group.origin,
                },
                &[LocalId::LEFT_RAIL],
            );
            let guards: Vec<LocalId> = group
                .events
                .iter()
                .map(|event| emitter.emit_contact(Signal::Event(*event), &[state]))
                .collect();

            emitter.emit_coil(
                Signal::SupervisorState {
                    index,
                    state: group.destination,
                },
                Storage::Set,
                &guards,
            );
            emitter.emit_coil(
                Signal::SupervisorState {
                    index,
                    state: group.origin,
                },
                Storage::Reset,
                &guards,
            );
        }
    }

    debug!(
        "Section {} has {} elements",
        Section::Supervisors,
        emitter.len() - start
    );
}

/// The controllable events that need a disablement flag: the controllable
/// events of the global list, then those that only appear in the alphabet of
/// some automaton.
fn controllable_events(system: &ControlSystem) -> Vec<&Event> {
    let alphabets = system
        .supervisors
        .iter()
        .chain(system.plants.iter())
        .flat_map(|automaton| automaton.events());

    let mut events: Vec<&Event> = Vec::new();
    for event in system.events.iter().chain(alphabets) {
        if event.is_controllable() && !events.iter().any(|e| e.name() == event.name()) {
            events.push(event);
        }
    }
    events
}

fn compile_disablement_rungs(emitter: &mut Emitter, events: &[&Event], disablement: &Disablement) {
    emitter.emit_label(Section::Disablement);
    let start = emitter.len();

    for &event in events {
        emitter.emit_rung_header();

        let states: Vec<LocalId> = disablement
            .states_disabling(event.name())
            .map(|variable| emitter.emit_contact_on(variable, &[LocalId::LEFT_RAIL]))
            .collect();

        // An event no supervisor restricts keeps an unconnected coil, which
        // reads FALSE.
        emitter.emit_coil(Signal::Disablement(event), Storage::None, &states);
    }

    debug!(
        "Section {} has {} elements",
        Section::Disablement,
        emitter.len() - start
    );
}

/// Orders plant transitions by origin state name, uncontrollable events
/// first. The sort is stable, so ties keep the order of the model.
///
/// Names compare ordinally (byte order), not by locale collation, so the
/// rung order does not depend on the machine that generates it.
fn plant_rung_order(a: &&Transition, b: &&Transition) -> Ordering {
    a.origin
        .name()
        .cmp(b.origin.name())
        .then(a.trigger.is_controllable().cmp(&b.trigger.is_controllable()))
}

fn compile_plants(emitter: &mut Emitter, plants: &[Automaton]) {
    emitter.emit_label(Section::Plants);
    let start = emitter.len();

    for plant in plants {
        let mut transitions: Vec<&Transition> = plant
            .transitions()
            .iter()
            .filter(|t| !t.is_self_loop())
            .collect();
        transitions.sort_by(plant_rung_order);

        for transition in transitions {
            compile_plant_transition(emitter, plant.name(), transition);
        }
    }

    debug!(
        "Section {} has {} elements",
        Section::Plants,
        emitter.len() - start
    );
}

fn compile_plant_transition(emitter: &mut Emitter, plant: &str, transition: &Transition) {
    let event = &transition.trigger;
    emitter.emit_rung_header();

    let state = emitter.emit_contact(
        Signal::PlantState {
            plant,
            state: &transition.origin,
        },
        &[LocalId::LEFT_RAIL],
    );
    let guard = if event.is_controllable() {
        emitter.emit_negated_contact(Signal::Disablement(event), &[state])
    } else {
        emitter.emit_contact(Signal::Event(event), &[state])
    };

    if event.is_controllable() {
        emitter.emit_coil(Signal::Petition(event), Storage::Set, &[guard]);
    }
    emitter.emit_coil(Signal::Event(event), Storage::Set, &[guard]);

    emitter.emit_coil(
        Signal::PlantState {
            plant,
            state: &transition.destination,
        },
        Storage::Set,
        &[guard],
    );
    emitter.emit_coil(
        Signal::PlantState {
            plant,
            state: &transition.origin,
        },
        Storage::Reset,
        &[guard],
    );
    emitter.emit_jump(Section::Procedures, &[guard]);
}

fn compile_procedures(emitter: &mut Emitter, system: &ControlSystem) {
    emitter.emit_label(Section::Procedures);
    emitter.emit_rung_header();

    let start = emitter.emit_contact(Signal::Start, &[LocalId::LEFT_RAIL]);
    for (index, supervisor) in system.supervisors.iter().enumerate() {
        emitter.emit_coil(
            Signal::SupervisorState {
                index,
                state: supervisor.initial_state(),
            },
            Storage::Set,
            &[start],
        );
    }
    for plant in &system.plants {
        emitter.emit_coil(
            Signal::PlantState {
                plant: plant.name(),
                state: plant.initial_state(),
            },
            Storage::Set,
            &[start],
        );
    }
}
