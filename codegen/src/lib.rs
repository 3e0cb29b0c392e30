//! Ladder logic generation for supervisory control.
//!
//! This crate transforms supervisors and plant automata (a
//! [`ControlSystem`](desladder_automata::ControlSystem)) into a ladder
//! diagram that a PLC executes as repeated scan cycles. Each automaton state
//! becomes a latched bit, each transition a rung that moves the bit, and each
//! controllable event gets a disablement flag computed from the supervisors.
//!
//! # Example
//!
//! ```
//! use desladder_automata::{Automaton, ControlSystem, Event, State};
//! use desladder_codegen::compile;
//!
//! let off = State::marked("off");
//! let on = State::unmarked("on");
//! let start = Event::uncontrollable("start");
//! let stop = Event::uncontrollable("stop");
//! let motor = Automaton::new(
//!     "M",
//!     off.clone(),
//!     [(off.clone(), start.clone(), on.clone()), (on, stop.clone(), off)],
//! );
//!
//! let program = compile(&ControlSystem::new(vec![], vec![motor], vec![start, stop]));
//!
//! let variables: Vec<&str> = program.variables().into_iter().collect();
//! assert_eq!(variables, vec!["M_off", "M_on", "START", "start", "stop"]);
//! ```

mod compile;
pub mod disablement;
mod emit;
pub mod ladder;
pub mod signal;

pub use compile::compile;
pub use disablement::{compile_disablement, supervisor_disablement, Disablement};
pub use ladder::{Element, LadderProgram, LocalId, Section, Storage};
pub use signal::Signal;
