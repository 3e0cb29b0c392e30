//! Discrete-event automata for ladder generation.
//!
//! The crate defines the input of the generator: supervisors and plants as
//! deterministic finite automata over a shared set of events. Automata are
//! built in memory with [`Automaton::new`] or decoded from a JSON model file
//! with [`load_model`].
//!
//! # Example
//!
//! ```
//! use desladder_automata::{Automaton, ControlSystem, Event, State};
//!
//! let off = State::marked("off");
//! let on = State::unmarked("on");
//! let start = Event::uncontrollable("start");
//! let stop = Event::uncontrollable("stop");
//!
//! let motor = Automaton::new(
//!     "M",
//!     off.clone(),
//!     [
//!         (off.clone(), start.clone(), on.clone()),
//!         (on, stop.clone(), off),
//!     ],
//! );
//!
//! let system = ControlSystem::new(vec![], vec![motor], vec![start, stop]);
//! assert_eq!(system.plants[0].states().len(), 2);
//! ```

pub mod document;
pub mod error;
pub mod model;

pub use document::{load_model, parse_model};
pub use error::ModelError;
pub use model::{Automaton, ControlSystem, Controllability, Event, Marking, State, Transition};
