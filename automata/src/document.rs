//! JSON model files.
//!
//! A model file lists the global events and the supervisors and plants that
//! use them:
//!
//! ```json
//! {
//!   "events": [ { "name": "start", "controllable": false } ],
//!   "plants": [
//!     { "name": "M", "initial": "off",
//!       "states": [ { "name": "off", "marked": true } ],
//!       "transitions": [ ["off", "start", "on"] ] }
//!   ],
//!   "supervisors": []
//! }
//! ```
//!
//! States not listed under `states` are unmarked. Events are referenced by
//! name and must appear in the global event list.

use std::collections::HashMap;
use std::fs;
use std::path::Path;

use log::{debug, trace};
use serde::Deserialize;

use crate::error::ModelError;
use crate::model::{Automaton, ControlSystem, Controllability, Event, Marking, State, Transition};

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct ModelDocument {
    #[serde(default)]
    events: Vec<EventDecl>,
    #[serde(default)]
    supervisors: Vec<AutomatonDecl>,
    #[serde(default)]
    plants: Vec<AutomatonDecl>,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct EventDecl {
    name: String,
    controllable: bool,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct StateDecl {
    name: String,
    #[serde(default)]
    marked: bool,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct AutomatonDecl {
    name: String,
    initial: String,
    #[serde(default)]
    states: Vec<StateDecl>,
    #[serde(default)]
    events: Vec<String>,
    #[serde(default)]
    transitions: Vec<(String, String, String)>,
}

/// Reads and decodes a model file.
pub fn load_model(path: &Path) -> Result<ControlSystem, ModelError> {
    debug!("Loading model file {}", path.display());
    let content = fs::read_to_string(path).map_err(|source| ModelError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    parse_model(&content)
}

/// Decodes a model from its JSON text.
pub fn parse_model(content: &str) -> Result<ControlSystem, ModelError> {
    let document: ModelDocument = serde_json::from_str(content)?;

    let events: Vec<Event> = document
        .events
        .iter()
        .map(|decl| {
            let controllability = if decl.controllable {
                Controllability::Controllable
            } else {
                Controllability::Uncontrollable
            };
            Event::new(decl.name.clone(), controllability)
        })
        .collect();
    let by_name: HashMap<&str, &Event> = events.iter().map(|e| (e.name(), e)).collect();

    let supervisors = document
        .supervisors
        .iter()
        .map(|decl| build_automaton(decl, &by_name))
        .collect::<Result<Vec<_>, _>>()?;
    let plants = document
        .plants
        .iter()
        .map(|decl| build_automaton(decl, &by_name))
        .collect::<Result<Vec<_>, _>>()?;

    debug!(
        "Decoded model with {} supervisors, {} plants and {} events",
        supervisors.len(),
        plants.len(),
        events.len()
    );

    Ok(ControlSystem::new(supervisors, plants, events))
}

fn build_automaton(
    decl: &AutomatonDecl,
    events: &HashMap<&str, &Event>,
) -> Result<Automaton, ModelError> {
    trace!("Building automaton {}", decl.name);

    let markings: HashMap<&str, Marking> = decl
        .states
        .iter()
        .map(|s| {
            let marking = if s.marked {
                Marking::Marked
            } else {
                Marking::Unmarked
            };
            (s.name.as_str(), marking)
        })
        .collect();
    let state = |name: &str| {
        State::new(
            name,
            markings.get(name).copied().unwrap_or(Marking::Unmarked),
        )
    };
    let event = |name: &str| {
        events
            .get(name)
            .map(|e| (*e).clone())
            .ok_or_else(|| ModelError::UnknownEvent {
                automaton: decl.name.clone(),
                event: name.to_string(),
            })
    };

    let transitions = decl
        .transitions
        .iter()
        .map(|(origin, trigger, destination)| {
            Ok(Transition::new(
                state(origin.as_str()),
                event(trigger.as_str())?,
                state(destination.as_str()),
            ))
        })
        .collect::<Result<Vec<_>, ModelError>>()?;
    let alphabet = decl
        .events
        .iter()
        .map(|name| event(name.as_str()))
        .collect::<Result<Vec<_>, _>>()?;

    Ok(
        Automaton::new(decl.name.clone(), state(decl.initial.as_str()), transitions)
            .with_states(decl.states.iter().map(|s| state(s.name.as_str())))
            .with_events(alphabet),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use desladder_test::{read_shared_resource, shared_resource_path};

    #[test]
    fn parse_model_when_motor_fixture_then_decodes_plant() {
        let system = parse_model(&read_shared_resource("motor.json")).unwrap();

        assert!(system.supervisors.is_empty());
        assert_eq!(system.plants.len(), 1);
        let motor = &system.plants[0];
        assert_eq!(motor.name(), "M");
        assert_eq!(motor.initial_state().name(), "off");
        assert!(motor.initial_state().is_marked());
        assert_eq!(motor.transitions().len(), 2);
        assert_eq!(system.events.len(), 2);
    }

    #[test]
    fn parse_model_when_state_not_listed_then_unmarked() {
        let system = parse_model(&read_shared_resource("motor.json")).unwrap();

        let on = &system.plants[0].states()[1];
        assert_eq!(on.name(), "on");
        assert_eq!(on.marking(), Marking::Unmarked);
    }

    #[test]
    fn parse_model_when_event_not_declared_then_unknown_event() {
        let content = r#"{
            "events": [ { "name": "a", "controllable": true } ],
            "supervisors": [
                { "name": "S", "initial": "s1", "transitions": [ ["s1", "b", "s2"] ] }
            ]
        }"#;

        let result = parse_model(content);

        assert!(matches!(
            result,
            Err(ModelError::UnknownEvent { ref automaton, ref event }) if automaton == "S" && event == "b"
        ));
    }

    #[test]
    fn parse_model_when_alphabet_listed_then_extends_events() {
        let content = r#"{
            "events": [
                { "name": "a", "controllable": true },
                { "name": "b", "controllable": true }
            ],
            "supervisors": [
                { "name": "S", "initial": "s1", "events": ["b"],
                  "transitions": [ ["s1", "a", "s1"] ] }
            ]
        }"#;

        let system = parse_model(content).unwrap();

        let names: Vec<&str> = system.supervisors[0]
            .events()
            .iter()
            .map(Event::name)
            .collect();
        assert_eq!(names, vec!["a", "b"]);
    }

    #[test]
    fn parse_model_when_not_json_then_json_error() {
        let result = parse_model("this is not json");

        assert!(matches!(result, Err(ModelError::Json(_))));
    }

    #[test]
    fn load_model_when_file_missing_then_io_error() {
        let result = load_model(&shared_resource_path("does_not_exist.json"));

        assert!(matches!(result, Err(ModelError::Io { .. })));
    }

    #[test]
    fn load_model_when_conveyor_fixture_then_decodes_supervisors_and_plants() {
        let system = load_model(&shared_resource_path("conveyor.json")).unwrap();

        assert_eq!(system.supervisors.len(), 2);
        assert_eq!(system.plants.len(), 2);
        assert_eq!(system.supervisors[0].name(), "S1");
    }
}
