//! Low-level ladder emitter.
//!
//! Provides a builder that appends elements to the ladder body and hands out
//! increasing identities.

use log::trace;

use crate::ladder::{Element, LadderProgram, LocalId, Section, Storage};
use crate::signal::Signal;

/// Accumulates ladder elements.
///
/// The emitter opens the body with the left power rail, so the first
/// identity it hands out is 1.
pub struct Emitter {
    elements: Vec<Element>,
    next_id: u64,
}

#[allow(clippy::len_without_is_empty)]
impl Emitter {
    pub fn new() -> Self {
        Emitter {
            elements: vec![Element::LeftRail {
                id: LocalId::LEFT_RAIL,
            }],
            next_id: LocalId::LEFT_RAIL.value() + 1,
        }
    }

    /// Emits the label that starts a section.
    pub fn emit_label(&mut self, section: Section) -> LocalId {
        let id = self.allocate();
        self.push(Element::Label { id, section });
        id
    }

    /// Emits the empty comment and the network title that head every rung.
    pub fn emit_rung_header(&mut self) {
        let id = self.allocate();
        self.push(Element::Comment { id });
        let id = self.allocate();
        self.push(Element::NetworkTitle { id });
    }

    /// Emits a normally open contact on the signal.
    pub fn emit_contact(&mut self, signal: Signal<'_>, inputs: &[LocalId]) -> LocalId {
        self.contact(signal.variable(), false, inputs)
    }

    /// Emits a normally closed contact on the signal.
    pub fn emit_negated_contact(&mut self, signal: Signal<'_>, inputs: &[LocalId]) -> LocalId {
        self.contact(signal.variable(), true, inputs)
    }

    /// Emits a normally open contact on an already encoded variable.
    pub fn emit_contact_on(&mut self, variable: &str, inputs: &[LocalId]) -> LocalId {
        self.contact(variable.to_string(), false, inputs)
    }

    /// Emits a coil that drives the signal.
    pub fn emit_coil(&mut self, signal: Signal<'_>, storage: Storage, inputs: &[LocalId]) -> LocalId {
        let id = self.allocate();
        self.push(Element::Coil {
            id,
            variable: signal.variable(),
            storage,
            inputs: inputs.to_vec(),
        });
        id
    }

    /// Emits a jump to the label of the section.
    pub fn emit_jump(&mut self, section: Section, inputs: &[LocalId]) -> LocalId {
        let id = self.allocate();
        self.push(Element::Jump {
            id,
            section,
            inputs: inputs.to_vec(),
        });
        id
    }

    /// Closes the body with the right power rail.
    pub fn finish(mut self) -> LadderProgram {
        self.elements.push(Element::RightRail {
            id: LocalId::RIGHT_RAIL,
        });
        LadderProgram::new(self.elements)
    }

    /// Returns the number of elements emitted so far.
    pub fn len(&self) -> usize {
        self.elements.len()
    }

    fn contact(&mut self, variable: String, negated: bool, inputs: &[LocalId]) -> LocalId {
        let id = self.allocate();
        self.push(Element::Contact {
            id,
            variable,
            negated,
            inputs: inputs.to_vec(),
        });
        id
    }

    fn allocate(&mut self) -> LocalId {
        let id = LocalId::new(self.next_id);
        self.next_id += 1;
        id
    }

    fn push(&mut self, element: Element) {
        // Connections only point backwards.
        debug_assert!(element.inputs().iter().all(|input| *input < element.id()));
        trace!("Emit {element:?}");
        self.elements.push(element);
    }
}
