//! Ladder diagram elements.
//!
//! A program is a flat list of elements. Elements refer to each other by
//! [`LocalId`] rather than by reference: a contact or coil lists the
//! identities of the elements feeding it, and those identities always belong
//! to elements emitted earlier. Several inputs on one element are an OR.

use std::collections::BTreeSet;
use std::fmt;

/// Identity of an element in the ladder body.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct LocalId(u64);

impl LocalId {
    /// The left power rail always opens the body.
    pub const LEFT_RAIL: LocalId = LocalId(0);

    /// The right power rail closes the body. CODESYS exports it with this
    /// fixed identity.
    pub const RIGHT_RAIL: LocalId = LocalId(2_147_483_646);

    pub fn new(value: u64) -> Self {
        LocalId(value)
    }

    pub fn value(&self) -> u64 {
        self.0
    }
}

impl fmt::Display for LocalId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// How a coil writes its variable.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Storage {
    /// Writes the rung value every scan.
    None,
    /// Latches the variable to TRUE while the rung is TRUE.
    Set,
    /// Latches the variable to FALSE while the rung is TRUE.
    Reset,
}

/// The labeled parts of the program, in scan order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Section {
    Supervisors,
    Disablement,
    Plants,
    Procedures,
}

impl Section {
    pub const ALL: [Section; 4] = [
        Section::Supervisors,
        Section::Disablement,
        Section::Plants,
        Section::Procedures,
    ];

    /// The jump label of the section.
    pub fn label(&self) -> &'static str {
        match self {
            Section::Supervisors => "supervisors",
            Section::Disablement => "disablement",
            Section::Plants => "plants",
            Section::Procedures => "procedures",
        }
    }
}

impl fmt::Display for Section {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// One element of the ladder body.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Element {
    LeftRail {
        id: LocalId,
    },
    RightRail {
        id: LocalId,
    },
    /// Jump target that starts a section.
    Label {
        id: LocalId,
        section: Section,
    },
    /// Continues the scan at the section label when the input is TRUE.
    Jump {
        id: LocalId,
        section: Section,
        inputs: Vec<LocalId>,
    },
    /// Empty comment heading a rung.
    Comment {
        id: LocalId,
    },
    /// Vendor network title heading a rung.
    NetworkTitle {
        id: LocalId,
    },
    Contact {
        id: LocalId,
        variable: String,
        negated: bool,
        inputs: Vec<LocalId>,
    },
    Coil {
        id: LocalId,
        variable: String,
        storage: Storage,
        inputs: Vec<LocalId>,
    },
}

impl Element {
    pub fn id(&self) -> LocalId {
        match self {
            Element::LeftRail { id }
            | Element::RightRail { id }
            | Element::Label { id, .. }
            | Element::Jump { id, .. }
            | Element::Comment { id }
            | Element::NetworkTitle { id }
            | Element::Contact { id, .. }
            | Element::Coil { id, .. } => *id,
        }
    }

    /// The elements this element is connected to.
    pub fn inputs(&self) -> &[LocalId] {
        match self {
            Element::Jump { inputs, .. }
            | Element::Contact { inputs, .. }
            | Element::Coil { inputs, .. } => inputs,
            _ => &[],
        }
    }

    /// The variable read by a contact or written by a coil.
    pub fn variable(&self) -> Option<&str> {
        match self {
            Element::Contact { variable, .. } | Element::Coil { variable, .. } => {
                Some(variable.as_str())
            }
            _ => None,
        }
    }
}

/// A generated ladder program.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LadderProgram {
    elements: Vec<Element>,
}

impl LadderProgram {
    pub(crate) fn new(elements: Vec<Element>) -> Self {
        LadderProgram { elements }
    }

    /// The body in emission order, left rail first and right rail last.
    pub fn elements(&self) -> &[Element] {
        &self.elements
    }

    /// Every variable that some contact or coil uses, sorted by name.
    ///
    /// This is the declaration list of the program.
    pub fn variables(&self) -> BTreeSet<&str> {
        self.elements.iter().filter_map(Element::variable).collect()
    }

    /// Finds an element by identity.
    pub fn element(&self, id: LocalId) -> Option<&Element> {
        self.elements.iter().find(|e| e.id() == id)
    }
}
