//! Builds the PLCopen project document from a ladder program.

use desladder_codegen::{Element, LadderProgram, LocalId, Storage};
use log::debug;
use time::format_description::well_known::Rfc3339;
use time::OffsetDateTime;

use crate::error::ExportError;
use crate::schema::{
    AddData, Body, Coil, Comment, ConnectionPointIn, ConnectionPointOut, Contact, ContentHeader,
    CoordinateInfo, Data, DataContent, DataType, DataTypes, EdgeModifier, FileHeader,
    FormattedText, HandleUnknown, Instances, Interface, Jump, Label, Ld, LdElement, LeftPowerRail,
    Pou, PouType, Pous, Position, Project, ProjectObject, ProjectStructure, RightPowerRail,
    StorageModifier, TypeElement, Types, VarList, Variable, VendorElement, FBD_ELEMENT_TYPE,
    PROJECT_INFORMATION, PROJECT_STRUCTURE, TC6_NAMESPACE,
};

/// Identity CODESYS gives the program object in the project tree.
const POU_OBJECT_ID: &str = "41dd9df7-66e1-44a1-8afe-609cdf6d59c1";

/// Configuration options for the project document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectOptions {
    /// Name of the project in the content header
    pub project_name: String,
    /// Name of the program POU that holds the ladder body
    pub pou_name: String,
    pub company_name: String,
    pub product_name: String,
    pub product_version: String,
    /// Creation and modification time. The current time when `None`.
    pub timestamp: Option<OffsetDateTime>,
}

impl Default for ProjectOptions {
    fn default() -> Self {
        Self {
            project_name: "ultrades.project".to_string(),
            pou_name: "DES_PRG".to_string(),
            company_name: "LACSED".to_string(),
            product_name: "UltraDES".to_string(),
            product_version: "1.0".to_string(),
            timestamp: None,
        }
    }
}

/// Assembles the document for the program.
pub fn build_project(
    program: &LadderProgram,
    options: &ProjectOptions,
) -> Result<Project, ExportError> {
    let timestamp = options
        .timestamp
        .unwrap_or_else(OffsetDateTime::now_utc)
        .format(&Rfc3339)
        .map_err(|e| ExportError::Serialize(e.to_string()))?;

    let variables: Vec<Variable> = program
        .variables()
        .into_iter()
        .map(|name| Variable {
            name: name.to_string(),
            var_type: TypeElement {
                inner: DataType::Bool,
            },
        })
        .collect();
    let elements: Vec<LdElement> = program.elements().iter().map(ld_element).collect();

    debug!(
        "Project {} declares {} variables and {} ladder elements",
        options.project_name,
        variables.len(),
        elements.len()
    );

    Ok(Project {
        xmlns: TC6_NAMESPACE,
        file_header: FileHeader {
            company_name: options.company_name.clone(),
            product_name: options.product_name.clone(),
            product_version: options.product_version.clone(),
            creation_date_time: timestamp.clone(),
        },
        content_header: ContentHeader {
            name: options.project_name.clone(),
            modification_date_time: timestamp,
            coordinate_info: CoordinateInfo::default(),
            add_data: AddData::single(Data {
                name: PROJECT_INFORMATION,
                handle_unknown: HandleUnknown::Implementation,
                content: DataContent::ProjectInformation,
            }),
        },
        types: Types {
            data_types: DataTypes::default(),
            pous: Pous {
                pou: vec![Pou {
                    name: options.pou_name.clone(),
                    pou_type: PouType::Program,
                    interface: Interface {
                        local_vars: VarList {
                            variable: variables,
                        },
                    },
                    body: Body {
                        ld: Ld { elements },
                    },
                }],
            },
        },
        instances: Instances::default(),
        add_data: AddData::single(Data {
            name: PROJECT_STRUCTURE,
            handle_unknown: HandleUnknown::Discard,
            content: DataContent::ProjectStructure(ProjectStructure {
                object: vec![ProjectObject {
                    name: options.pou_name.clone(),
                    object_id: POU_OBJECT_ID.to_string(),
                }],
            }),
        }),
    })
}

fn connections(inputs: &[LocalId]) -> ConnectionPointIn {
    ConnectionPointIn::from_ids(inputs.iter().map(LocalId::value))
}

fn storage(storage: Storage) -> StorageModifier {
    match storage {
        Storage::None => StorageModifier::None,
        Storage::Set => StorageModifier::Set,
        Storage::Reset => StorageModifier::Reset,
    }
}

/// Maps a ladder element to its document form.
fn ld_element(element: &Element) -> LdElement {
    let local_id = element.id().value();
    let position = Position::default();
    match element {
        Element::LeftRail { .. } => LdElement::LeftPowerRail(LeftPowerRail {
            local_id,
            position,
            connection_point_out: ConnectionPointOut {
                formal_parameter: Some("none".to_string()),
            },
        }),
        Element::RightRail { .. } => LdElement::RightPowerRail(RightPowerRail {
            local_id,
            position,
            connection_point_in: ConnectionPointIn::default(),
        }),
        Element::Label { section, .. } => LdElement::Label(Label {
            local_id,
            label: section.label().to_string(),
            position,
        }),
        Element::Jump {
            section, inputs, ..
        } => LdElement::Jump(Jump {
            local_id,
            label: section.label().to_string(),
            position,
            connection_point_in: connections(inputs),
        }),
        Element::Comment { .. } => LdElement::Comment(Comment {
            local_id,
            position,
            content: FormattedText::default(),
        }),
        Element::NetworkTitle { .. } => LdElement::VendorElement(VendorElement {
            local_id,
            position,
            alternative_text: FormattedText::default(),
            add_data: AddData::single(Data {
                name: FBD_ELEMENT_TYPE,
                handle_unknown: HandleUnknown::Implementation,
                content: DataContent::ElementType("networktitle".to_string()),
            }),
        }),
        Element::Contact {
            variable,
            negated,
            inputs,
            ..
        } => LdElement::Contact(Contact {
            local_id,
            negated: *negated,
            storage: StorageModifier::None,
            edge: EdgeModifier::None,
            position,
            connection_point_in: connections(inputs),
            connection_point_out: ConnectionPointOut::default(),
            variable: variable.clone(),
        }),
        Element::Coil {
            variable,
            storage: modifier,
            inputs,
            ..
        } => LdElement::Coil(Coil {
            local_id,
            negated: false,
            storage: storage(*modifier),
            position,
            connection_point_in: connections(inputs),
            connection_point_out: ConnectionPointOut::default(),
            variable: variable.clone(),
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use desladder_automata::{Automaton, ControlSystem, Event, State, Transition};
    use time::macros::datetime;

    fn motor_program() -> LadderProgram {
        let off = State::marked("off");
        let on = State::unmarked("on");
        let motor = Automaton::new(
            "M",
            off.clone(),
            [
                Transition::new(off.clone(), Event::uncontrollable("start"), on.clone()),
                Transition::new(on, Event::uncontrollable("stop"), off),
            ],
        );
        desladder_codegen::compile(&ControlSystem::new(vec![], vec![motor], vec![]))
    }

    #[test]
    fn build_project_when_default_options_then_codesys_defaults() {
        let options = ProjectOptions {
            timestamp: Some(datetime!(2024-03-01 12:30:00 UTC)),
            ..ProjectOptions::default()
        };

        let project = build_project(&motor_program(), &options).unwrap();

        assert_eq!(project.file_header.company_name, "LACSED");
        assert_eq!(project.file_header.product_name, "UltraDES");
        assert_eq!(project.file_header.product_version, "1.0");
        assert_eq!(project.file_header.creation_date_time, "2024-03-01T12:30:00Z");
        assert_eq!(project.content_header.name, "ultrades.project");
        assert_eq!(project.content_header.modification_date_time, "2024-03-01T12:30:00Z");
        assert_eq!(project.types.pous.pou[0].name, "DES_PRG");
    }

    #[test]
    fn build_project_when_program_then_declares_every_variable_as_bool() {
        let project = build_project(&motor_program(), &ProjectOptions::default()).unwrap();

        let names: Vec<&str> = project.types.pous.pou[0]
            .interface
            .local_vars
            .variable
            .iter()
            .map(|v| v.name.as_str())
            .collect();
        assert_eq!(names, vec!["M_off", "M_on", "START", "start", "stop"]);
        assert!(project.types.pous.pou[0]
            .interface
            .local_vars
            .variable
            .iter()
            .all(|v| v.var_type.inner == DataType::Bool));
    }

    #[test]
    fn build_project_when_program_then_body_keeps_element_order() {
        let program = motor_program();

        let project = build_project(&program, &ProjectOptions::default()).unwrap();

        let body = &project.types.pous.pou[0].body.ld.elements;
        assert_eq!(body.len(), program.elements().len());
        assert!(matches!(body.first(), Some(LdElement::LeftPowerRail(rail)) if rail.local_id == 0));
        assert!(matches!(
            body.last(),
            Some(LdElement::RightPowerRail(rail)) if rail.local_id == 2_147_483_646
        ));
    }

    #[test]
    fn ld_element_when_negated_contact_then_keeps_inputs_and_flag() {
        let element = Element::Contact {
            id: LocalId::new(7),
            variable: "d_go".to_string(),
            negated: true,
            inputs: vec![LocalId::new(6)],
        };

        let LdElement::Contact(contact) = ld_element(&element) else {
            panic!("Expected contact");
        };

        assert_eq!(contact.local_id, 7);
        assert!(contact.negated);
        assert_eq!(contact.storage, StorageModifier::None);
        assert_eq!(contact.connection_point_in.connection[0].ref_local_id, 6);
        assert_eq!(contact.variable, "d_go");
    }

    #[test]
    fn ld_element_when_reset_coil_then_reset_storage() {
        let element = Element::Coil {
            id: LocalId::new(10),
            variable: "M_off".to_string(),
            storage: Storage::Reset,
            inputs: vec![LocalId::new(7)],
        };

        let LdElement::Coil(coil) = ld_element(&element) else {
            panic!("Expected coil");
        };

        assert_eq!(coil.storage, StorageModifier::Reset);
        assert!(!coil.negated);
    }
}
