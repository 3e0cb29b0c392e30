//! Writes ladder programs as PLCopen TC6 XML projects.
//!
//! The project holds a single program POU whose body is the ladder diagram
//! and whose local variables are every boolean the diagram reads or writes.
//! CODESYS-family IDEs import the document directly.
//!
//! ```
//! use desladder_automata::ControlSystem;
//! use desladder_plcopen::{to_xml_string, ProjectOptions};
//!
//! let program = desladder_codegen::compile(&ControlSystem::default());
//! let xml = to_xml_string(&program, &ProjectOptions::default()).unwrap();
//! assert!(xml.contains("<pou name=\"DES_PRG\" pouType=\"program\">"));
//! ```

mod error;
mod project;
pub mod schema;
mod writer;

pub use error::ExportError;
pub use project::{build_project, ProjectOptions};
pub use writer::{to_xml_string, write_project};
