//! Renders and persists the project document.

use std::fs::{self, Permissions};
use std::io::Write;
use std::path::Path;

use desladder_codegen::LadderProgram;
use log::{debug, info};
use quick_xml::se::Serializer;
use serde::Serialize;
use tempfile::NamedTempFile;

use crate::error::ExportError;
use crate::project::{build_project, ProjectOptions};

const XML_DECLARATION: &str = r#"<?xml version="1.0" encoding="utf-8"?>"#;

/// Renders the project document for the program, pretty printed and with
/// an XML declaration.
pub fn to_xml_string(
    program: &LadderProgram,
    options: &ProjectOptions,
) -> Result<String, ExportError> {
    let project = build_project(program, options)?;

    let mut buffer = String::from(XML_DECLARATION);
    buffer.push('\n');

    let mut serializer = Serializer::new(&mut buffer);
    serializer.indent(' ', 2);
    project
        .serialize(serializer)
        .map_err(|e| ExportError::Serialize(e.to_string()))?;
    buffer.push('\n');

    Ok(buffer)
}

/// Renders the project document and writes it to `path`.
///
/// The document is written to a temporary file next to `path` and then
/// renamed over it, so `path` either keeps its previous content or holds the
/// complete document. The document keeps the permissions of the file it
/// replaces; a new document is readable by everyone.
pub fn write_project(
    program: &LadderProgram,
    options: &ProjectOptions,
    path: &Path,
) -> Result<(), ExportError> {
    let content = to_xml_string(program, options)?;

    if path.file_name().is_none() {
        return Err(ExportError::InvalidPath(path.to_path_buf()));
    }
    let directory = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };

    let mut file = NamedTempFile::new_in(directory)?;
    file.write_all(content.as_bytes())?;
    if let Some(permissions) = target_permissions(path) {
        file.as_file().set_permissions(permissions)?;
    }
    file.as_file().sync_all()?;
    file.persist(path).map_err(|e| ExportError::Io(e.error))?;

    info!("Wrote project to {}", path.display());
    debug!("Project document is {} bytes", content.len());
    Ok(())
}

/// Permissions for the document at `path`: those of the existing file, or
/// the usual mode of a new file.
fn target_permissions(path: &Path) -> Option<Permissions> {
    match fs::metadata(path) {
        Ok(metadata) => Some(metadata.permissions()),
        Err(_) => new_file_permissions(),
    }
}

#[cfg(unix)]
fn new_file_permissions() -> Option<Permissions> {
    use std::os::unix::fs::PermissionsExt;
    Some(Permissions::from_mode(0o644))
}

#[cfg(not(unix))]
fn new_file_permissions() -> Option<Permissions> {
    None
}
