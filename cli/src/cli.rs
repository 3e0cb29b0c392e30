//! Implements the command line behavior.

use std::path::Path;

use desladder_automata::load_model;
use desladder_plcopen::{write_project, ProjectOptions};
use log::info;

/// Loads the model file, generates the ladder program and writes the
/// project document to `output`.
pub fn generate(model: &Path, output: &Path, options: &ProjectOptions) -> Result<(), String> {
    let system = load_model(model).map_err(|e| format!("Unable to load {}: {e}", model.display()))?;
    info!(
        "Loaded {} supervisors, {} plants and {} events from {}",
        system.supervisors.len(),
        system.plants.len(),
        system.events.len(),
        model.display()
    );

    let program = desladder_codegen::compile(&system);

    write_project(&program, options, output)
        .map_err(|e| format!("Unable to write {}: {e}", output.display()))
}
