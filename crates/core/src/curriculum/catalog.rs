//! Loading and looking up the curriculum.

use std::collections::HashSet;
use std::fs;
use std::path::Path;

use serde::Deserialize;

use super::errors::CatalogError;
use super::types::{FieldKind, Module, SimulatorConfig, Unit};
use crate::engine::CalculatorKind;

const BUILTIN: &str = include_str!("../../data/curriculum.toml");

#[derive(Debug, Deserialize)]
struct CatalogFile {
    #[serde(default)]
    units: Vec<Unit>,
}

/// The ordered set of units and their modules.
///
/// Registry order is document order and is preserved by every lookup.
#[derive(Debug, Clone)]
pub struct Catalog {
    units: Vec<Unit>,
}

impl Catalog {
    /// The curriculum compiled into the crate.
    pub fn builtin() -> Result<Self, CatalogError> {
        Self::from_toml_str(BUILTIN, "<builtin>")
    }

    /// Load a curriculum file from disk.
    pub fn from_path(path: &Path) -> Result<Self, CatalogError> {
        let s = fs::read_to_string(path)
            .map_err(|e| CatalogError::Io { path: path.to_path_buf(), source: e })?;
        Self::from_toml_str(&s, &path.display().to_string())
    }

    /// Parse curriculum TOML. `origin` names the source in error messages.
    pub fn from_toml_str(s: &str, origin: &str) -> Result<Self, CatalogError> {
        let file: CatalogFile = toml::from_str(s).map_err(|e| CatalogError::Parse {
            origin: origin.to_string(),
            source: e,
        })?;
        let catalog = Self { units: file.units };
        catalog.check()?;
        tracing::debug!(
            origin,
            units = catalog.units.len(),
            modules = catalog.modules().count(),
            "loaded curriculum"
        );
        Ok(catalog)
    }

    fn check(&self) -> Result<(), CatalogError> {
        let mut ids = HashSet::new();
        for module in self.modules() {
            if !ids.insert(module.id.as_str()) {
                return Err(CatalogError::DuplicateModule(module.id.clone()));
            }
            let Some(sim) = &module.simulator else { continue };

            let mut names = HashSet::new();
            for field in &sim.inputs {
                if !names.insert(field.name.as_str()) {
                    return Err(CatalogError::DuplicateField {
                        module: module.id.clone(),
                        field: field.name.clone(),
                    });
                }
                if field.kind == FieldKind::Select
                    && field.options.as_ref().is_none_or(Vec::is_empty)
                {
                    return Err(CatalogError::InvalidField {
                        module: module.id.clone(),
                        field: field.name.clone(),
                        message: "select field has no options".into(),
                    });
                }
                if let (Some(lo), Some(hi)) = (field.min, field.max)
                    && lo > hi
                {
                    return Err(CatalogError::InvalidField {
                        module: module.id.clone(),
                        field: field.name.clone(),
                        message: format!("min {lo} is greater than max {hi}"),
                    });
                }
            }
        }
        Ok(())
    }

    pub fn units(&self) -> &[Unit] {
        &self.units
    }

    pub fn unit(&self, id: &str) -> Option<&Unit> {
        self.units.iter().find(|u| u.id == id)
    }

    /// Every module, unit by unit.
    pub fn modules(&self) -> impl Iterator<Item = &Module> {
        self.units.iter().flat_map(|u| u.modules.iter())
    }

    pub fn module(&self, id: &str) -> Option<&Module> {
        self.modules().find(|m| m.id == id)
    }

    /// Modules that carry a simulator, with that simulator.
    pub fn simulators(&self) -> impl Iterator<Item = (&Module, &SimulatorConfig)> {
        self.modules().filter_map(|m| m.simulator.as_ref().map(|s| (m, s)))
    }

    /// The unit that contains `module_id`.
    pub fn unit_of(&self, module_id: &str) -> Option<&Unit> {
        self.units.iter().find(|u| u.modules.iter().any(|m| m.id == module_id))
    }

    /// Modules that declare a simulator the engine has no calculator for.
    pub fn uncovered_simulators(&self) -> Vec<&Module> {
        self.simulators()
            .filter(|(m, _)| CalculatorKind::from_module_id(&m.id).is_none())
            .map(|(m, _)| m)
            .collect()
    }
}
