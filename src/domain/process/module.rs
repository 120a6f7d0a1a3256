//! Life cycle modules (EN 15804) and their coarse stages.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::domain::foundation::ValidationError;

/// Coarse life cycle stage.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum Stage {
    Production,
    Usage,
    EndOfLife,
    Recycling,
    Maintenance,
    Total,
}

impl Stage {
    pub fn code(&self) -> &'static str {
        match self {
            Stage::Production => "prod",
            Stage::Usage => "op",
            Stage::EndOfLife => "eol",
            Stage::Recycling => "rec",
            Stage::Maintenance => "maint",
            Stage::Total => "total",
        }
    }

    pub fn from_code(code: &str) -> Result<Self, ValidationError> {
        match code.trim() {
            "prod" => Ok(Stage::Production),
            "op" => Ok(Stage::Usage),
            "eol" => Ok(Stage::EndOfLife),
            "rec" => Ok(Stage::Recycling),
            "maint" => Ok(Stage::Maintenance),
            "total" => Ok(Stage::Total),
            other => Err(ValidationError::unknown_code("stage", other)),
        }
    }

    pub fn is_production(&self) -> bool {
        matches!(self, Stage::Production)
    }

    pub fn is_usage(&self) -> bool {
        matches!(self, Stage::Usage)
    }
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl TryFrom<String> for Stage {
    type Error = ValidationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Stage::from_code(&value)
    }
}

impl From<Stage> for String {
    fn from(stage: Stage) -> Self {
        stage.code().to_string()
    }
}

/// Life cycle module a process dataset belongs to.
///
/// Besides the EN 15804 modules, legacy datasets carry a stage code as their
/// module. Those are represented by [`Module::Legacy`] and map to themselves.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum Module {
    A1,
    A2,
    A3,
    A13,
    A4,
    A5,
    B1,
    B2,
    B3,
    B4,
    B5,
    B6,
    B7,
    C1,
    C2,
    C3,
    C4,
    D,
    Legacy(Stage),
}

impl Module {
    /// Returns the persisted module code.
    pub fn code(&self) -> &'static str {
        match self {
            Module::A1 => "A1",
            Module::A2 => "A2",
            Module::A3 => "A3",
            Module::A13 => "A1-3",
            Module::A4 => "A4",
            Module::A5 => "A5",
            Module::B1 => "B1",
            Module::B2 => "B2",
            Module::B3 => "B3",
            Module::B4 => "B4",
            Module::B5 => "B5",
            Module::B6 => "B6",
            Module::B7 => "B7",
            Module::C1 => "C1",
            Module::C2 => "C2",
            Module::C3 => "C3",
            Module::C4 => "C4",
            Module::D => "D",
            Module::Legacy(stage) => stage.code(),
        }
    }

    pub fn from_code(code: &str) -> Result<Self, ValidationError> {
        let module = match code.trim() {
            "A1" => Module::A1,
            "A2" => Module::A2,
            "A3" => Module::A3,
            "A1-3" => Module::A13,
            "A4" => Module::A4,
            "A5" => Module::A5,
            "B1" => Module::B1,
            "B2" => Module::B2,
            "B3" => Module::B3,
            "B4" => Module::B4,
            "B5" => Module::B5,
            "B6" => Module::B6,
            "B7" => Module::B7,
            "C1" => Module::C1,
            "C2" => Module::C2,
            "C3" => Module::C3,
            "C4" => Module::C4,
            "D" => Module::D,
            other => {
                return Stage::from_code(other)
                    .map(Module::Legacy)
                    .map_err(|_| ValidationError::unknown_code("module", other))
            }
        };
        Ok(module)
    }

    pub fn stage(&self) -> Stage {
        match self {
            Module::A1 | Module::A2 | Module::A3 | Module::A13 | Module::A4 | Module::A5 => {
                Stage::Production
            }
            Module::B1
            | Module::B2
            | Module::B3
            | Module::B4
            | Module::B5
            | Module::B6
            | Module::B7 => Stage::Usage,
            Module::C1 | Module::C2 | Module::C3 | Module::C4 => Stage::EndOfLife,
            Module::D => Stage::Recycling,
            Module::Legacy(stage) => *stage,
        }
    }

    /// Display name: the module code, or the stage code for legacy modules.
    pub fn name(&self) -> &'static str {
        self.code()
    }

    pub fn is_legacy(&self) -> bool {
        matches!(self, Module::Legacy(_))
    }

    pub fn is_a13(&self) -> bool {
        matches!(self, Module::A13)
    }

    pub fn is_a1_a2_or_a3(&self) -> bool {
        matches!(self, Module::A1 | Module::A2 | Module::A3)
    }

    pub fn is_maintenance(&self) -> bool {
        matches!(self, Module::Legacy(Stage::Maintenance))
    }
}

impl fmt::Display for Module {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Module {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Module::from_code(s)
    }
}

impl TryFrom<String> for Module {
    type Error = ValidationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Module::from_code(&value)
    }
}

impl From<Module> for String {
    fn from(module: Module) -> Self {
        module.code().to_string()
    }
}
