use std::fmt;
use std::ops::{BitOr, BitOrAssign};

#[cfg(feature = "schema")]
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Bit set of query generation modes handed to the generation engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
#[serde(transparent)]
pub struct GenerateMode(u8);

impl GenerateMode {
    /// Emit a package-level default query object.
    pub const WITH_DEFAULT_QUERY: GenerateMode = GenerateMode(1);
    /// Emit query methods that do not take a context argument.
    pub const WITHOUT_CONTEXT: GenerateMode = GenerateMode(1 << 1);
    /// Emit an interface for every generated query type.
    pub const WITH_QUERY_INTERFACE: GenerateMode = GenerateMode(1 << 2);
    /// Emit generic query types.
    pub const WITH_GENERIC: GenerateMode = GenerateMode(1 << 3);

    pub const fn empty() -> Self {
        GenerateMode(0)
    }

    pub const fn from_bits(bits: u8) -> Self {
        GenerateMode(bits)
    }

    pub const fn bits(self) -> u8 {
        self.0
    }

    pub const fn contains(self, other: GenerateMode) -> bool {
        self.0 & other.0 == other.0
    }

    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }
}

impl BitOr for GenerateMode {
    type Output = GenerateMode;

    fn bitor(self, rhs: GenerateMode) -> GenerateMode {
        GenerateMode(self.0 | rhs.0)
    }
}

impl BitOrAssign for GenerateMode {
    fn bitor_assign(&mut self, rhs: GenerateMode) {
        self.0 |= rhs.0;
    }
}

impl fmt::Display for GenerateMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let names: Vec<&str> = [
            (GenerateMode::WITH_DEFAULT_QUERY, "WithDefaultQuery"),
            (GenerateMode::WITHOUT_CONTEXT, "WithoutContext"),
            (GenerateMode::WITH_QUERY_INTERFACE, "WithQueryInterface"),
            (GenerateMode::WITH_GENERIC, "WithGeneric"),
        ]
        .into_iter()
        .filter(|(flag, _)| self.contains(*flag))
        .map(|(_, name)| name)
        .collect();

        if names.is_empty() {
            f.write_str("None")
        } else {
            f.write_str(&names.join("|"))
        }
    }
}
