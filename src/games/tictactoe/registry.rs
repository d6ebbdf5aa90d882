//! Display names for the two symbols.

use super::Symbol;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

/// Name shown for `X` until renamed.
pub const DEFAULT_X_NAME: &str = "Player 1";
/// Name shown for `O` until renamed.
pub const DEFAULT_O_NAME: &str = "Player 2";

/// Mapping from symbol to display name.
///
/// Independent of the move log: renaming never touches game rules and
/// survives rematches.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct PlayerRegistry {
    /// Name for `X`.
    x: String,
    /// Name for `O`.
    o: String,
}

impl PlayerRegistry {
    /// Creates a registry with the given names.
    pub fn new(x: impl Into<String>, o: impl Into<String>) -> Self {
        Self {
            x: x.into(),
            o: o.into(),
        }
    }

    /// Name registered for `symbol`.
    pub fn name(&self, symbol: Symbol) -> &str {
        match symbol {
            Symbol::X => &self.x,
            Symbol::O => &self.o,
        }
    }

    /// Replaces the name for `symbol`.
    #[instrument(skip(self, name))]
    pub fn rename(&mut self, symbol: Symbol, name: impl Into<String>) {
        let name = name.into();
        debug!(%symbol, %name, "Updating registry entry");
        match symbol {
            Symbol::X => self.x = name,
            Symbol::O => self.o = name,
        }
    }

    /// Both entries, `X` first.
    pub fn entries(&self) -> [(Symbol, &str); 2] {
        [(Symbol::X, &self.x), (Symbol::O, &self.o)]
    }
}

impl Default for PlayerRegistry {
    fn default() -> Self {
        Self::new(DEFAULT_X_NAME, DEFAULT_O_NAME)
    }
}
