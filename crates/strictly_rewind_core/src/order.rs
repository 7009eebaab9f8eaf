//! Display order for the move list.

use serde::{Deserialize, Serialize};
use tracing::instrument;

/// Direction in which the move list is presented.
///
/// Purely a presentation preference; it never affects game logic.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, strum::EnumString,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum MoveOrder {
    /// Game start first.
    #[default]
    #[strum(serialize = "ascending", serialize = "asc")]
    Ascending,
    /// Latest move first.
    #[strum(serialize = "descending", serialize = "desc")]
    Descending,
}

impl MoveOrder {
    /// Returns the display label for this option.
    pub fn label(self) -> &'static str {
        match self {
            Self::Ascending => "Ascending",
            Self::Descending => "Descending",
        }
    }

    /// Toggles between `Ascending` and `Descending`.
    #[instrument]
    pub fn toggle(self) -> Self {
        match self {
            Self::Ascending => Self::Descending,
            Self::Descending => Self::Ascending,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_toggle_round_trips() {
        assert_eq!(MoveOrder::Ascending.toggle(), MoveOrder::Descending);
        assert_eq!(MoveOrder::Ascending.toggle().toggle(), MoveOrder::Ascending);
    }

    #[test]
    fn test_parse() {
        assert_eq!("desc".parse::<MoveOrder>(), Ok(MoveOrder::Descending));
        assert_eq!("Descending".parse::<MoveOrder>(), Ok(MoveOrder::Descending));
        assert_eq!("ASC".parse::<MoveOrder>(), Ok(MoveOrder::Ascending));
        assert_eq!("ascending".parse::<MoveOrder>(), Ok(MoveOrder::Ascending));
        assert_eq!(
            "sideways".parse::<MoveOrder>(),
            Err(strum::ParseError::VariantNotFound)
        );
    }
}
