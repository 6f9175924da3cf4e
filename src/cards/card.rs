//! Card identities and their classification.

use serde::{Deserialize, Serialize};

/// Broad classification of a card.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CardKind {
    /// Movement, combat, and deployment. Resolved against a board position.
    Tactic,
    /// Economy and resources. Resolved against the play mat.
    Strategy,
}

/// The cost to play a card from hand.
///
/// Every card costs either strategy points or tactic points, never both.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PlayCost {
    Strategy(i32),
    Tactic(i32),
}

/// A card identity.
///
/// All fixed attributes (title, description, kind, costs, values) live in
/// the catalog methods on this type; see `cards::catalog`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Card {
    // === Tactic cards ===
    DeployHoplite,
    ManeuverForward,
    ManeuverLeft,
    ManeuverRight,
    AssaultForward,
    AssaultLeft,
    AssaultRight,
    Charge,
    FlankLeft,
    FlankRight,

    // === Strategy cards ===
    MilitaryReforms,
    PoliticalReforms,
    Oracle,
    Agora,
    Tribute,
    Symposium,
    Assembly,
    Ostracism,
    Trireme,
    SilverMine,
    OliveGrove,
    Amphora,
    Acropolis,
    Temple,
    Barracks,
    Agoge,
    Phalanx,
    Strategos,
    Archon,
    Ephor,
    Gymnasium,
    Academy,
    Stoa,
    Harbor,
    Mint,
    Drachma,
    Obol,
    Talent,
    Colonnade,
    Delphi,
}

impl Card {
    /// Every card identity, tactic cards first.
    pub const ALL: [Card; 40] = [
        Card::DeployHoplite,
        Card::ManeuverForward,
        Card::ManeuverLeft,
        Card::ManeuverRight,
        Card::AssaultForward,
        Card::AssaultLeft,
        Card::AssaultRight,
        Card::Charge,
        Card::FlankLeft,
        Card::FlankRight,
        Card::MilitaryReforms,
        Card::PoliticalReforms,
        Card::Oracle,
        Card::Agora,
        Card::Tribute,
        Card::Symposium,
        Card::Assembly,
        Card::Ostracism,
        Card::Trireme,
        Card::SilverMine,
        Card::OliveGrove,
        Card::Amphora,
        Card::Acropolis,
        Card::Temple,
        Card::Barracks,
        Card::Agoge,
        Card::Phalanx,
        Card::Strategos,
        Card::Archon,
        Card::Ephor,
        Card::Gymnasium,
        Card::Academy,
        Card::Stoa,
        Card::Harbor,
        Card::Mint,
        Card::Drachma,
        Card::Obol,
        Card::Talent,
        Card::Colonnade,
        Card::Delphi,
    ];

    /// Classification of this identity.
    #[must_use]
    pub const fn kind(self) -> CardKind {
        use Card::*;
        match self {
            DeployHoplite | ManeuverForward | ManeuverLeft | ManeuverRight | AssaultForward
            | AssaultLeft | AssaultRight | Charge | FlankLeft | FlankRight => CardKind::Tactic,

            MilitaryReforms | PoliticalReforms | Oracle | Agora | Tribute | Symposium
            | Assembly | Ostracism | Trireme | SilverMine | OliveGrove | Amphora | Acropolis
            | Temple | Barracks | Agoge | Phalanx | Strategos | Archon | Ephor | Gymnasium
            | Academy | Stoa | Harbor | Mint | Drachma | Obol | Talent | Colonnade | Delphi => {
                CardKind::Strategy
            }
        }
    }
}

impl std::fmt::Display for Card {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.title())
    }
}
