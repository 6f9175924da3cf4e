//! Static card attributes.
//!
//! Pure lookup tables: each identity maps to its title, description, play
//! cost, play value (a `PointsPool` granted on play), resource acquisition
//! cost (price when bought from the supply), and resource value (a plain
//! number used by resource-commitment mechanics, distinct from the play
//! value). Tactic cards grant no play value; their effect is the move
//! itself.

use crate::core::PointsPool;

use super::card::{Card, PlayCost};

const fn pool(hoplite: i32, strategy: i32, tactic: i32, resource: i32, draw: i32) -> PointsPool {
    PointsPool {
        hoplite,
        strategy,
        tactic,
        resource,
        draw,
    }
}

impl Card {
    /// Display title.
    #[must_use]
    pub const fn title(self) -> &'static str {
        use Card::*;
        match self {
            DeployHoplite => "Deploy Hoplite",
            ManeuverForward => "Maneuver Forward",
            ManeuverLeft => "Maneuver Left",
            ManeuverRight => "Maneuver Right",
            AssaultForward => "Assault Forward",
            AssaultLeft => "Assault Left",
            AssaultRight => "Assault Right",
            Charge => "Charge",
            FlankLeft => "Flank Left",
            FlankRight => "Flank Right",
            MilitaryReforms => "Military Reforms",
            PoliticalReforms => "Political Reforms",
            Oracle => "Oracle",
            Agora => "Agora",
            Tribute => "Tribute",
            Symposium => "Symposium",
            Assembly => "Assembly",
            Ostracism => "Ostracism",
            Trireme => "Trireme",
            SilverMine => "Silver Mine",
            OliveGrove => "Olive Grove",
            Amphora => "Amphora",
            Acropolis => "Acropolis",
            Temple => "Temple",
            Barracks => "Barracks",
            Agoge => "Agoge",
            Phalanx => "Phalanx",
            Strategos => "Strategos",
            Archon => "Archon",
            Ephor => "Ephor",
            Gymnasium => "Gymnasium",
            Academy => "Academy",
            Stoa => "Stoa",
            Harbor => "Harbor",
            Mint => "Mint",
            Drachma => "Drachma",
            Obol => "Obol",
            Talent => "Talent",
            Colonnade => "Colonnade",
            Delphi => "Delphi",
        }
    }

    /// Rules text.
    #[must_use]
    pub const fn description(self) -> &'static str {
        use Card::*;
        match self {
            DeployHoplite => "Place a hoplite on an empty cell of your home row.",
            ManeuverForward => "Move one of your pieces one step forward onto an empty cell.",
            ManeuverLeft => "Move one of your pieces one step left onto an empty cell.",
            ManeuverRight => "Move one of your pieces one step right onto an empty cell.",
            AssaultForward => "Move one of your pieces one step forward onto an enemy piece, capturing it.",
            AssaultLeft => "Move one of your pieces one step left onto an enemy piece, capturing it.",
            AssaultRight => "Move one of your pieces one step right onto an enemy piece, capturing it.",
            Charge => "Move one of your pieces one step forward: onto an empty cell, onto an enemy piece, or off the far edge.",
            FlankLeft => "Move one of your pieces one step left; captures an enemy piece if present.",
            FlankRight => "Move one of your pieces one step right; captures an enemy piece if present.",
            MilitaryReforms => "Reorganize the army. Gain 2 tactic points.",
            PoliticalReforms => "Rewrite the constitution. Gain 2 strategy points.",
            Oracle => "Consult the Pythia. Gain 2 draw points.",
            Agora => "Open the marketplace. Gain 1 strategy point and 1 resource point.",
            Tribute => "Exact payment from your allies. Gain 2 resource points.",
            Symposium => "Host the evening's debate. Gain 1 strategy point and 1 draw point.",
            Assembly => "Convene the citizens. Gain 1 strategy point and 1 tactic point.",
            Ostracism => "Banish a rival from the city. Gain 3 strategy points.",
            Trireme => "Launch a warship. Gain 2 tactic points and 1 resource point.",
            SilverMine => "Work the mines of Laurion. Gain 3 resource points.",
            OliveGrove => "Harvest the grove. Gain 1 resource point.",
            Amphora => "Store the surplus. Gain 1 resource point and 1 draw point.",
            Acropolis => "Crown the city. Gain 2 strategy points and 1 hoplite point.",
            Temple => "Honor the gods. Gain 1 hoplite point and 1 draw point.",
            Barracks => "Quarter fresh troops. Gain 1 hoplite point.",
            Agoge => "Train the youth for war. Gain 1 hoplite point and 1 tactic point.",
            Phalanx => "Lock shields. Gain 2 tactic points.",
            Strategos => "Appoint a general. Gain 1 tactic point and 1 draw point.",
            Archon => "Elect the chief magistrate. Gain 2 strategy points and 1 draw point.",
            Ephor => "Seat an overseer. Gain 1 strategy point.",
            Gymnasium => "Drill the citizens. Gain 1 tactic point.",
            Academy => "Endow the school. Gain 1 tactic point and 1 draw point.",
            Stoa => "Raise a covered walk. Gain 1 draw point.",
            Harbor => "Dredge the Piraeus. Gain 2 resource points and 1 strategy point.",
            Mint => "Strike new coinage. Gain 2 resource points.",
            Drachma => "Spend the silver. Gain 1 resource point.",
            Obol => "A coin for the ferryman. Gain 1 resource point.",
            Talent => "Weigh out a fortune. Gain 3 resource points.",
            Colonnade => "Line the avenue with marble. Gain 1 hoplite point and 1 strategy point.",
            Delphi => "Send envoys to the sanctuary. Gain 3 draw points.",
        }
    }

    /// Cost to play this card from hand.
    #[must_use]
    pub const fn play_cost(self) -> PlayCost {
        use Card::*;
        match self {
            DeployHoplite => PlayCost::Strategy(1),

            ManeuverForward | ManeuverLeft | ManeuverRight | AssaultForward | AssaultLeft
            | AssaultRight | Charge | FlankLeft | FlankRight => PlayCost::Tactic(1),

            OliveGrove | Amphora | Ephor | Gymnasium | Stoa | Drachma | Obol => {
                PlayCost::Strategy(0)
            }

            MilitaryReforms | PoliticalReforms | Oracle | Agora | Tribute | Symposium
            | Assembly | Trireme | SilverMine | Temple | Barracks | Agoge | Phalanx
            | Strategos | Academy | Harbor | Mint | Colonnade => PlayCost::Strategy(1),

            Ostracism | Acropolis | Archon | Talent | Delphi => PlayCost::Strategy(2),
        }
    }

    /// Points granted to the turn pool when this card resolves.
    ///
    /// Zero for every tactic card.
    #[must_use]
    pub const fn play_value(self) -> PointsPool {
        use Card::*;
        match self {
            DeployHoplite | ManeuverForward | ManeuverLeft | ManeuverRight | AssaultForward
            | AssaultLeft | AssaultRight | Charge | FlankLeft | FlankRight => PointsPool::ZERO,

            MilitaryReforms => pool(0, 0, 2, 0, 0),
            PoliticalReforms => pool(0, 2, 0, 0, 0),
            Oracle => pool(0, 0, 0, 0, 2),
            Agora => pool(0, 1, 0, 1, 0),
            Tribute => pool(0, 0, 0, 2, 0),
            Symposium => pool(0, 1, 0, 0, 1),
            Assembly => pool(0, 1, 1, 0, 0),
            Ostracism => pool(0, 3, 0, 0, 0),
            Trireme => pool(0, 0, 2, 1, 0),
            SilverMine => pool(0, 0, 0, 3, 0),
            OliveGrove => pool(0, 0, 0, 1, 0),
            Amphora => pool(0, 0, 0, 1, 1),
            Acropolis => pool(1, 2, 0, 0, 0),
            Temple => pool(1, 0, 0, 0, 1),
            Barracks => pool(1, 0, 0, 0, 0),
            Agoge => pool(1, 0, 1, 0, 0),
            Phalanx => pool(0, 0, 2, 0, 0),
            Strategos => pool(0, 0, 1, 0, 1),
            Archon => pool(0, 2, 0, 0, 1),
            Ephor => pool(0, 1, 0, 0, 0),
            Gymnasium => pool(0, 0, 1, 0, 0),
            Academy => pool(0, 0, 1, 0, 1),
            Stoa => pool(0, 0, 0, 0, 1),
            Harbor => pool(0, 1, 0, 2, 0),
            Mint => pool(0, 0, 0, 2, 0),
            Drachma => pool(0, 0, 0, 1, 0),
            Obol => pool(0, 0, 0, 1, 0),
            Talent => pool(0, 0, 0, 3, 0),
            Colonnade => pool(1, 1, 0, 0, 0),
            Delphi => pool(0, 0, 0, 0, 3),
        }
    }

    /// Acquisition cost listed on the supply market.
    #[must_use]
    pub const fn resource_cost(self) -> i32 {
        use Card::*;
        match self {
            DeployHoplite => 2,
            ManeuverForward | ManeuverLeft | ManeuverRight => 2,
            AssaultForward | AssaultLeft | AssaultRight => 3,
            Charge => 4,
            FlankLeft | FlankRight => 3,
            MilitaryReforms | PoliticalReforms => 4,
            Oracle => 3,
            Agora => 3,
            Tribute => 2,
            Symposium => 3,
            Assembly => 4,
            Ostracism => 5,
            Trireme => 5,
            SilverMine => 5,
            OliveGrove => 1,
            Amphora => 2,
            Acropolis => 6,
            Temple => 4,
            Barracks => 3,
            Agoge => 4,
            Phalanx => 4,
            Strategos => 4,
            Archon => 5,
            Ephor => 2,
            Gymnasium => 2,
            Academy => 3,
            Stoa => 1,
            Harbor => 5,
            Mint => 3,
            Drachma => 2,
            Obol => 1,
            Talent => 6,
            Colonnade => 4,
            Delphi => 5,
        }
    }

    /// Plain resource number used for resource-commitment mechanics.
    #[must_use]
    pub const fn resource_value(self) -> i32 {
        use Card::*;
        match self {
            DeployHoplite => 1,
            ManeuverForward | ManeuverLeft | ManeuverRight => 1,
            AssaultForward | AssaultLeft | AssaultRight => 1,
            Charge => 2,
            FlankLeft | FlankRight => 1,
            MilitaryReforms | PoliticalReforms => 2,
            Oracle => 1,
            Agora => 1,
            Tribute => 1,
            Symposium => 1,
            Assembly => 2,
            Ostracism => 2,
            Trireme => 2,
            SilverMine => 3,
            OliveGrove => 1,
            Amphora => 1,
            Acropolis => 3,
            Temple => 2,
            Barracks => 1,
            Agoge => 2,
            Phalanx => 2,
            Strategos => 2,
            Archon => 2,
            Ephor => 1,
            Gymnasium => 1,
            Academy => 1,
            Stoa => 1,
            Harbor => 2,
            Mint => 2,
            Drachma => 1,
            Obol => 1,
            Talent => 3,
            Colonnade => 2,
            Delphi => 2,
        }
    }
}
