use std::collections::HashMap;
use std::sync::OnceLock;

use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum PokemonType {
    Normal,
    Fire,
    Water,
    Grass,
    Electric,
    Ice,
    Fighting,
    Poison,
    Ground,
    Flying,
    Psychic,
    Bug,
    Rock,
    Ghost,
    Dragon,
    Dark,
    Steel,
    Fairy,
}

impl PokemonType {
    pub const ALL: [PokemonType; 18] = [
        PokemonType::Normal,
        PokemonType::Fire,
        PokemonType::Water,
        PokemonType::Grass,
        PokemonType::Electric,
        PokemonType::Ice,
        PokemonType::Fighting,
        PokemonType::Poison,
        PokemonType::Ground,
        PokemonType::Flying,
        PokemonType::Psychic,
        PokemonType::Bug,
        PokemonType::Rock,
        PokemonType::Ghost,
        PokemonType::Dragon,
        PokemonType::Dark,
        PokemonType::Steel,
        PokemonType::Fairy,
    ];

    pub fn name(self) -> &'static str {
        match self {
            PokemonType::Normal => "Normal",
            PokemonType::Fire => "Fire",
            PokemonType::Water => "Water",
            PokemonType::Grass => "Grass",
            PokemonType::Electric => "Electric",
            PokemonType::Ice => "Ice",
            PokemonType::Fighting => "Fighting",
            PokemonType::Poison => "Poison",
            PokemonType::Ground => "Ground",
            PokemonType::Flying => "Flying",
            PokemonType::Psychic => "Psychic",
            PokemonType::Bug => "Bug",
            PokemonType::Rock => "Rock",
            PokemonType::Ghost => "Ghost",
            PokemonType::Dragon => "Dragon",
            PokemonType::Dark => "Dark",
            PokemonType::Steel => "Steel",
            PokemonType::Fairy => "Fairy",
        }
    }

    /// Parses an API type slug (`"fire"`) or a display name (`"Fire"`).
    pub fn from_api(name: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|ty| ty.name().eq_ignore_ascii_case(name))
    }
}

/// Era of type-matchup rules.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Ruleset {
    Gen1,
    Gen2To5,
    #[default]
    Gen6Plus,
}

impl Ruleset {
    pub const ALL: [Ruleset; 3] = [Ruleset::Gen1, Ruleset::Gen2To5, Ruleset::Gen6Plus];

    pub fn label(self) -> &'static str {
        match self {
            Ruleset::Gen1 => "Gen I",
            Ruleset::Gen2To5 => "Gen II-V",
            Ruleset::Gen6Plus => "Gen VI+",
        }
    }

    pub fn for_era(era: &str) -> Self {
        match era {
            "Gen I" => Ruleset::Gen1,
            "Gen II" | "Gen III" | "Gen IV" | "Gen V" => Ruleset::Gen2To5,
            _ => Ruleset::Gen6Plus,
        }
    }

    pub fn next(self) -> Self {
        match self {
            Ruleset::Gen1 => Ruleset::Gen2To5,
            Ruleset::Gen2To5 => Ruleset::Gen6Plus,
            Ruleset::Gen6Plus => Ruleset::Gen1,
        }
    }

    fn index(self) -> usize {
        match self {
            Ruleset::Gen1 => 0,
            Ruleset::Gen2To5 => 1,
            Ruleset::Gen6Plus => 2,
        }
    }
}

/// Sparse attacker/defender table. Absent cells are neutral.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct TypeChart {
    cells: HashMap<(PokemonType, PokemonType), f64>,
}

impl TypeChart {
    pub fn cell(&self, attacker: PokemonType, defender: PokemonType) -> f64 {
        self.cells
            .get(&(attacker, defender))
            .copied()
            .unwrap_or(1.0)
    }

    fn set(&mut self, attacker: PokemonType, defender: PokemonType, value: f64) {
        self.cells.insert((attacker, defender), value);
    }

    fn clear(&mut self, attacker: PokemonType, defender: PokemonType) {
        self.cells.remove(&(attacker, defender));
    }

    fn remove_type(&mut self, removed: PokemonType) {
        self.cells
            .retain(|(attacker, defender), _| *attacker != removed && *defender != removed);
    }
}

pub fn chart(ruleset: Ruleset) -> &'static TypeChart {
    static CHARTS: OnceLock<[TypeChart; 3]> = OnceLock::new();
    let charts = CHARTS.get_or_init(|| {
        let gen6 = gen6_chart();
        let gen2_5 = gen2_5_chart(&gen6);
        let gen1 = gen1_chart(&gen2_5);
        [gen1, gen2_5, gen6]
    });
    &charts[ruleset.index()]
}

/// Damage multiplier of `attacker` against a defender with the given types.
pub fn multiplier(attacker: PokemonType, defenders: &[PokemonType], ruleset: Ruleset) -> f64 {
    let chart = chart(ruleset);
    defenders
        .iter()
        .map(|defender| chart.cell(attacker, *defender))
        .product()
}

/// Types that exist in the era.
pub fn displayed_types(ruleset: Ruleset) -> Vec<PokemonType> {
    PokemonType::ALL
        .into_iter()
        .filter(|ty| match ruleset {
            Ruleset::Gen1 => !matches!(
                ty,
                PokemonType::Dark | PokemonType::Steel | PokemonType::Fairy
            ),
            Ruleset::Gen2To5 => *ty != PokemonType::Fairy,
            Ruleset::Gen6Plus => true,
        })
        .collect()
}

/// Adds or removes a defending type. Holds at most two; adding a third drops the oldest.
pub fn toggle_defender(selected: &mut Vec<PokemonType>, ty: PokemonType) {
    if let Some(index) = selected.iter().position(|current| *current == ty) {
        selected.remove(index);
        return;
    }
    if selected.len() >= 2 {
        selected.remove(0);
    }
    selected.push(ty);
}

fn gen6_chart() -> TypeChart {
    use PokemonType::*;
    let rows: [(PokemonType, &[(PokemonType, f64)]); 18] = [
        (Normal, &[(Rock, 0.5), (Ghost, 0.0), (Steel, 0.5)]),
        (
            Fire,
            &[
                (Fire, 0.5),
                (Water, 0.5),
                (Grass, 2.0),
                (Ice, 2.0),
                (Bug, 2.0),
                (Rock, 0.5),
                (Dragon, 0.5),
                (Steel, 2.0),
            ],
        ),
        (
            Water,
            &[
                (Fire, 2.0),
                (Water, 0.5),
                (Grass, 0.5),
                (Ground, 2.0),
                (Rock, 2.0),
                (Dragon, 0.5),
            ],
        ),
        (
            Electric,
            &[
                (Water, 2.0),
                (Electric, 0.5),
                (Grass, 0.5),
                (Ground, 0.0),
                (Flying, 2.0),
                (Dragon, 0.5),
            ],
        ),
        (
            Grass,
            &[
                (Fire, 0.5),
                (Water, 2.0),
                (Grass, 0.5),
                (Poison, 0.5),
                (Ground, 2.0),
                (Flying, 0.5),
                (Bug, 0.5),
                (Rock, 2.0),
                (Dragon, 0.5),
                (Steel, 0.5),
            ],
        ),
        (
            Ice,
            &[
                (Fire, 0.5),
                (Water, 0.5),
                (Grass, 2.0),
                (Ice, 0.5),
                (Ground, 2.0),
                (Flying, 2.0),
                (Dragon, 2.0),
                (Steel, 0.5),
            ],
        ),
        (
            Fighting,
            &[
                (Normal, 2.0),
                (Ice, 2.0),
                (Poison, 0.5),
                (Flying, 0.5),
                (Psychic, 0.5),
                (Bug, 0.5),
                (Rock, 2.0),
                (Ghost, 0.0),
                (Dark, 2.0),
                (Steel, 2.0),
                (Fairy, 0.5),
            ],
        ),
        (
            Poison,
            &[
                (Grass, 2.0),
                (Poison, 0.5),
                (Ground, 0.5),
                (Rock, 0.5),
                (Ghost, 0.5),
                (Steel, 0.0),
                (Fairy, 2.0),
            ],
        ),
        (
            Ground,
            &[
                (Fire, 2.0),
                (Electric, 2.0),
                (Grass, 0.5),
                (Poison, 2.0),
                (Flying, 0.0),
                (Bug, 0.5),
                (Rock, 2.0),
                (Steel, 2.0),
            ],
        ),
        (
            Flying,
            &[
                (Electric, 0.5),
                (Grass, 2.0),
                (Fighting, 2.0),
                (Bug, 2.0),
                (Rock, 0.5),
                (Steel, 0.5),
            ],
        ),
        (
            Psychic,
            &[
                (Fighting, 2.0),
                (Poison, 2.0),
                (Psychic, 0.5),
                (Dark, 0.0),
                (Steel, 0.5),
            ],
        ),
        (
            Bug,
            &[
                (Fire, 0.5),
                (Grass, 2.0),
                (Fighting, 0.5),
                (Poison, 0.5),
                (Flying, 0.5),
                (Psychic, 2.0),
                (Ghost, 0.5),
                (Dark, 2.0),
                (Steel, 0.5),
                (Fairy, 0.5),
            ],
        ),
        (
            Rock,
            &[
                (Fire, 2.0),
                (Ice, 2.0),
                (Fighting, 0.5),
                (Ground, 0.5),
                (Flying, 2.0),
                (Bug, 2.0),
                (Steel, 0.5),
            ],
        ),
        (
            Ghost,
            &[(Normal, 0.0), (Psychic, 2.0), (Ghost, 2.0), (Dark, 0.5)],
        ),
        (Dragon, &[(Dragon, 2.0), (Steel, 0.5), (Fairy, 0.0)]),
        (
            Dark,
            &[
                (Fighting, 0.5),
                (Psychic, 2.0),
                (Ghost, 2.0),
                (Dark, 0.5),
                (Fairy, 0.5),
            ],
        ),
        (
            Steel,
            &[
                (Fire, 0.5),
                (Water, 0.5),
                (Electric, 0.5),
                (Ice, 2.0),
                (Rock, 2.0),
                (Steel, 0.5),
                (Fairy, 2.0),
            ],
        ),
        (
            Fairy,
            &[
                (Fire, 0.5),
                (Fighting, 2.0),
                (Poison, 0.5),
                (Dragon, 2.0),
                (Dark, 2.0),
                (Steel, 0.5),
            ],
        ),
    ];

    let mut chart = TypeChart::default();
    for (attacker, cells) in rows {
        for (defender, value) in cells {
            chart.set(attacker, *defender, *value);
        }
    }
    chart
}

fn gen2_5_chart(gen6: &TypeChart) -> TypeChart {
    let mut chart = gen6.clone();
    chart.remove_type(PokemonType::Fairy);
    // Steel resisted Ghost and Dark before Gen VI.
    chart.set(PokemonType::Ghost, PokemonType::Steel, 0.5);
    chart.set(PokemonType::Dark, PokemonType::Steel, 0.5);
    chart
}

fn gen1_chart(gen2_5: &TypeChart) -> TypeChart {
    let mut chart = gen2_5.clone();
    chart.remove_type(PokemonType::Dark);
    chart.remove_type(PokemonType::Steel);
    chart.set(PokemonType::Bug, PokemonType::Poison, 2.0);
    chart.set(PokemonType::Poison, PokemonType::Bug, 2.0);
    // Ghost moves failed to hit Psychic types in Red/Blue/Yellow.
    chart.set(PokemonType::Ghost, PokemonType::Psychic, 0.0);
    chart.clear(PokemonType::Ice, PokemonType::Fire);
    chart
}
