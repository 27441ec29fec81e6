use serde::{Deserialize, Serialize};

use crate::evolution::EvolutionNode;
use crate::state::{
    AbilityRecord, AttackRecord, ItemRecord, PokedexListEntry, PokemonDb, PokemonDetail, View,
};
use crate::type_chart::{PokemonType, Ruleset};

#[derive(tui_dispatch::Action, Clone, Debug, PartialEq, Serialize, Deserialize)]
#[action(infer_categories)]
pub enum Action {
    Init,
    PokemonDbDidLoad(PokemonDb),
    PokemonDbDidError(String),
    ItemsDidLoad(Vec<ItemRecord>),
    ItemsDidError(String),
    AbilitiesDidLoad(Vec<AbilityRecord>),
    AbilitiesDidError(String),
    AttacksDidLoad(Vec<AttackRecord>),
    AttacksDidError(String),

    ViewSelect(View),
    NavigateBack,

    RulesetSelect(Ruleset),
    RulesetNext,
    DefenderToggle(PokemonType),

    DexSelect(String),
    EggGroupSelect(String),
    DexEntryLink(String),
    PokedexListDidLoad {
        request: u64,
        entries: Vec<PokedexListEntry>,
    },
    PokedexListDidError {
        request: u64,
        error: String,
    },

    PokemonSelect {
        url: String,
        era_context: Option<String>,
    },
    FormSelect {
        name: String,
        url: String,
    },
    EraSelect(String),
    EraNext,
    EraPrev,
    PokedexEntryDidLoad {
        request: u64,
        detail: PokemonDetail,
        evolution: Option<EvolutionNode>,
    },
    PokedexEntryDidError {
        request: u64,
        error: String,
    },
    EvolutionDidLoad {
        request: u64,
        chain: Option<EvolutionNode>,
    },

    ItemCategorySelect(String),
    ItemSelectFromSearch {
        name: String,
        category: String,
    },
    AbilityFilterStart,
    AbilityFilterEnd,
    AbilityFilterInput(char),
    AbilityFilterBackspace,
    AbilitySelect(String),
    AttackSelect(String),

    SearchStart,
    SearchInput(char),
    SearchBackspace,
    SearchClose,

    CursorSet(usize),
    Confirm,

    UiTerminalResize(u16, u16),
    Tick,
    Quit,
}
