use std::sync::Arc;

use crate::dex::PokedexInfo;
use crate::state::PokemonDb;

#[derive(Clone, Debug, PartialEq)]
pub enum Effect {
    LoadPokemonDb,
    LoadItems,
    LoadAbilities,
    LoadAttacks,
    LoadPokedexList {
        request: u64,
        dex: PokedexInfo,
        db: Arc<PokemonDb>,
    },
    LoadPokedexEntry {
        request: u64,
        url: String,
        db: Arc<PokemonDb>,
    },
    LoadEvolution {
        request: u64,
        chain_url: Option<String>,
        active_form: String,
        db: Arc<PokemonDb>,
    },
}
