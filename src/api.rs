use std::collections::{HashMap, HashSet};
use std::time::Duration;

use futures_util::future::{join3, join_all, try_join};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

use crate::dex::{self, DexKind, DexMembership, PokedexInfo};
use crate::evolution::{self, ChainSource, EvolutionChainPayload, EvolutionNode};
use crate::fetch::{FetchError, RetryClient, RetryPolicy, Transport};
use crate::normalize::{
    build_family, build_machine_map, extract_ability, extract_attack, extract_detail,
    extract_item, form_info_entries, id_from_url, settle, variety_urls, EggGroupPayload,
    EncounterPayload, FormPayload, MachinePayload, MovePayload, NamedResource, PokedexPayload, PokemonPayload, Rejection,
    ResourceList, SpeciesPayload,
};
use crate::state::{
    AbilityRecord, AttackRecord, ItemRecord, PokedexListEntry, PokemonDb, PokemonDetail,
    PokemonRef,
};

pub const API_BASE: &str = "https://pokeapi.co/api/v2";

/// Chunking and index sizes for the bulk loads.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoadTuning {
    pub chunk_size: usize,
    pub chunk_delay: Duration,
    pub item_limit: u32,
    pub ability_limit: u32,
    pub move_limit: u32,
    pub machine_limit: u32,
    pub species_limit: u32,
    pub pokemon_limit: u32,
}

impl Default for LoadTuning {
    fn default() -> Self {
        Self {
            chunk_size: 50,
            chunk_delay: Duration::from_millis(200),
            item_limit: 2500,
            ability_limit: 500,
            move_limit: 1000,
            machine_limit: 2000,
            species_limit: 1025,
            pokemon_limit: 1302,
        }
    }
}

pub struct PokeApi<T> {
    client: RetryClient<T>,
    base: String,
    tuning: LoadTuning,
}

impl<T: Transport> PokeApi<T> {
    pub fn new(transport: T, policy: RetryPolicy, base: impl Into<String>, tuning: LoadTuning) -> Self {
        Self {
            client: RetryClient::new(transport, policy),
            base: base.into().trim_end_matches('/').to_string(),
            tuning,
        }
    }

    pub fn client(&self) -> &RetryClient<T> {
        &self.client
    }

    fn url(&self, path: &str) -> String {
        format!("{}/{path}", self.base)
    }

    async fn index(&self, resource: &str, limit: u32) -> Result<Vec<NamedResource>, FetchError> {
        let url = self.url(&format!("{resource}?limit={limit}"));
        let list: ResourceList = self.client.fetch_json(&url, false).await?;
        debug!(resource, count = list.results.len(), "fetched index");
        Ok(list.results)
    }

    /// Fetches `urls` chunk by chunk, each chunk concurrently, and keeps the
    /// records `extract` accepts. Order follows `urls`.
    async fn fetch_chunked<P, R, F>(&self, kind: &str, urls: &[String], silent: bool, extract: F) -> Vec<R>
    where
        P: DeserializeOwned,
        F: Fn(P) -> Result<R, Rejection>,
    {
        let chunks: Vec<&[String]> = urls.chunks(self.tuning.chunk_size.max(1)).collect();
        let mut records = Vec::with_capacity(urls.len());
        for (index, chunk) in chunks.iter().enumerate() {
            let payloads =
                join_all(chunk.iter().map(|url| self.client.fetch_json::<P>(url, silent))).await;
            let outcomes = chunk.iter().zip(payloads).map(|(url, payload)| {
                let outcome = payload
                    .map_err(|err| Rejection::Fetch(err.to_string()))
                    .and_then(&extract);
                (url.as_str(), outcome)
            });
            records.extend(settle(kind, index, outcomes));
            if index + 1 < chunks.len() {
                tokio::time::sleep(self.tuning.chunk_delay).await;
            }
        }
        records
    }

    pub async fn load_items(&self) -> Result<Vec<ItemRecord>, FetchError> {
        let urls = urls_of(self.index("item", self.tuning.item_limit).await?);
        let mut items = self.fetch_chunked("item", &urls, true, extract_item).await;
        items.sort_by(|a, b| (&a.category, &a.name).cmp(&(&b.category, &b.name)));
        info!(count = items.len(), "items loaded");
        Ok(items)
    }

    pub async fn load_abilities(&self) -> Result<Vec<AbilityRecord>, FetchError> {
        let urls = urls_of(self.index("ability", self.tuning.ability_limit).await?);
        let mut abilities = self
            .fetch_chunked("ability", &urls, false, extract_ability)
            .await;
        abilities.sort_by(|a, b| a.name.cmp(&b.name));
        info!(count = abilities.len(), "abilities loaded");
        Ok(abilities)
    }

    pub async fn load_attacks(&self) -> Result<Vec<AttackRecord>, FetchError> {
        let machines = match self.index("machine", self.tuning.machine_limit).await {
            Ok(index) => {
                let urls = urls_of(index);
                self.fetch_chunked("machine", &urls, true, Ok::<MachinePayload, Rejection>)
                    .await
            }
            Err(err) => {
                warn!(error = %err, "machine index unavailable, attacks load without TM data");
                Vec::new()
            }
        };
        let machines = build_machine_map(machines);

        let urls = urls_of(self.index("move", self.tuning.move_limit).await?);
        let attacks = self
            .fetch_chunked("move", &urls, false, |payload: MovePayload| {
                extract_attack(payload, &machines)
            })
            .await;
        info!(count = attacks.len(), "attacks loaded");
        Ok(attacks)
    }

    pub async fn load_pokemon(&self) -> Result<PokemonDb, FetchError> {
        let (species_index, pokemon_index) = try_join(
            self.index("pokemon-species", self.tuning.species_limit),
            self.index("pokemon", self.tuning.pokemon_limit),
        )
        .await?;

        let mut db = PokemonDb {
            urls: pokemon_index
                .into_iter()
                .map(|resource| (resource.name, resource.url))
                .collect(),
            ..PokemonDb::default()
        };

        let species_urls = urls_of(species_index);
        let chunks: Vec<&[String]> = species_urls
            .chunks(self.tuning.chunk_size.max(1))
            .collect();
        for (index, chunk) in chunks.iter().enumerate() {
            let species: Vec<Result<SpeciesPayload, FetchError>> = join_all(
                chunk
                    .iter()
                    .map(|url| self.client.fetch_json::<SpeciesPayload>(url, false)),
            )
            .await;

            let form_urls: Vec<String> = species
                .iter()
                .flatten()
                .flat_map(|payload| variety_urls(payload, &db.urls))
                .collect();
            let details: HashMap<String, FormPayload> = join_all(
                form_urls
                    .iter()
                    .map(|url| self.client.fetch_json::<FormPayload>(url, false)),
            )
            .await
            .into_iter()
            .filter_map(Result::ok)
            .map(|form| (form.name.clone(), form))
            .collect();

            for payload in species.iter().flatten() {
                db.form_info.extend(form_info_entries(payload, &db.urls));
            }

            let outcomes = chunk.iter().zip(species).map(|(url, payload)| {
                let outcome = payload
                    .map_err(|err| Rejection::Fetch(err.to_string()))
                    .and_then(|payload| build_family(&payload, &details, &db.urls));
                (url.as_str(), outcome)
            });
            for build in settle("species", index, outcomes) {
                db.families.push(build.family);
                db.displayable.extend(build.forms);
            }

            if index + 1 < chunks.len() {
                tokio::time::sleep(self.tuning.chunk_delay).await;
            }
        }

        db.families.sort_by_key(|family| family.base.id);
        db.displayable.sort_by_key(|pokemon| pokemon.id);
        info!(
            families = db.families.len(),
            forms = db.displayable.len(),
            "pokemon loaded"
        );
        Ok(db)
    }

    /// Membership lookup for `dex`, then projection over the loaded forms.
    pub async fn fetch_pokedex_list(
        &self,
        dex: &PokedexInfo,
        db: &PokemonDb,
    ) -> Result<Vec<PokedexListEntry>, FetchError> {
        let membership = match dex.kind() {
            DexKind::National | DexKind::Extra | DexKind::Generation(_) => DexMembership::All,
            DexKind::EggGroup(group) => {
                let url = self.url(&format!("egg-group/{group}"));
                let payload: EggGroupPayload = self.client.fetch_json(&url, false).await?;
                DexMembership::Species(
                    payload
                        .pokemon_species
                        .into_iter()
                        .map(|species| species.name)
                        .collect::<HashSet<_>>(),
                )
            }
            DexKind::Regional(id) => {
                let url = self.url(&format!("pokedex/{id}"));
                let payload: PokedexPayload = self.client.fetch_json(&url, false).await?;
                DexMembership::Numbered(
                    payload
                        .pokemon_entries
                        .into_iter()
                        .map(|entry| (entry.pokemon_species.name, entry.entry_number))
                        .collect(),
                )
            }
        };
        let entries = dex::project_list(dex, db, &membership);
        debug!(dex = %dex.id, count = entries.len(), "projected dex list");
        Ok(entries)
    }

    /// Pokémon, species, encounters and sibling varieties for a detail page, plus its evolution tree.
    pub async fn fetch_pokedex_entry(
        &self,
        url: &str,
        db: &PokemonDb,
    ) -> Result<(PokemonDetail, Option<EvolutionNode>), FetchError> {
        let pokemon: PokemonPayload = self.client.fetch_json(url, false).await?;
        let species: SpeciesPayload = self.client.fetch_json(&pokemon.species.url, false).await?;

        let siblings: Vec<(String, String)> = species
            .varieties
            .iter()
            .filter(|variety| variety.pokemon.name != pokemon.name)
            .map(|variety| {
                let url = db
                    .urls
                    .get(&variety.pokemon.name)
                    .cloned()
                    .unwrap_or_else(|| variety.pokemon.url.clone());
                (variety.pokemon.name.clone(), url)
            })
            .collect();
        let chain_url = species.evolution_chain.as_ref().map(|chain| chain.url.clone());

        let encounters_url = pokemon.location_area_encounters.clone();

        let (other_forms, encounters, evolution) = join3(
            self.resolve_forms(siblings),
            self.fetch_encounters(encounters_url.as_deref()),
            self.fetch_evolution(chain_url.as_deref(), &pokemon.name, db),
        )
        .await;

        Ok((extract_detail(pokemon, species, other_forms, encounters), evolution))
    }

    /// Wild encounter areas. Any failure leaves the page without locations.
    async fn fetch_encounters(&self, url: Option<&str>) -> Vec<EncounterPayload> {
        let Some(url) = url else {
            return Vec::new();
        };
        match self.client.fetch_json(url, true).await {
            Ok(encounters) => encounters,
            Err(err) => {
                debug!(url, error = %err, "encounters unavailable");
                Vec::new()
            }
        }
    }

    /// Keeps the sibling varieties whose documents actually resolve.
    async fn resolve_forms(&self, siblings: Vec<(String, String)>) -> Vec<PokemonRef> {
        let responses = join_all(
            siblings
                .iter()
                .map(|(_, url)| self.client.fetch(url, true)),
        )
        .await;
        siblings
            .into_iter()
            .zip(responses)
            .filter_map(|((name, url), response)| match response {
                Ok(response) if response.is_success() => Some(PokemonRef {
                    id: id_from_url(&url)?,
                    name,
                    url,
                }),
                Ok(response) => {
                    debug!(%url, status = response.status, "skipping unresolved form");
                    None
                }
                Err(err) => {
                    debug!(%url, error = %err, "skipping unresolved form");
                    None
                }
            })
            .collect()
    }

    /// Curated lines never touch the network; everything else reads the API chain.
    pub async fn fetch_evolution(
        &self,
        chain_url: Option<&str>,
        active_form: &str,
        db: &PokemonDb,
    ) -> Option<EvolutionNode> {
        let payload = match (evolution::resolve_source(active_form), chain_url) {
            (ChainSource::Api, Some(url)) => {
                match self.client.fetch_json::<EvolutionChainPayload>(url, false).await {
                    Ok(payload) => Some(payload),
                    Err(err) => {
                        warn!(url, error = %err, "evolution chain unavailable");
                        return None;
                    }
                }
            }
            _ => None,
        };
        evolution::resolve_chain(active_form, payload.as_ref().map(|payload| &payload.chain), db)
    }
}

fn urls_of(resources: Vec<NamedResource>) -> Vec<String> {
    resources.into_iter().map(|resource| resource.url).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fetch::{RawResponse, TransportError};
    use crate::state::FormInfo;
    use async_trait::async_trait;
    use pretty_assertions::assert_eq;
    use serde_json::{json, Value};
    use std::sync::Mutex;

    const BASE: &str = "http://dex.test/api/v2";

    /// Serves canned JSON by URL; anything else is a 404.
    #[derive(Default)]
    struct MapTransport {
        routes: HashMap<String, (u16, Value)>,
        hits: Mutex<Vec<String>>,
    }

    impl MapTransport {
        fn route(mut self, path: &str, body: Value) -> Self {
            self.routes.insert(format!("{BASE}/{path}"), (200, body));
            self
        }

        fn status(mut self, path: &str, status: u16) -> Self {
            self.routes
                .insert(format!("{BASE}/{path}"), (status, Value::Null));
            self
        }

        fn hit_count(&self, path: &str) -> usize {
            let url = format!("{BASE}/{path}");
            self.hits.lock().unwrap().iter().filter(|hit| **hit == url).count()
        }
    }

    #[async_trait]
    impl Transport for MapTransport {
        async fn get(&self, url: &str) -> Result<RawResponse, TransportError> {
            self.hits.lock().unwrap().push(url.to_string());
            let (status, body) = self
                .routes
                .get(url)
                .cloned()
                .unwrap_or((404, Value::Null));
            Ok(RawResponse {
                status,
                body: serde_json::to_vec(&body).unwrap(),
            })
        }
    }

    fn api(transport: MapTransport) -> PokeApi<MapTransport> {
        let tuning = LoadTuning {
            chunk_size: 2,
            ..LoadTuning::default()
        };
        PokeApi::new(transport, RetryPolicy::default(), BASE, tuning)
    }

    fn named(name: &str, path: &str) -> Value {
        json!({"name": name, "url": format!("{BASE}/{path}")})
    }

    fn en() -> Value {
        json!({"name": "en", "url": format!("{BASE}/language/9/")})
    }

    fn item(id: u32, name: &str, category: &str) -> Value {
        json!({
            "id": id,
            "name": name,
            "cost": 100,
            "category": named(category, "item-category/1/"),
            "flavor_text_entries": [{
                "text": "A\nberry.",
                "language": en(),
                "version_group": named("sword-shield", "version-group/20/"),
            }],
            "effect_entries": [{"effect": "long", "short_effect": "short", "language": en()}],
        })
    }

    #[tokio::test(start_paused = true)]
    async fn test_items_drop_rejects_and_sort() {
        let transport = MapTransport::default()
            .route(
                "item?limit=2500",
                json!({"results": [
                    named("potion", "item/17/"),
                    named("oran-berry", "item/132/"),
                    named("missing", "item/9999/"),
                    named("no-text", "item/5/"),
                ]}),
            )
            .route("item/17/", item(17, "potion", "healing"))
            .route("item/132/", item(132, "oran-berry", "medicine"))
            .route(
                "item/5/",
                json!({"id": 5, "name": "no-text", "category": named("other", "item-category/2/"),
                       "flavor_text_entries": [], "effect_entries": []}),
            );
        let items = api(transport).load_items().await.unwrap();
        let names: Vec<&str> = items.iter().map(|item| item.name.as_str()).collect();
        assert_eq!(items.len(), 2);
        assert!(names.contains(&"potion"));
        let mut sorted = items.clone();
        sorted.sort_by(|a, b| (&a.category, &a.name).cmp(&(&b.category, &b.name)));
        assert_eq!(items, sorted);
    }

    #[tokio::test(start_paused = true)]
    async fn test_index_failure_is_an_error() {
        let transport = MapTransport::default().status("ability?limit=500", 404);
        let result = api(transport).load_abilities().await;
        assert!(matches!(result, Err(FetchError::Status { status: 404, .. })));
    }

    fn species(id: u32, name: &str, varieties: &[(&str, u32, bool)]) -> Value {
        json!({
            "id": id,
            "name": name,
            "varieties": varieties.iter().map(|(variety, pokemon_id, is_default)| json!({
                "is_default": is_default,
                "pokemon": named(variety, &format!("pokemon/{pokemon_id}/")),
            })).collect::<Vec<_>>(),
            "evolution_chain": {"url": format!("{BASE}/evolution-chain/{id}/")},
            "flavor_text_entries": [],
            "genera": [],
            "egg_groups": [named("field", "egg-group/5/")],
            "pokedex_numbers": [{"entry_number": id, "pokedex": named("national", "pokedex/1/")}],
        })
    }

    fn form(name: &str, types: &[&str]) -> Value {
        json!({
            "name": name,
            "types": types.iter().map(|ty| json!({"type": named(ty, "type/1/")})).collect::<Vec<_>>(),
        })
    }

    fn pokemon_world() -> MapTransport {
        MapTransport::default()
            .route(
                "pokemon-species?limit=1025",
                json!({"results": [
                    named("meowth", "pokemon-species/52/"),
                    named("persian", "pokemon-species/53/"),
                    named("ghost", "pokemon-species/404404/"),
                ]}),
            )
            .route(
                "pokemon?limit=1302",
                json!({"results": [
                    named("meowth", "pokemon/52/"),
                    named("persian", "pokemon/53/"),
                    named("meowth-gmax", "pokemon/10200/"),
                ]}),
            )
            .route(
                "pokemon-species/52/",
                species(52, "meowth", &[("meowth", 52, true), ("meowth-gmax", 10200, false)]),
            )
            .route("pokemon-species/53/", species(53, "persian", &[("persian", 53, true)]))
            .route("pokemon/52/", form("meowth", &["normal"]))
            .route("pokemon/53/", form("persian", &["normal"]))
            .route("pokemon/10200/", form("meowth-gmax", &["normal"]))
    }

    #[tokio::test(start_paused = true)]
    async fn test_pokemon_load_builds_families() {
        let db = api(pokemon_world()).load_pokemon().await.unwrap();

        assert_eq!(db.families.len(), 2);
        let meowth = &db.families[0];
        assert_eq!(meowth.base.id, 52);
        assert_eq!(meowth.forms.len(), 1);
        assert_eq!(meowth.forms[0].name, "meowth-gmax");

        let ids: Vec<u32> = db.displayable.iter().map(|pokemon| pokemon.id).collect();
        assert_eq!(ids, vec![52, 53, 10200]);
        assert!(db.displayable[0].has_gmax);
        assert!(!db.displayable[2].has_gmax);
        assert_eq!(
            db.form_info.get("meowth-gmax"),
            Some(&FormInfo {
                species_name: "meowth".to_string(),
                is_default: false,
            })
        );
    }

    #[tokio::test(start_paused = true)]
    async fn test_dex_list_uses_entry_numbers() {
        let transport = pokemon_world().route(
            "pokedex/kanto",
            json!({"pokemon_entries": [
                {"entry_number": 2, "pokemon_species": named("meowth", "pokemon-species/52/")},
                {"entry_number": 1, "pokemon_species": named("persian", "pokemon-species/53/")},
            ]}),
        );
        let api = api(transport);
        let db = api.load_pokemon().await.unwrap();
        let kanto = dex::find_pokedex("kanto").unwrap();

        let list = api.fetch_pokedex_list(&kanto, &db).await.unwrap();

        let numbered: Vec<(u32, &str)> = list
            .iter()
            .map(|entry| (entry.number, entry.name.as_str()))
            .collect();
        assert_eq!(numbered, vec![(1, "persian"), (2, "meowth")]);
    }

    #[tokio::test(start_paused = true)]
    async fn test_entry_skips_unresolved_forms() {
        let transport = pokemon_world()
            .route(
                "pokemon/52/",
                json!({
                    "id": 52,
                    "name": "meowth",
                    "species": named("meowth", "pokemon-species/52/"),
                    "height": 4,
                    "weight": 42,
                    "types": [{"type": named("normal", "type/1/")}],
                }),
            )
            .status("pokemon/10200/", 404)
            .route(
                "evolution-chain/52/",
                json!({"chain": {
                    "species": named("meowth", "pokemon-species/52/"),
                    "evolution_details": [],
                    "evolves_to": [{
                        "species": named("persian", "pokemon-species/53/"),
                        "evolution_details": [{"trigger": named("level-up", "t/1/"), "min_level": 28}],
                        "evolves_to": [],
                    }],
                }}),
            );
        let api = api(transport);
        let mut db = PokemonDb::default();
        for (name, id) in [("meowth", 52), ("persian", 53)] {
            db.urls.insert(name.to_string(), format!("{BASE}/pokemon/{id}/"));
            db.form_info.insert(
                name.to_string(),
                FormInfo {
                    species_name: name.to_string(),
                    is_default: true,
                },
            );
            db.displayable.push(crate::state::DisplayPokemon {
                id,
                base_id: id,
                name: name.to_string(),
                url: format!("{BASE}/pokemon/{id}/"),
                types: Vec::new(),
                has_gmax: false,
            });
        }

        let (detail, evolution) = api
            .fetch_pokedex_entry(&format!("{BASE}/pokemon/52/"), &db)
            .await
            .unwrap();

        assert_eq!(detail.species_name, "meowth");
        assert!(detail.other_forms.is_empty());
        let root = evolution.unwrap();
        assert_eq!(root.name, "meowth");
        assert_eq!(root.evolves_to[0].node.name, "persian");
    }

    fn tauros_world(encounters: Option<Value>) -> MapTransport {
        let transport = MapTransport::default()
            .route(
                "pokemon/128/",
                json!({
                    "id": 128,
                    "name": "tauros",
                    "species": named("tauros", "pokemon-species/128/"),
                    "types": [{"type": named("normal", "type/1/")}],
                    "location_area_encounters": format!("{BASE}/pokemon/128/encounters"),
                }),
            )
            .route(
                "pokemon-species/128/",
                json!({"id": 128, "name": "tauros", "capture_rate": 45, "gender_rate": 0}),
            );
        match encounters {
            Some(body) => transport.route("pokemon/128/encounters", body),
            None => transport.status("pokemon/128/encounters", 500),
        }
    }

    #[tokio::test(start_paused = true)]
    async fn test_entry_reads_encounters() {
        let api = api(tauros_world(Some(json!([{
            "location_area": named("safari-zone-middle-area", "location-area/1/"),
            "version_details": [{"version": named("red", "version/1/")}],
        }]))));

        let (detail, _) = api
            .fetch_pokedex_entry(&format!("{BASE}/pokemon/128/"), &PokemonDb::default())
            .await
            .unwrap();

        assert_eq!(detail.capture_rate, Some(45));
        assert_eq!(detail.encounters.len(), 1);
        assert_eq!(detail.encounters[0].location_area, "safari-zone-middle-area");
        assert_eq!(
            dex::locations_for_era(&detail, "Gen I"),
            vec!["Safari Zone Middle Area"]
        );
    }

    #[tokio::test(start_paused = true)]
    async fn test_encounter_failure_leaves_locations_empty() {
        let transport = tauros_world(None);
        let api = api(transport);

        let (detail, _) = api
            .fetch_pokedex_entry(&format!("{BASE}/pokemon/128/"), &PokemonDb::default())
            .await
            .unwrap();

        assert_eq!(detail.species_name, "tauros");
        assert!(detail.encounters.is_empty());
        assert_eq!(
            api.client().transport().hit_count("pokemon/128/encounters"),
            RetryPolicy::default().retries as usize
        );
    }

    #[tokio::test(start_paused = true)]
    async fn test_uncurated_species_read_the_api_chain() {
        let transport = MapTransport::default().route(
            "evolution-chain/6/",
            json!({"chain": {
                "species": named("pidgey", "pokemon-species/16/"),
                "evolution_details": [],
                "evolves_to": [{
                    "species": named("pidgeotto", "pokemon-species/17/"),
                    "evolution_details": [{"trigger": named("level-up", "t/1/"), "min_level": 18}],
                    "evolves_to": [],
                }],
            }}),
        );
        let api = api(transport);
        let mut db = PokemonDb::default();
        for (name, id) in [("pidgey", 16), ("pidgeotto", 17)] {
            db.urls.insert(name.to_string(), format!("{BASE}/pokemon/{id}/"));
        }

        let tree = api
            .fetch_evolution(Some(&format!("{BASE}/evolution-chain/6/")), "pidgeotto", &db)
            .await
            .unwrap();

        assert_eq!(tree.name, "pidgey");
        assert_eq!(tree.evolves_to[0].node.name, "pidgeotto");
        assert_eq!(api.client().transport().hit_count("evolution-chain/6/"), 1);
    }

    #[tokio::test(start_paused = true)]
    async fn test_curated_lines_skip_the_chain_fetch() {
        let transport = MapTransport::default();
        let api = api(transport);
        let mut db = PokemonDb::default();
        for (name, id) in [("meowth-galar", 10161), ("perrserker", 863)] {
            db.urls.insert(name.to_string(), format!("{BASE}/pokemon/{id}/"));
        }

        let tree = api
            .fetch_evolution(Some(&format!("{BASE}/evolution-chain/22/")), "perrserker", &db)
            .await
            .unwrap();

        assert_eq!(tree.name, "meowth-galar");
        assert_eq!(api.client().transport().hit_count("evolution-chain/22/"), 0);
    }
}
