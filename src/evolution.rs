//! Evolution trees: a hand-curated table for regional and form-specific
//! lines, and the API's species-level chains for everything else.

use std::collections::HashMap;
use std::sync::OnceLock;

use serde::{Deserialize, Serialize};

use crate::assets;
use crate::forms::{self, FormKind};
use crate::normalize::{id_from_url, title_case, NamedResource};
use crate::state::PokemonDb;

#[derive(Clone, Debug, Deserialize)]
pub struct EvolutionChainPayload {
    pub chain: ChainLinkPayload,
}

#[derive(Clone, Debug, Deserialize)]
pub struct ChainLinkPayload {
    pub species: NamedResource,
    #[serde(default)]
    pub evolution_details: Vec<EvolutionDetailPayload>,
    #[serde(default)]
    pub evolves_to: Vec<ChainLinkPayload>,
}

#[derive(Clone, Debug, Deserialize)]
pub struct EvolutionDetailPayload {
    pub trigger: Option<NamedResource>,
    pub min_level: Option<u32>,
    pub min_happiness: Option<u32>,
    pub min_affection: Option<u32>,
    #[serde(default)]
    pub time_of_day: String,
    pub held_item: Option<NamedResource>,
    pub item: Option<NamedResource>,
    pub known_move: Option<NamedResource>,
    pub gender: Option<u8>,
    pub location: Option<NamedResource>,
    pub relative_physical_stats: Option<i8>,
    #[serde(default)]
    pub needs_overworld_rain: bool,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EvolutionCondition {
    pub trigger: Option<String>,
    pub min_level: Option<u32>,
    pub min_happiness: Option<u32>,
    pub min_affection: Option<u32>,
    pub time_of_day: Option<String>,
    pub held_item: Option<String>,
    pub item: Option<String>,
    pub known_move: Option<String>,
    pub gender: Option<u8>,
    pub location: Option<String>,
    pub relative_physical_stats: Option<i8>,
    pub needs_overworld_rain: bool,
    pub custom_text: Option<String>,
}

impl From<&EvolutionDetailPayload> for EvolutionCondition {
    fn from(detail: &EvolutionDetailPayload) -> Self {
        let name = |resource: &Option<NamedResource>| {
            resource.as_ref().map(|resource| resource.name.clone())
        };
        Self {
            trigger: name(&detail.trigger),
            min_level: detail.min_level,
            min_happiness: detail.min_happiness,
            min_affection: detail.min_affection,
            time_of_day: Some(detail.time_of_day.clone()).filter(|time| !time.is_empty()),
            held_item: name(&detail.held_item),
            item: name(&detail.item),
            known_move: name(&detail.known_move),
            gender: detail.gender,
            location: name(&detail.location),
            relative_physical_stats: detail.relative_physical_stats,
            needs_overworld_rain: detail.needs_overworld_rain,
            custom_text: None,
        }
    }
}

impl EvolutionCondition {
    pub fn level(level: u32) -> Self {
        Self {
            trigger: Some("level-up".to_string()),
            min_level: Some(level),
            ..Self::default()
        }
    }

    /// Level-up trigger with no level requirement.
    pub fn level_up() -> Self {
        Self {
            trigger: Some("level-up".to_string()),
            ..Self::default()
        }
    }

    pub fn friendship(happiness: u32) -> Self {
        Self {
            trigger: Some("level-up".to_string()),
            min_happiness: Some(happiness),
            ..Self::default()
        }
    }

    pub fn use_item(item: &str) -> Self {
        Self {
            trigger: Some("use-item".to_string()),
            item: Some(item.to_string()),
            ..Self::default()
        }
    }

    pub fn trade() -> Self {
        Self {
            trigger: Some("trade".to_string()),
            ..Self::default()
        }
    }

    pub fn custom(text: &str) -> Self {
        Self {
            custom_text: Some(text.to_string()),
            ..Self::default()
        }
    }

    pub fn at(mut self, time_of_day: &str) -> Self {
        self.time_of_day = Some(time_of_day.to_string());
        self
    }

    pub fn holding(mut self, item: &str) -> Self {
        self.held_item = Some(item.to_string());
        self
    }

    pub fn knowing(mut self, known_move: &str) -> Self {
        self.known_move = Some(known_move.to_string());
        self
    }

    pub fn in_rain(mut self) -> Self {
        self.needs_overworld_rain = true;
        self
    }

    /// Human-readable requirement, e.g. `"Level 36, at night"`.
    pub fn describe(&self) -> String {
        if let Some(text) = &self.custom_text {
            return text.clone();
        }

        let spaced = |text: &str| text.replace('-', " ");
        let mut parts = Vec::new();
        if let Some(level) = self.min_level {
            parts.push(format!("Level {level}"));
        }
        if self.min_happiness.is_some() {
            parts.push("High Friendship".to_string());
        }
        if self.min_affection.is_some() {
            parts.push("High Affection".to_string());
        }
        if let Some(time) = &self.time_of_day {
            parts.push(format!("at {time}"));
        }
        if let Some(item) = &self.held_item {
            parts.push(format!("holding {}", spaced(item)));
        }
        if let Some(known_move) = &self.known_move {
            parts.push(format!("knowing {}", spaced(known_move)));
        }
        match self.gender {
            Some(1) => parts.push("(Female)".to_string()),
            Some(2) => parts.push("(Male)".to_string()),
            _ => {}
        }
        if let Some(location) = &self.location {
            parts.push(format!("at {}", spaced(location)));
        }
        match self.relative_physical_stats {
            Some(1) => parts.push("Atk > Def".to_string()),
            Some(-1) => parts.push("Atk < Def".to_string()),
            Some(0) => parts.push("Atk = Def".to_string()),
            _ => {}
        }
        if self.needs_overworld_rain {
            parts.push("in Rain".to_string());
        }

        let main = match self.trigger.as_deref() {
            Some("use-item") => self.item.as_deref().map(title_case),
            Some("trade") => Some("Trade".to_string()),
            _ => None,
        };
        let described: Vec<String> = main.into_iter().chain(parts).collect();
        if described.is_empty() {
            return self.trigger.as_deref().map(title_case).unwrap_or_default();
        }
        described.join(", ")
    }
}

/// Describes the first listed way to evolve; a species can list several.
pub fn describe(conditions: &[EvolutionCondition]) -> String {
    conditions
        .first()
        .map(EvolutionCondition::describe)
        .unwrap_or_default()
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct EvolutionNode {
    pub name: String,
    pub id: u32,
    pub url: String,
    pub artwork_url: String,
    pub evolves_to: Vec<EvolutionEdge>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct EvolutionEdge {
    pub condition: String,
    pub node: EvolutionNode,
}

impl EvolutionNode {
    fn new(name: &str, db: &PokemonDb) -> Option<Self> {
        let url = db.urls.get(name)?;
        let id = id_from_url(url)?;
        Some(Self {
            name: name.to_string(),
            id,
            url: url.clone(),
            artwork_url: assets::artwork_url(id),
            evolves_to: Vec::new(),
        })
    }

    /// Pre-order walk of the tree.
    pub fn nodes(&self) -> Vec<&EvolutionNode> {
        let mut out = vec![self];
        for edge in &self.evolves_to {
            out.extend(edge.node.nodes());
        }
        out
    }

    pub fn depth(&self) -> usize {
        1 + self
            .evolves_to
            .iter()
            .map(|edge| edge.node.depth())
            .max()
            .unwrap_or(0)
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct OverrideEdge {
    pub to: &'static str,
    pub condition: EvolutionCondition,
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct OverrideEntry {
    pub predecessor: Option<&'static str>,
    pub successors: Vec<OverrideEdge>,
}

#[derive(Default)]
struct TableBuilder {
    entries: HashMap<&'static str, OverrideEntry>,
}

impl TableBuilder {
    fn evolves(
        &mut self,
        from: &'static str,
        to: &'static str,
        condition: EvolutionCondition,
    ) -> &mut Self {
        self.entries
            .entry(from)
            .or_default()
            .successors
            .push(OverrideEdge { to, condition });
        self.entries.entry(to).or_default().predecessor = Some(from);
        self
    }

    fn standalone(&mut self, name: &'static str) -> &mut Self {
        self.entries.entry(name).or_default();
        self
    }
}

fn build_override_table() -> HashMap<&'static str, OverrideEntry> {
    use EvolutionCondition as C;

    let mut table = TableBuilder::default();
    table
        .evolves("rattata", "raticate", C::level(20))
        .evolves("rattata-alola", "raticate-alola", C::level(20).at("night"))
        .evolves("pichu", "pikachu", C::friendship(160))
        .evolves("pikachu", "raichu", C::use_item("thunder-stone"))
        .evolves("pikachu", "raichu-alola", C::custom("Thunder Stone in Alola"))
        .evolves("sandshrew", "sandslash", C::level(22))
        .evolves("sandshrew-alola", "sandslash-alola", C::use_item("ice-stone"))
        .evolves("vulpix", "ninetales", C::use_item("fire-stone"))
        .evolves("vulpix-alola", "ninetales-alola", C::use_item("ice-stone"))
        .evolves("diglett", "dugtrio", C::level(26))
        .evolves("diglett-alola", "dugtrio-alola", C::level(26))
        .evolves("meowth", "persian", C::level(28))
        .evolves("meowth-alola", "persian-alola", C::friendship(160))
        .evolves("meowth-galar", "perrserker", C::level(28))
        .evolves("mankey", "primeape", C::level(28))
        .evolves("primeape", "annihilape", C::custom("Use Rage Fist 20 times"))
        .evolves("growlithe", "arcanine", C::use_item("fire-stone"))
        .evolves("growlithe-hisui", "arcanine-hisui", C::use_item("fire-stone"))
        .evolves("geodude", "graveler", C::level(25))
        .evolves("graveler", "golem", C::trade())
        .evolves("geodude-alola", "graveler-alola", C::level(25))
        .evolves("graveler-alola", "golem-alola", C::trade())
        .evolves("ponyta", "rapidash", C::level(40))
        .evolves("ponyta-galar", "rapidash-galar", C::level(40))
        .evolves("slowpoke", "slowbro", C::level(37))
        .evolves("slowpoke", "slowking", C::trade().holding("kings-rock"))
        .evolves("slowpoke-galar", "slowbro-galar", C::use_item("galarica-cuff"))
        .evolves("slowpoke-galar", "slowking-galar", C::use_item("galarica-wreath"))
        .standalone("farfetchd")
        .evolves(
            "farfetchd-galar",
            "sirfetchd",
            C::custom("3 Critical Hits in one battle"),
        )
        .evolves("grimer", "muk", C::level(38))
        .evolves("grimer-alola", "muk-alola", C::level(38))
        .evolves("exeggcute", "exeggutor", C::use_item("leaf-stone"))
        .evolves("exeggcute", "exeggutor-alola", C::custom("Leaf Stone in Alola"))
        .evolves("cubone", "marowak", C::level(28))
        .evolves("cubone", "marowak-alola", C::custom("Level 28 at night in Alola"))
        .evolves("koffing", "weezing", C::level(35))
        .evolves("koffing", "weezing-galar", C::custom("Level 35 in Galar"))
        .evolves("mime-jr", "mr-mime", C::level_up().knowing("mimic"))
        .evolves("mime-jr", "mr-mime-galar", C::custom("Knowing Mimic in Galar"))
        .evolves("mr-mime-galar", "mr-rime", C::level(42))
        .evolves("scyther", "scizor", C::trade().holding("metal-coat"))
        .evolves("scyther", "kleavor", C::use_item("black-augurite"))
        .evolves("cyndaquil", "quilava", C::level(14))
        .evolves("quilava", "typhlosion", C::level(36))
        .evolves("quilava", "typhlosion-hisui", C::custom("Level 36 in Hisui"))
        .evolves("wooper", "quagsire", C::level(20))
        .evolves("wooper-paldea", "clodsire", C::level(20))
        .standalone("qwilfish")
        .evolves(
            "qwilfish-hisui",
            "overqwil",
            C::custom("Use Barb Barrage (Strong Style) 20 times"),
        )
        .evolves(
            "sneasel",
            "weavile",
            C::level_up().holding("razor-claw").at("night"),
        )
        .evolves(
            "sneasel-hisui",
            "sneasler",
            C::level_up().holding("razor-claw").at("day"),
        )
        .evolves("teddiursa", "ursaring", C::level(30))
        .evolves(
            "ursaring",
            "ursaluna",
            C::custom("Use Peat Block during a Full Moon"),
        )
        .standalone("corsola")
        .evolves("corsola-galar", "cursola", C::level(38))
        .evolves(
            "stantler",
            "wyrdeer",
            C::custom("Use Psyshield Bash (Agile Style) 20 times"),
        )
        .evolves("zigzagoon", "linoone", C::level(20))
        .evolves("zigzagoon-galar", "linoone-galar", C::level(20))
        .evolves("linoone-galar", "obstagoon", C::level(35).at("night"))
        .evolves("darumaka", "darmanitan-standard", C::level(35))
        .evolves(
            "darumaka-galar",
            "darmanitan-galar-standard",
            C::use_item("ice-stone"),
        )
        .evolves("yamask", "cofagrigus", C::level(34))
        .evolves(
            "yamask-galar",
            "runerigus",
            C::custom("Take 49+ damage and walk under the stone arch"),
        )
        .evolves("zorua", "zoroark", C::level(30))
        .evolves("zorua-hisui", "zoroark-hisui", C::level(30))
        .evolves("goomy", "sliggoo", C::level(40))
        .evolves("goomy", "sliggoo-hisui", C::custom("Level 40 in Hisui"))
        .evolves("sliggoo", "goodra", C::level(50).in_rain())
        .evolves("sliggoo-hisui", "goodra-hisui", C::level(50).in_rain())
        .evolves("bergmite", "avalugg", C::level(37))
        .evolves("bergmite", "avalugg-hisui", C::custom("Level 37 in Hisui"))
        .evolves("rowlet", "dartrix", C::level(17))
        .evolves("dartrix", "decidueye", C::level(34))
        .evolves("dartrix", "decidueye-hisui", C::custom("Level 36 in Hisui"))
        .evolves(
            "basculin-white-striped",
            "basculegion-male",
            C::custom("Take 294+ recoil damage (evolves into the male form)"),
        )
        .evolves(
            "basculin-white-striped",
            "basculegion-female",
            C::custom("Take 294+ recoil damage (evolves into the female form)"),
        );
    table.entries
}

pub fn override_table() -> &'static HashMap<&'static str, OverrideEntry> {
    static TABLE: OnceLock<HashMap<&'static str, OverrideEntry>> = OnceLock::new();
    TABLE.get_or_init(build_override_table)
}

/// Root of the curated line containing `name`, if the form has one.
pub fn override_root(name: &str) -> Option<&'static str> {
    let table = override_table();
    let (mut current, mut entry) = table.get_key_value(name).map(|(key, entry)| (*key, entry))?;
    // Bounded walk so a malformed table cannot loop forever.
    for _ in 0..table.len() {
        let Some(predecessor) = entry.predecessor else {
            return Some(current);
        };
        current = predecessor;
        entry = table.get(predecessor)?;
    }
    None
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ChainSource {
    Overrides(&'static str),
    Api,
}

pub fn resolve_source(active_form: &str) -> ChainSource {
    match override_root(active_form) {
        Some(root) => ChainSource::Overrides(root),
        None => ChainSource::Api,
    }
}

/// Builds the curated tree from `root`. Nodes without a known URL are left out
/// together with their descendants.
pub fn build_from_overrides(root: &str, db: &PokemonDb) -> Option<EvolutionNode> {
    let table = override_table();
    let mut node = EvolutionNode::new(root, db)?;
    if let Some(entry) = table.get(root) {
        node.evolves_to = entry
            .successors
            .iter()
            .filter_map(|edge| {
                Some(EvolutionEdge {
                    condition: edge.condition.describe(),
                    node: build_from_overrides(edge.to, db)?,
                })
            })
            .collect();
    }
    Some(node)
}

/// Builds a tree from an API chain, showing each species by its default form.
/// A non-default active form stands in for its own species.
pub fn build_from_api(
    link: &ChainLinkPayload,
    db: &PokemonDb,
    active_form: Option<&str>,
) -> Option<EvolutionNode> {
    let name = representative_form(&link.species.name, db, active_form);
    let mut node = EvolutionNode::new(&name, db)?;
    node.evolves_to = link
        .evolves_to
        .iter()
        .filter_map(|child| {
            let conditions: Vec<EvolutionCondition> = child
                .evolution_details
                .iter()
                .map(EvolutionCondition::from)
                .collect();
            Some(EvolutionEdge {
                condition: describe(&conditions),
                node: build_from_api(child, db, active_form)?,
            })
        })
        .collect();
    Some(node)
}

fn representative_form(species: &str, db: &PokemonDb, active_form: Option<&str>) -> String {
    if let Some(active) = active_form {
        let is_variant = db
            .form_info
            .get(active)
            .is_some_and(|info| info.species_name == species && !info.is_default);
        if is_variant {
            return active.to_string();
        }
    }
    db.displayable
        .iter()
        .find(|pokemon| {
            db.form_info
                .get(&pokemon.name)
                .is_some_and(|info| info.species_name == species && info.is_default)
        })
        .map(|pokemon| pokemon.name.clone())
        .unwrap_or_else(|| species.to_string())
}

/// Picks the tree for `active_form`: curated lines first, then the API chain.
pub fn resolve_chain(
    active_form: &str,
    chain: Option<&ChainLinkPayload>,
    db: &PokemonDb,
) -> Option<EvolutionNode> {
    match resolve_source(active_form) {
        ChainSource::Overrides(root) => build_from_overrides(root, db),
        ChainSource::Api => chain.and_then(|chain| build_from_api(chain, db, Some(active_form))),
    }
}

/// Battle-only and cosmetic forms don't get a tree; neither do single-stage lines.
pub fn should_show(active_form: &str, chain: Option<&EvolutionNode>) -> bool {
    let hidden = matches!(
        forms::classify(active_form, None),
        FormKind::Mega | FormKind::Gigantamax | FormKind::Primal | FormKind::Cosmetic
    );
    !hidden && chain.is_some_and(|root| !root.evolves_to.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::{DisplayPokemon, FormInfo};
    use pretty_assertions::assert_eq;
    use serde_json::json;

    fn db_with(names: &[(&str, &str, u32, bool)]) -> PokemonDb {
        let mut db = PokemonDb::default();
        for (name, species, id, is_default) in names {
            let url = format!("https://pokeapi.co/api/v2/pokemon/{id}/");
            db.urls.insert(name.to_string(), url.clone());
            db.form_info.insert(
                name.to_string(),
                FormInfo {
                    species_name: species.to_string(),
                    is_default: *is_default,
                },
            );
            db.displayable.push(DisplayPokemon {
                id: *id,
                base_id: *id,
                name: name.to_string(),
                url,
                types: Vec::new(),
                has_gmax: false,
            });
        }
        db
    }

    fn table_db() -> PokemonDb {
        let mut db = PokemonDb::default();
        for (index, name) in override_table().keys().enumerate() {
            db.urls.insert(
                name.to_string(),
                format!("https://pokeapi.co/api/v2/pokemon/{}/", index + 1),
            );
        }
        db
    }

    #[test]
    fn test_table_links_are_consistent() {
        let table = override_table();
        for (name, entry) in table {
            for edge in &entry.successors {
                let child = table.get(edge.to).unwrap();
                assert_eq!(child.predecessor, Some(*name));
            }
            if let Some(parent) = entry.predecessor {
                assert!(table[parent].successors.iter().any(|edge| edge.to == *name));
            }
        }
    }

    #[test]
    fn test_override_roots() {
        assert_eq!(override_root("typhlosion-hisui"), Some("cyndaquil"));
        assert_eq!(override_root("mr-rime"), Some("mime-jr"));
        assert_eq!(override_root("raichu-alola"), Some("pichu"));
        assert_eq!(override_root("farfetchd"), Some("farfetchd"));
        assert_eq!(override_root("bulbasaur"), None);
    }

    #[test]
    fn test_every_member_resolves_to_its_root_tree() {
        let db = table_db();
        for name in override_table().keys() {
            let root = override_root(name).unwrap();
            assert_eq!(
                resolve_chain(name, None, &db),
                resolve_chain(root, None, &db),
                "{name}"
            );
        }
    }

    #[test]
    fn test_overrides_drop_nodes_without_urls() {
        let db = db_with(&[
            ("cyndaquil", "cyndaquil", 155, true),
            ("quilava", "quilava", 156, true),
            ("typhlosion", "typhlosion", 157, true),
        ]);
        let tree = build_from_overrides("cyndaquil", &db).unwrap();
        let names: Vec<&str> = tree.nodes().iter().map(|node| node.name.as_str()).collect();
        assert_eq!(names, vec!["cyndaquil", "quilava", "typhlosion"]);
        assert_eq!(tree.evolves_to[0].condition, "Level 14");
        assert_eq!(tree.depth(), 3);
        assert!(tree.artwork_url.ends_with("/official-artwork/155.png"));
    }

    fn eevee_chain() -> ChainLinkPayload {
        serde_json::from_value(json!({
            "species": {"name": "eevee", "url": ""},
            "evolution_details": [],
            "evolves_to": [
                {
                    "species": {"name": "vaporeon", "url": ""},
                    "evolution_details": [{
                        "trigger": {"name": "use-item", "url": ""},
                        "item": {"name": "water-stone", "url": ""},
                        "time_of_day": ""
                    }],
                    "evolves_to": []
                },
                {
                    "species": {"name": "umbreon", "url": ""},
                    "evolution_details": [{
                        "trigger": {"name": "level-up", "url": ""},
                        "min_happiness": 160,
                        "time_of_day": "night"
                    }],
                    "evolves_to": []
                }
            ]
        }))
        .unwrap()
    }

    #[test]
    fn test_api_chain_uses_default_forms() {
        let db = db_with(&[
            ("eevee", "eevee", 133, true),
            ("eevee-starter", "eevee", 10159, false),
            ("vaporeon", "vaporeon", 134, true),
            ("umbreon", "umbreon", 197, true),
        ]);
        let chain = eevee_chain();

        let tree = resolve_chain("vaporeon", Some(&chain), &db).unwrap();
        assert_eq!(tree.name, "eevee");
        assert_eq!(tree.evolves_to[0].condition, "Water Stone");
        assert_eq!(tree.evolves_to[1].condition, "High Friendship, at night");

        let starter = resolve_chain("eevee-starter", Some(&chain), &db).unwrap();
        assert_eq!(starter.name, "eevee-starter");
        assert_eq!(starter.evolves_to.len(), 2);
    }

    #[test]
    fn test_api_chain_without_urls_is_dropped() {
        let db = db_with(&[("eevee", "eevee", 133, true)]);
        let tree = resolve_chain("eevee", Some(&eevee_chain()), &db).unwrap();
        assert!(tree.evolves_to.is_empty());
        assert_eq!(resolve_chain("eevee", None, &db), None);
    }

    #[test]
    fn test_describe_conditions() {
        assert_eq!(EvolutionCondition::trade().holding("kings-rock").describe(), "Trade, holding kings rock");
        assert_eq!(EvolutionCondition::level(50).in_rain().describe(), "Level 50, in Rain");
        assert_eq!(EvolutionCondition::custom("Use Rage Fist 20 times").describe(), "Use Rage Fist 20 times");
        let bare = EvolutionCondition {
            trigger: Some("tower-of-darkness".to_string()),
            ..EvolutionCondition::default()
        };
        assert_eq!(bare.describe(), "Tower Of Darkness");
        let stats = EvolutionCondition {
            min_level: Some(20),
            relative_physical_stats: Some(1),
            gender: Some(2),
            ..EvolutionCondition::default()
        };
        assert_eq!(stats.describe(), "Level 20, (Male), Atk > Def");
        assert_eq!(describe(&[]), "");
    }

    #[test]
    fn test_should_show() {
        let db = table_db();
        let tree = resolve_chain("pikachu", None, &db);
        assert!(should_show("pikachu", tree.as_ref()));
        assert!(!should_show("pikachu-phd", tree.as_ref()));
        assert!(!should_show("pikachu-alola-cap", tree.as_ref()));
        assert!(!should_show("pikachu-gmax", tree.as_ref()));
        assert!(!should_show("charizard-mega-x", tree.as_ref()));
        let farfetchd = resolve_chain("farfetchd", None, &db);
        assert!(!should_show("farfetchd", farfetchd.as_ref()));
    }
}
