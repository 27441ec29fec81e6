use serde::{Deserialize, Serialize};

use crate::normalize::title_case;
use crate::state::FormInfo;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Region {
    Alola,
    Galar,
    Hisui,
    Paldea,
}

impl Region {
    pub const ALL: [Region; 4] = [Region::Alola, Region::Galar, Region::Hisui, Region::Paldea];

    pub fn suffix(self) -> &'static str {
        match self {
            Region::Alola => "alola",
            Region::Galar => "galar",
            Region::Hisui => "hisui",
            Region::Paldea => "paldea",
        }
    }

    pub fn adjective(self) -> &'static str {
        match self {
            Region::Alola => "Alolan",
            Region::Galar => "Galarian",
            Region::Hisui => "Hisuian",
            Region::Paldea => "Paldean",
        }
    }

    pub fn era(self) -> &'static str {
        match self {
            Region::Alola => "Gen VII",
            Region::Galar | Region::Hisui => "Gen VIII",
            Region::Paldea => "Gen IX",
        }
    }

    pub fn intro_generation(self) -> u8 {
        match self {
            Region::Alola => 7,
            Region::Galar | Region::Hisui => 8,
            Region::Paldea => 9,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FormKind {
    Default,
    Regional(Region),
    Mega,
    Gigantamax,
    Primal,
    Totem,
    Cosmetic,
}

impl FormKind {
    /// Generation the form first appeared in, when it differs from its species.
    pub fn intro_generation(self) -> Option<u8> {
        match self {
            FormKind::Regional(region) => Some(region.intro_generation()),
            FormKind::Mega | FormKind::Primal => Some(6),
            FormKind::Gigantamax => Some(8),
            FormKind::Totem => Some(7),
            FormKind::Default | FormKind::Cosmetic => None,
        }
    }
}

// White-striped Basculin only exists in Hisui but carries no region suffix.
const HISUIAN_EXCEPTIONS: &[&str] = &["basculin-white-striped"];

/// Classifies a form by its API name, using form info to tell cosmetic variants apart.
pub fn classify(name: &str, info: Option<&FormInfo>) -> FormKind {
    if is_totem(name) {
        return FormKind::Totem;
    }
    if is_gigantamax(name) {
        return FormKind::Gigantamax;
    }
    if is_mega(name) {
        return FormKind::Mega;
    }
    if name.contains("-primal") {
        return FormKind::Primal;
    }
    if pikachu_costume(name).is_some() {
        return FormKind::Cosmetic;
    }
    if let Some(region) = region_of(name) {
        return FormKind::Regional(region);
    }
    match info {
        Some(info) if !info.is_default => FormKind::Cosmetic,
        _ => FormKind::Default,
    }
}

/// Costume Pikachu are cosmetic even without form info.
fn pikachu_costume(name: &str) -> Option<&str> {
    name.strip_prefix("pikachu-").filter(|variant| *variant != "gmax")
}

pub fn is_totem(name: &str) -> bool {
    name.contains("-totem")
}

pub fn is_gigantamax(name: &str) -> bool {
    name.ends_with("-gmax")
}

pub fn is_mega(name: &str) -> bool {
    name.contains("-mega")
}

pub fn region_of(name: &str) -> Option<Region> {
    if HISUIAN_EXCEPTIONS.contains(&name) {
        return Some(Region::Hisui);
    }
    Region::ALL
        .into_iter()
        .find(|region| name.contains(&format!("-{}", region.suffix())))
}

/// Era a form belongs to by name alone.
pub fn era_of(name: &str) -> Option<&'static str> {
    if let Some(region) = region_of(name) {
        return Some(region.era());
    }
    if is_gigantamax(name) {
        return Some("Gen VIII");
    }
    let variant = pikachu_costume(name)?;
    if variant.ends_with("cap") {
        return Some("Gen VII");
    }
    const COSPLAY: &[&str] = &["cosplay", "rock-star", "belle", "pop-star", "phd", "libre"];
    COSPLAY.contains(&variant).then_some("Gen VI")
}

/// Display name plus form badges, e.g. `("Raichu", ["Alola"])`.
pub fn name_and_badges(name: &str, info: Option<&FormInfo>) -> (String, Vec<String>) {
    if HISUIAN_EXCEPTIONS.contains(&name) {
        return ("Basculin".to_string(), vec![Region::Hisui.adjective().to_string()]);
    }
    let Some(info) = info else {
        return (title_case(name), Vec::new());
    };
    let species = title_case(&info.species_name);
    if info.is_default {
        return (species, Vec::new());
    }
    let suffix = name
        .strip_prefix(info.species_name.as_str())
        .map(|rest| rest.trim_start_matches('-'))
        .unwrap_or(name);
    let badges = suffix
        .split('-')
        .filter(|part| !part.is_empty() && *part != "gmax")
        .map(title_case)
        .collect();
    (species, badges)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn info(species: &str, is_default: bool) -> FormInfo {
        FormInfo {
            species_name: species.to_string(),
            is_default,
        }
    }

    #[test]
    fn test_classify_markers() {
        assert_eq!(classify("raticate-totem-alola", None), FormKind::Totem);
        assert_eq!(classify("venusaur-gmax", None), FormKind::Gigantamax);
        assert_eq!(classify("charizard-mega-x", None), FormKind::Mega);
        assert_eq!(classify("kyogre-primal", None), FormKind::Primal);
        assert_eq!(
            classify("raichu-alola", None),
            FormKind::Regional(Region::Alola)
        );
        assert_eq!(
            classify("darmanitan-galar-standard", None),
            FormKind::Regional(Region::Galar)
        );
    }

    #[test]
    fn test_basculin_white_striped_is_hisuian() {
        assert_eq!(
            classify("basculin-white-striped", None),
            FormKind::Regional(Region::Hisui)
        );
        assert_eq!(era_of("basculin-white-striped"), Some("Gen VIII"));
    }

    #[test]
    fn test_cosmetic_needs_form_info() {
        let cosmetic = info("unown", false);
        assert_eq!(classify("unown-b", Some(&cosmetic)), FormKind::Cosmetic);
        assert_eq!(classify("pikachu", Some(&info("pikachu", true))), FormKind::Default);
        assert_eq!(classify("unown-b", None), FormKind::Default);
    }

    #[test]
    fn test_pikachu_costumes_are_cosmetic_by_name() {
        assert_eq!(classify("pikachu-phd", None), FormKind::Cosmetic);
        assert_eq!(classify("pikachu-original-cap", None), FormKind::Cosmetic);
        assert_eq!(classify("pikachu-alola-cap", None), FormKind::Cosmetic);
        assert_eq!(classify("pikachu-gmax", None), FormKind::Gigantamax);
        assert_eq!(classify("pikachu", None), FormKind::Default);
    }

    #[test]
    fn test_era_of_pikachu_variants() {
        assert_eq!(era_of("pikachu-rock-star"), Some("Gen VI"));
        assert_eq!(era_of("pikachu-original-cap"), Some("Gen VII"));
        assert_eq!(era_of("pikachu"), None);
        assert_eq!(era_of("charizard-gmax"), Some("Gen VIII"));
    }

    #[test]
    fn test_name_and_badges() {
        assert_eq!(
            name_and_badges("raichu-alola", Some(&info("raichu", false))),
            ("Raichu".to_string(), vec!["Alola".to_string()])
        );
        assert_eq!(
            name_and_badges("charizard-gmax", Some(&info("charizard", false))),
            ("Charizard".to_string(), Vec::<String>::new())
        );
        assert_eq!(
            name_and_badges("basculin-white-striped", None),
            ("Basculin".to_string(), vec!["Hisuian".to_string()])
        );
        assert_eq!(
            name_and_badges("mr-mime", Some(&info("mr-mime", true))),
            ("Mr Mime".to_string(), Vec::<String>::new())
        );
    }
}
