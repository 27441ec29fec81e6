const SPRITE_BASE: &str = "https://raw.githubusercontent.com/PokeAPI/sprites/master/sprites";
const CRY_BASE: &str = "https://raw.githubusercontent.com/PokeAPI/cries/main/cries/pokemon/latest";

pub fn artwork_url(id: u32) -> String {
    format!("{SPRITE_BASE}/pokemon/other/official-artwork/{id}.png")
}

pub fn sprite_url(id: u32) -> String {
    format!("{SPRITE_BASE}/pokemon/{id}.png")
}

pub fn item_sprite_url(name: &str) -> String {
    format!("{SPRITE_BASE}/items/{}.png", name.replace(' ', "-"))
}

pub fn cry_url(id: u32) -> String {
    format!("{CRY_BASE}/{id}.ogg")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_item_sprite_uses_slug() {
        assert_eq!(
            item_sprite_url("master ball"),
            "https://raw.githubusercontent.com/PokeAPI/sprites/master/sprites/items/master-ball.png"
        );
    }

    #[test]
    fn test_cry_url() {
        assert!(cry_url(25).ends_with("/latest/25.ogg"));
    }
}
