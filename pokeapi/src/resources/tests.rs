#[cfg(test)]
mod tests {
    use crate::{is_excluded_type, parse_pokemon, parse_resource_list, parse_type};

    const TYPE_LIST: &str = r#"{
        "count": 21,
        "next": null,
        "previous": null,
        "results": [
            {"name": "normal", "url": "https://pokeapi.co/api/v2/type/1/"},
            {"name": "fire", "url": "https://pokeapi.co/api/v2/type/10/"},
            {"name": "stellar", "url": "https://pokeapi.co/api/v2/type/19/"},
            {"name": "unknown", "url": "https://pokeapi.co/api/v2/type/10001/"}
        ]
    }"#;

    const FIRE: &str = r#"{
        "id": 10,
        "name": "fire",
        "damage_relations": {
            "double_damage_from": [{"name": "ground", "url": ""}, {"name": "rock", "url": ""}, {"name": "water", "url": ""}],
            "double_damage_to": [{"name": "bug", "url": ""}, {"name": "steel", "url": ""}, {"name": "grass", "url": ""}, {"name": "ice", "url": ""}],
            "half_damage_from": [{"name": "bug", "url": ""}, {"name": "steel", "url": ""}, {"name": "fire", "url": ""}, {"name": "grass", "url": ""}, {"name": "ice", "url": ""}, {"name": "fairy", "url": ""}],
            "half_damage_to": [{"name": "rock", "url": ""}, {"name": "fire", "url": ""}, {"name": "water", "url": ""}, {"name": "dragon", "url": ""}],
            "no_damage_from": [],
            "no_damage_to": []
        },
        "moves": [{"name": "ember", "url": ""}]
    }"#;

    const CHARIZARD: &str = r#"{
        "id": 6,
        "name": "charizard",
        "types": [
            {"slot": 2, "type": {"name": "flying", "url": ""}},
            {"slot": 1, "type": {"name": "fire", "url": ""}}
        ],
        "stats": [
            {"base_stat": 78, "effort": 0, "stat": {"name": "hp", "url": ""}},
            {"base_stat": 84, "effort": 0, "stat": {"name": "attack", "url": ""}},
            {"base_stat": 78, "effort": 0, "stat": {"name": "defense", "url": ""}},
            {"base_stat": 109, "effort": 3, "stat": {"name": "special-attack", "url": ""}},
            {"base_stat": 85, "effort": 0, "stat": {"name": "special-defense", "url": ""}},
            {"base_stat": 100, "effort": 0, "stat": {"name": "speed", "url": ""}}
        ],
        "sprites": {"front_default": "https://example.test/6.png", "back_default": null}
    }"#;

    #[test]
    fn test_parse_type_list() {
        let list = parse_resource_list(TYPE_LIST).unwrap();

        assert_eq!(list.count, Some(21));
        assert!(!list.is_truncated());
        assert_eq!(list.names().count(), 4);
        assert_eq!(
            list.competitive_type_names().collect::<Vec<_>>(),
            vec!["normal", "fire"]
        );
    }

    #[test]
    fn test_parse_type_relations() {
        let fire = parse_type(FIRE).unwrap();

        assert_eq!(fire.name, "fire");
        assert_eq!(fire.damage_relations.double_damage_from.len(), 3);
        assert_eq!(fire.damage_relations.half_damage_from.len(), 6);
        assert!(fire.damage_relations.no_damage_to.is_empty());
        assert_eq!(fire.damage_relations.len(), 17);
    }

    #[test]
    fn test_parse_pokemon() {
        let charizard = parse_pokemon(CHARIZARD).unwrap();

        assert_eq!(charizard.name, "charizard");
        assert_eq!(charizard.type_names(), vec!["fire", "flying"]);
        assert_eq!(charizard.base_stat("special-attack"), Some(109));
        assert_eq!(charizard.base_stat("accuracy"), None);
        assert_eq!(charizard.sprite(), "https://example.test/6.png");
    }

    #[test]
    fn test_parse_pokemon_without_sprite() {
        let body = r#"{"name": "missingno", "types": [{"slot": 1, "type": {"name": "normal"}}]}"#;
        let pokemon = parse_pokemon(body).unwrap();

        assert_eq!(pokemon.sprite(), "");
        assert!(pokemon.stats.is_empty());
    }

    #[test]
    fn test_parse_pokemon_without_types() {
        let body = r#"{"name": "missingno", "types": []}"#;

        assert!(parse_pokemon(body).is_err());
    }

    #[test]
    fn test_parse_empty_body() {
        assert!(parse_type("   ").is_err());
    }

    #[test]
    fn test_parse_invalid_json() {
        assert!(parse_type("<html>Not Found</html>").is_err());
    }

    #[test]
    fn test_excluded_types() {
        assert!(is_excluded_type("stellar"));
        assert!(is_excluded_type("Unknown"));
        assert!(!is_excluded_type("fairy"));
    }
}
