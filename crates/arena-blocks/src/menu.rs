/// Building or transition a menu wall leads into.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum MenuType {
    None,
    CityGates,
    Crypt,
    Dungeon,
    Equipment,
    House,
    MagesGuild,
    Noble,
    Palace,
    Tavern,
    Temple,
    Tower,
}

/// Resolves a menu id from level info. Cities and the wilderness use
/// different numbering; unknown ids resolve to `MenuType::None`.
pub fn menu_type(menu_id: i32, is_city: bool) -> MenuType {
    if is_city {
        match menu_id {
            0 => MenuType::Equipment,
            1 => MenuType::Tavern,
            2 => MenuType::MagesGuild,
            3 => MenuType::Temple,
            4..=6 => MenuType::House,
            7 | 8 => MenuType::CityGates,
            9 => MenuType::Noble,
            11..=13 => MenuType::Palace,
            _ => MenuType::None,
        }
    } else {
        match menu_id {
            1 => MenuType::Crypt,
            2 => MenuType::House,
            3 => MenuType::Tavern,
            4 => MenuType::Temple,
            5 => MenuType::Tower,
            6 | 7 => MenuType::CityGates,
            8 | 9 => MenuType::Dungeon,
            _ => MenuType::None,
        }
    }
}
