//! Text rendering of records for the menus.

use std::fmt::Write as _;

use game_core::{AttackDefinition, Character, Item, Mission, MonsterTemplate};

pub fn character_sheet(character: &Character) -> String {
    let profile = character.profile();
    let mut sheet = String::new();

    let _ = writeln!(sheet, "=== {} the {} ===", character.name, character.class);
    let _ = writeln!(
        sheet,
        "Health {}/{}  Attack {}  Defense {}",
        character.current_health, profile.max_health, profile.attack, profile.defense
    );
    let _ = writeln!(
        sheet,
        "Experience {}  Gold {}  ({} attributes)",
        character.experience, character.gold, character.creation_mode
    );
    for (attribute, value) in character.attributes.iter() {
        let _ = writeln!(sheet, "  {:<13}{}", attribute, value);
    }

    let worn: Vec<&str> = character
        .worn_items()
        .map(|(_, item)| item.name.as_str())
        .collect();
    if worn.is_empty() {
        let _ = write!(sheet, "Equipped: nothing");
    } else {
        let _ = write!(sheet, "Equipped: {}", worn.join(", "));
    }
    if character.is_dead() {
        let _ = write!(sheet, "\n{} is dead.", character.name);
    }
    sheet
}

/// `Short Sword (weapon, MainHand) dmg +4 acc 80, 25 gold`
pub fn item_line(item: &Item) -> String {
    let mut line = format!("{} ({}", item.name, item.kind);
    if let Some(slot) = item.slot {
        let _ = write!(line, ", {}", slot);
    }
    line.push(')');
    if let Some(damage) = item.stats.damage {
        let _ = write!(line, " dmg {:+}", damage);
    }
    if let Some(defense) = item.stats.defense {
        let _ = write!(line, " def {:+}", defense);
    }
    if let Some(accuracy) = item.stats.accuracy {
        let _ = write!(line, " acc {}", accuracy);
    }
    let _ = write!(line, ", {} gold", item.price);
    if item.worn {
        line.push_str(" [worn]");
    }
    line
}

pub fn mission_line(mission: &Mission) -> String {
    let mut line = format!(
        "{}: {} x{} | {} xp, {} gold",
        mission.name,
        mission.monster_name,
        mission.monster_count,
        mission.reward_xp,
        mission.reward_gold
    );
    if let Some(class) = mission.required_class {
        let _ = write!(line, " | {} only", class);
    }
    if mission.required_xp > 0 {
        let _ = write!(line, " | needs {} xp", mission.required_xp);
    }
    if mission.repeatable {
        line.push_str(" | repeatable");
    }
    line
}

pub fn monster_line(monster: &MonsterTemplate) -> String {
    format!(
        "{} ({}) {} HP, initiative {}, attacks: {} | {} xp, {} gold{}",
        monster.name,
        monster.element,
        monster.max_health,
        monster.initiative,
        monster.attacks().collect::<Vec<_>>().join(", "),
        monster.xp_reward,
        monster.gold_reward,
        if monster.capturable { " | capturable" } else { "" }
    )
}

pub fn attack_line(attack: &AttackDefinition) -> String {
    let mut line = format!(
        "{} ({}, {}) dmg {} acc {}%",
        attack.name, attack.kind, attack.element, attack.damage, attack.accuracy
    );
    if let Some(effect) = &attack.effect {
        let _ = write!(line, ", {}", effect);
    }
    if !attack.description.is_empty() {
        let _ = write!(line, " - {}", attack.description);
    }
    line
}
