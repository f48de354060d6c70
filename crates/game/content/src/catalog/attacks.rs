use std::str::FromStr;

use game_core::{AttackDefinition, AttackKind};

use super::same_name;

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct AttackCatalog {
    attacks: Vec<AttackDefinition>,
}

impl AttackCatalog {
    pub fn new(attacks: Vec<AttackDefinition>) -> Self {
        Self { attacks }
    }

    pub fn all(&self) -> &[AttackDefinition] {
        &self.attacks
    }

    pub fn is_empty(&self) -> bool {
        self.attacks.is_empty()
    }

    pub fn search(&self, name: &str) -> Option<&AttackDefinition> {
        self.attacks.iter().find(|a| same_name(&a.name, name))
    }

    pub fn by_kind(&self, kind: AttackKind) -> impl Iterator<Item = &AttackDefinition> {
        self.attacks.iter().filter(move |a| a.kind == kind)
    }

    /// Filter by a kind typed as text. Unknown kinds match nothing.
    pub fn by_kind_name(&self, kind: &str) -> Vec<&AttackDefinition> {
        match AttackKind::from_str(kind.trim()) {
            Ok(kind) => self.by_kind(kind).collect(),
            Err(_) => Vec::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use game_core::Element;

    fn attack(name: &str, kind: AttackKind) -> AttackDefinition {
        AttackDefinition {
            name: name.into(),
            kind,
            damage: 4,
            accuracy: 90,
            element: Element::Neutral,
            description: String::new(),
            effect: None,
        }
    }

    #[test]
    fn search_and_filter() {
        let catalog = AttackCatalog::new(vec![
            attack("Bite", AttackKind::Physical),
            attack("Venom Spit", AttackKind::Poison),
            attack("Claw", AttackKind::Physical),
        ]);
        assert_eq!(catalog.search("venom spit").map(|a| a.kind), Some(AttackKind::Poison));
        assert_eq!(catalog.by_kind_name("physical").len(), 2);
        assert!(catalog.by_kind_name("psychic").is_empty());
    }
}
