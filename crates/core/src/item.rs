use crate::types::ItemKind;

/// An inventory item.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Item {
    pub name: String,
    pub damage: i32,
    pub kind: ItemKind,
}

impl Item {
    pub fn weapon(name: impl Into<String>, damage: i32) -> Self {
        Self {
            name: name.into(),
            damage,
            kind: ItemKind::Weapon,
        }
    }

    /// The weapon every new player starts with.
    pub fn starting_weapon() -> Self {
        Self::weapon("Dagger", 3)
    }
}
