//! The "Type" component: what an entity is.
//!
//! [`Classification`] is a closed tagged union. Variants that need extra data
//! carry only the fields relevant to them, so a block's sub-kind can never be
//! read off a player by mistake.

use serde::{Deserialize, Serialize};

use crate::entity::Entity;

/// Payload-free discriminant of a [`Classification`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Kind {
    None,
    Player,
    OneUp,
    Block,
    Cloud,
    Coin,
    Projectile,
    Flower,
    Goomba,
    Mushroom,
    Spiny,
    Star,
}

/// Block sub-kinds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum BlockKind {
    Empty,
    Brick,
    QuestionMark,
}

/// Maturity tier of an upgradeable entity.
///
/// Each tier has its own frame set for every animation kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, Default)]
pub enum Maturity {
    #[default]
    Child,
    Adult,
    Fire,
}

impl Maturity {
    /// The next tier up. The top tier stays where it is.
    #[must_use]
    pub const fn next(self) -> Self {
        match self {
            Self::Child => Self::Adult,
            Self::Adult | Self::Fire => Self::Fire,
        }
    }
}

/// What an entity is, plus the data specific to that kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum Classification {
    #[default]
    None,
    Player {
        tier: Maturity,
    },
    Block {
        block: BlockKind,
        /// What hitting the block from below releases, if anything.
        spawns: Option<Kind>,
    },
    Projectile {
        /// The entity that fired it; `None` for hazards nobody owns.
        owner: Option<Entity>,
    },
    OneUp,
    Cloud,
    Coin,
    Flower,
    Goomba,
    Mushroom,
    Spiny,
    Star,
}

impl Classification {
    #[must_use]
    pub const fn kind(&self) -> Kind {
        match self {
            Self::None => Kind::None,
            Self::Player { .. } => Kind::Player,
            Self::Block { .. } => Kind::Block,
            Self::Projectile { .. } => Kind::Projectile,
            Self::OneUp => Kind::OneUp,
            Self::Cloud => Kind::Cloud,
            Self::Coin => Kind::Coin,
            Self::Flower => Kind::Flower,
            Self::Goomba => Kind::Goomba,
            Self::Mushroom => Kind::Mushroom,
            Self::Spiny => Kind::Spiny,
            Self::Star => Kind::Star,
        }
    }

    /// The maturity tier, for entities that have one.
    #[must_use]
    pub const fn tier(&self) -> Option<Maturity> {
        match self {
            Self::Player { tier } => Some(*tier),
            _ => None,
        }
    }
}

impl Kind {
    /// Enemies that can be stomped or shot.
    #[must_use]
    pub const fn is_hostile(self) -> bool {
        matches!(self, Self::Goomba | Self::Spiny)
    }

    /// Pickups that disappear when touched.
    #[must_use]
    pub const fn is_collectible(self) -> bool {
        matches!(self, Self::Coin | Self::Star | Self::OneUp)
    }

    /// Pickups that raise the maturity tier of whoever touches them.
    #[must_use]
    pub const fn is_growth_item(self) -> bool {
        matches!(self, Self::Mushroom | Self::Flower)
    }

    /// Entities with a maturity tier.
    #[must_use]
    pub const fn is_upgradeable(self) -> bool {
        matches!(self, Self::Player)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kind_of_payload_variants() {
        let block = Classification::Block {
            block: BlockKind::QuestionMark,
            spawns: Some(Kind::Mushroom),
        };
        assert_eq!(block.kind(), Kind::Block);
        assert_eq!(block.tier(), None);

        let player = Classification::Player {
            tier: Maturity::Adult,
        };
        assert_eq!(player.kind(), Kind::Player);
        assert_eq!(player.tier(), Some(Maturity::Adult));

        let fire = Classification::Projectile { owner: None };
        assert_eq!(fire.kind(), Kind::Projectile);
    }

    #[test]
    fn test_maturity_next_saturates() {
        assert_eq!(Maturity::Child.next(), Maturity::Adult);
        assert_eq!(Maturity::Adult.next(), Maturity::Fire);
        assert_eq!(Maturity::Fire.next(), Maturity::Fire);
    }

    #[test]
    fn test_categories() {
        assert!(Kind::Goomba.is_hostile());
        assert!(Kind::Spiny.is_hostile());
        assert!(!Kind::Coin.is_hostile());
        assert!(Kind::Coin.is_collectible());
        assert!(Kind::Mushroom.is_growth_item());
        assert!(Kind::Flower.is_growth_item());
        assert!(Kind::Player.is_upgradeable());
        assert!(!Kind::Block.is_upgradeable());
    }

    #[test]
    fn test_default_is_none() {
        assert_eq!(Classification::default().kind(), Kind::None);
    }
}
