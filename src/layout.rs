//! Per-game field locations inside each logical section.

use num_derive::{FromPrimitive, ToPrimitive};
use num_traits::FromPrimitive;
use serde::Serialize;

use crate::{fields::FieldSpan, item::ItemPocket};

#[derive(FromPrimitive, ToPrimitive, Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub enum GameVariant {
    RubySapphire = 0,
    FireRedLeafGreen = 1,
    Emerald = 2,
}

/// The game code shares its location with the Emerald security key, so any
/// value above 1 is treated as Emerald.
pub const GAME_CODE: FieldSpan = FieldSpan::new(0x00ac, 4);

pub const PLAYER_NAME: FieldSpan = FieldSpan::new(0x0000, 7);
pub const PLAYER_GENDER: FieldSpan = FieldSpan::new(0x0008, 1);
pub const TRAINER_ID: FieldSpan = FieldSpan::new(0x000a, 2);
pub const SECRET_ID: FieldSpan = FieldSpan::new(0x000c, 2);
pub const TIME_PLAYED: FieldSpan = FieldSpan::new(0x000e, 5);
pub const OPTIONS: FieldSpan = FieldSpan::new(0x0013, 3);

pub const PC_CURRENT_BOX: FieldSpan = FieldSpan::new(0x0000, 4);
pub const PC_BOX_RECORDS: FieldSpan = FieldSpan::new(0x0004, 33600);
pub const PC_BOX_NAMES: FieldSpan = FieldSpan::new(0x8344, 126);
pub const PC_BOX_WALLPAPERS: FieldSpan = FieldSpan::new(0x83c2, 14);

impl GameVariant {
    pub fn from_code(code: u32) -> Self {
        GameVariant::from_u32(code.min(2)).unwrap_or(GameVariant::Emerald)
    }

    pub fn name(&self) -> &'static str {
        match self {
            GameVariant::RubySapphire => "Ruby/Sapphire",
            GameVariant::FireRedLeafGreen => "FireRed/LeafGreen",
            GameVariant::Emerald => "Emerald",
        }
    }

    /// Ruby and Sapphire store money and item quantities in the clear.
    pub fn security_key(&self) -> Option<FieldSpan> {
        match self {
            GameVariant::RubySapphire => None,
            GameVariant::FireRedLeafGreen => Some(FieldSpan::new(0x0f20, 4)),
            GameVariant::Emerald => Some(FieldSpan::new(0x00ac, 4)),
        }
    }

    pub fn team_size(&self) -> FieldSpan {
        match self {
            GameVariant::RubySapphire | GameVariant::Emerald => FieldSpan::new(0x0234, 4),
            GameVariant::FireRedLeafGreen => FieldSpan::new(0x0034, 4),
        }
    }

    pub fn team(&self) -> FieldSpan {
        match self {
            GameVariant::RubySapphire | GameVariant::Emerald => FieldSpan::new(0x0238, 600),
            GameVariant::FireRedLeafGreen => FieldSpan::new(0x0038, 600),
        }
    }

    pub fn money(&self) -> FieldSpan {
        match self {
            GameVariant::RubySapphire | GameVariant::Emerald => FieldSpan::new(0x0490, 4),
            GameVariant::FireRedLeafGreen => FieldSpan::new(0x0290, 4),
        }
    }

    pub fn coins(&self) -> FieldSpan {
        match self {
            GameVariant::RubySapphire | GameVariant::Emerald => FieldSpan::new(0x0494, 2),
            GameVariant::FireRedLeafGreen => FieldSpan::new(0x0294, 2),
        }
    }

    /// Location of an item pocket; each entry is four bytes.
    pub fn pocket(&self, pocket: ItemPocket) -> FieldSpan {
        let (offset, entries) = match (self, pocket) {
            (GameVariant::RubySapphire, ItemPocket::PcItems) => (0x0498, 50),
            (GameVariant::RubySapphire, ItemPocket::Items) => (0x0560, 20),
            (GameVariant::RubySapphire, ItemPocket::KeyItems) => (0x05b0, 20),
            (GameVariant::RubySapphire, ItemPocket::Balls) => (0x0600, 16),
            (GameVariant::RubySapphire, ItemPocket::TmCase) => (0x0640, 64),
            (GameVariant::RubySapphire, ItemPocket::Berries) => (0x0740, 46),
            (GameVariant::Emerald, ItemPocket::PcItems) => (0x0498, 50),
            (GameVariant::Emerald, ItemPocket::Items) => (0x0560, 30),
            (GameVariant::Emerald, ItemPocket::KeyItems) => (0x05d8, 30),
            (GameVariant::Emerald, ItemPocket::Balls) => (0x0650, 16),
            (GameVariant::Emerald, ItemPocket::TmCase) => (0x0690, 64),
            (GameVariant::Emerald, ItemPocket::Berries) => (0x0790, 46),
            (GameVariant::FireRedLeafGreen, ItemPocket::PcItems) => (0x0298, 30),
            (GameVariant::FireRedLeafGreen, ItemPocket::Items) => (0x0310, 42),
            (GameVariant::FireRedLeafGreen, ItemPocket::KeyItems) => (0x03b8, 30),
            (GameVariant::FireRedLeafGreen, ItemPocket::Balls) => (0x0430, 13),
            (GameVariant::FireRedLeafGreen, ItemPocket::TmCase) => (0x0464, 58),
            (GameVariant::FireRedLeafGreen, ItemPocket::Berries) => (0x054c, 43),
        };
        FieldSpan::new(offset, entries * crate::item::ITEM_SIZE)
    }

    pub fn mirage_island(&self) -> Option<FieldSpan> {
        match self {
            GameVariant::RubySapphire => Some(FieldSpan::new(0x0408, 2)),
            GameVariant::Emerald => Some(FieldSpan::new(0x0464, 2)),
            GameVariant::FireRedLeafGreen => None,
        }
    }

    pub fn rival_name(&self) -> Option<FieldSpan> {
        match self {
            GameVariant::FireRedLeafGreen => Some(FieldSpan::new(0x0bcc, 8)),
            GameVariant::RubySapphire | GameVariant::Emerald => None,
        }
    }
}

impl std::fmt::Display for GameVariant {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}
