use serde::Serialize;

use crate::{fields, item_catalog, layout::GameVariant, Result, SecurityContext};

pub const ITEM_SIZE: usize = 4;

#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub enum ItemPocket {
    PcItems,
    Items,
    KeyItems,
    Balls,
    TmCase,
    Berries,
}

impl ItemPocket {
    pub const ALL: [ItemPocket; 6] = [
        ItemPocket::PcItems,
        ItemPocket::Items,
        ItemPocket::KeyItems,
        ItemPocket::Balls,
        ItemPocket::TmCase,
        ItemPocket::Berries,
    ];

    /// Items stored in the PC keep their quantity in the clear.
    pub fn is_obfuscated(&self) -> bool {
        !matches!(self, ItemPocket::PcItems)
    }

    pub fn name(&self) -> &'static str {
        match self {
            ItemPocket::PcItems => "PC",
            ItemPocket::Items => "Items",
            ItemPocket::KeyItems => "Key Items",
            ItemPocket::Balls => "Poké Balls",
            ItemPocket::TmCase => "TMs & HMs",
            ItemPocket::Berries => "Berries",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct Item {
    pub id: u16,
    pub quantity: u16,
}

impl Item {
    pub fn decode(data: &[u8], pocket: ItemPocket, security: &SecurityContext) -> Result<Self> {
        let id = fields::read_u16(data, 0)?;
        let stored_quantity = fields::read_u16(data, 2)?;
        let quantity = if pocket.is_obfuscated() {
            security.decrypt_quantity(stored_quantity)
        } else {
            stored_quantity
        };
        Ok(Item { id, quantity })
    }

    pub fn is_empty(&self) -> bool {
        self.id == item_catalog::NO_ITEM
    }

    pub fn name(&self) -> Result<&'static str> {
        item_catalog::item_name(self.id)
    }
}

/// Decodes every slot of a pocket, empty ones included.
pub fn decode_pocket(
    payload: &[u8],
    variant: GameVariant,
    pocket: ItemPocket,
    security: &SecurityContext,
) -> Result<Vec<Item>> {
    fields::slice(payload, variant.pocket(pocket))?
        .chunks_exact(ITEM_SIZE)
        .map(|entry| Item::decode(entry, pocket, security))
        .collect()
}
