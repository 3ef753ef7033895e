use serde::Serialize;

use crate::{
    fields,
    item::{self, Item, ItemPocket},
    pokemon::{self, PK3_SIZE_PARTY},
    Pokemon, Result, SecurityContext,
};

pub const MAX_PARTY_SIZE: usize = 6;

#[derive(Clone, Debug, Serialize)]
pub struct TeamItems {
    pub party: Vec<Pokemon>,
    pub money: u32,
    pub coins: u16,
    pub pockets: Vec<(ItemPocket, Vec<Item>)>,
}

impl TeamItems {
    /// Non-empty entries of a pocket.
    pub fn pocket_items(&self, pocket: ItemPocket) -> Vec<Item> {
        self.pockets
            .iter()
            .filter(|(candidate, _)| *candidate == pocket)
            .flat_map(|(_, items)| items.iter().copied())
            .filter(|item| !item.is_empty())
            .collect()
    }
}

pub fn decode(payload: &[u8], security: &SecurityContext) -> Result<TeamItems> {
    let variant = security.variant;

    let team_size = fields::read_uint(payload, variant.team_size())? as usize;
    if team_size > MAX_PARTY_SIZE {
        log::warn!("Team size {team_size} is larger than a party, reading {MAX_PARTY_SIZE}");
    }
    let team = fields::slice(payload, variant.team())?;
    let party = team
        .chunks_exact(PK3_SIZE_PARTY)
        .take(team_size.min(MAX_PARTY_SIZE))
        .filter(|pk3| !pokemon::is_empty_record(pk3))
        .map(Pokemon::from_pk3)
        .collect::<Result<Vec<_>>>()?;

    let money = security.decrypt_money(fields::read_uint(payload, variant.money())?);
    let coins = security.decrypt_coins(fields::read_uint(payload, variant.coins())? as u16);

    let pockets = ItemPocket::ALL
        .into_iter()
        .map(|pocket| Ok((pocket, item::decode_pocket(payload, variant, pocket, security)?)))
        .collect::<Result<Vec<_>>>()?;

    Ok(TeamItems {
        party,
        money,
        coins,
        pockets,
    })
}
