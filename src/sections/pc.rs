//! PC storage, split across sections 5 through 13.

use serde::Serialize;

use crate::{
    fields, layout,
    pokemon::{self, PK3_SIZE_BOX},
    section::LogicalSave,
    Error, Pokemon, Result,
};

pub const PC_SECTION_IDS: std::ops::RangeInclusive<u16> = 5..=13;
pub const PC_SECTION_DATA_SIZE: usize = 3968;
pub const PC_LAST_SECTION_DATA_SIZE: usize = 2000;
pub const PC_BUFFER_SIZE: usize = 8 * PC_SECTION_DATA_SIZE + PC_LAST_SECTION_DATA_SIZE;
pub const NUMBER_OF_BOXES: usize = 14;
pub const BOX_SIZE: usize = 30;
const BOX_NAME_SIZE: usize = 9;

#[derive(Clone, Debug, Serialize)]
pub struct PcBox {
    pub name: String,
    pub wallpaper: u8,
    pub slots: Vec<Option<Pokemon>>,
}

impl PcBox {
    /// Occupied slots as (1-based slot number, Pokemon).
    pub fn occupied(&self) -> impl Iterator<Item = (u8, &Pokemon)> {
        self.slots
            .iter()
            .enumerate()
            .filter_map(|(idx, pkmn)| pkmn.as_ref().map(|pkmn| (1 + idx as u8, pkmn)))
    }
}

#[derive(Clone, Debug, Serialize)]
pub struct PcStorage {
    pub current_box: u8,
    pub boxes: Vec<PcBox>,
}

impl PcStorage {
    /// Box and slot numbers start at 1, as shown in game.
    pub fn get(&self, box_number: u8, slot_number: u8) -> Option<&Pokemon> {
        let pc_box = self.boxes.get(usize::from(box_number).checked_sub(1)?)?;
        pc_box
            .slots
            .get(usize::from(slot_number).checked_sub(1)?)?
            .as_ref()
    }
}

fn section_data_size(section_id: u16) -> usize {
    if section_id == *PC_SECTION_IDS.end() {
        PC_LAST_SECTION_DATA_SIZE
    } else {
        PC_SECTION_DATA_SIZE
    }
}

/// Joins the PC sections into one contiguous buffer, in section id order.
pub fn assemble(save: &LogicalSave) -> Result<Vec<u8>> {
    let mut pc_data = Vec::with_capacity(PC_BUFFER_SIZE);
    for section_id in PC_SECTION_IDS {
        let payload = save.payload(section_id).map_err(|err| match err {
            Error::NoValidGeneration(missing) => Error::IncompleteSection { missing },
            other => other,
        })?;
        pc_data.extend_from_slice(&payload[..section_data_size(section_id)]);
    }
    log::debug!("Assembled {} bytes of PC storage", pc_data.len());
    Ok(pc_data)
}

pub fn decode(pc_data: &[u8]) -> Result<PcStorage> {
    let current_box = fields::read_u8(pc_data, layout::PC_CURRENT_BOX.offset)?;
    let names = fields::slice(pc_data, layout::PC_BOX_NAMES)?;
    let wallpapers = fields::slice(pc_data, layout::PC_BOX_WALLPAPERS)?;
    let records = fields::slice(pc_data, layout::PC_BOX_RECORDS)?;

    let boxes = records
        .chunks_exact(BOX_SIZE * PK3_SIZE_BOX)
        .zip(names.chunks_exact(BOX_NAME_SIZE))
        .zip(wallpapers)
        .enumerate()
        .map(|(box_idx, ((box_data, name), wallpaper))| {
            let slots = box_data
                .chunks_exact(PK3_SIZE_BOX)
                .enumerate()
                .map(|(slot_idx, pk3)| {
                    if pokemon::is_empty_record(pk3) {
                        Ok(None)
                    } else {
                        log::trace!("Parsing PK3 at box {} slot {}", box_idx + 1, slot_idx + 1);
                        Pokemon::from_pk3(pk3).map(Some)
                    }
                })
                .collect::<Result<Vec<_>>>()?;
            Ok(PcBox {
                name: crate::text::decode_text(name),
                wallpaper: *wallpaper,
                slots,
            })
        })
        .collect::<Result<Vec<_>>>()?;

    Ok(PcStorage { current_box, boxes })
}
