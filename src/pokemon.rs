use byteorder::{LittleEndian, ReadBytesExt};
use serde::Serialize;
use std::io::{Cursor, Read};

use crate::{
    fields::{self, FieldSpan},
    security::{self, ENCRYPTED_DATA_SIZE},
    Error, Result, TrainerId,
};

pub const PK3_SIZE_PARTY: usize = 100;
pub const PK3_SIZE_BOX: usize = 80;
pub const COMPONENT_SIZE: usize = 12;
const SUBSTRUCTURE_OFFSET: usize = 32;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub enum Language {
    Japanese,
    English,
    French,
    Italian,
    German,
    Spanish,
    /// Bytes no released cartridge writes, kept as stored.
    Unknown(u8),
}

impl From<u8> for Language {
    fn from(value: u8) -> Self {
        match value {
            1 => Language::Japanese,
            2 => Language::English,
            3 => Language::French,
            4 => Language::Italian,
            5 => Language::German,
            7 => Language::Spanish,
            other => Language::Unknown(other),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct MiscFlags {
    pub is_bad_egg: bool,
    pub has_species: bool,
    pub use_egg_name: bool,
}

impl From<u8> for MiscFlags {
    fn from(value: u8) -> Self {
        MiscFlags {
            is_bad_egg: (value & 0b1) != 0,
            has_species: (value & 0b10) != 0,
            use_egg_name: (value & 0b100) != 0,
        }
    }
}

/// The four roles a 12 byte block of the encrypted region can play.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
pub enum Component {
    Growth,
    Attacks,
    EvsConditions,
    Miscellaneous,
}

impl Component {
    pub fn letter(&self) -> char {
        match self {
            Component::Growth => 'G',
            Component::Attacks => 'A',
            Component::EvsConditions => 'E',
            Component::Miscellaneous => 'M',
        }
    }
}

const G: Component = Component::Growth;
const A: Component = Component::Attacks;
const E: Component = Component::EvsConditions;
const M: Component = Component::Miscellaneous;

/// Physical block order for each value of `personality % 24`.
pub const SUBSTRUCTURE_ORDERS: [[Component; 4]; 24] = [
    [G, A, E, M],
    [G, A, M, E],
    [G, E, A, M],
    [G, E, M, A],
    [G, M, A, E],
    [G, M, E, A],
    [A, G, E, M],
    [A, G, M, E],
    [A, E, G, M],
    [A, E, M, G],
    [A, M, G, E],
    [A, M, E, G],
    [E, G, A, M],
    [E, G, M, A],
    [E, A, G, M],
    [E, A, M, G],
    [E, M, G, A],
    [E, M, A, G],
    [M, G, A, E],
    [M, G, E, A],
    [M, A, G, E],
    [M, A, E, G],
    [M, E, G, A],
    [M, E, A, G],
];

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct SubstructureOrder(u8);

impl SubstructureOrder {
    pub fn from_personality(personality_value: u32) -> Self {
        SubstructureOrder((personality_value % 24) as u8)
    }

    pub fn index(&self) -> usize {
        usize::from(self.0)
    }

    pub fn components(&self) -> [Component; 4] {
        SUBSTRUCTURE_ORDERS[self.index()]
    }

    pub fn position_of(&self, component: Component) -> usize {
        self.components()
            .iter()
            .position(|candidate| *candidate == component)
            .unwrap_or_default()
    }

    pub fn offset_of(&self, component: Component) -> usize {
        self.position_of(component) * COMPONENT_SIZE
    }
}

impl std::fmt::Display for SubstructureOrder {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        self.components()
            .iter()
            .try_for_each(|component| write!(f, "{}", component.letter()))
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct Growth {
    pub species: u16,
    pub held_item: u16,
    pub experience: u32,
    pub pp_bonuses: u8,
    pub friendship: u8,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct Attacks {
    pub moves: [u16; 4],
    pub pp: [u8; 4],
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct ContestStats {
    pub coolness: u8,
    pub beauty: u8,
    pub cuteness: u8,
    pub smartness: u8,
    pub toughness: u8,
    pub feel: u8,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct EvsConditions {
    /// HP, Attack, Defense, Speed, Sp. Attack, Sp. Defense
    pub evs: [u8; 6],
    pub contest: ContestStats,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct Origins {
    pub level_met: u8,
    pub game: u8,
    pub ball: u8,
    pub trainer_is_female: bool,
}

impl From<u16> for Origins {
    fn from(value: u16) -> Self {
        Origins {
            level_met: (value & 0x7f) as u8,
            game: ((value >> 7) & 0xf) as u8,
            ball: ((value >> 11) & 0xf) as u8,
            trainer_is_female: (value >> 15) != 0,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct Miscellaneous {
    pub pokerus_status: u8,
    pub met_location: u8,
    pub origins: Origins,
    /// HP, Attack, Defense, Speed, Sp. Attack, Sp. Defense
    pub ivs: [u8; 6],
    pub is_egg: bool,
    pub ability: u8,
    pub ribbons_obedience: u32,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub enum Substructure {
    Growth(Growth),
    Attacks(Attacks),
    EvsConditions(EvsConditions),
    Miscellaneous(Miscellaneous),
}

impl Substructure {
    pub fn parse(component: Component, block: &[u8]) -> Result<Self> {
        let mut cursor = Cursor::new(block);
        let substructure = match component {
            Component::Growth => {
                let species = cursor.read_u16::<LittleEndian>()?;
                let held_item = cursor.read_u16::<LittleEndian>()?;
                let experience = cursor.read_u32::<LittleEndian>()?;
                let pp_bonuses = cursor.read_u8()?;
                let friendship = cursor.read_u8()?;
                let _ = cursor.read_u16::<LittleEndian>()?;
                Substructure::Growth(Growth {
                    species,
                    held_item,
                    experience,
                    pp_bonuses,
                    friendship,
                })
            }
            Component::Attacks => {
                let mut moves = [0u16; 4];
                cursor.read_u16_into::<LittleEndian>(&mut moves)?;
                let mut pp = [0u8; 4];
                cursor.read_exact(&mut pp)?;
                Substructure::Attacks(Attacks { moves, pp })
            }
            Component::EvsConditions => {
                let mut evs = [0u8; 6];
                cursor.read_exact(&mut evs)?;
                let contest = ContestStats {
                    coolness: cursor.read_u8()?,
                    beauty: cursor.read_u8()?,
                    cuteness: cursor.read_u8()?,
                    smartness: cursor.read_u8()?,
                    toughness: cursor.read_u8()?,
                    feel: cursor.read_u8()?,
                };
                Substructure::EvsConditions(EvsConditions { evs, contest })
            }
            Component::Miscellaneous => {
                let pokerus_status = cursor.read_u8()?;
                let met_location = cursor.read_u8()?;
                let origins = Origins::from(cursor.read_u16::<LittleEndian>()?);
                let ivs_egg_ability_blob = cursor.read_u32::<LittleEndian>()?;
                let mut ivs = [0u8; 6];
                ivs.iter_mut().enumerate().for_each(|(idx, iv)| {
                    *iv = ((ivs_egg_ability_blob >> (5 * idx)) & 0b11111) as u8
                });
                let ribbons_obedience = cursor.read_u32::<LittleEndian>()?;
                Substructure::Miscellaneous(Miscellaneous {
                    pokerus_status,
                    met_location,
                    origins,
                    ivs,
                    is_egg: ((ivs_egg_ability_blob >> 30) & 0b1) != 0,
                    ability: ((ivs_egg_ability_blob >> 31) & 0b1) as u8,
                    ribbons_obedience,
                })
            }
        };
        Ok(substructure)
    }
}

/// Splits a decrypted data region into its blocks, in physical order.
pub fn decode_substructures(
    decrypted: &[u8; ENCRYPTED_DATA_SIZE],
    order: SubstructureOrder,
) -> Result<[Substructure; 4]> {
    let components = order.components();
    let mut blocks = decrypted.chunks_exact(COMPONENT_SIZE);
    let mut next = |component: Component| match blocks.next() {
        Some(block) => Substructure::parse(component, block),
        None => Err(Error::FieldOutOfBounds {
            offset: ENCRYPTED_DATA_SIZE,
            len: COMPONENT_SIZE,
            size: ENCRYPTED_DATA_SIZE,
        }),
    };
    Ok([
        next(components[0])?,
        next(components[1])?,
        next(components[2])?,
        next(components[3])?,
    ])
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct PartyStats {
    pub status_condition: u32,
    pub level: u8,
    pub pokerus_remaining: u8,
    pub current_hp: u16,
    pub max_hp: u16,
    pub attack: u16,
    pub defense: u16,
    pub speed: u16,
    pub special_attack: u16,
    pub special_defense: u16,
}

impl PartyStats {
    fn parse(data: &[u8]) -> Result<Self> {
        let mut cursor = Cursor::new(data);
        Ok(PartyStats {
            status_condition: cursor.read_u32::<LittleEndian>()?,
            level: cursor.read_u8()?,
            pokerus_remaining: cursor.read_u8()?,
            current_hp: cursor.read_u16::<LittleEndian>()?,
            max_hp: cursor.read_u16::<LittleEndian>()?,
            attack: cursor.read_u16::<LittleEndian>()?,
            defense: cursor.read_u16::<LittleEndian>()?,
            speed: cursor.read_u16::<LittleEndian>()?,
            special_attack: cursor.read_u16::<LittleEndian>()?,
            special_defense: cursor.read_u16::<LittleEndian>()?,
        })
    }
}

#[derive(Clone, Debug, Serialize)]
pub struct Pokemon {
    pub personality_value: u32,
    pub original_trainer_id: TrainerId,
    pub nickname: String,
    pub origin_language: Language,
    pub misc_flags: MiscFlags,
    pub original_trainer_name: String,
    pub markings: u8,
    pub checksum: u16,
    pub checksum_valid: bool,
    pub order: SubstructureOrder,
    pub growth: Growth,
    pub attacks: Attacks,
    pub evs_conditions: EvsConditions,
    pub miscellaneous: Miscellaneous,
    pub party_stats: Option<PartyStats>,
}

impl Pokemon {
    /// Decodes an 80 byte box record or a 100 byte party record.
    pub fn from_pk3(pk3: &[u8]) -> Result<Self> {
        let header = fields::slice(pk3, FieldSpan::new(0, SUBSTRUCTURE_OFFSET))?;
        let mut encrypted = [0u8; ENCRYPTED_DATA_SIZE];
        encrypted.copy_from_slice(fields::slice(
            pk3,
            FieldSpan::new(SUBSTRUCTURE_OFFSET, ENCRYPTED_DATA_SIZE),
        )?);

        let mut cursor = Cursor::new(header);
        let personality_value = cursor.read_u32::<LittleEndian>()?;
        let original_trainer_id = cursor.read_u32::<LittleEndian>()?;
        let mut nickname = [0u8; 10];
        cursor.read_exact(&mut nickname)?;
        let origin_language = Language::from(cursor.read_u8()?);
        if let Language::Unknown(language) = origin_language {
            log::debug!("PK3 0x{personality_value:08x} has unknown language {language}");
        }
        let misc_flags = MiscFlags::from(cursor.read_u8()?);
        let mut original_trainer_name = [0u8; 7];
        cursor.read_exact(&mut original_trainer_name)?;
        let markings = cursor.read_u8()?;
        let checksum = cursor.read_u16::<LittleEndian>()?;

        let key = security::pokemon_key(original_trainer_id, personality_value);
        let decrypted = security::decrypt_data(&encrypted, key);
        let checksum_valid = compute_checksum(&decrypted) == checksum;
        if !checksum_valid {
            log::warn!("PK3 with personality 0x{personality_value:08x} failed its checksum");
        }

        let order = SubstructureOrder::from_personality(personality_value);
        log::trace!("Decoding PK3 0x{personality_value:08x} with substructure order {order}");
        let mut growth = None;
        let mut attacks = None;
        let mut evs_conditions = None;
        let mut miscellaneous = None;
        for substructure in decode_substructures(&decrypted, order)? {
            match substructure {
                Substructure::Growth(s) => growth = Some(s),
                Substructure::Attacks(s) => attacks = Some(s),
                Substructure::EvsConditions(s) => evs_conditions = Some(s),
                Substructure::Miscellaneous(s) => miscellaneous = Some(s),
            }
        }
        let (Some(growth), Some(attacks), Some(evs_conditions), Some(miscellaneous)) =
            (growth, attacks, evs_conditions, miscellaneous)
        else {
            return Err(Error::UnknownEnumValue {
                kind: "substructure order",
                value: order.index() as u32,
            });
        };

        let party_stats = if pk3.len() >= PK3_SIZE_PARTY {
            Some(PartyStats::parse(&pk3[PK3_SIZE_BOX..PK3_SIZE_PARTY])?)
        } else {
            None
        };

        Ok(Pokemon {
            personality_value,
            original_trainer_id: TrainerId::from(original_trainer_id),
            nickname: fields::read_text(&nickname, FieldSpan::new(0, nickname.len()))?,
            origin_language,
            misc_flags,
            original_trainer_name: fields::read_text(
                &original_trainer_name,
                FieldSpan::new(0, original_trainer_name.len()),
            )?,
            markings,
            checksum,
            checksum_valid,
            order,
            growth,
            attacks,
            evs_conditions,
            miscellaneous,
            party_stats,
        })
    }

    pub fn species(&self) -> u16 {
        self.growth.species
    }

    pub fn is_egg(&self) -> bool {
        self.miscellaneous.is_egg
    }
}

/// Box slots are cleared to zero when empty.
pub fn is_empty_record(pk3: &[u8]) -> bool {
    pk3.iter().all(|byte| *byte == 0x00)
}

/// Wrapping sum of the decrypted data region as 16-bit words.
pub fn compute_checksum(decrypted: &[u8]) -> u16 {
    decrypted
        .chunks_exact(2)
        .fold(0u16, |checksum, half| {
            checksum.wrapping_add(u16::from_le_bytes([half[0], half[1]]))
        })
}
