#![allow(dead_code)]

use byteorder::{ByteOrder, LittleEndian};
use pksav::{
    item::ItemPocket,
    layout::{self, GameVariant},
    pokemon::{self, Component, SubstructureOrder, COMPONENT_SIZE, PK3_SIZE_BOX},
    section::{
        compute_checksum, SaveImage, MINIMUM_IMAGE_LENGTH, SAVE_A_OFFSET, SAVE_B_OFFSET,
        SAVE_INDEX_OFFSET, SECTION_CHECKSUM_OFFSET, SECTION_DATA_SIZE, SECTION_ID_OFFSET,
        SECTION_SIGNATURE, SECTION_SIGNATURE_OFFSET, SECTION_SIZE,
    },
    security::{self, ENCRYPTED_DATA_SIZE},
    text::encode_text,
    SecurityContext,
};

pub fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

/// Builds flash images out of individually checksummed sections.
pub struct SaveBuilder {
    data: Vec<u8>,
}

impl SaveBuilder {
    /// Starts from erased flash, where nothing validates.
    pub fn new() -> Self {
        SaveBuilder {
            data: vec![0xff; MINIMUM_IMAGE_LENGTH],
        }
    }

    pub fn section(
        &mut self,
        image: SaveImage,
        position: usize,
        id: u16,
        generation: u32,
        payload: &[u8],
    ) -> &mut Self {
        let mut padded = payload.to_vec();
        padded.resize(SECTION_DATA_SIZE, 0);
        let base = match image {
            SaveImage::A => SAVE_A_OFFSET,
            SaveImage::B => SAVE_B_OFFSET,
        } + position * SECTION_SIZE;
        let chunk = &mut self.data[base..base + SECTION_SIZE];
        chunk[..SECTION_DATA_SIZE].copy_from_slice(&padded);
        LittleEndian::write_u16(&mut chunk[SECTION_ID_OFFSET..], id);
        LittleEndian::write_u16(&mut chunk[SECTION_CHECKSUM_OFFSET..], compute_checksum(&padded));
        LittleEndian::write_u32(&mut chunk[SECTION_SIGNATURE_OFFSET..], SECTION_SIGNATURE);
        LittleEndian::write_u32(&mut chunk[SAVE_INDEX_OFFSET..], generation);
        self
    }

    /// Writes sections 0..14 with the game's rotation: section `id` lands
    /// at position `(id + rotation) % 14`. Ids without a payload are left
    /// erased.
    pub fn image(
        &mut self,
        image: SaveImage,
        generation: u32,
        rotation: usize,
        payloads: &[(u16, Vec<u8>)],
    ) -> &mut Self {
        for (id, payload) in payloads {
            let position = (usize::from(*id) + rotation) % 14;
            self.section(image, position, *id, generation, payload);
        }
        self
    }

    pub fn corrupt(&mut self, offset: usize) -> &mut Self {
        self.data[offset] ^= 0x80;
        self
    }

    pub fn build(&self) -> Vec<u8> {
        self.data.clone()
    }
}

pub fn trainer_payload(variant: GameVariant, security_key: u32, name: &str) -> Vec<u8> {
    let mut payload = vec![0u8; SECTION_DATA_SIZE];
    payload[..7].copy_from_slice(&encode_text(name, 7));
    payload[layout::PLAYER_GENDER.offset] = 1;
    LittleEndian::write_u16(&mut payload[layout::TRAINER_ID.offset..], 12345);
    LittleEndian::write_u16(&mut payload[layout::SECRET_ID.offset..], 54321);
    let time = layout::TIME_PLAYED.offset;
    LittleEndian::write_u16(&mut payload[time..], 123);
    payload[time + 2] = 45;
    payload[time + 3] = 6;
    payload[time + 4] = 7;
    payload[layout::OPTIONS.offset..layout::OPTIONS.end()].copy_from_slice(&[1, 2, 0]);
    let game_code = match variant {
        GameVariant::RubySapphire => 0,
        GameVariant::FireRedLeafGreen => 1,
        GameVariant::Emerald => security_key,
    };
    LittleEndian::write_u32(&mut payload[layout::GAME_CODE.offset..], game_code);
    if let Some(span) = variant.security_key() {
        LittleEndian::write_u32(&mut payload[span.offset..], security_key);
    }
    payload
}

#[derive(Clone, Debug)]
pub struct Pk3Spec {
    pub personality_value: u32,
    pub original_trainer_id: u32,
    pub nickname: &'static str,
    pub species: u16,
    pub experience: u32,
    pub moves: [u16; 4],
    pub evs: [u8; 6],
    pub ivs: [u8; 6],
}

impl Pk3Spec {
    pub fn new(personality_value: u32, species: u16) -> Self {
        Pk3Spec {
            personality_value,
            original_trainer_id: 0xd431_3039,
            nickname: "TORCHIC",
            species,
            experience: 1250,
            moves: [10, 45, 52, 0],
            evs: [1, 2, 3, 4, 5, 6],
            ivs: [31, 0, 15, 20, 7, 1],
        }
    }
}

pub fn plain_substructures(spec: &Pk3Spec) -> [u8; ENCRYPTED_DATA_SIZE] {
    let mut growth = [0u8; COMPONENT_SIZE];
    LittleEndian::write_u16(&mut growth[0..], spec.species);
    LittleEndian::write_u16(&mut growth[2..], 13);
    LittleEndian::write_u32(&mut growth[4..], spec.experience);
    growth[9] = 70;

    let mut attacks = [0u8; COMPONENT_SIZE];
    LittleEndian::write_u16_into(&spec.moves, &mut attacks[..8]);
    attacks[8..].copy_from_slice(&[35, 25, 25, 0]);

    let mut evs = [0u8; COMPONENT_SIZE];
    evs[..6].copy_from_slice(&spec.evs);
    evs[6] = 10;

    let mut misc = [0u8; COMPONENT_SIZE];
    misc[1] = 16;
    LittleEndian::write_u16(&mut misc[2..], 5 | (3 << 7) | (4 << 11));
    let blob = spec
        .ivs
        .iter()
        .enumerate()
        .fold(0u32, |blob, (idx, iv)| blob | (u32::from(*iv) << (5 * idx)));
    LittleEndian::write_u32(&mut misc[4..], blob | (1 << 31));

    let order = SubstructureOrder::from_personality(spec.personality_value);
    let mut plain = [0u8; ENCRYPTED_DATA_SIZE];
    for (component, block) in [
        (Component::Growth, growth),
        (Component::Attacks, attacks),
        (Component::EvsConditions, evs),
        (Component::Miscellaneous, misc),
    ] {
        let offset = order.offset_of(component);
        plain[offset..offset + COMPONENT_SIZE].copy_from_slice(&block);
    }
    plain
}

pub fn build_pk3(spec: &Pk3Spec) -> Vec<u8> {
    let plain = plain_substructures(spec);
    let mut pk3 = vec![0u8; PK3_SIZE_BOX];
    LittleEndian::write_u32(&mut pk3[0..], spec.personality_value);
    LittleEndian::write_u32(&mut pk3[4..], spec.original_trainer_id);
    pk3[0x08..0x12].copy_from_slice(&encode_text(spec.nickname, 10));
    pk3[0x12] = 2;
    pk3[0x13] = 0b010;
    pk3[0x14..0x1b].copy_from_slice(&encode_text("MAY", 7));
    pk3[0x1b] = 0b0101;
    LittleEndian::write_u16(&mut pk3[0x1c..], pokemon::compute_checksum(&plain));
    let key = security::pokemon_key(spec.original_trainer_id, spec.personality_value);
    pk3[0x20..].copy_from_slice(&security::encrypt_data(&plain, key));
    pk3
}

pub fn build_party_pk3(spec: &Pk3Spec, level: u8) -> Vec<u8> {
    let mut pk3 = build_pk3(spec);
    let mut stats = [0u8; 20];
    stats[4] = level;
    LittleEndian::write_u16(&mut stats[6..], 38);
    LittleEndian::write_u16(&mut stats[8..], 41);
    pk3.extend_from_slice(&stats);
    pk3
}

pub struct TeamSpec {
    pub party: Vec<Vec<u8>>,
    pub money: u32,
    pub coins: u16,
    pub items: Vec<(ItemPocket, u16, u16)>,
}

pub fn team_payload(security: &SecurityContext, team: &TeamSpec) -> Vec<u8> {
    let variant = security.variant;
    let mut payload = vec![0u8; SECTION_DATA_SIZE];
    LittleEndian::write_u32(&mut payload[variant.team_size().offset..], team.party.len() as u32);
    for (idx, pk3) in team.party.iter().enumerate() {
        let offset = variant.team().offset + idx * pokemon::PK3_SIZE_PARTY;
        payload[offset..offset + pk3.len()].copy_from_slice(pk3);
    }
    LittleEndian::write_u32(
        &mut payload[variant.money().offset..],
        security.encrypt_money(team.money),
    );
    LittleEndian::write_u16(
        &mut payload[variant.coins().offset..],
        security.encrypt_coins(team.coins),
    );
    // Every pocket starts out as empty slots, which still carry the key.
    for pocket in ItemPocket::ALL {
        let span = variant.pocket(pocket);
        for entry in payload[span.offset..span.end()].chunks_exact_mut(4) {
            let quantity = if pocket.is_obfuscated() {
                security.encrypt_quantity(0)
            } else {
                0
            };
            LittleEndian::write_u16(&mut entry[2..], quantity);
        }
    }
    let mut next_slot = std::collections::HashMap::new();
    for (pocket, id, quantity) in &team.items {
        let slot = next_slot.entry(*pocket).or_insert(0usize);
        let offset = variant.pocket(*pocket).offset + *slot * 4;
        *slot += 1;
        let stored = if pocket.is_obfuscated() {
            security.encrypt_quantity(*quantity)
        } else {
            *quantity
        };
        LittleEndian::write_u16(&mut payload[offset..], *id);
        LittleEndian::write_u16(&mut payload[offset + 2..], stored);
    }
    payload
}

pub const PC_SECTION_DATA_SIZE: usize = 3968;

/// Splits a PC buffer into the payloads of sections 5..=13.
pub fn pc_payloads(pc_data: &[u8]) -> Vec<(u16, Vec<u8>)> {
    pc_data
        .chunks(PC_SECTION_DATA_SIZE)
        .enumerate()
        .map(|(idx, chunk)| (5 + idx as u16, chunk.to_vec()))
        .collect()
}

/// Places a box record at a 1-based box and slot.
pub fn put_in_box(pc_data: &mut [u8], box_number: usize, slot: usize, pk3: &[u8]) {
    let offset = layout::PC_BOX_RECORDS.offset + ((box_number - 1) * 30 + (slot - 1)) * PK3_SIZE_BOX;
    pc_data[offset..offset + PK3_SIZE_BOX].copy_from_slice(&pk3[..PK3_SIZE_BOX]);
}
