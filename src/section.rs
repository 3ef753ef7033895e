//! Physical section handling: segmenting the flash image, validating each
//! copy and picking the authoritative copy of every logical section.

use std::collections::BTreeMap;

use byteorder::{ByteOrder, LittleEndian};
use serde::Serialize;

use crate::{fields, Error, Result};

pub const SAVE_A_OFFSET: usize = 0x0000;
pub const SAVE_B_OFFSET: usize = 0xe000;
pub const SAVE_IMAGE_SIZE: usize = 0xe000;
pub const MINIMUM_IMAGE_LENGTH: usize = SAVE_B_OFFSET + SAVE_IMAGE_SIZE;
pub const SECTION_SIZE: usize = 0x1000;
pub const SECTION_DATA_SIZE: usize = 0x0ff4;
pub const SECTION_ID_OFFSET: usize = 0x0ff4;
pub const SECTION_CHECKSUM_OFFSET: usize = 0x0ff6;
pub const SECTION_SIGNATURE_OFFSET: usize = 0x0ff8;
pub const SAVE_INDEX_OFFSET: usize = 0x0ffc;
pub const SECTION_SIGNATURE: u32 = 0x0801_2025;
pub const NUMBER_OF_SECTIONS: usize = SAVE_IMAGE_SIZE / SECTION_SIZE;

#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Serialize)]
pub enum SaveImage {
    A,
    B,
}

#[derive(Clone)]
pub struct RawSection {
    pub id: u16,
    pub payload: [u8; SECTION_DATA_SIZE],
    pub checksum: u16,
    pub signature: u32,
    pub generation: u32,
    pub image: SaveImage,
    pub position: usize,
}

impl RawSection {
    fn parse(chunk: &[u8], image: SaveImage, position: usize) -> Result<Self> {
        let mut payload = [0u8; SECTION_DATA_SIZE];
        payload.copy_from_slice(fields::slice(
            chunk,
            fields::FieldSpan::new(0, SECTION_DATA_SIZE),
        )?);
        Ok(RawSection {
            id: fields::read_u16(chunk, SECTION_ID_OFFSET)?,
            payload,
            checksum: fields::read_u16(chunk, SECTION_CHECKSUM_OFFSET)?,
            signature: fields::read_u32(chunk, SECTION_SIGNATURE_OFFSET)?,
            generation: fields::read_u32(chunk, SAVE_INDEX_OFFSET)?,
            image,
            position,
        })
    }

    pub fn has_signature(&self) -> bool {
        self.signature == SECTION_SIGNATURE
    }

    pub fn computed_checksum(&self) -> u16 {
        compute_checksum(&self.payload)
    }

    pub fn is_valid(&self) -> bool {
        self.has_signature() && self.computed_checksum() == self.checksum
    }
}

impl std::fmt::Debug for RawSection {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RawSection")
            .field("id", &self.id)
            .field("checksum", &format_args!("0x{:04x}", self.checksum))
            .field("signature", &format_args!("0x{:08x}", self.signature))
            .field("generation", &self.generation)
            .field("image", &self.image)
            .field("position", &self.position)
            .finish()
    }
}

/// Sums the payload as little-endian words and folds the result into 16 bits.
pub fn compute_checksum(data: &[u8]) -> u16 {
    let checksum: u64 = data
        .chunks_exact(4)
        .map(|word| u64::from(LittleEndian::read_u32(word)))
        .sum();
    (((checksum >> 16) + (checksum & 0xffff)) & 0xffff) as u16
}

/// Splits a flash image into every physical section of both save images.
pub fn segment(save_data: &[u8]) -> Result<Vec<RawSection>> {
    if save_data.len() < MINIMUM_IMAGE_LENGTH {
        log::error!(
            "Invalid file length for a game save. Found: {}, Expected: {MINIMUM_IMAGE_LENGTH}",
            save_data.len()
        );
        return Err(Error::TruncatedImage {
            len: save_data.len(),
            required: MINIMUM_IMAGE_LENGTH,
        });
    }

    [(SaveImage::A, SAVE_A_OFFSET), (SaveImage::B, SAVE_B_OFFSET)]
        .into_iter()
        .flat_map(|(image, offset)| {
            save_data[offset..offset + SAVE_IMAGE_SIZE]
                .chunks_exact(SECTION_SIZE)
                .enumerate()
                .map(move |(position, chunk)| RawSection::parse(chunk, image, position))
        })
        .collect()
}

#[derive(Clone, Debug)]
enum Slot {
    Present(Box<RawSection>),
    Conflict,
}

/// The authoritative payload of every logical section, keyed by section id.
#[derive(Clone, Debug, Default)]
pub struct LogicalSave {
    generation: Option<u32>,
    slots: BTreeMap<u16, Slot>,
}

impl LogicalSave {
    pub fn generation(&self) -> Option<u32> {
        self.generation
    }

    pub fn section(&self, id: u16) -> Result<&RawSection> {
        match self.slots.get(&id) {
            Some(Slot::Present(section)) => Ok(section),
            Some(Slot::Conflict) => Err(Error::ConflictingSections {
                id,
                generation: self.generation.unwrap_or_default(),
            }),
            None => Err(Error::NoValidGeneration(id)),
        }
    }

    pub fn payload(&self, id: u16) -> Result<&[u8]> {
        self.section(id).map(|section| &section.payload[..])
    }

    pub fn contains(&self, id: u16) -> bool {
        matches!(self.slots.get(&id), Some(Slot::Present(_)))
    }

    /// Ids with an entry, including conflicting ones.
    pub fn ids(&self) -> impl Iterator<Item = u16> + '_ {
        self.slots.keys().copied()
    }
}

/// Keeps the valid sections written by the newest save generation.
pub fn arbitrate(sections: Vec<RawSection>) -> LogicalSave {
    let valid = sections
        .into_iter()
        .filter(|section| {
            if !section.has_signature() {
                log::debug!(
                    "Rejecting section at {:?}[{}]: signature 0x{:08x}",
                    section.image,
                    section.position,
                    section.signature
                );
                return false;
            }
            let checksum = section.computed_checksum();
            if checksum != section.checksum {
                log::debug!(
                    "Computed checksum 0x{checksum:x} for section {} at {:?}[{}], but checksum was 0x{:x}",
                    section.id,
                    section.image,
                    section.position,
                    section.checksum
                );
                return false;
            }
            true
        })
        .collect::<Vec<_>>();

    let Some(latest_generation) = valid.iter().map(|section| section.generation).max() else {
        log::debug!("No valid sections in either save image");
        return LogicalSave::default();
    };
    log::debug!("Latest save generation: {latest_generation}");

    let mut slots = BTreeMap::new();
    for section in valid
        .into_iter()
        .filter(|section| section.generation == latest_generation)
    {
        let id = section.id;
        if slots.contains_key(&id) {
            log::warn!("Section {id} has multiple valid copies at generation {latest_generation}");
            slots.insert(id, Slot::Conflict);
        } else {
            log::trace!("Section {id} taken from image {:?}", section.image);
            slots.insert(id, Slot::Present(Box::new(section)));
        }
    }

    LogicalSave {
        generation: Some(latest_generation),
        slots,
    }
}
