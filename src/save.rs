use std::{
    io::Read,
    path::{Path, PathBuf},
};

use serde::Serialize;

use crate::{
    section::{self, LogicalSave, SaveImage},
    sections::{
        self, game_state, pc, rival, team, trainer, DecodedSection, GameState, PcStorage,
        RivalInfo, TeamItems, TrainerInfo,
    },
    Error, Pokemon, Result, SecurityContext,
};

/// Validation outcome of one physical section.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct SectionStatus {
    pub image: SaveImage,
    pub position: usize,
    pub id: u16,
    pub generation: u32,
    pub signature_valid: bool,
    pub checksum_valid: bool,
}

pub struct SaveFile {
    source: Option<PathBuf>,
    statuses: Vec<SectionStatus>,
    logical: LogicalSave,
    security: Option<SecurityContext>,
}

impl SaveFile {
    pub fn new(p: impl AsRef<Path>) -> Result<Self> {
        if !p.as_ref().is_file() {
            log::error!("No file at path: {}", p.as_ref().display());
            return Err(std::io::Error::from(std::io::ErrorKind::NotFound).into());
        }
        let file = std::fs::File::open(&p)?;
        let mut reader = std::io::BufReader::new(file);
        let mut full_contents = Vec::new();
        reader.read_to_end(&mut full_contents)?;

        let mut save = Self::from_bytes(&full_contents)?;
        save.source = Some(p.as_ref().to_path_buf());
        Ok(save)
    }

    pub fn from_bytes(save_data: &[u8]) -> Result<Self> {
        let raw_sections = section::segment(save_data)?;
        let statuses = raw_sections
            .iter()
            .map(|raw| SectionStatus {
                image: raw.image,
                position: raw.position,
                id: raw.id,
                generation: raw.generation,
                signature_valid: raw.has_signature(),
                checksum_valid: raw.computed_checksum() == raw.checksum,
            })
            .collect();
        let logical = section::arbitrate(raw_sections);

        let security = match logical.payload(sections::TRAINER_INFO_ID) {
            Ok(payload) => Some(SecurityContext::from_trainer_info(payload)?),
            Err(err) => {
                log::warn!("Trainer info unavailable, encrypted fields cannot be decoded: {err}");
                None
            }
        };

        Ok(SaveFile {
            source: None,
            statuses,
            logical,
            security,
        })
    }

    pub fn source(&self) -> Option<&Path> {
        self.source.as_deref()
    }

    pub fn logical(&self) -> &LogicalSave {
        &self.logical
    }

    pub fn section_statuses(&self) -> &[SectionStatus] {
        &self.statuses
    }

    /// Fails with the reason the trainer info section is unavailable.
    pub fn security(&self) -> Result<SecurityContext> {
        match self.security {
            Some(security) => Ok(security),
            None => Err(sections::missing_security(&self.logical)),
        }
    }

    pub fn get_trainer_info(&self) -> Result<TrainerInfo> {
        trainer::decode(self.logical.payload(sections::TRAINER_INFO_ID)?)
    }

    pub fn get_team_items(&self) -> Result<TeamItems> {
        let payload = self.logical.payload(sections::TEAM_ITEMS_ID)?;
        team::decode(payload, &self.security()?)
    }

    pub fn get_party(&self) -> Result<Vec<Pokemon>> {
        Ok(self.get_team_items()?.party)
    }

    pub fn get_game_state(&self) -> Result<GameState> {
        let payload = self.logical.payload(sections::GAME_STATE_ID)?;
        game_state::decode(payload, self.security()?.variant)
    }

    pub fn get_rival_info(&self) -> Result<RivalInfo> {
        let payload = self.logical.payload(sections::RIVAL_INFO_ID)?;
        rival::decode(payload, self.security()?.variant)
    }

    pub fn get_pc_storage(&self) -> Result<PcStorage> {
        pc::decode(&pc::assemble(&self.logical)?)
    }

    /// Occupied slots of a box, numbered from 1.
    pub fn get_box(&self, box_number: u8) -> Result<Vec<(u8, Pokemon)>> {
        let storage = self.get_pc_storage()?;
        let pc_box = storage
            .boxes
            .into_iter()
            .nth(usize::from(box_number).saturating_sub(1))
            .filter(|_| box_number >= 1)
            .ok_or(Error::InvalidBoxNumber(box_number))?;
        Ok(pc_box
            .slots
            .into_iter()
            .enumerate()
            .filter_map(|(idx, pkmn)| pkmn.map(|pkmn| (1 + idx as u8, pkmn)))
            .collect())
    }

    pub fn decode_section(&self, section_id: u16) -> Result<DecodedSection> {
        sections::decode_id(section_id, &self.logical, self.security.as_ref())
    }
}
