//! Decoders for each kind of logical section.

pub mod game_state;
pub mod pc;
pub mod rival;
pub mod team;
pub mod trainer;

use serde::Serialize;
use std::ops::RangeInclusive;

use crate::{section::LogicalSave, Error, Result, SecurityContext};

pub use game_state::GameState;
pub use pc::{PcBox, PcStorage};
pub use rival::RivalInfo;
pub use team::TeamItems;
pub use trainer::TrainerInfo;

pub const TRAINER_INFO_ID: u16 = 0;
pub const TEAM_ITEMS_ID: u16 = 1;
pub const GAME_STATE_ID: u16 = 2;
pub const RIVAL_INFO_ID: u16 = 3;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub enum SectionKind {
    TrainerInfo,
    TeamItems,
    GameState,
    RivalInfo,
    PcBuffer,
}

const REGISTRY: [(RangeInclusive<u16>, SectionKind); 5] = [
    (TRAINER_INFO_ID..=TRAINER_INFO_ID, SectionKind::TrainerInfo),
    (TEAM_ITEMS_ID..=TEAM_ITEMS_ID, SectionKind::TeamItems),
    (GAME_STATE_ID..=GAME_STATE_ID, SectionKind::GameState),
    (RIVAL_INFO_ID..=RIVAL_INFO_ID, SectionKind::RivalInfo),
    (pc::PC_SECTION_IDS, SectionKind::PcBuffer),
];

impl SectionKind {
    pub fn for_id(section_id: u16) -> Option<Self> {
        REGISTRY
            .iter()
            .find(|(ids, _)| ids.contains(&section_id))
            .map(|(_, kind)| *kind)
    }

    pub fn name(&self) -> &'static str {
        match self {
            SectionKind::TrainerInfo => "Trainer Info",
            SectionKind::TeamItems => "Team / Items",
            SectionKind::GameState => "Game State",
            SectionKind::RivalInfo => "Rival Info",
            SectionKind::PcBuffer => "PC Buffer",
        }
    }
}

#[derive(Clone, Debug, Serialize)]
pub enum DecodedSection {
    TrainerInfo(TrainerInfo),
    TeamItems(TeamItems),
    GameState(GameState),
    RivalInfo(RivalInfo),
    PcBuffer(PcStorage),
}

/// Why no security context could be derived from `save`.
pub fn missing_security(save: &LogicalSave) -> Error {
    save.payload(TRAINER_INFO_ID)
        .err()
        .unwrap_or(Error::NoValidGeneration(TRAINER_INFO_ID))
}

/// Decodes the section family `kind` out of the arbitrated save. Only kinds
/// that read obfuscated fields require `security`.
pub fn decode(
    kind: SectionKind,
    save: &LogicalSave,
    security: Option<&SecurityContext>,
) -> Result<DecodedSection> {
    log::debug!("Decoding {}", kind.name());
    let require_security = || security.copied().ok_or_else(|| missing_security(save));
    let decoded = match kind {
        SectionKind::TrainerInfo => {
            DecodedSection::TrainerInfo(trainer::decode(save.payload(TRAINER_INFO_ID)?)?)
        }
        SectionKind::TeamItems => {
            DecodedSection::TeamItems(team::decode(save.payload(TEAM_ITEMS_ID)?, &require_security()?)?)
        }
        SectionKind::GameState => DecodedSection::GameState(game_state::decode(
            save.payload(GAME_STATE_ID)?,
            require_security()?.variant,
        )?),
        SectionKind::RivalInfo => DecodedSection::RivalInfo(rival::decode(
            save.payload(RIVAL_INFO_ID)?,
            require_security()?.variant,
        )?),
        SectionKind::PcBuffer => DecodedSection::PcBuffer(pc::decode(&pc::assemble(save)?)?),
    };
    Ok(decoded)
}

/// Decodes the section family that section `section_id` belongs to.
pub fn decode_id(
    section_id: u16,
    save: &LogicalSave,
    security: Option<&SecurityContext>,
) -> Result<DecodedSection> {
    let kind = SectionKind::for_id(section_id).ok_or(Error::UnknownSection(section_id))?;
    decode(kind, save, security)
}
