use serde::Serialize;

use crate::{fields, GameVariant, Result};

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct RivalInfo {
    /// Only FireRed/LeafGreen let the player name their rival.
    pub rival_name: Option<String>,
}

pub fn decode(payload: &[u8], variant: GameVariant) -> Result<RivalInfo> {
    let rival_name = variant
        .rival_name()
        .map(|span| fields::read_text(payload, span))
        .transpose()?;
    Ok(RivalInfo { rival_name })
}
