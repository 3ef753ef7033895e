use serde::Serialize;

use crate::{fields, GameVariant, Result};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct GameState {
    /// Compared against party personality values to decide whether Mirage
    /// Island appears. Not stored by FireRed/LeafGreen.
    pub mirage_island: Option<u16>,
}

pub fn decode(payload: &[u8], variant: GameVariant) -> Result<GameState> {
    let mirage_island = variant
        .mirage_island()
        .map(|span| fields::read_uint(payload, span).map(|value| value as u16))
        .transpose()?;
    Ok(GameState { mirage_island })
}
