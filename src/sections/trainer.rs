use num_derive::FromPrimitive;
use num_traits::FromPrimitive;
use serde::Serialize;

use crate::{
    fields, layout, security::SecurityContext, Error, GameVariant, Result, TrainerId,
};

#[derive(FromPrimitive, Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub enum PlayerGender {
    Male = 0,
    Female = 1,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct TimePlayed {
    pub hours: u16,
    pub minutes: u8,
    pub seconds: u8,
    pub frames: u8,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct Options {
    pub button_mode: u8,
    pub text_speed: u8,
    pub sound: u8,
}

#[derive(Clone, Debug, Serialize)]
pub struct TrainerInfo {
    pub player_name: String,
    pub player_gender: PlayerGender,
    pub id: TrainerId,
    pub time_played: TimePlayed,
    pub options: Options,
    pub variant: GameVariant,
    pub security_key: u32,
}

pub fn decode(payload: &[u8]) -> Result<TrainerInfo> {
    let security = SecurityContext::from_trainer_info(payload)?;

    let gender = fields::read_u8(payload, layout::PLAYER_GENDER.offset)?;
    let player_gender = PlayerGender::from_u8(gender).ok_or(Error::UnknownEnumValue {
        kind: "player gender",
        value: gender.into(),
    })?;

    let time = fields::slice(payload, layout::TIME_PLAYED)?;
    let time_played = TimePlayed {
        hours: fields::read_u16(time, 0)?,
        minutes: fields::read_u8(time, 2)?,
        seconds: fields::read_u8(time, 3)?,
        frames: fields::read_u8(time, 4)?,
    };

    let options = fields::slice(payload, layout::OPTIONS)?;
    let options = Options {
        button_mode: options[0],
        text_speed: options[1],
        sound: options[2],
    };

    Ok(TrainerInfo {
        player_name: fields::read_text(payload, layout::PLAYER_NAME)?,
        player_gender,
        id: TrainerId {
            public_id: fields::read_u16(payload, layout::TRAINER_ID.offset)?,
            secret_id: fields::read_u16(payload, layout::SECRET_ID.offset)?,
        },
        time_played,
        options,
        variant: security.variant,
        security_key: security.security_key,
    })
}
