use clap::Args;
use serde::Serialize;
use std::io::Write;

use crate::{write_json, RunResult, SaveArgs};
use pksav::sections::{pc::NUMBER_OF_BOXES, TrainerInfo};

#[derive(Debug, Args)]
pub struct Opts {
    #[command(flatten)]
    pub save: SaveArgs,
}

#[derive(Serialize)]
struct Summary {
    generation: Option<u32>,
    trainer: TrainerInfo,
    party_size: Option<usize>,
    money: Option<u32>,
    boxed: Option<usize>,
}

pub fn run(opts: Opts, out: &mut impl Write) -> RunResult {
    let save_file = opts.save.load()?;
    let trainer = save_file.get_trainer_info()?;

    // Everything past the trainer info is best effort so a damaged save can
    // still be inspected.
    let team = save_file
        .get_team_items()
        .map_err(|err| log::warn!("Team data unavailable: {err}"))
        .ok();
    let boxed = save_file
        .get_pc_storage()
        .map_err(|err| log::warn!("PC storage unavailable: {err}"))
        .ok()
        .map(|storage| {
            storage
                .boxes
                .iter()
                .map(|pc_box| pc_box.occupied().count())
                .sum::<usize>()
        });

    let summary = Summary {
        generation: save_file.logical().generation(),
        party_size: team.as_ref().map(|team| team.party.len()),
        money: team.as_ref().map(|team| team.money),
        boxed,
        trainer,
    };

    if opts.save.json {
        return write_json(out, &summary);
    }

    if let Some(source) = save_file.source() {
        writeln!(out, "File:        {}", source.display())?;
    }
    let trainer = &summary.trainer;
    writeln!(out, "Game:        {}", trainer.variant)?;
    writeln!(out, "Trainer:     {} ({:?})", trainer.player_name, trainer.player_gender)?;
    writeln!(
        out,
        "ID:          {:05} / {:05}",
        trainer.id.public_id, trainer.id.secret_id
    )?;
    writeln!(
        out,
        "Played:      {}:{:02}:{:02}",
        trainer.time_played.hours, trainer.time_played.minutes, trainer.time_played.seconds
    )?;
    match summary.generation {
        Some(generation) => writeln!(out, "Save index:  {generation}")?,
        None => writeln!(out, "Save index:  none")?,
    }
    match (summary.party_size, summary.money) {
        (Some(party_size), Some(money)) => {
            writeln!(out, "Party:       {party_size}")?;
            writeln!(out, "Money:       ${money}")?;
        }
        _ => writeln!(out, "Party:       unavailable")?,
    }
    match summary.boxed {
        Some(boxed) => writeln!(out, "PC:          {boxed} in {NUMBER_OF_BOXES} boxes")?,
        None => writeln!(out, "PC:          unavailable")?,
    }
    Ok(())
}
