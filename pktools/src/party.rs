use clap::Args;
use prettytable::{format, row, Table};
use std::io::Write;

use crate::{write_json, RunResult, SaveArgs};

#[derive(Debug, Args)]
pub struct Opts {
    #[command(flatten)]
    pub save: SaveArgs,
}

pub fn run(opts: Opts, out: &mut impl Write) -> RunResult {
    let save_file = opts.save.load()?;
    let party = save_file.get_party()?;

    if opts.save.json {
        return write_json(out, &party);
    }

    let mut table = Table::new();
    table.set_format(*format::consts::FORMAT_NO_BORDER_LINE_SEPARATOR);
    table.add_row(row!["SLOT", "SPECIES", "NICKNAME", "LEVEL", "OT", "ORDER"]);
    for (idx, pkmn) in party.iter().enumerate() {
        table.add_row(row![
            idx + 1,
            pkmn.species(),
            pkmn.nickname,
            pkmn.party_stats
                .map(|stats| stats.level.to_string())
                .unwrap_or_default(),
            format!(
                "{} [{:05}]",
                pkmn.original_trainer_name, pkmn.original_trainer_id.public_id
            ),
            pkmn.order,
        ]);
    }
    table.print(out)?;
    Ok(())
}
