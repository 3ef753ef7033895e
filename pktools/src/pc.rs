use clap::Args;
use prettytable::{format, row, Table};
use std::io::Write;

use crate::{write_json, RunResult, SaveArgs};

#[derive(Debug, Args)]
pub struct Opts {
    #[command(flatten)]
    pub save: SaveArgs,
    /// Box to list, starting from 1. Lists every box when omitted.
    #[arg(long)]
    pub box_number: Option<u8>,
}

pub fn run(opts: Opts, out: &mut impl Write) -> RunResult {
    let save_file = opts.save.load()?;
    let storage = save_file.get_pc_storage()?;

    if opts.save.json {
        return match opts.box_number {
            Some(box_number) => write_json(out, &save_file.get_box(box_number)?),
            None => write_json(out, &storage),
        };
    }

    let mut table = Table::new();
    table.set_format(*format::consts::FORMAT_NO_BORDER_LINE_SEPARATOR);
    table.add_row(row!["BOX", "NAME", "SLOT", "SPECIES", "NICKNAME"]);
    for (idx, pc_box) in storage.boxes.iter().enumerate() {
        let box_number = idx + 1;
        if opts
            .box_number
            .is_some_and(|wanted| usize::from(wanted) != box_number)
        {
            continue;
        }
        for (slot, pkmn) in pc_box.occupied() {
            table.add_row(row![box_number, pc_box.name, slot, pkmn.species(), pkmn.nickname]);
        }
    }
    table.print(out)?;
    Ok(())
}
