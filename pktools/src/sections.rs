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
    let statuses = save_file.section_statuses();

    if opts.save.json {
        return write_json(out, &statuses);
    }

    let generation = save_file.logical().generation();
    let mut table = Table::new();
    table.set_format(*format::consts::FORMAT_NO_BORDER_LINE_SEPARATOR);
    table.add_row(row!["IMAGE", "POS", "ID", "SAVE INDEX", "SIGNATURE", "CHECKSUM", "CURRENT"]);
    for status in statuses {
        let valid = status.signature_valid && status.checksum_valid;
        table.add_row(row![
            format!("{:?}", status.image),
            status.position,
            status.id,
            status.generation,
            if status.signature_valid { "ok" } else { "bad" },
            if status.checksum_valid { "ok" } else { "bad" },
            if valid && Some(status.generation) == generation {
                "*"
            } else {
                ""
            },
        ]);
    }
    table.print(out)?;
    Ok(())
}
