use clap::Args;
use prettytable::{format, row, Table};
use std::io::Write;

use crate::{write_json, RunResult, SaveArgs};
use pksav::{item_catalog, ItemPocket};

#[derive(Debug, Args)]
pub struct Opts {
    #[command(flatten)]
    pub save: SaveArgs,
    /// Only list entries of this item, by name
    #[arg(long)]
    pub item: Option<String>,
}

pub fn run(opts: Opts, out: &mut impl Write) -> RunResult {
    let wanted = match &opts.item {
        Some(name) => Some(
            item_catalog::item_id(name).ok_or_else(|| anyhow::anyhow!("Unknown item {name}"))?,
        ),
        None => None,
    };
    let save_file = opts.save.load()?;
    let team = save_file.get_team_items()?;

    if let Some(wanted) = wanted {
        let matches = ItemPocket::ALL
            .into_iter()
            .flat_map(|pocket| {
                team.pocket_items(pocket)
                    .into_iter()
                    .filter(|item| item.id == wanted)
                    .map(move |item| (pocket, item))
            })
            .collect::<Vec<_>>();
        if opts.save.json {
            return write_json(out, &matches);
        }
        let name = item_catalog::item_name(wanted)?;
        for (pocket, item) in matches {
            writeln!(out, "{}: {name} x{}", pocket.name(), item.quantity)?;
        }
        return Ok(());
    }

    if opts.save.json {
        return write_json(out, &team.pockets);
    }

    writeln!(out, "Money: ${}  Coins: {}", team.money, team.coins)?;
    let mut table = Table::new();
    table.set_format(*format::consts::FORMAT_NO_BORDER_LINE_SEPARATOR);
    table.add_row(row!["POCKET", "ID", "ITEM", "QTY"]);
    for (pocket, _) in &team.pockets {
        for item in team.pocket_items(*pocket) {
            let name = item.name().unwrap_or_else(|err| {
                log::debug!("{err}");
                "???"
            });
            table.add_row(row![pocket.name(), item.id, name, item.quantity]);
        }
    }
    table.print(out)?;
    Ok(())
}
