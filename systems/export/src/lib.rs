#![deny(
    unsafe_code,
    missing_docs,
    dead_code,
    unused_results,
    non_snake_case,
    unreachable_pub
)]

//! Result exporter that writes terrain state back as tagged scenario lines.

use treasure_hunt_core::CellCoord;
use treasure_hunt_world::{query, Terrain};

/// Separator placed between fields of exported lines.
const FIELD_SEPARATOR: &str = " - ";

/// Serialises the terrain in deterministic order.
///
/// The `C` line comes first, then mountains, then treasures that still hold
/// units, then adventurers, each group in declaration order. Adventurer lines
/// read `A - <name> - <x> - <y> - <direction> - <collected>`.
#[must_use]
pub fn export(terrain: &Terrain) -> Vec<String> {
    let (columns, rows) = query::dimensions(terrain);
    let mountains = query::mountains(terrain);
    let treasures = query::treasures(terrain);
    let adventurers = query::adventurers(terrain);

    let mut lines = Vec::with_capacity(1 + mountains.len() + treasures.len() + adventurers.len());
    lines.push(join(&["C".to_owned(), columns.to_string(), rows.to_string()]));

    for mountain in mountains {
        lines.push(join(&with_cell("M", mountain.cell(), &[])));
    }

    for treasure in treasures.iter().filter(|treasure| !treasure.is_exhausted()) {
        lines.push(join(&with_cell(
            "T",
            treasure.cell(),
            &[treasure.amount().to_string()],
        )));
    }

    for adventurer in adventurers {
        let cell = adventurer.cell();
        lines.push(join(&[
            "A".to_owned(),
            adventurer.name().to_owned(),
            cell.column().to_string(),
            cell.row().to_string(),
            adventurer.direction().to_string(),
            adventurer.treasures_collected().to_string(),
        ]));
    }

    lines
}

fn with_cell(tag: &str, cell: CellCoord, trailing: &[String]) -> Vec<String> {
    let mut fields = vec![
        tag.to_owned(),
        cell.column().to_string(),
        cell.row().to_string(),
    ];
    fields.extend_from_slice(trailing);
    fields
}

fn join(fields: &[String]) -> String {
    fields.join(FIELD_SEPARATOR)
}
