//! Parsing command-line arguments.

use ca_formats::rle::RLE;
use clap::{command, value_parser, Arg, ArgAction};
use sparselife_lib::{World, ALIVE};
use std::fs;

/// A struct to store the parse results.
pub(crate) struct Args {
    pub(crate) world: World,
    pub(crate) generations: u64,
    pub(crate) all: bool,
    pub(crate) cells: bool,
}

impl Args {
    /// Parses the command-line arguments.
    pub(crate) fn parse() -> Result<Self, String> {
        let matches = command!()
            .long_about(
                "Conway's Game of Life on an unbounded grid\n\
                 \n\
                 Takes a starting pattern and a number of generations, and \
                 prints the\nresulting pattern cropped to the bounding box \
                 of its living cells.\nThe grid has no edges: patterns may \
                 grow in any direction.\n",
            )
            .arg(
                Arg::new("PATTERN")
                    .help("Starting pattern")
                    .long_help(
                        "Starting pattern\n\
                         Either rows of 0/1 digits separated by commas, \
                         e.g. `100,011,110`,\n\
                         or the path of a pattern file in RLE format \
                         (recognized by the\n`.rle` extension).\n",
                    )
                    .required(true)
                    .index(1),
            )
            .arg(
                Arg::new("GENERATIONS")
                    .help("Number of generations to compute")
                    .default_value("1")
                    .index(2)
                    .value_parser(value_parser!(u64)),
            )
            .arg(
                Arg::new("ALL")
                    .help("Prints every generation instead of only the last one")
                    .short('a')
                    .long("all")
                    .action(ArgAction::SetTrue),
            )
            .arg(
                Arg::new("CELLS")
                    .help("Prints cells as `.` and `O` instead of 0/1 digits")
                    .short('c')
                    .long("cells")
                    .action(ArgAction::SetTrue),
            )
            .get_matches();

        let pattern = matches.get_one::<String>("PATTERN").unwrap();
        let generations = *matches.get_one::<u64>("GENERATIONS").unwrap();
        let all = matches.get_flag("ALL");
        let cells = matches.get_flag("CELLS");

        let world = if pattern.ends_with(".rle") {
            read_rle(pattern)?
        } else {
            parse_rows(pattern)?
        };

        Ok(Args {
            world,
            generations,
            all,
            cells,
        })
    }
}

/// Decodes an inline pattern: rows of `0`/`1` digits separated by commas.
fn parse_rows(pattern: &str) -> Result<World, String> {
    let grid = pattern
        .split(',')
        .map(|row| {
            row.trim()
                .chars()
                .map(|c| match c {
                    '0' => Ok(0),
                    '1' => Ok(1),
                    _ => Err(format!("invalid cell {c:?} in pattern row {row:?}")),
                })
                .collect::<Result<Vec<u8>, String>>()
        })
        .collect::<Result<Vec<Vec<u8>>, String>>()?;
    World::from_grid(&grid).map_err(|e| e.to_string())
}

/// Reads a pattern file in [RLE](https://conwaylife.com/wiki/Rle) format.
fn read_rle(path: &str) -> Result<World, String> {
    let text = fs::read_to_string(path).map_err(|e| format!("cannot read {path}: {e}"))?;
    let mut world = World::new();
    for cell in RLE::new(&text) {
        let (x, y) = cell.map_err(|e| format!("invalid RLE pattern: {e:?}"))?;
        world.set_cell((y as i64, x as i64), ALIVE);
    }
    Ok(world)
}
