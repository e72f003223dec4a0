mod args;

use args::Args;
use sparselife_lib::World;
use std::process;

fn main() {
    if let Err(e) = run() {
        eprintln!("{e}");
        process::exit(1);
    }
}

fn run() -> Result<(), String> {
    let args = Args::parse()?;
    let mut world = args.world;
    if args.all {
        for generation in 0..=args.generations {
            if generation > 0 {
                world.step();
                println!();
            }
            print_world(&world, args.cells)?;
        }
    } else {
        world.advance(args.generations);
        print_world(&world, args.cells)?;
    }
    Ok(())
}

/// Prints the world cropped to the bounding box of its living cells,
/// as rows of digits or, with `cells`, in Plaintext format.
fn print_world(world: &World, cells: bool) -> Result<(), String> {
    // Encoding fails on an empty world; a pattern that has died out is
    // reported here rather than printed as an empty grid.
    let grid = world.to_grid().map_err(|e| e.to_string())?;
    if cells {
        print!("{world}");
    } else {
        for row in &grid {
            let line: String = row.iter().map(|&c| char::from(b'0' + c)).collect();
            println!("{line}");
        }
    }
    Ok(())
}
