use sparselife_lib::{compute_generation, World};
use std::error::Error;

#[test]
fn deterministic() -> Result<(), Box<dyn Error>> {
    let grid = vec![vec![1, 0, 0], vec![0, 1, 1], vec![1, 1, 0]];
    assert_eq!(compute_generation(&grid, 3)?, compute_generation(&grid, 3)?);
    Ok(())
}

#[test]
fn worked_example() -> Result<(), Box<dyn Error>> {
    let grid = vec![vec![1, 0, 0], vec![0, 1, 1], vec![1, 1, 0]];
    assert_eq!(
        compute_generation(&grid, 1)?,
        vec![vec![0, 1, 0], vec![0, 0, 1], vec![1, 1, 1]],
    );
    Ok(())
}

#[test]
fn zero_generations_recrops() -> Result<(), Box<dyn Error>> {
    let padded = vec![vec![0, 0, 0, 0], vec![0, 1, 1, 0], vec![0, 0, 0, 0]];
    assert_eq!(compute_generation(&padded, 0)?, vec![vec![1, 1]]);
    Ok(())
}

#[test]
fn blinker() -> Result<(), Box<dyn Error>> {
    let column = vec![vec![1], vec![1], vec![1]];
    let row = vec![vec![1, 1, 1]];
    assert_eq!(compute_generation(&column, 1)?, row);
    assert_eq!(compute_generation(&column, 2)?, column);
    Ok(())
}

#[test]
fn block_still_life() -> Result<(), Box<dyn Error>> {
    let block = vec![vec![1, 1], vec![1, 1]];
    for generations in 0..5 {
        assert_eq!(compute_generation(&block, generations)?, block);
    }
    Ok(())
}

#[test]
fn glider_translates() -> Result<(), Box<dyn Error>> {
    let glider = vec![vec![0, 1, 0], vec![0, 0, 1], vec![1, 1, 1]];
    // One full period: the same shape, one cell down and one to the
    // right, so the cropped grid is unchanged while the bounding box
    // has moved.
    assert_eq!(compute_generation(&glider, 4)?, glider);
    let mut world = World::from_grid(&glider)?;
    world.advance(4);
    assert_eq!(world.bounding_box(), Some(((1, 1), (3, 3))));
    assert_eq!(world.population(), 5);
    Ok(())
}

#[test]
fn step_matches_advance() -> Result<(), Box<dyn Error>> {
    let grid = vec![vec![1, 0, 0], vec![0, 1, 1], vec![1, 1, 0]];
    let mut stepped = World::from_grid(&grid)?;
    for _ in 0..3 {
        stepped.step();
    }
    let mut advanced = World::from_grid(&grid)?;
    advanced.advance(3);
    assert_eq!(stepped, advanced);
    Ok(())
}

#[test]
fn lone_cell_dies_out() {
    let grid = vec![vec![1]];
    assert_eq!(
        compute_generation(&grid, 1),
        Err(sparselife_lib::Error::EmptyLiveSet)
    );
}

#[test]
fn extinction_detected_at_encode() -> Result<(), Box<dyn Error>> {
    // Two diagonal cells die in the first generation; the remaining
    // generations run on an empty world without an error until the
    // final encoding.
    let grid = vec![vec![1, 0], vec![0, 1]];
    let mut world = World::from_grid(&grid)?;
    world.advance(5);
    assert!(world.is_empty());
    assert_eq!(world.population(), 0);
    assert_eq!(world.to_grid(), Err(sparselife_lib::Error::EmptyLiveSet));
    Ok(())
}

#[test]
fn rejects_empty_grid() {
    assert_eq!(
        World::from_grid(&[]),
        Err(sparselife_lib::Error::EmptyGrid)
    );
    assert_eq!(
        World::from_grid(&[vec![]]),
        Err(sparselife_lib::Error::EmptyGrid)
    );
}

#[test]
fn rejects_ragged_grid() {
    let grid = vec![vec![1, 0], vec![1]];
    assert_eq!(
        World::from_grid(&grid),
        Err(sparselife_lib::Error::RaggedGrid {
            row: 1,
            expected: 2,
            found: 1,
        })
    );
}

#[test]
fn live_cells_in_row_major_order() -> Result<(), Box<dyn Error>> {
    let world = World::from_grid(&[vec![0, 1], vec![1, 0]])?;
    assert_eq!(world.live_cells().collect::<Vec<_>>(), vec![(0, 1), (1, 0)]);
    Ok(())
}

#[test]
fn plaintext_display() -> Result<(), Box<dyn Error>> {
    let world = World::from_grid(&[vec![0, 1, 0], vec![0, 0, 1], vec![1, 1, 1]])?;
    assert_eq!(world.to_string(), ".O.\n..O\nOOO\n");
    assert_eq!(World::new().to_string(), "");
    Ok(())
}

#[test]
#[cfg(feature = "serde")]
fn serde_round_trip() -> Result<(), Box<dyn Error>> {
    let world = World::from_grid(&[vec![1, 1], vec![1, 1]])?;
    let json = serde_json::to_string(&world)?;
    let back: World = serde_json::from_str(&json)?;
    assert_eq!(back, world);
    Ok(())
}
