//! Build-site validation and tower lookup.

use hecs::{Entity, World};

use rampart_core::components::Tower;
use rampart_core::enums::CellState;
use rampart_core::error::Rejection;
use rampart_core::types::{GridCoord, TowerId};
use rampart_map::Grid;

/// Check that a tower may go on `cell`: in bounds and empty.
pub fn check_site(grid: &Grid, cell: GridCoord) -> Result<(), Rejection> {
    match grid.get(cell) {
        None => Err(Rejection::TileOutOfBounds { cell }),
        Some(CellState::Empty) => Ok(()),
        Some(_) => Err(Rejection::TileOccupied { cell }),
    }
}

/// Find a tower entity by id.
pub fn find_tower(world: &World, id: TowerId) -> Option<(Entity, Tower)> {
    world
        .query::<&Tower>()
        .iter()
        .find(|(_, tower)| tower.id == id)
        .map(|(entity, tower)| (entity, tower.clone()))
}

/// Id of the tower standing on `cell`, if any.
pub fn tower_on(world: &World, cell: GridCoord) -> Option<TowerId> {
    world
        .query::<&Tower>()
        .iter()
        .find(|(_, tower)| tower.cell == cell)
        .map(|(_, tower)| tower.id)
}
