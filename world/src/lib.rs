#![deny(
    unsafe_code,
    missing_docs,
    dead_code,
    unused_results,
    non_snake_case,
    unreachable_pub
)]

//! Authoritative terrain state management for Treasure Hunt.

mod occupancy;

use treasure_hunt_core::{
    AdventurerId, CellCoord, Command, Direction, Event, MoveCommand, Obstacle, PlacementError,
    Rotation,
};

use crate::occupancy::{Occupant, OccupancyIndex};

/// Narrowest spacing the renderer ever uses.
pub const MIN_SPACING: usize = 4;

/// Widest spacing a caller may request.
pub const MAX_SPACING: usize = 1024;

/// Characters added around a name by the `A(<name>)` token.
const NAME_TOKEN_PADDING: usize = 3;

/// Represents the authoritative Treasure Hunt terrain.
#[derive(Debug)]
pub struct Terrain {
    columns: u32,
    rows: u32,
    mountains: Vec<Mountain>,
    treasures: Vec<Treasure>,
    adventurers: Vec<Adventurer>,
    occupancy: OccupancyIndex,
    requested_spacing: Option<usize>,
    spacing: usize,
}

impl Terrain {
    /// Creates an empty terrain with the provided dimensions.
    #[must_use]
    pub fn new(columns: u32, rows: u32) -> Self {
        Self {
            columns,
            rows,
            mountains: Vec::new(),
            treasures: Vec::new(),
            adventurers: Vec::new(),
            occupancy: OccupancyIndex::new(columns, rows),
            requested_spacing: None,
            spacing: MIN_SPACING,
        }
    }

    fn adventurer_index(&self, adventurer: AdventurerId) -> Option<usize> {
        let index = adventurer.get();
        (index < self.adventurers.len()).then_some(index)
    }

    fn refresh_spacing(&mut self) -> bool {
        let required = self
            .adventurers
            .iter()
            .map(|adventurer| adventurer.name.chars().count() + NAME_TOKEN_PADDING)
            .fold(MIN_SPACING, usize::max);
        let spacing = self
            .requested_spacing
            .map_or(required, |requested| requested.min(MAX_SPACING).max(required));
        let changed = spacing != self.spacing;
        self.spacing = spacing;
        changed
    }

    fn place_mountain(&mut self, cell: CellCoord, out_events: &mut Vec<Event>) {
        if !cell.is_within(self.columns, self.rows) {
            out_events.push(rejected(cell, PlacementError::OutOfBounds));
            return;
        }
        if let Some(Occupant::Adventurer(_)) = self.occupancy.occupant(cell) {
            out_events.push(rejected(cell, PlacementError::Occupied));
            return;
        }

        self.occupancy.occupy(cell, Occupant::Mountain);
        self.mountains.push(Mountain { cell });
        out_events.push(Event::MountainPlaced { cell });
    }

    fn place_treasure(&mut self, cell: CellCoord, amount: u32, out_events: &mut Vec<Event>) {
        if !cell.is_within(self.columns, self.rows) {
            out_events.push(rejected(cell, PlacementError::OutOfBounds));
            return;
        }

        self.treasures.push(Treasure { cell, amount });
        out_events.push(Event::TreasurePlaced { cell, amount });
    }

    fn spawn_adventurer(
        &mut self,
        name: String,
        cell: CellCoord,
        direction: Direction,
        script: Vec<MoveCommand>,
        out_events: &mut Vec<Event>,
    ) {
        if !cell.is_within(self.columns, self.rows) {
            out_events.push(rejected(cell, PlacementError::OutOfBounds));
            return;
        }
        if self.occupancy.occupant(cell).is_some() {
            out_events.push(rejected(cell, PlacementError::Occupied));
            return;
        }
        let id = AdventurerId::new(self.adventurers.len());
        self.occupancy.occupy(cell, Occupant::Adventurer(id));
        self.adventurers.push(Adventurer {
            id,
            name,
            cell,
            direction,
            script,
            treasures_collected: 0,
        });
        out_events.push(Event::AdventurerSpawned {
            adventurer: id,
            cell,
        });

        if self.refresh_spacing() {
            out_events.push(Event::SpacingConfigured {
                spacing: self.spacing,
            });
        }
    }

    fn turn(&mut self, adventurer: AdventurerId, rotation: Rotation, out_events: &mut Vec<Event>) {
        let Some(index) = self.adventurer_index(adventurer) else {
            return;
        };
        let state = &mut self.adventurers[index];
        let from = state.direction;
        state.direction = from.rotated(rotation);
        out_events.push(Event::AdventurerTurned {
            adventurer,
            from,
            to: state.direction,
        });
    }

    fn advance(&mut self, adventurer: AdventurerId, out_events: &mut Vec<Event>) {
        let Some(index) = self.adventurer_index(adventurer) else {
            return;
        };
        let state = &mut self.adventurers[index];
        let from = state.cell;
        let to = from.step_clamped(state.direction, self.columns, self.rows);

        let obstacle = if to == from {
            Some(Obstacle::Boundary)
        } else {
            match self.occupancy.occupant(to) {
                Some(Occupant::Mountain) => Some(Obstacle::Mountain),
                Some(Occupant::Adventurer(other)) => Some(Obstacle::Adventurer(other)),
                None => None,
            }
        };
        if let Some(obstacle) = obstacle {
            out_events.push(Event::AdventurerBlocked {
                adventurer,
                at: from,
                obstacle,
            });
            return;
        }

        self.occupancy.vacate(from);
        self.occupancy.occupy(to, Occupant::Adventurer(adventurer));
        state.cell = to;
        out_events.push(Event::AdventurerAdvanced {
            adventurer,
            from,
            to,
        });

        if let Some(treasure) = self
            .treasures
            .iter_mut()
            .find(|treasure| treasure.cell == to && treasure.amount > 0)
        {
            treasure.amount -= 1;
            state.treasures_collected = state.treasures_collected.saturating_add(1);
            out_events.push(Event::TreasureCollected {
                adventurer,
                cell: to,
                remaining: treasure.amount,
            });
        }
    }
}

fn rejected(cell: CellCoord, reason: PlacementError) -> Event {
    Event::PlacementRejected { cell, reason }
}

/// Applies the provided command to the terrain, mutating state deterministically.
pub fn apply(terrain: &mut Terrain, command: Command, out_events: &mut Vec<Event>) {
    match command {
        Command::PlaceMountain { cell } => terrain.place_mountain(cell, out_events),
        Command::PlaceTreasure { cell, amount } => {
            terrain.place_treasure(cell, amount, out_events);
        }
        Command::SpawnAdventurer {
            name,
            cell,
            direction,
            script,
        } => terrain.spawn_adventurer(name, cell, direction, script, out_events),
        Command::ConfigureSpacing { spacing } => {
            terrain.requested_spacing = Some(spacing);
            let _ = terrain.refresh_spacing();
            out_events.push(Event::SpacingConfigured {
                spacing: terrain.spacing,
            });
        }
        Command::Turn {
            adventurer,
            rotation,
        } => terrain.turn(adventurer, rotation, out_events),
        Command::Advance { adventurer } => terrain.advance(adventurer, out_events),
    }
}

/// Impassable terrain feature.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Mountain {
    cell: CellCoord,
}

impl Mountain {
    /// Cell covered by the mountain.
    #[must_use]
    pub const fn cell(&self) -> CellCoord {
        self.cell
    }
}

/// Treasure pile holding a finite number of units.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Treasure {
    cell: CellCoord,
    amount: u32,
}

impl Treasure {
    /// Cell holding the treasure.
    #[must_use]
    pub const fn cell(&self) -> CellCoord {
        self.cell
    }

    /// Units still available for pickup.
    #[must_use]
    pub const fn amount(&self) -> u32 {
        self.amount
    }

    /// Reports whether every unit has been collected.
    #[must_use]
    pub const fn is_exhausted(&self) -> bool {
        self.amount == 0
    }
}

/// Adventurer exploring the terrain.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Adventurer {
    id: AdventurerId,
    name: String,
    cell: CellCoord,
    direction: Direction,
    script: Vec<MoveCommand>,
    treasures_collected: u32,
}

impl Adventurer {
    /// Identifier allocated when the adventurer was spawned.
    #[must_use]
    pub const fn id(&self) -> AdventurerId {
        self.id
    }

    /// Display name as declared in the scenario.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Cell currently occupied.
    #[must_use]
    pub const fn cell(&self) -> CellCoord {
        self.cell
    }

    /// Direction currently faced.
    #[must_use]
    pub const fn direction(&self) -> Direction {
        self.direction
    }

    /// Move script replayed during play.
    #[must_use]
    pub fn script(&self) -> &[MoveCommand] {
        &self.script
    }

    /// Number of treasure units picked up so far.
    #[must_use]
    pub const fn treasures_collected(&self) -> u32 {
        self.treasures_collected
    }
}

/// Query functions that provide read-only access to the terrain state.
pub mod query {
    use super::{Adventurer, Mountain, Terrain, Treasure};
    use treasure_hunt_core::AdventurerId;

    /// Number of columns and rows of the grid.
    #[must_use]
    pub fn dimensions(terrain: &Terrain) -> (u32, u32) {
        (terrain.columns, terrain.rows)
    }

    /// Blank characters following each rendered cell.
    #[must_use]
    pub fn spacing(terrain: &Terrain) -> usize {
        terrain.spacing
    }

    /// Mountains in declaration order.
    #[must_use]
    pub fn mountains(terrain: &Terrain) -> &[Mountain] {
        &terrain.mountains
    }

    /// Treasures in declaration order, exhausted piles included.
    #[must_use]
    pub fn treasures(terrain: &Terrain) -> &[Treasure] {
        &terrain.treasures
    }

    /// Adventurers in declaration order.
    #[must_use]
    pub fn adventurers(terrain: &Terrain) -> &[Adventurer] {
        &terrain.adventurers
    }

    /// Looks up a single adventurer.
    #[must_use]
    pub fn adventurer(terrain: &Terrain, adventurer: AdventurerId) -> Option<&Adventurer> {
        terrain
            .adventurer_index(adventurer)
            .map(|index| &terrain.adventurers[index])
    }
}
