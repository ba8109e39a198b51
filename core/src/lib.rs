#![deny(
    unsafe_code,
    missing_docs,
    dead_code,
    unused_results,
    non_snake_case,
    unreachable_pub
)]

//! Core contracts shared across the Treasure Hunt engine.
//!
//! This crate defines the message surface that connects adapters, the
//! authoritative terrain, and pure systems. The scenario parser turns text
//! lines into [`Record`] values, systems submit [`Command`] values describing
//! desired mutations, the world executes those commands via its `apply` entry
//! point, and then broadcasts [`Event`] values describing what actually
//! happened.

use std::fmt;

/// Commands that express all permissible terrain mutations.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Command {
    /// Places an impassable mountain on the provided cell.
    PlaceMountain {
        /// Cell covered by the mountain.
        cell: CellCoord,
    },
    /// Places a treasure pile holding `amount` units on the provided cell.
    PlaceTreasure {
        /// Cell holding the treasure.
        cell: CellCoord,
        /// Number of units adventurers may collect from the pile.
        amount: u32,
    },
    /// Introduces a new adventurer into the terrain.
    SpawnAdventurer {
        /// Display name, used verbatim by rendering and export.
        name: String,
        /// Starting cell of the adventurer.
        cell: CellCoord,
        /// Initial facing direction.
        direction: Direction,
        /// Move script replayed during play.
        script: Vec<MoveCommand>,
    },
    /// Requests a horizontal spacing for the rendered grid.
    ///
    /// The world never applies a spacing narrower than the longest
    /// adventurer token requires.
    ConfigureSpacing {
        /// Requested number of blank characters following each cell.
        spacing: usize,
    },
    /// Rotates an adventurer in place.
    Turn {
        /// Adventurer performing the turn.
        adventurer: AdventurerId,
        /// Rotation to apply to the current direction.
        rotation: Rotation,
    },
    /// Requests that an adventurer advance one cell in its facing direction.
    Advance {
        /// Adventurer attempting to move.
        adventurer: AdventurerId,
    },
}

/// Events broadcast by the world after processing commands.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Event {
    /// Confirms that a mountain was placed.
    MountainPlaced {
        /// Cell covered by the mountain.
        cell: CellCoord,
    },
    /// Confirms that a treasure pile was placed.
    TreasurePlaced {
        /// Cell holding the treasure.
        cell: CellCoord,
        /// Units held by the pile.
        amount: u32,
    },
    /// Confirms that an adventurer joined the terrain.
    AdventurerSpawned {
        /// Identifier allocated to the adventurer.
        adventurer: AdventurerId,
        /// Starting cell of the adventurer.
        cell: CellCoord,
    },
    /// Reports that a placement command was rejected.
    PlacementRejected {
        /// Cell named by the rejected command.
        cell: CellCoord,
        /// Specific reason the placement failed.
        reason: PlacementError,
    },
    /// Announces the spacing the renderer should use.
    SpacingConfigured {
        /// Effective spacing after accounting for adventurer names.
        spacing: usize,
    },
    /// Confirms that an adventurer changed its facing direction.
    AdventurerTurned {
        /// Adventurer that turned.
        adventurer: AdventurerId,
        /// Direction faced before the turn.
        from: Direction,
        /// Direction faced after the turn.
        to: Direction,
    },
    /// Confirms that an adventurer moved between two cells.
    AdventurerAdvanced {
        /// Adventurer that advanced.
        adventurer: AdventurerId,
        /// Cell occupied before moving.
        from: CellCoord,
        /// Cell occupied after moving.
        to: CellCoord,
    },
    /// Reports that an advance was refused and the adventurer stayed put.
    AdventurerBlocked {
        /// Adventurer whose advance was refused.
        adventurer: AdventurerId,
        /// Cell the adventurer still occupies.
        at: CellCoord,
        /// What stopped the adventurer.
        obstacle: Obstacle,
    },
    /// Confirms that one unit of treasure changed hands.
    TreasureCollected {
        /// Adventurer that picked the unit up.
        adventurer: AdventurerId,
        /// Cell holding the treasure pile.
        cell: CellCoord,
        /// Units left in the pile after the pickup.
        remaining: u32,
    },
}

/// Reasons an advance may be refused by the world.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Obstacle {
    /// The adventurer faces the edge of the grid.
    Boundary,
    /// A mountain covers the destination cell.
    Mountain,
    /// Another adventurer stands on the destination cell.
    Adventurer(AdventurerId),
}

/// Reasons a placement command may be rejected by the world.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, thiserror::Error)]
pub enum PlacementError {
    /// The requested cell lies outside the grid.
    #[error("cell lies outside the terrain")]
    OutOfBounds,
    /// The requested cell is already taken by a mountain or an adventurer.
    #[error("cell is already occupied")]
    Occupied,
}

/// Unique identifier assigned to an adventurer, in declaration order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct AdventurerId(usize);

impl AdventurerId {
    /// Creates a new adventurer identifier with the provided declaration index.
    #[must_use]
    pub const fn new(value: usize) -> Self {
        Self(value)
    }

    /// Retrieves the declaration index behind the identifier.
    #[must_use]
    pub const fn get(&self) -> usize {
        self.0
    }
}

/// Location of a single grid cell expressed as column and row coordinates.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct CellCoord {
    column: u32,
    row: u32,
}

impl CellCoord {
    /// Creates a new grid cell coordinate.
    #[must_use]
    pub const fn new(column: u32, row: u32) -> Self {
        Self { column, row }
    }

    /// Zero-based column index of the cell (the `x` field of scenario files).
    #[must_use]
    pub const fn column(&self) -> u32 {
        self.column
    }

    /// Zero-based row index of the cell (the `y` field of scenario files).
    #[must_use]
    pub const fn row(&self) -> u32 {
        self.row
    }

    /// Reports whether the cell lies inside a grid of the given dimensions.
    #[must_use]
    pub const fn is_within(&self, columns: u32, rows: u32) -> bool {
        self.column < columns && self.row < rows
    }

    /// Returns the neighbouring cell in `direction`, clamped to the grid.
    ///
    /// Each axis is clamped independently to `0..=dimension - 1`, so stepping
    /// off an edge yields the original cell.
    #[must_use]
    pub fn step_clamped(self, direction: Direction, columns: u32, rows: u32) -> Self {
        let (column_delta, row_delta) = direction.unit_vector();
        Self {
            column: clamp_axis(self.column, column_delta, columns),
            row: clamp_axis(self.row, row_delta, rows),
        }
    }
}

fn clamp_axis(value: u32, delta: i8, bound: u32) -> u32 {
    let last = bound.saturating_sub(1);
    match delta {
        d if d < 0 => value.saturating_sub(1).min(last),
        d if d > 0 => value.saturating_add(1).min(last),
        _ => value.min(last),
    }
}

/// Cardinal facing directions available to adventurers.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Direction {
    /// Facing decreasing row indices.
    North,
    /// Facing increasing column indices.
    East,
    /// Facing increasing row indices.
    South,
    /// Facing decreasing column indices.
    West,
}

const TURN_LEFT: [Direction; 4] = [
    Direction::West,
    Direction::North,
    Direction::East,
    Direction::South,
];

const TURN_RIGHT: [Direction; 4] = [
    Direction::East,
    Direction::South,
    Direction::West,
    Direction::North,
];

impl Direction {
    /// Parses the single-letter scenario encoding (`N`, `E`, `S`, `W`).
    #[must_use]
    pub fn from_letter(value: &str) -> Option<Self> {
        match value {
            "N" => Some(Self::North),
            "E" => Some(Self::East),
            "S" => Some(Self::South),
            "W" => Some(Self::West),
            _ => None,
        }
    }

    /// Single-letter scenario encoding of the direction.
    #[must_use]
    pub const fn letter(self) -> char {
        match self {
            Self::North => 'N',
            Self::East => 'E',
            Self::South => 'S',
            Self::West => 'W',
        }
    }

    /// Direction faced after applying `rotation`.
    #[must_use]
    pub const fn rotated(self, rotation: Rotation) -> Self {
        let table = match rotation {
            Rotation::Left => &TURN_LEFT,
            Rotation::Right => &TURN_RIGHT,
        };
        table[self.index()]
    }

    /// Column and row deltas of a single step in this direction.
    #[must_use]
    pub const fn unit_vector(self) -> (i8, i8) {
        match self {
            Self::North => (0, -1),
            Self::East => (1, 0),
            Self::South => (0, 1),
            Self::West => (-1, 0),
        }
    }

    const fn index(self) -> usize {
        match self {
            Self::North => 0,
            Self::East => 1,
            Self::South => 2,
            Self::West => 3,
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.letter())
    }
}

/// Quarter turn applied to a facing direction.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Rotation {
    /// Counter-clockwise quarter turn (`G`).
    Left,
    /// Clockwise quarter turn (`D`).
    Right,
}

/// Single step of an adventurer's move script.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum MoveCommand {
    /// Move one cell forward (`A`).
    Advance,
    /// Rotate in place (`G` or `D`).
    Turn(Rotation),
}

impl MoveCommand {
    /// Decodes a script character.
    #[must_use]
    pub const fn from_char(value: char) -> Option<Self> {
        match value {
            'A' => Some(Self::Advance),
            'G' => Some(Self::Turn(Rotation::Left)),
            'D' => Some(Self::Turn(Rotation::Right)),
            _ => None,
        }
    }

    /// Script character encoding the command.
    #[must_use]
    pub const fn as_char(self) -> char {
        match self {
            Self::Advance => 'A',
            Self::Turn(Rotation::Left) => 'G',
            Self::Turn(Rotation::Right) => 'D',
        }
    }
}

/// One classified line of a scenario file.
///
/// The tag set is closed, so every consumer matches exhaustively.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Record {
    /// `C` line declaring the grid size.
    Dimensions {
        /// Number of columns.
        width: u32,
        /// Number of rows.
        height: u32,
    },
    /// `M` line declaring a mountain.
    Mountain {
        /// Cell covered by the mountain.
        cell: CellCoord,
    },
    /// `T` line declaring a treasure pile.
    Treasure {
        /// Cell holding the treasure.
        cell: CellCoord,
        /// Units held by the pile.
        amount: u32,
    },
    /// `A` line declaring an adventurer.
    Adventurer(AdventurerRecord),
    /// `#` line or blank line carrying no data.
    Comment,
}

/// Parsed contents of an `A` line.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AdventurerRecord {
    /// Display name, trimmed.
    pub name: String,
    /// Starting cell.
    pub cell: CellCoord,
    /// Initial facing direction.
    pub direction: Direction,
    /// Decoded move script.
    pub script: Vec<MoveCommand>,
}

#[cfg(test)]
mod tests {
    use super::{CellCoord, Direction, MoveCommand, Rotation};

    #[test]
    fn left_turns_cycle_counter_clockwise() {
        let mut direction = Direction::North;
        let mut visited = Vec::new();
        for _ in 0..4 {
            direction = direction.rotated(Rotation::Left);
            visited.push(direction);
        }
        assert_eq!(
            visited,
            vec![
                Direction::West,
                Direction::South,
                Direction::East,
                Direction::North
            ]
        );
    }

    #[test]
    fn right_turns_cycle_clockwise() {
        let mut direction = Direction::North;
        let mut visited = Vec::new();
        for _ in 0..4 {
            direction = direction.rotated(Rotation::Right);
            visited.push(direction);
        }
        assert_eq!(
            visited,
            vec![
                Direction::East,
                Direction::South,
                Direction::West,
                Direction::North
            ]
        );
    }

    #[test]
    fn opposite_rotations_cancel_out() {
        for direction in [
            Direction::North,
            Direction::East,
            Direction::South,
            Direction::West,
        ] {
            assert_eq!(
                direction.rotated(Rotation::Left).rotated(Rotation::Right),
                direction
            );
        }
    }

    #[test]
    fn step_moves_one_cell_inside_the_grid() {
        let cell = CellCoord::new(2, 2);
        assert_eq!(cell.step_clamped(Direction::North, 5, 5), CellCoord::new(2, 1));
        assert_eq!(cell.step_clamped(Direction::East, 5, 5), CellCoord::new(3, 2));
        assert_eq!(cell.step_clamped(Direction::South, 5, 5), CellCoord::new(2, 3));
        assert_eq!(cell.step_clamped(Direction::West, 5, 5), CellCoord::new(1, 2));
    }

    #[test]
    fn step_clamps_at_every_edge() {
        assert_eq!(
            CellCoord::new(0, 0).step_clamped(Direction::North, 3, 3),
            CellCoord::new(0, 0)
        );
        assert_eq!(
            CellCoord::new(0, 1).step_clamped(Direction::West, 3, 3),
            CellCoord::new(0, 1)
        );
        assert_eq!(
            CellCoord::new(2, 1).step_clamped(Direction::East, 3, 3),
            CellCoord::new(2, 1)
        );
        assert_eq!(
            CellCoord::new(1, 2).step_clamped(Direction::South, 3, 3),
            CellCoord::new(1, 2)
        );
    }

    #[test]
    fn direction_letters_round_trip() {
        for letter in ["N", "E", "S", "W"] {
            let direction = Direction::from_letter(letter).expect("valid letter");
            assert_eq!(direction.to_string(), letter);
        }
        assert_eq!(Direction::from_letter("X"), None);
        assert_eq!(Direction::from_letter("NE"), None);
    }

    #[test]
    fn script_characters_decode_to_commands() {
        assert_eq!(MoveCommand::from_char('A'), Some(MoveCommand::Advance));
        assert_eq!(
            MoveCommand::from_char('G'),
            Some(MoveCommand::Turn(Rotation::Left))
        );
        assert_eq!(
            MoveCommand::from_char('D'),
            Some(MoveCommand::Turn(Rotation::Right))
        );
        assert_eq!(MoveCommand::from_char('X'), None);
        assert_eq!(MoveCommand::Turn(Rotation::Right).as_char(), 'D');
    }
}
