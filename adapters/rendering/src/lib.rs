#![deny(
    unsafe_code,
    missing_docs,
    dead_code,
    unused_results,
    non_snake_case,
    unreachable_pub
)]

//! Shared rendering contracts for Treasure Hunt adapters.
//!
//! A [`Scene`] is captured from the terrain and flattened into fixed-width
//! text rows. Backends implement [`RenderingBackend`] to present scenes.

use std::io::Write;

use anyhow::Result as AnyResult;
use treasure_hunt_core::CellCoord;
use treasure_hunt_world::{query, Terrain};

/// Glyph drawn for an empty cell.
const EMPTY_CELL: char = '.';

/// Label drawn over a single cell.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SceneToken {
    /// Cell the token is anchored to.
    pub cell: CellCoord,
    /// Text written starting at the cell's first character.
    pub label: String,
}

impl SceneToken {
    /// Creates a token anchored to the provided cell.
    #[must_use]
    pub fn new(cell: CellCoord, label: impl Into<String>) -> Self {
        Self {
            cell,
            label: label.into(),
        }
    }
}

/// Snapshot of everything drawn on the map.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Scene {
    /// Number of columns in the grid.
    pub columns: u32,
    /// Number of rows in the grid.
    pub rows: u32,
    /// Blank characters following each cell glyph.
    pub spacing: usize,
    /// Tokens in drawing order; later tokens overwrite earlier ones.
    pub tokens: Vec<SceneToken>,
}

impl Scene {
    /// Captures the terrain: treasures holding units, then mountains, then adventurers.
    #[must_use]
    pub fn from_terrain(terrain: &Terrain) -> Self {
        let (columns, rows) = query::dimensions(terrain);
        let treasures = query::treasures(terrain)
            .iter()
            .filter(|treasure| !treasure.is_exhausted())
            .map(|treasure| SceneToken::new(treasure.cell(), format!("T({})", treasure.amount())));
        let mountains = query::mountains(terrain)
            .iter()
            .map(|mountain| SceneToken::new(mountain.cell(), "M"));
        let adventurers = query::adventurers(terrain)
            .iter()
            .map(|adventurer| {
                SceneToken::new(adventurer.cell(), format!("A({})", adventurer.name()))
            });

        Self {
            columns,
            rows,
            spacing: query::spacing(terrain),
            tokens: treasures.chain(mountains).chain(adventurers).collect(),
        }
    }

    /// Width in characters reserved for every cell.
    #[must_use]
    pub fn cell_width(&self) -> usize {
        self.spacing.saturating_add(1)
    }

    /// Flattens the scene into display rows.
    ///
    /// Each row starts as `.` glyphs separated by `spacing` blanks with the
    /// trailing blanks trimmed. A token overwrites characters from its cell's
    /// first column onwards and extends the row when it runs past the end.
    #[must_use]
    pub fn lines(&self) -> Vec<String> {
        let mut rows: Vec<Vec<char>> = (0..self.rows).map(|_| self.blank_row()).collect();

        for token in &self.tokens {
            let Some(row) = usize::try_from(token.cell.row())
                .ok()
                .and_then(|row| rows.get_mut(row))
            else {
                continue;
            };
            let Ok(column) = usize::try_from(token.cell.column()) else {
                continue;
            };
            let start = column.saturating_mul(self.cell_width());
            for (offset, glyph) in token.label.chars().enumerate() {
                let position = start.saturating_add(offset);
                if position < row.len() {
                    row[position] = glyph;
                } else {
                    row.resize(position, ' ');
                    row.push(glyph);
                }
            }
        }

        rows.into_iter().map(|row| row.into_iter().collect()).collect()
    }

    fn blank_row(&self) -> Vec<char> {
        let columns = usize::try_from(self.columns).unwrap_or(0);
        let mut row = Vec::new();
        for column in 0..columns {
            if column > 0 {
                row.extend(std::iter::repeat(' ').take(self.spacing));
            }
            row.push(EMPTY_CELL);
        }
        row
    }
}

/// Renders the terrain into display rows.
#[must_use]
pub fn render(terrain: &Terrain) -> Vec<String> {
    Scene::from_terrain(terrain).lines()
}

/// Rendering backend capable of presenting Treasure Hunt scenes.
pub trait RenderingBackend {
    /// Presents a single scene.
    fn present(&mut self, scene: &Scene) -> AnyResult<()>;
}

/// Backend writing scenes as plain text, each followed by a blank line.
#[derive(Debug)]
pub struct TextBackend<W> {
    writer: W,
}

impl<W: Write> TextBackend<W> {
    /// Creates a backend writing into the provided sink.
    #[must_use]
    pub fn new(writer: W) -> Self {
        Self { writer }
    }

    /// Returns the underlying sink.
    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl<W: Write> RenderingBackend for TextBackend<W> {
    fn present(&mut self, scene: &Scene) -> AnyResult<()> {
        for line in scene.lines() {
            writeln!(self.writer, "{line}")?;
        }
        writeln!(self.writer)?;
        self.writer.flush()?;
        Ok(())
    }
}
