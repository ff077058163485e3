use std::fmt;

use super::{Entity, Faction, Position};
use crate::config::GameConfig;

const SIZE: usize = GameConfig::MAP_SIZE;

/// What a single map cell shows.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Cell {
    #[default]
    Empty,
    Player,
    Enemy,
}

impl Cell {
    pub const fn glyph(self) -> char {
        match self {
            Cell::Empty => '.',
            Cell::Player => 'P',
            Cell::Enemy => 'E',
        }
    }
}

impl From<Faction> for Cell {
    fn from(faction: Faction) -> Self {
        match faction {
            Faction::Player => Cell::Player,
            Faction::Enemy => Cell::Enemy,
        }
    }
}

/// Projection of entity positions onto the board.
///
/// The grid holds no state of its own: it is rebuilt from the registry after
/// every turn and is never consulted for movement or combat.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Grid {
    cells: [[Cell; SIZE]; SIZE],
}

impl Grid {
    pub fn empty() -> Self {
        Self {
            cells: [[Cell::Empty; SIZE]; SIZE],
        }
    }

    /// Renders `entities` in order; a later entity on the same cell
    /// overwrites an earlier one. Entities outside the map are skipped.
    pub fn render<'a>(entities: impl IntoIterator<Item = &'a Entity>) -> Self {
        let mut grid = Self::empty();
        for entity in entities {
            if let Some(slot) = grid.slot_mut(entity.position) {
                *slot = entity.faction.into();
            }
        }
        grid
    }

    pub fn cell(&self, position: Position) -> Option<Cell> {
        let (row, col) = Self::index(position)?;
        Some(self.cells[row][col])
    }

    pub fn rows(&self) -> impl Iterator<Item = &[Cell; SIZE]> {
        self.cells.iter()
    }

    /// Number of cells showing `cell`.
    pub fn count(&self, cell: Cell) -> usize {
        self.cells.iter().flatten().filter(|&&c| c == cell).count()
    }

    fn slot_mut(&mut self, position: Position) -> Option<&mut Cell> {
        let (row, col) = Self::index(position)?;
        Some(&mut self.cells[row][col])
    }

    fn index(position: Position) -> Option<(usize, usize)> {
        position
            .in_bounds()
            .then(|| (position.x as usize, position.y as usize))
    }
}

impl Default for Grid {
    fn default() -> Self {
        Self::empty()
    }
}

/// One line per row, each glyph followed by a space.
impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in &self.cells {
            for cell in row {
                write!(f, "{} ", cell.glyph())?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn renders_player_and_enemies_on_an_empty_board() {
        let entities = [
            Entity::player("Hero", Position::new(0, 0)),
            Entity::enemy("Enemy #1", Position::new(3, 7)),
        ];

        let grid = Grid::render(&entities);

        assert_eq!(grid.cell(Position::new(0, 0)), Some(Cell::Player));
        assert_eq!(grid.cell(Position::new(3, 7)), Some(Cell::Enemy));
        assert_eq!(grid.count(Cell::Empty), SIZE * SIZE - 2);
    }

    #[test]
    fn later_entities_win_shared_cells() {
        let entities = [
            Entity::player("Hero", Position::new(2, 2)),
            Entity::enemy("Enemy #1", Position::new(2, 2)),
        ];
        assert_eq!(
            Grid::render(&entities).cell(Position::new(2, 2)),
            Some(Cell::Enemy)
        );

        let reversed = [entities[1], entities[0]];
        assert_eq!(
            Grid::render(&reversed).cell(Position::new(2, 2)),
            Some(Cell::Player)
        );
    }

    #[test]
    fn out_of_range_entities_are_skipped() {
        let entities = [Entity::enemy("Lost", Position::new(-1, SIZE as i32))];
        assert_eq!(Grid::render(&entities), Grid::empty());
    }

    #[test]
    fn displays_rows_top_to_bottom() {
        let entities = [Entity::player("Hero", Position::new(1, 0))];
        let text = Grid::render(&entities).to_string();
        let lines: Vec<_> = text.lines().collect();

        assert_eq!(lines.len(), SIZE);
        assert!(lines[0].starts_with(". . "));
        assert!(lines[1].starts_with("P . "));
        assert_eq!(lines[1].len(), SIZE * 2);
    }
}
