use core::fmt;
use core::str::FromStr;
use grid_util::grid::{BoolGrid, ValueGrid};
use grid_util::point::Point;
use log::debug;
use petgraph::unionfind::UnionFind;

use crate::cell::Cell;
use crate::error::GridError;
use crate::moves::{Direction, MoveSet};

/// [OccupancyGrid] wraps a [BoolGrid] whose values determine whether a cell is blocked
/// ([true]) or walkable ([false]). Cells are addressed by [Cell] (row, column); the underlying
/// [BoolGrid] is indexed with `x = column` and `y = row`. Implements [ValueGrid] by building on
/// [BoolGrid].
#[derive(Clone, Debug)]
pub struct OccupancyGrid {
    pub grid: BoolGrid,
}

impl Default for OccupancyGrid {
    fn default() -> OccupancyGrid {
        OccupancyGrid {
            grid: BoolGrid::default(),
        }
    }
}

impl OccupancyGrid {
    /// Builds a grid from a matrix of `0` (walkable) and `1` (blocked) values. The matrix has to
    /// be non-empty and rectangular.
    pub fn from_rows<R: AsRef<[u8]>>(rows: &[R]) -> Result<OccupancyGrid, GridError> {
        let height = rows.len();
        let width = rows.first().map_or(0, |r| r.as_ref().len());
        if width == 0 {
            return Err(GridError::Empty);
        }
        let mut grid = OccupancyGrid::new(width, height, false);
        for (row, values) in rows.iter().enumerate() {
            let values = values.as_ref();
            if values.len() != width {
                return Err(GridError::Ragged {
                    row,
                    expected: width,
                    found: values.len(),
                });
            }
            for (col, &value) in values.iter().enumerate() {
                let cell = Cell::new(row as i32, col as i32);
                match value {
                    0 => {}
                    1 => grid.set_blocked(cell, true),
                    _ => return Err(GridError::InvalidCell { cell, value }),
                }
            }
        }
        Ok(grid)
    }

    pub fn is_empty(&self) -> bool {
        self.width() == 0 || self.height() == 0
    }
    pub fn contains(&self, cell: Cell) -> bool {
        cell.row >= 0
            && cell.col >= 0
            && (cell.row as usize) < self.height()
            && (cell.col as usize) < self.width()
    }
    /// Fails with [GridError::OutOfBounds] if the cell is not on the grid.
    pub fn check_bounds(&self, cell: Cell) -> Result<(), GridError> {
        if self.contains(cell) {
            Ok(())
        } else {
            Err(GridError::OutOfBounds {
                cell,
                width: self.width(),
                height: self.height(),
            })
        }
    }
    /// Cells outside of the grid count as blocked.
    pub fn is_blocked(&self, cell: Cell) -> bool {
        !self.contains(cell) || self.grid.get_point(Point::from(cell))
    }
    pub fn is_walkable(&self, cell: Cell) -> bool {
        !self.is_blocked(cell)
    }
    /// Sets a cell, ignoring cells outside of the grid.
    pub fn set_blocked(&mut self, cell: Cell, blocked: bool) {
        if self.contains(cell) {
            self.grid.set_point(Point::from(cell), blocked);
        }
    }
    /// Flips a cell between walkable and blocked and returns the new state.
    pub fn toggle(&mut self, cell: Cell) -> Result<bool, GridError> {
        self.check_bounds(cell)?;
        let blocked = !self.is_blocked(cell);
        self.set_blocked(cell, blocked);
        Ok(blocked)
    }
    pub fn cells(&self) -> impl Iterator<Item = Cell> {
        let width = self.width() as i32;
        (0..self.height() as i32).flat_map(move |row| (0..width).map(move |col| Cell::new(row, col)))
    }
    /// All blocked cells in row-major order.
    pub fn obstacles(&self) -> Vec<Cell> {
        self.cells().filter(|c| self.is_blocked(*c)).collect()
    }

    /// Renders the grid with a path drawn on top of it: `S` marks the start, `G` the target and
    /// `*` the remaining path cells.
    pub fn render_path(&self, path: &[Cell], start: Cell, target: Cell) -> String {
        let mut out = String::new();
        for row in 0..self.height() as i32 {
            for col in 0..self.width() as i32 {
                let cell = Cell::new(row, col);
                out.push(if cell == start {
                    'S'
                } else if cell == target {
                    'G'
                } else if path.contains(&cell) {
                    '*'
                } else if self.is_blocked(cell) {
                    '#'
                } else {
                    '.'
                });
            }
            out.push('\n');
        }
        out
    }

    /// Links up walkable neighbours into connected components for the given move set.
    pub fn components(&self, moves: MoveSet) -> Components {
        debug!(
            "Generating connected components for a {}x{} grid",
            self.width(),
            self.height()
        );
        let width = self.width();
        let mut union_find = UnionFind::new(width * self.height());
        let forward: &[Direction] = if moves.diagonal {
            &FORWARD_DIRECTIONS
        } else {
            &FORWARD_DIRECTIONS[..2]
        };
        for cell in self.cells().filter(|c| self.is_walkable(*c)) {
            for &dir in forward {
                let neighbour = cell + dir;
                if self.is_walkable(neighbour) {
                    union_find.union(cell_ix(width, cell), cell_ix(width, neighbour));
                }
            }
        }
        Components {
            width,
            height: self.height(),
            union_find,
        }
    }
}

// Every pair of neighbours is linked once by only looking forward.
static FORWARD_DIRECTIONS: [Direction; 4] = [
    Direction::RIGHT,
    Direction::DOWN,
    Direction::DOWN_RIGHT,
    Direction::DOWN_LEFT,
];

fn cell_ix(width: usize, cell: Cell) -> usize {
    cell.row as usize * width + cell.col as usize
}

/// Connected components of the walkable cells of an [OccupancyGrid], computed by
/// [OccupancyGrid::components]. The snapshot does not follow later changes to the grid.
#[derive(Clone, Debug)]
pub struct Components {
    width: usize,
    height: usize,
    union_find: UnionFind<usize>,
}

impl Components {
    fn in_bounds(&self, cell: Cell) -> bool {
        cell.row >= 0
            && cell.col >= 0
            && (cell.row as usize) < self.height
            && (cell.col as usize) < self.width
    }
    /// Checks if `a` and `b` are on the same component. Cells outside of the grid are never
    /// connected. Note that a blocked cell is only connected to itself.
    pub fn connected(&self, a: Cell, b: Cell) -> bool {
        self.in_bounds(a)
            && self.in_bounds(b)
            && self
                .union_find
                .equiv(cell_ix(self.width, a), cell_ix(self.width, b))
    }
}

impl FromStr for OccupancyGrid {
    type Err = GridError;

    /// Parses a map with one line per row where `.` is walkable and `#` is blocked.
    fn from_str(s: &str) -> Result<OccupancyGrid, GridError> {
        let lines: Vec<&str> = s
            .trim_matches(|c: char| c == '\n' || c == '\r')
            .lines()
            .map(str::trim_end)
            .collect();
        let rows = lines
            .iter()
            .enumerate()
            .map(|(row, line)| {
                line.chars()
                    .enumerate()
                    .map(|(col, symbol)| match symbol {
                        '.' => Ok(0),
                        '#' => Ok(1),
                        _ => Err(GridError::InvalidSymbol {
                            cell: Cell::new(row as i32, col as i32),
                            symbol,
                        }),
                    })
                    .collect::<Result<Vec<u8>, GridError>>()
            })
            .collect::<Result<Vec<_>, GridError>>()?;
        OccupancyGrid::from_rows(&rows)
    }
}

impl fmt::Display for OccupancyGrid {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        for row in 0..self.height() as i32 {
            let line = (0..self.width() as i32)
                .map(|col| {
                    if self.is_blocked(Cell::new(row, col)) {
                        '#'
                    } else {
                        '.'
                    }
                })
                .collect::<String>();
            writeln!(f, "{}", line)?;
        }
        Ok(())
    }
}

impl ValueGrid<bool> for OccupancyGrid {
    fn new(width: usize, height: usize, default_value: bool) -> Self {
        OccupancyGrid {
            grid: BoolGrid::new(width, height, default_value),
        }
    }
    fn get(&self, x: i32, y: i32) -> bool {
        self.grid.get(x, y)
    }
    fn set(&mut self, x: i32, y: i32, blocked: bool) {
        self.grid.set(x, y, blocked);
    }
    fn width(&self) -> usize {
        self.grid.width()
    }
    fn height(&self) -> usize {
        self.grid.height()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_rows_validates_shape() {
        let empty: [[u8; 0]; 0] = [];
        assert_eq!(OccupancyGrid::from_rows(&empty).unwrap_err(), GridError::Empty);
        assert_eq!(
            OccupancyGrid::from_rows(&[Vec::<u8>::new(), Vec::new()]).unwrap_err(),
            GridError::Empty
        );
        assert_eq!(
            OccupancyGrid::from_rows(&[vec![0u8, 0, 0], vec![0, 0]]).unwrap_err(),
            GridError::Ragged {
                row: 1,
                expected: 3,
                found: 2
            }
        );
        assert_eq!(
            OccupancyGrid::from_rows(&[[0u8, 2]]).unwrap_err(),
            GridError::InvalidCell {
                cell: Cell::new(0, 1),
                value: 2
            }
        );
    }

    #[test]
    fn rows_and_columns() {
        let grid = OccupancyGrid::from_rows(&[[0u8, 1, 0], [0, 0, 0]]).unwrap();
        assert_eq!(grid.width(), 3);
        assert_eq!(grid.height(), 2);
        assert!(grid.is_blocked(Cell::new(0, 1)));
        assert!(grid.is_walkable(Cell::new(1, 1)));
        assert!(grid.is_blocked(Cell::new(2, 0)));
        assert!(grid.is_blocked(Cell::new(0, -1)));
        assert_eq!(grid.obstacles(), vec![Cell::new(0, 1)]);
    }

    #[test]
    fn parse_and_display() {
        let map = "..#\n#..\n";
        let grid: OccupancyGrid = map.parse().unwrap();
        assert_eq!(grid.to_string(), map);
        assert_eq!(
            "..x".parse::<OccupancyGrid>().unwrap_err(),
            GridError::InvalidSymbol {
                cell: Cell::new(0, 2),
                symbol: 'x'
            }
        );
    }

    #[test]
    fn toggle_flips_cells() {
        let mut grid = OccupancyGrid::new(2, 2, false);
        assert_eq!(grid.toggle(Cell::new(1, 0)), Ok(true));
        assert!(grid.is_blocked(Cell::new(1, 0)));
        assert_eq!(grid.toggle(Cell::new(1, 0)), Ok(false));
        assert!(matches!(
            grid.toggle(Cell::new(2, 0)),
            Err(GridError::OutOfBounds { .. })
        ));
    }

    /// Tests whether cells are correctly mapped to different connected components
    #[test]
    fn component_generation() {
        // |.#.|
        // |.#.|
        let grid: OccupancyGrid = ".#.\n.#.".parse().unwrap();
        let components = grid.components(MoveSet::diagonal(true));
        assert!(components.connected(Cell::new(0, 0), Cell::new(1, 0)));
        assert!(!components.connected(Cell::new(0, 0), Cell::new(0, 2)));
        assert!(!components.connected(Cell::new(0, 0), Cell::new(0, 1)));
        assert!(!components.connected(Cell::new(0, 0), Cell::new(5, 5)));
    }

    // Tests whether allowing diagonals has the expected effect on diagonal reachability in a minimal setting.
    #[test]
    fn diagonal_switch_reachable() {
        // |.#|
        // |#.|
        let grid: OccupancyGrid = ".#\n#.".parse().unwrap();
        let start = Cell::new(0, 0);
        let end = Cell::new(1, 1);
        assert!(!grid.components(MoveSet::orthogonal()).connected(start, end));
        assert!(grid.components(MoveSet::diagonal(false)).connected(start, end));
    }

    #[test]
    fn render_marks_path() {
        let grid: OccupancyGrid = "...\n.#.\n...".parse().unwrap();
        let path = [
            Cell::new(0, 0),
            Cell::new(0, 1),
            Cell::new(0, 2),
            Cell::new(1, 2),
            Cell::new(2, 2),
        ];
        assert_eq!(
            grid.render_path(&path, path[0], path[4]),
            "S**\n.#*\n..G\n"
        );
    }
}
