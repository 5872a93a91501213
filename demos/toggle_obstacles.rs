use grid_astar::{find_path, Cell, OccupancyGrid, SearchConfig};
use grid_util::grid::ValueGrid;

// Every change to the grid is followed by a fresh search, as an interactive editor would do
// when an obstacle is toggled.

fn main() {
    let mut grid = OccupancyGrid::new(6, 6, false);
    let start = Cell::new(0, 0);
    let end = Cell::new(5, 5);
    let toggles = [(1, 1), (2, 2), (3, 3), (4, 4), (0, 5), (5, 0), (2, 2)];
    for (row, col) in toggles {
        let cell = Cell::new(row, col);
        let blocked = grid.toggle(cell).unwrap();
        let run = find_path(&grid, start, end, SearchConfig::diagonal(true)).unwrap();
        println!(
            "{} {}: {}",
            if blocked { "Blocked" } else { "Cleared" },
            cell,
            run.cost()
                .map_or("no path".to_owned(), |c| format!("cost {:.3}", c))
        );
        if let Some(path) = run.path() {
            println!("{}", grid.render_path(path, start, end));
        }
    }
    println!("Obstacles: {:?}", grid.obstacles());
}
