use grid_astar::{find_path, Cell, OccupancyGrid, SearchConfig};

// In this example a path is found on a 3x3 grid with shape
//  ___
// |S  |
// |## |
// |E  |
//  ___
// where
// - # marks an obstacle
// - S marks the start
// - E marks the end
//
// Nodes have a 4-neighborhood

fn main() {
    let grid = OccupancyGrid::from_rows(&[[0u8, 0, 0], [1, 1, 0], [0, 0, 0]]).unwrap();
    println!("{}", grid);
    let start = Cell::new(0, 0);
    let end = Cell::new(2, 0);
    let run = find_path(&grid, start, end, SearchConfig::orthogonal()).unwrap();
    match run.path() {
        Some(path) => {
            println!("Path of cost {}:", run.cost().unwrap());
            for c in path {
                println!("{}", c);
            }
            println!("\n{}", grid.render_path(path, start, end));
        }
        None => println!("No path"),
    }
    println!("Elapsed time: {:.2?}", run.elapsed());
}
