use grid_astar::{find_path, Cell, OccupancyGrid, SearchConfig};

// Replays the search on a small map by printing the path known to the search every time a cell
// is settled.

fn main() {
    let grid: OccupancyGrid = "\
.......
.#####.
.....#.
####.#.
.......
"
    .parse()
    .unwrap();
    let start = Cell::new(2, 0);
    let end = Cell::new(4, 0);
    let run = find_path(&grid, start, end, SearchConfig::orthogonal()).unwrap();
    for (i, frame) in run.explored_trace().frames().enumerate() {
        println!("Step {}: settled {}", i, frame[frame.len() - 1]);
        println!("{}", grid.render_path(&frame, start, end));
    }
    match run.cost() {
        Some(cost) => println!("Reached {} with cost {}", end, cost),
        None => println!("{} is not reachable from {}", end, start),
    }
}
