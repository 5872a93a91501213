use grid_astar::{find_path, Cell, OccupancyGrid, SearchConfig};
use grid_util::grid::ValueGrid;
use grid_util::Rect;

// Diagonal moves cost √2 here. Passing false to SearchConfig::diagonal charges unit cost
// for them instead.

fn main() {
    const N: i32 = 12;
    let mut grid = OccupancyGrid::new(N as usize, N as usize, false);
    grid.set_rect(Rect::new(3, 0, 1, 8), true);
    grid.set_rect(Rect::new(7, 4, 1, 8), true);
    let start = Cell::new(0, 0);
    let end = Cell::new(N - 1, N - 1);
    for config in [SearchConfig::diagonal(true), SearchConfig::diagonal(false)] {
        let run = find_path(&grid, start, end, config).unwrap();
        let path = run.path().unwrap();
        println!(
            "{:?}: {} steps, cost {:.3}, {} cells settled in {:.2?}",
            config,
            path.len() - 1,
            run.cost().unwrap(),
            run.expanded(),
            run.elapsed()
        );
        println!("{}", grid.render_path(path, start, end));
    }
}
