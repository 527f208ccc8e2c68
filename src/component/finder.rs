use std::collections::VecDeque;

use crate::grid::{Grid, OccupancyGrid};

/// 8-connected neighbor offsets.
const NEIGHBORS: [(i64, i64); 8] = [
    (-1, -1),
    (0, -1),
    (1, -1),
    (-1, 0),
    (1, 0),
    (-1, 1),
    (0, 1),
    (1, 1),
];

/// A coarse-grid cell coordinate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Cell {
    pub x: u32,
    pub y: u32,
}

/// Inclusive bounding box of a component in coarse-grid cells.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CellBounds {
    pub min_x: u32,
    pub min_y: u32,
    pub max_x: u32,
    pub max_y: u32,
}

impl CellBounds {
    fn of(cells: &[Cell]) -> Self {
        let mut bounds = match cells.first() {
            Some(c) => Self {
                min_x: c.x,
                min_y: c.y,
                max_x: c.x,
                max_y: c.y,
            },
            None => Self {
                min_x: 0,
                min_y: 0,
                max_x: 0,
                max_y: 0,
            },
        };
        for c in cells {
            bounds.min_x = bounds.min_x.min(c.x);
            bounds.min_y = bounds.min_y.min(c.y);
            bounds.max_x = bounds.max_x.max(c.x);
            bounds.max_y = bounds.max_y.max(c.y);
        }
        bounds
    }

    pub fn width(&self) -> u32 {
        self.max_x - self.min_x + 1
    }

    pub fn height(&self) -> u32 {
        self.max_y - self.min_y + 1
    }

    /// Reading-order key: top row first, then left, ties broken by extent.
    pub fn reading_key(&self) -> (u32, u32, u32, u32) {
        (self.min_y, self.min_x, self.max_y, self.max_x)
    }
}

/// A maximal set of 8-connected occupied cells.
#[derive(Debug, Clone)]
pub struct Component {
    label: u32,
    cells: Vec<Cell>,
    bounds: CellBounds,
}

impl Component {
    /// Discovery index, also the value stored in [`ComponentMap::labels`].
    pub fn label(&self) -> u32 {
        self.label
    }

    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    pub fn bounds(&self) -> CellBounds {
        self.bounds
    }
}

/// All components of a coarse grid in discovery order, plus a per-cell label
/// grid used for membership lookups.
#[derive(Debug, Clone)]
pub struct ComponentMap {
    pub components: Vec<Component>,
    pub labels: Grid<Option<u32>>,
}

impl ComponentMap {
    /// True if coarse cell `(x, y)` belongs to the component with `label`.
    pub fn is_member(&self, x: u32, y: u32, label: u32) -> bool {
        self.labels.get(x, y).flatten() == Some(label)
    }
}

/// Find the 8-connected components of the occupied cells.
///
/// Cells are scanned row-major; each unlabelled occupied cell seeds a
/// breadth-first flood. Components come out in the row-major order of their
/// seed cells.
pub fn find_components(grid: &OccupancyGrid) -> ComponentMap {
    let (sw, sh) = (grid.width(), grid.height());
    let mut labels: Grid<Option<u32>> = Grid::new(sw, sh);
    let mut components = Vec::new();
    let mut queue = VecDeque::new();

    for y in 0..sh {
        for x in 0..sw {
            if !grid.is_set(x, y) || labels.get(x, y).flatten().is_some() {
                continue;
            }

            let label = components.len() as u32;
            let mut cells = Vec::new();
            labels.set(x, y, Some(label));
            queue.push_back(Cell { x, y });

            while let Some(cell) = queue.pop_front() {
                cells.push(cell);
                for (dx, dy) in NEIGHBORS {
                    let nx = i64::from(cell.x) + dx;
                    let ny = i64::from(cell.y) + dy;
                    if nx < 0 || ny < 0 || nx >= i64::from(sw) || ny >= i64::from(sh) {
                        continue;
                    }
                    let (nx, ny) = (nx as u32, ny as u32);
                    if grid.is_set(nx, ny) && labels.get(nx, ny).flatten().is_none() {
                        // Mark on enqueue so a cell is never queued twice
                        labels.set(nx, ny, Some(label));
                        queue.push_back(Cell { x: nx, y: ny });
                    }
                }
            }

            let bounds = CellBounds::of(&cells);
            components.push(Component {
                label,
                cells,
                bounds,
            });
        }
    }

    ComponentMap { components, labels }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    fn grid_from(rows: &[&str]) -> OccupancyGrid {
        let height = rows.len() as u32;
        let width = rows.first().map_or(0, |r| r.len()) as u32;
        let mut grid = Grid::new(width, height);
        for (y, row) in rows.iter().enumerate() {
            for (x, ch) in row.chars().enumerate() {
                grid.set(x as u32, y as u32, ch == '#');
            }
        }
        grid
    }

    #[test]
    fn test_diagonal_cells_merge() {
        let grid = grid_from(&["#.", ".#"]);
        let map = find_components(&grid);
        assert_eq!(map.components.len(), 1);
        assert_eq!(map.components[0].len(), 2);
    }

    #[test]
    fn test_isolated_cells_are_separate() {
        let grid = grid_from(&["#..#", "...#", "...."]);
        let map = find_components(&grid);
        assert_eq!(map.components.len(), 2);
        assert_eq!(map.components[0].cells(), &[Cell { x: 0, y: 0 }]);
        assert_eq!(map.components[1].len(), 2);
    }

    #[test]
    fn test_discovery_order_follows_seed_scan() {
        // Seeds: (3,0) first, then (0,1), then (2,3)
        let grid = grid_from(&["...#", "#...", "#...", "..##"]);
        let map = find_components(&grid);
        let seeds: Vec<Cell> = map.components.iter().map(|c| c.cells()[0]).collect();
        assert_eq!(
            seeds,
            vec![Cell { x: 3, y: 0 }, Cell { x: 0, y: 1 }, Cell { x: 2, y: 3 }]
        );
        for (i, c) in map.components.iter().enumerate() {
            assert_eq!(c.label(), i as u32);
        }
    }

    #[test]
    fn test_partition_and_closure() {
        let grid = grid_from(&[
            "##..#..#",
            "#...#...",
            "..#...##",
            ".#.#..#.",
            "........",
            "#######.",
        ]);
        let map = find_components(&grid);

        // Every occupied cell appears in exactly one component
        let mut seen = HashSet::new();
        for comp in &map.components {
            assert!(!comp.is_empty());
            for &cell in comp.cells() {
                assert!(grid.is_set(cell.x, cell.y));
                assert!(seen.insert(cell), "cell {:?} in two components", cell);
                assert!(map.is_member(cell.x, cell.y, comp.label()));
            }
        }
        assert_eq!(seen.len(), grid.count());

        // Chebyshev-adjacent occupied cells share a label
        for y in 0..grid.height() {
            for x in 0..grid.width() {
                if !grid.is_set(x, y) {
                    assert_eq!(map.labels.get(x, y), Some(None));
                    continue;
                }
                let label = map.labels.get(x, y).flatten();
                for (dx, dy) in NEIGHBORS {
                    let nx = i64::from(x) + dx;
                    let ny = i64::from(y) + dy;
                    if nx < 0 || ny < 0 {
                        continue;
                    }
                    if grid.is_set(nx as u32, ny as u32) {
                        assert_eq!(map.labels.get(nx as u32, ny as u32).flatten(), label);
                    }
                }
            }
        }
    }

    #[test]
    fn test_membership_independent_of_scan_order() {
        let rows = ["#.#.", ".#..", "...#", "#..#"];
        let grid = grid_from(&rows);
        let flipped_rows: Vec<String> = rows.iter().rev().map(|r| r.to_string()).collect();
        let flipped = grid_from(&flipped_rows.iter().map(String::as_str).collect::<Vec<_>>());

        let to_sets = |map: &ComponentMap, flip: bool| -> HashSet<Vec<Cell>> {
            map.components
                .iter()
                .map(|c| {
                    let mut cells: Vec<Cell> = c
                        .cells()
                        .iter()
                        .map(|&cell| {
                            if flip {
                                Cell {
                                    x: cell.x,
                                    y: grid.height() - 1 - cell.y,
                                }
                            } else {
                                cell
                            }
                        })
                        .collect();
                    cells.sort();
                    cells
                })
                .collect()
        };

        assert_eq!(
            to_sets(&find_components(&grid), false),
            to_sets(&find_components(&flipped), true)
        );
    }

    #[test]
    fn test_bounds() {
        let grid = grid_from(&["....", ".##.", "..##"]);
        let map = find_components(&grid);
        let b = map.components[0].bounds();
        assert_eq!((b.min_x, b.min_y, b.max_x, b.max_y), (1, 1, 3, 2));
        assert_eq!((b.width(), b.height()), (3, 2));
        assert_eq!(b.reading_key(), (1, 1, 2, 3));
    }

    #[test]
    fn test_empty_grid() {
        let map = find_components(&Grid::new(0, 0));
        assert!(map.components.is_empty());
    }
}
