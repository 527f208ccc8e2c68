use std::cmp::Reverse;

use super::Component;
use crate::cli::SortMode;

/// Drop components with fewer than `min_cells` cells, keeping discovery order.
pub fn filter_components(components: Vec<Component>, min_cells: usize) -> Vec<Component> {
    components
        .into_iter()
        .filter(|c| c.len() >= min_cells)
        .collect()
}

/// Reorder components. The resulting position of each component is its
/// sprite id.
pub fn sort_components(mut components: Vec<Component>, mode: SortMode) -> Vec<Component> {
    match mode {
        SortMode::None => {}
        // Both sorts are stable, so equal keys keep discovery order
        SortMode::TopLeft => components.sort_by_key(|c| c.bounds().reading_key()),
        SortMode::Size => components.sort_by_key(|c| Reverse(c.len())),
    }
    components
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::component::find_components;
    use crate::grid::{Grid, OccupancyGrid};

    // Discovery order: top-right bar (3), left column (3), lone cell (1), bottom pair (2)
    fn sample_grid() -> OccupancyGrid {
        let rows = [
            ".....###", //
            "#.#.....", //
            "#.......", //
            "#...##..", //
        ];
        let mut grid = Grid::new(8, 4);
        for (y, row) in rows.iter().enumerate() {
            for (x, ch) in row.chars().enumerate() {
                grid.set(x as u32, y as u32, ch == '#');
            }
        }
        grid
    }

    fn sizes(components: &[Component]) -> Vec<usize> {
        components.iter().map(Component::len).collect()
    }

    fn labels(components: &[Component]) -> Vec<u32> {
        components.iter().map(Component::label).collect()
    }

    #[test]
    fn test_filter_law() {
        let comps = find_components(&sample_grid()).components;
        assert_eq!(sizes(&comps), vec![3, 3, 1, 2]);

        let kept = filter_components(comps.clone(), 2);
        assert_eq!(labels(&kept), vec![0, 1, 3]);
        assert!(kept.iter().all(|c| c.len() >= 2));

        assert_eq!(filter_components(comps.clone(), 1).len(), 4);
        assert!(filter_components(comps, 4).is_empty());
    }

    #[test]
    fn test_sort_none_keeps_discovery_order() {
        let comps = find_components(&sample_grid()).components;
        let sorted = sort_components(comps, SortMode::None);
        assert_eq!(labels(&sorted), vec![0, 1, 2, 3]);
    }

    #[test]
    fn test_sort_topleft_reading_order() {
        let comps = find_components(&sample_grid()).components;
        let sorted = sort_components(comps, SortMode::TopLeft);
        assert_eq!(labels(&sorted), vec![0, 1, 2, 3]);

        for pair in sorted.windows(2) {
            assert!(pair[0].bounds().reading_key() <= pair[1].bounds().reading_key());
        }
    }

    #[test]
    fn test_sort_topleft_can_differ_from_discovery() {
        // The single cell at (2,0) is found first, but the hook-shaped
        // component seeded at (4,0) reaches further left.
        let rows = ["..#.#", "....#", "....#", "####."];
        let mut grid = Grid::new(5, 4);
        for (y, row) in rows.iter().enumerate() {
            for (x, ch) in row.chars().enumerate() {
                grid.set(x as u32, y as u32, ch == '#');
            }
        }
        let comps = find_components(&grid).components;
        assert_eq!(sizes(&comps), vec![1, 7]);

        let sorted = sort_components(comps, SortMode::TopLeft);
        assert_eq!(labels(&sorted), vec![1, 0]);
    }

    #[test]
    fn test_sort_size_descending_stable() {
        let comps = find_components(&sample_grid()).components;
        let sorted = sort_components(comps, SortMode::Size);
        assert_eq!(sizes(&sorted), vec![3, 3, 2, 1]);
        // Equal sizes keep discovery order
        assert_eq!(labels(&sorted), vec![0, 1, 3, 2]);
    }
}
