/// A dense row-major 2D grid addressed by `y * width + x`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid<T> {
    width: u32,
    height: u32,
    cells: Vec<T>,
}

/// Full-resolution foreground mask, one cell per pixel.
pub type OccupancyMask = Grid<bool>;

/// Coarse occupancy grid, one cell per `tile x tile` block.
pub type OccupancyGrid = Grid<bool>;

impl<T: Copy + Default> Grid<T> {
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            cells: vec![T::default(); width as usize * height as usize],
        }
    }
}

impl<T: Copy> Grid<T> {
    /// Wrap an existing row-major buffer. Returns `None` if the length does
    /// not match `width * height`.
    pub fn from_vec(width: u32, height: u32, cells: Vec<T>) -> Option<Self> {
        if cells.len() != width as usize * height as usize {
            return None;
        }
        Some(Self {
            width,
            height,
            cells,
        })
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    fn index(&self, x: u32, y: u32) -> Option<usize> {
        if x < self.width && y < self.height {
            Some(y as usize * self.width as usize + x as usize)
        } else {
            None
        }
    }

    /// Bounds-checked read.
    pub fn get(&self, x: u32, y: u32) -> Option<T> {
        self.index(x, y).map(|i| self.cells[i])
    }

    /// Bounds-checked write. Returns false if `(x, y)` is outside the grid.
    pub fn set(&mut self, x: u32, y: u32, value: T) -> bool {
        match self.index(x, y) {
            Some(i) => {
                self.cells[i] = value;
                true
            }
            None => false,
        }
    }

    /// Row `y` as a slice, or `None` when out of range.
    pub fn row(&self, y: u32) -> Option<&[T]> {
        if y >= self.height {
            return None;
        }
        let start = y as usize * self.width as usize;
        Some(&self.cells[start..start + self.width as usize])
    }

    pub fn as_slice(&self) -> &[T] {
        &self.cells
    }
}

impl Grid<bool> {
    /// Number of set cells.
    pub fn count(&self) -> usize {
        self.cells.iter().filter(|&&c| c).count()
    }

    /// `get` that treats out-of-range coordinates as unset.
    pub fn is_set(&self, x: u32, y: u32) -> bool {
        self.get(x, y).unwrap_or(false)
    }
}
