// SPDX-FileCopyrightText: 2026 Eli Array Minkoff
//
// SPDX-License-Identifier: 0BSD

//! Points, directions, and 2D grids
//!
//! Coordinates are `(row, col)` pairs, with rows increasing downwards, matching the way puzzle
//! inputs are laid out in text.
//!
//! # Example
//!
//! ```
//! use advent::grid::{Direction, Grid, Point};
//!
//! let grid = Grid::parse_chars("#.#\n...\n#.#").unwrap();
//! let center = Point::new(1, 1);
//! assert_eq!(grid[center], '.');
//! assert_eq!(grid.neighbors(center).count(), 4);
//! assert_eq!(grid.get(center + Direction::North.velocity()), Some(&'.'));
//! assert_eq!(grid.get(Point::new(-1, 0)), None);
//! ```

use std::collections::{HashMap, HashSet, VecDeque};
use std::fmt::{self, Display};
use std::ops::{Add, AddAssign, Index, IndexMut, Mul, Neg, Sub};

use crate::style::{Style, paint};
use crate::{OrMalformed, PuzzleError};

/// A location on a grid
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Point {
    /// Row, increasing downwards
    pub row: i64,
    /// Column, increasing to the right
    pub col: i64,
}

/// The difference between two [Point]s
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Velocity {
    /// Change in row
    pub drow: i64,
    /// Change in column
    pub dcol: i64,
}

impl Point {
    /// Shorthand to construct a [Point]
    pub const fn new(row: i64, col: i64) -> Self {
        Self { row, col }
    }

    /// The Manhattan distance between two points
    pub const fn taxicab(self, other: Point) -> u64 {
        self.row.abs_diff(other.row) + self.col.abs_diff(other.col)
    }

    /// The adjacent point in `dir`
    pub fn step(self, dir: Direction) -> Self {
        self + dir.velocity()
    }

    /// The four orthogonally adjacent points, clockwise from north
    pub fn adjacent(self) -> [Point; 4] {
        Direction::ALL.map(|dir| self.step(dir))
    }
}

impl Velocity {
    /// Shorthand to construct a [Velocity]
    pub const fn new(drow: i64, dcol: i64) -> Self {
        Self { drow, dcol }
    }

    /// The eight unit velocities pointing to the neighbors of a point, including diagonals
    pub const KING_MOVES: [Velocity; 8] = [
        Velocity::new(-1, -1),
        Velocity::new(-1, 0),
        Velocity::new(-1, 1),
        Velocity::new(0, -1),
        Velocity::new(0, 1),
        Velocity::new(1, -1),
        Velocity::new(1, 0),
        Velocity::new(1, 1),
    ];
}

impl Add<Velocity> for Point {
    type Output = Point;
    fn add(self, rhs: Velocity) -> Self::Output {
        Point::new(self.row + rhs.drow, self.col + rhs.dcol)
    }
}

impl AddAssign<Velocity> for Point {
    fn add_assign(&mut self, rhs: Velocity) {
        *self = *self + rhs;
    }
}

impl Sub<Velocity> for Point {
    type Output = Point;
    fn sub(self, rhs: Velocity) -> Self::Output {
        Point::new(self.row - rhs.drow, self.col - rhs.dcol)
    }
}

impl Sub for Point {
    type Output = Velocity;
    fn sub(self, rhs: Point) -> Self::Output {
        Velocity::new(self.row - rhs.row, self.col - rhs.col)
    }
}

impl Add for Velocity {
    type Output = Velocity;
    fn add(self, rhs: Velocity) -> Self::Output {
        Velocity::new(self.drow + rhs.drow, self.dcol + rhs.dcol)
    }
}

impl Mul<i64> for Velocity {
    type Output = Velocity;
    fn mul(self, rhs: i64) -> Self::Output {
        Velocity::new(self.drow * rhs, self.dcol * rhs)
    }
}

impl Neg for Velocity {
    type Output = Velocity;
    fn neg(self) -> Self::Output {
        Velocity::new(-self.drow, -self.dcol)
    }
}

/// One of the four cardinal directions
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Direction {
    /// Up, towards row 0
    North,
    /// Right
    East,
    /// Down
    South,
    /// Left, towards column 0
    West,
}

impl Direction {
    /// All four directions, clockwise from [Direction::North]
    pub const ALL: [Direction; 4] = [
        Direction::North,
        Direction::East,
        Direction::South,
        Direction::West,
    ];

    /// The unit velocity of a step in this direction
    pub const fn velocity(self) -> Velocity {
        match self {
            Direction::North => Velocity::new(-1, 0),
            Direction::East => Velocity::new(0, 1),
            Direction::South => Velocity::new(1, 0),
            Direction::West => Velocity::new(0, -1),
        }
    }

    /// Turn 90° clockwise
    pub const fn right(self) -> Self {
        match self {
            Direction::North => Direction::East,
            Direction::East => Direction::South,
            Direction::South => Direction::West,
            Direction::West => Direction::North,
        }
    }

    /// Turn 90° counterclockwise
    pub const fn left(self) -> Self {
        self.right().opposite()
    }

    /// Turn around
    pub const fn opposite(self) -> Self {
        match self {
            Direction::North => Direction::South,
            Direction::East => Direction::West,
            Direction::South => Direction::North,
            Direction::West => Direction::East,
        }
    }

    /// Whether this is [Direction::North] or [Direction::South]
    pub const fn is_vertical(self) -> bool {
        matches!(self, Direction::North | Direction::South)
    }

    /// Parse an arrow character (`^`, `>`, `v`, `<`)
    pub const fn from_arrow(c: char) -> Option<Self> {
        match c {
            '^' => Some(Direction::North),
            '>' => Some(Direction::East),
            'v' => Some(Direction::South),
            '<' => Some(Direction::West),
            _ => None,
        }
    }

    /// The arrow character pointing in this direction
    pub const fn arrow(self) -> char {
        match self {
            Direction::North => '^',
            Direction::East => '>',
            Direction::South => 'v',
            Direction::West => '<',
        }
    }

    const fn bit(self) -> u8 {
        1 << self as u8
    }
}

/// A set of [Direction]s, packed into a single byte
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct DirSet(u8);

impl DirSet {
    /// A set with no directions in it
    pub const EMPTY: DirSet = DirSet(0);

    /// Add `dir` to the set, returning whether it was newly added
    pub fn insert(&mut self, dir: Direction) -> bool {
        let new = self.0 & dir.bit() == 0;
        self.0 |= dir.bit();
        new
    }

    /// Whether `dir` is in the set
    pub const fn contains(self, dir: Direction) -> bool {
        self.0 & dir.bit() != 0
    }

    /// Whether the set is empty
    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }

    /// The number of directions in the set
    pub const fn len(self) -> usize {
        self.0.count_ones() as usize
    }

    /// Iterate over the directions in the set, clockwise from north
    pub fn iter(self) -> impl Iterator<Item = Direction> {
        Direction::ALL.into_iter().filter(move |&dir| self.contains(dir))
    }
}

impl FromIterator<Direction> for DirSet {
    fn from_iter<I: IntoIterator<Item = Direction>>(iter: I) -> Self {
        let mut set = DirSet::EMPTY;
        for dir in iter {
            set.insert(dir);
        }
        set
    }
}

/// A dense, rectangular grid, stored in row-major order
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Grid<T> {
    cells: Vec<T>,
    height: usize,
    width: usize,
}

impl<T> Grid<T> {
    /// Build a grid out of rows, which must all be the same length
    pub fn from_rows(rows: impl IntoIterator<Item = Vec<T>>) -> Result<Self, PuzzleError> {
        let mut cells = Vec::new();
        let mut width = None;
        let mut height = 0;
        for row in rows {
            match width {
                None => width = Some(row.len()),
                Some(w) if w != row.len() => {
                    return Err(PuzzleError::malformed(format!(
                        "row {height} has length {}, expected {w}",
                        row.len()
                    )));
                }
                Some(_) => (),
            }
            cells.extend(row);
            height += 1;
        }
        Ok(Self {
            cells,
            height,
            width: width.unwrap_or(0),
        })
    }

    /// Parse a grid from text, with one cell per character, converted using `f`
    pub fn parse(
        text: &str,
        mut f: impl FnMut(char) -> Result<T, PuzzleError>,
    ) -> Result<Self, PuzzleError> {
        Self::from_rows(
            text.lines()
                .map(|line| line.chars().map(&mut f).collect::<Result<Vec<_>, _>>())
                .collect::<Result<Vec<_>, _>>()?,
        )
    }

    /// Create a grid with every cell set to `value`
    pub fn filled(height: usize, width: usize, value: T) -> Self
    where
        T: Clone,
    {
        Self {
            cells: vec![value; height * width],
            height,
            width,
        }
    }

    /// The number of rows
    pub const fn height(&self) -> usize {
        self.height
    }

    /// The number of columns
    pub const fn width(&self) -> usize {
        self.width
    }

    fn offset(&self, p: Point) -> Option<usize> {
        let row = usize::try_from(p.row).ok()?;
        let col = usize::try_from(p.col).ok()?;
        (row < self.height && col < self.width).then_some(row * self.width + col)
    }

    fn point_at(&self, offset: usize) -> Point {
        Point::new(
            (offset / self.width).cast_signed() as i64,
            (offset % self.width).cast_signed() as i64,
        )
    }

    /// Whether `p` is within the grid
    pub fn in_bounds(&self, p: Point) -> bool {
        self.offset(p).is_some()
    }

    /// The cell at `p`, if it is in bounds
    pub fn get(&self, p: Point) -> Option<&T> {
        self.offset(p).map(|i| &self.cells[i])
    }

    /// Mutable access to the cell at `p`, if it is in bounds
    pub fn get_mut(&mut self, p: Point) -> Option<&mut T> {
        self.offset(p).map(|i| &mut self.cells[i])
    }

    /// The cells in row `r`
    pub fn row(&self, r: usize) -> &[T] {
        &self.cells[r * self.width..(r + 1) * self.width]
    }

    /// Iterate over the rows, from top to bottom
    pub fn rows(&self) -> impl Iterator<Item = &[T]> {
        // an empty grid has a width of 0, which chunks_exact does not accept
        self.cells.chunks_exact(self.width.max(1))
    }

    /// Iterate over the cells in column `c`, from top to bottom
    pub fn col(&self, c: usize) -> impl Iterator<Item = &T> {
        self.cells.iter().skip(c).step_by(self.width.max(1))
    }

    /// Iterate over every point in the grid, in row-major order
    pub fn points(&self) -> impl Iterator<Item = Point> {
        (0..self.cells.len()).map(move |i| self.point_at(i))
    }

    /// Iterate over every point in the grid, along with its cell
    pub fn iter(&self) -> impl Iterator<Item = (Point, &T)> {
        self.cells
            .iter()
            .enumerate()
            .map(move |(i, cell)| (self.point_at(i), cell))
    }

    /// The first point, in row-major order, whose cell is equal to `value`
    pub fn find(&self, value: &T) -> Option<Point>
    where
        T: PartialEq,
    {
        self.cells
            .iter()
            .position(|cell| cell == value)
            .map(|i| self.point_at(i))
    }

    /// Every point whose cell is equal to `value`
    pub fn find_all<'a>(&'a self, value: &'a T) -> impl Iterator<Item = Point> + 'a
    where
        T: PartialEq,
    {
        self.iter()
            .filter(move |&(_, cell)| cell == value)
            .map(|(p, _)| p)
    }

    /// The in-bounds orthogonal neighbors of `p`, clockwise from north
    pub fn neighbors(&self, p: Point) -> impl Iterator<Item = (Point, &T)> {
        p.adjacent()
            .into_iter()
            .filter_map(move |n| self.get(n).map(|cell| (n, cell)))
    }

    /// The in-bounds neighbors of `p`, including diagonals
    pub fn neighbors8(&self, p: Point) -> impl Iterator<Item = (Point, &T)> {
        Velocity::KING_MOVES
            .into_iter()
            .filter_map(move |v| self.get(p + v).map(|cell| (p + v, cell)))
    }

    /// Flood fill from `start`, returning every point orthogonally connected to it through cells
    /// equal to the one at `start`
    pub fn contiguous(&self, start: Point) -> Vec<Point>
    where
        T: PartialEq,
    {
        let Some(value) = self.get(start) else {
            return Vec::new();
        };
        let mut seen = HashSet::from([start]);
        let mut stack = vec![start];
        let mut region = Vec::new();
        while let Some(p) = stack.pop() {
            region.push(p);
            for (n, cell) in self.neighbors(p) {
                if cell == value && seen.insert(n) {
                    stack.push(n);
                }
            }
        }
        region
    }

    /// Breadth-first search for a shortest path from `start` to `end`, moving orthogonally through
    /// cells for which `passable` returns true.
    ///
    /// The returned path includes both `start` and `end`.
    pub fn bfs(
        &self,
        start: Point,
        end: Point,
        passable: impl Fn(&T) -> bool,
    ) -> Option<Vec<Point>> {
        bfs_by(start, end, |p| {
            self.neighbors(p)
                .filter(|(_, cell)| passable(cell))
                .map(|(n, _)| n)
                .collect::<Vec<_>>()
        })
    }

    /// A new grid with `f` applied to every cell
    pub fn map<U>(&self, f: impl FnMut(&T) -> U) -> Grid<U> {
        Grid {
            cells: self.cells.iter().map(f).collect(),
            height: self.height,
            width: self.width,
        }
    }

    /// Swap rows and columns
    pub fn transpose(&self) -> Self
    where
        T: Clone,
    {
        Self {
            cells: (0..self.width)
                .flat_map(|c| self.col(c).cloned())
                .collect(),
            height: self.width,
            width: self.height,
        }
    }

    /// Rotate the grid 90° clockwise
    pub fn rotate_cw(&self) -> Self
    where
        T: Clone,
    {
        Self {
            cells: (0..self.width)
                .flat_map(|c| {
                    let col: Vec<_> = self.col(c).cloned().collect();
                    col.into_iter().rev()
                })
                .collect(),
            height: self.width,
            width: self.height,
        }
    }

    /// Render the grid like its [Display] impl, but with the cells at `points` styled with
    /// `style`
    pub fn highlighted(&self, points: &HashSet<Point>, style: Style) -> String
    where
        T: Display,
    {
        use std::fmt::Write;
        let mut out = String::new();
        for (p, cell) in self.iter() {
            if p.col == 0 && p.row != 0 {
                out.push('\n');
            }
            let style = points.contains(&p).then_some(style);
            write!(out, "{}", paint(cell, style)).expect("can write to String");
        }
        out
    }
}

impl Grid<char> {
    /// Parse a grid of plain characters
    pub fn parse_chars(text: &str) -> Result<Self, PuzzleError> {
        Self::parse(text, Ok)
    }
}

impl Grid<u8> {
    /// Parse a grid of single decimal digits
    pub fn parse_digits(text: &str) -> Result<Self, PuzzleError> {
        Self::parse(text, |c| {
            c.to_digit(10)
                .map(|d| d as u8)
                .or_malformed("expected a grid of digits")
        })
    }
}

impl<T> Index<Point> for Grid<T> {
    type Output = T;

    /// Panics if `p` is out of bounds
    fn index(&self, p: Point) -> &Self::Output {
        match self.offset(p) {
            Some(i) => &self.cells[i],
            None => panic!("{p:?} is out of bounds"),
        }
    }
}

impl<T> IndexMut<Point> for Grid<T> {
    /// Panics if `p` is out of bounds
    fn index_mut(&mut self, p: Point) -> &mut Self::Output {
        match self.offset(p) {
            Some(i) => &mut self.cells[i],
            None => panic!("{p:?} is out of bounds"),
        }
    }
}

impl<T: Display> Display for Grid<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (r, row) in self.rows().enumerate() {
            if r != 0 {
                writeln!(f)?;
            }
            for cell in row {
                write!(f, "{cell}")?;
            }
        }
        Ok(())
    }
}

/// A grid where only some cells are present, within fixed dimensions
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SparseGrid<T> {
    cells: HashMap<Point, T>,
    height: i64,
    width: i64,
}

impl<T> SparseGrid<T> {
    /// An empty grid with the given dimensions
    pub fn new(height: i64, width: i64) -> Self {
        Self {
            cells: HashMap::new(),
            height,
            width,
        }
    }

    /// The number of rows
    pub const fn height(&self) -> i64 {
        self.height
    }

    /// The number of columns
    pub const fn width(&self) -> i64 {
        self.width
    }

    /// Whether `p` is within the grid's dimensions
    pub const fn in_bounds(&self, p: Point) -> bool {
        0 <= p.row && p.row < self.height && 0 <= p.col && p.col < self.width
    }

    /// Set the cell at `p`, returning the previous value if there was one
    pub fn insert(&mut self, p: Point, value: T) -> Option<T> {
        self.cells.insert(p, value)
    }

    /// The cell at `p`, if present
    pub fn get(&self, p: Point) -> Option<&T> {
        self.cells.get(&p)
    }

    /// The number of present cells
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    /// Whether no cells are present
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Breadth-first search for a shortest path from `start` to `end`, treating present cells as
    /// walls. The returned path includes both `start` and `end`.
    pub fn bfs(&self, start: Point, end: Point) -> Option<Vec<Point>> {
        bfs_by(start, end, |p| {
            p.adjacent()
                .into_iter()
                .filter(|&n| self.in_bounds(n) && !self.cells.contains_key(&n))
                .collect::<Vec<_>>()
        })
    }
}

impl<T: Display> Display for SparseGrid<T> {
    /// Absent cells are displayed as `.`
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in 0..self.height {
            if row != 0 {
                writeln!(f)?;
            }
            for col in 0..self.width {
                match self.cells.get(&Point::new(row, col)) {
                    Some(cell) => write!(f, "{cell}")?,
                    None => write!(f, ".")?,
                }
            }
        }
        Ok(())
    }
}

fn bfs_by<N>(start: Point, end: Point, mut next: impl FnMut(Point) -> N) -> Option<Vec<Point>>
where
    N: IntoIterator<Item = Point>,
{
    let mut parents = HashMap::from([(start, start)]);
    let mut queue = VecDeque::from([start]);
    while let Some(p) = queue.pop_front() {
        if p == end {
            let mut path = vec![end];
            let mut at = end;
            while at != start {
                at = parents[&at];
                path.push(at);
            }
            path.reverse();
            return Some(path);
        }
        for n in next(p) {
            parents.entry(n).or_insert_with(|| {
                queue.push_back(n);
                p
            });
        }
    }
    None
}
