// SPDX-FileCopyrightText: 2026 Eli Array Minkoff
//
// SPDX-License-Identifier: 0BSD

//! [Day 16: Reindeer Maze](https://adventofcode.com/2024/day/16)

use std::cmp::Reverse;
use std::collections::{BinaryHeap, HashMap, HashSet};

use crate::cost::Cost;
use crate::grid::{Direction, Grid, Point};
use crate::style::Style;
use crate::{OrMalformed, PuzzleError};

type State = (Point, Direction);

const STEP: u64 = 1;
const TURN: u64 = 1000;

struct Maze {
    walls: Grid<bool>,
    start: Point,
    end: Point,
}

impl Maze {
    fn parse(input: &str) -> Result<Self, PuzzleError> {
        let tiles = Grid::parse_chars(input)?;
        Ok(Self {
            start: tiles.find(&'S').or_malformed("no start tile")?,
            end: tiles.find(&'E').or_malformed("no end tile")?,
            walls: tiles.map(|&t| t == '#'),
        })
    }

    /// The states reachable from `state` by one move, and their costs
    fn moves(&self, (p, dir): State) -> impl Iterator<Item = (State, u64)> + '_ {
        let ahead = p.step(dir);
        let forward = (self.walls.get(ahead) == Some(&false)).then_some(((ahead, dir), STEP));
        [((p, dir.left()), TURN), ((p, dir.right()), TURN)]
            .into_iter()
            .chain(forward)
    }

    /// Dijkstra's algorithm from the start, facing east, to every reachable state
    fn scores(&self) -> HashMap<State, Cost> {
        let start = (self.start, Direction::East);
        let mut best = HashMap::from([(start, Cost::ZERO)]);
        let mut queue = BinaryHeap::from([Reverse((Cost::ZERO, start))]);
        while let Some(Reverse((cost, state))) = queue.pop() {
            if best.get(&state).is_some_and(|&b| cost > b) {
                continue;
            }
            for (next, step) in self.moves(state) {
                let next_cost = cost + step;
                if best.get(&next).is_none_or(|&b| next_cost < b) {
                    best.insert(next, next_cost);
                    queue.push(Reverse((next_cost, next)));
                }
            }
        }
        best
    }

    fn lowest_score(&self, scores: &HashMap<State, Cost>) -> Cost {
        Direction::ALL
            .into_iter()
            .filter_map(|dir| scores.get(&(self.end, dir)).copied())
            .min()
            .unwrap_or_default()
    }

    /// Every tile on at least one best path, found by walking backwards from the end through
    /// states whose score leads exactly to the next state's score
    fn best_tiles(&self) -> Result<HashSet<Point>, PuzzleError> {
        let scores = self.scores();
        let lowest = self.lowest_score(&scores);
        if lowest.is_infinite() {
            return Err(PuzzleError::NoSolution("the end tile is unreachable"));
        }
        let mut stack: Vec<State> = Direction::ALL
            .into_iter()
            .map(|dir| (self.end, dir))
            .filter(|s| scores.get(s) == Some(&lowest))
            .collect();
        let mut on_path: HashSet<State> = stack.iter().copied().collect();
        while let Some((p, dir)) = stack.pop() {
            let score = scores[&(p, dir)];
            let back = p.step(dir.opposite());
            let predecessors = [
                ((back, dir), STEP),
                ((p, dir.left()), TURN),
                ((p, dir.right()), TURN),
            ];
            for (prev, step) in predecessors {
                if let Some(&prev_score) = scores.get(&prev)
                    && prev_score + step == score
                    && on_path.insert(prev)
                {
                    stack.push(prev);
                }
            }
        }
        Ok(on_path.into_iter().map(|(p, _)| p).collect())
    }
}

/// What is the lowest score a Reindeer could possibly get?
pub fn part1(input: &str) -> Result<u64, PuzzleError> {
    let maze = Maze::parse(input)?;
    maze.lowest_score(&maze.scores())
        .finite()
        .ok_or(PuzzleError::NoSolution("the end tile is unreachable"))
}

/// How many tiles are part of at least one of the best paths through the maze?
pub fn part2(input: &str) -> Result<usize, PuzzleError> {
    Ok(Maze::parse(input)?.best_tiles()?.len())
}

/// Render the maze with every tile on a best path marked as `O`, highlighted with `style`
pub fn render_best_tiles(input: &str, style: Style) -> Result<String, PuzzleError> {
    let maze = Maze::parse(input)?;
    let best = maze.best_tiles()?;
    let mut marked = Grid::parse_chars(input)?;
    for &p in &best {
        marked[p] = 'O';
    }
    Ok(marked.highlighted(&best, style))
}
