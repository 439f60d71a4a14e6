// SPDX-FileCopyrightText: 2026 Eli Array Minkoff
//
// SPDX-License-Identifier: 0BSD

//! [Day 14: Parabolic Reflector Dish](https://adventofcode.com/2023/day/14)

use std::collections::HashMap;

use crate::PuzzleError;
use crate::grid::{Grid, Point};

/// Roll every rounded rock (`O`) as far north as it can go
fn tilt_north(dish: &mut Grid<char>) {
    for c in 0..dish.width() as i64 {
        let mut stop = 0;
        for r in 0..dish.height() as i64 {
            match dish[Point::new(r, c)] {
                '#' => stop = r + 1,
                'O' => {
                    dish[Point::new(r, c)] = '.';
                    dish[Point::new(stop, c)] = 'O';
                    stop += 1;
                }
                _ => (),
            }
        }
    }
}

fn north_load(dish: &Grid<char>) -> usize {
    dish.find_all(&'O')
        .map(|p| dish.height() - p.row as usize)
        .sum()
}

/// Tilt north, then west, then south, then east.
///
/// Rotating clockwise after each tilt brings the next side to the top.
fn spin(dish: &Grid<char>) -> Grid<char> {
    let mut dish = dish.clone();
    for _ in 0..4 {
        tilt_north(&mut dish);
        dish = dish.rotate_cw();
    }
    dish
}

/// Tilt the platform so that the rounded rocks all roll north. Afterward, what is the total load
/// on the north support beams?
pub fn part1(input: &str) -> Result<usize, PuzzleError> {
    let mut dish = Grid::parse_chars(input)?;
    tilt_north(&mut dish);
    Ok(north_load(&dish))
}

/// Run the spin cycle for 1000000000 cycles. Afterward, what is the total load on the north
/// support beams?
pub fn part2(input: &str) -> Result<usize, PuzzleError> {
    const CYCLES: usize = 1_000_000_000;
    let mut history = vec![Grid::parse_chars(input)?];
    let mut seen = HashMap::from([(history[0].clone(), 0)]);
    loop {
        let next = spin(&history[history.len() - 1]);
        if let Some(&start) = seen.get(&next) {
            let period = history.len() - start;
            return Ok(north_load(&history[start + (CYCLES - start) % period]));
        }
        seen.insert(next.clone(), history.len());
        history.push(next);
        if history.len() > CYCLES {
            return Ok(north_load(&history[CYCLES]));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    const EXAMPLE: &str = include_str!("../../tests/inputs/2023/day14.txt");

    #[test]
    fn example() {
        assert_eq!(part1(EXAMPLE), Ok(136));
        assert_eq!(part2(EXAMPLE), Ok(64));
    }

    /// After 1 cycle
    #[test]
    fn one_cycle() {
        let dish = spin(&Grid::parse_chars(EXAMPLE).unwrap());
        assert_eq!(
            dish.to_string(),
            ".....#....\n\
             ....#...O#\n\
             ...OO##...\n\
             .OO#......\n\
             .....OOO#.\n\
             .O#...O#.#\n\
             ....O#....\n\
             ......OOOO\n\
             #...O###..\n\
             #..OO#...."
        );
    }
}
