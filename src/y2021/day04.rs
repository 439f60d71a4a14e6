// SPDX-FileCopyrightText: 2026 Eli Array Minkoff
//
// SPDX-License-Identifier: 0BSD

//! [Day 4: Giant Squid](https://adventofcode.com/2021/day/4)

use crate::{OrMalformed, PuzzleError, ints};

const SIZE: usize = 5;

#[derive(Debug, Clone)]
struct Board {
    numbers: [u32; SIZE * SIZE],
    marked: [bool; SIZE * SIZE],
    won: bool,
}

impl Board {
    fn parse(text: &str) -> Result<Self, PuzzleError> {
        let numbers: Vec<u32> = ints(text)?;
        let numbers: [u32; SIZE * SIZE] = numbers
            .try_into()
            .map_err(|v: Vec<u32>| PuzzleError::malformed(format!("board has {} numbers", v.len())))?;
        Ok(Self {
            numbers,
            marked: [false; SIZE * SIZE],
            won: false,
        })
    }

    /// Mark `n` if it's on the board, returning whether that completed a row or column
    fn mark(&mut self, n: u32) -> bool {
        let Some(i) = self.numbers.iter().position(|&x| x == n) else {
            return false;
        };
        self.marked[i] = true;
        let (row, col) = (i / SIZE, i % SIZE);
        (0..SIZE).all(|c| self.marked[row * SIZE + c]) || (0..SIZE).all(|r| self.marked[r * SIZE + col])
    }

    fn unmarked_sum(&self) -> u32 {
        self.numbers
            .iter()
            .zip(self.marked)
            .filter(|&(_, marked)| !marked)
            .map(|(n, _)| n)
            .sum()
    }
}

/// Play bingo until every board has won, returning the score of each board in the order they won
fn winning_scores(input: &str) -> Result<Vec<u32>, PuzzleError> {
    let mut sections = input.split("\n\n");
    let draws = sections
        .next()
        .or_malformed("missing numbers to draw")?
        .trim()
        .split(',')
        .map(|n| n.parse::<u32>().map_err(PuzzleError::from))
        .collect::<Result<Vec<_>, _>>()?;
    let mut boards = sections.map(Board::parse).collect::<Result<Vec<_>, _>>()?;

    let mut scores = Vec::with_capacity(boards.len());
    for n in draws {
        for board in boards.iter_mut().filter(|b| !b.won) {
            if board.mark(n) {
                board.won = true;
                scores.push(board.unmarked_sum() * n);
            }
        }
    }
    Ok(scores)
}

/// What will your final score be if you choose the first board to win?
pub fn part1(input: &str) -> Result<u32, PuzzleError> {
    winning_scores(input)?
        .first()
        .copied()
        .ok_or(PuzzleError::NoSolution("no board ever wins"))
}

/// Figure out which board will win last. Once it wins, what would its final score be?
pub fn part2(input: &str) -> Result<u32, PuzzleError> {
    winning_scores(input)?
        .last()
        .copied()
        .ok_or(PuzzleError::NoSolution("no board ever wins"))
}

#[cfg(test)]
mod tests {
    use super::*;
    const EXAMPLE: &str = include_str!("../../tests/inputs/2021/day04.txt");

    #[test]
    fn example() {
        assert_eq!(part1(EXAMPLE), Ok(4512));
        assert_eq!(part2(EXAMPLE), Ok(1924));
    }

    #[test]
    fn every_board_wins_once() {
        assert_eq!(winning_scores(EXAMPLE).unwrap().len(), 3);
    }

    #[test]
    fn no_winner() {
        let (_, boards) = EXAMPLE.split_once('\n').unwrap();
        let input = format!("99,98\n{boards}");
        assert_eq!(part1(&input), Err(PuzzleError::NoSolution("no board ever wins")));
        assert_eq!(part2(&input), Err(PuzzleError::NoSolution("no board ever wins")));
    }
}
