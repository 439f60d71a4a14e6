//! Test that examples from Advent of Code problem descriptions behave as described.
// SPDX-FileCopyrightText: 2026 Eli Array Minkoff
//
// SPDX-License-Identifier: 0BSD

use advent::prelude::*;

// first, some groundwork shared by every test

/// Solve a puzzle through the registry, expecting a numeric answer
fn number(year: u16, day: u8, part: Part, input: &str) -> i64 {
    let Answer::Number(n) = solve(PuzzleId::new(year, day), part, input).unwrap() else {
        panic!("{year} day {day}, {part} should have a numeric answer");
    };
    n
}

/// Solve a puzzle through the registry, expecting a textual answer
fn text(year: u16, day: u8, part: Part, input: &str) -> String {
    let Answer::Text(s) = solve(PuzzleId::new(year, day), part, input).unwrap() else {
        panic!("{year} day {day}, {part} should have a textual answer");
    };
    s
}

/// [Day 1: Sonar Sweep](https://adventofcode.com/2021/day/1)
mod y2021_day01 {
    mod part1 {
        use crate::*;

        #[test]
        fn example() {
            assert_eq!(number(2021, 1, Part::One, include_str!("inputs/2021/day01.txt")), 7);
        }
    }
    mod part2 {
        use crate::*;

        #[test]
        fn example() {
            assert_eq!(number(2021, 1, Part::Two, include_str!("inputs/2021/day01.txt")), 5);
        }
    }
}

/// [Day 2: Dive!](https://adventofcode.com/2021/day/2)
mod y2021_day02 {
    mod part1 {
        use crate::*;

        #[test]
        fn example() {
            assert_eq!(number(2021, 2, Part::One, include_str!("inputs/2021/day02.txt")), 150);
        }
    }
    mod part2 {
        use crate::*;

        #[test]
        fn example() {
            assert_eq!(number(2021, 2, Part::Two, include_str!("inputs/2021/day02.txt")), 900);
        }
    }
}

/// [Day 3: Binary Diagnostic](https://adventofcode.com/2021/day/3)
mod y2021_day03 {
    mod part1 {
        use crate::*;

        #[test]
        fn example() {
            assert_eq!(number(2021, 3, Part::One, include_str!("inputs/2021/day03.txt")), 198);
        }
    }
    mod part2 {
        use crate::*;

        #[test]
        fn example() {
            assert_eq!(number(2021, 3, Part::Two, include_str!("inputs/2021/day03.txt")), 230);
        }
    }
}

/// [Day 4: Giant Squid](https://adventofcode.com/2021/day/4)
mod y2021_day04 {
    mod part1 {
        use crate::*;

        #[test]
        fn example() {
            assert_eq!(number(2021, 4, Part::One, include_str!("inputs/2021/day04.txt")), 4512);
        }
    }
    mod part2 {
        use crate::*;

        #[test]
        fn example() {
            assert_eq!(number(2021, 4, Part::Two, include_str!("inputs/2021/day04.txt")), 1924);
        }
    }
}

/// [Day 5: Hydrothermal Venture](https://adventofcode.com/2021/day/5)
mod y2021_day05 {
    mod part1 {
        use crate::*;

        #[test]
        fn example() {
            assert_eq!(number(2021, 5, Part::One, include_str!("inputs/2021/day05.txt")), 5);
        }
    }
    mod part2 {
        use crate::*;

        #[test]
        fn example() {
            assert_eq!(number(2021, 5, Part::Two, include_str!("inputs/2021/day05.txt")), 12);
        }
    }
}

/// [Day 6: Lanternfish](https://adventofcode.com/2021/day/6)
mod y2021_day06 {
    mod part1 {
        use crate::*;
        use advent::y2021::day06::fish_after;
        const EXAMPLE: &str = include_str!("inputs/2021/day06.txt");

        #[test]
        fn example() {
            assert_eq!(number(2021, 6, Part::One, EXAMPLE), 5934);
        }

        /// "After 18 days, there are a total of 26 fish."
        #[test]
        fn after_18_days() {
            assert_eq!(fish_after(EXAMPLE, 18), Ok(26));
        }
    }
    mod part2 {
        use crate::*;

        #[test]
        fn example() {
            assert_eq!(number(2021, 6, Part::Two, include_str!("inputs/2021/day06.txt")), 26984457539);
        }
    }
}

/// [Day 7: The Treachery of Whales](https://adventofcode.com/2021/day/7)
mod y2021_day07 {
    mod part1 {
        use crate::*;

        #[test]
        fn example() {
            assert_eq!(number(2021, 7, Part::One, include_str!("inputs/2021/day07.txt")), 37);
        }
    }
    mod part2 {
        use crate::*;

        #[test]
        fn example() {
            assert_eq!(number(2021, 7, Part::Two, include_str!("inputs/2021/day07.txt")), 168);
        }
    }
}

/// [Day 8: Seven Segment Search](https://adventofcode.com/2021/day/8)
mod y2021_day08 {
    mod part1 {
        use crate::*;

        #[test]
        fn example() {
            assert_eq!(number(2021, 8, Part::One, include_str!("inputs/2021/day08.txt")), 26);
        }
    }
    mod part2 {
        use crate::*;

        #[test]
        fn example_main() {
            assert_eq!(number(2021, 8, Part::Two, include_str!("inputs/2021/day08.txt")), 61229);
        }

        #[test]
        fn single_entry() {
            assert_eq!(number(2021, 8, Part::Two, include_str!("inputs/2021/day08-single.txt")), 5353);
        }
    }
}

/// [Day 9: Smoke Basin](https://adventofcode.com/2021/day/9)
mod y2021_day09 {
    mod part1 {
        use crate::*;

        #[test]
        fn example() {
            assert_eq!(number(2021, 9, Part::One, include_str!("inputs/2021/day09.txt")), 15);
        }
    }
    mod part2 {
        use crate::*;

        #[test]
        fn example() {
            assert_eq!(number(2021, 9, Part::Two, include_str!("inputs/2021/day09.txt")), 1134);
        }
    }
}

/// [Day 10: Syntax Scoring](https://adventofcode.com/2021/day/10)
mod y2021_day10 {
    mod part1 {
        use crate::*;

        #[test]
        fn example() {
            assert_eq!(number(2021, 10, Part::One, include_str!("inputs/2021/day10.txt")), 26397);
        }
    }
    mod part2 {
        use crate::*;

        #[test]
        fn example() {
            assert_eq!(number(2021, 10, Part::Two, include_str!("inputs/2021/day10.txt")), 288957);
        }
    }
}

/// [Day 11: Dumbo Octopus](https://adventofcode.com/2021/day/11)
mod y2021_day11 {
    mod part1 {
        use crate::*;

        #[test]
        fn example() {
            assert_eq!(number(2021, 11, Part::One, include_str!("inputs/2021/day11.txt")), 1656);
        }
    }
    mod part2 {
        use crate::*;

        #[test]
        fn example() {
            assert_eq!(number(2021, 11, Part::Two, include_str!("inputs/2021/day11.txt")), 195);
        }
    }
}

/// [Day 12: Passage Pathing](https://adventofcode.com/2021/day/12)
mod y2021_day12 {
    mod part1 {
        use crate::*;

        #[test]
        fn example_1() {
            assert_eq!(number(2021, 12, Part::One, include_str!("inputs/2021/day12-1.txt")), 10);
        }

        #[test]
        fn example_2() {
            assert_eq!(number(2021, 12, Part::One, include_str!("inputs/2021/day12-2.txt")), 19);
        }

        #[test]
        fn example_3() {
            assert_eq!(number(2021, 12, Part::One, include_str!("inputs/2021/day12-3.txt")), 226);
        }
    }
    mod part2 {
        use crate::*;

        #[test]
        fn example_1() {
            assert_eq!(number(2021, 12, Part::Two, include_str!("inputs/2021/day12-1.txt")), 36);
        }

        #[test]
        fn example_2() {
            assert_eq!(number(2021, 12, Part::Two, include_str!("inputs/2021/day12-2.txt")), 103);
        }

        #[test]
        fn example_3() {
            assert_eq!(number(2021, 12, Part::Two, include_str!("inputs/2021/day12-3.txt")), 3509);
        }
    }
}

/// [Day 13: Transparent Origami](https://adventofcode.com/2021/day/13)
mod y2021_day13 {
    mod part1 {
        use crate::*;

        #[test]
        fn example() {
            assert_eq!(number(2021, 13, Part::One, include_str!("inputs/2021/day13.txt")), 17);
        }
    }
    mod part2 {
        use crate::*;

        #[test]
        fn example() {
            assert_eq!(text(2021, 13, Part::Two, include_str!("inputs/2021/day13.txt")), "#####\n#...#\n#...#\n#...#\n#####");
        }
    }
}

/// [Day 14: Extended Polymerization](https://adventofcode.com/2021/day/14)
mod y2021_day14 {
    mod part1 {
        use crate::*;

        #[test]
        fn example() {
            assert_eq!(number(2021, 14, Part::One, include_str!("inputs/2021/day14.txt")), 1588);
        }
    }
    mod part2 {
        use crate::*;

        #[test]
        fn example() {
            assert_eq!(number(2021, 14, Part::Two, include_str!("inputs/2021/day14.txt")), 2188189693529);
        }
    }
}

/// [Day 15: Chiton](https://adventofcode.com/2021/day/15)
mod y2021_day15 {
    mod part1 {
        use crate::*;

        #[test]
        fn example() {
            assert_eq!(number(2021, 15, Part::One, include_str!("inputs/2021/day15.txt")), 40);
        }
    }
    mod part2 {
        use crate::*;

        #[test]
        fn example() {
            assert_eq!(number(2021, 15, Part::Two, include_str!("inputs/2021/day15.txt")), 315);
        }
    }
}

/// [Day 1: Calorie Counting](https://adventofcode.com/2022/day/1)
mod y2022_day01 {
    mod part1 {
        use crate::*;

        #[test]
        fn example() {
            assert_eq!(number(2022, 1, Part::One, include_str!("inputs/2022/day01.txt")), 24000);
        }
    }
    mod part2 {
        use crate::*;

        #[test]
        fn example() {
            assert_eq!(number(2022, 1, Part::Two, include_str!("inputs/2022/day01.txt")), 45000);
        }
    }
}

/// [Day 2: Rock Paper Scissors](https://adventofcode.com/2022/day/2)
mod y2022_day02 {
    mod part1 {
        use crate::*;

        #[test]
        fn example() {
            assert_eq!(number(2022, 2, Part::One, include_str!("inputs/2022/day02.txt")), 15);
        }
    }
    mod part2 {
        use crate::*;

        #[test]
        fn example() {
            assert_eq!(number(2022, 2, Part::Two, include_str!("inputs/2022/day02.txt")), 12);
        }
    }
}

/// [Day 3: Rucksack Reorganization](https://adventofcode.com/2022/day/3)
mod y2022_day03 {
    mod part1 {
        use crate::*;

        #[test]
        fn example() {
            assert_eq!(number(2022, 3, Part::One, include_str!("inputs/2022/day03.txt")), 157);
        }
    }
    mod part2 {
        use crate::*;

        #[test]
        fn example() {
            assert_eq!(number(2022, 3, Part::Two, include_str!("inputs/2022/day03.txt")), 70);
        }
    }
}

/// [Day 4: Camp Cleanup](https://adventofcode.com/2022/day/4)
mod y2022_day04 {
    mod part1 {
        use crate::*;

        #[test]
        fn example() {
            assert_eq!(number(2022, 4, Part::One, include_str!("inputs/2022/day04.txt")), 2);
        }
    }
    mod part2 {
        use crate::*;

        #[test]
        fn example() {
            assert_eq!(number(2022, 4, Part::Two, include_str!("inputs/2022/day04.txt")), 4);
        }
    }
}

/// [Day 5: Supply Stacks](https://adventofcode.com/2022/day/5)
mod y2022_day05 {
    mod part1 {
        use crate::*;

        #[test]
        fn example() {
            assert_eq!(text(2022, 5, Part::One, include_str!("inputs/2022/day05.txt")), "CMZ");
        }
    }
    mod part2 {
        use crate::*;

        #[test]
        fn example() {
            assert_eq!(text(2022, 5, Part::Two, include_str!("inputs/2022/day05.txt")), "MCD");
        }
    }
}

/// [Day 6: Tuning Trouble](https://adventofcode.com/2022/day/6)
mod y2022_day06 {
    mod part1 {
        use crate::*;

        #[test]
        fn example() {
            assert_eq!(number(2022, 6, Part::One, include_str!("inputs/2022/day06.txt")), 7);
        }
    }
    mod part2 {
        use crate::*;

        #[test]
        fn example() {
            assert_eq!(number(2022, 6, Part::Two, include_str!("inputs/2022/day06.txt")), 19);
        }
    }
}

/// [Day 1: Trebuchet?!](https://adventofcode.com/2023/day/1)
mod y2023_day01 {
    mod part1 {
        use crate::*;

        #[test]
        fn example() {
            assert_eq!(number(2023, 1, Part::One, include_str!("inputs/2023/day01-1.txt")), 142);
        }
    }
    mod part2 {
        use crate::*;

        #[test]
        fn example() {
            assert_eq!(number(2023, 1, Part::Two, include_str!("inputs/2023/day01-2.txt")), 281);
        }
    }
}

/// [Day 2: Cube Conundrum](https://adventofcode.com/2023/day/2)
mod y2023_day02 {
    mod part1 {
        use crate::*;

        #[test]
        fn example() {
            assert_eq!(number(2023, 2, Part::One, include_str!("inputs/2023/day02.txt")), 8);
        }
    }
    mod part2 {
        use crate::*;

        #[test]
        fn example() {
            assert_eq!(number(2023, 2, Part::Two, include_str!("inputs/2023/day02.txt")), 2286);
        }
    }
}

/// [Day 3: Gear Ratios](https://adventofcode.com/2023/day/3)
mod y2023_day03 {
    mod part1 {
        use crate::*;

        #[test]
        fn example() {
            assert_eq!(number(2023, 3, Part::One, include_str!("inputs/2023/day03.txt")), 4361);
        }
    }
    mod part2 {
        use crate::*;

        #[test]
        fn example() {
            assert_eq!(number(2023, 3, Part::Two, include_str!("inputs/2023/day03.txt")), 467835);
        }
    }
}

/// [Day 4: Scratchcards](https://adventofcode.com/2023/day/4)
mod y2023_day04 {
    mod part1 {
        use crate::*;

        #[test]
        fn example() {
            assert_eq!(number(2023, 4, Part::One, include_str!("inputs/2023/day04.txt")), 13);
        }
    }
    mod part2 {
        use crate::*;

        #[test]
        fn example() {
            assert_eq!(number(2023, 4, Part::Two, include_str!("inputs/2023/day04.txt")), 30);
        }
    }
}

/// [Day 5: If You Give A Seed A Fertilizer](https://adventofcode.com/2023/day/5)
mod y2023_day05 {
    mod part1 {
        use crate::*;

        #[test]
        fn example() {
            assert_eq!(number(2023, 5, Part::One, include_str!("inputs/2023/day05.txt")), 35);
        }
    }
    mod part2 {
        use crate::*;

        #[test]
        fn example() {
            assert_eq!(number(2023, 5, Part::Two, include_str!("inputs/2023/day05.txt")), 46);
        }
    }
}

/// [Day 6: Wait For It](https://adventofcode.com/2023/day/6)
mod y2023_day06 {
    mod part1 {
        use crate::*;

        #[test]
        fn example() {
            assert_eq!(number(2023, 6, Part::One, include_str!("inputs/2023/day06.txt")), 288);
        }
    }
    mod part2 {
        use crate::*;

        #[test]
        fn example() {
            assert_eq!(number(2023, 6, Part::Two, include_str!("inputs/2023/day06.txt")), 71503);
        }
    }
}

/// [Day 7: Camel Cards](https://adventofcode.com/2023/day/7)
mod y2023_day07 {
    mod part1 {
        use crate::*;

        #[test]
        fn example() {
            assert_eq!(number(2023, 7, Part::One, include_str!("inputs/2023/day07.txt")), 6440);
        }
    }
    mod part2 {
        use crate::*;

        #[test]
        fn example() {
            assert_eq!(number(2023, 7, Part::Two, include_str!("inputs/2023/day07.txt")), 5905);
        }
    }
}

/// [Day 8: Haunted Wasteland](https://adventofcode.com/2023/day/8)
mod y2023_day08 {
    mod part1 {
        use crate::*;

        #[test]
        fn example_1() {
            assert_eq!(number(2023, 8, Part::One, include_str!("inputs/2023/day08-1.txt")), 2);
        }

        #[test]
        fn example_2() {
            assert_eq!(number(2023, 8, Part::One, include_str!("inputs/2023/day08-2.txt")), 6);
        }
    }
    mod part2 {
        use crate::*;

        #[test]
        fn example() {
            assert_eq!(number(2023, 8, Part::Two, include_str!("inputs/2023/day08-3.txt")), 6);
        }
    }
}

/// [Day 9: Mirage Maintenance](https://adventofcode.com/2023/day/9)
mod y2023_day09 {
    mod part1 {
        use crate::*;

        #[test]
        fn example() {
            assert_eq!(number(2023, 9, Part::One, include_str!("inputs/2023/day09.txt")), 114);
        }
    }
    mod part2 {
        use crate::*;

        #[test]
        fn example() {
            assert_eq!(number(2023, 9, Part::Two, include_str!("inputs/2023/day09.txt")), 2);
        }
    }
}

/// [Day 10: Pipe Maze](https://adventofcode.com/2023/day/10)
mod y2023_day10 {
    mod part1 {
        use crate::*;

        #[test]
        fn example_1() {
            assert_eq!(number(2023, 10, Part::One, include_str!("inputs/2023/day10-1.txt")), 4);
        }

        #[test]
        fn example_2() {
            assert_eq!(number(2023, 10, Part::One, include_str!("inputs/2023/day10-2.txt")), 8);
        }
    }
    mod part2 {
        use crate::*;

        #[test]
        fn example_3() {
            assert_eq!(number(2023, 10, Part::Two, include_str!("inputs/2023/day10-3.txt")), 4);
        }

        #[test]
        fn example_4() {
            assert_eq!(number(2023, 10, Part::Two, include_str!("inputs/2023/day10-4.txt")), 4);
        }

        #[test]
        fn example_5() {
            assert_eq!(number(2023, 10, Part::Two, include_str!("inputs/2023/day10-5.txt")), 8);
        }

        #[test]
        fn example_6() {
            assert_eq!(number(2023, 10, Part::Two, include_str!("inputs/2023/day10-6.txt")), 10);
        }
    }
}

/// [Day 11: Cosmic Expansion](https://adventofcode.com/2023/day/11)
mod y2023_day11 {
    mod part1 {
        use crate::*;

        #[test]
        fn example() {
            assert_eq!(number(2023, 11, Part::One, include_str!("inputs/2023/day11.txt")), 374);
        }
    }
    mod part2 {
        use advent::y2023::day11::expand;
        const EXAMPLE: &str = include_str!("inputs/2023/day11.txt");

        /// "If each empty row or column were 10 times larger, the sum of the shortest paths between
        /// every pair of galaxies would be 1030. If each empty row or column were 100 times larger,
        /// the sum of the shortest paths between every pair of galaxies would be 8410."
        #[test]
        fn larger_expansions() {
            assert_eq!(expand(EXAMPLE, 10), Ok(1030));
            assert_eq!(expand(EXAMPLE, 100), Ok(8410));
        }
    }
}

/// [Day 12: Hot Springs](https://adventofcode.com/2023/day/12)
mod y2023_day12 {
    mod part1 {
        use crate::*;

        #[test]
        fn example() {
            assert_eq!(number(2023, 12, Part::One, include_str!("inputs/2023/day12.txt")), 21);
        }
    }
    mod part2 {
        use crate::*;

        #[test]
        fn example() {
            assert_eq!(number(2023, 12, Part::Two, include_str!("inputs/2023/day12.txt")), 525152);
        }
    }
}

/// [Day 13: Point of Incidence](https://adventofcode.com/2023/day/13)
mod y2023_day13 {
    mod part1 {
        use crate::*;

        #[test]
        fn example() {
            assert_eq!(number(2023, 13, Part::One, include_str!("inputs/2023/day13.txt")), 405);
        }
    }
    mod part2 {
        use crate::*;

        #[test]
        fn example() {
            assert_eq!(number(2023, 13, Part::Two, include_str!("inputs/2023/day13.txt")), 400);
        }
    }
}

/// [Day 14: Parabolic Reflector Dish](https://adventofcode.com/2023/day/14)
mod y2023_day14 {
    mod part1 {
        use crate::*;

        #[test]
        fn example() {
            assert_eq!(number(2023, 14, Part::One, include_str!("inputs/2023/day14.txt")), 136);
        }
    }
    mod part2 {
        use crate::*;

        #[test]
        fn example() {
            assert_eq!(number(2023, 14, Part::Two, include_str!("inputs/2023/day14.txt")), 64);
        }
    }
}

/// [Day 15: Lens Library](https://adventofcode.com/2023/day/15)
mod y2023_day15 {
    mod part1 {
        use crate::*;

        #[test]
        fn example() {
            assert_eq!(number(2023, 15, Part::One, include_str!("inputs/2023/day15.txt")), 1320);
        }
    }
    mod part2 {
        use crate::*;

        #[test]
        fn example() {
            assert_eq!(number(2023, 15, Part::Two, include_str!("inputs/2023/day15.txt")), 145);
        }
    }
}

/// [Day 16: The Floor Will Be Lava](https://adventofcode.com/2023/day/16)
mod y2023_day16 {
    mod part1 {
        use crate::*;

        #[test]
        fn example() {
            assert_eq!(number(2023, 16, Part::One, include_str!("inputs/2023/day16.txt")), 46);
        }
    }
    mod part2 {
        use crate::*;

        #[test]
        fn example() {
            assert_eq!(number(2023, 16, Part::Two, include_str!("inputs/2023/day16.txt")), 51);
        }
    }
}

/// [Day 17: Clumsy Crucible](https://adventofcode.com/2023/day/17)
mod y2023_day17 {
    mod part1 {
        use crate::*;

        #[test]
        fn example() {
            assert_eq!(number(2023, 17, Part::One, include_str!("inputs/2023/day17-1.txt")), 102);
        }
    }
    mod part2 {
        use crate::*;

        #[test]
        fn example_1() {
            assert_eq!(number(2023, 17, Part::Two, include_str!("inputs/2023/day17-1.txt")), 94);
        }

        #[test]
        fn example_2() {
            assert_eq!(number(2023, 17, Part::Two, include_str!("inputs/2023/day17-2.txt")), 71);
        }
    }
}

/// [Day 1: Historian Hysteria](https://adventofcode.com/2024/day/1)
mod y2024_day01 {
    mod part1 {
        use crate::*;

        #[test]
        fn example() {
            assert_eq!(number(2024, 1, Part::One, include_str!("inputs/2024/day01.txt")), 11);
        }
    }
    mod part2 {
        use crate::*;

        #[test]
        fn example() {
            assert_eq!(number(2024, 1, Part::Two, include_str!("inputs/2024/day01.txt")), 31);
        }
    }
}

/// [Day 2: Red-Nosed Reports](https://adventofcode.com/2024/day/2)
mod y2024_day02 {
    mod part1 {
        use crate::*;

        #[test]
        fn example() {
            assert_eq!(number(2024, 2, Part::One, include_str!("inputs/2024/day02.txt")), 2);
        }
    }
    mod part2 {
        use crate::*;

        #[test]
        fn example() {
            assert_eq!(number(2024, 2, Part::Two, include_str!("inputs/2024/day02.txt")), 4);
        }
    }
}

/// [Day 3: Mull It Over](https://adventofcode.com/2024/day/3)
mod y2024_day03 {
    mod part1 {
        use crate::*;

        #[test]
        fn example() {
            assert_eq!(number(2024, 3, Part::One, include_str!("inputs/2024/day03-1.txt")), 161);
        }
    }
    mod part2 {
        use crate::*;

        #[test]
        fn example() {
            assert_eq!(number(2024, 3, Part::Two, include_str!("inputs/2024/day03-2.txt")), 48);
        }
    }
}

/// [Day 4: Ceres Search](https://adventofcode.com/2024/day/4)
mod y2024_day04 {
    mod part1 {
        use crate::*;

        #[test]
        fn example() {
            assert_eq!(number(2024, 4, Part::One, include_str!("inputs/2024/day04.txt")), 18);
        }
    }
    mod part2 {
        use crate::*;

        #[test]
        fn example() {
            assert_eq!(number(2024, 4, Part::Two, include_str!("inputs/2024/day04.txt")), 9);
        }
    }
}

/// [Day 5: Print Queue](https://adventofcode.com/2024/day/5)
mod y2024_day05 {
    mod part1 {
        use crate::*;

        #[test]
        fn example() {
            assert_eq!(number(2024, 5, Part::One, include_str!("inputs/2024/day05.txt")), 143);
        }
    }
    mod part2 {
        use crate::*;

        #[test]
        fn example() {
            assert_eq!(number(2024, 5, Part::Two, include_str!("inputs/2024/day05.txt")), 123);
        }
    }
}

/// [Day 6: Guard Gallivant](https://adventofcode.com/2024/day/6)
mod y2024_day06 {
    mod part1 {
        use crate::*;

        #[test]
        fn example() {
            assert_eq!(number(2024, 6, Part::One, include_str!("inputs/2024/day06.txt")), 41);
        }
    }
    mod part2 {
        use crate::*;

        #[test]
        fn example() {
            assert_eq!(number(2024, 6, Part::Two, include_str!("inputs/2024/day06.txt")), 6);
        }
    }
}

/// [Day 7: Bridge Repair](https://adventofcode.com/2024/day/7)
mod y2024_day07 {
    mod part1 {
        use crate::*;

        #[test]
        fn example() {
            assert_eq!(number(2024, 7, Part::One, include_str!("inputs/2024/day07.txt")), 3749);
        }
    }
    mod part2 {
        use crate::*;

        #[test]
        fn example() {
            assert_eq!(number(2024, 7, Part::Two, include_str!("inputs/2024/day07.txt")), 11387);
        }
    }
}

/// [Day 8: Resonant Collinearity](https://adventofcode.com/2024/day/8)
mod y2024_day08 {
    mod part1 {
        use crate::*;

        #[test]
        fn example() {
            assert_eq!(number(2024, 8, Part::One, include_str!("inputs/2024/day08.txt")), 14);
        }
    }
    mod part2 {
        use crate::*;

        #[test]
        fn example() {
            assert_eq!(number(2024, 8, Part::Two, include_str!("inputs/2024/day08.txt")), 34);
        }
    }
}

/// [Day 9: Disk Fragmenter](https://adventofcode.com/2024/day/9)
mod y2024_day09 {
    mod part1 {
        use crate::*;

        #[test]
        fn example() {
            assert_eq!(number(2024, 9, Part::One, include_str!("inputs/2024/day09.txt")), 1928);
        }
    }
    mod part2 {
        use crate::*;

        #[test]
        fn example() {
            assert_eq!(number(2024, 9, Part::Two, include_str!("inputs/2024/day09.txt")), 2858);
        }
    }
}

/// [Day 10: Hoof It](https://adventofcode.com/2024/day/10)
mod y2024_day10 {
    mod part1 {
        use crate::*;

        #[test]
        fn example() {
            assert_eq!(number(2024, 10, Part::One, include_str!("inputs/2024/day10.txt")), 36);
        }
    }
    mod part2 {
        use crate::*;

        #[test]
        fn example() {
            assert_eq!(number(2024, 10, Part::Two, include_str!("inputs/2024/day10.txt")), 81);
        }
    }
}

/// [Day 11: Plutonian Pebbles](https://adventofcode.com/2024/day/11)
mod y2024_day11 {
    mod part1 {
        use crate::*;
        use advent::y2024::day11::stones_after;
        const EXAMPLE: &str = include_str!("inputs/2024/day11.txt");

        #[test]
        fn example() {
            assert_eq!(number(2024, 11, Part::One, EXAMPLE), 55312);
        }

        /// "In this example, after blinking six times, you would have 22 stones."
        #[test]
        fn after_six_blinks() {
            assert_eq!(stones_after(EXAMPLE, 6), Ok(22));
        }
    }
}

/// [Day 12: Garden Groups](https://adventofcode.com/2024/day/12)
mod y2024_day12 {
    mod part1 {
        use crate::*;

        #[test]
        fn example_1() {
            assert_eq!(number(2024, 12, Part::One, include_str!("inputs/2024/day12-1.txt")), 140);
        }

        #[test]
        fn example_2() {
            assert_eq!(number(2024, 12, Part::One, include_str!("inputs/2024/day12-2.txt")), 772);
        }

        #[test]
        fn example_3() {
            assert_eq!(number(2024, 12, Part::One, include_str!("inputs/2024/day12-3.txt")), 1930);
        }
    }
    mod part2 {
        use crate::*;

        #[test]
        fn example_1() {
            assert_eq!(number(2024, 12, Part::Two, include_str!("inputs/2024/day12-1.txt")), 80);
        }

        #[test]
        fn example_2() {
            assert_eq!(number(2024, 12, Part::Two, include_str!("inputs/2024/day12-2.txt")), 436);
        }

        #[test]
        fn example_3() {
            assert_eq!(number(2024, 12, Part::Two, include_str!("inputs/2024/day12-3.txt")), 1206);
        }

        #[test]
        fn example_4() {
            assert_eq!(number(2024, 12, Part::Two, include_str!("inputs/2024/day12-4.txt")), 236);
        }

        #[test]
        fn example_5() {
            assert_eq!(number(2024, 12, Part::Two, include_str!("inputs/2024/day12-5.txt")), 368);
        }
    }
}

/// [Day 13: Claw Contraption](https://adventofcode.com/2024/day/13)
mod y2024_day13 {
    mod part1 {
        use crate::*;

        #[test]
        fn example() {
            assert_eq!(number(2024, 13, Part::One, include_str!("inputs/2024/day13.txt")), 480);
        }
    }
    mod part2 {
        use crate::*;

        #[test]
        fn example() {
            assert_eq!(number(2024, 13, Part::Two, include_str!("inputs/2024/day13.txt")), 875318608908);
        }
    }
}

/// [Day 15: Warehouse Woes](https://adventofcode.com/2024/day/15)
mod y2024_day15 {
    mod part1 {
        use crate::*;

        #[test]
        fn example_1() {
            assert_eq!(number(2024, 15, Part::One, include_str!("inputs/2024/day15-1.txt")), 2028);
        }

        #[test]
        fn example_2() {
            assert_eq!(number(2024, 15, Part::One, include_str!("inputs/2024/day15-2.txt")), 10092);
        }
    }
    mod part2 {
        use crate::*;

        #[test]
        fn example_2() {
            assert_eq!(number(2024, 15, Part::Two, include_str!("inputs/2024/day15-2.txt")), 9021);
        }

        #[test]
        fn example_3() {
            assert_eq!(number(2024, 15, Part::Two, include_str!("inputs/2024/day15-3.txt")), 618);
        }
    }
}

/// [Day 16: Reindeer Maze](https://adventofcode.com/2024/day/16)
mod y2024_day16 {
    mod part1 {
        use crate::*;

        #[test]
        fn example_1() {
            assert_eq!(number(2024, 16, Part::One, include_str!("inputs/2024/day16-1.txt")), 7036);
        }

        #[test]
        fn example_2() {
            assert_eq!(number(2024, 16, Part::One, include_str!("inputs/2024/day16-2.txt")), 11048);
        }
    }
    mod part2 {
        use crate::*;

        #[test]
        fn example_1() {
            assert_eq!(number(2024, 16, Part::Two, include_str!("inputs/2024/day16-1.txt")), 45);
        }

        #[test]
        fn example_2() {
            assert_eq!(number(2024, 16, Part::Two, include_str!("inputs/2024/day16-2.txt")), 64);
        }
    }
}

/// [Day 17: Chronospatial Computer](https://adventofcode.com/2024/day/17)
mod y2024_day17 {
    mod part1 {
        use crate::*;

        #[test]
        fn example() {
            assert_eq!(text(2024, 17, Part::One, include_str!("inputs/2024/day17-1.txt")), "4,6,3,5,6,3,5,2,1,0");
        }
    }
    mod part2 {
        use crate::*;

        #[test]
        fn example() {
            assert_eq!(number(2024, 17, Part::Two, include_str!("inputs/2024/day17-2.txt")), 117440);
        }
    }
}

/// [Day 19: Linen Layout](https://adventofcode.com/2024/day/19)
mod y2024_day19 {
    mod part1 {
        use crate::*;

        #[test]
        fn example() {
            assert_eq!(number(2024, 19, Part::One, include_str!("inputs/2024/day19.txt")), 6);
        }
    }
    mod part2 {
        use crate::*;

        #[test]
        fn example() {
            assert_eq!(number(2024, 19, Part::Two, include_str!("inputs/2024/day19.txt")), 16);
        }
    }
}

/// [Day 21: Keypad Conundrum](https://adventofcode.com/2024/day/21)
mod y2024_day21 {
    mod part1 {
        use crate::*;
        use advent::y2024::day21::complexity;

        #[test]
        fn example() {
            assert_eq!(number(2024, 21, Part::One, include_str!("inputs/2024/day21.txt")), 126384);
        }

        /// The length of the shortest sequence for `029A` is 68
        #[test]
        fn single_code() {
            assert_eq!(complexity("029A", 2), Ok(68 * 29));
        }
    }
    mod part2 {
        use crate::*;

        #[test]
        fn example() {
            assert_eq!(number(2024, 21, Part::Two, include_str!("inputs/2024/day21.txt")), 154115708116294);
        }
    }
}

/// [Day 23: LAN Party](https://adventofcode.com/2024/day/23)
mod y2024_day23 {
    mod part1 {
        use crate::*;

        #[test]
        fn example() {
            assert_eq!(number(2024, 23, Part::One, include_str!("inputs/2024/day23.txt")), 7);
        }
    }
    mod part2 {
        use crate::*;

        #[test]
        fn example() {
            assert_eq!(text(2024, 23, Part::Two, include_str!("inputs/2024/day23.txt")), "co,de,ka,ta");
        }
    }
}

/// [Day 14: Restroom Redoubt](https://adventofcode.com/2024/day/14)
mod y2024_day14 {
    mod part1 {
        use advent::y2024::day14::safety_factor;
        const EXAMPLE: &str = include_str!("inputs/2024/day14.txt");

        /// "In this example, the quadrants contain 1, 3, 4, and 1 robot. Multiplying these together
        /// gives a total safety factor of 12."
        #[test]
        fn small_space() {
            assert_eq!(safety_factor(EXAMPLE, 7, 11), Ok(12));
        }
    }
}

/// [Day 18: RAM Run](https://adventofcode.com/2024/day/18)
mod y2024_day18 {
    mod part1 {
        use advent::y2024::day18::steps_to_exit;
        const EXAMPLE: &str = include_str!("inputs/2024/day18.txt");

        /// "Simulating the falling bytes ... after just the first 12 bytes have corrupted locations
        /// in your memory space ... the shortest path would take 22 steps."
        #[test]
        fn first_12_bytes() {
            assert_eq!(steps_to_exit(EXAMPLE, 6, 12), Ok(22));
        }
    }
    mod part2 {
        use advent::y2024::day18::first_blocker;
        const EXAMPLE: &str = include_str!("inputs/2024/day18.txt");

        /// "the first byte that prevents the exit from being reachable from your starting position
        /// is at 6,1"
        #[test]
        fn blocking_byte() {
            assert_eq!(first_blocker(EXAMPLE, 6).as_deref(), Ok("6,1"));
        }
    }
}

/// [Day 20: Race Condition](https://adventofcode.com/2024/day/20)
mod y2024_day20 {
    mod part1 {
        use advent::y2024::day20::count_cheats;
        const EXAMPLE: &str = include_str!("inputs/2024/day20.txt");

        /// "There are 14 cheats that save 2 picoseconds ... One cheat saves 64 picoseconds."
        #[test]
        fn short_cheats() {
            assert_eq!(count_cheats(EXAMPLE, 2, 2), Ok(44));
            assert_eq!(count_cheats(EXAMPLE, 2, 64), Ok(1));
        }
    }
    mod part2 {
        use advent::y2024::day20::count_cheats;
        const EXAMPLE: &str = include_str!("inputs/2024/day20.txt");

        /// "There are 3 cheats that save 76 picoseconds."
        #[test]
        fn long_cheats() {
            assert_eq!(count_cheats(EXAMPLE, 20, 50), Ok(285));
            assert_eq!(count_cheats(EXAMPLE, 20, 76), Ok(3));
        }
    }
}

/// The 3-bit computer itself, from [Day 17: Chronospatial Computer](https://adventofcode.com/2024/day/17)
mod chronospatial {
    use advent::computer::trace::TracedInstr;
    use advent::computer::{Computer, OpCode, Registers, disassemble, parse_listing};

    /// "If register C contains 9, the program 2,6 would set register B to 1."
    #[test]
    fn bst_from_c() {
        let mut computer = Computer::new(Registers::new(0, 0, 9), [2, 6]);
        computer.run().unwrap();
        assert_eq!(computer.registers().b, 1);
    }

    /// "If register A contains 2024, the program 0,1,5,4,3,0 would output 4,2,5,6,7,7,7,7,3,1,0
    /// and leave 0 in register A."
    #[test]
    fn traced_countdown() {
        let mut computer = Computer::new(Registers::new(2024, 0, 0), [0, 1, 5, 4, 3, 0]);
        computer.start_trace();
        let output = computer.run().unwrap();
        assert_eq!(output, [4, 2, 5, 6, 7, 7, 7, 7, 3, 1, 0]);
        assert_eq!(computer.registers().a, 0);
        let trace = computer.end_trace().unwrap();
        let ops: Vec<OpCode> = trace.0.iter().take(3).map(TracedInstr::op_code).collect();
        assert_eq!(ops, [OpCode::Adv, OpCode::Out, OpCode::Jnz]);
        assert_eq!(trace.outputs().collect::<Vec<_>>(), output);
    }

    /// "If register B contains 2024 and register C contains 43690, the program 4,0 would set
    /// register B to 44354."
    #[test]
    fn bxc() {
        let mut computer = Computer::new(Registers::new(0, 2024, 43690), [4, 0]);
        computer.run().unwrap();
        assert_eq!(computer.registers().b, 44354);
    }

    #[test]
    fn logged_run() {
        let listing = parse_listing(include_str!("inputs/2024/day17-1.txt")).unwrap();
        let mut log = Vec::new();
        let mut computer = Computer::new(listing.registers, listing.program);
        computer.log_with(&mut log);
        let output = computer.run().unwrap();
        drop(computer);
        let log = String::from_utf8(log).unwrap();
        assert_eq!(log.lines().filter(|line| line.contains("=>")).count(), output.len());
    }

    #[test]
    fn disassembled_example() {
        let listing = parse_listing(include_str!("inputs/2024/day17-2.txt")).unwrap();
        assert_eq!(disassemble(&listing.program), "0: adv 3\n2: out a\n4: jnz 0\n");
    }
}
