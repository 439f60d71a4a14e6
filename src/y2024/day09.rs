// SPDX-FileCopyrightText: 2026 Eli Array Minkoff
//
// SPDX-License-Identifier: 0BSD

//! [Day 9: Disk Fragmenter](https://adventofcode.com/2024/day/9)

use crate::PuzzleError;

/// A contiguous run of blocks on the disk
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Span {
    start: u64,
    len: u64,
}

/// The files on the disk, in order of ID, and the free space between them
fn disk_map(input: &str) -> Result<(Vec<Span>, Vec<Span>), PuzzleError> {
    let (mut files, mut gaps) = (Vec::new(), Vec::<Span>::new());
    let mut start = 0;
    for (i, c) in input.trim().chars().enumerate() {
        let len = u64::from(
            c.to_digit(10)
                .ok_or_else(|| PuzzleError::malformed(format!("{c:?} is not a digit")))?,
        );
        if i % 2 == 0 {
            files.push(Span { start, len });
        } else if let Some(prev) = gaps.last_mut()
            && prev.start + prev.len == start
        {
            // an empty file sits between this gap and the last, so they're one run of free space
            prev.len += len;
        } else {
            gaps.push(Span { start, len });
        }
        start += len;
    }
    Ok((files, gaps))
}

/// The checksum contribution of a file with ID `id`, which is the sum of `id * position` for each
/// of its blocks
const fn file_checksum(id: u64, file: Span) -> u64 {
    id * (file.len * file.start + file.len * file.len.saturating_sub(1) / 2)
}

/// Compact the amphipod's hard drive using the process he requested. What is the resulting
/// filesystem checksum?
///
/// Blocks are moved one at a time from the end of the disk to the leftmost free block.
pub fn part1(input: &str) -> Result<u64, PuzzleError> {
    let (files, _) = disk_map(input)?;
    let mut blocks: Vec<Option<u64>> = Vec::new();
    for (id, file) in (0..).zip(&files) {
        let gap = file.start as usize - blocks.len();
        blocks.extend(std::iter::repeat_n(None, gap));
        blocks.extend(std::iter::repeat_n(Some(id), file.len as usize));
    }
    let (mut front, mut back) = (0, blocks.len());
    while front < back {
        if blocks[front].is_some() {
            front += 1;
        } else if blocks[back - 1].is_none() {
            back -= 1;
        } else {
            blocks.swap(front, back - 1);
        }
    }
    Ok(blocks
        .iter()
        .zip(0..)
        .filter_map(|(id, pos)| id.map(|id| id * pos))
        .sum())
}

/// Start over, now compacting the amphipod's hard drive using this new method instead. What is the
/// resulting filesystem checksum?
///
/// Each file is moved once, in order of decreasing ID, to the leftmost span of free space that
/// can fit it, if that span is to the left of the file.
pub fn part2(input: &str) -> Result<u64, PuzzleError> {
    let (mut files, mut gaps) = disk_map(input)?;
    for file in files.iter_mut().rev() {
        let Some(gap) = gaps
            .iter_mut()
            .take_while(|g| g.start < file.start)
            .find(|g| g.len >= file.len)
        else {
            continue;
        };
        file.start = gap.start;
        gap.start += file.len;
        gap.len -= file.len;
    }
    Ok((0..).zip(files).map(|(id, f)| file_checksum(id, f)).sum())
}
