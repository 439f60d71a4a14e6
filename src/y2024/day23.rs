// SPDX-FileCopyrightText: 2026 Eli Array Minkoff
//
// SPDX-License-Identifier: 0BSD

//! [Day 23: LAN Party](https://adventofcode.com/2024/day/23)

use std::collections::{BTreeSet, HashMap, HashSet};

use itertools::Itertools;

use crate::{OrMalformed, PuzzleError};

type Network<'a> = HashMap<&'a str, HashSet<&'a str>>;

fn network(input: &str) -> Result<Network<'_>, PuzzleError> {
    let mut network = Network::new();
    for line in input.lines() {
        let (a, b) = line.trim().split_once('-').or_malformed("expected a-b")?;
        network.entry(a).or_default().insert(b);
        network.entry(b).or_default().insert(a);
    }
    Ok(network)
}

/// Find all the sets of three inter-connected computers. How many contain at least one computer
/// with a name that starts with `t`?
pub fn part1(input: &str) -> Result<usize, PuzzleError> {
    let network = network(input)?;
    let mut triangles = HashSet::new();
    for (&a, links) in network.iter().filter(|(name, _)| name.starts_with('t')) {
        for (&b, &c) in links.iter().tuple_combinations() {
            if network[b].contains(c) {
                let mut triangle = [a, b, c];
                triangle.sort_unstable();
                triangles.insert(triangle);
            }
        }
    }
    Ok(triangles.len())
}

/// The Bron–Kerbosch algorithm with pivoting, keeping the largest clique found so far in `best`
fn largest_clique<'a>(
    network: &Network<'a>,
    clique: &mut Vec<&'a str>,
    mut candidates: BTreeSet<&'a str>,
    mut excluded: BTreeSet<&'a str>,
    best: &mut Vec<&'a str>,
) {
    if candidates.is_empty() && excluded.is_empty() {
        if clique.len() > best.len() {
            best.clone_from(clique);
        }
        return;
    }
    let Some(pivot) = candidates
        .iter()
        .chain(&excluded)
        .max_by_key(|v| network[*v].len())
        .copied()
    else {
        return;
    };
    let skip = &network[pivot];
    let to_try: Vec<&str> = candidates.iter().filter(|v| !skip.contains(*v)).copied().collect();
    for v in to_try {
        let links = &network[v];
        clique.push(v);
        largest_clique(
            network,
            clique,
            candidates.iter().filter(|n| links.contains(*n)).copied().collect(),
            excluded.iter().filter(|n| links.contains(*n)).copied().collect(),
            best,
        );
        clique.pop();
        candidates.remove(v);
        excluded.insert(v);
    }
}

/// What is the password to get into the LAN party?
///
/// The password is the name of every computer at the LAN party, sorted alphabetically, then
/// joined together with commas.
pub fn part2(input: &str) -> Result<String, PuzzleError> {
    let network = network(input)?;
    let mut best = Vec::new();
    largest_clique(
        &network,
        &mut Vec::new(),
        network.keys().copied().collect(),
        BTreeSet::new(),
        &mut best,
    );
    best.sort_unstable();
    Ok(best.join(","))
}
