//! Loop detection over the source -> destination graph.

use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fmt;
use std::str::FromStr;

use super::{Issue, KeyedRule, SourceIndex};

/// How far loop detection looks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LoopDetection {
    /// Only mutual pairs (`A -> B`, `B -> A`) and self-redirects.
    Pairs,
    /// Every cycle, of any length.
    #[default]
    Cycles,
}

impl fmt::Display for LoopDetection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(match self {
            LoopDetection::Pairs => "pairs",
            LoopDetection::Cycles => "cycles",
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown loop detection mode {0:?} (expected \"pairs\" or \"cycles\")")]
pub struct UnknownLoopDetection(pub String);

impl FromStr for LoopDetection {
    type Err = UnknownLoopDetection;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "pairs" => Ok(LoopDetection::Pairs),
            "cycles" => Ok(LoopDetection::Cycles),
            _ => Err(UnknownLoopDetection(s.to_string())),
        }
    }
}

pub(crate) fn detect(
    keyed: &[KeyedRule<'_>],
    sources: &SourceIndex<'_>,
    mode: LoopDetection,
) -> Vec<Issue> {
    match mode {
        LoopDetection::Pairs => detect_pairs(keyed, sources),
        LoopDetection::Cycles => detect_cycles(keyed, sources),
    }
}

/// Rule `i` and the first rule keyed by its destination point back at each
/// other. Each unordered pair is reported once, at its earlier rule.
fn detect_pairs(keyed: &[KeyedRule<'_>], sources: &SourceIndex<'_>) -> Vec<Issue> {
    let mut seen: HashSet<(usize, usize)> = HashSet::new();
    let mut issues = Vec::new();
    for (i, k) in keyed.iter().enumerate() {
        let Some(&target) = sources.get(k.to.as_str()) else {
            continue;
        };
        if keyed[target].to != k.from {
            continue;
        }
        if !seen.insert((i.min(target), i.max(target))) {
            continue;
        }
        if target == i {
            issues.push(Issue::cycle(&[k.rule]));
        } else {
            issues.push(Issue::cycle(&[k.rule, keyed[target].rule]));
        }
    }
    issues
}

#[derive(Clone, Copy, PartialEq, Eq)]
enum Mark {
    Unvisited,
    OnPath,
    Done,
}

/// Cycle search in the functional graph formed by the first rule of every
/// source (out-degree is at most one). Iterative, each node visited once.
fn detect_cycles(keyed: &[KeyedRule<'_>], sources: &SourceIndex<'_>) -> Vec<Issue> {
    let next = |i: usize| sources.get(keyed[i].to.as_str()).copied();

    let mut marks = vec![Mark::Unvisited; keyed.len()];
    let mut cycles: Vec<Vec<usize>> = Vec::new();
    let mut path: Vec<usize> = Vec::new();

    for start in 0..keyed.len() {
        // Duplicates are not graph nodes; their source already belongs to an earlier rule.
        if sources.get(keyed[start].from.as_str()) != Some(&start) || marks[start] != Mark::Unvisited {
            continue;
        }

        path.clear();
        let mut cur = Some(start);
        while let Some(node) = cur {
            match marks[node] {
                Mark::Unvisited => {
                    marks[node] = Mark::OnPath;
                    path.push(node);
                    cur = next(node);
                }
                Mark::OnPath => {
                    if let Some(pos) = path.iter().position(|&n| n == node) {
                        cycles.push(rotate_to_earliest(&path[pos..]));
                    }
                    break;
                }
                Mark::Done => break,
            }
        }
        for &node in &path {
            marks[node] = Mark::Done;
        }
    }

    cycles.sort_by_key(|c| c[0]);
    cycles
        .iter()
        .map(|c| {
            let rules: Vec<_> = c.iter().map(|&i| keyed[i].rule).collect();
            Issue::cycle(&rules)
        })
        .collect()
}

/// Rotates a cycle so it starts at its earliest rule in input order.
fn rotate_to_earliest(cycle: &[usize]) -> Vec<usize> {
    let min_pos = cycle
        .iter()
        .enumerate()
        .min_by_key(|&(_, n)| *n)
        .map(|(pos, _)| pos)
        .unwrap_or(0);
    cycle[min_pos..]
        .iter()
        .chain(&cycle[..min_pos])
        .copied()
        .collect()
}
