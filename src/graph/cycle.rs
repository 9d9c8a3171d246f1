//! Reachability search used to reject cycle-closing edges

use std::collections::{BTreeSet, HashMap, HashSet};

/// Find a path `from -> ... -> to` following outgoing edges.
///
/// Iterative DFS; neighbours are visited in id order so the reported path is
/// stable for a given graph. Returns `None` when `to` is unreachable.
pub fn find_path(
    outgoing: &HashMap<String, BTreeSet<String>>,
    from: &str,
    to: &str,
) -> Option<Vec<String>> {
    if from == to {
        return Some(vec![from.to_string()]);
    }

    let mut parent: HashMap<&str, &str> = HashMap::new();
    let mut visited: HashSet<&str> = HashSet::new();
    let mut stack: Vec<&str> = vec![from];
    visited.insert(from);

    while let Some(current) = stack.pop() {
        let Some(next) = outgoing.get(current) else {
            continue;
        };

        // Reverse so the smallest id is popped first
        for neighbour in next.iter().rev() {
            let neighbour = neighbour.as_str();
            if !visited.insert(neighbour) {
                continue;
            }
            parent.insert(neighbour, current);
            if neighbour == to {
                return Some(rebuild_path(&parent, from, to));
            }
            stack.push(neighbour);
        }
    }

    None
}

fn rebuild_path(parent: &HashMap<&str, &str>, from: &str, to: &str) -> Vec<String> {
    let mut path = vec![to.to_string()];
    let mut cursor = to;
    while cursor != from {
        match parent.get(cursor) {
            Some(&prev) => {
                path.push(prev.to_string());
                cursor = prev;
            }
            None => break,
        }
    }
    path.reverse();
    path
}
