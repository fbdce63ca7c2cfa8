use super::*;

use proptest::prelude::*;
use std::collections::{BTreeMap, BTreeSet};

type Path = Vec<u8>;

/// Checks the shape of the tree against the set of paths which are supposed to exist in it.
fn validate_tree(t: &PathTree<u8, u64>, nodes: &BTreeSet<Path>, values: &BTreeMap<Path, u64>) {
    let mut visited: Vec<Path> = Vec::new();
    assert!(t.range_all(|node| {
        let path: Path = node.path().into_iter().copied().collect();
        assert_eq!(
            node.depth(),
            path.len() as isize - 1,
            "depth must be one less than the path length"
        );
        assert_eq!(node.value(), values.get(&path), "value mismatch at {:?}", path);
        visited.push(path);
        true
    }));

    let visited_set: BTreeSet<Path> = visited.iter().cloned().collect();
    assert_eq!(visited_set.len(), visited.len(), "a node was visited twice");
    assert_eq!(&visited_set, nodes);
    assert_eq!(t.len(), nodes.len());

    // Post-order: every node comes after all of its descendants
    for (i, path) in visited.iter().enumerate() {
        for later in &visited[i + 1..] {
            assert!(
                !(later.len() > path.len() && later.starts_with(path)),
                "{:?} was visited before its descendant {:?}",
                path,
                later
            );
        }
    }

    let max_len = nodes.iter().map(Vec::len).max().unwrap_or(0);
    for level in 0..=max_len {
        let mut at_level = BTreeSet::new();
        assert!(t.range_level(level, |node| {
            at_level.insert(node.path().into_iter().copied().collect::<Path>());
            true
        }));
        let expected: BTreeSet<Path> = nodes
            .iter()
            .filter(|path| path.len() == level + 1)
            .cloned()
            .collect();
        assert_eq!(at_level, expected, "level {} mismatch", level);

        let mut limited = BTreeSet::new();
        assert!(t.range_limit(level, |node| {
            limited.insert(node.path().into_iter().copied().collect::<Path>());
            true
        }));
        let expected: BTreeSet<Path> = nodes
            .iter()
            .filter(|path| path.len() <= level)
            .cloned()
            .collect();
        assert_eq!(limited, expected, "depth limit {} mismatch", level);
    }
}

/// The deepest prefix of the path which exists in the tree, as `get` reports it.
fn deepest_match<'a>(
    nodes: &BTreeSet<Path>,
    values: &'a BTreeMap<Path, u64>,
    path: &[u8],
) -> (isize, Option<&'a u64>) {
    if path.is_empty() {
        return (-1, values.get(path));
    }
    (1..=path.len())
        .rev()
        .find(|&len| nodes.contains(&path[..len]))
        .map_or((-1, None), |len| (len as isize - 1, values.get(&path[..len])))
}

#[derive(Clone, Debug)]
enum Op {
    Set(Path, u64),
    Del(Path),
    Fetch(Path),
    Get(Path),
    Clear,
}

fn path_strategy() -> impl Strategy<Value = Path> + Clone {
    // A tiny alphabet so that paths share prefixes often
    prop::collection::vec(0u8..4, 0..=4)
}

fn ops_strategy() -> impl Strategy<Value = Vec<Op>> {
    let path = path_strategy();
    let op = prop_oneof![
        40 => (path.clone(), any::<u64>()).prop_map(|(p, v)| Op::Set(p, v)),
        20 => path.clone().prop_map(Op::Del),
        20 => path.clone().prop_map(Op::Fetch),
        19 => path.clone().prop_map(Op::Get),
        1 => Just(Op::Clear),
    ];
    prop::collection::vec(op, 0..=300)
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 256,
        max_shrink_iters: 10_000,
        .. ProptestConfig::default()
    })]

    #[test]
    fn prop_equivalence(ops in ops_strategy()) {
        let mut t: PathTree<u8, u64> = PathTree::new();
        let mut nodes: BTreeSet<Path> = BTreeSet::new();
        let mut values: BTreeMap<Path, u64> = BTreeMap::new();

        for op in ops {
            match op {
                Op::Set(path, value) => {
                    let old_t = t.set(path.iter().copied(), value);
                    for len in 1..=path.len() {
                        nodes.insert(path[..len].to_vec());
                    }
                    let old_m = values.insert(path, value);
                    prop_assert_eq!(old_t, old_m);
                }
                Op::Del(path) => {
                    if path.is_empty() {
                        prop_assert_eq!(t.try_del(&path), Err(TryDelError::EmptyPath));
                        continue;
                    }
                    let removed_t = t.del(&path);
                    let removed_m = nodes.contains(&path);
                    prop_assert_eq!(removed_t, removed_m);
                    nodes.retain(|node| !node.starts_with(&path));
                    values.retain(|node, _| !node.starts_with(&path));
                }
                Op::Fetch(path) => {
                    prop_assert_eq!(t.fetch(&path), values.get(&path));
                    prop_assert_eq!(t.contains_path(&path), path.is_empty() || nodes.contains(&path));
                }
                Op::Get(path) => {
                    prop_assert_eq!(t.get(&path), deepest_match(&nodes, &values, &path));
                }
                Op::Clear => {
                    t.clear();
                    nodes.clear();
                    values.clear();
                }
            }

            prop_assert_eq!(t.len(), nodes.len());
        }

        validate_tree(&t, &nodes, &values);
    }

    #[test]
    fn prop_holes_are_reused(paths in prop::collection::vec(path_strategy(), 1..=50)) {
        let mut t: PathTree<u8, u64> = PathTree::new();
        for path in &paths {
            t.set(path.iter().copied(), 0);
        }
        let peak = t.len();
        for path in &paths {
            if !path.is_empty() {
                t.del(&path[..1]);
            }
        }
        prop_assert!(t.is_empty());
        prop_assert_eq!(t.num_holes(), peak);

        // Rebuilding the same tree fills every hole without growing the storage
        for path in &paths {
            t.set(path.iter().copied(), 0);
        }
        prop_assert_eq!(t.len(), peak);
        prop_assert!(t.is_dense());
    }
}
