use super::*;
use crate::{
    storage::{SparseArrayVec, Slot},
    traversal::Traversable,
    TryDelError,
};

type StrTree = PathTree<&'static str, i32>;

/// ```text
/// d (4)
/// └─ c (3)
///    ├─ b (2)
///    │  └─ a (1)
///    └─ x (80)
/// ```
fn travel_fixture() -> StrTree {
    let mut tree = PathTree::new();
    tree.set("d/c/b/a".split('/'), 1);
    tree.set("d/c/b".split('/'), 2);
    tree.set(["d", "c"], 3);
    tree.set(["d"], 4);
    tree.set(["d", "c", "x"], 80);
    tree
}

fn post_order_keys(tree: &StrTree) -> Vec<&'static str> {
    let mut keys = Vec::new();
    assert!(tree.range_all(|node| {
        keys.extend(node.key().copied());
        true
    }));
    keys
}
fn limited_keys(tree: &StrTree, max_depth: usize) -> Vec<&'static str> {
    let mut keys = Vec::new();
    assert!(tree.range_limit(max_depth, |node| {
        keys.extend(node.key().copied());
        true
    }));
    keys
}
fn level_keys(tree: &StrTree, level: usize) -> Vec<&'static str> {
    let mut keys = Vec::new();
    assert!(tree.range_level(level, |node| {
        keys.extend(node.key().copied());
        true
    }));
    keys
}
fn child_keys(node: NodeRef<'_, &'static str, i32>) -> Vec<&'static str> {
    node.children()
        .filter_map(|child| child.key().copied())
        .collect()
}

#[test]
fn integer_keys() {
    let mut tree: PathTree<i32, &str> = PathTree::new();
    tree.set([1, 2, 3], "hello");
    tree.set([1, 2], "world");
    tree.set([1], "idk");

    assert_eq!(tree.fetch(&[1, 2, 3]), Some(&"hello"));
    assert_eq!(tree.fetch(&[1, 2]), Some(&"world"));
    assert_eq!(tree.fetch(&[1]), Some(&"idk"));
    assert_eq!(tree.len(), 3);
}

#[test]
fn set_overwrites() {
    let mut tree = StrTree::new();
    assert_eq!(tree.set("d/c/b/a".split('/'), 1), None);
    assert_eq!(tree.set("d/c/b/a".split('/'), 2), Some(1));
    assert_eq!(tree.len(), 4);
    assert_eq!(tree.fetch(&["d", "c", "b", "a"]), Some(&2));
}

#[test]
fn get_deepest_match() {
    let mut tree = StrTree::new();
    tree.set("d/c/b/a".split('/'), 1);
    tree.set("d/c/b/a".split('/'), 2);
    tree.set("d/c/b".split('/'), 8);
    tree.set(["d", "c"], 3);
    tree.set(["d"], 4);

    assert_eq!(tree.get(&["d", "c", "b", "a"]), (3, Some(&2)));
    assert_eq!(tree.get(&["d", "c"]), (1, Some(&3)));
    assert_eq!(tree.get(&["d"]), (0, Some(&4)));
    assert_eq!(tree.get(&["d", "c", "b", "a", "z", "s"]), (3, Some(&2)));

    assert!(tree.del(&["d", "c", "b", "a"]));
    assert_eq!(tree.fetch(&["d", "c", "b", "a"]), None);
    assert_eq!(tree.fetch(&["d", "c", "b"]), Some(&8));

    assert!(tree.del(&["d", "c"]));
    assert_eq!(tree.fetch(&["d", "c", "b"]), None);
    assert_eq!(tree.fetch(&["d", "c"]), None);
    assert_eq!(tree.fetch(&["d"]), Some(&4));
    assert_eq!(tree.get(&["d", "c", "b"]), (0, Some(&4)));
}

#[test]
fn get_without_match() {
    let mut tree = StrTree::new();
    assert_eq!(tree.get(&["q"]), (-1, None));

    tree.root_mut().set_value(7);
    assert_eq!(tree.get(&[] as &[&str]), (-1, Some(&7)));
    assert_eq!(tree.fetch(&[] as &[&str]), Some(&7));
    // A miss never reports the root's value
    assert_eq!(tree.get(&["q"]), (-1, None));
}

#[test]
fn structural_nodes() {
    let mut tree = StrTree::new();
    tree.set(["a", "b"], 1);

    assert_eq!(tree.get(&["a"]), (0, None));
    assert_eq!(tree.get(&["a", "z"]), (0, None));
    assert_eq!(tree.fetch(&["a"]), None);
    assert!(tree.contains_path(&["a"]));
    assert!(!tree.contains_path(&["a", "z"]));
    assert!(!tree.get_tree(&["a"]).has_value());
}

#[test]
fn travel() {
    let mut tree = travel_fixture();
    assert_eq!(tree.len(), 5);
    assert_eq!(post_order_keys(&tree), ["a", "b", "x", "c", "d"]);

    assert_eq!(limited_keys(&tree, 0), Vec::<&str>::new());
    assert_eq!(limited_keys(&tree, 1), ["d"]);
    assert_eq!(limited_keys(&tree, 2), ["c", "d"]);
    assert_eq!(limited_keys(&tree, 3), ["b", "x", "c", "d"]);

    assert_eq!(level_keys(&tree, 0), ["d"]);
    assert_eq!(level_keys(&tree, 1), ["c"]);
    assert_eq!(level_keys(&tree, 2), ["b", "x"]);
    assert_eq!(level_keys(&tree, 3), ["a"]);
    assert_eq!(level_keys(&tree, 4), Vec::<&str>::new());

    assert!(tree.del(&["d", "c", "x"]));
    assert_eq!(limited_keys(&tree, 2), ["c", "d"]);

    let mut visited = Vec::new();
    tree.range_all(|node| {
        visited.push((node.key().copied(), node.value().copied(), node.path()));
        true
    });
    assert_eq!(
        visited,
        [
            (Some("a"), Some(1), vec![&"d", &"c", &"b", &"a"]),
            (Some("b"), Some(2), vec![&"d", &"c", &"b"]),
            (Some("c"), Some(3), vec![&"d", &"c"]),
            (Some("d"), Some(4), vec![&"d"]),
        ],
    );
}

fn keys_below(tree: &StrTree, path: &[&str]) -> Vec<&'static str> {
    let mut keys = Vec::new();
    assert!(tree.range(path, |node| {
        keys.extend(node.key().copied());
        true
    }));
    keys
}

#[test]
fn range_below_path() {
    let tree = travel_fixture();
    assert_eq!(keys_below(&tree, &["d", "c"]), ["a", "b", "x"]);
    assert_eq!(keys_below(&tree, &["d", "c", "b"]), ["a"]);
    assert_eq!(keys_below(&tree, &["d", "c", "b", "a"]), Vec::<&str>::new());
    // Resolves to "b", the deepest existing node
    assert_eq!(keys_below(&tree, &["d", "c", "b", "q"]), ["a"]);
    // Nothing matches, so the traversal starts at the root
    assert_eq!(keys_below(&tree, &["q"]), ["a", "b", "x", "c", "d"]);
}

#[test]
fn early_stop() {
    let tree = travel_fixture();

    let mut visited = Vec::new();
    let completed = tree.range_all(|node| {
        visited.extend(node.key().copied());
        node.key() != Some(&"x")
    });
    assert!(!completed);
    assert_eq!(visited, ["a", "b", "x"]);

    visited.clear();
    let completed = tree.range_level(2, |node| {
        visited.extend(node.key().copied());
        false
    });
    assert!(!completed);
    assert_eq!(visited, ["b"]);

    visited.clear();
    let completed = tree.range_limit(2, |node| {
        visited.extend(node.key().copied());
        false
    });
    assert!(!completed);
    assert_eq!(visited, ["c"]);

    visited.clear();
    let completed = tree.range(&["d"], |node| {
        visited.extend(node.key().copied());
        node.key() != Some(&"b")
    });
    assert!(!completed);
    assert_eq!(visited, ["a", "b"]);
}

#[test]
fn del_missing() {
    let mut tree = travel_fixture();
    assert!(!tree.del(&["d", "q"]));
    assert!(!tree.del(&["q"]));
    assert!(!tree.del(&["d", "c", "b", "a", "z"]));
    assert_eq!(tree.len(), 5);

    assert_eq!(tree.try_del(&[] as &[&str]), Err(TryDelError::EmptyPath));
    assert_eq!(tree.try_del(&["zz"]), Err(TryDelError::NotFound));
    assert_eq!(tree.try_del(&["d"]), Ok(()));
    assert!(tree.is_empty());
    assert_eq!(post_order_keys(&tree), Vec::<&str>::new());
}

#[test]
#[should_panic(expected = "cannot delete the root node")]
fn del_empty_path() {
    let mut tree = travel_fixture();
    tree.del(&[] as &[&str]);
}

#[test]
fn del_middle_sibling() {
    let mut tree = StrTree::new();
    for key in &["a", "b", "c"] {
        tree.set([*key], 0);
    }
    tree.set(["b", "inner"], 1);

    assert!(tree.del(&["b"]));
    assert_eq!(child_keys(tree.root()), ["a", "c"]);
    let last = tree.root().last_child().expect("root has children");
    assert_eq!(last.key(), Some(&"c"));
    assert_eq!(last.prev_sibling().and_then(|node| node.key().copied()), Some("a"));

    assert!(tree.del(&["c"]));
    assert!(tree.del(&["a"]));
    assert!(tree.root().is_leaf());
    assert!(tree.root().last_child().is_none());
}

#[test]
fn children_keep_insertion_order() {
    let mut tree = StrTree::new();
    tree.set(["b"], 1);
    tree.set(["a"], 2);
    tree.set(["c"], 3);
    assert_eq!(child_keys(tree.root()), ["b", "a", "c"]);

    tree.del(&["a"]);
    assert_eq!(child_keys(tree.root()), ["b", "c"]);

    tree.set(["a"], 4);
    assert_eq!(child_keys(tree.root()), ["b", "c", "a"]);
    assert_eq!(post_order_keys(&tree), ["b", "c", "a"]);
}

#[test]
fn holes_get_reused() {
    let mut tree = travel_fixture();
    assert!(tree.is_dense());

    tree.del(&["d", "c"]);
    assert_eq!(tree.len(), 1);
    assert_eq!(tree.num_holes(), 4);

    tree.set(["e", "f"], 5);
    assert_eq!(tree.len(), 3);
    assert_eq!(tree.num_holes(), 2);
    assert!(!tree.is_dense());
}

#[test]
fn node_refs() {
    let tree = travel_fixture();

    let root = tree.root();
    assert!(root.is_root());
    assert_eq!(root.depth(), -1);
    assert_eq!(root.key(), None);
    assert!(root.path().is_empty());

    let c = tree.get_tree(&["d", "c"]);
    assert_eq!(c.depth(), 1);
    assert_eq!(c.key(), Some(&"c"));
    assert_eq!(c.value(), Some(&3));
    assert_eq!(c.path(), [&"d", &"c"]);
    assert_eq!(c.parent().and_then(|node| node.key().copied()), Some("d"));
    assert_eq!(child_keys(c), ["b", "x"]);
    assert_eq!(c.children_keys().count(), 2);

    let b = c.first_child().expect("c has children");
    assert_eq!(
        b.next_sibling().map(NodeRef::into_raw_key),
        c.last_child().map(NodeRef::into_raw_key),
    );
    assert_eq!(b.siblings().count(), 2);
    assert_eq!(NodeRef::new_raw(&tree, b.raw_key()).map(|node| node.depth()), Some(2));
    assert!(NodeRef::new_raw(&tree, 1000).is_none());

    // Deepest match, just like `get`
    assert_eq!(tree.get_tree(&["d", "c", "z"]).raw_key(), c.raw_key());
    assert!(tree.get_tree(&["z"]).is_root());
    assert!(tree.fetch_tree(&["d", "c", "z"]).is_none());
    assert_eq!(tree.fetch_tree(&["d", "c"]).map(NodeRef::into_raw_key), Some(c.raw_key()));
}

#[test]
fn node_ref_mut() {
    let mut tree = travel_fixture();

    let mut d = tree.get_tree_mut(&["d"]);
    assert_eq!(d.take_value(), Some(4));
    assert_eq!(d.value(), None);
    let mut c = d.first_child_mut().expect("d has children");
    *c.value_mut().expect("c has a value") += 10;
    assert_eq!(c.depth(), 1);
    assert!(c.next_sibling_mut().is_none());
    assert_eq!(NodeRef::from(d).depth(), 0);

    assert_eq!(tree.fetch(&["d"]), None);
    assert!(tree.contains_path(&["d"]));
    assert_eq!(tree.fetch(&["d", "c"]), Some(&13));

    *tree.fetch_mut(&["d", "c", "x"]).expect("x has a value") = 81;
    assert_eq!(tree.get(&["d", "c", "x", "y"]), (2, Some(&81)));
    assert!(tree.fetch_mut(&["d", "nope"]).is_none());

    let mut a = tree.get_tree_mut(&["d", "c", "b", "a"]);
    assert_eq!(a.parent_mut().and_then(|mut b| b.set_value(20)), Some(2));
    assert_eq!(a.as_node_ref().path(), [&"d", &"c", &"b", &"a"]);
    let value = a.into_value_mut().expect("a has a value");
    *value = 100;
    assert_eq!(tree.fetch(&["d", "c", "b"]), Some(&20));
    assert_eq!(tree.fetch(&["d", "c", "b", "a"]), Some(&100));
}

#[test]
fn clear() {
    let mut tree = travel_fixture();
    tree.root_mut().set_value(1);
    tree.clear();

    assert!(tree.is_empty());
    assert!(tree.root().is_leaf());
    assert_eq!(tree.root().value(), None);
    assert_eq!(tree.get(&["d"]), (-1, None));

    tree.set(["d"], 2);
    assert_eq!(tree.fetch(&["d"]), Some(&2));
}

#[test]
fn collect_from_paths() {
    let mut tree: StrTree = vec![(vec!["a", "b"], 1), (vec!["a"], 2)]
        .into_iter()
        .collect();
    assert_eq!(tree.fetch(&["a", "b"]), Some(&1));
    assert_eq!(tree.fetch(&["a"]), Some(&2));

    tree.extend(vec![(vec!["a", "c"], 3), (vec!["a", "b"], 4)]);
    assert_eq!(tree.len(), 3);
    assert_eq!(post_order_keys(&tree), ["b", "c", "a"]);
    assert_eq!(tree.fetch(&["a", "b"]), Some(&4));
}

#[test]
fn traversable_impl() {
    let tree = travel_fixture();
    let root = tree.cursor_to_root();
    assert_eq!(tree.num_children_of(&root), 1);

    let d = tree.nth_child_of(&root, 0).expect("root has a child");
    assert_eq!(tree.value_of(&d), Some(&4));
    assert_eq!(tree.parent_of(&d), Some(root));
    let c = tree.first_child_of(&d).expect("d has a child");
    assert_eq!(tree.children_of(&c).count(), 2);
    assert_eq!(tree.value_of(&root), None);
}

type SmallStorage = SparseArrayVec<Node<u8, u8>, [Slot<Node<u8, u8>>; 8]>;

#[test]
fn array_vec_storage() {
    let mut tree: PathTree<u8, u8, SmallStorage> = PathTree::new();
    tree.set([1, 2, 3], 3);
    tree.set([1, 4], 4);
    tree.set([5, 6, 7], 7);
    assert_eq!(tree.len(), 7);

    assert!(tree.del(&[5_u8]));
    assert_eq!(tree.num_holes(), 3);
    tree.set([1, 2, 8, 9], 9);
    tree.set([1, 10], 10);
    assert!(tree.is_dense());
    assert_eq!(tree.get(&[1_u8, 2, 8, 9, 10]), (3, Some(&9)));

    let mut keys = Vec::new();
    tree.range_all(|node| {
        keys.extend(node.key().copied());
        true
    });
    assert_eq!(keys, [3, 9, 8, 2, 4, 10, 1]);
}

#[test]
#[should_panic]
fn array_vec_storage_overflow() {
    let mut tree: PathTree<u8, u8, SmallStorage> = PathTree::new();
    tree.set(0..8, 0);
}

#[test]
fn capacity_management() {
    let mut tree: PathTree<u8, u8> = PathTree::with_capacity(4);
    assert!(tree.capacity() >= 4);
    tree.reserve(31);
    assert!(tree.capacity() >= 32);

    tree.set([1, 2, 3], 3);
    tree.shrink_to_fit();
    assert!(tree.capacity() >= 4);
    assert_eq!(tree.fetch(&[1_u8, 2, 3]), Some(&3));

    // Holes left by removal count as free capacity
    assert!(tree.del(&[1_u8]));
    let before = tree.capacity();
    tree.reserve(3);
    assert_eq!(tree.capacity(), before);
}

#[test]
fn array_vec_capacity() {
    let mut tree: PathTree<u8, u8, SmallStorage> = PathTree::new();
    assert_eq!(tree.capacity(), 8);
    // Room for 7 nodes besides the root
    tree.reserve(7);
    tree.shrink_to_fit();
    assert_eq!(tree.capacity(), 8);
}

#[test]
#[should_panic(expected = "ArrayVec does not support allocating memory")]
fn array_vec_reserve_overflow() {
    let mut tree: PathTree<u8, u8, SmallStorage> = PathTree::new();
    tree.set([1], 1);
    tree.reserve(7);
}
