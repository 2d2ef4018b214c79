use plain_bst::{Key, KeyCollector, Node, Tree, TreeError};
use quickcheck_macros::quickcheck;

use std::collections::BTreeSet;

use crate::Op;

fn build(xs: &[i16]) -> Tree {
    xs.iter().copied().map(Key::from).collect()
}

fn in_order(tree: &Tree) -> Vec<Key> {
    let mut keys = KeyCollector::new();
    tree.in_order(&mut keys);
    keys.into_keys()
}

/// Applies a set of operations to a tree and a set.
/// This way we can ensure that after a random smattering of inserts
/// and deletes we have the same set of keys in both.
fn do_ops(ops: &[Op], mut bst: Tree, set: &mut BTreeSet<Key>) -> Tree {
    for op in ops {
        match *op {
            Op::Insert(k) => {
                let k = Key::from(k);
                match bst.insert(k) {
                    Ok(()) => assert!(set.insert(k)),
                    Err(TreeError::DuplicateKey(dup)) => {
                        assert_eq!(dup, k);
                        assert!(set.contains(&k));
                    }
                }
            }
            Op::Delete(k) => {
                let k = Key::from(k);
                assert_eq!(bst.delete(k), set.remove(&k));
            }
        }
    }

    bst
}

#[quickcheck]
fn fuzz_multiple_operations_i16(ops: Vec<Op>) -> bool {
    let mut set = BTreeSet::new();

    let tree = do_ops(&ops, Tree::new(), &mut set);
    tree.is_bst() && in_order(&tree) == set.into_iter().collect::<Vec<_>>()
}

#[quickcheck]
fn contains(xs: Vec<i16>) -> bool {
    let tree = build(&xs);

    xs.iter().all(|x| tree.contains(Key::from(*x)))
}

#[quickcheck]
fn contains_not(xs: Vec<i16>, nots: Vec<i16>) -> bool {
    let tree = build(&xs);
    let added: BTreeSet<_> = xs.into_iter().collect();
    let nots: BTreeSet<_> = nots.into_iter().collect();
    let mut nots = nots.difference(&added);

    nots.all(|x| tree.find(Key::from(*x)).is_none())
}

#[quickcheck]
fn with_deletions(xs: Vec<i16>, deletes: Vec<i16>) -> bool {
    let mut tree = build(&xs);
    for delete in &deletes {
        tree.delete(Key::from(*delete));
    }

    let mut still_present = xs;
    for delete in &deletes {
        // We may have inserted the same value multiple times - delete each one.
        while let Some(pos) = still_present.iter().position(|x| x == delete) {
            still_present.swap_remove(pos);
        }
    }

    tree.is_bst()
        && deletes.iter().all(|x| !tree.contains(Key::from(*x)))
        && still_present.iter().all(|x| tree.contains(Key::from(*x)))
}

#[quickcheck]
fn in_order_is_strictly_ascending(xs: Vec<i16>) -> bool {
    in_order(&build(&xs)).windows(2).all(|w| w[0] < w[1])
}

#[quickcheck]
fn pre_order_visits_parents_first(xs: Vec<i16>) -> bool {
    let tree = build(&xs);
    let mut seen = BTreeSet::new();
    let mut ok = true;

    tree.pre_order(&mut |node: &Node, _level: usize| {
        ok &= tree
            .find_parent(node)
            .is_none_or(|p| seen.contains(&p.key()));
        seen.insert(node.key());
    });

    ok
}

#[quickcheck]
fn post_order_visits_children_first(xs: Vec<i16>) -> bool {
    let tree = build(&xs);
    let mut seen = BTreeSet::new();
    let mut ok = true;

    tree.post_order(&mut |node: &Node, _level: usize| {
        let children = [node.left(), node.right()];
        ok &= children.iter().flatten().all(|c| seen.contains(&c.key()));
        seen.insert(node.key());
    });

    ok
}

#[quickcheck]
fn levels_are_depths(xs: Vec<i16>) -> bool {
    let tree = build(&xs);
    let mut ok = true;

    tree.in_order(&mut |node: &Node, level: usize| ok &= tree.depth(node) == level);

    ok
}

#[quickcheck]
fn insert_then_delete_round_trips(xs: Vec<i16>, key: i16) -> bool {
    let mut tree = build(&xs);
    let key = Key::from(key);
    if tree.contains(key) {
        return true;
    }

    let (nodes, leaves) = (tree.num_nodes(), tree.num_leaves());

    tree.insert(key).is_ok()
        && tree.num_nodes() == nodes + 1
        && tree.delete(key)
        && tree.num_nodes() == nodes
        && tree.num_leaves() == leaves
        && tree.is_bst()
}
