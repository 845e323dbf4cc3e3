use bst_traversal::{Tree, TraversalOrder};
use quickcheck_macros::quickcheck;

use std::collections::HashSet;

use crate::{init_logging, Op};

/// Applies a set of operations to a tree and a sorted vector.
/// This way we can ensure that after a random smattering of adds
/// and removes we hold the same multiset of values as the model.
fn do_ops<T>(ops: &[Op<T>], tree: &mut Tree<T>, model: &mut Vec<T>) -> bool
where
    T: Ord + Clone,
{
    for op in ops {
        match op {
            Op::Add(x) => {
                tree.add(x.clone());
                let pos = model.partition_point(|y| y <= x);
                model.insert(pos, x.clone());
            }
            Op::Remove(x) => {
                let expected = match model.binary_search(x) {
                    Ok(pos) => {
                        model.remove(pos);
                        true
                    }
                    Err(_) => false,
                };
                if tree.remove(x) != expected {
                    return false;
                }
            }
            Op::Traverse => {
                if !tree.iter().eq(model.iter()) {
                    return false;
                }
            }
        }
        if tree.len() != model.len() {
            return false;
        }
    }

    true
}

#[quickcheck]
fn fuzz_multiple_operations_i8(ops: Vec<Op<i8>>) -> bool {
    init_logging();
    let mut tree = Tree::new();
    let mut model = Vec::new();

    do_ops(&ops, &mut tree, &mut model)
        && tree.iter().eq(model.iter())
        && model.iter().all(|x| tree.find(x))
}

#[quickcheck]
fn in_order_is_sorted(xs: Vec<i32>) -> bool {
    let tree: Tree<_> = xs.iter().copied().collect();

    let in_order: Vec<_> = tree.traverse(TraversalOrder::InOrder).collect();
    in_order.windows(2).all(|pair| pair[0] <= pair[1])
}

#[quickcheck]
fn len_counts_duplicates(xs: Vec<u8>) -> bool {
    let tree: Tree<_> = xs.iter().copied().collect();

    tree.len() == xs.len() && tree.is_empty() == xs.is_empty()
}

#[quickcheck]
fn contains(xs: Vec<i8>) -> bool {
    let mut tree = Tree::new();
    for x in &xs {
        tree.add(*x);
        if !tree.find(x) {
            return false;
        }
    }

    xs.iter().all(|x| tree.find(x))
}

#[quickcheck]
fn contains_not(xs: Vec<i8>, nots: Vec<i8>) -> bool {
    let tree: Tree<_> = xs.iter().copied().collect();
    let added: HashSet<_> = xs.into_iter().collect();
    let nots: HashSet<_> = nots.into_iter().collect();
    let mut nots = nots.difference(&added);

    nots.all(|x| !tree.find(x))
}

/// Unique values only: with exactly one occurrence, a removal makes the value unfindable.
#[quickcheck]
fn with_deletions(xs: HashSet<i8>, deletes: Vec<i8>) -> bool {
    init_logging();
    let mut tree: Tree<_> = xs.iter().copied().collect();
    for delete in &deletes {
        tree.remove(delete);
    }

    let deleted: HashSet<_> = deletes.iter().copied().collect();
    let still_present: Vec<_> = xs.difference(&deleted).collect();

    deletes.iter().all(|x| !tree.find(x))
        && still_present.iter().all(|x| tree.find(x))
        && tree.len() == still_present.len()
        && tree.iter().collect::<Vec<_>>().windows(2).all(|pair| pair[0] < pair[1])
}

#[quickcheck]
fn every_order_visits_every_node(xs: Vec<i8>, deletes: Vec<i8>) -> bool {
    let mut tree: Tree<_> = xs.iter().copied().collect();
    for delete in &deletes {
        tree.remove(delete);
    }

    let mut sorted: Vec<_> = tree.iter().copied().collect();
    sorted.sort();
    TraversalOrder::ALL.into_iter().all(|order| {
        let mut visited: Vec<_> = tree.traverse(order).copied().collect();
        visited.sort();
        visited == sorted
    })
}

#[quickcheck]
fn pre_order_rebuilds_same_shape(xs: Vec<i8>) -> bool {
    let tree: Tree<_> = xs.iter().copied().collect();
    let rebuilt: Tree<_> = tree.traverse(TraversalOrder::PreOrder).copied().collect();

    TraversalOrder::ALL
        .into_iter()
        .all(|order| tree.traverse(order).eq(rebuilt.traverse(order)))
        && tree.height() == rebuilt.height()
}

#[quickcheck]
fn height_is_bounded(xs: Vec<i8>) -> bool {
    let tree: Tree<_> = xs.iter().copied().collect();
    let n = tree.len();
    // A perfectly balanced tree of height `h` holds at most `2^h - 1` nodes.
    let min_height = (usize::BITS - n.leading_zeros()) as usize;

    tree.height() <= n && tree.height() >= min_height
}

#[quickcheck]
fn height_of_increasing_sequence(n: u8) -> bool {
    let tree: Tree<_> = (0..n).collect();

    tree.height() == n as usize
}
