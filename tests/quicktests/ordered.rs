use ordered_tree::{Node, Tree};
use quickcheck_macros::quickcheck;

use std::collections::BTreeSet;

/// Checks the ordering invariant by walking in order and comparing
/// neighbours.
fn is_strictly_ascending(tree: &Tree<i8>) -> bool {
    tree.values().windows(2).all(|w| w[0] < w[1])
}

fn in_order(tree: &Tree<i8>) -> Vec<i8> {
    let mut seen = Vec::new();
    tree.in_order(Some(|n: &Node<i8>| seen.push(*n.value())))
        .unwrap();
    seen
}

#[quickcheck]
fn build_sorts_and_dedups(xs: Vec<i8>) -> bool {
    let tree = Tree::build(xs.clone());
    let distinct: BTreeSet<_> = xs.into_iter().collect();

    in_order(&tree) == distinct.into_iter().collect::<Vec<_>>()
}

#[quickcheck]
fn build_has_minimal_height(xs: Vec<i8>) -> bool {
    let tree = Tree::build(xs);
    let expected = match tree.len() {
        0 => -1,
        n => (usize::BITS - 1 - n.leading_zeros()) as isize,
    };

    tree.height() == expected && tree.is_balanced()
}

#[quickcheck]
fn contains(xs: Vec<i8>) -> bool {
    let mut tree = Tree::new();
    for x in &xs {
        tree.insert(*x);
    }

    is_strictly_ascending(&tree) && xs.iter().all(|x| tree.find(x).map(|n| n.value()) == Some(x))
}

#[quickcheck]
fn contains_not(xs: Vec<i8>, nots: Vec<i8>) -> bool {
    let mut tree = Tree::new();
    for x in &xs {
        tree.insert(*x);
    }
    let added: BTreeSet<_> = xs.into_iter().collect();
    let nots: BTreeSet<_> = nots.into_iter().collect();
    let mut nots = nots.difference(&added);

    nots.all(|x| tree.find(x).is_none())
}

#[quickcheck]
fn insert_is_idempotent(xs: Vec<i8>, x: i8) -> bool {
    let mut tree = Tree::build(xs);
    tree.insert(x);
    let once = tree.clone();
    tree.insert(x);

    tree == once && tree.contains(&x)
}

#[quickcheck]
fn with_deletions(xs: Vec<i8>, deletes: Vec<i8>) -> bool {
    let mut tree = Tree::new();
    tree.extend(xs.iter().copied());
    for delete in &deletes {
        tree.delete(delete);
    }

    let mut still_present: BTreeSet<_> = xs.into_iter().collect();
    for delete in &deletes {
        still_present.remove(delete);
    }

    is_strictly_ascending(&tree)
        && deletes.iter().all(|x| tree.find(x).is_none())
        && in_order(&tree) == still_present.into_iter().collect::<Vec<_>>()
}

#[quickcheck]
fn rebalance_keeps_values(xs: Vec<i8>) -> bool {
    let mut tree = Tree::new();
    tree.extend(xs.iter().copied());
    let before = in_order(&tree);

    tree.rebalance();
    let once = tree.clone();
    tree.rebalance();

    tree.is_balanced() && tree == once && in_order(&tree) == before
}

#[quickcheck]
fn traversals_visit_every_node_once(xs: Vec<i8>) -> bool {
    let tree = Tree::build(xs);
    let expected: BTreeSet<i8> = in_order(&tree).into_iter().collect();

    let mut level = Vec::new();
    let mut pre = Vec::new();
    let mut post = Vec::new();
    tree.level_order(Some(|n: &Node<i8>| level.push(*n.value())))
        .unwrap();
    tree.pre_order(Some(|n: &Node<i8>| pre.push(*n.value())))
        .unwrap();
    tree.post_order(Some(|n: &Node<i8>| post.push(*n.value())))
        .unwrap();

    let root = tree.root().map(|n| *n.value());
    [&level, &pre, &post].iter().all(|seen| {
        seen.len() == expected.len() && seen.iter().copied().collect::<BTreeSet<_>>() == expected
    }) && root == level.first().copied()
        && root == pre.first().copied()
        && root == post.last().copied()
}
