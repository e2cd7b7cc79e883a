//! Walks through every tree operation on a random sample, logging what
//! happens. Set `RUST_LOG=debug` to also see the tree's own events.

use ordered_tree::{Node, Result, Tree};
use quickcheck::{Arbitrary, Gen};
use tracing::info;
use tracing_subscriber::EnvFilter;

fn random_numbers(len: usize) -> Vec<u8> {
    let mut gen = Gen::new(100);
    (0..len).map(|_| u8::arbitrary(&mut gen) % 100).collect()
}

fn log_traversals(tree: &Tree<u8>) -> Result<()> {
    let mut seen = Vec::new();
    tree.in_order(Some(|n: &Node<u8>| seen.push(*n.value())))?;
    info!(?seen, "in order");

    let mut seen = Vec::new();
    tree.pre_order(Some(|n: &Node<u8>| seen.push(*n.value())))?;
    info!(?seen, "pre order");

    let mut seen = Vec::new();
    tree.post_order(Some(|n: &Node<u8>| seen.push(*n.value())))?;
    info!(?seen, "post order");

    Ok(())
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .init();

    let sample = random_numbers(15);
    info!(?sample, "building tree");
    let mut tree = Tree::build(sample);

    let mut seen = Vec::new();
    tree.level_order(Some(|n: &Node<u8>| seen.push(*n.value())))?;
    info!(?seen, "level order");
    info!(balanced = tree.is_balanced(), height = tree.height(), "initial tree");
    log_traversals(&tree)?;

    info!("unbalancing the tree by adding values above 100");
    for x in [150, 200, 250].iter() {
        tree.insert(*x);
    }
    info!(balanced = tree.is_balanced(), height = tree.height(), "after inserts");

    tree.rebalance();
    info!(balanced = tree.is_balanced(), height = tree.height(), "after rebalance");
    log_traversals(&tree)?;

    if let Some(largest) = tree.values().last().and_then(|max| tree.find(max)) {
        info!(value = *largest.value(), depth = ?tree.depth(largest), "largest value");
    }

    println!("{}", tree);
    Ok(())
}
