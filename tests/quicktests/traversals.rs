use bintree::{
    boundary, diameter, left_side_view, level_order, max_path_sum, right_side_view,
    vertical_order, zigzag_level_order, Tree,
};
use quickcheck_macros::quickcheck;

/// Builds a tree from a random level-order literal.
fn build(slots: Vec<Option<i8>>) -> Tree<i64> {
    Tree::from_level_order(slots.into_iter().map(|slot| slot.map(i64::from)))
}

/// Every value in the tree, sorted.
fn values(tree: &Tree<i64>) -> Vec<i64> {
    let mut values: Vec<i64> = tree.to_level_order().into_iter().flatten().collect();
    values.sort_unstable();
    values
}

fn sorted(mut xs: Vec<i64>) -> Vec<i64> {
    xs.sort_unstable();
    xs
}

#[quickcheck]
fn full_traversals_visit_every_node(slots: Vec<Option<i8>>) -> bool {
    let tree = build(slots);
    let expected = values(&tree);

    sorted(vertical_order(&tree).concat()) == expected
        && sorted(zigzag_level_order(&tree).concat()) == expected
        && sorted(level_order(&tree).concat()) == expected
}

#[quickcheck]
fn boundary_is_a_subset(slots: Vec<Option<i8>>) -> bool {
    let tree = build(slots);
    let mut remaining = values(&tree);

    // Each boundary value has to use up a distinct node.
    boundary(&tree).into_iter().all(|v| match remaining.binary_search(&v) {
        Ok(pos) => {
            remaining.remove(pos);
            true
        }
        Err(_) => false,
    })
}

#[quickcheck]
fn views_have_one_value_per_level(slots: Vec<Option<i8>>) -> bool {
    let tree = build(slots);

    right_side_view(&tree).len() == tree.height() && left_side_view(&tree).len() == tree.height()
}

#[quickcheck]
fn views_start_at_root(slots: Vec<Option<i8>>) -> bool {
    let tree = build(slots);
    let root = tree.root().map(|n| *n.value());

    right_side_view(&tree).first().copied() == root
        && left_side_view(&tree).first().copied() == root
}

#[quickcheck]
fn max_path_sum_defined_unless_empty(slots: Vec<Option<i8>>) -> bool {
    let tree = build(slots);

    max_path_sum(&tree).is_ok() != tree.is_empty()
}

#[quickcheck]
fn diameter_of_small_trees(slots: Vec<Option<i8>>) -> bool {
    let tree = build(slots);

    tree.len() > 1 || diameter(&tree) == 0
}

#[quickcheck]
fn idempotent(slots: Vec<Option<i8>>) -> bool {
    let tree = build(slots);

    max_path_sum(&tree) == max_path_sum(&tree)
        && vertical_order(&tree) == vertical_order(&tree)
        && boundary(&tree) == boundary(&tree)
        && diameter(&tree) == diameter(&tree)
        && right_side_view(&tree) == right_side_view(&tree)
        && zigzag_level_order(&tree) == zigzag_level_order(&tree)
}

#[quickcheck]
fn literal_round_trip(slots: Vec<Option<i8>>) -> bool {
    let tree = build(slots);

    tree.to_string().parse::<Tree<i64>>() == Ok(tree)
}
