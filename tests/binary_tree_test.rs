//! Tests for the generic BinaryTree: height, levels, traversals and renderings

use rstest::rstest;

use exprtree::domain::{BinaryTree, ExpressionTree, Node, TreeConvert, MAX_LEVEL};

//        1
//      /   \
//     2     3
//    / \     \
//   4   5     6
//        \
//         7
fn numbered() -> BinaryTree<u32> {
    BinaryTree::from(Node::branch(
        1,
        Node::branch(2, Node::leaf(4), Node::new(5, None, Some(Node::leaf(7)))),
        Node::new(3, None, Some(Node::leaf(6))),
    ))
}

fn values(nodes: Vec<&Node<u32>>) -> Vec<u32> {
    nodes.into_iter().map(|n| *n.value()).collect()
}

fn level(tree: &BinaryTree<u32>, depth: usize) -> Vec<Option<u32>> {
    tree.nodes_at_level(depth)
        .into_iter()
        .map(|slot| slot.map(|n| *n.value()))
        .collect()
}

// ============================================================
// Height
// ============================================================

#[test]
fn given_trees_of_various_shapes_when_measuring_then_counts_edges() {
    assert_eq!(BinaryTree::<u32>::empty().height(), -1);
    assert_eq!(BinaryTree::from(Node::leaf(1)).height(), 0);
    assert_eq!(numbered().height(), 3);
}

#[test]
fn given_left_spine_when_measuring_then_height_is_depth() {
    let spine = (0..5).fold(Node::leaf(0), |child, v| Node::new(v + 1, Some(child), None));
    let tree = BinaryTree::from(spine);
    assert_eq!(tree.height(), 5);
    assert_eq!(tree.len(), 6);
}

// ============================================================
// Levels
// ============================================================

#[rstest]
#[case(0, vec![Some(1)])]
#[case(1, vec![Some(2), Some(3)])]
#[case(2, vec![Some(4), Some(5), None, Some(6)])]
#[case(3, vec![None, None, None, Some(7), None, None, None, None])]
fn given_sparse_tree_when_listing_level_then_positions_are_kept(
    #[case] depth: usize,
    #[case] expected: Vec<Option<u32>>,
) {
    assert_eq!(level(&numbered(), depth), expected);
}

#[rstest]
#[case(0)]
#[case(1)]
#[case(4)]
#[case(6)]
fn given_any_level_when_listing_then_slot_count_is_power_of_two(#[case] depth: usize) {
    assert_eq!(numbered().nodes_at_level(depth).len(), 1 << depth);
    assert_eq!(BinaryTree::<u32>::empty().nodes_at_level(depth).len(), 1 << depth);
}

#[test]
fn given_64_operator_chain_when_listing_levels_then_stops_at_limit() {
    let expression = ExpressionTree::new(&format!("1{}", "+1".repeat(64))).unwrap();
    let tree = expression.binary_tree();

    assert_eq!(tree.height(), 64);
    assert_eq!(tree.try_nodes_at_level(MAX_LEVEL).map(|s| s.len()), Some(1 << MAX_LEVEL));
    assert!(tree.try_nodes_at_level(MAX_LEVEL + 1).is_none());
    assert!(tree.try_nodes_at_level(64).is_none());
}

#[test]
fn given_empty_tree_when_listing_root_level_then_single_absent_slot() {
    assert_eq!(level(&BinaryTree::empty(), 0), vec![None]);
}

// ============================================================
// Traversals
// ============================================================

#[test]
fn given_tree_when_traversing_then_depth_first_orders_match() {
    let tree = numbered();
    assert_eq!(values(tree.inorder()), vec![4, 2, 5, 7, 1, 3, 6]);
    assert_eq!(values(tree.preorder()), vec![1, 2, 4, 5, 7, 3, 6]);
    assert_eq!(values(tree.postorder()), vec![4, 7, 5, 2, 6, 3, 1]);
}

#[test]
fn given_empty_tree_when_traversing_then_nothing_is_visited() {
    let tree = BinaryTree::<u32>::empty();
    assert!(tree.inorder().is_empty());
    assert!(tree.preorder().is_empty());
    assert!(tree.postorder().is_empty());
}

// ============================================================
// Rendering
// ============================================================

#[test]
fn given_sparse_tree_when_rendering_then_one_line_per_level() {
    assert_eq!(
        numbered().render(),
        "[1]\n[2,3]\n[4,5,null,6]\n[null,null,null,7,null,null,null,null]"
    );
}

#[test]
fn given_expression_when_rendering_levels_then_lists_tokens() {
    let tree = ExpressionTree::new("1+2*3").unwrap();
    assert_eq!(
        tree.binary_tree().to_string(),
        "[+]\n[1,*]\n[null,null,2,3]"
    );
}

#[test]
fn given_64_operator_chain_when_rendering_then_omits_deep_levels() {
    let expression = ExpressionTree::new(&format!("1{}", "+1".repeat(64))).unwrap();
    let rendered = expression.binary_tree().render();
    let lines: Vec<&str> = rendered.lines().collect();

    assert_eq!(lines.len(), MAX_LEVEL + 2);
    assert_eq!(lines[1], "[+,1]");
    assert_eq!(
        *lines.last().unwrap(),
        format!("[{} deeper levels omitted]", 64 - MAX_LEVEL)
    );
}

#[test]
fn given_empty_tree_when_rendering_then_single_null() {
    assert_eq!(BinaryTree::<u32>::empty().render(), "[null]");
}

#[test]
fn given_tree_when_converting_to_termtree_then_draws_hierarchy() {
    let tree = ExpressionTree::new("1+2").unwrap();
    assert_eq!(tree.to_tree_string().to_string(), "+\n├── 1\n└── 2\n");
}
