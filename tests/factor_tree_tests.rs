use std::fs;

use factree::console::{Command, InputError, parse_command};
use factree::factor::{FactorNode, build, is_prime};
use factree::render::{render, write_tree_to_file};

#[test]
fn test_factorization_round_trip() {
    // Product of the leaves must reconstruct the input, and every leaf
    // must be prime.
    for n in 2..=1000u64 {
        let tree = build(n);
        let leaves = tree.leaves();
        let product: u64 = leaves.iter().product();
        assert_eq!(product, n, "Leaf product mismatch for {}", n);
        for leaf in leaves {
            assert!(is_prime(leaf), "Non-prime leaf {} in tree of {}", leaf, n);
        }
    }
}

#[test]
fn test_root_value_matches_input() {
    for n in [2u64, 12, 15, 97, 360] {
        assert_eq!(build(n).value(), n);
    }
}

#[test]
fn test_even_numbers_split_off_two_first() {
    // The split policy always peels 2 off an even composite, so the first
    // leaf of any even input is 2.
    for n in (4..100u64).step_by(2) {
        assert_eq!(build(n).leaves()[0], 2, "First leaf of {} should be 2", n);
    }
}

#[test]
fn test_rendered_tree_for_twelve() {
    let tree = build(12);
    let text = render(&tree).join("\n");
    let expected = "-> 12\n   -> 2\n   -> 6\n      -> 2\n      -> 3";
    assert_eq!(text, expected);
}

#[test]
fn test_rendered_tree_for_fifteen() {
    let tree = build(15);
    let text = render(&tree).join("\n");
    assert_eq!(text, "-> 15\n   -> 3\n   -> 5");
}

#[test]
fn test_prime_input_renders_single_line() {
    assert_eq!(render(&build(13)), vec!["-> 13"]);
}

#[test]
fn test_file_output_matches_render() {
    let tree = build(12);
    let path = std::env::temp_dir().join(format!("factree_test_{}.txt", std::process::id()));

    write_tree_to_file(&path, &tree).expect("Failed to write tree");
    let written = fs::read_to_string(&path).expect("Failed to read tree back");
    fs::remove_file(&path).ok();

    assert_eq!(written, "-> 12\n   -> 2\n   -> 6\n      -> 2\n      -> 3\n");
}

#[test]
fn test_file_output_to_bad_path_is_an_error() {
    let tree = build(6);
    let path = std::env::temp_dir().join("factree_no_such_dir").join("tree.txt");
    assert!(write_tree_to_file(&path, &tree).is_err());
}

#[test]
fn test_command_surface() {
    assert_eq!(parse_command("quit"), Ok(Command::Quit));
    assert_eq!(parse_command("12"), Ok(Command::Number(12)));
    assert_eq!(parse_command("1"), Ok(Command::Number(1)));
    assert_eq!(parse_command("-3"), Err(InputError::Negative(-3)));
    assert!(matches!(
        parse_command("not a number"),
        Err(InputError::NotANumber(_))
    ));
}

#[test]
fn test_larger_tree_shape_is_deterministic() {
    // 360 = 2^3 * 3^2 * 5; two builds agree node for node.
    let a = build(360);
    let b = build(360);
    assert_eq!(a, b);
    assert_eq!(a.leaves(), vec![2, 2, 2, 3, 3, 5]);

    // Root splits as (2, 180).
    match &a {
        FactorNode::Composite { left, right, .. } => {
            assert_eq!(left.value(), 2);
            assert_eq!(right.value(), 180);
        }
        _ => panic!("Expected 360 to be composite"),
    }
}
