use abacus::{
    ast::{
        BinaryOperator::{self, Add, Div, Mul, Sub},
        Expr,
    },
    error::{AtomFault, ParseError},
    interpreter::{
        parser::core::{MAX_ATOMS, build_chain, build_tree},
        segmenter::Atom,
    },
};
use pretty_assertions::assert_eq;

/// Builds atoms from a leading number and `(operator, number)` pairs.
fn atoms(first: f64, rest: &[(BinaryOperator, f64)]) -> Vec<Atom> {
    let mut atoms = vec![Atom::Number(first)];
    for (op, number) in rest {
        atoms.push(Atom::Operator(*op));
        atoms.push(Atom::Number(*number));
    }
    atoms
}

fn num(value: f64, position: usize) -> Expr {
    Expr::number(value, position)
}

#[test]
fn single_number_is_a_leaf() {
    assert_eq!(build_tree(&[Atom::Number(42.0)]), Ok(num(42.0, 0)));
    assert_eq!(build_chain(&[Atom::Number(42.0)]), Ok(num(42.0, 0)));
}

#[test]
fn one_operator_has_both_operands_as_leaves() {
    for op in [Add, Sub, Mul, Div] {
        let tree = build_tree(&atoms(6.0, &[(op, 3.0)])).unwrap();
        assert_eq!(tree, Expr::binary(num(6.0, 0), op, num(3.0, 2), 1));
    }
}

#[test]
fn high_precedence_operand_sits_below_addition() {
    // 2 + 3 * 4
    let tree = build_tree(&atoms(2.0, &[(Add, 3.0), (Mul, 4.0)])).unwrap();
    let expected = Expr::binary(num(2.0, 0),
                                Add,
                                Expr::binary(num(3.0, 2), Mul, num(4.0, 4), 3),
                                1);
    assert_eq!(tree, expected);
}

#[test]
fn trailing_low_precedence_terms_group_left() {
    // 8 - 3 - 2
    let tree = build_tree(&atoms(8.0, &[(Sub, 3.0), (Sub, 2.0)])).unwrap();
    let expected = Expr::binary(Expr::binary(num(8.0, 0), Sub, num(3.0, 2), 1),
                                Sub,
                                num(2.0, 4),
                                3);
    assert_eq!(tree, expected);
}

#[test]
fn several_low_precedence_splits() {
    // 2 * 3 + 4 * 5 - 6 / 2
    let tree =
        build_tree(&atoms(2.0, &[(Mul, 3.0), (Add, 4.0), (Mul, 5.0), (Sub, 6.0), (Div, 2.0)]))
        .unwrap();
    assert_eq!(tree.to_string(), "(((2 * 3) + (4 * 5)) - (6 / 2))");
    assert_eq!(tree.operator_count(), 5);
}

#[test]
fn first_operator_low_followed_by_a_high_chain() {
    // 1 + 2 * 3 * 4 splits at the `+`, not inside the chain.
    let tree = build_tree(&atoms(1.0, &[(Add, 2.0), (Mul, 3.0), (Mul, 4.0)])).unwrap();
    assert_eq!(tree.to_string(), "(1 + ((2 * 3) * 4))");
}

#[test]
fn chain_builder_groups_from_the_left() {
    // 6 * 4 / 2 * 3
    let tree = build_chain(&atoms(6.0, &[(Mul, 4.0), (Div, 2.0), (Mul, 3.0)])).unwrap();
    let expected = Expr::binary(Expr::binary(Expr::binary(num(6.0, 0), Mul, num(4.0, 2), 1),
                                             Div,
                                             num(2.0, 4),
                                             3),
                                Mul,
                                num(3.0, 6),
                                5);
    assert_eq!(tree, expected);
}

#[test]
fn chain_builder_accepts_a_low_precedence_chain() {
    let tree = build_chain(&atoms(10.0, &[(Sub, 5.0), (Add, 2.0)])).unwrap();
    assert_eq!(tree.to_string(), "((10 - 5) + 2)");
}

#[test]
fn chain_builder_rejects_mixed_precedence() {
    let result = build_chain(&atoms(1.0, &[(Mul, 2.0), (Mul, 3.0), (Add, 4.0)]));
    assert_eq!(result, Err(ParseError::sequence(AtomFault::MixedPrecedence, 5)));
}

#[test]
fn chain_and_tree_agree_on_pure_chains() {
    let chain = atoms(9.0, &[(Div, 3.0), (Mul, 2.0), (Div, 4.0)]);
    assert_eq!(build_chain(&chain), build_tree(&chain));
}

#[test]
fn building_twice_gives_identical_trees() {
    let input = atoms(2.0, &[(Mul, 3.0), (Add, 4.0), (Div, 5.0)]);
    let first = build_tree(&input).unwrap();
    let second = build_tree(&input).unwrap();
    assert_eq!(first, second);
}

#[test]
fn empty_sequence_is_rejected() {
    assert_eq!(build_tree(&[]), Err(ParseError::sequence(AtomFault::Empty, 0)));
    assert_eq!(build_chain(&[]), Err(ParseError::sequence(AtomFault::Empty, 0)));
}

#[test]
fn operator_at_either_end_is_rejected() {
    assert_eq!(build_tree(&[Atom::Operator(Add), Atom::Number(1.0)]),
               Err(ParseError::sequence(AtomFault::LeadingOperator, 0)));
    assert_eq!(build_tree(&[Atom::Number(1.0), Atom::Operator(Add)]),
               Err(ParseError::sequence(AtomFault::TrailingOperator, 1)));
    assert_eq!(build_tree(&[Atom::Operator(Mul)]),
               Err(ParseError::sequence(AtomFault::LeadingOperator, 0)));
}

#[test]
fn same_kind_neighbours_are_rejected() {
    assert_eq!(build_tree(&[Atom::Number(1.0), Atom::Number(2.0), Atom::Operator(Add)]),
               Err(ParseError::sequence(AtomFault::ConsecutiveNumbers, 1)));
    assert_eq!(build_tree(&[Atom::Number(1.0),
                            Atom::Operator(Add),
                            Atom::Operator(Sub),
                            Atom::Number(2.0)]),
               Err(ParseError::sequence(AtomFault::ConsecutiveOperators, 2)));
}

#[test]
fn oversized_atom_lists_are_rejected() {
    let rest = vec![(Sub, 1.0); MAX_ATOMS / 2 + 1];
    let input = atoms(1.0, &rest);
    let expected = Err(ParseError::TooManyAtoms { count: input.len(),
                                                  limit: MAX_ATOMS, });
    assert_eq!(build_tree(&input), expected);
    assert_eq!(build_chain(&input), expected);

    let fits = atoms(1.0, &rest[1..]);
    assert_eq!(fits.len(), MAX_ATOMS);
    assert!(build_chain(&fits).is_ok());
}
