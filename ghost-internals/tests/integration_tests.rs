//! Integration tests for ghost-internals: real Rust types compared through
//! `&dyn Comparable`.

use std::{
    collections::{BTreeMap, HashMap, HashSet},
    rc::Rc,
    sync::Arc,
};

use ghost_internals::{Comparable, strict_eq};

#[derive(PartialEq, Clone, Debug)]
struct Example {
    a: String,
    b: String,
}

#[derive(PartialEq, Debug)]
struct Chicken;

#[derive(PartialEq, Debug)]
struct Egg;

#[derive(PartialEq, Debug)]
struct Name(String);

#[derive(PartialEq, Debug)]
enum Shape {
    Point,
    Circle(f64),
    Segment(i32, i32),
    Rect { w: u32, h: u32 },
}

#[derive(PartialEq, Debug)]
enum Amount {
    Credit(i64),
    Debit(i64),
}

/// `Debug` shows only the id, equality still looks at the balance.
#[derive(PartialEq)]
struct Account {
    id: u32,
    balance: i64,
}

impl std::fmt::Debug for Account {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Account").field("id", &self.id).finish_non_exhaustive()
    }
}

#[derive(PartialEq, Debug)]
struct Tree {
    label: &'static str,
    children: Vec<Tree>,
}

fn example(s: &str) -> Example {
    Example {
        a: s.to_string(),
        b: s.to_string(),
    }
}

#[test]
fn test_reflexive() {
    assert!(strict_eq(&example("first"), &example("first")));
    assert!(strict_eq(&Chicken, &Chicken));
    assert!(strict_eq(&Shape::Point, &Shape::Point));
    assert!(strict_eq(&Name("x".into()), &Name("x".into())));
}

#[test]
fn test_distinct_types() {
    assert!(!strict_eq(&Egg, &Chicken));
    assert!(!strict_eq(&Name("x".into()), &String::from("x")));
    assert!(!strict_eq(&example("first"), &0));
    assert!(!strict_eq(&example("first"), &""));
    assert!(!strict_eq(&example("first"), &b'a'));
    assert!(!strict_eq(&example("first"), &5.9f64));
}

#[test]
fn test_enum_variants() {
    assert!(strict_eq(&Shape::Circle(1.5), &Shape::Circle(1.5)));
    assert!(!strict_eq(&Shape::Circle(1.5), &Shape::Circle(2.5)));
    assert!(!strict_eq(&Shape::Segment(1, 2), &Shape::Segment(2, 1)));
    assert!(!strict_eq(&Shape::Rect { w: 1, h: 2 }, &Shape::Point));
    assert!(!strict_eq(&Amount::Credit(5), &Amount::Debit(5)));
}

#[test]
fn test_fields_hidden_from_debug_are_compared() {
    let healthy = Account { id: 1, balance: 100 };
    let overdrawn = Account { id: 1, balance: -5 };
    assert_eq!(format!("{healthy:?}"), format!("{overdrawn:?}"));
    assert!(!strict_eq(&healthy, &overdrawn));
    assert!(strict_eq(&healthy, &Account { id: 1, balance: 100 }));
}

#[test]
fn test_hash_sets_ignore_iteration_order() {
    for _ in 0..20 {
        let forward: HashSet<u32> = (0..16).collect();
        let backward: HashSet<u32> = (0..16).rev().collect();
        assert!(strict_eq(&forward, &backward));

        let missing: HashSet<u32> = (1..16).collect();
        assert!(!strict_eq(&forward, &missing));
    }
}

#[test]
fn test_hash_maps_ignore_iteration_order() {
    let a: HashMap<String, Vec<u8>> = (0..16u8).map(|i| (i.to_string(), vec![i])).collect();
    let b: HashMap<String, Vec<u8>> = (0..16u8).rev().map(|i| (i.to_string(), vec![i])).collect();
    assert!(strict_eq(&a, &b));

    let mut c = b.clone();
    c.insert("0".to_string(), vec![1]);
    assert!(!strict_eq(&a, &c));
}

#[test]
fn test_nested_composites() {
    let tree = || Tree {
        label: "root",
        children: vec![
            Tree {
                label: "a",
                children: vec![],
            },
            Tree {
                label: "b",
                children: vec![],
            },
        ],
    };
    assert!(strict_eq(&tree(), &tree()));

    let mut pruned = tree();
    pruned.children.pop();
    assert!(!strict_eq(&tree(), &pruned));

    let table = BTreeMap::from([("x", vec![Some(1)]), ("y", vec![None])]);
    assert!(strict_eq(&table, &table.clone()));
}

#[test]
fn test_smart_pointers() {
    assert!(strict_eq(&Rc::new(example("a")), &Rc::new(example("a"))));
    assert!(strict_eq(&Arc::new(1), &Arc::new(1)));
    assert!(strict_eq(&Box::new(1), &Box::new(1)));

    assert!(!strict_eq(&Rc::new(1), &Arc::new(1)));
    assert!(!strict_eq(&Box::new(1), &1));
    assert!(!strict_eq(&Rc::new(example("a")), &example("a")));
}

#[test]
fn test_absence() {
    assert!(strict_eq(&None::<String>, &None::<String>));
    assert!(!strict_eq(&None::<String>, &None::<&str>));
    assert!(!strict_eq(&Vec::<String>::new(), &None::<String>));
    assert!(!strict_eq(&(), &None::<()>));
}

#[test]
fn test_dyn_values() {
    let values: [&dyn Comparable; 4] = [&1u8, &1i8, &"1", &'1'];
    for (i, a) in values.iter().enumerate() {
        for (j, b) in values.iter().enumerate() {
            assert_eq!(strict_eq(*a, *b), i == j, "{a:?} vs {b:?}");
        }
    }
}
