//! Pair tests

// Imports
use {
	multi_return::{MutPair, Pair, PairLike, Slot, TupleError},
	std::{
		cmp::Ordering,
		collections::{BTreeSet, HashMap, HashSet},
		hash::{BuildHasher, RandomState},
		rc::Rc,
	},
};

#[test]
fn compare_left_first() {
	let pair1 = Pair::of(Some("A"), Some("D"));
	let pair2 = Pair::of(Some("B"), Some("C"));
	assert_eq!(pair1.cmp(&pair1), Ordering::Equal);
	assert!(pair1 < pair2);
	assert_eq!(pair2.cmp(&pair2), Ordering::Equal);
	assert!(pair2 > pair1);
}

#[test]
fn compare_right_breaks_tie() {
	let pair1 = Pair::of(Some("A"), Some("C"));
	let pair2 = Pair::of(Some("A"), Some("D"));
	assert_eq!(pair1.cmp(&pair1), Ordering::Equal);
	assert!(pair1 < pair2);
	assert_eq!(pair2.cmp(&pair2), Ordering::Equal);
	assert!(pair2 > pair1);
}

#[test]
fn absent_sorts_first() {
	let mut pairs = vec![
		Pair::of(Some("B"), None),
		Pair::of(Some("A"), Some("Z")),
		Pair::of(None, Some("A")),
		Pair::of(Some("B"), Some("A")),
	];
	pairs.sort();

	assert_eq!(pairs, [
		Pair::of(None, Some("A")),
		Pair::of(Some("A"), Some("Z")),
		Pair::of(Some("B"), None),
		Pair::of(Some("B"), Some("A")),
	]);
}

#[test]
fn compatible_with_mut_pair() {
	let pair = Pair::of(Some(0), Some("foo"));
	let mut mut_pair = MutPair::of(Some(0), Some("foo"));
	assert_eq!(pair, mut_pair);
	assert_eq!(mut_pair, pair);
	assert_eq!(pair.hash_code(), mut_pair.hash_code());

	let state = RandomState::new();
	assert_eq!(state.hash_one(&pair), state.hash_one(&mut_pair));

	let mut set = HashSet::new();
	set.insert(pair.clone());
	assert!(set.contains(&Pair::from(mut_pair.clone())));

	mut_pair.set_value(Some("bar")).expect("Mutable pairs should support setting the value");
	assert_ne!(pair, mut_pair);
	assert_ne!(pair.hash_code(), mut_pair.hash_code());
}

#[test]
fn ordered_set() {
	let set = [
		Pair::of(Some(2), Some(1)),
		Pair::of(Some(1), Some(2)),
		Pair::of(Some(1), Some(2)),
		Pair::of(Some(1), None),
	]
	.into_iter()
	.collect::<BTreeSet<_>>();

	let pairs = set.into_iter().map(Pair::into_tuple).collect::<Vec<_>>();
	assert_eq!(pairs, [(Some(1), None), (Some(1), Some(2)), (Some(2), Some(1))]);
}

#[test]
fn hash_code_is_commutative() {
	let pair = Pair::of(Some(1), Some(2));
	let swapped = Pair::of(Some(2), Some(1));
	assert_ne!(pair, swapped);
	assert_eq!(pair.hash_code(), swapped.hash_code());

	assert_eq!(Pair::<i32, i32>::null().hash_code(), 0);
}

#[test]
fn display() {
	assert_eq!(Pair::of(Some("one"), Some("two")).to_string(), "(one,two)");
	assert_eq!(Pair::<&str, &str>::of(None, None).to_string(), "(null,null)");
	assert_eq!(Pair::<&str, &str>::of_left("one").to_string(), "(one,null)");
	assert_eq!(Pair::<&str, &str>::of_right("two").to_string(), "(null,two)");
}

#[test]
fn display_padded() {
	let pair = Pair::of(Some("Key"), Some("Value"));
	assert_eq!(format!("{pair}"), "(Key,Value)");
	assert_eq!(format!("{pair:>20}"), "         (Key,Value)");
	assert_eq!(format!("{pair:<13}|"), "(Key,Value)  |");
}

#[test]
fn format_template() {
	let pair = Pair::of(Some("DOB"), Some("04-25-2011"));
	assert_eq!(
		pair.format("Test created on {2}").expect("Template should be valid"),
		"Test created on 04-25-2011"
	);
	assert_eq!(pair.format("{}: {}").expect("Template should be valid"), "DOB: 04-25-2011");
	assert_eq!(pair.format("{2} <- {1}").expect("Template should be valid"), "04-25-2011 <- DOB");
	assert!(pair.format("{3}").is_err());
}

#[test]
fn from_entry() {
	let mut map = HashMap::new();
	map.insert(0, "foo".to_owned());

	let entry = map.into_iter().next();
	let pair = Pair::from_entry(entry);
	assert_eq!(pair.left(), Some(&0));
	assert_eq!(pair.right().map(String::as_str), Some("foo"));
	assert_eq!(pair.key(), pair.left());
	assert_eq!(pair.value(), pair.right());

	let pair = Pair::<i32, String>::from_entry(None::<(i32, String)>);
	assert!(Pair::ptr_eq(&pair, &Pair::null()));
}

#[test]
fn of_non_null() {
	assert_eq!(
		Pair::<&str, &str>::of_non_null(None, None),
		Err(TupleError::AbsentSlot { slot: Slot::Left })
	);
	assert_eq!(
		Pair::<&str, &str>::of_non_null(None, Some("x")),
		Err(TupleError::AbsentSlot { slot: Slot::Left })
	);
	assert_eq!(
		Pair::<&str, &str>::of_non_null(Some("x"), None),
		Err(TupleError::AbsentSlot { slot: Slot::Right })
	);

	let pair = Pair::of_non_null(Some("x"), Some("y")).expect("Both elements are present");
	assert_eq!(pair.left(), Some(&"x"));
	assert_eq!(pair.right(), Some(&"y"));
}

#[test]
fn of_elements() {
	let pair = Pair::of(Some(0), Some("foo"));
	assert_eq!(pair.left(), Some(&0));
	assert_eq!(pair.right(), Some(&"foo"));

	let pair = Pair::<i32, &str>::of(None, Some("bar"));
	assert_eq!(pair.left(), None);
	assert_eq!(pair.right(), Some(&"bar"));

	let pair = Pair::<i32, &str>::of(None, None);
	assert_eq!(pair.left(), None);
	assert_eq!(pair.right(), None);
}

#[test]
fn null_is_canonical() {
	let pair1 = Pair::<i32, String>::of(None, None);
	let pair2 = Pair::<i32, String>::of(None, None);
	assert!(Pair::ptr_eq(&pair1, &pair2));
	assert!(Pair::ptr_eq(&pair1, &Pair::null()));

	let pair3 = Pair::<i32, String>::of_left(5);
	let pair4 = Pair::<i32, String>::of_left(5);
	assert_eq!(pair3, pair4);
	assert!(!Pair::ptr_eq(&pair3, &pair4));
}

#[test]
fn null_is_canonical_across_threads() {
	let pair = Pair::<u64, u64>::null();
	let other = std::thread::spawn(Pair::<u64, u64>::null)
		.join()
		.expect("Thread should not panic");
	assert!(Pair::ptr_eq(&pair, &other));
}

#[test]
fn clone_shares_elements() {
	let pair = Pair::of(Some(vec![1, 2, 3]), Some("foo"));
	let clone = pair.clone();
	assert!(Pair::ptr_eq(&pair, &clone));

	// Still shared, so this must clone the elements
	assert_eq!(clone.into_tuple(), (Some(vec![1, 2, 3]), Some("foo")));
	assert_eq!(pair.into_tuple(), (Some(vec![1, 2, 3]), Some("foo")));
}

#[test]
fn set_value_unsupported() {
	let mut pair = Pair::of(Some(0), Some("foo"));
	assert!(matches!(
		pair.set_value(Some("bar")),
		Err(TupleError::Unsupported { ty: "Pair", .. })
	));
	assert_eq!(pair.left(), Some(&0));
	assert_eq!(pair.right(), Some(&"foo"));
}

#[test]
fn from_tuple() {
	let pair = Pair::from((1, "one"));
	assert_eq!(pair, MutPair::from((1, "one")));
	assert_eq!(pair.into_tuple(), (Some(1), Some("one")));
}

#[test]
fn of_non_null_local_elements() {
	let pair = Pair::of_non_null(Some(Rc::new(1)), Some(Rc::new("one"))).expect("Both elements are present");
	assert_eq!(pair.left().map(|left| **left), Some(1));
	assert_eq!(pair.right().map(|right| **right), Some("one"));

	let name = String::from("key");
	let pair = Pair::of_non_null(Some(name.as_str()), Some(5)).expect("Both elements are present");
	assert_eq!(pair.key(), Some(&"key"));
	assert_eq!(
		Pair::<Rc<i32>, &str>::of_non_null(None, Some(name.as_str())),
		Err(TupleError::AbsentSlot { slot: Slot::Left })
	);
}
