//! `serde` tests

// Imports
use multi_return::{MutPair, MutTriple, Pair, PairLike, PairResult, Result, Triple};

#[test]
fn pair() {
	let pair = Pair::of(Some(1), Some("a".to_owned()));
	let json = serde_json::to_string(&pair).expect("Should be able to serialize pair");
	assert_eq!(json, r#"{"left":1,"right":"a"}"#);

	let pair_de = serde_json::from_str::<Pair<i32, String>>(&json).expect("Should be able to deserialize pair");
	assert_eq!(pair_de, pair);

	let pair = MutPair::<i32, String>::of_right("b".to_owned());
	let json = serde_json::to_string(&pair).expect("Should be able to serialize pair");
	assert_eq!(json, r#"{"right":"b"}"#);
	assert_eq!(
		serde_json::from_str::<MutPair<i32, String>>(&json).expect("Should be able to deserialize pair"),
		pair
	);
}

#[test]
fn null_pair() {
	let json = serde_json::to_string(&Pair::<i32, i32>::null()).expect("Should be able to serialize pair");
	assert_eq!(json, "{}");

	let pair = serde_json::from_str::<Pair<i32, i32>>(&json).expect("Should be able to deserialize pair");
	assert!(Pair::ptr_eq(&pair, &Pair::null()));
}

#[test]
fn pair_present_null() {
	let pair = Pair::<Option<i32>, i32>::of(Some(None), Some(1));
	let json = serde_json::to_string(&pair).expect("Should be able to serialize pair");
	assert_eq!(json, r#"{"left":null,"right":1}"#);

	let pair_de = serde_json::from_str::<Pair<Option<i32>, i32>>(&json).expect("Should be able to deserialize pair");
	assert_eq!(pair_de.left(), Some(&None));
	assert_eq!(pair_de, pair);

	let pair_de =
		serde_json::from_str::<Pair<Option<i32>, i32>>(r#"{"right":1}"#).expect("Should be able to deserialize pair");
	assert_eq!(pair_de.left(), None);
	assert_ne!(pair_de, pair);
}

#[test]
fn pair_unknown_field() {
	assert!(serde_json::from_str::<Pair<i32, i32>>(r#"{"left":1,"middle":2}"#).is_err());
}

#[test]
fn triple() {
	let triple = Triple::<i32, String, bool>::of(Some(1), None, Some(true));
	let json = serde_json::to_string(&triple).expect("Should be able to serialize triple");
	assert_eq!(json, r#"{"left":1,"right":true}"#);

	let triple_de =
		serde_json::from_str::<Triple<i32, String, bool>>(&json).expect("Should be able to deserialize triple");
	assert_eq!(triple_de, triple);

	let triple = serde_json::from_str::<Triple<i32, String, bool>>("{}").expect("Should be able to deserialize triple");
	assert!(Triple::ptr_eq(&triple, &Triple::null()));

	let triple = serde_json::from_str::<MutTriple<i32, String, bool>>(r#"{"middle":"x"}"#)
		.expect("Should be able to deserialize triple");
	assert_eq!(triple.into_tuple(), (None, Some("x".to_owned()), None));
}

#[test]
fn triple_present_null() {
	let triple = MutTriple::<(), Option<i32>, i32>::of(Some(()), Some(None), None);
	let json = serde_json::to_string(&triple).expect("Should be able to serialize triple");
	assert_eq!(json, r#"{"left":null,"middle":null}"#);

	let triple_de = serde_json::from_str::<MutTriple<(), Option<i32>, i32>>(&json)
		.expect("Should be able to deserialize triple");
	assert_eq!(triple_de, triple);
}

#[test]
fn result() {
	let res = Result::<i32, String>::of_ok(1);
	let json = serde_json::to_string(&res).expect("Should be able to serialize result");
	assert_eq!(json, r#"{"Ok":1}"#);
	assert_eq!(
		serde_json::from_str::<Result<i32, String>>(&json).expect("Should be able to deserialize result"),
		res
	);

	let res = serde_json::from_str::<Result<i32, String>>(r#"{"Err":"boom"}"#)
		.expect("Should be able to deserialize result");
	assert_eq!(res, Result::of_err("boom".to_owned()));

	let res = Result::create(5, "partial".to_owned());
	let json = serde_json::to_string(&res).expect("Should be able to serialize result");
	assert_eq!(json, r#"{"Both":[5,"partial"]}"#);
	assert_eq!(
		serde_json::from_str::<Result<i32, String>>(&json).expect("Should be able to deserialize result"),
		res
	);
}

#[test]
fn result_unit() {
	let res = Result::<(), String>::of_ok(());
	let json = serde_json::to_string(&res).expect("Should be able to serialize result");
	assert_eq!(json, r#"{"Ok":null}"#);

	let res_de = serde_json::from_str::<Result<(), String>>(&json).expect("Should be able to deserialize result");
	assert_eq!(res_de, res);
	assert_eq!(res_de.ok(), Some(&()));
}

#[test]
fn result_requires_value_or_error() {
	assert!(serde_json::from_str::<Result<i32, String>>("{}").is_err());
	assert!(serde_json::from_str::<Result<i32, String>>("null").is_err());
	assert!(serde_json::from_str::<Result<i32, String>>(r#"{"ok":1}"#).is_err());
}

#[test]
fn pair_result() {
	let res = PairResult::<i32, i32, String>::of(Some(1), Some(2), Some("boom".to_owned()));
	let json = serde_json::to_string(&res).expect("Should be able to serialize pair result");
	assert_eq!(json, r#"{"left":1,"right":2,"err":"boom"}"#);
	assert_eq!(
		serde_json::from_str::<PairResult<i32, i32, String>>(&json).expect("Should be able to deserialize pair result"),
		res
	);

	let res = PairResult::<i32, i32, String>::of_left(1);
	let json = serde_json::to_string(&res).expect("Should be able to serialize pair result");
	assert_eq!(json, r#"{"left":1}"#);

	let res = serde_json::from_str::<PairResult<i32, i32, String>>("{}")
		.expect("Should be able to deserialize pair result");
	assert!(PairResult::ptr_eq(&res, &PairResult::null()));
}
