#![allow(missing_docs)]

mod common;

use std::collections::{BTreeMap, HashMap};

use common::{ARRAY, BASIC, DICTIONARY, Dog, Kennel, tory};
use jsonshape::{
    DecodeErrorKind, DecodeOptions, Kind, OnElementError, Value, decode, decode_with, parse, path,
};
use rstest::rstest;

fn skip() -> DecodeOptions {
    DecodeOptions {
        on_element_error: OnElementError::Skip,
        ..Default::default()
    }
}

#[test]
fn basic_record() {
    let dog: Dog = jsonshape::from_str(BASIC).unwrap();
    assert_eq!(dog, tory());
}

#[test]
fn array_of_records() {
    let dogs: Vec<Dog> = jsonshape::from_str(ARRAY).unwrap();
    assert_eq!(dogs, [tory(), tory()]);
}

#[test]
fn dictionary_as_record() {
    let kennel: Kennel = jsonshape::from_str(r#"{"data":[{"name":"Tory","age":3}]}"#).unwrap();
    assert_eq!(kennel, Kennel { data: vec![tory()] });
}

#[test]
fn dictionary_as_map() {
    let by_key: BTreeMap<String, Vec<Dog>> = jsonshape::from_str(DICTIONARY).unwrap();
    assert_eq!(by_key.len(), 1);
    assert_eq!(by_key["data"], [tory(), tory()]);

    let hashed: HashMap<String, Vec<Dog>> = jsonshape::from_str(DICTIONARY).unwrap();
    assert_eq!(hashed["data"], by_key["data"]);
}

#[test]
fn empty_array_is_empty_collection() {
    let dogs: Vec<Dog> = jsonshape::from_str("[]").unwrap();
    assert!(dogs.is_empty());

    let kennel: Kennel = jsonshape::from_str(r#"{"data":[]}"#).unwrap();
    assert!(kennel.data.is_empty());
}

#[test]
fn missing_field_is_reported_at_the_object() {
    let value = parse(r#"{"data":[{"name":"Tory","age":3},{"age":3}]}"#).unwrap();
    let err = decode::<Kennel>(&value).unwrap_err();
    assert_eq!(err.kind(), &DecodeErrorKind::MissingField("name".into()));
    assert_eq!(err.path(), &path!["data", 1]);
    insta::assert_snapshot!(err, @"missing field `name` at $.data[1]");
}

#[test]
fn skip_drops_invalid_elements() {
    let value = parse(r#"[{"name":"Tory","age":3},{"age":3}]"#).unwrap();

    let dogs: Vec<Dog> = decode_with(&value, skip()).unwrap();
    assert_eq!(dogs, [tory()]);

    let err = decode::<Vec<Dog>>(&value).unwrap_err();
    assert_eq!(err.path(), &path![1]);
}

#[test]
fn skip_keeps_order_of_survivors() {
    let value = parse(
        r#"[{"name":"a","age":1},{"name":"b","age":1.5},{"name":"c","age":3},"d",{"name":"e","age":5}]"#,
    )
    .unwrap();
    let names: Vec<String> = decode_with::<Vec<Dog>>(&value, skip())
        .unwrap()
        .into_iter()
        .map(|dog| dog.name)
        .collect();
    assert_eq!(names, ["a", "c", "e"]);
}

#[test]
fn fractional_number_is_not_an_integer() {
    let value = parse(r#"{"name":"Tory","age":3.5}"#).unwrap();
    let err = decode::<Dog>(&value).unwrap_err();
    assert_eq!(
        err.kind(),
        &DecodeErrorKind::TypeMismatch {
            expected: Kind::Integer,
            actual: Kind::Number,
        }
    );
    insta::assert_snapshot!(err, @"expected integer, found number at $.age");
}

#[test]
fn integral_float_text_is_an_integer() {
    let dog: Dog = jsonshape::from_str(r#"{"name":"Tory","age":3.0}"#).unwrap();
    assert_eq!(dog.age, 3);
}

#[rstest]
#[case::string_for_integer(r#"{"name":"Tory","age":"3"}"#, path!["age"], Kind::Integer, Kind::String)]
#[case::number_for_string(r#"{"name":3,"age":3}"#, path!["name"], Kind::String, Kind::Number)]
#[case::null_for_required(r#"{"name":null,"age":3}"#, path!["name"], Kind::String, Kind::Null)]
#[case::bool_for_integer(r#"{"name":"Tory","age":true}"#, path!["age"], Kind::Integer, Kind::Bool)]
#[case::array_for_record(r#"[]"#, path![], Kind::Object, Kind::Array)]
#[case::object_for_string(r#"{"name":{},"age":3}"#, path!["name"], Kind::String, Kind::Object)]
fn type_mismatch(
    #[case] text: &str,
    #[case] at: jsonshape::Path,
    #[case] expected: Kind,
    #[case] actual: Kind,
) {
    let err = decode::<Dog>(&parse(text).unwrap()).unwrap_err();
    assert_eq!(err.path(), &at);
    assert_eq!(
        err.into_kind(),
        DecodeErrorKind::TypeMismatch { expected, actual }
    );
}

#[rstest]
#[case::in_range("255", Some(255))]
#[case::too_large("256", None)]
#[case::negative("-1", None)]
#[case::fraction("0.5", None)]
fn integer_range_follows_target_type(#[case] text: &str, #[case] expected: Option<u8>) {
    let result = decode::<u8>(&parse(text).unwrap());
    assert_eq!(result.ok(), expected);
}

#[rstest]
#[case::min(-(2f64.powi(127)), Some(i128::MIN))]
#[case::below_min(-(2f64.powi(127)) * 1.5, None)]
#[case::largest_below_max(2f64.powi(127) - 2f64.powi(74), Some(i128::MAX - (1 << 74) + 1))]
#[case::max_plus_one(2f64.powi(127), None)]
fn i128_bounds_do_not_saturate(#[case] n: f64, #[case] expected: Option<i128>) {
    assert_eq!(decode::<i128>(&Value::Number(n)).ok(), expected);
}

#[rstest]
#[case::zero(0.0, Some(0))]
#[case::above_i128(2f64.powi(127), Some(1 << 127))]
#[case::upper_half(1.5 * 2f64.powi(127), Some(3 << 126))]
#[case::max_plus_one(2f64.powi(128), None)]
#[case::negative(-1.0, None)]
fn u128_bounds_do_not_saturate(#[case] n: f64, #[case] expected: Option<u128>) {
    assert_eq!(decode::<u128>(&Value::Number(n)).ok(), expected);
}

#[test]
fn f32_rejects_numbers_it_cannot_hold() {
    assert_eq!(decode::<f32>(&Value::Number(1.5)).ok(), Some(1.5));
    let err = decode::<Vec<f32>>(&parse("[1, 1e300]").unwrap()).unwrap_err();
    insta::assert_snapshot!(err, @"number 1e300 is out of range for f32 at $[1]");
}

#[test]
fn optional_fields_accept_absent_and_null() {
    jsonshape::record! {
        #[derive(Debug, PartialEq)]
        struct Tagged {
            name: String,
            nickname: Option<String>,
        }
    }

    for text in [r#"{"name":"Tory"}"#, r#"{"name":"Tory","nickname":null}"#] {
        let tagged: Tagged = jsonshape::from_str(text).unwrap();
        assert_eq!(tagged.nickname, None);
    }
    let tagged: Tagged = jsonshape::from_str(r#"{"name":"Tory","nickname":"T"}"#).unwrap();
    assert_eq!(tagged.nickname.as_deref(), Some("T"));

    let err = jsonshape::from_str::<Tagged>(r#"{"name":"Tory","nickname":1}"#).unwrap_err();
    insta::assert_snapshot!(err, @"decode error: expected string, found number at $.nickname");
}

#[test]
fn nested_paths_accumulate() {
    let value = parse(r#"{"outer":{"data":[{"name":"Tory","age":3},{"name":"Tory","age":[]}]}}"#)
        .unwrap();
    let err = decode::<BTreeMap<String, Kennel>>(&value).unwrap_err();
    insta::assert_snapshot!(err, @"expected integer, found array at $.outer.data[1].age");
}

#[test]
fn odd_keys_are_quoted_in_paths() {
    let value = parse(r#"{"my dogs":[{"name":"Tory"}]}"#).unwrap();
    let err = decode::<BTreeMap<String, Vec<Dog>>>(&value).unwrap_err();
    insta::assert_snapshot!(err, @r#"missing field `age` at $["my dogs"][0]"#);
}

#[test]
fn unknown_fields_denied_on_request() {
    let value = parse(r#"{"name":"Tory","age":3,"breed":"mix"}"#).unwrap();
    assert_eq!(decode::<Dog>(&value).unwrap(), tory());

    let options = DecodeOptions {
        deny_unknown_fields: true,
        ..Default::default()
    };
    let err = decode_with::<Dog>(&value, options).unwrap_err();
    insta::assert_snapshot!(err, @"unknown field `breed` at $");
}

#[test]
fn depth_guard_stops_deep_trees() {
    let mut value = Value::Number(1.0);
    for _ in 0..200 {
        value = Value::Array(vec![value]);
    }
    let identity = decode::<Value>(&value);
    assert!(identity.is_ok(), "identity decode does not recurse");

    jsonshape::record! {
        #[derive(Debug)]
        struct Node {
            children: Vec<Node>,
        }
    }

    let mut tree = parse(r#"{"children":[]}"#).unwrap();
    for _ in 0..100 {
        let mut map = jsonshape::Map::new();
        map.insert("children".into(), Value::Array(vec![tree]));
        tree = Value::Object(map);
    }
    let err = decode::<Node>(&tree).unwrap_err();
    assert_eq!(
        err.kind(),
        &DecodeErrorKind::DepthExceeded {
            limit: jsonshape::DEFAULT_MAX_DEPTH
        }
    );
    assert_eq!(err.path().len(), jsonshape::DEFAULT_MAX_DEPTH);

    let options = DecodeOptions {
        max_depth: 512,
        ..Default::default()
    };
    let node = decode_with::<Node>(&tree, options).unwrap();
    assert_eq!(node.children.len(), 1);
}

#[test]
fn decoding_leaves_the_value_untouched() {
    let value = parse(ARRAY).unwrap();
    let before = value.clone();
    let _ = decode::<Vec<Dog>>(&value);
    let _ = decode_with::<Vec<Dog>>(&value, skip());
    let _ = decode::<Kennel>(&value);
    assert_eq!(value, before);
}
