//! Contrasts two ways of getting typed records out of JSON text:
//!
//! 1. walking the generic value tree key by key, giving up on an entry as soon
//!    as a lookup fails, and
//! 2. declaring the record once and letting the decoder validate it.
//!
//! The first approach silently drops bad entries; the second reports exactly
//! which entry was wrong, and can be asked to drop bad entries instead.
//!
//! Run with
//!
//! ```bash
//! cargo run -p jsonshape --example dogs
//! ```

#![allow(clippy::needless_raw_string_hashes)]

use jsonshape::{DecodeOptions, OnElementError, Value, record};

record! {
    #[derive(Debug)]
    #[allow(dead_code)]
    struct Dog {
        name: String,
        age: i64,
    }
}

record! {
    #[derive(Debug)]
    struct Kennel {
        data: Vec<Dog>,
    }
}

impl Dog {
    fn from_value(value: &Value) -> Option<Self> {
        Some(Self {
            name: value.get("name")?.as_str()?.to_owned(),
            age: value.get("age")?.as_i64()?,
        })
    }
}

const BASIC: &str = r#"{ "name": "Tory", "age": 3 }"#;

const ARRAY: &str = r#"[
    { "name": "Tory", "age": 3 },
    { "age": 3 },
    { "name": "Tory", "age": 3 }
]"#;

const DICTIONARY: &str = r#"{
    "data": [
        { "name": "Tory", "age": 3 },
        { "name": "Tory", "age": 3.5 }
    ]
}"#;

fn main() -> Result<(), jsonshape::Error> {
    let skip = DecodeOptions {
        on_element_error: OnElementError::Skip,
        ..Default::default()
    };

    println!("---------- [ Basic ] ----------");
    let value = jsonshape::parse(BASIC)?;
    if let Some(dog) = Dog::from_value(&value) {
        println!("manual  : {dog:?}");
    }
    let dog: Dog = jsonshape::decode(&value)?;
    println!("decoder : {dog:?}");

    println!("\n---------- [ Array ] ----------");
    let value = jsonshape::parse(ARRAY)?;
    if let Some(entries) = value.as_array() {
        for dog in entries.iter().filter_map(Dog::from_value) {
            println!("manual  : {dog:?}");
        }
    }
    match jsonshape::decode::<Vec<Dog>>(&value) {
        Ok(dogs) => dogs.iter().for_each(|dog| println!("decoder : {dog:?}")),
        Err(err) => println!("decoder : {err}"),
    }
    for dog in jsonshape::decode_with::<Vec<Dog>>(&value, skip)? {
        println!("skipping: {dog:?}");
    }

    println!("\n---------- [ Dictionary ] ----------");
    let value = jsonshape::parse(DICTIONARY)?;
    let manual = value
        .get("data")
        .and_then(Value::as_array)
        .map(|entries| entries.iter().filter_map(Dog::from_value).collect::<Vec<_>>())
        .unwrap_or_default();
    for dog in manual {
        println!("manual  : {dog:?}");
    }
    match jsonshape::decode::<Kennel>(&value) {
        Ok(kennel) => kennel.data.iter().for_each(|dog| println!("decoder : {dog:?}")),
        Err(err) => println!("decoder : {err}"),
    }
    let kennel: Kennel = jsonshape::decode_with(&value, skip)?;
    for dog in kennel.data {
        println!("skipping: {dog:?}");
    }

    println!("\n---------- [ Shape ] ----------");
    println!("{}", <Kennel as jsonshape::Decode>::shape());
    println!("{}", <Dog as jsonshape::Decode>::shape());

    Ok(())
}
