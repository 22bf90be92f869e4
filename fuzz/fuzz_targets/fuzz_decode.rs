#![no_main]
use std::collections::BTreeMap;

use arbitrary::Arbitrary;
use jsonshape::{DecodeOptions, OnElementError, Value, record};
use libfuzzer_sys::fuzz_target;

record! {
    #[derive(Debug)]
    struct Dog {
        name: String,
        age: i64,
        nickname: Option<String>,
    }
}

record! {
    #[derive(Debug)]
    struct Kennel {
        data: Vec<Dog>,
        nested: Option<BTreeMap<String, Vec<Kennel>>>,
    }
}

#[derive(Debug, Arbitrary)]
struct Input {
    skip: bool,
    deny_unknown_fields: bool,
    max_depth: u8,
    text: String,
}

fn decode_all(value: &Value, options: DecodeOptions) {
    let _ = jsonshape::decode_with::<Dog>(value, options);
    let _ = jsonshape::decode_with::<Kennel>(value, options);
    let _ = jsonshape::decode_with::<BTreeMap<String, Vec<Dog>>>(value, options);
    let _ = jsonshape::decode_with::<Vec<Option<f64>>>(value, options);

    // Skipping can only ever shrink the result.
    if let (Some(elements), Ok(dogs)) = (
        value.as_array(),
        jsonshape::decode_with::<Vec<Dog>>(value, options),
    ) {
        assert!(dogs.len() <= elements.len());
        if options.on_element_error == OnElementError::Abort {
            assert_eq!(dogs.len(), elements.len());
        }
    }
}

fuzz_target!(|input: Input| {
    let Ok(value) = jsonshape::parse(&input.text) else {
        return;
    };
    let options = DecodeOptions {
        on_element_error: if input.skip {
            OnElementError::Skip
        } else {
            OnElementError::Abort
        },
        max_depth: usize::from(input.max_depth),
        deny_unknown_fields: input.deny_unknown_fields,
    };
    decode_all(&value, options);
});
