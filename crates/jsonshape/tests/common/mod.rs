#![allow(dead_code)]
#![allow(missing_docs)]

use jsonshape::record;

record! {
    #[derive(Debug, Clone, PartialEq)]
    pub struct Dog {
        pub name: String,
        pub age: i64,
    }
}

record! {
    #[derive(Debug, Clone, PartialEq)]
    pub struct Kennel {
        pub data: Vec<Dog>,
    }
}

pub fn tory() -> Dog {
    Dog {
        name: "Tory".into(),
        age: 3,
    }
}

pub const BASIC: &str = r#"
{
    "name": "Tory",
    "age": 3
}
"#;

pub const ARRAY: &str = r#"
[
    { "name": "Tory", "age": 3 },
    { "name": "Tory", "age": 3 }
]
"#;

pub const DICTIONARY: &str = r#"
{
    "data": [
        { "name": "Tory", "age": 3 },
        { "name": "Tory", "age": 3 }
    ]
}
"#;

/// Same as `BASIC`, with the trailing comma hand-written fixtures tend to have.
pub const BASIC_TRAILING_COMMA: &str = r#"
{
    "name": "Tory",
    "age": 3,
}
"#;
