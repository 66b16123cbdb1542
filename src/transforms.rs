//! Built-in record transforms.

mod concat_key;

pub use concat_key::{
    ConcatenateKey, ID_FIELD, KEY_DELIMITER_CONFIG, KEY_DELIMITER_DEFAULT, KEY_FIELDS_CONFIG,
};
