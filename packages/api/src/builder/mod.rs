//! Fluent query builder
//!
//! ```
//! use spjson::SpJson;
//!
//! let data = br#"{"properties":{"allOf":{"items":1}}}"#;
//! let items = SpJson::bytes(data).under("allOf").key("items").expect("valid JSON");
//! assert_eq!(items.len(), 1);
//! ```

pub mod core;

pub use self::core::*;
