//! Shared fixtures for rendering tests

use serde_json::{json, Value};

/// Flat document with one scalar of each type
pub(super) fn simple_doc() -> Value {
    json!({
        "name": "Ann",
        "title": "My Title",
        "count": 42,
        "price": 9.99,
        "enabled": true,
        "empty": null
    })
}

/// Document with nested objects and collections
pub(super) fn nested_doc() -> Value {
    json!({
        "status": "active",
        "project": { "name": "demo", "version": "1.2.0" },
        "items": [
            { "name": "alpha", "tags": ["x", "y"] },
            { "name": "beta", "tags": ["z"] }
        ],
        "nums": [1, 2, 3],
        "empty_list": []
    })
}
