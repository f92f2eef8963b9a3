//! Parameter encoding for the Query protocol.
//!
//! The Query protocol takes every request as a flat, form-encoded map of
//! PascalCase dotted keys. Three mechanisms produce that map:
//!
//! - [`format_key`] turns snake_case path segments into the capitalized
//!   wire form (`reply_to_addresses` → `ReplyToAddresses`);
//! - [`flatten_params`] walks a nested object tree and emits one entry per
//!   leaf (`Message.Subject.Data`);
//! - [`member_list`]/[`member_maps`] encode sequences with the protocol's
//!   1-based `Prefix.member.N` convention.
//!
//! Absence drives omission throughout: `None` collections and pruned
//! struct fields emit no keys at all, which the service distinguishes from
//! empty values.

use std::collections::BTreeMap;

use serde::Serialize;
use serde_json::Value;

use crate::types::Destination;

/// Flat Query-protocol parameter map.
///
/// A `BTreeMap` keeps iteration deterministic, which the form encoder and
/// the tests both rely on; the protocol itself is order-insensitive.
pub type Params = BTreeMap<String, String>;

/// Format a parameter key into the capitalized form the service expects.
///
/// Each dot-delimited segment is capitalized independently; underscores
/// are removed and the following letter upper-cased. Already-formatted
/// keys pass through unchanged, so the function is idempotent.
pub fn format_key(key: &str) -> String {
    key.split('.')
        .map(format_segment)
        .collect::<Vec<_>>()
        .join(".")
}

fn format_segment(segment: &str) -> String {
    let mut formatted = String::with_capacity(segment.len());
    let mut capitalize = true;
    for ch in segment.chars() {
        if ch == '_' {
            capitalize = true;
            continue;
        }
        if capitalize {
            formatted.extend(ch.to_uppercase());
            capitalize = false;
        } else {
            formatted.push(ch);
        }
    }
    formatted
}

/// Flatten a nested object tree into dotted parameters under `root`.
///
/// Object values recurse with `.FormattedKey` appended to the path;
/// anything else terminates the branch as a leaf. Sequences are
/// deliberately terminal here; repeated fields go through
/// [`member_list`]/[`member_maps`] instead. `null` leaves (a pruned
/// optional that survived into the tree) emit nothing, and an empty
/// object contributes no keys for its branch.
pub fn flatten_params(root: &str, value: &Value) -> Params {
    let mut params = Params::new();
    flatten_into(&mut params, format_key(root), value);
    params
}

fn flatten_into(params: &mut Params, path: String, value: &Value) {
    match value {
        Value::Object(map) => {
            for (key, child) in map {
                flatten_into(params, format!("{}.{}", path, format_key(key)), child);
            }
        }
        Value::Null => {}
        leaf => {
            params.insert(path, leaf_to_string(leaf));
        }
    }
}

fn leaf_to_string(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

/// Flatten a serializable struct under `root`.
///
/// Struct fields marked `skip_serializing_if = "Option::is_none"` never
/// reach the tree, so optional-field omission falls out of the type
/// definitions.
pub(crate) fn flatten_struct<T: Serialize>(root: &str, value: &T) -> Params {
    let tree =
        serde_json::to_value(value).expect("wire types serialize to JSON infallibly");
    flatten_params(root, &tree)
}

/// Encode an ordered sequence with `member.N` indexing.
///
/// Produces `{FormattedKey}.member.{i}` → item for i = 1..N in the
/// sequence's order. `None` yields an empty map: an absent collection
/// contributes no parameter family, unlike an empty one.
pub fn member_list<I, S>(key: &str, items: Option<I>) -> Params
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut params = Params::new();
    let Some(items) = items else {
        return params;
    };
    let prefix = format_key(key);
    for (index, item) in items.into_iter().enumerate() {
        params.insert(
            format!("{}.member.{}", prefix, index + 1),
            item.as_ref().to_string(),
        );
    }
    params
}

/// Encode a sequence of flattened sub-objects with `member.N` indexing.
///
/// Each entry's parameters are re-rooted under
/// `{FormattedKey}.member.{i}.`; used for tags (`.Name`/`.Value` pairs)
/// and bulk-send destinations (a full nested destination per index).
pub fn member_maps<I>(key: &str, entries: Option<I>) -> Params
where
    I: IntoIterator<Item = Params>,
{
    let mut params = Params::new();
    let Some(entries) = entries else {
        return params;
    };
    let prefix = format_key(key);
    for (index, entry) in entries.into_iter().enumerate() {
        for (entry_key, value) in entry {
            params.insert(
                format!("{}.member.{}.{}", prefix, index + 1, entry_key),
                value,
            );
        }
    }
    params
}

/// Insert `key` only when the optional value is present.
pub(crate) fn insert_opt(params: &mut Params, key: &str, value: &Option<String>) {
    if let Some(value) = value {
        params.insert(key.to_string(), value.clone());
    }
}

/// Encode a [`Destination`]'s present recipient classes under `root`.
pub(crate) fn destination_params(root: &str, destination: &Destination) -> Params {
    let root = format_key(root);
    let mut params = Params::new();
    params.extend(member_list(
        &format!("{}.ToAddresses", root),
        destination.to_addresses.as_deref(),
    ));
    params.extend(member_list(
        &format!("{}.CcAddresses", root),
        destination.cc_addresses.as_deref(),
    ));
    params.extend(member_list(
        &format!("{}.BccAddresses", root),
        destination.bcc_addresses.as_deref(),
    ));
    params
}
