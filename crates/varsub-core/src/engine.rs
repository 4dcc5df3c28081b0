//! The substitution engine
//!
//! Works on the JSON-serialized form of the selected subtree: serialize,
//! run the fixed-token pass in catalog order, run the three parameterized
//! passes, deserialize. Tokens that cannot be resolved stay byte-for-byte
//! verbatim; the input tree is never mutated.
//!
//! Every resolved value is JSON-string-escaped before insertion so
//! replacement text containing quotes, backslashes, or control characters
//! cannot break the serialized document. Regex replacements use `NoExpand`
//! so `$` in resolved values is never treated as a capture reference.

use regex::NoExpand;
use serde_json::Value;

use crate::catalog;
use crate::environment::Environment;
use crate::error::Result;
use crate::lookup;

/// Substitute every resolvable token in `value`, resolving against
/// `environment` and, for `${config:path}`, against `full_config`.
pub(crate) fn substitute(
    value: &Value,
    environment: &mut Environment<'_>,
    full_config: &Value,
) -> Result<Value> {
    let mut text = serde_json::to_string(value)?;

    for token in catalog::FIXED_TOKENS {
        if !text.contains(token.text) {
            continue;
        }
        let Some(resolved) = environment.resolve(token.accessor) else {
            tracing::debug!(token = token.text, "token left unresolved");
            continue;
        };
        if token.requires_integer && !parses_as_nonzero_integer(&resolved) {
            tracing::debug!(token = token.text, value = %resolved, "validation rejected resolved value");
            continue;
        }
        text = text.replace(token.text, &escape_fragment(&resolved));
    }

    text = replace_named_workspace_roots(text, environment);
    text = replace_env_references(text, environment);
    text = replace_config_references(text, full_config);

    Ok(serde_json::from_str(&text)?)
}

/// `${workspaceFolder:NAME}`: each distinct name is resolved independently;
/// duplicates are resolved once and reused; unmatched names stay verbatim.
fn replace_named_workspace_roots(mut text: String, environment: &mut Environment<'_>) -> String {
    let mut names: Vec<String> = Vec::new();
    for caps in catalog::NAMED_WORKSPACE_PATTERN.captures_iter(&text) {
        let name = caps[1].to_string();
        if !names.contains(&name) {
            names.push(name);
        }
    }

    for name in names {
        if let Some(path) = environment.named_workspace_root(&name) {
            // Literal replacement; the name may contain regex metacharacters.
            text = text.replace(
                &format!("${{workspaceFolder:{name}}}"),
                &escape_fragment(&path),
            );
        }
    }
    text
}

/// `${env:NAME}`: the first match in the document decides which variable is
/// looked up, and on success all `${env:...}` occurrences are replaced with
/// that one value. Known quirk, preserved for behavioural fidelity.
fn replace_env_references(text: String, environment: &Environment<'_>) -> String {
    let Some(name) = catalog::ENV_PATTERN
        .captures(&text)
        .map(|caps| caps[1].to_string())
    else {
        return text;
    };
    let Some(value) = environment.process_var(&name) else {
        tracing::debug!(variable = %name, "environment variable unresolved");
        return text;
    };
    let replacement = escape_fragment(&value);
    catalog::ENV_PATTERN
        .replace_all(&text, NoExpand(&replacement))
        .into_owned()
}

/// `${config:path}`: same first-match-determines-all-replacements quirk as
/// `${env:...}`.
fn replace_config_references(text: String, full_config: &Value) -> String {
    let Some(notation) = catalog::CONFIG_PATTERN
        .captures(&text)
        .map(|caps| caps[1].to_string())
    else {
        return text;
    };
    let Some(value) = lookup::get_path(full_config, &notation) else {
        tracing::debug!(notation = %notation, "config reference unresolved");
        return text;
    };
    let Some(stringified) = stringify_config_value(value) else {
        return text;
    };
    let replacement = escape_fragment(&stringified);
    catalog::CONFIG_PATTERN
        .replace_all(&text, NoExpand(&replacement))
        .into_owned()
}

/// Stringify a config value for insertion. Null and falsy scalars (false,
/// 0, empty string) count as unresolved, matching the host's historical
/// truthiness check; compound values insert their JSON text.
fn stringify_config_value(value: &Value) -> Option<String> {
    match value {
        Value::Null | Value::Bool(false) => None,
        Value::Number(n) if n.as_f64() == Some(0.0) => None,
        Value::String(s) if s.is_empty() => None,
        Value::Bool(true) => Some("true".to_string()),
        Value::Number(n) => Some(n.to_string()),
        Value::String(s) => Some(s.clone()),
        other => Some(other.to_string()),
    }
}

fn parses_as_nonzero_integer(value: &str) -> bool {
    value.parse::<i64>().map(|n| n != 0).unwrap_or(false)
}

/// JSON-escape a replacement fragment (the quoted form minus its quotes).
fn escape_fragment(raw: &str) -> String {
    let quoted = Value::String(raw.to_string()).to_string();
    quoted[1..quoted.len() - 1].to_string()
}
