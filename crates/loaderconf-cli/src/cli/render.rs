use loaderconf::{AttributeValue, ConfigFile, ConfigModel, Storage};
use serde::Serialize;

const UNSET: &str = "<unset>";

#[derive(Serialize)]
struct ShowOutput<'a> {
    path: String,
    loaded: bool,
    attributes: Vec<AttributeValue>,
    unknown_keys: Vec<&'a str>,
}

/// Aligned `name = value (key)` table followed by any unmapped keys.
pub fn show_text<M: ConfigModel, S: Storage>(conf: &ConfigFile<M, S>) -> String {
    let attributes = conf.attributes();
    let width = attributes.iter().map(|a| a.name.len()).max().unwrap_or(0);

    let mut out = String::new();
    if !conf.is_loaded() {
        out.push_str(&format!("# {} does not exist yet\n", conf.path().display()));
    }
    for attr in &attributes {
        let value = if attr.is_set { attr.value.as_str() } else { UNSET };
        out.push_str(&format!(
            "{:<width$} = {} ({})\n",
            attr.name,
            value,
            attr.key,
            width = width
        ));
    }

    let unknown = conf.unknown_keys();
    if !unknown.is_empty() {
        out.push_str(&format!("other keys: {}\n", unknown.join(", ")));
    }
    out
}

pub fn show_json<M: ConfigModel, S: Storage>(
    conf: &ConfigFile<M, S>,
) -> serde_json::Result<String> {
    let output = ShowOutput {
        path: conf.path().display().to_string(),
        loaded: conf.is_loaded(),
        attributes: conf.attributes(),
        unknown_keys: conf.unknown_keys(),
    };
    serde_json::to_string_pretty(&output)
}
