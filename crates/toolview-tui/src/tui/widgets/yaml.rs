use thiserror::Error;

#[derive(Debug, Error)]
enum NormalizeError {
    #[error("not JSON: {0}")]
    Json(#[from] serde_json::Error),
    #[error("not YAML: {0}")]
    Yaml(#[from] serde_yaml::Error),
}

/// Reformat a JSON or YAML document as YAML for display.
///
/// Text that parses as neither is returned unchanged.
pub fn format_yaml(content: &str) -> String {
    json_to_yaml(content)
        .or_else(|_| yaml_to_yaml(content))
        .unwrap_or_else(|e| {
            tracing::trace!(error = %e, "Showing content as-is");
            content.to_string()
        })
}

fn json_to_yaml(content: &str) -> Result<String, NormalizeError> {
    let value: serde_json::Value = serde_json::from_str(content)?;
    Ok(serde_yaml::to_string(&value)?)
}

fn yaml_to_yaml(content: &str) -> Result<String, NormalizeError> {
    let value: serde_yaml::Value = serde_yaml::from_str(content)?;
    Ok(serde_yaml::to_string(&value)?)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn json_object_becomes_yaml() {
        let yaml = format_yaml(r#"{"a":1,"b":"x"}"#);

        assert_eq!(yaml, "a: 1\nb: x\n");
        let parsed: serde_yaml::Value = serde_yaml::from_str(&yaml).unwrap();
        assert!(parsed.get("a").is_some());
        assert!(parsed.get("b").is_some());
    }

    #[test]
    fn json_key_order_is_kept() {
        let yaml = format_yaml(r#"{"zeta":"","alpha":"Bot"}"#);
        assert_eq!(yaml, "zeta: ''\nalpha: Bot\n");
    }

    #[test]
    fn yaml_is_reformatted() {
        let yaml = format_yaml("name:   Bot\ntags: [one, two]\n");

        assert!(yaml.starts_with("name: Bot\n"));
        assert!(yaml.contains("- one"));
        assert!(yaml.contains("- two"));
    }

    #[test]
    fn invalid_text_passes_through() {
        for text in ["{ not: closed", "key: value: other"] {
            assert_eq!(format_yaml(text), text);
        }
    }
}
