//! YAML output formatter

use crate::models::OutlineReport;
use crate::output::FormatError;

/// Format report data as YAML
pub fn format_yaml(data: &OutlineReport) -> Result<String, FormatError> {
    serde_yaml::to_string(data).map_err(FormatError::from)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::output::fixtures;

    #[test]
    fn test_format_yaml() {
        let yaml = format_yaml(&fixtures::report()).unwrap();
        assert!(yaml.contains("root:"));
        assert!(yaml.contains("files:"));
        assert!(yaml.contains("kind: assignment"));
        assert!(yaml.contains("self.x"));
    }
}
