//! # Config Commands

use tracing::debug;

use crate::state::AppConfig;

/// Returns the active configuration (layout policy, directories, file
/// name prefix) so the editor preview matches the export.
pub fn get_config(config: &AppConfig) -> AppConfig {
    debug!("get_config command");
    config.clone()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_serializes_camel_case() {
        let json = serde_json::to_value(get_config(&AppConfig::default())).unwrap();
        assert_eq!(json["companyCode"], "SKE");
        assert_eq!(json["layout"]["minTableRows"], 23);
        assert_eq!(json["layout"]["maxDisplayedTerms"], 4);
    }
}
