use linkrouter::errors::{LinkRouterError, Result};
use std::error::Error;

#[cfg(test)]
mod error_creation_tests {
    use super::*;

    #[test]
    fn test_not_found_error() {
        let error = LinkRouterError::not_found("link 'go' not found by short");

        assert!(matches!(error, LinkRouterError::NotFound(_)));
        assert_eq!(error.code(), "E001");
        assert!(error.to_string().contains("Link Not Found"));
        assert!(error.to_string().contains("'go'"));
    }

    #[test]
    fn test_no_destination_resolved_error() {
        let error = LinkRouterError::no_destination_resolved("nothing matched");

        assert!(error.is_unresolved());
        assert_eq!(error.code(), "E002");
        assert!(error.to_string().contains("No Destination Resolved"));
    }

    #[test]
    fn test_malformed_predicate_error() {
        let error = LinkRouterError::malformed_predicate("unknown variant `XOR`");

        assert!(matches!(error, LinkRouterError::MalformedPredicate(_)));
        assert!(!error.is_unresolved());
        assert_eq!(error.message(), "unknown variant `XOR`");
    }

    #[test]
    fn test_codes_are_unique() {
        let errors = [
            LinkRouterError::not_found(""),
            LinkRouterError::no_destination_resolved(""),
            LinkRouterError::malformed_predicate(""),
            LinkRouterError::short_code_conflict(""),
            LinkRouterError::validation(""),
            LinkRouterError::file_operation(""),
            LinkRouterError::serialization(""),
            LinkRouterError::config(""),
            LinkRouterError::geoip(""),
        ];
        let mut codes: Vec<&str> = errors.iter().map(|e| e.code()).collect();
        codes.sort_unstable();
        codes.dedup();
        assert_eq!(codes.len(), errors.len());
    }
}

#[cfg(test)]
mod error_conversion_tests {
    use super::*;

    #[test]
    fn test_io_error_conversion() {
        let io_error = std::io::Error::new(std::io::ErrorKind::NotFound, "links.json missing");
        let error: LinkRouterError = io_error.into();

        assert!(matches!(error, LinkRouterError::FileOperation(_)));
        assert!(error.to_string().contains("links.json missing"));
    }

    #[test]
    fn test_serde_json_error_conversion() {
        let json_error = serde_json::from_str::<serde_json::Value>("{invalid json").unwrap_err();
        let error: LinkRouterError = json_error.into();

        assert!(matches!(error, LinkRouterError::Serialization(_)));
    }

    #[test]
    fn test_question_mark_propagation() {
        fn parse(raw: &str) -> Result<serde_json::Value> {
            Ok(serde_json::from_str(raw)?)
        }
        assert!(parse("[]").is_ok());
        assert!(matches!(
            parse("["),
            Err(LinkRouterError::Serialization(_))
        ));
    }
}

#[cfg(test)]
mod error_format_tests {
    use super::*;

    #[test]
    fn test_format_simple() {
        let error = LinkRouterError::validation("URL cannot be empty");
        assert_eq!(error.format_simple(), "Validation Error: URL cannot be empty");
    }

    #[test]
    fn test_format_colored_contains_code() {
        let error = LinkRouterError::short_code_conflict("go");
        let colored = error.format_colored();
        assert!(colored.contains("E004"));
        assert!(colored.contains("go"));
    }

    #[test]
    fn test_is_std_error() {
        let error = LinkRouterError::config("bad backend");
        let dyn_error: &dyn Error = &error;
        assert!(dyn_error.source().is_none());
    }
}
