/// Status codes are uppercase snake-case, e.g. `READY_FOR_DEPLOY`.
pub fn is_valid_status_code(code: &str) -> bool {
    !code.is_empty() && code.chars().all(|c| c.is_ascii_uppercase() || c == '_')
}

/// Project codes are short uppercase alphanumerics, e.g. `WEBRED`.
pub fn is_valid_project_code(code: &str) -> bool {
    !code.is_empty()
        && code
            .chars()
            .all(|c| c.is_ascii_uppercase() || c.is_ascii_digit())
}

/// Language codes are exactly two lowercase letters.
pub fn is_valid_language_code(code: &str) -> bool {
    code.len() == 2 && code.chars().all(|c| c.is_ascii_lowercase())
}

/// Tag names are lowercase alphanumerics separated by single hyphens.
pub fn validate_tag_name(name: &str) -> Result<(), String> {
    if name.is_empty() {
        return Err("Tag name is required".to_string());
    }

    if name != name.to_lowercase() {
        return Err("Tag name must be lowercase".to_string());
    }

    if name.starts_with('-') || name.ends_with('-') {
        return Err("Tag name cannot start or end with a hyphen".to_string());
    }

    let all_segments_valid = name.split('-').all(|segment| {
        !segment.is_empty()
            && segment
                .chars()
                .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit())
    });
    if !all_segments_valid {
        return Err(
            "Tag name can only contain lowercase letters, numbers, and hyphens as separators"
                .to_string(),
        );
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_codes_accept_uppercase_snake_case() {
        assert!(is_valid_status_code("TO_DO"));
        assert!(is_valid_status_code("READY_FOR_DEPLOY"));
        assert!(!is_valid_status_code("to_do"));
        assert!(!is_valid_status_code("IN PROGRESS"));
        assert!(!is_valid_status_code(""));
    }

    #[test]
    fn project_codes_accept_uppercase_alphanumerics() {
        assert!(is_valid_project_code("WEBRED"));
        assert!(is_valid_project_code("X121"));
        assert!(!is_valid_project_code("webred"));
        assert!(!is_valid_project_code("WEB-RED"));
        assert!(!is_valid_project_code(""));
    }

    #[test]
    fn language_codes_must_be_two_lowercase_letters() {
        assert!(is_valid_language_code("en"));
        assert!(is_valid_language_code("de"));
        assert!(!is_valid_language_code("eng"));
        assert!(!is_valid_language_code("EN"));
        assert!(!is_valid_language_code("e"));
        assert!(!is_valid_language_code("e1"));
    }

    #[test]
    fn tag_names_accept_hyphen_separated_lowercase() {
        assert!(validate_tag_name("backend").is_ok());
        assert!(validate_tag_name("tech-debt").is_ok());
        assert!(validate_tag_name("v2-api-cleanup").is_ok());
    }

    #[test]
    fn tag_names_reject_uppercase() {
        let err = validate_tag_name("Backend").unwrap_err();
        assert_eq!(err, "Tag name must be lowercase");
    }

    #[test]
    fn tag_names_reject_edge_hyphens() {
        assert_eq!(
            validate_tag_name("-backend").unwrap_err(),
            "Tag name cannot start or end with a hyphen"
        );
        assert_eq!(
            validate_tag_name("backend-").unwrap_err(),
            "Tag name cannot start or end with a hyphen"
        );
    }

    #[test]
    fn tag_names_reject_double_hyphens_and_symbols() {
        assert!(validate_tag_name("tech--debt").is_err());
        assert!(validate_tag_name("tech_debt").is_err());
        assert!(validate_tag_name("tech debt").is_err());
    }
}
