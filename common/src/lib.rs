use validator::ValidationErrors;

/// Flattens `validator` field errors into a single `;`-separated message
/// suitable for an API error response.
pub fn format_validation_errors(errors: &ValidationErrors) -> String {
    errors
        .field_errors()
        .values()
        .flat_map(|errs| {
            errs.iter()
                .filter_map(|e| e.message.as_ref().map(|m| m.to_string()))
        })
        .collect::<Vec<_>>()
        .join("; ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use validator::Validate;

    #[derive(Validate)]
    struct Form {
        #[validate(length(min = 3, message = "Title must be at least 3 characters"))]
        title: String,
        #[validate(range(min = 0, max = 100, message = "Pass score must be between 0 and 100"))]
        pass_score: i32,
    }

    #[test]
    fn joins_field_messages() {
        let form = Form {
            title: "ab".into(),
            pass_score: 120,
        };
        let msg = format_validation_errors(&form.validate().unwrap_err());
        assert!(msg.contains("Title must be at least 3 characters"));
        assert!(msg.contains("Pass score must be between 0 and 100"));
    }
}
