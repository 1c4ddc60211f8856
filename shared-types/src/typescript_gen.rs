use ts_rs::TS;

pub fn generate_typescript_definitions(
    type_names: &[&str],
) -> Result<String, Box<dyn std::error::Error>> {
    if type_names.is_empty() {
        return Err("No type names provided".into());
    }

    let mut definitions = Vec::new();

    for name in type_names {
        let type_def = export_type(name)?;
        let cleaned = clean_type(type_def);

        if !cleaned.trim().is_empty() {
            definitions.push(cleaned);
        }
    }

    Ok(definitions.join("\n\n"))
}

/// Every exportable wire type, in the order the generated file lists them.
pub const ALL_TYPE_NAMES: &[&str] = &[
    "ExecuteQueryRequest",
    "ExecuteQueryResponse",
    "PracticeErrorResponse",
    "ColumnDescriptor",
    "SchemaResponse",
    "SampleQuery",
    "SampleQueriesResponse",
    "RegisterRequest",
    "LoginRequest",
    "UserRecord",
    "ProgressResponse",
    "MarkCompletedRequest",
    "SaveQuizScoreRequest",
    "SaveQuizScoreResponse",
    "Certificate",
    "CertificateVerification",
    "MessageResponse",
];

fn export_type(name: &str) -> Result<String, Box<dyn std::error::Error>> {
    use crate::*;

    let result = match name {
        "ExecuteQueryRequest" => ExecuteQueryRequest::export_to_string()?,
        "ExecuteQueryResponse" => ExecuteQueryResponse::export_to_string()?,
        "PracticeErrorResponse" => PracticeErrorResponse::export_to_string()?,
        "ColumnDescriptor" => ColumnDescriptor::export_to_string()?,
        "SchemaResponse" => SchemaResponse::export_to_string()?,
        "SampleQuery" => SampleQuery::export_to_string()?,
        "SampleQueriesResponse" => SampleQueriesResponse::export_to_string()?,

        "RegisterRequest" => RegisterRequest::export_to_string()?,
        "LoginRequest" => LoginRequest::export_to_string()?,
        "UserRecord" => UserRecord::export_to_string()?,
        "ProgressResponse" => ProgressResponse::export_to_string()?,
        "MarkCompletedRequest" => MarkCompletedRequest::export_to_string()?,
        "SaveQuizScoreRequest" => SaveQuizScoreRequest::export_to_string()?,
        "SaveQuizScoreResponse" => SaveQuizScoreResponse::export_to_string()?,
        "Certificate" => Certificate::export_to_string()?,
        "CertificateVerification" => CertificateVerification::export_to_string()?,
        "MessageResponse" => MessageResponse::export_to_string()?,

        _ => {
            return Err(format!(
                "Unknown type: '{}'. Available types can be found in shared-types/src/",
                name
            )
            .into());
        }
    };

    Ok(result)
}

fn clean_type(mut type_def: String) -> String {
    type_def.retain(|c| c != '\r');

    let lines: Vec<&str> = type_def.lines().collect();

    let filtered: Vec<&str> = lines
        .iter()
        .filter(|line| {
            let trimmed = line.trim();
            !trimmed.starts_with("import type")
                && !trimmed.starts_with("// This file was generated")
        })
        .cloned()
        .collect();

    filtered.join("\n").trim().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generate_single_type() {
        let result = generate_typescript_definitions(&["UserRecord"]).unwrap();
        assert!(result.contains("UserRecord"));
        assert!(result.contains("id: number"));
    }

    #[test]
    fn test_generate_multiple_types() {
        let result =
            generate_typescript_definitions(&["SampleQuery", "ColumnDescriptor"]).unwrap();
        assert!(result.contains("SampleQuery"));
        assert!(result.contains("ColumnDescriptor"));
    }

    #[test]
    fn test_all_type_names_export() {
        let result = generate_typescript_definitions(ALL_TYPE_NAMES).unwrap();
        assert!(result.contains("ExecuteQueryResponse"));
        assert!(result.contains("CertificateVerification"));
    }

    #[test]
    fn test_unknown_type_error() {
        let result = generate_typescript_definitions(&["NonExistentType"]);
        assert!(result.is_err());
        assert!(result.unwrap_err().to_string().contains("Unknown type"));
    }

    #[test]
    fn test_empty_type_names() {
        let result = generate_typescript_definitions(&[]);
        assert!(result.is_err());
    }

    #[test]
    fn test_cleaned_output() {
        let result = generate_typescript_definitions(&["SchemaResponse"]).unwrap();
        assert!(!result.contains("import type"));
        assert!(!result.contains("This file was generated"));
    }
}
