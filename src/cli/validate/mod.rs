//! Validate command - binds a form offline and prints the result

use std::io::Read;
use std::path::PathBuf;

use anyhow::Context;
use clap::Args;
use serde_json::{Map, Value};

use crate::api::types::AccessKeyFormResponse;
use crate::domain::access_key::{bind_fields, AccessKeyFormData, FormErrors};

#[derive(Args, Debug)]
pub struct ValidateArgs {
    /// JSON file holding the request fields; reads stdin when omitted
    #[arg(short, long)]
    pub file: Option<PathBuf>,
}

/// Run the validate command
pub fn run(args: ValidateArgs) -> anyhow::Result<()> {
    let input = match &args.file {
        Some(path) => std::fs::read_to_string(path)
            .with_context(|| format!("failed to read {}", path.display()))?,
        None => {
            let mut buf = String::new();
            std::io::stdin()
                .read_to_string(&mut buf)
                .context("failed to read stdin")?;
            buf
        }
    };

    match validate_input(&input)? {
        Ok(form) => {
            let normalized = AccessKeyFormResponse::from(&form);
            println!("{}", serde_json::to_string_pretty(&normalized)?);
            Ok(())
        }
        Err(errors) => {
            for error in errors.errors() {
                eprintln!("{} ({})", error, error.kind.code());
            }
            anyhow::bail!("access key form rejected with {} error(s)", errors.len())
        }
    }
}

/// Parse a JSON object and bind it. The outer error is for unreadable input,
/// the inner one for field failures.
pub fn validate_input(input: &str) -> anyhow::Result<Result<AccessKeyFormData, FormErrors>> {
    let fields: Map<String, Value> =
        serde_json::from_str(input).context("input must be a JSON object")?;

    Ok(bind_fields(fields))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::access_key::{fields, FieldErrorKind};

    #[test]
    fn test_validate_input_success() {
        let form = validate_input(
            r#"{"keyCode": "my-key", "regionUUID": "11111111-1111-1111-1111-111111111111"}"#,
        )
        .unwrap()
        .unwrap();

        assert_eq!(form.key_code(), "my-key");
        assert_eq!(form.ssh_port(), 22);
    }

    #[test]
    fn test_validate_input_field_errors() {
        let errors = validate_input(r#"{"regionUUID": "11111111-1111-1111-1111-111111111111"}"#)
            .unwrap()
            .unwrap_err();

        assert!(errors.has(fields::KEY_CODE, FieldErrorKind::MissingRequiredField));
    }

    #[test]
    fn test_validate_input_rejects_non_object() {
        assert!(validate_input("[]").is_err());
        assert!(validate_input("not json").is_err());
    }
}
