//! OpenAPI schema definitions for domain types.
//!
//! Domain types stay framework-agnostic by not deriving `ToSchema`; these
//! wrappers mirror their wire shape and register under the domain names.

use utoipa::ToSchema;

/// OpenAPI schema for [`crate::domain::ErrorCode`].
#[derive(ToSchema)]
#[schema(as = crate::domain::ErrorCode)]
pub enum ErrorCodeSchema {
    /// The request is malformed or fails validation.
    #[schema(rename = "invalid_request")]
    InvalidRequest,
    /// The user store could not be reached.
    #[schema(rename = "store_unavailable")]
    StoreUnavailable,
    /// The user store rejected the write because of a schema constraint.
    #[schema(rename = "constraint_violation")]
    ConstraintViolation,
    /// An unexpected error occurred on the server.
    #[schema(rename = "internal_error")]
    InternalError,
}

/// OpenAPI schema for [`crate::domain::Error`].
#[derive(ToSchema)]
#[schema(as = crate::domain::Error, rename_all = "camelCase")]
#[expect(
    dead_code,
    reason = "Used only for OpenAPI schema generation via utoipa"
)]
pub struct ErrorSchema {
    /// Stable machine-readable error code.
    #[schema(example = "invalid_request")]
    code: ErrorCodeSchema,
    /// Human-readable message returned to clients.
    #[schema(example = "name must not be empty")]
    message: String,
    /// Correlation identifier matching the `trace-id` response header.
    #[schema(example = "3fa85f64-5717-4562-b3fc-2c963f66afa6")]
    trace_id: Option<String>,
    /// Supplementary error details for clients.
    details: Option<serde_json::Value>,
}

/// OpenAPI schema for [`crate::domain::User`].
#[derive(ToSchema)]
#[schema(as = crate::domain::User)]
#[expect(
    dead_code,
    reason = "Used only for OpenAPI schema generation via utoipa"
)]
pub struct UserSchema {
    /// Store-assigned identifier.
    #[schema(example = 1, minimum = 1)]
    id: i32,
    /// User name.
    #[schema(example = "Alice")]
    name: String,
    /// Contact email.
    #[schema(example = "alice@example.com")]
    email: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use utoipa::PartialSchema;

    fn schema_to_json<T: PartialSchema>() -> String {
        serde_json::to_string(&T::schema()).expect("schema serialises to JSON")
    }

    #[rstest]
    fn error_schema_uses_camel_case_trace_id() {
        let schema_json = schema_to_json::<ErrorSchema>();
        // utoipa replaces :: with . in schema names
        assert_eq!(ErrorSchema::name(), "crate.domain.Error");
        assert!(schema_json.contains("traceId"), "{schema_json}");
    }

    #[rstest]
    fn user_schema_lists_wire_fields() {
        let schema_json = schema_to_json::<UserSchema>();
        assert_eq!(UserSchema::name(), "crate.domain.User");
        for field in ["id", "name", "email"] {
            assert!(schema_json.contains(field), "missing {field}");
        }
    }

    #[rstest]
    #[case("invalid_request")]
    #[case("store_unavailable")]
    #[case("constraint_violation")]
    #[case("internal_error")]
    fn error_code_schema_variants_match_domain(#[case] variant: &str) {
        assert!(schema_to_json::<ErrorCodeSchema>().contains(variant));
    }
}
