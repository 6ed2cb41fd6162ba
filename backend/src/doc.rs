//! OpenAPI documentation configuration.
//!
//! [`ApiDoc`] registers the user and health endpoints together with the
//! schema wrappers from [`crate::inbound::http::schemas`], which describe the
//! domain types without coupling them to utoipa.
//!
//! The generated document is served by Swagger UI in debug builds and printed
//! by the `openapi-dump` binary.

use crate::inbound::http::schemas::{ErrorCodeSchema, ErrorSchema, UserSchema};
use crate::inbound::http::users::CreateUserBody;
use utoipa::OpenApi;

/// OpenAPI document for the REST API.
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Users API",
        description = "Create and list users stored in PostgreSQL.",
        license(
            name = "Apache-2.0",
            url = "https://www.apache.org/licenses/LICENSE-2.0.html"
        )
    ),
    servers(
        (url = "/", description = "Relative to the deployment base URL")
    ),
    paths(
        crate::inbound::http::users::list_users,
        crate::inbound::http::users::create_user,
        crate::inbound::http::health::ready,
        crate::inbound::http::health::live,
    ),
    components(schemas(UserSchema, ErrorSchema, ErrorCodeSchema, CreateUserBody)),
    tags(
        (name = "users", description = "Operations related to users"),
        (name = "health", description = "Endpoints for health checks")
    )
)]
pub struct ApiDoc;

#[cfg(test)]
mod tests {
    //! Tests verifying the registered paths and schema field structure.

    use super::*;
    use rstest::rstest;
    use utoipa::openapi::RefOr;
    use utoipa::openapi::schema::Schema;

    // utoipa replaces :: with . in schema names
    const ERROR_SCHEMA_NAME: &str = "crate.domain.Error";
    const USER_SCHEMA_NAME: &str = "crate.domain.User";

    fn assert_object_schema_has_field(schema: &RefOr<Schema>, field: &str) {
        match schema {
            RefOr::T(Schema::Object(obj)) => {
                assert!(
                    obj.properties.contains_key(field),
                    "schema should have field '{field}'"
                );
            }
            _ => panic!("expected Object schema"),
        }
    }

    #[rstest]
    fn openapi_error_schema_has_required_fields() {
        let doc = ApiDoc::openapi();
        let schemas = &doc.components.as_ref().expect("components").schemas;
        let error_schema = schemas.get(ERROR_SCHEMA_NAME).expect("Error schema");

        assert_object_schema_has_field(error_schema, "code");
        assert_object_schema_has_field(error_schema, "message");
        assert_object_schema_has_field(error_schema, "traceId");
    }

    #[rstest]
    fn openapi_user_schema_has_wire_fields() {
        let doc = ApiDoc::openapi();
        let schemas = &doc.components.as_ref().expect("components").schemas;
        let user_schema = schemas.get(USER_SCHEMA_NAME).expect("User schema");

        for field in ["id", "name", "email"] {
            assert_object_schema_has_field(user_schema, field);
        }
    }

    #[rstest]
    fn users_path_documents_list_and_create() {
        let doc = ApiDoc::openapi();
        let item = doc.paths.paths.get("/users").expect("/users path");

        assert!(item.get.is_some(), "GET /users documented");
        let post = item.post.as_ref().expect("POST /users documented");
        assert!(post.responses.responses.contains_key("201"));
        assert!(post.responses.responses.contains_key("400"));
    }
}
