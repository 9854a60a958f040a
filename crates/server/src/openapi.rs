use utoipa::OpenApi;
use utoipa::ToSchema;

#[derive(ToSchema)]
pub struct HealthResponse { pub status: String }

/// `operand1` must be a JSON number; anything else is answered with 415.
#[derive(ToSchema)]
pub struct CalculationRequestDoc {
    /// One of add, subtract, multiply, divide, sqrt
    #[schema(example = "add")]
    pub operation: String,
    pub operand1: f64,
    /// Optional; defaults to 0 for add/subtract and 1 for multiply, ignored by sqrt
    pub operand2: Option<f64>,
}

#[derive(ToSchema)]
pub struct CalculationDoc {
    pub id: i32,
    pub operation: String,
    pub operand1: f64,
    pub operand2: Option<f64>,
    pub result: f64,
}

#[derive(ToSchema)]
pub struct ErrorDoc { pub detail: String }

#[derive(ToSchema)]
pub struct MessageDoc { pub message: String }

#[derive(OpenApi)]
#[openapi(
    paths(
        crate::routes::root,
        crate::routes::health,
        crate::routes::calculations::create,
        crate::routes::calculations::list,
        crate::routes::calculations::get,
        crate::routes::calculations::delete,
        crate::routes::admin::admin,
    ),
    components(
        schemas(
            HealthResponse,
            CalculationRequestDoc,
            CalculationDoc,
            ErrorDoc,
            MessageDoc,
        )
    ),
    tags(
        (name = "health"),
        (name = "calculations"),
        (name = "admin")
    )
)]
pub struct ApiDoc;
