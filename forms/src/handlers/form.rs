use actix_web::{
    http::StatusCode,
    web::{self, Bytes},
    HttpMessage, HttpRequest, HttpResponse,
};
use common::{context::Context, entities::submission::CreateSubmission};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::{error, service::form::FormService};

/// Path served by the Lambda deployment.
pub const SUBMIT_FORM_PATH: &str = "/api/submit-form";
/// Path served by the standalone server.
pub const FORM_PATH: &str = "/api/form";

#[derive(Debug, Serialize, Deserialize)]
pub struct MessageResponse {
    pub message: String,
}

impl MessageResponse {
    fn new(message: &str) -> Self {
        Self {
            message: message.to_string(),
        }
    }
}

pub fn configure_service(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::resource([SUBMIT_FORM_PATH, FORM_PATH])
            .route(web::post().to(submit_form))
            .default_service(web::to(method_not_allowed)),
    );
}

/// Reads the posted form the way a lenient JSON body parser does: bodies that
/// are empty, not declared as JSON, or not a JSON object read as `{}`.
fn read_form(req: &HttpRequest, body: &[u8]) -> error::Result<CreateSubmission> {
    let is_json = matches!(
        req.mime_type(),
        Ok(Some(mime)) if mime.subtype() == "json" || mime.suffix().map_or(false, |s| s == "json")
    );
    if !is_json || body.iter().all(u8::is_ascii_whitespace) {
        return Ok(CreateSubmission::default());
    }

    match serde_json::from_slice::<Value>(body)? {
        Value::Object(fields) => Ok(serde_json::from_value(Value::Object(fields))?),
        _ => Ok(CreateSubmission::default()),
    }
}

pub async fn submit_form(
    context: Context,
    req: HttpRequest,
    body: Bytes,
) -> error::Result<HttpResponse> {
    let form = read_form(&req, &body)?;
    FormService::new(context).submit(form).await?;
    Ok(HttpResponse::Ok().json(MessageResponse::new("Form submitted successfully!")))
}

pub async fn method_not_allowed() -> HttpResponse {
    HttpResponse::build(StatusCode::METHOD_NOT_ALLOWED)
        .json(MessageResponse::new("Method Not Allowed"))
}
