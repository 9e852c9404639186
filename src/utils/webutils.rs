use std::any::Any;
use std::panic::AssertUnwindSafe;

use actix_multipart::Multipart;
use actix_web::{
    body::MessageBody,
    dev::{Payload, ServiceRequest, ServiceResponse},
    error::ErrorInternalServerError,
    middleware::Next,
    web, FromRequest, HttpMessage, HttpRequest,
};
use futures::future::{FutureExt, LocalBoxFuture};
use futures::TryStreamExt;
use log::error;
use serde::de::DeserializeOwned;
use serde_json::{Map, Value};

use crate::types::error::AppError;

const FORM_CONTENT_TYPE: &str = "application/x-www-form-urlencoded";
const MULTIPART_CONTENT_TYPE: &str = "multipart/form-data";

/// Request body decoded from a urlencoded form, a multipart form or JSON,
/// chosen by content type. Missing fields fall back to the target's serde
/// defaults.
#[derive(Debug)]
pub struct Bind<T>(pub T);

impl<T> Bind<T> {
    pub fn into_inner(self) -> T {
        self.0
    }
}

impl<T: DeserializeOwned + 'static> FromRequest for Bind<T> {
    type Error = AppError;
    type Future = LocalBoxFuture<'static, Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, payload: &mut Payload) -> Self::Future {
        match req.content_type() {
            FORM_CONTENT_TYPE => {
                let form = web::Form::<T>::from_request(req, payload);
                Box::pin(async move {
                    form.await
                        .map(|f| Bind(f.into_inner()))
                        .map_err(|e| AppError::BadRequest(e.to_string()))
                })
            }
            MULTIPART_CONTENT_TYPE => {
                let multipart = Multipart::from_request(req, payload);
                Box::pin(async move {
                    let mut multipart = multipart
                        .await
                        .map_err(|e| AppError::BadRequest(e.to_string()))?;
                    let fields = multipart_text_fields(&mut multipart).await?;
                    serde_json::from_value(Value::Object(fields))
                        .map(Bind)
                        .map_err(|e| AppError::BadRequest(e.to_string()))
                })
            }
            _ => {
                let json = web::Json::<T>::from_request(req, payload);
                Box::pin(async move {
                    json.await
                        .map(|j| Bind(j.into_inner()))
                        .map_err(|e| AppError::BadRequest(e.to_string()))
                })
            }
        }
    }
}

/// Text parts of a multipart body keyed by field name. File parts are drained
/// and skipped; the first value wins for repeated names.
async fn multipart_text_fields(multipart: &mut Multipart) -> Result<Map<String, Value>, AppError> {
    let mut fields = Map::new();

    while let Some(mut field) = multipart
        .try_next()
        .await
        .map_err(|e| AppError::BadRequest(e.to_string()))?
    {
        let Some(name) = field.name().map(str::to_owned) else {
            continue;
        };
        let is_file = field
            .content_disposition()
            .and_then(|cd| cd.get_filename())
            .is_some();

        let mut data = Vec::new();
        while let Some(chunk) = field
            .try_next()
            .await
            .map_err(|e| AppError::BadRequest(e.to_string()))?
        {
            data.extend_from_slice(&chunk);
        }
        if is_file {
            continue;
        }

        let value = String::from_utf8(data)
            .map_err(|_| AppError::BadRequest(format!("field {name:?} is not utf-8")))?;
        fields.entry(name).or_insert(Value::String(value));
    }

    Ok(fields)
}

/// Turns a panicking handler into a 500 instead of tearing down the connection.
pub async fn recover(
    req: ServiceRequest,
    next: Next<impl MessageBody + 'static>,
) -> Result<ServiceResponse<impl MessageBody>, actix_web::Error> {
    let method = req.method().clone();
    let path = req.path().to_owned();

    match AssertUnwindSafe(async move { next.call(req).await })
        .catch_unwind()
        .await
    {
        Ok(res) => res,
        Err(panic) => {
            error!(
                "recovered from panic in {} {}: {}",
                method,
                path,
                panic_message(&*panic)
            );
            Err(ErrorInternalServerError("internal server error"))
        }
    }
}

fn panic_message(panic: &(dyn Any + Send)) -> &str {
    if let Some(s) = panic.downcast_ref::<&str>() {
        s
    } else if let Some(s) = panic.downcast_ref::<String>() {
        s
    } else {
        "unknown panic"
    }
}

/// Last path component of an uploaded filename. Rejects names that would
/// resolve outside the upload directory.
pub fn safe_file_name(name: &str) -> Result<String, AppError> {
    let base = name.rsplit(['/', '\\']).next().unwrap_or_default().trim();

    if base.is_empty() || base == "." || base == ".." || base.contains('\0') {
        return Err(AppError::BadRequest(format!("invalid file name: {name:?}")));
    }

    Ok(base.to_string())
}
