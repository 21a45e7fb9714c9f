// src/shared/api/response.rs
use actix_web::{http::StatusCode, HttpResponse};
use serde::Serialize;

/// Inner `data` envelope: every resource payload is nested one level,
/// so bodies read `{"status":"success","data":{"data":...}}`.
#[derive(Serialize)]
pub struct DataEnvelope<T: Serialize> {
    pub data: T,
}

#[derive(Serialize)]
pub struct ApiResponse<T: Serialize> {
    pub status: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub results: Option<usize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<DataEnvelope<T>>,
}

#[derive(Serialize)]
struct MessageData {
    message: String,
}

#[derive(Serialize)]
struct ErrorBody {
    status: &'static str,
    message: String,
}

impl<T: Serialize> ApiResponse<T> {
    pub fn success(data: T) -> HttpResponse {
        HttpResponse::Ok().json(ApiResponse {
            status: "success",
            results: None,
            message: None,
            data: Some(DataEnvelope { data }),
        })
    }

    pub fn created(data: T) -> HttpResponse {
        HttpResponse::Created().json(ApiResponse {
            status: "success",
            results: None,
            message: None,
            data: Some(DataEnvelope { data }),
        })
    }

    pub fn created_with_message(data: T, message: &str) -> HttpResponse {
        HttpResponse::Created().json(ApiResponse {
            status: "success",
            results: None,
            message: Some(message.to_string()),
            data: Some(DataEnvelope { data }),
        })
    }

    /// List responses carry a `results` count alongside the data.
    pub fn list(items: Vec<T>) -> HttpResponse
    where
        Vec<T>: Serialize,
    {
        HttpResponse::Ok().json(ApiResponse {
            status: "success",
            results: Some(items.len()),
            message: None,
            data: Some(DataEnvelope { data: items }),
        })
    }
}

impl ApiResponse<()> {
    pub fn no_content() -> HttpResponse {
        HttpResponse::NoContent().finish()
    }

    /// `{"status":"success","message":...}` without a data envelope.
    pub fn message(message: &str) -> HttpResponse {
        HttpResponse::Ok().json(ApiResponse::<()> {
            status: "success",
            results: None,
            message: Some(message.to_string()),
            data: None,
        })
    }

    /// `{"status":"success","data":{"data":{"message":...}}}`, the shape
    /// signup and forgot-password replies use.
    pub fn accepted_message(message: &str) -> HttpResponse {
        HttpResponse::Ok().json(ApiResponse {
            status: "success",
            results: None,
            message: None,
            data: Some(DataEnvelope {
                data: MessageData {
                    message: message.to_string(),
                },
            }),
        })
    }

    pub fn error(status: StatusCode, message: &str) -> HttpResponse {
        let label = if status.is_server_error() {
            "error"
        } else {
            "fail"
        };
        HttpResponse::build(status).json(ErrorBody {
            status: label,
            message: message.to_string(),
        })
    }

    pub fn bad_request(message: &str) -> HttpResponse {
        Self::error(StatusCode::BAD_REQUEST, message)
    }

    pub fn not_authorized(message: &str) -> HttpResponse {
        Self::error(StatusCode::UNAUTHORIZED, message)
    }

    pub fn internal_error() -> HttpResponse {
        Self::error(
            StatusCode::INTERNAL_SERVER_ERROR,
            "something went very wrong",
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::body::to_bytes;

    async fn body_json(resp: HttpResponse) -> serde_json::Value {
        let bytes = to_bytes(resp.into_body()).await.unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[actix_web::test]
    async fn success_wraps_data_twice() {
        let resp = ApiResponse::success(serde_json::json!({"id": 1}));
        assert_eq!(resp.status(), StatusCode::OK);
        let body = body_json(resp).await;
        assert_eq!(body["status"], "success");
        assert_eq!(body["data"]["data"]["id"], 1);
    }

    #[actix_web::test]
    async fn list_carries_results_count() {
        let resp = ApiResponse::list(vec![1, 2, 3]);
        let body = body_json(resp).await;
        assert_eq!(body["results"], 3);
        assert_eq!(body["data"]["data"].as_array().unwrap().len(), 3);
    }

    #[actix_web::test]
    async fn client_errors_are_fail_server_errors_are_error() {
        let resp = ApiResponse::bad_request("nope");
        let body = body_json(resp).await;
        assert_eq!(body["status"], "fail");
        assert_eq!(body["message"], "nope");

        let resp = ApiResponse::internal_error();
        assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);
        let body = body_json(resp).await;
        assert_eq!(body["status"], "error");
        assert_eq!(body["message"], "something went very wrong");
    }

    #[actix_web::test]
    async fn accepted_message_nests_under_data() {
        let resp = ApiResponse::accepted_message("check your email");
        let body = body_json(resp).await;
        assert_eq!(body["data"]["data"]["message"], "check your email");
        assert!(body.get("message").is_none());
    }
}
