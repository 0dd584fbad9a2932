#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic, clippy::indexing_slicing)]

use std::io::Cursor;

use axum::Router;
use axum::body::Body;
use axum::http::header::{AUTHORIZATION, CONTENT_TYPE};
use axum::http::{Request, StatusCode};
use axum::response::Response;
use base64::{Engine as _, engine::general_purpose::STANDARD};
use http_body_util::BodyExt;
use image::{DynamicImage, ImageFormat, Rgba, RgbaImage};
use secrecy::SecretString;
use serde_json::Value;
use tower::ServiceExt;

use pictrim_application::infrastructure_config::Config;
use server::bootstrap::router::create_router;
use server::bootstrap::state::AppState;

const API_TOKEN: &str = "test-token";
const BOUNDARY: &str = "pictrim-test-boundary";

fn test_config() -> Config {
    let mut config = Config::default();
    config.auth.api_token = SecretString::from(API_TOKEN.to_string());
    config
}

fn app() -> Router {
    create_router(AppState::new(test_config()))
}

fn app_with_upload_limit(max_upload_bytes: usize) -> Router {
    let mut config = test_config();
    config.upload.max_upload_bytes = max_upload_bytes;
    create_router(AppState::new(config))
}

struct MultipartBuilder {
    body: Vec<u8>,
}

impl MultipartBuilder {
    fn new() -> Self {
        Self { body: Vec::new() }
    }

    fn file(mut self, file_name: &str, content_type: &str, bytes: &[u8]) -> Self {
        self.body.extend_from_slice(
            format!(
                "--{BOUNDARY}\r\nContent-Disposition: form-data; name=\"file\"; filename=\"{file_name}\"\r\nContent-Type: {content_type}\r\n\r\n"
            )
            .as_bytes(),
        );
        self.body.extend_from_slice(bytes);
        self.body.extend_from_slice(b"\r\n");
        self
    }

    fn text(mut self, name: &str, value: &str) -> Self {
        self.body.extend_from_slice(
            format!("--{BOUNDARY}\r\nContent-Disposition: form-data; name=\"{name}\"\r\n\r\n{value}\r\n")
                .as_bytes(),
        );
        self
    }

    fn build(mut self) -> Vec<u8> {
        self.body
            .extend_from_slice(format!("--{BOUNDARY}--\r\n").as_bytes());
        self.body
    }
}

fn trim_request(body: Vec<u8>, token: Option<&str>) -> Request<Body> {
    let mut builder = Request::builder()
        .method("POST")
        .uri("/image/trim")
        .header(
            CONTENT_TYPE,
            format!("multipart/form-data; boundary={BOUNDARY}"),
        );
    if let Some(token) = token {
        builder = builder.header(AUTHORIZATION, token);
    }
    builder.body(Body::from(body)).unwrap()
}

async fn response_json(response: Response) -> Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

fn encode(img: RgbaImage, format: ImageFormat) -> Vec<u8> {
    let dynamic = DynamicImage::ImageRgba8(img);
    // The jpeg encoder takes no alpha channel.
    let dynamic = if format == ImageFormat::Jpeg {
        DynamicImage::ImageRgb8(dynamic.to_rgb8())
    } else {
        dynamic
    };

    let mut out = Vec::new();
    dynamic.write_to(&mut Cursor::new(&mut out), format).unwrap();
    out
}

/// 200x100 white canvas with black content filling everything but a 20px
/// border on each side.
fn bordered_png() -> Vec<u8> {
    let mut img = RgbaImage::from_pixel(200, 100, Rgba([255, 255, 255, 255]));
    for y in 20..80 {
        for x in 20..180 {
            img.put_pixel(x, y, Rgba([0, 0, 0, 255]));
        }
    }
    encode(img, ImageFormat::Png)
}

/// Checkerboard with 50px blocks: content touches all four edges and the
/// pattern survives lossy compression, so trimming is a no-op.
fn checkerboard(size: u32, format: ImageFormat) -> Vec<u8> {
    let img = RgbaImage::from_fn(size, size, |x, y| {
        if (x / 50 + y / 50) % 2 == 0 {
            Rgba([0, 0, 0, 255])
        } else {
            Rgba([255, 255, 255, 255])
        }
    });
    encode(img, format)
}

fn decoded_output(json: &Value) -> DynamicImage {
    let encoded = json["img_base64"].as_str().unwrap();
    let bytes = STANDARD.decode(encoded).unwrap();
    image::load_from_memory(&bytes).unwrap()
}

#[tokio::test]
async fn root_endpoint_is_public() {
    let response = app()
        .oneshot(Request::get("/").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let json = response_json(response).await;
    assert_eq!(json["message"], "PicTrim image processing API");
    assert_eq!(json["status"], "running");
}

#[tokio::test]
async fn health_endpoint_reports_configuration() {
    let response = app()
        .oneshot(Request::get("/health").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let json = response_json(response).await;
    assert_eq!(json["ok"], true);
    assert_eq!(json["environment"], "development");
    assert!(json["limits"]["max_upload_bytes"].is_number());
}

#[tokio::test]
async fn missing_authorization_header_is_rejected() {
    let body = MultipartBuilder::new()
        .file("img.png", "image/png", &bordered_png())
        .build();
    let response = app().oneshot(trim_request(body, None)).await.unwrap();

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    let json = response_json(response).await;
    assert_eq!(json["ok"], false);
    assert_eq!(json["error"], "Authorization header missing");
}

#[tokio::test]
async fn malformed_authorization_scheme_is_rejected() {
    let body = MultipartBuilder::new()
        .file("img.png", "image/png", &bordered_png())
        .build();
    let response = app()
        .oneshot(trim_request(body, Some(&format!("Token {API_TOKEN}"))))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    let json = response_json(response).await;
    assert_eq!(json["error"], "Invalid authorization format. Use: Bearer <token>");
}

#[tokio::test]
async fn wrong_token_is_rejected() {
    let body = MultipartBuilder::new()
        .file("img.png", "image/png", &bordered_png())
        .build();
    let response = app()
        .oneshot(trim_request(body, Some("Bearer nope")))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    let json = response_json(response).await;
    assert_eq!(json["error"], "Invalid token");
}

#[tokio::test]
async fn trim_removes_a_uniform_border() {
    let body = MultipartBuilder::new()
        .file("img.png", "image/png", &bordered_png())
        .build();
    let response = app()
        .oneshot(trim_request(body, Some(&format!("Bearer {API_TOKEN}"))))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let json = response_json(response).await;
    assert_eq!(json["file_format"], "png");

    let output = decoded_output(&json);
    assert_eq!((output.width(), output.height()), (160, 60));
}

#[tokio::test]
async fn width_only_resize_preserves_aspect_ratio_after_trim() {
    let body = MultipartBuilder::new()
        .file("img.png", "image/png", &bordered_png())
        .text("resize_width", "80")
        .build();
    let response = app()
        .oneshot(trim_request(body, Some(&format!("Bearer {API_TOKEN}"))))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let json = response_json(response).await;

    // Trim yields 160x60, then the 80px width keeps the 8:3 ratio.
    let output = decoded_output(&json);
    assert_eq!((output.width(), output.height()), (80, 30));
}

#[tokio::test]
async fn jpeg_resize_with_explicit_quality() {
    let body = MultipartBuilder::new()
        .file("photo.jpg", "image/jpeg", &checkerboard(400, ImageFormat::Jpeg))
        .text("resize_width", "100")
        .text("quality", "80")
        .build();
    let response = app()
        .oneshot(trim_request(body, Some(&format!("Bearer {API_TOKEN}"))))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let json = response_json(response).await;
    assert_eq!(json["file_format"], "jpeg");

    let output = decoded_output(&json);
    assert_eq!((output.width(), output.height()), (100, 100));
}

#[tokio::test]
async fn exact_resize_ignores_the_aspect_ratio() {
    let body = MultipartBuilder::new()
        .file("photo.jpg", "image/jpeg", &checkerboard(400, ImageFormat::Jpeg))
        .text("resize_width", "120")
        .text("resize_height", "40")
        .build();
    let response = app()
        .oneshot(trim_request(body, Some(&format!("Bearer {API_TOKEN}"))))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let output = decoded_output(&response_json(response).await);
    assert_eq!((output.width(), output.height()), (120, 40));
}

#[tokio::test]
async fn webp_upload_round_trips() {
    let body = MultipartBuilder::new()
        .file("pic.webp", "image/webp", &checkerboard(200, ImageFormat::WebP))
        .text("quality", "60")
        .build();
    let response = app()
        .oneshot(trim_request(body, Some(&format!("Bearer {API_TOKEN}"))))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let json = response_json(response).await;
    assert_eq!(json["file_format"], "webp");

    let output = decoded_output(&json);
    assert_eq!((output.width(), output.height()), (200, 200));
}

#[tokio::test]
async fn renamed_text_file_is_a_decode_error() {
    let body = MultipartBuilder::new()
        .file("note.png", "image/png", b"hello world, not an image")
        .build();
    let response = app()
        .oneshot(trim_request(body, Some(&format!("Bearer {API_TOKEN}"))))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let json = response_json(response).await;
    assert_eq!(json["ok"], false);
    assert_eq!(json["status"], 400);
}

#[tokio::test]
async fn unsupported_extension_is_rejected_before_decoding() {
    let body = MultipartBuilder::new()
        .file("anim.gif", "image/gif", &[0u8; 16])
        .build();
    let response = app()
        .oneshot(trim_request(body, Some(&format!("Bearer {API_TOKEN}"))))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
}

#[tokio::test]
async fn non_image_content_type_is_rejected() {
    let body = MultipartBuilder::new()
        .file("doc.png", "application/pdf", &bordered_png())
        .build();
    let response = app()
        .oneshot(trim_request(body, Some(&format!("Bearer {API_TOKEN}"))))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
}

#[tokio::test]
async fn out_of_range_quality_is_rejected() {
    let body = MultipartBuilder::new()
        .file("img.png", "image/png", &bordered_png())
        .text("quality", "101")
        .build();
    let response = app()
        .oneshot(trim_request(body, Some(&format!("Bearer {API_TOKEN}"))))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
}

#[tokio::test]
async fn zero_resize_dimension_is_rejected() {
    let body = MultipartBuilder::new()
        .file("img.png", "image/png", &bordered_png())
        .text("resize_width", "0")
        .build();
    let response = app()
        .oneshot(trim_request(body, Some(&format!("Bearer {API_TOKEN}"))))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
}

#[tokio::test]
async fn missing_file_field_is_rejected() {
    let body = MultipartBuilder::new().text("quality", "50").build();
    let response = app()
        .oneshot(trim_request(body, Some(&format!("Bearer {API_TOKEN}"))))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
}

#[tokio::test]
async fn oversized_uploads_hit_the_body_limit() {
    let body = MultipartBuilder::new()
        .file("img.png", "image/png", &bordered_png())
        .build();
    let response = app_with_upload_limit(64)
        .oneshot(trim_request(body, Some(&format!("Bearer {API_TOKEN}"))))
        .await
        .unwrap();

    // The capped body surfaces as a multipart read failure.
    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
}
