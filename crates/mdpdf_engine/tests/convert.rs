use std::fs;
use std::path::Path;

use mdpdf_engine::{
    output_path_for, ConvertError, Converter, GotenbergConverter, CONVERT_ROUTE,
};
use pretty_assertions::assert_eq;
use tempfile::TempDir;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

const PDF_BYTES: &[u8] = b"%PDF-1.7\n\x00\x01\x02binary tail\xff";

fn write_source(dir: &Path, name: &str) -> std::path::PathBuf {
    let source = dir.join(name);
    fs::write(&source, "# Heading\n\nSome *markdown*.\n").unwrap();
    source
}

async fn mount(server: &MockServer, response: ResponseTemplate) {
    Mock::given(method("POST"))
        .and(path(CONVERT_ROUTE))
        .respond_with(response)
        .mount(server)
        .await;
}

#[tokio::test]
async fn success_writes_response_body_next_to_source() {
    let server = MockServer::start().await;
    mount(
        &server,
        ResponseTemplate::new(200).set_body_raw(PDF_BYTES, "application/pdf"),
    )
    .await;

    let temp = TempDir::new().unwrap();
    let source = write_source(temp.path(), "report.md");
    let converter = GotenbergConverter::new(server.uri()).unwrap();

    let output = converter.convert(&source).await.expect("convert ok");
    assert_eq!(output, temp.path().join("report.pdf"));
    assert_eq!(fs::read(&output).unwrap(), PDF_BYTES);
}

#[tokio::test]
async fn success_overwrites_existing_output() {
    let server = MockServer::start().await;
    mount(&server, ResponseTemplate::new(200).set_body_bytes(PDF_BYTES)).await;

    let temp = TempDir::new().unwrap();
    let source = write_source(temp.path(), "report.md");
    fs::write(temp.path().join("report.pdf"), "stale").unwrap();

    let converter = GotenbergConverter::new(server.uri()).unwrap();
    let output = converter.convert(&source).await.unwrap();
    assert_eq!(fs::read(output).unwrap(), PDF_BYTES);
}

#[tokio::test]
async fn request_carries_template_and_source_parts() {
    let server = MockServer::start().await;
    mount(&server, ResponseTemplate::new(200).set_body_bytes(PDF_BYTES)).await;

    let temp = TempDir::new().unwrap();
    let source = write_source(temp.path(), "chapter-one.md");
    let converter = GotenbergConverter::new(server.uri()).unwrap();
    converter.convert(&source).await.unwrap();

    let requests = server.received_requests().await.expect("recording on");
    assert_eq!(requests.len(), 1);
    let request = &requests[0];

    let content_type = request
        .headers
        .get("content-type")
        .and_then(|value| value.to_str().ok())
        .unwrap_or_default()
        .to_string();
    assert!(
        content_type.starts_with("multipart/form-data; boundary="),
        "unexpected content type {content_type}"
    );

    let body = String::from_utf8_lossy(&request.body);
    assert_eq!(body.matches("name=\"files\"").count(), 2);
    assert!(body.contains("filename=\"index.html\""));
    assert!(body.contains("filename=\"file.md\""));
    assert!(!body.contains("chapter-one.md"));
    assert!(body.contains("{{ toHTML \"file.md\" }}"));
    assert!(body.contains("Some *markdown*."));
}

#[tokio::test]
async fn http_error_reports_status_and_body_without_touching_output() {
    let server = MockServer::start().await;
    mount(&server, ResponseTemplate::new(503).set_body_string("busy")).await;

    let temp = TempDir::new().unwrap();
    let source = write_source(temp.path(), "report.md");
    let converter = GotenbergConverter::new(server.uri()).unwrap();

    let err = converter.convert(&source).await.unwrap_err();
    assert!(matches!(
        &err,
        ConvertError::HttpStatus { status: 503, body } if body == "busy"
    ));
    let message = err.to_string();
    assert!(message.contains("503"));
    assert!(message.contains("busy"));
    assert!(!temp.path().join("report.pdf").exists());
}

#[tokio::test]
async fn http_error_leaves_previous_output_alone() {
    let server = MockServer::start().await;
    mount(&server, ResponseTemplate::new(500).set_body_string("chromium crashed")).await;

    let temp = TempDir::new().unwrap();
    let source = write_source(temp.path(), "report.md");
    fs::write(temp.path().join("report.pdf"), "previous").unwrap();

    let converter = GotenbergConverter::new(server.uri()).unwrap();
    assert!(converter.convert(&source).await.is_err());
    assert_eq!(
        fs::read_to_string(temp.path().join("report.pdf")).unwrap(),
        "previous"
    );
}

#[tokio::test]
async fn non_200_success_codes_are_errors_and_keep_previous_output() {
    for status in [201u16, 202, 204] {
        let server = MockServer::start().await;
        mount(&server, ResponseTemplate::new(status)).await;

        let temp = TempDir::new().unwrap();
        let source = write_source(temp.path(), "report.md");
        fs::write(temp.path().join("report.pdf"), "previous").unwrap();

        let converter = GotenbergConverter::new(server.uri()).unwrap();
        let err = converter.convert(&source).await.unwrap_err();
        assert!(
            matches!(err, ConvertError::HttpStatus { status: got, .. } if got == status),
            "status {status} gave {err:?}"
        );
        assert_eq!(
            fs::read_to_string(temp.path().join("report.pdf")).unwrap(),
            "previous"
        );
    }
}

#[tokio::test]
async fn missing_source_fails_before_any_request() {
    let server = MockServer::start().await;
    mount(&server, ResponseTemplate::new(200)).await;

    let temp = TempDir::new().unwrap();
    let converter = GotenbergConverter::new(server.uri()).unwrap();

    let err = converter
        .convert(&temp.path().join("absent.md"))
        .await
        .unwrap_err();
    assert!(matches!(err, ConvertError::ReadSource { .. }));
    assert!(server.received_requests().await.unwrap().is_empty());
}

#[tokio::test]
async fn unreachable_service_is_a_network_error() {
    let temp = TempDir::new().unwrap();
    let source = write_source(temp.path(), "report.md");
    let converter = GotenbergConverter::new("http://127.0.0.1:1").unwrap();

    let err = converter.convert(&source).await.unwrap_err();
    assert!(matches!(err, ConvertError::Network(_)));
    assert!(!temp.path().join("report.pdf").exists());
}

#[test]
fn endpoint_trailing_slash_is_tolerated() {
    let converter = GotenbergConverter::new("http://gotenberg:3000/").unwrap();
    assert_eq!(
        converter.conversion_url().unwrap().as_str(),
        "http://gotenberg:3000/forms/chromium/convert/markdown"
    );
}

#[tokio::test]
async fn malformed_endpoint_fails_the_conversion() {
    let temp = TempDir::new().unwrap();
    let source = write_source(temp.path(), "report.md");
    let converter = GotenbergConverter::new("not a url").unwrap();

    let err = converter.convert(&source).await.unwrap_err();
    assert!(matches!(err, ConvertError::InvalidEndpoint { .. }));
    assert!(err.to_string().contains("not a url"));
    assert!(!temp.path().join("report.pdf").exists());
}

#[test]
fn output_path_swaps_extension() {
    assert_eq!(
        output_path_for(Path::new("docs/guide.md")),
        Path::new("docs/guide.pdf")
    );
    assert_eq!(
        output_path_for(Path::new("notes.v2.md")),
        Path::new("notes.v2.pdf")
    );
}
