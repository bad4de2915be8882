// cubes-mod: Cubes Mod Build Tool
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Integration tests for the downloader using wiremock.

use cubes_mod::error::{CubesError, NetworkError};
use cubes_mod::net::Downloader;
use tempfile::TempDir;
use tokio_util::sync::CancellationToken;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn temp_dir() -> TempDir {
    tempfile::tempdir().expect("failed to create temp dir")
}

#[tokio::test]
async fn test_download_file_success() {
    let mock_server = MockServer::start().await;
    let body = "PK fake jar bytes";
    Mock::given(method("GET"))
        .and(path("/maven2/ethanjones/cubes/core/0.0.5/core-0.0.5.jar"))
        .respond_with(ResponseTemplate::new(200).set_body_string(body))
        .mount(&mock_server)
        .await;

    let temp_dir = temp_dir();
    let output = temp_dir.path().join("core-0.0.5.jar");
    let url = format!(
        "{}/maven2/ethanjones/cubes/core/0.0.5/core-0.0.5.jar",
        mock_server.uri()
    );

    let result = Downloader::new().url(&url).file(&output).silent().download().await;

    assert!(result.is_ok(), "download failed: {:?}", result.err());
    assert_eq!(std::fs::read_to_string(&output).unwrap(), body);
    assert!(!temp_dir.path().join("core-0.0.5.jar.part").exists());
}

#[tokio::test]
async fn test_download_creates_parent_dirs() {
    let mock_server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/a.pom"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<project/>"))
        .mount(&mock_server)
        .await;

    let temp_dir = temp_dir();
    let output = temp_dir.path().join("deep/nested/dir/a.pom");

    Downloader::new()
        .url(format!("{}/a.pom", mock_server.uri()))
        .file(&output)
        .silent()
        .download()
        .await
        .unwrap();

    assert!(output.exists());
}

#[tokio::test]
async fn test_download_http_errors_do_not_create_file() {
    for status in [404, 500] {
        let mock_server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/missing.jar"))
            .respond_with(ResponseTemplate::new(status))
            .mount(&mock_server)
            .await;

        let temp_dir = temp_dir();
        let output = temp_dir.path().join("missing.jar");

        let err = Downloader::new()
            .url(format!("{}/missing.jar", mock_server.uri()))
            .file(&output)
            .silent()
            .download()
            .await
            .unwrap_err();

        match &err {
            CubesError::Network(boxed) => match **boxed {
                NetworkError::HttpError {
                    status: actual, ..
                } => assert_eq!(actual, status),
                ref other => panic!("expected HttpError for {status}, got {other:?}"),
            },
            other => panic!("expected CubesError::Network for {status}, got {other:?}"),
        }
        assert_eq!(err.is_not_found(), status == 404);
        assert!(!output.exists(), "no file should be created on HTTP {status}");
    }
}

#[tokio::test]
async fn test_download_missing_url() {
    let err = Downloader::new().file("/tmp/x").download().await.unwrap_err();
    assert!(matches!(
        err,
        CubesError::Network(ref boxed) if matches!(**boxed, NetworkError::InvalidUrl(_))
    ));
}

#[tokio::test]
async fn test_download_missing_output() {
    let err = Downloader::new()
        .url("http://127.0.0.1:1/x")
        .download()
        .await
        .unwrap_err();
    assert!(matches!(
        err,
        CubesError::Network(ref boxed) if matches!(**boxed, NetworkError::DownloadFailed { .. })
    ));
}

#[tokio::test]
async fn test_download_cancelled_before_start() {
    let mock_server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_body_string("data"))
        .expect(0)
        .mount(&mock_server)
        .await;

    let token = CancellationToken::new();
    token.cancel();

    let temp_dir = temp_dir();
    let output = temp_dir.path().join("never.jar");
    let err = Downloader::new()
        .url(format!("{}/never.jar", mock_server.uri()))
        .file(&output)
        .silent()
        .cancel_token(token)
        .download()
        .await
        .unwrap_err();

    assert!(matches!(
        err,
        CubesError::Network(ref boxed) if matches!(**boxed, NetworkError::Interrupted)
    ));
    assert!(!output.exists());
}
