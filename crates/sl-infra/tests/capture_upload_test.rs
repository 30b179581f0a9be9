use std::time::Duration;

use sl_core::capture::RawImageHandle;
use sl_core::ports::{FlagStorePort, ImageNormalizerPort, RecognitionClientPort};
use sl_infra::{FileFlagStore, HttpRecognitionClient, JpegImageNormalizer};

#[tokio::test]
async fn normalized_capture_is_uploaded_as_base64_jpeg() {
    let dir = tempfile::tempdir().unwrap();
    let photo = dir.path().join("capture.png");
    image::RgbImage::from_pixel(3000, 2000, image::Rgb([10, 20, 30]))
        .save_with_format(&photo, image::ImageFormat::Png)
        .unwrap();

    let image = JpegImageNormalizer::with_defaults()
        .normalize(&RawImageHandle::File(photo))
        .await
        .unwrap();
    assert_eq!((image.width(), image.height()), (1000, 667));
    let expected_payload = image.to_base64();
    // JPEG SOI marker
    assert!(expected_payload.starts_with("/9j/"));

    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("POST", "/recognize")
        .match_body(mockito::Matcher::Json(
            serde_json::json!({ "image": expected_payload }),
        ))
        .with_status(200)
        .with_body(r#"{"artworkRecognized": false, "artworks": null}"#)
        .create_async()
        .await;

    let client =
        HttpRecognitionClient::new(format!("{}/recognize", server.url()), Duration::from_secs(5))
            .unwrap();
    let response = client.recognize(image).await.unwrap();

    mock.assert_async().await;
    assert!(!response.recognized);
    assert!(response.matches.is_empty());
}

#[tokio::test]
async fn flags_survive_a_new_store_instance() {
    let dir = tempfile::tempdir().unwrap();

    FileFlagStore::with_defaults(dir.path().to_path_buf())
        .set_flag("alreadyLaunched", "true")
        .await
        .unwrap();

    let reopened = FileFlagStore::with_defaults(dir.path().to_path_buf());
    assert_eq!(
        reopened.get_flag("alreadyLaunched").await.unwrap().as_deref(),
        Some("true")
    );
}
