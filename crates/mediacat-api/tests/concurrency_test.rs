//! Concurrency integration tests: parallel uploads must not lose entries.
//!
//! Run with: `cargo test -p mediacat-api --test concurrency_test`

mod helpers;

use futures::future::join_all;
use helpers::fixtures::{create_minimal_png, create_test_pdf, create_test_video};
use helpers::{batch_form, files_form, setup_test_app};
use serde_json::Value;

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn test_concurrent_uploads_all_recorded() {
    let app = setup_test_app().await;
    let client = app.client();

    let uploads = (0..8).map(|i| {
        let name = format!("cat-{}.png", i);
        async move {
            client
                .post("/api/images")
                .multipart(files_form(vec![(
                    name.as_str(),
                    "image/png",
                    create_minimal_png(),
                )]))
                .await
        }
    });

    for response in join_all(uploads).await {
        assert_eq!(response.status_code(), 201);
    }

    let listed: Vec<Value> = client.get("/api/images").await.json();
    assert_eq!(listed.len(), 8);

    let mut names: Vec<&str> = listed
        .iter()
        .map(|e| e["filename"].as_str().unwrap())
        .collect();
    names.sort();
    names.dedup();
    assert_eq!(names.len(), 8);
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn test_concurrent_uploads_across_categories() {
    let app = setup_test_app().await;
    let client = app.client();

    let mut jobs: Vec<(&str, &str, &str, Vec<u8>)> = Vec::new();
    for _ in 0..4 {
        jobs.push(("/api/images", "cat.png", "image/png", create_minimal_png()));
        jobs.push(("/api/videos", "clip.mp4", "video/mp4", create_test_video()));
        jobs.push(("/api/pdfs", "report.pdf", "application/pdf", create_test_pdf()));
    }

    let uploads = jobs.into_iter().map(|(path, name, mime, data)| async move {
        client
            .post(path)
            .multipart(files_form(vec![(name, mime, data)]))
            .await
            .status_code()
    });

    for status in join_all(uploads).await {
        assert_eq!(status, 201);
    }

    let images: Vec<Value> = client.get("/api/images").await.json();
    let videos: Vec<Value> = client.get("/api/videos").await.json();
    let pdfs: Vec<Value> = client.get("/api/pdfs").await.json();
    assert_eq!(images.len(), 4);
    assert_eq!(videos.len(), 4);
    assert_eq!(pdfs.len(), 4);
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn test_concurrent_batches_stay_contiguous() {
    let app = setup_test_app().await;
    let client = app.client();

    let uploads = (0..4).map(|_| async move {
        let response = client
            .post("/api/images")
            .multipart(batch_form(3, "png", "image/png", &create_minimal_png()))
            .await;
        assert_eq!(response.status_code(), 201);
        let entries: Vec<Value> = response.json();
        entries
            .iter()
            .map(|e| e["filename"].as_str().unwrap().to_string())
            .collect::<Vec<_>>()
    });
    let batches = join_all(uploads).await;

    let listed: Vec<Value> = client.get("/api/images").await.json();
    assert_eq!(listed.len(), 12);
    let listed_names: Vec<String> = listed
        .iter()
        .map(|e| e["filename"].as_str().unwrap().to_string())
        .collect();

    // Each batch is recorded atomically, so its three names sit adjacent.
    for batch in batches {
        let start = listed_names.iter().position(|n| n == &batch[0]).unwrap();
        assert_eq!(listed_names[start..start + 3], batch[..]);
    }
}
