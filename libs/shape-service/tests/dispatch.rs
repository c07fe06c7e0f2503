use std::path::Path;

use image::{ImageFormat, Rgb, RgbImage};
use serde_json::json;
use shape_export::{load_obj, load_stl};
use shape_service::{Dispatcher, DispatcherConfig, ErrorKind, RequestRecord, Response};

fn dispatcher(dir: &Path) -> Dispatcher {
    let mut config = DispatcherConfig::with_output_dir(dir.join("output"));
    config.preview = config.preview.with_size(64);
    Dispatcher::new(config)
}

fn urls(response: &Response) -> [String; 3] {
    match response {
        Response::Success {
            obj_url,
            stl_url,
            preview_url,
        } => [obj_url.clone(), stl_url.clone(), preview_url.clone()],
        Response::Error { error, .. } => panic!("expected success, got error: {error}"),
    }
}

#[test]
fn text_request_writes_three_files() {
    let dir = tempfile::tempdir().unwrap();
    let response = dispatcher(dir.path()).handle(&RequestRecord::text("a small toy car"));
    let [obj, stl, preview] = urls(&response);

    let obj_mesh = load_obj(&obj).unwrap();
    assert_eq!(obj_mesh.vertex_count(), 272);
    assert_eq!(obj_mesh.triangle_count(), 524);
    assert_eq!(load_stl(&stl).unwrap().triangle_count(), 524);

    let image = image::open(&preview).unwrap();
    assert_eq!((image.width(), image.height()), (64, 64));
}

#[test]
fn files_share_one_identifier() {
    let dir = tempfile::tempdir().unwrap();
    let response = dispatcher(dir.path()).handle(&RequestRecord::text("chair"));
    let [obj, stl, preview] = urls(&response);

    let id = Path::new(&obj).file_stem().unwrap().to_str().unwrap().to_string();
    assert_eq!(id.len(), 36);
    assert_eq!(id.chars().filter(|c| *c == '-').count(), 4);
    assert!(stl.ends_with(&format!("{id}.stl")));
    assert!(preview.ends_with(&format!("{id}_preview.png")));
    assert!(Path::new(&obj).starts_with(dir.path().join("output")));
}

#[test]
fn repeated_requests_get_distinct_files() {
    let dir = tempfile::tempdir().unwrap();
    let dispatcher = dispatcher(dir.path());
    let first = urls(&dispatcher.handle(&RequestRecord::text("a teapot")));
    let second = urls(&dispatcher.handle(&RequestRecord::text("a teapot")));
    assert_ne!(first, second);
    assert_eq!(
        std::fs::read_dir(dir.path().join("output")).unwrap().count(),
        6
    );
}

#[test]
fn image_request_produces_unit_box() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("chair.png");
    RgbImage::from_pixel(8, 8, Rgb([200, 100, 50]))
        .save(&input)
        .unwrap();

    let response = dispatcher(dir.path()).handle(&RequestRecord::image(&input));
    let [obj, _, _] = urls(&response);

    let mesh = load_obj(&obj).unwrap();
    assert_eq!((mesh.vertex_count(), mesh.triangle_count()), (8, 12));
    let (min, max) = mesh.bounding_box();
    assert!((max - min - glam::DVec3::ONE).length() < 1e-6);
}

#[test]
fn any_decodable_image_format_produces_unit_box() {
    let dir = tempfile::tempdir().unwrap();
    let dispatcher = dispatcher(dir.path());
    let pixels = RgbImage::from_pixel(1, 1, Rgb([10, 20, 30]));

    let cases = [
        ("input.gif", ImageFormat::Gif),
        ("input.bmp", ImageFormat::Bmp),
        ("input.webp", ImageFormat::WebP),
        ("input.tiff", ImageFormat::Tiff),
        // PNG bytes behind a JPEG extension
        ("photo.jpg", ImageFormat::Png),
    ];
    for (name, format) in cases {
        let input = dir.path().join(name);
        pixels.save_with_format(&input, format).unwrap();

        let response = dispatcher.handle(&RequestRecord::image(&input));
        assert!(response.is_success(), "{name}: {response:?}");
        let [obj, _, _] = urls(&response);
        let mesh = load_obj(&obj).unwrap();
        assert_eq!((mesh.vertex_count(), mesh.triangle_count()), (8, 12), "{name}");
    }
}

#[test]
fn missing_image_reports_io_error() {
    let dir = tempfile::tempdir().unwrap();
    let response =
        dispatcher(dir.path()).handle(&RequestRecord::image(dir.path().join("missing.jpg")));

    match response {
        Response::Error { kind, .. } => assert_eq!(kind, ErrorKind::Io),
        other => panic!("expected error, got {other:?}"),
    }
    assert!(!dir.path().join("output").exists());
}

#[test]
fn invalid_records_are_rejected() {
    let dir = tempfile::tempdir().unwrap();
    let dispatcher = dispatcher(dir.path());

    for json in [
        r#"{"type": "video", "data": "car"}"#,
        r#"{"data": "car"}"#,
        r#"{"type": "text"}"#,
        r#"{"type": "image"}"#,
    ] {
        let record = RequestRecord::from_json(json).unwrap();
        let response = dispatcher.handle(&record);
        assert!(!response.is_success(), "{json}");
        assert!(matches!(
            response,
            Response::Error {
                kind: ErrorKind::Validation,
                ..
            }
        ));
    }
}

#[test]
fn error_response_json_shape() {
    let dir = tempfile::tempdir().unwrap();
    let record = RequestRecord::from_json(r#"{"type": "audio"}"#).unwrap();
    let response = dispatcher(dir.path()).handle(&record);
    assert_eq!(
        serde_json::to_value(&response).unwrap(),
        json!({"status": "error", "error": "Invalid input type", "kind": "validation"})
    );
}

#[test]
fn success_response_json_shape() {
    let dir = tempfile::tempdir().unwrap();
    let response = dispatcher(dir.path()).handle(&RequestRecord::text("car"));
    let value = serde_json::to_value(&response).unwrap();

    assert_eq!(value["status"], "success");
    for key in ["obj_url", "stl_url", "preview_url"] {
        let url = value[key].as_str().unwrap();
        assert!(Path::new(url).is_file(), "{key}: {url}");
    }
}
