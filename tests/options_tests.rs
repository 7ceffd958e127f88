use segment_sketch::SketchOptions;

#[test]
fn test_options_roundtrip_via_toml() {
    let mut options = SketchOptions::default();
    options.merge_tolerance = 0.01;
    options.point_marker_radius = 8.0;

    let path = std::env::temp_dir().join("segment_sketch_options_roundtrip.toml");
    options
        .save_to_file(&path)
        .expect("Speichern sollte funktionieren");
    let loaded = SketchOptions::load_from_file(&path);
    let _ = std::fs::remove_file(&path);

    assert_eq!(loaded, options);
}

#[test]
fn test_missing_options_file_falls_back_to_defaults() {
    let path = std::env::temp_dir().join("segment_sketch_options_missing.toml");
    let _ = std::fs::remove_file(&path);

    let loaded = SketchOptions::load_from_file(&path);
    assert_eq!(loaded, SketchOptions::default());
}
