use super::*;

#[test]
fn defaults_point_at_creative_media() {
    let a = AssetRefs::default();
    assert_eq!(a.cover_image, "cover.png");
    assert_eq!(a.background_video, "wave.mp4");
    assert_eq!(a.validated().unwrap(), a);
}

#[test]
fn normalize_cleans_separators() {
    assert_eq!(normalize_rel_path("media\\cover.png").unwrap(), "media/cover.png");
    assert_eq!(normalize_rel_path("./a//b/./c.mp4").unwrap(), "a/b/c.mp4");
}

#[test]
fn normalize_rejects_escapes() {
    assert!(normalize_rel_path("/etc/passwd").is_err());
    assert!(normalize_rel_path("../cover.png").is_err());
    assert!(normalize_rel_path("a/../../b").is_err());
    assert!(normalize_rel_path("").is_err());
    assert!(normalize_rel_path("./.").is_err());
}

#[test]
fn resolve_is_a_join() {
    let a = AssetRefs::default();
    let [(k0, p0), (k1, p1)] = a.resolve("/srv/public");
    assert_eq!(k0, "cover_image");
    assert_eq!(p0, Path::new("/srv/public/cover.png"));
    assert_eq!(k1, "background_video");
    assert_eq!(p1, Path::new("/srv/public/wave.mp4"));
}

#[test]
fn partial_json_keeps_defaults() {
    let a: AssetRefs = serde_json::from_str(r#"{ "cover_image": "art/cover.jpg" }"#).unwrap();
    assert_eq!(a.cover_image, "art/cover.jpg");
    assert_eq!(a.background_video, "wave.mp4");
}
