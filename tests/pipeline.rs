//! End-to-end pipeline tests over a synthetic dashboard source tree.

use std::io::Read;
use std::path::{Path, PathBuf};
use vizpack::descriptor::PackageDescriptor;
use vizpack::pipeline::{
    BundleManifest, MANIFEST_FILE, PackageReport, Packager, STANDALONE_FILE, SourceManifest,
};

const DASHBOARD_HTML: &str = r#"<!DOCTYPE html>
<html>
<head>
    <title>Dashboard</title>
    <script src="./core/app.js"></script>
    <script src="./core/render.js" type="module"></script>
    <link rel="stylesheet" href="styles/effects.css">
    <script src="https://cdn.example/lib.js"></script>
</head>
<body>
    <div id="root"></div>
    <!-- @embed:core-scripts -->
</body>
</html>
"#;

fn descriptor() -> PackageDescriptor {
    PackageDescriptor::builder()
        .name("Test Dashboard")
        .version("1.0.0")
        .description("A dashboard used by the test suite")
        .features(vec!["WebGL renderers".to_string()])
        .build()
        .unwrap()
}

fn sources() -> SourceManifest {
    SourceManifest {
        core_scripts: vec![PathBuf::from("core/app.js"), PathBuf::from("core/render.js")],
        extra_scripts: vec![PathBuf::from("helper.js")],
        markup: vec![PathBuf::from("dashboard.html")],
        primary_markup: PathBuf::from("dashboard.html"),
        configs: vec![
            PathBuf::from("config/visuals.json"),
            PathBuf::from("config/behavior.json"),
        ],
        styles: vec![PathBuf::from("effects.css")],
        server_files: vec![PathBuf::from("server.py")],
        test_files: vec![PathBuf::from("test-system.js")],
        inline_scripts: vec![PathBuf::from("core/app.js"), PathBuf::from("core/render.js")],
        script_anchor: "<!-- @embed:core-scripts -->".to_string(),
    }
}

fn write_source_tree(root: &Path) {
    std::fs::create_dir_all(root.join("core")).unwrap();
    std::fs::create_dir_all(root.join("config")).unwrap();
    std::fs::write(root.join("core/app.js"), "window.app = {};\n").unwrap();
    std::fs::write(root.join("core/render.js"), "window.app.render = () => {};\n").unwrap();
    std::fs::write(root.join("helper.js"), "// helper module\n").unwrap();
    std::fs::write(root.join("dashboard.html"), DASHBOARD_HTML).unwrap();
    std::fs::write(root.join("config/visuals.json"), "{\"a\": 1}").unwrap();
    std::fs::write(root.join("config/behavior.json"), "{bad json").unwrap();
    std::fs::write(root.join("effects.css"), "body { margin: 0; }\n").unwrap();
    std::fs::write(root.join("server.py"), "print('serve')\n").unwrap();
    std::fs::write(root.join("test-system.js"), "console.log('ok');\n").unwrap();
}

async fn run_pipeline(src: &Path, out: &Path) -> PackageReport {
    Packager::new(descriptor(), sources(), src, out)
        .run()
        .await
        .unwrap()
}

fn read_manifest(out: &Path) -> BundleManifest {
    let raw = std::fs::read_to_string(out.join(MANIFEST_FILE)).unwrap();
    serde_json::from_str(&raw).unwrap()
}

fn file_set(root: &Path) -> Vec<String> {
    let mut files: Vec<String> = walkdir::WalkDir::new(root)
        .into_iter()
        .filter_map(|e| e.ok())
        .filter(|e| e.file_type().is_file())
        .map(|e| {
            e.path()
                .strip_prefix(root)
                .unwrap()
                .to_string_lossy()
                .replace('\\', "/")
        })
        .collect();
    files.sort();
    files
}

#[tokio::test]
async fn valid_config_minified_invalid_excluded() {
    let tmp = tempfile::tempdir().unwrap();
    let src = tmp.path().join("src");
    let out = tmp.path().join("out");
    write_source_tree(&src);

    let report = run_pipeline(&src, &out).await;

    let minified = std::fs::read_to_string(out.join("config/visuals.json")).unwrap();
    assert_eq!(minified, "{\"a\":1}");
    assert!(!out.join("config/behavior.json").exists());

    let manifest = read_manifest(&out);
    assert!(manifest.files.contains_key("config/visuals.json"));
    assert!(!manifest.files.contains_key("config/behavior.json"));

    // The run succeeds with a diagnostic naming the bad file.
    assert!(
        report
            .warnings
            .iter()
            .any(|w| w.contains("behavior.json"))
    );
}

#[tokio::test]
async fn stale_output_fully_recreated() {
    let tmp = tempfile::tempdir().unwrap();
    let src = tmp.path().join("src");
    let out = tmp.path().join("out");
    write_source_tree(&src);
    std::fs::create_dir_all(out.join("leftover")).unwrap();
    std::fs::write(out.join("stale.txt"), "old").unwrap();
    std::fs::write(out.join("leftover/deep.txt"), "old").unwrap();

    run_pipeline(&src, &out).await;

    assert!(!out.join("stale.txt").exists());
    assert!(!out.join("leftover").exists());
    assert!(out.join("index.html").is_file());
    assert!(out.join("core/app.js").is_file());
}

#[tokio::test]
async fn manifest_checksums_and_totals_consistent() {
    let tmp = tempfile::tempdir().unwrap();
    let src = tmp.path().join("src");
    let out = tmp.path().join("out");
    write_source_tree(&src);

    run_pipeline(&src, &out).await;
    let manifest = read_manifest(&out);

    assert_eq!(manifest.total_files, manifest.files.len());
    let mut sum = 0u64;
    for (rel, meta) in &manifest.files {
        let bytes = std::fs::read(out.join(rel)).unwrap();
        assert_eq!(
            format!("{:x}", md5::compute(&bytes)),
            meta.checksum,
            "checksum mismatch for {rel}"
        );
        assert_eq!(bytes.len() as u64, meta.size, "size mismatch for {rel}");
        sum += meta.size;
    }
    assert_eq!(manifest.size_bytes, sum);
}

#[tokio::test]
async fn standalone_artifact_contract() {
    let tmp = tempfile::tempdir().unwrap();
    let src = tmp.path().join("src");
    let out = tmp.path().join("out");
    write_source_tree(&src);

    let report = run_pipeline(&src, &out).await;

    assert_eq!(report.standalone, Some(out.join(STANDALONE_FILE)));
    let html = std::fs::read_to_string(out.join(STANDALONE_FILE)).unwrap();

    // Targeted reference tags are gone; unmatched ones stay.
    assert!(!html.contains("src=\"./core/app.js\""));
    assert!(!html.contains("src=\"./core/render.js\""));
    assert!(!html.contains("href=\"styles/effects.css\""));
    assert!(html.contains("https://cdn.example/lib.js"));

    // Exactly one binding per successfully minified config.
    assert_eq!(html.matches("window.visualsConfig =").count(), 1);
    assert!(!html.contains("window.behaviorConfig"));

    // Inlined bundles are present, in declared order.
    let app = html.find("window.app = {};").unwrap();
    let render = html.find("window.app.render").unwrap();
    assert!(app < render);
    assert!(html.contains("body { margin: 0; }"));
    assert!(!html.contains("@embed:core-scripts"));
}

#[tokio::test]
async fn archive_extraction_matches_manifest() {
    let tmp = tempfile::tempdir().unwrap();
    let src = tmp.path().join("src");
    let out = tmp.path().join("out");
    write_source_tree(&src);

    let report = run_pipeline(&src, &out).await;
    let manifest = read_manifest(&out);

    let file = std::fs::File::open(&report.archive_path).unwrap();
    let mut archive = zip::ZipArchive::new(file).unwrap();

    let mut seen = 0usize;
    for i in 0..archive.len() {
        let mut entry = archive.by_index(i).unwrap();
        let name = entry.name().to_string();
        let mut bytes = Vec::new();
        entry.read_to_end(&mut bytes).unwrap();

        if name == MANIFEST_FILE {
            continue; // written after the walk, not listed in itself
        }
        let meta = manifest
            .files
            .get(&name)
            .unwrap_or_else(|| panic!("archived file {name} missing from manifest"));
        assert_eq!(format!("{:x}", md5::compute(&bytes)), meta.checksum);
        seen += 1;
    }
    assert_eq!(seen, manifest.total_files);
}

#[tokio::test]
async fn repeated_runs_yield_identical_file_set() {
    let tmp = tempfile::tempdir().unwrap();
    let src = tmp.path().join("src");
    let out = tmp.path().join("out");
    write_source_tree(&src);

    run_pipeline(&src, &out).await;
    let first = file_set(&out);

    run_pipeline(&src, &out).await;
    let second = file_set(&out);

    assert_eq!(first, second);
}
