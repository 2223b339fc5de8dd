// Catalog JSON deserialization, name lookup, source parsing, and loading.

use modedeck::catalog::client::{CatalogClient, CatalogSource};
use modedeck::catalog::models::{Catalog, ModeRecord};

const CATALOG_JSON: &str = r#"[
    {
        "nome": "Clássico",
        "descrição": "Cinco contra cinco, mapa padrão.",
        "link": "https://example.com/classico",
        "imagens": ["img/classico-1.png", "img/classico-2.png", "img/classico-3.png"]
    },
    {
        "nome": "Ranked",
        "descrição": "Partidas ranqueadas.",
        "link": "https://example.com/ranked",
        "imagens": ["img/ranked-1.png"]
    }
]"#;

fn parse_catalog(json: &str) -> serde_json::Result<Catalog> {
    serde_json::from_str::<Vec<ModeRecord>>(json).map(Catalog::new)
}

// ── Deserialization ──────────────────────────────────────────────────────────

#[test]
fn test_catalog_deserializes_portuguese_keys() {
    let catalog = parse_catalog(CATALOG_JSON).expect("valid catalog");
    assert_eq!(catalog.len(), 2);

    let first = &catalog.records()[0];
    assert_eq!(first.name, "Clássico");
    assert_eq!(first.description, "Cinco contra cinco, mapa padrão.");
    assert_eq!(first.link, "https://example.com/classico");
    assert_eq!(first.images.len(), 3);
    assert_eq!(first.cover_image(), Some("img/classico-1.png"));
}

#[test]
fn test_catalog_preserves_order() {
    let catalog = parse_catalog(CATALOG_JSON).unwrap();
    let names: Vec<&str> = catalog.records().iter().map(|r| r.name.as_str()).collect();
    assert_eq!(names, vec!["Clássico", "Ranked"]);
}

#[test]
fn test_catalog_rejects_non_array() {
    assert!(parse_catalog(r#"{"nome": "x"}"#).is_err());
}

#[test]
fn test_record_without_images_has_no_cover() {
    let record: ModeRecord = serde_json::from_str(r#"{"nome": "Bare"}"#).unwrap();
    assert!(record.images.is_empty());
    assert_eq!(record.cover_image(), None);
}

// ── Lookup ───────────────────────────────────────────────────────────────────

#[test]
fn test_find_by_name() {
    let catalog = parse_catalog(CATALOG_JSON).unwrap();
    assert_eq!(catalog.find("Ranked").unwrap().images, vec!["img/ranked-1.png"]);
    assert!(catalog.find("ranked").is_none(), "lookup is exact, not case-folded");
    assert!(catalog.find("Missing").is_none());
}

#[test]
fn test_empty_catalog() {
    let catalog = Catalog::default();
    assert!(catalog.is_empty());
    assert!(catalog.find("anything").is_none());
}

// ── Source ───────────────────────────────────────────────────────────────────

#[test]
fn test_source_parse_url_and_path() {
    assert_eq!(
        CatalogSource::parse("https://example.com/data.json"),
        CatalogSource::Url("https://example.com/data.json".to_string())
    );
    assert_eq!(
        CatalogSource::parse(" http://localhost:8000/data.json "),
        CatalogSource::Url("http://localhost:8000/data.json".to_string())
    );
    assert_eq!(
        CatalogSource::parse("data.json"),
        CatalogSource::Path("data.json".into())
    );
}

#[test]
fn test_source_display() {
    assert_eq!(CatalogSource::parse("modes/data.json").to_string(), "modes/data.json");
    assert_eq!(
        CatalogSource::parse("https://example.com/d.json").to_string(),
        "https://example.com/d.json"
    );
}

// ── Loading ──────────────────────────────────────────────────────────────────

#[tokio::test]
async fn test_fetch_from_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("data.json");
    std::fs::write(&path, CATALOG_JSON).unwrap();

    let records = CatalogClient::new()
        .fetch(&CatalogSource::Path(path))
        .await
        .expect("fetch from file");
    assert_eq!(records.len(), 2);
    assert_eq!(records[1].name, "Ranked");
}

#[tokio::test]
async fn test_fetch_missing_file_errors() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("nope.json");

    let err = CatalogClient::new()
        .fetch(&CatalogSource::Path(path))
        .await
        .unwrap_err();
    assert!(format!("{err:#}").contains("cannot read"));
}

#[tokio::test]
async fn test_fetch_malformed_file_errors() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("data.json");
    std::fs::write(&path, "not json").unwrap();

    let err = CatalogClient::new()
        .fetch(&CatalogSource::Path(path))
        .await
        .unwrap_err();
    assert!(format!("{err:#}").contains("invalid catalog JSON"));
}
