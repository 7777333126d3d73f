use super::*;

fn minimal(filters: &str, projects: &str, sections: &str) -> String {
    format!(r#"{{ "filters": {filters}, "projects": {projects}, "sections": {sections} }}"#)
}

const ALL_WEB: &str = r#"[{ "tag": "all", "label": "All" }, { "tag": "web", "label": "Web" }]"#;

// =============================================================
// Embedded site
// =============================================================

#[test]
fn embedded_site_parses_and_validates() {
    let config = SiteConfig::embedded().expect("embedded site.json is valid");
    assert!(!config.projects.is_empty());
    assert!(config.filters.iter().any(|f| f.tag == "all"));
    assert!(!config.resume.asset.is_empty());
    assert!(!config.resume.filename.is_empty());
    assert_eq!(config.contact_endpoint, None);
}

#[test]
fn embedded_nav_follows_page_order() {
    let config = SiteConfig::embedded().expect("embedded site.json is valid");
    let ids: Vec<&str> = config.sections.iter().map(|s| s.id.as_str()).collect();
    assert_eq!(ids, PAGE_SECTIONS);
}

// =============================================================
// Validation
// =============================================================

#[test]
fn missing_all_filter_is_rejected() {
    let raw = minimal(r#"[{ "tag": "web", "label": "Web" }]"#, "[]", "[]");
    assert!(matches!(SiteConfig::from_json(&raw), Err(SiteConfigError::MissingAllFilter)));
}

#[test]
fn project_category_needs_a_filter_button() {
    let projects = r#"[{ "title": "X", "description": "d", "category": "games" }]"#;
    let raw = minimal(ALL_WEB, projects, "[]");
    match SiteConfig::from_json(&raw) {
        Err(SiteConfigError::UnknownCategory { project, category }) => {
            assert_eq!(project, "X");
            assert_eq!(category, "games");
        }
        other => panic!("expected UnknownCategory, got {other:?}"),
    }
}

#[test]
fn nav_sections_must_exist_on_page() {
    let raw = minimal(ALL_WEB, "[]", r#"[{ "id": "blog", "label": "Blog" }]"#);
    assert!(matches!(SiteConfig::from_json(&raw), Err(SiteConfigError::UnknownSection(id)) if id == "blog"));
}

#[test]
fn duplicate_nav_sections_are_rejected() {
    let sections = r#"[{ "id": "about", "label": "A" }, { "id": "about", "label": "B" }]"#;
    let raw = minimal(ALL_WEB, "[]", sections);
    assert!(matches!(SiteConfig::from_json(&raw), Err(SiteConfigError::DuplicateSection(id)) if id == "about"));
}

#[test]
fn malformed_json_reports_parse_error() {
    let err = SiteConfig::from_json("{ not json").unwrap_err();
    assert!(matches!(err, SiteConfigError::Parse(_)));
    assert!(err.to_string().starts_with("invalid site config:"));
}

#[test]
fn optional_fields_default() {
    let projects = r#"[{ "title": "X", "description": "d", "category": "web" }]"#;
    let config = SiteConfig::from_json(&minimal(ALL_WEB, projects, "[]")).expect("valid");
    assert!(config.projects[0].tags.is_empty());
    assert_eq!(config.projects[0].link, None);
    assert!(config.skills.is_empty());
}

#[test]
fn nav_section_href_prefixes_hash() {
    let section = NavSection { id: "contact".to_owned(), label: "Contact".to_owned() };
    assert_eq!(section.href(), "#contact");
}
