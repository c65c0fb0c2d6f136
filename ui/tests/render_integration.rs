use pagenav::app::render_page;
use pagenav::config::{ConfigSources, load_config};
use pagenav::{AppError, OutputFormat};
use std::collections::HashMap;

fn config_with(vars: &[(&str, &str)]) -> pagenav::config::AppConfig {
    let vars: HashMap<String, String> = vars
        .iter()
        .map(|(key, value)| (key.to_string(), value.to_string()))
        .collect();
    load_config(&ConfigSources::isolated().with_env(vars))
        .into_result()
        .unwrap()
}

#[test]
fn test_single_page_renders_only_the_active_number() {
    let config = config_with(&[("PAGENAV__OUTPUT__FORMAT", "text")]);
    assert_eq!(render_page(&config, 1, 1).unwrap(), "[1]");
}

#[test]
fn test_first_middle_and_last_pages_as_text() {
    let config = config_with(&[("PAGENAV__OUTPUT__FORMAT", "text")]);

    assert_eq!(
        render_page(&config, 1, 5).unwrap(),
        "[1] | 2 | 3 | 4 | 5 | Next Page →"
    );
    assert_eq!(
        render_page(&config, 3, 5).unwrap(),
        "← Previous Page | 1 | 2 | [3] | 4 | 5 | Next Page →"
    );
    assert_eq!(
        render_page(&config, 5, 5).unwrap(),
        "← Previous Page | 1 | 2 | 3 | 4 | [5]"
    );
}

#[test]
fn test_link_header_uses_configured_routes() {
    let config = config_with(&[
        ("PAGENAV__OUTPUT__FORMAT", "link-header"),
        ("PAGENAV__ROUTING__BASE_PATH", "/blog/"),
        ("PAGENAV__ROUTING__PAGE_SEGMENT", "page"),
    ]);

    assert_eq!(
        render_page(&config, 3, 5).unwrap(),
        r#"</blog/page/2>; rel="prev", </blog/page/4>; rel="next""#
    );
    assert_eq!(
        render_page(&config, 2, 5).unwrap(),
        r#"</blog/>; rel="prev", </blog/page/3>; rel="next""#
    );
}

#[test]
fn test_html_marks_active_page() {
    let config = config_with(&[]);
    assert_eq!(config.output().format(), OutputFormat::Html);

    let html = render_page(&config, 4, 5).unwrap();
    assert!(html.contains(r#"<a href="/4" class="active">4</a>"#));
    assert!(html.contains(r#"<a href="/3" rel="prev">"#));
    assert!(html.contains(r#"<a href="/5" rel="next">"#));
    assert_eq!(html.matches("class=\"active\"").count(), 1);
}

#[test]
fn test_json_round_trips_through_descriptor_type() {
    let config = config_with(&[("PAGENAV__OUTPUT__FORMAT", "json")]);
    let json = render_page(&config, 2, 2).unwrap();
    let links: Vec<pager::LinkDescriptor> = serde_json::from_str(&json).unwrap();

    assert_eq!(links.len(), 3);
    assert_eq!(links[0].rel, Some(pager::LinkRel::Prev));
    assert!(links[2].is_active);
}

#[test]
fn test_terminal_output() {
    let config = config_with(&[
        ("PAGENAV__OUTPUT__FORMAT", "terminal"),
        ("PAGENAV__OUTPUT__WIDTH", "60"),
    ]);
    let out = render_page(&config, 2, 3).unwrap();
    assert_eq!(out.trim(), "← Previous Page | 1 | [2] | 3 | Next Page →");
}

#[test]
fn test_policy_from_config() {
    let strict = config_with(&[]);
    assert!(matches!(
        render_page(&strict, 0, 3),
        Err(AppError::Pagination(_))
    ));

    let clamp = config_with(&[
        ("PAGENAV__BOUNDS__POLICY", "clamp"),
        ("PAGENAV__OUTPUT__FORMAT", "text"),
    ]);
    assert_eq!(render_page(&clamp, 0, 3).unwrap(), "[1] | 2 | 3 | Next Page →");
}
