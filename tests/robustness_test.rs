use restaurant_extract::{
    extract_restaurants, extract_restaurants_bytes, extract_restaurants_with_options, Error, Options,
};

#[test]
fn extract_does_not_panic_on_malformed_html_unclosed_tags() {
    let html = r#"<div class="restaurant-card"><h3><a href="/r/alo">Alo<div>more"#;
    let records = extract_restaurants(html).unwrap();
    assert!(records[0].name.starts_with("Alo"));
}

#[test]
fn extract_does_not_panic_on_malformed_html_invalid_nesting() {
    let html = r#"<p><a href="/r/canoe"></p>Canoe</a></div>"#;
    assert!(extract_restaurants(html).is_ok());
}

#[test]
fn extract_does_not_panic_on_broken_attributes() {
    let html = "<div class=\"restaurant-card id=broken><h3>Name";
    assert!(extract_restaurants(html).is_ok());
}

#[test]
fn extract_returns_empty_for_empty_string() {
    assert!(extract_restaurants("").unwrap().is_empty());
}

#[test]
fn extract_returns_empty_for_non_listing_page() {
    let html = "<html><body><h1>Gift cards</h1><p>Give the gift of dining.</p></body></html>";
    assert!(extract_restaurants(html).unwrap().is_empty());
}

#[test]
fn extract_handles_invalid_utf8_bytes() {
    let html = b"<ul><li><a href=\"/r/x\">Caf\xFF\xFE Nord</a></li></ul>";
    let records = extract_restaurants_bytes(html, None, &Options::default()).unwrap();
    assert_eq!(records.len(), 1);
    assert!(records[0].name.contains("Nord"));
}

#[test]
fn extract_handles_deep_nesting() {
    let mut html = String::new();
    for _ in 0..500 {
        html.push_str("<div>");
    }
    html.push_str(r#"<a href="/r/deep">Deep Dish Pizza</a>"#);
    for _ in 0..500 {
        html.push_str("</div>");
    }

    let records = extract_restaurants(&html).unwrap();
    assert_eq!(records[0].name, "Deep Dish Pizza");
    assert_eq!(records[0].cuisine, "Pizza");
}

#[test]
fn extract_rejects_relative_base_url() {
    let options = Options {
        base_url: "/relative".into(),
        ..Options::default()
    };
    assert!(matches!(
        extract_restaurants_with_options("<p></p>", &options),
        Err(Error::InvalidUrl { .. })
    ));
}

#[test]
fn extract_keeps_non_latin_names() {
    let html = r#"<ul><li><a href="/r/sushi-kaji">鮨 Kaji</a> Japanese</li></ul>"#;
    let records = extract_restaurants(html).unwrap();
    assert_eq!(records[0].name, "鮨 Kaji");
    assert_eq!(records[0].cuisine, "Japanese");
}
