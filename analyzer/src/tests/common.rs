/// Drops the newline opening a raw-string fixture and the margin shared by its lines.
pub fn trim_indent(fixture: &str) -> String {
    let body = fixture.strip_prefix('\n').unwrap_or(fixture);
    let margin = body
        .lines()
        .filter(|line| !line.trim().is_empty())
        .map(|line| line.len() - line.trim_start_matches(' ').len())
        .min()
        .unwrap_or(0);
    body.lines()
        .map(|line| line.get(margin..).unwrap_or_else(|| line.trim_start()))
        .collect::<Vec<_>>()
        .join("\n")
}

/// Splits a fixture containing exactly one `$0` marker into `(text, offset)`.
pub fn with_cursor(fixture: &str) -> (String, usize) {
    let cursor = fixture
        .find("$0")
        .expect("fixture must contain $0 marker");
    let text = fixture.replace("$0", "");
    assert!(
        text.len() + 2 == fixture.len(),
        "fixture must contain exactly one $0 marker"
    );
    (text, cursor)
}

pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

#[test]
fn test_trim_indent() {
    let s = r#"
        server:
          port: 8080
        spring:
          profiles:
            active: dev"#;
    let expected = "server:\n  port: 8080\nspring:\n  profiles:\n    active: dev";
    assert_eq!(expected, trim_indent(s));
}

#[test]
fn test_with_cursor() {
    let (text, cursor) = with_cursor("server:\n  po$0");
    assert_eq!(text, "server:\n  po");
    assert_eq!(cursor, 12);
}
