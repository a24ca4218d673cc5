use crate::tests::completion_dsl::{server_port, t};
use crate::{
    DisplaySegment, PropertyInfo, ProjectHandle, format_default_value, property_segments,
    short_description,
};

fn display_of(fixture: &str, label: &str) -> String {
    t(fixture)
        .proposals()
        .iter()
        .find(|p| p.to_string() == label)
        .map(|p| p.display_string())
        .unwrap_or_else(|| panic!("missing label {label}"))
}

#[test]
fn display_property_with_default_type_and_description() {
    assert_eq!(
        display_of("server:\n  po$0", "server.port"),
        "server.port=8080 : Integer Server HTTP port."
    );
}

#[test]
fn display_strips_packages_from_generic_types() {
    assert_eq!(
        display_of("lo$0", "logging.level"),
        "logging.level : Map<String, String>"
    );
    assert_eq!(
        display_of("spring:\n  profiles:\n    ac$0", "spring.profiles.active"),
        "spring.profiles.active : List<String> Comma-separated list of active profiles."
    );
}

#[test]
fn display_simple_proposal_is_value() {
    assert_eq!(display_of("debug: $0", "true"), "true");
}

#[test]
fn styled_display_segments() {
    insta::assert_debug_snapshot!(property_segments(&server_port()), @r#"
    [
        Name {
            text: "server.port",
        },
        Operator {
            text: "=",
        },
        Value {
            text: "8080",
        },
        Punct {
            text: " : ",
        },
        Type {
            text: "Integer",
        },
        Punct {
            text: " ",
        },
        Description {
            text: "Server HTTP port.",
        },
    ]
    "#);
}

#[test]
fn display_segments_serialize_with_kind_tag() {
    let json = serde_json::to_string(&DisplaySegment::Type {
        text: "Integer".to_string(),
    })
    .expect("serializable");
    assert_eq!(json, r#"{"kind":"Type","text":"Integer"}"#);
}

#[test]
fn short_description_keeps_first_sentence_without_control_chars() {
    assert_eq!(
        short_description("Line one\nstill one. Two."),
        "Line onestill one."
    );
    assert_eq!(short_description("No period\there"), "No periodhere");
    assert_eq!(short_description(""), "");
}

#[test]
fn blank_description_is_omitted() {
    let info = PropertyInfo::new("a.b").with_description(" \n ");
    assert_eq!(
        property_segments(&info),
        [DisplaySegment::Name {
            text: "a.b".to_string()
        }]
    );
}

#[test]
fn default_values_render_like_literals() {
    use serde_json::json;
    assert_eq!(format_default_value(&json!(null)), None);
    assert_eq!(format_default_value(&json!("dev")), Some("dev".to_string()));
    assert_eq!(format_default_value(&json!(false)), Some("false".to_string()));
    assert_eq!(format_default_value(&json!(1.5)), Some("1.5".to_string()));
    assert_eq!(
        format_default_value(&json!(["a", 1])),
        Some("a,1".to_string())
    );
    assert_eq!(format_default_value(&json!([])), None);
}

#[test]
fn additional_info_is_html_for_properties_only() {
    let proposals = t("server:\n  po$0").proposals();
    let html = proposals[0]
        .additional_info()
        .expect("property proposals have hover text");
    assert!(html.starts_with("<b>server.port</b>"), "{html}");
    assert!(html.contains("<code>java.lang.Integer</code>"), "{html}");
    assert!(html.contains("Default: <i>8080</i>"), "{html}");
    assert!(!html.contains("Deprecated"), "{html}");

    let proposals = t("debug: $0").proposals();
    assert_eq!(proposals[0].additional_info(), None);
}

#[test]
fn hover_text_escapes_generic_types() {
    let info = PropertyInfo::new("logging.level")
        .with_type("java.util.Map<java.lang.String,java.lang.String>")
        .deprecated();
    let html = crate::hover_html(&info);
    assert!(
        html.contains("java.util.Map&lt;java.lang.String,java.lang.String&gt;"),
        "{html}"
    );
    assert!(html.contains("<b>Deprecated</b>"), "{html}");
}

#[test]
fn hover_info_carries_project() {
    let proposals = t("server:\n  po$0").project("demo").proposals();
    let hover = proposals[0].hover_info().expect("property hover");
    assert_eq!(hover.project, Some(ProjectHandle("demo".to_string())));
    assert_eq!(hover.property.id, "server.port");
    assert!(hover.html().starts_with("<b>server.port</b>"));
}
