use eol_mcp::domain::{CycleLabel, FieldValue, ReleaseCycle};
use eol_mcp::format::{format_cycle, format_cycles, format_products};

fn jammy() -> ReleaseCycle {
    ReleaseCycle {
        cycle: CycleLabel::Text("22.04".to_string()),
        release_date: "2022-04-21".to_string(),
        eol: FieldValue::Text("2027-04-21".to_string()),
        latest: "22.04.3".to_string(),
        link: None,
        lts: FieldValue::Flag(true),
        support: FieldValue::Text("2024-04-21".to_string()),
        discontinued: FieldValue::Absent,
    }
}

#[test]
fn cycle_line_is_exact() {
    assert_eq!(
        format_cycle("ubuntu", &jammy()),
        "Details for product ubuntu cycle 22.04 details: \
         Release Date: 2022-04-21, EOL: 2027-04-21, Latest: 22.04.3, \
         Link: N/A, LTS: true, Support: 2024-04-21, Discontinued: N/A"
    );
}

#[test]
fn missing_raw_strings_stay_empty() {
    let record = ReleaseCycle::default();
    let line = format_cycle("ubuntu", &record);
    assert!(line.contains("Release Date: , EOL: N/A"), "line: {line}");
    assert!(line.contains("Latest: , Link: N/A"), "line: {line}");
}

#[test]
fn link_passes_through_when_present() {
    let record = ReleaseCycle {
        link: Some("https://wiki.ubuntu.com/JammyJellyfish/ReleaseNotes/".to_string()),
        ..jammy()
    };
    let line = format_cycle("ubuntu", &record);
    assert!(line.contains("Link: https://wiki.ubuntu.com/JammyJellyfish/ReleaseNotes/"));
}

#[test]
fn cycle_list_joins_with_newlines_in_order() {
    let focal = ReleaseCycle {
        cycle: CycleLabel::Text("20.04".to_string()),
        ..jammy()
    };
    let rendered = format_cycles("ubuntu", &[jammy(), focal]);
    let lines = rendered.lines().collect::<Vec<_>>();
    assert_eq!(lines.len(), 2);
    assert!(lines[0].contains("cycle 22.04 details"));
    assert!(lines[1].contains("cycle 20.04 details"));
}

#[test]
fn empty_cycle_list_renders_empty() {
    assert_eq!(format_cycles("ubuntu", &[]), "");
}

#[test]
fn product_listing_preserves_order() {
    let products = vec![
        "ubuntu".to_string(),
        "php".to_string(),
        "windows".to_string(),
    ];
    assert_eq!(
        format_products(&products),
        "Available products: [ubuntu, php, windows]"
    );
}
