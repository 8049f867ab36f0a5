//! Rendering invariants that hold across every resource renderer.

use crate::integration::{
    account, action, domain, droplet, floating_ip, image, kernel, record, region, size, snapshot,
    ssh_key, tag, volume,
};
use docli::display::{self, RenderOptions};
use docli::error::ApiError;
use docli::types::{Account, Action, DomainRecord, Droplet, Image, Region, Size, Volume};
use serde::de::DeserializeOwned;
use serde_json::{json, Value};

fn table() -> RenderOptions {
    RenderOptions::new(false, false)
}

fn json() -> RenderOptions {
    RenderOptions::new(true, false)
}

/// Every list renderer on an empty list: exactly one `none` and no data.
#[test]
fn test_every_list_renderer_has_placeholder() {
    let opts = table();
    let outputs: Vec<(&str, Result<String, ApiError>)> = vec![
        ("actions", display::render_actions(&[], &opts)),
        ("domains", display::render_domains(&[], &opts)),
        ("records", display::render_domain_records(&[], &opts)),
        ("droplets", display::render_droplets(&[], &opts)),
        ("kernels", display::render_kernels(&[], &opts)),
        ("images", display::render_images(&[], &opts)),
        ("snapshots", display::render_snapshots(&[], &opts)),
        ("floating ips", display::render_floating_ips(&[], &opts)),
        ("regions", display::render_regions(&[], &opts)),
        ("sizes", display::render_sizes(&[], &opts)),
        ("ssh keys", display::render_ssh_keys(&[], &opts)),
        ("tags", display::render_tags(&[], &opts)),
        ("volumes", display::render_volumes(&[], &opts)),
    ];
    for (name, output) in outputs {
        let output = output.unwrap();
        assert_eq!(output.matches("none").count(), 1, "{}: {}", name, output);
    }
}

#[test]
fn test_empty_json_list_is_empty_array() {
    assert_eq!(display::render_droplets(&[], &json()).unwrap(), "[]");
    assert_eq!(display::render_volumes(&[], &json()).unwrap(), "[]");
}

/// No renderer leaks `null` or `undefined` into a table.
#[test]
fn test_tables_never_show_null() {
    let opts = table();
    let outputs = vec![
        display::render_account(&account(), &opts).unwrap(),
        display::render_action(&action(1), None, &opts).unwrap(),
        display::render_domain(&domain("example.com"), false, None, &opts).unwrap(),
        display::render_domain_record(&record(1, "TXT", "@", "v=spf1 -all"), None, &opts)
            .unwrap(),
        display::render_droplet(&droplet(1, "web-1"), None, &opts).unwrap(),
        display::render_image(&image(1, "Ubuntu", "22.04", true), None, &opts).unwrap(),
        display::render_floating_ip(&floating_ip("45.55.96.47", None), None, &opts).unwrap(),
        display::render_ssh_key(&ssh_key(1, "k", "ssh-rsa AAA"), false, None, &opts).unwrap(),
        display::render_volume(&volume("506f78a4"), None, &opts).unwrap(),
        display::render_tag(&tag("frontend", 0), None, &opts).unwrap(),
        display::render_kernels(&[kernel(1)], &opts).unwrap(),
        display::render_regions(&[region("nyc3")], &opts).unwrap(),
        display::render_sizes(&[size("s-1vcpu-1gb")], &opts).unwrap(),
        display::render_snapshots(&[snapshot("6372321")], &opts).unwrap(),
    ];
    for output in outputs {
        assert!(!output.contains("null"), "{}", output);
        assert!(!output.contains("undefined"), "{}", output);
    }
}

/// Parse `input` as the API would deliver it, render it in JSON mode and
/// check the output is the same JSON value.
fn assert_echoes<T, F>(input: Value, render: F)
where
    T: DeserializeOwned,
    F: Fn(&T, &RenderOptions) -> Result<String, ApiError>,
{
    let parsed: T = serde_json::from_value(input.clone()).unwrap();
    let out = render(&parsed, &json()).unwrap();
    let echoed: Value = serde_json::from_str(&out).unwrap();
    assert_eq!(echoed, input);
}

#[test]
fn test_json_mode_echoes_received_objects() {
    assert_echoes(
        json!({
            "uuid": "b6fr89dbf6d9156cace5f3c78dc9851d957381ef",
            "status": "active",
            "status_message": "",
            "email": "sammy@example.com",
            "email_verified": true,
            "droplet_limit": 25,
            "floating_ip_limit": 3,
            "team": {"uuid": "5df3e3004a17e242b7c20ca6c9fc25b701a47ece", "name": "My Team"}
        }),
        |a: &Account, opts| display::render_account(a, opts),
    );
    assert_echoes(
        json!({
            "id": "506f78a4",
            "name": "pg-data",
            "size_gigabytes": 100,
            "region": {"slug": "nyc1"},
            "description": null
        }),
        |v: &Volume, opts| display::render_volume(v, Some("Volume attached."), opts),
    );
}

#[test]
fn test_json_mode_keeps_absent_keys_absent() {
    assert_echoes(
        json!([{"id": 1, "status": "completed", "type": "power_on"}]),
        |a: &Vec<Action>, opts| display::render_actions(a, opts),
    );
    assert_echoes(
        json!([{"slug": "ams2", "name": "Amsterdam 2"}]),
        |r: &Vec<Region>, opts| display::render_regions(r, opts),
    );
    assert_echoes(
        json!({
            "id": 7, "name": "web-1", "status": "off", "memory": 512, "disk": 20,
            "vcpus": 1, "kernel": null,
            "image": {"distribution": "Debian", "name": "12 x64"},
            "region": {"slug": "fra1"}
        }),
        |d: &Droplet, opts| display::render_droplet(d, None, opts),
    );
}

#[test]
fn test_json_mode_keeps_whole_numbers() {
    let input = json!([{
        "slug": "s-1vcpu-1gb", "memory": 1024, "vcpus": 1, "disk": 25,
        "transfer": 1, "price_monthly": 5
    }]);
    let sizes: Vec<Size> = serde_json::from_value(input.clone()).unwrap();
    let out = display::render_sizes(&sizes, &json()).unwrap();
    assert!(out.contains("\"transfer\": 1"), "{}", out);
    assert!(!out.contains("1.0"), "{}", out);
    assert!(!out.contains("5.0"), "{}", out);
    assert_echoes(input, |s: &Vec<Size>, opts| display::render_sizes(s, opts));

    assert_echoes(
        json!([{"id": 7, "name": "nightly", "distribution": "Ubuntu", "public": false,
                "size_gigabytes": 2}]),
        |i: &Vec<Image>, opts| display::render_images(i, opts),
    );
}

fn field_line<'a>(out: &'a str, label: &str) -> &'a str {
    let prefix = format!("│ {} ", label);
    out.lines()
        .find(|line| line.starts_with(&prefix))
        .unwrap_or_else(|| panic!("no {:?} row in\n{}", label, out))
}

fn assert_field_none(out: &str, label: &str) {
    let line = field_line(out, label);
    assert!(line.contains(" none "), "{:?} rendered blank: {:?}", label, line);
}

/// Optional strings the API sends as `""` render as `none`, never as a
/// blank cell.
#[test]
fn test_blank_optional_strings_render_none() {
    let opts = table();

    let out = display::render_account(&account(), &opts).unwrap();
    assert_field_none(&out, "Status message");

    let action: Action = serde_json::from_value(json!({
        "id": 1, "status": "in-progress", "type": "attach_volume",
        "resource_type": "", "resource_id": null, "region_slug": ""
    }))
    .unwrap();
    let out = display::render_action(&action, None, &opts).unwrap();
    assert_field_none(&out, "Resource Type");
    assert_field_none(&out, "Resource ID");
    assert_field_none(&out, "Resource Region");

    let image: Image = serde_json::from_value(json!({
        "id": 7, "name": "nightly", "distribution": "Ubuntu", "type": "",
        "slug": "", "public": false, "regions": []
    }))
    .unwrap();
    let out = display::render_image(&image, None, &opts).unwrap();
    assert_field_none(&out, "Type");
    assert_field_none(&out, "Slug");
    assert_field_none(&out, "Regions");
    assert_field_none(&out, "Size");

    let droplet: Droplet = serde_json::from_value(json!({
        "id": 7, "name": "web-1", "status": "active", "memory": 512, "disk": 20,
        "vcpus": 1, "kernel": null,
        "image": {"distribution": "Debian", "name": "12 x64"},
        "region": {"slug": "fra1", "name": ""}
    }))
    .unwrap();
    let out = display::render_droplet(&droplet, None, &opts).unwrap();
    assert_field_none(&out, "Kernel");
    assert_field_none(&out, "Region");
    assert_field_none(&out, "Tags");

    let volume: Volume = serde_json::from_value(json!({
        "id": "506f78a4", "name": "pg-data", "size_gigabytes": 10,
        "region": {"slug": "nyc1"}, "description": "  ", "droplet_ids": []
    }))
    .unwrap();
    let out = display::render_volume(&volume, None, &opts).unwrap();
    assert_field_none(&out, "Description");
    assert_field_none(&out, "Attached To");

    let record: DomainRecord = serde_json::from_value(json!({
        "id": 3, "type": "A", "name": "www", "data": "104.236.32.182",
        "priority": null, "port": null, "weight": null
    }))
    .unwrap();
    let out = display::render_domain_record(&record, None, &opts).unwrap();
    assert_field_none(&out, "Priority");

    let ip = floating_ip("45.55.96.47", None);
    let out = display::render_floating_ip(&ip, None, &opts).unwrap();
    assert_field_none(&out, "Droplet");

    let out = display::render_tag(&tag("frontend", 0), None, &opts).unwrap();
    assert_field_none(&out, "Last Droplet Tagged");

    let regions: Vec<Region> =
        serde_json::from_value(json!([{"slug": "sfo3", "name": "", "sizes": ["s-1vcpu-1gb"]}]))
            .unwrap();
    let out = display::render_regions(&regions, &opts).unwrap();
    let row = out.lines().find(|line| line.contains("sfo3")).unwrap();
    assert!(row.contains(" none "), "{:?}", row);
}

#[test]
fn test_messages_go_before_table() {
    let out = display::render_action(&action(9), Some("Taking a snapshot..."), &table()).unwrap();
    let mut lines = out.lines();
    assert_eq!(lines.next(), Some("Taking a snapshot..."));
    assert!(out.contains("Action ID"));
}
