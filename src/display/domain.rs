//! Domains and their DNS records.

use crate::display::format::{color_id, color_name, color_status, or_none, Style, Styled};
use crate::display::table::TableView;
use crate::display::{echo_json, with_message, RenderOptions};
use crate::error::ApiError;
use crate::types::{Domain, DomainRecord};

/// Render one domain. With `zone_file` set the zone file is printed verbatim
/// instead of the table; JSON mode takes precedence over both.
pub fn render_domain(
    domain: &Domain,
    zone_file: bool,
    message: Option<&str>,
    opts: &RenderOptions,
) -> Result<String, ApiError> {
    if opts.json {
        return echo_json(domain);
    }
    if zone_file {
        return Ok(or_none(domain.zone_file.as_deref()));
    }
    let mut table = TableView::detail(opts);
    table.push_field("Domain Name", color_name(&domain.name));
    table.push_field("TTL", or_none(domain.ttl));
    table.push_field(
        "Zone File",
        Styled::new("Use the --zone-file flag to get the full zone file", Style::LABEL),
    );
    Ok(with_message(message, table.render(), opts))
}

pub fn render_domains(domains: &[Domain], opts: &RenderOptions) -> Result<String, ApiError> {
    if opts.json {
        return echo_json(domains);
    }
    let mut table = TableView::list(&["Domain Name", "TTL"], opts);
    for domain in domains {
        table.push_row(vec![color_name(&domain.name), or_none(domain.ttl).into()]);
    }
    Ok(table.render())
}

pub fn render_domain_record(
    record: &DomainRecord,
    message: Option<&str>,
    opts: &RenderOptions,
) -> Result<String, ApiError> {
    if opts.json {
        return echo_json(record);
    }
    let mut table = TableView::detail(opts);
    table.push_field("ID", color_id(record.id));
    table.push_field("Type", color_status(&record.record_type));
    table.push_field("Name", record.name.as_str());
    table.push_field("Data", record.data.as_str());
    table.push_field("Priority", or_none(record.priority));
    table.push_field("Port", or_none(record.port));
    table.push_field("Weight", or_none(record.weight));
    Ok(with_message(message, table.render(), opts))
}

pub fn render_domain_records(
    records: &[DomainRecord],
    opts: &RenderOptions,
) -> Result<String, ApiError> {
    if opts.json {
        return echo_json(records);
    }
    let mut table = TableView::list(&["ID", "Type", "Name", "Data"], opts);
    for record in records {
        table.push_row(vec![
            color_id(record.id),
            color_status(&record.record_type),
            record.name.as_str().into(),
            record.data.as_str().into(),
        ]);
    }
    Ok(table.render())
}
