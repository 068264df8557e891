//! Tabular display for catalog site records.

use std::fmt::Write;

use panelbase_core::SiteRecord;

const NAME_WIDTH: usize = 42;
const CLIENT_WIDTH: usize = 18;

// ── Public API ──

/// Print one catalog group as a header line followed by one row per site.
pub fn print_group(name: &str, sites: &[&SiteRecord]) {
    print!("{}", format_group(name, sites));
}

pub fn format_group(name: &str, sites: &[&SiteRecord]) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "=== {name} ({}) ===", sites.len());
    let _ = writeln!(
        out,
        "  {:<24} {:<NAME_WIDTH$} {:<CLIENT_WIDTH$} {:<10} {:<7} {:<6} {}",
        "ORGANIZATION ID", "NAME", "CLIENT", "PRODUCT", "FORMAT", "CLASS", "STATUS"
    );
    for site in sites {
        out.push_str(&format_row(site));
        out.push('\n');
    }
    out.push('\n');
    out
}

// ── Row rendering ──

fn format_row(site: &SiteRecord) -> String {
    let product = site.panel_product.map(|p| p.as_str()).unwrap_or("-");
    let format = site.panel_format.map(|f| f.as_str()).unwrap_or("-");
    let class = site.site_class.map(|c| c.as_str()).unwrap_or("-");
    let status = if site.archived { "archived" } else { "active" };

    format!(
        "  {:<24} {:<NAME_WIDTH$} {:<CLIENT_WIDTH$} {:<10} {:<7} {:<6} {}",
        site.organization_id,
        truncate(site.organization_name, NAME_WIDTH),
        truncate(site.client_name.unwrap_or("-"), CLIENT_WIDTH),
        product,
        format,
        class,
        status,
    )
}

fn truncate(s: &str, width: usize) -> String {
    if s.chars().count() <= width {
        return s.to_string();
    }
    let mut out: String = s.chars().take(width.saturating_sub(1)).collect();
    out.push('…');
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use panelbase_core::Organizations;

    #[test]
    fn group_header_counts_sites() {
        let orgs = Organizations::new();
        let sites: Vec<&SiteRecord> = orgs.group("Calibre").unwrap().iter().collect();
        let out = format_group("Calibre", &sites);
        assert!(out.starts_with("=== Calibre (2) ==="));
        assert!(out.contains("60b31bcd8e1e1fde00bf3706"));
        assert!(out.contains("PB_SC"));
    }

    #[test]
    fn missing_values_render_as_dash() {
        let orgs = Organizations::new();
        let (_, jolt) = orgs.find_organization("65544188397e42fb7d0055cb").unwrap();
        let row = format_row(jolt);
        assert!(row.contains("archived"));
        assert_eq!(row.matches(" - ").count(), 3);
    }

    #[test]
    fn product_and_format_use_display_names() {
        let orgs = Organizations::new();
        let (_, site) = orgs.find_organization("66b1bbf394c91b1e4b777287").unwrap();
        let row = format_row(site);
        assert!(row.contains(" Placebased "));
        assert!(row.contains(" Digital "));
        assert!(row.contains(" PB_AP "));
    }

    #[test]
    fn truncate_long_names() {
        assert_eq!(truncate("short", 10), "short");
        let t = truncate("MediaWorks - Shopping Centre - Classic", 12);
        assert_eq!(t.chars().count(), 12);
        assert!(t.ends_with('…'));
    }
}
