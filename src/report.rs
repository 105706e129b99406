//! Report rendering.
//!
//! The textual content and column alignment are the contract; the HTML
//! form only wraps the same text in a minimal page for serving next to
//! the update files.

use crate::analysis::Analysis;

/// Render the plain-text report.
///
/// Three blocks: one row per archive, aggregate totals, and the ownership
/// listing mapping every distinct entry name to the archive that currently
/// provides it. Sizes print as whole KiB (floor), percentages as whole
/// percent (floor).
pub fn render_text(analysis: &Analysis) -> String {
    let mut out = String::new();

    let file_width = analysis
        .updates
        .iter()
        .map(|u| u.file.len())
        .max()
        .unwrap_or(0);

    out.push_str("List of current updates:\n\n");

    for update in &analysis.updates {
        let used_percent = (update.used_percentage() * 100.0) as u64;
        out.push_str(&format!(
            "{:<width$}  {}  {:>4} kb  {:>4} kb  {:>3}% used ({}/{} files)\n",
            update.file,
            update.adler32,
            update.file_size / 1024,
            update.uncompressed_size / 1024,
            used_percent,
            update.used_entry_count,
            update.entries.len(),
            width = file_width,
        ));
    }

    out.push('\n');
    out.push_str(&format!(
        "Amount of data: {:>4} kb (+{} kb zip file overhead)\n",
        analysis.data_size / 1024,
        analysis.data_overhead_size / 1024,
    ));
    out.push_str(&format!(
        "Uncompressed:   {:>4} kb\n",
        analysis.data_uncompressed_size / 1024,
    ));
    out.push_str(&format!(
        "Obsoleted data: {:>4} kb ({}%)\n",
        analysis.obsoleted_size() / 1024,
        analysis.obsoleted_percent(),
    ));

    out.push('\n');

    let entry_width = analysis
        .entry_owners
        .iter()
        .map(|(name, _)| name.len())
        .max()
        .unwrap_or(0);

    for (name, owner) in &analysis.entry_owners {
        out.push_str(&format!("{name:<entry_width$}  {owner}\n"));
    }

    out
}

/// Render the report wrapped in a minimal HTML page.
pub fn render_html(analysis: &Analysis) -> String {
    format!(
        "<html>\n<head><title>Update analysis</title></head>\n<body>\n<pre>\n{}</pre>\n</body>\n</html>\n",
        render_text(analysis),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::{Analysis, UpdateArchive, UpdateEntry};

    fn sample_analysis() -> Analysis {
        Analysis {
            updates: vec![
                UpdateArchive {
                    file: "update-2.zip".into(),
                    adler32: "02f6e7d5".into(),
                    file_size: 4096,
                    size: 3072,
                    uncompressed_size: 8192,
                    used_entry_count: 2,
                    used_size: 3072,
                    entries: vec![
                        UpdateEntry {
                            name: "sprites/hero.png".into(),
                            size: 2048,
                            used: true,
                        },
                        UpdateEntry {
                            name: "maps/town.tmx".into(),
                            size: 1024,
                            used: true,
                        },
                    ],
                },
                UpdateArchive {
                    file: "up-1.zip".into(),
                    adler32: "8a5cbc4e".into(),
                    file_size: 2048,
                    size: 1536,
                    uncompressed_size: 4096,
                    used_entry_count: 1,
                    used_size: 512,
                    entries: vec![
                        UpdateEntry {
                            name: "sprites/hero.png".into(),
                            size: 1024,
                            used: false,
                        },
                        UpdateEntry {
                            name: "sounds/hit.ogg".into(),
                            size: 512,
                            used: true,
                        },
                    ],
                },
            ],
            entry_owners: vec![
                ("sprites/hero.png".into(), "update-2.zip".into()),
                ("maps/town.tmx".into(), "update-2.zip".into()),
                ("sounds/hit.ogg".into(), "up-1.zip".into()),
            ],
            data_size: 4608,
            data_uncompressed_size: 12288,
            data_used_size: 3584,
            data_overhead_size: 1536,
        }
    }

    #[test]
    fn archive_rows_align_to_longest_filename() {
        let report = render_text(&sample_analysis());
        let lines: Vec<&str> = report.lines().collect();

        assert_eq!(lines[0], "List of current updates:");
        assert_eq!(lines[1], "");
        assert!(lines[2].starts_with("update-2.zip  02f6e7d5"));
        // Shorter filename padded to the same column.
        assert!(lines[3].starts_with("up-1.zip      8a5cbc4e"));
    }

    #[test]
    fn sizes_and_percentages_floor() {
        let report = render_text(&sample_analysis());

        // 2048 bytes on disk -> 2 kb, 4096 uncompressed -> 4 kb,
        // 512/1536 used -> 33%.
        assert!(report.contains("   2 kb     4 kb   33% used (1/2 files)"));
        // Aggregate: 4608 -> 4 kb data, overhead 1536 -> 1 kb.
        assert!(report.contains("Amount of data:    4 kb (+1 kb zip file overhead)"));
        assert!(report.contains("Uncompressed:     12 kb"));
        // Obsoleted: 1024 bytes -> 1 kb, 100 - 3584/4608*100 = 22.2 -> 22%.
        assert!(report.contains("Obsoleted data:    1 kb (22%)"));
    }

    #[test]
    fn ownership_listing_aligns_to_longest_entry() {
        let report = render_text(&sample_analysis());

        assert!(report.contains("sprites/hero.png  update-2.zip\n"));
        assert!(report.contains("maps/town.tmx     update-2.zip\n"));
        assert!(report.contains("sounds/hit.ogg    up-1.zip\n"));
    }

    #[test]
    fn empty_analysis_renders_headers_and_zero_totals() {
        let report = render_text(&Analysis::default());

        assert!(report.starts_with("List of current updates:\n\n"));
        assert!(report.contains("Amount of data:    0 kb (+0 kb zip file overhead)"));
        assert!(report.contains("Uncompressed:      0 kb"));
        assert!(report.contains("Obsoleted data:    0 kb (0%)"));
    }

    #[test]
    fn html_wraps_text_in_pre_block() {
        let analysis = sample_analysis();
        let html = render_html(&analysis);

        assert!(html.starts_with("<html>"));
        assert!(html.contains("<title>Update analysis</title>"));
        assert!(html.contains("<pre>\nList of current updates:"));
        assert!(html.contains(&render_text(&analysis)));
        assert!(html.trim_end().ends_with("</html>"));
    }
}
