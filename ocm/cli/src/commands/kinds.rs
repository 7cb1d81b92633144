use colored::Colorize;
use strum::IntoEnumIterator;

use crate::document::DocumentKind;

/// One line per accepted `--kind`, with the service that declares it.
pub fn render_kinds() -> String {
    let width = DocumentKind::iter()
        .map(|kind| kind.to_string().len())
        .max()
        .unwrap_or_default();

    DocumentKind::iter()
        .map(|kind| {
            let name = format!("{:<width$}", kind.to_string());
            format!("{}  {}", name.as_str().bold(), kind.service().dimmed())
        })
        .collect::<Vec<_>>()
        .join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lists_every_kind_aligned() {
        colored::control::set_override(false);
        let rendered = render_kinds();
        let lines: Vec<&str> = rendered.lines().collect();

        assert_eq!(lines.len(), DocumentKind::iter().count());
        assert_eq!(lines[0], "cluster            clusters_mgmt/v1");
        assert!(lines.contains(&"reserved_resource  accounts_mgmt/v1"));
    }
}
