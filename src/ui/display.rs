// Tue Jan 13 2026 - Alex

use crate::types::{MemberLayout, TypeAlias, TypeRegistry};
use colored::*;

pub struct LayoutRenderer {
    use_color: bool,
}

impl LayoutRenderer {
    pub fn new() -> Self {
        Self { use_color: true }
    }

    pub fn with_color(mut self, use_color: bool) -> Self {
        self.use_color = use_color;
        self
    }

    fn paint(&self, text: String, color: Color) -> String {
        if self.use_color {
            text.color(color).to_string()
        } else {
            text
        }
    }

    pub fn format_size(&self, size: u64) -> String {
        if size == 0 {
            self.paint("unresolved".to_string(), Color::Red)
        } else {
            self.paint(size.to_string(), Color::Green)
        }
    }

    pub fn render_size(&self, name: &str, size: u64) -> String {
        format!("{} {}", self.paint(format!("{:<24}", name), Color::Cyan), self.format_size(size))
    }

    pub fn render_alias(&self, alias: &TypeAlias, size: u64) -> String {
        format!("{} {}", self.paint(format!("{:<40}", alias.to_string()), Color::Cyan), self.format_size(size))
    }

    fn render_member(&self, member: &MemberLayout, name_width: usize) -> String {
        let type_name = if member.array_count > 0 {
            format!("{}[{}]", member.type_name, member.array_count)
        } else {
            member.type_name.clone()
        };
        format!(
            "  {} {} {:<20} {}",
            self.paint(format!("+0x{:04x}", member.offset), Color::Yellow),
            format!("{:<width$}", member.name, width = name_width),
            type_name,
            self.format_size(member.span())
        )
    }

    /// Header, one row per member, then the trailing padding. `None` when
    /// `name` is not an aggregate.
    pub fn render_layout(&self, registry: &TypeRegistry, name: &str) -> Option<String> {
        let aggregate = registry.aggregate(name)?;
        let members = registry.member_layouts(name)?;
        let resolved = registry.resolve(name);
        let name_width = members.iter().map(|m| m.name.len()).max().unwrap_or(0);

        let mut lines = vec![format!(
            "{} {} (align {}) size {}",
            aggregate.kind,
            self.paint(aggregate.name.clone(), Color::Cyan),
            aggregate.alignment,
            self.format_size(resolved.size)
        )];
        lines.extend(members.iter().map(|m| self.render_member(m, name_width)));
        if resolved.padding > 0 {
            lines.push(format!("  padding {}", resolved.padding));
        }
        Some(lines.join("\n"))
    }
}

impl Default for LayoutRenderer {
    fn default() -> Self {
        Self::new()
    }
}
