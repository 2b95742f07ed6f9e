use colored::Colorize;
use skinmatch::catalog::CatalogItem;
use skinmatch::commands::stock::format_cents;
use skinmatch::commands::{AttributeEntry, CmdMessage, ListedItem, MessageLevel};
use skinmatch::config::SkinmatchConfig;
use skinmatch::engine::ToggleHint;
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

const NAME_WIDTH: usize = 36;
const EXACT_MARKER: &str = "●";

pub(super) fn print_messages(messages: &[CmdMessage]) {
    for message in messages {
        match message.level {
            MessageLevel::Info => println!("{}", message.content.dimmed()),
            MessageLevel::Success => println!("{}", message.content.green()),
            MessageLevel::Warning => println!("{}", message.content.yellow()),
            MessageLevel::Error => println!("{}", message.content.red()),
        }
    }
}

pub(super) fn print_chips(chips: &[String]) {
    println!("{} {}", "Selected:".bold(), chips.join(", ").cyan());
}

pub(super) fn print_listed(items: &[ListedItem]) {
    let rank_width = items.len().to_string().len();
    for (i, listed) in items.iter().enumerate() {
        let rank = format!("{:>width$}. ", i + 1, width = rank_width);
        let name = pad_to_width(&truncate_to_width(&listed.item.name, NAME_WIDTH), NAME_WIDTH);
        let marker = if listed.result.is_exact_coverage {
            EXACT_MARKER.green()
        } else {
            " ".normal()
        };
        println!(
            "{}{} {} {:<8} {:>3} bits  stock {:>4}  {:>9}  {:.1}★  {}",
            rank.yellow(),
            marker,
            name.bold(),
            listed.item.id,
            listed.result.matched_bits,
            listed.item.stock,
            format_cents(listed.item.price_cents),
            listed.item.rating,
            listed.attribute_names.join(",").dimmed()
        );
    }
}

pub(super) fn print_hints(hints: &[ToggleHint]) {
    for hint in hints {
        let state = if hint.active { "[x]" } else { "[ ]" };
        let delta = format!("{:+}", hint.delta);
        let delta = match hint.delta {
            d if d > 0 => delta.green(),
            d if d < 0 => delta.red(),
            _ => delta.dimmed(),
        };
        println!("  {} {:<20} {:>6}", state, hint.name, delta);
    }
}

pub(super) fn print_attributes(attributes: &[AttributeEntry]) {
    for attribute in attributes {
        println!(
            "  {:>#12b}  {:<20} {}",
            attribute.bit,
            attribute.name.bold(),
            format!("{} items", attribute.items).dimmed()
        );
    }
}

pub(super) fn print_affected(items: &[CatalogItem]) {
    for item in items {
        println!(
            "  {} {}  stock {}  {}",
            item.id.yellow(),
            item.name.bold(),
            item.stock,
            format_cents(item.price_cents)
        );
    }
}

pub(super) fn print_config(config: &SkinmatchConfig) {
    let max_results = config
        .max_results
        .map(|n| n.to_string())
        .unwrap_or_else(|| "unlimited".to_string());
    println!("{:<16} {:?}", "default_policy", config.default_policy);
    println!("{:<16} {:?}", "unknown_names", config.unknown_names);
    println!("{:<16} {:?}", "tiebreak", config.tiebreak);
    println!("{:<16} {}", "max_results", max_results);
}

fn truncate_to_width(s: &str, max_width: usize) -> String {
    if s.width() <= max_width {
        return s.to_string();
    }

    let mut result = String::new();
    let mut current_width = 0;

    for c in s.chars() {
        let char_width = c.width().unwrap_or(0);
        if current_width + char_width > max_width.saturating_sub(1) {
            result.push('…');
            return result;
        }
        result.push(c);
        current_width += char_width;
    }

    result
}

fn pad_to_width(s: &str, width: usize) -> String {
    let padding = width.saturating_sub(s.width());
    format!("{}{}", s, " ".repeat(padding))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn truncates_wide_names() {
        assert_eq!(truncate_to_width("Serum", 10), "Serum");
        assert_eq!(truncate_to_width("Clarifying Serum", 8), "Clarify…");
        // Full-width characters count double.
        assert_eq!(truncate_to_width("美白美白美白", 6), "美白…");
    }

    #[test]
    fn names_exactly_as_wide_as_the_column_are_kept() {
        assert_eq!(truncate_to_width("Serum", 5), "Serum");
        assert_eq!(truncate_to_width("美白美白", 8), "美白美白");
        assert_eq!(truncate_to_width("Serums", 5), "Seru…");
    }

    #[test]
    fn pads_by_display_width() {
        assert_eq!(pad_to_width("ab", 4), "ab  ");
        assert_eq!(pad_to_width("美", 4).width(), 4);
        assert_eq!(pad_to_width("toolong", 3), "toolong");
    }
}
