//! Formatting utilities for terminal output

use crate::core::Word;
use colored::Colorize;

/// Format a path as a single arrow-joined line
#[must_use]
pub fn format_path(path: &[Word]) -> String {
    path.iter()
        .map(Word::text)
        .collect::<Vec<_>>()
        .join(" → ")
}

/// Format one ladder step, highlighting the changed character
///
/// Characters that differ from the previous word are rendered bright yellow
/// and bold; for the first word of a path pass `None`.
#[must_use]
pub fn highlight_step(previous: Option<&Word>, current: &Word) -> String {
    let Some(previous) = previous else {
        return current.text().to_string();
    };

    current
        .bytes()
        .iter()
        .zip(previous.bytes())
        .map(|(&c, &p)| {
            let ch = (c as char).to_string();
            if c == p {
                ch
            } else {
                ch.to_uppercase().bright_yellow().bold().to_string()
            }
        })
        .collect()
}

/// Create a progress bar string
#[must_use]
pub fn create_progress_bar(value: f64, max: f64, width: usize) -> String {
    // Cast is safe: values are clamped to [0, width]
    let filled = ((value / max) * width as f64) as usize;
    let filled = filled.min(width);

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn word(text: &str) -> Word {
        Word::new(text).unwrap()
    }

    #[test]
    fn format_path_joins_with_arrows() {
        let path = vec![word("cat"), word("cot"), word("cog")];
        assert_eq!(format_path(&path), "cat → cot → cog");
    }

    #[test]
    fn format_path_single_word() {
        assert_eq!(format_path(&[word("cat")]), "cat");
    }

    #[test]
    fn highlight_step_without_previous_is_plain() {
        assert_eq!(highlight_step(None, &word("cat")), "cat");
    }

    #[test]
    fn highlight_step_marks_changed_position() {
        colored::control::set_override(false);
        let styled = highlight_step(Some(&word("cat")), &word("cot"));
        colored::control::unset_override();

        // With colors disabled the changed character is still uppercased
        assert_eq!(styled, "cOt");
    }

    #[test]
    fn progress_bar_empty() {
        let bar = create_progress_bar(0.0, 100.0, 10);
        assert_eq!(bar, "░░░░░░░░░░");
    }

    #[test]
    fn progress_bar_full() {
        let bar = create_progress_bar(100.0, 100.0, 10);
        assert_eq!(bar, "██████████");
    }

    #[test]
    fn progress_bar_half() {
        let bar = create_progress_bar(50.0, 100.0, 10);
        assert_eq!(bar, "█████░░░░░");
    }
}
