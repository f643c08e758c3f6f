/// Reformat free-text cooking instructions into numbered paragraphs.
///
/// Line breaks (`\r\n`, `\r` or `\n`) separate paragraphs. Blank lines are
/// dropped, each remaining paragraph is prefixed with `"N. "` starting at 1,
/// and paragraphs are joined by a single blank line.
///
/// # Example
/// ```
/// use dessertly::decoders::reformat_instructions;
///
/// let text = "Preheat oven.\r\n\r\nMix flour and sugar.\rBake.";
/// assert_eq!(
///     reformat_instructions(text),
///     "1. Preheat oven.\n\n2. Mix flour and sugar.\n\n3. Bake."
/// );
/// ```
pub fn reformat_instructions(text: &str) -> String {
    let normalized = text.replace("\r\n", "\n").replace('\r', "\n");

    normalized
        .split('\n')
        .map(str::trim)
        .filter(|paragraph| !paragraph.is_empty())
        .enumerate()
        .map(|(index, paragraph)| format!("{}. {}", index + 1, paragraph))
        .collect::<Vec<String>>()
        .join("\n\n")
        .trim()
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mixed_line_breaks() {
        let text = "First step.\r\nSecond step.\rThird step.\nFourth step.";
        assert_eq!(
            reformat_instructions(text),
            "1. First step.\n\n2. Second step.\n\n3. Third step.\n\n4. Fourth step."
        );
    }

    #[test]
    fn test_blank_lines_are_not_paragraphs() {
        let text = "\r\n\r\nMix well.\r\n\r\n\r\n   \r\nServe.\n\n";
        assert_eq!(reformat_instructions(text), "1. Mix well.\n\n2. Serve.");
    }

    #[test]
    fn test_single_paragraph() {
        assert_eq!(
            reformat_instructions("Add sugar, then flour, and finally eggs. Mix well."),
            "1. Add sugar, then flour, and finally eggs. Mix well."
        );
    }

    #[test]
    fn test_no_surrounding_whitespace() {
        let result = reformat_instructions("  Whisk eggs.  \n\tFold in cream.\t\n");
        assert_eq!(result, "1. Whisk eggs.\n\n2. Fold in cream.");
        assert_eq!(result, result.trim());
    }

    #[test]
    fn test_empty_input() {
        assert_eq!(reformat_instructions(""), "");
        assert_eq!(reformat_instructions("\r\n\n\r"), "");
    }

    #[test]
    fn test_deterministic() {
        let text = "One.\r\nTwo.";
        assert_eq!(reformat_instructions(text), reformat_instructions(text));
    }
}
