/// Extract recommendation lines from a free-text model reply.
///
/// Per line: a leading `Recommendations:` header is skipped, an enumeration
/// segment before the first `. ` is dropped, leading and trailing dashes and
/// whitespace are stripped, and anything of 10 characters or fewer is
/// discarded.
///
/// Numbering detection is heuristic — any `. ` counts as an enumeration
/// marker, so a multi-sentence line loses its first sentence and has the
/// rest rejoined with single spaces. Kept as-is for output compatibility.
pub fn parse_recommendation_lines(reply: &str) -> Vec<String> {
    let mut lines = Vec::new();

    for raw in reply.trim().lines() {
        if raw.is_empty() || raw.starts_with("Recommendations:") {
            continue;
        }

        let without_numbering = if raw.contains(". ") {
            raw.split(". ").skip(1).collect::<Vec<_>>().join(" ")
        } else {
            raw.to_string()
        };

        let cleaned = without_numbering.trim_matches(['-', ' ']).trim();
        if cleaned.chars().count() > 10 {
            lines.push(cleaned.to_string());
        }
    }

    lines
}
