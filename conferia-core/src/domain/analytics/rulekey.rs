// conferia-core/src/domain/analytics/rulekey.rs

/// Separator between segments of a rule-application description.
const SEGMENT_SEPARATOR: &str = " - ";

/// Derives the grouping key from a free-text rule-application description:
/// the first two " - "-delimited segments rejoined, with the variant's
/// literal prefix (e.g. "Regra: ") stripped when configured.
///
/// Texts with a single segment pass through unchanged.
pub fn derive(rule_text: &str, strip_prefix: Option<&str>) -> String {
    let mut segments = rule_text.splitn(3, SEGMENT_SEPARATOR);
    let key = match (segments.next(), segments.next()) {
        (Some(first), Some(second)) => format!("{first}{SEGMENT_SEPARATOR}{second}"),
        (Some(first), None) => first.to_string(),
        _ => String::new(),
    };
    match strip_prefix {
        Some(prefix) => key.strip_prefix(prefix).unwrap_or(&key).to_string(),
        None => key,
    }
}
