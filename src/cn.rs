//! Class-name merging.
//!
//! Empty and absent parts are skipped. Tokens are walked from last to first
//! and a token is dropped when a later one already claimed its utility group
//! (`bg-white` then `bg-green-400` keeps only the latter), so an override
//! appended by the host replaces the widget's own class. Variants such as
//! `hover:` and the `!` marker scope a group. Tokens without a known group
//! only lose exact duplicates.

use std::collections::HashSet;

const DISPLAY: &[&str] = &[
    "block",
    "inline-block",
    "inline",
    "flex",
    "inline-flex",
    "grid",
    "inline-grid",
    "table",
    "contents",
    "flow-root",
    "list-item",
    "hidden",
];
const POSITION: &[&str] = &["static", "fixed", "absolute", "relative", "sticky"];
const TEXT_SIZES: &[&str] = &[
    "xs", "sm", "base", "lg", "xl", "2xl", "3xl", "4xl", "5xl", "6xl", "7xl", "8xl", "9xl",
];
const TEXT_ALIGN: &[&str] = &["left", "center", "right", "justify", "start", "end"];
const FONT_WEIGHTS: &[&str] = &[
    "thin",
    "extralight",
    "light",
    "normal",
    "medium",
    "semibold",
    "bold",
    "extrabold",
    "black",
];
const ROUNDED_SIZES: &[&str] = &["none", "sm", "md", "lg", "xl", "2xl", "3xl", "full"];
const BORDER_STYLES: &[&str] = &["solid", "dashed", "dotted", "double", "hidden", "none"];
const BG_NON_COLOR: &[&str] = &[
    "fixed", "local", "scroll", "auto", "cover", "contain", "center", "top", "bottom", "left", "right", "repeat",
    "no-repeat", "none",
];
const SIDES: &[&str] = &["x", "y", "t", "r", "b", "l", "s", "e"];
/// Utilities whose group is their prefix. Longer prefixes come first.
const PREFIX_GROUPS: &[&str] = &[
    "min-w", "max-w", "min-h", "max-h", "size", "w", "h", "gap-x", "gap-y", "gap", "z", "opacity", "cursor",
    "inset-x", "inset-y", "inset", "top", "right", "bottom", "left", "leading", "tracking",
];

/// Merges class-name parts into one space-separated string.
pub fn cn<'a, I, P>(parts: I) -> String
where
    I: IntoIterator<Item = P>,
    P: Into<Option<&'a str>>,
{
    let tokens: Vec<&str> = parts
        .into_iter()
        .filter_map(Into::<Option<&'a str>>::into)
        .flat_map(str::split_whitespace)
        .collect();

    let mut seen = HashSet::new();
    let mut claimed = HashSet::new();
    let mut kept = Vec::with_capacity(tokens.len());

    for token in tokens.iter().rev() {
        if !seen.insert(*token) {
            continue;
        }
        let (scope, utility) = split_scope(token);
        if let Some(group) = group_of(utility) {
            if !claimed.insert(format!("{scope}{group}")) {
                continue;
            }
            for overridden in overrides(&group) {
                claimed.insert(format!("{scope}{overridden}"));
            }
        }
        kept.push(*token);
    }

    kept.reverse();
    kept.join(" ")
}

/// Splits `hover:!bg-red-500` into the scope `hover:!` and the utility
/// `bg-red-500`. Colons inside `[...]` values belong to the utility.
fn split_scope(token: &str) -> (&str, &str) {
    let mut depth = 0usize;
    let mut split = 0;
    for (i, ch) in token.char_indices() {
        match ch {
            '[' => depth += 1,
            ']' => depth = depth.saturating_sub(1),
            ':' if depth == 0 => split = i + 1,
            _ => {},
        }
    }
    let (variants, utility) = token.split_at(split);
    match utility.strip_prefix('!') {
        Some(rest) => (&token[..=split], rest),
        None => (variants, utility),
    }
}

fn group_of(utility: &str) -> Option<String> {
    if DISPLAY.contains(&utility) {
        return Some("display".to_owned());
    }
    if POSITION.contains(&utility) {
        return Some("position".to_owned());
    }
    match utility {
        "border" => return Some("border-w".to_owned()),
        "rounded" => return Some("rounded".to_owned()),
        _ => {},
    }

    // Negative values (`-mt-2`) share the group of the positive utility
    let utility = utility.strip_prefix('-').unwrap_or(utility);
    let (head, value) = utility.split_once('-')?;
    if value.is_empty() {
        return None;
    }

    match head {
        "p" | "m" => Some(head.to_owned()),
        _ if is_spacing_side(head) => Some(head.to_owned()),
        "bg" => (!BG_NON_COLOR.contains(&value)).then(|| "bg-color".to_owned()),
        "text" => Some(
            if TEXT_SIZES.contains(&value) {
                "font-size"
            } else if TEXT_ALIGN.contains(&value) {
                "text-align"
            } else {
                "text-color"
            }
            .to_owned(),
        ),
        "font" => Some(if FONT_WEIGHTS.contains(&value) { "font-weight" } else { "font-family" }.to_owned()),
        "rounded" => ROUNDED_SIZES.contains(&value).then(|| "rounded".to_owned()),
        "border" => Some(border_group(value)),
        _ => PREFIX_GROUPS
            .iter()
            .find(|prefix| {
                utility
                    .strip_prefix(**prefix)
                    .and_then(|rest| rest.strip_prefix('-'))
                    .is_some_and(|rest| !rest.is_empty())
            })
            .map(|prefix| (*prefix).to_owned()),
    }
}

/// `px`, `mt`, ... : padding or margin on one side or axis
fn is_spacing_side(head: &str) -> bool {
    head.len() == 2 && (head.starts_with('p') || head.starts_with('m')) && SIDES.contains(&&head[1..])
}

/// Group of `border-<value>`: width, style or colour, per side when one is named.
fn border_group(value: &str) -> String {
    let (side, rest) = match value.split_once('-') {
        Some((side, rest)) if SIDES.contains(&side) => (Some(side), Some(rest)),
        _ if SIDES.contains(&value) => (Some(value), None),
        _ => (None, Some(value)),
    };
    let suffix = side.map_or_else(String::new, |side| format!("-{side}"));

    match rest {
        None => format!("border-w{suffix}"),
        Some(rest) if is_width(rest) => format!("border-w{suffix}"),
        Some(rest) if side.is_none() && BORDER_STYLES.contains(&rest) => "border-style".to_owned(),
        Some("collapse" | "separate") if side.is_none() => "border-collapse".to_owned(),
        Some(_) => format!("border-color{suffix}"),
    }
}

fn is_width(value: &str) -> bool {
    (!value.is_empty() && value.bytes().all(|b| b.is_ascii_digit()))
        || (value.starts_with('[') && value.ends_with("px]"))
}

/// Groups that a class of `group` also overrides when it comes later,
/// e.g. `p-2` after `px-4` replaces the horizontal padding too.
fn overrides(group: &str) -> Vec<String> {
    match group {
        "p" | "m" => sided(group, SIDES),
        "px" | "mx" => sided(&group[..1], &["r", "l", "s", "e"]),
        "py" | "my" => sided(&group[..1], &["t", "b"]),
        "border-w" | "border-color" => sided(group, &["-x", "-y", "-t", "-r", "-b", "-l", "-s", "-e"]),
        "border-w-x" | "border-color-x" => sided(&group[..group.len() - 1], &["r", "l", "s", "e"]),
        "border-w-y" | "border-color-y" => sided(&group[..group.len() - 1], &["t", "b"]),
        "gap" => sided("gap", &["-x", "-y"]),
        "inset" => ["inset-x", "inset-y", "top", "right", "bottom", "left"].map(str::to_owned).to_vec(),
        "inset-x" => vec!["left".to_owned(), "right".to_owned()],
        "inset-y" => vec!["top".to_owned(), "bottom".to_owned()],
        _ => Vec::new(),
    }
}

fn sided(base: &str, sides: &[&str]) -> Vec<String> {
    sides.iter().map(|side| format!("{base}{side}")).collect()
}

/// [`cn`] over a mix of `&str` and `Option<&str>` arguments.
#[macro_export]
macro_rules! cn {
    () => {
        ::std::string::String::new()
    };
    ($($part:expr),+ $(,)?) => {
        $crate::cn([$(::core::convert::Into::<::core::option::Option<&str>>::into($part)),*])
    };
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_joins_parts() {
        assert_eq!(cn(["border rounded", "p-1"]), "border rounded p-1");
    }

    #[test]
    fn test_skips_absent_and_blank_parts() {
        assert_eq!(cn([Some("border"), None, Some("  "), Some("p-1")]), "border p-1");
        let nothing: [Option<&str>; 2] = [None, None];
        assert_eq!(cn(nothing), "");
    }

    #[test]
    fn test_collapses_whitespace() {
        assert_eq!(cn(["  border\trounded \n", "p-1 "]), "border rounded p-1");
    }

    #[test]
    fn test_later_duplicate_wins_position() {
        assert_eq!(cn(["bg-white border", "p-1 bg-white"]), "border p-1 bg-white");
    }

    #[test]
    fn test_override_replaces_conflicting_classes() {
        assert_eq!(
            cn([
                "border border-gray-300 rounded p-1 cursor-pointer",
                "border border-primary-600 bg-primary-200",
                "bg-green-400",
            ]),
            "rounded p-1 cursor-pointer border border-primary-600 bg-green-400"
        );
    }

    #[test]
    fn test_conflict_groups() {
        struct TestCase {
            parts:       [&'static str; 2],
            expected:    &'static str,
            description: &'static str,
        }

        let cases = [
            TestCase {
                parts:       ["p-2 px-4", "p-1"],
                expected:    "p-1",
                description: "padding overrides earlier axis padding",
            },
            TestCase {
                parts:       ["p-2", "px-4"],
                expected:    "p-2 px-4",
                description: "axis padding refines earlier padding",
            },
            TestCase {
                parts:       ["h-10 w-full", "h-8"],
                expected:    "w-full h-8",
                description: "height",
            },
            TestCase {
                parts:       ["text-sm text-gray-900", "text-lg"],
                expected:    "text-gray-900 text-lg",
                description: "font size and text colour are separate",
            },
            TestCase {
                parts:       ["text-left text-red-500", "text-blue-500"],
                expected:    "text-left text-blue-500",
                description: "text colour",
            },
            TestCase {
                parts:       ["border-2 border-dashed", "border"],
                expected:    "border-dashed border",
                description: "border width and style are separate",
            },
            TestCase {
                parts:       ["border-t-red-500 border-gray-300", "border-blue-500"],
                expected:    "border-blue-500",
                description: "border colour overrides side colours",
            },
            TestCase {
                parts:       ["rounded rounded-t-lg", "rounded-md"],
                expected:    "rounded-t-lg rounded-md",
                description: "corner radius stays on its own",
            },
            TestCase {
                parts:       ["hidden", "flex"],
                expected:    "flex",
                description: "display",
            },
            TestCase {
                parts:       ["font-bold font-mono", "font-light"],
                expected:    "font-mono font-light",
                description: "font weight",
            },
            TestCase {
                parts:       ["-mt-2 mb-1", "mt-4"],
                expected:    "mb-1 mt-4",
                description: "negative margin",
            },
            TestCase {
                parts:       ["cursor-pointer grid-cols-7", "cursor-not-allowed grid-cols-7"],
                expected:    "cursor-not-allowed grid-cols-7",
                description: "cursor, unknown utilities deduplicated",
            },
        ];

        for case in &cases {
            assert_eq!(cn(case.parts), case.expected, "{}", case.description);
        }
    }

    #[test]
    fn test_variants_scope_groups() {
        assert_eq!(
            cn(["bg-white hover:bg-gray-100", "bg-primary-200"]),
            "hover:bg-gray-100 bg-primary-200"
        );
        assert_eq!(cn(["hover:bg-gray-100", "hover:bg-red-100"]), "hover:bg-red-100");
        assert_eq!(cn(["!bg-white", "bg-red-100"]), "!bg-white bg-red-100");
        assert_eq!(cn(["bg-[url(a:b)]", "bg-white"]), "bg-white");
    }

    #[test]
    fn test_macro_mixes_argument_kinds() {
        let extra: Option<&str> = Some("w-full");
        let missing: Option<&str> = None;
        assert_eq!(crate::cn!("p-2 border", extra, missing,), "p-2 border w-full");
        assert_eq!(crate::cn!(), "");
    }
}
