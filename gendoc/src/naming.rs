//! Package display names.

use crate::model::PackageName;

/// Suffix shared by most utility package directories.
const PACKAGE_SUFFIX: &str = "util";

/// Display-name overrides, keyed by the suffix-stripped name.
const NAME_MAP: &[(&str, &str)] = &[
    ("arr", "array/Slice"),
    ("str", "string"),
    ("sys", "system"),
    ("math", "math/Number"),
    ("fs", "fileSystem"),
    ("fmt", "formatting"),
    ("test", "testing"),
    ("dump", "dump"),
    ("structs", "struct"),
    ("json", "JSON"),
    ("cli", "CLI"),
    ("env", "ENV"),
    ("std", "standard"),
];

impl PackageName {
    /// Derive the display name from a package directory name.
    ///
    /// "arrutil" → "array/Slice", "strutil" → "string", "errorx" → "errorx"
    pub fn from_dir(raw: &str) -> Self {
        let stripped = raw
            .strip_suffix(PACKAGE_SUFFIX)
            .filter(|s| !s.is_empty())
            .unwrap_or(raw);

        let display = NAME_MAP
            .iter()
            .find(|(short, _)| *short == stripped)
            .map(|(_, title)| *title)
            .unwrap_or(stripped);

        PackageName {
            raw: raw.to_string(),
            display: display.to_string(),
        }
    }

    /// Heading text: display name with its first character upper-cased.
    pub fn title(&self) -> String {
        upper_first(&self.display)
    }
}

fn upper_first(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
