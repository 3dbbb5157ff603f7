//! Output file naming.

use std::collections::HashSet;

/// Extension of the source format, matched case-insensitively.
pub const SOURCE_EXTENSION: &str = ".png";
/// Extension given to converted files.
pub const TARGET_EXTENSION: &str = ".jpg";
/// Name of the bundled download.
pub const ARCHIVE_FILE_NAME: &str = "converted_images.zip";

/// Replace a trailing `.png` with `.jpg`, or append `.jpg` if there is none.
pub fn target_file_name(name: &str) -> String {
    let split = name.len().saturating_sub(SOURCE_EXTENSION.len());
    match (name.get(..split), name.get(split..)) {
        (Some(stem), Some(ext)) if ext.eq_ignore_ascii_case(SOURCE_EXTENSION) => {
            format!("{stem}{TARGET_EXTENSION}")
        }
        _ => format!("{name}{TARGET_EXTENSION}"),
    }
}

/// Make every name unique by inserting ` (n)` before the extension of
/// repeats. Order and count are preserved.
pub fn unique_names<'a, I>(names: I) -> Vec<String>
where
    I: IntoIterator<Item = &'a str>,
{
    let mut used = HashSet::new();
    let mut out = Vec::new();

    for name in names {
        let mut candidate = name.to_string();
        let mut n = 1;
        while used.contains(&candidate) {
            candidate = numbered(name, n);
            n += 1;
        }
        used.insert(candidate.clone());
        out.push(candidate);
    }
    out
}

fn numbered(name: &str, n: usize) -> String {
    match name.rfind('.') {
        Some(dot) if dot > 0 => format!("{} ({}){}", &name[..dot], n, &name[dot..]),
        _ => format!("{name} ({n})"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_png_suffix_replaced() {
        assert_eq!(target_file_name("photo.png"), "photo.jpg");
        assert_eq!(target_file_name("SHOUT.PNG"), "SHOUT.jpg");
        assert_eq!(target_file_name("a.b.Png"), "a.b.jpg");
    }

    #[test]
    fn test_other_names_get_suffix() {
        assert_eq!(target_file_name("photo"), "photo.jpg");
        assert_eq!(target_file_name("photo.png.bak"), "photo.png.bak.jpg");
        assert_eq!(target_file_name(""), ".jpg");
    }

    #[test]
    fn test_multibyte_names() {
        assert_eq!(target_file_name("фото.png"), "фото.jpg");
        assert_eq!(target_file_name("日本"), "日本.jpg");
    }

    #[test]
    fn test_unique_names() {
        let names = unique_names(["a.jpg", "b.jpg", "a.jpg", "a.jpg"]);
        assert_eq!(names, vec!["a.jpg", "b.jpg", "a (1).jpg", "a (2).jpg"]);
    }

    #[test]
    fn test_unique_names_avoid_existing_numbered() {
        let names = unique_names(["a.jpg", "a (1).jpg", "a.jpg"]);
        assert_eq!(names, vec!["a.jpg", "a (1).jpg", "a (2).jpg"]);
    }

    #[test]
    fn test_unique_names_without_extension() {
        let names = unique_names(["README", "README", ".jpg", ".jpg"]);
        assert_eq!(names, vec!["README", "README (1)", ".jpg", ".jpg (1)"]);
    }
}

#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        /// Property: converted names always carry the target extension.
        #[test]
        fn prop_target_extension(name in "\\PC{0,20}") {
            prop_assert!(target_file_name(&name).ends_with(TARGET_EXTENSION));
        }

        /// Property: stems survive the extension swap.
        #[test]
        fn prop_stem_preserved(stem in "[a-zA-Z0-9_ -]{0,16}") {
            prop_assert_eq!(target_file_name(&format!("{stem}.png")), format!("{stem}.jpg"));
        }

        /// Property: unique_names keeps count and yields no duplicates.
        #[test]
        fn prop_unique(names in prop::collection::vec("[ab]{1,2}(\\.jpg)?", 0..12)) {
            let out = unique_names(names.iter().map(String::as_str));
            prop_assert_eq!(out.len(), names.len());
            let set: HashSet<_> = out.iter().collect();
            prop_assert_eq!(set.len(), out.len());
        }
    }
}
