use std::fmt;
use std::path::{Path, PathBuf};

/// The extensions requested with `-ext`, each with its leading `.`.
///
/// Segments are kept verbatim, so an empty segment (`".txt,"`) matches
/// files that have no extension. Duplicates collapse into the first one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExtensionSet {
    exts: Vec<String>,
}

impl ExtensionSet {
    pub fn parse(raw: &str) -> Self {
        let mut exts: Vec<String> = Vec::new();
        for ext in raw.split(',') {
            if !exts.iter().any(|e| e == ext) {
                exts.push(ext.to_string());
            }
        }
        ExtensionSet { exts }
    }

    pub fn matches(&self, path: &Path) -> bool {
        let ext = extension_of(path);
        self.exts.iter().any(|e| *e == ext)
    }

    pub fn len(&self) -> usize {
        self.exts.len()
    }
}

// Renders like `[.txt .log]`.
impl fmt::Display for ExtensionSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}]", self.exts.join(" "))
    }
}

/// Suffix of the final path segment starting at its last `.`, or `""`.
pub fn extension_of(path: &Path) -> String {
    let Some(name) = path.file_name() else {
        return String::new();
    };
    let name = name.to_string_lossy();
    match name.rfind('.') {
        Some(idx) => name[idx..].to_string(),
        None => String::new(),
    }
}

/// Keeps the files whose extension is in `exts`, in their original order.
pub fn filter_by_extension(exts: &ExtensionSet, files: Vec<PathBuf>) -> Vec<PathBuf> {
    files.into_iter().filter(|f| exts.matches(f)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn paths(items: &[&str]) -> Vec<PathBuf> {
        items.iter().map(PathBuf::from).collect()
    }

    #[test]
    fn extension_is_taken_from_the_last_segment() {
        assert_eq!(extension_of(Path::new("a.txt")), ".txt");
        assert_eq!(extension_of(Path::new("dir/archive.tar.gz")), ".gz");
        assert_eq!(extension_of(Path::new("conf.d/README")), "");
        assert_eq!(extension_of(Path::new("home/.bashrc")), ".bashrc");
        assert_eq!(extension_of(Path::new("trailing.")), ".");
        assert_eq!(extension_of(Path::new("")), "");
    }

    #[test]
    fn parse_splits_on_commas_and_dedupes() {
        let set = ExtensionSet::parse(".txt,.log,.txt");
        assert_eq!(set.len(), 2);
        assert_eq!(set.to_string(), "[.txt .log]");
    }

    #[test]
    fn empty_segment_matches_files_without_extension() {
        let set = ExtensionSet::parse(".txt,");
        assert!(set.matches(Path::new("Makefile")));
        assert!(set.matches(Path::new("notes.txt")));
        assert!(!set.matches(Path::new("main.rs")));
    }

    #[test]
    fn matching_is_exact_and_case_sensitive() {
        let set = ExtensionSet::parse(".txt");
        assert!(!set.matches(Path::new("a.TXT")));
        assert!(!set.matches(Path::new("a.txt.bak")));
        assert!(!set.matches(Path::new("txt")));
    }

    #[test]
    fn keeps_matching_files_in_order() {
        let files = paths(&["a.txt", "b.log", "sub/c.txt", "d.rs", "e.log"]);
        let set = ExtensionSet::parse(".log,.txt");
        assert_eq!(
            filter_by_extension(&set, files),
            paths(&["a.txt", "b.log", "sub/c.txt", "e.log"])
        );
    }

    #[test]
    fn repeated_extensions_never_duplicate_output() {
        let files = paths(&["a.txt", "b.txt"]);
        let set = ExtensionSet::parse(".txt,.txt,.txt");
        assert_eq!(filter_by_extension(&set, files), paths(&["a.txt", "b.txt"]));
    }

    #[test]
    fn filtering_twice_changes_nothing() {
        let files = paths(&["a.txt", "b.log", "c", "d.md", "e.txt"]);
        let set = ExtensionSet::parse(".txt,.md");
        let once = filter_by_extension(&set, files);
        let twice = filter_by_extension(&set, once.clone());
        assert_eq!(once, twice);
    }

    #[test]
    fn output_is_a_subset_that_matches() {
        let files = paths(&["x.c", "y.h", "z.o", "w.c"]);
        let set = ExtensionSet::parse(".c,.h");
        let kept = filter_by_extension(&set, files.clone());
        assert!(kept.iter().all(|f| files.contains(f) && set.matches(f)));
        assert_eq!(kept.len(), 3);
    }

    #[test]
    fn empty_input_gives_empty_output() {
        let set = ExtensionSet::parse(".txt");
        assert!(filter_by_extension(&set, Vec::new()).is_empty());
    }

    mod properties {
        use super::*;
        use proptest::prelude::*;

        fn segment() -> impl Strategy<Value = String> {
            prop_oneof![
                Just("a".to_string()),
                Just("b.txt".to_string()),
                Just("c.log".to_string()),
                Just(".rc".to_string()),
                Just("d.tar.gz".to_string()),
                Just("e.".to_string()),
                Just("notes.TXT".to_string()),
            ]
        }

        fn file_path() -> impl Strategy<Value = PathBuf> {
            proptest::collection::vec(segment(), 1..4)
                .prop_map(|segments| segments.iter().collect::<PathBuf>())
        }

        fn ext_list() -> impl Strategy<Value = String> {
            let ext = prop_oneof![
                Just(""),
                Just(".txt"),
                Just(".log"),
                Just(".gz"),
                Just(".rc"),
                Just("."),
                Just(".TXT"),
            ];
            proptest::collection::vec(ext, 1..5).prop_map(|exts| exts.join(","))
        }

        proptest! {
            #[test]
            fn kept_files_are_an_ordered_matching_subset(
                files in proptest::collection::vec(file_path(), 0..20),
                raw in ext_list(),
            ) {
                let set = ExtensionSet::parse(&raw);
                let kept = filter_by_extension(&set, files.clone());

                let expected: Vec<PathBuf> =
                    files.iter().filter(|f| set.matches(f)).cloned().collect();
                prop_assert_eq!(&kept, &expected);
                prop_assert!(kept.iter().all(|f| raw.split(',').any(|e| e == extension_of(f))));
            }

            #[test]
            fn filtering_is_idempotent(
                files in proptest::collection::vec(file_path(), 0..20),
                raw in ext_list(),
            ) {
                let set = ExtensionSet::parse(&raw);
                let once = filter_by_extension(&set, files);
                let twice = filter_by_extension(&set, once.clone());
                prop_assert_eq!(once, twice);
            }

            #[test]
            fn duplicated_extensions_change_nothing(
                files in proptest::collection::vec(file_path(), 0..20),
                raw in ext_list(),
            ) {
                let set = ExtensionSet::parse(&raw);
                let doubled = ExtensionSet::parse(&format!("{raw},{raw}"));
                prop_assert_eq!(
                    filter_by_extension(&set, files.clone()),
                    filter_by_extension(&doubled, files)
                );
            }
        }
    }
}
