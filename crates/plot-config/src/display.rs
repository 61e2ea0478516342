//! Display helpers shared by the legend and the settings tree.

use plot_core::parse_float_prefix;

use crate::i18n::{SERIES_KEY, Translate};
use crate::schema::{BasePlotPath, PlotPath};

/// Anything carrying a path expression string.
pub trait PathValue {
    fn path_value(&self) -> &str;
}

impl PathValue for PlotPath {
    fn path_value(&self) -> &str {
        &self.value
    }
}

impl PathValue for BasePlotPath {
    fn path_value(&self) -> &str {
        &self.value
    }
}

impl PathValue for str {
    fn path_value(&self) -> &str {
        self
    }
}

/// True when the path's value starts with a numeric literal, i.e. it is drawn as
/// a constant reference line instead of being evaluated against messages.
///
/// Only the leading literal matters: `"3abc"` is a reference line at 3.
pub fn is_reference_line_plot_path_type<P: PathValue + ?Sized>(path: &P) -> bool {
    parse_float_prefix(path.path_value()).is_some_and(|v| !v.is_nan())
}

/// Treat an empty string the same as an absent value.
///
/// Only string-like values are accepted; every optional field it normalizes is text.
pub fn presence<T: AsRef<str>>(value: Option<T>) -> Option<T> {
    value.filter(|v| !v.as_ref().is_empty())
}

/// Name shown for the series at `index` (zero-based) in the panel's path list.
///
/// Precedence: non-empty label, then non-empty value, then the localized
/// "series" word followed by the one-based position.
pub fn plot_path_display_name<T: Translate + ?Sized>(
    path: &PlotPath,
    index: usize,
    t: &T,
) -> String {
    presence(path.label.as_deref())
        .or_else(|| presence(Some(path.value.as_str())))
        .map(str::to_string)
        .unwrap_or_else(|| format!("{} {}", t.translate(SERIES_KEY), index + 1))
}


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    fn catalog(key: &str) -> String {
        if key == SERIES_KEY {
            "Series".to_string()
        } else {
            key.to_string()
        }
    }

    proptest! {
        #[test]
        fn non_empty_label_always_wins(label in ".{1,16}", value in ".{0,16}", index in 0usize..1000) {
            let mut path = PlotPath::new(value);
            path.label = Some(label.clone());
            prop_assert_eq!(plot_path_display_name(&path, index, &catalog), label);
        }

        #[test]
        fn fallback_uses_one_based_index(index in 0usize..100_000) {
            let path = PlotPath::new("");
            prop_assert_eq!(
                plot_path_display_name(&path, index, &catalog),
                format!("Series {}", index + 1)
            );
        }

        #[test]
        fn number_with_suffix_is_reference_line(v in -1.0e9_f64..1.0e9_f64, suffix in "[a-z/._]{0,10}") {
            let path = PlotPath::new(format!("{v}{suffix}"));
            prop_assert!(is_reference_line_plot_path_type(&path));
        }

        #[test]
        fn topic_paths_are_not_reference_lines(topic in "/[a-z_]{1,12}(\\.[a-z_]{1,8}){0,3}") {
            let path = PlotPath::new(topic);
            prop_assert!(!is_reference_line_plot_path_type(&path));
        }
    }
}
