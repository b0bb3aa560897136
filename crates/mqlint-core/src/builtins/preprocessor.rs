//! Preprocessor directive and `#property` tables.

use std::collections::HashSet;
use std::sync::LazyLock;

use regex::Regex;

/// Directive names accepted after `#`.
pub static VALID_DIRECTIVES: LazyLock<HashSet<&'static str>> = LazyLock::new(|| {
    let mut set = HashSet::new();

    // Source inclusion and macros
    set.extend([
        "include", "property", "define", "undef", "ifdef", "ifndef", "else", "endif", "import",
        "resource",
    ]);

    // Editor folding and class markers
    set.extend(["class", "region", "endregion"]);

    // Strategy tester
    set.extend([
        "tester_indicator", "tester_file", "tester_library", "tester_set", "tester_init",
        "tester_load", "tester_unload", "tester_deinit",
    ]);

    set
});

/// Property keys accepted after `#property`.
pub static VALID_PROPERTIES: LazyLock<HashSet<&'static str>> = LazyLock::new(|| {
    let mut set = HashSet::new();

    // Program metadata
    set.extend([
        "copyright", "link", "version", "description", "strict", "icon", "stacksize", "library",
        "script_show_confirm", "script_show_inputs",
    ]);

    // Indicator windows and buffers
    set.extend([
        "indicator_chart_window", "indicator_separate_window", "indicator_buffers",
        "indicator_plots", "indicator_minimum", "indicator_maximum", "indicator_height",
        "indicator_digits", "indicator_applied_price",
    ]);

    // Plot styling
    set.extend([
        "indicator_label", "indicator_color", "indicator_style", "indicator_width",
        "indicator_type", "indicator_plot1_arrow", "indicator_plot1_arrow_shift",
        "indicator_plot1_color", "indicator_plot1_drawbegin", "indicator_plot1_label",
        "indicator_plot1_shift", "indicator_plot1_style", "indicator_plot1_type",
        "indicator_plot1_width",
    ]);

    // Levels
    set.extend([
        "indicator_level", "indicator_levelcolor", "indicator_levelstyle",
        "indicator_levelwidth", "indicator_leveltext", "indicator_levelvalue",
    ]);

    // Strategy tester
    set.extend(["tester_file", "tester_indicator", "tester_library", "tester_set"]);

    set
});

/// Per-buffer properties such as `indicator_label3` or `indicator_level2`.
static NUMBERED_PROPERTY: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(?:indicator_(?:label|color|style|width|type)|indicator_level)\d+$")
        .expect("valid regex")
});

/// Returns `true` if `key` is a known or numbered `#property` key.
pub fn is_valid_property(key: &str) -> bool {
    VALID_PROPERTIES.contains(key) || NUMBERED_PROPERTY.is_match(key)
}
