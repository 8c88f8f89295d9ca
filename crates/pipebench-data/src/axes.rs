//! Fixed axes of the result grid.

use std::fmt;

/// Pipe counts measured by the benchmark harness, in column order.
pub const DEFAULT_PIPES: [u32; 18] = [
    1, 2, 3, 4, 5, 6, 7, 8, 9, 10, 20, 40, 60, 80, 100, 120, 140, 160,
];

/// Problem-size category along the other result axis.
///
/// Row order of the result matrix follows the declaration order here.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MacroSize {
    Small,
    Middle,
    Large,
    ExtLarge,
}

impl MacroSize {
    /// All categories in row order.
    pub const ALL: [MacroSize; 4] = [
        MacroSize::Small,
        MacroSize::Middle,
        MacroSize::Large,
        MacroSize::ExtLarge,
    ];

    /// Axis label as it appears in tables and chart ticks.
    pub fn label(self) -> &'static str {
        match self {
            MacroSize::Small => "SMALL",
            MacroSize::Middle => "MIDDLE",
            MacroSize::Large => "LARGE",
            MacroSize::ExtLarge => "EXTLARGE",
        }
    }

    /// Key carrying this category's timings in the variables file.
    pub fn result_key(self) -> &'static str {
        match self {
            MacroSize::Small => "results_SMALL",
            MacroSize::Middle => "results_MIDDLE",
            MacroSize::Large => "results_LARGE",
            MacroSize::ExtLarge => "results_EXTLARGE",
        }
    }
}

impl fmt::Display for MacroSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
