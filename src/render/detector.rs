//! Spaghetti detector command injection.

use crate::parser::markers;

/// Injects M981 spaghetti detector commands into the executable section.
///
/// For each line whose trimmed, lower-cased form contains
/// `; filament start gcode`, the enable command is emitted immediately
/// before the original line; `; filament end gcode` gets the disable
/// command. Triggers are matched independently across the file; there is no
/// pairing or balance check between starts and ends. When a line somehow
/// contains both triggers, the start trigger wins and only the enable
/// command is inserted.
pub struct SpaghettiDetector {
    enabled: bool,
    injected: u32,
}

impl SpaghettiDetector {
    /// Create a new detector pipeline. Disabled means identity transform.
    pub fn new(enabled: bool) -> Self {
        Self {
            enabled,
            injected: 0,
        }
    }

    /// Process the executable lines, inserting detector commands before
    /// each trigger line. Trigger lines themselves are kept.
    pub fn process(&mut self, lines: &[String]) -> Vec<String> {
        if !self.enabled {
            return lines.to_vec();
        }

        let mut output = Vec::with_capacity(lines.len());
        for line in lines {
            let lowered = line.trim().to_lowercase();

            if lowered.contains(markers::FILAMENT_START_TRIGGER) {
                output.push(markers::DETECTOR_ENABLE.to_string());
                self.injected += 1;
            } else if lowered.contains(markers::FILAMENT_END_TRIGGER) {
                output.push(markers::DETECTOR_DISABLE.to_string());
                self.injected += 1;
            }

            output.push(line.clone());
        }
        output
    }

    /// Number of commands injected so far.
    pub fn injected(&self) -> u32 {
        self.injected
    }
}
