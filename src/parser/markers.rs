//! Marker literals recognized in OrcaSlicer G-code.
//!
//! Block markers are matched by exact equality against the trimmed line;
//! metadata fields and injector triggers are matched by substring.

/// Start of the header block.
pub const HEADER_BLOCK_START: &str = "; HEADER_BLOCK_START";
/// End of the header block.
pub const HEADER_BLOCK_END: &str = "; HEADER_BLOCK_END";
/// Start of the config block.
pub const CONFIG_BLOCK_START: &str = "; CONFIG_BLOCK_START";
/// End of the config block.
pub const CONFIG_BLOCK_END: &str = "; CONFIG_BLOCK_END";
/// Start of the thumbnail block.
pub const THUMBNAIL_BLOCK_START: &str = "; THUMBNAIL_BLOCK_START";
/// End of the thumbnail block.
pub const THUMBNAIL_BLOCK_END: &str = "; THUMBNAIL_BLOCK_END";

/// Metadata fields collected before the first config block.
/// Matched case-sensitively as substrings of the trimmed line.
pub const METADATA_FIELDS: [&str; 8] = [
    "; filament used [mm]",
    "; filament used [cm3]",
    "; filament used [g]",
    "; filament cost",
    "; total filament used [g]",
    "; total filament cost",
    "; total layers count",
    "; estimated printing time (normal mode)",
];

/// Trigger comment preceding filament start gcode, matched against the
/// trimmed lower-cased line.
pub const FILAMENT_START_TRIGGER: &str = "; filament start gcode";
/// Trigger comment preceding filament end gcode.
pub const FILAMENT_END_TRIGGER: &str = "; filament end gcode";

/// Command injected before a filament start trigger.
pub const DETECTOR_ENABLE: &str = "M981 S1 P20000 ; Enable spaghetti detector";
/// Command injected before a filament end trigger.
pub const DETECTOR_DISABLE: &str = "M981 S0 P20000 ; Disable spaghetti detector";

/// Prefix of the slicer identification line in the header.
pub const GENERATED_BY_PREFIX: &str = "; generated by";
