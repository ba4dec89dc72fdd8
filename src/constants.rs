//! Common constants used throughout the Boiling application.

/// Location of the user configuration file, relative to the home directory.
pub const CONFIG_RELATIVE_PATH: &str = ".config/boiling/boiling.conf";

/// Name of the license file written into a new project, and of the default
/// template looked up next to the configuration file.
pub const LICENSE_FILE: &str = "LICENSE";

/// Keys accepted in any configuration section.
pub const KNOWN_KEYS: [&str; 8] =
    ["name", "license", "gitrepo", "readme", "build", "src", "bin", "version"];

/// Maximum length of a section name.
pub const MAX_SECTION_NAME_LEN: usize = 64;

/// Maximum length of a key name.
pub const MAX_KEY_NAME_LEN: usize = 256;

/// Maximum length of a value, measured before trailing spaces are trimmed.
pub const MAX_VALUE_LEN: usize = 256;

/// Maximum number of entries a single section store accepts.
pub const MAX_STORE_ENTRIES: usize = 256;

/// C language standards accepted for the `version` key.
pub const C_STANDARDS: [&str; 5] = ["c89", "c99", "c11", "c17", "c23"];

/// C++ language standards accepted for the `version` key.
pub const CPP_STANDARDS: [&str; 6] =
    ["c++03", "c++11", "c++14", "c++17", "c++20", "c++23"];
