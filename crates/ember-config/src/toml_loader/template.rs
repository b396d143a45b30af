//! Default TOML config template with inline documentation comments.

/// Generate the default TOML config content with comments.
pub(crate) fn default_config_toml() -> String {
    r##"# ember configuration
# Schema version 1
# Only override what you want to change -- missing fields use defaults.

[mesh]
# subdivisions = 5       # 0-8
# seed = 1234            # omit for a fresh seed on every run

# The sphere list replaces the default fire orb when present.
# [[spheres]]
# name = "shell"
# radius = 1.0
# center = [0.0, 0.0, 0.0]
#
# [[spheres]]
# name = "core_outer"
# radius = 0.7
#
# [[spheres]]
# name = "core_middle"
# radius = 0.5
#
# [[spheres]]
# name = "core_inner"
# radius = 0.3

[cube]
# enabled = true
# half_extent = 40.0

[backdrop]
# enabled = true

[logging]
# level = "info"         # trace, debug, info, warn, error
"##
    .to_string()
}
