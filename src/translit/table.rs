/// Default kana → romaji table, validated at compile time by `build.rs`.
pub const DEFAULT_TOML: &str = include_str!("default_table.toml");

/// Returns the embedded default table TOML content.
pub fn default_toml() -> &'static str {
    DEFAULT_TOML
}
