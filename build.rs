/// TOML files compiled into the crate with `include_str!`.
const EMBEDDED: &[(&str, &str)] = &[
    (
        "src/default_settings.toml",
        include_str!("src/default_settings.toml"),
    ),
    (
        "src/translit/default_table.toml",
        include_str!("src/translit/default_table.toml"),
    ),
];

fn main() {
    for (path, content) in EMBEDDED {
        println!("cargo:rerun-if-changed={path}");
        if let Err(e) = content.parse::<toml::Table>() {
            panic!("{path} is not valid TOML: {e}");
        }
    }
}
