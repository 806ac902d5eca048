use std::fs;

fn main() {
    let path = "src/default_config.toml";
    println!("cargo:rerun-if-changed={path}");

    let content = fs::read_to_string(path).expect("bundled notes styling config is missing");

    // Config::compiled_default relies on this file parsing
    if let Err(e) = content.parse::<toml::Table>() {
        panic!("bundled notes styling config is not valid TOML: {e}");
    }
}
