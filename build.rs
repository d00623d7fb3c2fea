use std::env;
use std::fs;
use std::path::Path;

fn main() {
    // Place config.toml next to the compiled binary so the app can find it
    // regardless of the working directory it is launched from.
    let out_dir = env::var("OUT_DIR").unwrap();

    let config_path = Path::new("config.toml");
    let dest_path = Path::new(&out_dir)
        .parent()
        .unwrap()
        .parent()
        .unwrap()
        .parent()
        .unwrap()
        .join("config.toml");

    fs::copy(config_path, dest_path).unwrap();

    println!("cargo:rerun-if-changed=config.toml");
}
