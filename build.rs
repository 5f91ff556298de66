use std::env;
use std::fs;
use std::path::Path;

use rustc_version::version_meta;

fn main() {
    let rustc_version = version_meta().unwrap().short_version_string;
    let out_dir = env::var("OUT_DIR").unwrap();
    let dest_path = Path::new(&out_dir).join("rustc_version.rs");
    fs::write(
        &dest_path,
        format!(r#"pub static RUSTC_VERSION: &str = "{rustc_version}";"#,),
    )
    .unwrap();
    // Also exported as an env var, so that it can be used in `concat!()` for the CLI's version.
    println!("cargo::rustc-env=INVENTORY_RUSTC_VERSION={rustc_version}");
    println!("cargo::rerun-if-changed=build.rs");
}
