use anyhow::Context;
use specta::Language;
use specta_typescript::{BigIntExportBehavior, Typescript};

fn main() -> anyhow::Result<()> {
    let out_path = std::env::args_os()
        .nth(1)
        .map(std::path::PathBuf::from)
        .unwrap_or_else(|| {
            std::path::PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("bindings/dailygram.ts")
        });

    std::fs::create_dir_all(out_path.parent().context("bindings path has no parent dir")?)
        .context("create bindings directory")?;

    let bindings = Typescript::default()
        .bigint(BigIntExportBehavior::Number)
        .header("// eslint-disable\n")
        .export(dailygram_app_lib::presentation::ipc::types())
        .context("export TypeScript bindings")?;

    std::fs::write(&out_path, bindings).context("write TypeScript bindings")?;

    println!("Generated {}", out_path.display());
    Ok(())
}
