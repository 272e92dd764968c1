use anyhow::Result;
use crux_core::typegen::TypeGen;
use gate_ui_core::{
    events::{DeviceEvent, FormEvent, GateEvent, UiEvent},
    types::{FormMethod, RelayState},
    App, PageOperation, PageOutput, SocketOperation, SocketOutput,
};
use std::path::PathBuf;

fn main() -> Result<()> {
    println!("cargo:rerun-if-changed=../app");

    let mut gen = TypeGen::new();

    gen.register_app::<App>()?;

    // Explicitly register domain event enums to ensure all variants are traced
    gen.register_type::<FormEvent>()?;
    gen.register_type::<DeviceEvent>()?;
    gen.register_type::<GateEvent>()?;
    gen.register_type::<UiEvent>()?;

    // Shell-facing operations and enums
    gen.register_type::<PageOperation>()?;
    gen.register_type::<PageOutput>()?;
    gen.register_type::<SocketOperation>()?;
    gen.register_type::<SocketOutput>()?;
    gen.register_type::<FormMethod>()?;
    gen.register_type::<RelayState>()?;

    let output_root = PathBuf::from("./generated");

    gen.typescript("shared_types", output_root.join("typescript"))?;

    Ok(())
}
