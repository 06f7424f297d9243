//! Casing enum names with naming policies.
//!
//! Run with: cargo run --example naming_policies

use serde_symbolic::naming::{self, CamelCase, SeparatorCase};
use serde_symbolic::{symbolic_enum, CodecOptions, EnumCodec};
use std::error::Error;

symbolic_enum! {
    pub struct Protocol(u16) {
        HTTPServer = 1,
        WebSocket = 2,
        SHA256Digest = 3,
    }
}

fn show(label: &str, options: CodecOptions) -> Result<(), Box<dyn Error>> {
    let codec = EnumCodec::<Protocol>::new(options)?;
    let names: Vec<_> = codec.display_names().map(|(_, name)| name).collect();
    println!("{:<18} {:?}", label, names);
    Ok(())
}

fn main() -> Result<(), Box<dyn Error>> {
    println!("Word segmentation:");
    for input in ["PascalCase", "XMLReader", "word  word", "Version2Beta"] {
        println!("  {:<14} -> {}", input, naming::convert(input, true, '_'));
    }
    println!();

    show("identifiers", CodecOptions::default())?;
    show("snake_case", CodecOptions::snake_case())?;
    show("UPPER_SNAKE_CASE", CodecOptions::upper_snake_case())?;
    show("kebab-case", CodecOptions::kebab_case())?;
    show("camelCase", CodecOptions::new().with_naming_policy(CamelCase))?;
    show(
        "dotted",
        CodecOptions::new().with_naming_policy(SeparatorCase::new(true, '.')),
    )?;
    show(
        "closure",
        CodecOptions::new().with_naming_policy(|name: &str| format!("proto:{}", name)),
    )?;

    // Policy names and identifiers both decode
    let codec = EnumCodec::<Protocol>::new(CodecOptions::kebab_case())?;
    assert_eq!(codec.decode_str("http-server")?, Protocol::HTTPServer);
    assert_eq!(codec.decode_str("HTTPServer")?, Protocol::HTTPServer);
    println!("\n✓ Policy names and identifiers decode to the same value");

    Ok(())
}
