//! Flag combinations and integer fallback.
//!
//! Run with: cargo run --example flags

use serde_symbolic::{symbolic_enum, CodecOptions, EnumCodec};
use std::error::Error;

symbolic_enum! {
    pub struct FileAccess(i32): Flags {
        None = 0,
        Read = 1,
        Write = 2,
        ReadWrite = 3,
        Execute = 4,
    }
}

fn main() -> Result<(), Box<dyn Error>> {
    let codec = EnumCodec::<FileAccess>::new(CodecOptions::upper_snake_case())?;

    for value in [
        FileAccess::None,
        FileAccess::Read | FileAccess::Write,
        FileAccess::Read | FileAccess::Execute,
        FileAccess::ReadWrite | FileAccess::Execute,
        FileAccess(8),
        FileAccess(-1),
    ] {
        let encoded = codec.encode(value)?;
        println!("{:>4} -> {}", value.0, encoded);
    }

    let parsed = codec.decode_str("READ, EXECUTE")?;
    assert_eq!(parsed, FileAccess::Read | FileAccess::Execute);
    println!("\n✓ \"READ, EXECUTE\" decodes to {}", parsed.0);

    // Without fallback, values with no name are errors
    let strict = EnumCodec::<FileAccess>::new(CodecOptions::strict())?;
    match strict.encode(FileAccess(8)) {
        Ok(encoded) => println!("unexpected: {}", encoded),
        Err(err) => println!("strict codec: {}", err),
    }

    Ok(())
}
