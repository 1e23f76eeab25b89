//
//  app-directory
//  output/json.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! # JSON Output Formatting
//!
//! | Function | Description | Use Case |
//! |----------|-------------|----------|
//! | [`write_json`] | Pretty-printed JSON | Human-readable output |
//! | [`write_json_to`] | Pretty-printed JSON to any writer | Tests, files |

use serde::Serialize;
use std::io::Write;

pub fn write_json<T: Serialize>(value: &T) -> anyhow::Result<()> {
    let json = serde_json::to_string_pretty(value)?;
    println!("{}", json);
    Ok(())
}

pub fn write_json_to<W: Write, T: Serialize>(writer: &mut W, value: &T) -> anyhow::Result<()> {
    serde_json::to_writer_pretty(&mut *writer, value)?;
    writeln!(writer)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_write_json_to_ends_with_newline() {
        let mut buf = Vec::new();
        write_json_to(&mut buf, &json!({"status": "ok"})).unwrap();
        let out = String::from_utf8(buf).unwrap();
        assert_eq!(out, "{\n  \"status\": \"ok\"\n}\n");
    }
}
