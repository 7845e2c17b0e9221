use std::io::{self, Write};

use crate::patch::Replacement;

pub const SUCCESS_HEADLINE: &str = "✅ Arquivo atualizado com sucesso!";
pub const CHANGES_HEADER: &str = "Mudanças aplicadas:";

/// Write the confirmation listing every rule, whether or not it matched
pub fn write_confirmation<W: Write>(out: &mut W, rules: &[Replacement]) -> io::Result<()> {
    writeln!(out, "{}", SUCCESS_HEADLINE)?;
    writeln!(out, "{}", CHANGES_HEADER)?;
    for (i, rule) in rules.iter().enumerate() {
        writeln!(out, "  {}. {}", i + 1, rule)?;
    }
    Ok(())
}
