//! The `lexemes` command: print the operator table in matching order.

use psi_ir::LEXEMES;

/// One `priority  lexeme  KIND` row per table entry.
pub fn lexeme_table() -> String {
    LEXEMES
        .iter()
        .enumerate()
        .map(|(index, (kind, lexeme))| format!("{:>2}  {lexeme:<2}  {kind}\n", index + 1))
        .collect()
}

pub fn print_lexemes() {
    print!("{}", lexeme_table());
}
