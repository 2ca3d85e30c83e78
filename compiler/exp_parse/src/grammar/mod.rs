//! Grammar productions.
//!
//! ```text
//! program    := stmt*
//! block      := "{" stmt* "}"
//! stmt       := (function | variable | while | if | assign | return | expr) ";"?
//! function   := "fun" IDENT "(" (IDENT ("," IDENT)*)? ")" block
//! variable   := "var" IDENT "=" expr
//! while      := "while" "(" expr ")" block
//! if         := "if" "(" expr ")" block ("else" block)?
//! assign     := IDENT "=" expr
//! return     := "return" expr
//! expr       := or
//! or         := and ("||" and)*
//! and        := equality ("&&" equality)*
//! equality   := comparison (("==" | "!=") comparison)*
//! comparison := additive (("<" | ">" | "<=" | ">=") additive)*
//! additive   := term (("+" | "-") term)*
//! term       := primary (("*" | "/" | "%") primary)*
//! primary    := INT | IDENT "(" (expr ("," expr)*)? ")" | IDENT | "(" expr ")"
//! ```

mod expr;
mod stmt;
