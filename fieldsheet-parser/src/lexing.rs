//! Lexing
//!
//! The input grammar is strictly line based: every physical line is classified on its own,
//! without lookahead, into zero or more [`line_classification::LineEvent`]s.

pub mod line_classification;
