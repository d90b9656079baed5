//! Provides input decoding for the coordinate and dictionary file formats.
//!
//! Both formats are line-oriented with fixed-column fields. The record
//! parser classifies and decodes single lines without shared state; the
//! reader drives hierarchy construction over a whole input and keeps
//! explicit bond records aside for the resolution stage.

pub mod pdb;
pub mod records;
