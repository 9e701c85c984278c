pub mod assembler;
pub mod catalog;
pub mod composer;
pub mod customizer;
pub mod matcher;
pub mod naming;
pub mod registry;
