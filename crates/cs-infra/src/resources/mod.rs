//! Foreign-package string resources backed by a TOML table.
//! 基于 TOML 的外部包字符串资源

mod toml_labels;

pub use toml_labels::TomlResourceLabels;
