// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

pub mod app;
pub mod config;
pub mod corpus;
pub mod text_domain;
pub mod word_counter;

pub use app::{count_words, Report};
pub use config::{Cli, Command, Config};
pub use text_domain::TextDomain;
pub use word_counter::{count_markers, count_word, LoveHateCounter, TextBlock, WordCounts};
