//! Markdown rendering of generation results.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::core::generator::{GeneratedWord, GenerationResult};

/// Display toggles for a rendered result.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RenderOptions {
    /// Sort each player's words by text.
    pub alphabetize: bool,
    /// Comma-separated words instead of a bullet list.
    pub one_line: bool,
    /// Nest words under their originating wordpack.
    pub group_by_wordpack: bool,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            alphabetize: false,
            one_line: true,
            group_by_wordpack: false,
        }
    }
}

/// Render `result` as Markdown.
pub fn render_markdown(result: &GenerationResult, options: &RenderOptions) -> String {
    let mut output = String::new();
    let with_headers = result.len() > 1;

    for player in &result.players {
        let mut words: Vec<&GeneratedWord> = player.words.iter().collect();
        if options.alphabetize {
            words.sort_by(|a, b| a.word.cmp(&b.word));
        }
        if with_headers {
            output.push_str(&format!("### {}\n", player.name));
        }

        if options.group_by_wordpack {
            let mut grouped: BTreeMap<&str, Vec<&str>> = BTreeMap::new();
            for word in &words {
                grouped
                    .entry(word.wordpack_origin.as_str())
                    .or_default()
                    .push(word.word.as_str());
            }
            let sections: Vec<String> = grouped
                .iter()
                .map(|(wordpack, list)| {
                    format!("* {wordpack}:\n{}", indent(&render_list(list, true, options), "  "))
                })
                .collect();
            output.push_str(&sections.join("\n"));
        } else {
            let list: Vec<&str> = words.iter().map(|w| w.word.as_str()).collect();
            output.push_str(&render_list(&list, false, options));
        }
        output.push('\n');
    }

    output
}

fn render_list(words: &[&str], bulleted: bool, options: &RenderOptions) -> String {
    if words.is_empty() {
        String::new()
    } else if options.one_line {
        format!("{}{}", if bulleted { "* " } else { "" }, words.join(", "))
    } else {
        words
            .iter()
            .map(|w| format!("* {w}"))
            .collect::<Vec<_>>()
            .join("\n")
    }
}

fn indent(text: &str, prefix: &str) -> String {
    text.lines()
        .map(|line| format!("{prefix}{line}"))
        .collect::<Vec<_>>()
        .join("\n")
}
