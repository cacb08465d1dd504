//! LaTeX array-block to HTML table conversion.
//!
//! Question bodies scraped from the source site embed tabular data as raw
//! `\begin{array}{...} ... \end{array}` markup. The math renderer used for
//! display does not typeset these blocks, so they are rewritten into real
//! HTML tables ahead of time. Everything outside a matched block — in
//! particular inline and display math (`$...$`, `\(...\)`, `$$...$$`,
//! `\[...\]`) — passes through byte-for-byte, since the renderer picks
//! those up later.
//!
//! This is string-level rewriting, not an HTML or TeX parse: the pattern
//! set is narrow and fixed, and a full parse would change behavior on the
//! malformed markup that occurs in scraped data.

use regex::Regex;
use std::sync::LazyLock;

use crate::utils::LATEX_TABLE_CLASS;

// Compile regex patterns once at first use
// These are hardcoded patterns that will never fail to compile

// Matches one whole array block, non-greedily, so the match ends at the
// first `\end{array}`. The column spec `{...}` is consumed and ignored;
// it only carries alignment information that the HTML table does not
// reproduce. An opener with no closer never matches and survives as-is.
static ARRAY_BLOCK_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?s)\\begin\{array\}\{[^}]*\}(.*?)\\end\{array\}")
        .expect("ARRAY_BLOCK_RE: hardcoded regex is valid")
});

static TEXTBF_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\\textbf\{([^}]*)\}").expect("TEXTBF_RE: hardcoded regex is valid")
});

static TEXT_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\\text\{([^}]*)\}").expect("TEXT_RE: hardcoded regex is valid")
});

/// Replace every `\begin{array}...\end{array}` block with an HTML table.
///
/// Total over all inputs: with no matching block the input is returned
/// unchanged, and no input can make this function fail.
#[must_use]
pub fn convert_latex_tables(html: &str) -> String {
    if !html.contains(r"\begin{array}") {
        return html.to_string();
    }

    ARRAY_BLOCK_RE
        .replace_all(html, |caps: &regex::Captures| build_table(&caps[1]))
        .into_owned()
}

/// Rebuild one block body as table markup.
fn build_table(body: &str) -> String {
    let body = rewrite_inline_markup(body);

    let rows: String = body
        .trim()
        .split('\n')
        .filter(|row| !row.trim().is_empty())
        .map(|row| {
            let cells: String = row
                .split('&')
                .map(|cell| format!("<td>{}</td>", cell.trim()))
                .collect();
            format!("<tr>{cells}</tr>")
        })
        .collect();

    format!(r#"<table class="{LATEX_TABLE_CLASS}">{rows}</table>"#)
}

/// Apply the inline-markup substitutions to a block body.
///
/// Order matters and mirrors the conversion contract: bold, then `\text`,
/// then the non-breaking-space entity, then row separators, then `\hline`
/// removal.
fn rewrite_inline_markup(body: &str) -> String {
    let body = TEXTBF_RE.replace_all(body, "<b>$1</b>");
    let body = TEXT_RE.replace_all(&body, "$1");
    let body = body.replace("&nbsp;", " ");
    let body = body.replace(r"\\", "\n");
    body.replace(r"\hline", "")
}
