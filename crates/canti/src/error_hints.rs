use anyhow::Error;

pub(crate) fn format(err: &Error) -> String {
    let mut out = format!("Error: {err:#}");
    let hints = suggestions(err);
    if !hints.is_empty() {
        out.push_str("\n\nHints:\n");
        for hint in hints {
            out.push_str("- ");
            out.push_str(&hint);
            out.push('\n');
        }
    }
    out
}

fn suggestions(err: &Error) -> Vec<String> {
    let chain: Vec<String> = err.chain().map(|e| e.to_string()).collect();
    let haystack = chain.join(" | ").to_ascii_lowercase();
    let mut out: Vec<String> = Vec::new();

    if haystack.contains("[canto_not_found]") {
        push_hint(&mut out, "Canto numbers range from 1 to 34.");
    }

    if haystack.contains("[invalid_argument]") {
        push_hint(
            &mut out,
            "Pass the canto as a whole number, e.g. `canti count 1`.",
        );
    }

    if haystack.contains("failed to parse configuration") {
        push_hint(
            &mut out,
            "Check `canti.toml` syntax and key names ([corpus], [output], [view.<name>]).",
        );
    }

    if haystack.contains("unknown profile") {
        push_hint(
            &mut out,
            "Define the profile as `[view.<name>]` in `canti.toml`.",
        );
    }

    if haystack.contains("invalid output format") {
        push_hint(&mut out, "Supported output formats are `text` and `json`.");
    }

    out
}

fn push_hint(out: &mut Vec<String>, hint: &str) {
    if !out.iter().any(|h| h == hint) {
        out.push(hint.to_string());
    }
}
