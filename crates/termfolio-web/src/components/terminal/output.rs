use leptos::prelude::*;
use termfolio::{LineKind, ListEntry, OutputLine, OutputLineData, TextStyle};

stylance::import_crate_style!(css, "src/components/terminal/output.module.css");

/// Get CSS class for a TextStyle
fn style_class(style: TextStyle) -> &'static str {
    match style {
        TextStyle::Directory => css::textBlue,
        TextStyle::File => css::textFg,
        TextStyle::Link => css::textCyan,
    }
}

/// Colour for single-line messages.
fn kind_class(kind: LineKind) -> &'static str {
    match kind {
        LineKind::Info => css::textBlue,
        LineKind::Success => css::textGreen,
        LineKind::Error => css::textRed,
        LineKind::Warning => css::textOrange,
        LineKind::Matrix => css::matrix,
        LineKind::Command | LineKind::Text => css::textFg,
    }
}

fn text_line(kind: LineKind, text: String) -> AnyView {
    view! { <div class=format!("{} {}", css::line, kind_class(kind))>{text}</div> }.into_any()
}

fn listing_entry(entry: ListEntry) -> impl IntoView {
    let class = match entry.style {
        TextStyle::Directory => format!("{} {}", style_class(entry.style), css::fontBold),
        style => style_class(style).to_string(),
    };
    let name = entry.display_name().into_owned();
    view! {
        <span class=class title=entry.description>{name}</span>
    }
}

#[component]
pub fn Output(line: OutputLine) -> impl IntoView {
    let kind = line.kind();
    match line.data {
        OutputLineData::Command { prompt, input } => view! {
            <div class=css::command>
                <span class=css::textGreen>{prompt}</span>
                <span class=css::textDim>"$ "</span>
                <span class=css::textFg>{input}</span>
            </div>
        }
        .into_any(),
        OutputLineData::Text(text) => view! {
            <pre class=format!("{} {}", css::line, css::textFg)>{text}</pre>
        }
        .into_any(),
        OutputLineData::Info(text)
        | OutputLineData::Success(text)
        | OutputLineData::Error(text)
        | OutputLineData::Warning(text)
        | OutputLineData::Matrix(text) => text_line(kind, text),
        OutputLineData::Listing(entries) => view! {
            <div class=css::listing>
                {entries.into_iter().map(listing_entry).collect_view()}
            </div>
        }
        .into_any(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_info_and_warning_are_distinct() {
        assert_eq!(kind_class(LineKind::Info), css::textBlue);
        assert_eq!(kind_class(LineKind::Warning), css::textOrange);
        assert_ne!(kind_class(LineKind::Info), kind_class(LineKind::Warning));
    }
}
