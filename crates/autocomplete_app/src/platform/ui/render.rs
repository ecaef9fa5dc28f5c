use autocomplete_core::{AutoCompleteView, ResultRow, Segment, LOADING_TEXT};

pub const TITLE: &str = "AutoComplete Component";

const EMPHASIS_ON: &str = "\x1b[1;7m";
const EMPHASIS_OFF: &str = "\x1b[0m";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RenderStyle {
    /// Emphasize matches with reverse video instead of brackets.
    pub ansi: bool,
}

/// Paints the view as terminal lines, top to bottom.
pub fn render(view: &AutoCompleteView, style: RenderStyle) -> Vec<String> {
    let mut lines = Vec::with_capacity(view.rows.len() + 3);
    lines.push(format!("{TITLE} [{}]", view.placeholder));
    if view.is_loading {
        lines.push(LOADING_TEXT.to_string());
    }
    lines.extend(view.rows.iter().map(|row| format_row(row, style)));
    if view.error_visible {
        lines.push(view.error_message.clone());
    }
    lines
}

fn format_row(row: &ResultRow, style: RenderStyle) -> String {
    let mut line = String::from("  ");
    for segment in &row.segments {
        push_segment(&mut line, segment, style);
    }
    line
}

fn push_segment(line: &mut String, segment: &Segment, style: RenderStyle) {
    match (segment.emphasized, style.ansi) {
        (false, _) => line.push_str(&segment.text),
        (true, true) => {
            line.push_str(EMPHASIS_ON);
            line.push_str(&segment.text);
            line.push_str(EMPHASIS_OFF);
        }
        (true, false) => {
            line.push('[');
            line.push_str(&segment.text);
            line.push(']');
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use autocomplete_core::highlight;

    const PLAIN: RenderStyle = RenderStyle { ansi: false };

    fn row(key: &str, query: &str) -> ResultRow {
        ResultRow {
            key: key.to_string(),
            segments: highlight(key, query),
        }
    }

    #[test]
    fn rows_show_bracketed_matches() {
        let view = AutoCompleteView {
            placeholder: "Enter Name".to_string(),
            rows: vec![row("Annie", "ann"), row("Hannah", "ann")],
            ..AutoCompleteView::default()
        };

        assert_eq!(
            render(&view, PLAIN),
            vec![
                "AutoComplete Component [Enter Name]".to_string(),
                "  [Ann]ie".to_string(),
                "  H[ann]ah".to_string(),
            ]
        );
    }

    #[test]
    fn loading_and_error_lines() {
        let view = AutoCompleteView {
            placeholder: "search…".to_string(),
            is_loading: true,
            error_visible: true,
            error_message: "API call failed with error: boom".to_string(),
            ..AutoCompleteView::default()
        };

        let lines = render(&view, PLAIN);
        assert_eq!(lines[1], "Loading ......");
        assert_eq!(lines[2], "API call failed with error: boom");
    }

    #[test]
    fn hidden_error_is_not_painted() {
        let view = AutoCompleteView {
            error_message: "stale".to_string(),
            error_visible: false,
            ..AutoCompleteView::default()
        };

        assert_eq!(render(&view, PLAIN).len(), 1);
    }

    #[test]
    fn ansi_style_wraps_matches() {
        let view = AutoCompleteView {
            rows: vec![row("Sam", "s")],
            ..AutoCompleteView::default()
        };

        let lines = render(&view, RenderStyle { ansi: true });
        assert_eq!(lines[1], "  \x1b[1;7mS\x1b[0mam");
    }
}
