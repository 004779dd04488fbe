// ABOUTME: Content shown inside the layout's leaves.
// ABOUTME: Placeholder panes report their size; the results pane shows streamed rows.

use moto_layout::Pane;
use moto_render::{fit, join_vertical, place_center, table, truncate, Theme};

/// News from the results fetch, delivered to every pane
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PaneUpdate {
    Row(Vec<String>),
    Finished,
    Failed(String),
}

#[derive(Debug)]
pub enum AppPane {
    Placeholder(PlaceholderPane),
    Results(ResultsPane),
}

impl AppPane {
    pub fn placeholder(name: &'static str) -> Self {
        AppPane::Placeholder(PlaceholderPane {
            name,
            width: 0,
            height: 0,
        })
    }

    pub fn results(headers: Vec<String>) -> Self {
        AppPane::Results(ResultsPane::new(headers))
    }

    pub fn name(&self) -> &str {
        match self {
            AppPane::Placeholder(pane) => pane.name,
            AppPane::Results(_) => "results",
        }
    }

    pub fn update(&mut self, update: &PaneUpdate) {
        if let AppPane::Results(pane) = self {
            pane.update(update);
        }
    }
}

impl Pane for AppPane {
    fn resize(&mut self, width: u16, height: u16) {
        match self {
            AppPane::Placeholder(pane) => {
                pane.width = width;
                pane.height = height;
            }
            AppPane::Results(pane) => {
                pane.width = width;
                pane.height = height;
            }
        }
    }

    fn render(&self, _theme: &Theme) -> String {
        match self {
            AppPane::Placeholder(pane) => pane.render(),
            AppPane::Results(pane) => pane.render(),
        }
    }

    // Focus is shown by the border the layout draws.
    fn focus(&mut self, _active: bool) {}

    fn title(&self) -> Option<&str> {
        Some(self.name())
    }
}

#[derive(Debug)]
pub struct PlaceholderPane {
    name: &'static str,
    width: u16,
    height: u16,
}

impl PlaceholderPane {
    fn render(&self) -> String {
        let label = format!("{} ({}x{})", self.name, self.width, self.height);
        place_center(self.width.into(), self.height.into(), &label)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
enum FetchState {
    Loading,
    Finished,
    Failed(String),
}

#[derive(Debug)]
pub struct ResultsPane {
    headers: Vec<String>,
    rows: Vec<Vec<String>>,
    state: FetchState,
    width: u16,
    height: u16,
}

impl ResultsPane {
    fn new(headers: Vec<String>) -> Self {
        Self {
            headers,
            rows: Vec::new(),
            state: FetchState::Loading,
            width: 0,
            height: 0,
        }
    }

    fn update(&mut self, update: &PaneUpdate) {
        match update {
            PaneUpdate::Row(row) => self.rows.push(row.clone()),
            PaneUpdate::Finished => self.state = FetchState::Finished,
            PaneUpdate::Failed(message) => self.state = FetchState::Failed(message.clone()),
        }
    }

    fn footer(&self) -> String {
        let count = match self.rows.len() {
            1 => "1 row".to_string(),
            n => format!("{n} rows"),
        };
        match &self.state {
            FetchState::Loading => format!("{count} (loading…)"),
            FetchState::Finished => count,
            FetchState::Failed(message) => format!("{count} (failed: {message})"),
        }
    }

    fn render(&self) -> String {
        let (width, height) = (usize::from(self.width), usize::from(self.height));
        if self.rows.is_empty() {
            let message = match &self.state {
                FetchState::Loading => "loading…".to_string(),
                FetchState::Finished => "no results".to_string(),
                FetchState::Failed(message) => format!("failed: {message}"),
            };
            return place_center(width, height, &message);
        }
        if height < 2 {
            return fit(&self.footer(), width, height);
        }

        // Header and rule take two lines, the footer one.
        let visible = height.saturating_sub(3).min(self.rows.len());
        let body = fit(&table(&self.headers, &self.rows[..visible]), width, height - 1);
        join_vertical(&[&body, &truncate(&self.footer(), width)])
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use moto_render::{block_height, block_width};

    fn row(price: &str, city: &str) -> PaneUpdate {
        PaneUpdate::Row(vec![price.to_string(), city.to_string()])
    }

    fn sized(mut pane: AppPane, width: u16, height: u16) -> AppPane {
        pane.resize(width, height);
        pane
    }

    fn results() -> AppPane {
        sized(
            AppPane::results(vec!["PRICE".to_string(), "CITY".to_string()]),
            30,
            6,
        )
    }

    #[test]
    fn placeholder_shows_its_size() {
        let pane = sized(AppPane::placeholder("explorer"), 30, 5);
        let out = pane.render(&Theme::default());
        assert_eq!(block_height(&out), 5);
        assert_eq!(block_width(&out), 30);
        assert_eq!(out.lines().nth(2).map(str::trim), Some("explorer (30x5)"));
        assert_eq!(pane.title(), Some("explorer"));
    }

    #[test]
    fn results_start_loading() {
        let pane = results();
        assert!(pane.render(&Theme::default()).contains("loading…"));
    }

    #[test]
    fn rows_render_as_a_table_with_footer() {
        let mut pane = results();
        pane.update(&row("300000", "FOLKESTONE"));
        pane.update(&row("305000", "FOLKESTONE"));
        pane.update(&PaneUpdate::Finished);

        let out = pane.render(&Theme::default());
        let lines: Vec<_> = out.lines().map(str::trim_end).collect();
        assert_eq!(lines.len(), 6);
        assert_eq!(lines[0], "PRICE  │ CITY");
        assert_eq!(lines[2], "300000 │ FOLKESTONE");
        assert_eq!(lines[5], "2 rows");
    }

    #[test]
    fn rows_beyond_the_pane_are_cut() {
        let mut pane = results();
        for n in 0..10 {
            pane.update(&row(&n.to_string(), "DOVER"));
        }
        let out = pane.render(&Theme::default());
        assert_eq!(block_height(&out), 6);
        assert!(out.contains("10 rows (loading…)"));
        let prices: Vec<_> = out
            .lines()
            .skip(2)
            .take(3)
            .map(|l| l.split('│').next().unwrap_or("").trim())
            .collect();
        assert_eq!(prices, vec!["0", "1", "2"]);
    }

    #[test]
    fn failure_is_reported() {
        let mut pane = results();
        pane.update(&PaneUpdate::Failed("no such file".to_string()));
        assert!(pane.render(&Theme::default()).contains("failed: no such file"));

        pane.update(&row("5", "DOVER"));
        assert!(pane
            .render(&Theme::default())
            .contains("1 row (failed: no such file)"));
    }

    #[test]
    fn escape_sequences_in_cells_never_reach_the_frame() {
        let mut pane = results();
        pane.update(&row("\x1b[2J300000", "DOVER\x1b]0;x\x07"));
        pane.update(&PaneUpdate::Finished);
        let out = pane.render(&Theme::default());
        assert!(!out.contains('\x1b'));
        assert!(!out.contains('\x07'));
        assert!(out.contains("DOVER"));
    }

    #[test]
    fn placeholders_ignore_updates() {
        let mut pane = sized(AppPane::placeholder("preview"), 20, 3);
        let before = pane.render(&Theme::default());
        pane.update(&row("1", "A"));
        assert_eq!(pane.render(&Theme::default()), before);
    }
}
