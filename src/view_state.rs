use crate::content::{Content, WorkItem};

/// Which project is expanded on the classic page. `None` means the grid.
///
/// The selection stores the id rather than a reference so it never borrows
/// from the content table; the current item is resolved by lookup on read.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WorkSelection {
    open_id: Option<String>,
}

impl WorkSelection {
    pub fn new() -> Self {
        Self::default()
    }

    /// Expand the project with the given id. An id that doesn't resolve to a
    /// work item leaves the derived view on the grid rather than erroring -
    /// ids only ever come from rendering the same collection.
    pub fn open_work(&mut self, id: impl Into<String>) {
        self.open_id = Some(id.into());
    }

    /// Collapse back to the grid. No-op when already there.
    pub fn close_work(&mut self) {
        self.open_id = None;
    }

    pub fn open_id(&self) -> Option<&str> {
        self.open_id.as_deref()
    }

    /// The currently expanded work item, recomputed from the collection on
    /// every read.
    pub fn current<'a>(&self, content: &'a Content) -> Option<&'a WorkItem> {
        self.open_id
            .as_deref()
            .and_then(|id| content.work_by_id(id))
    }
}

/// The panes of the terminal-themed page. A closed enum so rendering can
/// match exhaustively - there is no state where zero or two panes show.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum Pane {
    #[default]
    Home,
    Projects,
    Certificates,
    Experience,
}

impl Pane {
    pub fn all() -> [Pane; 4] {
        [Pane::Home, Pane::Projects, Pane::Certificates, Pane::Experience]
    }

    pub fn label(&self) -> &'static str {
        match self {
            Pane::Home => "HOME",
            Pane::Projects => "PROJECTS",
            Pane::Certificates => "CERTIFICATES",
            Pane::Experience => "EXPERIENCE",
        }
    }

    /// The fake DOS prompt path shown above the active pane.
    pub fn prompt_path(&self) -> String {
        match self {
            Pane::Home => r"ROOT\PORTFOLIO".to_string(),
            other => format!(r"ROOT\PORTFOLIO\{}", other.label()),
        }
    }
}

/// Navigation state for the terminal page.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PaneNav {
    pane: Pane,
}

impl PaneNav {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn navigate_to(&mut self, pane: Pane) {
        self.pane = pane;
    }

    pub fn navigate_home(&mut self) {
        self.pane = Pane::Home;
    }

    pub fn pane(&self) -> Pane {
        self.pane
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::site_content;

    #[test]
    fn test_open_and_close_work() {
        let content = site_content();
        let mut selection = WorkSelection::new();
        assert!(selection.current(content).is_none());

        selection.open_work("sales-forecast");
        assert_eq!(
            selection.current(content).map(|w| w.id),
            Some("sales-forecast")
        );

        selection.close_work();
        assert!(selection.current(content).is_none());
    }

    #[test]
    fn test_every_work_id_resolves() {
        let content = site_content();
        let mut selection = WorkSelection::new();
        for work in &content.works {
            selection.open_work(work.id);
            assert_eq!(selection.current(content).map(|w| w.id), Some(work.id));
        }
    }

    #[test]
    fn test_unknown_id_falls_back_to_grid() {
        let content = site_content();
        let mut selection = WorkSelection::new();
        selection.open_work("not-a-real-project");
        // Silent fallback, not an error
        assert!(selection.current(content).is_none());
        assert_eq!(selection.open_id(), Some("not-a-real-project"));
    }

    #[test]
    fn test_close_is_idempotent() {
        let mut selection = WorkSelection::new();
        selection.close_work();
        assert_eq!(selection, WorkSelection::new());

        selection.open_work("bi-kpi-hub");
        let opened = selection.clone();
        selection.open_work("bi-kpi-hub");
        assert_eq!(selection, opened);
    }

    #[test]
    fn test_pane_navigation() {
        let mut nav = PaneNav::new();
        assert_eq!(nav.pane(), Pane::Home);

        nav.navigate_to(Pane::Certificates);
        assert_eq!(nav.pane(), Pane::Certificates);
        assert_eq!(nav.pane().label(), "CERTIFICATES");

        nav.navigate_home();
        assert_eq!(nav.pane(), Pane::Home);
        assert_eq!(nav.pane().label(), "HOME");
    }

    #[test]
    fn test_prompt_paths() {
        assert_eq!(Pane::Home.prompt_path(), r"ROOT\PORTFOLIO");
        assert_eq!(Pane::Projects.prompt_path(), r"ROOT\PORTFOLIO\PROJECTS");
        assert_eq!(
            Pane::Certificates.prompt_path(),
            r"ROOT\PORTFOLIO\CERTIFICATES"
        );
        assert_eq!(Pane::Experience.prompt_path(), r"ROOT\PORTFOLIO\EXPERIENCE");
    }

    #[test]
    fn test_pane_labels_are_distinct() {
        let labels: Vec<_> = Pane::all().iter().map(|p| p.label()).collect();
        for (i, label) in labels.iter().enumerate() {
            assert!(!labels[..i].contains(label));
        }
    }
}
