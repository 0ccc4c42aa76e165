//! Recent-files list rendering and open requests.

use std::rc::Rc;

use crate::platform::{HostChannel, RecentFilesView};
use crate::protocol::{FileDescriptor, RecentFilesList, Signal};

/// Rebuilds the recent-files list from whatever the host supplies.
///
/// Each update discards the previous entries and their click handlers. No
/// sorting, de-duplication, or path validation happens here.
pub struct RecentFilesRenderer<L, H> {
    view: L,
    host: Rc<H>,
    files: RecentFilesList,
}

impl<L, H> RecentFilesRenderer<L, H>
where
    L: RecentFilesView,
    H: HostChannel + 'static,
{
    pub fn new(view: L, host: Rc<H>) -> Self {
        Self {
            view,
            host,
            files: Vec::new(),
        }
    }

    pub fn update(&mut self, files: RecentFilesList) {
        self.view.clear();

        for file in &files {
            let host = Rc::clone(&self.host);
            let path = file.path.clone();
            self.view.push_entry(
                &file.name,
                Box::new(move || {
                    host.emit(&Signal::OpenFile { path: path.clone() });
                }),
            );
        }

        tracing::debug!(count = files.len(), "recent files rendered");
        self.files = files;
    }

    /// Descriptors backing the currently rendered entries.
    pub fn files(&self) -> &[FileDescriptor] {
        &self.files
    }

    pub fn view(&self) -> &L {
        &self.view
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::{FakeRecentList, RecordingHost, SentMessage};

    fn renderer() -> (RecentFilesRenderer<FakeRecentList, RecordingHost>, Rc<RecordingHost>) {
        let host = Rc::new(RecordingHost::new());
        (
            RecentFilesRenderer::new(FakeRecentList::default(), Rc::clone(&host)),
            host,
        )
    }

    fn two_files() -> RecentFilesList {
        vec![
            FileDescriptor::new("a.md", "/a.md"),
            FileDescriptor::new("b.md", "/b.md"),
        ]
    }

    #[test]
    fn empty_update_clears_the_list() {
        let (mut recent, _host) = renderer();
        recent.update(two_files());
        recent.update(Vec::new());

        assert!(recent.view().is_empty());
        assert!(recent.files().is_empty());
    }

    #[test]
    fn entries_follow_host_order() {
        let (mut recent, host) = renderer();
        recent.update(two_files());

        assert_eq!(recent.view().labels(), vec!["a.md", "b.md"]);
        assert!(host.sent().is_empty());
    }

    #[test]
    fn click_requests_open_with_the_verbatim_path() {
        let (mut recent, host) = renderer();
        recent.update(two_files());

        recent.view().click(0);

        assert_eq!(
            host.sent(),
            vec![SentMessage {
                name: "openFile".to_string(),
                payload: Some("/a.md".to_string()),
            }]
        );
    }

    #[test]
    fn same_list_twice_renders_the_same_entries() {
        let (mut recent, host) = renderer();
        recent.update(two_files());
        recent.update(two_files());

        assert_eq!(recent.view().labels(), vec!["a.md", "b.md"]);
        assert_eq!(recent.view().clears, 2);

        recent.view().click(1);
        assert_eq!(host.count("openFile"), 1);
    }

    #[test]
    fn duplicates_and_odd_paths_pass_through_untouched() {
        let (mut recent, host) = renderer();
        let odd = "relative/../weird path?.md";
        recent.update(vec![
            FileDescriptor::new("x.md", odd),
            FileDescriptor::new("x.md", odd),
        ]);

        assert_eq!(recent.view().len(), 2);
        recent.view().click(1);
        assert_eq!(host.sent()[0].payload.as_deref(), Some(odd));
    }

    #[test]
    fn click_without_open_handler_is_dropped() {
        let host = Rc::new(RecordingHost::without_handlers(&["openFile"]));
        let mut recent = RecentFilesRenderer::new(FakeRecentList::default(), Rc::clone(&host));
        recent.update(two_files());

        recent.view().click(0);
        assert!(host.sent().is_empty());
    }
}
